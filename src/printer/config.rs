//! # Printer Configuration
//!
//! Where the printer lives and how fast to talk to it.
//!
//! ## Usage
//!
//! ```
//! use printml::printer::PrinterConfig;
//!
//! let config = PrinterConfig::default().with_device("/dev/rfcomm0");
//! assert_eq!(config.baud_rate, 19200);
//! ```

use std::time::Duration;

/// Serial device used by the Raspberry Pi's built-in UART.
pub const DEFAULT_DEVICE: &str = "/dev/ttyAMA0";

/// Baud rate of the common TTL receipt printer mechanisms.
pub const DEFAULT_BAUD_RATE: u32 = 19200;

/// Lines fed after a `<printout>` so the receipt clears the tear bar.
pub const TEAR_OFF_LINES: u8 = 4;

/// # Printer Configuration
///
/// | Field | Default | Meaning |
/// |-------|---------|---------|
/// | `device_path` | `/dev/ttyAMA0` | Serial device (any writable file works) |
/// | `baud_rate` | 19200 | Line speed |
/// | `chunk_size` | 256 | Bytes per write |
/// | `chunk_delay` | 5ms | Pause after each chunk |
///
/// At 19200 baud one 256-byte chunk takes ~133ms on the wire, so the
/// pause only matters for printers that fall behind on dense formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrinterConfig {
    pub device_path: String,
    pub baud_rate: u32,
    pub chunk_size: usize,
    pub chunk_delay: Duration,
}

impl PrinterConfig {
    /// Replace the device path.
    pub fn with_device(mut self, path: impl Into<String>) -> Self {
        self.device_path = path.into();
        self
    }

    /// Replace the baud rate.
    pub fn with_baud_rate(mut self, baud: u32) -> Self {
        self.baud_rate = baud;
        self
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            device_path: DEFAULT_DEVICE.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            chunk_size: 256,
            chunk_delay: Duration::from_millis(5),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PrinterConfig::default();
        assert_eq!(config.device_path, "/dev/ttyAMA0");
        assert_eq!(config.baud_rate, 19200);
        assert_eq!(config.chunk_size, 256);
    }

    #[test]
    fn test_builders() {
        let config = PrinterConfig::default()
            .with_device("/dev/rfcomm0")
            .with_baud_rate(115200);
        assert_eq!(config.device_path, "/dev/rfcomm0");
        assert_eq!(config.baud_rate, 115200);
    }
}

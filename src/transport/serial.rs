//! # Serial Transport
//!
//! Writes printer bytes to a serial TTY such as the Raspberry Pi UART
//! (`/dev/ttyAMA0`) or a Bluetooth RFCOMM binding (`/dev/rfcomm0`).
//!
//! ## TTY Configuration
//!
//! The device is opened in raw mode so binary data passes through unchanged:
//!
//! - **No input processing**: IGNBRK, BRKINT, PARMRK, ISTRIP, ... cleared
//! - **No output processing**: OPOST cleared (no CR/LF translation)
//! - **8N1**: CS8, no parity
//! - **No echo, non-canonical**: ECHO, ECHONL, ICANON, ISIG, IEXTEN cleared
//! - **Baud rate**: set on both directions
//!
//! Paths that are not TTYs (regular files, `/dev/null`) are written as-is,
//! which makes any file usable as a dry-run sink.
//!
//! ## Chunked Writes
//!
//! Writes are split into chunks with a short pause in between so slow
//! printers can keep up without hardware flow control.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::os::unix::io::AsRawFd;
use std::path::Path;
use std::thread;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::printer::PrinterConfig;

/// # Serial Printer Transport
///
/// ```no_run
/// use std::io::Write;
/// use printml::transport::SerialTransport;
///
/// let mut transport = SerialTransport::open("/dev/ttyAMA0", 19200)?;
/// transport.write_all(&printml::protocol::commands::init())?;
/// transport.flush()?;
///
/// # Ok::<(), printml::Error>(())
/// ```
pub struct SerialTransport {
    file: File,
    chunk_size: usize,
    chunk_delay: Duration,
}

impl SerialTransport {
    /// Open a serial device and configure it for raw output at `baud`.
    ///
    /// ## Errors
    ///
    /// - `Error::Device` if the device can't be opened or configured
    /// - `Error::Config` if `baud` is not a standard rate
    pub fn open<P: AsRef<Path>>(device: P, baud: u32) -> Result<Self> {
        let path = device.as_ref();
        let speed = baud_to_speed(baud)?;

        let file = OpenOptions::new()
            .write(true)
            .open(path)
            .map_err(|e| Error::Device(format!("Failed to open {}: {}", path.display(), e)))?;

        let fd = file.as_raw_fd();
        if unsafe { libc::isatty(fd) } == 1 {
            configure_tty_raw(fd, speed)?;
        } else {
            tracing::debug!(path = %path.display(), "not a TTY, skipping line configuration");
        }

        let defaults = PrinterConfig::default();
        Ok(Self {
            file,
            chunk_size: defaults.chunk_size,
            chunk_delay: defaults.chunk_delay,
        })
    }

    /// Open using the device path and baud rate of a printer configuration.
    pub fn open_with(config: &PrinterConfig) -> Result<Self> {
        let mut transport = Self::open(&config.device_path, config.baud_rate)?;
        transport.chunk_size = config.chunk_size.max(1);
        transport.chunk_delay = config.chunk_delay;
        Ok(transport)
    }

    /// Set the chunk size for writes. Default is 256 bytes.
    pub fn set_chunk_size(&mut self, size: usize) {
        self.chunk_size = size.max(1);
    }

    /// Set the delay after each chunk. Default is 5ms.
    pub fn set_chunk_delay(&mut self, delay: Duration) {
        self.chunk_delay = delay;
    }
}

impl Write for SerialTransport {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let end = buf.len().min(self.chunk_size);
        let written = self.file.write(&buf[..end])?;
        if written > 0 && !self.chunk_delay.is_zero() {
            thread::sleep(self.chunk_delay);
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

/// Map a numeric baud rate to the termios speed constant.
fn baud_to_speed(baud: u32) -> Result<libc::speed_t> {
    let speed = match baud {
        9600 => libc::B9600,
        19200 => libc::B19200,
        38400 => libc::B38400,
        57600 => libc::B57600,
        115200 => libc::B115200,
        other => {
            return Err(Error::Config(format!(
                "Unsupported baud rate {} (expected 9600, 19200, 38400, 57600 or 115200)",
                other
            )));
        }
    };
    Ok(speed)
}

/// Configure a file descriptor for raw 8N1 output at the given speed.
///
/// IXON/IXOFF/IXANY must be off: 0x11 and 0x13 are valid parameter bytes
/// and would otherwise be swallowed as XON/XOFF.
fn configure_tty_raw(fd: i32, speed: libc::speed_t) -> Result<()> {
    use std::mem::MaybeUninit;

    let mut termios = MaybeUninit::uninit();
    let result = unsafe { libc::tcgetattr(fd, termios.as_mut_ptr()) };
    if result != 0 {
        return Err(Error::Device(format!(
            "tcgetattr failed: {}",
            io::Error::last_os_error()
        )));
    }
    let mut termios = unsafe { termios.assume_init() };

    termios.c_iflag &= !(libc::IGNBRK
        | libc::BRKINT
        | libc::PARMRK
        | libc::ISTRIP
        | libc::INLCR
        | libc::IGNCR
        | libc::ICRNL
        | libc::IXON
        | libc::IXOFF
        | libc::IXANY);
    termios.c_oflag &= !libc::OPOST;
    termios.c_lflag &= !(libc::ECHO | libc::ECHONL | libc::ICANON | libc::ISIG | libc::IEXTEN);
    termios.c_cflag &= !(libc::CSIZE | libc::PARENB);
    termios.c_cflag |= libc::CS8;

    let result = unsafe {
        libc::cfsetispeed(&mut termios, speed) | libc::cfsetospeed(&mut termios, speed)
    };
    if result != 0 {
        return Err(Error::Device(format!(
            "cfsetspeed failed: {}",
            io::Error::last_os_error()
        )));
    }

    let result = unsafe { libc::tcsetattr(fd, libc::TCSANOW, &termios) };
    if result != 0 {
        return Err(Error::Device(format!(
            "tcsetattr failed: {}",
            io::Error::last_os_error()
        )));
    }

    Ok(())
}

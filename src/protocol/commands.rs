//! # StarPRNT Control Commands
//!
//! Initialization, code page and paper feed commands for Star Micronics
//! thermal receipt printers.
//!
//! ## Escape Sequence Structure
//!
//! - Single byte: `SI`, `DC2` (see [`text`](super::text))
//! - Two bytes: `ESC @`, `ESC E`
//! - With parameters: `ESC a n`, `ESC GS t n`
//!
//! ## Reference
//!
//! Based on "StarPRNT Command Specifications Rev. 4.10"
//! by Star Micronics Co., Ltd.

// ============================================================================
// ESCAPE SEQUENCE CONSTANTS
// ============================================================================

/// ESC (Escape) - Command prefix byte
pub const ESC: u8 = 0x1B;

/// GS (Group Separator) - Extended command prefix, used as `ESC GS`
pub const GS: u8 = 0x1D;

// ============================================================================
// INITIALIZATION
// ============================================================================

/// # Initialize Printer (ESC @)
///
/// Resets formatting (bold, underline, invert, size, alignment, line
/// spacing) to the power-on defaults and clears the line buffer.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC @ |
/// | Hex     | 1B 40 |
///
/// ```
/// use printml::protocol::commands;
///
/// assert_eq!(commands::init(), vec![0x1B, 0x40]);
/// ```
#[inline]
pub fn init() -> Vec<u8> {
    vec![ESC, b'@']
}

/// Code page 437, the table [`super::cp437::encode`] targets.
pub const CODEPAGE_437: u8 = 1;

/// # Select Code Page (ESC GS t n)
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS t n |
/// | Hex     | 1B 1D 74 n |
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.2
#[inline]
pub fn codepage(n: u8) -> Vec<u8> {
    vec![ESC, GS, b't', n]
}

// ============================================================================
// PAPER FEED
// ============================================================================

/// # Feed Lines (ESC a n)
///
/// Prints the line buffer and feeds `n` lines at the current line spacing.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC a n |
/// | Hex     | 1B 61 n |
///
/// ```
/// use printml::protocol::commands;
///
/// assert_eq!(commands::feed_lines(4), vec![0x1B, 0x61, 4]);
/// ```
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.5
#[inline]
pub fn feed_lines(n: u8) -> Vec<u8> {
    vec![ESC, b'a', n]
}

/// # Micro Feed (ESC J n)
///
/// Feeds paper by `n` dot rows (1/4 mm units at 203 DPI), independent of the
/// current line spacing.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC J n |
/// | Hex     | 1B 4A n |
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.5
#[inline]
pub fn feed_rows(n: u8) -> Vec<u8> {
    vec![ESC, b'J', n]
}

/// Default line spacing, in dot rows, restored by `<lineheight/>`.
pub const DEFAULT_LINE_SPACING: u8 = 32;

/// Smallest spacing that still clears a 24-dot character row.
pub const MIN_LINE_SPACING: u8 = 24;

/// # Set Line Spacing (ESC 3 n)
///
/// Sets the amount fed by each line feed. Values below
/// [`MIN_LINE_SPACING`] are raised to it, since lines would overlap.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC 3 n |
/// | Hex     | 1B 33 n |
///
/// ```
/// use printml::protocol::commands;
///
/// assert_eq!(commands::line_spacing(40), vec![0x1B, 0x33, 40]);
/// assert_eq!(commands::line_spacing(10), vec![0x1B, 0x33, 24]);
/// ```
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.5
#[inline]
pub fn line_spacing(n: u8) -> Vec<u8> {
    vec![ESC, b'3', n.max(MIN_LINE_SPACING)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init() {
        assert_eq!(init(), vec![0x1B, 0x40]);
    }

    #[test]
    fn test_codepage() {
        assert_eq!(codepage(CODEPAGE_437), vec![0x1B, 0x1D, 0x74, 0x01]);
    }

    #[test]
    fn test_feed_lines() {
        assert_eq!(feed_lines(1), vec![0x1B, 0x61, 0x01]);
        assert_eq!(feed_lines(255), vec![0x1B, 0x61, 0xFF]);
    }

    #[test]
    fn test_feed_rows() {
        assert_eq!(feed_rows(0), vec![0x1B, 0x4A, 0x00]);
        assert_eq!(feed_rows(12), vec![0x1B, 0x4A, 0x0C]);
    }

    #[test]
    fn test_line_spacing_clamps_to_minimum() {
        assert_eq!(line_spacing(DEFAULT_LINE_SPACING), vec![0x1B, 0x33, 32]);
        assert_eq!(line_spacing(0), vec![0x1B, 0x33, MIN_LINE_SPACING]);
        assert_eq!(line_spacing(255), vec![0x1B, 0x33, 255]);
    }
}

//! # StarPRNT Text Styling Commands
//!
//! Byte builders for every text effect the markup can toggle.
//!
//! | Style | Command | Effect |
//! |-------|---------|--------|
//! | Alignment | ESC GS a n | Left / center / right |
//! | Bold | ESC E / ESC F | **Emphasized** text |
//! | Underline | ESC - n | Underlined text, n dots thick |
//! | Invert | ESC 4 / ESC 5 | White on black |
//! | Double Width | ESC W n | 2x horizontal size |
//! | Double Height | ESC h n | 2x vertical size |
//! | Size | ESC i n1 n2 | Height/width multipliers |
//! | Upside Down | SI / DC2 | 180° rotation |

use serde::Serialize;

use super::commands::{ESC, GS};

// ============================================================================
// TEXT ALIGNMENT
// ============================================================================

/// Text alignment options. The discriminant is the StarPRNT parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Alignment {
    #[default]
    Left = 0,
    Center = 1,
    Right = 2,
}

/// # Set Text Alignment (ESC GS a n)
///
/// Takes effect at the start of the next line.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC GS a n |
/// | Hex     | 1B 1D 61 n |
///
/// ```
/// use printml::protocol::text::{align, Alignment};
///
/// assert_eq!(align(Alignment::Center), vec![0x1B, 0x1D, 0x61, 0x01]);
/// ```
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.4
pub fn align(alignment: Alignment) -> Vec<u8> {
    vec![ESC, GS, b'a', alignment as u8]
}

// ============================================================================
// EMPHASIS
// ============================================================================

/// Enable bold (ESC E)
#[inline]
pub fn bold_on() -> Vec<u8> {
    vec![ESC, b'E']
}

/// Disable bold (ESC F)
#[inline]
pub fn bold_off() -> Vec<u8> {
    vec![ESC, b'F']
}

/// Thickest underline the mechanism supports.
pub const MAX_UNDERLINE_DOTS: u8 = 2;

/// # Set Underline Mode (ESC - n)
///
/// - `n = 0`: off
/// - `n = 1`: 1 dot thick
/// - `n = 2`: 2 dots thick
///
/// Thicknesses above [`MAX_UNDERLINE_DOTS`] are clamped.
///
/// ```
/// use printml::protocol::text::underline;
///
/// assert_eq!(underline(1), vec![0x1B, 0x2D, 0x01]);
/// assert_eq!(underline(9), vec![0x1B, 0x2D, 0x02]);
/// ```
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.3
pub fn underline(dots: u8) -> Vec<u8> {
    vec![ESC, b'-', dots.min(MAX_UNDERLINE_DOTS)]
}

/// Disable underline
#[inline]
pub fn underline_off() -> Vec<u8> {
    underline(0)
}

/// Enable white-on-black printing (ESC 4)
#[inline]
pub fn invert_on() -> Vec<u8> {
    vec![ESC, b'4']
}

/// Disable white-on-black printing (ESC 5)
#[inline]
pub fn invert_off() -> Vec<u8> {
    vec![ESC, b'5']
}

// ============================================================================
// CHARACTER SIZE
// ============================================================================

/// # Set Character Size (ESC i n1 n2)
///
/// `n1` is the vertical and `n2` the horizontal expansion, 0-7 for 1x-8x.
///
/// | Format  | Bytes |
/// |---------|-------|
/// | ASCII   | ESC i n1 n2 |
/// | Hex     | 1B 69 n1 n2 |
///
/// StarPRNT Command Spec Rev 4.10, Section 2.3.3
pub fn size(height_mult: u8, width_mult: u8) -> Vec<u8> {
    vec![ESC, b'i', height_mult.min(7), width_mult.min(7)]
}

/// Double width mode (ESC W n)
#[inline]
pub fn double_width(enabled: bool) -> Vec<u8> {
    vec![ESC, b'W', enabled as u8]
}

/// Double height mode (ESC h n)
#[inline]
pub fn double_height(enabled: bool) -> Vec<u8> {
    vec![ESC, b'h', enabled as u8]
}

// ============================================================================
// UPSIDE-DOWN MODE
// ============================================================================

/// SI (Shift In) starts upside-down printing
const SI: u8 = 0x0F;

/// DC2 (Device Control 2) cancels upside-down printing
const DC2: u8 = 0x12;

/// Enable 180° rotated printing (SI)
#[inline]
pub fn upside_down_on() -> Vec<u8> {
    vec![SI]
}

/// Disable 180° rotated printing (DC2)
#[inline]
pub fn upside_down_off() -> Vec<u8> {
    vec![DC2]
}

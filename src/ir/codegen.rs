//! # Code Generation
//!
//! Converts IR ops to StarPRNT protocol bytes.

use super::ops::{Op, Program, Underline};
use crate::protocol::{commands, cp437, text};

impl Op {
    /// Encode a single op as StarPRNT bytes.
    ///
    /// `Offline` and `SetStrike` encode to nothing: going offline is a
    /// session change handled by the device, and StarPRNT has no
    /// strike-through mode.
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            // ===== Session =====
            Op::Online => {
                let mut out = commands::init();
                out.extend(commands::codepage(commands::CODEPAGE_437));
                out
            }
            Op::Offline => Vec::new(),

            // ===== Paper =====
            Op::Feed(lines) => commands::feed_lines(*lines),
            Op::FeedRows(rows) => commands::feed_rows(*rows),

            // ===== Style Changes =====
            Op::Justify(alignment) => text::align(*alignment),
            Op::SetBold(true) => text::bold_on(),
            Op::SetBold(false) => text::bold_off(),
            Op::SetInverse(true) => text::invert_on(),
            Op::SetInverse(false) => text::invert_off(),
            Op::SetUpsideDown(true) => text::upside_down_on(),
            Op::SetUpsideDown(false) => text::upside_down_off(),
            Op::SetStrike(_) => Vec::new(),
            Op::SetUnderline(Underline::Off) => text::underline_off(),
            Op::SetUnderline(Underline::On { thickness }) => {
                text::underline(thickness.unwrap_or(1).max(1))
            }
            Op::SetDoubleHeight(enabled) => text::double_height(*enabled),
            Op::SetDoubleWidth(enabled) => text::double_width(*enabled),
            Op::SetLineHeight(height) => {
                commands::line_spacing(height.unwrap_or(commands::DEFAULT_LINE_SPACING))
            }
            Op::SetSize(size) => {
                let (height, width) = size.multipliers();
                text::size(height, width)
            }

            // ===== Content =====
            Op::Write(content) => cp437::encode(content),
        }
    }
}

impl Program {
    /// Compile the whole program to StarPRNT bytes, ignoring session state.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.ops.iter().flat_map(Op::to_bytes).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Size;
    use crate::protocol::text::Alignment;

    #[test]
    fn test_online_initializes_and_selects_codepage() {
        assert_eq!(Op::Online.to_bytes(), vec![0x1B, 0x40, 0x1B, 0x1D, 0x74, 0x01]);
    }

    #[test]
    fn test_silent_ops() {
        assert!(Op::Offline.to_bytes().is_empty());
        assert!(Op::SetStrike(true).to_bytes().is_empty());
        assert!(Op::SetStrike(false).to_bytes().is_empty());
    }

    #[test]
    fn test_underline_thickness_defaults_to_one_dot() {
        let on = Op::SetUnderline(Underline::On { thickness: None });
        assert_eq!(on.to_bytes(), vec![0x1B, 0x2D, 0x01]);

        let zero = Op::SetUnderline(Underline::On { thickness: Some(0) });
        assert_eq!(zero.to_bytes(), vec![0x1B, 0x2D, 0x01]);

        let thick = Op::SetUnderline(Underline::On { thickness: Some(2) });
        assert_eq!(thick.to_bytes(), vec![0x1B, 0x2D, 0x02]);
    }

    #[test]
    fn test_line_height_default() {
        assert_eq!(Op::SetLineHeight(None).to_bytes(), vec![0x1B, 0x33, 32]);
        assert_eq!(Op::SetLineHeight(Some(48)).to_bytes(), vec![0x1B, 0x33, 48]);
    }

    #[test]
    fn test_program_to_bytes() {
        let program: Program = [
            Op::Justify(Alignment::Right),
            Op::SetSize(Size::Medium),
            Op::Write("Hi".into()),
            Op::Feed(2),
        ]
        .into_iter()
        .collect();

        assert_eq!(
            program.to_bytes(),
            vec![
                0x1B, 0x1D, 0x61, 0x02, // right
                0x1B, 0x69, 0x01, 0x00, // medium
                b'H', b'i', //
                0x1B, 0x61, 0x02, // feed 2 lines
            ]
        );
    }
}

//! # Code Page 437 Encoding
//!
//! Converts markup text to the single-byte CP437 encoding the printer is
//! switched to on `Online` (`ESC GS t 1`). ASCII passes through unchanged;
//! characters outside the code page become `?`.

/// CP437 upper half, indexed by `byte - 0x80`.
const UPPER_HALF: [char; 128] = [
    // 0x80
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Encode a string as CP437 bytes.
pub fn encode(s: &str) -> Vec<u8> {
    s.chars()
        .map(|ch| {
            if ch.is_ascii() {
                return ch as u8;
            }
            match UPPER_HALF.iter().position(|&c| c == ch) {
                Some(index) => 0x80 + index as u8,
                None => {
                    tracing::warn!(
                        character = %ch,
                        codepoint = format_args!("U+{:04X}", ch as u32),
                        "character has no CP437 mapping, replacing with '?'"
                    );
                    b'?'
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_passthrough() {
        assert_eq!(encode("  hello  \n"), b"  hello  \n");
    }

    #[test]
    fn test_table_boundaries() {
        assert_eq!(encode("Ç"), vec![0x80]);
        assert_eq!(encode("\u{00A0}"), vec![0xFF]);
    }

    #[test]
    fn test_receipt_text() {
        // "Café 4½°" as it would appear on a menu slip
        assert_eq!(
            encode("Café 4½°"),
            vec![0x43, 0x61, 0x66, 0x82, 0x20, 0x34, 0xAB, 0xF8]
        );
    }

    #[test]
    fn test_box_drawing() {
        assert_eq!(encode("┌──┐"), vec![0xDA, 0xC4, 0xC4, 0xBF]);
    }

    #[test]
    fn test_unmapped_char_becomes_question_mark() {
        assert_eq!(encode("★"), vec![b'?']);
    }
}

// src/ansi/cp437.rs

//! IBM PC code page 437 to Unicode.
//!
//! Control slots carry the classic display glyphs (smileys, arrows,
//! card suits); the interpreter intercepts the bytes it treats as
//! controls before this table is consulted.

/// CP437 byte to Unicode codepoint, all 256 entries.
pub(crate) static CP437_TO_UNICODE: [char; 256] = [
    ' ', '☺', '☻', '♥', '♦', '♣', '♠', '•', // 0x00
    '◘', '○', '◙', '♂', '♀', '♪', '♫', '☼', // 0x08
    '►', '◄', '↕', '‼', '¶', '§', '▬', '↨', // 0x10
    '↑', '↓', '→', '←', '∟', '↔', '▲', '▼', // 0x18
    ' ', '!', '"', '#', '$', '%', '&', '\'', // 0x20
    '(', ')', '*', '+', ',', '-', '.', '/', // 0x28
    '0', '1', '2', '3', '4', '5', '6', '7', // 0x30
    '8', '9', ':', ';', '<', '=', '>', '?', // 0x38
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', // 0x40
    'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', // 0x48
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', // 0x50
    'X', 'Y', 'Z', '[', '\\', ']', '^', '_', // 0x58
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', // 0x60
    'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', // 0x68
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', // 0x70
    'x', 'y', 'z', '{', '|', '}', '~', '⌂', // 0x78
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', // 0x80
    'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å', // 0x88
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', // 0x90
    'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ', // 0x98
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', // 0xA0
    '¿', '⌐', '¬', '½', '¼', '¡', '«', '»', // 0xA8
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', // 0xB0
    '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐', // 0xB8
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', // 0xC0
    '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧', // 0xC8
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', // 0xD0
    '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀', // 0xD8
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', // 0xE0
    'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩', // 0xE8
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', // 0xF0
    '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}', // 0xF8
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_maps_to_itself() {
        for b in 0x20u8..0x7F {
            assert_eq!(CP437_TO_UNICODE[b as usize], b as char);
        }
    }

    #[test]
    fn classic_art_bytes() {
        assert_eq!(CP437_TO_UNICODE[0xB0], '░');
        assert_eq!(CP437_TO_UNICODE[0xC9], '╔');
        assert_eq!(CP437_TO_UNICODE[0xDB], '█');
        assert_eq!(CP437_TO_UNICODE[0x03], '♥');
        assert_eq!(CP437_TO_UNICODE[0xE1], 'ß');
    }
}

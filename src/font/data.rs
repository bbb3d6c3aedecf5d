// src/font/data.rs

//! Static tables for the built-in 8x8 font.
//!
//! Each glyph is eight bytes, one per row top to bottom; bit 7 is the
//! leftmost pixel. Coverage follows the CP437 repertoire plus Latin-1,
//! a Greek subset, and the full box/block/shape ranges the loaders and
//! frame helpers draw from.

use super::{GlyphRange, GlyphSource};

/// Fallback glyph for unmapped codepoints.
pub(super) const NOTDEF: [u8; 8] = [0x7C, 0xC6, 0x0C, 0x18, 0x18, 0x00, 0x18, 0x00];

/// Shared glyph for the fixed-width space range U+2000..U+200C.
const BLANK: [u8; 8] = [0x00; 8];

static BASIC_LATIN: [u8; 760] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // U+0020
    0x30, 0x78, 0x78, 0x30, 0x30, 0x00, 0x30, 0x00, // U+0021 '!'
    0x6C, 0x6C, 0x6C, 0x00, 0x00, 0x00, 0x00, 0x00, // U+0022 '"'
    0x6C, 0x6C, 0xFE, 0x6C, 0xFE, 0x6C, 0x6C, 0x00, // U+0023 '#'
    0x30, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x30, 0x00, // U+0024 '$'
    0x00, 0xC6, 0xCC, 0x18, 0x30, 0x66, 0xC6, 0x00, // U+0025 '%'
    0x38, 0x6C, 0x38, 0x76, 0xDC, 0xCC, 0x76, 0x00, // U+0026 '&'
    0x60, 0x60, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, // U+0027 '''
    0x18, 0x30, 0x60, 0x60, 0x60, 0x30, 0x18, 0x00, // U+0028 '('
    0x60, 0x30, 0x18, 0x18, 0x18, 0x30, 0x60, 0x00, // U+0029 ')'
    0x00, 0x66, 0x3C, 0xFF, 0x3C, 0x66, 0x00, 0x00, // U+002A '*'
    0x00, 0x30, 0x30, 0xFC, 0x30, 0x30, 0x00, 0x00, // U+002B '+'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x60, // U+002C ','
    0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, // U+002D '-'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x30, 0x00, // U+002E '.'
    0x06, 0x0C, 0x18, 0x30, 0x60, 0xC0, 0x80, 0x00, // U+002F '/'
    0x7C, 0xC6, 0xCE, 0xDE, 0xF6, 0xE6, 0x7C, 0x00, // U+0030 '0'
    0x30, 0x70, 0x30, 0x30, 0x30, 0x30, 0xFC, 0x00, // U+0031 '1'
    0x78, 0xCC, 0x0C, 0x38, 0x60, 0xCC, 0xFC, 0x00, // U+0032 '2'
    0x78, 0xCC, 0x0C, 0x38, 0x0C, 0xCC, 0x78, 0x00, // U+0033 '3'
    0x1C, 0x3C, 0x6C, 0xCC, 0xFE, 0x0C, 0x1E, 0x00, // U+0034 '4'
    0xFC, 0xC0, 0xF8, 0x0C, 0x0C, 0xCC, 0x78, 0x00, // U+0035 '5'
    0x38, 0x60, 0xC0, 0xF8, 0xCC, 0xCC, 0x78, 0x00, // U+0036 '6'
    0xFC, 0xCC, 0x0C, 0x18, 0x30, 0x30, 0x30, 0x00, // U+0037 '7'
    0x78, 0xCC, 0xCC, 0x78, 0xCC, 0xCC, 0x78, 0x00, // U+0038 '8'
    0x78, 0xCC, 0xCC, 0x7C, 0x0C, 0x18, 0x70, 0x00, // U+0039 '9'
    0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x00, // U+003A ':'
    0x00, 0x30, 0x30, 0x00, 0x00, 0x30, 0x30, 0x60, // U+003B ';'
    0x18, 0x30, 0x60, 0xC0, 0x60, 0x30, 0x18, 0x00, // U+003C '<'
    0x00, 0x00, 0xFC, 0x00, 0x00, 0xFC, 0x00, 0x00, // U+003D '='
    0x60, 0x30, 0x18, 0x0C, 0x18, 0x30, 0x60, 0x00, // U+003E '>'
    0x78, 0xCC, 0x0C, 0x18, 0x30, 0x00, 0x30, 0x00, // U+003F '?'
    0x7C, 0xC6, 0xDE, 0xDE, 0xDE, 0xC0, 0x78, 0x00, // U+0040 '@'
    0x30, 0x78, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00, // U+0041 'A'
    0xFC, 0x66, 0x66, 0x7C, 0x66, 0x66, 0xFC, 0x00, // U+0042 'B'
    0x3C, 0x66, 0xC0, 0xC0, 0xC0, 0x66, 0x3C, 0x00, // U+0043 'C'
    0xF8, 0x6C, 0x66, 0x66, 0x66, 0x6C, 0xF8, 0x00, // U+0044 'D'
    0xFE, 0x62, 0x68, 0x78, 0x68, 0x62, 0xFE, 0x00, // U+0045 'E'
    0xFE, 0x62, 0x68, 0x78, 0x68, 0x60, 0xF0, 0x00, // U+0046 'F'
    0x3C, 0x66, 0xC0, 0xC0, 0xCE, 0x66, 0x3E, 0x00, // U+0047 'G'
    0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00, // U+0048 'H'
    0x78, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // U+0049 'I'
    0x1E, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78, 0x00, // U+004A 'J'
    0xE6, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0xE6, 0x00, // U+004B 'K'
    0xF0, 0x60, 0x60, 0x60, 0x62, 0x66, 0xFE, 0x00, // U+004C 'L'
    0xC6, 0xEE, 0xFE, 0xFE, 0xD6, 0xC6, 0xC6, 0x00, // U+004D 'M'
    0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00, // U+004E 'N'
    0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x00, // U+004F 'O'
    0xFC, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00, // U+0050 'P'
    0x78, 0xCC, 0xCC, 0xCC, 0xDC, 0x78, 0x1C, 0x00, // U+0051 'Q'
    0xFC, 0x66, 0x66, 0x7C, 0x6C, 0x66, 0xE6, 0x00, // U+0052 'R'
    0x78, 0xCC, 0xE0, 0x70, 0x1C, 0xCC, 0x78, 0x00, // U+0053 'S'
    0xFC, 0xB4, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // U+0054 'T'
    0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0xFC, 0x00, // U+0055 'U'
    0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00, // U+0056 'V'
    0xC6, 0xC6, 0xC6, 0xD6, 0xFE, 0xEE, 0xC6, 0x00, // U+0057 'W'
    0xC6, 0xC6, 0x6C, 0x38, 0x38, 0x6C, 0xC6, 0x00, // U+0058 'X'
    0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x30, 0x78, 0x00, // U+0059 'Y'
    0xFE, 0xC6, 0x8C, 0x18, 0x32, 0x66, 0xFE, 0x00, // U+005A 'Z'
    0x78, 0x60, 0x60, 0x60, 0x60, 0x60, 0x78, 0x00, // U+005B '['
    0xC0, 0x60, 0x30, 0x18, 0x0C, 0x06, 0x02, 0x00, // U+005C '\'
    0x78, 0x18, 0x18, 0x18, 0x18, 0x18, 0x78, 0x00, // U+005D ']'
    0x10, 0x38, 0x6C, 0xC6, 0x00, 0x00, 0x00, 0x00, // U+005E '^'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, // U+005F '_'
    0x30, 0x30, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, // U+0060 '`'
    0x00, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // U+0061 'a'
    0xE0, 0x60, 0x60, 0x7C, 0x66, 0x66, 0xDC, 0x00, // U+0062 'b'
    0x00, 0x00, 0x78, 0xCC, 0xC0, 0xCC, 0x78, 0x00, // U+0063 'c'
    0x1C, 0x0C, 0x0C, 0x7C, 0xCC, 0xCC, 0x76, 0x00, // U+0064 'd'
    0x00, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // U+0065 'e'
    0x38, 0x6C, 0x60, 0xF0, 0x60, 0x60, 0xF0, 0x00, // U+0066 'f'
    0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8, // U+0067 'g'
    0xE0, 0x60, 0x6C, 0x76, 0x66, 0x66, 0xE6, 0x00, // U+0068 'h'
    0x30, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // U+0069 'i'
    0x0C, 0x00, 0x0C, 0x0C, 0x0C, 0xCC, 0xCC, 0x78, // U+006A 'j'
    0xE0, 0x60, 0x66, 0x6C, 0x78, 0x6C, 0xE6, 0x00, // U+006B 'k'
    0x70, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // U+006C 'l'
    0x00, 0x00, 0xCC, 0xFE, 0xFE, 0xD6, 0xC6, 0x00, // U+006D 'm'
    0x00, 0x00, 0xF8, 0xCC, 0xCC, 0xCC, 0xCC, 0x00, // U+006E 'n'
    0x00, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+006F 'o'
    0x00, 0x00, 0xDC, 0x66, 0x66, 0x7C, 0x60, 0xF0, // U+0070 'p'
    0x00, 0x00, 0x76, 0xCC, 0xCC, 0x7C, 0x0C, 0x1E, // U+0071 'q'
    0x00, 0x00, 0xDC, 0x76, 0x66, 0x60, 0xF0, 0x00, // U+0072 'r'
    0x00, 0x00, 0x7C, 0xC0, 0x78, 0x0C, 0xF8, 0x00, // U+0073 's'
    0x10, 0x30, 0x7C, 0x30, 0x30, 0x34, 0x18, 0x00, // U+0074 't'
    0x00, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x76, 0x00, // U+0075 'u'
    0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x00, // U+0076 'v'
    0x00, 0x00, 0xC6, 0xD6, 0xFE, 0xFE, 0x6C, 0x00, // U+0077 'w'
    0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00, // U+0078 'x'
    0x00, 0x00, 0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8, // U+0079 'y'
    0x00, 0x00, 0xFC, 0x98, 0x30, 0x64, 0xFC, 0x00, // U+007A 'z'
    0x1C, 0x30, 0x30, 0xE0, 0x30, 0x30, 0x1C, 0x00, // U+007B '{'
    0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00, // U+007C '|'
    0xE0, 0x30, 0x30, 0x1C, 0x30, 0x30, 0xE0, 0x00, // U+007D '}'
    0x76, 0xDC, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // U+007E '~'
];

static LATIN_1: [u8; 768] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // U+00A0
    0x30, 0x00, 0x30, 0x30, 0x78, 0x78, 0x30, 0x00, // U+00A1 '¡'
    0x18, 0x3C, 0x66, 0x60, 0x66, 0x3C, 0x18, 0x00, // U+00A2 '¢'
    0x38, 0x6C, 0x64, 0xF0, 0x60, 0xE6, 0xFC, 0x00, // U+00A3 '£'
    0x00, 0xC6, 0x7C, 0x6C, 0x6C, 0x7C, 0xC6, 0x00, // U+00A4 '¤'
    0xCC, 0xCC, 0x78, 0xFC, 0x30, 0xFC, 0x30, 0x00, // U+00A5 '¥'
    0x18, 0x18, 0x18, 0x00, 0x18, 0x18, 0x18, 0x00, // U+00A6 '¦'
    0x3C, 0x60, 0x3C, 0x66, 0x66, 0x3C, 0x06, 0x3C, // U+00A7 '§'
    0x6C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // U+00A8 '¨'
    0x3C, 0x42, 0x99, 0xA1, 0xA1, 0x99, 0x42, 0x3C, // U+00A9 '©'
    0x3C, 0x6C, 0x6C, 0x3E, 0x00, 0x7E, 0x00, 0x00, // U+00AA 'ª'
    0x00, 0x33, 0x66, 0xCC, 0xCC, 0x66, 0x33, 0x00, // U+00AB '«'
    0x00, 0x00, 0x00, 0xFC, 0x0C, 0x0C, 0x00, 0x00, // U+00AC '¬'
    0x00, 0x00, 0x00, 0xFC, 0x00, 0x00, 0x00, 0x00, // U+00AD
    0x3C, 0x42, 0xB9, 0xA5, 0xB9, 0xA5, 0x42, 0x3C, // U+00AE '®'
    0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // U+00AF '¯'
    0x38, 0x6C, 0x6C, 0x38, 0x00, 0x00, 0x00, 0x00, // U+00B0 '°'
    0x30, 0x30, 0xFC, 0x30, 0x30, 0x00, 0xFC, 0x00, // U+00B1 '±'
    0x70, 0x18, 0x30, 0x60, 0x78, 0x00, 0x00, 0x00, // U+00B2 '²'
    0x70, 0x18, 0x30, 0x18, 0x70, 0x00, 0x00, 0x00, // U+00B3 '³'
    0x0C, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // U+00B4 '´'
    0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x7C, 0x60, // U+00B5 'µ'
    0x7F, 0xDB, 0xDB, 0x7B, 0x1B, 0x1B, 0x1B, 0x00, // U+00B6 '¶'
    0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, // U+00B7 '·'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x30, 0x60, // U+00B8 '¸'
    0x30, 0x70, 0x30, 0x30, 0x78, 0x00, 0x00, 0x00, // U+00B9 '¹'
    0x38, 0x6C, 0x6C, 0x38, 0x00, 0x7C, 0x00, 0x00, // U+00BA 'º'
    0x00, 0xCC, 0x66, 0x33, 0x33, 0x66, 0xCC, 0x00, // U+00BB '»'
    0x63, 0xE6, 0x6C, 0x7E, 0x33, 0x66, 0xCC, 0x0F, // U+00BC '¼'
    0x63, 0xE6, 0x6C, 0x7A, 0x36, 0x6A, 0xDF, 0x06, // U+00BD '½'
    0xE3, 0x36, 0x6C, 0x7A, 0x36, 0x6A, 0xDF, 0x06, // U+00BE '¾'
    0x30, 0x00, 0x30, 0x60, 0xC0, 0xCC, 0x78, 0x00, // U+00BF '¿'
    0x60, 0x30, 0x30, 0x78, 0xCC, 0xFC, 0xCC, 0x00, // U+00C0 'À'
    0x0C, 0x18, 0x30, 0x78, 0xCC, 0xFC, 0xCC, 0x00, // U+00C1 'Á'
    0x18, 0x24, 0x30, 0x78, 0xCC, 0xFC, 0xCC, 0x00, // U+00C2 'Â'
    0x76, 0x00, 0x30, 0x78, 0xCC, 0xFC, 0xCC, 0x00, // U+00C3 'Ã'
    0x6C, 0x00, 0x30, 0x78, 0xCC, 0xFC, 0xCC, 0x00, // U+00C4 'Ä'
    0x30, 0x48, 0x30, 0x78, 0xCC, 0xFC, 0xCC, 0x00, // U+00C5 'Å'
    0x3E, 0x6C, 0xCC, 0xFE, 0xCC, 0xCC, 0xCE, 0x00, // U+00C6 'Æ'
    0x78, 0xCC, 0xC0, 0xCC, 0x78, 0x18, 0x0C, 0x78, // U+00C7 'Ç'
    0x60, 0x30, 0xFC, 0x60, 0x78, 0x60, 0xFC, 0x00, // U+00C8 'È'
    0x0C, 0x18, 0xFC, 0x60, 0x78, 0x60, 0xFC, 0x00, // U+00C9 'É'
    0x18, 0x24, 0xFC, 0x60, 0x78, 0x60, 0xFC, 0x00, // U+00CA 'Ê'
    0x6C, 0x00, 0xFC, 0x60, 0x78, 0x60, 0xFC, 0x00, // U+00CB 'Ë'
    0x60, 0x30, 0x78, 0x30, 0x30, 0x30, 0x78, 0x00, // U+00CC 'Ì'
    0x0C, 0x18, 0x78, 0x30, 0x30, 0x30, 0x78, 0x00, // U+00CD 'Í'
    0x18, 0x24, 0x78, 0x30, 0x30, 0x30, 0x78, 0x00, // U+00CE 'Î'
    0x6C, 0x00, 0x78, 0x30, 0x30, 0x30, 0x78, 0x00, // U+00CF 'Ï'
    0xF8, 0x6C, 0x66, 0xF6, 0x66, 0x6C, 0xF8, 0x00, // U+00D0 'Ð'
    0x76, 0x00, 0xC6, 0xE6, 0xF6, 0xDE, 0xC6, 0x00, // U+00D1 'Ñ'
    0x60, 0x30, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00D2 'Ò'
    0x0C, 0x18, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00D3 'Ó'
    0x18, 0x24, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00D4 'Ô'
    0x76, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00D5 'Õ'
    0x6C, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00D6 'Ö'
    0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x00, // U+00D7 '×'
    0x06, 0x7C, 0xCE, 0xDE, 0xF6, 0xE6, 0x7C, 0xC0, // U+00D8 'Ø'
    0x60, 0x30, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00D9 'Ù'
    0x0C, 0x18, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00DA 'Ú'
    0x18, 0x24, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00DB 'Û'
    0x6C, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00DC 'Ü'
    0x0C, 0x18, 0xCC, 0xCC, 0x78, 0x30, 0x78, 0x00, // U+00DD 'Ý'
    0xF0, 0x60, 0x7C, 0x66, 0x66, 0x7C, 0x60, 0xF0, // U+00DE 'Þ'
    0x3C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x7C, 0x60, // U+00DF 'ß'
    0x60, 0x30, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // U+00E0 'à'
    0x0C, 0x18, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // U+00E1 'á'
    0x18, 0x24, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // U+00E2 'â'
    0x76, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // U+00E3 'ã'
    0x6C, 0x00, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // U+00E4 'ä'
    0x30, 0x48, 0x78, 0x0C, 0x7C, 0xCC, 0x76, 0x00, // U+00E5 'å'
    0x00, 0x00, 0x7C, 0x36, 0x7E, 0xD8, 0x6E, 0x00, // U+00E6 'æ'
    0x00, 0x00, 0x78, 0xC0, 0xC0, 0x78, 0x0C, 0x38, // U+00E7 'ç'
    0x60, 0x30, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // U+00E8 'è'
    0x0C, 0x18, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // U+00E9 'é'
    0x18, 0x24, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // U+00EA 'ê'
    0x6C, 0x00, 0x78, 0xCC, 0xFC, 0xC0, 0x78, 0x00, // U+00EB 'ë'
    0x60, 0x30, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // U+00EC 'ì'
    0x0C, 0x18, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // U+00ED 'í'
    0x18, 0x24, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // U+00EE 'î'
    0x6C, 0x00, 0x70, 0x30, 0x30, 0x30, 0x78, 0x00, // U+00EF 'ï'
    0x76, 0x18, 0x3C, 0x66, 0x66, 0x66, 0x3C, 0x00, // U+00F0 'ð'
    0x76, 0x00, 0xF8, 0xCC, 0xCC, 0xCC, 0xCC, 0x00, // U+00F1 'ñ'
    0x60, 0x30, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00F2 'ò'
    0x0C, 0x18, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00F3 'ó'
    0x18, 0x24, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00F4 'ô'
    0x76, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00F5 'õ'
    0x6C, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+00F6 'ö'
    0x00, 0x30, 0x00, 0xFC, 0x00, 0x30, 0x00, 0x00, // U+00F7 '÷'
    0x00, 0x06, 0x7C, 0xCE, 0xD6, 0xE6, 0x7C, 0xC0, // U+00F8 'ø'
    0x60, 0x30, 0xCC, 0xCC, 0xCC, 0xCC, 0x76, 0x00, // U+00F9 'ù'
    0x0C, 0x18, 0xCC, 0xCC, 0xCC, 0xCC, 0x76, 0x00, // U+00FA 'ú'
    0x18, 0x24, 0xCC, 0xCC, 0xCC, 0xCC, 0x76, 0x00, // U+00FB 'û'
    0x6C, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x76, 0x00, // U+00FC 'ü'
    0x0C, 0x18, 0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8, // U+00FD 'ý'
    0xE0, 0x60, 0x7C, 0x66, 0x66, 0x7C, 0x60, 0x60, // U+00FE 'þ'
    0x6C, 0x00, 0xCC, 0xCC, 0xCC, 0x7C, 0x0C, 0xF8, // U+00FF 'ÿ'
];

static FLORIN: [u8; 8] = [
    0x0E, 0x1B, 0x18, 0x3C, 0x18, 0x18, 0xD8, 0x70, // U+0192 'ƒ'
];

static GREEK: [u8; 456] = [
    0x30, 0x78, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0x00, // U+0391 'Α'
    0xFC, 0x66, 0x66, 0x7C, 0x66, 0x66, 0xFC, 0x00, // U+0392 'Β'
    0xFE, 0x62, 0x60, 0x60, 0x60, 0x60, 0xF0, 0x00, // U+0393 'Γ'
    0x10, 0x38, 0x38, 0x6C, 0x6C, 0xC6, 0xFE, 0x00, // U+0394 'Δ'
    0xFE, 0x62, 0x68, 0x78, 0x68, 0x62, 0xFE, 0x00, // U+0395 'Ε'
    0xFE, 0xC6, 0x8C, 0x18, 0x32, 0x66, 0xFE, 0x00, // U+0396 'Ζ'
    0xCC, 0xCC, 0xCC, 0xFC, 0xCC, 0xCC, 0xCC, 0x00, // U+0397 'Η'
    0x7C, 0xC6, 0xC6, 0xFE, 0xC6, 0xC6, 0x7C, 0x00, // U+0398 'Θ'
    0x78, 0x30, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // U+0399 'Ι'
    0xE6, 0x66, 0x6C, 0x78, 0x6C, 0x66, 0xE6, 0x00, // U+039A 'Κ'
    0x10, 0x38, 0x38, 0x6C, 0x6C, 0xC6, 0xC6, 0x00, // U+039B 'Λ'
    0xC6, 0xEE, 0xFE, 0xFE, 0xD6, 0xC6, 0xC6, 0x00, // U+039C 'Μ'
    0xC6, 0xE6, 0xF6, 0xDE, 0xCE, 0xC6, 0xC6, 0x00, // U+039D 'Ν'
    0xFE, 0x00, 0x00, 0x7C, 0x00, 0x00, 0xFE, 0x00, // U+039E 'Ξ'
    0x38, 0x6C, 0xC6, 0xC6, 0xC6, 0x6C, 0x38, 0x00, // U+039F 'Ο'
    0xFE, 0x6C, 0x6C, 0x6C, 0x6C, 0x6C, 0x6C, 0x00, // U+03A0 'Π'
    0xFC, 0x66, 0x66, 0x7C, 0x60, 0x60, 0xF0, 0x00, // U+03A1 'Ρ'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // U+03A2
    0xFE, 0x62, 0x30, 0x18, 0x30, 0x62, 0xFE, 0x00, // U+03A3 'Σ'
    0xFC, 0xB4, 0x30, 0x30, 0x30, 0x30, 0x78, 0x00, // U+03A4 'Τ'
    0xCC, 0xCC, 0xCC, 0x78, 0x30, 0x30, 0x78, 0x00, // U+03A5 'Υ'
    0x10, 0x7C, 0xD6, 0xD6, 0xD6, 0x7C, 0x10, 0x00, // U+03A6 'Φ'
    0xC6, 0xC6, 0x6C, 0x38, 0x38, 0x6C, 0xC6, 0x00, // U+03A7 'Χ'
    0xD6, 0xD6, 0xD6, 0x7C, 0x10, 0x10, 0x38, 0x00, // U+03A8 'Ψ'
    0x38, 0x6C, 0xC6, 0xC6, 0x6C, 0x28, 0xEE, 0x00, // U+03A9 'Ω'
    0x6C, 0x00, 0x78, 0x30, 0x30, 0x30, 0x78, 0x00, // U+03AA 'Ϊ'
    0x6C, 0x00, 0xCC, 0xCC, 0x78, 0x30, 0x78, 0x00, // U+03AB 'Ϋ'
    0x0C, 0x18, 0x76, 0xDC, 0xC8, 0xDC, 0x76, 0x00, // U+03AC 'ά'
    0x0C, 0x18, 0x3C, 0x60, 0x78, 0x60, 0x3C, 0x00, // U+03AD 'έ'
    0x0C, 0x18, 0xF8, 0xCC, 0xCC, 0xCC, 0xCC, 0x0C, // U+03AE 'ή'
    0x0C, 0x18, 0x30, 0x30, 0x30, 0x30, 0x1C, 0x00, // U+03AF 'ί'
    0x6C, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+03B0 'ΰ'
    0x00, 0x00, 0x76, 0xDC, 0xC8, 0xDC, 0x76, 0x00, // U+03B1 'α'
    0x3C, 0x66, 0x66, 0x7C, 0x66, 0x66, 0x7C, 0x60, // U+03B2 'β'
    0x00, 0x00, 0xCC, 0x6C, 0x38, 0x30, 0x30, 0x60, // U+03B3 'γ'
    0x1C, 0x30, 0x18, 0x7C, 0xCC, 0xCC, 0x78, 0x00, // U+03B4 'δ'
    0x00, 0x00, 0x3C, 0x60, 0x78, 0x60, 0x3C, 0x00, // U+03B5 'ε'
    0x7E, 0x0C, 0x18, 0x30, 0x60, 0x7C, 0x06, 0x1C, // U+03B6 'ζ'
    0x00, 0x00, 0xF8, 0xCC, 0xCC, 0xCC, 0xCC, 0x0C, // U+03B7 'η'
    0x38, 0x6C, 0xC6, 0xFE, 0xC6, 0x6C, 0x38, 0x00, // U+03B8 'θ'
    0x00, 0x00, 0x30, 0x30, 0x30, 0x30, 0x1C, 0x00, // U+03B9 'ι'
    0x00, 0x00, 0xCC, 0xD8, 0xF0, 0xD8, 0xCC, 0x00, // U+03BA 'κ'
    0x60, 0x30, 0x18, 0x38, 0x6C, 0xC6, 0xC6, 0x00, // U+03BB 'λ'
    0x00, 0x00, 0x66, 0x66, 0x66, 0x66, 0x7C, 0x60, // U+03BC 'μ'
    0x00, 0x00, 0xC6, 0xC6, 0x6C, 0x38, 0x10, 0x00, // U+03BD 'ν'
    0x3C, 0x60, 0x3C, 0x60, 0x60, 0x3C, 0x06, 0x1C, // U+03BE 'ξ'
    0x00, 0x00, 0x78, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+03BF 'ο'
    0x00, 0x00, 0xFE, 0x6C, 0x6C, 0x6C, 0x6C, 0x00, // U+03C0 'π'
    0x00, 0x00, 0x3C, 0x66, 0x66, 0x7C, 0x60, 0x60, // U+03C1 'ρ'
    0x00, 0x00, 0x3C, 0x60, 0x60, 0x38, 0x0C, 0x18, // U+03C2 'ς'
    0x00, 0x00, 0x7E, 0xD8, 0xD8, 0xD8, 0x70, 0x00, // U+03C3 'σ'
    0x00, 0x00, 0xFE, 0x30, 0x30, 0x36, 0x1C, 0x00, // U+03C4 'τ'
    0x00, 0x00, 0xCC, 0xCC, 0xCC, 0xCC, 0x78, 0x00, // U+03C5 'υ'
    0x00, 0x10, 0x7C, 0xD6, 0xD6, 0xD6, 0x7C, 0x10, // U+03C6 'φ'
    0x00, 0x00, 0xC6, 0x6C, 0x38, 0x6C, 0xC6, 0x06, // U+03C7 'χ'
    0x00, 0x10, 0xD6, 0xD6, 0xD6, 0x7C, 0x10, 0x10, // U+03C8 'ψ'
    0x00, 0x00, 0x6C, 0xC6, 0xD6, 0xD6, 0x6C, 0x00, // U+03C9 'ω'
];

static PUNCTUATION: [u8; 72] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, // U+2017 '‗'
    0x0C, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, // U+2018 '‘'
    0x18, 0x18, 0x30, 0x00, 0x00, 0x00, 0x00, 0x00, // U+2019 '’'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x30, // U+201A '‚'
    0x30, 0x18, 0x18, 0x00, 0x00, 0x00, 0x00, 0x00, // U+201B '‛'
    0x33, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, // U+201C '“'
    0x66, 0x66, 0xCC, 0x00, 0x00, 0x00, 0x00, 0x00, // U+201D '”'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x66, 0x66, 0xCC, // U+201E '„'
    0xCC, 0x66, 0x66, 0x00, 0x00, 0x00, 0x00, 0x00, // U+201F '‟'
];

static BULLET: [u8; 8] = [
    0x00, 0x00, 0x3C, 0x7E, 0x7E, 0x3C, 0x00, 0x00, // U+2022 '•'
];

static ELLIPSIS: [u8; 8] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x92, 0x00, // U+2026 '…'
];

static DOUBLE_BANG: [u8; 8] = [
    0x66, 0x66, 0x66, 0x66, 0x66, 0x00, 0x66, 0x00, // U+203C '‼'
];

static SUPERSCRIPT_N: [u8; 8] = [
    0x00, 0x70, 0x58, 0x58, 0x58, 0x00, 0x00, 0x00, // U+207F 'ⁿ'
];

static PESETA: [u8; 8] = [
    0xF8, 0xCC, 0xCC, 0xFA, 0xC6, 0xCF, 0xC6, 0xC7, // U+20A7 '₧'
];

static EURO: [u8; 8] = [
    0x3C, 0x66, 0xF0, 0x60, 0xF0, 0x66, 0x3C, 0x00, // U+20AC '€'
];

static ARROWS: [u8; 48] = [
    0x00, 0x30, 0x60, 0xFE, 0x60, 0x30, 0x00, 0x00, // U+2190 '←'
    0x18, 0x3C, 0x7E, 0x18, 0x18, 0x18, 0x18, 0x00, // U+2191 '↑'
    0x00, 0x18, 0x0C, 0xFE, 0x0C, 0x18, 0x00, 0x00, // U+2192 '→'
    0x18, 0x18, 0x18, 0x18, 0x7E, 0x3C, 0x18, 0x00, // U+2193 '↓'
    0x00, 0x24, 0x66, 0xFF, 0x66, 0x24, 0x00, 0x00, // U+2194 '↔'
    0x18, 0x3C, 0x7E, 0x18, 0x7E, 0x3C, 0x18, 0x00, // U+2195 '↕'
];

static UPDOWN_ARROW_BASE: [u8; 8] = [
    0x18, 0x3C, 0x7E, 0x18, 0x7E, 0x3C, 0x18, 0xFF, // U+21A8 '↨'
];

static BULLET_OPERATOR: [u8; 8] = [
    0x00, 0x00, 0x00, 0x18, 0x18, 0x00, 0x00, 0x00, // U+2219 '∙'
];

static SQUARE_ROOT: [u8; 8] = [
    0x0F, 0x0C, 0x0C, 0x0C, 0xEC, 0x6C, 0x3C, 0x1C, // U+221A '√'
];

static MATH: [u8; 16] = [
    0x00, 0x00, 0x6E, 0xDB, 0xDB, 0x76, 0x00, 0x00, // U+221E '∞'
    0x60, 0x60, 0x60, 0x60, 0x60, 0x60, 0x7E, 0x00, // U+221F '∟'
];

static INTERSECTION: [u8; 8] = [
    0x00, 0x78, 0xCC, 0xCC, 0xCC, 0xCC, 0xCC, 0x00, // U+2229 '∩'
];

static ALMOST_EQUAL: [u8; 8] = [
    0x00, 0x76, 0xDC, 0x00, 0x76, 0xDC, 0x00, 0x00, // U+2248 '≈'
];

static IDENTICAL: [u8; 8] = [
    0x00, 0xFC, 0x00, 0xFC, 0x00, 0xFC, 0x00, 0x00, // U+2261 '≡'
];

static COMPARISON: [u8; 16] = [
    0x30, 0x60, 0xC0, 0x60, 0x30, 0x00, 0xFC, 0x00, // U+2264 '≤'
    0x60, 0x30, 0x18, 0x30, 0x60, 0x00, 0xFC, 0x00, // U+2265 '≥'
];

static HOUSE: [u8; 8] = [
    0x00, 0x10, 0x38, 0x6C, 0xC6, 0xC6, 0xFE, 0x00, // U+2302 '⌂'
];

static REVERSED_NOT: [u8; 8] = [
    0x00, 0x00, 0x00, 0xFC, 0xC0, 0xC0, 0x00, 0x00, // U+2310 '⌐'
];

static INTEGRAL_HALVES: [u8; 16] = [
    0x0E, 0x1B, 0x1B, 0x18, 0x18, 0x18, 0x18, 0x18, // U+2320 '⌠'
    0x18, 0x18, 0x18, 0x18, 0x18, 0xD8, 0xD8, 0x70, // U+2321 '⌡'
];

static BOX_DRAWING: [u8; 1024] = [
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x00, 0x00, 0x00, // U+2500 '─'
    0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, 0x00, // U+2501 '━'
    0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, 0x18, // U+2502 '│'
    0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, // U+2503 '┃'
    0x00, 0x00, 0x00, 0x00, 0xDB, 0x00, 0x00, 0x00, // U+2504 '┄'
    0x00, 0x00, 0x00, 0xDB, 0xDB, 0xDB, 0x00, 0x00, // U+2505 '┅'
    0x18, 0x18, 0x00, 0x18, 0x18, 0x00, 0x18, 0x18, // U+2506 '┆'
    0x3C, 0x3C, 0x00, 0x3C, 0x3C, 0x00, 0x3C, 0x3C, // U+2507 '┇'
    0x00, 0x00, 0x00, 0x00, 0xAA, 0x00, 0x00, 0x00, // U+2508 '┈'
    0x00, 0x00, 0x00, 0xAA, 0xAA, 0xAA, 0x00, 0x00, // U+2509 '┉'
    0x18, 0x00, 0x18, 0x00, 0x18, 0x00, 0x18, 0x00, // U+250A '┊'
    0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, 0x3C, 0x00, // U+250B '┋'
    0x00, 0x00, 0x00, 0x00, 0x1F, 0x18, 0x18, 0x18, // U+250C '┌'
    0x00, 0x00, 0x00, 0x3F, 0x3F, 0x3F, 0x18, 0x18, // U+250D '┍'
    0x00, 0x00, 0x00, 0x3C, 0x3F, 0x3C, 0x3C, 0x3C, // U+250E '┎'
    0x00, 0x00, 0x00, 0x3F, 0x3F, 0x3F, 0x3C, 0x3C, // U+250F '┏'
    0x00, 0x00, 0x00, 0x00, 0xF8, 0x18, 0x18, 0x18, // U+2510 '┐'
    0x00, 0x00, 0x00, 0xFC, 0xFC, 0xFC, 0x18, 0x18, // U+2511 '┑'
    0x00, 0x00, 0x00, 0x3C, 0xFC, 0x3C, 0x3C, 0x3C, // U+2512 '┒'
    0x00, 0x00, 0x00, 0xFC, 0xFC, 0xFC, 0x3C, 0x3C, // U+2513 '┓'
    0x18, 0x18, 0x18, 0x18, 0x1F, 0x00, 0x00, 0x00, // U+2514 '└'
    0x18, 0x18, 0x18, 0x3F, 0x3F, 0x3F, 0x00, 0x00, // U+2515 '┕'
    0x3C, 0x3C, 0x3C, 0x3C, 0x3F, 0x3C, 0x00, 0x00, // U+2516 '┖'
    0x3C, 0x3C, 0x3C, 0x3F, 0x3F, 0x3F, 0x00, 0x00, // U+2517 '┗'
    0x18, 0x18, 0x18, 0x18, 0xF8, 0x00, 0x00, 0x00, // U+2518 '┘'
    0x18, 0x18, 0x18, 0xFC, 0xFC, 0xFC, 0x00, 0x00, // U+2519 '┙'
    0x3C, 0x3C, 0x3C, 0x3C, 0xFC, 0x3C, 0x00, 0x00, // U+251A '┚'
    0x3C, 0x3C, 0x3C, 0xFC, 0xFC, 0xFC, 0x00, 0x00, // U+251B '┛'
    0x18, 0x18, 0x18, 0x18, 0x1F, 0x18, 0x18, 0x18, // U+251C '├'
    0x18, 0x18, 0x18, 0x3F, 0x3F, 0x3F, 0x18, 0x18, // U+251D '┝'
    0x3C, 0x3C, 0x3C, 0x3C, 0x3F, 0x3C, 0x18, 0x18, // U+251E '┞'
    0x18, 0x18, 0x18, 0x3C, 0x3F, 0x3C, 0x3C, 0x3C, // U+251F '┟'
    0x3C, 0x3C, 0x3C, 0x3C, 0x3F, 0x3C, 0x3C, 0x3C, // U+2520 '┠'
    0x3C, 0x3C, 0x3C, 0x3F, 0x3F, 0x3F, 0x18, 0x18, // U+2521 '┡'
    0x18, 0x18, 0x18, 0x3F, 0x3F, 0x3F, 0x3C, 0x3C, // U+2522 '┢'
    0x3C, 0x3C, 0x3C, 0x3F, 0x3F, 0x3F, 0x3C, 0x3C, // U+2523 '┣'
    0x18, 0x18, 0x18, 0x18, 0xF8, 0x18, 0x18, 0x18, // U+2524 '┤'
    0x18, 0x18, 0x18, 0xFC, 0xFC, 0xFC, 0x18, 0x18, // U+2525 '┥'
    0x3C, 0x3C, 0x3C, 0x3C, 0xFC, 0x3C, 0x18, 0x18, // U+2526 '┦'
    0x18, 0x18, 0x18, 0x3C, 0xFC, 0x3C, 0x3C, 0x3C, // U+2527 '┧'
    0x3C, 0x3C, 0x3C, 0x3C, 0xFC, 0x3C, 0x3C, 0x3C, // U+2528 '┨'
    0x3C, 0x3C, 0x3C, 0xFC, 0xFC, 0xFC, 0x18, 0x18, // U+2529 '┩'
    0x18, 0x18, 0x18, 0xFC, 0xFC, 0xFC, 0x3C, 0x3C, // U+252A '┪'
    0x3C, 0x3C, 0x3C, 0xFC, 0xFC, 0xFC, 0x3C, 0x3C, // U+252B '┫'
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x18, 0x18, 0x18, // U+252C '┬'
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0xFC, 0x18, 0x18, // U+252D '┭'
    0x00, 0x00, 0x00, 0x3F, 0xFF, 0x3F, 0x18, 0x18, // U+252E '┮'
    0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x18, 0x18, // U+252F '┯'
    0x00, 0x00, 0x00, 0x3C, 0xFF, 0x3C, 0x3C, 0x3C, // U+2530 '┰'
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0xFC, 0x3C, 0x3C, // U+2531 '┱'
    0x00, 0x00, 0x00, 0x3F, 0xFF, 0x3F, 0x3C, 0x3C, // U+2532 '┲'
    0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x3C, 0x3C, // U+2533 '┳'
    0x18, 0x18, 0x18, 0x18, 0xFF, 0x00, 0x00, 0x00, // U+2534 '┴'
    0x18, 0x18, 0x18, 0xFC, 0xFF, 0xFC, 0x00, 0x00, // U+2535 '┵'
    0x18, 0x18, 0x18, 0x3F, 0xFF, 0x3F, 0x00, 0x00, // U+2536 '┶'
    0x18, 0x18, 0x18, 0xFF, 0xFF, 0xFF, 0x00, 0x00, // U+2537 '┷'
    0x3C, 0x3C, 0x3C, 0x3C, 0xFF, 0x3C, 0x00, 0x00, // U+2538 '┸'
    0x3C, 0x3C, 0x3C, 0xFC, 0xFF, 0xFC, 0x00, 0x00, // U+2539 '┹'
    0x3C, 0x3C, 0x3C, 0x3F, 0xFF, 0x3F, 0x00, 0x00, // U+253A '┺'
    0x3C, 0x3C, 0x3C, 0xFF, 0xFF, 0xFF, 0x00, 0x00, // U+253B '┻'
    0x18, 0x18, 0x18, 0x18, 0xFF, 0x18, 0x18, 0x18, // U+253C '┼'
    0x18, 0x18, 0x18, 0xFC, 0xFF, 0xFC, 0x18, 0x18, // U+253D '┽'
    0x18, 0x18, 0x18, 0x3F, 0xFF, 0x3F, 0x18, 0x18, // U+253E '┾'
    0x18, 0x18, 0x18, 0xFF, 0xFF, 0xFF, 0x18, 0x18, // U+253F '┿'
    0x3C, 0x3C, 0x3C, 0x3C, 0xFF, 0x3C, 0x18, 0x18, // U+2540 '╀'
    0x18, 0x18, 0x18, 0x3C, 0xFF, 0x3C, 0x3C, 0x3C, // U+2541 '╁'
    0x3C, 0x3C, 0x3C, 0x3C, 0xFF, 0x3C, 0x3C, 0x3C, // U+2542 '╂'
    0x3C, 0x3C, 0x3C, 0xFC, 0xFF, 0xFC, 0x18, 0x18, // U+2543 '╃'
    0x3C, 0x3C, 0x3C, 0x3F, 0xFF, 0x3F, 0x18, 0x18, // U+2544 '╄'
    0x18, 0x18, 0x18, 0xFC, 0xFF, 0xFC, 0x3C, 0x3C, // U+2545 '╅'
    0x18, 0x18, 0x18, 0x3F, 0xFF, 0x3F, 0x3C, 0x3C, // U+2546 '╆'
    0x3C, 0x3C, 0x3C, 0xFF, 0xFF, 0xFF, 0x18, 0x18, // U+2547 '╇'
    0x18, 0x18, 0x18, 0xFF, 0xFF, 0xFF, 0x3C, 0x3C, // U+2548 '╈'
    0x3C, 0x3C, 0x3C, 0xFC, 0xFF, 0xFC, 0x3C, 0x3C, // U+2549 '╉'
    0x3C, 0x3C, 0x3C, 0x3F, 0xFF, 0x3F, 0x3C, 0x3C, // U+254A '╊'
    0x3C, 0x3C, 0x3C, 0xFF, 0xFF, 0xFF, 0x3C, 0x3C, // U+254B '╋'
    0x00, 0x00, 0x00, 0x00, 0xE7, 0x00, 0x00, 0x00, // U+254C '╌'
    0x00, 0x00, 0x00, 0xE7, 0xE7, 0xE7, 0x00, 0x00, // U+254D '╍'
    0x18, 0x18, 0x18, 0x00, 0x00, 0x18, 0x18, 0x18, // U+254E '╎'
    0x3C, 0x3C, 0x3C, 0x00, 0x00, 0x3C, 0x3C, 0x3C, // U+254F '╏'
    0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00, 0x00, // U+2550 '═'
    0x36, 0x36, 0x36, 0x36, 0x36, 0x36, 0x36, 0x36, // U+2551 '║'
    0x00, 0x00, 0x00, 0x1F, 0x18, 0x1F, 0x18, 0x18, // U+2552 '╒'
    0x00, 0x00, 0x00, 0x00, 0x3F, 0x36, 0x36, 0x36, // U+2553 '╓'
    0x00, 0x00, 0x00, 0x3F, 0x30, 0x37, 0x36, 0x36, // U+2554 '╔'
    0x00, 0x00, 0x00, 0xF8, 0x18, 0xF8, 0x18, 0x18, // U+2555 '╕'
    0x00, 0x00, 0x00, 0x00, 0xFE, 0x36, 0x36, 0x36, // U+2556 '╖'
    0x00, 0x00, 0x00, 0xFE, 0x06, 0xF6, 0x36, 0x36, // U+2557 '╗'
    0x18, 0x18, 0x18, 0x1F, 0x18, 0x1F, 0x00, 0x00, // U+2558 '╘'
    0x36, 0x36, 0x36, 0x36, 0x3F, 0x00, 0x00, 0x00, // U+2559 '╙'
    0x36, 0x36, 0x36, 0x37, 0x30, 0x3F, 0x00, 0x00, // U+255A '╚'
    0x18, 0x18, 0x18, 0xF8, 0x18, 0xF8, 0x00, 0x00, // U+255B '╛'
    0x36, 0x36, 0x36, 0x36, 0xFE, 0x00, 0x00, 0x00, // U+255C '╜'
    0x36, 0x36, 0x36, 0xF6, 0x06, 0xFE, 0x00, 0x00, // U+255D '╝'
    0x18, 0x18, 0x18, 0x1F, 0x18, 0x1F, 0x18, 0x18, // U+255E '╞'
    0x36, 0x36, 0x36, 0x36, 0x37, 0x36, 0x36, 0x36, // U+255F '╟'
    0x36, 0x36, 0x36, 0x37, 0x30, 0x37, 0x36, 0x36, // U+2560 '╠'
    0x18, 0x18, 0x18, 0xF8, 0x18, 0xF8, 0x18, 0x18, // U+2561 '╡'
    0x36, 0x36, 0x36, 0x36, 0xF6, 0x36, 0x36, 0x36, // U+2562 '╢'
    0x36, 0x36, 0x36, 0xF6, 0x06, 0xF6, 0x36, 0x36, // U+2563 '╣'
    0x00, 0x00, 0x00, 0xFF, 0x00, 0xFF, 0x18, 0x18, // U+2564 '╤'
    0x00, 0x00, 0x00, 0x00, 0xFF, 0x36, 0x36, 0x36, // U+2565 '╥'
    0x00, 0x00, 0x00, 0xFF, 0x00, 0xF7, 0x36, 0x36, // U+2566 '╦'
    0x18, 0x18, 0x18, 0xFF, 0x00, 0xFF, 0x00, 0x00, // U+2567 '╧'
    0x36, 0x36, 0x36, 0x36, 0xFF, 0x00, 0x00, 0x00, // U+2568 '╨'
    0x36, 0x36, 0x36, 0xF7, 0x00, 0xFF, 0x00, 0x00, // U+2569 '╩'
    0x18, 0x18, 0x18, 0xFF, 0x18, 0xFF, 0x18, 0x18, // U+256A '╪'
    0x36, 0x36, 0x36, 0x36, 0xFF, 0x36, 0x36, 0x36, // U+256B '╫'
    0x36, 0x36, 0x36, 0xE7, 0x00, 0xF7, 0x36, 0x36, // U+256C '╬'
    0x00, 0x00, 0x00, 0x00, 0x07, 0x08, 0x18, 0x18, // U+256D '╭'
    0x00, 0x00, 0x00, 0x00, 0xE0, 0x10, 0x18, 0x18, // U+256E '╮'
    0x18, 0x18, 0x18, 0x10, 0xE0, 0x00, 0x00, 0x00, // U+256F '╯'
    0x18, 0x18, 0x18, 0x08, 0x07, 0x00, 0x00, 0x00, // U+2570 '╰'
    0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, // U+2571 '╱'
    0x80, 0x40, 0x20, 0x10, 0x08, 0x04, 0x02, 0x01, // U+2572 '╲'
    0x81, 0x42, 0x24, 0x18, 0x18, 0x24, 0x42, 0x81, // U+2573 '╳'
    0x00, 0x00, 0x00, 0x00, 0xF8, 0x00, 0x00, 0x00, // U+2574 '╴'
    0x18, 0x18, 0x18, 0x18, 0x18, 0x00, 0x00, 0x00, // U+2575 '╵'
    0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, // U+2576 '╶'
    0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x18, 0x18, // U+2577 '╷'
    0x00, 0x00, 0x00, 0xFC, 0xFC, 0xFC, 0x00, 0x00, // U+2578 '╸'
    0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00, 0x00, // U+2579 '╹'
    0x00, 0x00, 0x00, 0x3F, 0x3F, 0x3F, 0x00, 0x00, // U+257A '╺'
    0x00, 0x00, 0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, // U+257B '╻'
    0x00, 0x00, 0x00, 0x3F, 0xFF, 0x3F, 0x00, 0x00, // U+257C '╼'
    0x18, 0x18, 0x18, 0x18, 0x3C, 0x3C, 0x3C, 0x3C, // U+257D '╽'
    0x00, 0x00, 0x00, 0xFC, 0xFF, 0xFC, 0x00, 0x00, // U+257E '╾'
    0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x18, 0x18, 0x18, // U+257F '╿'
];

static BLOCK_ELEMENTS: [u8; 256] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, // U+2580 '▀'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, // U+2581 '▁'
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, // U+2582 '▂'
    0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, // U+2583 '▃'
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, // U+2584 '▄'
    0x00, 0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // U+2585 '▅'
    0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // U+2586 '▆'
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // U+2587 '▇'
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, // U+2588 '█'
    0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, 0xFE, // U+2589 '▉'
    0xFC, 0xFC, 0xFC, 0xFC, 0xFC, 0xFC, 0xFC, 0xFC, // U+258A '▊'
    0xF8, 0xF8, 0xF8, 0xF8, 0xF8, 0xF8, 0xF8, 0xF8, // U+258B '▋'
    0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, 0xF0, // U+258C '▌'
    0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, 0xE0, // U+258D '▍'
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, // U+258E '▎'
    0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, 0x80, // U+258F '▏'
    0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, 0x0F, // U+2590 '▐'
    0x22, 0x88, 0x22, 0x88, 0x22, 0x88, 0x22, 0x88, // U+2591 '░'
    0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, // U+2592 '▒'
    0xDD, 0x77, 0xDD, 0x77, 0xDD, 0x77, 0xDD, 0x77, // U+2593 '▓'
    0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, // U+2594 '▔'
    0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, 0x01, // U+2595 '▕'
    0x00, 0x00, 0x00, 0x00, 0xF0, 0xF0, 0xF0, 0xF0, // U+2596 '▖'
    0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F, // U+2597 '▗'
    0xF0, 0xF0, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00, // U+2598 '▘'
    0xF0, 0xF0, 0xF0, 0xF0, 0xFF, 0xFF, 0xFF, 0xFF, // U+2599 '▙'
    0xF0, 0xF0, 0xF0, 0xF0, 0x0F, 0x0F, 0x0F, 0x0F, // U+259A '▚'
    0xFF, 0xFF, 0xFF, 0xFF, 0xF0, 0xF0, 0xF0, 0xF0, // U+259B '▛'
    0xFF, 0xFF, 0xFF, 0xFF, 0x0F, 0x0F, 0x0F, 0x0F, // U+259C '▜'
    0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, // U+259D '▝'
    0x0F, 0x0F, 0x0F, 0x0F, 0xF0, 0xF0, 0xF0, 0xF0, // U+259E '▞'
    0x0F, 0x0F, 0x0F, 0x0F, 0xFF, 0xFF, 0xFF, 0xFF, // U+259F '▟'
];

static GEOMETRIC_SHAPES: [u8; 464] = [
    0x00, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x7E, 0x00, // U+25A0 '■'
    0x00, 0x7E, 0x42, 0x42, 0x42, 0x42, 0x7E, 0x00, // U+25A1 '□'
    0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, // U+25A2 '▢'
    0x00, 0x7E, 0x42, 0x5A, 0x5A, 0x42, 0x7E, 0x00, // U+25A3 '▣'
    0x00, 0x7E, 0x7E, 0x42, 0x7E, 0x42, 0x7E, 0x00, // U+25A4 '▤'
    0x00, 0x7E, 0x5A, 0x5A, 0x5A, 0x5A, 0x7E, 0x00, // U+25A5 '▥'
    0x00, 0x7E, 0x5A, 0x66, 0x5A, 0x66, 0x7E, 0x00, // U+25A6 '▦'
    0x00, 0x7E, 0x62, 0x52, 0x4A, 0x46, 0x7E, 0x00, // U+25A7 '▧'
    0x00, 0x7E, 0x46, 0x4A, 0x52, 0x62, 0x7E, 0x00, // U+25A8 '▨'
    0x00, 0x7E, 0x66, 0x5A, 0x5A, 0x66, 0x7E, 0x00, // U+25A9 '▩'
    0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00, // U+25AA '▪'
    0x00, 0x00, 0x3C, 0x24, 0x24, 0x3C, 0x00, 0x00, // U+25AB '▫'
    0x00, 0x00, 0x00, 0x7E, 0x7E, 0x7E, 0x00, 0x00, // U+25AC '▬'
    0x00, 0x00, 0x00, 0x7E, 0x42, 0x7E, 0x00, 0x00, // U+25AD '▭'
    0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, // U+25AE '▮'
    0x00, 0x3C, 0x24, 0x24, 0x24, 0x24, 0x3C, 0x00, // U+25AF '▯'
    0x00, 0x00, 0x1F, 0x3E, 0x7C, 0xF8, 0x00, 0x00, // U+25B0 '▰'
    0x00, 0x00, 0x1F, 0x22, 0x44, 0xF8, 0x00, 0x00, // U+25B1 '▱'
    0x00, 0x18, 0x3C, 0x3C, 0x7E, 0x7E, 0xFF, 0x00, // U+25B2 '▲'
    0x00, 0x18, 0x24, 0x24, 0x42, 0x42, 0x7E, 0x00, // U+25B3 '△'
    0x00, 0x00, 0x18, 0x3C, 0x7E, 0x00, 0x00, 0x00, // U+25B4 '▴'
    0x00, 0x00, 0x18, 0x24, 0x7E, 0x00, 0x00, 0x00, // U+25B5 '▵'
    0xC0, 0xF0, 0xFC, 0xFF, 0xFC, 0xF0, 0xC0, 0x00, // U+25B6 '▶'
    0xC0, 0xB0, 0x8C, 0x83, 0x8C, 0xB0, 0xC0, 0x00, // U+25B7 '▷'
    0x00, 0x60, 0x78, 0x7E, 0x78, 0x60, 0x00, 0x00, // U+25B8 '▸'
    0x00, 0x60, 0x58, 0x46, 0x58, 0x60, 0x00, 0x00, // U+25B9 '▹'
    0x80, 0xE0, 0xF8, 0xFE, 0xF8, 0xE0, 0x80, 0x00, // U+25BA '►'
    0x80, 0xE0, 0x98, 0x86, 0x98, 0xE0, 0x80, 0x00, // U+25BB '▻'
    0x00, 0xFF, 0x7E, 0x7E, 0x3C, 0x3C, 0x18, 0x00, // U+25BC '▼'
    0x00, 0x7E, 0x42, 0x42, 0x24, 0x24, 0x18, 0x00, // U+25BD '▽'
    0x00, 0x00, 0x7E, 0x3C, 0x18, 0x00, 0x00, 0x00, // U+25BE '▾'
    0x00, 0x00, 0x7E, 0x24, 0x18, 0x00, 0x00, 0x00, // U+25BF '▿'
    0x03, 0x0F, 0x3F, 0xFF, 0x3F, 0x0F, 0x03, 0x00, // U+25C0 '◀'
    0x03, 0x0D, 0x31, 0xC1, 0x31, 0x0D, 0x03, 0x00, // U+25C1 '◁'
    0x00, 0x06, 0x1E, 0x7E, 0x1E, 0x06, 0x00, 0x00, // U+25C2 '◂'
    0x00, 0x06, 0x1A, 0x62, 0x1A, 0x06, 0x00, 0x00, // U+25C3 '◃'
    0x01, 0x07, 0x1F, 0x7F, 0x1F, 0x07, 0x01, 0x00, // U+25C4 '◄'
    0x01, 0x07, 0x19, 0x61, 0x19, 0x07, 0x01, 0x00, // U+25C5 '◅'
    0x18, 0x3C, 0x7E, 0xFF, 0x7E, 0x3C, 0x18, 0x00, // U+25C6 '◆'
    0x18, 0x24, 0x42, 0x81, 0x42, 0x24, 0x18, 0x00, // U+25C7 '◇'
    0x18, 0x24, 0x5A, 0xBD, 0x5A, 0x24, 0x18, 0x00, // U+25C8 '◈'
    0x3C, 0x42, 0x99, 0xBD, 0xBD, 0x99, 0x42, 0x3C, // U+25C9 '◉'
    0x00, 0x18, 0x24, 0x42, 0x24, 0x18, 0x00, 0x00, // U+25CA '◊'
    0x00, 0x3C, 0x42, 0x42, 0x42, 0x42, 0x3C, 0x00, // U+25CB '○'
    0x00, 0x24, 0x42, 0x00, 0x00, 0x42, 0x24, 0x00, // U+25CC '◌'
    0x00, 0x3C, 0x5A, 0x5A, 0x5A, 0x5A, 0x3C, 0x00, // U+25CD '◍'
    0x00, 0x3C, 0x42, 0x5A, 0x5A, 0x42, 0x3C, 0x00, // U+25CE '◎'
    0x00, 0x3C, 0x7E, 0x7E, 0x7E, 0x7E, 0x3C, 0x00, // U+25CF '●'
    0x00, 0x3C, 0x72, 0x72, 0x72, 0x72, 0x3C, 0x00, // U+25D0 '◐'
    0x00, 0x3C, 0x4E, 0x4E, 0x4E, 0x4E, 0x3C, 0x00, // U+25D1 '◑'
    0x00, 0x3C, 0x42, 0x42, 0x7E, 0x7E, 0x3C, 0x00, // U+25D2 '◒'
    0x00, 0x3C, 0x7E, 0x7E, 0x42, 0x42, 0x3C, 0x00, // U+25D3 '◓'
    0x00, 0x3C, 0x4E, 0x4E, 0x42, 0x42, 0x3C, 0x00, // U+25D4 '◔'
    0x00, 0x3C, 0x4E, 0x7E, 0x7E, 0x7E, 0x3C, 0x00, // U+25D5 '◕'
    0x00, 0x30, 0x70, 0xF0, 0xF0, 0x70, 0x30, 0x00, // U+25D6 '◖'
    0x00, 0x0C, 0x0E, 0x0F, 0x0F, 0x0E, 0x0C, 0x00, // U+25D7 '◗'
    0xFF, 0xFF, 0xE7, 0xC3, 0xC3, 0xE7, 0xFF, 0xFF, // U+25D8 '◘'
    0xFF, 0x81, 0x99, 0xBD, 0xBD, 0x99, 0x81, 0xFF, // U+25D9 '◙'
];

static FACES: [u8; 24] = [
    0x7E, 0x81, 0xA5, 0x81, 0xBD, 0x99, 0x81, 0x7E, // U+263A '☺'
    0x7E, 0xFF, 0xDB, 0xFF, 0xC3, 0xE7, 0xFF, 0x7E, // U+263B '☻'
    0x18, 0xDB, 0x3C, 0xE7, 0xE7, 0x3C, 0xDB, 0x18, // U+263C '☼'
];

static FEMALE_SIGN: [u8; 8] = [
    0x3C, 0x66, 0x66, 0x3C, 0x18, 0x7E, 0x18, 0x00, // U+2640 '♀'
];

static MALE_SIGN: [u8; 8] = [
    0x0F, 0x07, 0x0F, 0x7D, 0xCC, 0xCC, 0xCC, 0x78, // U+2642 '♂'
];

static CARD_SUITS: [u8; 64] = [
    0x18, 0x3C, 0x7E, 0xFF, 0xFF, 0x18, 0x3C, 0x00, // U+2660 '♠'
    0x00, 0x66, 0x99, 0x81, 0x81, 0x42, 0x24, 0x18, // U+2661 '♡'
    0x10, 0x28, 0x44, 0x82, 0x44, 0x28, 0x10, 0x00, // U+2662 '♢'
    0x18, 0x3C, 0x18, 0x7E, 0xFF, 0x7E, 0x18, 0x3C, // U+2663 '♣'
    0x18, 0x24, 0x42, 0x81, 0x81, 0x18, 0x3C, 0x00, // U+2664 '♤'
    0x6C, 0xFE, 0xFE, 0xFE, 0x7C, 0x38, 0x10, 0x00, // U+2665 '♥'
    0x10, 0x38, 0x7C, 0xFE, 0x7C, 0x38, 0x10, 0x00, // U+2666 '♦'
    0x18, 0x24, 0x18, 0x66, 0x99, 0x66, 0x18, 0x3C, // U+2667 '♧'
];

static NOTES: [u8; 16] = [
    0x18, 0x1C, 0x16, 0x10, 0x10, 0x70, 0xF0, 0x60, // U+266A '♪'
    0x7F, 0x63, 0x7F, 0x63, 0x63, 0x67, 0xE6, 0xC0, // U+266B '♫'
];

/// Ordered, non-overlapping lookup ranges for the built-in font.
pub(super) static RANGES: &[GlyphRange] = &[
    GlyphRange { start: 0x0020, stop: 0x007F, glyphs: GlyphSource::Table(&BASIC_LATIN) },
    GlyphRange { start: 0x00A0, stop: 0x0100, glyphs: GlyphSource::Table(&LATIN_1) },
    GlyphRange { start: 0x0192, stop: 0x0193, glyphs: GlyphSource::Table(&FLORIN) },
    GlyphRange { start: 0x0391, stop: 0x03CA, glyphs: GlyphSource::Table(&GREEK) },
    GlyphRange { start: 0x2000, stop: 0x200C, glyphs: GlyphSource::Shared(&BLANK) },
    GlyphRange { start: 0x2017, stop: 0x2020, glyphs: GlyphSource::Table(&PUNCTUATION) },
    GlyphRange { start: 0x2022, stop: 0x2023, glyphs: GlyphSource::Table(&BULLET) },
    GlyphRange { start: 0x2026, stop: 0x2027, glyphs: GlyphSource::Table(&ELLIPSIS) },
    GlyphRange { start: 0x203C, stop: 0x203D, glyphs: GlyphSource::Table(&DOUBLE_BANG) },
    GlyphRange { start: 0x207F, stop: 0x2080, glyphs: GlyphSource::Table(&SUPERSCRIPT_N) },
    GlyphRange { start: 0x20A7, stop: 0x20A8, glyphs: GlyphSource::Table(&PESETA) },
    GlyphRange { start: 0x20AC, stop: 0x20AD, glyphs: GlyphSource::Table(&EURO) },
    GlyphRange { start: 0x2190, stop: 0x2196, glyphs: GlyphSource::Table(&ARROWS) },
    GlyphRange { start: 0x21A8, stop: 0x21A9, glyphs: GlyphSource::Table(&UPDOWN_ARROW_BASE) },
    GlyphRange { start: 0x2219, stop: 0x221A, glyphs: GlyphSource::Table(&BULLET_OPERATOR) },
    GlyphRange { start: 0x221A, stop: 0x221B, glyphs: GlyphSource::Table(&SQUARE_ROOT) },
    GlyphRange { start: 0x221E, stop: 0x2220, glyphs: GlyphSource::Table(&MATH) },
    GlyphRange { start: 0x2229, stop: 0x222A, glyphs: GlyphSource::Table(&INTERSECTION) },
    GlyphRange { start: 0x2248, stop: 0x2249, glyphs: GlyphSource::Table(&ALMOST_EQUAL) },
    GlyphRange { start: 0x2261, stop: 0x2262, glyphs: GlyphSource::Table(&IDENTICAL) },
    GlyphRange { start: 0x2264, stop: 0x2266, glyphs: GlyphSource::Table(&COMPARISON) },
    GlyphRange { start: 0x2302, stop: 0x2303, glyphs: GlyphSource::Table(&HOUSE) },
    GlyphRange { start: 0x2310, stop: 0x2311, glyphs: GlyphSource::Table(&REVERSED_NOT) },
    GlyphRange { start: 0x2320, stop: 0x2322, glyphs: GlyphSource::Table(&INTEGRAL_HALVES) },
    GlyphRange { start: 0x2500, stop: 0x2580, glyphs: GlyphSource::Table(&BOX_DRAWING) },
    GlyphRange { start: 0x2580, stop: 0x25A0, glyphs: GlyphSource::Table(&BLOCK_ELEMENTS) },
    GlyphRange { start: 0x25A0, stop: 0x25DA, glyphs: GlyphSource::Table(&GEOMETRIC_SHAPES) },
    GlyphRange { start: 0x263A, stop: 0x263D, glyphs: GlyphSource::Table(&FACES) },
    GlyphRange { start: 0x2640, stop: 0x2641, glyphs: GlyphSource::Table(&FEMALE_SIGN) },
    GlyphRange { start: 0x2642, stop: 0x2643, glyphs: GlyphSource::Table(&MALE_SIGN) },
    GlyphRange { start: 0x2660, stop: 0x2668, glyphs: GlyphSource::Table(&CARD_SUITS) },
    GlyphRange { start: 0x266A, stop: 0x266C, glyphs: GlyphSource::Table(&NOTES) },
];

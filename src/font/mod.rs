// src/font/mod.rs

//! Bitmap font lookup.
//!
//! A font is a fixed cell size plus an ordered list of codepoint
//! ranges. Each range either shares one glyph across all codepoints or
//! carries a contiguous table of `(stop - start)` glyphs. Lookup is a
//! linear scan; codepoints outside every range fall back to the notdef
//! glyph, so rendering is total.
//!
//! Glyphs are stored row-major, one byte per row, bit 7 leftmost.

mod data;

pub mod boxes;

/// Glyph storage for one codepoint range.
#[derive(Debug, Clone, Copy)]
pub enum GlyphSource {
    /// Every codepoint in the range renders the same glyph.
    Shared(&'static [u8; 8]),
    /// One glyph per codepoint, `char_height` bytes each.
    Table(&'static [u8]),
}

/// A half-open codepoint range `[start, stop)` with its glyphs.
#[derive(Debug, Clone, Copy)]
pub struct GlyphRange {
    /// First covered codepoint.
    pub start: u32,
    /// One past the last covered codepoint.
    pub stop: u32,
    /// Glyph bytes for the range.
    pub glyphs: GlyphSource,
}

/// A bitmap font: cell geometry plus ordered glyph ranges.
#[derive(Debug, Clone, Copy)]
pub struct Font {
    /// Cell width in pixels (at most 8; one byte per row).
    pub char_width: usize,
    /// Cell height in pixels; also the byte count per glyph.
    pub char_height: usize,
    /// Ordered, non-overlapping codepoint ranges.
    pub ranges: &'static [GlyphRange],
    /// Glyph used for codepoints outside every range.
    pub notdef: &'static [u8],
}

/// The built-in 8x8 font.
static BUILTIN: Font = Font {
    char_width: 8,
    char_height: 8,
    ranges: data::RANGES,
    notdef: &data::NOTDEF,
};

impl Font {
    /// Returns the built-in 8x8 font.
    #[must_use]
    pub fn builtin() -> &'static Font {
        &BUILTIN
    }

    /// Returns the `char_height` row bytes for a codepoint.
    ///
    /// Unmapped codepoints return the notdef glyph.
    #[must_use]
    pub fn glyph_data(&self, glyph: char) -> &'static [u8] {
        let cp = glyph as u32;
        for range in self.ranges {
            if cp >= range.start && cp < range.stop {
                return match range.glyphs {
                    GlyphSource::Shared(rows) => rows,
                    GlyphSource::Table(table) => {
                        let offset = (cp - range.start) as usize * self.char_height;
                        &table[offset..offset + self.char_height]
                    }
                };
            }
        }
        self.notdef
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_is_blank() {
        let rows = Font::builtin().glyph_data(' ');
        assert_eq!(rows, &[0u8; 8]);
    }

    #[test]
    fn capital_a_has_pixels() {
        let rows = Font::builtin().glyph_data('A');
        assert_eq!(rows.len(), 8);
        assert!(rows.iter().any(|&r| r != 0));
        // Symmetric stem rows.
        assert_eq!(rows[2], rows[3]);
    }

    #[test]
    fn unmapped_codepoint_renders_notdef() {
        let font = Font::builtin();
        let rows = font.glyph_data('\u{FFFD}');
        assert_eq!(rows, font.notdef);
        assert_eq!(font.glyph_data('\u{E000}'), font.notdef);
    }

    #[test]
    fn shared_range_returns_same_glyph() {
        let font = Font::builtin();
        // The general-punctuation space range shares one blank glyph.
        assert_eq!(font.glyph_data('\u{2000}'), font.glyph_data('\u{200B}'));
        assert_eq!(font.glyph_data('\u{2003}'), &[0u8; 8]);
    }

    #[test]
    fn full_block_is_solid() {
        assert_eq!(Font::builtin().glyph_data('\u{2588}'), &[0xFF; 8]);
    }

    #[test]
    fn box_drawing_lines_connect() {
        let font = Font::builtin();
        // Horizontal light line occupies a full row.
        assert!(font.glyph_data('\u{2500}').contains(&0xFF));
        // Vertical light line is the same column in every row.
        let v = font.glyph_data('\u{2502}');
        assert!(v.iter().all(|&r| r == v[0] && r != 0));
    }

    #[test]
    fn ranges_are_sorted_and_disjoint() {
        let mut prev_stop = 0;
        for range in Font::builtin().ranges {
            assert!(range.start >= prev_stop);
            assert!(range.stop > range.start);
            prev_stop = range.stop;
        }
    }

    #[test]
    fn cp437_repertoire_is_covered() {
        let font = Font::builtin();
        for ch in ['☺', '♪', '◘', '▒', '╬', 'π', 'ñ', '√', '⌂', '►'] {
            assert_ne!(font.glyph_data(ch), font.notdef, "missing {ch:?}");
        }
    }
}

// src/cell.rs

//! The character cell: glyph, packed palette nibbles, and style flags.

use bitflags::bitflags;

bitflags! {
    /// Per-cell style flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Style: u8 {
        /// Cell contributes to the emissive glow layer.
        const SHINY     = 1 << 0;
        /// Glyph rows are smeared one pixel right.
        const BOLD      = 1 << 1;
        /// Bottom glyph row is forced to foreground.
        const UNDERLINE = 1 << 2;
        /// Glyph is hidden during the second half of the blink period.
        const BLINK     = 1 << 3;
    }
}

/// Packs foreground and background palette indices into one byte:
/// low nibble = foreground, high nibble = background.
#[inline]
#[must_use]
pub fn pack_color(fg: u8, bg: u8) -> u8 {
    (fg & 0xF) | (bg << 4)
}

/// One grid cell.
///
/// The default cell is a space drawn with foreground 8 (grey) on
/// background 0 (black) and no styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharData {
    /// The displayed codepoint.
    pub glyph: char,
    /// Packed palette indices; see [`pack_color`].
    pub color: u8,
    /// Style flags.
    pub style: Style,
}

/// Palette index of the default foreground (grey).
pub const DEFAULT_FG: u8 = 8;
/// Palette index of the default background (black).
pub const DEFAULT_BG: u8 = 0;

impl Default for CharData {
    fn default() -> Self {
        CharData {
            glyph: ' ',
            color: pack_color(DEFAULT_FG, DEFAULT_BG),
            style: Style::empty(),
        }
    }
}

impl CharData {
    /// Creates a cell from its parts.
    #[inline]
    #[must_use]
    pub fn new(glyph: char, fg: u8, bg: u8, style: Style) -> Self {
        CharData {
            glyph,
            color: pack_color(fg, bg),
            style,
        }
    }

    /// Foreground palette index (0..=15).
    #[inline]
    #[must_use]
    pub fn fg(&self) -> u8 {
        self.color & 0xF
    }

    /// Background palette index (0..=15).
    #[inline]
    #[must_use]
    pub fn bg(&self) -> u8 {
        self.color >> 4
    }

    /// Replaces the foreground nibble.
    #[inline]
    pub fn set_fg(&mut self, fg: u8) {
        self.color = pack_color(fg, self.bg());
    }

    /// Replaces the background nibble.
    #[inline]
    pub fn set_bg(&mut self, bg: u8) {
        self.color = pack_color(self.fg(), bg);
    }
}

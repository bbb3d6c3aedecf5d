// src/font/boxes.rs

//! Predefined glyph sets for frame drawing.
//!
//! A set holds the eight glyphs of a rectangular frame in the order
//! top-left, top, top-right, left, right, bottom-left, bottom,
//! bottom-right.

/// Eight frame glyphs; see the module docs for ordering.
pub type BoxGlyphs = [char; 8];

/// Light single lines.
pub const THIN: BoxGlyphs = ['┌', '─', '┐', '│', '│', '└', '─', '┘'];

/// Full-block frame.
pub const LARGE: BoxGlyphs = ['▛', '▀', '▜', '▌', '▐', '▙', '▄', '▟'];

/// Block bars top and bottom, light lines on the sides.
pub const LARGE_H: BoxGlyphs = ['█', '▀', '█', '│', '│', '█', '▄', '█'];

/// Block bars on the sides, light lines top and bottom.
pub const LARGE_V: BoxGlyphs = ['█', '─', '█', '▌', '▐', '█', '─', '█'];

/// Heavy single lines.
pub const HEAVY: BoxGlyphs = ['┏', '━', '┓', '┃', '┃', '┗', '━', '┛'];

/// Heavy lines with crossing corners.
pub const HEAVY_PLUS: BoxGlyphs = ['╋', '━', '╋', '┃', '┃', '╋', '━', '╋'];

/// Double lines.
pub const DOUBLE: BoxGlyphs = ['╔', '═', '╗', '║', '║', '╚', '═', '╝'];

/// Double horizontals with single verticals.
pub const DOUBLE_H: BoxGlyphs = ['╒', '═', '╕', '│', '│', '╘', '═', '╛'];

// src/console/options.rs

//! Render options.
//!
//! Everything here defaults to the classic CRT look: centered grid,
//! glow from both pixel classes, blue-noise shimmer, no tonemapping.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How the final buffer is written into the caller framebuffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BlendMode {
    /// Alpha blend over the existing framebuffer contents.
    #[default]
    SourceOver,
    /// Overwrite framebuffer pixels.
    Copy,
}

/// Horizontal placement of the scaled grid inside the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HAlign {
    /// Flush left.
    Left,
    /// Centered.
    #[default]
    Center,
    /// Flush right.
    Right,
}

/// Vertical placement of the scaled grid inside the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VAlign {
    /// Flush top.
    Top,
    /// Centered.
    #[default]
    Middle,
    /// Flush bottom.
    Bottom,
}

/// Render configuration; see each field for its default.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Blit mode for the final buffer. Default: source-over.
    pub blend_mode: BlendMode,
    /// Horizontal alignment of the grid. Default: centered.
    pub halign: HAlign,
    /// Vertical alignment of the grid. Default: middle.
    pub valign: VAlign,
    /// When true the caller promises not to touch framebuffer pixels
    /// inside the dirty region between renders, so blits may cover
    /// only the changed sub-rectangle. Default: false.
    pub allow_out_caching: bool,
    /// Palette index used for the letterbox border. Default: 0.
    pub border_color: u8,
    /// Whether the border contributes to the glow layer. Default: off.
    pub border_shiny: bool,
    /// Full blink period in seconds; the glyph is visible during the
    /// first half. Default: 1.2.
    pub blink_time: f32,
    /// Multiplier on the blur layer during composition. Default: 1.0.
    pub blur_amount: f32,
    /// Multiplier on the computed blur filter width. Default: 1.0.
    pub blur_scale: f32,
    /// Whether foreground pixels of shiny cells glow. Default: true.
    pub blur_foreground: bool,
    /// Whether background pixels of shiny cells glow. Default: true.
    pub blur_background: bool,
    /// Modulate the blur with the built-in blue-noise tile.
    /// Default: true.
    pub noise_texture: bool,
    /// Strength of the noise modulation. Default: 1.0.
    pub noise_amount: f32,
    /// Bleed over-range channel energy into the other channels.
    /// Default: false.
    pub tonemapping: bool,
    /// Fraction of the over-range luma added back per channel.
    /// Default: 0.3.
    pub tonemapping_ratio: f32,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            blend_mode: BlendMode::default(),
            halign: HAlign::default(),
            valign: VAlign::default(),
            allow_out_caching: false,
            border_color: 0,
            border_shiny: false,
            blink_time: 1.2,
            blur_amount: 1.0,
            blur_scale: 1.0,
            blur_foreground: true,
            blur_background: true,
            noise_texture: true,
            noise_amount: 1.0,
            tonemapping: false,
            tonemapping_ratio: 0.3,
        }
    }
}

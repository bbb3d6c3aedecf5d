// src/lib.rs

//! A virtual text-mode console with CRT-style rendering.
//!
//! `phosphor` maintains a grid of character cells (glyph, 16-color
//! foreground/background, style flags) and composites it as RGBA
//! pixels into a caller-supplied framebuffer. Rendering is damage
//! driven: a per-frame validator diffs the grid against the previously
//! rendered state and only the changed region flows through the
//! pipeline of glyph rasterization, integer upscale, separable Gaussian
//! glow blur, composition, and blit.
//!
//! Text reaches the grid through plain printing, an angle-bracket
//! markup language (`cprint`), an ANSI/VT escape interpreter over
//! UTF-8 or CP437 bytes (`print_ans`), or a compressed REXPaint-style
//! grid image (`print_xp`). A built-in 8x8 bitmap font covers Basic
//! Latin, Latin-1, a Greek subset, and the classic box, block, and
//! symbol ranges.
//!
//! ```
//! use phosphor::Console;
//!
//! let mut console = Console::new(40, 10);
//! console.outbuf(640, 200, 640 * 4);
//! console.cprintln("<lgreen>READY.</lgreen>");
//!
//! let mut framebuffer = vec![0u8; 640 * 200 * 4];
//! console.render(&mut framebuffer);
//! ```
//!
//! A single `Console` owns every internal buffer and is not
//! synchronized; calls on one instance must not overlap.

mod ansi;
mod cell;
mod color;
mod console;
mod font;
mod geometry;
mod markup;
mod palette;
mod render;
mod state;
mod xp;

pub use cell::{pack_color, CharData, Style, DEFAULT_BG, DEFAULT_FG};
pub use color::{blend_color, linear_u16_premul, Rgba8};
pub use console::{BlendMode, Console, HAlign, Options, VAlign};
pub use font::{boxes, Font, GlyphRange, GlyphSource};
pub use geometry::Rect;
pub use palette::{Palette, PalettePreset, PALETTE_SIZE};

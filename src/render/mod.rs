// src/render/mod.rs

//! The pixel pipeline.
//!
//! `render` runs a fixed sequence over console-owned planes:
//! layout → validate → rasterize → upscale → blur (H, V) → compose →
//! blit. Every stage is damage-driven; planes persist between frames so
//! only the changed region is recomputed and the rest stays valid.
//!
//! Plane spaces:
//! - *back*: unscaled cell pixels (`cols·cw × rows·ch`), RGBA plus a
//!   foreground-flag byte per pixel;
//! - *post*: output-sized RGBA after scale and margins, with the
//!   emissive (`emit`), transposed H-blur intermediate (`emit_h`),
//!   float blur, and final planes alongside;
//! - *output*: the caller's bytes, borrowed for the duration of `blit`.

mod blit;
mod blur;
mod compose;
mod layout;
mod noise;
mod rasterize;
mod upscale;
mod validate;

pub(crate) use blur::build_kernel;
pub(crate) use blur::MAX_FILTER_WIDTH;

use crate::color::Rgba8;
use crate::console::Console;
use crate::geometry::Rect;

/// Grid placement inside the output buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Layout {
    /// Integer upscale factor, at least 1.
    pub scale: i32,
    /// Left letterbox margin in output pixels; may be negative when the
    /// output is smaller than the grid.
    pub margin_x: i32,
    /// Top letterbox margin in output pixels.
    pub margin_y: i32,
}

/// Console-owned pixel planes and per-frame damage bookkeeping.
#[derive(Debug)]
pub(crate) struct Pipeline {
    pub back_w: usize,
    pub back_h: usize,
    /// Cell pixels at native font resolution.
    pub back: Vec<Rgba8>,
    /// Bit 0 set where the back pixel came from the foreground color.
    pub back_flags: Vec<u8>,

    pub out_w: usize,
    pub out_h: usize,
    pub out_pitch: usize,
    /// Scaled and positioned RGBA image.
    pub post: Vec<Rgba8>,
    /// Premultiplied pseudo-linear emissive, u16 per channel.
    pub emit: Vec<[u16; 4]>,
    /// H-blurred emissive, stored transposed (`[x * out_h + y]`) so the
    /// vertical pass reads contiguously.
    pub emit_h: Vec<[u16; 4]>,
    /// Final blur layer, float RGBA.
    pub blur: Vec<[f32; 4]>,
    /// Composited image awaiting blit.
    pub final_px: Vec<Rgba8>,

    pub layout: Layout,
    pub kernel: Vec<f32>,
    pub filter_width: usize,

    /// Output-space region the next blit will write; empty when clean.
    pub update_rect: Rect,
}

impl Pipeline {
    pub fn new() -> Self {
        Pipeline {
            back_w: 0,
            back_h: 0,
            back: Vec::new(),
            back_flags: Vec::new(),
            out_w: 0,
            out_h: 0,
            out_pitch: 0,
            post: Vec::new(),
            emit: Vec::new(),
            emit_h: Vec::new(),
            blur: Vec::new(),
            final_px: Vec::new(),
            layout: Layout::default(),
            kernel: Vec::new(),
            filter_width: 0,
            update_rect: Rect::empty(),
        }
    }

    /// Reallocates the back planes for a new cell-pixel size.
    pub fn resize_back(&mut self, width: usize, height: usize) {
        if width != self.back_w || height != self.back_h {
            self.back_w = width;
            self.back_h = height;
            let len = width * height;
            self.back = vec![Rgba8::default(); len];
            self.back_flags = vec![0; len];
        }
    }

    /// Reallocates the output-sized planes for a new framebuffer
    /// geometry.
    pub fn set_output(&mut self, width: usize, height: usize, pitch_bytes: usize) {
        self.out_pitch = pitch_bytes;
        if width != self.out_w || height != self.out_h {
            self.out_w = width;
            self.out_h = height;
            let len = width * height;
            self.post = vec![Rgba8::default(); len];
            self.emit = vec![[0; 4]; len];
            self.emit_h = vec![[0; 4]; len];
            self.blur = vec![[0.0; 4]; len];
            self.final_px = vec![Rgba8::default(); len];
        }
    }

    /// Half-width of the blur kernel in pixels.
    #[inline]
    pub fn blur_radius(&self) -> i32 {
        (self.filter_width as i32 - 1) / 2
    }

    /// The whole output buffer as a rectangle.
    #[inline]
    pub fn out_rect(&self) -> Rect {
        Rect::sized(0, 0, self.out_w as i32, self.out_h as i32)
    }
}

impl Console {
    /// Renders pending changes into `out`.
    ///
    /// `out` must hold at least `pitch_bytes × height` bytes as
    /// configured by [`Console::outbuf`]; pixels are RGBA8. The call is
    /// a no-op when nothing changed since the last render.
    pub fn render(&mut self, out: &mut [u8]) {
        self.recompute_layout();
        self.validate();
        let (damage, update) = self.frame_rects();
        self.pipeline.update_rect = update;
        if update.is_empty() {
            return;
        }
        self.rasterize_dirty();
        self.back_to_post();
        self.apply_blur();
        self.compose(&damage);
        self.blit(out);
        self.finish_frame();
    }

    /// True if a render would write anything.
    pub fn has_pending_update(&mut self) -> bool {
        !self.update_rect().is_empty()
    }

    /// The output region the next [`Console::render`] will write. With
    /// out-caching enabled this can be a sub-rectangle; otherwise any
    /// pending change reports the whole buffer.
    pub fn update_rect(&mut self) -> Rect {
        self.recompute_layout();
        self.validate();
        let (_, update) = self.frame_rects();
        update
    }

    /// Maps a cell rectangle into output pixels.
    pub(crate) fn cell_rect_to_out(&self, rect: Rect) -> Rect {
        let layout = &self.pipeline.layout;
        rect.scale_xy(
            self.font.char_width as i32 * layout.scale,
            self.font.char_height as i32 * layout.scale,
        )
        .translate(layout.margin_x, layout.margin_y)
    }

    /// Computes the damage rectangle (what must be recomposed) and the
    /// update rectangle (what the blit will write), both in output
    /// space.
    fn frame_rects(&self) -> (Rect, Rect) {
        let out_rect = self.pipeline.out_rect();
        if self.dirty_border {
            return (out_rect, out_rect);
        }
        let radius = self.pipeline.blur_radius();
        let change = self.cell_rect_to_out(self.change_rect);
        let glow = self.cell_rect_to_out(self.blur_rect).grow(radius);
        let damage = change.merge(&glow).intersection(&out_rect);
        if damage.is_empty() {
            return (damage, damage);
        }
        if self.opts.allow_out_caching {
            (damage, damage)
        } else {
            (damage, out_rect)
        }
    }

    /// Clears the consumed per-frame damage state.
    fn finish_frame(&mut self) {
        self.char_dirty.fill(false);
        self.change_rect = Rect::empty();
        self.blur_rect = Rect::empty();
        self.dirty_border = false;
        self.pipeline.update_rect = Rect::empty();
    }
}

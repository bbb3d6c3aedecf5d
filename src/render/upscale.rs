// src/render/upscale.rs

//! Back-to-post upscale: nearest-neighbor duplication of dirty cells
//! into the output-sized post plane, with simultaneous extraction of
//! the emissive layer and letterbox border fill.

use super::rasterize::FLAG_FOREGROUND;
use crate::cell::Style;
use crate::color::linear_u16_premul;
use crate::console::Console;
use crate::geometry::Rect;

impl Console {
    /// Copies dirty cells from back into post at the current scale and
    /// margins, writing the premultiplied emissive plane for shiny
    /// pixels. When the border is dirty the letterbox area is refilled
    /// too.
    pub(crate) fn back_to_post(&mut self) {
        let out_rect = self.pipeline.out_rect();
        if out_rect.is_empty() {
            return;
        }
        for row in 0..self.rows {
            for col in 0..self.cols {
                if !self.char_dirty[row * self.cols + col] {
                    continue;
                }
                let cell = self.chars[row * self.cols + col];
                let shiny = cell.style.contains(Style::SHINY);
                let target = self
                    .cell_rect_to_out(Rect::sized(col as i32, row as i32, 1, 1))
                    .intersection(&out_rect);
                self.upscale_area(&target, shiny);
            }
        }

        if self.dirty_border {
            self.fill_border(&out_rect);
        }
    }

    /// Upscales one clipped output-space area from the back planes.
    fn upscale_area(&mut self, target: &Rect, shiny: bool) {
        let layout = self.pipeline.layout;
        let scale = layout.scale;
        let out_w = self.pipeline.out_w;
        let back_w = self.pipeline.back_w as i32;
        let take_fg = shiny && self.opts.blur_foreground;
        let take_bg = shiny && self.opts.blur_background;

        for oy in target.top..target.bottom {
            let sy = (oy - layout.margin_y) / scale;
            let back_row = sy * back_w;
            let out_row = oy as usize * out_w;
            for ox in target.left..target.right {
                let sx = (ox - layout.margin_x) / scale;
                let src = (back_row + sx) as usize;
                let color = self.pipeline.back[src];
                let is_fg = self.pipeline.back_flags[src] & FLAG_FOREGROUND != 0;
                let dst = out_row + ox as usize;
                self.pipeline.post[dst] = color;
                self.pipeline.emit[dst] = if (is_fg && take_fg) || (!is_fg && take_bg) {
                    linear_u16_premul(color)
                } else {
                    [0; 4]
                };
            }
        }
    }

    /// Fills the letterbox area outside the grid with the border color.
    fn fill_border(&mut self, out_rect: &Rect) {
        let grid = self
            .cell_rect_to_out(Rect::sized(0, 0, self.cols as i32, self.rows as i32))
            .intersection(out_rect);
        let color = self.palette.entry_opaque(self.opts.border_color as usize);
        let emit = if self.opts.border_shiny {
            linear_u16_premul(color)
        } else {
            [0; 4]
        };
        let out_w = self.pipeline.out_w;
        for oy in out_rect.top..out_rect.bottom {
            let out_row = oy as usize * out_w;
            for ox in out_rect.left..out_rect.right {
                if grid.contains(ox, oy) {
                    continue;
                }
                let dst = out_row + ox as usize;
                self.pipeline.post[dst] = color;
                self.pipeline.emit[dst] = emit;
            }
        }
    }
}

// src/render/layout.rs

//! Layout: integer scale, alignment margins, and the derived blur
//! filter width.

use super::{Layout, MAX_FILTER_WIDTH};
use crate::console::{Console, HAlign, VAlign};
use log::trace;

impl Console {
    /// Recomputes scale, margins, and the blur filter width from the
    /// current grid, font, output geometry, and options. Any layout
    /// change schedules a full redraw; a filter width change marks the
    /// whole blur layer dirty.
    pub(crate) fn recompute_layout(&mut self) {
        let grid_w = (self.cols * self.font.char_width) as i32;
        let grid_h = (self.rows * self.font.char_height) as i32;
        let out_w = self.pipeline.out_w as i32;
        let out_h = self.pipeline.out_h as i32;
        if grid_w == 0 || grid_h == 0 {
            return;
        }

        let scale = (out_w / grid_w).min(out_h / grid_h).max(1);
        let rem_x = out_w - grid_w * scale;
        let rem_y = out_h - grid_h * scale;
        let margin_x = match self.opts.halign {
            HAlign::Left => 0,
            HAlign::Center => rem_x / 2,
            HAlign::Right => rem_x,
        };
        let margin_y = match self.opts.valign {
            VAlign::Top => 0,
            VAlign::Middle => rem_y / 2,
            VAlign::Bottom => rem_y,
        };
        let layout = Layout {
            scale,
            margin_x,
            margin_y,
        };
        if layout != self.pipeline.layout {
            trace!(
                "layout changed: scale {} margins ({}, {})",
                scale,
                margin_x,
                margin_y
            );
            self.pipeline.layout = layout;
            self.dirty_border = true;
            self.dirty_all_chars = true;
            self.dirty_validation = true;
        }

        let width = (self.font.char_width as f32 * scale as f32 * self.opts.blur_scale * 2.5)
            .round() as usize;
        let width = (width | 1).min(MAX_FILTER_WIDTH);
        if width != self.pipeline.filter_width {
            self.pipeline.filter_width = width;
            self.pipeline.kernel = super::build_kernel(width);
            self.dirty_blur = true;
            self.dirty_validation = true;
        }
    }
}

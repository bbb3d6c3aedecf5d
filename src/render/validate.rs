// src/render/validate.rs

//! Per-frame invalidation: diff the grid against the rendered cache
//! and produce the change and glow rectangles.

use crate::cell::Style;
use crate::console::Console;
use crate::geometry::Rect;
use log::trace;

impl Console {
    /// Diffs the grid against the cached copy, accumulating the cell
    /// dirty plane and the two damage rectangles. Results are memoized:
    /// with no new mutations this returns immediately and the
    /// previously computed rectangles stand until a render consumes
    /// them.
    pub(crate) fn validate(&mut self) {
        if !self.dirty_validation {
            return;
        }

        if self.dirty_all_chars {
            let full = Rect::sized(0, 0, self.cols as i32, self.rows as i32);
            self.change_rect = full;
            self.blur_rect = full;
            self.char_dirty.fill(true);
            self.cache.copy_from_slice(&self.chars);
        } else {
            let mut change = self.change_rect;
            let mut glow = self.blur_rect;
            for row in 0..self.rows {
                for col in 0..self.cols {
                    let i = row * self.cols + col;
                    let cell = self.chars[i];
                    let cached = self.cache[i];
                    let redraw = cell != cached
                        || self.palette.is_dirty(cell.fg() as usize)
                        || self.palette.is_dirty(cell.bg() as usize)
                        || (cell.style.contains(Style::BLINK) && self.blink_flipped);
                    let shiny = cell.style.contains(Style::SHINY);
                    let was_shiny = cached.style.contains(Style::SHINY);
                    let glow_changed =
                        (redraw && (shiny || was_shiny)) || (self.dirty_blur && shiny);
                    if redraw {
                        self.char_dirty[i] = true;
                        self.cache[i] = cell;
                        change = change.merge_point(col as i32, row as i32);
                    }
                    if glow_changed {
                        glow = glow.merge_point(col as i32, row as i32);
                    }
                }
            }
            self.change_rect = change;
            self.blur_rect = glow;
        }

        trace!(
            "validated: change {:?} glow {:?}",
            self.change_rect,
            self.blur_rect
        );
        self.palette.clear_dirty();
        self.blink_flipped = false;
        self.dirty_blur = false;
        self.dirty_all_chars = false;
        self.dirty_validation = false;
    }
}

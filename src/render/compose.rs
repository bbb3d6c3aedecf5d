// src/render/compose.rs

//! Composition: post plus the weighted blur layer, with optional
//! over-range tonemapping, saturated into the final plane.

use crate::color::Rgba8;
use crate::console::Console;
use crate::geometry::Rect;

impl Console {
    /// Recomposes the damaged region into the final plane. Alpha is
    /// taken from the post plane; the blur layer only adds light.
    pub(crate) fn compose(&mut self, damage: &Rect) {
        let rect = damage.intersection(&self.pipeline.out_rect());
        let out_w = self.pipeline.out_w;
        let blur_amount = self.opts.blur_amount;
        let tonemap = self.opts.tonemapping;
        let ratio = self.opts.tonemapping_ratio;

        for y in rect.top..rect.bottom {
            let row = y as usize * out_w;
            for x in rect.left..rect.right {
                let i = row + x as usize;
                let post = self.pipeline.post[i];
                let blur = self.pipeline.blur[i];
                let mut r = post.r() as f32 + blur[0] * blur_amount;
                let mut g = post.g() as f32 + blur[1] * blur_amount;
                let mut b = post.b() as f32 + blur[2] * blur_amount;
                if tonemap {
                    let excess =
                        ((r - 255.0).max(0.0) + (g - 255.0).max(0.0) + (b - 255.0).max(0.0)) / 3.0;
                    let bleed = excess * ratio;
                    r += bleed;
                    g += bleed;
                    b += bleed;
                }
                self.pipeline.final_px[i] = Rgba8::new(
                    r.clamp(0.0, 255.0) as u8,
                    g.clamp(0.0, 255.0) as u8,
                    b.clamp(0.0, 255.0) as u8,
                    post.a(),
                );
            }
        }
    }
}

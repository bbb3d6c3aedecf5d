// src/render/blit.rs

//! Final blit into the caller framebuffer.
//!
//! The framebuffer is RGBA8 with a caller-chosen row pitch in bytes;
//! only the update rectangle is touched.

use crate::color::{blend_color, Rgba8};
use crate::console::{BlendMode, Console};
use log::warn;

impl Console {
    /// Writes the update rectangle of the final plane into `out`,
    /// either overwriting or source-over blending per the options.
    pub(crate) fn blit(&mut self, out: &mut [u8]) {
        let rect = self.pipeline.update_rect;
        let pitch = self.pipeline.out_pitch;
        let out_w = self.pipeline.out_w;
        let needed = self.pipeline.out_h * pitch;
        if out.len() < needed {
            warn!(
                "output buffer too small: {} bytes, need {}",
                out.len(),
                needed
            );
            return;
        }
        let blend = self.opts.blend_mode;

        for y in rect.top..rect.bottom {
            let src_row = y as usize * out_w;
            let dst_row = y as usize * pitch;
            for x in rect.left..rect.right {
                let px = self.pipeline.final_px[src_row + x as usize];
                let dst = dst_row + x as usize * 4;
                match blend {
                    BlendMode::Copy => {
                        out[dst..dst + 4].copy_from_slice(&px.0.to_le_bytes());
                    }
                    BlendMode::SourceOver => {
                        let existing = Rgba8(u32::from_le_bytes([
                            out[dst],
                            out[dst + 1],
                            out[dst + 2],
                            out[dst + 3],
                        ]));
                        let blended = blend_color(px, existing, px.a());
                        out[dst..dst + 4].copy_from_slice(&blended.0.to_le_bytes());
                    }
                }
            }
        }
    }
}

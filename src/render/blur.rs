// src/render/blur.rs

//! Separable Gaussian blur of the emissive plane.
//!
//! The horizontal pass writes its result transposed (`emit_h[x][y]`)
//! so the vertical pass walks memory sequentially. Both passes only
//! recompute the damaged region; untouched rows keep their previous
//! (still valid) results. The vertical pass converts back out of the
//! squared pseudo-linear domain and optionally modulates with the
//! blue-noise tile.

use super::noise::NOISE_16X16;
use crate::console::Console;
use crate::geometry::Rect;

/// Upper bound on the blur kernel width; always odd.
pub(crate) const MAX_FILTER_WIDTH: usize = 63;

/// Builds an odd-width 1-D Gaussian kernel that sums to 1.
///
/// Each tap integrates the Gaussian over one pixel:
/// `K[k + n] = Φ(n + ½) − Φ(n − ½)` with `Φ(x) = ½·erf(x / (√2·σ))`
/// and `σ = (width + 1) / 8`, then the taps are normalized so the DC
/// gain is exactly one.
pub(crate) fn build_kernel(width: usize) -> Vec<f32> {
    let width = width.max(1) | 1;
    let k = (width / 2) as i32;
    let sigma = (width + 1) as f64 / 8.0;
    let phi = |x: f64| 0.5 * libm::erf(x / (core::f64::consts::SQRT_2 * sigma));
    let mut kernel: Vec<f32> = (-k..=k)
        .map(|n| (phi(n as f64 + 0.5) - phi(n as f64 - 0.5)) as f32)
        .collect();
    let sum: f32 = kernel.iter().sum();
    for tap in kernel.iter_mut() {
        *tap /= sum;
    }
    kernel
}

impl Console {
    /// Runs both blur passes over the damaged glow region.
    pub(crate) fn apply_blur(&mut self) {
        let out_rect = self.pipeline.out_rect();
        if out_rect.is_empty() || self.pipeline.kernel.is_empty() {
            return;
        }
        let radius = self.pipeline.blur_radius();
        let glow = if self.dirty_border {
            out_rect
        } else {
            self.cell_rect_to_out(self.blur_rect)
        };
        if glow.is_empty() {
            return;
        }
        let h_rect = glow.grow_xy(radius, 0).intersection(&out_rect);
        let v_rect = glow.grow(radius).intersection(&out_rect);
        self.blur_horizontal(&h_rect);
        self.blur_vertical(&v_rect);
    }

    /// Horizontal pass: convolve emit rows, store transposed into
    /// `emit_h`. Out-of-buffer neighbors contribute zero.
    fn blur_horizontal(&mut self, rect: &Rect) {
        let out_w = self.pipeline.out_w as i32;
        let out_h = self.pipeline.out_h as i32;
        let kernel = &self.pipeline.kernel;
        let radius = self.pipeline.blur_radius();
        for y in rect.top..rect.bottom {
            let row = (y * out_w) as usize;
            for x in rect.left..rect.right {
                let mut accum = [0.0f32; 4];
                for (tap, &weight) in kernel.iter().enumerate() {
                    let sx = x + tap as i32 - radius;
                    if sx < 0 || sx >= out_w {
                        continue;
                    }
                    let px = self.pipeline.emit[row + sx as usize];
                    for c in 0..4 {
                        accum[c] += px[c] as f32 * weight;
                    }
                }
                let dst = (x * out_h + y) as usize;
                self.pipeline.emit_h[dst] = [
                    accum[0].min(65535.0) as u16,
                    accum[1].min(65535.0) as u16,
                    accum[2].min(65535.0) as u16,
                    accum[3].min(65535.0) as u16,
                ];
            }
        }
    }

    /// Vertical pass: convolve the transposed intermediate, square-root
    /// back into display range, apply noise, store float RGBA.
    fn blur_vertical(&mut self, rect: &Rect) {
        let out_w = self.pipeline.out_w as i32;
        let out_h = self.pipeline.out_h as i32;
        let kernel = &self.pipeline.kernel;
        let radius = self.pipeline.blur_radius();
        let noise_on = self.opts.noise_texture;
        let noise_amount = self.opts.noise_amount;
        for x in rect.left..rect.right {
            let column = (x * out_h) as usize;
            for y in rect.top..rect.bottom {
                let mut accum = [0.0f32; 4];
                for (tap, &weight) in kernel.iter().enumerate() {
                    let sy = y + tap as i32 - radius;
                    if sy < 0 || sy >= out_h {
                        continue;
                    }
                    let px = self.pipeline.emit_h[column + sy as usize];
                    for c in 0..4 {
                        accum[c] += px[c] as f32 * weight;
                    }
                }
                let mut value = [
                    accum[0].sqrt(),
                    accum[1].sqrt(),
                    accum[2].sqrt(),
                    accum[3].sqrt(),
                ];
                if noise_on {
                    let tile = NOISE_16X16[((x & 15) * 16 + (y & 15)) as usize];
                    let factor = 1.0 + (tile as f32 - 127.5) * noise_amount * 0.0006;
                    for c in &mut value {
                        *c *= factor;
                    }
                }
                self.pipeline.blur[(y * out_w + x) as usize] = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_at_every_width() {
        for width in (1..=MAX_FILTER_WIDTH).step_by(2) {
            let kernel = build_kernel(width);
            assert_eq!(kernel.len(), width);
            let sum: f32 = kernel.iter().sum();
            assert!((sum - 1.0).abs() < 1e-5, "width {width}: sum {sum}");
        }
    }

    #[test]
    fn kernel_is_symmetric_and_peaked() {
        for width in [3usize, 7, 21, 63] {
            let kernel = build_kernel(width);
            let k = width / 2;
            for n in 0..=k {
                let lo = kernel[k - n];
                let hi = kernel[k + n];
                assert!((lo - hi).abs() < 1e-7);
            }
            for n in 1..=k {
                assert!(kernel[k + n] < kernel[k + n - 1]);
            }
        }
    }

    #[test]
    fn kernel_width_seven_matches_reference() {
        let kernel = build_kernel(7);
        // Reference taps for the unit-sigma kernel; the center pair is
        // only pinned to three decimals.
        let expected = [
            0.005_980, 0.060_626, 0.241_740, 0.383_308, 0.241_740, 0.060_626, 0.005_980,
        ];
        for (tap, want) in kernel.iter().zip(expected.iter()) {
            assert!((tap - want).abs() < 3e-4, "{kernel:?}");
        }
    }

    #[test]
    fn width_one_kernel_is_identity() {
        assert_eq!(build_kernel(1), vec![1.0]);
    }
}

// src/render/rasterize.rs

//! Glyph rasterization into the back buffer.
//!
//! Each dirty cell is redrawn at native font resolution. Alongside the
//! RGBA pixel a flag byte records whether the pixel came from the
//! foreground color, which the upscaler uses to split the emissive
//! contribution.

use crate::cell::Style;
use crate::console::Console;

/// Flag bit set for pixels drawn with the foreground color.
pub(crate) const FLAG_FOREGROUND: u8 = 1;

impl Console {
    /// Redraws every dirty cell into the back planes.
    pub(crate) fn rasterize_dirty(&mut self) {
        let cw = self.font.char_width;
        let ch = self.font.char_height;
        let back_w = self.pipeline.back_w;
        // Mask of the leftmost `cw` bits of a glyph row.
        let row_mask: u8 = if cw >= 8 { 0xFF } else { !(0xFF >> cw) };

        for row in 0..self.rows {
            for col in 0..self.cols {
                if !self.char_dirty[row * self.cols + col] {
                    continue;
                }
                let cell = self.chars[row * self.cols + col];
                let fg = self.palette.entry(cell.fg() as usize);
                let bg = self.palette.entry_opaque(cell.bg() as usize);

                let hidden = cell.style.contains(Style::BLINK) && !self.blink_on;
                let bold = cell.style.contains(Style::BOLD);
                let underline = cell.style.contains(Style::UNDERLINE);
                let glyph = self.font.glyph_data(cell.glyph);

                for py in 0..ch {
                    let mut bits = if hidden { 0 } else { glyph[py] };
                    if bold {
                        bits |= bits >> 1;
                    }
                    if underline && py == ch - 1 && !hidden {
                        bits = row_mask;
                    }
                    let base = (row * ch + py) * back_w + col * cw;
                    for px in 0..cw {
                        let on = bits & (0x80 >> px) != 0;
                        self.pipeline.back[base + px] = if on { fg } else { bg };
                        self.pipeline.back_flags[base + px] =
                            if on { FLAG_FOREGROUND } else { 0 };
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Style;

    fn console_with(ch: char, style: Style) -> Console {
        let mut console = Console::new(2, 1);
        console.style(style);
        console.print_char(ch);
        console.outbuf(16, 8, 16 * 4);
        console
    }

    fn raster(console: &mut Console) {
        console.recompute_layout();
        console.validate();
        console.rasterize_dirty();
    }

    #[test]
    fn foreground_flags_match_glyph_bits() {
        let mut console = console_with('█', Style::empty());
        raster(&mut console);
        let back_w = console.pipeline.back_w;
        // Full block: every pixel of cell 0 is foreground.
        for py in 0..8 {
            for px in 0..8 {
                assert_eq!(console.pipeline.back_flags[py * back_w + px], FLAG_FOREGROUND);
            }
        }
        // The neighboring space cell is all background.
        assert!(console.pipeline.back_flags[8..16].iter().all(|&f| f == 0));
    }

    #[test]
    fn underline_forces_bottom_row() {
        let mut console = console_with(' ', Style::UNDERLINE);
        raster(&mut console);
        let back_w = console.pipeline.back_w;
        for px in 0..8 {
            assert_eq!(
                console.pipeline.back_flags[7 * back_w + px],
                FLAG_FOREGROUND
            );
        }
        assert_eq!(console.pipeline.back_flags[6 * back_w], 0);
    }

    #[test]
    fn bold_smears_right() {
        let mut console = console_with('|', Style::empty());
        raster(&mut console);
        let plain: Vec<u8> = console.pipeline.back_flags.clone();

        let mut bold = console_with('|', Style::BOLD);
        raster(&mut bold);
        let smeared = &bold.pipeline.back_flags;
        let on_plain = plain.iter().filter(|&&f| f != 0).count();
        let on_bold = smeared.iter().filter(|&&f| f != 0).count();
        assert!(on_bold > on_plain);
    }

    #[test]
    fn blink_off_phase_hides_glyph() {
        let mut console = console_with('█', Style::BLINK);
        console.blink_on = false;
        raster(&mut console);
        assert!(console.pipeline.back_flags[..8].iter().all(|&f| f == 0));
    }
}

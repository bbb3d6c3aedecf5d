// tests/render_pipeline.rs

//! Pixel-level behavior of the render pipeline: damage tracking,
//! idempotency, scaling, borders, and the glow layer.

use phosphor::{BlendMode, Console, Options, PalettePreset, Style};
use test_log::test;

const W: usize = 64;
const H: usize = 32;

/// An 8x4 console rendered 1:1 into a 64x32 buffer (no margins).
fn console_1to1() -> (Console, Vec<u8>) {
    let mut console = Console::new(8, 4);
    console.palette(PalettePreset::Vintage);
    console.outbuf(W, H, W * 4);
    (console, vec![0u8; W * H * 4])
}

fn pixel(fb: &[u8], x: usize, y: usize) -> (u8, u8, u8, u8) {
    let i = (y * W + x) * 4;
    (fb[i], fb[i + 1], fb[i + 2], fb[i + 3])
}

#[test]
fn renders_glyph_pixels_in_palette_colors() {
    let (mut console, mut fb) = console_1to1();
    console.fg(15);
    console.bg(4);
    console.print_char('█');
    console.render(&mut fb);
    // Full block: all 64 pixels of cell (0,0) are white.
    assert_eq!(pixel(&fb, 0, 0), (255, 255, 255, 255));
    assert_eq!(pixel(&fb, 7, 7), (255, 255, 255, 255));
    // The neighboring space shows the default black background.
    assert_eq!(pixel(&fb, 8, 0), (0, 0, 0, 255));
}

#[test]
fn space_cell_shows_background_color() {
    let (mut console, mut fb) = console_1to1();
    console.bg(1);
    console.print_char(' ');
    console.render(&mut fb);
    // Vintage red background, forced opaque.
    assert_eq!(pixel(&fb, 3, 3), (128, 0, 0, 255));
}

#[test]
fn second_render_is_idempotent_and_clean() {
    let (mut console, mut fb) = console_1to1();
    console.println("hello");
    console.style(Style::SHINY);
    console.print("glow");
    console.render(&mut fb);
    let first = fb.clone();
    assert!(console.update_rect().is_empty());
    assert!(!console.has_pending_update());
    console.render(&mut fb);
    assert_eq!(first, fb);
}

#[test]
fn single_cell_change_touches_only_extended_rect() {
    let (mut console, mut fb) = console_1to1();
    console.print("abcdefgh");
    console.render(&mut fb);
    let before = fb.clone();

    console.locate(2, 1);
    console.print_char('Q');
    console.render(&mut fb);

    // Cell (2, 1) spans pixels (16..24, 8..16). At scale 1 the filter
    // width is 21, so nothing outside that area grown by the radius of
    // 10 may change.
    let radius = 10usize;
    for y in 0..H {
        for x in 0..W {
            let i = (y * W + x) * 4;
            if fb[i..i + 4] != before[i..i + 4] {
                assert!(
                    x + radius >= 16 && x < 24 + radius && y + radius >= 8 && y < 16 + radius,
                    "unexpected change at ({x}, {y})"
                );
            }
        }
    }
    // And the glyph itself did change.
    assert_ne!(fb, before);
}

#[test]
fn caching_mode_reports_subrect() {
    let (mut console, mut fb) = console_1to1();
    let mut opts = Options::default();
    opts.allow_out_caching = true;
    console.options(opts);
    console.render(&mut fb);
    assert!(console.update_rect().is_empty());

    console.locate(0, 0);
    console.print_char('x');
    let rect = console.update_rect();
    assert!(!rect.is_empty());
    let out_area = (W * H) as i64;
    let rect_area = (rect.width() as i64) * (rect.height() as i64);
    assert!(rect_area < out_area, "expected a sub-rectangle, got {rect:?}");
    console.render(&mut fb);
    assert!(console.update_rect().is_empty());
}

#[test]
fn full_buffer_reported_without_caching() {
    let (mut console, mut fb) = console_1to1();
    console.render(&mut fb);
    console.print_char('x');
    let rect = console.update_rect();
    assert_eq!((rect.width(), rect.height()), (W as i32, H as i32));
}

#[test]
fn integer_scale_duplicates_pixels() {
    let mut console = Console::new(2, 1);
    console.palette(PalettePreset::Vintage);
    // 2x1 cells = 16x8 px, output 32x16: scale 2.
    console.outbuf(32, 16, 32 * 4);
    console.fg(15);
    console.print_char('█');
    let mut fb = vec![0u8; 32 * 16 * 4];
    console.render(&mut fb);
    let px = |x: usize, y: usize| {
        let i = (y * 32 + x) * 4;
        (fb[i], fb[i + 1], fb[i + 2])
    };
    // 2x2 blocks are uniform.
    for (x, y) in [(0, 0), (6, 6), (14, 2)] {
        assert_eq!(px(x, y), px(x + 1, y));
        assert_eq!(px(x, y), px(x, y + 1));
        assert_eq!(px(x, y), px(x + 1, y + 1));
    }
    assert_eq!(px(0, 0), (255, 255, 255));
}

#[test]
fn letterbox_uses_border_color() {
    let mut console = Console::new(2, 1);
    console.palette(PalettePreset::Vintage);
    let mut opts = Options::default();
    opts.border_color = 4; // vintage dark blue
    console.options(opts);
    // Grid 16x8 in a 20x12 output: scale 1, 2px margins all around.
    console.outbuf(20, 12, 20 * 4);
    let mut fb = vec![0u8; 20 * 12 * 4];
    console.render(&mut fb);
    let px = |x: usize, y: usize| {
        let i = (y * 20 + x) * 4;
        (fb[i], fb[i + 1], fb[i + 2], fb[i + 3])
    };
    assert_eq!(px(0, 0), (0, 0, 128, 255));
    assert_eq!(px(19, 11), (0, 0, 128, 255));
    // Inside the grid the default background is black.
    assert_eq!(px(10, 6), (0, 0, 0, 255));
}

#[test]
fn shiny_cells_glow_beyond_their_outline() {
    let (mut console, mut fb) = console_1to1();
    console.fg(15);
    console.locate(3, 1);
    console.style(Style::SHINY);
    console.print_char('█');
    console.render(&mut fb);
    // The cell spans (24..32, 8..16). A pixel a few columns to its left
    // picks up spilled glow.
    let (r, g, b, _) = pixel(&fb, 21, 12);
    assert!(r > 0 && g > 0 && b > 0, "expected glow, got ({r},{g},{b})");

    // Without SHINY the same pixel stays black.
    let (mut plain, mut fb2) = console_1to1();
    plain.fg(15);
    plain.locate(3, 1);
    plain.print_char('█');
    plain.render(&mut fb2);
    assert_eq!(pixel(&fb2, 21, 12), (0, 0, 0, 255));
}

#[test]
fn blink_hides_glyph_on_the_off_phase() {
    let (mut console, mut fb) = console_1to1();
    console.fg(15);
    console.style(Style::BLINK);
    console.print_char('█');
    console.render(&mut fb);
    assert_eq!(pixel(&fb, 4, 4), (255, 255, 255, 255));

    console.update(0.7); // cross the half period
    console.render(&mut fb);
    assert_eq!(pixel(&fb, 4, 4), (0, 0, 0, 255));

    console.update(0.6); // back on
    console.render(&mut fb);
    assert_eq!(pixel(&fb, 4, 4), (255, 255, 255, 255));
}

#[test]
fn copy_mode_overwrites_source_over_blends() {
    let mut console = Console::new(2, 1);
    console.palette(PalettePreset::Vintage);
    console.outbuf(16, 8, 16 * 4);
    console.set_palette_entry(1, 255, 0, 0, 128); // translucent red fg
    console.fg(1);
    console.print("██");

    let mut fb = vec![0u8; 16 * 8 * 4];
    console.render(&mut fb);
    // Source-over of 50%-alpha red over black.
    let i = 0;
    assert_eq!(fb[i], 128);
    assert_eq!(fb[i + 1], 0);

    let mut opts = Options::default();
    opts.blend_mode = BlendMode::Copy;
    console.options(opts);
    let mut fb2 = vec![0u8; 16 * 8 * 4];
    console.render(&mut fb2);
    assert_eq!(fb2[0], 255);
    assert_eq!(fb2[3], 128);
}

#[test]
fn pitch_larger_than_row_is_respected() {
    let mut console = Console::new(2, 1);
    console.palette(PalettePreset::Vintage);
    let pitch = 16 * 4 + 12;
    console.outbuf(16, 8, pitch);
    console.fg(15);
    console.print_char('█');
    let mut fb = vec![0xEEu8; pitch * 8];
    console.render(&mut fb);
    // First pixel of row 1 starts at the pitch offset.
    assert_eq!(&fb[pitch..pitch + 4], &[255, 255, 255, 255]);
    // The padding bytes between rows are untouched.
    assert_eq!(fb[16 * 4], 0xEE);
}

#[test]
fn undersized_buffer_is_rejected_quietly() {
    let (mut console, _) = console_1to1();
    console.print("safe");
    let mut tiny = vec![0u8; 16];
    console.render(&mut tiny);
    assert_eq!(tiny, vec![0u8; 16]);
}

#[test]
fn palette_edit_recolors_existing_cells() {
    let (mut console, mut fb) = console_1to1();
    console.fg(5);
    console.print_char('█');
    console.render(&mut fb);
    assert_eq!(pixel(&fb, 2, 2), (128, 0, 128, 255));

    console.set_palette_entry(5, 10, 200, 30, 255);
    assert!(console.has_pending_update());
    console.render(&mut fb);
    assert_eq!(pixel(&fb, 2, 2), (10, 200, 30, 255));
}

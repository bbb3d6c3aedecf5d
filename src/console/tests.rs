// src/console/tests.rs

use super::*;
use crate::palette::PalettePreset;

fn cell(console: &Console, col: usize, row: usize) -> CharData {
    *console.char_at(col, row).expect("cell in range")
}

fn row_text(console: &Console, row: usize) -> String {
    (0..console.cols())
        .map(|col| cell(console, col, row).glyph)
        .collect()
}

#[test]
fn new_console_is_default_spaces() {
    let console = Console::new(8, 3);
    assert_eq!(console.cols(), 8);
    assert_eq!(console.rows(), 3);
    for c in console.characters() {
        assert_eq!(*c, CharData::default());
    }
}

#[test]
fn dimensions_clamp_to_one() {
    let console = Console::new(0, 0);
    assert_eq!(console.cols(), 1);
    assert_eq!(console.rows(), 1);
}

#[test]
fn print_with_styles_and_newlines() {
    // 20x5, vintage palette: "AB", bold "C", newline, bold "D" line.
    let mut console = Console::new(20, 5);
    console.palette(PalettePreset::Vintage);
    console.cls();
    console.print("AB");
    console.style(Style::BOLD);
    console.print("C");
    console.newline();
    console.println("D");

    assert_eq!(cell(&console, 0, 0).glyph, 'A');
    assert_eq!(cell(&console, 0, 0).style, Style::empty());
    assert_eq!(cell(&console, 1, 0).glyph, 'B');
    assert_eq!(cell(&console, 1, 0).style, Style::empty());
    assert_eq!(cell(&console, 2, 0).glyph, 'C');
    assert_eq!(cell(&console, 2, 0).style, Style::BOLD);
    assert_eq!(cell(&console, 0, 1).glyph, 'D');
    assert_eq!(cell(&console, 0, 1).style, Style::BOLD);
    for col in 3..20 {
        assert_eq!(cell(&console, col, 0), CharData::default());
    }
    assert_eq!((console.cursor_x(), console.cursor_y()), (0, 2));
}

#[test]
fn println_scrolls_and_keeps_last_lines() {
    let mut console = Console::new(4, 2);
    console.println("abcd");
    console.println("efgh");
    console.println("ijkl");
    assert_eq!(row_text(&console, 0), "efgh");
    assert_eq!(row_text(&console, 1), "ijkl");
    assert_eq!((console.cursor_x(), console.cursor_y()), (0, 1));
}

#[test]
fn many_lines_keep_the_tail_in_order() {
    let mut console = Console::new(8, 3);
    for i in 0..10 {
        console.println(&format!("line{i}"));
    }
    assert_eq!(&row_text(&console, 0)[..5], "line7");
    assert_eq!(&row_text(&console, 1)[..5], "line8");
    assert_eq!(&row_text(&console, 2)[..5], "line9");
}

#[test]
fn save_restore_recovers_color_and_cursor() {
    let mut console = Console::new(10, 3);
    console.fg(1);
    console.save();
    console.fg(4);
    console.print("X");
    assert_eq!(cell(&console, 0, 0).fg(), 4);
    console.restore();
    // The restore rewound the cursor to the pre-save cell.
    assert_eq!((console.cursor_x(), console.cursor_y()), (0, 0));
    console.print("Y");
    let overwritten = cell(&console, 0, 0);
    assert_eq!(overwritten.glyph, 'Y');
    assert_eq!(overwritten.fg(), 1);
}

#[test]
fn locate_ignores_out_of_range() {
    let mut console = Console::new(10, 4);
    console.locate(5, 2);
    assert_eq!((console.cursor_x(), console.cursor_y()), (5, 2));
    console.locate(-1, -1);
    assert_eq!((console.cursor_x(), console.cursor_y()), (5, 2));
    console.locate(99, 1);
    assert_eq!((console.cursor_x(), console.cursor_y()), (5, 1));
}

#[test]
fn out_of_grid_writes_are_dropped_but_advance() {
    let mut console = Console::new(4, 2);
    console.locate(2, 0);
    console.print("abc");
    assert_eq!(row_text(&console, 0), "  ab");
    // 'c' wrapped to the next row.
    assert_eq!(cell(&console, 0, 1).glyph, 'c');
}

#[test]
fn cls_resets_grid_and_state() {
    let mut console = Console::new(6, 2);
    console.fg(2);
    console.style(Style::BOLD);
    console.print("junk");
    console.cls();
    for c in console.characters() {
        assert_eq!(*c, CharData::default());
    }
    assert_eq!((console.cursor_x(), console.cursor_y()), (0, 0));
    console.print("k");
    assert_eq!(cell(&console, 0, 0).fg(), 8);
    assert_eq!(cell(&console, 0, 0).style, Style::empty());
}

#[test]
fn fill_rect_clips_and_uses_state() {
    let mut console = Console::new(4, 4);
    console.fg(3);
    console.bg(5);
    console.fill_rect(2, 2, 10, 10, '#');
    assert_eq!(cell(&console, 1, 1).glyph, ' ');
    for row in 2..4 {
        for col in 2..4 {
            let c = cell(&console, col, row);
            assert_eq!(c.glyph, '#');
            assert_eq!((c.fg(), c.bg()), (3, 5));
        }
    }
}

#[test]
fn box_frame_draws_edges() {
    let mut console = Console::new(6, 4);
    console.box_frame(0, 0, 6, 4, &crate::font::boxes::DOUBLE);
    assert_eq!(cell(&console, 0, 0).glyph, '╔');
    assert_eq!(cell(&console, 5, 0).glyph, '╗');
    assert_eq!(cell(&console, 0, 3).glyph, '╚');
    assert_eq!(cell(&console, 5, 3).glyph, '╝');
    assert_eq!(cell(&console, 2, 0).glyph, '═');
    assert_eq!(cell(&console, 0, 2).glyph, '║');
    assert_eq!(cell(&console, 2, 2).glyph, ' ');
}

#[test]
fn degenerate_box_is_ignored() {
    let mut console = Console::new(6, 4);
    console.box_frame(0, 0, 1, 4, &crate::font::boxes::THIN);
    console.box_frame(0, 0, 4, 1, &crate::font::boxes::THIN);
    for c in console.characters() {
        assert_eq!(c.glyph, ' ');
    }
}

#[test]
fn char_at_mut_marks_validation() {
    let mut console = Console::new(4, 2);
    console.outbuf(32, 16, 32 * 4);
    let mut fb = vec![0u8; 32 * 16 * 4];
    console.render(&mut fb);
    assert!(!console.has_pending_update());
    console.char_at_mut(1, 1).unwrap().glyph = 'q';
    assert!(console.has_pending_update());
}

#[test]
fn update_flips_blink_phase_at_half_period() {
    let mut console = Console::new(2, 1);
    console.print_char('x');
    console.char_at_mut(0, 0).unwrap().style = Style::BLINK;
    assert!(console.blink_on);
    console.update(0.7); // past the 0.6s half period
    assert!(!console.blink_on);
    assert!(console.dirty_validation);
    console.update(0.6);
    assert!(console.blink_on);
}

#[test]
fn long_pause_is_clamped() {
    let mut console = Console::new(2, 1);
    console.update(1000.0);
    // One clamped period later the phase is still well defined.
    assert!(console.blink_accum >= 0.0 && console.blink_accum < console.opts.blink_time);
}

#[test]
fn hit_maps_output_pixels_to_cells() {
    let mut console = Console::new(4, 2);
    // 64x32 output: scale 2, no margins.
    console.outbuf(64, 32, 64 * 4);
    let mut fb = vec![0u8; 64 * 32 * 4];
    console.render(&mut fb);
    assert_eq!(console.hit(0, 0), Some((0, 0)));
    assert_eq!(console.hit(17, 17), Some((1, 1)));
    assert_eq!(console.hit(63, 31), Some((3, 1)));
    assert_eq!(console.hit(64, 0), None);
    assert_eq!(console.hit(-1, 5), None);
}

#[test]
fn hit_respects_margins() {
    let mut console = Console::new(2, 2);
    // 40x40 output for a 16x16 grid: scale 2, 4px margins.
    console.outbuf(40, 40, 40 * 4);
    let mut fb = vec![0u8; 40 * 40 * 4];
    console.render(&mut fb);
    assert_eq!(console.hit(3, 3), None);
    assert_eq!(console.hit(4, 4), Some((0, 0)));
    assert_eq!(console.hit(35, 35), Some((1, 1)));
    assert_eq!(console.hit(36, 36), None);
}

#[test]
fn size_change_clears_and_redraws() {
    let mut console = Console::new(4, 2);
    console.print("hi");
    console.size(6, 3);
    assert_eq!(console.characters().len(), 18);
    for c in console.characters() {
        assert_eq!(*c, CharData::default());
    }
    assert!(console.dirty_all_chars);
}

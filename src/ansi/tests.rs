// src/ansi/tests.rs

use crate::cell::Style;
use crate::console::Console;

fn cell(console: &Console, col: usize, row: usize) -> crate::cell::CharData {
    *console.char_at(col, row).expect("cell in range")
}

#[test]
fn sgr_color_then_reset() {
    let mut console = Console::new(10, 2);
    console.print_ans(b"\x1b[31;44mX\x1b[0mY");
    let x = cell(&console, 0, 0);
    assert_eq!(x.glyph, 'X');
    assert_eq!(x.fg(), 1);
    assert_eq!(x.bg(), 4);
    let y = cell(&console, 1, 0);
    assert_eq!(y.glyph, 'Y');
    assert_eq!(y.fg(), 8);
    assert_eq!(y.bg(), 0);
    assert_eq!(y.style, Style::empty());
}

#[test]
fn plain_text_keeps_default_colors() {
    let mut console = Console::new(16, 2);
    console.print_ans(b"hello world");
    for col in 0..11 {
        let c = cell(&console, col, 0);
        assert_eq!(c.fg(), 8);
        assert_eq!(c.bg(), 0);
    }
}

#[test]
fn bright_colors_and_styles() {
    let mut console = Console::new(10, 2);
    console.print_ans(b"\x1b[1;4;95;103mZ");
    let z = cell(&console, 0, 0);
    assert_eq!(z.fg(), 13);
    assert_eq!(z.bg(), 11);
    assert!(z.style.contains(Style::BOLD | Style::UNDERLINE));
}

#[test]
fn blink_codes_set_and_clear() {
    let mut console = Console::new(10, 2);
    console.print_ans(b"\x1b[5ma\x1b[25mb");
    assert!(cell(&console, 0, 0).style.contains(Style::BLINK));
    assert!(!cell(&console, 1, 0).style.contains(Style::BLINK));
}

#[test]
fn newline_returns_to_origin_column() {
    let mut console = Console::new(10, 4);
    console.locate(3, 1);
    console.print_ans(b"ab\ncd");
    assert_eq!(cell(&console, 3, 1).glyph, 'a');
    assert_eq!(cell(&console, 4, 1).glyph, 'b');
    assert_eq!(cell(&console, 3, 2).glyph, 'c');
    assert_eq!(cell(&console, 4, 2).glyph, 'd');
    // Origin restored afterwards.
    assert_eq!((console.cursor_x(), console.cursor_y()), (3, 1));
}

#[test]
fn cursor_forward_skips_cells() {
    let mut console = Console::new(10, 2);
    console.print_ans(b"a\x1b[3Cb");
    assert_eq!(cell(&console, 0, 0).glyph, 'a');
    assert_eq!(cell(&console, 1, 0).glyph, ' ');
    assert_eq!(cell(&console, 4, 0).glyph, 'b');
}

#[test]
fn sub_terminates_parsing() {
    let mut console = Console::new(10, 2);
    console.print_ans(b"ab\x1acd");
    assert_eq!(cell(&console, 0, 0).glyph, 'a');
    assert_eq!(cell(&console, 1, 0).glyph, 'b');
    assert_eq!(cell(&console, 2, 0).glyph, ' ');
}

#[test]
fn osc_is_swallowed_to_bel() {
    let mut console = Console::new(16, 2);
    console.print_ans(b"\x1b]0;window title\x07ok");
    assert_eq!(cell(&console, 0, 0).glyph, 'o');
    assert_eq!(cell(&console, 1, 0).glyph, 'k');
}

#[test]
fn unknown_csi_terminator_is_ignored() {
    let mut console = Console::new(10, 2);
    console.print_ans(b"\x1b[2Jx");
    assert_eq!(cell(&console, 0, 0).glyph, 'x');
}

#[test]
fn malformed_utf8_stops_interpretation() {
    let mut console = Console::new(10, 2);
    console.print_ans(b"ok\xFFnope");
    assert_eq!(cell(&console, 0, 0).glyph, 'o');
    assert_eq!(cell(&console, 1, 0).glyph, 'k');
    assert_eq!(cell(&console, 2, 0).glyph, ' ');
}

#[test]
fn utf8_multibyte_glyphs_land_in_single_cells() {
    let mut console = Console::new(10, 2);
    console.print_ans("é█".as_bytes());
    assert_eq!(cell(&console, 0, 0).glyph, 'é');
    assert_eq!(cell(&console, 1, 0).glyph, '█');
}

#[test]
fn cp437_bytes_map_through_the_table() {
    let mut console = Console::new(10, 2);
    console.print_ans_cp437(&[0xC9, 0xCD, 0xBB]);
    assert_eq!(cell(&console, 0, 0).glyph, '╔');
    assert_eq!(cell(&console, 1, 0).glyph, '═');
    assert_eq!(cell(&console, 2, 0).glyph, '╗');
}

#[test]
fn cp437_high_bytes_inside_sgr_content() {
    let mut console = Console::new(10, 2);
    console.print_ans_cp437(b"\x1b[33m\xB1\xB2");
    assert_eq!(cell(&console, 0, 0).glyph, '▒');
    assert_eq!(cell(&console, 0, 0).fg(), 3);
    assert_eq!(cell(&console, 1, 0).glyph, '▓');
}

#[test]
fn extended_256_color_passthrough_and_cube() {
    let mut console = Console::new(10, 2);
    // Index 12 passes straight through.
    console.print_ans(b"\x1b[38;5;12ma");
    assert_eq!(cell(&console, 0, 0).fg(), 12);
    // 196 is pure red on the cube; vintage maps it to bright red.
    console.print_ans(b"\x1b[38;5;196mb");
    assert_eq!(cell(&console, 1, 0).fg(), 9);
}

#[test]
fn truecolor_matches_into_palette() {
    let mut console = Console::new(10, 2);
    console.print_ans(b"\x1b[48;2;0;0;255mc");
    assert_eq!(cell(&console, 0, 0).bg(), 12);
}

#[test]
fn writes_below_grid_are_clipped() {
    let mut console = Console::new(4, 2);
    console.print_ans(b"a\nb\nc\nd");
    assert_eq!(cell(&console, 0, 0).glyph, 'a');
    assert_eq!(cell(&console, 0, 1).glyph, 'b');
    // Rows 2 and 3 fell outside; nothing scrolled.
    assert_eq!((console.cursor_x(), console.cursor_y()), (0, 0));
}

// tests/scenarios.rs

//! Acceptance scenarios driving the public surface end to end.

use phosphor::{CharData, Console, PalettePreset, Rect, Style};

fn cell(console: &Console, col: usize, row: usize) -> CharData {
    *console.char_at(col, row).expect("cell in range")
}

#[test]
fn hello_bold() {
    let mut console = Console::new(20, 5);
    console.palette(PalettePreset::Vintage);
    console.cls();
    console.print("AB");
    console.style(Style::BOLD);
    console.print("C");
    console.newline();
    console.println("D");

    assert_eq!((cell(&console, 0, 0).glyph, cell(&console, 0, 0).style), ('A', Style::empty()));
    assert_eq!((cell(&console, 1, 0).glyph, cell(&console, 1, 0).style), ('B', Style::empty()));
    assert_eq!((cell(&console, 2, 0).glyph, cell(&console, 2, 0).style), ('C', Style::BOLD));
    assert_eq!((cell(&console, 0, 1).glyph, cell(&console, 0, 1).style), ('D', Style::BOLD));
    for row in 0..5 {
        for col in 0..20 {
            if (row, col) == (0, 0) || (row, col) == (0, 1) || (row, col) == (0, 2) {
                continue;
            }
            if (row, col) == (1, 0) {
                continue;
            }
            assert_eq!(cell(&console, col, row).glyph, ' ');
        }
    }
    assert_eq!((console.cursor_x(), console.cursor_y()), (0, 2));
}

#[test]
fn scroll_keeps_last_lines() {
    let mut console = Console::new(4, 2);
    console.println("abcd");
    console.println("efgh");
    console.println("ijkl");
    let text: Vec<String> = (0..2)
        .map(|row| (0..4).map(|col| cell(&console, col, row).glyph).collect())
        .collect();
    assert_eq!(text[0], "efgh");
    assert_eq!(text[1], "ijkl");
    assert_eq!((console.cursor_x(), console.cursor_y()), (0, 1));
}

#[test]
fn save_restore_round_trip() {
    let mut console = Console::new(10, 2);
    console.fg(1); // red
    console.save();
    console.fg(4); // blue
    console.print("X");
    let x = cell(&console, 0, 0);
    assert_eq!((x.glyph, x.fg()), ('X', 4));
    console.restore();
    console.print("Y");
    // The pop also rewound the cursor, so Y replaced X and carries the
    // saved foreground.
    let y = cell(&console, 0, 0);
    assert_eq!((y.glyph, y.fg()), ('Y', 1));
}

#[test]
fn markup_nested_colors() {
    let mut console = Console::new(10, 2);
    console.cprint("<red>a<on_blue>b</on_blue>c</red>d");
    let expect = [('a', 1, 0), ('b', 1, 4), ('c', 1, 0), ('d', 8, 0)];
    for (col, &(glyph, fg, bg)) in expect.iter().enumerate() {
        let c = cell(&console, col, 0);
        assert_eq!((c.glyph, c.fg(), c.bg()), (glyph, fg, bg), "column {col}");
    }
}

#[test]
fn sgr_select_and_reset() {
    let mut console = Console::new(10, 2);
    console.print_ans(b"\x1b[31;44mX\x1b[0mY");
    let x = cell(&console, 0, 0);
    assert_eq!((x.fg(), x.bg()), (1, 4));
    let y = cell(&console, 1, 0);
    assert_eq!((y.fg(), y.bg()), (8, 0));
    assert_eq!(y.style, Style::empty());
}

#[test]
fn entities_and_unknown_entity() {
    let mut console = Console::new(10, 2);
    console.cprint("&lt;&amp;&gt;&nosuch;");
    assert_eq!(cell(&console, 0, 0).glyph, '<');
    assert_eq!(cell(&console, 1, 0).glyph, '&');
    assert_eq!(cell(&console, 2, 0).glyph, '>');
    assert_eq!(cell(&console, 3, 0).glyph, ' ');
    assert_eq!(console.cursor_x(), 3);
}

#[test]
fn markup_tag_isolation() {
    let mut console = Console::new(10, 2);
    console.cprint("<b>X</b>Y");
    assert!(cell(&console, 0, 0).style.contains(Style::BOLD));
    assert_eq!(cell(&console, 1, 0).style, Style::empty());
}

#[test]
fn utf8_print_round_trip() {
    let mut console = Console::new(10, 2);
    for (i, ch) in ['Ω', 'é', '╬', '▒', '♥', 'π'].into_iter().enumerate() {
        console.locate(i as i32, 0);
        console.print_char(ch);
        assert_eq!(cell(&console, i, 0).glyph, ch);
    }
}

#[test]
fn balanced_save_restore_depth() {
    let mut console = Console::new(4, 4);
    for depth in 0..16u8 {
        console.fg(depth & 0xF);
        console.locate((depth % 4) as i32, (depth % 4) as i32);
        console.save();
    }
    for depth in (0..16u8).rev() {
        console.restore();
        assert_eq!(console.cursor_x(), (depth % 4) as i32);
        assert_eq!(console.cursor_y(), (depth % 4) as i32);
    }
}

#[test]
fn geometry_laws() {
    let samples = [
        Rect::new(0, 0, 4, 4),
        Rect::new(-3, 2, 7, 9),
        Rect::new(5, 5, 5, 9),
        Rect::empty(),
        Rect::new(-10, -10, -2, -1),
    ];
    for a in samples {
        for b in samples {
            let i = a.intersection(&b);
            assert!(i.is_sorted(), "{a:?} ∩ {b:?} = {i:?}");
            if !i.is_empty() {
                assert!(i.left >= a.left && i.right <= a.right);
                assert!(i.top >= a.top && i.bottom <= a.bottom);
            }
        }
        assert_eq!(a.merge(&Rect::empty()), a);
    }
}

#[test]
fn palette_match_is_stable() {
    let mut console = Console::new(2, 2);
    console.palette(PalettePreset::Campbell);
    for index in 0..16 {
        let c = console.palette_entry(index);
        // Writing the exact entry color through the matcher comes back
        // to the same index.
        console.print_ans(
            format!("\x1b[38;2;{};{};{}mx", c.r(), c.g(), c.b()).as_bytes(),
        );
        assert_eq!(console.char_at(0, 0).unwrap().fg() as usize, index);
        console.cls();
    }
}

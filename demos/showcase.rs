//! Renders a demo screen into an in-memory framebuffer and writes it
//! out as a PPM image.
//!
//! Run with: cargo run --example showcase [output.ppm]

use phosphor::{boxes, Console, Options, PalettePreset, Style};
use std::io::Write;

const OUT_W: usize = 720;
const OUT_H: usize = 400;

fn main() -> std::io::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "showcase.ppm".to_string());

    let mut console = Console::new(44, 16);
    console.palette(PalettePreset::Vga);
    let mut opts = Options::default();
    opts.tonemapping = true;
    console.options(opts);
    console.outbuf(OUT_W, OUT_H, OUT_W * 4);

    console.fg(8);
    console.box_frame(0, 0, 44, 16, &boxes::DOUBLE);

    console.locate(2, 1);
    console.cprint("<white>phosphor</white> <grey>virtual console</grey>");

    console.locate(2, 3);
    console.cprint("markup: <red>red</red> <on_blue>on blue</on_blue> <b>bold</b> <u>underline</u>");

    console.locate(2, 5);
    console.print_ans(b"ansi:   \x1b[32mgreen\x1b[0m \x1b[38;5;208morange\x1b[0m \x1b[1;35mbold magenta\x1b[0m");

    console.locate(2, 7);
    console.print("cp437:  ");
    console.print_ans_cp437(&[0xB0, 0xB1, 0xB2, 0xDB, 0xDB, 0xB2, 0xB1, 0xB0]);

    console.locate(2, 9);
    console.style(Style::SHINY);
    console.fg(14);
    console.print("shiny glow ");
    console.style(Style::SHINY | Style::BLINK);
    console.print("blinking glow");
    console.style(Style::empty());
    console.fg(8);

    console.locate(2, 11);
    console.print("box sets: ");
    console.box_frame(12, 11, 5, 3, &boxes::THIN);
    console.box_frame(18, 11, 5, 3, &boxes::HEAVY);
    console.box_frame(24, 11, 5, 3, &boxes::DOUBLE_H);
    console.box_frame(30, 11, 5, 3, &boxes::LARGE);

    // Advance the blink clock a little so both phases get exercised,
    // then render the final frame.
    let mut framebuffer = vec![0u8; OUT_W * OUT_H * 4];
    console.update(0.3);
    console.render(&mut framebuffer);

    let mut file = std::io::BufWriter::new(std::fs::File::create(&path)?);
    writeln!(file, "P6\n{OUT_W} {OUT_H}\n255")?;
    for px in framebuffer.chunks_exact(4) {
        file.write_all(&px[..3])?;
    }
    println!("wrote {path}");
    Ok(())
}

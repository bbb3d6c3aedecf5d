//! Benchmarks for the render pipeline.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use phosphor::{Console, Options, PalettePreset, Style};

const OUT_W: usize = 640;
const OUT_H: usize = 400;

fn demo_console() -> (Console, Vec<u8>) {
    let mut console = Console::new(80, 25);
    console.palette(PalettePreset::Vga);
    console.outbuf(OUT_W, OUT_H, OUT_W * 4);
    for row in 0..25 {
        console.locate(0, row);
        console.print("Lorem ipsum dolor sit amet, consectetur adipiscing elit sed do eiusmod tempor.");
    }
    console.locate(10, 10);
    console.style(Style::SHINY | Style::BOLD);
    console.print("GLOWING");
    (console, vec![0u8; OUT_W * OUT_H * 4])
}

fn bench_full_frame(c: &mut Criterion) {
    c.bench_function("render_full_80x25", |b| {
        let (mut console, mut fb) = demo_console();
        let mut toggle = false;
        b.iter(|| {
            // Alternate the border color to force a full redraw.
            toggle = !toggle;
            let mut opts = Options::default();
            opts.border_color = toggle as u8;
            console.options(opts);
            console.render(black_box(&mut fb));
        });
    });
}

fn bench_single_cell(c: &mut Criterion) {
    c.bench_function("render_single_cell_change", |b| {
        let (mut console, mut fb) = demo_console();
        let mut opts = Options::default();
        opts.allow_out_caching = true;
        console.options(opts);
        console.render(&mut fb);
        let mut toggle = false;
        b.iter(|| {
            toggle = !toggle;
            console.locate(0, 0);
            console.print_char(if toggle { '#' } else { '@' });
            console.render(black_box(&mut fb));
        });
    });
}

fn bench_clean_frame(c: &mut Criterion) {
    c.bench_function("render_clean_noop", |b| {
        let (mut console, mut fb) = demo_console();
        console.render(&mut fb);
        b.iter(|| console.render(black_box(&mut fb)));
    });
}

fn bench_interpreters(c: &mut Criterion) {
    c.bench_function("print_ans_sgr_heavy", |b| {
        let mut console = Console::new(80, 25);
        let mut stream = Vec::new();
        for i in 0..1000u32 {
            stream.extend_from_slice(format!("\x1b[{};4{}m#", 30 + i % 8, i % 8).as_bytes());
        }
        b.iter(|| {
            console.cls();
            console.print_ans(black_box(&stream));
        });
    });

    c.bench_function("cprint_markup", |b| {
        let mut console = Console::new(80, 25);
        let text = "<lgreen>load</lgreen> <on_blue>save</on_blue> <b>run</b> ".repeat(50);
        b.iter(|| {
            console.cls();
            console.cprint(black_box(&text));
        });
    });
}

criterion_group!(
    benches,
    bench_full_frame,
    bench_single_cell,
    bench_clean_frame,
    bench_interpreters
);
criterion_main!(benches);

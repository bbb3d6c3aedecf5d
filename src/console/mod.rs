// src/console/mod.rs

//! The virtual console: a grid of character cells plus the drawing
//! state that the text API mutates.
//!
//! All text operations are cheap and total; they only touch the cell
//! grid and dirty flags. Pixels are produced later by [`Console::render`],
//! which runs the fixed pipeline over whatever changed since the last
//! frame.
//!
//! A single instance is not thread-safe; callers must not overlap
//! method calls on one console.

pub mod options;

#[cfg(test)]
mod tests;

use crate::cell::{CharData, Style};
use crate::color::Rgba8;
use crate::font::boxes::BoxGlyphs;
use crate::font::Font;
use crate::geometry::Rect;
use crate::palette::{Palette, PalettePreset, PALETTE_SIZE};
use crate::render::Pipeline;
use crate::state::StateStack;
use log::trace;

pub use options::{BlendMode, HAlign, Options, VAlign};

/// A text-mode console compositing its cell grid into RGBA pixels.
#[derive(Debug)]
pub struct Console {
    pub(crate) cols: usize,
    pub(crate) rows: usize,
    pub(crate) chars: Vec<CharData>,
    pub(crate) cache: Vec<CharData>,
    pub(crate) char_dirty: Vec<bool>,

    pub(crate) font: &'static Font,
    pub(crate) palette: Palette,
    pub(crate) states: StateStack,
    pub(crate) opts: Options,

    /// Set when `newline` ran at the bottom row; the shift happens when
    /// the next glyph is written.
    pending_scroll: bool,

    pub(crate) dirty_validation: bool,
    pub(crate) dirty_all_chars: bool,
    pub(crate) dirty_blur: bool,
    pub(crate) dirty_border: bool,

    blink_accum: f32,
    pub(crate) blink_on: bool,
    pub(crate) blink_flipped: bool,

    /// Accumulated validator output in cell coordinates; cleared by
    /// `render` once consumed.
    pub(crate) change_rect: Rect,
    pub(crate) blur_rect: Rect,

    pub(crate) pipeline: Pipeline,
}

impl Console {
    /// Creates a console with the given grid dimensions.
    ///
    /// Dimensions are clamped to at least 1x1. The output buffer
    /// geometry starts at zero; configure it with [`Console::outbuf`]
    /// before rendering.
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        let mut console = Console {
            cols: 0,
            rows: 0,
            chars: Vec::new(),
            cache: Vec::new(),
            char_dirty: Vec::new(),
            font: Font::builtin(),
            palette: Palette::default(),
            states: StateStack::new(),
            opts: Options::default(),
            pending_scroll: false,
            dirty_validation: true,
            dirty_all_chars: true,
            dirty_blur: true,
            dirty_border: true,
            blink_accum: 0.0,
            blink_on: true,
            blink_flipped: false,
            change_rect: Rect::empty(),
            blur_rect: Rect::empty(),
            pipeline: Pipeline::new(),
        };
        console.size(cols, rows);
        console
    }

    // --- Configuration ---

    /// Resizes the grid, clearing it and scheduling a full redraw.
    /// Dimensions are clamped to at least 1x1.
    pub fn size(&mut self, cols: usize, rows: usize) {
        let cols = cols.max(1);
        let rows = rows.max(1);
        if cols != self.cols || rows != self.rows {
            trace!("console resize {}x{} -> {}x{}", self.cols, self.rows, cols, rows);
            self.cols = cols;
            self.rows = rows;
            let len = cols * rows;
            self.chars = vec![CharData::default(); len];
            self.cache = vec![CharData::default(); len];
            self.char_dirty = vec![false; len];
            self.pipeline
                .resize_back(cols * self.font.char_width, rows * self.font.char_height);
        }
        self.cls();
        self.mark_all_dirty();
    }

    /// Number of columns.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Replaces the font; the cell pixel planes are resized to match
    /// and everything is redrawn.
    pub fn font(&mut self, font: &'static Font) {
        self.font = font;
        self.pipeline
            .resize_back(self.cols * font.char_width, self.rows * font.char_height);
        self.mark_all_dirty();
    }

    /// Loads a built-in palette preset.
    pub fn palette(&mut self, preset: PalettePreset) {
        self.palette.load_preset(preset);
        if self.palette.any_dirty() {
            self.dirty_validation = true;
        }
    }

    /// Sets one palette entry; cells using the index are redrawn on the
    /// next render if the value changed.
    pub fn set_palette_entry(&mut self, index: usize, r: u8, g: u8, b: u8, a: u8) {
        debug_assert!(index < PALETTE_SIZE, "palette index out of range: {index}");
        self.palette.set_entry(index, Rgba8::new(r, g, b, a));
        if self.palette.is_dirty(index) {
            self.dirty_validation = true;
            if index == self.opts.border_color as usize {
                self.dirty_border = true;
            }
        }
    }

    /// Returns one palette entry.
    #[must_use]
    pub fn palette_entry(&self, index: usize) -> Rgba8 {
        self.palette.entry(index)
    }

    /// Replaces the render options.
    pub fn options(&mut self, opts: Options) {
        if opts != self.opts {
            self.opts = opts;
            // Alignment, border, and blur geometry may all have moved.
            self.dirty_border = true;
            self.dirty_blur = true;
            self.dirty_validation = true;
            self.mark_all_dirty();
        }
    }

    /// Current render options.
    #[must_use]
    pub fn current_options(&self) -> &Options {
        &self.opts
    }

    /// Declares the output framebuffer geometry. The buffer itself is
    /// borrowed per [`Console::render`] call; pixel planes are
    /// reallocated here so rendering never allocates.
    pub fn outbuf(&mut self, width: usize, height: usize, pitch_bytes: usize) {
        self.pipeline.set_output(width, height, pitch_bytes);
        self.dirty_border = true;
        self.dirty_blur = true;
        self.dirty_validation = true;
        self.mark_all_dirty();
    }

    // --- Cursor and state ---

    /// Moves the cursor. Each coordinate is applied only if it lies
    /// inside the grid; `-1` (or any out-of-range value) leaves that
    /// coordinate unchanged.
    pub fn locate(&mut self, col: i32, row: i32) {
        self.column(col);
        self.row(row);
    }

    /// Sets the cursor column if `col` is inside the grid.
    pub fn column(&mut self, col: i32) {
        if col >= 0 && (col as usize) < self.cols {
            self.states.top_mut().x = col;
        }
        self.pending_scroll = false;
    }

    /// Sets the cursor row if `row` is inside the grid.
    pub fn row(&mut self, row: i32) {
        if row >= 0 && (row as usize) < self.rows {
            self.states.top_mut().y = row;
        }
        self.pending_scroll = false;
    }

    /// Current cursor column.
    #[must_use]
    pub fn cursor_x(&self) -> i32 {
        self.states.top().x
    }

    /// Current cursor row.
    #[must_use]
    pub fn cursor_y(&self) -> i32 {
        self.states.top().y
    }

    /// Sets the foreground palette index of the active state.
    pub fn fg(&mut self, fg: u8) {
        debug_assert!(fg < 16, "fg index out of range: {fg}");
        self.states.top_mut().fg = fg & 0xF;
    }

    /// Sets the background palette index of the active state.
    pub fn bg(&mut self, bg: u8) {
        debug_assert!(bg < 16, "bg index out of range: {bg}");
        self.states.top_mut().bg = bg & 0xF;
    }

    /// Replaces the style flags of the active state.
    pub fn style(&mut self, style: Style) {
        self.states.top_mut().style = style;
    }

    /// Pushes a copy of the active state. Silently ignored beyond the
    /// 32-deep limit.
    pub fn save(&mut self) {
        self.states.save();
    }

    /// Pops back to the previously saved state, cursor included.
    /// Silently ignored on the base state.
    pub fn restore(&mut self) {
        self.states.restore();
    }

    // --- Writing ---

    /// Prints UTF-8 text at the cursor, wrapping at the right edge and
    /// scrolling at the bottom.
    pub fn print(&mut self, text: &str) {
        for ch in text.chars() {
            self.put_char(ch);
        }
    }

    /// Prints a single character at the cursor.
    pub fn print_char(&mut self, ch: char) {
        self.put_char(ch);
    }

    /// Prints text followed by a newline.
    pub fn println(&mut self, text: &str) {
        self.print(text);
        self.newline();
    }

    /// Moves the cursor to the start of the next row. At the bottom row
    /// the scroll is deferred until the next glyph is written, so the
    /// last printed line stays visible.
    pub fn newline(&mut self) {
        if self.pending_scroll {
            self.scroll_up();
        }
        let rows = self.rows as i32;
        let state = self.states.top_mut();
        state.x = 0;
        if state.y >= rows - 1 {
            state.y = rows - 1;
            self.pending_scroll = true;
        } else {
            state.y += 1;
        }
    }

    /// Clears every cell to the default and resets the state stack.
    pub fn cls(&mut self) {
        self.chars.fill(CharData::default());
        self.states.reset();
        self.pending_scroll = false;
        self.dirty_validation = true;
    }

    /// Fills a cell rectangle with `ch` using the active colors and
    /// style. The rectangle is clipped to the grid.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, ch: char) {
        let rect = Rect::sized(x, y, w, h)
            .intersection(&Rect::sized(0, 0, self.cols as i32, self.rows as i32));
        let state = *self.states.top();
        let cell = CharData::new(ch, state.fg, state.bg, state.style);
        for row in rect.top..rect.bottom {
            for col in rect.left..rect.right {
                self.chars[row as usize * self.cols + col as usize] = cell;
            }
        }
        if !rect.is_empty() {
            self.dirty_validation = true;
        }
    }

    /// Draws a rectangular frame using one of the predefined glyph
    /// sets. Degenerate frames (`w < 2 || h < 2`) are ignored.
    pub fn box_frame(&mut self, x: i32, y: i32, w: i32, h: i32, glyphs: &BoxGlyphs) {
        if w < 2 || h < 2 {
            return;
        }
        let [tl, top, tr, left, right, bl, bottom, br] = *glyphs;
        self.put_cell(x, y, tl);
        self.put_cell(x + w - 1, y, tr);
        self.put_cell(x, y + h - 1, bl);
        self.put_cell(x + w - 1, y + h - 1, br);
        for col in x + 1..x + w - 1 {
            self.put_cell(col, y, top);
            self.put_cell(col, y + h - 1, bottom);
        }
        for row in y + 1..y + h - 1 {
            self.put_cell(x, row, left);
            self.put_cell(x + w - 1, row, right);
        }
        self.dirty_validation = true;
    }

    // --- Cell access ---

    /// Read-only view of the whole grid in row-major order.
    #[must_use]
    pub fn characters(&self) -> &[CharData] {
        &self.chars
    }

    /// Returns the cell at `(col, row)`, if inside the grid.
    #[must_use]
    pub fn char_at(&self, col: usize, row: usize) -> Option<&CharData> {
        if col < self.cols && row < self.rows {
            self.chars.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Mutable access to the cell at `(col, row)`. Taking the reference
    /// marks the console for revalidation, so direct edits show up on
    /// the next render.
    pub fn char_at_mut(&mut self, col: usize, row: usize) -> Option<&mut CharData> {
        if col < self.cols && row < self.rows {
            self.dirty_validation = true;
            self.chars.get_mut(row * self.cols + col)
        } else {
            None
        }
    }

    // --- Clock and picking ---

    /// Advances the blink clock by `dt` seconds. Pauses longer than one
    /// blink period are clamped to a single period.
    pub fn update(&mut self, dt: f32) {
        if dt <= 0.0 || self.opts.blink_time <= 0.0 {
            return;
        }
        let period = self.opts.blink_time;
        self.blink_accum = (self.blink_accum + dt.min(period)) % period;
        let on = self.blink_accum < period * 0.5;
        if on != self.blink_on {
            self.blink_on = on;
            self.blink_flipped = true;
            self.dirty_validation = true;
        }
    }

    /// Maps an output pixel position to the cell underneath it.
    #[must_use]
    pub fn hit(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let layout = &self.pipeline.layout;
        let cell_w = self.font.char_width as i32 * layout.scale;
        let cell_h = self.font.char_height as i32 * layout.scale;
        if cell_w == 0 || cell_h == 0 {
            return None;
        }
        let gx = x - layout.margin_x;
        let gy = y - layout.margin_y;
        if gx < 0 || gy < 0 {
            return None;
        }
        let col = (gx / cell_w) as usize;
        let row = (gy / cell_h) as usize;
        if col < self.cols && row < self.rows {
            Some((col, row))
        } else {
            None
        }
    }

    // --- Internals shared with the interpreters and the pipeline ---

    /// Writes one glyph at the cursor with wrap and deferred scroll.
    pub(crate) fn put_char(&mut self, ch: char) {
        if self.states.top().x >= self.cols as i32 {
            self.newline();
        }
        if self.pending_scroll {
            self.scroll_up();
        }
        let state = *self.states.top();
        self.put_cell(state.x, state.y, ch);
        self.states.top_mut().x += 1;
    }

    /// Writes one glyph at the cursor without wrapping or scrolling;
    /// out-of-grid writes are dropped. Used by the image interpreters.
    pub(crate) fn blit_char(&mut self, ch: char) {
        let state = *self.states.top();
        self.put_cell(state.x, state.y, ch);
        self.states.top_mut().x += 1;
    }

    /// Writes a cell from the active state, dropping out-of-grid
    /// positions.
    pub(crate) fn put_cell(&mut self, col: i32, row: i32, ch: char) {
        if col < 0 || row < 0 || col as usize >= self.cols || row as usize >= self.rows {
            return;
        }
        let state = self.states.top();
        self.chars[row as usize * self.cols + col as usize] =
            CharData::new(ch, state.fg, state.bg, state.style);
        self.dirty_validation = true;
    }

    /// Shifts the grid up one row and clears the freed bottom row.
    fn scroll_up(&mut self) {
        self.pending_scroll = false;
        if self.rows > 1 {
            self.chars.copy_within(self.cols.., 0);
        }
        let last = (self.rows - 1) * self.cols;
        self.chars[last..].fill(CharData::default());
        trace!("scrolled one row");
        self.mark_all_dirty();
    }

    fn mark_all_dirty(&mut self) {
        self.dirty_validation = true;
        self.dirty_all_chars = true;
    }
}

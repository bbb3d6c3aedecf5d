// src/ansi/mod.rs

//! ANSI escape interpreter for drawing `.ans` art into the grid.
//!
//! The interpreter consumes a byte slice decoded either as UTF-8 or as
//! CP437 and paints from the cursor position at the time of the call;
//! `\r` and `\n` address columns relative to that origin and the origin
//! is restored when interpretation finishes, so the image lands as a
//! block without disturbing the persistent cursor.
//!
//! Recognized controls: CR, LF, SUB (terminates), `ESC [` CSI sequences
//! (SGR and cursor-forward; other finals are consumed and ignored), and
//! `ESC ]` OSC sequences (swallowed up to BEL). Anything malformed ends
//! interpretation; everything drawn so far stays.

pub(crate) mod cp437;

#[cfg(test)]
mod tests;

use crate::cell::{Style, DEFAULT_BG, DEFAULT_FG};
use crate::console::Console;
use cp437::CP437_TO_UNICODE;
use log::warn;

const BEL: u8 = 0x07;
const SUB: u8 = 0x1A;
const ESC: u8 = 0x1B;

/// Maximum number of CSI arguments retained.
const MAX_CSI_ARGS: usize = 8;

/// How bytes outside escape sequences decode to glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ByteMode {
    Utf8,
    Cp437,
}

/// Decodes one UTF-8 scalar from the head of `bytes`.
///
/// Returns the character and its encoded length, or `None` on any
/// malformed sequence.
fn decode_utf8(bytes: &[u8]) -> Option<(char, usize)> {
    let first = *bytes.first()?;
    let len = match first {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => return None,
    };
    let seq = bytes.get(..len)?;
    let s = core::str::from_utf8(seq).ok()?;
    s.chars().next().map(|c| (c, len))
}

/// Decodes the conceptual xterm 256-color palette entry `n` (16..=255)
/// to RGB: a 6x6x6 cube followed by a 24-step grayscale ramp.
fn xterm_color(n: u16) -> (u8, u8, u8) {
    if n <= 231 {
        let i = n - 16;
        let r = i / 36;
        let g = (i / 6) % 6;
        let b = i % 6;
        let ch = |v: u16| ((255 * v + 3) / 5) as u8;
        (ch(r), ch(g), ch(b))
    } else {
        let level = ((255 * (n - 232) + 12) / 23) as u8;
        (level, level, level)
    }
}

impl Console {
    /// Draws a UTF-8 encoded ANSI stream at the cursor.
    pub fn print_ans(&mut self, bytes: &[u8]) {
        self.interpret_ansi(bytes, ByteMode::Utf8);
    }

    /// Draws a CP437 encoded ANSI stream at the cursor.
    pub fn print_ans_cp437(&mut self, bytes: &[u8]) {
        self.interpret_ansi(bytes, ByteMode::Cp437);
    }

    fn interpret_ansi(&mut self, bytes: &[u8], mode: ByteMode) {
        let base_x = self.cursor_x();
        let base_y = self.cursor_y();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\n' => {
                    i += 1;
                    let state = self.states.top_mut();
                    state.x = base_x;
                    state.y += 1;
                }
                b'\r' => {
                    i += 1;
                    self.states.top_mut().x = base_x;
                }
                SUB => break,
                ESC => {
                    i += 1;
                    match bytes.get(i) {
                        Some(b'[') => i = self.interpret_csi(bytes, i + 1),
                        Some(b']') => {
                            // OSC: swallow everything up to BEL.
                            i += 1;
                            while i < bytes.len() && bytes[i] != BEL {
                                i += 1;
                            }
                            if i < bytes.len() {
                                i += 1;
                            }
                        }
                        Some(_) => i += 1,
                        None => break,
                    }
                }
                byte => match mode {
                    ByteMode::Cp437 => {
                        self.blit_char(CP437_TO_UNICODE[byte as usize]);
                        i += 1;
                    }
                    ByteMode::Utf8 => match decode_utf8(&bytes[i..]) {
                        Some((ch, len)) => {
                            self.blit_char(ch);
                            i += len;
                        }
                        None => {
                            warn!("ansi: malformed utf-8 byte {byte:#04X}, stopping");
                            break;
                        }
                    },
                },
            }
        }
        let state = self.states.top_mut();
        state.x = base_x;
        state.y = base_y;
    }

    /// Parses a CSI sequence starting just past `ESC [`; returns the
    /// index past its terminator.
    fn interpret_csi(&mut self, bytes: &[u8], mut i: usize) -> usize {
        if bytes.get(i) == Some(&b'=') {
            i += 1;
        }
        let mut args = [0u16; MAX_CSI_ARGS];
        let mut argc = 0usize;
        let mut current: u32 = 0;
        let mut have_digit = false;
        loop {
            let Some(&byte) = bytes.get(i) else {
                // Truncated sequence.
                return i;
            };
            i += 1;
            match byte {
                b'0'..=b'9' => {
                    current = (current * 10 + (byte - b'0') as u32).min(u16::MAX as u32);
                    have_digit = true;
                }
                b';' => {
                    if argc < MAX_CSI_ARGS {
                        args[argc] = current as u16;
                        argc += 1;
                    }
                    current = 0;
                    have_digit = false;
                }
                terminator => {
                    if (have_digit || argc > 0) && argc < MAX_CSI_ARGS {
                        args[argc] = current as u16;
                        argc += 1;
                    }
                    match terminator {
                        b'm' => self.apply_sgr(&args[..argc]),
                        b'C' if argc == 1 => {
                            self.states.top_mut().x += args[0] as i32;
                        }
                        _ => {}
                    }
                    return i;
                }
            }
        }
    }

    /// Applies a Select Graphic Rendition parameter list to the active
    /// state. Unknown codes are ignored.
    fn apply_sgr(&mut self, args: &[u16]) {
        if args.is_empty() {
            self.sgr_reset();
            return;
        }
        let mut idx = 0;
        while idx < args.len() {
            let code = args[idx];
            idx += 1;
            let state = self.states.top_mut();
            match code {
                0 => self.sgr_reset(),
                1 => state.style |= Style::BOLD,
                21 => state.style -= Style::BOLD,
                3 | 5 | 6 => state.style |= Style::BLINK,
                25 => state.style -= Style::BLINK,
                4 => state.style |= Style::UNDERLINE,
                24 => state.style -= Style::UNDERLINE,
                30..=37 => state.fg = (code - 30) as u8,
                39 => state.fg = DEFAULT_FG,
                40..=47 => state.bg = (code - 40) as u8,
                49 => state.bg = DEFAULT_BG,
                90..=97 => state.fg = (code - 90) as u8 + 8,
                100..=107 => state.bg = (code - 100) as u8 + 8,
                38 | 48 => {
                    let (index, consumed) = self.parse_extended_color(&args[idx..]);
                    idx += consumed;
                    if let Some(index) = index {
                        let state = self.states.top_mut();
                        if code == 38 {
                            state.fg = index;
                        } else {
                            state.bg = index;
                        }
                    }
                }
                other => warn!("ansi: unknown SGR code {other}"),
            }
        }
    }

    fn sgr_reset(&mut self) {
        let state = self.states.top_mut();
        state.style = Style::empty();
        state.fg = DEFAULT_FG;
        state.bg = DEFAULT_BG;
    }

    /// Parses the tail of an extended color introducer (`5;N` or
    /// `2;R;G;B`), returning the matched palette index and how many
    /// arguments were consumed.
    fn parse_extended_color(&self, args: &[u16]) -> (Option<u8>, usize) {
        match args.first() {
            Some(&5) => match args.get(1) {
                Some(&n) if n < 16 => (Some(n as u8), 2),
                Some(&n) if n < 256 => {
                    let (r, g, b) = xterm_color(n);
                    (Some(self.palette.find_color_match(r, g, b) as u8), 2)
                }
                Some(_) => (None, 2),
                None => (None, 1),
            },
            Some(&2) => {
                if args.len() < 4 {
                    return (None, args.len());
                }
                let (r, g, b) = (args[1].min(255) as u8, args[2].min(255) as u8, args[3].min(255) as u8);
                (Some(self.palette.find_color_match(r, g, b) as u8), 4)
            }
            Some(_) => (None, 1),
            None => (None, 0),
        }
    }
}

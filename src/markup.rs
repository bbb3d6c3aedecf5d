// src/markup.rs

//! The console markup language accepted by `cprint`.
//!
//! Markup is UTF-8 text with angle-bracket tags and a handful of
//! HTML-style entities:
//!
//! - `<red>`, `<on_blue>`, `<b>`, `<u>`, `<blink>`, `<shiny>` select
//!   colors and styles; `</name>` returns to the previous state.
//! - `&lt;`, `&gt;`, `&amp;` escape the meta characters.
//!
//! Every opening tag saves the drawing state and applies its change;
//! every closing tag restores the saved state but keeps the cursor
//! where the tag content left it. Unknown tags and entities are
//! consumed without touching the grid, and a malformed tag simply ends
//! interpretation, leaving everything printed so far in place.

use crate::cell::Style;
use crate::console::Console;
use log::warn;

/// One lexed markup item.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Token<'a> {
    /// A printable character.
    Text(char),
    /// `<name>`
    Open(&'a str),
    /// `</name>`
    Close(&'a str),
    /// `<name/>`
    OpenClose(&'a str),
}

/// Fg color names in palette order; `on_`-prefixed forms select bg.
const COLOR_NAMES: [&str; 16] = [
    "black", "red", "green", "orange", "blue", "magenta", "cyan", "lgrey", "grey", "lred",
    "lgreen", "yellow", "lblue", "lmagenta", "lcyan", "white",
];

fn color_index(name: &str) -> Option<u8> {
    COLOR_NAMES
        .iter()
        .position(|&n| n == name)
        .map(|i| i as u8)
}

fn is_tag_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

struct Lexer<'a> {
    rest: &'a str,
}

impl<'a> Lexer<'a> {
    fn new(text: &'a str) -> Self {
        Lexer { rest: text }
    }

    /// Returns the next token, or `None` at end of input or on a
    /// malformed tag (which terminates interpretation).
    fn next_token(&mut self) -> Option<Token<'a>> {
        loop {
            let mut chars = self.rest.chars();
            let first = chars.next()?;
            match first {
                '<' => return self.lex_tag(),
                '&' => {
                    if let Some(c) = self.lex_entity() {
                        return Some(Token::Text(c));
                    }
                    // Unknown or malformed entity: dropped, keep going.
                }
                c => {
                    self.rest = chars.as_str();
                    return Some(Token::Text(c));
                }
            }
        }
    }

    fn lex_tag(&mut self) -> Option<Token<'a>> {
        // self.rest starts at '<'.
        let body = &self.rest[1..];
        let (closing, body) = match body.strip_prefix('/') {
            Some(stripped) => (true, stripped),
            None => (false, body),
        };
        let name_len = body.chars().take_while(|&c| is_tag_char(c)).count();
        let name = &body[..name_len];
        let after = &body[name_len..];
        if name.is_empty() {
            warn!("markup: empty tag name");
            return None;
        }
        if let Some(rest) = after.strip_prefix("/>") {
            if closing {
                warn!("markup: tag is both closing and self-closing");
                return None;
            }
            self.rest = rest;
            return Some(Token::OpenClose(name));
        }
        if let Some(rest) = after.strip_prefix('>') {
            self.rest = rest;
            return Some(if closing {
                Token::Close(name)
            } else {
                Token::Open(name)
            });
        }
        warn!("markup: unterminated tag");
        None
    }

    /// Consumes `&name;` (lowercase letters only) and maps the known
    /// entities. Returns `None` for unknown or malformed entities,
    /// which are dropped from the output.
    fn lex_entity(&mut self) -> Option<char> {
        // self.rest starts at '&'.
        let body = &self.rest[1..];
        let name_len = body.chars().take_while(char::is_ascii_lowercase).count();
        let name = &body[..name_len];
        let after = &body[name_len..];
        match after.strip_prefix(';') {
            Some(rest) => {
                self.rest = rest;
                match name {
                    "lt" => Some('<'),
                    "gt" => Some('>'),
                    "amp" => Some('&'),
                    _ => None,
                }
            }
            None => {
                // No terminator: drop the ampersand and the name.
                self.rest = after;
                None
            }
        }
    }
}

/// Applies an opening tag's effect to the active state.
fn apply_tag(console: &mut Console, name: &str) {
    if let Some(index) = color_index(name) {
        console.fg(index);
        return;
    }
    if let Some(bg_name) = name.strip_prefix("on_") {
        if let Some(index) = color_index(bg_name) {
            console.bg(index);
            return;
        }
    }
    let style = console.states.top().style;
    match name {
        "b" | "strong" => console.style(style | Style::BOLD),
        "u" => console.style(style | Style::UNDERLINE),
        "blink" => console.style(style | Style::BLINK),
        "shiny" => console.style(style | Style::SHINY),
        _ => {}
    }
}

impl Console {
    /// Prints markup text; see the module docs for the language.
    pub fn cprint(&mut self, text: &str) {
        let mut lexer = Lexer::new(text);
        while let Some(token) = lexer.next_token() {
            match token {
                Token::Text(c) => self.put_char(c),
                Token::Open(name) => {
                    self.save();
                    apply_tag(self, name);
                }
                Token::Close(_) => self.restore_keep_cursor(),
                Token::OpenClose(name) => {
                    self.save();
                    apply_tag(self, name);
                    self.restore_keep_cursor();
                }
            }
        }
    }

    /// Prints markup text followed by a newline.
    pub fn cprintln(&mut self, text: &str) {
        self.cprint(text);
        self.newline();
    }

    /// Restores the saved state but keeps the current cursor position,
    /// the closing-tag behavior.
    fn restore_keep_cursor(&mut self) {
        let x = self.states.top().x;
        let y = self.states.top().y;
        self.restore();
        self.states.top_mut().x = x;
        self.states.top_mut().y = y;
    }
}

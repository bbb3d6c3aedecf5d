// src/xp.rs

//! Loader for gzip-wrapped rectangular grid images (REXPaint `.xp`).
//!
//! The container is a gzip stream whose payload is raw DEFLATE. The
//! payload holds a version, a layer count, and per layer a
//! width/height pair followed by column-major cell records of a CP437
//! codepoint and two RGB triples. A background of exactly magenta
//! `(255, 0, 255)` marks a transparent cell.
//!
//! The public entry point never fails: any framing or format error is
//! logged and leaves the image partially or entirely undrawn, with the
//! console otherwise untouched.

use crate::ansi::cp437::CP437_TO_UNICODE;
use crate::cell::CharData;
use crate::console::Console;
use flate2::read::DeflateDecoder;
use log::warn;
use std::io::Read;
use thiserror::Error;

const GZIP_HEADER_LEN: usize = 10;
const GZIP_FOOTER_LEN: usize = 8;
const MAX_LAYERS: i32 = 9;

/// Reasons an `.xp` stream was rejected or cut short.
#[derive(Debug, Error)]
enum XpError {
    #[error("not a gzip stream")]
    BadMagic,
    #[error("unsupported compression method {0}")]
    BadMethod(u8),
    #[error("unsupported gzip flags {0:#04x}")]
    BadFlags(u8),
    #[error("truncated payload")]
    Truncated,
    #[error("layer count {0} out of range")]
    BadLayerCount(i32),
    #[error("bad layer dimensions {0}x{1}")]
    BadDimensions(i32, i32),
    #[error(transparent)]
    Inflate(#[from] std::io::Error),
}

/// Little-endian reader over the inflated payload.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Reader { data, pos: 0 }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], XpError> {
        let slice = self
            .data
            .get(self.pos..self.pos + n)
            .ok_or(XpError::Truncated)?;
        self.pos += n;
        Ok(slice)
    }

    fn read_i32(&mut self) -> Result<i32, XpError> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn read_u32(&mut self) -> Result<u32, XpError> {
        self.read_i32().map(|v| v as u32)
    }

    fn read_u8(&mut self) -> Result<u8, XpError> {
        Ok(self.take(1)?[0])
    }
}

/// Validates the gzip framing and inflates the raw DEFLATE payload.
///
/// The trailing footer carries the uncompressed length, which sizes the
/// scratch buffer up front; the CRC beside it is not checked.
fn inflate_gzip(bytes: &[u8]) -> Result<Vec<u8>, XpError> {
    if bytes.len() < GZIP_HEADER_LEN + GZIP_FOOTER_LEN {
        return Err(XpError::Truncated);
    }
    if bytes[0] != 0x1F || bytes[1] != 0x8B {
        return Err(XpError::BadMagic);
    }
    if bytes[2] != 0x08 {
        return Err(XpError::BadMethod(bytes[2]));
    }
    if bytes[3] != 0 {
        return Err(XpError::BadFlags(bytes[3]));
    }
    let footer = &bytes[bytes.len() - 4..];
    let expanded = u32::from_le_bytes([footer[0], footer[1], footer[2], footer[3]]) as usize;
    let deflated = &bytes[GZIP_HEADER_LEN..bytes.len() - GZIP_FOOTER_LEN];
    let mut payload = Vec::with_capacity(expanded);
    DeflateDecoder::new(deflated).read_to_end(&mut payload)?;
    Ok(payload)
}

impl Console {
    /// Draws a compressed grid image at the cursor.
    ///
    /// `layer_mask` hides layers: bit `i` set skips layer `i`. Pass 0
    /// to draw every layer. Malformed input is swallowed; whatever was
    /// decoded before the error stays on the grid.
    pub fn print_xp(&mut self, bytes: &[u8], layer_mask: u32) {
        if let Err(err) = self.draw_xp(bytes, layer_mask) {
            warn!("xp: {err}; image left incomplete");
        }
    }

    fn draw_xp(&mut self, bytes: &[u8], layer_mask: u32) -> Result<(), XpError> {
        let payload = inflate_gzip(bytes)?;
        let mut reader = Reader::new(&payload);

        let _version = reader.read_i32()?;
        let layer_count = reader.read_i32()?;
        if !(1..=MAX_LAYERS).contains(&layer_count) {
            return Err(XpError::BadLayerCount(layer_count));
        }

        let base_x = self.cursor_x();
        let base_y = self.cursor_y();
        let style = self.states.top().style;
        // Cells are written below as records decode; any later error
        // must still leave the partial image scheduled for redraw.
        self.dirty_validation = true;

        for layer in 0..layer_count {
            let width = reader.read_i32()?;
            let height = reader.read_i32()?;
            if width < 0 || height < 0 {
                return Err(XpError::BadDimensions(width, height));
            }
            let hidden = layer_mask & (1u32 << layer) != 0;
            for x in 0..width {
                for y in 0..height {
                    let cp = reader.read_u32()?;
                    let fg = (reader.read_u8()?, reader.read_u8()?, reader.read_u8()?);
                    let bg = (reader.read_u8()?, reader.read_u8()?, reader.read_u8()?);
                    if hidden || bg == (255, 0, 255) {
                        continue;
                    }
                    let glyph = CP437_TO_UNICODE[(cp & 0xFF) as usize];
                    let fg_index = self.palette.find_color_match(fg.0, fg.1, fg.2) as u8;
                    let bg_index = self.palette.find_color_match(bg.0, bg.1, bg.2) as u8;
                    let col = base_x + x;
                    let row = base_y + y;
                    if col < 0
                        || row < 0
                        || col as usize >= self.cols
                        || row as usize >= self.rows
                    {
                        continue;
                    }
                    self.chars[row as usize * self.cols + col as usize] =
                        CharData::new(glyph, fg_index, bg_index, style);
                }
            }
        }
        Ok(())
    }
}

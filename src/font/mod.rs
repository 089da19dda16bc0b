//! Bitmap font lookup, measuring and rendering
//!
//! Fonts use a compact compiled layout: `offset[code & index_mask]` points
//! into `index`, which holds `(high bits of code | glyph width, content
//! offset)` pairs per bucket, each bucket terminated by a zero word. Glyph
//! bitmaps in `content` are row-major with one 32-bit word per 32 pixels of
//! width, most significant bit leftmost.

mod fixed6x9;

pub use fixed6x9::FIXED_6X9;

use crate::gfx::Canvas;
use crate::rgb::Rgba;

/// A compiled bitmap font
#[derive(Debug)]
pub struct Font {
    pub name: &'static str,
    /// Line height in pixels
    pub height: u32,
    pub index_mask: u32,
    /// Character drawn in place of codes the font does not cover
    pub default_char: Option<u32>,
    pub offset: &'static [u32],
    pub index: &'static [u32],
    pub content: &'static [u32],
}

/// One glyph bitmap borrowed from a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    pub width: u32,
    words_per_row: usize,
    bitmap: &'a [u32],
}

impl Glyph<'_> {
    /// Whether the pixel at (x, y) of the glyph cell is set
    pub fn is_set(&self, x: u32, y: u32) -> bool {
        let word = y as usize * self.words_per_row + (x / 32) as usize;
        self.bitmap
            .get(word)
            .map(|bits| bits >> (31 - x % 32) & 1 != 0)
            .unwrap_or(false)
    }
}

impl Font {
    /// Find the glyph for `code`, falling back to the default character.
    ///
    /// Returns `None` when neither is present; callers treat that as a zero
    /// width glyph and draw nothing.
    pub fn glyph(&self, code: u32) -> Option<Glyph<'_>> {
        if let Some(glyph) = self.find(code) {
            return Some(glyph);
        }
        match self.default_char {
            Some(fallback) if fallback != code => self.find(fallback),
            _ => None,
        }
    }

    fn find(&self, code: u32) -> Option<Glyph<'_>> {
        let mask = self.index_mask;
        let mut at = *self.offset.get((code & mask) as usize)? as usize;

        loop {
            let entry = *self.index.get(at)?;
            if entry == 0 {
                return None;
            }
            if entry & !mask == code & !mask {
                let width = entry & mask;
                let start = *self.index.get(at + 1)? as usize;
                let words_per_row = (width as usize).div_ceil(32);
                let len = words_per_row * self.height as usize;
                let Some(bitmap) = self.content.get(start..start + len) else {
                    log::warn!("Font {} has a truncated glyph for {:#x}", self.name, code);
                    return None;
                };
                return Some(Glyph {
                    width,
                    words_per_row,
                    bitmap,
                });
            }
            at += 2;
        }
    }

    /// Width of one character, zero when it cannot be drawn
    pub fn char_width(&self, c: char) -> u32 {
        self.glyph(c as u32).map_or(0, |glyph| glyph.width)
    }

    /// Size of `text` in pixels: the widest line and the total height.
    ///
    /// Empty text still measures one line high.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        let mut widest = 0u32;
        let mut line = 0u32;
        let mut lines = 1;

        for c in text.chars() {
            if c == '\n' {
                widest = widest.max(line);
                line = 0;
                lines += 1;
            } else {
                line = line.saturating_add(self.char_width(c));
            }
        }

        (widest.max(line), lines * self.height)
    }
}

/// Draw `text` with its top-left corner at (x, y).
///
/// Pixels falling outside the canvas are clipped by the canvas.
pub fn render<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: i32,
    y: i32,
    color: Rgba,
    font: &Font,
    text: &str,
) {
    let mut cursor_x = x;
    let mut cursor_y = y;

    for c in text.chars() {
        if c == '\n' {
            cursor_x = x;
            cursor_y = cursor_y.saturating_add(font.height as i32);
            continue;
        }

        let Some(glyph) = font.glyph(c as u32) else {
            continue;
        };

        for row in 0..font.height {
            for col in 0..glyph.width {
                if glyph.is_set(col, row) {
                    let px = cursor_x.saturating_add(col as i32);
                    let py = cursor_y.saturating_add(row as i32);
                    canvas.plot(px, py, color);
                }
            }
        }
        cursor_x = cursor_x.saturating_add(glyph.width as i32);
    }
}

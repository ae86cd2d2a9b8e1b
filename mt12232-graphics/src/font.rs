//! Bitmap fonts
//!
//! A font is a flat table of fixed-size glyph slots. Each slot is one byte
//! of ink width followed by `char_width` columns for every page of the glyph,
//! packed exactly like the framebuffer:
//!
//! ```text
//! ┌───────┬──────────────────────┬──────────────────────┬─────┐
//! │ WIDTH │ page 0: char_width B │ page 1: char_width B │ ... │
//! └───────┴──────────────────────┴──────────────────────┴─────┘
//! ```

use crate::framebuffer::pages_for;

/// Immutable bitmap font
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    data: &'a [u8],
    first_char_code: u8,
    chars_count: u16,
    char_width: usize,
    char_height: usize,
    bytes_per_char: usize,
}

impl<'a> Font<'a> {
    /// Describe a glyph table
    ///
    /// `chars_count` is at most 255. `char_width` is the column capacity of
    /// every slot, not the width each glyph is drawn with.
    pub const fn new(
        data: &'a [u8],
        first_char_code: u8,
        chars_count: u16,
        char_width: usize,
        char_height: usize,
    ) -> Self {
        Self {
            data,
            first_char_code,
            chars_count,
            char_width,
            char_height,
            bytes_per_char: char_width * pages_for(char_height) + 1,
        }
    }

    pub fn first_char_code(&self) -> u8 {
        self.first_char_code
    }

    pub fn chars_count(&self) -> u16 {
        self.chars_count
    }

    /// Column capacity of a glyph slot
    pub fn char_width(&self) -> usize {
        self.char_width
    }

    /// Glyph height in pixel rows
    pub fn char_height(&self) -> usize {
        self.char_height
    }

    /// Size of one glyph slot in bytes
    pub fn bytes_per_char(&self) -> usize {
        self.bytes_per_char
    }

    /// Glyph for a character code
    ///
    /// Codes the font does not cover map to the glyph at `first_char_code`.
    pub fn glyph(&self, code: u32) -> Glyph<'a> {
        let index = code
            .checked_sub(self.first_char_code as u32)
            .filter(|&index| index < self.chars_count as u32)
            .unwrap_or(0) as usize;

        let start = index * self.bytes_per_char;
        let end = start + self.bytes_per_char;
        let slot = self.data.get(start..end).unwrap_or(&[]);
        Glyph {
            slot,
            char_width: self.char_width,
            pages: pages_for(self.char_height),
        }
    }

    /// Width in pixels of `text` drawn without clipping
    pub fn text_width(&self, text: &str) -> usize {
        text.chars()
            .map(|c| self.glyph(c as u32).ink_width())
            .sum()
    }
}

/// One glyph slot of a [`Font`]
#[derive(Debug, Clone, Copy)]
pub struct Glyph<'a> {
    slot: &'a [u8],
    char_width: usize,
    pages: usize,
}

impl Glyph<'_> {
    /// Columns carrying ink, never more than the slot capacity
    pub fn ink_width(&self) -> usize {
        self.slot
            .first()
            .map_or(0, |&width| (width as usize).min(self.char_width))
    }

    /// Number of pages in the glyph bitmap
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Packed byte for column `x` of page `page`
    ///
    /// Positions outside the glyph read as blank.
    pub fn column(&self, page: usize, x: usize) -> u8 {
        if page >= self.pages || x >= self.char_width {
            return 0;
        }
        self.slot
            .get(1 + page * self.char_width + x)
            .copied()
            .unwrap_or(0)
    }
}

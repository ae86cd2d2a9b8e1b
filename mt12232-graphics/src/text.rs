//! Text compositing
//!
//! Glyph bitmaps are page-aligned to their own top row, but text can start
//! at any row. With `shift = y % 8`, destination page `j` of a glyph is made
//! of the low `8 - shift` bits of glyph page `j` moved down by `shift`, plus
//! the high `shift` bits of glyph page `j - 1`:
//!
//! ```text
//! glyph page j-1  [hhhh hhll] ──>> (8 - shift) ──┐
//!                                                ├── XOR ──> dest page j
//! glyph page j    [LLLL LLLL] ──<< shift ────────┘
//! ```

use crate::font::Font;
use crate::framebuffer::{pages_for, Framebuffer, PAGE_HEIGHT};

/// Bits kept from the last destination page of a glyph
///
/// Index 0 means the glyph ends on a page boundary and keeps all 8 rows.
const LAST_PAGE_MASKS: [u8; 8] = [0xFF, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F];

/// Compose one destination byte from two vertically adjacent source bytes
///
/// `high_bits` is the source byte from the page above: its top `shift` rows
/// land in the top of `dest`. `low_bits` is the source byte for this page:
/// its rows move down by `shift`. The result is masked and XORed into
/// `dest`. A `shift` of 0 takes nothing from `high_bits`.
#[inline]
pub const fn merge_row(dest: u8, high_bits: u8, low_bits: u8, shift: u8, mask: u8) -> u8 {
    let shift = shift % 8;
    let carried = if shift == 0 { 0 } else { high_bits >> (8 - shift) };
    dest ^ (((low_bits << shift) | carried) & mask)
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Framebuffer<B> {
    /// Clear the rectangle at (`x`, `y`) and draw `text` left-aligned in it
    ///
    /// Glyphs are drawn at their ink width and clipped to the rectangle, so
    /// the last visible glyph may be cut off. Rows of the rectangle below the
    /// font height stay blank.
    pub fn draw_text(
        &mut self,
        font: &Font<'_>,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        text: &str,
    ) {
        self.clear_rect(x, y, width, height);

        let Some((width, height)) = self.clip(x, y, width, height) else {
            return;
        };

        let char_height = height.min(font.char_height());
        if char_height == 0 {
            return;
        }

        let shift = y % PAGE_HEIGHT;
        let byte_height = pages_for(shift + char_height);
        let last_mask = LAST_PAGE_MASKS[(y + char_height) % PAGE_HEIGHT];

        let stride = self.bytes_per_line();
        let origin = self.byte_offset(x, y);
        let bytes = self.as_bytes_mut();

        let mut column = 0;
        for c in text.chars() {
            if column == width {
                break;
            }

            let glyph = font.glyph(c as u32);
            let drawn = glyph.ink_width().min(width - column);

            for page in 0..byte_height {
                let mask = if page + 1 == byte_height { last_mask } else { 0xFF };
                let row = origin + column + page * stride;
                for gx in 0..drawn {
                    let high = match page {
                        0 => 0,
                        _ => glyph.column(page - 1, gx),
                    };
                    let low = glyph.column(page, gx);
                    bytes[row + gx] = merge_row(bytes[row + gx], high, low, shift as u8, mask);
                }
            }

            column += drawn;
        }
    }
}

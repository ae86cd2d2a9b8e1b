//! Region clearing

use crate::framebuffer::{pages_for, Framebuffer, PAGE_HEIGHT};

/// Bits kept in the first page: rows above the rectangle
const TOP_KEEP_MASKS: [u8; 8] = [0x00, 0x01, 0x03, 0x07, 0x0F, 0x1F, 0x3F, 0x7F];

/// Bits kept in the last page: rows below the rectangle
///
/// Index 0 means the rectangle ends on a page boundary, so the last page is
/// cleared completely.
const BOTTOM_KEEP_MASKS: [u8; 8] = [0x00, 0xFE, 0xFC, 0xF8, 0xF0, 0xE0, 0xC0, 0x80];

fn and_mask(bytes: &mut [u8], mask: u8) {
    if mask == 0xFF {
        return;
    }
    for byte in bytes {
        *byte &= mask;
    }
}

impl<B: AsRef<[u8]> + AsMut<[u8]>> Framebuffer<B> {
    /// Blank the rectangle at (`x`, `y`), clipped to the surface
    ///
    /// Pixels outside the rectangle keep their value, including the other
    /// rows sharing the first and last page.
    pub fn clear_rect(&mut self, x: usize, y: usize, width: usize, height: usize) {
        let Some((width, height)) = self.clip(x, y, width, height) else {
            return;
        };

        let row_offset = y % PAGE_HEIGHT;
        let byte_height = pages_for(row_offset + height);
        let top_mask = TOP_KEEP_MASKS[row_offset];
        let bottom_mask = BOTTOM_KEEP_MASKS[(y + height) % PAGE_HEIGHT];

        let stride = self.bytes_per_line();
        let mut position = self.byte_offset(x, y);
        let bytes = self.as_bytes_mut();

        if byte_height == 1 {
            and_mask(&mut bytes[position..position + width], top_mask | bottom_mask);
            return;
        }

        and_mask(&mut bytes[position..position + width], top_mask);
        position += stride;
        for _ in 2..byte_height {
            bytes[position..position + width].fill(0);
            position += stride;
        }
        and_mask(&mut bytes[position..position + width], bottom_mask);
    }
}

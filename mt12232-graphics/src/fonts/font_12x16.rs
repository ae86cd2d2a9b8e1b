//! 12x16 numeric font
//!
//! The 6x8 glyphs for codes 0x20-0x3F doubled in both directions: digits,
//! punctuation and the symbols needed for readouts.

use crate::font::Font;

/// 12x16 font, space through question mark
pub static FONT_12X16: Font<'static> = Font::new(&DATA, 0x20, 32, 12, 16);

#[rustfmt::skip]
static DATA: [u8; 32 * 25] = [
    // ' '
    6,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '!'
    8,
    0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x33, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '"'
    10,
    0x00, 0x00, 0x3F, 0x3F, 0x00, 0x00, 0x3F, 0x3F, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '#'
    12,
    0x30, 0x30, 0xFF, 0xFF, 0x30, 0x30, 0xFF, 0xFF, 0x30, 0x30, 0x00, 0x00,
    0x03, 0x03, 0x3F, 0x3F, 0x03, 0x03, 0x3F, 0x3F, 0x03, 0x03, 0x00, 0x00,
    // '$'
    12,
    0x30, 0x30, 0xCC, 0xCC, 0xFF, 0xFF, 0xCC, 0xCC, 0x0C, 0x0C, 0x00, 0x00,
    0x0C, 0x0C, 0x0C, 0x0C, 0x3F, 0x3F, 0x0C, 0x0C, 0x03, 0x03, 0x00, 0x00,
    // '%'
    12,
    0x0F, 0x0F, 0x0F, 0x0F, 0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x00, 0x00,
    0x0C, 0x0C, 0x03, 0x03, 0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00,
    // '&'
    12,
    0x3C, 0x3C, 0xC3, 0xC3, 0x33, 0x33, 0x0C, 0x0C, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x0F, 0x30, 0x30, 0x33, 0x33, 0x0C, 0x0C, 0x33, 0x33, 0x00, 0x00,
    // '\''
    8,
    0x00, 0x00, 0x33, 0x33, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '('
    10,
    0x00, 0x00, 0xF0, 0xF0, 0x0C, 0x0C, 0x03, 0x03, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x03, 0x03, 0x0C, 0x0C, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00,
    // ')'
    10,
    0x00, 0x00, 0x03, 0x03, 0x0C, 0x0C, 0xF0, 0xF0, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x30, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x00, 0x00, 0x00, 0x00,
    // '*'
    12,
    0xC0, 0xC0, 0xCC, 0xCC, 0xF0, 0xF0, 0xCC, 0xCC, 0xC0, 0xC0, 0x00, 0x00,
    0x00, 0x00, 0x0C, 0x0C, 0x03, 0x03, 0x0C, 0x0C, 0x00, 0x00, 0x00, 0x00,
    // '+'
    12,
    0xC0, 0xC0, 0xC0, 0xC0, 0xFC, 0xFC, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ','
    8,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x33, 0x33, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '-'
    12,
    0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0xC0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '.'
    8,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '/'
    12,
    0x00, 0x00, 0x00, 0x00, 0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x00, 0x00,
    0x0C, 0x0C, 0x03, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '0'
    12,
    0xFC, 0xFC, 0x03, 0x03, 0xC3, 0xC3, 0x33, 0x33, 0xFC, 0xFC, 0x00, 0x00,
    0x0F, 0x0F, 0x33, 0x33, 0x30, 0x30, 0x30, 0x30, 0x0F, 0x0F, 0x00, 0x00,
    // '1'
    10,
    0x00, 0x00, 0x0C, 0x0C, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x30, 0x30, 0x3F, 0x3F, 0x30, 0x30, 0x00, 0x00, 0x00, 0x00,
    // '2'
    12,
    0x0C, 0x0C, 0x03, 0x03, 0x03, 0x03, 0xC3, 0xC3, 0x3C, 0x3C, 0x00, 0x00,
    0x30, 0x30, 0x3C, 0x3C, 0x33, 0x33, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00,
    // '3'
    12,
    0x03, 0x03, 0x03, 0x03, 0x33, 0x33, 0xCF, 0xCF, 0x03, 0x03, 0x00, 0x00,
    0x0C, 0x0C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x0F, 0x0F, 0x00, 0x00,
    // '4'
    12,
    0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00,
    0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x3F, 0x3F, 0x03, 0x03, 0x00, 0x00,
    // '5'
    12,
    0x3F, 0x3F, 0x33, 0x33, 0x33, 0x33, 0x33, 0x33, 0xC3, 0xC3, 0x00, 0x00,
    0x0C, 0x0C, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x0F, 0x0F, 0x00, 0x00,
    // '6'
    12,
    0xF0, 0xF0, 0xCC, 0xCC, 0xC3, 0xC3, 0xC3, 0xC3, 0x00, 0x00, 0x00, 0x00,
    0x0F, 0x0F, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x0F, 0x0F, 0x00, 0x00,
    // '7'
    12,
    0x03, 0x03, 0x03, 0x03, 0xC3, 0xC3, 0x33, 0x33, 0x0F, 0x0F, 0x00, 0x00,
    0x00, 0x00, 0x3F, 0x3F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '8'
    12,
    0x3C, 0x3C, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0x3C, 0x3C, 0x00, 0x00,
    0x0F, 0x0F, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x0F, 0x0F, 0x00, 0x00,
    // '9'
    12,
    0x3C, 0x3C, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xC3, 0xFC, 0xFC, 0x00, 0x00,
    0x00, 0x00, 0x30, 0x30, 0x30, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x00, 0x00,
    // ':'
    8,
    0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x0F, 0x0F, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // ';'
    8,
    0x00, 0x00, 0x3C, 0x3C, 0x3C, 0x3C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x33, 0x33, 0x0F, 0x0F, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '<'
    12,
    0x00, 0x00, 0xC0, 0xC0, 0x30, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x03, 0x03, 0x0C, 0x0C, 0x30, 0x30, 0x00, 0x00,
    // '='
    12,
    0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x30, 0x00, 0x00,
    0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x03, 0x00, 0x00,
    // '>'
    10,
    0x03, 0x03, 0x0C, 0x0C, 0x30, 0x30, 0xC0, 0xC0, 0x00, 0x00, 0x00, 0x00,
    0x30, 0x30, 0x0C, 0x0C, 0x03, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    // '?'
    12,
    0x0C, 0x0C, 0x03, 0x03, 0x03, 0x03, 0xC3, 0xC3, 0x3C, 0x3C, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x33, 0x33, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

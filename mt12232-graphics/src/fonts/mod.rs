//! Built-in fonts

mod font_12x16;
mod font_16x32;
mod font_6x8;

pub use font_12x16::FONT_12X16;
pub use font_16x32::FONT_16X32;
pub use font_6x8::FONT_6X8;

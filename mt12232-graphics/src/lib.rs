//! Packed-bitmap graphics for page-organised monochrome LCDs
//!
//! This crate provides:
//! - [`Framebuffer`]: a 1-bit-per-pixel surface where each byte holds eight
//!   vertically stacked pixels of one column (a "page")
//! - [`Framebuffer::clear_rect`]: byte-precise blanking of a rectangle
//! - [`Framebuffer::draw_text`]: glyph compositing with sub-byte vertical
//!   alignment
//! - [`Font`] and the built-in [`fonts`]
//!
//! # Memory layout
//!
//! ```text
//!            column 0   column 1   ...   column W-1
//! page 0   [ rows 0-7 ][ rows 0-7 ] ... [ rows 0-7 ]
//! page 1   [ rows 8-15][ rows 8-15] ... [ rows 8-15]
//! ...
//! ```
//!
//! Bit `n` of a byte is row `page * 8 + n`; a set bit is ink.
//!
//! Every operation clips to the surface. None of them can fail.

#![no_std]
#![deny(unsafe_code)]

mod clear;
pub mod font;
pub mod fonts;
pub mod framebuffer;
mod text;

pub use font::{Font, Glyph};
pub use framebuffer::{Framebuffer, SurfaceError, PAGE_HEIGHT};
pub use text::merge_row;

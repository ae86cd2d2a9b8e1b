//! MT-12232A panel driver
//!
//! Drives a 122x32 monochrome LCD built from two page-organised controllers
//! on an 8-bit parallel bus.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  mt12232-graphics: Framebuffer, draw_text    │
//! └──────────────────────┬───────────────────────┘
//!                        │ framebuffer_mut()
//! ┌──────────────────────▼───────────────────────┐
//! │  Mt12232: shadow diff, status polling,       │
//! │  timed command and data writes               │
//! └──────────────────────┬───────────────────────┘
//!                        │ ParallelBus + TickClock
//! ┌──────────────────────▼───────────────────────┐
//! │  mt12232-hal-stm32: GPIO port, DWT counter   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! let mut panel = Mt12232::new(bus, clock);
//! panel.init(&PanelConfig::default())?;
//! panel.framebuffer_mut().draw_text(&FONT_6X8, 0, 0, 122, 8, "Ready");
//! panel.update()?;
//! ```

#![no_std]
#![deny(unsafe_code)]

pub mod command;
pub mod config;
pub mod error;
pub mod panel;

#[cfg(test)]
mod sim;

pub use config::{PanelConfig, PanelTiming, TickTiming};
pub use error::DisplayError;
pub use panel::{Bank, Mt12232, PanelState, Select, BANK_WIDTH, BUFFER_SIZE, HEIGHT, PAGES, WIDTH};

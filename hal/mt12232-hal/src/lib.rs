//! MT-12232A Hardware Access Layer
//!
//! This crate defines the hardware access traits that the display core
//! drives. Chip-specific crates implement them for a particular GPIO
//! register family, and tests implement them with simulated panels.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  mt12232-driver (protocol engine)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  mt12232-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ mt12232-hal-  │       │  simulated    │
//! │ stm32 (F1/F4) │       │  panel (test) │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::ParallelBus`] - 8-bit parallel bus with control lines
//! - [`timing::TickClock`] - Free-running tick counter for busy-waits

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod pins;
pub mod timing;

// Re-export key types at crate root for convenience
pub use bus::{BusDirection, ParallelBus};
pub use pins::{LineMasks, PinAssignment, PinError};
pub use timing::{busy_wait, ms_to_ticks, ns_to_ticks, us_to_ticks, TickClock, TickDelay};

//! STM32 bus backends for the MT-12232A display core
//!
//! This crate implements [`mt12232_hal::ParallelBus`] on top of raw STM32
//! GPIO registers. The register family is chosen when the bus is built,
//! so one firmware image can carry the backend for either family:
//!
//! - STM32F1 (CRL/CRH configuration registers, 4 bits per pin)
//! - STM32F4 (MODER register, 2 bits per pin)
//!
//! Board pin names such as `"PB0"` resolve to a [`PinAssignment`] and the
//! port's register block with [`gpio::resolve_pins`].
//!
//! It also provides [`dwt::DwtClock`], a [`mt12232_hal::TickClock`] backed
//! by the Cortex-M cycle counter.
//!
//! # Features
//!
//! - `defmt` - Enable debug formatting support
//! - `serde` - Enable (de)serialization of configuration types

#![no_std]

pub mod bus;
pub mod dwt;
pub mod gpio;
pub mod port;

pub use bus::Stm32Bus;
pub use dwt::DwtClock;
pub use gpio::{
    parse_pin_string, port_base, resolve_pins, GpioFamily, Line, PinNameError, PinNames,
    ResolvedPins,
};
pub use port::{GpioRegisters, MmioPort};

// Re-export shared types from mt12232-hal
pub use mt12232_hal::{BusDirection, LineMasks, ParallelBus, PinAssignment, PinError};

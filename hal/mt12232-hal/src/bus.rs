//! Parallel bus abstraction
//!
//! The panel is wired to a single GPIO port: eight consecutive data lines
//! plus reset, chip select, A0, RD/WR and E control lines. Backends map
//! those lines to port bits once, in [`ParallelBus::configure`], and the
//! protocol engine then talks in port masks.

use crate::pins::{LineMasks, PinAssignment, PinError};

/// Direction of the data lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusDirection {
    /// Data lines sample the panel (status reads)
    Input,
    /// Data lines drive the panel (command and data writes)
    Output,
}

/// 8-bit parallel bus with control lines on one GPIO port
///
/// Implementations own the port and an output latch that starts with every
/// line high. Only pins named in the [`PinAssignment`] may be touched; all
/// other pins of the port keep their level and mode.
pub trait ParallelBus {
    /// Precompute port bit masks for the given pin assignment
    ///
    /// Returns the masks the caller should use with
    /// [`set_output_bits`](Self::set_output_bits).
    fn configure(&mut self, pins: &PinAssignment) -> Result<LineMasks, PinError>;

    /// Clear then set bits in the output latch and write it to the port
    ///
    /// The read-modify-write of the output register must be atomic with
    /// respect to interrupt handlers that touch the same port.
    fn set_output_bits(&mut self, clear: u16, set: u16);

    /// Switch the data lines to input or output
    ///
    /// Control lines are always outputs and are left untouched.
    fn set_bus_direction(&mut self, direction: BusDirection);

    /// Read the current level of the data lines, byte aligned
    fn sample_input(&mut self) -> u8;
}

impl<T: ParallelBus + ?Sized> ParallelBus for &mut T {
    fn configure(&mut self, pins: &PinAssignment) -> Result<LineMasks, PinError> {
        (**self).configure(pins)
    }

    fn set_output_bits(&mut self, clear: u16, set: u16) {
        (**self).set_output_bits(clear, set)
    }

    fn set_bus_direction(&mut self, direction: BusDirection) {
        (**self).set_bus_direction(direction)
    }

    fn sample_input(&mut self) -> u8 {
        (**self).sample_input()
    }
}

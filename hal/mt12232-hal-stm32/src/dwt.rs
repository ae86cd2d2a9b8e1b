//! Cycle-counter clock
//!
//! The DWT cycle counter runs at the core clock and wraps every 2^32
//! cycles, which is exactly what the panel's busy-waits need.

use cortex_m::peripheral::{DCB, DWT};
use mt12232_hal::TickClock;

/// [`TickClock`] backed by the DWT cycle counter
#[derive(Debug, Clone, Copy)]
pub struct DwtClock {
    frequency_hz: u32,
}

impl DwtClock {
    /// Enable tracing and start the cycle counter from zero
    ///
    /// `core_clock_hz` is the frequency the core (and therefore the
    /// counter) runs at.
    pub fn new(dcb: &mut DCB, dwt: &mut DWT, core_clock_hz: u32) -> Self {
        dcb.enable_trace();
        dwt.set_cycle_count(0);
        dwt.enable_cycle_counter();
        Self {
            frequency_hz: core_clock_hz,
        }
    }
}

impl TickClock for DwtClock {
    fn now(&self) -> u32 {
        DWT::cycle_count()
    }

    fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }
}

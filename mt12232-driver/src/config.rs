//! Panel configuration and timing
//!
//! Timing windows come from the MT-12232A datasheet:
//!
//! ```text
//!      read                          write
//! 1) CS, A0 set, RD/WR = 1         CS, A0 set, RD/WR = 0
//! 2) wait address setup (100 ns)   wait address setup (100 ns)
//! 3) E = 0                         DB = byte, E = 0
//! 4) wait enable pulse (300 ns)    wait enable pulse (300 ns)
//! 5) sample DB
//! 6) E = 1                         E = 1
//! 7) wait rest of cycle (1600 ns)  wait rest of cycle (1600 ns)
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mt12232_hal::{ms_to_ticks, ns_to_ticks, PinAssignment};

/// Bus timing windows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelTiming {
    /// A0 and RD/WR stable before E falls (Taw)
    pub address_setup_ns: u32,
    /// E low time (Tew)
    pub enable_pulse_ns: u32,
    /// Full read or write cycle (Tcyc)
    pub cycle_ns: u32,
    /// Length of each reset phase
    pub reset_pulse_ms: u32,
    /// Longest time to wait for a controller to become ready
    pub ready_timeout_us: u32,
}

impl Default for PanelTiming {
    fn default() -> Self {
        Self {
            address_setup_ns: 100,
            enable_pulse_ns: 300,
            cycle_ns: 2000,
            reset_pulse_ms: 10,
            ready_timeout_us: 1000,
        }
    }
}

/// Everything `init` needs to bring up a panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanelConfig {
    pub pins: PinAssignment,
    pub timing: PanelTiming,
}

/// [`PanelTiming`] converted to clock ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickTiming {
    pub address_setup: u32,
    pub enable_pulse: u32,
    /// Remainder of the cycle after setup and pulse
    pub cycle_end: u32,
    pub reset_pulse: u32,
    /// Status polls before giving up, at least one
    pub poll_attempts: u32,
}

impl TickTiming {
    /// Convert once, rounding every window up
    pub const fn new(timing: &PanelTiming, frequency_hz: u32) -> Self {
        let end_ns = timing
            .cycle_ns
            .saturating_sub(timing.address_setup_ns)
            .saturating_sub(timing.enable_pulse_ns);

        let timeout_ns = timing.ready_timeout_us as u64 * 1000;
        let attempts = match timeout_ns.checked_div(timing.cycle_ns as u64) {
            Some(0) | None => 1,
            Some(n) if n > u32::MAX as u64 => u32::MAX,
            Some(n) => n as u32,
        };

        Self {
            address_setup: ns_to_ticks(timing.address_setup_ns, frequency_hz),
            enable_pulse: ns_to_ticks(timing.enable_pulse_ns, frequency_hz),
            cycle_end: ns_to_ticks(end_ns, frequency_hz),
            reset_pulse: ms_to_ticks(timing.reset_pulse_ms, frequency_hz),
            poll_attempts: attempts,
        }
    }
}

//! Tick-based timing
//!
//! The panel's setup/hold windows are a few hundred nanoseconds, far below
//! what a timer interrupt can resolve. Delays are therefore expressed as a
//! number of ticks of a free-running counter (typically the CPU cycle
//! counter) and waited out by spinning on it.

use embedded_hal::delay::DelayNs;

const NS_PER_S: u64 = 1_000_000_000;
const US_PER_S: u64 = 1_000_000;
const MS_PER_S: u64 = 1_000;

/// Free-running tick counter
///
/// The counter is expected to wrap at `u32::MAX`.
pub trait TickClock {
    /// Current counter value
    fn now(&self) -> u32;

    /// Counter rate in ticks per second
    fn frequency_hz(&self) -> u32;
}

impl<T: TickClock + ?Sized> TickClock for &T {
    fn now(&self) -> u32 {
        (**self).now()
    }

    fn frequency_hz(&self) -> u32 {
        (**self).frequency_hz()
    }
}

const fn to_ticks(value: u64, frequency_hz: u32, unit_per_s: u64) -> u32 {
    let ticks = (value * frequency_hz as u64 + (unit_per_s - 1)) / unit_per_s;
    if ticks > u32::MAX as u64 {
        u32::MAX
    } else {
        ticks as u32
    }
}

/// Convert nanoseconds to ticks, rounding up
pub const fn ns_to_ticks(ns: u32, frequency_hz: u32) -> u32 {
    to_ticks(ns as u64, frequency_hz, NS_PER_S)
}

/// Convert microseconds to ticks, rounding up
pub const fn us_to_ticks(us: u32, frequency_hz: u32) -> u32 {
    to_ticks(us as u64, frequency_hz, US_PER_S)
}

/// Convert milliseconds to ticks, rounding up
pub const fn ms_to_ticks(ms: u32, frequency_hz: u32) -> u32 {
    to_ticks(ms as u64, frequency_hz, MS_PER_S)
}

/// Spin until `ticks` ticks have elapsed
///
/// The deadline comparison uses the signed difference so a counter wrap
/// during the wait is harmless, as long as the wait is shorter than half
/// the counter range.
pub fn busy_wait<C: TickClock + ?Sized>(clock: &C, ticks: u32) {
    if ticks == 0 {
        return;
    }
    let deadline = clock.now().wrapping_add(ticks);
    while (deadline.wrapping_sub(clock.now()) as i32) > 0 {
        core::hint::spin_loop();
    }
}

/// `embedded-hal` delay provider on top of a [`TickClock`]
pub struct TickDelay<C> {
    clock: C,
}

impl<C: TickClock> TickDelay<C> {
    /// Create a delay provider
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Give the clock back
    pub fn release(self) -> C {
        self.clock
    }
}

impl<C: TickClock> DelayNs for TickDelay<C> {
    fn delay_ns(&mut self, ns: u32) {
        busy_wait(&self.clock, ns_to_ticks(ns, self.clock.frequency_hz()));
    }

    fn delay_us(&mut self, us: u32) {
        busy_wait(&self.clock, us_to_ticks(us, self.clock.frequency_hz()));
    }

    fn delay_ms(&mut self, ms: u32) {
        busy_wait(&self.clock, ms_to_ticks(ms, self.clock.frequency_hz()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    /// Clock that advances one tick per read
    struct StepClock {
        ticks: Cell<u32>,
        reads: Cell<u32>,
    }

    impl StepClock {
        fn starting_at(start: u32) -> Self {
            Self {
                ticks: Cell::new(start),
                reads: Cell::new(0),
            }
        }
    }

    impl TickClock for StepClock {
        fn now(&self) -> u32 {
            let now = self.ticks.get();
            self.ticks.set(now.wrapping_add(1));
            self.reads.set(self.reads.get() + 1);
            now
        }

        fn frequency_hz(&self) -> u32 {
            1_000_000
        }
    }

    #[test]
    fn test_conversions_round_up() {
        // 64 MHz: 100 ns = 6.4 ticks
        assert_eq!(ns_to_ticks(100, 64_000_000), 7);
        assert_eq!(ns_to_ticks(300, 64_000_000), 20);
        assert_eq!(ns_to_ticks(1600, 64_000_000), 103);
        assert_eq!(us_to_ticks(22, 64_000_000), 1408);
        assert_eq!(ms_to_ticks(10, 64_000_000), 640_000);
        assert_eq!(ns_to_ticks(0, 64_000_000), 0);
        // Exact values are not bumped
        assert_eq!(ns_to_ticks(1000, 1_000_000), 1);
        assert_eq!(ns_to_ticks(1001, 1_000_000), 2);
    }

    #[test]
    fn test_conversion_saturates() {
        assert_eq!(ms_to_ticks(u32::MAX, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_zero_wait_does_not_read_clock() {
        let clock = StepClock::starting_at(0);
        busy_wait(&clock, 0);
        assert_eq!(clock.reads.get(), 0);
    }

    #[test]
    fn test_wait_elapses_requested_ticks() {
        let clock = StepClock::starting_at(100);
        busy_wait(&clock, 10);
        // Deadline read at 100, loop exits once the clock reads 110
        assert_eq!(clock.ticks.get(), 111);
    }

    #[test]
    fn test_wait_across_wraparound() {
        let clock = StepClock::starting_at(u32::MAX - 3);
        busy_wait(&clock, 8);
        assert_eq!(clock.ticks.get(), 5);
    }

    #[test]
    fn test_delay_ns_trait() {
        let clock = StepClock::starting_at(0);
        let mut delay = TickDelay::new(&clock);
        // 1 MHz: 2500 ns rounds up to 3 ticks
        delay.delay_ns(2500);
        assert_eq!(clock.ticks.get(), 4);

        delay.delay_us(5);
        assert_eq!(clock.ticks.get(), 10);
    }
}

//! Raw GPIO port registers
//!
//! [`GpioRegisters`] is the narrowest view of a port the bus needs: the
//! output data register, the input data register and the pin mode
//! register(s). [`MmioPort`] implements it with volatile accesses at a
//! port's base address.

use crate::gpio::GpioFamily;

/// Register-level access to one GPIO port
pub trait GpioRegisters {
    /// Register family of this port
    fn family(&self) -> GpioFamily;

    /// Read the output data register
    fn read_odr(&self) -> u16;

    /// Write the output data register
    fn write_odr(&mut self, value: u16);

    /// Read the input data register
    fn read_idr(&self) -> u16;

    /// Read the pin mode configuration
    ///
    /// On STM32F1 the low word is CRL and the high word CRH. On STM32F4 the
    /// low word is MODER and the high word is always zero.
    fn read_mode(&self) -> u64;

    /// Write the pin mode configuration, same layout as [`read_mode`](Self::read_mode)
    fn write_mode(&mut self, value: u64);
}

/// Register offsets from the port base address
struct Offsets {
    mode_low: usize,
    mode_high: Option<usize>,
    idr: usize,
    odr: usize,
}

const fn offsets(family: GpioFamily) -> Offsets {
    match family {
        GpioFamily::Stm32F1 => Offsets {
            mode_low: 0x00,
            mode_high: Some(0x04),
            idr: 0x08,
            odr: 0x0C,
        },
        GpioFamily::Stm32F4 => Offsets {
            mode_low: 0x00,
            mode_high: None,
            idr: 0x10,
            odr: 0x14,
        },
    }
}

/// Memory-mapped GPIO port
pub struct MmioPort {
    family: GpioFamily,
    base: usize,
}

impl MmioPort {
    /// Create a port at `base`
    ///
    /// # Safety
    ///
    /// `base` must be the base address of a GPIO port of `family` whose
    /// clock is enabled, and nothing else may reconfigure the pins the
    /// panel uses while this port is alive.
    pub const unsafe fn new(family: GpioFamily, base: usize) -> Self {
        Self { family, base }
    }

    fn read(&self, offset: usize) -> u32 {
        // SAFETY: `new` guarantees `base` points at a GPIO register block
        unsafe { core::ptr::read_volatile((self.base + offset) as *const u32) }
    }

    fn write(&mut self, offset: usize, value: u32) {
        // SAFETY: `new` guarantees `base` points at a GPIO register block
        unsafe { core::ptr::write_volatile((self.base + offset) as *mut u32, value) }
    }
}

impl GpioRegisters for MmioPort {
    fn family(&self) -> GpioFamily {
        self.family
    }

    fn read_odr(&self) -> u16 {
        self.read(offsets(self.family).odr) as u16
    }

    fn write_odr(&mut self, value: u16) {
        self.write(offsets(self.family).odr, value as u32);
    }

    fn read_idr(&self) -> u16 {
        self.read(offsets(self.family).idr) as u16
    }

    fn read_mode(&self) -> u64 {
        let offsets = offsets(self.family);
        let low = self.read(offsets.mode_low) as u64;
        let high = match offsets.mode_high {
            Some(offset) => self.read(offset) as u64,
            None => 0,
        };
        low | (high << 32)
    }

    fn write_mode(&mut self, value: u64) {
        let offsets = offsets(self.family);
        self.write(offsets.mode_low, value as u32);
        if let Some(offset) = offsets.mode_high {
            self.write(offset, (value >> 32) as u32);
        }
    }
}

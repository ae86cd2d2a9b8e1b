//! `ParallelBus` implementation over STM32 GPIO registers

use mt12232_hal::{BusDirection, LineMasks, ParallelBus, PinAssignment, PinError};

use crate::gpio::GpioFamily;
use crate::port::GpioRegisters;

/// Precomputed mode-register values for the data pins
#[derive(Debug, Clone, Copy, Default)]
struct DirectionMasks {
    /// Mode bits not owned by the data bus
    unused: u64,
    input: u64,
    output: u64,
}

impl DirectionMasks {
    fn new(family: GpioFamily, masks: &LineMasks) -> Self {
        let field = family.mode_field(masks.data_shift, mt12232_hal::pins::DATA_LINES);
        Self {
            unused: !field,
            input: family.input_pattern() & field,
            output: family.output_pattern() & field,
        }
    }
}

/// Parallel bus on one STM32 GPIO port
///
/// Until [`configure`](ParallelBus::configure) is called the bus owns no
/// pins and every operation leaves the port untouched.
pub struct Stm32Bus<P> {
    port: P,
    masks: LineMasks,
    directions: DirectionMasks,
    /// Desired level of every panel line
    latch: u16,
}

impl<P: GpioRegisters> Stm32Bus<P> {
    /// Create an unconfigured bus on `port`
    pub fn new(port: P) -> Self {
        Self {
            port,
            masks: LineMasks::default(),
            directions: DirectionMasks::default(),
            latch: u16::MAX,
        }
    }

    /// Register family of the underlying port
    pub fn family(&self) -> GpioFamily {
        self.port.family()
    }

    /// Give the port back
    pub fn release(self) -> P {
        self.port
    }

    fn set_mode(&mut self, bits: u64) {
        if self.masks.data == 0 {
            return;
        }
        let unused = self.directions.unused;
        critical_section::with(|_| {
            let mode = self.port.read_mode();
            self.port.write_mode(bits | (mode & unused));
        });
    }
}

impl<P: GpioRegisters> ParallelBus for Stm32Bus<P> {
    fn configure(&mut self, pins: &PinAssignment) -> Result<LineMasks, PinError> {
        let masks = LineMasks::new(pins)?;
        self.masks = masks;
        self.directions = DirectionMasks::new(self.port.family(), &masks);
        self.latch = u16::MAX;
        Ok(masks)
    }

    fn set_output_bits(&mut self, clear: u16, set: u16) {
        self.latch = (self.latch & !clear) | set;

        let owned = self.masks.all();
        let latch = self.latch;
        critical_section::with(|_| {
            let odr = self.port.read_odr();
            self.port.write_odr((latch & owned) | (odr & !owned));
        });
    }

    fn set_bus_direction(&mut self, direction: BusDirection) {
        let bits = match direction {
            BusDirection::Input => self.directions.input,
            BusDirection::Output => self.directions.output,
        };
        self.set_mode(bits);
    }

    fn sample_input(&mut self) -> u8 {
        self.masks.data_byte(self.port.read_idr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory port registers
    struct FakePort {
        family: GpioFamily,
        odr: u16,
        idr: u16,
        mode: u64,
    }

    impl FakePort {
        fn new(family: GpioFamily) -> Self {
            Self {
                family,
                odr: 0,
                idr: 0,
                mode: 0,
            }
        }
    }

    impl GpioRegisters for FakePort {
        fn family(&self) -> GpioFamily {
            self.family
        }

        fn read_odr(&self) -> u16 {
            self.odr
        }

        fn write_odr(&mut self, value: u16) {
            self.odr = value;
        }

        fn read_idr(&self) -> u16 {
            self.idr
        }

        fn read_mode(&self) -> u64 {
            self.mode
        }

        fn write_mode(&mut self, value: u64) {
            self.mode = value;
        }
    }

    #[test]
    fn test_output_keeps_foreign_pins() {
        let mut bus = Stm32Bus::new(FakePort::new(GpioFamily::Stm32F1));
        let masks = bus.configure(&PinAssignment::default()).unwrap();

        // Pins 13-15 belong to someone else
        bus.port.odr = 0xA000;
        bus.set_output_bits(masks.reset, 0);
        assert_eq!(bus.port.odr, 0xA000 | (0x1FFF & !masks.reset));

        bus.set_output_bits(masks.e | masks.data, masks.data_bits(0x3C));
        assert_eq!(bus.port.odr & masks.data, 0x3C);
        assert_eq!(bus.port.odr & masks.e, 0);
        assert_eq!(bus.port.odr & masks.reset, 0);
        assert_eq!(bus.port.odr & 0xE000, 0xA000);
    }

    #[test]
    fn test_latch_starts_high() {
        let mut bus = Stm32Bus::new(FakePort::new(GpioFamily::Stm32F4));
        bus.configure(&PinAssignment::default()).unwrap();

        bus.set_output_bits(0, 0);
        assert_eq!(bus.port.odr, 0x1FFF);
    }

    #[test]
    fn test_f1_direction_touches_only_data_pins() {
        let mut bus = Stm32Bus::new(FakePort::new(GpioFamily::Stm32F1));
        bus.configure(&PinAssignment::default()).unwrap();
        bus.port.mode = 0x1234_5678_0000_0000;

        bus.set_bus_direction(BusDirection::Input);
        assert_eq!(bus.port.mode, 0x1234_5678_8888_8888);

        bus.set_bus_direction(BusDirection::Output);
        assert_eq!(bus.port.mode, 0x1234_5678_3333_3333);
    }

    #[test]
    fn test_f4_direction_with_shifted_bus() {
        let mut bus = Stm32Bus::new(FakePort::new(GpioFamily::Stm32F4));
        let pins = PinAssignment {
            db0: 4,
            reset: 0,
            cs: 1,
            a0: 2,
            rd_wr: 3,
            e: 12,
        };
        bus.configure(&pins).unwrap();
        bus.port.mode = 0xFFFF_FFFF;

        bus.set_bus_direction(BusDirection::Input);
        assert_eq!(bus.port.mode, 0xFF00_00FF);

        bus.set_bus_direction(BusDirection::Output);
        assert_eq!(bus.port.mode, 0xFF55_55FF);
    }

    #[test]
    fn test_sample_input_byte_aligned() {
        let mut bus = Stm32Bus::new(FakePort::new(GpioFamily::Stm32F4));
        let pins = PinAssignment {
            db0: 8,
            reset: 0,
            cs: 1,
            a0: 2,
            rd_wr: 3,
            e: 4,
        };
        bus.configure(&pins).unwrap();
        bus.port.idr = 0x9C17;

        assert_eq!(bus.sample_input(), 0x9C);
    }

    #[test]
    fn test_unconfigured_bus_is_inert() {
        let mut bus = Stm32Bus::new(FakePort::new(GpioFamily::Stm32F1));
        bus.port.odr = 0x5555;
        bus.port.mode = 0x4444_4444_4444_4444;

        bus.set_output_bits(0xFFFF, 0);
        bus.set_bus_direction(BusDirection::Output);

        assert_eq!(bus.port.odr, 0x5555);
        assert_eq!(bus.port.mode, 0x4444_4444_4444_4444);
    }

    #[test]
    fn test_invalid_assignment_rejected() {
        let mut bus = Stm32Bus::new(FakePort::new(GpioFamily::Stm32F1));
        let pins = PinAssignment {
            e: 0,
            ..PinAssignment::default()
        };
        assert_eq!(bus.configure(&pins), Err(PinError::Conflict(0)));
    }
}

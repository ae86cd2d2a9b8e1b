//! GPIO register families for STM32
//!
//! The two supported families encode pin modes differently. Everything the
//! bus needs from a family is captured here as plain data, so the bus
//! itself stays family-agnostic.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use mt12232_hal::{LineMasks, PinAssignment, PinError};

use crate::port::MmioPort;

/// GPIO register family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GpioFamily {
    /// STM32F1: CRL/CRH, 4 configuration bits per pin
    Stm32F1,
    /// STM32F4: MODER, 2 mode bits per pin
    Stm32F4,
}

impl GpioFamily {
    /// Width of one pin's field in the mode register(s)
    pub const fn bits_per_pin(self) -> u32 {
        match self {
            Self::Stm32F1 => 4,
            Self::Stm32F4 => 2,
        }
    }

    /// Mode pattern for an input pin, repeated for every pin
    pub const fn input_pattern(self) -> u64 {
        match self {
            // CNF = 10 (input with pull-up / pull-down), MODE = 00
            Self::Stm32F1 => 0x8888_8888_8888_8888,
            // MODER = 00
            Self::Stm32F4 => 0x0000_0000_0000_0000,
        }
    }

    /// Mode pattern for a push-pull output pin, repeated for every pin
    pub const fn output_pattern(self) -> u64 {
        match self {
            // CNF = 00 (push-pull), MODE = 11 (50 MHz)
            Self::Stm32F1 => 0x3333_3333_3333_3333,
            // MODER = 01
            Self::Stm32F4 => 0x5555_5555_5555_5555,
        }
    }

    /// Mode register field covering `count` pins starting at `first`
    pub const fn mode_field(self, first: u8, count: u8) -> u64 {
        let bits = self.bits_per_pin() * count as u32;
        let field = if bits >= 64 { u64::MAX } else { (1u64 << bits) - 1 };
        field << (first as u32 * self.bits_per_pin())
    }

    /// Base address of GPIO port `port` ('A', 'B', ...)
    const fn port_base(self, port: char) -> Option<usize> {
        let (base, last) = match self {
            Self::Stm32F1 => (0x4001_0800, 'G'),
            Self::Stm32F4 => (0x4002_0000, 'K'),
        };
        if port < 'A' || port > last {
            return None;
        }
        Some(base + (port as usize - 'A' as usize) * 0x400)
    }
}

/// Base address of a GPIO port for the given family
pub const fn port_base(family: GpioFamily, port: char) -> Option<usize> {
    family.port_base(port)
}

/// Split a pin name such as `PB0` into port letter, pin number and the
/// leading `!` inversion marker
///
/// Surrounding whitespace is ignored; pin numbers above 15 are rejected.
pub fn parse_pin_string(s: &str) -> Option<(char, u8, bool)> {
    let s = s.trim();

    let (s, inverted) = match s.strip_prefix('!') {
        Some(rest) => (rest, true),
        None => (s, false),
    };

    let rest = s.strip_prefix('P')?;
    let mut chars = rest.chars();
    let port = chars.next()?;
    if !port.is_ascii_uppercase() {
        return None;
    }

    let pin: u8 = chars.as_str().parse().ok()?;
    if pin > 15 {
        return None;
    }

    Some((port, pin, inverted))
}

/// Panel lines named by board pin, e.g. `db0 = "PB0"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinNames<'a> {
    pub db0: &'a str,
    pub reset: &'a str,
    pub cs: &'a str,
    pub a0: &'a str,
    pub rd_wr: &'a str,
    pub e: &'a str,
}

/// Which line a [`PinNameError`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    Db0,
    Reset,
    Cs,
    A0,
    RdWr,
    E,
}

/// Errors resolving [`PinNames`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinNameError {
    /// Not of the form `P<port><pin>`
    Malformed(Line),
    /// `!` prefix; the panel lines have fixed polarity
    Inverted(Line),
    /// Line is on a different port than DB0
    PortMismatch(Line),
    /// Port letter does not exist on this family
    UnknownPort(char),
    /// Pin numbers parse but do not form a valid assignment
    Pins(PinError),
}

impl From<PinError> for PinNameError {
    fn from(error: PinError) -> Self {
        Self::Pins(error)
    }
}

/// A validated pin assignment on one GPIO port
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ResolvedPins {
    pub family: GpioFamily,
    pub port: char,
    /// Register block base address of `port`
    pub base: usize,
    pub pins: PinAssignment,
}

impl ResolvedPins {
    /// Register access for the resolved port
    ///
    /// # Safety
    ///
    /// Same contract as [`MmioPort::new`]: the port clock is enabled and
    /// nothing else reconfigures the panel pins while the port is alive.
    pub unsafe fn mmio_port(&self) -> MmioPort {
        MmioPort::new(self.family, self.base)
    }
}

/// Resolve named pins to port pin numbers and the port's base address
///
/// All six lines must sit on the same port and none may be inverted.
pub fn resolve_pins(family: GpioFamily, names: &PinNames<'_>) -> Result<ResolvedPins, PinNameError> {
    let lines = [
        (Line::Db0, names.db0),
        (Line::Reset, names.reset),
        (Line::Cs, names.cs),
        (Line::A0, names.a0),
        (Line::RdWr, names.rd_wr),
        (Line::E, names.e),
    ];

    let mut port = None;
    let mut numbers = [0u8; 6];
    for (slot, (line, name)) in numbers.iter_mut().zip(lines) {
        let (line_port, pin, inverted) =
            parse_pin_string(name).ok_or(PinNameError::Malformed(line))?;
        if inverted {
            return Err(PinNameError::Inverted(line));
        }
        match port {
            None => port = Some(line_port),
            Some(first) if first != line_port => return Err(PinNameError::PortMismatch(line)),
            Some(_) => {}
        }
        *slot = pin;
    }

    let [db0, reset, cs, a0, rd_wr, e] = numbers;
    let pins = PinAssignment {
        db0,
        reset,
        cs,
        a0,
        rd_wr,
        e,
    };
    LineMasks::new(&pins)?;

    let port = port.unwrap_or('A');
    let base = port_base(family, port).ok_or(PinNameError::UnknownPort(port))?;

    Ok(ResolvedPins {
        family,
        port,
        base,
        pins,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pin_string() {
        assert_eq!(parse_pin_string("PB0"), Some(('B', 0, false)));
        assert_eq!(parse_pin_string(" PA12 "), Some(('A', 12, false)));
        assert_eq!(parse_pin_string("!PB8"), Some(('B', 8, true)));
        assert_eq!(parse_pin_string("PB16"), None);
        assert_eq!(parse_pin_string("B3"), None);
        assert_eq!(parse_pin_string("P"), None);
        assert_eq!(parse_pin_string("Pb3"), None);
        assert_eq!(parse_pin_string("PB"), None);
    }

    const REFERENCE: PinNames<'static> = PinNames {
        db0: "PB0",
        reset: "PB8",
        cs: "PB9",
        a0: "PB10",
        rd_wr: "PB11",
        e: "PB12",
    };

    #[test]
    fn test_resolve_reference_wiring() {
        let resolved = resolve_pins(GpioFamily::Stm32F1, &REFERENCE).unwrap();
        assert_eq!(resolved.port, 'B');
        assert_eq!(resolved.base, 0x4001_0C00);
        assert_eq!(resolved.pins, PinAssignment::default());

        let resolved = resolve_pins(GpioFamily::Stm32F4, &REFERENCE).unwrap();
        assert_eq!(resolved.base, 0x4002_0400);
    }

    #[test]
    fn test_resolve_data_bus_on_high_half() {
        let names = PinNames {
            db0: "PC8",
            reset: "PC0",
            cs: "PC1",
            a0: "PC2",
            rd_wr: "PC3",
            e: "PC4",
        };
        let resolved = resolve_pins(GpioFamily::Stm32F4, &names).unwrap();
        assert_eq!(resolved.port, 'C');
        assert_eq!(resolved.pins.db0, 8);
        assert_eq!(resolved.pins.e, 4);
    }

    #[test]
    fn test_resolve_rejects_bad_names() {
        let family = GpioFamily::Stm32F1;

        let names = PinNames { e: "!PB12", ..REFERENCE };
        assert_eq!(resolve_pins(family, &names), Err(PinNameError::Inverted(Line::E)));

        let names = PinNames { cs: "PA9", ..REFERENCE };
        assert_eq!(resolve_pins(family, &names), Err(PinNameError::PortMismatch(Line::Cs)));

        let names = PinNames { a0: "B10", ..REFERENCE };
        assert_eq!(resolve_pins(family, &names), Err(PinNameError::Malformed(Line::A0)));

        let names = PinNames { reset: "PB3", ..REFERENCE };
        assert_eq!(
            resolve_pins(family, &names),
            Err(PinNameError::Pins(PinError::Conflict(3)))
        );

        let names = PinNames { db0: "PB9", ..REFERENCE };
        assert_eq!(
            resolve_pins(family, &names),
            Err(PinNameError::Pins(PinError::DataBusOutOfRange(9)))
        );
    }

    #[test]
    fn test_resolve_unknown_port() {
        let names = PinNames {
            db0: "PH0",
            reset: "PH8",
            cs: "PH9",
            a0: "PH10",
            rd_wr: "PH11",
            e: "PH12",
        };
        assert_eq!(
            resolve_pins(GpioFamily::Stm32F1, &names),
            Err(PinNameError::UnknownPort('H'))
        );
        assert!(resolve_pins(GpioFamily::Stm32F4, &names).is_ok());
    }

    #[test]
    fn test_port_base() {
        assert_eq!(port_base(GpioFamily::Stm32F1, 'B'), Some(0x4001_0C00));
        assert_eq!(port_base(GpioFamily::Stm32F4, 'B'), Some(0x4002_0400));
        assert_eq!(port_base(GpioFamily::Stm32F4, 'K'), Some(0x4002_2800));
        assert_eq!(port_base(GpioFamily::Stm32F1, 'H'), None);
        assert_eq!(port_base(GpioFamily::Stm32F1, '0'), None);
    }

    #[test]
    fn test_mode_fields() {
        // Eight data pins at pin 0
        assert_eq!(GpioFamily::Stm32F1.mode_field(0, 8), 0x0000_0000_FFFF_FFFF);
        assert_eq!(GpioFamily::Stm32F4.mode_field(0, 8), 0x0000_FFFF);
        // Eight data pins at pin 8
        assert_eq!(GpioFamily::Stm32F1.mode_field(8, 8), 0xFFFF_FFFF_0000_0000);
        assert_eq!(GpioFamily::Stm32F4.mode_field(8, 8), 0xFFFF_0000);
        // Whole port on F1
        assert_eq!(GpioFamily::Stm32F1.mode_field(0, 16), u64::MAX);
    }
}

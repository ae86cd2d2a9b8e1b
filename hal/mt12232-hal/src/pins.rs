//! Pin assignment and port masks
//!
//! A [`PinAssignment`] names the port pin of every panel line. It is turned
//! into [`LineMasks`] once at configuration time so the protocol engine
//! only ever combines precomputed masks.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of pins on one GPIO port
pub const PORT_WIDTH: u8 = 16;

/// Number of data lines (DB0..DB7)
pub const DATA_LINES: u8 = 8;

/// Errors in a pin assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinError {
    /// Pin number outside the port (0-15 valid)
    InvalidPin(u8),
    /// DB0 is placed so high that DB7 falls off the port
    DataBusOutOfRange(u8),
    /// Two lines share the same pin
    Conflict(u8),
}

/// Port pin numbers of the panel lines
///
/// Data lines occupy `db0..db0 + 8`. The control lines are single pins
/// anywhere else on the same port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinAssignment {
    /// Pin of DB0, the lowest data line
    pub db0: u8,
    /// Reset line (active low)
    pub reset: u8,
    /// Controller select (high = bank 0, low = bank 1)
    pub cs: u8,
    /// Command (low) / data (high) select
    pub a0: u8,
    /// Write (low) / read (high)
    pub rd_wr: u8,
    /// Strobe
    pub e: u8,
}

impl Default for PinAssignment {
    /// Reference wiring: DB0..DB7 on pins 0-7, control lines on 8-12
    fn default() -> Self {
        Self {
            db0: 0,
            reset: 8,
            cs: 9,
            a0: 10,
            rd_wr: 11,
            e: 12,
        }
    }
}

/// Port bit masks derived from a [`PinAssignment`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineMasks {
    /// Shift that moves a byte onto the data lines
    pub data_shift: u8,
    /// All eight data lines
    pub data: u16,
    pub reset: u16,
    pub cs: u16,
    pub a0: u16,
    pub rd_wr: u16,
    pub e: u16,
}

impl LineMasks {
    /// Validate a pin assignment and compute its masks
    pub fn new(pins: &PinAssignment) -> Result<Self, PinError> {
        if pins.db0 > PORT_WIDTH - DATA_LINES {
            return Err(PinError::DataBusOutOfRange(pins.db0));
        }

        let data = 0x00FFu16 << pins.db0;
        let mut allocated = data;
        let mut take = |pin: u8| -> Result<u16, PinError> {
            if pin >= PORT_WIDTH {
                return Err(PinError::InvalidPin(pin));
            }
            let mask = 1u16 << pin;
            if allocated & mask != 0 {
                return Err(PinError::Conflict(pin));
            }
            allocated |= mask;
            Ok(mask)
        };

        Ok(Self {
            data_shift: pins.db0,
            data,
            reset: take(pins.reset)?,
            cs: take(pins.cs)?,
            a0: take(pins.a0)?,
            rd_wr: take(pins.rd_wr)?,
            e: take(pins.e)?,
        })
    }

    /// Every pin owned by the panel
    pub const fn all(&self) -> u16 {
        self.data | self.reset | self.cs | self.a0 | self.rd_wr | self.e
    }

    /// Port bits that put `byte` on the data lines
    pub const fn data_bits(&self, byte: u8) -> u16 {
        (byte as u16) << self.data_shift
    }

    /// Extract the data byte from a port input value
    pub const fn data_byte(&self, port: u16) -> u8 {
        (port >> self.data_shift) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_wiring_masks() {
        let masks = LineMasks::new(&PinAssignment::default()).unwrap();

        assert_eq!(masks.data, 0x00FF);
        assert_eq!(masks.reset, 1 << 8);
        assert_eq!(masks.cs, 1 << 9);
        assert_eq!(masks.a0, 1 << 10);
        assert_eq!(masks.rd_wr, 1 << 11);
        assert_eq!(masks.e, 1 << 12);
        assert_eq!(masks.all(), 0x1FFF);
    }

    #[test]
    fn test_shifted_data_bus() {
        let pins = PinAssignment {
            db0: 8,
            reset: 0,
            cs: 1,
            a0: 2,
            rd_wr: 3,
            e: 4,
        };
        let masks = LineMasks::new(&pins).unwrap();

        assert_eq!(masks.data, 0xFF00);
        assert_eq!(masks.data_bits(0xA5), 0xA500);
        assert_eq!(masks.data_byte(0x5A13), 0x5A);
    }

    #[test]
    fn test_data_bus_off_port() {
        let pins = PinAssignment {
            db0: 9,
            ..PinAssignment::default()
        };
        assert_eq!(LineMasks::new(&pins), Err(PinError::DataBusOutOfRange(9)));
    }

    #[test]
    fn test_control_pin_out_of_range() {
        let pins = PinAssignment {
            e: 16,
            ..PinAssignment::default()
        };
        assert_eq!(LineMasks::new(&pins), Err(PinError::InvalidPin(16)));
    }

    #[test]
    fn test_conflicting_pins() {
        // Control line on a data pin
        let pins = PinAssignment {
            cs: 3,
            ..PinAssignment::default()
        };
        assert_eq!(LineMasks::new(&pins), Err(PinError::Conflict(3)));

        // Two control lines on one pin
        let pins = PinAssignment {
            a0: 11,
            ..PinAssignment::default()
        };
        assert_eq!(LineMasks::new(&pins), Err(PinError::Conflict(11)));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_pins_from_toml() {
        let pins: PinAssignment = toml::from_str(
            r#"
            db0 = 0
            reset = 8
            cs = 9
            a0 = 10
            rd_wr = 11
            e = 12
            "#,
        )
        .unwrap();
        assert_eq!(pins, PinAssignment::default());
    }
}

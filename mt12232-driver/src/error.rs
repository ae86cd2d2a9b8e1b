//! Driver errors

use mt12232_hal::PinError;

/// Errors from the panel protocol engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// A controller stayed busy or in reset for the whole polling window
    ReadyTimeout,
    /// `init` has not completed, or a previous operation failed
    NotInitialized,
    /// The pin assignment was rejected by the bus
    Pins(PinError),
}

impl From<PinError> for DisplayError {
    fn from(error: PinError) -> Self {
        Self::Pins(error)
    }
}

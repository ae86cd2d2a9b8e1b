//! Controller command set and status bits

/// Controller commands
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    /// Start line, OR with line 0-31
    pub const SET_START_LINE: u8 = 0xC0;
    /// Page select, OR with page 0-3
    pub const SET_PAGE: u8 = 0xB8;
    /// Column address, OR with column 0-79
    pub const SET_ADDRESS: u8 = 0x00;
    pub const ADC_FORWARD: u8 = 0xA0;
    pub const ADC_BACKWARD: u8 = 0xA1;
    pub const STATIC_DRIVE_OFF: u8 = 0xA4;
    pub const STATIC_DRIVE_ON: u8 = 0xA5;
    pub const DUTY_SELECT_OFF: u8 = 0xA8;
    pub const DUTY_SELECT_ON: u8 = 0xA9;
    pub const READ_MODIFY_WRITE_ON: u8 = 0xE0;
    pub const READ_MODIFY_WRITE_OFF: u8 = 0xEE;
    pub const RESET: u8 = 0xE2;
}

/// Status register bits
pub mod status {
    /// Controller is processing the previous instruction
    pub const BUSY: u8 = 0x80;
    /// Set when the scan direction is forward
    pub const ADC: u8 = 0x40;
    /// Set while the display is off
    pub const DISPLAY_OFF: u8 = 0x20;
    /// Controller is still in its reset sequence
    pub const RESET: u8 = 0x10;

    /// Busy and reset both clear: the controller accepts a write
    pub const fn is_ready(status: u8) -> bool {
        status & (BUSY | RESET) == 0
    }
}

/// Display start line command
pub const fn start_line(line: u8) -> u8 {
    cmd::SET_START_LINE | (line & 0x1F)
}

/// Page select command
pub const fn page(page: u8) -> u8 {
    cmd::SET_PAGE | (page & 0x03)
}

/// Column address command
pub const fn address(column: u8) -> u8 {
    cmd::SET_ADDRESS | (column & 0x7F)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterised_commands() {
        assert_eq!(start_line(0), 0xC0);
        assert_eq!(start_line(33), 0xC1);
        assert_eq!(page(3), 0xBB);
        assert_eq!(page(4), 0xB8);
        assert_eq!(address(79), 0x4F);
        assert_eq!(address(0x80), 0x00);
    }

    #[test]
    fn test_ready_requires_busy_and_reset_clear() {
        assert!(status::is_ready(0x00));
        assert!(status::is_ready(status::ADC | status::DISPLAY_OFF));
        assert!(!status::is_ready(status::BUSY));
        assert!(!status::is_ready(status::RESET));
    }
}

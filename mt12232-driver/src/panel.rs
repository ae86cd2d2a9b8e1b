//! Dual-controller protocol engine
//!
//! The 122x32 panel is two 61-column controllers sharing one bus, chosen by
//! the CS line. The engine keeps a framebuffer for the caller to draw into
//! and a shadow copy of what the controllers hold; [`Mt12232::update`] sends
//! only the bytes that differ.
//!
//! # Bank layout
//!
//! ```text
//!  framebuffer column   0 ........... 60 | 61 .......... 121
//!  bank                 Left (CS high)   | Right (CS low)
//!  controller column    19 ........... 79 | 0 ............ 60
//!  scan direction       backward (0xA1)  | forward (0xA0)
//! ```
//!
//! Every write first polls the controller status until it is neither busy
//! nor resetting, so a dead or disconnected panel shows up as
//! [`DisplayError::ReadyTimeout`] instead of a hang.

use mt12232_graphics::Framebuffer;
use mt12232_hal::{busy_wait, BusDirection, LineMasks, ParallelBus, TickClock};

use crate::command::{self, cmd, status};
use crate::config::{PanelConfig, TickTiming};
use crate::error::DisplayError;

/// Panel width in pixels
pub const WIDTH: usize = 122;
/// Panel height in pixels
pub const HEIGHT: usize = 32;
/// 8-row pages per controller
pub const PAGES: usize = HEIGHT / 8;
/// Columns driven by each controller
pub const BANK_WIDTH: usize = WIDTH / 2;
/// Framebuffer size in bytes
pub const BUFFER_SIZE: usize = WIDTH * PAGES;

/// Value the shadow is filled with so the first update sends everything
const SHADOW_SENTINEL: u8 = 0xFF;

const BLANK: Framebuffer<[u8; BUFFER_SIZE]> =
    match Framebuffer::from_array([0; BUFFER_SIZE], WIDTH, WIDTH, HEIGHT) {
        Ok(framebuffer) => framebuffer,
        Err(_) => panic!("panel geometry does not fit its buffer"),
    };

/// One of the two controllers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Bank {
    /// Framebuffer columns 0-60, selected with CS high
    Left,
    /// Framebuffer columns 61-121, selected with CS low
    Right,
}

impl Bank {
    pub const ALL: [Bank; 2] = [Bank::Left, Bank::Right];

    pub const fn index(self) -> usize {
        match self {
            Bank::Left => 0,
            Bank::Right => 1,
        }
    }

    /// First framebuffer column driven by this bank
    pub const fn first_column(self) -> usize {
        self.index() * BANK_WIDTH
    }

    /// Controller column address of the bank's first framebuffer column
    pub const fn column_offset(self) -> u8 {
        match self {
            Bank::Left => 19,
            Bank::Right => 0,
        }
    }

    /// Scan direction command
    pub const fn adc(self) -> u8 {
        match self {
            Bank::Left => cmd::ADC_BACKWARD,
            Bank::Right => cmd::ADC_FORWARD,
        }
    }

    /// Commands sent to the bank after reset
    pub const fn configuration(self) -> [u8; 7] {
        [
            cmd::READ_MODIFY_WRITE_OFF,
            cmd::STATIC_DRIVE_OFF,
            cmd::DUTY_SELECT_ON,
            cmd::DISPLAY_ON,
            self.adc(),
            cmd::RESET,
            command::start_line(0),
        ]
    }
}

/// What a write puts on the bus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Select {
    /// A0 low
    Command,
    /// A0 high, display RAM
    Data,
}

/// Engine lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelState {
    Uninitialized,
    Resetting,
    Configuring(Bank),
    Ready,
    /// A write failed; `init` must run again
    Faulted,
}

/// MT-12232A panel on a parallel bus
pub struct Mt12232<B, C> {
    bus: B,
    clock: C,
    framebuffer: Framebuffer<[u8; BUFFER_SIZE]>,
    shadow: [u8; BUFFER_SIZE],
    masks: LineMasks,
    timing: TickTiming,
    state: PanelState,
}

impl<B: ParallelBus, C: TickClock> Mt12232<B, C> {
    /// Take ownership of the bus and clock; nothing is sent until `init`
    pub fn new(bus: B, clock: C) -> Self {
        Self {
            bus,
            clock,
            framebuffer: BLANK,
            shadow: [SHADOW_SENTINEL; BUFFER_SIZE],
            masks: LineMasks::default(),
            timing: TickTiming::default(),
            state: PanelState::Uninitialized,
        }
    }

    /// Reset and configure both controllers, then flush a blank image
    ///
    /// The framebuffer is cleared. Any failure leaves the engine
    /// [`PanelState::Faulted`].
    pub fn init(&mut self, config: &PanelConfig) -> Result<(), DisplayError> {
        self.state = PanelState::Uninitialized;
        let result = self.bring_up(config);
        if let Err(_error) = result {
            #[cfg(feature = "defmt")]
            defmt::warn!("MT-12232 init failed in {}: {}", self.state, _error);
            self.state = PanelState::Faulted;
        }
        result
    }

    fn bring_up(&mut self, config: &PanelConfig) -> Result<(), DisplayError> {
        self.masks = self.bus.configure(&config.pins)?;
        self.timing = TickTiming::new(&config.timing, self.clock.frequency_hz());

        #[cfg(feature = "defmt")]
        defmt::debug!("MT-12232 timing: {}", self.timing);

        self.shadow.fill(SHADOW_SENTINEL);
        self.framebuffer.fill(0);

        self.state = PanelState::Resetting;
        self.drive(self.masks.reset, self.masks.e, self.timing.reset_pulse);
        self.drive(0, self.masks.reset, self.timing.reset_pulse);

        for bank in Bank::ALL {
            self.state = PanelState::Configuring(bank);
            self.select_bank(bank);
            for command in bank.configuration() {
                self.write(Select::Command, command)?;
            }
        }

        self.state = PanelState::Ready;
        let sent = self.update()?;

        #[cfg(feature = "defmt")]
        defmt::debug!("MT-12232 ready, {} bytes flushed", sent);
        #[cfg(not(feature = "defmt"))]
        let _ = sent;

        Ok(())
    }

    /// Send every framebuffer byte that differs from the shadow
    ///
    /// Returns the number of data bytes written. The first failed write
    /// aborts the update and faults the engine; bytes already sent stay
    /// recorded in the shadow.
    pub fn update(&mut self) -> Result<usize, DisplayError> {
        if self.state != PanelState::Ready {
            return Err(DisplayError::NotInitialized);
        }

        match self.transmit() {
            Ok(sent) => {
                #[cfg(feature = "defmt")]
                defmt::trace!("MT-12232 update: {} bytes", sent);
                Ok(sent)
            }
            Err(error) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("MT-12232 update aborted: {}", error);
                self.state = PanelState::Faulted;
                Err(error)
            }
        }
    }

    fn transmit(&mut self) -> Result<usize, DisplayError> {
        let mut sent = 0;
        for bank in Bank::ALL {
            self.select_bank(bank);
            for page in 0..PAGES {
                self.write(Select::Command, command::page(page as u8))?;

                let row = page * WIDTH + bank.first_column();
                for x in 0..BANK_WIDTH {
                    let offset = row + x;
                    let byte = self.framebuffer.as_bytes()[offset];
                    if self.shadow[offset] == byte {
                        continue;
                    }

                    let column = bank.column_offset() + x as u8;
                    self.write(Select::Command, command::address(column))?;
                    self.write(Select::Data, byte)?;
                    self.shadow[offset] = byte;
                    sent += 1;
                }
            }
        }
        Ok(sent)
    }

    /// Read the status register of the selected bank
    pub fn status(&mut self) -> u8 {
        let masks = self.masks;
        let timing = self.timing;

        self.bus.set_bus_direction(BusDirection::Input);
        self.drive(masks.a0, masks.rd_wr, timing.address_setup);
        self.drive(masks.e, 0, timing.enable_pulse);
        let status = self.bus.sample_input();
        self.drive(0, masks.e, timing.cycle_end);
        status
    }

    /// Poll status until the selected bank is neither busy nor resetting
    pub fn wait_ready(&mut self) -> Result<(), DisplayError> {
        let mut last = 0;
        for _ in 0..self.timing.poll_attempts.max(1) {
            last = self.status();
            if status::is_ready(last) {
                return Ok(());
            }
        }

        #[cfg(feature = "defmt")]
        defmt::warn!("MT-12232 not ready, status {=u8:#04x}", last);
        #[cfg(not(feature = "defmt"))]
        let _ = last;

        Err(DisplayError::ReadyTimeout)
    }

    /// Write one command or data byte to the selected bank
    ///
    /// The byte is not retried if the bank never becomes ready.
    pub fn write(&mut self, select: Select, byte: u8) -> Result<(), DisplayError> {
        self.wait_ready()?;

        let masks = self.masks;
        let timing = self.timing;

        self.bus.set_bus_direction(BusDirection::Output);
        match select {
            Select::Command => self.drive(masks.a0 | masks.rd_wr, 0, timing.address_setup),
            Select::Data => self.drive(masks.rd_wr, masks.a0, timing.address_setup),
        }
        self.drive(
            masks.e | masks.data,
            masks.data_bits(byte),
            timing.enable_pulse,
        );
        self.drive(0, masks.e, timing.cycle_end);
        Ok(())
    }

    /// Route the bus to one controller
    pub fn select_bank(&mut self, bank: Bank) {
        match bank {
            Bank::Left => self.bus.set_output_bits(0, self.masks.cs),
            Bank::Right => self.bus.set_output_bits(self.masks.cs, 0),
        }
    }

    fn drive(&mut self, clear: u16, set: u16, ticks: u32) {
        self.bus.set_output_bits(clear, set);
        busy_wait(&self.clock, ticks);
    }

    /// Drawing surface; call [`update`](Self::update) to show changes
    pub fn framebuffer(&self) -> &Framebuffer<[u8; BUFFER_SIZE]> {
        &self.framebuffer
    }

    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<[u8; BUFFER_SIZE]> {
        &mut self.framebuffer
    }

    /// Last image sent to the controllers
    pub fn shadow(&self) -> &[u8; BUFFER_SIZE] {
        &self.shadow
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Give back the bus and clock
    pub fn release(self) -> (B, C) {
        (self.bus, self.clock)
    }
}

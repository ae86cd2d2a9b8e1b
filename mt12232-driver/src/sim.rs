//! Simulated MT-12232A for host tests
//!
//! Decodes the pin-level protocol from port writes: an access happens on
//! the falling edge of E, with CS, A0 and RD/WR read from the latch at that
//! moment. Both controllers keep their own page, column and 80x4 RAM.

use core::cell::Cell;

use heapless::Vec;
use mt12232_hal::{BusDirection, LineMasks, ParallelBus, PinAssignment, PinError, TickClock};

use crate::command::{cmd, status};
use crate::panel::{Bank, Select, BANK_WIDTH, BUFFER_SIZE, PAGES, WIDTH};

pub const LOG_CAPACITY: usize = 2048;

/// Controller RAM content after reset; display RAM is not cleared by reset
pub const POWER_ON_PATTERN: u8 = 0x5A;

/// Columns of controller RAM
pub const RAM_COLUMNS: usize = 80;

/// Counter that advances one tick per read
pub struct StepClock {
    ticks: Cell<u32>,
    frequency_hz: u32,
}

impl StepClock {
    pub fn new(frequency_hz: u32) -> Self {
        Self::starting_at(0, frequency_hz)
    }

    pub fn starting_at(ticks: u32, frequency_hz: u32) -> Self {
        Self {
            ticks: Cell::new(ticks),
            frequency_hz,
        }
    }
}

impl TickClock for StepClock {
    fn now(&self) -> u32 {
        let now = self.ticks.get().wrapping_add(1);
        self.ticks.set(now);
        now
    }

    fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }
}

/// One decoded write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Access {
    pub bank: Bank,
    pub select: Select,
    pub byte: u8,
}

#[derive(Clone, Copy)]
struct Controller {
    page: usize,
    column: usize,
    display_on: bool,
    ram: [[u8; RAM_COLUMNS]; PAGES],
    /// Data writes per RAM cell since reset
    writes: [[u8; RAM_COLUMNS]; PAGES],
}

impl Controller {
    const fn new() -> Self {
        Self {
            page: 0,
            column: 0,
            display_on: false,
            ram: [[POWER_ON_PATTERN; RAM_COLUMNS]; PAGES],
            writes: [[0; RAM_COLUMNS]; PAGES],
        }
    }

    fn command(&mut self, byte: u8) {
        match byte {
            cmd::DISPLAY_ON => self.display_on = true,
            cmd::DISPLAY_OFF => self.display_on = false,
            b if b & 0xFC == cmd::SET_PAGE => self.page = (b & 0x03) as usize,
            b if b & 0x80 == 0 => self.column = b as usize,
            _ => {}
        }
    }

    fn data(&mut self, byte: u8) {
        if let Some(cell) = self.ram[self.page].get_mut(self.column) {
            *cell = byte;
            self.writes[self.page][self.column] += 1;
        }
        self.column += 1;
    }
}

/// Two-controller panel behind a [`ParallelBus`]
pub struct SimPanel<'a> {
    clock: &'a StepClock,
    masks: LineMasks,
    latch: u16,
    direction: BusDirection,
    controllers: [Controller; 2],
    /// Writes in the order the panel saw them
    pub log: Vec<Access, LOG_CAPACITY>,
    /// Status reads that still report busy
    pub busy_polls: u32,
    /// Report busy forever
    pub never_ready: bool,
    /// Go permanently busy after this many more writes
    pub writes_until_failure: Option<usize>,
    pub status_reads: u32,
    pub reset_pulses: u32,
    /// Strobes with the data lines in the wrong direction
    pub violations: u32,
    pub min_setup: u32,
    pub min_pulse: u32,
    pub min_cycle: u32,
    control_changed_at: u32,
    e_fell_at: Option<u32>,
    reset_low: bool,
}

impl<'a> SimPanel<'a> {
    pub fn new(clock: &'a StepClock) -> Self {
        Self {
            clock,
            masks: LineMasks::default(),
            latch: u16::MAX,
            direction: BusDirection::Input,
            controllers: [Controller::new(); 2],
            log: Vec::new(),
            busy_polls: 0,
            never_ready: false,
            writes_until_failure: None,
            status_reads: 0,
            reset_pulses: 0,
            violations: 0,
            min_setup: u32::MAX,
            min_pulse: u32::MAX,
            min_cycle: u32::MAX,
            control_changed_at: 0,
            e_fell_at: None,
            reset_low: false,
        }
    }

    fn selected(&self) -> usize {
        if self.latch & self.masks.cs != 0 {
            0
        } else {
            1
        }
    }

    /// Framebuffer-shaped copy of both controllers' RAM
    pub fn image(&self) -> [u8; BUFFER_SIZE] {
        let mut image = [0u8; BUFFER_SIZE];
        for bank in Bank::ALL {
            let controller = &self.controllers[bank.index()];
            let offset = bank.column_offset() as usize;
            for page in 0..PAGES {
                for x in 0..BANK_WIDTH {
                    image[page * WIDTH + bank.first_column() + x] =
                        controller.ram[page][offset + x];
                }
            }
        }
        image
    }

    /// Data writes that landed on one RAM cell since the last reset
    pub fn writes_at(&self, bank: Bank, page: usize, column: usize) -> u8 {
        self.controllers[bank.index()].writes[page][column]
    }

    pub fn display_on(&self, bank: Bank) -> bool {
        self.controllers[bank.index()].display_on
    }

    pub fn data_writes(&self) -> usize {
        self.log.iter().filter(|a| a.select == Select::Data).count()
    }

    pub fn clear_log(&mut self) {
        self.log.clear();
    }

    fn strobe(&mut self, now: u32) {
        self.min_setup = self.min_setup.min(now.wrapping_sub(self.control_changed_at));
        if let Some(previous) = self.e_fell_at {
            self.min_cycle = self.min_cycle.min(now.wrapping_sub(previous));
        }
        self.e_fell_at = Some(now);

        let reading = self.latch & self.masks.rd_wr != 0;
        if reading {
            if self.direction != BusDirection::Input {
                self.violations += 1;
            }
            return;
        }
        if self.direction != BusDirection::Output {
            self.violations += 1;
        }

        let bank = if self.selected() == 0 {
            Bank::Left
        } else {
            Bank::Right
        };
        let select = if self.latch & self.masks.a0 != 0 {
            Select::Data
        } else {
            Select::Command
        };
        let byte = self.masks.data_byte(self.latch);

        let controller = &mut self.controllers[bank.index()];
        match select {
            Select::Command => controller.command(byte),
            Select::Data => controller.data(byte),
        }
        self.log
            .push(Access {
                bank,
                select,
                byte,
            })
            .expect("simulated panel log full");

        if let Some(remaining) = self.writes_until_failure.as_mut() {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.never_ready = true;
            }
        }
    }
}

impl ParallelBus for SimPanel<'_> {
    fn configure(&mut self, pins: &PinAssignment) -> Result<LineMasks, PinError> {
        self.masks = LineMasks::new(pins)?;
        self.latch = u16::MAX;
        Ok(self.masks)
    }

    fn set_output_bits(&mut self, clear: u16, set: u16) {
        let now = self.clock.now();
        let previous = self.latch;
        self.latch = (previous & !clear) | set;
        let changed = previous ^ self.latch;

        if changed & (self.masks.a0 | self.masks.rd_wr | self.masks.cs) != 0 {
            self.control_changed_at = now;
        }

        let e_was_high = previous & self.masks.e != 0;
        let e_is_high = self.latch & self.masks.e != 0;
        if e_was_high && !e_is_high {
            self.strobe(now);
        } else if !e_was_high && e_is_high {
            if let Some(fell) = self.e_fell_at {
                self.min_pulse = self.min_pulse.min(now.wrapping_sub(fell));
            }
        }

        if changed & self.masks.reset != 0 {
            let low = self.latch & self.masks.reset == 0;
            if !low && self.reset_low && e_is_high {
                self.reset_pulses += 1;
                self.controllers = [Controller::new(); 2];
            }
            self.reset_low = low;
        }
    }

    fn set_bus_direction(&mut self, direction: BusDirection) {
        self.direction = direction;
    }

    fn sample_input(&mut self) -> u8 {
        self.status_reads += 1;
        let mut value = 0;
        if !self.controllers[self.selected()].display_on {
            value |= status::DISPLAY_OFF;
        }
        if self.never_ready {
            value |= status::BUSY;
        } else if self.busy_polls > 0 {
            self.busy_polls -= 1;
            value |= status::BUSY;
        }
        value
    }
}

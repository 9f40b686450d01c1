//! Recording timer for tests.
//!
//! Models the preload and active register pairs: with preload enabled a write only reaches
//! the active register on an update event.

use crate::channel::Channel;
use crate::hw::{CompareMode, PwmTimer};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Register {
    pub preload: u16,
    pub active: u16,
}

impl Register {
    fn write(&mut self, value: u16, buffered: bool) {
        self.preload = value;
        if !buffered {
            self.active = value;
        }
    }

    fn latch(&mut self) {
        self.active = self.preload;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Unit {
    pub mode: Option<CompareMode>,
    pub preload: bool,
    pub output: bool,
    pub ccr: Register,
}

#[derive(Debug)]
pub struct MockTimer {
    pub input_clock_hz: u32,
    pub clock_enabled: bool,
    pub up_counting: bool,
    pub period_preload: bool,
    pub counter_enabled: bool,
    pub psc: Register,
    pub rep: Option<u8>,
    pub arr: Register,
    pub units: [Unit; 4],
    pub updates: usize,
    pub arr_writes: usize,
    pub ccr_writes: usize,
    pub latched_before_enable: bool,
}

impl MockTimer {
    pub fn new(input_clock_hz: u32) -> Self {
        Self {
            input_clock_hz,
            clock_enabled: false,
            up_counting: false,
            period_preload: false,
            counter_enabled: false,
            psc: Register::default(),
            rep: None,
            arr: Register::default(),
            units: [Unit::default(); 4],
            updates: 0,
            arr_writes: 0,
            ccr_writes: 0,
            latched_before_enable: false,
        }
    }

    /// Counter reached the period.
    pub fn overflow(&mut self) {
        if self.counter_enabled {
            self.latch();
        }
    }

    fn latch(&mut self) {
        self.psc.latch();
        if self.period_preload {
            self.arr.latch();
        }
        for unit in self.units.iter_mut().filter(|u| u.preload) {
            unit.ccr.latch();
        }
    }
}

impl PwmTimer for MockTimer {
    fn input_clock_hz(&self) -> u32 {
        self.input_clock_hz
    }

    fn enable_clock(&mut self) {
        self.clock_enabled = true;
    }

    fn reset(&mut self) {
        self.up_counting = false;
        self.period_preload = false;
        self.counter_enabled = false;
        self.psc = Register::default();
        self.rep = None;
        self.arr = Register::default();
        self.units = [Unit::default(); 4];
    }

    fn configure_up_counting(&mut self) {
        self.up_counting = true;
        self.period_preload = true;
    }

    fn write_prescaler(&mut self, psc: u16) {
        self.psc.write(psc, true);
    }

    fn write_repetition(&mut self, rep: u8) {
        self.rep = Some(rep);
    }

    fn write_period(&mut self, arr: u16) {
        self.arr_writes += 1;
        self.arr.write(arr, self.period_preload);
    }

    fn set_compare_mode(&mut self, channel: Channel, mode: CompareMode) {
        self.units[channel as usize].mode = Some(mode);
    }

    fn enable_compare_preload(&mut self, channel: Channel) {
        self.units[channel as usize].preload = true;
    }

    fn write_compare(&mut self, channel: Channel, ccr: u16) {
        self.ccr_writes += 1;
        let unit = &mut self.units[channel as usize];
        unit.ccr.write(ccr, unit.preload);
    }

    fn enable_output(&mut self, channel: Channel) {
        self.units[channel as usize].output = true;
    }

    fn disable_output(&mut self, channel: Channel) {
        self.units[channel as usize].output = false;
    }

    fn generate_update(&mut self) {
        self.updates += 1;
        self.latch();
    }

    fn enable_counter(&mut self) {
        self.latched_before_enable = self.updates > 0;
        self.counter_enabled = true;
    }
}

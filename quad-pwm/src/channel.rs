//! Channel driver.
//!
//! Converts a duty cycle in parts per thousand into a compare value against the period of the
//! [Pwm] timer core, and writes it to one of the four compare units.

use core::convert::TryFrom;

use crate::error::{Error, Result};
use crate::hw::PwmTimer;
use crate::pwm::Pwm;

/// One of the four compare units of the timer.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    C1 = 0,
    C2 = 1,
    C3 = 2,
    C4 = 3,
}

impl Channel {
    pub const ALL: [Channel; 4] = [Channel::C1, Channel::C2, Channel::C3, Channel::C4];
}

impl TryFrom<u8> for Channel {
    type Error = Error;

    #[inline]
    fn try_from(index: u8) -> Result<Self> {
        match index {
            0 => Ok(Channel::C1),
            1 => Ok(Channel::C2),
            2 => Ok(Channel::C3),
            3 => Ok(Channel::C4),
            _ => Err(Error::InvalidChannel),
        }
    }
}

/// Duty cycle in parts per thousand, `0..=1000`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct DutyCycle(u16);

impl DutyCycle {
    pub const MAX_PER_MILLE: u16 = 1000;
    pub const OFF: DutyCycle = DutyCycle(0);
    pub const FULL: DutyCycle = DutyCycle(Self::MAX_PER_MILLE);

    /// Anything above 1000 per mille is rejected, not clamped.
    #[inline]
    pub fn new(per_mille: u16) -> Result<Self> {
        if per_mille > Self::MAX_PER_MILLE {
            Err(Error::DutyOutOfRange)
        } else {
            Ok(Self(per_mille))
        }
    }

    /// No range check, `per_mille` must not exceed 1000.
    #[inline]
    pub(crate) const fn new_unchecked(per_mille: u16) -> Self {
        Self(per_mille)
    }

    #[inline]
    pub fn per_mille(self) -> u16 {
        self.0
    }

    /// The opposite duty cycle, `1000 - self`.
    #[inline]
    pub fn complement(self) -> Self {
        Self(Self::MAX_PER_MILLE - self.0)
    }
}

impl TryFrom<u16> for DutyCycle {
    type Error = Error;

    #[inline]
    fn try_from(per_mille: u16) -> Result<Self> {
        Self::new(per_mille)
    }
}

/// Compare value for a duty cycle: `floor(period * duty / 1000)`, never above `period`.
#[inline]
pub fn compare_value(period: u16, duty: DutyCycle) -> u16 {
    let ccr = period as u64 * duty.0 as u64 / DutyCycle::MAX_PER_MILLE as u64;
    ccr as u16
}

impl<T: PwmTimer> Pwm<T> {
    /// Set the duty cycle of a channel, in parts per thousand.
    ///
    /// Takes effect at the next cycle boundary. Above 1000 the compare value is left untouched.
    pub fn set_duty_cycle(&mut self, channel: Channel, duty_per_mille: u16) -> Result<()> {
        let duty = DutyCycle::new(duty_per_mille)?;
        self.write_duty(channel, duty);
        Ok(())
    }

    /// Same as [set_duty_cycle][Pwm::set_duty_cycle], with the channel given by index `0..=3`.
    pub fn set_duty_cycle_raw(&mut self, index: u8, duty_per_mille: u16) -> Result<()> {
        let channel = Channel::try_from(index)?;
        self.set_duty_cycle(channel, duty_per_mille)
    }

    /// Write an already validated duty cycle.
    #[inline]
    pub fn write_duty(&mut self, channel: Channel, duty: DutyCycle) {
        let ccr = compare_value(self.period, duty);
        self.timer.write_compare(channel, ccr);
    }
}

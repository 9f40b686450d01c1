use crate::error::{Error, Result};
use crate::hw::PwmTimer;
use crate::pwm::Pwm;

/// Counter tick rate in Hertz.
pub const TICK_HZ: u32 = 1_000_000;

/// Switching frequency after initialization.
pub const DEFAULT_FREQ_HZ: u32 = 100;

/// Highest switching frequency.
pub const MAX_FREQ_HZ: u32 = 100_000;

/// Timer configuration, fixed once a [Pwm] is made from it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Counter tick rate in Hertz.
    pub tick_hz: u32,
    /// Switching frequency programmed by [Pwm::initialize].
    pub default_freq_hz: u32,
    /// Highest accepted switching frequency.
    pub max_freq_hz: u32,
    /// Largest period the counter can hold.
    pub max_period: u16,
}

impl Default for Config {
    #[inline]
    fn default() -> Self {
        Self {
            tick_hz: TICK_HZ,
            default_freq_hz: DEFAULT_FREQ_HZ,
            max_freq_hz: MAX_FREQ_HZ,
            max_period: u16::MAX,
        }
    }
}

impl Config {
    /// Initialize the timer for PWM output.
    ///
    /// The peripheral clock of the timer must be running at its final speed.
    #[inline]
    pub fn make<T: PwmTimer>(self, timer: T) -> Result<Pwm<T>> {
        Pwm::new(timer, self)
    }

    /// Counter period for a switching frequency.
    ///
    /// `period = tick_hz / freq_hz - 1`, rejected unless `0 < period <= max_period`.
    pub fn period_for(&self, freq_hz: u32) -> Result<u16> {
        if freq_hz == 0 || freq_hz > self.max_freq_hz {
            return Err(Error::FrequencyOutOfRange);
        }
        let period = (self.tick_hz / freq_hz).saturating_sub(1);
        if period == 0 || period > self.max_period as u32 {
            return Err(Error::FrequencyOutOfRange);
        }
        Ok(period as u16)
    }

    /// Prescaler dividing the timer input clock down to the tick rate.
    pub fn prescaler_for(&self, input_clock_hz: u32) -> Result<u16> {
        if self.tick_hz == 0
            || input_clock_hz < self.tick_hz
            || input_clock_hz % self.tick_hz != 0
        {
            return Err(Error::UnreachableTickRate);
        }
        let psc = input_clock_hz / self.tick_hz - 1;
        if psc > u16::MAX as u32 {
            return Err(Error::UnreachableTickRate);
        }
        Ok(psc as u16)
    }

    /// Check the configuration is self consistent.
    ///
    /// The maximum frequency must still leave a non zero period, and the default frequency
    /// must be accepted by [Config::period_for].
    pub fn validate(&self) -> Result<()> {
        if self.tick_hz == 0 || self.max_period == 0 {
            return Err(Error::InvalidConfig);
        }
        self.period_for(self.max_freq_hz)
            .and_then(|_| self.period_for(self.default_freq_hz))
            .map(|_| ())
            .map_err(|_| Error::InvalidConfig)
    }
}

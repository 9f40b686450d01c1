//! Periodic ticks from the SysTick timer.
//!
//! Replaces counting cycles in a busy loop: the period is set in milliseconds and does not
//! depend on how fast the loop body runs.

use crate::clock;
use cortex_m::peripheral::{syst::SystClkSource, SYST};

/// SysTick reload register is 24 bits wide.
const MAX_RELOAD: u32 = (1 << 24) - 1;

/// SysTick reload value for a period of `ms` milliseconds.
///
/// A zero reload stops SysTick, so the period is at least one millisecond.
#[inline]
fn reload_for(ms: u32) -> u32 {
    (clock::SPEED / 1_000)
        .saturating_mul(ms.max(1))
        .saturating_sub(1)
        .min(MAX_RELOAD)
}

/// Fixed rate ticker.
///
/// Periods are clamped to `1..=233` ms at 72MHz.
pub struct Ticker {
    syst: SYST,
}

impl Ticker {
    /// Tick every `ms` milliseconds, counting starts immediately.
    pub fn millis(mut syst: SYST, ms: u32) -> Self {
        let reload = reload_for(ms);
        syst.set_clock_source(SystClkSource::Core);
        syst.set_reload(reload);
        syst.clear_current();
        syst.enable_counter();
        Self { syst }
    }

    /// True once per period, clears on read.
    #[inline]
    pub fn expired(&mut self) -> bool {
        self.syst.has_wrapped()
    }

    /// Block until the next tick.
    #[inline]
    pub fn wait(&mut self) {
        while !self.expired() {}
    }

    /// Stop the ticker and release the SysTick timer.
    pub fn free(mut self) -> SYST {
        self.syst.disable_counter();
        self.syst
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_millisecond() {
        assert_eq!(reload_for(1), 71_999);
    }

    #[test]
    fn zero_period_still_ticks() {
        assert_eq!(reload_for(0), reload_for(1));
    }

    #[test]
    fn long_periods_are_clamped() {
        assert_eq!(reload_for(233), 16_775_999);
        assert_eq!(reload_for(234), MAX_RELOAD);
        assert_eq!(reload_for(u32::MAX), MAX_RELOAD);
    }
}

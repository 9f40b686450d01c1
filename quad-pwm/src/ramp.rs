//! Ramp pattern used by the demo firmware.
//!
//! Channels 1 and 3 ramp up while 2 and 4 ramp down, then the other way around.
//! One full cycle takes 2000 steps.

use crate::channel::{Channel, DutyCycle};
use crate::hw::PwmTimer;
use crate::pwm::Pwm;

const TOP: u16 = DutyCycle::MAX_PER_MILLE;
const CYCLE: u16 = 2 * TOP;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Ramp {
    position: u16,
}

impl Ramp {
    #[inline]
    pub const fn new() -> Self {
        Self { position: 0 }
    }

    /// Position within the cycle, `0..=2000`.
    #[inline]
    pub fn position(&self) -> u16 {
        self.position
    }

    /// Step forward, wrapping back to zero after 2000.
    #[inline]
    pub fn advance(&mut self) {
        self.position = if self.position >= CYCLE {
            0
        } else {
            self.position + 1
        };
    }

    /// Duty cycles for the four channels at the current position.
    pub fn duties(&self) -> [DutyCycle; 4] {
        let rising = if self.position <= TOP {
            self.position
        } else {
            CYCLE - self.position
        };
        debug_assert!(rising <= TOP);
        let a = DutyCycle::new_unchecked(rising);
        let b = a.complement();
        [a, b, a, b]
    }

    /// Write the current duty cycles to all four channels.
    pub fn apply<T: PwmTimer>(&self, pwm: &mut Pwm<T>) {
        for (&channel, &duty) in Channel::ALL.iter().zip(self.duties().iter()) {
            pwm.write_duty(channel, duty);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::mock::MockTimer;

    fn per_mille(ramp: &Ramp) -> [u16; 4] {
        let d = ramp.duties();
        [d[0].per_mille(), d[1].per_mille(), d[2].per_mille(), d[3].per_mille()]
    }

    #[test]
    fn starts_with_first_pair_off() {
        let ramp = Ramp::new();
        assert_eq!(per_mille(&ramp), [0, 1000, 0, 1000]);
    }

    #[test]
    fn rises_then_falls() {
        let mut ramp = Ramp::new();
        ramp.advance();
        assert_eq!(per_mille(&ramp), [1, 999, 1, 999]);

        while ramp.position() < 1000 {
            ramp.advance();
        }
        assert_eq!(per_mille(&ramp), [1000, 0, 1000, 0]);

        ramp.advance();
        assert_eq!(per_mille(&ramp), [999, 1, 999, 1]);

        while ramp.position() < 2000 {
            ramp.advance();
        }
        assert_eq!(per_mille(&ramp), [0, 1000, 0, 1000]);
    }

    #[test]
    fn duties_stay_in_range_over_a_cycle() {
        let mut ramp = Ramp::new();
        for _ in 0..=2 * CYCLE {
            for duty in ramp.duties().iter() {
                assert_eq!(DutyCycle::new(duty.per_mille()), Ok(*duty));
            }
            ramp.advance();
        }
    }

    #[test]
    fn wraps_after_full_cycle() {
        let mut ramp = Ramp::new();
        for _ in 0..2000 {
            ramp.advance();
        }
        assert_eq!(ramp.position(), 2000);
        ramp.advance();
        assert_eq!(ramp.position(), 0);
    }

    #[test]
    fn pairs_stay_complementary_on_the_timer() {
        let mut pwm = Config::default().make(MockTimer::new(72_000_000)).unwrap();
        pwm.set_frequency(1_000).unwrap();
        let period = pwm.period();

        let mut ramp = Ramp::new();
        for _ in 0..2001 {
            ramp.advance();
            ramp.apply(&mut pwm);
            let ccr = |i: usize| pwm.timer.units[i].ccr.preload;
            for &(a, b) in &[(0, 1), (2, 3)] {
                let sum = ccr(a) + ccr(b);
                assert!(sum == period || sum + 1 == period);
            }
            assert_eq!(ccr(0), ccr(2));
            assert_eq!(ccr(1), ccr(3));
        }
    }
}

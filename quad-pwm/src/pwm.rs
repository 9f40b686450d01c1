use crate::channel::Channel;
use crate::config::Config;
use crate::error::Result;
use crate::hw::{CompareMode, PwmTimer};

/// Life cycle of the counter.
///
/// There is no stopped state after [State::Running], the counter runs until power down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// Configured, counter not yet enabled.
    Initialized,
    /// Counter enabled, outputs switching.
    Running,
}

/// Timer core: owns the timer and the period shared by all four channels.
pub struct Pwm<T> {
    pub(crate) timer: T,
    config: Config,
    psc: u16,
    default_period: u16,
    pub(crate) period: u16,
    state: State,
}

impl<T: PwmTimer> Pwm<T> {
    /// Validate the configuration and [initialize][Pwm::initialize] the timer.
    pub fn new(timer: T, config: Config) -> Result<Self> {
        config.validate()?;
        let psc = config.prescaler_for(timer.input_clock_hz())?;
        let period = config.period_for(config.default_freq_hz)?;
        let mut pwm = Self {
            timer,
            config,
            psc,
            default_period: period,
            period,
            state: State::Initialized,
        };
        pwm.initialize();
        Ok(pwm)
    }

    /// Configure the counter and all four compare units.
    ///
    /// Sets the default frequency and zero compare values, outputs are enabled but stay low.
    /// Calling this again re-applies the same configuration and stops the counter.
    pub fn initialize(&mut self) {
        let period = self.default_period;

        self.timer.enable_clock();
        self.timer.reset();
        self.timer.configure_up_counting();
        self.timer.write_prescaler(self.psc);
        self.timer.write_repetition(0);
        self.timer.write_period(period);
        self.period = period;

        for &channel in Channel::ALL.iter() {
            self.timer.disable_output(channel);
            self.timer.set_compare_mode(channel, CompareMode::Pwm1);
            self.timer.enable_compare_preload(channel);
            self.timer.write_compare(channel, 0);
            self.timer.enable_output(channel);
        }

        self.state = State::Initialized;
    }

    /// Set the switching frequency of all channels.
    ///
    /// The new period is adopted at the next cycle boundary. Compare values are not rescaled,
    /// duty cycles must be set again to keep their fraction.
    ///
    /// An out of range frequency leaves the period untouched.
    pub fn set_frequency(&mut self, freq_hz: u32) -> Result<()> {
        let period = self.config.period_for(freq_hz)?;
        self.period = period;
        self.timer.write_period(period);
        Ok(())
    }

    /// Latch the preload registers and enable the counter.
    ///
    /// Pins must be routed to the compare units beforehand.
    pub fn start(&mut self) {
        self.timer.generate_update();
        self.timer.enable_counter();
        self.state = State::Running;
    }

    /// Current period in ticks.
    #[inline]
    pub fn period(&self) -> u16 {
        self.period
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn prescaler(&self) -> u16 {
        self.psc
    }

    /// Release the timer. The counter keeps running.
    #[inline]
    pub fn free(self) -> T {
        self.timer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_FREQ_HZ;
    use crate::error::Error;
    use crate::mock::MockTimer;

    fn make() -> Pwm<MockTimer> {
        Config::default()
            .make(MockTimer::new(72_000_000))
            .expect("default config should make")
    }

    #[test]
    fn initialize_configures_timer() {
        let pwm = make();
        assert_eq!(pwm.state(), State::Initialized);
        assert_eq!(pwm.period(), 9_999);
        assert_eq!(pwm.prescaler(), 71);

        let timer = pwm.free();
        assert!(timer.clock_enabled);
        assert!(timer.up_counting);
        assert!(timer.period_preload);
        assert!(!timer.counter_enabled);
        assert_eq!(timer.psc.preload, 71);
        assert_eq!(timer.rep, Some(0));
        assert_eq!(timer.arr.preload, 9_999);
        for &channel in Channel::ALL.iter() {
            let unit = &timer.units[channel as usize];
            assert_eq!(unit.mode, Some(CompareMode::Pwm1));
            assert!(unit.preload);
            assert!(unit.output);
            assert_eq!(unit.ccr.preload, 0);
        }
    }

    #[test]
    fn unreachable_tick_rate_is_rejected() {
        let result = Config::default().make(MockTimer::new(1_500_000));
        assert!(matches!(result, Err(Error::UnreachableTickRate)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = Config {
            default_freq_hz: 0,
            ..Config::default()
        };
        let result = config.make(MockTimer::new(72_000_000));
        assert!(matches!(result, Err(Error::InvalidConfig)));
    }

    #[test]
    fn set_frequency_updates_period() {
        let mut pwm = make();
        assert_eq!(pwm.set_frequency(1_000), Ok(()));
        assert_eq!(pwm.period(), 999);
        assert_eq!(pwm.timer.arr.preload, 999);
    }

    #[test]
    fn rejected_frequency_keeps_period() {
        let mut pwm = make();
        pwm.set_frequency(1_000).unwrap();
        let writes = pwm.timer.arr_writes;

        for &freq in &[0, 200_000, MAX_FREQ_HZ + 1, 15] {
            assert_eq!(pwm.set_frequency(freq), Err(Error::FrequencyOutOfRange));
            assert_eq!(pwm.period(), 999);
            assert_eq!(pwm.timer.arr.preload, 999);
        }
        assert_eq!(pwm.timer.arr_writes, writes);
    }

    #[test]
    fn every_valid_frequency_keeps_the_invariant() {
        let mut pwm = make();
        for freq in 1..=MAX_FREQ_HZ + 10 {
            let before = pwm.period();
            match pwm.set_frequency(freq) {
                Ok(()) => {
                    assert_eq!(pwm.period() as u32, 1_000_000 / freq - 1);
                    assert!(pwm.period() > 0);
                }
                Err(_) => assert_eq!(pwm.period(), before),
            }
        }
    }

    #[test]
    fn frequency_change_waits_for_cycle_boundary() {
        let mut pwm = make();
        pwm.start();
        assert_eq!(pwm.timer.arr.active, 9_999);

        pwm.set_frequency(1_000).unwrap();
        assert_eq!(pwm.timer.arr.active, 9_999);

        pwm.timer.overflow();
        assert_eq!(pwm.timer.arr.active, 999);
    }

    #[test]
    fn frequency_change_does_not_rescale_compare() {
        let mut pwm = make();
        pwm.set_duty_cycle(Channel::C1, 500).unwrap();
        assert_eq!(pwm.timer.units[0].ccr.preload, 4_999);

        pwm.set_frequency(1_000).unwrap();
        assert_eq!(pwm.timer.units[0].ccr.preload, 4_999);

        pwm.set_duty_cycle(Channel::C1, 500).unwrap();
        assert_eq!(pwm.timer.units[0].ccr.preload, 499);
    }

    #[test]
    fn start_latches_then_enables() {
        let mut pwm = make();
        pwm.set_frequency(1_000).unwrap();
        pwm.set_duty_cycle(Channel::C2, 250).unwrap();
        assert_eq!(pwm.timer.arr.active, 0);

        pwm.start();
        assert_eq!(pwm.state(), State::Running);
        assert!(pwm.timer.counter_enabled);
        assert_eq!(pwm.timer.updates, 1);
        assert_eq!(pwm.timer.psc.active, 71);
        assert_eq!(pwm.timer.arr.active, 999);
        assert_eq!(pwm.timer.units[1].ccr.active, 249);
        assert!(pwm.timer.latched_before_enable);
    }

    #[test]
    fn start_twice_keeps_running_state() {
        let mut pwm = make();
        pwm.set_frequency(1_000).unwrap();
        pwm.set_duty_cycle(Channel::C3, 300).unwrap();
        pwm.start();
        let arr = pwm.timer.arr;
        let units = pwm.timer.units;

        pwm.start();
        assert_eq!(pwm.state(), State::Running);
        assert!(pwm.timer.counter_enabled);
        assert_eq!(pwm.timer.arr, arr);
        assert_eq!(pwm.timer.units, units);
    }

    #[test]
    fn initialize_twice_matches_once() {
        let once = make();

        let mut twice = make();
        twice.set_frequency(1_000).unwrap();
        twice.set_duty_cycle(Channel::C4, 700).unwrap();
        twice.start();
        twice.initialize();

        assert_eq!(twice.state(), State::Initialized);
        assert_eq!(twice.period(), once.period());
        let (a, b) = (once.free(), twice.free());
        assert_eq!(a.arr.preload, b.arr.preload);
        assert_eq!(a.psc.preload, b.psc.preload);
        assert_eq!(a.units, b.units);
        assert!(!b.counter_enabled);
    }
}

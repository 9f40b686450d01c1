use super::timer::Timer;
use crate::gpio;
use quad_pwm::{Channel, CompareMode, PwmTimer};

impl Timer {
    /// Hand the four compare output pins over to this timer.
    ///
    /// Must be done before the PWM is started, the alternate function IO peripheral must be
    /// [enabled][gpio::enable].
    pub fn route_pwm_pins(&self, mode: gpio::AlternateFunctionOutputMode) {
        for &channel in Channel::ALL.iter() {
            gpio::configure(self.gpio(channel), mode.into());
        }
    }
}

impl PwmTimer for Timer {
    #[inline]
    fn input_clock_hz(&self) -> u32 {
        self.clock_speed()
    }

    #[inline]
    fn enable_clock(&mut self) {
        self.enable_rcc();
    }

    #[inline]
    fn reset(&mut self) {
        self.reset_rcc();
    }

    #[inline]
    fn configure_up_counting(&mut self) {
        self.write_edge_aligned_up();
    }

    #[inline]
    fn write_prescaler(&mut self, psc: u16) {
        self.write_psc(psc);
    }

    #[inline]
    fn write_repetition(&mut self, rep: u8) {
        self.write_rcr(rep);
    }

    #[inline]
    fn write_period(&mut self, arr: u16) {
        self.write_arr(arr);
    }

    #[inline]
    fn set_compare_mode(&mut self, channel: Channel, mode: CompareMode) {
        self.output_compare_mode(channel, mode);
    }

    #[inline]
    fn enable_compare_preload(&mut self, channel: Channel) {
        self.output_compare_preload(channel);
    }

    #[inline]
    fn write_compare(&mut self, channel: Channel, ccr: u16) {
        self.write_ccr(channel, ccr);
    }

    #[inline]
    fn enable_output(&mut self, channel: Channel) {
        self.output_enable(channel);
    }

    #[inline]
    fn disable_output(&mut self, channel: Channel) {
        self.output_disable(channel);
    }

    #[inline]
    fn generate_update(&mut self) {
        self.update_event();
    }

    #[inline]
    fn enable_counter(&mut self) {
        self.enable();
    }
}

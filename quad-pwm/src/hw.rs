use crate::channel::Channel;

/// Output compare mode of a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CompareMode {
    /// Output active while counter < compare.
    Pwm1,
}

/// Register level access to a timer with four compare units.
///
/// Writes to the period and compare registers are expected to land in the preload registers
/// once preload is enabled, and only reach the active registers on an update event.
pub trait PwmTimer {
    /// Frequency of the clock feeding the prescaler, in Hertz.
    fn input_clock_hz(&self) -> u32;

    fn enable_clock(&mut self);

    /// Put the peripheral back in its reset state.
    fn reset(&mut self);

    /// Up counting, edge aligned, continuous mode without clock division, with the
    /// auto reload preload enabled.
    fn configure_up_counting(&mut self);

    fn write_prescaler(&mut self, psc: u16);

    /// Timers without a repetition counter ignore this.
    #[inline]
    fn write_repetition(&mut self, _rep: u8) {}

    fn write_period(&mut self, arr: u16);

    fn set_compare_mode(&mut self, channel: Channel, mode: CompareMode);

    fn enable_compare_preload(&mut self, channel: Channel);

    fn write_compare(&mut self, channel: Channel, ccr: u16);

    fn enable_output(&mut self, channel: Channel);

    fn disable_output(&mut self, channel: Channel);

    /// Software update event, latches all preload registers.
    fn generate_update(&mut self);

    fn enable_counter(&mut self);
}

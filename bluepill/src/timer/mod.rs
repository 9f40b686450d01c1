//! General purpose and advanced timers.
//!
//! Each timer drives four compare outputs. See [quad_pwm] for generating PWM on them.

mod pwm;
mod timer;

pub use quad_pwm::Channel;
pub use timer::Timer;

pub const TIM1: timer::Timer = timer::Timer::Tim1;
pub const TIM2: timer::Timer = timer::Timer::Tim2;
pub const TIM3: timer::Timer = timer::Timer::Tim3;
pub const TIM4: timer::Timer = timer::Timer::Tim4;

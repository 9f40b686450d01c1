//! Four channel PWM on a single timer.
//!
//! All four channels share the counter period, and therefore the switching frequency.
//! Each channel has its own duty cycle, given in parts per thousand.
//!
//! Example usage:
//!
//! ```ignore
//! let mut pwm = quad_pwm::Config::default().make(TIM4)?;
//! pwm.set_frequency(1_000)?;
//! pwm.set_duty_cycle(Channel::C1, 500)?;
//! pwm.start();
//! ```
//!
//! Hardware access goes through the [PwmTimer] trait, which keeps this crate free of any
//! device crate.

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod channel;
mod config;
mod error;
mod hw;
mod pwm;
mod ramp;

#[cfg(test)]
mod mock;

pub use channel::{compare_value, Channel, DutyCycle};
pub use config::{Config, DEFAULT_FREQ_HZ, MAX_FREQ_HZ, TICK_HZ};
pub use error::{Error, Result};
pub use hw::{CompareMode, PwmTimer};
pub use pwm::{Pwm, State};
pub use ramp::Ramp;

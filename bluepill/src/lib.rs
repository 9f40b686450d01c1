//! Minimal HAL crate for the STM32f103 microcontroller.
//!
//! Allows for flexible peripheral access, without direct interaction with registers.
//! It is minimal in the sense that it does not follow strict guidelines on HAL crate design, e.g.
//! it is possible to configure a timer, without activating the system clock.
//!
//! The general purpose timers implement [quad_pwm::PwmTimer], so any of them can drive four PWM
//! outputs.

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod gpio;
pub mod tick;
pub mod timer;

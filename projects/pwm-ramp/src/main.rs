//! Four channel PWM ramp on TIM4.
//!
//! Outputs PB6 and PB8 fade in while PB7 and PB9 fade out, then the other way around.

#![no_main]
#![no_std]

extern crate panic_halt;

use bluepill::{clock, gpio, tick, timer};
use cortex_m_rt::entry;
use cortex_m_semihosting::hprintln;
use quad_pwm::{Channel, Config, Ramp};

/// Hardware layout:

/// PWM timer, outputs on PB6, PB7, PB8 and PB9:
const PWM_TIM: timer::Timer = timer::TIM4;

/// GPIO mode of the PWM outputs:
const PWM_PIN_MODE: gpio::AlternateFunctionOutputMode =
    gpio::AlternateFunctionOutputMode::PushPull(gpio::Speed::Max50MHz);

/// Switching frequency:
const PWM_FREQ_HZ: u32 = 1_000;

/// Time between two ramp steps, one full ramp cycle takes 2000 steps:
const RAMP_STEP_MS: u32 = 1;

#[entry]
fn main() -> ! {
    if cfg!(debug_assertions) {
        hprintln!("Hello PWM!").unwrap();
    }

    // Clock and gpio setup.
    unsafe {
        clock::init();
    }
    gpio::enable();
    PWM_TIM.route_pwm_pins(PWM_PIN_MODE);

    let cp = cortex_m::Peripherals::take().unwrap();

    // PWM setup.
    let mut pwm = match Config::default().make(PWM_TIM) {
        Ok(pwm) => pwm,
        Err(e) => {
            if cfg!(debug_assertions) {
                hprintln!("PWM setup failed: {}", e).unwrap();
            }
            loop {}
        }
    };
    if let Err(e) = pwm.set_frequency(PWM_FREQ_HZ) {
        if cfg!(debug_assertions) {
            hprintln!("{} Hz rejected: {}", PWM_FREQ_HZ, e).unwrap();
        }
    }
    for &channel in Channel::ALL.iter() {
        pwm.set_duty_cycle(channel, 0).ok();
    }
    pwm.start();

    if cfg!(debug_assertions) {
        hprintln!(
            "PWM running: prescaler = {}, period = {} ticks",
            pwm.prescaler(),
            pwm.period()
        )
        .unwrap();
    }

    let mut ramp = Ramp::new();
    let mut ticker = tick::Ticker::millis(cp.SYST, RAMP_STEP_MS);

    loop {
        ramp.advance();
        ramp.apply(&mut pwm);
        ticker.wait();
    }
}

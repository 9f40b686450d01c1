//! Pins connected to timer compare outputs.

use super::{Gpio, Pin, Port};

// TIM2
pub const PA0: Gpio = Gpio(Port::A, Pin::P0);
pub const PA1: Gpio = Gpio(Port::A, Pin::P1);
pub const PA2: Gpio = Gpio(Port::A, Pin::P2);
pub const PA3: Gpio = Gpio(Port::A, Pin::P3);

// TIM3
pub const PA6: Gpio = Gpio(Port::A, Pin::P6);
pub const PA7: Gpio = Gpio(Port::A, Pin::P7);
pub const PB0: Gpio = Gpio(Port::B, Pin::P0);
pub const PB1: Gpio = Gpio(Port::B, Pin::P1);

// TIM1
pub const PA8: Gpio = Gpio(Port::A, Pin::P8);
pub const PA9: Gpio = Gpio(Port::A, Pin::P9);
pub const PA10: Gpio = Gpio(Port::A, Pin::P10);
pub const PA11: Gpio = Gpio(Port::A, Pin::P11);

// TIM4
pub const PB6: Gpio = Gpio(Port::B, Pin::P6);
pub const PB7: Gpio = Gpio(Port::B, Pin::P7);
pub const PB8: Gpio = Gpio(Port::B, Pin::P8);
pub const PB9: Gpio = Gpio(Port::B, Pin::P9);

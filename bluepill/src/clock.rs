//! System clock setup.

use stm32f1xx_hal::pac::Peripherals as DevicePeripherals;

/// System clock speed in Hertz.
pub const SPEED: u32 = 72_000_000;

/// Setup of the system clock.
///
/// Assumes an `8Mhz` external crystal is used. APB1 runs at half the system clock, APB2 at
/// the full system clock.
pub unsafe fn init() {
    let dp = DevicePeripherals::steal();

    dp.FLASH.acr.write(|w| {
        // Enable the prefetch buffer.
        w.prftbe().set_bit();
        // Flash half cycle access: disabled.
        w.hlfcya().clear_bit();
        // Latency: two wait states if 48MHz < SYSCLK <= 72MHz.
        w.latency().ws2()
    });

    while !dp.FLASH.acr.read().latency().is_ws2() {}

    dp.RCC.cfgr.write(|w| {
        // HSE oscillator clock selected as PLL input clock.
        w.pllsrc().hse_div_prediv();
        // PLL multitplication factor: mul 9
        w.pllmul().mul9();
        // APB low-speed prescaler:  div 2
        w.ppre1().div2()
    });

    // Enable HSE (crystal), PLL and clock security.
    dp.RCC.cr.write(|w| {
        w.csson().set_bit();
        w.hseon().set_bit();
        w.pllon().set_bit()
    });

    // Wait for PLL to become ready.
    while !dp.RCC.cr.read().pllrdy().is_ready() {}

    // Switch to PLL as system clock.
    dp.RCC.cfgr.modify(|_, w| w.sw().pll());

    // Wait for switch to complete.
    while !dp.RCC.cfgr.read().sws().is_pll() {}
}

/// Speed of a bus, given the value of its prescaler bits.
#[inline]
fn bus_speed(ppre: u8) -> u32 {
    if (ppre & 4) > 0 {
        SPEED >> ((ppre & 3) + 1)
    } else {
        SPEED
    }
}

/// Kernel clock of a timer on a bus.
///
/// Timers run at twice the bus speed, unless the bus is not divided.
#[inline]
fn timer_speed(ppre: u8) -> u32 {
    if (ppre & 4) > 0 {
        bus_speed(ppre) * 2
    } else {
        SPEED
    }
}

/// Clock speed of the timers connected to APB1 (TIM2, TIM3, TIM4).
pub fn apb1_timer_speed() -> u32 {
    let dp = unsafe { DevicePeripherals::steal() };
    timer_speed(dp.RCC.cfgr.read().ppre1().bits())
}

/// Clock speed of the timers connected to APB2 (TIM1).
pub fn apb2_timer_speed() -> u32 {
    let dp = unsafe { DevicePeripherals::steal() };
    timer_speed(dp.RCC.cfgr.read().ppre2().bits())
}

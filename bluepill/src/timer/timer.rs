use crate::{clock, gpio};
use quad_pwm::{Channel, CompareMode};
use stm32f1xx_hal::pac::{
    tim1::RegisterBlock as RegisterBlock1, tim2::RegisterBlock as RegisterBlock2,
    Peripherals as DevicePeripherals, TIM1, TIM2, TIM3, TIM4,
};

/// CR1: one pulse mode.
const CR1_OPM: u32 = 1 << 3;
/// CR1: count direction, set for down counting.
const CR1_DIR: u32 = 1 << 4;
/// CR1: center aligned mode selection.
const CR1_CMS: u32 = 3 << 5;
/// CR1: auto reload preload enable.
const CR1_ARPE: u32 = 1 << 7;
/// CR1: clock division.
const CR1_CKD: u32 = 3 << 8;

/// OCxM field value of a compare mode.
#[inline]
fn ocm_bits(mode: CompareMode) -> u32 {
    match mode {
        CompareMode::Pwm1 => 6,
    }
}

enum TimerPtr {
    Tim1(*const RegisterBlock1),
    Tim234(*const RegisterBlock2),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timer {
    Tim1,
    Tim2,
    Tim3,
    Tim4,
}

impl Timer {
    #[inline]
    fn ptr(&self) -> TimerPtr {
        match self {
            Timer::Tim1 => TimerPtr::Tim1(TIM1::ptr()),
            Timer::Tim2 => TimerPtr::Tim234(TIM2::ptr()),
            Timer::Tim3 => TimerPtr::Tim234(TIM3::ptr()),
            Timer::Tim4 => TimerPtr::Tim234(TIM4::ptr()),
        }
    }

    /// Clock feeding the prescaler, in Hertz.
    #[inline]
    pub fn clock_speed(&self) -> u32 {
        match self {
            Timer::Tim1 => clock::apb2_timer_speed(),
            Timer::Tim2 | Timer::Tim3 | Timer::Tim4 => clock::apb1_timer_speed(),
        }
    }

    #[inline]
    pub fn enable_rcc(&mut self) {
        unsafe {
            let dp = DevicePeripherals::steal();
            match self {
                Timer::Tim1 => dp.RCC.apb2enr.modify(|_, w| w.tim1en().enabled()),
                Timer::Tim2 => dp.RCC.apb1enr.modify(|_, w| w.tim2en().enabled()),
                Timer::Tim3 => dp.RCC.apb1enr.modify(|_, w| w.tim3en().enabled()),
                Timer::Tim4 => dp.RCC.apb1enr.modify(|_, w| w.tim4en().enabled()),
            }
        }
    }

    /// Pulse the peripheral reset, all timer registers return to their reset values.
    #[inline]
    pub fn reset_rcc(&mut self) {
        unsafe {
            let dp = DevicePeripherals::steal();
            match self {
                Timer::Tim1 => {
                    dp.RCC.apb2rstr.modify(|_, w| w.tim1rst().set_bit());
                    dp.RCC.apb2rstr.modify(|_, w| w.tim1rst().clear_bit());
                }
                Timer::Tim2 => {
                    dp.RCC.apb1rstr.modify(|_, w| w.tim2rst().set_bit());
                    dp.RCC.apb1rstr.modify(|_, w| w.tim2rst().clear_bit());
                }
                Timer::Tim3 => {
                    dp.RCC.apb1rstr.modify(|_, w| w.tim3rst().set_bit());
                    dp.RCC.apb1rstr.modify(|_, w| w.tim3rst().clear_bit());
                }
                Timer::Tim4 => {
                    dp.RCC.apb1rstr.modify(|_, w| w.tim4rst().set_bit());
                    dp.RCC.apb1rstr.modify(|_, w| w.tim4rst().clear_bit());
                }
            }
        }
    }

    /// Edge aligned up counting without clock division, auto reload preload enabled.
    #[inline]
    pub fn write_edge_aligned_up(&mut self) {
        let clear = !(CR1_OPM | CR1_DIR | CR1_CMS | CR1_CKD);
        unsafe {
            match self.ptr() {
                TimerPtr::Tim1(ptr) => {
                    let value = (*ptr).cr1.read().bits() & clear;
                    (*ptr).cr1.write(|w| w.bits(value | CR1_ARPE));
                }
                TimerPtr::Tim234(ptr) => {
                    let value = (*ptr).cr1.read().bits() & clear;
                    (*ptr).cr1.write(|w| w.bits(value | CR1_ARPE));
                }
            }
        }
    }

    #[inline]
    pub fn write_arr(&mut self, arr: u16) {
        unsafe {
            match self.ptr() {
                TimerPtr::Tim1(ptr) => (*ptr).arr.write(|w| w.arr().bits(arr)),
                TimerPtr::Tim234(ptr) => (*ptr).arr.write(|w| w.arr().bits(arr)),
            }
        }
    }

    #[inline]
    pub fn write_psc(&mut self, psc: u16) {
        unsafe {
            match self.ptr() {
                TimerPtr::Tim1(ptr) => (*ptr).psc.write(|w| w.bits(psc as u32)),
                TimerPtr::Tim234(ptr) => (*ptr).psc.write(|w| w.bits(psc as u32)),
            }
        }
    }

    /// Repetition counter, only present on TIM1.
    #[inline]
    pub fn write_rcr(&mut self, rep: u8) {
        unsafe {
            if let TimerPtr::Tim1(ptr) = self.ptr() {
                (*ptr).rcr.write(|w| w.bits(rep as u32));
            }
        }
    }

    #[inline]
    pub fn enable(&mut self) {
        unsafe {
            match self.ptr() {
                TimerPtr::Tim1(ptr) => (*ptr).cr1.modify(|_, w| w.cen().enabled()),
                TimerPtr::Tim234(ptr) => (*ptr).cr1.modify(|_, w| w.cen().enabled()),
            }
        }
    }

    /// Software update event.
    ///
    /// Reloads the counter and moves the preload registers into the active registers.
    #[inline]
    pub fn update_event(&mut self) {
        unsafe {
            match self.ptr() {
                TimerPtr::Tim1(ptr) => (*ptr).egr.write(|w| w.ug().set_bit()),
                TimerPtr::Tim234(ptr) => (*ptr).egr.write(|w| w.ug().set_bit()),
            }
        }
    }

    #[inline]
    pub fn gpio(&self, channel: Channel) -> gpio::Gpio {
        match self {
            Timer::Tim1 => match channel {
                Channel::C1 => gpio::PA8,
                Channel::C2 => gpio::PA9,
                Channel::C3 => gpio::PA10,
                Channel::C4 => gpio::PA11,
            },
            Timer::Tim2 => match channel {
                Channel::C1 => gpio::PA0,
                Channel::C2 => gpio::PA1,
                Channel::C3 => gpio::PA2,
                Channel::C4 => gpio::PA3,
            },
            Timer::Tim3 => match channel {
                Channel::C1 => gpio::PA6,
                Channel::C2 => gpio::PA7,
                Channel::C3 => gpio::PB0,
                Channel::C4 => gpio::PB1,
            },
            Timer::Tim4 => match channel {
                Channel::C1 => gpio::PB6,
                Channel::C2 => gpio::PB7,
                Channel::C3 => gpio::PB8,
                Channel::C4 => gpio::PB9,
            },
        }
    }

    /// Read-modify-write of the CCMR byte belonging to a channel.
    ///
    /// `mask` and `bits` are given for channel 1, they are shifted to the channel's byte.
    #[inline]
    fn modify_ccmr(&self, channel: Channel, mask: u32, bits: u32) {
        let shift = match channel {
            Channel::C1 | Channel::C3 => 0,
            Channel::C2 | Channel::C4 => 8,
        };
        let (mask, bits) = (mask << shift, bits << shift);
        unsafe {
            match self.ptr() {
                TimerPtr::Tim1(ptr) => match channel {
                    Channel::C1 | Channel::C2 => {
                        let value = (*ptr).ccmr1_output().read().bits() & !mask;
                        (*ptr).ccmr1_output().write(|w| w.bits(value | bits));
                    }
                    Channel::C3 | Channel::C4 => {
                        let value = (*ptr).ccmr2_output().read().bits() & !mask;
                        (*ptr).ccmr2_output().write(|w| w.bits(value | bits));
                    }
                },
                TimerPtr::Tim234(ptr) => match channel {
                    Channel::C1 | Channel::C2 => {
                        let value = (*ptr).ccmr1_output().read().bits() & !mask;
                        (*ptr).ccmr1_output().write(|w| w.bits(value | bits));
                    }
                    Channel::C3 | Channel::C4 => {
                        let value = (*ptr).ccmr2_output().read().bits() & !mask;
                        (*ptr).ccmr2_output().write(|w| w.bits(value | bits));
                    }
                },
            }
        }
    }

    #[inline]
    pub fn output_compare_mode(&self, channel: Channel, mode: CompareMode) {
        self.modify_ccmr(channel, 7 << 4, ocm_bits(mode) << 4);
    }

    /// CCR writes take effect at the next update event.
    #[inline]
    pub fn output_compare_preload(&self, channel: Channel) {
        self.modify_ccmr(channel, 1 << 3, 1 << 3);
    }

    /// Read-modify-write of the CCER nibble belonging to a channel.
    #[inline]
    fn modify_ccer(&mut self, channel: Channel, mask: u32, bits: u32) {
        let shift = 4 * channel as u8;
        let (mask, bits) = (mask << shift, bits << shift);
        unsafe {
            match self.ptr() {
                TimerPtr::Tim1(ptr) => {
                    let value = (*ptr).ccer.read().bits() & !mask;
                    (*ptr).ccer.write(|w| w.bits(value | bits));
                }
                TimerPtr::Tim234(ptr) => {
                    let value = (*ptr).ccer.read().bits() & !mask;
                    (*ptr).ccer.write(|w| w.bits(value | bits));
                }
            }
        }
    }

    #[inline]
    pub fn output_enable(&mut self, channel: Channel) {
        if let TimerPtr::Tim1(ptr) = self.ptr() {
            // Main output enable.
            unsafe { (*ptr).bdtr.modify(|_, w| w.moe().set_bit()) };
        }
        self.modify_ccer(channel, 1, 1);
    }

    #[inline]
    pub fn output_disable(&mut self, channel: Channel) {
        self.modify_ccer(channel, 1, 0);
    }

    #[inline]
    pub fn write_ccr(&self, channel: Channel, ccr: u16) {
        unsafe {
            match self.ptr() {
                TimerPtr::Tim1(ptr) => match channel {
                    Channel::C1 => (*ptr).ccr1.write(|w| w.bits(ccr as u32)),
                    Channel::C2 => (*ptr).ccr2.write(|w| w.bits(ccr as u32)),
                    Channel::C3 => (*ptr).ccr3.write(|w| w.bits(ccr as u32)),
                    Channel::C4 => (*ptr).ccr4.write(|w| w.bits(ccr as u32)),
                },
                TimerPtr::Tim234(ptr) => match channel {
                    Channel::C1 => (*ptr).ccr1.write(|w| w.bits(ccr as u32)),
                    Channel::C2 => (*ptr).ccr2.write(|w| w.bits(ccr as u32)),
                    Channel::C3 => (*ptr).ccr3.write(|w| w.bits(ccr as u32)),
                    Channel::C4 => (*ptr).ccr4.write(|w| w.bits(ccr as u32)),
                },
            }
        }
    }
}

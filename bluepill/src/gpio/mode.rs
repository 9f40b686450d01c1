/// GPIO pin mode.
#[derive(Clone, Copy, Debug)]
pub enum Mode {
    AlternateFunctionOutputPushPull(Speed),
    AlternateFunctionOutputOpenDrain(Speed),
}

/// GPIO switching speed.
///
/// Lower speeds can reduce ringing.
#[derive(Clone, Copy, Debug)]
pub enum Speed {
    Max10MHz = 1,
    Max2MHz = 2,
    Max50MHz = 3,
}

/// GPIO alternate function mode.
///
/// Subset of the GPIO [modes][Mode], used when a peripheral drives the pin.
#[derive(Clone, Copy, Debug)]
pub enum AlternateFunctionOutputMode {
    PushPull(Speed),
    OpenDrain(Speed),
}

impl Into<Mode> for AlternateFunctionOutputMode {
    #[inline]
    fn into(self) -> Mode {
        match self {
            Self::PushPull(speed) => Mode::AlternateFunctionOutputPushPull(speed),
            Self::OpenDrain(speed) => Mode::AlternateFunctionOutputOpenDrain(speed),
        }
    }
}

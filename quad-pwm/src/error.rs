use core::fmt;

/// Rejected PWM request.
///
/// A rejected request never touches the hardware, the previous state is retained.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error {
    /// Switching frequency is zero, above the maximum, or needs a period the counter can not hold.
    FrequencyOutOfRange,
    /// Duty cycle above 1000 per mille.
    DutyOutOfRange,
    /// Channel index outside `0..=3`.
    InvalidChannel,
    /// Configuration values contradict each other.
    InvalidConfig,
    /// The tick rate can not be derived from the timer input clock with a 16-bit prescaler.
    UnreachableTickRate,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrequencyOutOfRange => write!(f, "switching frequency out of range"),
            Self::DutyOutOfRange => write!(f, "duty cycle above 1000 per mille"),
            Self::InvalidChannel => write!(f, "invalid channel index"),
            Self::InvalidConfig => write!(f, "invalid pwm configuration"),
            Self::UnreachableTickRate => write!(f, "tick rate unreachable from timer clock"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;

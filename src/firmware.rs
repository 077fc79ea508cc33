use std::fmt;

use crate::codes::LibrtasError;
use crate::describe::UNKNOWN_PREFIX;

pub const SUCCESS: i32 = 0;
pub const HARDWARE_ERROR: i32 = -1;
pub const BUSY: i32 = -2;
pub const PARAMETER_ERROR: i32 = -3;
/// First "extended delay" status; `9900 + n` asks for a 10^n ms wait.
pub const EXTENDED_DELAY_MIN: i32 = 9900;
pub const EXTENDED_DELAY_MAX: i32 = 9905;

/// Values librtas reserves for its own failures.
const LIBRTAS_RANGE: std::ops::RangeInclusive<i32> = -1099..=-1001;

/// Coarse classification of the integer returned by a librtas call.
///
/// Firmware statuses and librtas's own failures share one integer space;
/// callers generally need to know which side a value came from before
/// deciding whether to retry, report, or map it to an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallStatus {
    Success,
    HardwareError,
    Busy,
    ParameterError,
    ExtendedDelay { millis: u32 },
    Librtas(LibrtasError),
    Other(i32),
}

impl CallStatus {
    pub fn classify(rc: i32) -> Self {
        match rc {
            SUCCESS => Self::Success,
            HARDWARE_ERROR => Self::HardwareError,
            BUSY => Self::Busy,
            PARAMETER_ERROR => Self::ParameterError,
            EXTENDED_DELAY_MIN..=EXTENDED_DELAY_MAX => Self::ExtendedDelay {
                millis: 10_u32.pow(rc.abs_diff(EXTENDED_DELAY_MIN)),
            },
            _ => match LibrtasError::from_code(rc) {
                Some(err) => Self::Librtas(err),
                None => {
                    tracing::debug!(rc, "unclassified RTAS call status");
                    Self::Other(rc)
                }
            },
        }
    }

    /// The raw value this status was classified from.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => SUCCESS,
            Self::HardwareError => HARDWARE_ERROR,
            Self::Busy => BUSY,
            Self::ParameterError => PARAMETER_ERROR,
            Self::ExtendedDelay { millis } => {
                EXTENDED_DELAY_MIN + millis.checked_ilog10().unwrap_or(0) as i32
            }
            Self::Librtas(err) => err.code(),
            Self::Other(rc) => rc,
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::Success
    }

    /// Busy and extended-delay statuses mean the call should be reissued.
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Busy | Self::ExtendedDelay { .. })
    }

    pub fn librtas_error(self) -> Option<LibrtasError> {
        match self {
            Self::Librtas(err) => Some(err),
            _ => None,
        }
    }
}

impl From<i32> for CallStatus {
    fn from(rc: i32) -> Self {
        Self::classify(rc)
    }
}

impl fmt::Display for CallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::HardwareError => f.write_str("Hardware error"),
            Self::Busy => f.write_str("Busy, try again later"),
            Self::ParameterError => f.write_str("Parameter error"),
            Self::ExtendedDelay { millis } => {
                write!(f, "Extended delay of {millis} ms requested")
            }
            Self::Librtas(err) => fmt::Display::fmt(err, f),
            Self::Other(rc) if LIBRTAS_RANGE.contains(rc) => {
                write!(f, "{UNKNOWN_PREFIX} {rc}")
            }
            Self::Other(rc) => write!(f, "Firmware returned status {rc}"),
        }
    }
}

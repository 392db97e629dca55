use core::fmt;

/// Highscore persistence failures
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Records could not be read from the backing store
    StorageUnavailable { reason: String },
    /// A record could not be written
    WriteFailed { reason: String },
}

impl StoreError {
    pub fn unavailable(reason: impl fmt::Display) -> Self {
        Self::StorageUnavailable {
            reason: reason.to_string(),
        }
    }

    pub fn write_failed(reason: impl fmt::Display) -> Self {
        Self::WriteFailed {
            reason: reason.to_string(),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StorageUnavailable { reason } => {
                write!(f, "highscores unavailable: {reason}")
            }
            Self::WriteFailed { reason } => write!(f, "could not save highscore: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// Player input rejected at the session boundary
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputError {
    NonFiniteAngle,
    InvalidSpeed { mps: f64 },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteAngle => write!(f, "angle must be a number"),
            Self::InvalidSpeed { mps } => {
                write!(f, "speed must be a positive number, got {mps}")
            }
        }
    }
}

impl std::error::Error for InputError {}

use std::fmt;

/// Result type for runscan-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Timer text does not have the `MM.SS.mmm` shape
    InvalidTimer(String),

    /// Clock text does not have the `MM:SS` shape
    InvalidClock(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidTimer(text) => write!(f, "Invalid timer: {:?}", text),
            Error::InvalidClock(text) => write!(f, "Invalid clock (expected MM:SS): {:?}", text),
        }
    }
}

impl std::error::Error for Error {}

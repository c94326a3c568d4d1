//! Error handling for recoverable failures
//!
//! Only configuration problems are recoverable: a parameter set that cannot
//! support the decomposition or ring arithmetic it describes. Mismatched
//! dimensions between samples and keys are programmer errors and panic at the
//! call site instead.

use std::fmt;

/// Engine error
///
/// A plain message-carrying error, stable across feature configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FheError(pub String);

impl fmt::Display for FheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for FheError {}

impl FheError {
    /// Create a new error with the given message
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

/// Result type for fallible engine operations
pub type Result<T> = std::result::Result<T, FheError>;

/// Create an FheError with format string support
macro_rules! fhe_err {
    ($($arg:tt)*) => {
        $crate::error::FheError(format!($($arg)*))
    };
}

pub(crate) use fhe_err;

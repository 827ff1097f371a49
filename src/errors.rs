//! Error types for coordinate construction and computation
//!
//! Two classes of fault exist. [`CoordinateError::InvalidArgument`] is the
//! caller's fault (an out-of-range value or an operand that does not hold its
//! invariants) and can be recovered from. [`CoordinateError::InvalidState`]
//! means a computation produced something it must never produce, such as a
//! NaN distance, and points at a defect in this crate.

use thiserror::Error;

/// Main error type for coordinate operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// A value handed in by the caller violates a coordinate invariant
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// An internal result violates its postcondition
    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl CoordinateError {
    /// True for faults the caller can correct by supplying different input
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, CoordinateError::InvalidArgument(_))
    }

    /// True for faults that indicate a defect in the computation
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, CoordinateError::InvalidState(_))
    }
}

/// Extension of the Result type for coordinate operations
pub type Result<T> = std::result::Result<T, CoordinateError>;

/// Log and build an [`CoordinateError::InvalidArgument`]
pub fn invalid_argument(msg: impl Into<String>) -> CoordinateError {
    let msg = msg.into();
    log::error!("{}", msg);
    CoordinateError::InvalidArgument(msg)
}

/// Log and build an [`CoordinateError::InvalidState`]
pub fn invalid_state(msg: impl Into<String>) -> CoordinateError {
    let msg = msg.into();
    log::error!("{}", msg);
    CoordinateError::InvalidState(msg)
}

/// Check that `value` is a finite real number
///
/// `name` is only used to build the error message.
pub(crate) fn ensure_finite(name: &str, value: f64) -> std::result::Result<(), String> {
    if value.is_nan() {
        Err(format!("{} must be a number, got NaN", name))
    } else if !value.is_finite() {
        Err(format!("{} must be finite, got {}", name, value))
    } else {
        Ok(())
    }
}

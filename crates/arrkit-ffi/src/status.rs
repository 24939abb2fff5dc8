//! C-compatible status codes.
//!
//! [`ArrStatus`] is a `repr(i32)` enum returned by every fallible entry
//! point. Conversions from [`ArrayError`] are provided.

use arrkit_core::ArrayError;

/// C-compatible status code returned by all fallible FFI functions.
///
/// `Ok` = 0, all errors are negative. Values are ABI-stable.
#[repr(i32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArrStatus {
    /// Success.
    Ok = 0,
    /// Count exceeds the buffer capacity.
    InvalidLength = -1,
    /// Kind name not recognised, or operation undefined for the kind.
    UnsupportedKind = -2,
    /// A comparison or generated value left its representable range.
    RangeOverflow = -3,
    /// Declared element width does not match the kind.
    ElementSizeMismatch = -4,
    /// A required pointer is null or misaligned, or an enum discriminator
    /// is out of range.
    InvalidArgument = -5,
    /// Buffer handle or pointer is unknown or was already released.
    InvalidHandle = -6,
    /// Internal error (e.g. poisoned mutex after a prior panic).
    InternalError = -7,
    /// A Rust panic was caught at the FFI boundary.
    Panicked = -128,
}

impl From<&ArrayError> for ArrStatus {
    fn from(e: &ArrayError) -> Self {
        match e {
            ArrayError::InvalidLength { .. } => ArrStatus::InvalidLength,
            ArrayError::UnsupportedKind { .. } => ArrStatus::UnsupportedKind,
            ArrayError::RangeOverflow { .. } => ArrStatus::RangeOverflow,
            ArrayError::ElementSizeMismatch { .. } => ArrStatus::ElementSizeMismatch,
        }
    }
}

impl From<ArrayError> for ArrStatus {
    fn from(e: ArrayError) -> Self {
        ArrStatus::from(&e)
    }
}

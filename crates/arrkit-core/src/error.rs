//! Error types for the arrkit array surface.
//!
//! Every misuse the raw C surface would leave undefined (oversized
//! counts, wrong element widths, unknown kind names, comparator overflow)
//! is reported here as an [`ArrayError`] instead.

use std::error::Error;
use std::fmt;

/// Errors returned by buffer construction, mutation, and ordering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrayError {
    /// The requested element count exceeds the storage capacity
    /// (`ARR_STATUS_INVALID_LENGTH`).
    InvalidLength {
        /// Number of elements the caller asked to operate on.
        requested: usize,
        /// Number of elements the storage actually holds.
        capacity: usize,
    },
    /// The kind name does not match a supported element kind, or the
    /// operation is not defined for the buffer's kind
    /// (`ARR_STATUS_UNSUPPORTED_KIND`).
    UnsupportedKind {
        /// The rejected kind name.
        name: String,
    },
    /// A value fell outside the representable range of its type
    /// (`ARR_STATUS_RANGE_OVERFLOW`).
    RangeOverflow {
        /// Description of the overflowing computation.
        reason: String,
    },
    /// The caller-declared element width does not match the kind
    /// (`ARR_STATUS_ELEMENT_SIZE_MISMATCH`).
    ElementSizeMismatch {
        /// Width in bytes required by the kind.
        expected: usize,
        /// Width in bytes the caller declared.
        actual: usize,
    },
}

impl ArrayError {
    /// Shorthand for an [`ArrayError::InvalidLength`] check.
    ///
    /// Returns `Ok(())` when `requested <= capacity`.
    pub fn check_length(requested: usize, capacity: usize) -> Result<(), Self> {
        if requested > capacity {
            return Err(Self::InvalidLength {
                requested,
                capacity,
            });
        }
        Ok(())
    }
}

impl fmt::Display for ArrayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength {
                requested,
                capacity,
            } => write!(
                f,
                "length {requested} exceeds buffer capacity of {capacity} elements"
            ),
            Self::UnsupportedKind { name } => write!(f, "unsupported element kind '{name}'"),
            Self::RangeOverflow { reason } => write!(f, "range overflow: {reason}"),
            Self::ElementSizeMismatch { expected, actual } => write!(
                f,
                "element size mismatch: kind needs {expected} bytes, got {actual}"
            ),
        }
    }
}

impl Error for ArrayError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn check_length_accepts_exact_capacity() {
        assert_eq!(ArrayError::check_length(4, 4), Ok(()));
        assert_eq!(ArrayError::check_length(0, 0), Ok(()));
    }

    #[test]
    fn check_length_rejects_overrun() {
        assert_eq!(
            ArrayError::check_length(5, 4),
            Err(ArrayError::InvalidLength {
                requested: 5,
                capacity: 4
            })
        );
    }

    #[test]
    fn display_names_the_kind() {
        let e = ArrayError::UnsupportedKind {
            name: "complex128".into(),
        };
        assert_eq!(e.to_string(), "unsupported element kind 'complex128'");
    }
}

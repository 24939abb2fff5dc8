//! Element kinds and single reported element values.

use std::fmt;
use std::str::FromStr;

use crate::error::ArrayError;

/// The primitive element types a buffer may hold.
///
/// Host callers name the kind with the NumPy dtype spelling (`"int32"`,
/// `"float32"`); short aliases are accepted as well.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Signed 32-bit integer.
    Int32,
    /// IEEE-754 single-precision float.
    Float32,
}

impl ElementKind {
    /// Width of one element in bytes.
    pub const fn size(self) -> usize {
        match self {
            Self::Int32 => std::mem::size_of::<i32>(),
            Self::Float32 => std::mem::size_of::<f32>(),
        }
    }

    /// Canonical name, as NumPy spells the dtype.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Int32 => "int32",
            Self::Float32 => "float32",
        }
    }

    /// Parse a kind name, failing with [`ArrayError::UnsupportedKind`].
    pub fn from_name(name: &str) -> Result<Self, ArrayError> {
        match name {
            "int32" | "i32" | "int" => Ok(Self::Int32),
            "float32" | "f32" | "float" => Ok(Self::Float32),
            other => Err(ArrayError::UnsupportedKind {
                name: other.to_string(),
            }),
        }
    }

    /// Check a caller-declared element width against this kind.
    pub fn check_size(self, element_size: usize) -> Result<(), ArrayError> {
        if element_size != self.size() {
            return Err(ArrayError::ElementSizeMismatch {
                expected: self.size(),
                actual: element_size,
            });
        }
        Ok(())
    }
}

impl FromStr for ElementKind {
    type Err = ArrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One element value, tagged with its kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Element {
    /// A 32-bit integer value.
    Int32(i32),
    /// A single-precision float value.
    Float32(f32),
}

impl Element {
    /// Kind of this value.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Int32(_) => ElementKind::Int32,
            Self::Float32(_) => ElementKind::Float32,
        }
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int32(v) => write!(f, "{v}"),
            Self::Float32(v) => write!(f, "{v}"),
        }
    }
}

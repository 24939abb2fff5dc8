//! [`TypedBuffer`]: a flat buffer that carries its own kind and length.

use crate::error::ArrayError;
use crate::kind::{Element, ElementKind};
use crate::mutate;
use crate::order::{self, Comparator};
use crate::report::Reporter;
use crate::sequence;

/// Owned, kind-tagged element storage.
///
/// Kind and length travel with the data, so no operation on a
/// `TypedBuffer` takes an element size or count out of band.
#[derive(Clone, Debug, PartialEq)]
pub enum TypedBuffer {
    /// 32-bit integer elements.
    Int32(Vec<i32>),
    /// Single-precision float elements.
    Float32(Vec<f32>),
}

impl TypedBuffer {
    /// A zero-filled buffer of `len` elements.
    ///
    /// Fails with [`ArrayError::InvalidLength`] when `len` elements cannot
    /// be allocated.
    pub fn zeroed(kind: ElementKind, len: usize) -> Result<Self, ArrayError> {
        Ok(match kind {
            ElementKind::Int32 => {
                let mut v = reserve(len)?;
                v.resize(len, 0);
                Self::Int32(v)
            }
            ElementKind::Float32 => {
                let mut v = reserve(len)?;
                v.resize(len, 0.0);
                Self::Float32(v)
            }
        })
    }

    /// A buffer of `len` elements where element `i` holds `i`.
    ///
    /// Float buffers hold the index converted to `f32`.
    pub fn sequence(kind: ElementKind, len: usize) -> Result<Self, ArrayError> {
        let ints = sequence::generate(len)?;
        Ok(match kind {
            ElementKind::Int32 => Self::Int32(ints),
            ElementKind::Float32 => {
                let mut floats = reserve(len)?;
                floats.extend(ints.into_iter().map(|i| i as f32));
                Self::Float32(floats)
            }
        })
    }

    /// Element kind.
    pub fn kind(&self) -> ElementKind {
        match self {
            Self::Int32(_) => ElementKind::Int32,
            Self::Float32(_) => ElementKind::Float32,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Int32(v) => v.len(),
            Self::Float32(v) => v.len(),
        }
    }

    /// Whether the buffer holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<Element> {
        match self {
            Self::Int32(v) => v.get(index).copied().map(Element::Int32),
            Self::Float32(v) => v.get(index).copied().map(Element::Float32),
        }
    }

    /// Size of the element storage in bytes.
    pub fn byte_len(&self) -> usize {
        self.len() * self.kind().size()
    }

    /// Overwrite every element with its index.
    pub fn fill_sequence(&mut self) -> Result<(), ArrayError> {
        match self {
            Self::Int32(v) => {
                let len = v.len();
                sequence::fill(v, len)
            }
            Self::Float32(v) => {
                if v.len() > sequence::MAX_SEQUENCE_LEN {
                    return Err(ArrayError::RangeOverflow {
                        reason: format!("index {} does not fit in int32", v.len() - 1),
                    });
                }
                for (i, slot) in v.iter_mut().enumerate() {
                    *slot = i as f32;
                }
                Ok(())
            }
        }
    }

    /// Subtract one from every element, reporting each new value.
    pub fn decrement<R: Reporter>(&mut self, mut reporter: R) {
        match self {
            Self::Int32(v) => {
                mutate::decrement_all(v);
                for (i, &x) in v.iter().enumerate() {
                    reporter.report(i, Element::Int32(x));
                }
            }
            Self::Float32(v) => {
                for (i, x) in v.iter_mut().enumerate() {
                    *x -= 1.0;
                    reporter.report(i, Element::Float32(*x));
                }
            }
        }
    }

    /// Sort in place. Only integer buffers have an ordering.
    pub fn sort(&mut self, comparator: Comparator) -> Result<(), ArrayError> {
        match self {
            Self::Int32(v) => order::sort(v, comparator),
            Self::Float32(_) => Err(ArrayError::UnsupportedKind {
                name: ElementKind::Float32.name().to_string(),
            }),
        }
    }

    /// Integer view, if this is an integer buffer.
    pub fn as_i32(&self) -> Option<&[i32]> {
        match self {
            Self::Int32(v) => Some(v),
            Self::Float32(_) => None,
        }
    }

    /// Float view, if this is a float buffer.
    pub fn as_f32(&self) -> Option<&[f32]> {
        match self {
            Self::Float32(v) => Some(v),
            Self::Int32(_) => None,
        }
    }

    /// Raw pointer to the first element, for handing across the C ABI.
    ///
    /// Valid until the buffer is dropped or resized.
    pub fn as_mut_ptr(&mut self) -> *mut u8 {
        match self {
            Self::Int32(v) => v.as_mut_ptr().cast(),
            Self::Float32(v) => v.as_mut_ptr().cast(),
        }
    }
}

/// An empty vector with room for exactly `len` elements of `T`.
///
/// Both a byte size past `isize::MAX` and a failed allocation are
/// reported as [`ArrayError::InvalidLength`], with `capacity` set to the
/// largest element count the address space admits.
pub(crate) fn reserve<T>(len: usize) -> Result<Vec<T>, ArrayError> {
    let width = std::mem::size_of::<T>().max(1);
    let max = isize::MAX as usize / width;
    let invalid = ArrayError::InvalidLength {
        requested: len,
        capacity: max,
    };
    match len.checked_mul(width) {
        Some(bytes) if bytes <= isize::MAX as usize => {}
        _ => return Err(invalid),
    }
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| invalid)?;
    Ok(v)
}

impl From<Vec<i32>> for TypedBuffer {
    fn from(v: Vec<i32>) -> Self {
        Self::Int32(v)
    }
}

impl From<Vec<f32>> for TypedBuffer {
    fn from(v: Vec<f32>) -> Self {
        Self::Float32(v)
    }
}

//! In-place element mutation: decrement and callback update.
//!
//! Two decrement operations exist side by side. [`decrement_all`] works on
//! an `i32` slice and reports nothing. [`decrement_typed`] works on raw
//! bytes described by an element width and an [`ElementKind`], and reports
//! every decremented value to a [`Reporter`].
//!
//! Integer decrement wraps: `i32::MIN - 1 == i32::MAX`.

use crate::error::ArrayError;
use crate::kind::{Element, ElementKind};
use crate::report::Reporter;

/// Subtract one from every element.
pub fn decrement_all(buffer: &mut [i32]) {
    for v in buffer.iter_mut() {
        *v = v.wrapping_sub(1);
    }
}

/// Subtract one from the first `size` elements.
pub fn decrement_prefix(buffer: &mut [i32], size: usize) -> Result<(), ArrayError> {
    ArrayError::check_length(size, buffer.len())?;
    decrement_all(&mut buffer[..size]);
    Ok(())
}

/// Decrement `count` elements stored in `bytes`, reporting each new value.
///
/// Elements are read at offset `i * element_size` in native byte order.
/// Nothing is written or reported unless the width matches `kind` and the
/// byte buffer holds `count` elements.
pub fn decrement_typed<R: Reporter>(
    bytes: &mut [u8],
    count: usize,
    element_size: usize,
    kind: ElementKind,
    mut reporter: R,
) -> Result<(), ArrayError> {
    kind.check_size(element_size)?;
    let capacity = bytes.len() / element_size;
    ArrayError::check_length(count, capacity)?;

    let chunks = bytes[..count * element_size].chunks_exact_mut(element_size);
    for (i, chunk) in chunks.enumerate() {
        let value = match kind {
            ElementKind::Int32 => {
                let v = i32::from_ne_bytes(read4(chunk)).wrapping_sub(1);
                chunk.copy_from_slice(&v.to_ne_bytes());
                Element::Int32(v)
            }
            ElementKind::Float32 => {
                let v = f32::from_ne_bytes(read4(chunk)) - 1.0;
                chunk.copy_from_slice(&v.to_ne_bytes());
                Element::Float32(v)
            }
        };
        reporter.report(i, value);
    }
    Ok(())
}

/// [`decrement_typed`] with the kind given by name.
///
/// An unknown name fails with [`ArrayError::UnsupportedKind`] before the
/// buffer is touched.
pub fn decrement_typed_named<R: Reporter>(
    bytes: &mut [u8],
    count: usize,
    element_size: usize,
    kind_name: &str,
    reporter: R,
) -> Result<(), ArrayError> {
    let kind = ElementKind::from_name(kind_name)?;
    decrement_typed(bytes, count, element_size, kind, reporter)
}

/// Replace every element with `f(element)`.
pub fn update<F>(buffer: &mut [i32], mut f: F)
where
    F: FnMut(i32) -> i32,
{
    for v in buffer.iter_mut() {
        *v = f(*v);
    }
}

fn read4(chunk: &[u8]) -> [u8; 4] {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(chunk);
    raw
}

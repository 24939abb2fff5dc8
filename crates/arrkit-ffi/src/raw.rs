//! Raw pointer to slice conversion at the boundary.
//!
//! A zero-length request never dereferences its pointer, so C callers may
//! pass null together with a zero count.

use std::ffi::{c_char, CStr};

use crate::status::ArrStatus;

/// Borrow `len` elements at `ptr` mutably.
///
/// Rejects null and misaligned pointers when `len > 0`. The caller
/// guarantees `ptr` addresses at least `len` initialised elements that
/// stay valid and unaliased for `'a`.
#[allow(unsafe_code)]
pub(crate) fn slice_mut<'a, T>(ptr: *mut T, len: usize) -> Result<&'a mut [T], ArrStatus> {
    if len == 0 {
        return Ok(&mut []);
    }
    if ptr.is_null() || !ptr.is_aligned() {
        return Err(ArrStatus::InvalidArgument);
    }
    // SAFETY: non-null, aligned; validity of len elements per caller contract.
    Ok(unsafe { std::slice::from_raw_parts_mut(ptr, len) })
}

/// Borrow `len` elements at `ptr` immutably. Same contract as [`slice_mut`].
#[allow(unsafe_code)]
pub(crate) fn slice_ref<'a, T>(ptr: *const T, len: usize) -> Result<&'a [T], ArrStatus> {
    if len == 0 {
        return Ok(&[]);
    }
    if ptr.is_null() || !ptr.is_aligned() {
        return Err(ArrStatus::InvalidArgument);
    }
    // SAFETY: non-null, aligned; validity of len elements per caller contract.
    Ok(unsafe { std::slice::from_raw_parts(ptr, len) })
}

/// Byte view of `count` elements of `element_size` bytes each.
///
/// A byte count that overflows `usize` cannot describe real storage and
/// is reported as [`ArrStatus::InvalidLength`].
pub(crate) fn bytes_mut<'a>(
    ptr: *mut u8,
    count: usize,
    element_size: usize,
) -> Result<&'a mut [u8], ArrStatus> {
    let len = count
        .checked_mul(element_size)
        .ok_or(ArrStatus::InvalidLength)?;
    slice_mut(ptr, len)
}

/// Read a NUL-terminated UTF-8 string.
#[allow(unsafe_code)]
pub(crate) fn str_arg<'a>(ptr: *const c_char) -> Result<&'a str, ArrStatus> {
    if ptr.is_null() {
        return Err(ArrStatus::InvalidArgument);
    }
    // SAFETY: non-null, NUL-terminated per caller contract.
    let cstr = unsafe { CStr::from_ptr(ptr) };
    cstr.to_str().map_err(|_| ArrStatus::UnsupportedKind)
}

/// Reject a null or misaligned out-pointer before anything is produced
/// for it.
pub(crate) fn check_out<T>(out: *mut T) -> Result<(), ArrStatus> {
    if out.is_null() || !out.is_aligned() {
        return Err(ArrStatus::InvalidArgument);
    }
    Ok(())
}

/// Write `value` through an out-pointer.
#[allow(unsafe_code)]
pub(crate) fn write_out<T>(out: *mut T, value: T) -> Result<(), ArrStatus> {
    check_out(out)?;
    // SAFETY: non-null, aligned; writable per caller contract.
    unsafe { out.write(value) };
    Ok(())
}

//! Handle-based typed buffers.
//!
//! The library owns the storage; C holds a `u64` handle. Contents are
//! copied out with [`arr_buffer_read`], so no interior pointer ever
//! outlives the `BUFFERS` lock.

use std::ffi::c_void;
use std::sync::Mutex;

use arrkit_core::TypedBuffer;

use crate::config;
use crate::handle::HandleTable;
use crate::raw::{check_out, slice_mut, slice_ref, write_out};
use crate::status::ArrStatus;
use crate::types::{ArrComparator, ArrKind};

static BUFFERS: Mutex<HandleTable<TypedBuffer>> = Mutex::new(HandleTable::new());

fn publish(buffer: TypedBuffer, out: *mut u64) -> i32 {
    ffi_try!(check_out(out));
    let handle = ffi_lock!(BUFFERS).insert(buffer);
    ffi_try!(write_out(out, handle));
    ArrStatus::Ok as i32
}

/// Create a zero-filled buffer of `len` elements of `kind` (an `ArrKind`).
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_create(kind: i32, len: usize, out: *mut u64) -> i32 {
    ffi_guard!({
        let kind = ffi_try!(ArrKind::from_raw(kind));
        let buffer = ffi_try!(TypedBuffer::zeroed(kind, len));
        publish(buffer, out)
    })
}

/// Create a buffer of `len` elements holding `0..len`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_sequence(kind: i32, len: usize, out: *mut u64) -> i32 {
    ffi_guard!({
        let kind = ffi_try!(ArrKind::from_raw(kind));
        let buffer = ffi_try!(TypedBuffer::sequence(kind, len));
        publish(buffer, out)
    })
}

/// Create an integer buffer by copying `len` values from `data`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_from_i32(data: *const i32, len: usize, out: *mut u64) -> i32 {
    ffi_guard!({
        let values = ffi_try!(slice_ref(data, len));
        publish(TypedBuffer::from(values.to_vec()), out)
    })
}

/// Create a float buffer by copying `len` values from `data`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_from_f32(data: *const f32, len: usize, out: *mut u64) -> i32 {
    ffi_guard!({
        let values = ffi_try!(slice_ref(data, len));
        publish(TypedBuffer::from(values.to_vec()), out)
    })
}

/// Write the element count of `handle` to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_len(handle: u64, out: *mut usize) -> i32 {
    ffi_guard!({
        let len = match ffi_lock!(BUFFERS).get(handle) {
            Some(b) => b.len(),
            None => return ArrStatus::InvalidHandle as i32,
        };
        ffi_try!(write_out(out, len));
        ArrStatus::Ok as i32
    })
}

/// Write the element kind of `handle` (an `ArrKind`) to `out`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_kind(handle: u64, out: *mut i32) -> i32 {
    ffi_guard!({
        let kind = match ffi_lock!(BUFFERS).get(handle) {
            Some(b) => b.kind(),
            None => return ArrStatus::InvalidHandle as i32,
        };
        ffi_try!(write_out(out, ArrKind::to_raw(kind)));
        ArrStatus::Ok as i32
    })
}

/// Copy the contents of `handle` into `out`, which holds `out_bytes` bytes
/// and is aligned for the buffer's element type.
///
/// Fails with `InvalidLength` if `out_bytes` is smaller than the buffer.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_read(handle: u64, out: *mut c_void, out_bytes: usize) -> i32 {
    ffi_guard!({
        let table = ffi_lock!(BUFFERS);
        let Some(buffer) = table.get(handle) else {
            return ArrStatus::InvalidHandle as i32;
        };
        if out_bytes < buffer.byte_len() {
            return ArrStatus::InvalidLength as i32;
        }
        match buffer {
            TypedBuffer::Int32(v) => {
                let dst = ffi_try!(slice_mut(out.cast::<i32>(), v.len()));
                dst.copy_from_slice(v);
            }
            TypedBuffer::Float32(v) => {
                let dst = ffi_try!(slice_mut(out.cast::<f32>(), v.len()));
                dst.copy_from_slice(v);
            }
        }
        ArrStatus::Ok as i32
    })
}

/// Overwrite `handle` with `0..len`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_fill(handle: u64) -> i32 {
    ffi_guard!({
        let mut table = ffi_lock!(BUFFERS);
        let Some(buffer) = table.get_mut(handle) else {
            return ArrStatus::InvalidHandle as i32;
        };
        ffi_try!(buffer.fill_sequence());
        ArrStatus::Ok as i32
    })
}

/// Subtract one from every element of `handle`, reporting each new value
/// to the configured report target.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_decrement(handle: u64) -> i32 {
    ffi_guard!({
        let target = ffi_try!(config::current()).report_target;
        let mut table = ffi_lock!(BUFFERS);
        let Some(buffer) = table.get_mut(handle) else {
            return ArrStatus::InvalidHandle as i32;
        };
        buffer.decrement(target);
        ArrStatus::Ok as i32
    })
}

/// Sort `handle` with `comparator` (an `ArrComparator`), or with the
/// configured comparator when `comparator` is negative.
///
/// Float buffers fail with `UnsupportedKind`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_sort(handle: u64, comparator: i32) -> i32 {
    ffi_guard!({
        let comparator = if comparator < 0 {
            ffi_try!(config::current()).comparator
        } else {
            ffi_try!(ArrComparator::from_raw(comparator))
        };
        let mut table = ffi_lock!(BUFFERS);
        let Some(buffer) = table.get_mut(handle) else {
            return ArrStatus::InvalidHandle as i32;
        };
        ffi_try!(buffer.sort(comparator));
        ArrStatus::Ok as i32
    })
}

/// Destroy `handle`. Destroying it again yields `InvalidHandle`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_buffer_destroy(handle: u64) -> i32 {
    ffi_guard!({
        match ffi_lock!(BUFFERS).remove(handle) {
            Some(_) => ArrStatus::Ok as i32,
            None => ArrStatus::InvalidHandle as i32,
        }
    })
}

//! Scalar round-trip entry points and exported globals.
//!
//! These exist so hosts can check argument marshalling for each primitive
//! width without involving any buffer.

use std::ffi::c_char;
use std::sync::atomic::{AtomicI32, AtomicU64, AtomicU8};

use arrkit_core::sequence;

use crate::raw::write_out;
use crate::status::ArrStatus;

/// Host-visible `int32_t`, initially 5.
#[no_mangle]
#[allow(unsafe_code)]
pub static ARR_A: AtomicI32 = AtomicI32::new(5);

/// Host-visible `double` stored as its bit pattern, initially 5.5.
#[no_mangle]
#[allow(unsafe_code)]
pub static ARR_B: AtomicU64 = AtomicU64::new(5.5f64.to_bits());

/// Host-visible `char`, initially `'X'`.
#[no_mangle]
#[allow(unsafe_code)]
pub static ARR_C: AtomicU8 = AtomicU8::new(b'X');

/// Return `value` unchanged.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_echo_int(value: i32) -> i32 {
    value
}

/// Return `value` unchanged.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_echo_double(value: f64) -> f64 {
    value
}

/// Return `value` unchanged. The string is neither read nor copied.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_echo_str(value: *const c_char) -> *const c_char {
    value
}

/// Accept one argument of each scalar width and return the `char`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_many_args(_a: i32, _b: f64, c: c_char, _d: i16) -> c_char {
    c
}

/// Write the `n`-th Fibonacci number (`fib(0) = 0`) to `out`.
///
/// `n > 93` does not fit in a `u64` and yields `RangeOverflow`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn arr_fibonacci(n: u32, out: *mut u64) -> i32 {
    ffi_guard!({
        let value = ffi_try!(sequence::fibonacci(n));
        ffi_try!(write_out(out, value));
        ArrStatus::Ok as i32
    })
}

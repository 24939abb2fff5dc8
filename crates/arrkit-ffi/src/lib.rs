//! C ABI for the arrkit array surface.
//!
//! Every entry point converts its raw pointer/length arguments into the
//! safe types of `arrkit-core` once, runs the operation, and returns an
//! [`ArrStatus`] code. Panics never cross the boundary: they are caught by
//! `ffi_guard!` and reported as [`ArrStatus::Panicked`].
//!
//! The generated header lives at `include/arrkit.h`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

/// Run an FFI body, converting a panic into `ArrStatus::Panicked`.
///
/// The body is a block evaluating to `i32`; `return` inside it returns
/// from the guarded closure.
macro_rules! ffi_guard {
    ($body:block) => {
        match ::std::panic::catch_unwind(::std::panic::AssertUnwindSafe(|| -> i32 { $body })) {
            Ok(code) => code,
            Err(_) => {
                eprintln!("arrkit: panic caught at FFI boundary");
                $crate::status::ArrStatus::Panicked as i32
            }
        }
    };
}

/// Lock a global mutex or return `ArrStatus::InternalError` from the
/// enclosing (guarded) closure if it is poisoned.
macro_rules! ffi_lock {
    ($mutex:expr) => {
        match $mutex.lock() {
            Ok(guard) => guard,
            Err(_) => {
                eprintln!("arrkit: global table lock poisoned");
                return $crate::status::ArrStatus::InternalError as i32;
            }
        }
    };
}

/// Unwrap a `Result<T, ArrStatus>` or return the status code.
macro_rules! ffi_try {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(status) => return $crate::status::ArrStatus::from(status) as i32,
        }
    };
}

mod array;
mod buffer;
mod config;
mod demo;
mod handle;
mod raw;
mod status;
mod types;

pub use array::{
    arr_fill, arr_free, arr_gen, arr_minus_one, arr_minus_one_typed, arr_sort, arr_sort_with,
    arr_update, arr_with_static, ArrStaticCallback, ArrUpdateCallback,
};
pub use buffer::{
    arr_buffer_create, arr_buffer_decrement, arr_buffer_destroy, arr_buffer_fill,
    arr_buffer_from_f32, arr_buffer_from_i32, arr_buffer_kind, arr_buffer_len, arr_buffer_read,
    arr_buffer_sequence, arr_buffer_sort,
};
pub use config::{
    arr_config_comparator, arr_config_report_target, arr_config_reset, arr_config_set_comparator,
    arr_config_set_report_target,
};
pub use demo::{
    arr_echo_double, arr_echo_int, arr_echo_str, arr_fibonacci, arr_many_args, ARR_A, ARR_B,
    ARR_C,
};
pub use status::ArrStatus;
pub use types::{ArrComparator, ArrKind, ArrReportTarget};

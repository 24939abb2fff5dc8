//! ArrStatus -> Python exception mapping with recovery hints.

use arrkit_core::ArrayError;
use arrkit_ffi::ArrStatus;
use pyo3::exceptions::{PyOverflowError, PyRuntimeError, PyValueError};
use pyo3::{PyErr, PyResult};

/// Check an FFI status code. Returns `Ok(())` on success, raises a typed
/// Python exception with a recovery hint on error.
pub(crate) fn check_status(code: i32) -> PyResult<()> {
    if code == 0 {
        return Ok(());
    }
    Err(status_error(code))
}

/// Raise a core error the way its FFI status code would be raised.
pub(crate) fn array_error(e: ArrayError) -> PyErr {
    status_error(ArrStatus::from(e) as i32)
}

fn status_error(code: i32) -> PyErr {
    let (msg, hint) = error_detail(code);
    let full = format!("arrkit error {code}: {msg}\n  Hint: {hint}");
    match code {
        // Caller passed something the operation cannot accept → ValueError
        -1 | -2 | -4 | -5 => PyValueError::new_err(full),

        // Comparator spread or generated value out of range → OverflowError
        -3 => PyOverflowError::new_err(full),

        // Stale handles, poisoned locks, caught panics → RuntimeError
        _ => PyRuntimeError::new_err(full),
    }
}

/// Returns `(message, recovery_hint)` for each FFI status code.
fn error_detail(code: i32) -> (&'static str, &'static str) {
    match code {
        -1 => (
            "count exceeds buffer length",
            "The requested element count is larger than the array. \
             Pass a count no greater than len(array), or allocate a \
             larger array first.",
        ),
        -2 => (
            "unsupported element kind",
            "Only 'int32' (aliases 'i32', 'int') and 'float32' (aliases \
             'f32', 'float') are supported, and sorting is defined for \
             int32 only. Convert with array.astype(numpy.int32).",
        ),
        -3 => (
            "value range overflow",
            "The difference comparator needs max(array) - min(array) to \
             fit in an int32; use Comparator.Ascending for full-range data. \
             fibonacci() is limited to n <= 93.",
        ),
        -4 => (
            "element size does not match kind",
            "The array's itemsize differs from the kind's width (4 bytes \
             for both int32 and float32). Check array.dtype.",
        ),
        -5 => (
            "invalid argument",
            "A data pointer is misaligned for its element type (for \
             example a numpy.frombuffer view at an odd byte offset), or \
             an enum discriminant is out of range. Copy the array with \
             numpy.array() and use the Comparator / ReportTarget enums.",
        ),
        -6 => (
            "invalid handle (already destroyed?)",
            "The Buffer has been destroyed. Don't call .destroy() and then \
             keep using the object; with a context manager, access is only \
             valid inside the `with` block.",
        ),
        -7 => (
            "internal error",
            "A global lock was poisoned by an earlier panic. Restart the \
             interpreter.",
        ),
        -128 => (
            "panic inside the native library",
            "This is a bug in arrkit. The call had no effect beyond what \
             completed before the panic.",
        ),
        _ => (
            "unknown arrkit error",
            "An unrecognized error code was returned from the FFI layer. \
             This may indicate a version mismatch between the Python \
             bindings and the native library.",
        ),
    }
}

//! NumPy-facing array functions.
//!
//! In-place operations take a writeable, C-contiguous array of any
//! dimensionality and hand its data pointer to the C ABI with the GIL
//! released, treating it as a flat run of `size` elements. Pointers cross
//! into the `detach` closure as `usize` so the closure is `Ungil`.

use std::ffi::{c_int, c_void, CString};

use numpy::npyffi::{NPY_ARRAY_C_CONTIGUOUS, NPY_ARRAY_WRITEABLE};
use numpy::{
    PyArray1, PyArrayDescrMethods, PyArrayDyn, PyArrayMethods, PyReadwriteArrayDyn,
    PyUntypedArray, PyUntypedArrayMethods,
};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use arrkit_ffi::{
    arr_fibonacci, arr_fill, arr_minus_one, arr_minus_one_typed, arr_sort, arr_sort_with,
    arr_with_static,
};

use crate::config::Comparator;
use crate::error::{array_error, check_status};

/// Why an array with these NumPy flags cannot be mutated in place.
fn in_place_problem(flags: c_int) -> Option<&'static str> {
    if flags & NPY_ARRAY_WRITEABLE == 0 {
        Some("array is read-only")
    } else if flags & NPY_ARRAY_C_CONTIGUOUS == 0 {
        Some("array must be C-contiguous")
    } else {
        None
    }
}

#[allow(unsafe_code)]
fn require_in_place(array: &Bound<'_, PyUntypedArray>) -> PyResult<()> {
    // SAFETY: as_array_ptr points at the live PyArrayObject behind `array`.
    let flags = unsafe { (*array.as_array_ptr()).flags };
    match in_place_problem(flags) {
        Some(msg) => Err(PyValueError::new_err(msg)),
        None => Ok(()),
    }
}

/// Borrow an int32 array for writing, whatever its shape.
fn int_data<'py>(
    array: &Bound<'py, PyArrayDyn<i32>>,
) -> PyResult<(PyReadwriteArrayDyn<'py, i32>, usize, usize)> {
    require_in_place(array.as_untyped())?;
    let mut guard = array
        .try_readwrite()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let values = guard
        .as_slice_mut()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))?;
    let (addr, len) = (values.as_mut_ptr() as usize, values.len());
    Ok((guard, addr, len))
}

/// A new int32 array holding `0..size`.
///
/// The generated storage becomes the array's buffer without a copy.
///
/// Raises:
///     OverflowError: `size` exceeds 2**31.
///     ValueError: `size` elements cannot be allocated.
#[pyfunction]
pub(crate) fn generate<'py>(py: Python<'py>, size: usize) -> PyResult<Bound<'py, PyArray1<i32>>> {
    let values = py
        .detach(|| arrkit_core::sequence::generate(size))
        .map_err(array_error)?;
    Ok(PyArray1::from_vec(py, values))
}

extern "C" fn copy_static(data: *mut i32, len: usize, user_data: *mut c_void) {
    #[allow(unsafe_code)]
    // SAFETY: arr_with_static passes len valid elements; user_data is the
    // Vec<i32> owned by static_buffer below.
    unsafe {
        let sink = &mut *user_data.cast::<Vec<i32>>();
        sink.extend_from_slice(std::slice::from_raw_parts(data, len));
    }
}

/// A copy of the shared 10-element buffer, freshly reset to `0..10`.
#[pyfunction]
pub(crate) fn static_buffer<'py>(py: Python<'py>) -> PyResult<Bound<'py, PyArray1<i32>>> {
    let mut values: Vec<i32> = Vec::new();
    let user = &mut values as *mut Vec<i32> as usize;
    let status = py.detach(|| arr_with_static(Some(copy_static), user as *mut c_void));
    check_status(status)?;
    Ok(PyArray1::from_vec(py, values))
}

/// Overwrite the first `count` elements with `0..count`.
#[pyfunction]
pub(crate) fn fill(
    py: Python<'_>,
    array: &Bound<'_, PyArrayDyn<i32>>,
    count: usize,
) -> PyResult<()> {
    let (_guard, addr, len) = int_data(array)?;
    check_status(py.detach(|| arr_fill(addr as *mut i32, len, count)))
}

/// Subtract one from every element of an int32 array (wrapping).
#[pyfunction]
pub(crate) fn decrement_all(
    py: Python<'_>,
    array: &Bound<'_, PyArrayDyn<i32>>,
) -> PyResult<()> {
    let (_guard, addr, len) = int_data(array)?;
    check_status(py.detach(|| arr_minus_one(addr as *mut i32, len)))
}

/// Subtract one from every element, interpreting the array as `kind`
/// (`"int32"` or `"float32"`), and report each new value to the
/// configured target.
///
/// Raises:
///     ValueError: unknown kind, the array's itemsize does not match, or the
///         array is read-only.
#[pyfunction]
#[allow(unsafe_code)]
pub(crate) fn decrement_typed(
    py: Python<'_>,
    array: &Bound<'_, PyUntypedArray>,
    kind: &str,
) -> PyResult<()> {
    require_in_place(array)?;
    let name = CString::new(kind).map_err(|_| PyValueError::new_err("kind contains NUL"))?;
    let element_size = array.dtype().itemsize();
    let count = array.len();
    let addr = unsafe { (*array.as_array_ptr()).data } as usize;
    let status = py.detach(|| {
        arr_minus_one_typed(addr as *mut c_void, count, element_size, name.as_ptr())
    });
    check_status(status)
}

/// Sort an int32 array in place.
///
/// Without `comparator` the configured one is used (`Difference` unless
/// changed with `set_comparator`).
///
/// Raises:
///     OverflowError: `Difference` on an array whose spread exceeds int32.
#[pyfunction]
#[pyo3(signature = (array, comparator=None))]
pub(crate) fn sort(
    py: Python<'_>,
    array: &Bound<'_, PyArrayDyn<i32>>,
    comparator: Option<Comparator>,
) -> PyResult<()> {
    let (_guard, addr, len) = int_data(array)?;
    let status = py.detach(|| {
        let data = addr as *mut c_void;
        match comparator {
            Some(c) => arr_sort_with(data, len, 4, c as i32),
            None => arr_sort(data, len, 4),
        }
    });
    check_status(status)
}

/// Replace each element with `func(element)`.
///
/// Runs with the GIL held. If `func` raises or returns something that is
/// not an int32, the remaining elements keep their values and the error
/// propagates.
#[pyfunction]
pub(crate) fn update(
    array: &Bound<'_, PyArrayDyn<i32>>,
    func: &Bound<'_, PyAny>,
) -> PyResult<()> {
    require_in_place(array.as_untyped())?;
    let mut guard = array
        .try_readwrite()
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    let values = guard
        .as_slice_mut()
        .map_err(|_| PyValueError::new_err("array must be C-contiguous"))?;
    let mut failure: Option<PyErr> = None;
    arrkit_core::update(values, |v| {
        if failure.is_some() {
            return v;
        }
        match func.call1((v,)).and_then(|r| r.extract::<i32>()) {
            Ok(next) => next,
            Err(e) => {
                failure = Some(e);
                v
            }
        }
    });
    match failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// The `n`-th Fibonacci number (`fibonacci(0) == 0`).
///
/// Raises:
///     OverflowError: `n > 93`.
#[pyfunction]
pub(crate) fn fibonacci(py: Python<'_>, n: u32) -> PyResult<u64> {
    let (status, value) = py.detach(|| {
        let mut out = 0u64;
        let s = arr_fibonacci(n, &mut out);
        (s, out)
    });
    check_status(status)?;
    Ok(value)
}

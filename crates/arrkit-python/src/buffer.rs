//! PyBuffer: a library-owned typed buffer behind an FFI handle.

use numpy::{PyArray1, PyArrayMethods, PyUntypedArrayMethods};
use pyo3::exceptions::{PyRuntimeError, PyTypeError};
use pyo3::prelude::*;

use arrkit_ffi::{
    arr_buffer_create, arr_buffer_decrement, arr_buffer_destroy, arr_buffer_fill,
    arr_buffer_from_f32, arr_buffer_from_i32, arr_buffer_kind, arr_buffer_len, arr_buffer_read,
    arr_buffer_sequence, arr_buffer_sort,
};

use crate::config::{unknown_discriminant, Comparator, Kind};
use crate::error::check_status;

/// A typed buffer owned by the native library.
///
/// Contents never alias Python memory: `from_array` copies in and
/// `to_numpy` copies out. Use as a context manager or call `destroy()` to
/// release it deterministically.
#[pyclass]
pub(crate) struct Buffer {
    handle: Option<u64>,
}

#[pymethods]
impl Buffer {
    /// Create a zero-filled buffer of `len` elements.
    #[new]
    fn new(py: Python<'_>, kind: Kind, len: usize) -> PyResult<Self> {
        let raw = kind as i32;
        let (status, h) = py.detach(|| {
            let mut h = 0u64;
            let s = arr_buffer_create(raw, len, &mut h);
            (s, h)
        });
        check_status(status)?;
        Ok(Buffer { handle: Some(h) })
    }

    /// Create a buffer holding `0..len`.
    #[staticmethod]
    fn sequence(py: Python<'_>, kind: Kind, len: usize) -> PyResult<Self> {
        let raw = kind as i32;
        let (status, h) = py.detach(|| {
            let mut h = 0u64;
            let s = arr_buffer_sequence(raw, len, &mut h);
            (s, h)
        });
        check_status(status)?;
        Ok(Buffer { handle: Some(h) })
    }

    /// Create a buffer by copying a 1-D int32 or float32 numpy array.
    #[staticmethod]
    fn from_array(py: Python<'_>, array: &Bound<'_, PyAny>) -> PyResult<Self> {
        let (status, h) = if let Ok(ints) = array.cast::<PyArray1<i32>>() {
            let values = ints.to_vec()?;
            py.detach(|| {
                let mut h = 0u64;
                let s = arr_buffer_from_i32(values.as_ptr(), values.len(), &mut h);
                (s, h)
            })
        } else if let Ok(floats) = array.cast::<PyArray1<f32>>() {
            let values = floats.to_vec()?;
            py.detach(|| {
                let mut h = 0u64;
                let s = arr_buffer_from_f32(values.as_ptr(), values.len(), &mut h);
                (s, h)
            })
        } else {
            return Err(PyTypeError::new_err(
                "expected a 1-D numpy array of int32 or float32",
            ));
        };
        check_status(status)?;
        Ok(Buffer { handle: Some(h) })
    }

    fn __len__(&self, py: Python<'_>) -> PyResult<usize> {
        let h = self.require_handle()?;
        let (status, len) = py.detach(|| {
            let mut len = 0usize;
            let s = arr_buffer_len(h, &mut len);
            (s, len)
        });
        check_status(status)?;
        Ok(len)
    }

    /// Element kind.
    #[getter]
    fn kind(&self, py: Python<'_>) -> PyResult<Kind> {
        let h = self.require_handle()?;
        let (status, raw) = py.detach(|| {
            let mut raw = -1;
            let s = arr_buffer_kind(h, &mut raw);
            (s, raw)
        });
        check_status(status)?;
        Kind::from_raw(raw).ok_or_else(|| unknown_discriminant("kind", raw))
    }

    /// Copy the contents into a new numpy array of the buffer's kind.
    #[allow(unsafe_code)]
    fn to_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyAny>> {
        let len = self.__len__(py)?;
        let h = self.require_handle()?;
        match self.kind(py)? {
            Kind::Int32 => {
                let out = PyArray1::<i32>::zeros(py, len, false);
                let addr = unsafe { out.as_array_mut().as_mut_ptr() } as usize;
                let bytes = out.len() * 4;
                check_status(py.detach(|| arr_buffer_read(h, addr as *mut _, bytes)))?;
                Ok(out.into_any())
            }
            Kind::Float32 => {
                let out = PyArray1::<f32>::zeros(py, len, false);
                let addr = unsafe { out.as_array_mut().as_mut_ptr() } as usize;
                let bytes = out.len() * 4;
                check_status(py.detach(|| arr_buffer_read(h, addr as *mut _, bytes)))?;
                Ok(out.into_any())
            }
        }
    }

    /// Overwrite the contents with `0..len`.
    fn fill(&self, py: Python<'_>) -> PyResult<()> {
        let h = self.require_handle()?;
        check_status(py.detach(|| arr_buffer_fill(h)))
    }

    /// Subtract one from every element, reporting to the configured target.
    fn decrement(&self, py: Python<'_>) -> PyResult<()> {
        let h = self.require_handle()?;
        check_status(py.detach(|| arr_buffer_decrement(h)))
    }

    /// Sort in place; without `comparator` the configured one is used.
    ///
    /// Raises:
    ///     ValueError: on a float32 buffer.
    #[pyo3(signature = (comparator=None))]
    fn sort(&self, py: Python<'_>, comparator: Option<Comparator>) -> PyResult<()> {
        let h = self.require_handle()?;
        let raw = comparator.map_or(-1, |c| c as i32);
        check_status(py.detach(|| arr_buffer_sort(h, raw)))
    }

    /// Explicitly release the native buffer.
    fn destroy(&mut self, py: Python<'_>) {
        self.do_destroy(py);
    }

    fn __enter__(slf: PyRef<'_, Self>) -> PyRef<'_, Self> {
        slf
    }

    #[pyo3(signature = (_exc_type=None, _exc_val=None, _exc_tb=None))]
    fn __exit__(
        &mut self,
        py: Python<'_>,
        _exc_type: Option<&Bound<'_, PyAny>>,
        _exc_val: Option<&Bound<'_, PyAny>>,
        _exc_tb: Option<&Bound<'_, PyAny>>,
    ) {
        self.do_destroy(py);
    }
}

impl Buffer {
    fn require_handle(&self) -> PyResult<u64> {
        self.handle
            .ok_or_else(|| PyRuntimeError::new_err("Buffer already destroyed"))
    }

    fn do_destroy(&mut self, py: Python<'_>) {
        if let Some(h) = self.handle.take() {
            // Release GIL: arr_buffer_destroy locks BUFFERS.
            py.detach(|| arr_buffer_destroy(h));
        }
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if let Some(h) = self.handle.take() {
            Python::attach(|py| {
                py.detach(|| arr_buffer_destroy(h));
            });
        }
    }
}

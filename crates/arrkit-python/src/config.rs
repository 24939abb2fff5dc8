//! Enums shared with the C ABI and the process-wide settings.

use pyo3::prelude::*;

use arrkit_ffi::{
    arr_config_comparator, arr_config_report_target, arr_config_reset, arr_config_set_comparator,
    arr_config_set_report_target,
};

use crate::error::check_status;

/// Element kind of a `Buffer`.
#[pyclass(eq, eq_int, from_py_object)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Kind {
    /// Signed 32-bit integer.
    Int32 = 0,
    /// Single-precision float.
    Float32 = 1,
}

#[pymethods]
impl Kind {
    /// Integer discriminant, compatible with Python enum `.value`.
    #[getter]
    fn value(&self) -> i32 {
        *self as i32
    }
}

impl Kind {
    pub(crate) fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            0 => Some(Self::Int32),
            1 => Some(Self::Float32),
            _ => None,
        }
    }
}

/// Ordering used by `sort`.
#[pyclass(eq, eq_int, from_py_object)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Comparator {
    /// Arithmetic difference; rejects arrays whose spread overflows int32.
    Difference = 0,
    /// Ascending total order.
    Ascending = 1,
    /// Descending total order.
    Descending = 2,
}

#[pymethods]
impl Comparator {
    /// Integer discriminant, compatible with Python enum `.value`.
    #[getter]
    fn value(&self) -> i32 {
        *self as i32
    }
}

/// Where `decrement_typed` reports each new value.
#[pyclass(eq, eq_int, from_py_object)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ReportTarget {
    /// One value per line on stdout.
    Stdout = 0,
    /// One value per line on stderr.
    Stderr = 1,
    /// Discard.
    Silent = 2,
}

#[pymethods]
impl ReportTarget {
    /// Integer discriminant, compatible with Python enum `.value`.
    #[getter]
    fn value(&self) -> i32 {
        *self as i32
    }
}

/// Set the comparator used when `sort` is called without one.
#[pyfunction]
pub(crate) fn set_comparator(py: Python<'_>, comparator: Comparator) -> PyResult<()> {
    let raw = comparator as i32;
    check_status(py.detach(|| arr_config_set_comparator(raw)))
}

/// Set where typed-decrement values are reported.
#[pyfunction]
pub(crate) fn set_report_target(py: Python<'_>, target: ReportTarget) -> PyResult<()> {
    let raw = target as i32;
    check_status(py.detach(|| arr_config_set_report_target(raw)))
}

/// Restore the default settings.
#[pyfunction]
pub(crate) fn reset_config(py: Python<'_>) -> PyResult<()> {
    check_status(py.detach(|| arr_config_reset()))
}

/// The current `(comparator, report_target)`.
#[pyfunction]
pub(crate) fn current_config(py: Python<'_>) -> PyResult<(Comparator, ReportTarget)> {
    let (s1, comparator, s2, target) = py.detach(|| {
        let mut c = -1;
        let mut t = -1;
        let s1 = arr_config_comparator(&mut c);
        let s2 = arr_config_report_target(&mut t);
        (s1, c, s2, t)
    });
    check_status(s1)?;
    check_status(s2)?;
    let comparator = match comparator {
        0 => Comparator::Difference,
        1 => Comparator::Ascending,
        2 => Comparator::Descending,
        other => return Err(unknown_discriminant("comparator", other)),
    };
    let target = match target {
        0 => ReportTarget::Stdout,
        1 => ReportTarget::Stderr,
        2 => ReportTarget::Silent,
        other => return Err(unknown_discriminant("report target", other)),
    };
    Ok((comparator, target))
}

pub(crate) fn unknown_discriminant(what: &str, raw: i32) -> PyErr {
    pyo3::exceptions::PyRuntimeError::new_err(format!(
        "native library returned unknown {what} {raw}"
    ))
}

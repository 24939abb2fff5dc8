//! Python bindings for the arrkit array surface.
//!
//! This crate provides PyO3 bindings wrapping the C FFI layer
//! (`arrkit-ffi`). The native extension is named `_arrkit`; arrays are
//! exchanged as NumPy arrays.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![allow(unsafe_code)]

use pyo3::prelude::*;

mod array;
mod buffer;
mod config;
mod error;

/// The native `_arrkit` extension module.
#[pymodule]
fn _arrkit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Enums
    m.add_class::<config::Kind>()?;
    m.add_class::<config::Comparator>()?;
    m.add_class::<config::ReportTarget>()?;

    // Classes
    m.add_class::<buffer::Buffer>()?;

    // Array functions
    m.add_function(wrap_pyfunction!(array::generate, m)?)?;
    m.add_function(wrap_pyfunction!(array::static_buffer, m)?)?;
    m.add_function(wrap_pyfunction!(array::fill, m)?)?;
    m.add_function(wrap_pyfunction!(array::decrement_all, m)?)?;
    m.add_function(wrap_pyfunction!(array::decrement_typed, m)?)?;
    m.add_function(wrap_pyfunction!(array::sort, m)?)?;
    m.add_function(wrap_pyfunction!(array::update, m)?)?;
    m.add_function(wrap_pyfunction!(array::fibonacci, m)?)?;

    // Settings
    m.add_function(wrap_pyfunction!(config::set_comparator, m)?)?;
    m.add_function(wrap_pyfunction!(config::set_report_target, m)?)?;
    m.add_function(wrap_pyfunction!(config::reset_config, m)?)?;
    m.add_function(wrap_pyfunction!(config::current_config, m)?)?;

    Ok(())
}

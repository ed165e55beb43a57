//! bytelens-python
//!
//! Python bindings for bytelens-core (PyO3), loaded by the host tool's
//! scripting layer.

use pyo3::prelude::*;

mod ffi;

/// Python module entry point
#[pymodule]
fn bytelens(py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(py, m)?;
    Ok(())
}

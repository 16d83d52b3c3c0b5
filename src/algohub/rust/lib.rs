//! Python bindings to algohub_core.
//!
//! The web layer calls these functions with plain Python callables, they hold no
//! numerical logic of their own.
use pyo3::prelude::*;

pub mod callable;
pub mod quadrature;
pub mod roots;

/// Python module definition
#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<roots::PyRootEstimate>()?;

    m.add_function(wrap_pyfunction!(roots::find_root_py, m)?)?;
    m.add_function(wrap_pyfunction!(roots::bisect_py, m)?)?;

    m.add_function(wrap_pyfunction!(quadrature::integrate_py, m)?)?;
    m.add_function(wrap_pyfunction!(quadrature::trapezoidal_py, m)?)?;
    m.add_function(wrap_pyfunction!(quadrature::rectangular_py, m)?)?;

    Ok(())
}

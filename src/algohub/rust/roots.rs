//! Root finding
use algohub_core::roots::{
    BisectionConfig, DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE, RootEstimate, bisect,
};
use pyo3::prelude::*;

use crate::callable::PyScalarFn;

/// Outcome of a bisection search.
///
/// Attributes
/// ----------
/// root :
///     Reported root, rounded to 3 decimals unless an exact root was hit.
/// midpoint :
///     Unrounded midpoint of the final bracket.
/// lower :
///     Lower end of the final bracket.
/// upper :
///     Upper end of the final bracket.
/// iterations :
///     Number of halvings performed.
/// termination :
///     One of ``"exact_root"``, ``"tolerance"``, or ``"iteration_limit"``.
#[pyclass(frozen, module = "algohub", name = "RootEstimate")]
#[derive(Clone, Debug)]
pub struct PyRootEstimate(pub RootEstimate<f64>);

#[pymethods]
impl PyRootEstimate {
    /// Reported root.
    #[getter]
    pub fn root(&self) -> f64 {
        self.0.root
    }

    /// Unrounded midpoint of the final bracket.
    #[getter]
    pub fn midpoint(&self) -> f64 {
        self.0.midpoint
    }

    /// Lower end of the final bracket.
    #[getter]
    pub fn lower(&self) -> f64 {
        self.0.lower
    }

    /// Upper end of the final bracket.
    #[getter]
    pub fn upper(&self) -> f64 {
        self.0.upper
    }

    /// Number of halvings performed.
    #[getter]
    pub fn iterations(&self) -> usize {
        self.0.iterations
    }

    /// Why the search stopped.
    #[getter]
    pub fn termination(&self) -> &'static str {
        self.0.termination.as_str()
    }

    fn __repr__(&self) -> String {
        format!(
            "RootEstimate(root={}, lower={}, upper={}, iterations={}, termination='{}')",
            self.0.root,
            self.0.lower,
            self.0.upper,
            self.0.iterations,
            self.0.termination.as_str()
        )
    }
}

/// Find a root of a function using the bisection method.
///
/// The result is rounded to 3 decimal places, unless a midpoint evaluates to
/// exactly zero.
///
/// Parameters
/// ----------
/// func :
///     Function of a single float, ``func(a)`` and ``func(b)`` must differ in sign.
/// a :
///     One end of the interval.
/// b :
///     Other end of the interval, may be less than ``a``.
/// tolerance :
///     Stop once half the interval width is at or below this value.
/// max_iterations :
///     Maximum number of halvings, must not be negative.
///
/// Raises
/// ------
/// ValueError
///     If the interval does not bracket a root, the tolerance is invalid, or
///     ``max_iterations`` is negative.
#[pyfunction]
#[pyo3(name = "find_root", signature = (func, a, b, tolerance=DEFAULT_TOLERANCE, max_iterations=DEFAULT_MAX_ITERATIONS as i64))]
pub fn find_root_py(
    func: &Bound<'_, PyAny>,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: i64,
) -> PyResult<f64> {
    bisect_py(func, a, b, tolerance, max_iterations).map(|estimate| estimate.0.root)
}

/// Bisection search returning the final bracket alongside the root.
///
/// Parameters are the same as :py:func:`find_root`.
#[pyfunction]
#[pyo3(name = "bisect", signature = (func, a, b, tolerance=DEFAULT_TOLERANCE, max_iterations=DEFAULT_MAX_ITERATIONS as i64))]
pub fn bisect_py(
    func: &Bound<'_, PyAny>,
    a: f64,
    b: f64,
    tolerance: f64,
    max_iterations: i64,
) -> PyResult<PyRootEstimate> {
    let config = BisectionConfig::from_signed(tolerance, max_iterations)?;
    let f = PyScalarFn::new(func);
    let result = bisect(|x| f.eval(x), a, b, &config);
    f.finish(result).map(PyRootEstimate)
}

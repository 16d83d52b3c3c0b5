//! Numeric integration
use algohub_core::errors::NumericError;
use algohub_core::quadrature::{
    Integration, Quadrature, RectangularIntegration, TrapezoidalIntegration,
};
use pyo3::prelude::*;

use crate::callable::PyScalarFn;

/// Run a rule over a Python callable, rejecting negative panel counts.
fn integrate_with<I: Integration>(
    rule: &I,
    func: &Bound<'_, PyAny>,
    a: f64,
    b: f64,
    n: i64,
) -> PyResult<f64> {
    let n = usize::try_from(n).map_err(|_| NumericError::InvalidSubdivision)?;
    let f = PyScalarFn::new(func);
    let result = rule.calculate(|x| f.eval(x), a, b, n);
    f.finish(result)
}

/// Estimate a definite integral using a named rule.
///
/// Parameters
/// ----------
/// func :
///     Function of a single float to integrate.
/// a :
///     Lower limit of integration.
/// b :
///     Upper limit of integration.
/// n :
///     Number of equal-width panels, at least 1.
/// method :
///     ``"trapezoidal"`` (default) or ``"rectangular"``, ``"midpoint"`` is accepted
///     as an alias of the latter.
///
/// Raises
/// ------
/// ValueError
///     If ``n`` is less than 1 or the method is not recognised.
#[pyfunction]
#[pyo3(name = "integrate", signature = (func, a, b, n, method="trapezoidal"))]
pub fn integrate_py(
    func: &Bound<'_, PyAny>,
    a: f64,
    b: f64,
    n: i64,
    method: &str,
) -> PyResult<f64> {
    let rule: Quadrature = method.parse()?;
    integrate_with(&rule, func, a, b, n)
}

/// Estimate a definite integral with the composite trapezoidal rule.
///
/// Parameters
/// ----------
/// func :
///     Function of a single float to integrate.
/// a :
///     Lower limit of integration.
/// b :
///     Upper limit of integration.
/// n :
///     Number of trapezoids, at least 1.
#[pyfunction]
#[pyo3(name = "trapezoidal")]
pub fn trapezoidal_py(func: &Bound<'_, PyAny>, a: f64, b: f64, n: i64) -> PyResult<f64> {
    integrate_with(&TrapezoidalIntegration, func, a, b, n)
}

/// Estimate a definite integral with the composite midpoint rule.
///
/// Parameters
/// ----------
/// func :
///     Function of a single float to integrate.
/// a :
///     Lower limit of integration.
/// b :
///     Upper limit of integration.
/// n :
///     Number of rectangles, at least 1.
#[pyfunction]
#[pyo3(name = "rectangular")]
pub fn rectangular_py(func: &Bound<'_, PyAny>, a: f64, b: f64, n: i64) -> PyResult<f64> {
    integrate_with(&RectangularIntegration, func, a, b, n)
}

//! Adapting Python callables to the scalar functions the core expects.
use std::cell::RefCell;

use algohub_core::errors::NumericResult;
use pyo3::prelude::*;

/// A Python callable used as `f64 -> f64`.
///
/// The core routines take infallible functions, so the first exception raised by
/// the callable is held here and evaluation returns NaN from then on. The held
/// exception takes priority over the core's own result in [`PyScalarFn::finish`].
#[derive(Debug)]
pub struct PyScalarFn<'a, 'py> {
    func: &'a Bound<'py, PyAny>,
    error: RefCell<Option<PyErr>>,
}

impl<'a, 'py> PyScalarFn<'a, 'py> {
    /// Wrap a Python callable.
    pub fn new(func: &'a Bound<'py, PyAny>) -> Self {
        Self {
            func,
            error: RefCell::new(None),
        }
    }

    /// Call the function, NaN if it raised now or on any earlier call.
    pub fn eval(&self, x: f64) -> f64 {
        if self.error.borrow().is_some() {
            return f64::NAN;
        }
        match self.func.call1((x,)).and_then(|v| v.extract::<f64>()) {
            Ok(v) => v,
            Err(err) => {
                *self.error.borrow_mut() = Some(err);
                f64::NAN
            }
        }
    }

    /// Combine the core's result with any exception raised by the callable.
    pub fn finish<T>(self, result: NumericResult<T>) -> PyResult<T> {
        if let Some(err) = self.error.into_inner() {
            return Err(err);
        }
        Ok(result?)
    }
}

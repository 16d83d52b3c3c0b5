//! # Errors
//!
//! Every failure in this crate is a caller-correctable precondition violation.
// BSD 3-Clause License
//
// Copyright (c) 2026, Dar Dahlen
//
// Redistribution and use in source and binary forms, with or without
// modification, are permitted provided that the following conditions are met:
//
// 1. Redistributions of source code must retain the above copyright notice, this
//    list of conditions and the following disclaimer.
//
// 2. Redistributions in binary form must reproduce the above copyright notice,
//    this list of conditions and the following disclaimer in the documentation
//    and/or other materials provided with the distribution.
//
// 3. Neither the name of the copyright holder nor the names of its
//    contributors may be used to endorse or promote products derived from
//    this software without specific prior written permission.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
// AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
// IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
// DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
// FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
// DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
// SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
// CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
// OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use thiserror::Error;

/// Error type for all numerical routines in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum NumericError {
    /// The function does not change sign over the interval, so bisection has no
    /// guarantee of containing a root.
    #[error("Interval does not bracket a root, f(a) and f(b) have the same sign.")]
    InvalidBracket,

    /// Integration was requested with zero (or negative) subdivisions.
    #[error("Number of subdivisions must be at least 1.")]
    InvalidSubdivision,

    /// Convergence tolerance was negative, NaN, or infinite.
    #[error("Tolerance must be a finite non-negative number.")]
    InvalidTolerance,

    /// Iteration limit was negative.
    #[error("Maximum number of iterations must not be negative.")]
    InvalidMaxIterations,

    /// No quadrature rule is known by the given name.
    #[error("Unknown quadrature rule: '{0}'.")]
    UnknownQuadrature(String),
}

/// Result type for the numerical routines.
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(feature = "pyo3")]
impl From<NumericError> for pyo3::PyErr {
    fn from(err: NumericError) -> Self {
        pyo3::exceptions::PyValueError::new_err(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::NumericError;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            NumericError::InvalidBracket.to_string(),
            "Interval does not bracket a root, f(a) and f(b) have the same sign."
        );
        assert_eq!(
            NumericError::InvalidMaxIterations.to_string(),
            "Maximum number of iterations must not be negative."
        );
        assert_eq!(
            NumericError::UnknownQuadrature("simpson".into()).to_string(),
            "Unknown quadrature rule: 'simpson'."
        );
    }
}

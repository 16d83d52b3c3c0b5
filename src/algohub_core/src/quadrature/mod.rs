//! # Quadrature
//! Composite rules estimating definite integrals from equal-width panels.
//!
//! Every rule implements [`Integration`]. A new rule is added by implementing the
//! trait on a new type, code written against the trait picks it up unchanged.
//!
//! [`Quadrature`] names the built-in rules, so callers which receive the rule as
//! text (a query parameter, a config file) can select one at runtime.
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

mod rectangular;
mod trapezoidal;

pub use self::rectangular::RectangularIntegration;
pub use self::trapezoidal::TrapezoidalIntegration;

use std::fmt::Display;
use std::str::FromStr;

use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::errors::{NumericError, NumericResult};

/// Estimate the definite integral of a scalar function from `n` equal subdivisions.
pub trait Integration {
    /// Estimate the integral of `func` from `a` to `b` using `n` panels.
    ///
    /// If `b < a` the panel width is negative and the estimate carries the sign of
    /// the reversed integral.
    ///
    /// # Errors
    /// [`NumericError::InvalidSubdivision`] if `n` is zero, no evaluation of `func`
    /// happens in that case.
    fn calculate<T, F>(&self, func: F, a: T, b: T, n: usize) -> NumericResult<T>
    where
        T: Float,
        F: Fn(T) -> T;
}

/// Width of each of `n` equal panels spanning `a` to `b`.
pub(crate) fn panel_width<T: Float>(a: T, b: T, n: usize) -> NumericResult<T> {
    if n == 0 {
        Err(NumericError::InvalidSubdivision)?;
    }
    let n = T::from(n).ok_or(NumericError::InvalidSubdivision)?;
    Ok((b - a) / n)
}

/// Built-in quadrature rules, selectable by name.
///
/// ```
///     use algohub_core::quadrature::{Integration, Quadrature};
///     let rule: Quadrature = "midpoint".parse().unwrap();
///     assert_eq!(rule, Quadrature::Rectangular);
///
///     let area = rule.calculate(|x: f64| 2.0 * x + 1.0, 0.0, 4.0, 8).unwrap();
///     assert!((area - 20.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quadrature {
    /// Composite trapezoidal rule, see [`TrapezoidalIntegration`].
    #[default]
    #[serde(alias = "trapezoid")]
    Trapezoidal,

    /// Composite midpoint rule, see [`RectangularIntegration`].
    #[serde(alias = "rectangle", alias = "midpoint")]
    Rectangular,
}

impl Quadrature {
    /// Canonical lowercase name of the rule.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Trapezoidal => "trapezoidal",
            Self::Rectangular => "rectangular",
        }
    }
}

impl Integration for Quadrature {
    fn calculate<T, F>(&self, func: F, a: T, b: T, n: usize) -> NumericResult<T>
    where
        T: Float,
        F: Fn(T) -> T,
    {
        match self {
            Self::Trapezoidal => TrapezoidalIntegration.calculate(func, a, b, n),
            Self::Rectangular => RectangularIntegration.calculate(func, a, b, n),
        }
    }
}

impl FromStr for Quadrature {
    type Err = NumericError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trapezoidal" | "trapezoid" => Ok(Self::Trapezoidal),
            "rectangular" | "rectangle" | "midpoint" => Ok(Self::Rectangular),
            _ => Err(NumericError::UnknownQuadrature(s.to_string())),
        }
    }
}

impl Display for Quadrature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

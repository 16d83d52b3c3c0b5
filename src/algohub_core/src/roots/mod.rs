//! # Root finding
//! Bracketing root search over scalar functions.
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

mod bisection;

pub use self::bisection::{bisect, find_root, find_root_with};

use serde::{Deserialize, Serialize};

use crate::errors::{NumericError, NumericResult};

/// Default half-width of the bracket at which bisection stops.
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Default cap on the number of bisection steps.
pub const DEFAULT_MAX_ITERATIONS: usize = 100;

/// Number of decimal places the converged root is rounded to.
pub const ROOT_DECIMALS: u32 = 3;

/// Stopping criteria for bisection.
///
/// Missing fields take their defaults when deserialized.
///
/// ```
///     use algohub_core::roots::BisectionConfig;
///     let config = BisectionConfig::new(1e-9, 50).unwrap();
///     assert_eq!(config.max_iterations, 50);
///
///     let default = BisectionConfig::default();
///     assert_eq!(default.tolerance, 1e-6);
///     assert_eq!(default.max_iterations, 100);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BisectionConfig {
    /// Bisection stops once half the bracket width is at or below this value.
    pub tolerance: f64,

    /// Maximum number of halvings, whichever of the two limits is hit first wins.
    pub max_iterations: usize,
}

impl Default for BisectionConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl BisectionConfig {
    /// Construct a new config, validating the tolerance.
    ///
    /// # Errors
    /// [`NumericError::InvalidTolerance`] if the tolerance is negative or not finite.
    pub fn new(tolerance: f64, max_iterations: usize) -> NumericResult<Self> {
        let config = Self {
            tolerance,
            max_iterations,
        };
        config.validate()?;
        Ok(config)
    }

    /// Construct a new config from a signed iteration limit.
    ///
    /// Outer layers (Python, JSON) hand over signed integers, this keeps a negative
    /// limit a [`NumericError`] instead of an overflow at the boundary.
    ///
    /// ```
    ///     use algohub_core::errors::NumericError;
    ///     use algohub_core::roots::BisectionConfig;
    ///     assert!(BisectionConfig::from_signed(1e-6, 20).is_ok());
    ///     assert_eq!(
    ///         BisectionConfig::from_signed(1e-6, -1),
    ///         Err(NumericError::InvalidMaxIterations)
    ///     );
    /// ```
    ///
    /// # Errors
    /// [`NumericError::InvalidMaxIterations`] if `max_iterations` is negative.
    /// [`NumericError::InvalidTolerance`] if the tolerance is negative or not finite.
    pub fn from_signed(tolerance: f64, max_iterations: i64) -> NumericResult<Self> {
        let max_iterations =
            usize::try_from(max_iterations).map_err(|_| NumericError::InvalidMaxIterations)?;
        Self::new(tolerance, max_iterations)
    }

    /// Check that the tolerance is usable.
    ///
    /// A tolerance of exactly zero is allowed, the search then runs until the
    /// iteration limit or an exact root.
    ///
    /// # Errors
    /// [`NumericError::InvalidTolerance`] if the tolerance is negative or not finite.
    pub fn validate(&self) -> NumericResult<()> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            Err(NumericError::InvalidTolerance)?;
        }
        Ok(())
    }
}

/// Reason a bisection search stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// A midpoint evaluated to exactly zero.
    ExactRoot,

    /// The bracket shrank to within tolerance.
    Tolerance,

    /// The iteration limit was reached before the tolerance.
    IterationLimit,
}

impl Termination {
    /// Short lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactRoot => "exact_root",
            Self::Tolerance => "tolerance",
            Self::IterationLimit => "iteration_limit",
        }
    }
}

/// Full outcome of a bisection search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootEstimate<T> {
    /// Reported root. Rounded to [`ROOT_DECIMALS`] places unless an exact root was
    /// found, in which case it is the exact root.
    pub root: T,

    /// Unrounded midpoint of the final bracket, or the exact root.
    pub midpoint: T,

    /// Lower end of the final bracket.
    pub lower: T,

    /// Upper end of the final bracket.
    pub upper: T,

    /// Number of halvings performed.
    pub iterations: usize,

    /// Why the search stopped.
    pub termination: Termination,
}

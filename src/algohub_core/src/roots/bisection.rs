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

use log::{debug, trace};
use num_traits::Float;

use super::{BisectionConfig, ROOT_DECIMALS, RootEstimate, Termination};
use crate::errors::{NumericError, NumericResult};
use crate::round::round_half_even;

/// Find a root of `func` between `a` and `b` using the default [`BisectionConfig`].
///
/// The returned root is rounded to three decimal places, unless a midpoint happened
/// to evaluate to exactly zero, in which case that midpoint is returned as is.
///
/// ```
///     use algohub_core::roots::find_root;
///     let root = find_root(|x: f64| x * x - 2.0, 0.0, 2.0).unwrap();
///     assert_eq!(root, 1.414);
///
///     // Bounds may be given in either order.
///     let root = find_root(|x: f64| x - 5.0, 10.0, 0.0).unwrap();
///     assert_eq!(root, 5.0);
/// ```
///
/// # Errors
/// [`NumericError::InvalidBracket`] if `func(a)` and `func(b)` have the same sign.
pub fn find_root<T>(func: impl Fn(T) -> T, a: T, b: T) -> NumericResult<T>
where
    T: Float,
{
    find_root_with(func, a, b, &BisectionConfig::default())
}

/// Find a root of `func` between `a` and `b` with explicit stopping criteria.
///
/// See [`find_root`].
///
/// # Errors
/// [`NumericError::InvalidBracket`] if `func(a)` and `func(b)` have the same sign.
/// [`NumericError::InvalidTolerance`] if the configured tolerance is unusable.
pub fn find_root_with<T>(
    func: impl Fn(T) -> T,
    a: T,
    b: T,
    config: &BisectionConfig,
) -> NumericResult<T>
where
    T: Float,
{
    bisect(func, a, b, config).map(|estimate| estimate.root)
}

/// Bisection search, returning the final bracket alongside the root.
///
/// Requires `func(a) * func(b) <= 0`, this is checked before any iteration. The
/// bracket is put in increasing order, then halved until half its width is at or
/// below `config.tolerance` or `config.max_iterations` halvings have been done. On
/// each step the half which keeps a sign change with the lower bound is retained.
///
/// ```
///     use algohub_core::roots::{BisectionConfig, Termination, bisect};
///     let config = BisectionConfig::new(1e-15, 5).unwrap();
///     let est = bisect(|x: f64| x * x - 2.0, 0.0, 2.0, &config).unwrap();
///     assert_eq!(est.iterations, 5);
///     assert_eq!(est.termination, Termination::IterationLimit);
///     assert_eq!((est.lower, est.upper), (1.375, 1.4375));
///     assert_eq!(est.root, 1.406);
/// ```
///
/// # Arguments
/// * `func` - Continuous function for which the root is desired.
/// * `a` - One end of the bracket.
/// * `b` - Other end of the bracket.
/// * `config` - Tolerance and iteration limit.
///
/// # Errors
/// [`NumericError`] may be returned in the following cases:
///     - `func(a)` and `func(b)` have the same sign.
///     - The configured tolerance is negative or not finite.
pub fn bisect<T>(
    func: impl Fn(T) -> T,
    a: T,
    b: T,
    config: &BisectionConfig,
) -> NumericResult<RootEstimate<T>>
where
    T: Float,
{
    config.validate()?;
    let tolerance = T::from(config.tolerance).ok_or(NumericError::InvalidTolerance)?;

    let f_a = func(a);
    let f_b = func(b);
    if f_a * f_b > T::zero() {
        Err(NumericError::InvalidBracket)?;
    }

    let (mut lower, mut upper, mut f_lower) = if a > b { (b, a, f_b) } else { (a, b, f_a) };

    let two = T::one() + T::one();
    let mut iterations = 0;
    while (upper - lower) / two > tolerance && iterations < config.max_iterations {
        let mid = (lower + upper) / two;
        let f_mid = func(mid);

        if f_mid == T::zero() {
            debug!("Bisection found an exact root after {iterations} iterations.");
            return Ok(RootEstimate {
                root: mid,
                midpoint: mid,
                lower,
                upper,
                iterations,
                termination: Termination::ExactRoot,
            });
        }

        if f_lower * f_mid < T::zero() {
            upper = mid;
        } else {
            lower = mid;
            f_lower = f_mid;
        }
        iterations += 1;
        trace!(
            "Bisection step {iterations}: bracket [{:?}, {:?}]",
            lower.to_f64(),
            upper.to_f64()
        );
    }

    let termination = if (upper - lower) / two > tolerance {
        Termination::IterationLimit
    } else {
        Termination::Tolerance
    };
    debug!(
        "Bisection stopped on {} after {iterations} iterations.",
        termination.as_str()
    );

    let midpoint = (lower + upper) / two;
    Ok(RootEstimate {
        root: round_half_even(midpoint, ROOT_DECIMALS),
        midpoint,
        lower,
        upper,
        iterations,
        termination,
    })
}

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

use num_traits::Float;

use super::{Integration, panel_width};
use crate::errors::{NumericError, NumericResult};

/// Composite trapezoidal rule.
///
/// The curve is replaced by straight segments between `n + 1` equally spaced
/// samples, so the endpoints carry half weight and interior samples full weight:
///
/// `h * (f(a) / 2 + f(a + h) + ... + f(b - h) + f(b) / 2)`, with `h = (b - a) / n`.
///
/// Linear functions are integrated exactly for any `n`.
///
/// ```
///     use algohub_core::quadrature::{Integration, TrapezoidalIntegration};
///     let area = TrapezoidalIntegration
///         .calculate(|x: f64| 2.0 * x + 1.0, 0.0, 4.0, 1)
///         .unwrap();
///     assert_eq!(area, 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrapezoidalIntegration;

impl Integration for TrapezoidalIntegration {
    fn calculate<T, F>(&self, func: F, a: T, b: T, n: usize) -> NumericResult<T>
    where
        T: Float,
        F: Fn(T) -> T,
    {
        let h = panel_width(a, b, n)?;
        let half = T::one() / (T::one() + T::one());

        let mut total = half * (func(a) + func(b));
        for i in 1..n {
            let i = T::from(i).ok_or(NumericError::InvalidSubdivision)?;
            total = total + func(a + i * h);
        }
        Ok(total * h)
    }
}

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

/// Composite midpoint (rectangle) rule.
///
/// Each of the `n` panels is replaced by a rectangle whose height is the function
/// value at the center of the panel:
///
/// `h * (f(a + h / 2) + f(a + 3h / 2) + ... + f(b - h / 2))`, with `h = (b - a) / n`.
///
/// Sampling at the center cancels the first order error of a left or right
/// endpoint rule, so linear functions are exact and the error on smooth functions
/// falls as `1 / n^2`.
///
/// ```
///     use algohub_core::quadrature::{Integration, RectangularIntegration};
///     let area = RectangularIntegration
///         .calculate(|x: f64| x * x, 0.0, 1.0, 1)
///         .unwrap();
///     assert_eq!(area, 0.25);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RectangularIntegration;

impl Integration for RectangularIntegration {
    fn calculate<T, F>(&self, func: F, a: T, b: T, n: usize) -> NumericResult<T>
    where
        T: Float,
        F: Fn(T) -> T,
    {
        let h = panel_width(a, b, n)?;
        let half = T::one() / (T::one() + T::one());

        let mut total = T::zero();
        for i in 0..n {
            let i = T::from(i).ok_or(NumericError::InvalidSubdivision)?;
            total = total + func(a + (i + half) * h) * h;
        }
        Ok(total)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_midpoint_linear_exact() {
        for n in 1..=64 {
            let area = RectangularIntegration
                .calculate(|x: f64| 2.0 * x + 1.0, 0.0, 4.0, n)
                .unwrap();
            assert!((area - 20.0).abs() < 1e-12, "n={n} gave {area}");
        }
    }

    #[test]
    fn test_midpoint_square() {
        // Error on x^2 over [0, 1] is exactly 1 / (12 n^2), below the true value.
        for n in [1_usize, 2, 5, 100] {
            let area = RectangularIntegration
                .calculate(|x: f64| x * x, 0.0, 1.0, n)
                .unwrap();
            let expected = 1.0 / 3.0 - 1.0 / (12.0 * (n * n) as f64);
            assert!((area - expected).abs() < 1e-12, "n={n} gave {area}");
        }
    }

    #[test]
    fn test_midpoint_sample_points() {
        let samples = Cell::new(Vec::new());
        let f = |x: f64| {
            let mut seen = samples.take();
            seen.push(x);
            samples.set(seen);
            0.0
        };
        let _ = RectangularIntegration.calculate(f, 1.0, 3.0, 4).unwrap();
        assert_eq!(samples.take(), vec![1.25, 1.75, 2.25, 2.75]);
    }

    #[test]
    fn test_midpoint_f32_many_panels() {
        let n = (1_usize << 25) + 8;
        let smallest = Cell::new(f32::INFINITY);
        let largest = Cell::new(0.0_f32);
        let f = |x: f32| {
            smallest.set(smallest.get().min(x));
            largest.set(largest.get().max(x));
            x
        };
        let _ = RectangularIntegration.calculate(f, 0.0, 1.0, n).unwrap();
        assert!(smallest.get() < 1e-6, "smallest sample {}", smallest.get());
        assert!(largest.get() > 0.999, "largest sample {}", largest.get());
    }

    #[test]
    fn test_midpoint_endpoint_singularity() {
        // Endpoints are never sampled, so 1/sqrt(x) on [0, 1] stays finite.
        let area = RectangularIntegration
            .calculate(|x: f64| 1.0 / x.sqrt(), 0.0, 1.0, 10_000)
            .unwrap();
        assert!(area.is_finite());
        assert!((area - 2.0).abs() < 0.02);
    }
}

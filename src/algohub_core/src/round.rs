//! # Rounding
//!
//! Decimal rounding of floating point values for presentation.
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

/// Round `x` to `digits` decimal places, ties going to the even neighbour.
///
/// Ties are decided on the exact stored value of `x`, not on `x * 10^digits`.
/// `0.0005` is stored slightly above the written value and rounds up to `0.001`,
/// while `1.0005` is stored slightly below and rounds down to `1.0`. Only inputs
/// which are exactly halfway, such as `0.125` at two places, go to the even digit.
///
/// The decimal expansion is produced by the exact float formatter of `core::fmt`,
/// which rounds on the full binary value. Non-finite inputs are returned as is.
///
/// ```
///     use algohub_core::round::round_half_even;
///     assert_eq!(round_half_even(1.23456_f64, 3), 1.235);
///     assert_eq!(round_half_even(0.0005_f64, 3), 0.001);
///     assert_eq!(round_half_even(0.5_f64, 0), 0.0);
///     assert_eq!(round_half_even(1.5_f64, 0), 2.0);
///     assert_eq!(round_half_even(-2.5_f32, 0), -2.0);
/// ```
pub fn round_half_even<T: Float>(x: T, digits: u32) -> T {
    let Some(value) = x.to_f64().filter(|v| v.is_finite()) else {
        return x;
    };
    // f32 widens to f64 exactly, so the decision is always made on the stored input.
    format!("{value:.prec$}", prec = digits as usize)
        .parse::<f64>()
        .ok()
        .and_then(T::from)
        .unwrap_or(x)
}

/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
//! Correctly rounded cube root, power and sine for IEEE-754 binary32.
//!
//! Every function returns the exact mathematical result rounded in the requested
//! direction. The plain variants use the calling thread's rounding mode, see
//! [`set_rounding_mode`] and [`with_rounding_mode`]; the `_with` variants take it
//! explicitly. Exceptional conditions are reported through sticky per-thread flags
//! ([`test_exceptions`]) and the last [`MathError`], never by panicking.
//!
//! ```
//! use crmath::{RoundingMode, cbrtf, powf_with, sinf};
//!
//! assert_eq!(cbrtf(-27.0), -3.0);
//! assert_eq!(powf_with(2.0, 0.5, RoundingMode::Upward), 1.4142137);
//! assert_eq!(sinf(0.0), 0.0);
//! ```
#![forbid(unsafe_code)]
#![allow(clippy::excessive_precision, clippy::unreadable_literal)]
#![deny(unreachable_pub)]
mod err;
mod fenv;
mod math;
mod mlaf;

pub use err::MathError;
pub use fenv::{
    FpExceptions, RoundingMode, clear_exceptions, rounding_mode, set_rounding_mode,
    take_exceptions, take_math_error, test_exceptions, with_rounding_mode,
};
pub use math::{BitView, FloatParts, cbrtf, cbrtf_with, powf, powf_with, sinf, sinf_with};

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
use std::error::Error;
use std::fmt::Display;

/// Mathematical error recorded by the last function call that hit one.
///
/// This is the `errno` side channel: evaluation never returns it, it is stored in
/// the calling thread's environment and read back with [`crate::take_math_error`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MathError {
    /// The arguments are outside the function's domain, the result is a quiet NaN.
    Domain,
    /// An exact infinite result from finite arguments, like `powf(0, -1)`.
    Pole,
    /// The finite result overflows to infinity or underflows to zero or a subnormal.
    Range,
}

impl MathError {
    /// The C `errno` value conventionally associated with the error.
    pub const fn errno(self) -> i32 {
        match self {
            MathError::Domain => 33,
            MathError::Pole | MathError::Range => 34,
        }
    }
}

impl Display for MathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MathError::Domain => f.write_str("Argument is outside of the function domain"),
            MathError::Pole => f.write_str("Exact infinite result from finite arguments"),
            MathError::Range => f.write_str("Result is not representable in the target format"),
        }
    }
}

impl Error for MathError {}

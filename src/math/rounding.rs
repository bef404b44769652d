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
//! Final rounding of double and double-double results to binary32.
//!
//! Every intermediate runs in round-to-nearest; the requested direction is applied only
//! here, on a value whose error is known to be smaller than the distance to the closest
//! rounding boundary.
use crate::err::MathError;
use crate::fenv::{FpExceptions, RoundingMode, raise, signal};
use crate::math::bits::{next_down_f32, next_up_f32};

const TWO_POW_128: f64 = f64::from_bits(0x47f0000000000000);
const MIN_NORMAL: f64 = f64::from_bits(0x3810000000000000);

/// Rounds a double to binary32 in the given direction.
///
/// Overflow yields infinity or the largest finite value, whichever the direction selects.
/// Values below the smallest subnormal go to the signed zero or to the smallest subnormal.
#[inline]
pub(crate) fn round_f64_to_f32(x: f64, mode: RoundingMode) -> f32 {
    let nearest = x as f32;
    if mode == RoundingMode::Nearest || x.is_nan() || nearest as f64 == x {
        return nearest;
    }
    let (below, above) = if (nearest as f64) < x {
        (nearest, next_up_f32(nearest))
    } else {
        (next_down_f32(nearest), nearest)
    };
    pick_directed(below, above, x.is_sign_negative(), mode)
}

#[inline]
fn pick_directed(below: f32, above: f32, negative: bool, mode: RoundingMode) -> f32 {
    match mode {
        RoundingMode::Upward => above,
        RoundingMode::Downward => below,
        RoundingMode::TowardZero => {
            if negative {
                above
            } else {
                below
            }
        }
        RoundingMode::Nearest => {
            if negative {
                below
            } else {
                above
            }
        }
    }
}

/// Value of a binary32 neighbour as a double, infinity counted as 2^128.
#[inline]
fn unbounded(v: f32) -> f64 {
    if v.is_infinite() {
        TWO_POW_128.copysign(v as f64)
    } else {
        v as f64
    }
}

/// Rounds `hi + lo` to binary32 in the given direction.
///
/// Expects a normalized pair, `|lo| <= ulp(hi) / 2`. The low part only matters when `hi`
/// is itself a binary32 value or sits exactly between two of them.
pub(crate) fn round_dd_to_f32(hi: f64, lo: f64, mode: RoundingMode) -> f32 {
    if lo == 0. || hi.is_nan() || hi.is_infinite() {
        return round_f64_to_f32(hi, mode);
    }
    let nearest = hi as f32;
    if nearest as f64 == hi {
        let toward_zero = (lo < 0.) != (hi < 0.);
        return match mode {
            RoundingMode::Nearest => nearest,
            RoundingMode::Upward if lo > 0. => next_up_f32(nearest),
            RoundingMode::Downward if lo < 0. => next_down_f32(nearest),
            RoundingMode::TowardZero if toward_zero => {
                if hi > 0. {
                    next_down_f32(nearest)
                } else {
                    next_up_f32(nearest)
                }
            }
            _ => nearest,
        };
    }
    if mode == RoundingMode::Nearest {
        let (below, above) = if unbounded(nearest) < hi {
            (nearest, next_up_f32(nearest))
        } else {
            (next_down_f32(nearest), nearest)
        };
        let mid = 0.5 * (unbounded(below) + unbounded(above));
        if mid == hi {
            return if lo > 0. { above } else { below };
        }
        return nearest;
    }
    round_f64_to_f32(hi, mode)
}

/// Ziv's rounding test: both ends of the error interval must round alike.
#[inline]
pub(crate) fn ziv_accept(lb: f64, ub: f64, mode: RoundingMode) -> bool {
    round_f64_to_f32(lb, mode).to_bits() == round_f64_to_f32(ub, mode).to_bits()
}

/// Rounds a double result and raises the status flags the rounding implies.
#[inline]
pub(crate) fn finish(x: f64, mode: RoundingMode) -> f32 {
    finish_dd(x, 0., mode)
}

/// Rounds a double-double result and raises the status flags the rounding implies.
///
/// Overflow and underflow also record [`MathError::Range`].
pub(crate) fn finish_dd(hi: f64, lo: f64, mode: RoundingMode) -> f32 {
    let r = round_dd_to_f32(hi, lo, mode);
    if lo == 0. && r as f64 == hi {
        return r;
    }
    if hi.is_nan() {
        return r;
    }
    let ahi = hi.abs();
    if r.is_infinite() || ahi >= TWO_POW_128 {
        signal(
            MathError::Range,
            FpExceptions::OVERFLOW | FpExceptions::INEXACT,
        );
    } else if ahi < MIN_NORMAL || (ahi == MIN_NORMAL && (lo < 0.) != (hi < 0.)) {
        signal(
            MathError::Range,
            FpExceptions::UNDERFLOW | FpExceptions::INEXACT,
        );
    } else {
        raise(FpExceptions::INEXACT);
    }
    r
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fenv::{clear_exceptions, take_exceptions, take_math_error};

    const ONE_PLUS: f64 = 1.0 + f64::from_bits(0x3e70000000000000); // 1 + 2^-24
    const ULP_ONE: f32 = f32::from_bits(0x3f800001);

    #[test]
    fn exact_values_pass_through() {
        for mode in RoundingMode::ALL {
            assert_eq!(round_f64_to_f32(1.5, mode), 1.5);
            assert_eq!(round_f64_to_f32(-0.0, mode).to_bits(), 0x8000_0000);
            assert_eq!(round_f64_to_f32(f64::INFINITY, mode), f32::INFINITY);
        }
    }

    #[test]
    fn directions_on_a_midpoint() {
        assert_eq!(round_f64_to_f32(ONE_PLUS, RoundingMode::Nearest), 1.0);
        assert_eq!(round_f64_to_f32(ONE_PLUS, RoundingMode::Upward), ULP_ONE);
        assert_eq!(round_f64_to_f32(ONE_PLUS, RoundingMode::Downward), 1.0);
        assert_eq!(round_f64_to_f32(ONE_PLUS, RoundingMode::TowardZero), 1.0);
        assert_eq!(round_f64_to_f32(-ONE_PLUS, RoundingMode::Upward), -1.0);
        assert_eq!(round_f64_to_f32(-ONE_PLUS, RoundingMode::Downward), -ULP_ONE);
        assert_eq!(round_f64_to_f32(-ONE_PLUS, RoundingMode::TowardZero), -1.0);
    }

    #[test]
    fn overflow_depends_on_direction() {
        let big = 3.5e38;
        assert_eq!(round_f64_to_f32(big, RoundingMode::Nearest), f32::INFINITY);
        assert_eq!(round_f64_to_f32(big, RoundingMode::Upward), f32::INFINITY);
        assert_eq!(round_f64_to_f32(big, RoundingMode::TowardZero), f32::MAX);
        assert_eq!(round_f64_to_f32(big, RoundingMode::Downward), f32::MAX);
        assert_eq!(round_f64_to_f32(-big, RoundingMode::Upward), -f32::MAX);
        assert_eq!(
            round_f64_to_f32(-big, RoundingMode::Downward),
            f32::NEG_INFINITY
        );
    }

    #[test]
    fn underflow_keeps_the_sign() {
        let tiny = 1e-50;
        assert_eq!(round_f64_to_f32(tiny, RoundingMode::Nearest).to_bits(), 0);
        assert_eq!(round_f64_to_f32(tiny, RoundingMode::Upward).to_bits(), 1);
        assert_eq!(round_f64_to_f32(-tiny, RoundingMode::Upward).to_bits(), 0x8000_0000);
        assert_eq!(
            round_f64_to_f32(-tiny, RoundingMode::Downward).to_bits(),
            0x8000_0001
        );
        assert_eq!(
            round_f64_to_f32(-tiny, RoundingMode::TowardZero).to_bits(),
            0x8000_0000
        );
    }

    #[test]
    fn low_part_steers_exact_high_parts() {
        let lo = 1e-30;
        assert_eq!(round_dd_to_f32(1.0, lo, RoundingMode::Nearest), 1.0);
        assert_eq!(round_dd_to_f32(1.0, lo, RoundingMode::Upward), ULP_ONE);
        assert_eq!(round_dd_to_f32(1.0, lo, RoundingMode::Downward), 1.0);
        assert_eq!(
            round_dd_to_f32(1.0, -lo, RoundingMode::Downward),
            f32::from_bits(0x3f7fffff)
        );
        assert_eq!(
            round_dd_to_f32(1.0, -lo, RoundingMode::TowardZero),
            f32::from_bits(0x3f7fffff)
        );
        assert_eq!(round_dd_to_f32(-1.0, lo, RoundingMode::TowardZero), -0.99999994);
        assert_eq!(
            round_dd_to_f32(f64::from(f32::MAX), lo, RoundingMode::Upward),
            f32::INFINITY
        );
    }

    #[test]
    fn low_part_breaks_ties() {
        let lo = 1e-30;
        assert_eq!(round_dd_to_f32(ONE_PLUS, lo, RoundingMode::Nearest), ULP_ONE);
        assert_eq!(round_dd_to_f32(ONE_PLUS, -lo, RoundingMode::Nearest), 1.0);
        assert_eq!(round_dd_to_f32(-ONE_PLUS, -lo, RoundingMode::Nearest), -ULP_ONE);
        assert_eq!(round_dd_to_f32(ONE_PLUS, -lo, RoundingMode::Upward), ULP_ONE);
        // halfway between MAX and 2^128
        let mid = 0.5 * (f64::from(f32::MAX) + TWO_POW_128);
        assert_eq!(round_dd_to_f32(mid, -lo, RoundingMode::Nearest), f32::MAX);
        assert_eq!(round_dd_to_f32(mid, lo, RoundingMode::Nearest), f32::INFINITY);
    }

    #[test]
    fn ziv_test_rejects_straddling_intervals() {
        assert!(ziv_accept(1.00000011, 1.00000013, RoundingMode::Nearest));
        assert!(!ziv_accept(ONE_PLUS - 1e-12, ONE_PLUS + 1e-12, RoundingMode::Nearest));
        assert!(!ziv_accept(1.0 - 1e-12, 1.0 + 1e-12, RoundingMode::Upward));
    }

    #[test]
    fn flags_follow_the_rounding() {
        clear_exceptions();
        let _ = take_math_error();
        assert_eq!(finish(2.0, RoundingMode::Nearest), 2.0);
        assert!(take_exceptions().is_empty());

        assert_eq!(finish(ONE_PLUS, RoundingMode::Nearest), 1.0);
        assert_eq!(take_exceptions(), FpExceptions::INEXACT);

        assert_eq!(finish(1e39, RoundingMode::TowardZero), f32::MAX);
        assert_eq!(
            take_exceptions(),
            FpExceptions::OVERFLOW | FpExceptions::INEXACT
        );
        assert_eq!(take_math_error(), Some(MathError::Range));

        assert_eq!(finish(1e-40, RoundingMode::Nearest), 1e-40f64 as f32);
        assert_eq!(
            take_exceptions(),
            FpExceptions::UNDERFLOW | FpExceptions::INEXACT
        );
        assert_eq!(take_math_error(), Some(MathError::Range));

        // exact subnormal results do not underflow
        let sub = f64::from(f32::from_bits(3));
        assert_eq!(finish(sub, RoundingMode::Nearest).to_bits(), 3);
        assert!(take_exceptions().is_empty());
    }
}

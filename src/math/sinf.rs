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
use crate::err::MathError;
use crate::fenv::{FpExceptions, RoundingMode, rounding_mode, signal};
use crate::math::bits::BitView;
use crate::math::common::f_fmla;
use crate::math::double_double::DoubleDouble;
use crate::math::reduce::{reduce_accurate, reduce_big, reduce_medium, reduce_small};
use crate::math::rounding::{finish, finish_dd, ziv_accept};
use crate::math::tables::{
    COS_PI_16_DD, SIN_HARD_CASES, SIN_K_PI_16, SIN_K_PI_16_DD, SIN_PI_16_DD, find_hard_case,
};

// sin(pi*z/16) = z * A(z^2), (1 - cos(pi*z/16)) / z^2 = B(z^2) for |z| <= 1/2
const B: [u64; 4] = [
    0x3f93bd3cc9be45dc,
    0xbf103c1f081b0833,
    0x3e755d3c6fc9ac1f,
    0xbdce1d3ff281b40d,
];
const A: [u64; 4] = [
    0x3fc921fb54442d17,
    0xbf54abbce6256a39,
    0x3ec466bc5a518c16,
    0xbe232bdc61074ff6,
];

#[inline]
fn sincos_poly(z2: f64) -> (f64, f64) {
    let z4 = z2 * z2;

    let w0 = f_fmla(z2, f64::from_bits(A[1]), f64::from_bits(A[0]));
    let w1 = f_fmla(z2, f64::from_bits(A[3]), f64::from_bits(A[2]));

    let aa = f_fmla(z4, w1, w0);

    let q0 = f_fmla(z2, f64::from_bits(B[1]), f64::from_bits(B[0]));
    let q1 = f_fmla(z2, f64::from_bits(B[3]), f64::from_bits(B[2]));

    let bb = f_fmla(z4, q1, q0);
    (aa, bb)
}

/// Odd Taylor series for |x| < 2^-12.
///
/// The tail never reaches half an ulp of `x`, so the result only depends on the sign of
/// the tail and the double-double carries it exactly.
#[inline]
fn sinf_series(x: f32, mode: RoundingMode) -> f32 {
    let ax = x.to_bits().wrapping_shl(1);
    let xd = x as f64;
    let x2 = xd * xd;
    let tail = if ax < 0x66000000u32 {
        // |x| < 2^-25
        -(xd * x2) * f64::from_bits(0x3fc5555555555555)
    } else {
        let p = f_fmla(
            x2,
            f_fmla(
                x2,
                -f64::from_bits(0x3f2a01a01a01a01a),
                f64::from_bits(0x3f81111111111111),
            ),
            -f64::from_bits(0x3fc5555555555555),
        );
        (xd * x2) * p
    };
    let r = DoubleDouble::from_exact_add(xd, tail);
    finish_dd(r.hi, r.lo, mode)
}

/// Fast evaluation, returns the result and an absolute error bound.
#[inline]
fn sinf_fast(x: f32) -> (f64, f64) {
    let t = x.to_bits();
    let ax = t.wrapping_shl(1);
    let (z, ia, reduction_err) = if ax < 0x822d97c8u32 {
        // |x| < 3*pi
        let (z, ia) = reduce_small(x);
        (z, ia, x.abs() as f64 * f64::from_bits(0x3cd0000000000000))
    } else if ax <= 0x99000000u32 {
        let (z, ia) = reduce_medium(x);
        (z, ia, x.abs() as f64 * f64::from_bits(0x3b10000000000000))
    } else {
        let (z, ia) = reduce_big(t);
        let z2 = z * z;
        let (aa, bb) = sincos_poly(z2);
        let s0 = f64::from_bits(SIN_K_PI_16[(ia & 31) as usize]);
        let c0 = f64::from_bits(SIN_K_PI_16[((ia.wrapping_add(8)) & 31) as usize]);

        let f0 = f_fmla(-bb, z * s0, aa * c0);
        let r = f_fmla(z, f0, s0);
        return (
            r,
            f_fmla(
                r.abs(),
                f64::from_bits(0x3d10000000000000),
                f64::from_bits(0x3c30000000000000),
            ),
        );
    };
    let z2 = z * z;
    let (aa, bb) = sincos_poly(z2);

    let s0 = f64::from_bits(SIN_K_PI_16[(ia & 31) as usize]);
    let c0 = f64::from_bits(SIN_K_PI_16[((ia.wrapping_add(8)) & 31) as usize]);

    let f0 = f_fmla(aa, z * c0, s0);
    let r = f_fmla(-bb, z2 * s0, f0);
    (
        r,
        f_fmla(r.abs(), f64::from_bits(0x3d10000000000000), reduction_err),
    )
}

/// Double-double evaluation for |x| >= 2^-12, relative error below 2^-95.
fn sinf_accurate(x: f32) -> DoubleDouble {
    let (z, ia) = reduce_accurate(x);
    let w = DoubleDouble::mul(z, z);
    let s = DoubleDouble::mul(z, DoubleDouble::poly_dd(w, &SIN_PI_16_DD));
    let c = DoubleDouble::poly_dd(w, &COS_PI_16_DD);
    let s0 = SIN_K_PI_16_DD[(ia & 31) as usize];
    let c0 = SIN_K_PI_16_DD[((ia.wrapping_add(8)) & 31) as usize];
    let r = DoubleDouble::add(DoubleDouble::mul(s0, c), DoubleDouble::mul(c0, s)).normalize();
    if x.is_sign_negative() { r.neg() } else { r }
}

/// Correctly rounded sine in the given rounding direction.
///
/// Infinite inputs are a domain error: the result is NaN, `INVALID` is raised and
/// [`MathError::Domain`] recorded.
pub fn sinf_with(x: f32, mode: RoundingMode) -> f32 {
    let t = x.bits_of();
    let ax = t.wrapping_shl(1);
    if ax == 0 {
        return x;
    }
    if ax >= 0xffu32 << 24 {
        if ax.wrapping_shl(8) != 0 {
            return x + x; // nan
        }
        signal(MathError::Domain, FpExceptions::INVALID);
        return f32::NAN;
    }
    if ax < 0x73000000u32 {
        // |x| < 2^-12
        return sinf_series(x, mode);
    }
    if let Some(entry) = find_hard_case(&SIN_HARD_CASES, t & 0x7fff_ffff) {
        let v = entry.value();
        return finish(if x.is_sign_negative() { -v } else { v }, mode);
    }
    let (r, err) = sinf_fast(x);
    if ziv_accept(r - err, r + err, mode) {
        return finish(r, mode);
    }
    let r = sinf_accurate(x);
    finish_dd(r.hi, r.lo, mode)
}

/// Correctly rounded sine in the calling thread's rounding direction.
#[inline]
pub fn sinf(x: f32) -> f32 {
    sinf_with(x, rounding_mode())
}

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
use crate::fenv::{RoundingMode, rounding_mode};
use crate::math::bits::{BitView, normalize_subnormal};
use crate::math::common::f_fmla;
use crate::math::double_double::DoubleDouble;
use crate::math::rounding::{finish, round_f64_to_f32, ziv_accept};

/// 1, 2^(1/3), 2^(2/3)
static ESCALE: [u64; 3] = [0x3ff0000000000000, 0x3ff428a2f98d728b, 0x3ff965fea53d6e3d];

// cbrt(z) ~ C(z) + R0 / z on [1, 2), never below the true root
static C: [u64; 8] = [
    0x3fe2319d352ea5d5,
    0x3fe67ad8ee258d1a,
    0xbfd9342edf9cbad9,
    0x3fcb6388fc510a75,
    0xbfb6002455599e2f,
    0x3f97b096936192c4,
    0xbf6e5577187e8bf8,
    0x3f3169ef81d6c34e,
];
const R0: u64 = 0xbf99931c6c2d19d1;
const U0: u64 = 0xc02ab16ec65d138f;
/// Relative bound of the fast approximation, one-sided.
const FAST_ERR: f64 = 1.4182e-9;

/// Whether `r` cubed equals `x` exactly.
#[inline]
fn is_exact_cube(r: f32, x: f32) -> bool {
    let r = r as f64;
    let sq = r * r; // 48 bits at most, exact
    let cube = DoubleDouble::from_exact_mult(sq, r);
    cube.lo == 0. && cube.hi == x as f64
}

/// Correctly rounded cube root in the given rounding direction.
///
/// Exact cubes return without raising `INEXACT`.
pub fn cbrtf_with(x: f32, mode: RoundingMode) -> f32 {
    let u = x.bits_of();
    let mut au = u.wrapping_shl(1);
    let sgn = u >> 31;
    let mut e = (au >> 24) as i32;
    if au < 1 << 24 || au >= 0xffu32 << 24 {
        if au >= 0xffu32 << 24 {
            return x + x; // inf, nan
        }
        if au == 0 {
            return x;
        }
        (au, e) = normalize_subnormal(au);
    }
    let mant = au & 0xffffff;
    let z = f64::value_of((mant as u64) << 28 | (0x3ffu64 << 52));
    // x = 2^(3 * (et - 342) + it) * z
    e += 899;
    let et = e / 3;
    let it = e % 3;
    let mut isc = ESCALE[it as usize];
    isc = isc.wrapping_add(((et - 342) as i64 as u64) << 52);
    isc |= (sgn as u64) << 63;
    let cvt2 = f64::from_bits(isc);

    let r0 = f64::from_bits(R0) / z;
    let z2 = z * z;
    let z4 = z2 * z2;

    let p0 = f_fmla(z, f64::from_bits(C[1]), f64::from_bits(C[0]));
    let p1 = f_fmla(z, f64::from_bits(C[3]), f64::from_bits(C[2]));
    let p2 = f_fmla(z, f64::from_bits(C[5]), f64::from_bits(C[4]));
    let p3 = f_fmla(z, f64::from_bits(C[7]), f64::from_bits(C[6]));

    let q0 = f_fmla(z2, p1, p0);
    let q1 = f_fmla(z2, p3, p2);

    let mut f = f_fmla(z4, q1, q0) + r0;
    let r = f * cvt2;
    let lb = r - cvt2 * FAST_ERR;
    if ziv_accept(lb, r, mode) {
        let res = round_f64_to_f32(r, mode);
        if is_exact_cube(res, x) {
            return res;
        }
        return finish(r, mode);
    }

    // one Newton step on f^3 = z
    let h = f * f * f - z;
    f -= (f * r0 * f64::from_bits(U0)) * h;
    let r = f * cvt2;
    let bits = r.to_bits();
    // an exact root has at most 8 significant bits, the trailing ones are noise
    let m0 = (bits << 19) as i64;
    let m1 = m0 >> 63;
    if (m0 ^ m1) < (1i64 << 31) {
        let exact = f64::from_bits(bits.wrapping_add(1 << 31) & 0xffff_ffff_0000_0000);
        return round_f64_to_f32(exact, mode);
    }
    finish(r, mode)
}

/// Correctly rounded cube root in the calling thread's rounding direction.
#[inline]
pub fn cbrtf(x: f32) -> f32 {
    cbrtf_with(x, rounding_mode())
}

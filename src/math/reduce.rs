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
//! Periodic argument reduction by multiples of pi/16.
//!
//! Every reducer returns `(z, k)` with `x * 16 / pi = k + z`, `|z| <= 1/2`; only `k mod 32`
//! is meaningful.
use crate::math::bits::BitView;
use crate::math::common::roundeven;
use crate::math::double_double::DoubleDouble;

/// 2/pi as a 256-bit fraction, least significant limb first.
static IPI: [u64; 4] = [
    0xfe5163abdebbc562,
    0xdb6295993c439041,
    0xfc2757d1f534ddc0,
    0xa2f9836e4e441529,
];

/// Reduction with a single double 16/pi, for |x| < 3*pi.
#[inline]
pub(crate) fn reduce_small(x: f32) -> (f64, i32) {
    let idh = f64::from_bits(0x40145f306dc9c883) * x as f64;
    let id = roundeven(idh);
    let q = (f64::from_bits(0x4338000000000000) + id).to_bits();
    (idh - id, q as i32)
}

/// Reduction with 16/pi split in two parts, for |x| < 2^26.
///
/// The leading part has 28 significant bits so its product with a binary32 is exact.
#[inline]
pub(crate) fn reduce_medium(x: f32) -> (f64, i32) {
    let x = x as f64;
    let idl = -f64::from_bits(0x3e2b1bbead603d8b) * x;
    let idh = f64::from_bits(0x40145f306e000000) * x;
    let id = roundeven(idh);
    let q = (f64::from_bits(0x4338000000000000) + id).to_bits();
    ((idh - id) + idl, q as i32)
}

/// Multi-limb reduction of a binary32 encoding with biased exponent in `153..=254`.
///
/// The fraction is truncated to 64 bits. The sign of the input is carried into both
/// the fraction and the index.
#[inline]
pub(crate) fn reduce_big(u: u32) -> (f64, i32) {
    let e = (u >> 23) & 0xff;
    let m: u64 = ((u as u64) & 0x7fffff) | (1 << 23);
    let p0 = m as u128 * IPI[0] as u128;
    let mut p1 = m as u128 * IPI[1] as u128;
    p1 = p1.wrapping_add(p0.wrapping_shr(64));
    let mut p2 = m as u128 * IPI[2] as u128;
    p2 = p2.wrapping_add(p1.wrapping_shr(64));
    let mut p3 = m as u128 * IPI[3] as u128;
    p3 = p3.wrapping_add(p2.wrapping_shr(64));
    let p3h = p3.wrapping_shr(64) as u64;
    let p3l = p3 as u64;
    let p2l = p2 as u64;
    let p1l = p1 as u64;
    let a: i64;
    let k = (e as i32).wrapping_sub(124);
    // 153 <= e <= 254 gives 6 <= s <= 107
    let s = k.wrapping_sub(23);
    let mut i: i32;
    if s < 64 {
        i = (p3h << s | p3l >> (64 - s)) as i32;
        a = (p3l << s | p2l >> (64 - s)) as i64;
    } else if s == 64 {
        i = p3l as i32;
        a = p2l as i64;
    } else {
        i = (p3l << (s - 64) | p2l >> (128 - s)) as i32;
        a = (p2l << (s - 64) | p1l >> (128 - s)) as i64;
    }
    let sgn: i32 = (u as i32).wrapping_shr(31);
    let sm: i64 = a.wrapping_shr(63);
    i = i.wrapping_sub(sm as i32);
    let z = (a ^ sgn as i64) as f64 * f64::from_bits(0x3bf0000000000000);
    i = (i ^ sgn).wrapping_sub(sgn);
    (z, i)
}

/// Full product of a 24-bit mantissa with [`IPI`], five limbs, least significant first.
#[inline]
fn mantissa_times_ipi(m: u64) -> [u64; 5] {
    let mut p = [0u64; 5];
    let mut carry: u128 = 0;
    for (dst, &limb) in p.iter_mut().zip(IPI.iter()) {
        let t = m as u128 * limb as u128 + carry;
        *dst = t as u64;
        carry = t >> 64;
    }
    p[4] = carry as u64;
    p
}

/// 128 bits of `p` starting at bit `at`; bits past the top read as zero.
#[inline]
fn window(p: &[u64; 5], at: u32) -> u128 {
    let limb = |i: usize| p.get(i).copied().unwrap_or(0) as u128;
    let w = (at / 64) as usize;
    let b = at % 64;
    let lo = limb(w) | (limb(w + 1) << 64);
    if b == 0 {
        return lo;
    }
    (lo >> b) | (limb(w + 2) << (128 - b))
}

/// Exact conversion of a 128-bit signed fraction to a double-double scaled by 2^-128.
#[inline]
fn fraction_to_dd(f: i128) -> DoubleDouble {
    const MASK53: u128 = (1 << 53) - 1;
    const SCALE: f64 = f64::from_bits(0x37f0000000000000); // 2^-128
    let a = f.unsigned_abs();
    let c2 = ((a >> 106) as u64 as f64) * f64::from_bits(0x4690000000000000); // 2^106
    let c1 = (((a >> 53) & MASK53) as u64 as f64) * f64::from_bits(0x4340000000000000); // 2^53
    let c0 = (a & MASK53) as u64 as f64;
    let top = DoubleDouble::from_full_exact_add(c2, c1);
    let r = DoubleDouble::add(top, DoubleDouble::new(0., c0)).normalize();
    let r = DoubleDouble::new(r.lo * SCALE, r.hi * SCALE);
    if f < 0 { r.neg() } else { r }
}

/// Reduction of |x| with a 128-bit fraction, for any finite |x| >= 2^-12.
///
/// Returns the fraction as a double-double; the sign of `x` is ignored.
pub(crate) fn reduce_accurate(x: f32) -> (DoubleDouble, i32) {
    let parts = x.parts();
    let e = parts.exponent;
    let m = parts.mantissa | (1 << <f32 as BitView>::MANTISSA_BITS);
    let p = mantissa_times_ipi(m);
    // x * 16 / pi = p * 2^(e - 403), the fraction starts at bit 403 - e - 128
    let sh = 275 - e;
    let f = window(&p, sh);
    let mut i = window(&p, sh + 128) as u32 as i32;
    let f = f as i128;
    if f < 0 {
        i = i.wrapping_add(1);
    }
    (fraction_to_dd(f), i)
}

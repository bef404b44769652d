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
#[cfg(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "fma"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
))]
use crate::math::common::f_fmla;

/// Unevaluated sum `hi + lo` carrying about 106 bits of precision.
#[derive(Copy, Clone, Default, Debug)]
pub(crate) struct DoubleDouble {
    pub(crate) lo: f64,
    pub(crate) hi: f64,
}

impl DoubleDouble {
    #[inline]
    pub(crate) const fn new(lo: f64, hi: f64) -> Self {
        DoubleDouble { lo, hi }
    }

    /// Builds a value from `(lo, hi)` encodings, the layout of every dd table.
    #[inline]
    pub(crate) const fn from_bit_pair(pair: (u64, u64)) -> Self {
        DoubleDouble {
            lo: f64::from_bits(pair.0),
            hi: f64::from_bits(pair.1),
        }
    }

    // Non FMA helper
    #[allow(dead_code)]
    #[inline]
    pub(crate) const fn split(a: f64) -> DoubleDouble {
        // CN = 2^N.
        const CN: f64 = (1 << 27) as f64;
        const C: f64 = CN + 1.0;
        let t1 = C * a;
        let t2 = a - t1;
        let r_hi = t1 + t2;
        let r_lo = a - r_hi;
        DoubleDouble::new(r_lo, r_hi)
    }

    // Non FMA helper
    #[allow(dead_code)]
    #[inline]
    fn from_exact_mult_impl_non_fma(asz: DoubleDouble, a: f64, b: f64) -> Self {
        let bs = DoubleDouble::split(b);

        let r_hi = a * b;
        let t1 = asz.hi * bs.hi - r_hi;
        let t2 = asz.hi * bs.lo + t1;
        let t3 = asz.lo * bs.hi + t2;
        let r_lo = asz.lo * bs.lo + t3;
        DoubleDouble::new(r_lo, r_hi)
    }

    /// Fast two-sum, exact when `|a| >= |b|` or `a == 0`.
    #[inline]
    pub(crate) const fn from_exact_add(a: f64, b: f64) -> DoubleDouble {
        let r_hi = a + b;
        let t = r_hi - a;
        let r_lo = b - t;
        DoubleDouble::new(r_lo, r_hi)
    }

    /// Two-sum without ordering requirement.
    #[inline]
    pub(crate) const fn from_full_exact_add(a: f64, b: f64) -> DoubleDouble {
        let r_hi = a + b;
        let t1 = r_hi - a;
        let t2 = r_hi - t1;
        let t3 = b - t1;
        let t4 = a - t2;
        let r_lo = t3 + t4;
        DoubleDouble::new(r_lo, r_hi)
    }

    #[inline]
    pub(crate) fn add(a: DoubleDouble, b: DoubleDouble) -> DoubleDouble {
        let s = a.hi + b.hi;
        let d = s - a.hi;
        let l = ((b.hi - d) + (a.hi + (d - s))) + (a.lo + b.lo);
        DoubleDouble::new(l, s)
    }

    #[inline]
    pub(crate) fn from_exact_mult(a: f64, b: f64) -> Self {
        #[cfg(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "fma"
            ),
            all(target_arch = "aarch64", target_feature = "neon")
        ))]
        {
            let r_hi = a * b;
            let r_lo = f_fmla(a, b, -r_hi);
            DoubleDouble::new(r_lo, r_hi)
        }
        #[cfg(not(any(
            all(
                any(target_arch = "x86", target_arch = "x86_64"),
                target_feature = "fma"
            ),
            all(target_arch = "aarch64", target_feature = "neon")
        )))]
        {
            let splat = DoubleDouble::split(a);
            DoubleDouble::from_exact_mult_impl_non_fma(splat, a, b)
        }
    }

    /// dd x dd, relative error about 2^-102.
    #[inline]
    pub(crate) fn mul(a: DoubleDouble, b: DoubleDouble) -> DoubleDouble {
        let ahlh = b.hi * a.lo;
        let alhh = b.lo * a.hi;
        let p = DoubleDouble::from_exact_mult(b.hi, a.hi);
        let t = p.lo + (alhh + ahlh);
        let hi = p.hi + t;
        DoubleDouble::new((p.hi - hi) + t, hi)
    }

    /// dd x double.
    #[inline]
    pub(crate) fn mul_f64(a: DoubleDouble, b: f64) -> DoubleDouble {
        let ahlh = b * a.lo;
        let p = DoubleDouble::from_exact_mult(b, a.hi);
        let t = p.lo + ahlh;
        let hi = p.hi + t;
        DoubleDouble::new((p.hi - hi) + t, hi)
    }

    /// Compensated Horner scheme over a dd coefficient table, lowest degree first.
    ///
    /// The result is not renormalized, the low part may slightly exceed half an ulp of
    /// the high part.
    pub(crate) fn poly_dd(x: DoubleDouble, coeffs: &[DoubleDouble]) -> DoubleDouble {
        let Some((last, rest)) = coeffs.split_last() else {
            return DoubleDouble::default();
        };
        let mut acc = *last;
        for c in rest.iter().rev() {
            let p = DoubleDouble::mul(x, acc);
            let th = p.hi + c.hi;
            let tl = (c.hi - th) + p.hi;
            acc = DoubleDouble::new(p.lo + (tl + c.lo), th);
        }
        acc
    }

    /// Brings `lo` back under half an ulp of `hi`.
    #[inline]
    pub(crate) const fn normalize(self) -> DoubleDouble {
        DoubleDouble::from_exact_add(self.hi, self.lo)
    }

    #[inline]
    pub(crate) const fn neg(self) -> DoubleDouble {
        DoubleDouble::new(-self.lo, -self.hi)
    }

    #[inline]
    pub(crate) const fn to_f64(self) -> f64 {
        self.lo + self.hi
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_mult_keeps_the_tail() {
        // (1 + 2^-30)^2 = 1 + 2^-29 + 2^-60
        let a = 1.0 + f64::from_bits(0x3e10000000000000);
        let r = DoubleDouble::from_exact_mult(a, a);
        assert_eq!(r.hi, 1.0 + f64::from_bits(0x3e20000000000000));
        assert_eq!(r.lo, f64::from_bits(0x3c30000000000000));
    }

    #[test]
    fn two_sum_is_exact() {
        let r = DoubleDouble::from_full_exact_add(1e-30, 1.0);
        assert_eq!(r.hi, 1.0);
        assert_eq!(r.lo, 1e-30);
        let f = DoubleDouble::from_exact_add(1.0, 1e-30);
        assert_eq!(f.hi, 1.0);
        assert_eq!(f.lo, 1e-30);
    }

    #[test]
    fn split_halves_sum_back() {
        let v = std::f64::consts::PI;
        let s = DoubleDouble::split(v);
        assert_eq!(s.hi + s.lo, v);
        assert_eq!(s.hi.to_bits() & 0x7ffffff, 0);
    }

    #[test]
    fn products_carry_low_parts() {
        let third = DoubleDouble::new(f64::from_bits(0x3c75555555555555), 1.0 / 3.0);
        let three = DoubleDouble::new(0., 3.0);
        let one = DoubleDouble::mul(third, three).normalize();
        assert_eq!(one.hi, 1.0);
        assert!(one.lo.abs() < 1e-31);
        let one = DoubleDouble::mul_f64(third, 3.0).normalize();
        assert_eq!(one.hi, 1.0);
        assert!(one.lo.abs() < 1e-31);
    }

    #[test]
    fn horner_matches_direct_evaluation() {
        // 1 + 2x + 3x^2 at x = 0.5
        let coeffs = [
            DoubleDouble::new(0., 1.),
            DoubleDouble::new(0., 2.),
            DoubleDouble::new(0., 3.),
        ];
        let r = DoubleDouble::poly_dd(DoubleDouble::new(0., 0.5), &coeffs);
        assert_eq!(r.to_f64(), 2.75);
        let empty = DoubleDouble::poly_dd(DoubleDouble::new(0., 0.5), &[]);
        assert_eq!(empty.to_f64(), 0.);
    }

    #[test]
    fn bit_pairs_are_lo_then_hi() {
        let v = DoubleDouble::from_bit_pair((0x3c30000000000000, 0x3ff0000000000000));
        assert_eq!(v.hi, 1.0);
        assert_eq!(v.lo, f64::from_bits(0x3c30000000000000));
    }
}

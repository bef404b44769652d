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

/// Lossless reinterpretation of a float as its same-width unsigned integer.
pub trait BitView: Copy {
    type Bits: Copy;

    const EXPONENT_BITS: u32;
    const MANTISSA_BITS: u32;

    fn bits_of(self) -> Self::Bits;
    fn value_of(bits: Self::Bits) -> Self;

    /// Sign, biased exponent and mantissa fields.
    fn parts(self) -> FloatParts;
}

/// Raw IEEE-754 fields of a binary value.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FloatParts {
    pub sign: bool,
    pub exponent: u32,
    pub mantissa: u64,
}

impl BitView for f32 {
    type Bits = u32;

    const EXPONENT_BITS: u32 = 8;
    const MANTISSA_BITS: u32 = 23;

    #[inline(always)]
    fn bits_of(self) -> u32 {
        self.to_bits()
    }

    #[inline(always)]
    fn value_of(bits: u32) -> f32 {
        f32::from_bits(bits)
    }

    #[inline]
    fn parts(self) -> FloatParts {
        let u = self.to_bits();
        FloatParts {
            sign: (u >> 31) != 0,
            exponent: (u >> 23) & 0xff,
            mantissa: (u & 0x7fffff) as u64,
        }
    }
}

impl BitView for f64 {
    type Bits = u64;

    const EXPONENT_BITS: u32 = 11;
    const MANTISSA_BITS: u32 = 52;

    #[inline(always)]
    fn bits_of(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn value_of(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    #[inline]
    fn parts(self) -> FloatParts {
        let u = self.to_bits();
        FloatParts {
            sign: (u >> 63) != 0,
            exponent: ((u >> 52) & 0x7ff) as u32,
            mantissa: u & 0x000f_ffff_ffff_ffff,
        }
    }
}

impl FloatParts {
    /// Reassembles the binary32 encoding.
    #[inline]
    pub const fn to_f32(self) -> f32 {
        f32::from_bits(
            ((self.sign as u32) << 31)
                | ((self.exponent & 0xff) << 23)
                | (self.mantissa as u32 & 0x7fffff),
        )
    }

    /// Reassembles the binary64 encoding.
    #[inline]
    pub const fn to_f64(self) -> f64 {
        f64::from_bits(
            ((self.sign as u64) << 63)
                | (((self.exponent & 0x7ff) as u64) << 52)
                | (self.mantissa & 0x000f_ffff_ffff_ffff),
        )
    }
}

/// Next binary32 value toward positive infinity.
#[inline]
pub(crate) const fn next_up_f32(x: f32) -> f32 {
    let u = x.to_bits();
    if x.is_nan() || u == 0x7f80_0000 {
        return x;
    }
    if u == 0x8000_0000 || u == 0 {
        return f32::from_bits(1);
    }
    if (u >> 31) == 0 {
        f32::from_bits(u + 1)
    } else {
        f32::from_bits(u - 1)
    }
}

/// Next binary32 value toward negative infinity.
#[inline]
pub(crate) const fn next_down_f32(x: f32) -> f32 {
    -next_up_f32(-x)
}

/// Shifts a binary32 subnormal into normalized position.
///
/// `au` is the encoding shifted left by one (sign dropped), as the callers keep it.
/// Returns the shifted word and the effective biased exponent, which is below one
/// for subnormal inputs.
#[inline]
pub(crate) const fn normalize_subnormal(au: u32) -> (u32, i32) {
    let nz = au.leading_zeros() as i32 - 7;
    (au << nz, 1 - nz)
}

const F32_BIAS: i32 = (1 << (<f32 as BitView>::EXPONENT_BITS - 1)) - 1;
const F32_MB: i32 = <f32 as BitView>::MANTISSA_BITS as i32;
const F32_MAX_EXPONENT: u32 = (1 << <f32 as BitView>::EXPONENT_BITS) - 1;

/// Tells whether a binary32 value is an integer, reading only its fields.
#[inline]
pub(crate) fn is_integer_f32(y: f32) -> bool {
    let p = y.parts();
    let e = p.exponent as i32 - F32_BIAS;
    if e < 0 {
        return p.exponent == 0 && p.mantissa == 0;
    }
    if e >= F32_MB {
        // no fraction bits left; infinities count, NaN does not
        return p.exponent != F32_MAX_EXPONENT || p.mantissa == 0;
    }
    p.mantissa & ((1 << (F32_MB - e)) - 1) == 0
}

/// Tells whether a binary32 value is an odd integer, reading only its fields.
#[inline]
pub(crate) fn is_odd_integer_f32(y: f32) -> bool {
    let p = y.parts();
    let e = p.exponent as i32 - F32_BIAS;
    if !(0..=F32_MB).contains(&e) {
        return false;
    }
    let m = p.mantissa | (1 << F32_MB);
    let s = F32_MB - e;
    m & ((1 << s) - 1) == 0 && (m >> s) & 1 != 0
}

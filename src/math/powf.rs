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
use crate::math::bits::{BitView, FloatParts, is_integer_f32, is_odd_integer_f32};
use crate::math::common::{f_fmla, pow2i, roundeven};
use crate::math::double_double::DoubleDouble;
use crate::math::rounding::{finish, round_f64_to_f32, ziv_accept};

/// Reciprocals 1 / (1 + j/32) rounded to 36 bits, j = 0..=32.
static IX: [u64; 33] = [
    0x3ff0000000000000,
    0x3fef07c1f07c0000,
    0x3fee1e1e1e1e0000,
    0x3fed41d41d420000,
    0x3fec71c71c720000,
    0x3febacf914c20000,
    0x3feaf286bca20000,
    0x3fea41a41a420000,
    0x3fe99999999a0000,
    0x3fe8f9c18f9c0000,
    0x3fe8618618620000,
    0x3fe7d05f417d0000,
    0x3fe745d1745d0000,
    0x3fe6c16c16c10000,
    0x3fe642c8590b0000,
    0x3fe5c9882b930000,
    0x3fe5555555550000,
    0x3fe4e5e0a72f0000,
    0x3fe47ae147ae0000,
    0x3fe4141414140000,
    0x3fe3b13b13b10000,
    0x3fe3521cfb2b0000,
    0x3fe2f684bda10000,
    0x3fe29e4129e40000,
    0x3fe2492492490000,
    0x3fe1f7047dc10000,
    0x3fe1a7b9611a0000,
    0x3fe15b1e5f750000,
    0x3fe1111111110000,
    0x3fe0c9714fbd0000,
    0x3fe0842108420000,
    0x3fe0410410410000,
    0x3fe0000000000000,
];

/// -log2(IX[j]) split in a short leading part and a tail.
static LIX: [DoubleDouble; 33] = [
    DoubleDouble::from_bit_pair((0x0000000000000000, 0x0000000000000000)),
    DoubleDouble::from_bit_pair((0x3f04b229b87f3f89, 0xbfa6c00000000000)),
    DoubleDouble::from_bit_pair((0xbf0fb7d654235799, 0xbfb6600000000000)),
    DoubleDouble::from_bit_pair((0xbf38b119b2c9c87b, 0xbfc0800000000000)),
    DoubleDouble::from_bit_pair((0xbeca39fa6533294d, 0xbfc5c00000000000)),
    DoubleDouble::from_bit_pair((0xbf3ebc5b663dd4b8, 0xbfcac00000000000)),
    DoubleDouble::from_bit_pair((0x3f1f4a37fe0fa46f, 0xbfcfc00000000000)),
    DoubleDouble::from_bit_pair((0xbf301eac33103e6b, 0xbfd2400000000000)),
    DoubleDouble::from_bit_pair((0x3f361ed0d15725e0, 0xbfd4a00000000000)),
    DoubleDouble::from_bit_pair((0xbf210e6ceb499ba9, 0xbfd6e00000000000)),
    DoubleDouble::from_bit_pair((0x3f3115db8ada837d, 0xbfd9200000000000)),
    DoubleDouble::from_bit_pair((0xbf3fafdce266d7ae, 0xbfdb400000000000)),
    DoubleDouble::from_bit_pair((0xbf3d4f80cd19906f, 0xbfdd600000000000)),
    DoubleDouble::from_bit_pair((0x3f35ea5ccd0a7396, 0xbfdf800000000000)),
    DoubleDouble::from_bit_pair((0xbf20500d67fe62eb, 0x3fde800000000000)),
    DoubleDouble::from_bit_pair((0x3f19dc2d41aa4626, 0x3fdc800000000000)),
    DoubleDouble::from_bit_pair((0x3f4ff2e2ff321344, 0x3fda800000000000)),
    DoubleDouble::from_bit_pair((0x3f4130157f4c3a3e, 0x3fd8a00000000000)),
    DoubleDouble::from_bit_pair((0x3f461ed0cad929cc, 0x3fd6c00000000000)),
    DoubleDouble::from_bit_pair((0xbf42089a632d7949, 0x3fd5000000000000)),
    DoubleDouble::from_bit_pair((0x3f47fdc6dfb2d21a, 0x3fd3200000000000)),
    DoubleDouble::from_bit_pair((0x3f4380a6c36088f3, 0x3fd1600000000000)),
    DoubleDouble::from_bit_pair((0xbed3ab7dc7ba81ac, 0x3fcf600000000000)),
    DoubleDouble::from_bit_pair((0xbf1cc2c0061ef1a2, 0x3fcc000000000000)),
    DoubleDouble::from_bit_pair((0x3f3130157c97bbe0, 0x3fc8a00000000000)),
    DoubleDouble::from_bit_pair((0x3f1ee14ff34c4128, 0x3fc5600000000000)),
    DoubleDouble::from_bit_pair((0x3f3b5b854c4fde69, 0x3fc2200000000000)),
    DoubleDouble::from_bit_pair((0x3f2635d1df7cb0b5, 0x3fbe000000000000)),
    DoubleDouble::from_bit_pair((0xbf23f6d2636c101e, 0x3fb7e00000000000)),
    DoubleDouble::from_bit_pair((0xbf133567f1b193a4, 0x3fb1c00000000000)),
    DoubleDouble::from_bit_pair((0xbf18d66c5313a71d, 0x3fa7800000000000)),
    DoubleDouble::from_bit_pair((0x3eef7430ee200e00, 0x3f97400000000000)),
    DoubleDouble::from_bit_pair((0x0000000000000000, 0x0000000000000000)),
];

/// log2(1 + z) / z
static C: [u64; 8] = [
    0x3ff71547652b82fe,
    0xbfe71547652b82fe,
    0x3fdec709dc3a2d0b,
    0xbfd71547652bc4a9,
    0x3fd2776c441b72e0,
    0xbfcec709bdf453ec,
    0x3fca6406efd4b877,
    0xbfc717d824a520f7,
];

/// (2^(h/16) - 1) / h
static CE: [u64; 6] = [
    0x3fa62e42fefa398b,
    0x3f4ebfbdff84555a,
    0x3eec6b08d4ad86d3,
    0x3e83b2ad1b1716a2,
    0x3e15d7472718ce9d,
    0x3da4a1d7f457ac56,
];

/// 2^(j/16)
static TB: [u64; 16] = [
    0x3ff0000000000000,
    0x3ff0b5586cf9890f,
    0x3ff172b83c7d517b,
    0x3ff2387a6e756238,
    0x3ff306fe0a31b715,
    0x3ff3dea64c123422,
    0x3ff4bfdad5362a27,
    0x3ff5ab07dd485429,
    0x3ff6a09e667f3bcd,
    0x3ff7a11473eb0187,
    0x3ff8ace5422aa0db,
    0x3ff9c49182a3f090,
    0x3ffae89f995ad3ad,
    0x3ffc199bdd85529c,
    0x3ffd5818dcfba487,
    0x3ffea4afa2a490da,
];

/// 2 * atanh(z) / (z * ln 2) in powers of z^2.
static CH: [DoubleDouble; 13] = [
    DoubleDouble::from_bit_pair((0x3c8777d0ffda2b89, 0x40071547652b82fe)),
    DoubleDouble::from_bit_pair((0x3c8d27f04ff73b3a, 0x3feec709dc3a03fd)),
    DoubleDouble::from_bit_pair((0x3c8e4b514251d0ec, 0x3fe2776c50ef9bfe)),
    DoubleDouble::from_bit_pair((0x3c6de632dc7f6998, 0x3fda61762a7aded9)),
    DoubleDouble::from_bit_pair((0x3c7a320ec342ddb3, 0x3fd484b13d7c02ae)),
    DoubleDouble::from_bit_pair((0xbc6e6425ce9a74a4, 0x3fd0c9a84993fd48)),
    DoubleDouble::from_bit_pair((0xbc603a175487feab, 0x3fcc68f568d8beaf)),
    DoubleDouble::from_bit_pair((0x3c6f04a3acf0bcf7, 0x3fc89f3b14657dfb)),
    DoubleDouble::from_bit_pair((0xbc568fdff6815a6f, 0x3fc5b9ad2f2d12a0)),
    DoubleDouble::from_bit_pair((0x3c345b052ace6c8e, 0x3fc3702165b88acb)),
    DoubleDouble::from_bit_pair((0xbc679a94f62fb524, 0x3fc1998f60f2f005)),
    DoubleDouble::from_bit_pair((0xbc451f063387e470, 0x3fbf9bc428e30809)),
    DoubleDouble::from_bit_pair((0x3c62ba6a2e1a625b, 0x3fc1ac0ab871296a)),
];

/// 2^h
static CE_DD: [DoubleDouble; 18] = [
    DoubleDouble::from_bit_pair((0x39df7d70599926c4, 0x3ff0000000000000)),
    DoubleDouble::from_bit_pair((0x3c7abc9e3b39856b, 0x3fe62e42fefa39ef)),
    DoubleDouble::from_bit_pair((0xbc65e43a540c283d, 0x3fcebfbdff82c58f)),
    DoubleDouble::from_bit_pair((0xbc4d3316277451e6, 0x3fac6b08d704a0c0)),
    DoubleDouble::from_bit_pair((0x3c14e66003ba7f85, 0x3f83b2ab6fba4e77)),
    DoubleDouble::from_bit_pair((0x3bd07183d46a9697, 0x3f55d87fe78a6731)),
    DoubleDouble::from_bit_pair((0x3bcbc81afca4c930, 0x3f2430912f86c787)),
    DoubleDouble::from_bit_pair((0xbb8e63f6f0116f4c, 0x3eeffcbfc588b0c7)),
    DoubleDouble::from_bit_pair((0xbb530542d98ea4a5, 0x3eb62c0223a5c826)),
    DoubleDouble::from_bit_pair((0xbaf9285a132ce05e, 0x3e7b5253d395e7c6)),
    DoubleDouble::from_bit_pair((0xbac9ac1facae1b88, 0x3e3e4cf5158b7b01)),
    DoubleDouble::from_bit_pair((0xba44fb82adebd76b, 0x3dfe8cac7351a7a8)),
    DoubleDouble::from_bit_pair((0x3a484ad0689d30e0, 0x3dbc3bd65182746d)),
    DoubleDouble::from_bit_pair((0xba0254c6535279ce, 0x3d78161931d765c3)),
    DoubleDouble::from_bit_pair((0xb9df4f2fdc14fb82, 0x3d3314943a26c9e2)),
    DoubleDouble::from_bit_pair((0x398f0d06a5a63c41, 0x3cec36e53b459602)),
    DoubleDouble::from_bit_pair((0xb945632c551ae458, 0x3ca397637b3876a4)),
    DoubleDouble::from_bit_pair((0xb8cfd134923d52b4, 0x3c598fbfefdddb51)),
];

/// Relative error bound of the fast path.
const FAST_ERR: f64 = f64::from_bits(0x3d06000000000000); // 44 * 2^-52

/// log2 and exp2 in double-double for `x > 0` finite.
///
/// Returns a double whose binary32 rounding in any direction is the correctly rounded
/// x^y. Outputs that are binary32 values after the boundary adjustment are exact.
fn powf_accurate(x: f32, y: f32) -> f64 {
    let y = y as f64;
    let parts = (x as f64).parts();
    let mut e = parts.exponent as i32 - 0x3ff;
    // around 2 above sqrt(2), around 1 below
    let k = parts.mantissa > 0x6a09e667f3bcd;
    e += k as i32;
    let xr = FloatParts {
        sign: false,
        exponent: 0x3ff,
        mantissa: parts.mantissa,
    }
    .to_f64();
    let o = if k { 2.0 } else { 1.0 };
    let xm = xr - o;
    let xp = xr + o;
    let zh = xm / xp;
    let zl = f_fmla(zh, -xp, xm) / xp;
    let z = DoubleDouble::new(zl, zh);
    let z2 = DoubleDouble::mul(z, z);
    let p = DoubleDouble::poly_dd(z2, &CH);
    let l = DoubleDouble::mul_f64(DoubleDouble::mul(z, p), y);
    let ey = e as f64 * y;
    let eh = ey + l.hi;
    let el = ((ey - eh) + l.hi) + l.lo;
    let ee = roundeven(eh);
    let q = DoubleDouble::poly_dd(DoubleDouble::new(el, eh - ee), &CE_DD);
    let (mut eh, mut el) = (q.hi, q.lo);

    // a result on a binary32 boundary shows up as a low part with 29 equal bits
    const TAIL_MASK: u64 = (1 << 29) - 1;
    let tail = (el.to_bits() >> 23) & TAIL_MASK;
    let (half_step, step) = if eh < 1. {
        (
            f64::from_bits(0x3c90000000000000),
            f64::from_bits(0x3ca0000000000000),
        )
    } else {
        (
            f64::from_bits(0x3ca0000000000000),
            f64::from_bits(0x3cb0000000000000),
        )
    };
    if tail == TAIL_MASK {
        if el >= half_step {
            el -= step;
            eh += step;
        } else if el <= -half_step {
            el += step;
            eh -= step;
        }
    } else if tail == 0 {
        if el > 0. {
            if el >= step {
                el -= step;
                eh += step;
            }
        } else if el <= -step {
            el += step;
            eh -= step;
        }
    }
    let lh = eh.to_bits();
    if (lh & 0xfffffff) == 0 && el.abs() > f64::from_bits(0x3a40000000000000) {
        // not exact, step off the boundary toward the low part
        eh = if el < 0. {
            f64::from_bits(lh - 1)
        } else {
            f64::from_bits(lh + 1)
        };
    }
    eh * pow2i(ee as i32)
}

/// x^y for finite `x > 0`, `y` finite and nonzero; `negative` flips the sign of the result.
fn powf_finite(x: f32, y0: f32, negative: bool, mode: RoundingMode) -> f32 {
    let sign = if negative { -1.0 } else { 1.0 };
    let y = y0 as f64;
    const MB: u32 = <f64 as BitView>::MANTISSA_BITS;
    let parts = (x as f64).parts();
    let m = parts.mantissa;
    let mut e = parts.exponent as i32 - 0x3ff;
    let j = ((m + (1u64 << (MB - 6))) >> (MB - 5)) as usize;
    e += (j > 13) as i32;
    let xd = FloatParts {
        sign: false,
        exponent: 0x3ff,
        mantissa: m,
    }
    .to_f64();
    // x = 2^e * xd, xd * IX[j] - 1 is tiny
    let z = f_fmla(xd, f64::from_bits(IX[j]), -1.0);

    let z2 = z * z;
    let z4 = z2 * z2;
    let c6 = f_fmla(z, f64::from_bits(C[7]), f64::from_bits(C[6]));
    let c4 = f_fmla(z, f64::from_bits(C[5]), f64::from_bits(C[4]));
    let c2 = f_fmla(z, f64::from_bits(C[3]), f64::from_bits(C[2]));
    let mut c0 = f_fmla(z, f64::from_bits(C[1]), f64::from_bits(C[0]));
    c0 = f_fmla(z2, c2, c0);
    let c4 = f_fmla(z2, c6, c4);
    c0 = f_fmla(z4, c4, c0);

    let l = f_fmla(z, c0, -LIX[j].lo);
    let y16 = y * 16.;
    let zt = (e as f64 - LIX[j].hi) * y16;
    // 16 * y * log2(x)
    let z = f_fmla(l, y16, zt);
    if z > 2048. {
        return finish(sign * f64::from_bits(0x4fd0000000000000), mode); // 2^254
    }
    if z < -2400. {
        return finish(sign * f64::from_bits(0x3030000000000000), mode); // 2^-252
    }
    let ia = z.floor();
    let h = f_fmla(l, y16, zt - ia);
    let il = ia as i64;
    let jl = il & 0xf;
    let el = (il - jl) >> 4;
    let s = f64::from_bits(TB[jl as usize]) * pow2i(el as i32);
    let h2 = h * h;
    let mut c0 = f_fmla(h, f64::from_bits(CE[1]), f64::from_bits(CE[0]));
    let c2 = f_fmla(h, f64::from_bits(CE[3]), f64::from_bits(CE[2]));
    let c4 = f_fmla(h, f64::from_bits(CE[5]), f64::from_bits(CE[4]));
    c0 = f_fmla(h2, f_fmla(h2, c4, c2), c0);
    let w = s * h;
    let r = sign * f_fmla(w, c0, s);
    let err = r.abs() * FAST_ERR;
    let (lb, ub) = (r - err, r + err);
    // exact results are only recognized by the accurate path
    let holds_f32 = round_f64_to_f32(lb, RoundingMode::Upward) as f64 <= ub;
    if !holds_f32 && ziv_accept(lb, ub, mode) {
        return finish(r, mode);
    }
    finish(sign * powf_accurate(x, y0), mode)
}

/// Correctly rounded x^y in the given rounding direction.
///
/// Special values follow C99 Annex F. A negative finite `x` with a non-integer `y` is a
/// domain error (NaN, `INVALID`, [`MathError::Domain`]); a zero `x` with negative `y` is a
/// pole (infinity, `DIVIDE_BY_ZERO`, [`MathError::Pole`]).
pub fn powf_with(x: f32, y: f32, mode: RoundingMode) -> f32 {
    let tx = x.bits_of();
    let ty = y.bits_of();
    let ax = tx & 0x7fff_ffff;
    let ay = ty & 0x7fff_ffff;
    if ay == 0 || tx == 0x3f80_0000 {
        return 1.0;
    }
    if ax > 0x7f80_0000 || ay > 0x7f80_0000 {
        return x + y; // nan
    }
    let x_negative = x.parts().sign;
    let y_negative = y.parts().sign;
    let y_odd = is_odd_integer_f32(y);
    if ay == 0x7f80_0000 {
        if ax == 0x3f80_0000 {
            return 1.0; // x = -1
        }
        return if (ax < 0x3f80_0000) == y_negative {
            f32::INFINITY
        } else {
            0.0
        };
    }
    if ax == 0x7f80_0000 {
        let r = if y_negative { 0.0 } else { f32::INFINITY };
        return if x_negative && y_odd { -r } else { r };
    }
    if ax == 0 {
        if y_negative {
            signal(MathError::Pole, FpExceptions::DIVIDE_BY_ZERO);
            return if y_odd {
                f32::INFINITY.copysign(x)
            } else {
                f32::INFINITY
            };
        }
        return if y_odd { x } else { 0.0 };
    }
    if x_negative && !is_integer_f32(y) {
        signal(MathError::Domain, FpExceptions::INVALID);
        return f32::NAN;
    }
    if ty == 0x3f80_0000 {
        return x;
    }
    powf_finite(x.abs(), y, x_negative && y_odd, mode)
}

/// Correctly rounded x^y in the calling thread's rounding direction.
#[inline]
pub fn powf(x: f32, y: f32) -> f32 {
    powf_with(x, y, rounding_mode())
}

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
#![allow(dead_code)]

use crmath::RoundingMode;
use std::cmp::Ordering;

/// Relative distance under which an `f64` reference is too close to a rounding
/// boundary to decide the binary32 result.
const GUARD: f64 = 1.0 / (1u64 << 40) as f64;

pub fn step_up(x: f32) -> f32 {
    if x.is_nan() || x == f32::INFINITY {
        return x;
    }
    if x == 0. {
        return f32::from_bits(1);
    }
    let u = x.to_bits();
    if x > 0. {
        f32::from_bits(u + 1)
    } else {
        f32::from_bits(u - 1)
    }
}

pub fn step_down(x: f32) -> f32 {
    -step_up(-x)
}

/// Rounds a double to binary32 in the given direction.
pub fn round_to_f32(v: f64, mode: RoundingMode) -> f32 {
    let n = v as f32;
    if mode == RoundingMode::Nearest || v.is_nan() || n as f64 == v {
        return n;
    }
    let (lo, hi) = if (n as f64) < v {
        (n, step_up(n))
    } else {
        (step_down(n), n)
    };
    match mode {
        RoundingMode::Upward => hi,
        RoundingMode::Downward => lo,
        _ => {
            if v > 0. {
                lo
            } else {
                hi
            }
        }
    }
}

/// Rounds an `f64` reference whose relative error is far below [`GUARD`].
///
/// Returns `None` when the reference could round either way.
pub fn guarded(v: f64, mode: RoundingMode) -> Option<f32> {
    if !v.is_finite() {
        return None;
    }
    let d = v.abs() * GUARD;
    let a = round_to_f32(v - d, mode);
    let b = round_to_f32(v + d, mode);
    if a.to_bits() == b.to_bits() {
        Some(a)
    } else {
        None
    }
}

pub fn reference_sinf(x: f32, mode: RoundingMode) -> Option<f32> {
    guarded((x as f64).sin(), mode)
}

pub fn reference_powf(x: f32, y: f32, mode: RoundingMode) -> Option<f32> {
    guarded((x as f64).powf(y as f64), mode)
}

/// Mantissa and exponent of a positive finite binary32, `x = m * 2^e`.
fn decompose(x: f32) -> (u128, i32) {
    let u = x.to_bits() & 0x7fff_ffff;
    let e = (u >> 23) as i32;
    let m = (u & 0x7f_ffff) as u128;
    if e == 0 {
        (m, -149)
    } else {
        (m | (1 << 23), e - 150)
    }
}

/// Compares `(m * 2^e)^3` with `|x|` exactly.
fn cube_cmp(m: u128, e: i32, x: f32) -> Ordering {
    let (mx, ex) = decompose(x);
    let a = m * m * m;
    if a == 0 || mx == 0 {
        return a.cmp(&mx);
    }
    let d = 3 * e - ex;
    let free_a = a.leading_zeros() as i32 - 1;
    let free_b = mx.leading_zeros() as i32 - 1;
    if d >= 0 {
        if d > free_a {
            return Ordering::Greater;
        }
        (a << d).cmp(&mx)
    } else {
        if -d > free_b {
            return Ordering::Less;
        }
        a.cmp(&(mx << -d))
    }
}

/// Checks a cube root result by exact integer arithmetic, in any direction.
pub fn is_correct_cbrtf(x: f32, r: f32, mode: RoundingMode) -> bool {
    if x.is_nan() {
        return r.is_nan();
    }
    if x == 0. || x.is_infinite() {
        return r.to_bits() == x.to_bits();
    }
    if r.is_sign_negative() != x.is_sign_negative() || r == 0. || !r.is_finite() {
        return false;
    }
    if x < 0. {
        let mirrored = match mode {
            RoundingMode::Upward => RoundingMode::Downward,
            RoundingMode::Downward => RoundingMode::Upward,
            m => m,
        };
        return is_correct_cbrtf(-x, -r, mirrored);
    }
    let (m, e) = decompose(r);
    let exact = cube_cmp(m, e, x);
    match mode {
        RoundingMode::Downward | RoundingMode::TowardZero => {
            let (mu, eu) = decompose(step_up(r));
            exact != Ordering::Greater && cube_cmp(mu, eu, x) == Ordering::Greater
        }
        RoundingMode::Upward => {
            let (md, ed) = decompose(step_down(r));
            exact != Ordering::Less && cube_cmp(md, ed, x) == Ordering::Less
        }
        RoundingMode::Nearest => {
            let upper = cube_cmp(2 * m + 1, e - 1, x);
            let lower = if m == 1 << 23 {
                cube_cmp(4 * m - 1, e - 2, x)
            } else {
                cube_cmp(2 * m - 1, e - 1, x)
            };
            upper == Ordering::Greater && lower == Ordering::Less
        }
    }
}

/// Bit equality where every NaN matches every other NaN and the zeros differ.
pub fn is_equal(a: f32, b: f32) -> bool {
    (a.is_nan() && b.is_nan()) || a.to_bits() == b.to_bits()
}

/// Direction that rounds `-v` the way `mode` rounds `v`.
pub fn mirror(mode: RoundingMode) -> RoundingMode {
    match mode {
        RoundingMode::Upward => RoundingMode::Downward,
        RoundingMode::Downward => RoundingMode::Upward,
        m => m,
    }
}

/// Parses a C99 hexadecimal float literal holding a binary32 value.
pub fn parse_hex_f32(s: &str) -> Option<f32> {
    let (negative, body) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let v = match body {
        "nan" => f32::NAN,
        "inf" => f32::INFINITY,
        _ => {
            let body = body.strip_prefix("0x")?;
            let (mantissa, exponent) = body.split_once('p')?;
            let mut exp: i32 = exponent.parse().ok()?;
            let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
            let mut m = 0u64;
            for c in int_part.chars() {
                m = (m << 4) | c.to_digit(16)? as u64;
            }
            for c in frac_part.chars() {
                m = (m << 4) | c.to_digit(16)? as u64;
                exp -= 4;
            }
            if m >= 1 << 53 {
                return None;
            }
            let v = m as f64 * 2f64.powi(exp);
            let r = v as f32;
            if r as f64 != v {
                return None;
            }
            r
        }
    };
    Some(if negative { -v } else { v })
}

/// Reads a worst-case list: one case per line, `#` starts a comment.
pub fn read_cases(text: &str) -> Vec<Vec<f32>> {
    text.lines()
        .map(|l| l.split('#').next().unwrap_or("").trim())
        .filter(|l| !l.is_empty())
        .map(|l| {
            l.split_whitespace()
                .map(|t| parse_hex_f32(t).unwrap_or_else(|| panic!("bad hex float {t}")))
                .collect()
        })
        .collect()
}

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
use crmath::{RoundingMode, cbrtf_with, powf_with, sinf_with, take_exceptions};
use rand::Rng;

/// Counts how often the correctly rounded result differs from libm's.
fn sweep(
    name: &str,
    values: impl Iterator<Item = f32>,
    ours: impl Fn(f32) -> f32,
    libm: impl Fn(f32) -> f32,
) {
    let mut total = 0usize;
    let mut differ = 0usize;
    let mut worst = 0u32;
    for x in values {
        let a = ours(x);
        let b = libm(x);
        total += 1;
        if a.is_nan() && b.is_nan() {
            continue;
        }
        if a.to_bits() != b.to_bits() {
            differ += 1;
            worst = worst.max((a.to_bits() as i64 - b.to_bits() as i64).unsigned_abs() as u32);
        }
    }
    println!("{name}: {differ} of {total} differ from libm, max distance {worst} ulp");
}

fn main() {
    let step = 0x1fff;
    let positive = || (0u32..0x7f80_0000).step_by(step).map(f32::from_bits);

    sweep(
        "cbrtf",
        positive(),
        |x| cbrtf_with(x, RoundingMode::Nearest),
        libm::cbrtf,
    );
    sweep(
        "sinf",
        positive(),
        |x| sinf_with(x, RoundingMode::Nearest),
        libm::sinf,
    );

    let mut rng = rand::rng();
    let pairs: Vec<(f32, f32)> = (0..200_000)
        .map(|_| (rng.random_range(0.0f32..16.0), rng.random_range(-24.0f32..24.0)))
        .collect();
    let mut differ = 0usize;
    for &(x, y) in pairs.iter() {
        if powf_with(x, y, RoundingMode::Nearest).to_bits() != libm::powf(x, y).to_bits() {
            differ += 1;
        }
    }
    println!("powf: {differ} of {} differ from libm", pairs.len());

    for mode in RoundingMode::ALL {
        let x = 2.0f32;
        println!(
            "{mode:?}: cbrt(2) = {:e}, sin(2) = {:e}, pow(2, 0.5) = {:e}",
            cbrtf_with(x, mode),
            sinf_with(x, mode),
            powf_with(x, 0.5, mode)
        );
    }
    println!("raised: {:?}", take_exceptions());
}

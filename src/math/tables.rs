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
//! Shared constant tables of the sine engine.
use crate::math::double_double::DoubleDouble;

/// sin(k*pi/16), k = 0..32, rounded to double.
pub(crate) static SIN_K_PI_16: [u64; 32] = [
    0x0000000000000000,
    0x3fc8f8b83c69a60b,
    0x3fd87de2a6aea963,
    0x3fe1c73b39ae68c8,
    0x3fe6a09e667f3bcd,
    0x3fea9b66290ea1a3,
    0x3fed906bcf328d46,
    0x3fef6297cff75cb0,
    0x3ff0000000000000,
    0x3fef6297cff75cb0,
    0x3fed906bcf328d46,
    0x3fea9b66290ea1a3,
    0x3fe6a09e667f3bcd,
    0x3fe1c73b39ae68c8,
    0x3fd87de2a6aea963,
    0x3fc8f8b83c69a60b,
    0x0000000000000000,
    0xbfc8f8b83c69a60b,
    0xbfd87de2a6aea963,
    0xbfe1c73b39ae68c8,
    0xbfe6a09e667f3bcd,
    0xbfea9b66290ea1a3,
    0xbfed906bcf328d46,
    0xbfef6297cff75cb0,
    0xbff0000000000000,
    0xbfef6297cff75cb0,
    0xbfed906bcf328d46,
    0xbfea9b66290ea1a3,
    0xbfe6a09e667f3bcd,
    0xbfe1c73b39ae68c8,
    0xbfd87de2a6aea963,
    0xbfc8f8b83c69a60b,
];

/// sin(k*pi/16), k = 0..32, as (lo, hi) pairs.
pub(crate) static SIN_K_PI_16_DD: [DoubleDouble; 32] = [
    DoubleDouble::from_bit_pair((0x0000000000000000, 0x0000000000000000)),
    DoubleDouble::from_bit_pair((0xbc626d19b9ff8d82, 0x3fc8f8b83c69a60b)),
    DoubleDouble::from_bit_pair((0xbc672cedd3d5a610, 0x3fd87de2a6aea963)),
    DoubleDouble::from_bit_pair((0x3c8b25dd267f6600, 0x3fe1c73b39ae68c8)),
    DoubleDouble::from_bit_pair((0xbc8bdd3413b26456, 0x3fe6a09e667f3bcd)),
    DoubleDouble::from_bit_pair((0x3c39f630e8b6dac8, 0x3fea9b66290ea1a3)),
    DoubleDouble::from_bit_pair((0x3c7457e610231ac2, 0x3fed906bcf328d46)),
    DoubleDouble::from_bit_pair((0x3c7562172a361fd3, 0x3fef6297cff75cb0)),
    DoubleDouble::from_bit_pair((0x0000000000000000, 0x3ff0000000000000)),
    DoubleDouble::from_bit_pair((0x3c7562172a361fd3, 0x3fef6297cff75cb0)),
    DoubleDouble::from_bit_pair((0x3c7457e610231ac2, 0x3fed906bcf328d46)),
    DoubleDouble::from_bit_pair((0x3c39f630e8b6dac8, 0x3fea9b66290ea1a3)),
    DoubleDouble::from_bit_pair((0xbc8bdd3413b26456, 0x3fe6a09e667f3bcd)),
    DoubleDouble::from_bit_pair((0x3c8b25dd267f6600, 0x3fe1c73b39ae68c8)),
    DoubleDouble::from_bit_pair((0xbc672cedd3d5a610, 0x3fd87de2a6aea963)),
    DoubleDouble::from_bit_pair((0xbc626d19b9ff8d82, 0x3fc8f8b83c69a60b)),
    DoubleDouble::from_bit_pair((0x0000000000000000, 0x0000000000000000)),
    DoubleDouble::from_bit_pair((0x3c626d19b9ff8d82, 0xbfc8f8b83c69a60b)),
    DoubleDouble::from_bit_pair((0x3c672cedd3d5a610, 0xbfd87de2a6aea963)),
    DoubleDouble::from_bit_pair((0xbc8b25dd267f6600, 0xbfe1c73b39ae68c8)),
    DoubleDouble::from_bit_pair((0x3c8bdd3413b26456, 0xbfe6a09e667f3bcd)),
    DoubleDouble::from_bit_pair((0xbc39f630e8b6dac8, 0xbfea9b66290ea1a3)),
    DoubleDouble::from_bit_pair((0xbc7457e610231ac2, 0xbfed906bcf328d46)),
    DoubleDouble::from_bit_pair((0xbc7562172a361fd3, 0xbfef6297cff75cb0)),
    DoubleDouble::from_bit_pair((0x0000000000000000, 0xbff0000000000000)),
    DoubleDouble::from_bit_pair((0xbc7562172a361fd3, 0xbfef6297cff75cb0)),
    DoubleDouble::from_bit_pair((0xbc7457e610231ac2, 0xbfed906bcf328d46)),
    DoubleDouble::from_bit_pair((0xbc39f630e8b6dac8, 0xbfea9b66290ea1a3)),
    DoubleDouble::from_bit_pair((0x3c8bdd3413b26456, 0xbfe6a09e667f3bcd)),
    DoubleDouble::from_bit_pair((0xbc8b25dd267f6600, 0xbfe1c73b39ae68c8)),
    DoubleDouble::from_bit_pair((0x3c672cedd3d5a610, 0xbfd87de2a6aea963)),
    DoubleDouble::from_bit_pair((0x3c626d19b9ff8d82, 0xbfc8f8b83c69a60b)),
];

/// Taylor coefficients of sin(pi*z/16)/z in powers of z^2.
pub(crate) static SIN_PI_16_DD: [DoubleDouble; 10] = [
    DoubleDouble::from_bit_pair((0x3c61a62633145c07, 0x3fc921fb54442d18)),
    DoubleDouble::from_bit_pair((0x3bf05511c68476a8, 0xbf54abbce625be53)),
    DoubleDouble::from_bit_pair((0xbb56dc0cbddb0fc3, 0x3ec466bc6775aae2)),
    DoubleDouble::from_bit_pair((0x3ac066847a026e69, 0xbe232d2cce62bd86)),
    DoubleDouble::from_bit_pair((0xba11be14e6e8854a, 0x3d750783487ee782)),
    DoubleDouble::from_bit_pair((0xb9588ef203b0a336, 0xbcbe3074fde8871f)),
    DoubleDouble::from_bit_pair((0x38894682b2571263, 0x3bfe8f434d018d63)),
    DoubleDouble::from_bit_pair((0x37dbab97c50b4cd0, 0xbb36fadb9f155744)),
    DoubleDouble::from_bit_pair((0x36f4fe55050e576a, 0x3a6aaec32af93359)),
    DoubleDouble::from_bit_pair((0xb5f6d424c0620248, 0xb998a404211f9547)),
];

/// Taylor coefficients of cos(pi*z/16) in powers of z^2.
pub(crate) static COS_PI_16_DD: [DoubleDouble; 10] = [
    DoubleDouble::from_bit_pair((0x0000000000000000, 0x3ff0000000000000)),
    DoubleDouble::from_bit_pair((0xbc3692b71366cc04, 0xbf93bd3cc9be45de)),
    DoubleDouble::from_bit_pair((0xbbb32b33f87fc145, 0x3f103c1f081b5ac4)),
    DoubleDouble::from_bit_pair((0x3acd582920937625, 0xbe755d3c7e3cbffa)),
    DoubleDouble::from_bit_pair((0xba37362f495c096d, 0x3dce1f506891babb)),
    DoubleDouble::from_bit_pair((0x39b5961232276df6, 0xbd1a6d1f2a204a8c)),
    DoubleDouble::from_bit_pair((0xb8fc8a14c8bd6bc5, 0x3c5f9d38a3763cc3)),
    DoubleDouble::from_bit_pair((0xb826de1e0a0c23b9, 0xbb9b6e24f44b128f)),
    DoubleDouble::from_bit_pair((0xb775a3cd1a11c7a2, 0x3ad20c62c2f2d7f5)),
    DoubleDouble::from_bit_pair((0xb6a215803afbd5f8, 0xba02a0c591af8314)),
];

/// Input whose correctly rounded image is stored rather than computed.
///
/// `hi + lo` is exact in double precision and lies on the same side of every binary32
/// rounding boundary as the true value, so rounding it in any direction gives the
/// correct result. Entries describe positive inputs; odd functions apply the sign.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct HardCase {
    pub(crate) input: u32,
    pub(crate) hi: u32,
    pub(crate) lo: u32,
}

impl HardCase {
    #[inline]
    pub(crate) const fn new(input: u32, hi: u32, lo: u32) -> Self {
        HardCase { input, hi, lo }
    }

    #[inline]
    pub(crate) fn value(&self) -> f64 {
        DoubleDouble::new(f32::from_bits(self.lo) as f64, f32::from_bits(self.hi) as f64).to_f64()
    }
}

/// Sine inputs the fast path cannot round, sorted by input.
pub(crate) static SIN_HARD_CASES: [HardCase; 4] = [
    HardCase::new(0x3f3adc51, 0x3f2ab445, 0xb2800000),
    HardCase::new(0x3fa7832a, 0x3f7741b6, 0xb2800000),
    HardCase::new(0x4116cbe4, 0xb2ccde2e, 0x26000000),
    HardCase::new(0x46199998, 0xbeb1fa5d, 0xb2000000),
];

/// Looks up the absolute input bits in a sorted hard-case table.
#[inline]
pub(crate) fn find_hard_case(table: &[HardCase], abs_bits: u32) -> Option<&HardCase> {
    table
        .binary_search_by_key(&abs_bits, |e| e.input)
        .ok()
        .map(|i| &table[i])
}

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
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use crmath::{RoundingMode, cbrtf, cbrtf_with, powf, powf_with, sinf, sinf_with};

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::cbrtf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::cbrtf(i as f32));
            }
        })
    });

    c.bench_function("system: cbrtf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::cbrt(i as f32));
            }
        })
    });

    c.bench_function("crmath: cbrtf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cbrtf(i as f32));
            }
        })
    });

    c.bench_function("crmath: cbrtf upward", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cbrtf_with(i as f32, RoundingMode::Upward));
            }
        })
    });

    c.bench_function("libm::sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sinf(i as f32));
            }
        })
    });

    c.bench_function("system: sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::sin(i as f32));
            }
        })
    });

    c.bench_function("crmath: sinf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinf(i as f32));
            }
        })
    });

    c.bench_function("crmath: sinf large", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinf(i as f32 * 1e20));
            }
        })
    });

    c.bench_function("crmath: sinf downward", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sinf_with(i as f32, RoundingMode::Downward));
            }
        })
    });

    c.bench_function("libm::powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::powf(i as f32 / 1000.0, 2.4));
            }
        })
    });

    c.bench_function("system: powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f32::powf(i as f32 / 1000.0, 2.4));
            }
        })
    });

    c.bench_function("crmath: powf", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(powf(i as f32 / 1000.0, 2.4));
            }
        })
    });

    c.bench_function("crmath: powf toward zero", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(powf_with(i as f32 / 1000.0, 2.4, RoundingMode::TowardZero));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

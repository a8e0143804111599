// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fathom::consts::{U16, U32, U33, U64};
use fathom::{B0, B1, SignedInt, UnsignedInt};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn random_pairs(n: usize) -> Vec<(i32, i32)> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    (0..n).map(|_| (rng.r#gen(), rng.r#gen())).collect()
}

fn bench_multiply_accumulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply_accumulate");

    for &n in &SIZES {
        let pairs = random_pairs(n);
        let tagged: Vec<(SignedInt<U32>, SignedInt<U32>)> =
            pairs.iter().map(|&(a, b)| (a.into(), b.into())).collect();

        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("native_i64", n), &pairs, |b, pairs| {
            b.iter(|| {
                let mut acc = 0i64;
                for &(x, y) in black_box(pairs) {
                    acc = acc.wrapping_add(x as i64 * y as i64);
                }
                acc
            })
        });

        group.bench_with_input(BenchmarkId::new("width_int", n), &tagged, |b, tagged| {
            b.iter(|| {
                let mut acc = 0i64;
                for &(x, y) in black_box(tagged) {
                    let product: SignedInt<U64> = x * y;
                    acc = acc.wrapping_add(product.get());
                }
                acc
            })
        });
    }
    group.finish();
}

fn bench_narrowing(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrowing");

    for &n in &SIZES {
        let values: Vec<SignedInt<U33>> = random_pairs(n)
            .into_iter()
            .map(|(a, b)| SignedInt::<U32>::from(a) + SignedInt::<U32>::from(b))
            .collect();

        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("saturate", n), &values, |b, values| {
            b.iter(|| {
                values
                    .iter()
                    .map(|v| black_box(*v).saturate::<U16, B0>().get() as u64)
                    .sum::<u64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("truncate", n), &values, |b, values| {
            b.iter(|| {
                values
                    .iter()
                    .map(|v| black_box(*v).truncate::<U16, B1>().get() as i64)
                    .sum::<i64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("checked_cast", n), &values, |b, values| {
            b.iter(|| {
                values
                    .iter()
                    .filter_map(|v| black_box(*v).cast::<U32, B1>().into_option())
                    .map(|v| v.get() as i64)
                    .sum::<i64>()
            })
        });
    }
    group.finish();
}

fn bench_unsigned_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("unsigned_sum");
    let n = 100_000;
    let values: Vec<UnsignedInt<U32>> = random_pairs(n)
        .into_iter()
        .map(|(a, _)| UnsignedInt::<U32>::from(a as u32))
        .collect();

    group.throughput(Throughput::Elements(n as u64));
    group.bench_function("pairwise_width_int", |b| {
        b.iter(|| {
            black_box(&values)
                .chunks_exact(2)
                .map(|pair| (pair[0] + pair[1]).get())
                .fold(0u64, u64::wrapping_add)
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_multiply_accumulate,
    bench_narrowing,
    bench_unsigned_sum
);
criterion_main!(benches);

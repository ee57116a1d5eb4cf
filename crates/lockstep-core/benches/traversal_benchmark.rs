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
use lockstep_core::cursor::Cursor;
use lockstep_core::range::IntRange;
use lockstep_core::zip::zip;
use std::hint::black_box;

const SIZES: [usize; 3] = [1_000, 10_000, 100_000];

fn bench_range_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("range_traversal");

    for &n in SIZES.iter() {
        let range = IntRange::new(0_i64, (n as i64) * 3, 3);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("iterator", n), &range, |b, r| {
            b.iter(|| {
                let mut sum = 0_i64;
                for v in black_box(r).iter() {
                    sum = sum.wrapping_add(v);
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("cursor_loop", n), &range, |b, r| {
            b.iter(|| {
                let r = black_box(r);
                let mut sum = 0_i64;
                let mut at = r.begin();
                let end = r.end();
                while at != end {
                    sum = sum.wrapping_add(at.get());
                    at.advance();
                }
                black_box(sum)
            })
        });

        group.bench_with_input(BenchmarkId::new("std_step_by", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0_i64;
                for v in (0..(n as i64) * 3).step_by(3) {
                    sum = sum.wrapping_add(black_box(v));
                }
                black_box(sum)
            })
        });
    }
    group.finish();
}

fn bench_zip_traversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip_traversal");

    for &n in SIZES.iter() {
        let lhs: Vec<u64> = (0..n as u64).collect();
        let rhs: Vec<u64> = (0..n as u64).rev().collect();
        let mut out = vec![0_u64; n];
        group.throughput(Throughput::Elements(n as u64));

        group.bench_function(BenchmarkId::new("zip_iter", n), |b| {
            b.iter(|| {
                let mut acc = 0_u64;
                for (i, l, r) in zip((IntRange::up_to(n), black_box(&lhs), black_box(&rhs))) {
                    acc = acc.wrapping_add((i as u64) ^ (l * r));
                }
                black_box(acc)
            })
        });

        group.bench_function(BenchmarkId::new("zip_traverse_mut", n), |b| {
            b.iter(|| {
                let mut z = zip((&lhs, &rhs, &mut out));
                let mut walk = z.traverse();
                while let Some((l, r, o)) = walk.next() {
                    *o = l.wrapping_add(*r);
                }
                black_box(&out);
            })
        });

        group.bench_function(BenchmarkId::new("std_zip", n), |b| {
            b.iter(|| {
                let mut acc = 0_u64;
                for ((i, l), r) in (0..n).zip(black_box(&lhs)).zip(black_box(&rhs)) {
                    acc = acc.wrapping_add((i as u64) ^ (l * r));
                }
                black_box(acc)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_range_traversal, bench_zip_traversal);
criterion_main!(benches);

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
use rand::{Rng, SeedableRng, rngs::StdRng};
use seiche_scan::covering::CoveringScanner;
use seiche_scan::unique::UniqueRunScanner;
use std::hint::black_box;

const ALPHABET: u8 = 26;
const PATTERN_LEN: usize = 16;

fn random_symbols(rng: &mut StdRng, len: usize) -> Vec<u8> {
    (0..len).map(|_| rng.gen_range(0..ALPHABET)).collect()
}

fn bench_unique_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_run");
    let mut rng = StdRng::seed_from_u64(0x5E1C4E);

    for &len in &[1_000usize, 10_000, 100_000] {
        let sequence = random_symbols(&mut rng, len);
        let mut scanner = UniqueRunScanner::preallocated(ALPHABET as usize);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &sequence, |b, seq| {
            b.iter(|| black_box(scanner.scan(black_box(seq)).len()));
        });
    }
    group.finish();
}

fn bench_covering(c: &mut Criterion) {
    let mut group = c.benchmark_group("covering_window");
    let mut rng = StdRng::seed_from_u64(0x5E1C4E);

    for &len in &[1_000usize, 10_000, 100_000] {
        let haystack = random_symbols(&mut rng, len);
        let pattern = random_symbols(&mut rng, PATTERN_LEN);
        let mut scanner = CoveringScanner::preallocated(ALPHABET as usize);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(len),
            &(haystack, pattern),
            |b, (haystack, pattern)| {
                b.iter(|| black_box(scanner.scan(black_box(haystack), black_box(pattern))));
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_unique_run, bench_covering);
criterion_main!(benches);

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
use seiche_grid::grid::Grid;
use seiche_grid::propagation::PropagationEngine;
use std::hint::black_box;

/// Mostly dormant cells, a sprinkle of sources, some empty obstacles.
fn random_grid(rng: &mut StdRng, side: usize) -> Grid {
    let rows: Vec<Vec<u8>> = (0..side)
        .map(|_| {
            (0..side)
                .map(|_| {
                    let roll = rng.gen_range(0..100);
                    if roll < 2 {
                        2
                    } else if roll < 12 {
                        0
                    } else {
                        1
                    }
                })
                .collect()
        })
        .collect();
    Grid::from_digits(&rows).expect("generated grid is rectangular and well-encoded")
}

fn bench_propagation(c: &mut Criterion) {
    let mut group = c.benchmark_group("propagation");
    let mut rng = StdRng::seed_from_u64(0x6B1D);

    for &side in &[32usize, 128, 512] {
        let grid = random_grid(&mut rng, side);
        let mut engine = PropagationEngine::<i64>::preallocated(grid.num_cells());

        group.throughput(Throughput::Elements((side * side) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &grid, |b, grid| {
            b.iter(|| black_box(engine.run(black_box(grid)).round_count().raw()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_propagation);
criterion_main!(benches);

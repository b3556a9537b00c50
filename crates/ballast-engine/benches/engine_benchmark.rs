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

use ballast_engine::cyclic::CyclicSolver;
use ballast_engine::sweep::{pack, SweepSolver};
use ballast_engine::target::{Constraint, Target};
use ballast_model::catalog::{Catalog, CatalogBuilder, Track};
use ballast_search::monitor::composite::CompositeMonitor;
use ballast_search::monitor::deadline::DeadlineMonitor;
use ballast_search::monitor::quality::QualityMonitor;
use ballast_search::monitor::search_monitor::NoOpMonitor;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::time::Duration;

/// Deterministic pseudo-random track durations between 2 and 8 minutes,
/// so benchmark runs are comparable across machines and commits.
fn synthetic_catalog(track_count: usize, sort_longest_first: bool) -> Catalog<u64> {
    let mut state: u64 = 0x5DEECE66D;
    let mut builder = CatalogBuilder::with_capacity(track_count);
    for i in 0..track_count {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let seconds = 120 + (state >> 33) % 360;
        builder.push(Track::new(format!("Track {}", i + 1), seconds));
    }
    builder.sort_longest_first(sort_longest_first);
    builder.build()
}

fn bench_greedy_pack(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_pack");
    for track_count in [32usize, 256, 2048] {
        let catalog = synthetic_catalog(track_count, false);
        group.bench_with_input(
            BenchmarkId::from_parameter(track_count),
            &catalog,
            |b, catalog| b.iter(|| pack(black_box(catalog), black_box(1200u64))),
        );
    }
    group.finish();
}

fn bench_sweep_solver(c: &mut Criterion) {
    let catalog = synthetic_catalog(256, false);
    let target = Target::resolve(
        catalog.total(),
        catalog.longest(),
        &Constraint::SideCount(8),
        false,
    );

    c.bench_function("sweep_solver_256_tracks_8_sides", |b| {
        b.iter(|| {
            SweepSolver::new().solve(black_box(&catalog), black_box(&target), &mut NoOpMonitor)
        })
    });
}

fn bench_cyclic_solver_early_exit(c: &mut Criterion) {
    let catalog = synthetic_catalog(16, true);
    let target = Target::resolve(
        catalog.total(),
        catalog.longest(),
        &Constraint::SideCount(4),
        false,
    );

    c.bench_function("cyclic_solver_16_tracks_quality_exit", |b| {
        b.iter(|| {
            let mut monitor = CompositeMonitor::new();
            monitor.add_monitor(QualityMonitor::<u64>::default());
            monitor.add_monitor(DeadlineMonitor::new(Duration::from_millis(100)));
            CyclicSolver::new().solve(black_box(&catalog), black_box(&target), &mut monitor)
        })
    });
}

criterion_group!(
    benches,
    bench_greedy_pack,
    bench_sweep_solver,
    bench_cyclic_solver_early_exit
);
criterion_main!(benches);

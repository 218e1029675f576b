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

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use shunter_bnb::bnb::Sequencer;
use shunter_bnb::branching::front_first::FrontFirstPolicy;
use shunter_bnb::branching::rear_first::RearFirstPolicy;
use shunter_bnb::monitor::no_op::NoOperationMonitor;
use shunter_model::manifest::Manifest;
use shunter_search::result::SolverResult;
use std::hint::black_box;

/// A 25-car stream whose best train couples 12 cars.
const MEDIUM_INSTANCE: [i64; 25] = [
    31, 19, 17, 4, 10, 37, 42, 35, 15, 43, 45, 30, 39, 9, 21, 33, 25, 3, 47, 41, 50, 18, 11, 26,
    28,
];

/// A 50-car stream whose best train couples 14 cars.
const LARGE_INSTANCE: [i64; 50] = [
    5, 24, 84, 58, 21, 57, 98, 51, 6, 16, 75, 95, 11, 23, 92, 85, 29, 56, 45, 55, 73, 20, 4, 34,
    76, 96, 63, 30, 93, 2, 19, 39, 14, 71, 80, 40, 69, 54, 62, 42, 1, 10, 35, 8, 22, 70, 67, 15,
    27, 38,
];

fn expected_len(manifest: &Manifest<i64>) -> usize {
    let mut sequencer = Sequencer::preallocated(manifest.num_cars());
    let mut policy = FrontFirstPolicy::new();
    let outcome = sequencer.solve(manifest, &mut policy, NoOperationMonitor::new());
    match outcome.result() {
        SolverResult::Optimal(assembly) => assembly.len(),
        other => panic!("benchmark instance must be solvable, got {:?}", other),
    }
}

fn bench_sequencer(c: &mut Criterion) {
    let instances: Vec<(&str, Manifest<i64>, usize)> = vec![
        ("25cars", Manifest::new(MEDIUM_INSTANCE.to_vec()).unwrap(), 12),
        ("50cars", Manifest::new(LARGE_INSTANCE.to_vec()).unwrap(), 14),
    ];

    let mut group = c.benchmark_group("sequencer_benchmark");

    for (label, manifest, expected) in instances {
        // Sanity before timing: the instance must produce the known optimum.
        assert_eq!(expected_len(&manifest), expected);

        group.bench_with_input(
            BenchmarkId::new("front_first", label),
            &manifest,
            |b, manifest| {
                let mut sequencer = Sequencer::preallocated(manifest.num_cars());
                let mut policy = FrontFirstPolicy::new();
                b.iter(|| {
                    let outcome = black_box(sequencer.solve(
                        manifest,
                        &mut policy,
                        NoOperationMonitor::new(),
                    ));
                    outcome.result().assembly().map(|a| a.len())
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("rear_first", label),
            &manifest,
            |b, manifest| {
                let mut sequencer = Sequencer::preallocated(manifest.num_cars());
                let mut policy = RearFirstPolicy::new();
                b.iter(|| {
                    let outcome = black_box(sequencer.solve(
                        manifest,
                        &mut policy,
                        NoOperationMonitor::new(),
                    ));
                    outcome.result().assembly().map(|a| a.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_sequencer);
criterion_main!(benches);

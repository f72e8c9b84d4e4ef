use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use ravel::{
    problems::n_queens,
    solver::{
        consistency::ConsistencyLevel,
        min_conflicts::MinConflicts,
        search::{BacktrackingSearch, SearchStrategy},
    },
};

fn backtracking_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("8-queens");
    for level in [
        ConsistencyLevel::Assignments,
        ConsistencyLevel::ForwardChecking,
        ConsistencyLevel::ArcConsistency,
    ] {
        group.bench_function(format!("level {}", level.as_level()), |b| {
            b.iter_batched(
                || n_queens::graph(8).unwrap(),
                |mut graph| {
                    BacktrackingSearch::new(level)
                        .solve(&mut graph)
                        .unwrap()
                        .0
                        .unwrap()
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn min_conflicts_benchmarks(c: &mut Criterion) {
    let graph = n_queens::graph(50).unwrap();
    c.bench_function("50-queens min-conflicts", |b| {
        b.iter(|| {
            MinConflicts::new(10_000, 10)
                .with_seed(7)
                .solve(&graph)
                .unwrap()
        })
    });
}

criterion_group!(benches, backtracking_benchmarks, min_conflicts_benchmarks);
criterion_main!(benches);

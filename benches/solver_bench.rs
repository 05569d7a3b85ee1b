//! Benchmarks for the Pig solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pig_solver::pig::{PigSolver, SolverConfig};
use pig_solver::report::ThresholdGrid;

fn solve_goal_30_benchmark(c: &mut Criterion) {
    c.bench_function("solve_goal_30", |b| {
        b.iter(|| PigSolver::new(black_box(SolverConfig::new(30, 1e-9))).unwrap())
    });
}

fn solve_goal_100_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("standard");
    group.sample_size(10);
    group.bench_function("solve_goal_100", |b| {
        b.iter(|| PigSolver::new(black_box(SolverConfig::default())).unwrap())
    });
    group.finish();
}

fn threshold_grid_benchmark(c: &mut Criterion) {
    let solver = PigSolver::new(SolverConfig::default()).unwrap();
    c.bench_function("threshold_grid_goal_100", |b| {
        b.iter(|| ThresholdGrid::from_solver(black_box(&solver)))
    });
}

criterion_group!(
    benches,
    solve_goal_30_benchmark,
    solve_goal_100_benchmark,
    threshold_grid_benchmark
);
criterion_main!(benches);

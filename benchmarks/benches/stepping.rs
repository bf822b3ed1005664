//! Collision core benchmarks (criterion - wall-clock time).
//!
//! Run all:    cargo bench --manifest-path benchmarks/Cargo.toml --bench stepping
//! Filter:     cargo bench --manifest-path benchmarks/Cargo.toml --bench stepping -- solver

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use impact::physics::narrowphase::circle_circle;
use impact::physics::quantities::SystemQuantities;
use impact::physics::solver::resolve_collision;
use impact::physics::step_pair;
use impact_bench::*;

// ---------------------------------------------------------------------------
// Narrowphase
// ---------------------------------------------------------------------------

fn bench_narrowphase(c: &mut Criterion) {
    let mut group = c.benchmark_group("narrowphase/circle_circle");

    let [a, b] = overlapping_pair(0.05);
    group.bench_function("intersecting", |bench| {
        bench.iter(|| circle_circle(&a, &b));
    });

    let [a, b] = head_on_pair(2.0);
    group.bench_function("separated", |bench| {
        bench.iter(|| circle_circle(&a, &b));
    });
    group.finish();
}

// ---------------------------------------------------------------------------
// Solver
// ---------------------------------------------------------------------------

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("solver/resolve_collision");
    for &depth in &[0.0, 0.01, 0.1] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |bench, &depth| {
            bench.iter_batched(
                || (overlapping_pair(depth), episode()),
                |([mut a, mut b], mut ep)| resolve_collision(&mut a, &mut b, &mut ep, 0.5, DT),
                criterion::BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

// ---------------------------------------------------------------------------
// Full pipeline
// ---------------------------------------------------------------------------

fn bench_pipeline(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("pipeline/step_pair");
        let walls = arena();
        group.bench_function("free_flight", |bench| {
            bench.iter_batched(
                || (head_on_pair(2.0), episode()),
                |(mut bodies, mut ep)| step_pair(&mut bodies, &mut ep, &walls, 1.0, DT),
                criterion::BatchSize::SmallInput,
            );
        });
        group.bench_function("impact", |bench| {
            bench.iter_batched(
                || (overlapping_pair(0.02), episode()),
                |(mut bodies, mut ep)| step_pair(&mut bodies, &mut ep, &walls, 1.0, DT),
                criterion::BatchSize::SmallInput,
            );
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("pipeline/quantities");
        let [a, b] = head_on_pair(1.0);
        group.bench_function("measure", |bench| {
            bench.iter(|| SystemQuantities::measure(&a, &b));
        });
        group.finish();
    }
}

// ---------------------------------------------------------------------------
// Simulation (stepper, series recording, export)
// ---------------------------------------------------------------------------

fn bench_simulation(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("simulation/run_for");
        group.sample_size(30);
        for &seconds in &[1.0, 10.0, 60.0] {
            group.bench_with_input(
                BenchmarkId::from_parameter(seconds),
                &seconds,
                |bench, &seconds| {
                    bench.iter_batched(
                        || running_simulation(0.75, DT),
                        |mut sim| sim.run_for(seconds),
                        criterion::BatchSize::LargeInput,
                    );
                },
            );
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("simulation/advance");
        group.bench_function("frame_60hz", |bench| {
            bench.iter_batched(
                || running_simulation(1.0, DT),
                |mut sim| sim.advance(1.0 / 60.0),
                criterion::BatchSize::SmallInput,
            );
        });
        group.finish();
    }

    {
        let mut group = c.benchmark_group("simulation/export_csv");
        group.sample_size(20);
        let mut sim = running_simulation(0.5, DT);
        sim.run_for(60.0);
        group.bench_function("3000_rows", |bench| {
            bench.iter(|| sim.series().to_csv_string());
        });
        group.finish();
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

criterion_group!(
    benches,
    bench_narrowphase,
    bench_solver,
    bench_pipeline,
    bench_simulation,
);
criterion_main!(benches);

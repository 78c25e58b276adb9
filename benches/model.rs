//! Simulator benchmarks

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use glucose_simulator::{compute_delta, ControlAction, Simulator};

fn bench_compute_delta(c: &mut Criterion) {
    c.bench_function("compute_delta", |b| {
        b.iter(|| compute_delta(black_box(60.0), black_box(20.0), black_box(10.0), black_box(30)))
    });
}

fn bench_apply_long_session(c: &mut Criterion) {
    c.bench_function("apply_1000_steps", |b| {
        b.iter(|| {
            let mut sim = Simulator::new();
            for _ in 0..1000 {
                sim.dispatch(black_box(ControlAction::Apply));
            }
            sim
        })
    });
}

fn bench_reset(c: &mut Criterion) {
    let mut sim = Simulator::new();
    for _ in 0..1000 {
        sim.dispatch(ControlAction::Apply);
    }

    c.bench_function("reset_after_1000_steps", |b| {
        b.iter_batched(
            || sim.clone(),
            |mut s| {
                s.dispatch(ControlAction::Reset);
                s
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_compute_delta, bench_apply_long_session, bench_reset);
criterion_main!(benches);

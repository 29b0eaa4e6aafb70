use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use strand_motion::*;

const STRAND_LEN: usize = config::DEFAULT_STRAND_LENGTH;

fn prepare_sim(strands: usize) -> HairSimulator {
    let buffer: Vec<f32> = (0..strands)
        .flat_map(|s| {
            (0..STRAND_LEN).flat_map(move |i| [s as f32 * 0.001, -(i as f32) * 0.02, 0.0])
        })
        .collect();
    let mut sim = HairSimulator::new(7);
    sim.load_flat_positions(&buffer, STRAND_LEN, SegmentLength::default())
        .expect("aligned buffer");
    sim
}

fn bench_physics_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("physics_update");
    for &count in &[1_000usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("sequential", count), &count, |b, &count| {
            let mut sim = prepare_sim(count);
            sim.set_physics_enabled(true);
            b.iter(|| {
                sim.update();
                black_box(sim.positions().len())
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", count), &count, |b, &count| {
            let mut sim = prepare_sim(count);
            sim.set_physics_enabled(true);
            sim.set_parallel_enabled(true);
            b.iter(|| {
                sim.update();
                black_box(sim.positions().len())
            })
        });
    }
    group.finish();
}

fn bench_animator_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator_update");
    for tag in ["pendulum", "ripple", "chaos", "fountain"] {
        group.bench_function(tag, |b| {
            let mut sim = prepare_sim(1_000);
            sim.set_animation_tag(tag);
            b.iter(|| {
                sim.update();
                black_box(sim.positions().len())
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_physics_update, bench_animator_update);
criterion_main!(benches);

//! Benchmarks for stepping and parsing full-size grids.
//!
//! Stepping the largest supported grid is the hot path of the run loop.

#![allow(missing_docs)]

use std::hint::black_box;

use asciigol::config;
use asciigol::{Engine, Grid, MAX_HEIGHT, MAX_WIDTH, step};
use criterion::{Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn full_grid() -> Grid {
    let mut rng = StdRng::seed_from_u64(42);
    Grid::random(MAX_WIDTH, MAX_HEIGHT, &mut rng).expect("maximum dimensions are valid")
}

fn bench_step(c: &mut Criterion) {
    let current = full_grid();
    let mut next = Grid::new(MAX_WIDTH, MAX_HEIGHT).expect("maximum dimensions are valid");

    c.bench_function("step_250x100", |b| {
        b.iter(|| black_box(step(black_box(&current), &mut next, false)));
    });

    c.bench_function("step_250x100_wrap", |b| {
        b.iter(|| black_box(step(black_box(&current), &mut next, true)));
    });
}

fn bench_engine_run(c: &mut Criterion) {
    // 100 generations from the same seed, double buffer included
    c.bench_function("engine_100_generations", |b| {
        b.iter(|| {
            let mut engine = Engine::new(full_grid(), true);
            for _ in 0..100 {
                black_box(engine.step());
            }
            black_box(engine.generation())
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    let text = config::to_string(&full_grid());

    c.bench_function("parse_250x100", |b| {
        b.iter(|| black_box(config::parse(black_box(text.as_bytes()))));
    });
}

criterion_group!(benches, bench_step, bench_engine_run, bench_parse);
criterion_main!(benches);

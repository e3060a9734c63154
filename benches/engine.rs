//! Benchmarks for the rotation engine.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use twister::{infer_move, legal_moves, Cube, CubeState, Topology};

/// Benchmark a single quarter turn per dimension.
fn bench_apply(c: &mut Criterion) {
    let topology = Arc::new(Topology::standard());
    let moves: Vec<_> = legal_moves(&topology).collect();

    let mut group = c.benchmark_group("apply");
    for dim in [3, 7, 17] {
        let mut cube = Cube::new(Arc::clone(&topology), dim).unwrap();
        let mut next = 0;
        group.bench_function(format!("dim_{dim}"), |b| {
            b.iter(|| {
                let step = cube.apply(black_box(moves[next % moves.len()]));
                next += 1;
                step.solved
            })
        });
    }
    group.finish();
}

/// Benchmark the default 100-move shuffle.
fn bench_shuffle(c: &mut Criterion) {
    let topology = Arc::new(Topology::standard());
    let mut cube = Cube::new(topology, 3).unwrap().seeded(1);

    c.bench_function("shuffle_100", |b| b.iter(|| cube.shuffle(black_box(100))));
}

/// Benchmark inferring the last move of a scramble.
fn bench_infer(c: &mut Criterion) {
    let topology = Arc::new(Topology::standard());
    let mut cube = Cube::new(Arc::clone(&topology), 3).unwrap().seeded(5);
    cube.shuffle(30);
    let before: CubeState = cube.state().clone();
    let last = legal_moves(&topology).last().unwrap();
    cube.apply(last);
    let after = cube.state().clone();

    c.bench_function("infer_last_move", |b| {
        b.iter(|| infer_move(&topology, black_box(&before), black_box(&after)))
    });
}

criterion_group!(benches, bench_apply, bench_shuffle, bench_infer);
criterion_main!(benches);

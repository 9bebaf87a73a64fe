//! Benchmarks for the solving pipeline.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use soluko_core::{DigitGrid, Geometry};
use soluko_solver::{Board, propagate, solve};

const EASY: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

const HARD: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

fn bench_propagate(c: &mut Criterion) {
    let easy: DigitGrid = EASY.parse().unwrap();
    c.bench_function("propagate_easy", |b| {
        b.iter(|| {
            let mut board = Board::from_grid(black_box(easy.clone()));
            propagate(&mut board)
        });
    });
}

fn bench_solve(c: &mut Criterion) {
    let easy: DigitGrid = EASY.parse().unwrap();
    c.bench_function("solve_easy", |b| {
        b.iter(|| {
            let mut board = Board::from_grid(black_box(easy.clone()));
            solve(&mut board)
        });
    });

    let hard: DigitGrid = HARD.parse().unwrap();
    c.bench_function("solve_hard", |b| {
        b.iter(|| {
            let mut board = Board::from_grid(black_box(hard.clone()));
            solve(&mut board)
        });
    });

    c.bench_function("solve_empty", |b| {
        b.iter(|| {
            let mut board = Board::from_grid(DigitGrid::empty(Geometry::standard()));
            solve(&mut board)
        });
    });
}

criterion_group!(benches, bench_propagate, bench_solve);
criterion_main!(benches);

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use gobang::eval::evaluate;
use gobang::{Board, Engine, Stone};

struct BenchCase {
    name: &'static str,
    rows: u16,
    cols: u16,
    moves: &'static [(u16, u16)],
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "early_7x7",
        rows: 7,
        cols: 7,
        moves: &[(3, 3), (2, 2)],
    },
    BenchCase {
        name: "midgame_9x9",
        rows: 9,
        cols: 9,
        moves: &[(4, 4), (3, 3), (4, 5), (3, 5), (5, 3), (4, 3)],
    },
];

fn build_board(case: &BenchCase) -> Board {
    let mut board = Board::new(case.rows, case.cols, Stone::Black).expect("valid bench extents");
    for &(r, c) in case.moves {
        board.play(r, c).expect("bench moves must be legal");
    }
    board
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let board = build_board(case);
        group.bench_with_input(BenchmarkId::from_parameter(case.name), &board, |b, board| {
            b.iter(|| black_box(evaluate(black_box(board))));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);

    for case in CASES {
        let board = build_board(case);

        // Correctness guard before benchmarking.
        let engine = Engine::with_depth(2);
        assert!(engine.best_move(&board).best_move.is_some());

        let bench_name = format!("{}_d2", case.name);
        group.bench_with_input(BenchmarkId::from_parameter(bench_name), &board, |b, board| {
            b.iter(|| {
                let result = engine.best_move(black_box(board));
                black_box(result.best_move)
            });
        });
    }

    group.finish();
}

fn bench_parallel_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_parallel");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(20);

    let board = build_board(&CASES[1]);
    for workers in [1usize, 2, 4] {
        let engine = Engine::with_depth(2).workers(workers);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("workers_{workers}")),
            &board,
            |b, board| {
                b.iter(|| {
                    let result = engine.best_move(black_box(board));
                    black_box(result.best_move)
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search, bench_parallel_search);
criterion_main!(benches);

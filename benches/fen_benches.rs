use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use damier::board::{Board, fen};
use damier::consts::START_FEN;

fn parse_start_fen(c: &mut Criterion) {
    c.bench_function("parse_start_fen", |b| {
        b.iter(|| {
            let board = fen::parse_fen(black_box(START_FEN)).unwrap();
            black_box(board);
        });
    });
}

fn serialize_start_position(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("serialize_start_position", |b| {
        b.iter(|| {
            let fen = fen::serialize_fen(black_box(&board));
            black_box(fen);
        });
    });
}

criterion_group!(benches, parse_start_fen, serialize_start_position);
criterion_main!(benches);

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use damier::board::{Board, components::Square};
use damier::moves::move_gen;

const MIDGAME_FEN: &str = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";

fn legal_moves_start_position(c: &mut Criterion) {
    let mut board = Board::new();

    c.bench_function("legal_moves_start_position", |b| {
        b.iter(|| {
            let legal = move_gen::legal_moves(&mut board);
            black_box(legal);
        });
    });
}

fn legal_moves_midgame(c: &mut Criterion) {
    let mut board = Board::from_fen(MIDGAME_FEN).unwrap();

    c.bench_function("legal_moves_midgame", |b| {
        b.iter(|| {
            let legal = move_gen::legal_moves(&mut board);
            black_box(legal);
        });
    });
}

fn queen_ray_walk(c: &mut Criterion) {
    let mut board = Board::from_fen(MIDGAME_FEN).unwrap();
    // Push the d-pawn so the queen has rays to walk.
    board
        .move_piece(Square::new(51).unwrap(), Square::new(35).unwrap())
        .unwrap();
    let queen = Square::new(59).unwrap();

    c.bench_function("queen_ray_walk", |b| {
        b.iter(|| {
            let moves = move_gen::queen_moves(&board, queen);
            black_box(moves);
        });
    });
}

criterion_group!(
    benches,
    legal_moves_start_position,
    legal_moves_midgame,
    queen_ray_walk
);
criterion_main!(benches);

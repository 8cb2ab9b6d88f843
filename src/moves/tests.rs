use crate::prelude::*;

fn sq(index: usize) -> Square {
    Square::new(index).unwrap()
}

fn sorted(moves: Vec<Square>) -> Vec<usize> {
    let mut indices: Vec<usize> = moves.into_iter().map(|square| square.index()).collect();
    indices.sort_unstable();
    indices
}

#[test]
fn rook_covers_both_open_rays() {
    let mut board = Board::default();
    board.place_piece(35, Piece::new(PieceKind::Rook, Side::White)).unwrap();

    let moves = move_gen::rook_moves(&board, sq(35));
    assert_eq!(moves.len(), 14);
    assert_eq!(
        sorted(moves),
        vec![3, 11, 19, 27, 32, 33, 34, 36, 37, 38, 39, 43, 51, 59]
    );
}

#[test]
fn rook_ray_stops_at_friend_and_takes_enemy() {
    let mut board = Board::default();
    board.place_piece(35, Piece::new(PieceKind::Rook, Side::White)).unwrap();
    board.place_piece(19, Piece::new(PieceKind::Pawn, Side::White)).unwrap();
    board.place_piece(37, Piece::new(PieceKind::Pawn, Side::Black)).unwrap();

    let moves = sorted(move_gen::rook_moves(&board, sq(35)));
    // North stops short of the friendly pawn, east ends on the capture.
    assert!(moves.contains(&27));
    assert!(!moves.contains(&19));
    assert!(moves.contains(&37));
    assert!(!moves.contains(&38));
}

#[test]
fn bishop_and_queen_open_board_counts() {
    let mut board = Board::default();
    board.place_piece(35, Piece::new(PieceKind::Bishop, Side::Black)).unwrap();
    assert_eq!(move_gen::bishop_moves(&board, sq(35)).len(), 13);

    let mut board = Board::default();
    board.place_piece(35, Piece::new(PieceKind::Queen, Side::Black)).unwrap();
    assert_eq!(move_gen::queen_moves(&board, sq(35)).len(), 27);
}

#[test]
fn knight_in_corner_has_two_jumps() {
    let mut board = Board::default();
    board.place_piece(0, Piece::new(PieceKind::Knight, Side::Black)).unwrap();
    assert_eq!(sorted(move_gen::knight_moves(&board, sq(0))), vec![10, 17]);
}

#[test]
fn knight_jumps_never_wrap_across_files() {
    let mut board = Board::default();
    board.place_piece(24, Piece::new(PieceKind::Knight, Side::White)).unwrap();
    assert_eq!(
        sorted(move_gen::knight_moves(&board, sq(24))),
        vec![9, 18, 34, 41]
    );
}

#[test]
fn pawn_double_push_only_from_home_rank() {
    let mut board = Board::default();
    board.place_piece(52, Piece::new(PieceKind::Pawn, Side::White)).unwrap();
    assert_eq!(sorted(move_gen::pawn_moves(&board, sq(52))), vec![36, 44]);

    // A blocked jump square leaves only the single advance.
    board.place_piece(36, Piece::new(PieceKind::Pawn, Side::Black)).unwrap();
    assert_eq!(sorted(move_gen::pawn_moves(&board, sq(52))), vec![44]);

    // A blocked front square removes everything.
    board.place_piece(44, Piece::new(PieceKind::Knight, Side::Black)).unwrap();
    assert!(move_gen::pawn_moves(&board, sq(52)).is_empty());
}

#[test]
fn pawn_captures_respect_the_board_edge() {
    let mut board = Board::default();
    board.place_piece(48, Piece::new(PieceKind::Pawn, Side::White)).unwrap();
    board.place_piece(41, Piece::new(PieceKind::Rook, Side::Black)).unwrap();
    // Index 39 is diagonally adjacent by arithmetic only; a capture
    // there would cross from the a-file to the h-file.
    board.place_piece(39, Piece::new(PieceKind::Rook, Side::Black)).unwrap();

    assert_eq!(sorted(move_gen::pawn_moves(&board, sq(48))), vec![32, 40, 41]);
}

#[test]
fn pawn_sees_armed_en_passant_target() {
    let mut board = Board::new();
    board.move_piece(sq(52), sq(36)).unwrap();
    board.move_piece(sq(8), sq(16)).unwrap();
    board.move_piece(sq(36), sq(28)).unwrap();
    board.move_piece(sq(11), sq(27)).unwrap();

    assert_eq!(board.black_en_passant, Some(sq(19)));
    assert!(move_gen::pawn_moves(&board, sq(28)).contains(&sq(19)));
}

#[test]
fn king_avoids_queen_covered_squares() {
    let mut board = Board::default();
    board.place_piece(36, Piece::new(PieceKind::King, Side::White)).unwrap();
    board.place_piece(4, Piece::new(PieceKind::King, Side::Black)).unwrap();
    board.place_piece(5, Piece::new(PieceKind::Queen, Side::Black)).unwrap();

    let legal = move_gen::legal_moves(&mut board);
    assert_eq!(sorted(legal[36].clone()), vec![27, 28, 35, 43, 44]);
}

#[test]
fn kings_keep_their_distance() {
    let mut board = Board::default();
    board.place_piece(36, Piece::new(PieceKind::King, Side::White)).unwrap();
    board.place_piece(38, Piece::new(PieceKind::King, Side::Black)).unwrap();

    let legal = move_gen::legal_moves(&mut board);
    assert_eq!(sorted(legal[36].clone()), vec![27, 28, 35, 43, 44]);
}

#[test]
fn castling_offered_on_clear_unattacked_paths() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let legal = move_gen::legal_moves(&mut board);
    assert!(legal[60].contains(&sq(58)));
    assert!(legal[60].contains(&sq(62)));
}

#[test]
fn castling_blocked_by_occupied_path() {
    let mut board = Board::from_fen("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1").unwrap();
    let legal = move_gen::legal_moves(&mut board);
    assert!(!legal[60].contains(&sq(58)));
    assert!(legal[60].contains(&sq(62)));
}

#[test]
fn castling_blocked_by_attacked_path() {
    // The black rook on d6 covers d1, the queenside transit square.
    let mut board = Board::from_fen("4k3/8/3r4/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let legal = move_gen::legal_moves(&mut board);
    assert!(!legal[60].contains(&sq(58)));
    assert!(legal[60].contains(&sq(62)));
}

#[test]
fn no_castling_while_in_check() {
    let mut board = Board::from_fen("4k3/8/4r3/8/8/8/8/R3K2R w KQ - 0 1").unwrap();
    let legal = move_gen::legal_moves(&mut board);
    assert!(!legal[60].contains(&sq(58)));
    assert!(!legal[60].contains(&sq(62)));
}

#[test]
fn pinned_rook_stays_on_the_file() {
    let mut board = Board::from_fen("4k3/4r3/8/8/8/8/4R3/4K3 w - - 0 1").unwrap();
    let legal = move_gen::legal_moves(&mut board);
    assert_eq!(sorted(legal[52].clone()), vec![12, 20, 28, 36, 44]);
}

#[test]
fn fools_mate_ends_with_black_winning() {
    let mut board = Board::new();
    board.move_piece(sq(53), sq(45)).unwrap();
    board.move_piece(sq(12), sq(28)).unwrap();
    board.move_piece(sq(54), sq(38)).unwrap();
    board.move_piece(sq(3), sq(39)).unwrap();

    let legal = move_gen::legal_moves(&mut board);
    assert_eq!(board.winner, Some(Side::Black));
    assert!(legal[60].is_empty());
}

#[test]
fn stalemate_awards_the_opponent() {
    let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
    let legal = move_gen::legal_moves(&mut board);
    assert!(legal[7].is_empty());
    assert_eq!(board.winner, Some(Side::White));
}

#[test]
fn generation_leaves_the_board_untouched() {
    let fen = "r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3";
    let mut board = Board::from_fen(fen).unwrap();
    move_gen::legal_moves(&mut board);
    assert_eq!(board.to_fen(), fen);
}

#[test]
fn generation_is_deterministic() {
    let mut board = Board::new();
    let first = move_gen::legal_moves(&mut board);
    let second = move_gen::legal_moves(&mut board);
    assert_eq!(first, second);
}

#[test]
fn starting_position_has_twenty_white_moves() {
    let mut board = Board::new();
    let legal = move_gen::legal_moves(&mut board);
    let white_total: usize = (48..64).map(|index| legal[index].len()).sum();
    assert_eq!(white_total, 20);
}

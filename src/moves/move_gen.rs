//! Pseudo-legal move generation per piece kind, plus the legality
//! filter that removes self-check-exposing candidates.
//!
//! Generation walks the mailbox directly: sliding rays with file-wrap
//! guards, offset tables for knight and king, and the pawn advance /
//! capture / en-passant rules. Legality is resolved by simulating each
//! candidate on the board, regenerating the opponent's pseudo-legal
//! squares against the hypothetical position, and discarding any
//! candidate that leaves the mover's own king attacked.

use crate::board::Board;
use crate::board::components::{Piece, PieceKind, Side, Square};
use crate::consts::*;
use crate::moves::Direction;

fn all_squares() -> impl Iterator<Item = Square> {
    (0..NUM_SQUARES).filter_map(Square::new)
}

/// Pseudo-legal destinations for the piece on `from`. King moves are
/// not generated here; they need the opponent's attack set and go
/// through [`king_moves`].
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    match board.piece_at(from).kind() {
        PieceKind::Empty | PieceKind::King => Vec::new(),
        PieceKind::Bishop => bishop_moves(board, from),
        PieceKind::Knight => knight_moves(board, from),
        PieceKind::Pawn => pawn_moves(board, from),
        PieceKind::Queen => queen_moves(board, from),
        PieceKind::Rook => rook_moves(board, from),
    }
}

pub fn bishop_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    for delta in Direction::DIAG {
        sliding_ray(board, &mut moves, from, delta);
    }
    moves
}

pub fn rook_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    for delta in Direction::ORTHO {
        sliding_ray(board, &mut moves, from, delta);
    }
    moves
}

pub fn queen_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = bishop_moves(board, from);
    moves.extend(rook_moves(board, from));
    moves
}

/// Walks up to 7 steps along one delta. Stops at the board edge or a
/// same-color piece; an opposite-color piece is included as a capture
/// and also stops the ray. The file guard catches wrap-around before
/// the arithmetic offset can alias onto the next row.
fn sliding_ray(board: &Board, moves: &mut Vec<Square>, from: Square, delta: i8) {
    let piece = board.piece_at(from);
    let mut current = from;
    for _ in 0..NUM_FILES - 1 {
        if (Direction::is_eastward(delta) && current.file() == NUM_FILES - 1)
            || (Direction::is_westward(delta) && current.file() == 0)
        {
            break;
        }
        let Some(next) = current.offset(delta) else {
            break;
        };
        let occupant = board.piece_at(next);
        if occupant.is_empty() {
            moves.push(next);
        } else if !occupant.same_color(piece) {
            moves.push(next);
            break;
        } else {
            break;
        }
        current = next;
    }
}

pub fn knight_moves(board: &Board, from: Square) -> Vec<Square> {
    // Each offset is paired with the row distance a true knight jump
    // covers; the check rejects offsets that wrapped across an edge.
    const OFFSETS: [(i8, usize); 8] = [
        (-17, 2),
        (-15, 2),
        (-10, 1),
        (-6, 1),
        (6, 1),
        (10, 1),
        (15, 2),
        (17, 2),
    ];

    let knight = board.piece_at(from);
    let mut moves = Vec::new();
    for (delta, rows_apart) in OFFSETS {
        let Some(to) = from.offset(delta) else {
            continue;
        };
        if from.row().abs_diff(to.row()) != rows_apart {
            continue;
        }
        let occupant = board.piece_at(to);
        if occupant.is_empty() || !occupant.same_color(knight) {
            moves.push(to);
        }
    }
    moves
}

pub fn pawn_moves(board: &Board, from: Square) -> Vec<Square> {
    let pawn = board.piece_at(from);
    let white = pawn.is_white();
    let forward = if white {
        Direction::NORTH
    } else {
        Direction::SOUTH
    };
    let mut moves = Vec::new();

    // A pawn on its last rank should already be promoted.
    let Some(ahead) = from.offset(forward) else {
        return moves;
    };

    if board.piece_at(ahead).is_empty() {
        moves.push(ahead);
        if on_home_rank(white, from)
            && let Some(two_ahead) = ahead.offset(forward)
            && board.piece_at(two_ahead).is_empty()
        {
            moves.push(two_ahead);
        }
    }

    let captures = [
        (from.file() > 0, forward + Direction::WEST),
        (from.file() < NUM_FILES - 1, forward + Direction::EAST),
    ];
    for (file_open, delta) in captures {
        if !file_open {
            continue;
        }
        let Some(to) = from.offset(delta) else {
            continue;
        };
        let occupant = board.piece_at(to);
        if !occupant.is_empty() && !occupant.same_color(pawn) {
            moves.push(to);
        }
    }

    en_passant_move(board, pawn, from, &mut moves);
    moves
}

const fn on_home_rank(white: bool, square: Square) -> bool {
    if white {
        square.row() == NUM_RANKS - 2
    } else {
        square.row() == 1
    }
}

fn en_passant_move(board: &Board, pawn: Piece, from: Square, moves: &mut Vec<Square>) {
    let white = pawn.is_white();
    let target = if white {
        board.black_en_passant
    } else {
        board.white_en_passant
    };
    let Some(target) = target else {
        return;
    };

    // The passed pawn sits one row beyond the target; the mover must
    // stand beside it and lands behind it, on the target itself.
    let victim_delta = if white {
        Direction::SOUTH
    } else {
        Direction::NORTH
    };
    let Some(victim) = target.offset(victim_delta) else {
        return;
    };
    if from.row() == victim.row() && from.file().abs_diff(victim.file()) == 1 {
        moves.push(target);
    }
}

/// King adjacency, wrap-guarded, own pieces excluded. Shared between
/// move generation and the opponent attack set.
fn king_reach(board: &Board, from: Square) -> Vec<Square> {
    let king = board.piece_at(from);
    let mut moves = Vec::new();
    for delta in Direction::ALL {
        if (Direction::is_eastward(delta) && from.file() == NUM_FILES - 1)
            || (Direction::is_westward(delta) && from.file() == 0)
        {
            continue;
        }
        let Some(to) = from.offset(delta) else {
            continue;
        };
        let occupant = board.piece_at(to);
        if occupant.is_empty() || !occupant.same_color(king) {
            moves.push(to);
        }
    }
    moves
}

/// King moves against a precomputed opponent pseudo-legal set: the 8
/// adjacent squares minus attacked ones, plus castling when the path is
/// clear and unattacked.
pub fn king_moves(board: &Board, opponent_moves: &[Square], from: Square) -> Vec<Square> {
    let mut moves: Vec<Square> = king_reach(board, from)
        .into_iter()
        .filter(|square| !opponent_moves.contains(square))
        .collect();

    if !opponent_moves.contains(&from) {
        castle_moves(board, opponent_moves, from, &mut moves);
    }
    moves
}

fn castle_moves(board: &Board, opponent_moves: &[Square], from: Square, moves: &mut Vec<Square>) {
    let king = board.piece_at(from);
    let white = king.is_white();
    if (white && board.white_king_moved) || (!white && board.black_king_moved) {
        return;
    }

    let (king_start, queen_rook, king_rook) = if white {
        (WHITE_KING_START, WHITE_QUEEN_ROOK, WHITE_KING_ROOK)
    } else {
        (BLACK_KING_START, BLACK_QUEEN_ROOK, BLACK_KING_ROOK)
    };
    // Rights loaded from an arbitrary FEN only make sense with the king
    // on its start square.
    if from.index() != king_start {
        return;
    }

    let side = if white { Side::White } else { Side::Black };
    let attacked =
        |index: usize| opponent_moves.iter().any(|square| square.index() == index);

    if board.castling_rights.can_castle(side, false)
        && path_clear(board, from.index() - 1, queen_rook, -1)
    {
        let destination = from.index() - 2;
        if !attacked(destination)
            && !attacked(from.index() - 1)
            && let Some(square) = Square::new(destination)
        {
            moves.push(square);
        }
    }

    if board.castling_rights.can_castle(side, true)
        && path_clear(board, from.index() + 1, king_rook, 1)
    {
        let destination = from.index() + 2;
        if !attacked(destination)
            && !attacked(from.index() + 1)
            && let Some(square) = Square::new(destination)
        {
            moves.push(square);
        }
    }
}

/// Every square from `start` up to but excluding `end` must be empty.
fn path_clear(board: &Board, start: usize, end: usize, step: i8) -> bool {
    let mut index = start as i8;
    while index != end as i8 {
        match Square::new(index as usize) {
            Some(square) if board.piece_at(square).is_empty() => index += step,
            _ => return false,
        }
    }
    true
}

/// Union of one color's pseudo-legal squares over the current board,
/// with raw king adjacency standing in for king moves.
fn attack_squares(board: &Board, white: bool) -> Vec<Square> {
    let mut attacks = Vec::new();
    for square in all_squares() {
        let piece = board.piece_at(square);
        if piece.is_empty() || piece.is_white() != white {
            continue;
        }
        match piece.kind() {
            PieceKind::King => attacks.extend(king_reach(board, square)),
            _ => attacks.extend(pseudo_legal_moves(board, square)),
        }
    }
    attacks
}

/// Scoped hypothetical move: a raw from/to square swap that restores
/// the exact prior contents on every exit path, including unwinding.
struct HypotheticalMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    mover: Piece,
    replaced: Piece,
}

impl<'a> HypotheticalMove<'a> {
    fn apply(board: &'a mut Board, from: Square, to: Square) -> Self {
        let mover = board.piece_at(from);
        let replaced = board.piece_at(to);
        board.set_square(from, Piece::EMPTY);
        board.set_square(to, mover);
        Self {
            board,
            from,
            to,
            mover,
            replaced,
        }
    }

    fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for HypotheticalMove<'_> {
    fn drop(&mut self) {
        self.board.set_square(self.from, self.mover);
        self.board.set_square(self.to, self.replaced);
    }
}

fn is_move_safe(
    board: &mut Board,
    from: Square,
    to: Square,
    mover_is_king: bool,
    own_king: Option<Square>,
) -> bool {
    let white = board.piece_at(from).is_white();
    let scope = HypotheticalMove::apply(board, from, to);
    let opponent = attack_squares(scope.board(), !white);

    if mover_is_king {
        !opponent.contains(&to)
    } else {
        match own_king {
            Some(king) => !opponent.contains(&king),
            None => true,
        }
    }
}

/// Full-position legal move sets, one entry per square, filtered once
/// per ply. Each candidate is simulated and checked against the piece's
/// own king. If the side to move ends up with zero legal moves, the
/// opponent is recorded as the winner.
///
/// All squares are restored exactly; the only state this may change is
/// `board.winner` on a terminal position. Ordering is deterministic for
/// a fixed board state.
pub fn legal_moves(board: &mut Board) -> Vec<Vec<Square>> {
    let mut per_square: Vec<Vec<Square>> = vec![Vec::new(); NUM_SQUARES];
    let mut white_moves: Vec<Square> = Vec::new();
    let mut black_moves: Vec<Square> = Vec::new();
    let mut white_king = None;
    let mut black_king = None;

    for square in all_squares() {
        let piece = board.piece_at(square);
        if piece.is_empty() {
            continue;
        }
        if piece.is_kind(PieceKind::King) {
            if piece.is_white() {
                white_king = Some(square);
            } else {
                black_king = Some(square);
            }
            continue;
        }
        let moves = pseudo_legal_moves(board, square);
        if piece.is_white() {
            white_moves.extend(&moves);
        } else {
            black_moves.extend(&moves);
        }
        per_square[square.index()] = moves;
    }

    if let Some(square) = white_king {
        per_square[square.index()] = king_moves(board, &black_moves, square);
    }
    if let Some(square) = black_king {
        per_square[square.index()] = king_moves(board, &white_moves, square);
    }

    let mut mover_has_moves = false;
    for square in all_squares() {
        let piece = board.piece_at(square);
        if piece.is_empty() {
            continue;
        }
        let is_king = piece.is_kind(PieceKind::King);
        let own_king = if piece.is_white() {
            white_king
        } else {
            black_king
        };

        let candidates = std::mem::take(&mut per_square[square.index()]);
        let kept: Vec<Square> = candidates
            .into_iter()
            .filter(|&to| is_move_safe(board, square, to, is_king, own_king))
            .collect();

        if piece.is_white() == board.is_white_move && !kept.is_empty() {
            mover_has_moves = true;
        }
        per_square[square.index()] = kept;
    }

    if !mover_has_moves
        && board.winner.is_none()
        && white_king.is_some()
        && black_king.is_some()
    {
        board.winner = Some(!board.side_to_move());
    }

    per_square
}

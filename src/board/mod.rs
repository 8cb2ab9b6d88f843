pub mod components;
pub mod fen;

use std::fmt::Display;

use crate::consts::*;
use crate::errors::BoardError;
use crate::moves::move_info::Move;
use components::{CastlingRights, Piece, PieceKind, Side, Square};

/// Mutable mailbox board: 64 packed piece values plus the game state
/// FEN tracks. Owned exclusively; callers needing concurrent evaluation
/// clone it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [Piece; NUM_SQUARES],
    pub white_captures: Vec<Piece>,
    pub black_captures: Vec<Piece>,
    /// Target square armed by a White double push, capturable by Black.
    pub white_en_passant: Option<Square>,
    /// Target square armed by a Black double push, capturable by White.
    pub black_en_passant: Option<Square>,
    pub castling_rights: CastlingRights,
    pub white_king_moved: bool,
    pub black_king_moved: bool,
    pub is_white_move: bool,
    /// FEN round-trip field only; never incremented by move application.
    pub half_moves: u32,
    pub full_moves: u32,
    pub winner: Option<Side>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            squares: [Piece::EMPTY; NUM_SQUARES],
            white_captures: Vec::new(),
            black_captures: Vec::new(),
            white_en_passant: None,
            black_en_passant: None,
            castling_rights: CastlingRights::all(),
            white_king_moved: false,
            black_king_moved: false,
            is_white_move: true,
            half_moves: 0,
            full_moves: 0,
            winner: None,
        }
    }
}

impl Board {
    /// Board at the standard starting position.
    pub fn new() -> Self {
        fen::parse_fen(START_FEN).expect("start FEN is well-formed")
    }

    pub fn from_fen(fen: &str) -> Result<Self, BoardError> {
        fen::parse_fen(fen)
    }

    /// Resets all mutable state, then loads the given position.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), BoardError> {
        *self = fen::parse_fen(fen)?;
        Ok(())
    }

    pub fn to_fen(&self) -> String {
        fen::serialize_fen(self)
    }

    #[inline(always)]
    pub const fn is_valid_position(index: usize) -> bool {
        index < NUM_SQUARES
    }

    pub fn get_piece(&self, index: usize) -> Result<Piece, BoardError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(BoardError::OutOfBounds(index))
    }

    #[inline(always)]
    pub const fn piece_at(&self, square: Square) -> Piece {
        self.squares[square.index()]
    }

    pub const fn squares(&self) -> &[Piece; NUM_SQUARES] {
        &self.squares
    }

    pub const fn side_to_move(&self) -> Side {
        if self.is_white_move {
            Side::White
        } else {
            Side::Black
        }
    }

    /// Raw square write with no capture accounting. Used by the
    /// hypothetical-move scope of the legality filter.
    #[inline(always)]
    pub(crate) const fn set_square(&mut self, square: Square, piece: Piece) {
        self.squares[square.index()] = piece;
    }

    /// Low-level placement. A non-empty destination is recorded as a
    /// capture for the opposite color; capturing a King ends the game on
    /// the spot. No legality check happens here.
    pub fn place_piece(&mut self, index: usize, piece: Piece) -> Result<(), BoardError> {
        let square = Square::new(index).ok_or(BoardError::OutOfBounds(index))?;
        let current = self.piece_at(square);
        if !current.is_empty() {
            if current.is_white() {
                self.black_captures.push(current);
            } else {
                self.white_captures.push(current);
            }
            if current.is_kind(PieceKind::King) {
                self.winner = current.side().map(|side| !side);
            }
        }
        self.set_square(square, piece);
        Ok(())
    }

    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        self.execute_move(from, to, None, false)
    }

    pub fn apply_move(&mut self, mv: &Move) -> Result<(), BoardError> {
        self.execute_move(mv.from, mv.to, mv.promotion, false)
    }

    /// Applies a move with all its side effects. Validates the source
    /// before mutating anything; `rook_leg` marks the internal rook half
    /// of a castle, which neither flips the turn nor re-arms en passant.
    fn execute_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
        rook_leg: bool,
    ) -> Result<(), BoardError> {
        let mut mover = self.piece_at(from);
        if mover.is_empty() {
            return Err(BoardError::EmptySourceSquare(from));
        }
        let replaced = self.piece_at(to);

        // Special-move side effects are resolved before the mover lands.
        if self.is_en_passant_capture(mover, to) {
            self.capture_en_passant(mover);
        } else if mover.is_kind(PieceKind::Pawn) && Self::is_promotion_row(mover, to) {
            let kind = promotion.ok_or(BoardError::MissingPromotion(to))?;
            let side = if mover.is_white() {
                Side::White
            } else {
                Side::Black
            };
            mover = Piece::new(kind, side);
        } else if mover.is_kind(PieceKind::King) {
            self.handle_king_move(from, to)?;
        }

        self.place_piece(to.index(), mover)?;
        self.set_square(from, Piece::EMPTY);

        if !rook_leg {
            self.rearm_en_passant(from, mover, to);

            if !self.is_white_move {
                self.full_moves += 1;
            }
            self.is_white_move = !self.is_white_move;

            // Standard rules: a rook leaving or being captured on its
            // home corner forfeits that side's right.
            if mover.is_kind(PieceKind::Rook) {
                self.clear_rook_right(from);
            }
            if replaced.is_kind(PieceKind::Rook) {
                self.clear_rook_right(to);
            }
        }

        Ok(())
    }

    const fn is_promotion_row(pawn: Piece, to: Square) -> bool {
        if pawn.is_white() {
            to.row() == 0
        } else {
            to.row() == NUM_RANKS - 1
        }
    }

    fn handle_king_move(&mut self, from: Square, to: Square) -> Result<(), BoardError> {
        let white = self.piece_at(from).is_white();
        let is_castle = from.index().abs_diff(to.index()) == 2;

        if is_castle && !self.king_moved(white) {
            self.castle_rook_leg(from, to, white)?;
        }

        if white {
            self.white_king_moved = true;
        } else {
            self.black_king_moved = true;
        }
        self.castling_rights.remove_right(CastlingRights::side_rights(if white {
            Side::White
        } else {
            Side::Black
        }));

        Ok(())
    }

    const fn king_moved(&self, white: bool) -> bool {
        if white {
            self.white_king_moved
        } else {
            self.black_king_moved
        }
    }

    /// Relocates the rook half of a castle via a marked sub-move.
    fn castle_rook_leg(&mut self, from: Square, to: Square, white: bool) -> Result<(), BoardError> {
        let (queen_rook, king_rook) = if white {
            (WHITE_QUEEN_ROOK, WHITE_KING_ROOK)
        } else {
            (BLACK_QUEEN_ROOK, BLACK_KING_ROOK)
        };

        let queenside = from > to;
        let rook_from = if queenside { queen_rook } else { king_rook };
        let rook_to = if queenside {
            from.index() - 1
        } else {
            from.index() + 1
        };

        let rook_from = Square::new(rook_from).ok_or(BoardError::OutOfBounds(rook_from))?;
        let rook_to = Square::new(rook_to).ok_or(BoardError::OutOfBounds(rook_to))?;
        self.execute_move(rook_from, rook_to, None, true)
    }

    fn is_en_passant_capture(&self, piece: Piece, to: Square) -> bool {
        if !piece.is_kind(PieceKind::Pawn) {
            return false;
        }
        let target = if piece.is_white() {
            self.black_en_passant
        } else {
            self.white_en_passant
        };
        target == Some(to)
    }

    /// Removes the passed pawn sitting one row past the landing square,
    /// credits the capture, and disarms the consumed target.
    fn capture_en_passant(&mut self, mover: Piece) {
        if mover.is_white() {
            if let Some(target) = self.black_en_passant.take()
                && let Some(victim_sq) = Square::new(target.index() + NUM_FILES)
            {
                let victim = self.piece_at(victim_sq);
                self.white_captures.push(victim);
                self.set_square(victim_sq, Piece::EMPTY);
            }
        } else if let Some(target) = self.white_en_passant.take()
            && let Some(victim_sq) = target.index().checked_sub(NUM_FILES).and_then(Square::new)
        {
            let victim = self.piece_at(victim_sq);
            self.black_captures.push(victim);
            self.set_square(victim_sq, Piece::EMPTY);
        }
    }

    /// Both targets are cleared on every move; only a two-square pawn
    /// advance from its home rank re-arms one of them.
    fn rearm_en_passant(&mut self, from: Square, mover: Piece, to: Square) {
        self.white_en_passant = None;
        self.black_en_passant = None;

        if !mover.is_kind(PieceKind::Pawn) {
            return;
        }

        if mover.is_white() {
            if (48..=55).contains(&from.index()) && (32..=39).contains(&to.index()) {
                self.white_en_passant = Square::new(to.index() + NUM_FILES);
            }
        } else if (8..=15).contains(&from.index()) && (24..=31).contains(&to.index()) {
            self.black_en_passant = Square::new(to.index() - NUM_FILES);
        }
    }

    fn clear_rook_right(&mut self, corner: Square) {
        let right = match corner.index() {
            BLACK_QUEEN_ROOK => CastlingRights::BLACK_000,
            BLACK_KING_ROOK => CastlingRights::BLACK_00,
            WHITE_QUEEN_ROOK => CastlingRights::WHITE_000,
            WHITE_KING_ROOK => CastlingRights::WHITE_00,
            _ => return,
        };
        self.castling_rights.remove_right(CastlingRights(right));
    }

    pub fn white_captures_to_fen(&self) -> Vec<char> {
        captures_to_fen(&self.white_captures)
    }

    pub fn black_captures_to_fen(&self) -> Vec<char> {
        captures_to_fen(&self.black_captures)
    }

    /// The single active en-passant target, if any.
    pub fn en_passant_target(&self) -> Option<Square> {
        self.white_en_passant.or(self.black_en_passant)
    }

    pub fn winner_fen(&self) -> char {
        match self.winner {
            Some(side) => side.fen(),
            None => '-',
        }
    }

    pub fn is_game_finished(&self) -> bool {
        self.winner.is_some()
    }
}

/// Maps a capture list to FEN letters, in capture order.
pub fn captures_to_fen(pieces: &[Piece]) -> Vec<char> {
    pieces.iter().map(|piece| piece.to_fen()).collect()
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..NUM_RANKS {
            write!(f, "{} ", NUM_RANKS - row)?;
            for file in 0..NUM_FILES {
                let piece = self.squares[row * NUM_FILES + file];
                let letter = if piece.is_empty() { '.' } else { piece.to_fen() };
                write!(f, " {letter}")?;
            }
            writeln!(f)?;
        }
        writeln!(f, "   a b c d e f g h")?;
        write!(
            f,
            "{} to move",
            if self.is_white_move { "White" } else { "Black" }
        )
    }
}

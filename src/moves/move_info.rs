use serde::{Deserialize, Serialize};

use crate::board::components::{Piece, PieceKind, Square};
use crate::errors::BoardError;

/// A move candidate, produced by the generator and consumed immediately
/// by [`Board::apply_move`](crate::board::Board::apply_move).
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceKind>,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl Move {
    pub fn new(from: Square, to: Square) -> Self {
        Self {
            from,
            to,
            ..Default::default()
        }
    }

    pub fn promoting(from: Square, to: Square, kind: PieceKind) -> Self {
        Self {
            from,
            to,
            promotion: Some(kind),
            ..Default::default()
        }
    }
}

/// Wire form of a move request from the API layer: raw indices and a
/// FEN letter for the promotion kind.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRequest {
    pub from_square: usize,
    pub to_square: usize,
    #[serde(default)]
    pub promotion: Option<char>,
    #[serde(default)]
    pub is_en_passant: bool,
    #[serde(default)]
    pub is_castle: bool,
}

impl MoveRequest {
    pub fn to_move(&self) -> Result<Move, BoardError> {
        let from = Square::new(self.from_square)
            .ok_or(BoardError::OutOfBounds(self.from_square))?;
        let to = Square::new(self.to_square).ok_or(BoardError::OutOfBounds(self.to_square))?;
        let promotion = match self.promotion {
            Some(letter) => Some(Piece::from_fen(letter)?.kind()),
            None => None,
        };
        Ok(Move {
            from,
            to,
            promotion,
            is_en_passant: self.is_en_passant,
            is_castle: self.is_castle,
        })
    }
}

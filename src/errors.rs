use std::fmt;

use crate::board::components::Square;

/// Closed error set for board mutation and FEN parsing. All failures are
/// local and synchronous; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Square index outside 0..64. Never silently clamped.
    OutOfBounds(usize),
    /// Attempted move from a square with no piece on it.
    EmptySourceSquare(Square),
    /// FEN active-color field was not `w` or `b`.
    InvalidActiveColor(String),
    /// FEN piece letter outside `{b,k,n,p,q,r}` (case-insensitive).
    InvalidFenChar(char),
    /// A pawn reached the last rank without a promotion kind.
    MissingPromotion(Square),
    /// FEN string with a broken field structure.
    MalformedFen(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds(index) => {
                write!(f, "square index {index} is outside the board")
            }
            BoardError::EmptySourceSquare(square) => {
                write!(f, "no piece to move at {square}")
            }
            BoardError::InvalidActiveColor(field) => {
                write!(f, "invalid active color field: {field:?}")
            }
            BoardError::InvalidFenChar(letter) => {
                write!(f, "invalid FEN piece letter: {letter:?}")
            }
            BoardError::MissingPromotion(square) => {
                write!(f, "pawn promoting on {square} needs a promotion kind")
            }
            BoardError::MalformedFen(fen) => {
                write!(f, "malformed FEN string: {fen:?}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

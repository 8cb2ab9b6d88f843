//! Full-position snapshot for outer layers. One legality pass produces
//! a per-square view of the piece and its legal destinations, alongside
//! the turn, winner, capture lists, and active en-passant target.

use serde::Serialize;

use crate::board::Board;
use crate::moves::move_gen;

/// A non-empty square: its FEN letter, color, and legal destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieceMoves {
    pub fen: char,
    pub white: bool,
    pub moves: Vec<usize>,
}

/// Everything a consumer needs to render or continue the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Position {
    pub pieces: Vec<Option<PieceMoves>>,
    pub is_white_move: bool,
    pub winner: Option<char>,
    pub white_captures: Vec<char>,
    pub black_captures: Vec<char>,
    pub en_passant: Option<usize>,
}

/// Snapshots the board. Runs the legality filter once, so a terminal
/// position gets its winner recorded as a side effect; every square is
/// left exactly as found.
pub fn snapshot(board: &mut Board) -> Position {
    let legal = move_gen::legal_moves(board);

    let pieces = board
        .squares()
        .iter()
        .zip(legal)
        .map(|(piece, moves)| {
            if piece.is_empty() {
                return None;
            }
            Some(PieceMoves {
                fen: piece.to_fen(),
                white: piece.is_white(),
                moves: moves.into_iter().map(|square| square.index()).collect(),
            })
        })
        .collect();

    Position {
        pieces,
        is_white_move: board.is_white_move,
        winner: board.winner.map(|side| side.fen()),
        white_captures: board.white_captures_to_fen(),
        black_captures: board.black_captures_to_fen(),
        en_passant: board.en_passant_target().map(|square| square.index()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn starting_snapshot_shape() {
        let mut board = Board::new();
        let position = snapshot(&mut board);

        assert_eq!(position.pieces.len(), NUM_SQUARES);
        assert_eq!(position.pieces.iter().flatten().count(), 32);
        assert!(position.is_white_move);
        assert_eq!(position.winner, None);
        assert!(position.white_captures.is_empty());
        assert_eq!(position.en_passant, None);

        let king = position.pieces[60].as_ref().unwrap();
        assert_eq!(king.fen, 'K');
        assert!(king.white);
        assert!(king.moves.is_empty());

        let knight = position.pieces[57].as_ref().unwrap();
        assert_eq!(knight.fen, 'N');
        assert_eq!(knight.moves.len(), 2);
    }

    #[test]
    fn snapshot_reports_en_passant_and_captures() {
        let mut board = Board::new();
        board
            .move_piece(Square::new(52).unwrap(), Square::new(36).unwrap())
            .unwrap();

        let position = snapshot(&mut board);
        assert_eq!(position.en_passant, Some(44));
        assert!(!position.is_white_move);
    }

    #[test]
    fn snapshot_serializes_to_json() {
        let mut board = Board::new();
        let position = snapshot(&mut board);
        let json = serde_json::to_string(&position).unwrap();
        assert!(json.contains("\"is_white_move\":true"));
        assert!(json.contains("\"winner\":null"));
    }

    #[test]
    fn terminal_snapshot_names_the_winner() {
        let mut board = Board::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();
        let position = snapshot(&mut board);
        assert_eq!(position.winner, Some('w'));
    }
}

//! FEN load and serialize for [`Board`].
//!
//! Six space-separated fields: piece placement, active color, castling
//! availability, en-passant target, half-move clock, full-move number.
//! The clock fields are tolerated as absent or non-numeric (defaulting
//! to 0) because hand-copied FENs often drop them.

use super::Board;
use super::components::{CastlingRights, Piece, Square};
use crate::consts::*;
use crate::errors::BoardError;

pub fn parse_fen(fen: &str) -> Result<Board, BoardError> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    if fields.len() < 4 {
        return Err(BoardError::MalformedFen(fen.to_string()));
    }

    let mut board = Board::default();
    place_pieces(&mut board, fields[0])?;
    board.is_white_move = parse_active_color(fields[1])?;
    parse_castling(&mut board, fields[2])?;
    parse_en_passant(&mut board, fields[3])?;
    board.half_moves = fields.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
    board.full_moves = fields.get(5).and_then(|s| s.parse().ok()).unwrap_or(0);

    Ok(board)
}

/// Rank-by-rank from the top left, which matches the board's own
/// ordering, so placement is a single forward walk.
fn place_pieces(board: &mut Board, placement: &str) -> Result<(), BoardError> {
    let mut index = 0usize;
    for row in placement.split('/') {
        for letter in row.chars() {
            if let Some(run) = letter.to_digit(10) {
                index += run as usize;
            } else {
                if index >= NUM_SQUARES {
                    return Err(BoardError::MalformedFen(placement.to_string()));
                }
                board.place_piece(index, Piece::from_fen(letter)?)?;
                index += 1;
            }
        }
    }
    if index != NUM_SQUARES {
        return Err(BoardError::MalformedFen(placement.to_string()));
    }
    Ok(())
}

fn parse_active_color(field: &str) -> Result<bool, BoardError> {
    match field {
        "w" => Ok(true),
        "b" => Ok(false),
        _ => Err(BoardError::InvalidActiveColor(field.to_string())),
    }
}

/// `-` clears every right and marks both kings as already moved;
/// otherwise each of `K/Q/k/q` independently grants a right.
fn parse_castling(board: &mut Board, field: &str) -> Result<(), BoardError> {
    if field == "-" {
        board.castling_rights = CastlingRights::empty();
        board.white_king_moved = true;
        board.black_king_moved = true;
        return Ok(());
    }

    let mut rights = CastlingRights::empty();
    for letter in field.chars() {
        let right = match letter {
            'K' => CastlingRights::WHITE_00,
            'Q' => CastlingRights::WHITE_000,
            'k' => CastlingRights::BLACK_00,
            'q' => CastlingRights::BLACK_000,
            _ => return Err(BoardError::MalformedFen(field.to_string())),
        };
        rights.add_right(CastlingRights(right));
    }
    board.castling_rights = rights;
    board.white_king_moved = false;
    board.black_king_moved = false;
    Ok(())
}

/// A rank-3 target was armed by a White double push, a rank-6 target by
/// a Black one.
fn parse_en_passant(board: &mut Board, field: &str) -> Result<(), BoardError> {
    if field == "-" {
        board.white_en_passant = None;
        board.black_en_passant = None;
        return Ok(());
    }

    let mut chars = field.chars();
    let (Some(letter), Some(digit)) = (chars.next(), chars.next()) else {
        return Err(BoardError::MalformedFen(field.to_string()));
    };
    if !('a'..='h').contains(&letter) {
        return Err(BoardError::MalformedFen(field.to_string()));
    }

    let file = letter as usize - 'a' as usize;
    let square = match digit {
        '3' => Square::from_coords(5, file),
        '6' => Square::from_coords(2, file),
        _ => return Err(BoardError::MalformedFen(field.to_string())),
    };

    match digit {
        '3' => {
            board.white_en_passant = square;
            board.black_en_passant = None;
        }
        _ => {
            board.black_en_passant = square;
            board.white_en_passant = None;
        }
    }
    Ok(())
}

pub fn serialize_fen(board: &Board) -> String {
    let mut fen = String::new();

    for row in 0..NUM_RANKS {
        let mut empty_run = 0;
        for file in 0..NUM_FILES {
            let piece = board.squares()[row * NUM_FILES + file];
            if piece.is_empty() {
                empty_run += 1;
            } else {
                if empty_run > 0 {
                    fen.push_str(&empty_run.to_string());
                    empty_run = 0;
                }
                fen.push(piece.to_fen());
            }
        }
        if empty_run > 0 {
            fen.push_str(&empty_run.to_string());
        }
        if row < NUM_RANKS - 1 {
            fen.push('/');
        }
    }

    fen.push(' ');
    fen.push(if board.is_white_move { 'w' } else { 'b' });
    fen.push(' ');
    fen.push_str(&board.castling_rights.to_string());
    fen.push(' ');
    match board.en_passant_target() {
        Some(square) => fen.push_str(&square.to_string()),
        None => fen.push('-'),
    }
    fen.push_str(&format!(" {} {}", board.half_moves, board.full_moves));

    fen
}

pub use crate::board::fen;
pub use crate::board::{
    self, Board,
    components::{CastlingRights, Piece, PieceKind, Side, Square},
};
pub use crate::consts::*;
pub use crate::errors::BoardError;
pub use crate::moves::{
    self, Direction, move_gen,
    move_info::{Move, MoveRequest},
};
pub use crate::position::{self, PieceMoves, Position};
pub use crate::utils::{self, log::*};
pub use miette::{self, Context, IntoDiagnostic, Result};
pub use std::fmt::Display;
pub use std::str::FromStr;
pub use tracing::{Level, debug, error, info, trace, warn};

pub mod board;
pub mod errors;
pub mod moves;
pub mod position;
pub mod prelude;
pub mod utils;

pub mod consts {
    pub const NUM_SQUARES: usize = 64;
    pub const NUM_FILES: usize = 8;
    pub const NUM_RANKS: usize = 8;

    /// Home corners and king start squares, top-left-origin indexing
    /// (a8 = 0, h1 = 63).
    pub const BLACK_QUEEN_ROOK: usize = 0;
    pub const BLACK_KING_ROOK: usize = 7;
    pub const WHITE_QUEEN_ROOK: usize = 56;
    pub const WHITE_KING_ROOK: usize = 63;
    pub const BLACK_KING_START: usize = 4;
    pub const WHITE_KING_START: usize = 60;

    pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
    pub const EMPTY_FEN: &str = "8/8/8/8/8/8/8/8 w - - 0 1";
}

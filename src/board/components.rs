use std::fmt::Display;
use std::ops::Not;
use std::str::FromStr;

use miette::Context;

use crate::consts::*;
use crate::errors::BoardError;

#[derive(Default, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum Side {
    #[default]
    White,
    Black,
}

impl Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            Side::White => write!(f, "White"),
            Side::Black => write!(f, "Black"),
        }
    }
}

impl Not for Side {
    type Output = Side;

    fn not(self) -> Self::Output {
        self.flip()
    }
}

impl Side {
    pub const SIDES: [Side; 2] = [Side::White, Side::Black];

    pub const fn flip(&self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }

    pub const fn fen(&self) -> char {
        match self {
            Side::White => 'w',
            Side::Black => 'b',
        }
    }
}

/// The six piece kinds plus the empty square. Discriminants are the low
/// bits of the packed [`Piece`] value.
#[derive(Default, Debug, Hash, PartialEq, Eq, Clone, Copy)]
#[repr(u8)]
pub enum PieceKind {
    #[default]
    Empty = 0,
    Bishop = 1,
    King = 2,
    Knight = 3,
    Pawn = 4,
    Queen = 5,
    Rook = 6,
}

impl PieceKind {
    pub const KINDS: [PieceKind; 6] = [
        PieceKind::Bishop,
        PieceKind::King,
        PieceKind::Knight,
        PieceKind::Pawn,
        PieceKind::Queen,
        PieceKind::Rook,
    ];
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            PieceKind::Empty => write!(f, "Empty"),
            PieceKind::Bishop => write!(f, "Bishop"),
            PieceKind::King => write!(f, "King"),
            PieceKind::Knight => write!(f, "Knight"),
            PieceKind::Pawn => write!(f, "Pawn"),
            PieceKind::Queen => write!(f, "Queen"),
            PieceKind::Rook => write!(f, "Rook"),
        }
    }
}

/// A square's content packed into a [`u8`]:
/// ```text
/// Bit: 7 6 5 4 3 2 1 0
///      - - - W B k k k
///      | | | | | +-+-+-- kind (0 = empty, 1..=6 per PieceKind)
///      | | | | +-------- Black color flag
///      | | | +---------- White color flag
///      +-+-+------------ (unused)
/// ```
/// Exactly one color flag is set for non-empty pieces; the empty square
/// is all zeroes. Only the 13 values of that palette are ever stored.
#[derive(Default, Debug, Hash, PartialEq, Eq, Clone, Copy)]
#[repr(transparent)]
pub struct Piece(pub u8);

impl Piece {
    pub const EMPTY: Piece = Piece(0);
    pub const BLACK: u8 = 0b0000_1000;
    pub const WHITE: u8 = 0b0001_0000;
    const KIND_MASK: u8 = 0b0000_0111;
    const COLOR_MASK: u8 = Self::BLACK | Self::WHITE;

    pub const fn new(kind: PieceKind, side: Side) -> Self {
        let color = match side {
            Side::White => Self::WHITE,
            Side::Black => Self::BLACK,
        };
        Piece(color | kind as u8)
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn is_white(&self) -> bool {
        self.0 & Self::WHITE != 0
    }

    pub const fn side(&self) -> Option<Side> {
        match self.0 & Self::COLOR_MASK {
            Self::WHITE => Some(Side::White),
            Self::BLACK => Some(Side::Black),
            _ => None,
        }
    }

    /// Total over the 13-value palette. Any other bit pattern is a
    /// corrupted board, not a recoverable condition.
    pub const fn kind(&self) -> PieceKind {
        if self.0 == 0 {
            return PieceKind::Empty;
        }
        let color = self.0 & Self::COLOR_MASK;
        assert!(
            color == Self::WHITE || color == Self::BLACK,
            "piece value without a single color flag"
        );
        match self.0 & Self::KIND_MASK {
            1 => PieceKind::Bishop,
            2 => PieceKind::King,
            3 => PieceKind::Knight,
            4 => PieceKind::Pawn,
            5 => PieceKind::Queen,
            6 => PieceKind::Rook,
            _ => panic!("piece value with an invalid kind"),
        }
    }

    #[inline(always)]
    pub fn is_kind(&self, kind: PieceKind) -> bool {
        self.kind() == kind
    }

    pub fn same_color(&self, other: Piece) -> bool {
        self.is_white() == other.is_white()
    }

    /// Uppercase = White, lowercase = Black.
    pub fn from_fen(letter: char) -> Result<Self, BoardError> {
        let kind = match letter.to_ascii_lowercase() {
            'b' => PieceKind::Bishop,
            'k' => PieceKind::King,
            'n' => PieceKind::Knight,
            'p' => PieceKind::Pawn,
            'q' => PieceKind::Queen,
            'r' => PieceKind::Rook,
            _ => return Err(BoardError::InvalidFenChar(letter)),
        };
        let side = if letter.is_ascii_uppercase() {
            Side::White
        } else {
            Side::Black
        };
        Ok(Self::new(kind, side))
    }

    pub fn to_fen(self) -> char {
        let letter = match self.kind() {
            PieceKind::Empty => return '-',
            PieceKind::Bishop => 'b',
            PieceKind::King => 'k',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
        };
        if self.is_white() {
            letter.to_ascii_uppercase()
        } else {
            letter
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

/// Castling rights packed into a [`u8`]:
/// ```text
/// Bit: 7 6 5 4 3 2 1 0
///      - - - - q k Q K
///      | | | | | | | +-- White kingside right
///      | | | | | | +---- White queenside right
///      | | | | | +------ Black kingside right
///      | | | | +-------- Black queenside right
///      +-+-+-+---------- (unused)
/// ```
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
#[repr(transparent)]
pub struct CastlingRights(pub u8);

impl CastlingRights {
    pub const NO_CASTLING: u8 = 0;
    /// White King side castling
    pub const WHITE_00: u8 = 0b0001;
    /// White Queen side castling
    pub const WHITE_000: u8 = 0b0010;
    /// Black King side castling
    pub const BLACK_00: u8 = 0b0100;
    /// Black Queen side castling
    pub const BLACK_000: u8 = 0b1000;

    pub const WHITE_CASTLING: Self = Self(Self::WHITE_00 | Self::WHITE_000);
    pub const BLACK_CASTLING: Self = Self(Self::BLACK_00 | Self::BLACK_000);
    pub const ANY_CASTLING: Self = Self(Self::WHITE_CASTLING.0 | Self::BLACK_CASTLING.0);

    #[inline(always)]
    pub const fn all() -> Self {
        Self::ANY_CASTLING
    }

    #[inline(always)]
    pub const fn empty() -> Self {
        Self(Self::NO_CASTLING)
    }

    #[inline(always)]
    pub const fn is_empty(&self) -> bool {
        self.0 == Self::NO_CASTLING
    }

    #[inline(always)]
    pub const fn allows(&self, rights: CastlingRights) -> bool {
        self.0 & rights.0 != Self::NO_CASTLING
    }

    #[inline(always)]
    pub const fn add_right(&mut self, rights: CastlingRights) {
        self.0 |= rights.0;
    }

    #[inline(always)]
    pub const fn remove_right(&mut self, rights: CastlingRights) {
        self.0 &= !rights.0;
    }

    #[inline(always)]
    pub const fn can_castle(&self, side: Side, kingside: bool) -> bool {
        match (side, kingside) {
            (Side::White, true) => self.allows(CastlingRights(CastlingRights::WHITE_00)),
            (Side::White, false) => self.allows(CastlingRights(CastlingRights::WHITE_000)),
            (Side::Black, true) => self.allows(CastlingRights(CastlingRights::BLACK_00)),
            (Side::Black, false) => self.allows(CastlingRights(CastlingRights::BLACK_000)),
        }
    }

    pub const fn side_rights(side: Side) -> Self {
        match side {
            Side::White => Self::WHITE_CASTLING,
            Side::Black => Self::BLACK_CASTLING,
        }
    }
}

impl Default for CastlingRights {
    fn default() -> Self {
        Self::empty()
    }
}

impl Display for CastlingRights {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.allows(Self(Self::WHITE_00)) {
            write!(f, "K")?;
        }
        if self.allows(Self(Self::WHITE_000)) {
            write!(f, "Q")?;
        }
        if self.allows(Self(Self::BLACK_00)) {
            write!(f, "k")?;
        }
        if self.allows(Self(Self::BLACK_000)) {
            write!(f, "q")?;
        }
        if self.is_empty() {
            write!(f, "-")?;
        }
        Ok(())
    }
}

/// A single board square, row-major from the top-left corner.
/// # Representation
/// 0 is a8, 7 is h8, 56 is a1, 63 is h1.
/// ```text
/// files ------------------------------->
///   a8, b8, c8, d8, e8, f8, g8, h8   <- index 0..=7
///   a7, b7, c7, d7, e7, f7, g7, h7
///   a6, b6, c6, d6, e6, f6, g6, h6
///   a5, b5, c5, d5, e5, f5, g5, h5
///   a4, b4, c4, d4, e4, f4, g4, h4
///   a3, b3, c3, d3, e3, f3, g3, h3
///   a2, b2, c2, d2, e2, f2, g2, h2
///   a1, b1, c1, d1, e1, f1, g1, h1   <- index 56..=63
/// ```
#[derive(Default, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy)]
#[repr(transparent)]
pub struct Square(usize);

impl Square {
    /// Returns a Square from a given index. Will return None if index is
    /// out of bounds. index should be [0, 63]
    #[inline(always)]
    pub const fn new(index: usize) -> Option<Self> {
        if index < NUM_SQUARES {
            return Some(Self(index));
        }
        None
    }

    /// Row 0 is rank 8; file 0 is the a-file.
    #[inline(always)]
    pub const fn from_coords(row: usize, file: usize) -> Option<Self> {
        if row < NUM_RANKS && file < NUM_FILES {
            return Some(Square(row * NUM_FILES + file));
        }
        None
    }

    #[inline(always)]
    pub const fn index(&self) -> usize {
        self.0
    }

    #[inline(always)]
    pub const fn row(&self) -> usize {
        self.0 / NUM_FILES
    }

    #[inline(always)]
    pub const fn file(&self) -> usize {
        self.0 % NUM_FILES
    }

    /// NOTE: Rank is 1 indexed, counted from White's side of the board.
    #[inline(always)]
    pub const fn rank(&self) -> usize {
        NUM_RANKS - self.row()
    }

    /// Steps by a [`Direction`](crate::moves::Direction) delta, failing at
    /// the top or bottom edge. File wrap is the caller's concern.
    #[inline(always)]
    pub const fn offset(&self, delta: i8) -> Option<Square> {
        let target = self.0 as i8 + delta;
        if target < 0 {
            return None;
        }
        Square::new(target as usize)
    }
}

impl From<Square> for usize {
    fn from(value: Square) -> Self {
        value.0
    }
}

impl FromStr for Square {
    type Err = miette::Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        miette::ensure!(
            s.len() == 2,
            "Square needs 1 letter and 1 digit to construct"
        );
        let s = s.to_ascii_lowercase();
        let mut iter = s.chars();
        let letter = iter.next().context("1st char should be a file letter")?;
        let digit = iter.next().context("2nd char should be a rank digit")?;
        miette::ensure!(
            ('a'..='h').contains(&letter) && ('1'..='8').contains(&digit),
            "valid squares run a1..h8, got {s}"
        );
        let file = letter as usize - 'a' as usize;
        let rank = digit as usize - '0' as usize;
        Ok(Self((NUM_RANKS - rank) * NUM_FILES + file))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = (self.file() as u8 + b'a') as char;
        let rank = (self.rank() as u8 + b'0') as char;
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_square() {
        assert_eq!(format!("{}", Square(0)), "a8");
        assert_eq!(format!("{}", Square(7)), "h8");
        assert_eq!(format!("{}", Square(56)), "a1");
        assert_eq!(format!("{}", Square(63)), "h1");
        assert_eq!(format!("{}", Square(36)), "e4");
        assert_eq!(format!("{}", Square(52)), "e2");
    }

    #[test]
    fn test_square_from_str() {
        assert_eq!(Square::from_str("a8").unwrap(), Square(0));
        assert_eq!(Square::from_str("e2").unwrap(), Square(52));
        assert_eq!(Square::from_str("E2").unwrap(), Square(52));
        assert_eq!(Square::from_str("h1").unwrap(), Square(63));
        assert!(Square::from_str("i1").is_err());
        assert!(Square::from_str("a9").is_err());
        assert!(Square::from_str("a").is_err());
    }

    #[test]
    fn test_piece_fen_round_trip() {
        for letter in ['b', 'k', 'n', 'p', 'q', 'r', 'B', 'K', 'N', 'P', 'Q', 'R'] {
            let piece = Piece::from_fen(letter).unwrap();
            assert_eq!(piece.to_fen(), letter);
            assert_eq!(piece.is_white(), letter.is_ascii_uppercase());
        }
    }

    #[test]
    fn test_piece_from_fen_rejects_junk() {
        for letter in ['x', '1', ' ', 'j'] {
            assert_eq!(
                Piece::from_fen(letter),
                Err(BoardError::InvalidFenChar(letter))
            );
        }
    }

    #[test]
    fn test_piece_kind_total_over_palette() {
        assert_eq!(Piece::EMPTY.kind(), PieceKind::Empty);
        for side in Side::SIDES {
            for kind in PieceKind::KINDS {
                assert_eq!(Piece::new(kind, side).kind(), kind);
                assert_eq!(Piece::new(kind, side).side(), Some(side));
            }
        }
    }

    #[test]
    #[should_panic]
    fn test_piece_kind_panics_on_corrupt_value() {
        // Kind bits without a color flag are outside the palette.
        let _ = Piece(0b0000_0011).kind();
    }

    #[test]
    fn test_castling_rights_display() {
        assert_eq!(format!("{}", CastlingRights::all()), "KQkq");
        assert_eq!(format!("{}", CastlingRights::empty()), "-");
        assert_eq!(
            format!("{}", CastlingRights(CastlingRights::WHITE_00)),
            "K"
        );
    }
}

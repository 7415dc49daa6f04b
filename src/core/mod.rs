//! Contains the primitives every other module is built on: `Position`, `Color`, `PieceKind`,
//! `Piece`, the move representation `MoveEvent` and the score constants.

pub mod move_list;
pub mod piece_move;
pub mod position;
pub mod score;

use self::score::*;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::Not;

/// Number of rows (and columns) of a chessboard.
pub const BOARD_SIZE: usize = 8;

/// Number of squares on a chessboard.
pub const SQ_CNT: usize = 64;

/// Number of players.
pub const PLAYER_CNT: usize = 2;

/// Number of piece kinds.
pub const PIECE_KIND_CNT: usize = 6;

/// Array of both colors, indexed by their enum value.
pub const ALL_COLORS: [Color; PLAYER_CNT] = [Color::White, Color::Black];

/// Array of all piece kinds, indexed by their enum value.
pub const ALL_PIECE_KINDS: [PieceKind; PIECE_KIND_CNT] = [
    PieceKind::King,
    PieceKind::Queen,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Pawn,
    PieceKind::Rook,
];

/// Enum to represent the two sides, White & Black.
///
/// Row 0 is Black's back rank and row 7 is White's, so White pawns advance towards
/// decreasing rows.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    /// Returns the other color.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rookery::core::Color;
    ///
    /// let b = Color::Black;
    /// assert_eq!(b.opposite(), Color::White);
    /// assert_eq!(b.opposite().opposite(), b);
    /// ```
    #[inline(always)]
    pub fn opposite(self) -> Color {
        !self
    }

    /// Gets the row direction of a pawn push for a given color.
    #[inline(always)]
    pub fn pawn_push(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// The row this color's pawns start on, and the only row a double push may begin from.
    #[inline(always)]
    pub fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The row this color's king and rooks start on.
    #[inline(always)]
    pub fn home_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// The row this color's pawns promote on, which is the opponent's home row.
    #[inline(always)]
    pub fn back_rank(self) -> i8 {
        self.opposite().home_row()
    }
}

impl Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match *self {
            Color::White => "White",
            Color::Black => "Black",
        })
    }
}

/// All possible kinds of pieces on a chessboard.
///
/// For a piece with a color attached, see [`Piece`].
///
/// [`Piece`]: struct.Piece.html
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Queen = 1,
    Bishop = 2,
    Knight = 3,
    Pawn = 4,
    Rook = 5,
}

impl PieceKind {
    /// Returns the material worth of a piece in pawns. The king is excluded from material
    /// counting and is worth nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rookery::core::PieceKind;
    ///
    /// assert_eq!(PieceKind::Queen.material(), 9);
    /// assert_eq!(PieceKind::King.material(), 0);
    /// ```
    #[inline]
    pub fn material(self) -> u8 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Knight | PieceKind::Bishop => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King => 0,
        }
    }

    /// Returns the score value of a piece, in centipawns.
    #[inline]
    pub fn value(self) -> Value {
        match self {
            PieceKind::Pawn => PAWN,
            PieceKind::Knight => KNIGHT,
            PieceKind::Bishop => BISHOP,
            PieceKind::Rook => ROOK,
            PieceKind::Queen => QUEEN,
            PieceKind::King => ZERO,
        }
    }

    /// Return the lowercase character of a `PieceKind`.
    #[inline]
    pub fn char_lower(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    /// Return the uppercase character of a `PieceKind`.
    #[inline]
    pub fn char_upper(self) -> char {
        self.char_lower().to_ascii_uppercase()
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match *self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        };
        f.pad(s)
    }
}

/// A piece belonging to one of the players.
///
/// For a representation of only the kind (with no color attached), see [`PieceKind`].
///
/// [`PieceKind`]: enum.PieceKind.html
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: Color,
    #[serde(rename = "name")]
    pub kind: PieceKind,
}

impl Piece {
    /// Creates a `Piece` from a `Color` and `PieceKind`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::core::{Color, Piece, PieceKind};
    ///
    /// let black_knight = Piece::new(Color::Black, PieceKind::Knight);
    ///
    /// assert_eq!(black_knight.kind, PieceKind::Knight);
    /// assert_eq!(black_knight.color, Color::Black);
    /// ```
    #[inline(always)]
    pub const fn new(color: Color, kind: PieceKind) -> Piece {
        Piece { color, kind }
    }

    /// Returns the character of a `Piece`: uppercase for White, lowercase for Black.
    pub fn character(self) -> char {
        match self.color {
            Color::White => self.kind.char_upper(),
            Color::Black => self.kind.char_lower(),
        }
    }

    /// Compact code used for hashing a square's contents, in `1..=12`.
    #[inline(always)]
    pub(crate) fn code(self) -> u8 {
        1 + self.color as u8 * PIECE_KIND_CNT as u8 + self.kind as u8
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.character())
    }
}

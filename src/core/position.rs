//! Contains the representation of a location on the chessboard.
//!
//! A `Position` is a `(row, col)` pair. Row 0 is Black's back rank, row 7 is White's,
//! and column 0 is the a-file:
//!
//! ```md,ignore
//! 8 | [0,0] [0,1] [0,2] [0,3] [0,4] [0,5] [0,6] [0,7]
//! 7 | [1,0] [1,1] ...
//! ...
//! 1 | [7,0] [7,1] [7,2] [7,3] [7,4] [7,5] [7,6] [7,7]
//!   -------------------------------------------------
//!      a     b     c     d     e     f     g     h
//! ```
//!
//! Positions are also used as offset vectors (e.g. `Position::new(-2, 1)` for a knight jump),
//! so the components are signed and a `Position` is not guaranteed to be on the board.
//! Use [`Position::is_okay`] before indexing, or [`Position::try_new`] to construct a
//! checked one.
//!
//! # Examples
//!
//! ```rust
//! use rookery::core::position::Position;
//!
//! let e2 = Position::new(6, 4);
//! let e4 = e2 + Position::new(-2, 0);
//!
//! assert_eq!(e4, Position::new(4, 4));
//! assert_eq!(e4.to_string(), "e4");
//! assert!(!(e4 + Position::new(5, 0)).is_okay());
//! ```
//!
//! [`Position::is_okay`]: struct.Position.html#method.is_okay
//! [`Position::try_new`]: struct.Position.html#method.try_new

use super::{BOARD_SIZE, SQ_CNT};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::fmt;
use std::ops::{Add, Sub};

/// Error returned when a position lies off the board.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum PositionError {
    #[error("position [{row}, {col}] is out of bounds")]
    OutOfBounds { row: i8, col: i8 },
}

/// A row / column pair. Serialized as the two-element array `[row, col]`.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(from = "[i8; 2]", into = "[i8; 2]")]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

/// All 64 board positions in row-major order. This is the canonical iteration order of the
/// crate.
pub const ALL_POSITIONS: [Position; SQ_CNT] = all_positions();

const fn all_positions() -> [Position; SQ_CNT] {
    let mut arr = [Position { row: 0, col: 0 }; SQ_CNT];
    let mut i = 0;
    while i < SQ_CNT {
        arr[i] = Position {
            row: (i / BOARD_SIZE) as i8,
            col: (i % BOARD_SIZE) as i8,
        };
        i += 1;
    }
    arr
}

impl Position {
    /// Creates a new `Position` or offset. No bounds checking is done.
    #[inline(always)]
    pub const fn new(row: i8, col: i8) -> Position {
        Position { row, col }
    }

    /// Creates a new `Position`, failing if it is not on the board.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rookery::core::position::{Position, PositionError};
    ///
    /// assert!(Position::try_new(7, 7).is_ok());
    /// assert_eq!(Position::try_new(8, 0), Err(PositionError::OutOfBounds { row: 8, col: 0 }));
    /// ```
    pub fn try_new(row: i8, col: i8) -> Result<Position, PositionError> {
        Position::new(row, col).validate()
    }

    /// Returns if a `Position` is within the legal bounds of the board, which is inclusively
    /// between 0 - 7 for both row and column.
    #[inline(always)]
    pub const fn is_okay(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE as i8 && self.col >= 0 && self.col < BOARD_SIZE as i8
    }

    /// Returns the position itself if it is on the board.
    #[inline]
    pub fn validate(self) -> Result<Position, PositionError> {
        if self.is_okay() {
            Ok(self)
        } else {
            Err(PositionError::OutOfBounds {
                row: self.row,
                col: self.col,
            })
        }
    }

    /// Row-major index of the position, in `0..64`.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    #[inline(always)]
    pub fn index(self) -> usize {
        assert!(self.is_okay(), "position {:?} is out of bounds", self);
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Returns the position with the given row-major index.
    #[inline(always)]
    pub fn from_index(index: usize) -> Position {
        ALL_POSITIONS[index]
    }

    /// Returns the component-wise sign of this vector, e.g. `[-3, 3]` becomes `[-1, 1]`.
    #[inline]
    pub fn signum(self) -> Position {
        Position::new(self.row.signum(), self.col.signum())
    }
}

impl Add for Position {
    type Output = Position;

    #[inline(always)]
    fn add(self, rhs: Position) -> Position {
        Position::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Position {
    type Output = Position;

    #[inline(always)]
    fn sub(self, rhs: Position) -> Position {
        Position::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<[i8; 2]> for Position {
    fn from(arr: [i8; 2]) -> Self {
        Position::new(arr[0], arr[1])
    }
}

impl From<Position> for [i8; 2] {
    fn from(pos: Position) -> Self {
        [pos.row, pos.col]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_okay() {
            let file = (b'a' + self.col as u8) as char;
            let rank = BOARD_SIZE as i8 - self.row;
            write!(f, "{}{}", file, rank)
        } else {
            write!(f, "[{}, {}]", self.row, self.col)
        }
    }
}

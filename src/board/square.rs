//! Contains the `Square` structure, a single cell of the board.
//!
//! A square knows its own (fixed) position, the piece standing on it if any, and whether a
//! piece has ever moved to or from it. The `touched` flag belongs to the square, not the
//! piece: it survives the piece leaving and is what gates castling.

use crate::core::position::Position;
use crate::core::Piece;

use serde::{Deserialize, Serialize};

fn is_false(b: &bool) -> bool {
    !*b
}

/// A single square of the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    position: Position,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    piece: Option<Piece>,
    #[serde(default, skip_serializing_if = "is_false")]
    touched: bool,
}

impl Square {
    /// Creates an empty, untouched square.
    #[inline]
    pub const fn new(position: Position) -> Square {
        Square {
            position,
            piece: None,
            touched: false,
        }
    }

    /// The position of the square. Set when the board is built, never changes.
    #[inline(always)]
    pub fn position(&self) -> Position {
        self.position
    }

    /// The piece standing on the square, if any.
    #[inline(always)]
    pub fn piece(&self) -> Option<Piece> {
        self.piece
    }

    /// Returns if a piece has ever moved to or from this square.
    #[inline(always)]
    pub fn is_touched(&self) -> bool {
        self.touched
    }

    /// Returns if no piece stands on the square.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.piece.is_none()
    }

    #[inline(always)]
    pub(crate) fn set_piece(&mut self, piece: Option<Piece>) {
        self.piece = piece;
    }

    #[inline(always)]
    pub(crate) fn take_piece(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    #[inline(always)]
    pub(crate) fn touch(&mut self) {
        self.touched = true;
    }
}

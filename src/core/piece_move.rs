//! Module for the implementation and definition of a move to be played.
//!
//! We define a move as the struct `MoveEvent`: just a start and an end position. A move carries
//! no flags of its own:
//!
//! - castling is a king moving two columns along its home row, and the rook is
//!   relocated as a side effect,
//! - promotion is a pawn landing on its back rank, and the pawn always becomes a queen,
//! - en passant is recognized from the move that preceded it.
//!
//! The derived kind of a move is a [`MoveType`], computed by [`ChessState::classify`].
//!
//! # Safety
//!
//! A `MoveEvent` is only meaningful for a specific position. Applying a move that did not pass
//! [`ChessState::is_legal`] is a precondition violation.
//!
//! [`MoveType`]: enum.MoveType.html
//! [`ChessState::classify`]: ../../board/struct.ChessState.html#method.classify
//! [`ChessState::is_legal`]: ../../board/struct.ChessState.html#method.is_legal

use super::position::Position;
use super::score::Value;

use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::fmt;

/// Represents a singular move, from one position to another.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveEvent {
    pub start_pos: Position,
    pub end_pos: Position,
}

impl MoveEvent {
    /// Creates a new move.
    #[inline(always)]
    pub const fn new(start_pos: Position, end_pos: Position) -> MoveEvent {
        MoveEvent { start_pos, end_pos }
    }

    /// The vector from the start position to the end position.
    #[inline(always)]
    pub fn delta(self) -> Position {
        self.end_pos - self.start_pos
    }

    /// Returns if both ends of the move are on the board.
    #[inline]
    pub fn is_okay(self) -> bool {
        self.start_pos.is_okay() && self.end_pos.is_okay()
    }

    /// Returns the move in coordinate notation, e.g. `e2e4`.
    pub fn stringify(self) -> String {
        format!("{}{}", self.start_pos, self.end_pos)
    }
}

impl fmt::Display for MoveEvent {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(&self.stringify())
    }
}

/// The classification of an attempted move. Classification is purely geometric and says
/// nothing about legality.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum MoveType {
    /// Any move not covered by the special cases, including non-pawn captures.
    Normal,
    /// The king moving two columns along a row.
    Castle,
    /// A pawn advancing one row without capturing.
    PawnSingleForward,
    /// A pawn advancing two rows without capturing.
    PawnDoubleForward,
    /// A pawn moving diagonally forward onto the square it attacks.
    PawnNormalCapture,
    /// A pawn capturing a pawn that just double-pushed past it.
    PawnPassantCapture,
    /// A pawn advancing one row onto its back rank.
    PawnPromote,
}

/// A move paired with the score the search assigned to it.
///
/// The move is `None` for nodes where no move was played, such as terminal positions and
/// positions at the depth limit.
#[derive(Copy, Clone, Debug, Eq)]
pub struct ScoringMove {
    pub mov: Option<MoveEvent>,
    pub score: Value,
}

impl ScoringMove {
    /// Creates a new `ScoringMove`.
    #[inline(always)]
    pub fn new_score(mov: MoveEvent, score: Value) -> Self {
        ScoringMove {
            mov: Some(mov),
            score,
        }
    }

    /// Returns a `ScoringMove` without a move and a user-defined score.
    #[inline(always)]
    pub fn blank(score: Value) -> Self {
        ScoringMove { mov: None, score }
    }
}

impl Ord for ScoringMove {
    fn cmp(&self, other: &ScoringMove) -> Ordering {
        self.score.cmp(&other.score)
    }
}

impl PartialOrd for ScoringMove {
    fn partial_cmp(&self, other: &ScoringMove) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for ScoringMove {
    fn eq(&self, other: &ScoringMove) -> bool {
        self.score == other.score
    }
}

//! Legality of attempted moves.
//!
//! An illegal attempt is an expected event (a player clicked the wrong square, a generator
//! produced a pseudo-legal candidate), so legality is a plain `bool` and never an error.

use crate::core::piece_move::{MoveEvent, MoveType};
use crate::core::position::Position;
use crate::core::*;

use super::attacks;
use super::ChessState;

/// Column the king starts on, and the only column castling may begin from.
const KING_START_COL: i8 = 4;

impl ChessState {
    /// Returns if `mv` may be played in this state, given the move that preceded it.
    ///
    /// The move must start on a piece, must not land on a piece of the same color, must
    /// satisfy the rule for its [`MoveType`], and must not leave the mover's king in check.
    /// Whose turn it is, is not checked here. See [`ChessState::correct_color`].
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::board::ChessState;
    /// use rookery::core::piece_move::MoveEvent;
    /// use rookery::core::position::Position;
    ///
    /// let state = ChessState::initial();
    /// // Knight jump over the pawns.
    /// assert!(state.is_legal(None, MoveEvent::new(Position::new(7, 1), Position::new(5, 2))));
    /// // Bishop blocked by its own pawn.
    /// assert!(!state.is_legal(None, MoveEvent::new(Position::new(7, 2), Position::new(5, 4))));
    /// ```
    ///
    /// [`MoveType`]: ../core/piece_move/enum.MoveType.html
    /// [`ChessState::correct_color`]: struct.ChessState.html#method.correct_color
    pub fn is_legal(&self, preceding: Option<MoveEvent>, mv: MoveEvent) -> bool {
        if !mv.is_okay() || mv.start_pos == mv.end_pos {
            return false;
        }
        let piece = match self.piece_at(mv.start_pos) {
            Some(piece) => piece,
            None => return false,
        };
        if let Some(target) = self.piece_at(mv.end_pos) {
            if target.color == piece.color {
                return false;
            }
        }

        let follows_rules = match self.classify(preceding, mv) {
            MoveType::Normal => attacks::attacks(&self.board, piece, mv.start_pos, mv.end_pos),
            MoveType::Castle => self.castle_is_legal(piece.color, mv),
            MoveType::PawnSingleForward | MoveType::PawnPromote => {
                self.square(mv.end_pos).is_empty()
            }
            MoveType::PawnDoubleForward => {
                let middle = mv.start_pos + Position::new(piece.color.pawn_push(), 0);
                mv.start_pos.row == piece.color.pawn_start_row()
                    && self.square(middle).is_empty()
                    && self.square(mv.end_pos).is_empty()
            }
            MoveType::PawnNormalCapture => {
                !self.square(mv.end_pos).is_empty()
                    && attacks::attacks(&self.board, piece, mv.start_pos, mv.end_pos)
            }
            MoveType::PawnPassantCapture => true,
        };

        follows_rules && self.leaves_king_safe(preceding, mv, piece.color)
    }

    fn leaves_king_safe(&self, preceding: Option<MoveEvent>, mv: MoveEvent, color: Color) -> bool {
        let mut scratch = self.clone();
        scratch.apply_move(preceding, mv);
        !scratch.in_check(color)
    }

    // The king must be on its starting square, and both it and the rook on the side it is
    // heading to must never have moved. Every square between them must be empty and safe.
    fn castle_is_legal(&self, color: Color, mv: MoveEvent) -> bool {
        let home = color.home_row();
        if mv.start_pos != Position::new(home, KING_START_COL) {
            return false;
        }
        let rook_pos = castle_rook_start(mv);
        if self.piece_at(rook_pos) != Some(Piece::new(color, PieceKind::Rook)) {
            return false;
        }
        if self.square(mv.start_pos).is_touched() || self.square(rook_pos).is_touched() {
            return false;
        }
        if self.in_check(color) {
            return false;
        }

        let step = Position::new(0, (rook_pos.col - mv.start_pos.col).signum());
        let enemy = color.opposite();
        let mut pos = mv.start_pos + step;
        while pos != rook_pos {
            if !self.square(pos).is_empty() || self.has_attackers(pos, enemy) {
                return false;
            }
            pos = pos + step;
        }
        true
    }
}

/// The position of the rook that takes part in a castle, from the king's move.
#[inline]
pub(crate) fn castle_rook_start(mv: MoveEvent) -> Position {
    let col = if mv.end_pos.col > mv.start_pos.col { 7 } else { 0 };
    Position::new(mv.start_pos.row, col)
}

/// The position the castling rook lands on, right beside the king's new position.
#[inline]
pub(crate) fn castle_rook_end(mv: MoveEvent) -> Position {
    let col = if mv.end_pos.col > mv.start_pos.col {
        mv.end_pos.col - 1
    } else {
        mv.end_pos.col + 1
    };
    Position::new(mv.end_pos.row, col)
}

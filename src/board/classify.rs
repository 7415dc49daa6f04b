//! Classification of attempted moves into a [`MoveType`].
//!
//! Classification only looks at geometry, the moving piece and the preceding move. It never
//! judges legality, so it succeeds for any pair of on-board positions.
//!
//! [`MoveType`]: ../../core/piece_move/enum.MoveType.html

use crate::core::piece_move::{MoveEvent, MoveType};
use crate::core::position::Position;
use crate::core::*;

use super::queries::is_back_rank;
use super::ChessState;

impl ChessState {
    /// Derives the kind of the attempted move `mv`.
    ///
    /// The order of the decision is:
    ///
    /// - a pawn moving straight ahead one row is a `PawnPromote` if it lands on its back rank,
    ///   otherwise a `PawnSingleForward`,
    /// - a pawn moving straight ahead two rows is a `PawnDoubleForward`,
    /// - a pawn moving one row ahead and one column aside is a capture, and it is a
    ///   `PawnPassantCapture` when `preceding` was an enemy pawn's double push that this move
    ///   lands right behind, otherwise a `PawnNormalCapture`,
    /// - a king moving exactly two columns along its row is a `Castle`,
    /// - anything else, including a move from an empty square or a move with an end off the
    ///   board, is `Normal`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::board::ChessState;
    /// use rookery::core::piece_move::{MoveEvent, MoveType};
    /// use rookery::core::position::Position;
    ///
    /// let state = ChessState::initial();
    /// let push = MoveEvent::new(Position::new(6, 4), Position::new(4, 4));
    /// assert_eq!(state.classify(None, push), MoveType::PawnDoubleForward);
    ///
    /// let castle = MoveEvent::new(Position::new(7, 4), Position::new(7, 6));
    /// assert_eq!(state.classify(None, castle), MoveType::Castle);
    /// ```
    pub fn classify(&self, preceding: Option<MoveEvent>, mv: MoveEvent) -> MoveType {
        if !mv.is_okay() {
            return MoveType::Normal;
        }
        let piece = match self.piece_at(mv.start_pos) {
            Some(piece) => piece,
            None => return MoveType::Normal,
        };
        let delta = mv.delta();
        match piece.kind {
            PieceKind::Pawn => {
                let push = piece.color.pawn_push();
                if delta.col == 0 && delta.row == push {
                    if is_back_rank(piece.color, mv.end_pos) {
                        MoveType::PawnPromote
                    } else {
                        MoveType::PawnSingleForward
                    }
                } else if delta.col == 0 && delta.row == 2 * push {
                    MoveType::PawnDoubleForward
                } else if delta.row == push && delta.col.abs() == 1 {
                    if self.is_passant_target(preceding, piece.color, mv.end_pos) {
                        MoveType::PawnPassantCapture
                    } else {
                        MoveType::PawnNormalCapture
                    }
                } else {
                    MoveType::Normal
                }
            }
            PieceKind::King if delta.row == 0 && delta.col.abs() == 2 => MoveType::Castle,
            _ => MoveType::Normal,
        }
    }

    /// Returns if a pawn making `mv` would be promoted, whatever the type of the move.
    #[inline]
    pub fn promotes(&self, mv: MoveEvent) -> bool {
        if !mv.is_okay() {
            return false;
        }
        match self.piece_at(mv.start_pos) {
            Some(piece) => piece.kind == PieceKind::Pawn && is_back_rank(piece.color, mv.end_pos),
            None => false,
        }
    }

    // `preceding` must be an enemy pawn pushing two rows from its starting row, still standing
    // on its landing square, and `target` the square it skipped over.
    fn is_passant_target(&self, preceding: Option<MoveEvent>, mover: Color, target: Position) -> bool {
        let prev = match preceding {
            Some(prev) => prev,
            None => return false,
        };
        let enemy = mover.opposite();
        let delta = prev.delta();
        if prev.start_pos.row != enemy.pawn_start_row()
            || delta.col != 0
            || delta.row != 2 * enemy.pawn_push()
        {
            return false;
        }
        if self.piece_at(prev.end_pos) != Some(Piece::new(enemy, PieceKind::Pawn)) {
            return false;
        }
        let skipped = prev.start_pos + Position::new(enemy.pawn_push(), 0);
        target == skipped
    }
}

//! Playing moves on a `ChessState`, and undoing them.
//!
//! Two disciplines are offered. [`ChessState::make_move`] treats the state as a value and
//! returns the next one. [`ChessState::apply_move`] edits the state in place and returns a
//! [`MoveDiff`] snapshot of every square it changed, which [`ChessState::revert_move`] writes
//! back. The search uses the second one.
//!
//! [`ChessState::make_move`]: ../struct.ChessState.html#method.make_move
//! [`ChessState::apply_move`]: ../struct.ChessState.html#method.apply_move
//! [`ChessState::revert_move`]: ../struct.ChessState.html#method.revert_move
//! [`MoveDiff`]: struct.MoveDiff.html

use crate::core::piece_move::{MoveEvent, MoveType};
use crate::core::position::Position;
use crate::core::*;

use super::legality::{castle_rook_end, castle_rook_start};
use super::queries::is_back_rank;
use super::square::Square;
use super::ChessState;

use thiserror::Error;
use tracing::trace;

/// Most squares a single move can edit: castling touches the king's and the rook's start and
/// end squares.
const MAX_DIFF: usize = 4;

/// Errors from the checked [`ChessState::try_make_move`].
///
/// [`ChessState::try_make_move`]: ../struct.ChessState.html#method.try_make_move
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("no piece at the start of move {mv}")]
    NoPiece { mv: MoveEvent },
    #[error("move {mv} is not legal in this position")]
    Illegal { mv: MoveEvent },
}

/// The squares a call to [`ChessState::apply_move`] edited, as they were before the move.
///
/// [`ChessState::apply_move`]: ../struct.ChessState.html#method.apply_move
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MoveDiff {
    saved: [Square; MAX_DIFF],
    len: u8,
}

impl MoveDiff {
    fn new() -> MoveDiff {
        MoveDiff {
            saved: [Square::new(Position::new(0, 0)); MAX_DIFF],
            len: 0,
        }
    }

    fn record(&mut self, square: Square) {
        if self.squares().iter().any(|s| s.position() == square.position()) {
            return;
        }
        assert!((self.len as usize) < MAX_DIFF, "a move edited more than {} squares", MAX_DIFF);
        self.saved[self.len as usize] = square;
        self.len += 1;
    }

    /// The saved squares, in the order they were first edited.
    #[inline]
    pub fn squares(&self) -> &[Square] {
        &self.saved[..self.len as usize]
    }

    /// Number of squares edited.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Returns if no square was edited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl ChessState {
    /// Plays a legal move and returns the resulting state. `self` is left untouched.
    ///
    /// The moving piece replaces whatever stood on the target square and both squares become
    /// touched. On top of that:
    ///
    /// - a pawn landing on its back rank becomes a queen,
    /// - an en passant capture removes the pawn standing on `preceding`'s end square,
    /// - a castle moves the rook to the square beside the king's new position.
    ///
    /// # Panics
    ///
    /// Panics if there is no piece at the start of the move. The move must have passed
    /// [`ChessState::is_legal`]; other illegal moves leave the result unspecified.
    ///
    /// [`ChessState::is_legal`]: struct.ChessState.html#method.is_legal
    pub fn make_move(&self, preceding: Option<MoveEvent>, mv: MoveEvent) -> ChessState {
        let mut next = self.clone();
        next.apply_move(preceding, mv);
        next
    }

    /// Checked version of [`ChessState::make_move`]: the move is validated first.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::board::ChessState;
    /// use rookery::board::apply::MoveError;
    /// use rookery::core::piece_move::MoveEvent;
    /// use rookery::core::position::Position;
    ///
    /// let state = ChessState::initial();
    /// let bad = MoveEvent::new(Position::new(4, 4), Position::new(3, 4));
    /// assert_eq!(state.try_make_move(None, bad), Err(MoveError::NoPiece { mv: bad }));
    ///
    /// let good = MoveEvent::new(Position::new(6, 4), Position::new(4, 4));
    /// assert!(state.try_make_move(None, good).is_ok());
    /// ```
    ///
    /// [`ChessState::make_move`]: struct.ChessState.html#method.make_move
    pub fn try_make_move(
        &self,
        preceding: Option<MoveEvent>,
        mv: MoveEvent,
    ) -> Result<ChessState, MoveError> {
        if mv.start_pos.is_okay() && self.piece_at(mv.start_pos).is_none() {
            return Err(MoveError::NoPiece { mv });
        }
        if !self.is_legal(preceding, mv) {
            trace!(%mv, "rejected illegal move");
            return Err(MoveError::Illegal { mv });
        }
        Ok(self.make_move(preceding, mv))
    }

    /// Plays a legal move in place, returning the squares needed to undo it.
    ///
    /// Same effects and preconditions as [`ChessState::make_move`].
    ///
    /// # Panics
    ///
    /// Panics if there is no piece at the start of the move.
    ///
    /// [`ChessState::make_move`]: struct.ChessState.html#method.make_move
    pub fn apply_move(&mut self, preceding: Option<MoveEvent>, mv: MoveEvent) -> MoveDiff {
        let piece = match self.piece_at(mv.start_pos) {
            Some(piece) => piece,
            None => panic!("apply_move: no piece at {} for move {}", mv.start_pos, mv),
        };
        let move_type = self.classify(preceding, mv);
        let mut diff = MoveDiff::new();

        diff.record(self.board[mv.start_pos]);
        diff.record(self.board[mv.end_pos]);
        self.relocate(mv.start_pos, mv.end_pos);

        if piece.kind == PieceKind::Pawn && is_back_rank(piece.color, mv.end_pos) {
            self.set_piece(mv.end_pos, Some(Piece::new(piece.color, PieceKind::Queen)));
        } else if move_type == MoveType::PawnPassantCapture {
            if let Some(prev) = preceding {
                diff.record(self.board[prev.end_pos]);
                self.board.square_mut(prev.end_pos).take_piece();
            }
        } else if move_type == MoveType::Castle {
            let rook_from = castle_rook_start(mv);
            let rook_to = castle_rook_end(mv);
            diff.record(self.board[rook_from]);
            diff.record(self.board[rook_to]);
            self.relocate(rook_from, rook_to);
        }
        diff
    }

    /// Undoes the move that produced `diff`. Must be called on the state `apply_move` edited,
    /// with no other edits in between.
    pub fn revert_move(&mut self, diff: MoveDiff) {
        for saved in diff.squares().iter().rev() {
            *self.board.square_mut(saved.position()) = *saved;
        }
    }

    fn relocate(&mut self, from: Position, to: Position) {
        let piece = self.board.square_mut(from).take_piece();
        self.board.square_mut(from).touch();
        let target = self.board.square_mut(to);
        target.set_piece(piece);
        target.touch();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: (i8, i8), to: (i8, i8)) -> MoveEvent {
        MoveEvent::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
    }

    #[test]
    fn relocation_touches_both_squares() {
        let state = ChessState::initial();
        let next = state.make_move(None, mv((6, 4), (4, 4)));
        assert!(next.square(Position::new(6, 4)).is_empty());
        assert!(next.square(Position::new(6, 4)).is_touched());
        assert!(next.square(Position::new(4, 4)).is_touched());
        assert_eq!(
            next.piece_at(Position::new(4, 4)),
            Some(Piece::new(Color::White, PieceKind::Pawn))
        );
        // The source state is unchanged.
        assert!(!state.square(Position::new(6, 4)).is_touched());
    }

    #[test]
    fn castle_diff_has_four_squares() {
        let mut state = ChessState::empty();
        state.set_piece(Position::new(0, 4), Some(Piece::new(Color::Black, PieceKind::King)));
        state.set_piece(Position::new(0, 0), Some(Piece::new(Color::Black, PieceKind::Rook)));
        let before = state.clone();

        let diff = state.apply_move(None, mv((0, 4), (0, 2)));
        assert_eq!(diff.len(), 4);
        assert_eq!(
            state.piece_at(Position::new(0, 3)),
            Some(Piece::new(Color::Black, PieceKind::Rook))
        );
        assert!(state.square(Position::new(0, 0)).is_empty());
        assert!(state.square(Position::new(0, 0)).is_touched());

        state.revert_move(diff);
        assert_eq!(state, before);
    }

    #[test]
    fn promotion_capture_queens() {
        let mut state = ChessState::empty();
        state.set_piece(Position::new(6, 1), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        state.set_piece(Position::new(7, 0), Some(Piece::new(Color::White, PieceKind::Rook)));
        let next = state.make_move(None, mv((6, 1), (7, 0)));
        assert_eq!(
            next.piece_at(Position::new(7, 0)),
            Some(Piece::new(Color::Black, PieceKind::Queen))
        );
    }

    #[test]
    #[should_panic]
    fn empty_start_panics() {
        let mut state = ChessState::empty();
        state.apply_move(None, mv((3, 3), (4, 4)));
    }

    #[test]
    fn try_make_move_illegal() {
        let state = ChessState::initial();
        let bad = mv((7, 0), (5, 0));
        assert_eq!(state.try_make_move(None, bad), Err(MoveError::Illegal { mv: bad }));
        let off = mv((8, 0), (5, 0));
        assert_eq!(state.try_make_move(None, off), Err(MoveError::Illegal { mv: off }));
    }
}

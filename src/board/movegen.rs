//! Enumeration of legal moves.
//!
//! Candidates for a piece are the squares it attacks, plus one and two square pushes for
//! pawns and the two castling targets for kings. Every candidate is then checked with
//! [`ChessState::is_legal`].
//!
//! The order of the returned list matters to the search. Captures come first, ordered by
//! the value of the captured piece minus the value of the capturing one, best first. Quiet
//! moves follow in random order, so that two engines replaying the same position do not
//! fall into the same line forever.
//!
//! [`ChessState::is_legal`]: ../struct.ChessState.html#method.is_legal

use crate::core::move_list::MoveList;
use crate::core::piece_move::{MoveEvent, MoveType};
use crate::core::position::Position;
use crate::core::score::Value;
use crate::core::*;

use super::attacks::{self, adjacent};
use super::ChessState;

use rand::seq::SliceRandom;
use rand::Rng;

impl ChessState {
    /// Returns every legal move for `color`, captures first. Quiet moves are shuffled with
    /// the thread-local RNG.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::board::ChessState;
    /// use rookery::core::Color;
    ///
    /// let state = ChessState::initial();
    /// assert_eq!(state.all_legal_moves(None, Color::Black).len(), 20);
    /// ```
    pub fn all_legal_moves(&self, preceding: Option<MoveEvent>, color: Color) -> MoveList {
        self.all_legal_moves_with(preceding, color, &mut rand::thread_rng())
    }

    /// Same as [`ChessState::all_legal_moves`], shuffling quiet moves with the given RNG.
    ///
    /// [`ChessState::all_legal_moves`]: struct.ChessState.html#method.all_legal_moves
    pub fn all_legal_moves_with<R: Rng + ?Sized>(
        &self,
        preceding: Option<MoveEvent>,
        color: Color,
        rng: &mut R,
    ) -> MoveList {
        let mut captures: Vec<(Value, MoveEvent)> = Vec::new();
        let mut quiet: Vec<MoveEvent> = Vec::with_capacity(32);

        for sq in self.board.iter() {
            let piece = match sq.piece() {
                Some(piece) if piece.color == color => piece,
                _ => continue,
            };
            let from = sq.position();
            for to in self.candidate_targets(piece, from) {
                let mv = MoveEvent::new(from, to);
                if !self.is_legal(preceding, mv) {
                    continue;
                }
                match self.captured_piece(preceding, mv) {
                    Some(victim) => captures.push((victim.kind.value() - piece.kind.value(), mv)),
                    None => quiet.push(mv),
                }
            }
        }

        captures.sort_by(|a, b| b.0.cmp(&a.0));
        quiet.shuffle(rng);

        let mut list = MoveList::with_capacity(captures.len() + quiet.len());
        for (_, mv) in captures {
            list.push(mv);
        }
        list.extend(quiet);
        list
    }

    /// Returns if `color` has at least one legal move. Stops at the first one found.
    pub fn has_legal_move(&self, preceding: Option<MoveEvent>, color: Color) -> bool {
        self.board.iter().any(|sq| match sq.piece() {
            Some(piece) if piece.color == color => self
                .candidate_targets(piece, sq.position())
                .into_iter()
                .any(|to| self.is_legal(preceding, MoveEvent::new(sq.position(), to))),
            _ => false,
        })
    }

    /// The squares worth trying as destinations for `piece` at `from`. A superset of its
    /// legal destinations.
    pub fn candidate_targets(&self, piece: Piece, from: Position) -> Vec<Position> {
        let mut targets = attacks::attacked_squares(&self.board, piece, from);
        match piece.kind {
            PieceKind::Pawn => {
                if let Some(single) = adjacent(from, piece.color) {
                    targets.push(single);
                    if let Some(double) = adjacent(single, piece.color) {
                        targets.push(double);
                    }
                }
            }
            PieceKind::King => {
                for dc in [-2, 2].iter() {
                    let side = from + Position::new(0, *dc);
                    if side.is_okay() {
                        targets.push(side);
                    }
                }
            }
            _ => {}
        }
        targets
    }

    /// The piece `mv` would capture, if any. For en passant this is the pawn beside the
    /// capturing pawn, not the one on the target square.
    pub fn captured_piece(&self, preceding: Option<MoveEvent>, mv: MoveEvent) -> Option<Piece> {
        if let Some(piece) = self.piece_at(mv.end_pos) {
            return Some(piece);
        }
        match (self.classify(preceding, mv), preceding) {
            (MoveType::PawnPassantCapture, Some(prev)) => self.piece_at(prev.end_pos),
            _ => None,
        }
    }
}

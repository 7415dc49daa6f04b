//! Read-only questions about a `ChessState`: check, checkmate and stalemate, where the kings
//! are, and how much material is left.

use crate::core::piece_move::MoveEvent;
use crate::core::position::Position;
use crate::core::*;

use super::attacks;
use super::square::Square;
use super::ChessState;

use serde::{Deserialize, Serialize};

/// How a finished game ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// The given color delivered checkmate.
    Winner(Color),
    /// Stalemate.
    Draw,
}

/// Returns if `pos` lies on the row where pawns of `color` promote: row 0 for White, row 7
/// for Black.
#[inline(always)]
pub fn is_back_rank(color: Color, pos: Position) -> bool {
    pos.row == color.back_rank()
}

impl ChessState {
    /// Returns the position of `color`'s king, if it has one on the board.
    pub fn king_position(&self, color: Color) -> Option<Position> {
        let king = Piece::new(color, PieceKind::King);
        self.board
            .iter()
            .find(|sq| sq.piece() == Some(king))
            .map(Square::position)
    }

    /// Returns the position of `color`'s king.
    ///
    /// # Panics
    ///
    /// Panics if `color` has no king on the board.
    pub fn find_king(&self, color: Color) -> Position {
        match self.king_position(color) {
            Some(pos) => pos,
            None => panic!("find_king: no {} king on the board", color),
        }
    }

    /// Returns if any piece of color `attacker` attacks `pos`.
    pub fn has_attackers(&self, pos: Position, attacker: Color) -> bool {
        self.board.iter().any(|sq| match sq.piece() {
            Some(piece) if piece.color == attacker => {
                attacks::attacks(&self.board, piece, sq.position(), pos)
            }
            _ => false,
        })
    }

    /// Returns the positions of every piece of color `attacker` attacking `pos`.
    pub fn attackers(&self, pos: Position, attacker: Color) -> Vec<Position> {
        self.board
            .iter()
            .filter_map(|sq| match sq.piece() {
                Some(piece)
                    if piece.color == attacker
                        && attacks::attacks(&self.board, piece, sq.position(), pos) =>
                {
                    Some(sq.position())
                }
                _ => None,
            })
            .collect()
    }

    /// Returns if `color`'s king is attacked. A side without a king is never in check.
    pub fn in_check(&self, color: Color) -> bool {
        match self.king_position(color) {
            Some(king) => self.has_attackers(king, color.opposite()),
            None => false,
        }
    }

    /// Returns if `color` is in check and has no legal move.
    pub fn in_checkmate(&self, preceding: Option<MoveEvent>, color: Color) -> bool {
        self.in_check(color) && !self.has_legal_move(preceding, color)
    }

    /// Returns if `color` is not in check but has no legal move.
    pub fn in_stalemate(&self, preceding: Option<MoveEvent>, color: Color) -> bool {
        !self.in_check(color) && !self.has_legal_move(preceding, color)
    }

    /// Returns how the game ended if `to_move` cannot move, or `None` if play goes on.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::board::ChessState;
    /// use rookery::core::Color;
    ///
    /// assert_eq!(ChessState::initial().game_over(None, Color::White), None);
    /// ```
    pub fn game_over(&self, preceding: Option<MoveEvent>, to_move: Color) -> Option<Outcome> {
        if self.has_legal_move(preceding, to_move) {
            None
        } else if self.in_check(to_move) {
            Some(Outcome::Winner(to_move.opposite()))
        } else {
            Some(Outcome::Draw)
        }
    }

    /// Returns if the piece at `pos` belongs to `color`. An empty square belongs to nobody.
    #[inline]
    pub fn correct_color(&self, pos: Position, color: Color) -> bool {
        matches!(self.board.get(pos), Ok(sq) if sq.piece().map(|p| p.color) == Some(color))
    }

    /// Returns if `piece` stands anywhere on the board.
    pub fn contains_piece(&self, piece: Piece) -> bool {
        self.board.iter().any(|sq| sq.piece() == Some(piece))
    }

    /// Counts the squares matching `filter`.
    pub fn count_squares<F>(&self, filter: F) -> usize
    where
        F: Fn(&Square) -> bool,
    {
        self.board.iter().filter(|sq| filter(*sq)).count()
    }

    /// Counts the pieces matching `filter`.
    pub fn count_pieces<F>(&self, filter: F) -> usize
    where
        F: Fn(Piece) -> bool,
    {
        self.board
            .iter()
            .filter_map(Square::piece)
            .filter(|p| filter(*p))
            .count()
    }

    /// Sums the material worth (in pawns, see [`PieceKind::material`]) of the pieces matching
    /// `filter`. Kings are worth nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::board::ChessState;
    /// use rookery::core::Color;
    ///
    /// let state = ChessState::initial();
    /// assert_eq!(state.material(|p| p.color == Color::White), 39);
    /// ```
    ///
    /// [`PieceKind::material`]: ../core/enum.PieceKind.html#method.material
    pub fn material<F>(&self, filter: F) -> u32
    where
        F: Fn(Piece) -> bool,
    {
        self.board
            .iter()
            .filter_map(Square::piece)
            .filter(|p| filter(*p))
            .map(|p| u32::from(p.kind.material()))
            .sum()
    }

    /// Returns if `mv`, played from `self` to reach `after`, resets the fifty-move counter:
    /// a pawn moved or a piece was captured.
    pub fn is_irreversible(&self, after: &ChessState, mv: MoveEvent) -> bool {
        let pawn_moved = self
            .piece_at(mv.start_pos)
            .map_or(false, |p| p.kind == PieceKind::Pawn);
        pawn_moved || self.count_pieces(|_| true) != after.count_pieces(|_| true)
    }
}

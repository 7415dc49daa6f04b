//! Module for simply evaluating the strength of a current position.
//!
//! This is a VERY basic evaluation: material, optionally refined by how many squares the
//! minor pieces and queens reach. Scores are in centipawns, from the point of view of the
//! given color.

use crate::board::attacks;
use crate::board::ChessState;
use crate::core::score::*;
use crate::core::*;

/// A simple evaluation structure.
///
/// ```
/// use rookery::board::ChessState;
/// use rookery::core::Color;
/// use rookery::tools::eval::Eval;
///
/// let state = ChessState::initial();
/// assert_eq!(Eval::eval_low(&state, Color::White), 0);
/// ```
pub struct Eval;

impl Eval {
    /// Material balance for `color`: its pieces count for, the opponent's against. Kings
    /// are not counted.
    pub fn eval_low(state: &ChessState, color: Color) -> Value {
        state
            .board
            .iter()
            .filter_map(|sq| sq.piece())
            .map(|p| {
                if p.color == color {
                    p.kind.value()
                } else {
                    -p.kind.value()
                }
            })
            .sum()
    }

    /// Squares attacked by `color`'s queens, bishops and knights, minus the same count for
    /// the opponent.
    pub fn mobility(state: &ChessState, color: Color) -> Value {
        state
            .board
            .iter()
            .filter_map(|sq| sq.piece().map(|p| (p, sq.position())))
            .filter(|(p, _)| {
                matches!(p.kind, PieceKind::Queen | PieceKind::Bishop | PieceKind::Knight)
            })
            .map(|(p, pos)| {
                let reach = attacks::attacked_squares(&state.board, p, pos).len() as Value;
                if p.color == color {
                    reach
                } else {
                    -reach
                }
            })
            .sum()
    }

    /// Full evaluation: material plus `mobility_weight` times mobility.
    pub fn eval(state: &ChessState, color: Color, mobility_weight: Value) -> Value {
        let material = Eval::eval_low(state, color);
        if mobility_weight == 0 {
            material
        } else {
            material + mobility_weight * Eval::mobility(state, color)
        }
    }
}

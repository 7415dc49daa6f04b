//! The minimax algorithm. Explores the whole tree to a fixed depth, without pruning and
//! without a cache.

use crate::board::ChessState;
use crate::core::piece_move::{MoveEvent, ScoringMove};
use crate::core::score::*;
use crate::core::Color;

use super::{leaf_score, terminal_score, SearchStats};

use rand::Rng;

/// Searches `state` to `depth` plies for the best move of `bot`. Scores are from `bot`'s
/// point of view. `state` is restored before returning.
pub fn minimax<R: Rng + ?Sized>(
    state: &mut ChessState,
    preceding: Option<MoveEvent>,
    bot: Color,
    depth: u16,
    mobility_weight: Value,
    rng: &mut R,
) -> (ScoringMove, SearchStats) {
    let mut stats = SearchStats::default();
    let best = node(state, preceding, bot, depth.max(1), 0, mobility_weight, rng, &mut stats);
    (best, stats)
}

#[allow(clippy::too_many_arguments)]
fn node<R: Rng + ?Sized>(
    state: &mut ChessState,
    preceding: Option<MoveEvent>,
    bot: Color,
    max_depth: u16,
    ply: u16,
    mobility_weight: Value,
    rng: &mut R,
    stats: &mut SearchStats,
) -> ScoringMove {
    stats.nodes += 1;
    let maximizing = ply % 2 == 0;
    let to_move = if maximizing { bot } else { bot.opposite() };

    if ply == max_depth {
        return leaf_score(state, preceding, to_move, maximizing, bot, mobility_weight);
    }

    let moves = state.all_legal_moves_with(preceding, to_move, &mut *rng);
    if moves.is_empty() {
        return ScoringMove::blank(terminal_score(state, to_move, maximizing));
    }

    let mut best = ScoringMove::blank(if maximizing { NEG_INFINITE } else { INFINITE });
    for mov in moves {
        let diff = state.apply_move(preceding, mov);
        let child = node(state, Some(mov), bot, max_depth, ply + 1, mobility_weight, rng, stats);
        state.revert_move(diff);

        let better = if maximizing {
            child.score > best.score
        } else {
            child.score < best.score
        };
        if better {
            best = ScoringMove::new_score(mov, child.score);
        }
    }
    best
}

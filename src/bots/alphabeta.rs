//! The alpha-beta algorithm, memoized through an [`EvalCache`].
//!
//! Nodes alternate between MAX (the searching bot to move) and MIN (its opponent to move).
//! Scores are always from the bot's point of view.
//!
//! [`EvalCache`]: ../../tools/cache/struct.EvalCache.html

use crate::board::ChessState;
use crate::core::piece_move::{MoveEvent, ScoringMove};
use crate::core::score::*;
use crate::core::Color;
use crate::tools::cache::{state_key, Entry, EvalCache, NodeBound, StateKey};
use crate::tools::SearchConfig;

use super::{leaf_score, terminal_score, SearchStats};

use rand::Rng;
use tracing::debug;

/// Searches `state` for the best move of `bot`, to the depth set in `config`.
///
/// `state` is edited during the search and restored before returning. The cache is shared
/// by the whole tree and survives the call; entries are only reused when they were searched
/// at least as deep as the node asking. Once the cache holds `config.cache_capacity` entries
/// it is emptied.
pub fn alpha_beta_search<R: Rng + ?Sized>(
    state: &mut ChessState,
    preceding: Option<MoveEvent>,
    bot: Color,
    config: &SearchConfig,
    cache: &mut EvalCache,
    rng: &mut R,
) -> (ScoringMove, SearchStats) {
    let mut search = AlphaBeta {
        bot,
        max_depth: config.effective_depth(),
        mobility_weight: config.mobility_weight,
        cache,
        cache_capacity: config.cache_capacity,
        rng,
        stats: SearchStats::default(),
    };
    let best = search.node(state, preceding, 0, NEG_INFINITE, INFINITE);
    (best, search.stats)
}

struct AlphaBeta<'a, R: Rng + ?Sized> {
    bot: Color,
    max_depth: u16,
    mobility_weight: Value,
    cache: &'a mut EvalCache,
    cache_capacity: usize,
    rng: &'a mut R,
    stats: SearchStats,
}

impl<'a, R: Rng + ?Sized> AlphaBeta<'a, R> {
    fn node(
        &mut self,
        state: &mut ChessState,
        preceding: Option<MoveEvent>,
        ply: u16,
        mut alpha: Value,
        mut beta: Value,
    ) -> ScoringMove {
        self.stats.nodes += 1;
        let maximizing = ply % 2 == 0;
        let to_move = if maximizing { self.bot } else { self.bot.opposite() };
        let remaining = self.max_depth - ply;

        if remaining == 0 {
            return leaf_score(state, preceding, to_move, maximizing, self.bot, self.mobility_weight);
        }

        // The root always searches, so the returned move is legal right now.
        let key = state_key(state);
        if ply > 0 {
            if let Some(entry) = self.cache.get_key(to_move, &key) {
                if entry.depth >= remaining {
                    let usable = match entry.bound {
                        NodeBound::Exact => true,
                        NodeBound::LowerBound => entry.score >= beta,
                        NodeBound::UpperBound => entry.score <= alpha,
                    };
                    if usable {
                        self.stats.cache_hits += 1;
                        return ScoringMove {
                            mov: entry.best_move,
                            score: entry.score,
                        };
                    }
                }
            }
        }

        let moves = state.all_legal_moves_with(preceding, to_move, &mut *self.rng);
        if moves.is_empty() {
            return ScoringMove::blank(terminal_score(state, to_move, maximizing));
        }

        let (alpha0, beta0) = (alpha, beta);
        let mut best = ScoringMove::blank(if maximizing { NEG_INFINITE } else { INFINITE });

        for mov in moves {
            let diff = state.apply_move(preceding, mov);
            let child = self.node(state, Some(mov), ply + 1, alpha, beta);
            state.revert_move(diff);

            if maximizing {
                if child.score > best.score {
                    best = ScoringMove::new_score(mov, child.score);
                }
                if best.score >= beta {
                    break;
                }
                alpha = alpha.max(best.score);
            } else {
                if child.score < best.score {
                    best = ScoringMove::new_score(mov, child.score);
                }
                if best.score <= alpha {
                    break;
                }
                beta = beta.min(best.score);
            }
        }

        let bound = if best.score <= alpha0 {
            NodeBound::UpperBound
        } else if best.score >= beta0 {
            NodeBound::LowerBound
        } else {
            NodeBound::Exact
        };
        self.store(
            to_move,
            key,
            Entry {
                score: best.score,
                best_move: best.mov,
                depth: remaining,
                bound,
            },
        );
        best
    }

    fn store(&mut self, to_move: Color, key: StateKey, entry: Entry) {
        if self.cache.len() >= self.cache_capacity {
            debug!(entries = self.cache.len(), "evaluation cache full, clearing");
            self.cache.clear();
        }
        self.cache.insert_key(to_move, key, entry);
    }
}

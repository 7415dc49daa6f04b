//! Contains the bots (searchers) that can play a side of the game.
//!
//! - [`AlphaBetaSearcher`]: minimax with alpha-beta pruning, memoized in an [`EvalCache`]
//!   owned by the bot. This is the searcher meant for play.
//! - [`MiniMaxSearcher`]: plain minimax, no pruning and no cache. Slow, but simple enough to
//!   check the alpha-beta scores against.
//!
//! Both evaluate leaves with [`Eval`] and score mates and stalemates the same way, so at the
//! same depth they agree on the value of the root.
//!
//! [`AlphaBetaSearcher`]: struct.AlphaBetaSearcher.html
//! [`MiniMaxSearcher`]: struct.MiniMaxSearcher.html
//! [`EvalCache`]: ../tools/cache/struct.EvalCache.html
//! [`Eval`]: ../tools/eval/struct.Eval.html

pub mod alphabeta;
pub mod minimax;

use crate::board::ChessState;
use crate::core::piece_move::{MoveEvent, ScoringMove};
use crate::core::score::*;
use crate::core::Color;
use crate::tools::cache::EvalCache;
use crate::tools::eval::Eval;
use crate::tools::{SearchConfig, Searcher};

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

/// Counters collected during one search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, leaves included.
    pub nodes: u64,
    /// Nodes answered from the cache.
    pub cache_hits: u64,
}

/// Score of a node whose side to move has no legal move: mated if in check, otherwise
/// stalemate.
pub(crate) fn terminal_score(state: &ChessState, to_move: Color, maximizing: bool) -> Value {
    if !state.in_check(to_move) {
        DRAW
    } else if maximizing {
        -MATE
    } else {
        MATE
    }
}

// Nodes at the depth limit are still checked for mate and stalemate before being evaluated.
pub(crate) fn leaf_score(
    state: &ChessState,
    preceding: Option<MoveEvent>,
    to_move: Color,
    maximizing: bool,
    bot: Color,
    mobility_weight: Value,
) -> ScoringMove {
    if !state.has_legal_move(preceding, to_move) {
        ScoringMove::blank(terminal_score(state, to_move, maximizing))
    } else {
        ScoringMove::blank(Eval::eval(state, bot, mobility_weight))
    }
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Searcher that uses an alpha-beta algorithm to search for a best move.
///
/// # Examples
///
/// ```
/// use rookery::board::ChessState;
/// use rookery::bots::AlphaBetaSearcher;
/// use rookery::core::Color;
/// use rookery::tools::{SearchConfig, Searcher};
///
/// let state = ChessState::initial();
/// let mut bot = AlphaBetaSearcher::with_config(Color::White, SearchConfig::default().depth(2));
/// let mv = bot.best_move(None, &state).unwrap();
/// assert!(state.is_legal(None, mv));
/// ```
pub struct AlphaBetaSearcher {
    color: Color,
    config: SearchConfig,
    cache: EvalCache,
    rng: StdRng,
}

impl AlphaBetaSearcher {
    /// Creates a searcher playing `color` with the default configuration.
    pub fn new(color: Color) -> Self {
        AlphaBetaSearcher::with_config(color, SearchConfig::default())
    }

    /// Creates a searcher playing `color`.
    pub fn with_config(color: Color, config: SearchConfig) -> Self {
        AlphaBetaSearcher {
            color,
            config,
            cache: EvalCache::new(),
            rng: seeded_rng(config.seed),
        }
    }

    /// The color this searcher plays.
    pub fn color(&self) -> Color {
        self.color
    }

    /// The configuration the searcher was built with.
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// The searcher's cache, kept between moves.
    pub fn cache(&self) -> &EvalCache {
        &self.cache
    }

    /// Searches `state` and returns the best move found with its score. The move is `None`
    /// when the searcher's side has no legal move.
    pub fn search(&mut self, preceding: Option<MoveEvent>, state: &ChessState) -> ScoringMove {
        let mut work = state.clone();
        let (best, stats) = alphabeta::alpha_beta_search(
            &mut work,
            preceding,
            self.color,
            &self.config,
            &mut self.cache,
            &mut self.rng,
        );
        debug!(
            searcher = self.name(),
            color = %self.color,
            depth = self.config.effective_depth(),
            best_move = ?best.mov,
            score = best.score,
            mate = is_mate_score(best.score),
            nodes = stats.nodes,
            cache_hits = stats.cache_hits,
            cache_size = self.cache.len(),
            "search finished"
        );
        best
    }
}

impl Searcher for AlphaBetaSearcher {
    fn name(&self) -> &'static str {
        "AlphaBeta Searcher"
    }

    fn best_move(&mut self, preceding: Option<MoveEvent>, state: &ChessState) -> Option<MoveEvent> {
        self.search(preceding, state).mov
    }
}

/// Searcher that uses a MiniMax algorithm to search for a best move.
pub struct MiniMaxSearcher {
    color: Color,
    config: SearchConfig,
    rng: StdRng,
}

impl MiniMaxSearcher {
    /// Creates a searcher playing `color` with the default configuration.
    pub fn new(color: Color) -> Self {
        MiniMaxSearcher::with_config(color, SearchConfig::default())
    }

    /// Creates a searcher playing `color`. The cache settings are ignored.
    pub fn with_config(color: Color, config: SearchConfig) -> Self {
        MiniMaxSearcher {
            color,
            config,
            rng: seeded_rng(config.seed),
        }
    }

    /// The color this searcher plays.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Searches `state` and returns the best move found with its score.
    pub fn search(&mut self, preceding: Option<MoveEvent>, state: &ChessState) -> ScoringMove {
        let mut work = state.clone();
        let (best, stats) = minimax::minimax(
            &mut work,
            preceding,
            self.color,
            self.config.effective_depth(),
            self.config.mobility_weight,
            &mut self.rng,
        );
        debug!(
            searcher = self.name(),
            color = %self.color,
            best_move = ?best.mov,
            score = best.score,
            nodes = stats.nodes,
            "search finished"
        );
        best
    }
}

impl Searcher for MiniMaxSearcher {
    fn name(&self) -> &'static str {
        "Simple Searcher"
    }

    fn best_move(&mut self, preceding: Option<MoveEvent>, state: &ChessState) -> Option<MoveEvent> {
        self.search(preceding, state).mov
    }
}

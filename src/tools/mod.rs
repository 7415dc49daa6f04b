//! Miscellaneous tools used for searching. Most notably this module contains the
//! [`EvalCache`], the per-bot memo of search results, and the [`Searcher`] trait for
//! building bots, alongside the [`SearchConfig`] the bots are tuned with.
//!
//! [`EvalCache`]: cache/struct.EvalCache.html
//! [`Searcher`]: trait.Searcher.html
//! [`SearchConfig`]: struct.SearchConfig.html

pub mod cache;
pub mod eval;

use crate::board::ChessState;
use crate::core::piece_move::MoveEvent;
use crate::core::score::Value;

use serde::{Deserialize, Serialize};

/// Defines an object that can play chess.
///
/// A searcher plays one color and is asked for a move whenever it is that color's turn,
/// given the move the opponent just played.
pub trait Searcher {
    /// A human readable name for the searcher.
    fn name(&self) -> &'static str;

    /// Returns the move to play in `state`, or `None` if the searcher's side has no legal
    /// move.
    fn best_move(&mut self, preceding: Option<MoveEvent>, state: &ChessState) -> Option<MoveEvent>;
}

/// Default number of plies searched.
pub const DEFAULT_DEPTH: u16 = 3;

/// Default number of entries the evaluation cache may hold before being cleared.
pub const DEFAULT_CACHE_CAPACITY: usize = 1_000_000;

/// Tuning of a searcher.
///
/// # Examples
///
/// ```
/// use rookery::tools::SearchConfig;
///
/// let config = SearchConfig::default().depth(2).seed(42);
/// assert_eq!(config.depth, 2);
/// assert_eq!(config.seed, Some(42));
/// assert_eq!(config.mobility_weight, 0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Number of plies to search. A depth of zero is treated as one.
    pub depth: u16,
    /// Number of cache entries above which the cache is emptied.
    pub cache_capacity: usize,
    /// Seed of the RNG shuffling quiet moves. `None` seeds from entropy.
    pub seed: Option<u64>,
    /// Score added per square attacked by the searcher's queens, bishops and knights, and
    /// removed per square attacked by the opponent's. Zero evaluates material only.
    pub mobility_weight: Value,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            seed: None,
            mobility_weight: 0,
        }
    }
}

impl SearchConfig {
    /// Sets the search depth, in plies.
    pub fn depth(mut self, depth: u16) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the maximum cache size.
    pub fn cache_capacity(mut self, capacity: usize) -> Self {
        self.cache_capacity = capacity;
        self
    }

    /// Fixes the RNG seed, making the searcher deterministic.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the weight of the mobility term.
    pub fn mobility_weight(mut self, weight: Value) -> Self {
        self.mobility_weight = weight;
        self
    }

    /// The depth actually searched.
    #[inline]
    pub fn effective_depth(&self) -> u16 {
        self.depth.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_from_json() {
        let config: SearchConfig = serde_json::from_str(r#"{"depth": 4}"#).unwrap();
        assert_eq!(config.depth, 4);
        assert_eq!(config.cache_capacity, DEFAULT_CACHE_CAPACITY);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn zero_depth_searches_one_ply() {
        assert_eq!(SearchConfig::default().depth(0).effective_depth(), 1);
    }
}

//! The evaluation cache: a memo of search results, keyed by the side to move and the full
//! contents of the board.
//!
//! Each color to move has its own map, so the same board with White to move and with Black
//! to move are different entries. A board is keyed by one byte per square in row-major
//! order, holding the piece (if any) and the square's touched flag. Two boards get the same
//! key exactly when every square has the same piece, color and touched flag.
//!
//! Entries remember the depth they were searched to and whether their score is exact or
//! only a bound, in the same way a transposition table does.

use crate::board::ChessState;
use crate::core::piece_move::MoveEvent;
use crate::core::score::Value;
use crate::core::*;

use std::collections::HashMap;

/// Canonical serialization of a board.
pub type StateKey = [u8; SQ_CNT];

const TOUCHED_BIT: u8 = 0b0001_0000;

/// Computes the key of a state.
pub fn state_key(state: &ChessState) -> StateKey {
    let mut key = [0u8; SQ_CNT];
    for (byte, sq) in key.iter_mut().zip(state.board.iter()) {
        *byte = sq.piece().map_or(0, Piece::code);
        if sq.is_touched() {
            *byte |= TOUCHED_BIT;
        }
    }
    key
}

/// Designates how a cached score relates to the true value of the position.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NodeBound {
    /// The score is the value of the position.
    Exact,
    /// The search failed high: the value is at least the score.
    LowerBound,
    /// The search failed low: the value is at most the score.
    UpperBound,
}

/// A cached search result.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub score: Value,
    pub best_move: Option<MoveEvent>,
    /// Plies searched below the position to get the score.
    pub depth: u16,
    pub bound: NodeBound,
}

impl Entry {
    /// Creates an exact entry.
    pub fn exact(score: Value, best_move: Option<MoveEvent>, depth: u16) -> Entry {
        Entry {
            score,
            best_move,
            depth,
            bound: NodeBound::Exact,
        }
    }
}

/// Memo of search results, owned by a single searcher.
///
/// # Examples
///
/// ```
/// use rookery::board::ChessState;
/// use rookery::core::Color;
/// use rookery::tools::cache::{Entry, EvalCache};
///
/// let state = ChessState::initial();
/// let mut cache = EvalCache::new();
/// cache.add(Color::White, &state, Entry::exact(25, None, 2));
///
/// assert_eq!(cache.get(Color::White, &state).map(|e| e.score), Some(25));
/// assert!(cache.get(Color::Black, &state).is_none());
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct EvalCache {
    maps: [HashMap<StateKey, Entry>; PLAYER_CNT],
}

impl EvalCache {
    /// Creates an empty cache.
    pub fn new() -> EvalCache {
        EvalCache::default()
    }

    /// Stores `entry` for `state` with `to_move` to move, replacing any previous entry.
    pub fn add(&mut self, to_move: Color, state: &ChessState, entry: Entry) {
        self.insert_key(to_move, state_key(state), entry);
    }

    /// Looks up the entry for `state` with `to_move` to move.
    pub fn get(&self, to_move: Color, state: &ChessState) -> Option<Entry> {
        self.get_key(to_move, &state_key(state))
    }

    /// Same as [`EvalCache::add`], with a precomputed key.
    ///
    /// [`EvalCache::add`]: struct.EvalCache.html#method.add
    #[inline]
    pub fn insert_key(&mut self, to_move: Color, key: StateKey, entry: Entry) {
        self.maps[to_move as usize].insert(key, entry);
    }

    /// Same as [`EvalCache::get`], with a precomputed key.
    ///
    /// [`EvalCache::get`]: struct.EvalCache.html#method.get
    #[inline]
    pub fn get_key(&self, to_move: Color, key: &StateKey) -> Option<Entry> {
        self.maps[to_move as usize].get(key).copied()
    }

    /// Number of entries, over both colors.
    pub fn len(&self) -> usize {
        self.maps.iter().map(HashMap::len).sum()
    }

    /// Returns if the cache holds no entry.
    pub fn is_empty(&self) -> bool {
        self.maps.iter().all(HashMap::is_empty)
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        for map in self.maps.iter_mut() {
            map.clear();
        }
    }
}

//! Contains the `MoveList` structure, a thin list of `MoveEvent`s produced by move generation.
//!
//! The order of a `MoveList` is meaningful to the search: captures come first, strongest
//! first, then the quiet moves in random order. See [`ChessState::all_legal_moves`].
//!
//! [`ChessState::all_legal_moves`]: ../../board/struct.ChessState.html#method.all_legal_moves

use super::piece_move::MoveEvent;

use std::iter::FromIterator;
use std::ops::{Deref, DerefMut};
use std::slice;
use std::vec;

/// This is the list of possible moves for a current position.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MoveList {
    inner: Vec<MoveEvent>,
}

impl MoveList {
    /// Creates an empty list with room for `cap` moves.
    pub fn with_capacity(cap: usize) -> Self {
        MoveList {
            inner: Vec::with_capacity(cap),
        }
    }

    /// Adds a `MoveEvent` to the end of the list.
    #[inline(always)]
    pub fn push(&mut self, mv: MoveEvent) {
        self.inner.push(mv);
    }

    /// Returns if the list contains the given move.
    #[inline]
    pub fn contains(&self, mv: &MoveEvent) -> bool {
        self.inner.contains(mv)
    }
}

impl From<Vec<MoveEvent>> for MoveList {
    fn from(inner: Vec<MoveEvent>) -> Self {
        MoveList { inner }
    }
}

impl From<MoveList> for Vec<MoveEvent> {
    fn from(list: MoveList) -> Self {
        list.inner
    }
}

impl Deref for MoveList {
    type Target = [MoveEvent];

    #[inline]
    fn deref(&self) -> &[MoveEvent] {
        &self.inner
    }
}

impl DerefMut for MoveList {
    #[inline]
    fn deref_mut(&mut self) -> &mut [MoveEvent] {
        &mut self.inner
    }
}

impl FromIterator<MoveEvent> for MoveList {
    fn from_iter<T: IntoIterator<Item = MoveEvent>>(iter: T) -> Self {
        MoveList {
            inner: iter.into_iter().collect(),
        }
    }
}

impl Extend<MoveEvent> for MoveList {
    fn extend<T: IntoIterator<Item = MoveEvent>>(&mut self, iter: T) {
        self.inner.extend(iter)
    }
}

impl IntoIterator for MoveList {
    type Item = MoveEvent;
    type IntoIter = vec::IntoIter<MoveEvent>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a MoveEvent;
    type IntoIter = slice::Iter<'a, MoveEvent>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}

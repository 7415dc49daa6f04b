//! Primitives for determining the value / score of a position.
//!
//! A `Value` is always from the perspective of the searching side: positive is good for
//! the bot, negative is good for its opponent.

/// Type for `i32` to determine the `Value` of an evaluation.
pub type Value = i32;

pub const ZERO: Value = 0;
pub const DRAW: Value = 0;

/// Sentinel for a checkmate. Larger than any reachable material balance.
pub const MATE: Value = 100_000;
pub const INFINITE: Value = 100_001;
pub const NEG_INFINITE: Value = -100_001;

pub const PAWN: Value = 100;
pub const KNIGHT: Value = 300;
pub const BISHOP: Value = 300;
pub const ROOK: Value = 500;
pub const QUEEN: Value = 900;

/// Returns if a score signals a forced mate for either side.
#[inline]
pub fn is_mate_score(score: Value) -> bool {
    score >= MATE || score <= -MATE
}

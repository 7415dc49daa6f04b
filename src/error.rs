//! Crate-wide error type.
//!
//! Each module reports its own error enum. [`Error`] wraps all of them for callers that
//! would rather handle a single type.
//!
//! [`Error`]: enum.Error.html

use crate::board::apply::MoveError;
use crate::board::attacks::GeometryError;
use crate::board::BoardError;
use crate::core::position::PositionError;

use thiserror::Error;

/// Errors that can occur anywhere in the crate
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Position off the board
    #[error(transparent)]
    Position(#[from] PositionError),

    /// Misuse of the line geometry helpers
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Rejected move
    #[error(transparent)]
    Move(#[from] MoveError),

    /// Malformed board records
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, Error>;

//! A small chess rules engine, with minimax bots to play against.
//!
//! This package is separated into four parts:
//!
//! - [`core`]: positions, colors, pieces and moves,
//! - [`board`]: the [`ChessState`] and every rule of chess, from attack geometry to legal move
//!   generation,
//! - [`tools`]: the [`Searcher`] trait, evaluation and the evaluation cache,
//! - [`bots`]: the searchers themselves.
//!
//! A `ChessState` holds the board and nothing else. It does not know whose turn it is: the
//! caller tracks that, and passes the move that was just played wherever en passant could
//! matter.
//!
//! # Safety
//!
//! Methods that take a position without checking it, or that require a legal move, `panic`
//! when misused. Methods with the ability to panic are documented as such; checked variants
//! return a [`Result`].
//!
//! # Examples
//!
//! You can create a [`ChessState`] with the starting position like so:
//!
//! ```
//! use rookery::ChessState;
//! let state = ChessState::initial();
//! ```
//!
//! Generating a list of moves (contained inside a [`MoveList`]) and playing one:
//!
//! ```
//! use rookery::{ChessState, Color};
//!
//! let state = ChessState::initial();
//! let list = state.all_legal_moves(None, Color::White);
//! let next = state.make_move(None, list[0]);
//! assert!(!next.in_check(Color::Black));
//! ```
//!
//! Applying and undoing moves in place:
//!
//! ```
//! use rookery::{ChessState, Color};
//!
//! let mut state = ChessState::initial();
//! let before = state.clone();
//! for mov in state.all_legal_moves(None, Color::White) {
//!     let diff = state.apply_move(None, mov);
//!     state.revert_move(diff);
//! }
//! assert_eq!(state, before);
//! ```
//!
//! Asking a bot for a move:
//!
//! ```
//! use rookery::{AlphaBetaSearcher, ChessState, Color, SearchConfig, Searcher};
//!
//! let state = ChessState::initial();
//! let mut bot = AlphaBetaSearcher::with_config(Color::White, SearchConfig::default().depth(1));
//! let mov = bot.best_move(None, &state);
//! assert!(mov.is_some());
//! ```
//!
//! [`core`]: core/index.html
//! [`board`]: board/index.html
//! [`tools`]: tools/index.html
//! [`bots`]: bots/index.html
//! [`ChessState`]: board/struct.ChessState.html
//! [`Searcher`]: tools/trait.Searcher.html
//! [`MoveList`]: core/move_list/struct.MoveList.html
//! [`Result`]: error/type.Result.html

#[macro_use]
extern crate lazy_static;

pub mod board;
pub mod bots;
pub mod core;
pub mod error;
pub mod tools;

#[doc(no_inline)]
pub use crate::board::ChessState;
#[doc(no_inline)]
pub use crate::bots::{AlphaBetaSearcher, MiniMaxSearcher};
#[doc(no_inline)]
pub use crate::core::move_list::MoveList;
#[doc(no_inline)]
pub use crate::core::piece_move::MoveEvent;
#[doc(no_inline)]
pub use crate::core::position::Position;
#[doc(no_inline)]
pub use crate::core::{Color, Piece, PieceKind};
#[doc(no_inline)]
pub use crate::error::{Error, Result};
#[doc(no_inline)]
pub use crate::tools::{SearchConfig, Searcher};

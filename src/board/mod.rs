//! This module contains [`ChessState`], the object representing the current state of a
//! chessboard, and the [`Board`] grid of [`Square`]s it owns.
//!
//! All the rules of chess live here, split by concern:
//!
//! - [`attacks`]: the squares each kind of piece threatens,
//! - [`classify`]: what kind of move an attempted move is,
//! - [`legality`]: whether an attempted move may be played,
//! - [`apply`]: playing (and undoing) a legal move,
//! - [`queries`]: check, checkmate, stalemate and material,
//! - [`movegen`]: enumeration of all legal moves.
//!
//! A `ChessState` does not know whose turn it is, nor the moves that led to it. Callers pass the
//! move that immediately preceded the state wherever en passant may matter.
//!
//! [`ChessState`]: struct.ChessState.html
//! [`Board`]: struct.Board.html
//! [`Square`]: square/struct.Square.html
//! [`attacks`]: attacks/index.html
//! [`classify`]: classify/index.html
//! [`legality`]: legality/index.html
//! [`apply`]: apply/index.html
//! [`queries`]: queries/index.html
//! [`movegen`]: movegen/index.html

pub mod apply;
pub mod attacks;
pub mod classify;
pub mod legality;
pub mod movegen;
pub mod queries;
pub mod square;

use crate::core::position::{Position, PositionError, ALL_POSITIONS};
use crate::core::*;

use self::square::Square;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::convert::TryFrom;
use std::fmt;
use std::ops::Index;

/// Represents possible errors encountered while building a `Board` from plain records.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("invalid number of rows: {rows}, expected 8")]
    IncorrectRowAmount { rows: usize },
    #[error("invalid number of squares in row {row}: {len}, expected 8")]
    IncorrectRowLength { row: usize, len: usize },
    #[error("square at grid index [{row}, {col}] claims position {found}")]
    MisplacedSquare { row: usize, col: usize, found: Position },
}

/// An 8x8 grid of squares, indexed `[row][col]`.
///
/// Every square's position matches its grid index. The grid is built once and squares are
/// never moved around; only their contents change.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Square>>", into = "Vec<Vec<Square>>")]
pub struct Board {
    squares: [[Square; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board with every square empty and untouched.
    pub fn empty() -> Board {
        let mut squares = [[Square::new(Position::default()); BOARD_SIZE]; BOARD_SIZE];
        for pos in ALL_POSITIONS.iter() {
            squares[pos.row as usize][pos.col as usize] = Square::new(*pos);
        }
        Board { squares }
    }

    /// Returns the square at a position, failing if the position is off the board.
    pub fn get(&self, pos: Position) -> Result<&Square, PositionError> {
        let pos = pos.validate()?;
        Ok(&self.squares[pos.row as usize][pos.col as usize])
    }

    /// Returns one row of the board, from column 0 to 7.
    pub fn row(&self, row: usize) -> &[Square; BOARD_SIZE] {
        &self.squares[row]
    }

    /// Iterates over every square in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &Square> {
        self.squares.iter().flat_map(|row| row.iter())
    }

    #[inline(always)]
    pub(crate) fn square_mut(&mut self, pos: Position) -> &mut Square {
        assert!(pos.is_okay(), "position {:?} is out of bounds", pos);
        &mut self.squares[pos.row as usize][pos.col as usize]
    }
}

impl Index<Position> for Board {
    type Output = Square;

    /// # Panics
    ///
    /// Panics if the position is off the board. See [`Board::get`] for a checked version.
    ///
    /// [`Board::get`]: struct.Board.html#method.get
    #[inline(always)]
    fn index(&self, pos: Position) -> &Square {
        assert!(pos.is_okay(), "position {:?} is out of bounds", pos);
        &self.squares[pos.row as usize][pos.col as usize]
    }
}

impl TryFrom<Vec<Vec<Square>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Square>>) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::IncorrectRowAmount { rows: rows.len() });
        }
        let mut board = Board::empty();
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(BoardError::IncorrectRowLength {
                    row: r,
                    len: row.len(),
                });
            }
            for (c, square) in row.into_iter().enumerate() {
                if square.position() != Position::new(r as i8, c as i8) {
                    return Err(BoardError::MisplacedSquare {
                        row: r,
                        col: c,
                        found: square.position(),
                    });
                }
                board.squares[r][c] = square;
            }
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Vec<Square>> {
    fn from(board: Board) -> Self {
        board.squares.iter().map(|row| row.to_vec()).collect()
    }
}

/// The complete state of a game of chess, as far as the rules are concerned.
///
/// From a caller's perspective a `ChessState` is a value: [`ChessState::make_move`] returns a
/// new state. The search instead mutates a working copy with [`ChessState::apply_move`] and
/// undoes it with [`ChessState::revert_move`].
///
/// # Examples
///
/// ```
/// use rookery::board::ChessState;
/// use rookery::core::Color;
///
/// let state = ChessState::initial();
/// let moves = state.all_legal_moves(None, Color::White);
/// assert_eq!(moves.len(), 20);
///
/// let next = state.make_move(None, moves[0]);
/// assert_ne!(next, state);
/// ```
///
/// [`ChessState::make_move`]: struct.ChessState.html#method.make_move
/// [`ChessState::apply_move`]: struct.ChessState.html#method.apply_move
/// [`ChessState::revert_move`]: struct.ChessState.html#method.revert_move
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct ChessState {
    pub board: Board,
}

const BACK_ROW: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl ChessState {
    /// Creates a state with an empty board.
    pub fn empty() -> ChessState {
        ChessState {
            board: Board::empty(),
        }
    }

    /// Constructs the standard starting position. No square is touched.
    ///
    /// # Examples
    ///
    /// ```
    /// use rookery::board::ChessState;
    ///
    /// let state = ChessState::initial();
    /// assert_eq!(state.count_pieces(|_| true), 32);
    /// ```
    pub fn initial() -> ChessState {
        let mut state = ChessState::empty();
        for color in ALL_COLORS.iter() {
            let home = color.home_row();
            let pawns = color.pawn_start_row();
            for (col, kind) in BACK_ROW.iter().enumerate() {
                state.set_piece(Position::new(home, col as i8), Some(Piece::new(*color, *kind)));
                state.set_piece(
                    Position::new(pawns, col as i8),
                    Some(Piece::new(*color, PieceKind::Pawn)),
                );
            }
        }
        state
    }

    /// Places (or removes) a piece without playing a move. Used to set up positions; the
    /// square's `touched` flag is left alone.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    pub fn set_piece(&mut self, pos: Position, piece: Option<Piece>) {
        self.board.square_mut(pos).set_piece(piece);
    }

    /// Marks a square as touched. Used to set up positions where castling rights are gone.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    pub fn touch(&mut self, pos: Position) {
        self.board.square_mut(pos).touch();
    }

    /// Returns the piece at a position, if any.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    #[inline(always)]
    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board[pos].piece()
    }

    /// Returns the square at a position.
    ///
    /// # Panics
    ///
    /// Panics if the position is off the board.
    #[inline(always)]
    pub fn square(&self, pos: Position) -> &Square {
        &self.board[pos]
    }

    /// Returns a prettified String of the current board, for quick display purposes.
    ///
    /// Row 0 is printed first. Empty squares are `-`, touched empty squares are `.`.
    pub fn pretty_string(&self) -> String {
        let mut s = String::with_capacity(SQ_CNT * 2 + BOARD_SIZE * 4);
        for row in 0..BOARD_SIZE {
            s.push_str(&format!("{} ", BOARD_SIZE - row));
            for square in self.board.row(row).iter() {
                let c = match square.piece() {
                    Some(piece) => piece.character(),
                    None if square.is_touched() => '.',
                    None => '-',
                };
                s.push(c);
                s.push(' ');
            }
            s.push('\n');
        }
        s.push_str("  a b c d e f g h\n");
        s
    }
}

impl Default for ChessState {
    fn default() -> Self {
        ChessState::initial()
    }
}

impl fmt::Display for ChessState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty_string())
    }
}

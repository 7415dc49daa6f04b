//! Attack geometry: the positions each kind of piece threatens from a given position.
//!
//! Sliding pieces (rooks, bishops and queens) are computed from the full row, column or
//! diagonal through the piece, trimmed at the nearest occupied position in each direction.
//! The blocker itself is kept, as it may be captured. Knights and kings use fixed offsets.
//!
//! Pawns only attack their two forward diagonals. Forward pushes are not attacks: a pawn
//! does not threaten the square in front of it.
//!
//! The lines and offset targets for every position are computed once, on first use.

use crate::core::position::{Position, ALL_POSITIONS};
use crate::core::*;

use super::Board;

use thiserror::Error;

/// Errors from misuse of the geometry helpers.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GeometryError {
    #[error("position {pos:?} is not part of the given line")]
    PositionNotInLine { pos: Position },
}

const ROW_LINE: usize = 0;
const COL_LINE: usize = 1;
const POS_DIAG_LINE: usize = 2;
const NEG_DIAG_LINE: usize = 3;

const KNIGHT_OFFSETS: [Position; 8] = [
    Position::new(-2, -1),
    Position::new(-2, 1),
    Position::new(2, -1),
    Position::new(2, 1),
    Position::new(1, 2),
    Position::new(1, -2),
    Position::new(-1, 2),
    Position::new(-1, -2),
];

const KING_OFFSETS: [Position; 8] = [
    Position::new(-1, -1),
    Position::new(-1, 0),
    Position::new(-1, 1),
    Position::new(0, 1),
    Position::new(1, 1),
    Position::new(1, 0),
    Position::new(1, -1),
    Position::new(0, -1),
];

lazy_static! {
    /// For every position: its row, column, positive diagonal and negative diagonal, each in
    /// row-major order.
    static ref LINES: Vec<[Vec<Position>; 4]> = ALL_POSITIONS
        .iter()
        .map(|p| {
            let select = |f: &dyn Fn(&Position) -> bool| -> Vec<Position> {
                ALL_POSITIONS.iter().filter(|q| f(*q)).copied().collect()
            };
            [
                select(&|q| q.row == p.row),
                select(&|q| q.col == p.col),
                select(&|q| q.row + q.col == p.row + p.col),
                select(&|q| q.row - q.col == p.row - p.col),
            ]
        })
        .collect();

    static ref KNIGHT_TARGETS: Vec<Vec<Position>> = offset_targets(&KNIGHT_OFFSETS);
    static ref KING_TARGETS: Vec<Vec<Position>> = offset_targets(&KING_OFFSETS);
}

fn offset_targets(offsets: &[Position]) -> Vec<Vec<Position>> {
    ALL_POSITIONS
        .iter()
        .map(|p| {
            offsets
                .iter()
                .map(|o| *p + *o)
                .filter(|t| t.is_okay())
                .collect()
        })
        .collect()
}

/// The row containing `pos`, from column 0 to 7.
#[inline]
pub fn same_row(pos: Position) -> &'static [Position] {
    &LINES[pos.index()][ROW_LINE]
}

/// The column containing `pos`, from row 0 to 7.
#[inline]
pub fn same_column(pos: Position) -> &'static [Position] {
    &LINES[pos.index()][COL_LINE]
}

/// The diagonal of positions with the same `row + col` as `pos`, by increasing row.
#[inline]
pub fn same_positive_diagonal(pos: Position) -> &'static [Position] {
    &LINES[pos.index()][POS_DIAG_LINE]
}

/// The diagonal of positions with the same `row - col` as `pos`, by increasing row.
#[inline]
pub fn same_negative_diagonal(pos: Position) -> &'static [Position] {
    &LINES[pos.index()][NEG_DIAG_LINE]
}

/// The (up to two) positions diagonally in front of `pos`, from `color`'s point of view.
pub fn same_unit_diagonals(pos: Position, color: Color) -> Vec<Position> {
    let push = color.pawn_push();
    [Position::new(push, -1), Position::new(push, 1)]
        .iter()
        .map(|o| pos + *o)
        .filter(|t| t.is_okay())
        .collect()
}

/// The position one row in front of `pos` from `color`'s point of view, if on the board.
#[inline]
pub fn adjacent(pos: Position, color: Color) -> Option<Position> {
    let adj = pos + Position::new(color.pawn_push(), 0);
    if adj.is_okay() {
        Some(adj)
    } else {
        None
    }
}

/// Trims a line through `pos` to the part a slider at `pos` can reach.
///
/// `line` must be a row, column or diagonal containing `pos`, in order. The result is the
/// contiguous run of `line` from the nearest occupied position before `pos` (or the start of
/// the line) to the nearest occupied position after `pos` (or the end of the line), both
/// inclusive. `pos` itself is part of the returned run.
///
/// # Errors
///
/// Returns `GeometryError::PositionNotInLine` if `pos` is not in `line`.
///
/// # Examples
///
/// ```
/// use rookery::board::ChessState;
/// use rookery::board::attacks::{filter_blocked_squares, same_row};
/// use rookery::core::position::Position;
/// use rookery::core::{Color, Piece, PieceKind};
///
/// let mut state = ChessState::empty();
/// let rook = Position::new(7, 1);
/// state.set_piece(rook, Some(Piece::new(Color::White, PieceKind::Rook)));
/// state.set_piece(Position::new(7, 6), Some(Piece::new(Color::Black, PieceKind::Knight)));
///
/// let span = filter_blocked_squares(&state.board, rook, same_row(rook)).unwrap();
/// assert_eq!(span.first(), Some(&Position::new(7, 0)));
/// assert_eq!(span.last(), Some(&Position::new(7, 6)));
/// ```
pub fn filter_blocked_squares<'a>(
    board: &Board,
    pos: Position,
    line: &'a [Position],
) -> Result<&'a [Position], GeometryError> {
    let index = line
        .iter()
        .position(|p| *p == pos)
        .ok_or(GeometryError::PositionNotInLine { pos })?;
    Ok(blocked_span(board, index, line))
}

fn blocked_span<'a>(board: &Board, index: usize, line: &'a [Position]) -> &'a [Position] {
    let occupied = |p: &Position| !board[*p].is_empty();
    let left = line[..index].iter().rposition(occupied).unwrap_or(0);
    let right = line[index + 1..]
        .iter()
        .position(occupied)
        .map(|i| index + 1 + i)
        .unwrap_or(line.len() - 1);
    &line[left..=right]
}

fn slide(board: &Board, pos: Position, lines: &[&'static [Position]]) -> Vec<Position> {
    let mut targets = Vec::with_capacity(14);
    for line in lines {
        if let Some(index) = line.iter().position(|p| *p == pos) {
            targets.extend(blocked_span(board, index, line).iter().filter(|p| **p != pos));
        }
    }
    targets
}

/// Positions a rook at `pos` attacks.
pub fn rook_attacked_squares(board: &Board, pos: Position) -> Vec<Position> {
    slide(board, pos, &[same_row(pos), same_column(pos)])
}

/// Positions a bishop at `pos` attacks.
pub fn bishop_attacked_squares(board: &Board, pos: Position) -> Vec<Position> {
    slide(
        board,
        pos,
        &[same_positive_diagonal(pos), same_negative_diagonal(pos)],
    )
}

/// Positions a queen at `pos` attacks: the union of rook and bishop geometry.
pub fn queen_attacked_squares(board: &Board, pos: Position) -> Vec<Position> {
    slide(
        board,
        pos,
        &[
            same_row(pos),
            same_column(pos),
            same_positive_diagonal(pos),
            same_negative_diagonal(pos),
        ],
    )
}

/// Positions a knight at `pos` attacks. Occupancy never matters.
#[inline]
pub fn knight_attacked_squares(pos: Position) -> &'static [Position] {
    &KNIGHT_TARGETS[pos.index()]
}

/// Positions a king at `pos` attacks. Castling is not an attack.
#[inline]
pub fn king_attacked_squares(pos: Position) -> &'static [Position] {
    &KING_TARGETS[pos.index()]
}

/// Positions a pawn of `color` at `pos` attacks.
#[inline]
pub fn pawn_attacked_squares(pos: Position, color: Color) -> Vec<Position> {
    same_unit_diagonals(pos, color)
}

/// Returns the positions `piece`, standing at `pos`, attacks on `board`.
pub fn attacked_squares(board: &Board, piece: Piece, pos: Position) -> Vec<Position> {
    match piece.kind {
        PieceKind::Rook => rook_attacked_squares(board, pos),
        PieceKind::Bishop => bishop_attacked_squares(board, pos),
        PieceKind::Queen => queen_attacked_squares(board, pos),
        PieceKind::Pawn => pawn_attacked_squares(pos, piece.color),
        PieceKind::King => king_attacked_squares(pos).to_vec(),
        PieceKind::Knight => knight_attacked_squares(pos).to_vec(),
    }
}

/// Returns if `piece`, standing at `from`, attacks `target`.
///
/// Equivalent to `attacked_squares(board, piece, from).contains(&target)`, without building
/// the list.
pub fn attacks(board: &Board, piece: Piece, from: Position, target: Position) -> bool {
    if from == target {
        return false;
    }
    let delta = target - from;
    let (dr, dc) = (delta.row.abs(), delta.col.abs());
    match piece.kind {
        PieceKind::Pawn => delta.row == piece.color.pawn_push() && dc == 1,
        PieceKind::Knight => (dr == 1 && dc == 2) || (dr == 2 && dc == 1),
        PieceKind::King => dr <= 1 && dc <= 1,
        PieceKind::Rook => (dr == 0 || dc == 0) && clear_path(board, from, target),
        PieceKind::Bishop => dr == dc && clear_path(board, from, target),
        PieceKind::Queen => (dr == 0 || dc == 0 || dr == dc) && clear_path(board, from, target),
    }
}

// Assumes `from` and `target` share a line.
fn clear_path(board: &Board, from: Position, target: Position) -> bool {
    let step = (target - from).signum();
    let mut p = from + step;
    while p != target {
        if !board[p].is_empty() {
            return false;
        }
        p = p + step;
    }
    true
}

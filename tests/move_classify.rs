extern crate rookery;

use rookery::board::ChessState;
use rookery::core::piece_move::{MoveEvent, MoveType};
use rookery::core::position::Position;
use rookery::core::*;

fn mv(from: (i8, i8), to: (i8, i8)) -> MoveEvent {
    MoveEvent::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
}

fn with(pieces: &[((i8, i8), Color, PieceKind)]) -> ChessState {
    let mut state = ChessState::empty();
    for (at, color, kind) in pieces.iter() {
        state.set_piece(Position::new(at.0, at.1), Some(Piece::new(*color, *kind)));
    }
    state
}

#[test]
fn non_pawn_move_is_normal() {
    let state = with(&[((4, 3), Color::Black, PieceKind::Bishop)]);
    assert_eq!(state.classify(None, mv((4, 3), (0, 7))), MoveType::Normal);
}

#[test]
fn single_forward_both_colors() {
    let white = with(&[((3, 7), Color::White, PieceKind::Pawn)]);
    assert_eq!(white.classify(None, mv((3, 7), (2, 7))), MoveType::PawnSingleForward);
    let black = with(&[((3, 7), Color::Black, PieceKind::Pawn)]);
    assert_eq!(black.classify(None, mv((3, 7), (4, 7))), MoveType::PawnSingleForward);
}

#[test]
fn double_forward_both_colors() {
    let white = with(&[((6, 7), Color::White, PieceKind::Pawn)]);
    assert_eq!(white.classify(None, mv((6, 7), (4, 7))), MoveType::PawnDoubleForward);
    // Classification ignores the starting row; legality does not.
    let black = with(&[((2, 3), Color::Black, PieceKind::Pawn)]);
    assert_eq!(black.classify(None, mv((2, 3), (4, 3))), MoveType::PawnDoubleForward);
    assert!(!black.is_legal(None, mv((2, 3), (4, 3))));
}

#[test]
fn odd_pawn_moves_are_normal() {
    let black = with(&[((3, 7), Color::Black, PieceKind::Pawn)]);
    assert_eq!(black.classify(None, mv((3, 7), (2, 7))), MoveType::Normal);
    let white = with(&[((3, 7), Color::White, PieceKind::Pawn)]);
    assert_eq!(white.classify(None, mv((3, 7), (3, 6))), MoveType::Normal);
    let black = with(&[((4, 3), Color::Black, PieceKind::Pawn)]);
    assert_eq!(black.classify(None, mv((4, 3), (3, 2))), MoveType::Normal);
}

#[test]
fn normal_captures() {
    let state = with(&[((2, 5), Color::White, PieceKind::Pawn)]);
    assert_eq!(state.classify(None, mv((2, 5), (1, 6))), MoveType::PawnNormalCapture);

    let state = with(&[
        ((1, 1), Color::White, PieceKind::Pawn),
        ((0, 0), Color::Black, PieceKind::Bishop),
    ]);
    assert_eq!(state.classify(None, mv((1, 1), (0, 0))), MoveType::PawnNormalCapture);

    let state = with(&[((4, 3), Color::Black, PieceKind::Pawn)]);
    assert_eq!(state.classify(None, mv((4, 3), (5, 4))), MoveType::PawnNormalCapture);
}

#[test]
fn en_passant_white() {
    let state = with(&[
        ((3, 6), Color::Black, PieceKind::Pawn),
        ((3, 7), Color::White, PieceKind::Pawn),
    ]);
    assert_eq!(
        state.classify(Some(mv((1, 6), (3, 6))), mv((3, 7), (2, 6))),
        MoveType::PawnPassantCapture
    );

    let state = with(&[
        ((3, 2), Color::Black, PieceKind::Pawn),
        ((3, 1), Color::White, PieceKind::Pawn),
    ]);
    assert_eq!(
        state.classify(Some(mv((1, 2), (3, 2))), mv((3, 1), (2, 2))),
        MoveType::PawnPassantCapture
    );
}

#[test]
fn en_passant_black() {
    let state = with(&[
        ((4, 4), Color::White, PieceKind::Pawn),
        ((4, 5), Color::Black, PieceKind::Pawn),
    ]);
    assert_eq!(
        state.classify(Some(mv((6, 4), (4, 4))), mv((4, 5), (5, 4))),
        MoveType::PawnPassantCapture
    );

    let state = with(&[
        ((4, 2), Color::White, PieceKind::Pawn),
        ((4, 1), Color::Black, PieceKind::Pawn),
    ]);
    assert_eq!(
        state.classify(Some(mv((6, 2), (4, 2))), mv((4, 1), (5, 2))),
        MoveType::PawnPassantCapture
    );
}

#[test]
fn en_passant_needs_double_push_before() {
    let state = with(&[
        ((1, 6), Color::Black, PieceKind::Pawn),
        ((3, 7), Color::White, PieceKind::Pawn),
        ((1, 7), Color::Black, PieceKind::King),
    ]);
    assert_eq!(
        state.classify(Some(mv((0, 7), (1, 7))), mv((3, 7), (2, 6))),
        MoveType::PawnNormalCapture
    );
}

#[test]
fn en_passant_only_behind_the_pushed_pawn() {
    let state = with(&[
        ((3, 6), Color::Black, PieceKind::Pawn),
        ((3, 5), Color::White, PieceKind::Pawn),
    ]);
    // Capturing towards the other side of the pushed pawn.
    assert_eq!(
        state.classify(Some(mv((1, 6), (3, 6))), mv((3, 5), (2, 4))),
        MoveType::PawnNormalCapture
    );
}

#[test]
fn promotion_and_castle() {
    let state = with(&[
        ((6, 3), Color::Black, PieceKind::Pawn),
        ((7, 4), Color::White, PieceKind::King),
    ]);
    assert_eq!(state.classify(None, mv((6, 3), (7, 3))), MoveType::PawnPromote);
    assert_eq!(state.classify(None, mv((7, 4), (7, 2))), MoveType::Castle);
    assert_eq!(state.classify(None, mv((7, 4), (7, 3))), MoveType::Normal);
}

#[test]
fn classification_is_consistent_after_move() {
    let state = ChessState::initial();
    let push = mv((6, 2), (4, 2));
    assert_eq!(state.classify(None, push), MoveType::PawnDoubleForward);
    assert!(state.is_legal(None, push));
    let next = state.make_move(None, push);
    assert!(next.square(push.end_pos).is_touched());
    assert_eq!((push.end_pos - push.start_pos).row.abs(), 2);
    // The pushed pawn cannot double push again.
    let again = mv((4, 2), (2, 2));
    assert_eq!(next.classify(Some(push), again), MoveType::PawnDoubleForward);
    assert!(!next.is_legal(Some(push), again));
}

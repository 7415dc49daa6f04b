extern crate rand;
extern crate rookery;

use rookery::board::apply::MoveError;
use rookery::board::ChessState;
use rookery::core::piece_move::{MoveEvent, MoveType};
use rookery::core::position::Position;
use rookery::core::*;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn mv(from: (i8, i8), to: (i8, i8)) -> MoveEvent {
    MoveEvent::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
}

#[test]
fn random_moves() {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    for _trial in 0..4 {
        let mut state = ChessState::initial();
        let mut preceding = None;
        let mut color = Color::White;
        let mut i = 0;
        while i < 60 {
            let moves = state.all_legal_moves_with(preceding, color, &mut rng);
            if moves.is_empty() {
                break;
            }
            let chosen = moves[rng.gen_range(0..moves.len())];
            let expected = state.make_move(preceding, chosen);
            let diff = state.apply_move(preceding, chosen);
            assert_eq!(state, expected);
            assert!(diff.len() >= 2 && diff.len() <= 4);

            preceding = Some(chosen);
            color = color.opposite();
            i += 1;
        }
    }
}

#[test]
fn apply_revert_restores_exactly() {
    let mut rng = StdRng::seed_from_u64(17);
    let mut state = ChessState::initial();
    let mut preceding = None;
    let mut color = Color::White;
    for _ in 0..40 {
        let moves = state.all_legal_moves_with(preceding, color, &mut rng);
        if moves.is_empty() {
            break;
        }
        let before = state.clone();
        for candidate in moves.iter() {
            let diff = state.apply_move(preceding, *candidate);
            state.revert_move(diff);
            assert_eq!(state, before, "revert of {} did not restore the state", candidate);
        }
        let chosen = moves[rng.gen_range(0..moves.len())];
        state.apply_move(preceding, chosen);
        preceding = Some(chosen);
        color = color.opposite();
    }
}

#[test]
fn basic_move_apply() {
    let state = ChessState::initial();
    let e4 = mv((6, 4), (4, 4));
    let d5 = mv((1, 3), (3, 3));
    let exd5 = mv((4, 4), (3, 3));
    let state = state.try_make_move(None, e4).unwrap();
    let state = state.try_make_move(Some(e4), d5).unwrap();
    assert_eq!(state.classify(Some(d5), exd5), MoveType::PawnNormalCapture);
    let state = state.try_make_move(Some(d5), exd5).unwrap();
    assert_eq!(state.count_pieces(|p| p == Piece::new(Color::Black, PieceKind::Pawn)), 7);
    assert_eq!(state.count_pieces(|_| true), 31);
}

#[test]
fn en_passant_removes_pushed_pawn() {
    let mut state = ChessState::empty();
    state.set_piece(Position::new(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
    state.set_piece(Position::new(0, 4), Some(Piece::new(Color::Black, PieceKind::King)));
    state.set_piece(Position::new(1, 6), Some(Piece::new(Color::Black, PieceKind::Pawn)));
    state.set_piece(Position::new(3, 7), Some(Piece::new(Color::White, PieceKind::Pawn)));

    let push = mv((1, 6), (3, 6));
    assert!(state.is_legal(None, push));
    let state = state.make_move(None, push);

    let capture = mv((3, 7), (2, 6));
    assert_eq!(state.classify(Some(push), capture), MoveType::PawnPassantCapture);
    assert!(state.is_legal(Some(push), capture));

    let mut after = state.make_move(Some(push), capture);
    assert!(after.square(Position::new(3, 6)).is_empty());
    assert_eq!(
        after.piece_at(Position::new(2, 6)),
        Some(Piece::new(Color::White, PieceKind::Pawn))
    );
    assert!(!after.contains_piece(Piece::new(Color::Black, PieceKind::Pawn)));

    // The same capture one move later is no longer en passant.
    let mut late = state.clone();
    late.set_piece(Position::new(0, 4), None);
    late.set_piece(Position::new(0, 3), Some(Piece::new(Color::Black, PieceKind::King)));
    let wait = mv((0, 4), (0, 3));
    assert!(!late.is_legal(Some(wait), capture));

    let mut diffed = state.clone();
    let diff = diffed.apply_move(Some(push), capture);
    assert_eq!(diff.len(), 3);
    assert_eq!(diffed, after);
    diffed.revert_move(diff);
    assert_eq!(diffed, state);
    after.revert_move(diff);
    assert_eq!(after, state);
}

#[test]
fn castle_moves_rook() {
    let mut state = ChessState::initial();
    for col in [5, 6].iter() {
        state.set_piece(Position::new(7, *col), None);
    }
    let castle = mv((7, 4), (7, 6));
    assert!(state.is_legal(None, castle));
    let after = state.make_move(None, castle);
    assert_eq!(
        after.piece_at(Position::new(7, 6)),
        Some(Piece::new(Color::White, PieceKind::King))
    );
    assert_eq!(
        after.piece_at(Position::new(7, 5)),
        Some(Piece::new(Color::White, PieceKind::Rook))
    );
    assert!(after.square(Position::new(7, 7)).is_empty());
    assert!(after.square(Position::new(7, 7)).is_touched());
    // Queen side is still blocked.
    assert!(!state.is_legal(None, mv((7, 4), (7, 2))));
}

#[test]
fn promotion_to_queen() {
    let mut state = ChessState::empty();
    state.set_piece(Position::new(7, 4), Some(Piece::new(Color::White, PieceKind::King)));
    state.set_piece(Position::new(1, 0), Some(Piece::new(Color::White, PieceKind::Pawn)));
    let promote = mv((1, 0), (0, 0));
    assert_eq!(state.classify(None, promote), MoveType::PawnPromote);
    let after = state.try_make_move(None, promote).unwrap();
    assert_eq!(
        after.piece_at(Position::new(0, 0)),
        Some(Piece::new(Color::White, PieceKind::Queen))
    );
    assert!(state.is_irreversible(&after, promote));
}

#[test]
fn checked_move_errors() {
    let state = ChessState::initial();
    let empty = mv((3, 3), (2, 3));
    assert_eq!(state.try_make_move(None, empty), Err(MoveError::NoPiece { mv: empty }));
    let blocked = mv((7, 2), (5, 0));
    assert_eq!(state.try_make_move(None, blocked), Err(MoveError::Illegal { mv: blocked }));
    assert_eq!(
        MoveError::Illegal { mv: blocked }.to_string(),
        "move c1a3 is not legal in this position"
    );
}

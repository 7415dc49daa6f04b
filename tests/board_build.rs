extern crate rookery;
extern crate serde_json;

use rookery::board::square::Square;
use rookery::board::{Board, BoardError, ChessState};
use rookery::core::piece_move::MoveEvent;
use rookery::core::position::{Position, ALL_POSITIONS};
use rookery::core::*;

use std::convert::TryFrom;

fn mv(from: (i8, i8), to: (i8, i8)) -> MoveEvent {
    MoveEvent::new(Position::new(from.0, from.1), Position::new(to.0, to.1))
}

#[test]
fn test_init_counts() {
    let state = ChessState::initial();
    for color in ALL_COLORS.iter() {
        let count = |kind: PieceKind| state.count_pieces(|p| p == Piece::new(*color, kind));
        assert_eq!(count(PieceKind::Pawn), 8);
        assert_eq!(count(PieceKind::Knight), 2);
        assert_eq!(count(PieceKind::Bishop), 2);
        assert_eq!(count(PieceKind::Rook), 2);
        assert_eq!(count(PieceKind::Queen), 1);
        assert_eq!(count(PieceKind::King), 1);
    }
    assert_eq!(state.count_pieces(|_| true), 32);
    assert_eq!(
        state.material(|p| p.color == Color::White),
        state.material(|p| p.color == Color::Black)
    );
    assert_eq!(state.count_squares(|sq| sq.is_touched()), 0);
}

#[test]
fn grid_positions_fixed() {
    let mut state = ChessState::initial();
    state = state.make_move(None, mv((6, 4), (4, 4)));
    state = state.make_move(None, mv((1, 3), (3, 3)));
    for pos in ALL_POSITIONS.iter() {
        assert_eq!(state.square(*pos).position(), *pos);
    }
}

#[test]
fn json_round_trip() {
    let state = ChessState::initial().make_move(None, mv((7, 6), (5, 5)));
    let json = serde_json::to_string(&state).unwrap();
    let back: ChessState = serde_json::from_str(&json).unwrap();
    assert_eq!(state, back);
}

#[test]
fn json_layout() {
    let mut state = ChessState::empty();
    state.set_piece(Position::new(0, 1), Some(Piece::new(Color::Black, PieceKind::Knight)));
    state.touch(Position::new(0, 2));
    let value = serde_json::to_value(&state).unwrap();
    assert_eq!(
        value["board"][0][1],
        serde_json::json!({"position": [0, 1], "piece": {"color": "black", "name": "knight"}})
    );
    assert_eq!(value["board"][0][2], serde_json::json!({"position": [0, 2], "touched": true}));
    assert_eq!(value["board"][7][7], serde_json::json!({"position": [7, 7]}));
}

#[test]
fn fixture_loads() {
    let state: ChessState =
        serde_json::from_str(include_str!("fixtures/checkmate_1.json")).unwrap();
    assert_eq!(state.count_pieces(|_| true), 32);
    assert_eq!(
        state.piece_at(Position::new(2, 3)),
        Some(Piece::new(Color::White, PieceKind::Knight))
    );
    assert!(state.square(Position::new(1, 2)).is_touched());
}

#[test]
fn misplaced_square_rejected() {
    let mut rows: Vec<Vec<Square>> = Board::empty().into();
    rows[3].swap(0, 1);
    assert_eq!(
        Board::try_from(rows),
        Err(BoardError::MisplacedSquare {
            row: 3,
            col: 0,
            found: Position::new(3, 1),
        })
    );

    let mut value = serde_json::to_value(ChessState::empty()).unwrap();
    value["board"][0][0]["position"] = serde_json::json!([5, 5]);
    assert!(serde_json::from_value::<ChessState>(value).is_err());
}

#[test]
fn wrong_shape_rejected() {
    let mut rows: Vec<Vec<Square>> = Board::empty().into();
    rows.pop();
    assert_eq!(Board::try_from(rows), Err(BoardError::IncorrectRowAmount { rows: 7 }));

    let mut rows: Vec<Vec<Square>> = Board::empty().into();
    rows[2].pop();
    assert_eq!(
        Board::try_from(rows),
        Err(BoardError::IncorrectRowLength { row: 2, len: 7 })
    );
}

#[test]
fn pretty_print() {
    let state = ChessState::initial().make_move(None, mv((6, 0), (5, 0)));
    let s = state.to_string();
    assert!(s.contains("3 P - - - - - - - "));
    assert!(s.contains("2 . P P P P P P P "));
}

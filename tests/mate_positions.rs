use serde::Deserialize;

use chess_relay::board::{GameStatus, Position};
use chess_relay::game::GameState;

#[derive(Deserialize)]
struct PositionSet {
    positions: Vec<Case>,
}

#[derive(Deserialize)]
struct Case {
    name: String,
    fen: String,
    moves: String,
    status: String,
    checker: Option<String>,
}

fn parse_move(mv: &str) -> (Position, Position) {
    let from = mv[0..2].parse().expect("bad from square");
    let to = mv[2..4].parse().expect("bad to square");
    (from, to)
}

fn play_case(case: &Case) -> GameState {
    let mut game = GameState::try_from_fen(&case.fen)
        .unwrap_or_else(|e| panic!("{}: bad fen: {e}", case.name));
    for mv in case.moves.split_whitespace() {
        let (from, to) = parse_move(mv);
        game.apply_move(from, to)
            .unwrap_or_else(|e| panic!("{}: {mv} rejected: {e}", case.name));
    }
    game
}

#[test]
fn position_suite() {
    let data = include_str!("data/positions.json");
    let set: PositionSet = serde_json::from_str(data).expect("invalid positions.json");

    for case in &set.positions {
        let game = play_case(case);

        assert_eq!(
            game.status.to_string(),
            case.status,
            "wrong status for {}",
            case.name
        );
        assert_eq!(
            game.checker.map(|p| p.to_string()),
            case.checker,
            "wrong checker for {}",
            case.name
        );
        assert_eq!(
            game.board.all_legal_moves(game.turn).is_empty(),
            game.is_over(),
            "legal move list disagrees with status for {}",
            case.name
        );
    }
}

#[test]
fn finished_games_refuse_moves() {
    let data = include_str!("data/positions.json");
    let set: PositionSet = serde_json::from_str(data).expect("invalid positions.json");

    for case in set.positions.iter().filter(|c| c.status != "active") {
        let mut game = play_case(case);
        let before = game.clone();
        for from in Position::all() {
            for to in Position::all() {
                assert!(game.apply_move(from, to).is_err(), "{}: {from}{to} accepted", case.name);
            }
        }
        assert_eq!(game, before);
    }
}

#[test]
fn mated_side_has_no_escape() {
    let mut game = GameState::new();
    for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        let (from, to) = parse_move(mv);
        game.apply_move(from, to).unwrap();
    }
    assert_eq!(game.status, GameStatus::Checkmate);
    for (from, _) in game.board.pieces_of(game.turn) {
        assert!(game.board.legal_moves(from).is_empty(), "{from} can still move");
    }
}

#[test]
fn starting_position_has_twenty_moves_each() {
    let game = GameState::new();
    assert_eq!(game.board.all_legal_moves(game.turn).len(), 20);
    assert_eq!(game.board.all_legal_moves(game.turn.opponent()).len(), 20);
}

use std::env;
use std::process;

use chess_relay::board::Position;
use chess_relay::game::GameState;

fn parse_move(mv: &str) -> Option<(Position, Position)> {
    let from = mv.get(0..2)?.parse().ok()?;
    let to = mv.get(2..4)?.parse().ok()?;
    (mv.len() == 4).then_some((from, to))
}

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() <= 1 {
        eprintln!("usage: check_mate_status <move1> <move2> ...");
        return;
    }

    let mut game = GameState::new();
    for mv in args.iter().skip(1) {
        let Some((from, to)) = parse_move(mv) else {
            eprintln!("invalid move notation: {mv}");
            process::exit(1);
        };
        if let Err(e) = game.apply_move(from, to) {
            eprintln!("{mv}: {e}");
            process::exit(1);
        }
    }

    let legal_moves = game.board.all_legal_moves(game.turn);
    println!("{}", game.board);
    println!("side_to_move: {}", game.turn);
    println!("status: {}", game.status);
    if let Some(checker) = game.checker {
        println!("checker: {checker}");
    }
    println!("legal_moves: {}", legal_moves.len());
    for (from, to) in legal_moves {
        println!("{from}{to}");
    }
}

//! Benchmarks for move generation and terminal-state detection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_relay::board::{Board, Color, Position};
use chess_relay::game::GameState;
use chess_relay::session::{MoveSubmission, PlayerId, RelayConfig, RoomRegistry};

const MIDDLEGAME: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R";
const FOOLS_MATE: &str = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR";

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    let middlegame = Board::from_placement(MIDDLEGAME);

    group.bench_function("queen_open_board", |b| {
        let board = Board::from_placement("8/8/8/3Q4/8/8/8/8");
        let queen = Position(3, 3);
        b.iter(|| black_box(board.pseudo_moves(black_box(queen))))
    });

    for (name, board) in [("startpos", &startpos), ("middlegame", &middlegame)] {
        group.bench_with_input(BenchmarkId::new("all_legal_moves", name), board, |b, board| {
            b.iter(|| black_box(board.all_legal_moves(Color::White)))
        });
    }

    group.finish();
}

fn bench_status(c: &mut Criterion) {
    let mut group = c.benchmark_group("status");

    let mated = Board::from_placement(FOOLS_MATE);
    group.bench_function("fools_mate_checkmate", |b| {
        b.iter(|| black_box(mated.is_checkmate(Color::White)))
    });

    let middlegame = Board::from_placement(MIDDLEGAME);
    group.bench_function("middlegame_any_legal_move", |b| {
        b.iter(|| black_box(middlegame.has_any_legal_move(Color::Black)))
    });

    group.finish();
}

fn bench_relay(c: &mut Criterion) {
    let e2 = Position(4, 6);
    let e4 = Position(4, 4);

    c.bench_function("relay_verified_move", |b| {
        b.iter_with_setup(
            || {
                let relay = RoomRegistry::new(RelayConfig::default());
                let (room, _) = relay
                    .create_room(PlayerId(1), "bench", Color::White)
                    .unwrap();
                relay.join_room(PlayerId(2), &room).unwrap();
                (relay, room)
            },
            |(relay, room)| {
                black_box(relay.submit_move(PlayerId(1), &room, MoveSubmission::new(e2, e4)))
            },
        )
    });

    c.bench_function("game_apply_move", |b| {
        b.iter_with_setup(GameState::new, |mut game| {
            black_box(game.apply_move(e2, e4))
        })
    });
}

criterion_group!(benches, bench_movegen, bench_status, bench_relay);
criterion_main!(benches);

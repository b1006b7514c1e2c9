use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::time::Duration;
use tictactoe_engine::game::{Board, GameState, GameStatus, Mark, calculate_minimax_move};

fn bench_full_game_bot_vs_bot() {
    let mut state = GameState::new(Mark::X);
    while state.status == GameStatus::InProgress {
        let mover = state.current_mark;
        let other = mover.opponent().unwrap();
        let cell = calculate_minimax_move(&mut state.board, mover, other).unwrap();
        state.place_mark(mover, cell).unwrap();
    }
}

fn bench_single_move_empty_board() {
    let mut board = Board::new();
    calculate_minimax_move(&mut board, Mark::X, Mark::O).unwrap();
}

fn bench_single_move_mid_game() {
    let mut board = Board::new();
    board.cells[0] = Mark::X;
    board.cells[4] = Mark::O;
    board.cells[8] = Mark::X;
    calculate_minimax_move(&mut board, Mark::O, Mark::X).unwrap();
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(50)
        .measurement_time(Duration::from_secs(20));

    group.bench_function("full_game", |b| b.iter(bench_full_game_bot_vs_bot));

    group.bench_function("single_move_empty", |b| {
        b.iter(bench_single_move_empty_board)
    });

    group.bench_function("single_move_mid_game", |b| {
        b.iter(bench_single_move_mid_game)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);

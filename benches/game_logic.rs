use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matrix_tetris::core::{Board, GameState, Matrix};
use matrix_tetris::types::{Direction, GameEvent, PieceKind, Position};

fn bench_fall_tick(c: &mut Criterion) {
    let state = GameState::new(12345).spawn_kind(PieceKind::T);

    c.bench_function("fall_tick", |b| b.iter(|| black_box(&state).fall_tick()));
}

fn bench_line_clear(c: &mut Criterion) {
    let mut grid = vec![vec![None; 10]; 22];
    for row in &mut grid[18..] {
        row.fill(Some(PieceKind::I));
    }
    let board = Board::from_matrix(Matrix::from_rows(&grid));

    c.bench_function("clear_4_lines", |b| b.iter(|| black_box(&board).clear_lines()));
}

fn bench_piece_spawn(c: &mut Criterion) {
    let state = GameState::new(12345);

    c.bench_function("spawn_piece", |b| b.iter(|| black_box(&state).spawn_piece()));
}

fn bench_move(c: &mut Criterion) {
    let state = GameState::new(12345).spawn_kind(PieceKind::L);

    c.bench_function("move_piece", |b| {
        b.iter(|| black_box(&state).apply(GameEvent::Move(Direction::Right)))
    });
}

fn bench_rotate(c: &mut Criterion) {
    let state = GameState::new(12345)
        .spawn_kind(PieceKind::J)
        .move_piece(Position::new(5, 0))
        .into_state()
        .unwrap_or_default();

    c.bench_function("rotate_piece", |b| b.iter(|| black_box(&state).rotate_piece()));
}

fn bench_drop(c: &mut Criterion) {
    let state = GameState::new(12345).spawn_kind(PieceKind::I);

    c.bench_function("drop_piece", |b| b.iter(|| black_box(&state).drop_piece()));
}

criterion_group!(
    benches,
    bench_fall_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_drop
);
criterion_main!(benches);

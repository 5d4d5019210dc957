use criterion::{black_box, criterion_group, criterion_main, Criterion};
use bitris::core::{ActivePiece, Field, GameSession, Occupancy, PieceSource, RenderState};
use bitris::types::{Dimensions, GameAction, PieceKind};

fn bench_tick(c: &mut Criterion) {
    let mut session = GameSession::new(Dimensions::default(), 12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if !session.tick() {
                session.handle_input(GameAction::Restart);
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let dims = Dimensions::default();
    let mut rows = [0; 20];
    for row in &mut rows[16..] {
        *row = dims.full_row();
    }
    let mut pieces = PieceSource::new(12345);

    c.bench_function("fuse_clear_4_lines", |b| {
        b.iter(|| {
            let mut field = Field::new(dims);
            let mask = Occupancy::from_rows(dims, black_box(&rows)).unwrap();
            field.fuse(&mask, &mut pieces)
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut pieces = PieceSource::new(12345);
    let dims = Dimensions::default();

    c.bench_function("spawn_piece", |b| b.iter(|| pieces.spawn(black_box(dims))));
}

fn bench_move(c: &mut Criterion) {
    let dims = Dimensions::default();
    let field = Field::new(dims);
    let mut piece = ActivePiece::spawn(PieceKind::T, dims);

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            if !piece.move_left(&field) {
                while piece.move_right(&field) {}
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut piece = ActivePiece::spawn(PieceKind::I, Dimensions::default());

    c.bench_function("rotate", |b| b.iter(|| piece.rotate()));
}

fn bench_render_state(c: &mut Criterion) {
    let session = GameSession::new(Dimensions::default(), 12345);
    let mut state = RenderState::default();

    c.bench_function("render_state_into", |b| {
        b.iter(|| session.render_state_into(black_box(&mut state)))
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_move,
    bench_rotate,
    bench_render_state
);
criterion_main!(benches);

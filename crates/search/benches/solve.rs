use criterion::{black_box, criterion_group, criterion_main, Criterion};
use matcher_core::{Board, Piece, PieceColor};
use matcher_search::{Solver, SolverConfig};

fn midgame_board() -> Board {
    let r = Piece::plain(PieceColor::Red);
    let p = Piece::plain(PieceColor::Pink);
    let y = Piece::plain(PieceColor::Yellow);
    let t = Piece::bomb(PieceColor::Teal);
    Board::from_stacks(
        &[
            &[r, p, y, r][..],
            &[p, p],
            &[y, t, r],
            &[],
            &[r, y],
            &[t, p, p, y, r],
            &[y],
        ],
        None,
    )
    .expect("valid stacks")
}

fn bench_best_state(c: &mut Criterion) {
    let board = midgame_board();
    let solver = Solver::from_config(&SolverConfig::best_state());

    c.bench_function("best_state_midgame", |b| {
        b.iter(|| solver.find_moves(black_box(&board)))
    });
}

fn bench_bounded(c: &mut Criterion) {
    let board = midgame_board();
    let solver = Solver::from_config(&SolverConfig::bounded());

    c.bench_function("bounded_midgame", |b| {
        b.iter(|| solver.find_moves(black_box(&board)))
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_best_state, bench_bounded
}
criterion_main!(benches);

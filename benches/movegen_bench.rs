use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rust_checkers::core::{Board, Color};
use rust_checkers::rules::{has_any_move, moves_from};

fn bench_movegen(c: &mut Criterion) {
    let board = Board::standard();
    c.bench_function("moves_from_all_squares_startpos", |b| {
        b.iter(|| {
            let mut total = 0;
            for pos in Board::positions() {
                total += moves_from(black_box(&board), pos).len();
            }
            black_box(total)
        })
    });
    c.bench_function("has_any_move_startpos", |b| {
        b.iter(|| black_box(has_any_move(black_box(&board), Color::Red)))
    });
}

criterion_group!(benches, bench_movegen);
criterion_main!(benches);

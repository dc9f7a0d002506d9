use criterion::{criterion_group, criterion_main, Criterion};
use sudoku_lazy::{Solver, Sudoku};

const EASY: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";
const HARD: &str =
    ".6.5.4.3.1...9...8.........9...5...6.4.6.2.7.7...4...5.........4...8...1.5.2.3.4.";

fn parse(s: &str) -> Sudoku {
    s.parse().unwrap_or_else(|err| panic!("{:?}", err))
}

fn _1_easy_solve_one(c: &mut Criterion) {
    let sudoku = parse(EASY);
    c.bench_function("_1_easy_solve_one", |b| {
        b.iter(|| Solver::new(sudoku.clone()).first_solution())
    });
}

fn _1_easy_solve_unique(c: &mut Criterion) {
    let sudoku = parse(EASY);
    c.bench_function("_1_easy_solve_unique", |b| b.iter(|| sudoku.solve_unique()));
}

fn _2_hard_solve_one(c: &mut Criterion) {
    let sudoku = parse(HARD);
    c.bench_function("_2_hard_solve_one", |b| {
        b.iter(|| Solver::new(sudoku.clone()).first_solution())
    });
}

fn _2_hard_solve_unique(c: &mut Criterion) {
    let sudoku = parse(HARD);
    c.bench_function("_2_hard_solve_unique", |b| b.iter(|| sudoku.solve_unique()));
}

fn _3_shared_queries(c: &mut Criterion) {
    let sudoku = parse(HARD);
    c.bench_function("_3_shared_queries", |b| {
        b.iter(|| {
            let solver = Solver::new(sudoku.clone());
            let first = solver.first_solution();
            let unique = solver.has_unique_solution();
            (first, unique)
        })
    });
}

criterion_group!(
    benches,
    _1_easy_solve_one,
    _1_easy_solve_unique,
    _2_hard_solve_one,
    _2_hard_solve_unique,
    _3_shared_queries,
);
criterion_main!(benches);

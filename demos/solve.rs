use sudoku_lazy::{Solver, Sudoku};

fn main() {
    let puzzle: Sudoku = "
        5 3 .    . 7 .    . . .
        6 . .    1 9 5    . . .
        . 9 8    . . .    . 6 .

        8 . .    . 6 .    . . 3
        4 . .    8 . 3    . . 1
        7 . .    . 2 .    . . 6

        . 6 .    . . .    2 8 .
        . . .    4 1 9    . . 5
        . . .    . 8 .    . 7 9"
        .parse()
        .unwrap();

    let solver = Solver::new(puzzle);
    match solver.first_solution() {
        Some(solution) => {
            println!("{}", solution);
            println!();
            println!("unique: {}", solver.has_unique_solution());
        }
        None => println!("no solution"),
    }
}

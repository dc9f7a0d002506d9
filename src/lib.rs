#![warn(missing_docs)]
//! A lazy, memoizing sudoku solver library
//!
//! ## Overview
//!
//! The solver runs a backtracking search with a most-constrained-cell
//! heuristic over bitset-encoded candidate domains. The complete solution
//! set of a puzzle is exposed as a lazy sequence: no search work happens
//! until a solution is demanded, and a shared replay cache guarantees that
//! asking for the first solution, all solutions and uniqueness together
//! costs no more than the deepest of those queries alone.
//!
//! ## Example
//!
//! ```
//! use sudoku_lazy::{Solver, Sudoku};
//!
//! let puzzle: Sudoku =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!         .parse()
//!         .unwrap();
//!
//! let solver = Solver::new(puzzle);
//! assert!(solver.has_unique_solution());
//!
//! let solution = solver.first_solution().unwrap();
//! assert!(solution.is_complete());
//! println!("{}", solution);
//! ```

pub mod bitset;
mod consts;
pub mod lazy;
pub mod parse_errors;
mod positions;
mod solver;
mod sudoku;

pub use crate::parse_errors::ParseError;
pub use crate::solver::{CandidatePolicy, SolutionIter, Solver};
pub use crate::sudoku::Sudoku;

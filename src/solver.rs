//! Backtracking search over candidate domains, exposed as a memoized lazy
//! sequence of solutions.
//!
//! The search walks the tree of grids reachable by filling the most
//! constrained empty cell with each of its candidate digits in ascending
//! order. The whole tree is materialized as a lazy iterator through
//! [`flat_chain`], so no branch is explored before a solution from it is
//! demanded, and wrapped in a [`Replay`] so that the derived queries share a
//! single traversal: asking for uniqueness after having drained all
//! solutions costs nothing additional.

use std::collections::HashSet;
use std::iter;

use crate::lazy::{flat_chain, Cursor, Replay};
use crate::sudoku::Sudoku;

/// The lazy sequence of solutions produced by the search.
pub type SolutionIter = Box<dyn Iterator<Item = Sudoku>>;

/// How a child grid obtains its candidate domains during search.
///
/// Both strategies explore the same tree and find the same solutions;
/// [`CandidatePolicy::Incremental`] is the efficient default,
/// [`CandidatePolicy::Recompute`] the simplicity baseline.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CandidatePolicy {
    /// Derive the child's domains from the parent's by removing the placed
    /// digit from every conflicting cell.
    Incremental,
    /// Recompute all 81 domains from scratch after every placement.
    Recompute,
}

/// Solves a sudoku through backtracking search, memoizing the stream of
/// solutions.
///
/// All queries pull from one shared, cached solution sequence; search work
/// is performed at most once per solution, whichever query demands it first.
pub struct Solver {
    solutions: Replay<SolutionIter>,
}

impl Solver {
    /// Creates a solver for `sudoku` with the incremental candidate policy.
    pub fn new(sudoku: Sudoku) -> Solver {
        Solver::with_policy(sudoku, CandidatePolicy::Incremental)
    }

    /// Creates a solver for `sudoku` with the given candidate policy.
    pub fn with_policy(sudoku: Sudoku, policy: CandidatePolicy) -> Solver {
        Solver {
            solutions: Replay::new(search(sudoku, policy)),
        }
    }

    /// Returns a fresh cursor over the memoized solution sequence. The
    /// cursor is lazy: it performs search work only as elements are demanded
    /// and replays whatever earlier cursors already produced.
    pub fn solutions(&self) -> Cursor<SolutionIter> {
        self.solutions.cursor()
    }

    /// Returns the first solution, or `None` if the sudoku has none.
    pub fn first_solution(&self) -> Option<Sudoku> {
        self.solutions().next()
    }

    /// Returns all solutions. No ordering is promised.
    pub fn all_solutions(&self) -> HashSet<Sudoku> {
        self.solutions().collect()
    }

    /// Checks whether the sudoku has exactly one solution.
    pub fn has_unique_solution(&self) -> bool {
        let mut solutions = self.solutions();
        solutions.next().is_some() && solutions.next().is_none()
    }
}

fn search(sudoku: Sudoku, policy: CandidatePolicy) -> SolutionIter {
    let cell = match sudoku.most_constrained_cell() {
        // no empty cell left, the grid itself is the one solution down here
        None => return Box::new(iter::once(sudoku)),
        Some(cell) => cell,
    };
    // An empty domain makes the chain below empty: the node is a dead end
    // and contributes nothing without descending further.
    let digits = sudoku.candidates()[cell as usize];
    Box::new(flat_chain(digits.into_iter(), move |digit| {
        let child = match policy {
            CandidatePolicy::Incremental => sudoku.place(cell, digit),
            CandidatePolicy::Recompute => sudoku.with_value(cell, digit),
        };
        search(child, policy)
    }))
}

//! The sudoku grid type and its constraint-derived candidate domains.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use once_cell::unsync::OnceCell;

use crate::bitset::SmallSet;
use crate::consts::N_CELLS;
use crate::parse_errors::ParseError;
use crate::positions::NEIGHBORS;
use crate::solver::Solver;

// the digits 1..=9, the full domain of an unconstrained cell
const DIGITS: SmallSet = SmallSet::from_range(1, 9);

/// A 9x9 sudoku grid, partially or fully filled.
///
/// The grid is immutable after construction. Constructors enforce that no
/// two conflicting cells contain the same digit, and the solver's internal
/// transitions preserve that invariant by only ever placing digits drawn
/// from a cell's own candidate domain, so every `Sudoku` in existence is
/// consistent.
///
/// The per-cell candidate domains are computed lazily on first access and
/// cached for the instance's lifetime. Equality and hashing consider the
/// cell values only, never the cached candidate state.
#[derive(Clone, Debug)]
pub struct Sudoku {
    values: [u8; N_CELLS],
    candidates: OnceCell<[SmallSet; N_CELLS]>,
}

impl PartialEq for Sudoku {
    fn eq(&self, other: &Self) -> bool {
        self.values[..] == other.values[..]
    }
}

impl Eq for Sudoku {}

impl Hash for Sudoku {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.values.hash(state);
    }
}

impl FromStr for Sudoku {
    type Err = ParseError;

    /// Parses a sudoku from text. Characters `'1'..='9'` are digits,
    /// whitespace is ignored entirely, any other character denotes an empty
    /// cell. Exactly 81 meaningful characters are required.
    fn from_str(s: &str) -> Result<Sudoku, ParseError> {
        let mut values = [0; N_CELLS];
        let mut count = 0;
        for ch in s.chars().filter(|ch| !ch.is_whitespace()) {
            if count < N_CELLS {
                values[count] = match ch {
                    '1'..='9' => ch as u8 - b'0',
                    _ => 0,
                };
            }
            count += 1;
        }
        if count != N_CELLS {
            return Err(ParseError::WrongCellCount(count));
        }
        Sudoku::from_values(values)
    }
}

impl Sudoku {
    /// Creates a sudoku from an array of 81 cell values, `0` denoting an
    /// empty cell.
    pub fn from_bytes(bytes: [u8; N_CELLS]) -> Result<Sudoku, ParseError> {
        for (cell, &value) in bytes.iter().enumerate() {
            if value > 9 {
                return Err(ParseError::InvalidCellValue {
                    cell: cell as u8,
                    value,
                });
            }
        }
        Sudoku::from_values(bytes)
    }

    fn from_values(values: [u8; N_CELLS]) -> Result<Sudoku, ParseError> {
        check_consistent(&values)?;
        Ok(Sudoku {
            values,
            candidates: OnceCell::new(),
        })
    }

    /// Returns the grid as an array of 81 cell values, `0` denoting an empty
    /// cell.
    pub fn to_bytes(&self) -> [u8; N_CELLS] {
        self.values
    }

    /// Returns the grid in line notation: 81 characters, `.` for empty cells.
    pub fn to_str_line(&self) -> String {
        self.values
            .iter()
            .map(|&value| match value {
                0 => '.',
                _ => (b'0' + value) as char,
            })
            .collect()
    }

    /// Returns an iterator over the cells, going from left to right, top to
    /// bottom. Empty cells are `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.values.iter().map(|&value| match value {
            0 => None,
            _ => Some(value),
        })
    }

    /// Checks whether every cell is filled.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(|&value| value != 0)
    }

    /// Returns the number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.values.iter().filter(|&&value| value != 0).count()
    }

    /// Returns the candidate domain of every cell: the digits not excluded
    /// by any filled, conflicting cell. Filled cells have an empty domain.
    ///
    /// Computed on first access and cached for the instance's lifetime.
    pub fn candidates(&self) -> &[SmallSet; N_CELLS] {
        self.candidates
            .get_or_init(|| compute_candidates(&self.values))
    }

    /// Returns a new grid with `digit` placed at `cell`, the candidate
    /// domains derived incrementally from this grid's. The receiver is not
    /// modified.
    ///
    /// The digit must be drawn from the cell's own candidate domain; this is
    /// not validated.
    pub(crate) fn place(&self, cell: u8, digit: u8) -> Sudoku {
        debug_assert!(self.candidates()[cell as usize].contains(digit));
        let mut values = self.values;
        values[cell as usize] = digit;
        let mut domains = *self.candidates();
        domains[cell as usize] = SmallSet::NONE;
        for &other in &NEIGHBORS[cell as usize] {
            domains[other as usize].remove(digit);
        }
        Sudoku {
            values,
            candidates: OnceCell::from(domains),
        }
    }

    /// Returns a new grid with `digit` placed at `cell` and no candidate
    /// state carried over; the child recomputes all 81 domains from scratch
    /// on demand. The naive counterpart of [`Sudoku::place`].
    pub(crate) fn with_value(&self, cell: u8, digit: u8) -> Sudoku {
        debug_assert!(self.candidates()[cell as usize].contains(digit));
        let mut values = self.values;
        values[cell as usize] = digit;
        Sudoku {
            values,
            candidates: OnceCell::new(),
        }
    }

    /// Returns the empty cell with the fewest candidates, ties broken by
    /// lowest index, or `None` if the grid is complete.
    ///
    /// A cell with zero candidates is returned as soon as the scan reaches
    /// it: such a cell certifies that the grid admits no completion.
    pub(crate) fn most_constrained_cell(&self) -> Option<u8> {
        let domains = self.candidates();
        let mut best: Option<(u8, u8)> = None;
        for cell in 0..N_CELLS {
            if self.values[cell] != 0 {
                continue;
            }
            let size = domains[cell].len();
            if size == 0 {
                return Some(cell as u8);
            }
            if best.map_or(true, |(_, smallest)| size < smallest) {
                best = Some((cell as u8, size));
            }
        }
        best.map(|(cell, _)| cell)
    }

    /// Finds a solution to the sudoku. If multiple solutions exist, it stops
    /// at the first. Returns `None` if no solution exists.
    pub fn solve_one(&self) -> Option<Sudoku> {
        Solver::new(self.clone()).first_solution()
    }

    /// Solves the sudoku and returns the solution iff it is unique.
    pub fn solve_unique(&self) -> Option<Sudoku> {
        let solver = Solver::new(self.clone());
        let mut solutions = solver.solutions();
        let first = solutions.next()?;
        match solutions.next() {
            None => Some(first),
            Some(_) => None,
        }
    }
}

fn check_consistent(values: &[u8; N_CELLS]) -> Result<(), ParseError> {
    for cell in 0..N_CELLS {
        let digit = values[cell];
        if digit == 0 {
            continue;
        }
        for &other in &NEIGHBORS[cell] {
            // every pair is visited twice, report it from the lower index
            if other as usize > cell && values[other as usize] == digit {
                return Err(ParseError::InconsistentGrid {
                    first: cell as u8,
                    second: other,
                    digit,
                });
            }
        }
    }
    Ok(())
}

fn compute_candidates(values: &[u8; N_CELLS]) -> [SmallSet; N_CELLS] {
    let mut domains = [SmallSet::NONE; N_CELLS];
    for cell in 0..N_CELLS {
        if values[cell] != 0 {
            continue;
        }
        let mut domain = DIGITS;
        for &other in &NEIGHBORS[cell] {
            // empty neighbors contribute a 0, which is not in DIGITS
            domain.remove(values[other as usize]);
        }
        domains[cell] = domain;
    }
    domains
}

impl fmt::Display for Sudoku {
    /// Formats the grid with `.` for empty cells, a single space between
    /// columns, three extra spaces after columns 3 and 6, and an extra blank
    /// line after rows 3 and 6. No trailing whitespace or newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..9 {
            for col in 0..9 {
                match self.values[row * 9 + col] {
                    0 => write!(f, ".")?,
                    value => write!(f, "{}", value)?,
                }
                match col {
                    2 | 5 => write!(f, "    ")?,
                    8 => {}
                    _ => write!(f, " ")?,
                }
            }
            match row {
                2 | 5 => write!(f, "\n\n")?,
                8 => {}
                _ => writeln!(f)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLASSIC: &str =
        "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

    fn sudoku(s: &str) -> Sudoku {
        s.parse().unwrap()
    }

    #[test]
    fn candidates_exclude_conflicting_digits() {
        let grid = sudoku(CLASSIC);
        let domains = grid.candidates();
        // filled cells have an empty domain
        assert!(domains[0].is_empty());
        // cell 2 sees {5, 3, 7} in its row, {8} in its column and
        // {5, 3, 6, 9, 8} in its block
        let expected: SmallSet = [1u8, 2, 4].iter().copied().collect();
        assert_eq!(domains[2], expected);
    }

    #[test]
    fn incremental_domains_match_recomputation() {
        // walk a greedy path through the search space and compare the
        // incrementally derived domains against a fresh grid at every step
        let mut grid = sudoku(CLASSIC);
        while let Some(cell) = grid.most_constrained_cell() {
            let digit = match grid.candidates()[cell as usize].min() {
                Some(digit) => digit,
                None => break,
            };
            let child = grid.place(cell, digit);
            let scratch = Sudoku::from_bytes(child.to_bytes()).unwrap();
            assert_eq!(child.candidates()[..], scratch.candidates()[..]);
            grid = child;
        }
    }

    #[test]
    fn place_leaves_the_parent_untouched() {
        let parent = Sudoku::from_bytes([0; N_CELLS]).unwrap();
        let child = parent.place(40, 5);
        assert_eq!(child.to_bytes()[40], 5);
        assert_eq!(parent.to_bytes()[40], 0);
        assert!(child.candidates()[40].is_empty());
        // row, column and block neighbors lost the digit
        assert!(!child.candidates()[39].contains(5));
        assert!(!child.candidates()[4].contains(5));
        assert!(!child.candidates()[30].contains(5));
        // an unrelated cell did not
        assert!(child.candidates()[0].contains(5));
        assert_eq!(parent.candidates()[40], DIGITS);
    }

    #[test]
    fn most_constrained_cell_breaks_ties_by_lowest_index() {
        let empty = Sudoku::from_bytes([0; N_CELLS]).unwrap();
        assert_eq!(empty.most_constrained_cell(), Some(0));
    }

    #[test]
    fn most_constrained_cell_returns_a_dead_cell_immediately() {
        // cell 80 sees 1..=8 in its row and 9 in its column, leaving nothing
        let mut bytes = [0u8; N_CELLS];
        for (offset, cell) in (72..80).enumerate() {
            bytes[cell] = offset as u8 + 1;
        }
        bytes[8] = 9;
        let grid = Sudoku::from_bytes(bytes).unwrap();
        assert!(grid.candidates()[80].is_empty());
        assert_eq!(grid.most_constrained_cell(), Some(80));
    }

    #[test]
    fn most_constrained_cell_on_complete_grid() {
        let solution = sudoku(CLASSIC).solve_one().unwrap();
        assert!(solution.is_complete());
        assert_eq!(solution.most_constrained_cell(), None);
    }

    #[test]
    fn equality_ignores_cached_candidates() {
        let a = sudoku(CLASSIC);
        let b = sudoku(CLASSIC);
        a.candidates();
        assert_eq!(a, b);
        assert_ne!(a, Sudoku::from_bytes([0; N_CELLS]).unwrap());
    }

    #[test]
    fn filled_count_counts_digits() {
        assert_eq!(sudoku(CLASSIC).filled_count(), 30);
        assert_eq!(Sudoku::from_bytes([0; N_CELLS]).unwrap().filled_count(), 0);
    }
}

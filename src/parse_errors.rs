//! Errors that may be encountered when reading a sudoku from text or bytes.

/// A structure representing an error caused when constructing a sudoku.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseError {
    /// The input did not contain exactly 81 cells after whitespace removal.
    #[error("found {0} cells instead of required 81")]
    WrongCellCount(usize),
    /// A byte outside `0..=9` was supplied as a cell value.
    #[error("cell {cell} contains invalid value {value}, allowed are 0..=9")]
    InvalidCellValue {
        /// Cell number goes from 0..=80, 0..=8 for the first row, 9..=17 for
        /// the second and so on.
        cell: u8,
        /// The offending value.
        value: u8,
    },
    /// Two conflicting cells contain the same digit.
    #[error("cells {first} and {second} conflict, both contain {digit}")]
    InconsistentGrid {
        /// The lower of the two conflicting cell indices.
        first: u8,
        /// The higher of the two conflicting cell indices.
        second: u8,
        /// The digit present in both cells.
        digit: u8,
    },
}

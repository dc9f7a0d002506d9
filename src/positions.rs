//! Cell position arithmetic and the static conflict relation.
//!
//! Cells are addressed by a single flat index `0..81`, row-major. Two
//! distinct cells conflict if they share a row, a column or a 3x3 block.

use crate::consts::N_CELLS;
use once_cell::sync::Lazy;

#[inline(always)]
pub(crate) fn row(cell: u8) -> u8 {
    cell / 9
}

#[inline(always)]
pub(crate) fn col(cell: u8) -> u8 {
    cell % 9
}

#[inline(always)]
pub(crate) fn block(cell: u8) -> u8 {
    row(cell) / 3 * 3 + col(cell) / 3
}

/// True if two cells share a row, column or block.
///
/// # Panic
/// Panics, if the cells are equal or either index is outside `0..81`.
pub(crate) fn conflicts(a: u8, b: u8) -> bool {
    assert!(
        a != b && a < 81 && b < 81,
        "invalid cell pair ({}, {})",
        a,
        b
    );
    row(a) == row(b) || col(a) == col(b) || block(a) == block(b)
}

// 8 cells in the row, 8 in the column and 4 more in the block.
pub(crate) const N_NEIGHBORS: usize = 20;

/// For every cell, the conflicting cells in ascending order. Computed once
/// per process and shared read-only.
pub(crate) static NEIGHBORS: Lazy<[[u8; N_NEIGHBORS]; N_CELLS]> = Lazy::new(|| {
    let mut table = [[0; N_NEIGHBORS]; N_CELLS];
    for cell in 0..N_CELLS as u8 {
        let mut count = 0;
        for other in 0..N_CELLS as u8 {
            if other != cell && conflicts(cell, other) {
                table[cell as usize][count] = other;
                count += 1;
            }
        }
        debug_assert_eq!(count, N_NEIGHBORS);
    }
    table
});

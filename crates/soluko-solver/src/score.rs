//! Validity scoring: how far a grid is from satisfying every constraint.

use soluko_core::DigitGrid;

/// Returns the grid's validity score: `0` for a complete, rule-satisfying
/// grid, larger values for grids further from one.
///
/// For every row, column, and box, the score adds the number of digits from
/// the full range that the group's *resolved* values do not cover. Candidate
/// sets play no part; only placed digits count.
///
/// Note that the score counts missing distinct values only: a group holding a
/// duplicate scores the same as one that is merely incomplete by the same
/// amount. A duplicate always forces some digit in its group to be missing,
/// so no invalid full grid ever scores `0`, but the score cannot tell the two
/// defects apart.
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn wrongness(grid: &DigitGrid) -> u32 {
    let range = grid.geometry().digits();
    let dim = u32::from(grid.geometry().dim());
    let mut wrong = 0;
    for view in [grid.rows(), grid.columns(), grid.boxes()] {
        for group in view {
            let resolved = group.iter().flatten().copied().collect();
            wrong += dim - range.intersection(resolved).len() as u32;
        }
    }
    wrong
}

/// Returns `true` if every row, column, and box contains the full digit
/// range exactly.
#[must_use]
pub fn is_valid(grid: &DigitGrid) -> bool {
    wrongness(grid) == 0
}

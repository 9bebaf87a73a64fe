//! Shared fixtures and assertions for the solver's unit tests.

use std::str::FromStr as _;

use soluko_core::DigitGrid;

use crate::board::Board;

/// A 9×9 puzzle that falls to singles deductions plus a shallow search.
pub(crate) const EASY: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

/// The unique solution of [`EASY`].
pub(crate) const EASY_SOLVED: &str = "
    534 678 912
    672 195 348
    198 342 567
    859 761 423
    426 853 791
    713 924 856
    961 537 284
    287 419 635
    345 286 179
";

/// A sparse 9×9 puzzle that leans on the backtracking search.
pub(crate) const HARD: &str =
    "4.....8.5.3..........7......2.....6.....8.4......1.......6.3.7.5..2.....1.4......";

/// Parses a grid string and wraps it in a fresh board.
///
/// # Panics
///
/// Panics if the string is not a valid grid.
#[track_caller]
pub(crate) fn board_from_str(s: &str) -> Board {
    Board::from_grid(DigitGrid::from_str(s).unwrap())
}

/// Asserts that a grid equals the one described by `expected`.
#[track_caller]
pub(crate) fn assert_grid_eq(grid: &DigitGrid, expected: &str) {
    let expected = DigitGrid::from_str(expected).unwrap();
    assert_eq!(grid, &expected, "grids differ:\n{grid}\n--- expected ---\n{expected}");
}

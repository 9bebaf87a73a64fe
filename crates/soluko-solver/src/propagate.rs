//! The propagation engine: refine candidates and collapse singletons until
//! the validity score reaches a fixpoint.

use soluko_core::DigitSet;

use crate::{board::Board, resolver, score};

/// Runs propagation passes until the validity score stops changing, and
/// returns the final score.
///
/// Each pass recomputes the missing-value tables from the resolved values,
/// rebuilds every cell's candidate set (fixed cells become singletons,
/// unknown cells go through the possibility resolver), then collapses
/// singleton candidate sets back into resolved values. Candidate sets only
/// ever shrink, so the loop terminates.
///
/// A score of `0` means the board is completely solved. A nonzero score
/// means deduction alone has stalled; [`solve`](crate::solve) continues from
/// there with backtracking search.
///
/// # Examples
///
/// ```
/// use soluko_solver::{Board, propagate};
///
/// // One hole in an otherwise-valid grid is filled by pure deduction.
/// let mut board = Board::from_rows(&[
///     vec![1, 2, 3, 4],
///     vec![3, 4, 1, 2],
///     vec![2, 1, 4, 3],
///     vec![4, 3, 2, 0],
/// ])?;
/// assert_eq!(propagate(&mut board), 0);
/// assert!(board.is_valid());
/// # Ok::<(), soluko_solver::SolverError>(())
/// ```
pub fn propagate(board: &mut Board) -> u32 {
    let mut previous = score::wrongness(board.grid());
    loop {
        pass(board);
        let current = score::wrongness(board.grid());
        if current == previous {
            return current;
        }
        previous = current;
    }
}

/// One propagation pass: rebuild the candidate grid, then collapse it into
/// the resolved values.
///
/// The candidate grid is updated in place, cell by cell, so later cells in
/// the pass already see the refinements made to earlier ones.
pub(crate) fn pass(board: &mut Board) {
    let tables = board.missing_tables();
    let cell_count = board.geometry().cell_count();
    for cell in 0..cell_count {
        match board.value(cell) {
            Some(digit) => board.set_candidates(cell, DigitSet::from(digit)),
            None => {
                let refined = resolver::resolve_cell(board, &tables, cell);
                board.set_candidates(cell, refined);
            }
        }
    }
    for cell in 0..cell_count {
        board.set_value(cell, board.candidates_at(cell).single());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing;

    #[test]
    fn test_single_hole_is_deduced() {
        let mut solved = testing::board_from_str(testing::EASY_SOLVED);
        solved.set_value(40, None);
        let mut board = Board::from_grid(solved.into_grid());

        assert_eq!(propagate(&mut board), 0);
        testing::assert_grid_eq(board.grid(), testing::EASY_SOLVED);
    }

    #[test]
    fn test_idempotent_on_solved_grid() {
        let mut board = testing::board_from_str(testing::EASY_SOLVED);
        assert_eq!(propagate(&mut board), 0);
        testing::assert_grid_eq(board.grid(), testing::EASY_SOLVED);

        // A second run changes nothing
        assert_eq!(propagate(&mut board), 0);
        testing::assert_grid_eq(board.grid(), testing::EASY_SOLVED);
    }

    #[test]
    fn test_collapse_preserves_singletons() {
        let mut board = testing::board_from_str(testing::EASY);
        propagate(&mut board);

        for cell in 0..board.geometry().cell_count() {
            if let Some(digit) = board.candidates_at(cell).single() {
                assert_eq!(board.value(cell), Some(digit), "cell {cell}");
            } else {
                assert_eq!(board.value(cell), None, "cell {cell}");
            }
        }
    }

    #[test]
    fn test_contradiction_reaches_fixpoint() {
        // Two 5s in one row: propagation must terminate with a nonzero score,
        // not loop or panic.
        let mut board = testing::board_from_str(
            "
            5___5____
            _________
            _________
            _________
            _________
            _________
            _________
            _________
            _________
            ",
        );
        let score = propagate(&mut board);
        assert!(score > 0);
    }

    #[test]
    fn test_propagation_is_deterministic() {
        let mut a = testing::board_from_str(testing::EASY);
        let mut b = testing::board_from_str(testing::EASY);
        propagate(&mut a);
        propagate(&mut b);
        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.candidates(), b.candidates());
    }
}

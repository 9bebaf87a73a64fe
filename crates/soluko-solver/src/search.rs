//! Backtracking search over the most constrained cell.

use soluko_core::{DigitGrid, DigitSet};

use crate::{SolverError, board::Board, propagate::propagate};

/// Terminal state of a solving run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Outcome {
    /// Every row, column, and box contains the full digit range.
    Solved,
    /// Deduction and search are both exhausted; the board keeps its
    /// best-effort (invalid) state.
    Unsolved {
        /// The final validity score (always nonzero here).
        wrongness: u32,
    },
}

/// Solves the board in place: propagation to a fixpoint, then backtracking
/// search if needed.
///
/// When propagation stalls with a nonzero score, the cell with the fewest
/// remaining candidates (more than one) is selected and each of its
/// candidates is tried on an independently cloned board, recursing through
/// this same function. The first trial that validates completely is adopted.
/// A trial whose propagation empties some cell's candidate set is rejected
/// and the next candidate is tried; the rejection never escapes the search.
///
/// Returns [`Outcome::Unsolved`] when no cell is left to branch on or every
/// candidate fails; the board then stays in its best-effort state, so callers
/// that need certainty should re-check [`Board::is_valid`].
///
/// # Examples
///
/// ```
/// use soluko_core::{DigitGrid, Geometry};
/// use soluko_solver::{Board, solve};
///
/// // The empty grid exercises the full search and still terminates solved.
/// let mut board = Board::from_grid(DigitGrid::empty(Geometry::new(4)?));
/// assert!(solve(&mut board).is_solved());
/// # Ok::<(), soluko_core::GeometryError>(())
/// ```
pub fn solve(board: &mut Board) -> Outcome {
    let wrongness = propagate(board);
    if wrongness == 0 {
        return Outcome::Solved;
    }

    let Some((cell, candidates)) = most_constrained_cell(board) else {
        return Outcome::Unsolved { wrongness };
    };

    let mut rows = board.grid().clone();
    for digit in candidates {
        rows.set(cell, Some(digit));
        let Ok(mut trial) = trial_board(rows.clone()) else {
            continue;
        };
        if solve(&mut trial).is_solved() {
            board.adopt(trial);
            return Outcome::Solved;
        }
    }
    Outcome::Unsolved { wrongness }
}

/// Picks the cell with the smallest candidate set of size greater than one
/// (minimum remaining values). Ties go to the lowest cell index.
fn most_constrained_cell(board: &Board) -> Option<(usize, DigitSet)> {
    board
        .candidates()
        .iter()
        .enumerate()
        .filter(|(_, set)| set.len() > 1)
        .min_by_key(|(_, set)| set.len())
        .map(|(cell, set)| (cell, *set))
}

/// Builds and propagates a trial board, rejecting it if the result is
/// inconsistent (an emptied candidate set or a duplicated value).
fn trial_board(grid: DigitGrid) -> Result<Board, SolverError> {
    let mut board = Board::from_grid(grid);
    propagate(&mut board);
    board.check_consistency()?;
    Ok(board)
}

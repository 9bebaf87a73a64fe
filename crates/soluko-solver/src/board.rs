use soluko_core::{Digit, DigitGrid, DigitSet, Geometry, digit::MAX_DIGIT};
use tinyvec::ArrayVec;

use crate::{SolverError, score};

pub(crate) const MAX_DIM: usize = MAX_DIGIT as usize;

/// One candidate set per group of a single kind (rows, columns, or boxes).
pub(crate) type GroupSets = ArrayVec<[DigitSet; MAX_DIM]>;

/// Missing-value tables for all three group kinds, computed in one sweep over
/// the resolved values.
#[derive(Debug, Clone)]
pub(crate) struct MissingTables {
    pub(crate) rows: GroupSets,
    pub(crate) columns: GroupSets,
    pub(crate) boxes: GroupSets,
}

/// Solver state: the resolved grid plus one candidate set per cell.
///
/// The candidate grid is the working representation; the resolved
/// [`DigitGrid`] is kept in lockstep by the propagation engine, which
/// collapses singleton candidate sets into values after each pass. Boards are
/// plain values: backtracking trials clone them and share nothing with their
/// parent.
///
/// # Examples
///
/// ```
/// use soluko_solver::Board;
///
/// let board = Board::from_rows(&[
///     vec![1, 2, 3, 4],
///     vec![3, 4, 1, 2],
///     vec![2, 1, 4, 3],
///     vec![4, 3, 2, 0],
/// ])?;
///
/// // The one unknown cell starts with the full digit range as candidates.
/// assert_eq!(board.candidates_at(15).len(), 4);
/// # Ok::<(), soluko_solver::SolverError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    grid: DigitGrid,
    candidates: Vec<DigitSet>,
}

impl Board {
    /// Creates a board from a digit grid.
    ///
    /// Fixed cells get singleton candidate sets; unknown cells start with the
    /// full digit range. No deduction happens here — run
    /// [`propagate`](crate::propagate) or [`solve`](crate::solve) for that.
    #[must_use]
    pub fn from_grid(grid: DigitGrid) -> Self {
        let full = grid.geometry().digits();
        let candidates = grid
            .cells()
            .iter()
            .map(|cell| cell.map_or(full, DigitSet::from))
            .collect();
        Self { grid, candidates }
    }

    /// Creates a board from rows of raw values, `0` meaning unknown.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Grid`] if the rows do not form a supported
    /// grid.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, SolverError> {
        Ok(Self::from_grid(DigitGrid::from_rows(rows)?))
    }

    /// Returns the board's geometry.
    #[inline]
    #[must_use]
    pub fn geometry(&self) -> Geometry {
        self.grid.geometry()
    }

    /// Returns the resolved grid.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    /// Consumes the board and returns the resolved grid.
    #[inline]
    #[must_use]
    pub fn into_grid(self) -> DigitGrid {
        self.grid
    }

    /// Returns the flat candidate-set grid.
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[DigitSet] {
        &self.candidates
    }

    /// Returns the candidate set for one cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range.
    #[inline]
    #[must_use]
    pub fn candidates_at(&self, cell: usize) -> DigitSet {
        self.candidates[cell]
    }

    /// Returns the resolved value of one cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range.
    #[inline]
    #[must_use]
    pub fn value(&self, cell: usize) -> Option<Digit> {
        self.grid.get(cell)
    }

    /// Returns, per row, the digits not yet assigned in that row.
    #[must_use]
    pub fn missing_in_rows(&self) -> Vec<DigitSet> {
        let geometry = self.geometry();
        (0..geometry.dim())
            .map(|row| self.group_missing(geometry.row_cells(row)))
            .collect()
    }

    /// Returns, per column, the digits not yet assigned in that column.
    #[must_use]
    pub fn missing_in_columns(&self) -> Vec<DigitSet> {
        let geometry = self.geometry();
        (0..geometry.dim())
            .map(|column| self.group_missing(geometry.column_cells(column)))
            .collect()
    }

    /// Returns, per box, the digits not yet assigned in that box.
    #[must_use]
    pub fn missing_in_boxes(&self) -> Vec<DigitSet> {
        let geometry = self.geometry();
        (0..geometry.dim())
            .map(|box_index| self.group_missing(geometry.box_cells(box_index)))
            .collect()
    }

    /// Returns the cells that still have more than one candidate, with their
    /// candidate sets.
    ///
    /// Useful for diagnostics and for shaping specimen puzzles from a
    /// partially solved board.
    #[must_use]
    pub fn ambiguous_cells(&self) -> Vec<(usize, DigitSet)> {
        self.candidates
            .iter()
            .enumerate()
            .filter(|(_, set)| set.len() > 1)
            .map(|(cell, set)| (cell, *set))
            .collect()
    }

    /// Returns the board's validity score; see [`wrongness`](crate::wrongness).
    #[must_use]
    pub fn wrongness(&self) -> u32 {
        score::wrongness(&self.grid)
    }

    /// Returns `true` if every row, column, and box contains the full digit
    /// range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.wrongness() == 0
    }

    /// Checks that the board is free of outright contradictions.
    ///
    /// A board is consistent when no cell's candidate set has been emptied
    /// and no row, column, or box holds the same resolved value twice.
    /// Unknown cells are fine; this does not require the board to be solved.
    ///
    /// # Errors
    ///
    /// Returns [`SolverError::Contradiction`] for an emptied candidate set,
    /// or [`SolverError::Inconsistent`] for a duplicated value.
    pub fn check_consistency(&self) -> Result<(), SolverError> {
        if let Some(cell) = self.contradicted_cell() {
            return Err(SolverError::Contradiction { cell });
        }
        if self.has_duplicate_values() {
            return Err(SolverError::Inconsistent);
        }
        Ok(())
    }

    pub(crate) fn missing_tables(&self) -> MissingTables {
        MissingTables {
            rows: self.missing_in_rows().into_iter().collect(),
            columns: self.missing_in_columns().into_iter().collect(),
            boxes: self.missing_in_boxes().into_iter().collect(),
        }
    }

    pub(crate) fn set_candidates(&mut self, cell: usize, set: DigitSet) {
        self.candidates[cell] = set;
    }

    pub(crate) fn set_value(&mut self, cell: usize, value: Option<Digit>) {
        self.grid.set(cell, value);
    }

    /// First cell whose candidate set has been emptied, if any.
    pub(crate) fn contradicted_cell(&self) -> Option<usize> {
        self.candidates.iter().position(|set| set.is_empty())
    }

    /// Replaces this board's state with a solved trial's.
    pub(crate) fn adopt(&mut self, trial: Self) {
        self.grid = trial.grid;
        self.candidates = trial.candidates;
    }

    fn has_duplicate_values(&self) -> bool {
        let geometry = self.geometry();
        (0..geometry.dim()).any(|index| {
            self.group_has_duplicate(geometry.row_cells(index))
                || self.group_has_duplicate(geometry.column_cells(index))
                || self.group_has_duplicate(geometry.box_cells(index))
        })
    }

    fn group_has_duplicate(&self, cells: impl Iterator<Item = usize>) -> bool {
        let mut seen = DigitSet::EMPTY;
        for cell in cells {
            if let Some(digit) = self.grid.get(cell)
                && !seen.insert(digit)
            {
                return true;
            }
        }
        false
    }

    fn group_missing(&self, cells: impl Iterator<Item = usize>) -> DigitSet {
        let mut assigned = DigitSet::EMPTY;
        for cell in cells {
            if let Some(digit) = self.grid.get(cell) {
                assigned.insert(digit);
            }
        }
        self.geometry().digits().difference(assigned)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digit_values(set: DigitSet) -> Vec<u8> {
        set.iter().map(Digit::value).collect()
    }

    #[test]
    fn test_initial_candidates() {
        let board = Board::from_rows(&[
            vec![1, 0, 0, 0],
            vec![0; 4],
            vec![0; 4],
            vec![0, 0, 0, 4],
        ])
        .unwrap();
        assert_eq!(digit_values(board.candidates_at(0)), vec![1]);
        assert_eq!(digit_values(board.candidates_at(1)), vec![1, 2, 3, 4]);
        assert_eq!(board.value(15), Some(Digit::new(4)));
    }

    #[test]
    fn test_missing_values() {
        let board = Board::from_rows(&[
            vec![1, 2, 0, 0],
            vec![0, 0, 1, 0],
            vec![0; 4],
            vec![0, 0, 0, 3],
        ])
        .unwrap();

        assert_eq!(digit_values(board.missing_in_rows()[0]), vec![3, 4]);
        assert_eq!(digit_values(board.missing_in_rows()[2]), vec![1, 2, 3, 4]);
        assert_eq!(digit_values(board.missing_in_columns()[2]), vec![2, 3, 4]);
        // Box 0 holds 1 and 2; box 3 holds 3
        assert_eq!(digit_values(board.missing_in_boxes()[0]), vec![3, 4]);
        assert_eq!(digit_values(board.missing_in_boxes()[3]), vec![1, 2, 4]);
    }

    #[test]
    fn test_ambiguous_cells() {
        let board = Board::from_rows(&[
            vec![1, 2, 3, 4],
            vec![3, 4, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 2, 0],
        ])
        .unwrap();
        let ambiguous = board.ambiguous_cells();
        assert_eq!(ambiguous.len(), 1);
        assert_eq!(ambiguous[0].0, 15);
        assert_eq!(ambiguous[0].1.len(), 4);
    }

    #[test]
    fn test_missing_tables_agree_with_queries() {
        let board = Board::from_rows(&[
            vec![0, 2, 0, 0],
            vec![0; 4],
            vec![3, 0, 0, 0],
            vec![0; 4],
        ])
        .unwrap();
        let tables = board.missing_tables();
        assert_eq!(tables.rows.as_slice(), board.missing_in_rows().as_slice());
        assert_eq!(
            tables.columns.as_slice(),
            board.missing_in_columns().as_slice()
        );
        assert_eq!(tables.boxes.as_slice(), board.missing_in_boxes().as_slice());
    }
}

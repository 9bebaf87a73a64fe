use soluko_core::{GeometryError, GridParseError};

/// Errors surfaced by solver entry points.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum SolverError {
    /// The grid geometry is unsupported.
    #[display("{_0}")]
    Geometry(GeometryError),
    /// The initial rows are malformed.
    #[display("{_0}")]
    Grid(GridParseError),
    /// Propagation removed every candidate from a cell.
    ///
    /// During backtracking this marks a trial assignment as rejected; it is
    /// handled inside the search and never escapes [`solve`](crate::solve).
    #[display("cell {cell} has no remaining candidates")]
    #[from(skip)]
    Contradiction {
        /// Flat index of the emptied cell.
        cell: usize,
    },
    /// Two equal resolved values share a row, column, or box.
    ///
    /// Like [`Contradiction`](Self::Contradiction), this rejects a trial
    /// inside the search without escaping it.
    #[display("a row, column, or box holds a duplicate value")]
    Inconsistent,
}

#[cfg(test)]
mod tests {
    use soluko_core::DigitGrid;

    use super::*;
    use crate::Board;

    #[test]
    fn test_grid_errors_convert() {
        let err = Board::from_rows(&[vec![0; 5], vec![0; 5], vec![0; 5], vec![0; 5], vec![0; 5]]).unwrap_err();
        assert_eq!(
            err,
            SolverError::Grid(GridParseError::Geometry(GeometryError::UnsupportedDim {
                dim: 5
            }))
        );

        let err = DigitGrid::from_rows(&[vec![0, 9, 0, 0], vec![0; 4], vec![0; 4], vec![0; 4]])
            .map(Board::from_grid)
            .map_err(SolverError::from)
            .unwrap_err();
        assert!(matches!(err, SolverError::Grid(_)));
    }

    #[test]
    fn test_display() {
        let err = SolverError::Contradiction { cell: 40 };
        assert_eq!(err.to_string(), "cell 40 has no remaining candidates");
    }
}

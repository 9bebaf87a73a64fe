//! Grid geometry: side length, box size, and flat-index math.

use crate::{digit::Digit, digit_set::DigitSet};

/// Grid side lengths this crate supports.
///
/// A side must have an integer square root (boxes are always square) and its
/// digits must fit a [`DigitSet`].
pub const SUPPORTED_DIMS: [u8; 4] = [4, 9, 16, 25];

/// Error returned when a grid side length is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GeometryError {
    /// The side length has no integer square root, or exceeds the digit bound.
    #[display("grid side {dim} is not supported (expected one of 4, 9, 16, 25)")]
    UnsupportedDim {
        /// The rejected side length.
        dim: u8,
    },
}

/// The shape of a square grid: side length `dim` and `box_side = sqrt(dim)`.
///
/// All flat-index math lives here: cell `i` sits in row `i / dim`, column
/// `i % dim`, and box `(row / box_side) * box_side + column / box_side`.
/// Construction rejects side lengths without an integer square root, so a
/// `Geometry` value always describes a well-formed board.
///
/// # Examples
///
/// ```
/// use soluko_core::Geometry;
///
/// let geometry = Geometry::new(9)?;
/// assert_eq!(geometry.box_side(), 3);
/// assert_eq!(geometry.cell_count(), 81);
///
/// // Cell 40 is the center of a 9×9 grid
/// assert_eq!(geometry.row_of(40), 4);
/// assert_eq!(geometry.column_of(40), 4);
/// assert_eq!(geometry.box_of(40), 4);
///
/// assert!(Geometry::new(7).is_err());
/// # Ok::<(), soluko_core::GeometryError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    dim: u8,
    box_side: u8,
}

impl Geometry {
    /// Creates the geometry for a `dim × dim` grid.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::UnsupportedDim`] unless `dim` is one of
    /// [`SUPPORTED_DIMS`].
    pub fn new(dim: u8) -> Result<Self, GeometryError> {
        let box_side = match dim {
            4 => 2,
            9 => 3,
            16 => 4,
            25 => 5,
            _ => return Err(GeometryError::UnsupportedDim { dim }),
        };
        Ok(Self { dim, box_side })
    }

    /// Returns the standard 9×9 geometry.
    #[must_use]
    pub const fn standard() -> Self {
        Self { dim: 9, box_side: 3 }
    }

    /// Returns the grid side length.
    #[inline]
    #[must_use]
    pub const fn dim(self) -> u8 {
        self.dim
    }

    /// Returns the side length of one box.
    #[inline]
    #[must_use]
    pub const fn box_side(self) -> u8 {
        self.box_side
    }

    /// Returns the total number of cells, `dim * dim`.
    #[inline]
    #[must_use]
    pub const fn cell_count(self) -> usize {
        self.dim as usize * self.dim as usize
    }

    /// Returns the full digit range `{1, ..., dim}` every group must contain.
    #[inline]
    #[must_use]
    pub fn digits(self) -> DigitSet {
        DigitSet::full(self.dim)
    }

    /// Returns `true` if the digit is usable on this grid.
    #[inline]
    #[must_use]
    pub const fn in_range(self, digit: Digit) -> bool {
        digit.value() <= self.dim
    }

    /// Returns the row of a flat cell index.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn row_of(self, cell: usize) -> u8 {
        (cell / self.dim as usize) as u8
    }

    /// Returns the column of a flat cell index.
    #[inline]
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn column_of(self, cell: usize) -> u8 {
        (cell % self.dim as usize) as u8
    }

    /// Returns the box of a flat cell index.
    #[inline]
    #[must_use]
    pub const fn box_of(self, cell: usize) -> u8 {
        let row = self.row_of(cell);
        let column = self.column_of(cell);
        (row / self.box_side) * self.box_side + column / self.box_side
    }

    /// Returns the flat cell index at `(row, column)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `column` is out of range.
    #[inline]
    #[must_use]
    pub fn cell_at(self, row: u8, column: u8) -> usize {
        assert!(row < self.dim && column < self.dim);
        row as usize * self.dim as usize + column as usize
    }

    /// Returns an iterator over the flat indices of one row's cells.
    pub fn row_cells(self, row: u8) -> impl Iterator<Item = usize> {
        let dim = self.dim as usize;
        let start = row as usize * dim;
        start..start + dim
    }

    /// Returns an iterator over the flat indices of one column's cells.
    pub fn column_cells(self, column: u8) -> impl Iterator<Item = usize> {
        let dim = self.dim as usize;
        (column as usize..self.cell_count()).step_by(dim)
    }

    /// Returns an iterator over the flat indices of one box's cells.
    pub fn box_cells(self, box_index: u8) -> impl Iterator<Item = usize> {
        let dim = self.dim as usize;
        let side = self.box_side as usize;
        let top = (box_index as usize / side) * side;
        let left = (box_index as usize % side) * side;
        (0..side).flat_map(move |r| {
            let start = (top + r) * dim + left;
            start..start + side
        })
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::standard()
    }
}

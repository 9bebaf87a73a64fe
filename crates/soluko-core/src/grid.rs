//! The resolved digit grid: construction, group views, parsing, rendering.

use std::{fmt, str::FromStr};

use crate::{
    digit::Digit,
    geometry::{Geometry, GeometryError},
};

/// Error returned when a grid cannot be built from rows or parsed from text.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From,
)]
pub enum GridParseError {
    /// The implied side length is not a supported geometry.
    #[display("{_0}")]
    Geometry(GeometryError),
    /// The number of rows cannot be a grid side at all.
    #[display("{actual} rows do not form a supported square grid")]
    #[from(skip)]
    RowCount {
        /// How many rows were supplied.
        actual: usize,
    },
    /// One row has the wrong number of cells.
    #[display("row {row} has {actual} cells, expected {expected}")]
    #[from(skip)]
    RowLength {
        /// Zero-based row index.
        row: usize,
        /// Expected cell count (the grid side).
        expected: usize,
        /// Actual cell count.
        actual: usize,
    },
    /// A cell value is outside `0..=dim`.
    #[display("cell ({row}, {column}) holds {value}, outside 0..={dim}")]
    #[from(skip)]
    ValueRange {
        /// Zero-based row index.
        row: usize,
        /// Zero-based column index.
        column: usize,
        /// The offending value.
        value: u8,
        /// The grid side length.
        dim: u8,
    },
    /// The puzzle text does not contain a supported number of cells.
    #[display("puzzle text has {count} cells, expected 16 or 81")]
    #[from(skip)]
    CellCount {
        /// How many cell tokens were found.
        count: usize,
    },
    /// The puzzle text contains a character that is not a cell or decoration.
    #[display("unexpected character {found:?} in puzzle text")]
    #[from(skip)]
    UnexpectedChar {
        /// The offending character.
        found: char,
    },
}

/// A square grid of resolved digits, with `None` marking unknown cells.
///
/// Cells are stored flat in row-major order; `rows`, `columns`, and `boxes`
/// views are derived on demand from the same storage, so they can never fall
/// out of sync.
///
/// # Text format
///
/// [`FromStr`] reads one character per cell: digits stand for themselves and
/// `0`, `.`, or `_` mark an unknown cell. Whitespace and the `|`/`-`/`+`
/// decoration emitted by [`Display`] are ignored, so a rendered grid parses
/// back. Sides whose digits need more than one character (16, 25) can only be
/// built through [`DigitGrid::from_rows`].
///
/// # Examples
///
/// ```
/// use soluko_core::DigitGrid;
///
/// let grid: DigitGrid = "
///     53_ _7_ ___
///     6__ 195 ___
///     _98 ___ _6_
///     8__ _6_ __3
///     4__ 8_3 __1
///     7__ _2_ __6
///     _6_ ___ 28_
///     ___ 419 __5
///     ___ _8_ _79
/// "
/// .parse()?;
///
/// assert_eq!(grid.geometry().dim(), 9);
/// assert_eq!(grid.unknown_count(), 51);
/// # Ok::<(), soluko_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    geometry: Geometry,
    cells: Vec<Option<Digit>>,
}

impl DigitGrid {
    /// Creates a grid with every cell unknown.
    #[must_use]
    pub fn empty(geometry: Geometry) -> Self {
        Self {
            geometry,
            cells: vec![None; geometry.cell_count()],
        }
    }

    /// Builds a grid from rows of raw values, `0` meaning unknown.
    ///
    /// The side length is taken from `rows.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`GridParseError`] if the row count is not a supported side,
    /// a row has the wrong length, or a value is outside `0..=dim`.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, GridParseError> {
        let Ok(dim) = u8::try_from(rows.len()) else {
            return Err(GridParseError::RowCount { actual: rows.len() });
        };
        let geometry = Geometry::new(dim)?;
        let mut cells = Vec::with_capacity(geometry.cell_count());
        for (row, values) in rows.iter().enumerate() {
            if values.len() != dim as usize {
                return Err(GridParseError::RowLength {
                    row,
                    expected: dim as usize,
                    actual: values.len(),
                });
            }
            for (column, &value) in values.iter().enumerate() {
                if value == 0 {
                    cells.push(None);
                    continue;
                }
                match Digit::try_new(value) {
                    Some(digit) if geometry.in_range(digit) => cells.push(Some(digit)),
                    _ => {
                        return Err(GridParseError::ValueRange {
                            row,
                            column,
                            value,
                            dim,
                        });
                    }
                }
            }
        }
        Ok(Self { geometry, cells })
    }

    /// Returns the grid's geometry.
    #[inline]
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Returns the cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range.
    #[inline]
    #[must_use]
    pub fn get(&self, cell: usize) -> Option<Digit> {
        self.cells[cell]
    }

    /// Sets the cell at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is out of range, or if the digit is too large for
    /// this grid's side.
    #[inline]
    pub fn set(&mut self, cell: usize, value: Option<Digit>) {
        if let Some(digit) = value {
            assert!(
                self.geometry.in_range(digit),
                "digit {digit} is out of range for a {}-grid",
                self.geometry.dim()
            );
        }
        self.cells[cell] = value;
    }

    /// Returns all cells in row-major order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[Option<Digit>] {
        &self.cells
    }

    /// Returns the rows view.
    #[must_use]
    pub fn rows(&self) -> Vec<Vec<Option<Digit>>> {
        self.group_view(|row| self.geometry.row_cells(row).collect())
    }

    /// Returns the columns view.
    #[must_use]
    pub fn columns(&self) -> Vec<Vec<Option<Digit>>> {
        self.group_view(|column| self.geometry.column_cells(column).collect())
    }

    /// Returns the boxes view, left to right, top to bottom.
    #[must_use]
    pub fn boxes(&self) -> Vec<Vec<Option<Digit>>> {
        self.group_view(|box_index| self.geometry.box_cells(box_index).collect())
    }

    /// Returns the rows as raw values, `0` meaning unknown.
    ///
    /// This is the interchange format accepted by [`DigitGrid::from_rows`].
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.geometry.dim())
            .map(|row| {
                self.geometry
                    .row_cells(row)
                    .map(|cell| self.cells[cell].map_or(0, Digit::value))
                    .collect()
            })
            .collect()
    }

    /// Returns how many cells are unknown.
    #[must_use]
    pub fn unknown_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns `true` if every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    fn group_view(&self, cells_of: impl Fn(u8) -> Vec<usize>) -> Vec<Vec<Option<Digit>>> {
        (0..self.geometry.dim())
            .map(|index| cells_of(index).into_iter().map(|cell| self.cells[cell]).collect())
            .collect()
    }
}

impl FromStr for DigitGrid {
    type Err = GridParseError;

    #[expect(clippy::cast_possible_truncation)]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut values = Vec::new();
        for c in s.chars() {
            match c {
                '1'..='9' => values.push(c as u8 - b'0'),
                '0' | '.' | '_' => values.push(0),
                '|' | '-' | '+' => {}
                c if c.is_whitespace() => {}
                c => return Err(GridParseError::UnexpectedChar { found: c }),
            }
        }
        let dim = match values.len() {
            16 => 4,
            81 => 9,
            count => return Err(GridParseError::CellCount { count }),
        };
        let rows: Vec<Vec<u8>> = values.chunks(dim).map(<[u8]>::to_vec).collect();
        Self::from_rows(&rows)
    }
}

impl fmt::Display for DigitGrid {
    /// Renders the grid in a fixed-width boxed layout.
    ///
    /// Unknown cells render as `0`; box boundaries are drawn with ` | ` and a
    /// dashed line every `box_side` columns and rows.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dim = self.geometry.dim() as usize;
        let box_side = self.geometry.box_side() as usize;
        let width = if dim > 9 { 2 } else { 1 };
        let line_len = dim * width + (dim - 1) + 2 * (box_side - 1);
        for row in 0..dim {
            if row > 0 {
                writeln!(f)?;
                if row % box_side == 0 {
                    writeln!(f, "{}", "-".repeat(line_len))?;
                }
            }
            for column in 0..dim {
                if column > 0 {
                    if column % box_side == 0 {
                        write!(f, " | ")?;
                    } else {
                        write!(f, " ")?;
                    }
                }
                let cell = self.cells[row * dim + column];
                let value = cell.map_or(0, Digit::value);
                write!(f, "{value:>width$}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_grid() -> DigitGrid {
        DigitGrid::from_rows(&[
            vec![1, 2, 3, 4],
            vec![3, 0, 1, 2],
            vec![2, 1, 4, 3],
            vec![4, 3, 0, 1],
        ])
        .unwrap()
    }

    #[test]
    fn test_from_rows_and_views() {
        let grid = small_grid();
        assert_eq!(grid.geometry().dim(), 4);
        assert_eq!(grid.get(0), Some(Digit::new(1)));
        assert_eq!(grid.get(5), None);

        let rows = grid.rows();
        assert_eq!(rows[2][3], Some(Digit::new(3)));
        let columns = grid.columns();
        assert_eq!(columns[3][2], Some(Digit::new(3)));
        let boxes = grid.boxes();
        // Box 1 covers rows 0-1, columns 2-3
        assert_eq!(
            boxes[1],
            vec![
                Some(Digit::new(3)),
                Some(Digit::new(4)),
                Some(Digit::new(1)),
                Some(Digit::new(2)),
            ]
        );
    }

    #[test]
    fn test_to_rows_round_trip() {
        let grid = small_grid();
        let rows = grid.to_rows();
        assert_eq!(rows[1], vec![3, 0, 1, 2]);
        assert_eq!(DigitGrid::from_rows(&rows).unwrap(), grid);
    }

    #[test]
    fn test_from_rows_errors() {
        assert_eq!(
            DigitGrid::from_rows(&[vec![0; 5], vec![0; 5], vec![0; 5], vec![0; 5], vec![0; 5]]),
            Err(GridParseError::Geometry(GeometryError::UnsupportedDim {
                dim: 5
            }))
        );
        assert_eq!(
            DigitGrid::from_rows(&[vec![0; 4], vec![0; 3], vec![0; 4], vec![0; 4]]),
            Err(GridParseError::RowLength {
                row: 1,
                expected: 4,
                actual: 3
            })
        );
        assert_eq!(
            DigitGrid::from_rows(&[
                vec![0, 0, 0, 0],
                vec![0, 5, 0, 0],
                vec![0; 4],
                vec![0; 4]
            ]),
            Err(GridParseError::ValueRange {
                row: 1,
                column: 1,
                value: 5,
                dim: 4
            })
        );
    }

    #[test]
    fn test_parse_text() {
        let grid: DigitGrid = "12.4 .... 4321 ...."
            .parse()
            .unwrap();
        assert_eq!(grid.geometry().dim(), 4);
        assert_eq!(grid.get(2), None);
        assert_eq!(grid.get(8), Some(Digit::new(4)));

        assert_eq!(
            "123".parse::<DigitGrid>(),
            Err(GridParseError::CellCount { count: 3 })
        );
        assert_eq!(
            "x".parse::<DigitGrid>(),
            Err(GridParseError::UnexpectedChar { found: 'x' })
        );
    }

    #[test]
    fn test_display_layout() {
        let expected = "\
1 2 | 3 4
3 0 | 1 2
---------
2 1 | 4 3
4 3 | 0 1";
        assert_eq!(small_grid().to_string(), expected);
    }

    #[test]
    fn test_display_parses_back() {
        let grid = small_grid();
        let reparsed: DigitGrid = grid.to_string().parse().unwrap();
        // Unknown cells render as 0 and parse back as unknown
        assert_eq!(reparsed, grid);
    }

    #[test]
    fn test_unknown_count_and_completeness() {
        let grid = small_grid();
        assert_eq!(grid.unknown_count(), 2);
        assert!(!grid.is_complete());

        let mut filled = grid.clone();
        filled.set(5, Some(Digit::new(4)));
        filled.set(14, Some(Digit::new(2)));
        assert!(filled.is_complete());
    }

    #[test]
    #[should_panic(expected = "out of range for a 4-grid")]
    fn test_set_rejects_oversized_digit() {
        let mut grid = small_grid();
        grid.set(0, Some(Digit::new(5)));
    }
}

//! Synthetic specimen generation.
//!
//! A specimen is a `(problem, solution)` pair produced deterministically from
//! a textual seed: the seed phrase is hashed into a PCG stream, a complete
//! valid grid is built from a canonical pattern randomized by digit
//! relabeling and band/stack-preserving shuffles, and the requested number of
//! cells is blanked. Re-running with the same seed reproduces the specimen
//! bit for bit.

use rand::{SeedableRng as _, seq::SliceRandom as _};
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};
use soluko_core::{Digit, DigitGrid, DigitSet, Geometry};

/// Errors from specimen construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SpecimenError {
    /// More blanks were requested than cells are available.
    #[display("{requested} blanks requested but only {available} cells available")]
    TooManyBlanks {
        /// Requested number of blanks.
        requested: usize,
        /// Cells (or cells per row) available to blank.
        available: usize,
    },
    /// A per-row blank shape does not have one entry per row.
    #[display("expected {expected} per-row blank counts, got {actual}")]
    RowCountMismatch {
        /// The grid side length.
        expected: usize,
        /// How many counts were supplied.
        actual: usize,
    },
    /// The value stack ran out before every unknown cell was filled.
    #[display("value stack exhausted at cell {cell}")]
    StackExhausted {
        /// Flat index of the first unfilled cell.
        cell: usize,
    },
    /// A stack value is too large for the grid.
    #[display("stack value {value} at cell {cell} is out of range for a {dim}-grid")]
    DigitOutOfRange {
        /// Flat index of the cell being filled.
        cell: usize,
        /// The offending value.
        value: u8,
        /// The grid side length.
        dim: u8,
    },
}

/// A generated puzzle: the blanked problem, its source solution, and the seed
/// that produced both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSpecimen {
    /// The puzzle with cells blanked out.
    pub problem: DigitGrid,
    /// The complete grid the problem was carved from.
    pub solution: DigitGrid,
    /// The seed phrase used.
    pub seed: String,
}

/// Deterministic specimen generator.
///
/// # Examples
///
/// ```
/// use soluko_specimen::SpecimenGenerator;
///
/// let generator = SpecimenGenerator::new("release-check");
/// let a = generator.generate(32)?;
/// let b = generator.generate(32)?;
/// assert_eq!(a, b); // same seed, same specimen
/// # Ok::<(), soluko_specimen::SpecimenError>(())
/// ```
#[derive(Debug, Clone)]
pub struct SpecimenGenerator {
    geometry: Geometry,
    seed: String,
}

impl SpecimenGenerator {
    /// Creates a generator for the standard 9×9 geometry.
    #[must_use]
    pub fn new(seed: impl Into<String>) -> Self {
        Self::with_geometry(Geometry::standard(), seed)
    }

    /// Creates a generator for an explicit geometry.
    #[must_use]
    pub fn with_geometry(geometry: Geometry, seed: impl Into<String>) -> Self {
        Self {
            geometry,
            seed: seed.into(),
        }
    }

    /// Generates a specimen with `blanks` cells removed, spread over the
    /// whole grid.
    ///
    /// # Errors
    ///
    /// Returns [`SpecimenError::TooManyBlanks`] if `blanks` exceeds the cell
    /// count.
    pub fn generate(&self, blanks: usize) -> Result<GeneratedSpecimen, SpecimenError> {
        let mut rng = self.rng();
        let solution = random_solution(self.geometry, &mut rng);
        let cell_count = self.geometry.cell_count();
        if blanks > cell_count {
            return Err(SpecimenError::TooManyBlanks {
                requested: blanks,
                available: cell_count,
            });
        }
        let mut cells: Vec<usize> = (0..cell_count).collect();
        cells.shuffle(&mut rng);
        let mut problem = solution.clone();
        for &cell in &cells[..blanks] {
            problem.set(cell, None);
        }
        Ok(self.specimen(problem, solution))
    }

    /// Generates a specimen with an explicit number of blanks in each row.
    ///
    /// This is the shape produced by [`blank_counts`] over per-row
    /// missing-value sets.
    ///
    /// # Errors
    ///
    /// Returns [`SpecimenError::RowCountMismatch`] if `blanks` does not have
    /// one entry per row, or [`SpecimenError::TooManyBlanks`] if an entry
    /// exceeds the row length.
    pub fn generate_with_row_blanks(
        &self,
        blanks: &[usize],
    ) -> Result<GeneratedSpecimen, SpecimenError> {
        let dim = self.geometry.dim() as usize;
        if blanks.len() != dim {
            return Err(SpecimenError::RowCountMismatch {
                expected: dim,
                actual: blanks.len(),
            });
        }
        if let Some(&requested) = blanks.iter().find(|&&count| count > dim) {
            return Err(SpecimenError::TooManyBlanks {
                requested,
                available: dim,
            });
        }

        let mut rng = self.rng();
        let solution = random_solution(self.geometry, &mut rng);
        let mut problem = solution.clone();
        for (row, &count) in blanks.iter().enumerate() {
            let mut columns: Vec<usize> = (0..dim).collect();
            columns.shuffle(&mut rng);
            for &column in &columns[..count] {
                problem.set(row * dim + column, None);
            }
        }
        Ok(self.specimen(problem, solution))
    }

    fn specimen(&self, problem: DigitGrid, solution: DigitGrid) -> GeneratedSpecimen {
        GeneratedSpecimen {
            problem,
            solution,
            seed: self.seed.clone(),
        }
    }

    fn rng(&self) -> Pcg64 {
        let digest = Sha256::digest(self.seed.as_bytes());
        Pcg64::from_seed(digest.into())
    }
}

/// Builds a complete valid grid: a canonical cyclic pattern, relabeled with a
/// random digit permutation, with rows and columns shuffled within (and
/// across) their bands and stacks.
fn random_solution(geometry: Geometry, rng: &mut Pcg64) -> DigitGrid {
    let dim = geometry.dim() as usize;
    let side = geometry.box_side() as usize;

    let mut digits: Vec<u8> = (1..=geometry.dim()).collect();
    digits.shuffle(rng);
    let row_order = shuffled_band_order(dim, side, rng);
    let column_order = shuffled_band_order(dim, side, rng);

    let mut grid = DigitGrid::empty(geometry);
    for (r, &source_row) in row_order.iter().enumerate() {
        for (c, &source_column) in column_order.iter().enumerate() {
            let pattern = (source_row * side + source_row / side + source_column) % dim;
            grid.set(r * dim + c, Some(Digit::new(digits[pattern])));
        }
    }
    grid
}

/// A permutation of `0..dim` that shuffles whole bands and members within
/// each band, preserving box structure.
fn shuffled_band_order(dim: usize, side: usize, rng: &mut Pcg64) -> Vec<usize> {
    let mut bands: Vec<usize> = (0..side).collect();
    bands.shuffle(rng);
    let mut order = Vec::with_capacity(dim);
    for &band in &bands {
        let mut members: Vec<usize> = (0..side).map(|i| band * side + i).collect();
        members.shuffle(rng);
        order.extend(members);
    }
    order
}

/// Fills unknown cells, in cell order, by popping values off the back of a
/// stack.
///
/// # Errors
///
/// Returns [`SpecimenError::StackExhausted`] if the stack runs out, or
/// [`SpecimenError::DigitOutOfRange`] if a popped value does not fit the
/// grid.
pub fn fill_from_stack(
    grid: &DigitGrid,
    values: &mut Vec<Digit>,
) -> Result<DigitGrid, SpecimenError> {
    let geometry = grid.geometry();
    let mut filled = grid.clone();
    for cell in 0..geometry.cell_count() {
        if filled.get(cell).is_some() {
            continue;
        }
        let Some(digit) = values.pop() else {
            return Err(SpecimenError::StackExhausted { cell });
        };
        if !geometry.in_range(digit) {
            return Err(SpecimenError::DigitOutOfRange {
                cell,
                value: digit.value(),
                dim: geometry.dim(),
            });
        }
        filled.set(cell, Some(digit));
    }
    Ok(filled)
}

/// Derives per-group blank counts from missing-value sets.
///
/// Feeding the result of a solver's per-row missing-value query into
/// [`SpecimenGenerator::generate_with_row_blanks`] yields a fresh puzzle with
/// the same blank shape as the source board.
#[must_use]
pub fn blank_counts(missing: &[DigitSet]) -> Vec<usize> {
    missing.iter().map(|set| set.len()).collect()
}

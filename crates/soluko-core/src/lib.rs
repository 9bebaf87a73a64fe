//! Core data structures for the Soluko sudoku toolkit.
//!
//! This crate provides the representation layer shared by the solving,
//! specimen-generation, and command line components:
//!
//! - [`digit`]: validated digit values
//! - [`digit_set`]: fixed-width bitsets of digits with O(1) set operations
//! - [`geometry`]: grid side/box geometry and flat-index math
//! - [`grid`]: the resolved digit grid, with text parsing and boxed rendering
//!
//! Unknown cells are represented as `Option::<Digit>::None` throughout; there
//! is no in-band sentinel value.
//!
//! # Examples
//!
//! ```
//! use soluko_core::{Digit, DigitGrid, DigitSet, Geometry};
//!
//! let geometry = Geometry::standard();
//! assert_eq!(geometry.dim(), 9);
//! assert_eq!(geometry.box_side(), 3);
//!
//! let mut grid = DigitGrid::empty(geometry);
//! grid.set(0, Some(Digit::new(5)));
//! assert_eq!(grid.get(0), Some(Digit::new(5)));
//!
//! let mut candidates = DigitSet::full(9);
//! candidates.remove(Digit::new(5));
//! assert_eq!(candidates.len(), 8);
//! ```

pub mod digit;
pub mod digit_set;
pub mod geometry;
pub mod grid;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    geometry::{Geometry, GeometryError},
    grid::{DigitGrid, GridParseError},
};

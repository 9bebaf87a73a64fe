//! The Soluko solving engine.
//!
//! Solving proceeds in two phases. [`propagate`] refines per-cell candidate
//! sets against row/column/box missing-value tables (including hidden-single
//! deductions) until the validity score stops improving. If deduction stalls
//! short of a full solution, [`solve`] branches on the most constrained cell
//! and recursively tries each of its candidates on a cloned board, adopting
//! the first trial that validates completely.
//!
//! # Examples
//!
//! ```
//! use soluko_solver::{Board, solve};
//!
//! let grid = "
//!     53_ _7_ ___
//!     6__ 195 ___
//!     _98 ___ _6_
//!     8__ _6_ __3
//!     4__ 8_3 __1
//!     7__ _2_ __6
//!     _6_ ___ 28_
//!     ___ 419 __5
//!     ___ _8_ _79
//! "
//! .parse()?;
//!
//! let mut board = Board::from_grid(grid);
//! assert!(solve(&mut board).is_solved());
//! assert!(board.is_valid());
//! # Ok::<(), soluko_core::GridParseError>(())
//! ```

pub use self::{
    board::Board,
    error::SolverError,
    propagate::propagate,
    score::{is_valid, wrongness},
    search::{Outcome, solve},
};

mod board;
mod error;
mod propagate;
mod resolver;
mod score;
mod search;

#[cfg(test)]
mod testing;

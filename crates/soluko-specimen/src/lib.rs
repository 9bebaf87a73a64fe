//! Puzzle ingestion and synthetic specimen generation.
//!
//! This crate holds the data transforms around the solving engine: turning
//! raw text lines into [`DigitGrid`](soluko_core::DigitGrid)s, and producing
//! deterministic synthetic puzzles ("specimens") for tests, benchmarks, and
//! demos. None of it contains solving logic.
//!
//! # Examples
//!
//! ```
//! use soluko_specimen::SpecimenGenerator;
//!
//! let generator = SpecimenGenerator::new("weekly");
//! let specimen = generator.generate(40)?;
//!
//! assert_eq!(specimen.problem.unknown_count(), 40);
//! assert!(specimen.solution.is_complete());
//! # Ok::<(), soluko_specimen::SpecimenError>(())
//! ```

pub use self::{
    generate::{GeneratedSpecimen, SpecimenError, SpecimenGenerator, blank_counts, fill_from_stack},
    ingest::{parse_lines, parse_text},
};

mod generate;
mod ingest;

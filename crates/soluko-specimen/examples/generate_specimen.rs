//! Example demonstrating deterministic specimen generation.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_specimen
//! ```
//!
//! Pick a seed and blank count:
//!
//! ```sh
//! cargo run --example generate_specimen -- --seed weekly --blanks 48
//! ```
//!
//! Generate for a non-standard grid side:
//!
//! ```sh
//! cargo run --example generate_specimen -- --dim 4 --blanks 6
//! ```

use std::process;

use clap::Parser;
use soluko_core::Geometry;
use soluko_specimen::SpecimenGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed phrase for the deterministic generator.
    #[arg(long, default_value = "soluko")]
    seed: String,

    /// Number of cells to blank out.
    #[arg(long, default_value_t = 40)]
    blanks: usize,

    /// Grid side length (4, 9, 16, or 25).
    #[arg(long, default_value_t = 9)]
    dim: u8,
}

fn main() {
    let args = Args::parse();
    let geometry = match Geometry::new(args.dim) {
        Ok(geometry) => geometry,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };

    let generator = SpecimenGenerator::with_geometry(geometry, args.seed);
    let specimen = match generator.generate(args.blanks) {
        Ok(specimen) => specimen,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    println!("Seed:");
    println!("  {}", specimen.seed);
    println!();
    println!("Problem:");
    println!("{}", specimen.problem);
    println!();
    println!("Solution:");
    println!("{}", specimen.solution);
}

//! The `soluko` command line tool: solve puzzles, generate specimens.

use std::{
    error::Error,
    fs,
    io::Read as _,
    path::PathBuf,
    process,
    time::Instant,
};

use clap::{Parser, Subcommand};
use soluko_core::{DigitGrid, Geometry};
use soluko_solver::{Board, Outcome, solve};
use soluko_specimen::SpecimenGenerator;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Solve a puzzle read from a file, or from stdin when no file is given.
    Solve {
        /// Puzzle file (digits; `0`, `.`, or `_` for unknown cells).
        path: Option<PathBuf>,
    },
    /// Generate a deterministic specimen puzzle.
    Specimen {
        /// Seed phrase for the generator.
        #[arg(long, default_value = "soluko")]
        seed: String,

        /// Number of cells to blank out.
        #[arg(long, default_value_t = 40)]
        blanks: usize,

        /// Grid side length (4, 9, 16, or 25).
        #[arg(long, default_value_t = 9)]
        dim: u8,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        process::exit(2);
    }
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    match args.command {
        Command::Solve { path } => run_solve(path),
        Command::Specimen { seed, blanks, dim } => run_specimen(seed, blanks, dim),
    }
}

fn run_solve(path: Option<PathBuf>) -> Result<(), Box<dyn Error>> {
    let text = match path {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    let grid: DigitGrid = text.parse()?;
    log::info!(
        "solving a {0}x{0} puzzle with {1} unknown cells",
        grid.geometry().dim(),
        grid.unknown_count()
    );

    let mut board = Board::from_grid(grid);
    let start = Instant::now();
    let outcome = solve(&mut board);
    log::info!("search finished in {:.2?}", start.elapsed());

    println!("{}", board.grid());
    match outcome {
        Outcome::Solved => Ok(()),
        Outcome::Unsolved { wrongness } => {
            eprintln!("no complete solution found (validity score {wrongness})");
            process::exit(1);
        }
    }
}

fn run_specimen(seed: String, blanks: usize, dim: u8) -> Result<(), Box<dyn Error>> {
    let geometry = Geometry::new(dim)?;
    let generator = SpecimenGenerator::with_geometry(geometry, seed);
    let specimen = generator.generate(blanks)?;

    println!("Seed:");
    println!("  {}", specimen.seed);
    println!();
    println!("Problem:");
    println!("{}", specimen.problem);
    println!();
    println!("Solution:");
    println!("{}", specimen.solution);
    Ok(())
}

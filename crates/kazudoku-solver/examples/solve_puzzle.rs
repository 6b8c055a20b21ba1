//! Example demonstrating the full solve pipeline on a puzzle from the
//! command line.
//!
//! Parses a grid, rejects contradictory givens up front, runs the
//! exhaustive search, and prints every solution with its solving trace.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- "
//!     _4_ 8__ 2__
//!     53_ ___ __4
//!     8__ 5_9 _1_
//!     2__ ___ _45
//!     49_ ___ 83_
//!     ___ ___ 1_6
//!     3__ _2_ 5__
//!     1__ _6_ _2_
//!     _6_ __5 3__
//! "
//! ```
//!
//! Read the grid from a file instead:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --file puzzle.txt
//! ```
//!
//! Set `RUST_LOG=debug` to watch the search bifurcate.

use std::{fs, path::PathBuf, process};

use clap::Parser;
use kazudoku_core::PuzzleGrid;
use kazudoku_solver::BacktrackingSolver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The puzzle: 81 cells in row-major order. Digits fill cells;
    /// `.`, `_`, and `0` mark empty cells; whitespace is ignored.
    #[arg(value_name = "GRID", required_unless_present = "file")]
    grid: Option<String>,

    /// Read the puzzle from a file instead.
    #[arg(short, long, value_name = "PATH", conflicts_with = "grid")]
    file: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let text = match (args.grid, args.file) {
        (Some(grid), None) => grid,
        (None, Some(path)) => match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                eprintln!("Cannot read {}: {err}", path.display());
                process::exit(2);
            }
        },
        _ => unreachable!("clap enforces exactly one input source"),
    };

    let puzzle: PuzzleGrid = match text.parse() {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("Cannot parse puzzle: {err}");
            process::exit(2);
        }
    };
    if let Err(err) = puzzle.check_givens() {
        eprintln!("Rejecting puzzle: {err}");
        process::exit(2);
    }

    println!("Puzzle:");
    println!("{puzzle}");
    println!();

    let outcome = BacktrackingSolver::new().solve(&puzzle);
    if outcome.solutions().is_empty() {
        println!("No solutions.");
        process::exit(1);
    }

    let how = if outcome.backtracking_needed() {
        "backtracking required"
    } else {
        "solved by deduction alone"
    };
    println!("{} solution(s), {how}", outcome.solutions().len());

    for (i, solution) in outcome.solutions().iter().enumerate() {
        println!();
        println!("Solution {}:", i + 1);
        println!("{}", solution.grid());
        println!("Trace:");
        for step in solution.steps() {
            println!("  {step}");
        }
    }
}

//! Hanoi CLI - Binary entry point.
//!
//! Reads a disk count (from the command line, or by prompting on stdin),
//! solves the puzzle from tower A to tower C, and prints a numbered snapshot
//! of all three towers before the first move and after every move.
//!
//! ```text
//! main() -> RunConfig::resolve() -> run() -> Puzzle::new + Transcript + solve()
//! ```
//!
//! # Exit codes
//!
//! - `0`: solved
//! - `1`: output or other runtime failure
//! - `2`: invalid input (bad disk count, unreadable stdin, rejected solver input)
//! - `3`: tower storage could not be allocated

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use hanoi_core::{
    InputError, Puzzle, PuzzleError, SolveError, Transcript, parse_disk_count, prompt_disk_count,
    solve,
};
use hanoi_types::{DiskCount, DiskCountError};

const EXIT_FAILURE: u8 = 1;
const EXIT_INVALID_INPUT: u8 = 2;
const EXIT_ALLOCATION_FAILED: u8 = 3;

#[derive(Debug, Parser)]
#[command(name = "hanoi")]
#[command(about = "Solve the Tower of Hanoi and print the towers after every move")]
struct Cli {
    /// Number of disks; prompted for on stdin when omitted
    #[arg(allow_negative_numbers = true)]
    disks: Option<String>,
    /// Print only a one-line summary instead of every snapshot
    #[arg(long, short)]
    quiet: bool,
}

/// Settings for one run, resolved from the command line and stdin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct RunConfig {
    disk_count: DiskCount,
    quiet: bool,
}

impl RunConfig {
    fn resolve(cli: Cli) -> Result<Self> {
        let disk_count = match cli.disks.as_deref() {
            Some(raw) => parse_disk_count(raw)?,
            None => {
                let stdin = io::stdin();
                let mut input = stdin.lock();
                let mut out = io::stdout().lock();
                prompt_disk_count(&mut input, &mut out)?
            }
        };
        Ok(Self {
            disk_count,
            quiet: cli.quiet,
        })
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("warn"))
        .unwrap_or_else(|_| EnvFilter::try_new("error").expect("error filter is valid"));

    // Diagnostics go to stderr so stdout carries only the transcript.
    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(io::stderr))
        .with(env_filter)
        .init();
}

fn run(config: &RunConfig) -> Result<()> {
    let mut puzzle = Puzzle::new(config.disk_count)?;

    let out = BufWriter::new(io::stdout().lock());
    let mut transcript = if config.quiet {
        Transcript::quiet(out)
    } else {
        Transcript::new(out)
    };

    transcript
        .snapshot(&puzzle)
        .context("failed to write initial snapshot")?;
    let report = solve(&mut puzzle, &mut transcript)?;
    let mut out = transcript.finish().context("failed to write snapshots")?;

    if config.quiet {
        writeln!(
            out,
            "Solved {} disks in {} moves.",
            config.disk_count, report.moves
        )?;
        out.flush()?;
    }

    tracing::debug!(
        disks = %config.disk_count,
        moves = report.moves,
        solved = puzzle.is_solved(),
        "Run complete"
    );
    Ok(())
}

fn exit_code_for(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<PuzzleError>().is_some() {
        EXIT_ALLOCATION_FAILED
    } else if err.downcast_ref::<InputError>().is_some()
        || err.downcast_ref::<DiskCountError>().is_some()
        || err.downcast_ref::<SolveError>().is_some()
    {
        EXIT_INVALID_INPUT
    } else {
        EXIT_FAILURE
    }
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse();
    match RunConfig::resolve(cli).and_then(|config| run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code_for(&err))
        }
    }
}

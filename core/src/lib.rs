//! Core domain logic for Hanoi.
//!
//! This crate holds the puzzle state, the recursive solver, the snapshot
//! transcript used for display, and parsing of the disk count. The binary
//! in `cli/` only wires these together.

pub mod input;
mod puzzle;
pub mod solver;
mod transcript;

pub use input::{InputError, parse_disk_count, prompt_disk_count};
pub use puzzle::{MoveOutcome, Puzzle, PuzzleError};
pub use solver::{IgnoreMoves, MoveObserver, SolveError, SolveReport, solve, solve_with_roles};
pub use transcript::{Transcript, write_snapshot};

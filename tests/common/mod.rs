//! Shared test utilities and fixtures
//!
//! Common helpers for building puzzles and recording solver runs.

#![allow(dead_code)]

use hanoi_core::{Puzzle, SolveReport, solve};
use hanoi_types::{Disk, DiskCount, Move, Peg, TowerId};

pub fn count(n: u32) -> DiskCount {
    DiskCount::new(n).expect("test disk count is valid")
}

pub fn puzzle(n: u32) -> Puzzle {
    Puzzle::new(count(n)).expect("puzzle allocation")
}

pub fn disk(size: u32) -> Disk {
    Disk::new(size).expect("test disk size is non-zero")
}

/// Builds a peg from sizes listed bottom to top.
pub fn peg_of(bottom_to_top: &[u32]) -> Peg {
    let mut peg = Peg::new();
    for &size in bottom_to_top {
        peg.push(disk(size));
    }
    peg
}

/// Sizes on a peg, top to bottom.
pub fn sizes(peg: &Peg) -> Vec<u32> {
    peg.iter().map(Disk::size).collect()
}

/// Every disk size present in the puzzle, sorted.
pub fn all_sizes(puzzle: &Puzzle) -> Vec<u32> {
    let mut all: Vec<u32> = puzzle.pegs().flat_map(|(_, peg)| sizes(peg)).collect();
    all.sort_unstable();
    all
}

/// Solves an `n`-disk puzzle and returns the final state, report, and moves.
pub fn record_solve(n: u32) -> (Puzzle, SolveReport, Vec<Move>) {
    let mut puzzle = puzzle(n);
    let mut moves = Vec::new();
    let report = solve(&mut puzzle, &mut |mv: &Move, _: &Puzzle| moves.push(*mv))
        .expect("fresh puzzle is valid solver input");
    (puzzle, report, moves)
}

pub fn route(moves: &[Move]) -> Vec<(TowerId, TowerId)> {
    moves.iter().map(|mv| (mv.from, mv.to)).collect()
}

//! Recursive Tower of Hanoi solver.
//!
//! The recursion is driven by a frontier count `k`: the number of disks still
//! stacked below the one currently being moved. With `k == 0` a single move
//! is made; otherwise the `k` smaller disks are parked on the helper, one disk
//! moves, and the parked disks follow it. Recursion depth equals the disk
//! count, so stack use grows linearly with it.

use thiserror::Error;

use hanoi_types::{DiskCount, Move, Roles, TowerId};

use crate::puzzle::{MoveOutcome, Puzzle};

/// Receives every successful move, after the puzzle has been updated.
pub trait MoveObserver {
    fn on_move(&mut self, mv: &Move, puzzle: &Puzzle);
}

impl<F> MoveObserver for F
where
    F: FnMut(&Move, &Puzzle),
{
    fn on_move(&mut self, mv: &Move, puzzle: &Puzzle) {
        self(mv, puzzle);
    }
}

/// Observer that ignores every move.
#[derive(Debug, Clone, Copy, Default)]
pub struct IgnoreMoves;

impl MoveObserver for IgnoreMoves {
    fn on_move(&mut self, _mv: &Move, _puzzle: &Puzzle) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SolveReport {
    /// Successful single-disk moves.
    pub moves: u64,
    /// Move attempts refused by the legality check. Zero for a sound run.
    pub rejected: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error(
        "invalid input: source ({}), destination ({}) and helper ({}) must be different towers",
        .roles.source, .roles.destination, .roles.helper
    )]
    DuplicateRoles { roles: Roles },
    #[error("invalid input: {tower} must hold all {expected} disks in order, with the other towers empty")]
    NotInitialState { tower: TowerId, expected: DiskCount },
}

/// Solves a puzzle from tower A to tower C, using B as the helper.
pub fn solve<O>(puzzle: &mut Puzzle, observer: &mut O) -> Result<SolveReport, SolveError>
where
    O: MoveObserver + ?Sized,
{
    solve_with_roles(puzzle, Roles::CLASSIC, observer)
}

/// Solves a puzzle for an arbitrary role assignment.
///
/// Input is validated before anything moves: on error the puzzle is untouched.
pub fn solve_with_roles<O>(
    puzzle: &mut Puzzle,
    roles: Roles,
    observer: &mut O,
) -> Result<SolveReport, SolveError>
where
    O: MoveObserver + ?Sized,
{
    if !roles.is_distinct() {
        return Err(SolveError::DuplicateRoles { roles });
    }
    if !puzzle.is_gathered_on(roles.source) {
        return Err(SolveError::NotInitialState {
            tower: roles.source,
            expected: puzzle.disk_count(),
        });
    }

    let frontier = puzzle.disk_count().get() - 1;
    let mut solver = Solver {
        puzzle,
        observer,
        report: SolveReport::default(),
    };
    solver.transfer(frontier, roles.source, roles.destination, roles.helper);

    let report = solver.report;
    tracing::info!(
        moves = report.moves,
        rejected = report.rejected,
        "Puzzle solved"
    );
    Ok(report)
}

struct Solver<'a, O: ?Sized> {
    puzzle: &'a mut Puzzle,
    observer: &'a mut O,
    report: SolveReport,
}

impl<O> Solver<'_, O>
where
    O: MoveObserver + ?Sized,
{
    fn transfer(&mut self, frontier: u32, from: TowerId, to: TowerId, via: TowerId) {
        if frontier == 0 {
            self.move_disk(from, to);
            return;
        }

        self.transfer(frontier - 1, from, via, to);
        self.move_disk(from, to);
        self.transfer(frontier - 1, via, to, from);
    }

    fn move_disk(&mut self, from: TowerId, to: TowerId) {
        match self.puzzle.try_move(from, to) {
            MoveOutcome::Moved(mv) => {
                self.report.moves += 1;
                tracing::debug!(%mv, moves = self.report.moves, "Disk moved");
                self.observer.on_move(&mv, &*self.puzzle);
            }
            MoveOutcome::Rejected => {
                self.report.rejected += 1;
                tracing::debug!(%from, %to, "Skipped illegal move");
            }
        }
    }
}

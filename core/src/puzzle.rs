//! Puzzle state: three pegs and the legality-checked move between them.

use thiserror::Error;

use hanoi_types::{DiskCount, Move, Peg, PegAllocError, TowerId};

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("memory allocation failed while building the towers")]
    Allocation(#[from] PegAllocError),
}

/// Result of a single move attempt.
///
/// A rejected move is an expected outcome, not an error: nothing was mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Move),
    Rejected,
}

impl MoveOutcome {
    #[must_use]
    pub const fn moved(self) -> bool {
        matches!(self, MoveOutcome::Moved(_))
    }

    #[must_use]
    pub const fn into_move(self) -> Option<Move> {
        match self {
            MoveOutcome::Moved(mv) => Some(mv),
            MoveOutcome::Rejected => None,
        }
    }
}

/// The three towers of one puzzle run, indexed by [`TowerId`].
///
/// The puzzle exclusively owns its pegs. The only mutation it offers is
/// [`Puzzle::try_move`], so a puzzle that starts legal stays legal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pegs: [Peg; 3],
    disk_count: DiskCount,
}

impl Puzzle {
    /// Builds a puzzle with every disk stacked on tower A.
    pub fn new(disk_count: DiskCount) -> Result<Self, PuzzleError> {
        Self::with_source(disk_count, TowerId::A)
    }

    /// Builds a puzzle with every disk stacked on `source`, largest at the bottom.
    pub fn with_source(disk_count: DiskCount, source: TowerId) -> Result<Self, PuzzleError> {
        let capacity = disk_count.get() as usize;
        let mut pegs = [
            Peg::try_with_capacity(capacity)?,
            Peg::try_with_capacity(capacity)?,
            Peg::try_with_capacity(capacity)?,
        ];

        let start = &mut pegs[source.index()];
        for disk in disk_count.disks_largest_first() {
            start.push(disk);
        }

        tracing::info!(disks = %disk_count, %source, "Puzzle initialized");
        Ok(Self { pegs, disk_count })
    }

    /// Wraps arbitrary peg contents without checking them.
    ///
    /// Useful for setting up positions by hand; the solver refuses to start
    /// from anything but a full, ordered source tower.
    #[must_use]
    pub fn from_pegs(disk_count: DiskCount, pegs: [Peg; 3]) -> Self {
        Self { pegs, disk_count }
    }

    #[must_use]
    pub fn disk_count(&self) -> DiskCount {
        self.disk_count
    }

    #[must_use]
    pub fn peg(&self, id: TowerId) -> &Peg {
        &self.pegs[id.index()]
    }

    /// Pegs in display order: A, B, C.
    pub fn pegs(&self) -> impl Iterator<Item = (TowerId, &Peg)> {
        TowerId::ALL.into_iter().map(|id| (id, self.peg(id)))
    }

    /// Moves the top disk of `from` onto `to` if that is legal.
    ///
    /// Legal means `from` has a disk and `to` is either empty or topped by a
    /// strictly larger disk. Otherwise nothing changes and the move is
    /// rejected.
    pub fn try_move(&mut self, from: TowerId, to: TowerId) -> MoveOutcome {
        if from == to {
            return MoveOutcome::Rejected;
        }

        let Some(top) = self.peg(from).peek_top() else {
            tracing::debug!(%from, %to, "Move rejected: source tower is empty");
            return MoveOutcome::Rejected;
        };

        if let Some(target) = self.peg(to).peek_top()
            && !top.fits_on(target)
        {
            tracing::debug!(%from, %to, %top, %target, "Move rejected: disk is larger than target top");
            return MoveOutcome::Rejected;
        }

        match self.pegs[from.index()].pop() {
            Some(disk) => {
                self.pegs[to.index()].push(disk);
                MoveOutcome::Moved(Move { disk, from, to })
            }
            None => MoveOutcome::Rejected,
        }
    }

    /// True if every peg is strictly increasing from top to bottom.
    #[must_use]
    pub fn is_legal(&self) -> bool {
        self.pegs.iter().all(Peg::is_ordered)
    }

    /// Total disks across all three towers.
    #[must_use]
    pub fn total_disks(&self) -> usize {
        self.pegs.iter().map(Peg::len).sum()
    }

    /// True if `tower` holds exactly disks 1..=N, smallest on top, and the
    /// others are empty.
    #[must_use]
    pub fn is_gathered_on(&self, tower: TowerId) -> bool {
        self.pegs().all(|(id, peg)| {
            if id == tower {
                peg.iter().eq(self.disk_count.disks_largest_first().rev())
            } else {
                peg.is_empty()
            }
        })
    }

    /// Solved in the classic sense: everything on tower C.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.is_gathered_on(TowerId::C)
    }
}

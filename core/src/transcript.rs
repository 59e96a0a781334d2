//! Snapshot transcript: the numbered peg dumps printed while solving.

use std::io::{self, Write};

use hanoi_types::Move;

use crate::puzzle::Puzzle;
use crate::solver::MoveObserver;

const TOP_MARKER: &str = "         [TOP]";
const SEPARATOR: &str = "-----------------------------";

/// Writes one snapshot block for `puzzle`.
///
/// ```text
/// Iteration: 1
///          [TOP]
/// Tower A: Disk 2
/// Tower B:
/// Tower C: Disk 1
///
/// -----------------------------
/// ```
pub fn write_snapshot<W>(out: &mut W, iteration: u64, puzzle: &Puzzle) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writeln!(out, "Iteration: {iteration}")?;
    writeln!(out, "{TOP_MARKER}")?;
    for (id, peg) in puzzle.pegs() {
        writeln!(out, "{id}: {peg}")?;
    }
    writeln!(out)?;
    writeln!(out, "{SEPARATOR}")
}

/// Numbered sequence of puzzle snapshots.
///
/// The iteration counter starts at 0 and advances once per snapshot, whether
/// or not the transcript is quiet. As a [`MoveObserver`] it records a
/// snapshot after every move; the first write error is kept and reported by
/// [`Transcript::finish`], and nothing further is written after it.
#[derive(Debug)]
pub struct Transcript<W> {
    out: W,
    iteration: u64,
    quiet: bool,
    error: Option<io::Error>,
}

impl<W: Write> Transcript<W> {
    #[must_use]
    pub fn new(out: W) -> Self {
        Self {
            out,
            iteration: 0,
            quiet: false,
            error: None,
        }
    }

    /// A transcript that counts snapshots but writes nothing.
    #[must_use]
    pub fn quiet(out: W) -> Self {
        Self {
            quiet: true,
            ..Self::new(out)
        }
    }

    /// Number of snapshots taken so far, which is also the next iteration number.
    #[must_use]
    pub fn iterations(&self) -> u64 {
        self.iteration
    }

    /// Records the next snapshot. Counts it even when nothing is written:
    /// quiet transcripts and transcripts with a latched error stay silent.
    pub fn snapshot(&mut self, puzzle: &Puzzle) -> io::Result<()> {
        let iteration = self.iteration;
        self.iteration += 1;
        if self.quiet || self.error.is_some() {
            return Ok(());
        }
        write_snapshot(&mut self.out, iteration, puzzle)
    }

    /// Flushes the writer and hands it back, or returns the first write error.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        self.out.flush()?;
        Ok(self.out)
    }
}

impl<W: Write> MoveObserver for Transcript<W> {
    fn on_move(&mut self, _mv: &Move, puzzle: &Puzzle) {
        if let Err(err) = self.snapshot(puzzle) {
            tracing::warn!(error = %err, "Failed to write snapshot");
            self.error = Some(err);
        }
    }
}

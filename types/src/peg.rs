//! A single peg: a last-in-first-out stack of disks.
//!
//! The peg itself does not enforce size ordering. Legality is the caller's
//! job; [`Peg::is_ordered`] lets callers check it.

use std::collections::TryReserveError;
use std::fmt;
use std::iter::Rev;
use std::slice;

use thiserror::Error;

use crate::Disk;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("failed to allocate storage for {requested} disks")]
pub struct PegAllocError {
    requested: usize,
    #[source]
    source: TryReserveError,
}

impl PegAllocError {
    #[must_use]
    pub fn requested(&self) -> usize {
        self.requested
    }
}

/// Stack of disks. The last element of the backing vector is the top.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Peg {
    disks: Vec<Disk>,
}

impl Peg {
    #[must_use]
    pub const fn new() -> Self {
        Self { disks: Vec::new() }
    }

    /// Empty peg with room for `capacity` disks, reserved fallibly.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, PegAllocError> {
        let mut disks = Vec::new();
        disks
            .try_reserve_exact(capacity)
            .map_err(|source| PegAllocError {
                requested: capacity,
                source,
            })?;
        Ok(Self { disks })
    }

    /// Places `disk` on top. No ordering check.
    pub fn push(&mut self, disk: Disk) {
        self.disks.push(disk);
    }

    /// Removes the top disk, or returns `None` if the peg is empty.
    pub fn pop(&mut self) -> Option<Disk> {
        self.disks.pop()
    }

    #[inline]
    #[must_use]
    pub fn peek_top(&self) -> Option<Disk> {
        self.disks.last().copied()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.disks.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.disks.is_empty()
    }

    /// Iterates from the top disk down to the bottom one.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.disks.iter().rev(),
        }
    }

    /// True if sizes strictly increase from top to bottom.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        self.disks.windows(2).all(|pair| pair[1].fits_on(pair[0]))
    }

    /// Top-to-bottom rendering, e.g. `Disk 1, Disk 2`. Empty pegs render as "".
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, disk) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{disk}")?;
        }
        Ok(())
    }
}

/// Top-to-bottom iterator over a [`Peg`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: Rev<slice::Iter<'a, Disk>>,
}

impl Iterator for Iter<'_> {
    type Item = Disk;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a Peg {
    type Item = Disk;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//! Disk and disk-count types.
//!
//! A [`Disk`] is nothing more than its size. A [`DiskCount`] is validated at
//! construction, so a puzzle built from one always has at least one disk and
//! a move total that fits in a `u64`.

use std::fmt;
use std::num::NonZeroU32;

use thiserror::Error;

/// A single disk, identified by its size. Smaller disks sit higher on a peg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Disk(NonZeroU32);

impl Disk {
    /// Returns `None` for size zero; disk sizes start at 1.
    #[must_use]
    pub const fn new(size: u32) -> Option<Self> {
        match NonZeroU32::new(size) {
            Some(size) => Some(Self(size)),
            None => None,
        }
    }

    #[must_use]
    pub const fn size(self) -> u32 {
        self.0.get()
    }

    /// True if `self` may legally be placed on top of `other`.
    #[inline]
    #[must_use]
    pub const fn fits_on(self, other: Disk) -> bool {
        self.0.get() < other.0.get()
    }
}

impl fmt::Display for Disk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Disk {}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DiskCountError {
    #[error("number of disks must be positive, got 0")]
    Zero,
    #[error("number of disks must be positive, got {0}")]
    Negative(i64),
    #[error("number of disks must be at most {max}, got {requested}")]
    TooLarge { requested: i64, max: u32 },
}

/// Number of disks in a puzzle, `1..=DiskCount::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DiskCount(NonZeroU32);

impl DiskCount {
    /// Largest count whose move total `2^N - 1` still fits in a `u64`.
    pub const MAX: u32 = 64;

    pub fn new(count: u32) -> Result<Self, DiskCountError> {
        Self::try_from(i64::from(count))
    }

    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Minimal number of moves needed to transfer this many disks.
    #[must_use]
    pub const fn minimal_moves(self) -> u64 {
        // get() is in 1..=64, so the shift is in 0..=63.
        u64::MAX >> (u64::BITS - self.0.get())
    }

    /// Disks in construction order: largest first, ending with size 1.
    pub fn disks_largest_first(self) -> impl DoubleEndedIterator<Item = Disk> {
        (1..=self.0.get()).rev().map(|size| Disk(nonzero(size)))
    }
}

impl TryFrom<i64> for DiskCount {
    type Error = DiskCountError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Err(DiskCountError::Zero),
            v if v < 0 => Err(DiskCountError::Negative(v)),
            v if v > i64::from(Self::MAX) => Err(DiskCountError::TooLarge {
                requested: v,
                max: Self::MAX,
            }),
            v => Ok(Self(nonzero(v as u32))),
        }
    }
}

impl fmt::Display for DiskCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Callers only pass values already known to be >= 1.
const fn nonzero(value: u32) -> NonZeroU32 {
    match NonZeroU32::new(value) {
        Some(v) => v,
        None => NonZeroU32::MIN,
    }
}

//! Tower identifiers, role assignment, and move records.

use std::fmt;

use crate::Disk;

/// One of the three physical pegs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TowerId {
    A,
    B,
    C,
}

impl TowerId {
    pub const ALL: [TowerId; 3] = [TowerId::A, TowerId::B, TowerId::C];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            TowerId::A => 0,
            TowerId::B => 1,
            TowerId::C => 2,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TowerId::A => "Tower A",
            TowerId::B => "Tower B",
            TowerId::C => "Tower C",
        }
    }
}

impl fmt::Display for TowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which tower plays which part in a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Roles {
    pub source: TowerId,
    pub destination: TowerId,
    pub helper: TowerId,
}

impl Roles {
    /// A to C, using B as the helper.
    pub const CLASSIC: Roles = Roles {
        source: TowerId::A,
        destination: TowerId::C,
        helper: TowerId::B,
    };

    #[must_use]
    pub const fn new(source: TowerId, destination: TowerId, helper: TowerId) -> Self {
        Self {
            source,
            destination,
            helper,
        }
    }

    /// True if the three roles name three different towers.
    #[must_use]
    pub fn is_distinct(&self) -> bool {
        self.source != self.destination
            && self.source != self.helper
            && self.destination != self.helper
    }
}

impl Default for Roles {
    fn default() -> Self {
        Self::CLASSIC
    }
}

/// A completed single-disk transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub disk: Disk,
    pub from: TowerId,
    pub to: TowerId,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {}", self.disk, self.from, self.to)
    }
}

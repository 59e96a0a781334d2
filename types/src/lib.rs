//! Core domain types for Hanoi.
//!
//! This crate contains pure domain types with no IO and minimal dependencies:
//! disks, disk counts, pegs, tower identifiers, and move records.

// Pedantic lint configuration - these are intentional design choices
#![allow(clippy::missing_errors_doc)] // Result-returning functions are self-explanatory

mod disk;
mod peg;
mod tower;

pub use disk::{Disk, DiskCount, DiskCountError};
pub use peg::{Iter as PegIter, Peg, PegAllocError};
pub use tower::{Move, Roles, TowerId};

//! Reading the disk count from the user.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use hanoi_types::{DiskCount, DiskCountError};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("no input: expected the number of disks")]
    Eof,
    #[error("expected the number of disks, got an empty line")]
    Empty,
    #[error("not a whole number: {0:?}")]
    NotANumber(String),
    #[error(transparent)]
    DiskCount(#[from] DiskCountError),
    #[error("failed to read the number of disks")]
    Io(#[from] io::Error),
}

/// Parses a disk count from one line of user input.
pub fn parse_disk_count(raw: &str) -> Result<DiskCount, InputError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    let value: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    DiskCount::try_from(value).map_err(InputError::from)
}

/// Prints the banner and prompt to `out`, then reads one line from `input`.
pub fn prompt_disk_count<R, W>(input: &mut R, out: &mut W) -> Result<DiskCount, InputError>
where
    R: BufRead + ?Sized,
    W: Write + ?Sized,
{
    writeln!(out, "Tower of Hanoi")?;
    write!(out, "Enter number of disks: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Eof);
    }
    parse_disk_count(&line)
}

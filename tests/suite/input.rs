//! Disk-count prompt and parsing

use hanoi_core::{InputError, parse_disk_count, prompt_disk_count};
use hanoi_types::DiskCountError;

#[test]
fn prompt_then_parse() {
    let mut input: &[u8] = b"7\n";
    let mut out = Vec::new();
    let count = prompt_disk_count(&mut input, &mut out).unwrap();
    assert_eq!(count.get(), 7);
    assert_eq!(count.minimal_moves(), 127);
}

#[test]
fn prompt_reads_only_the_first_line() {
    let mut input: &[u8] = b"2\n9\n";
    let mut out = Vec::new();
    assert_eq!(prompt_disk_count(&mut input, &mut out).unwrap().get(), 2);
    assert_eq!(input, b"9\n");
}

#[test]
fn prompt_rejects_zero() {
    let mut input: &[u8] = b"0\n";
    let mut out = Vec::new();
    let err = prompt_disk_count(&mut input, &mut out).unwrap_err();
    assert!(matches!(err, InputError::DiskCount(DiskCountError::Zero)));
    assert_eq!(err.to_string(), "number of disks must be positive, got 0");
}

#[test]
fn parse_accepts_surrounding_whitespace() {
    assert_eq!(parse_disk_count("\t3 \r\n").unwrap().get(), 3);
}

#[test]
fn parse_rejects_trailing_garbage() {
    assert!(matches!(
        parse_disk_count("3 disks"),
        Err(InputError::NotANumber(_))
    ));
}

#[test]
fn parse_rejects_huge_numbers() {
    assert!(matches!(
        parse_disk_count("99999999999999999999999"),
        Err(InputError::NotANumber(_))
    ));
    assert!(matches!(
        parse_disk_count("1000"),
        Err(InputError::DiskCount(DiskCountError::TooLarge { .. }))
    ));
}

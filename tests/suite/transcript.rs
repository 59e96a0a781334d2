//! Snapshot transcript output for full runs

use hanoi_core::{Transcript, solve, write_snapshot};

use crate::common::puzzle;

fn run_transcript(n: u32) -> (u64, String) {
    let mut p = puzzle(n);
    let mut transcript = Transcript::new(Vec::new());
    transcript.snapshot(&p).unwrap();
    solve(&mut p, &mut transcript).unwrap();
    let iterations = transcript.iterations();
    let bytes = transcript.finish().unwrap();
    (iterations, String::from_utf8(bytes).unwrap())
}

#[test]
fn one_snapshot_per_move_plus_initial() {
    for n in 1..=6 {
        let (iterations, text) = run_transcript(n);
        let expected = 1u64 << n;
        assert_eq!(iterations, expected, "n = {n}");
        assert_eq!(
            text.matches("Iteration: ").count() as u64,
            expected,
            "n = {n}"
        );
    }
}

#[test]
fn iteration_numbers_count_up_from_zero() {
    let (_, text) = run_transcript(2);
    let numbers: Vec<u64> = text
        .lines()
        .filter_map(|line| line.strip_prefix("Iteration: "))
        .map(|n| n.parse().unwrap())
        .collect();
    assert_eq!(numbers, vec![0, 1, 2, 3]);
}

#[test]
fn two_disk_final_snapshot() {
    let (_, text) = run_transcript(2);
    let last = text
        .rsplit("-----------------------------\n")
        .find(|block| !block.is_empty())
        .unwrap();
    assert_eq!(
        last,
        "Iteration: 3\n         [TOP]\nTower A: \nTower B: \nTower C: Disk 1, Disk 2\n\n"
    );
}

#[test]
fn write_snapshot_uses_given_iteration() {
    let p = puzzle(3);
    let mut out = Vec::new();
    write_snapshot(&mut out, 42, &p).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Iteration: 42\n"));
    assert!(text.contains("Tower A: Disk 1, Disk 2, Disk 3\n"));
}

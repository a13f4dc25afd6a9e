use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn part1_output_right_answer() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("inputs.txt");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("After 6 cycle(s), the whole space has 112 active cubes."));
}

#[test]
fn part1_custom_cycle_count() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.args(["inputs.txt", "--cycles", "1"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("has 11 active cubes"));
}

#[test]
fn part1_reads_standard_input() {
    let mut cmd = assert_cmd::Command::cargo_bin("part1").unwrap();
    cmd.write_stdin(".#.\r\n..#\r\n###\r\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("has 112 active cubes"));
}

#[test]
fn part1_custom_symbols() {
    let mut cmd = assert_cmd::Command::cargo_bin("part1").unwrap();
    cmd.args(["--active", "x", "--inactive", "o", "-c", "2"]);
    cmd.write_stdin("oxo\noox\nxxx\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("has 21 active cubes"));
}

#[test]
fn part1_dump_layers() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.args(["inputs.txt", "--cycles", "1", "--dump"]);
    cmd.assert().success().stdout(
        predicate::str::contains("z = -1\n")
            .and(predicate::str::contains("z = 1\n"))
            .and(predicate::str::contains("z = 2\n").not()),
    );
}

#[test]
fn part1_rejects_jagged_input() {
    let mut cmd = assert_cmd::Command::cargo_bin("part1").unwrap();
    cmd.write_stdin("#..\n#.\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("inconsistent column count(2)"));
}

#[test]
fn part1_rejects_unknown_char() {
    let mut cmd = assert_cmd::Command::cargo_bin("part1").unwrap();
    cmd.write_stdin("#?.\n");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid character(?)"));
}

#[test]
fn part1_rejects_missing_file() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.arg("no_such_inputs.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("no_such_inputs.txt"));
}

#[test]
fn part1_rejects_same_symbols() {
    let mut cmd = Command::cargo_bin("part1").unwrap();
    cmd.args(["inputs.txt", "--active", "#", "--inactive", "#"]);
    cmd.assert().failure();
}

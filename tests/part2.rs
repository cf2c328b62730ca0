use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs.txt");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("366 * 675 * 979 = 241861950"));
}

#[test]
fn part2_reports_no_match_as_diagnostic() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs_no_match.txt");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("No matching values found"));
}

#[test]
fn part2_finds_exact_three_values() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.args(["inputs_no_match.txt", "-t", "6"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1 * 2 * 3 = 6"));
}

#[test]
fn part2_fails_on_too_few_values() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs_short.txt");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains(
            "Only 2 value(s) given, expect at least 3 values",
        ));
}

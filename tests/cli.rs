//! End-to-end CLI checks.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn a_missing_local_source_fails_before_entering_the_tui() {
    Command::cargo_bin("marquee")
        .unwrap()
        .arg("no-such-films.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source not found"));
}

#[test]
fn help_describes_the_source_and_sort_options() {
    Command::cargo_bin("marquee")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("films JSON"))
        .stdout(predicate::str::contains("--sort"));
}

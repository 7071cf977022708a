use assert_cmd::Command;
use predicates::prelude::*;
use std::time::Duration;

fn cargo_bin() -> Command {
    Command::cargo_bin("bftape").unwrap()
}

#[test]
fn missing_file_argument_exits_one() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::is_empty().not());
}

#[test]
fn extra_positional_argument_exits_one() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("one.bf")
        .arg("two.bf")
        .assert()
        .failure()
        .code(1);
}

#[test]
fn unopenable_file_exits_one_with_message() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("definitely/not/a/real/file.bf")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not be opened"));
}

#[test]
fn help_flag_exits_zero() {
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("--help")
        .assert()
        .success();
}

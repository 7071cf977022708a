use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::time::Duration;
use tempfile::NamedTempFile;

fn cargo_bin() -> Command {
    Command::cargo_bin("bftape").unwrap()
}

fn source_file(code: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("failed to create temp source file");
    file.write_all(code.as_bytes()).expect("failed to write source");
    file
}

#[test]
fn eight_times_eight_prints_exactly_one_at_sign() {
    let file = source_file("++++++++[>++++++++<-]>.");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .assert()
        .success()
        // One raw byte, value 64, and no trailing newline.
        .stdout("@");
}

#[test]
fn nested_loops_multiply_correctly() {
    let file = source_file("+++[>+++[>++<-]<-]>>.");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq(&[18u8][..]));
}

#[test]
fn whitespace_and_prose_are_ignored() {
    let file = source_file("+ + add two\n. print it\n");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::eq(&[2u8][..]));
}

#[test]
fn debug_flag_prints_a_step_table_instead_of_output() {
    let file = source_file("+.");
    cargo_bin()
        .timeout(Duration::from_secs(2))
        .arg("--debug")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("STEP"))
        .stdout(predicate::str::contains("suppressed"));
}

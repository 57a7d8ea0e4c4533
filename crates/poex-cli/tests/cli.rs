//! Integration tests for the poex binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn poex() -> Command {
    Command::cargo_bin("poex").unwrap()
}

fn sample_email() -> String {
    let output = poex().arg("sample").output().unwrap();
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn sample_prints_vendor_line() {
    poex()
        .arg("sample")
        .assert()
        .success()
        .stdout(predicate::str::contains("VENDOR: TechComponents Inc."));
}

#[test]
fn parse_reads_stdin_and_emits_json() {
    poex()
        .arg("parse")
        .write_stdin(sample_email())
        .assert()
        .success()
        .stdout(predicate::str::contains("TechComponents Inc."))
        .stdout(predicate::str::contains("FX-78901234567"))
        // First "Total:" match in document order is the grand total.
        .stdout(predicate::str::contains("\"total\": \"$449.95\""));
}

#[test]
fn parse_scoped_total_takes_summary_total() {
    poex()
        .args(["parse", "--scoped-total"])
        .write_stdin(sample_email())
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,006.86"));
}

#[test]
fn parse_text_format_renders_sections() {
    poex()
        .args(["parse", "--format", "text"])
        .write_stdin(sample_email())
        .assert()
        .success()
        .stdout(predicate::str::contains("Vendor Information"))
        .stdout(predicate::str::contains("Order Items"))
        .stdout(predicate::str::contains("Order Summary"));
}

#[test]
fn parse_plain_text_yields_empty_record() {
    poex()
        .arg("parse")
        .write_stdin("no purchase order here")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"vendor_name\": \"\""));
}

#[test]
fn parse_missing_input_file_fails() {
    poex()
        .args(["parse", "does-not-exist.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Input file not found"));
}

#[test]
fn batch_writes_summary_csv_and_per_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let email = sample_email();
    std::fs::write(dir.path().join("a.txt"), &email).unwrap();
    std::fs::write(dir.path().join("b.txt"), &email).unwrap();

    let pattern = dir.path().join("*.txt");
    let out_dir = dir.path().join("out");

    poex()
        .args(["batch", pattern.to_str().unwrap(), "--summary", "--output-dir"])
        .arg(&out_dir)
        .assert()
        .success();

    assert!(out_dir.join("a.json").exists());
    assert!(out_dir.join("b.json").exists());

    let summary = std::fs::read_to_string(out_dir.join("summary.csv")).unwrap();
    assert_eq!(summary.lines().count(), 3); // header + one row per file
    assert!(summary.contains("TechComponents Inc."));
    assert!(summary.contains("2023-05-14"));
}

#[test]
fn batch_fails_on_empty_glob() {
    let dir = tempfile::tempdir().unwrap();
    let pattern = dir.path().join("*.txt");

    poex()
        .args(["batch", pattern.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No matching files"));
}

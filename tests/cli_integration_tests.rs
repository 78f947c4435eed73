mod common;

use predicates::prelude::*;

#[test]
fn no_argument_prints_usage_and_fails() {
    lab_verify!()
        .args(["--color", "never"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: lab-verify <lab-number|all>"))
        .stdout(predicate::str::contains("lab-verify all    # Verify all labs"));
}

#[test]
fn unknown_lab_fails_with_valid_options() {
    lab_verify!()
        .args(["--color", "never", "7"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown lab: 7"))
        .stdout(predicate::str::contains("Valid options: 1, 2, 3, 4, 5, 6, all"));
}

#[test]
fn lab_ids_are_case_and_whitespace_sensitive() {
    lab_verify!()
        .args(["--color", "never", "ALL"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown lab: ALL"));
}

#[test]
fn help_exits_success() {
    lab_verify!()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--root"));
}

#[test]
fn version_exits_success() {
    lab_verify!()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn config_and_no_config_conflict() {
    lab_verify!()
        .args(["--config", "x.toml", "--no-config", "4"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn unknown_flag_fails() {
    lab_verify!()
        .args(["--frobnicate", "4"])
        .assert()
        .code(1);
}

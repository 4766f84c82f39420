use std::fs;

use predicates::prelude::predicate;
use tempfile::tempdir;

#[test]
fn help_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("formq")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("parse-datetime"));
}

#[test]
fn version_is_available() {
    assert_cmd::cargo::cargo_bin_cmd!("formq")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn parse_datetime_command_runs_without_input_plumbing() {
    assert_cmd::cargo::cargo_bin_cmd!("formq")
        .args(["parse-datetime", "2020-03-04 14:30"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"datetime\":\"2020-03-04 14:30\""));
}

#[test]
fn check_command_runs_from_stdin_to_stdout() {
    let dir = tempdir().expect("temp dir");
    let profile_path = dir.path().join("profile.json");
    fs::write(
        &profile_path,
        r#"{"fields": {"zip": {"kind": "us_zip"}}, "required": ["zip"]}"#,
    )
    .expect("write profile");

    assert_cmd::cargo::cargo_bin_cmd!("formq")
        .args([
            "check",
            "--from",
            "json",
            "--profile",
            profile_path.to_str().expect("utf8 path"),
        ])
        .write_stdin(r#"[{"zip":"oops"}]"#)
        .assert()
        .code(2)
        .stdout(predicate::str::contains("\"violation_count\":1"));
}

#[test]
fn normalize_command_runs_from_stdin_to_stdout() {
    let dir = tempdir().expect("temp dir");
    let profile_path = dir.path().join("profile.yaml");
    fs::write(&profile_path, "fields:\n  state: {kind: us_state}\n").expect("write profile");

    assert_cmd::cargo::cargo_bin_cmd!("formq")
        .args([
            "normalize",
            "--from",
            "json",
            "--profile",
            profile_path.to_str().expect("utf8 path"),
        ])
        .write_stdin(r#"{"state":"ny"}"#)
        .assert()
        .code(0)
        .stdout(predicate::str::contains(r#"{"state":"NY"}"#))
        .stderr(predicate::str::is_empty());
}

#[test]
fn parser_errors_return_json_with_exit_code_three() {
    assert_cmd::cargo::cargo_bin_cmd!("formq")
        .args(["check", "--from", "json"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"error\":\"input_usage_error\""));
}

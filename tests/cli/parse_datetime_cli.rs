use predicates::prelude::predicate;
use serde_json::Value;

fn run_parse(args: &[&str]) -> (Option<i32>, Value) {
    let output = assert_cmd::cargo::cargo_bin_cmd!("formq")
        .args(args)
        .output()
        .expect("run command");
    let payload = serde_json::from_slice(&output.stdout).expect("stdout json");
    (output.status.code(), payload)
}

#[test]
fn canonical_input_reports_calendar_fields() {
    let (code, payload) = run_parse(&["parse-datetime", "2020-03-04 14:30"]);
    assert_eq!(code, Some(0));
    assert_eq!(payload["datetime"], Value::from("2020-03-04 14:30"));
    assert_eq!(payload["year"], Value::from(2020));
    assert_eq!(payload["month"], Value::from(3));
    assert_eq!(payload["day"], Value::from(4));
    assert_eq!(payload["hour"], Value::from(14));
    assert_eq!(payload["minute"], Value::from(30));
    assert_eq!(payload["second"], Value::from(0));
}

#[test]
fn both_combined_orders_parse_to_the_same_datetime() {
    let (first_code, first) = run_parse(&["parse-datetime", "03/04/2020 14:30"]);
    let (second_code, second) = run_parse(&["parse-datetime", "14:30 03/04/2020"]);
    assert_eq!(first_code, Some(0));
    assert_eq!(second_code, Some(0));
    assert_eq!(first["datetime"], second["datetime"]);
    assert_eq!(first["datetime"], Value::from("2020-03-04 14:30"));
}

#[test]
fn now_keyword_resolves_to_a_timestamp() {
    let (code, payload) = run_parse(&["parse-datetime", "now"]);
    assert_eq!(code, Some(0));
    let rendered = payload["datetime"].as_str().expect("datetime string");
    assert_eq!(rendered.len(), "YYYY-MM-DD HH:MM".len());
    assert_eq!(&rendered[4..5], "-");
    assert_eq!(&rendered[10..11], " ");
}

#[test]
fn omitted_value_behaves_like_now() {
    let (code, payload) = run_parse(&["parse-datetime"]);
    assert_eq!(code, Some(0));
    assert_eq!(payload["input"], Value::Null);
    assert!(payload["datetime"].is_string());
}

#[test]
fn configured_now_alias_is_accepted() {
    let (code, payload) = run_parse(&["parse-datetime", "jetzt", "--now-alias", "jetzt"]);
    assert_eq!(code, Some(0));
    assert!(payload["datetime"].is_string());
}

#[test]
fn invalid_input_maps_to_exit_two() {
    let (code, payload) = run_parse(&["parse-datetime", "not-a-date"]);
    assert_eq!(code, Some(2));
    assert_eq!(payload["error"], Value::from("invalid_format"));
    assert_eq!(payload["input"], Value::from("not-a-date"));
}

#[test]
fn rebase_flag_is_accepted_and_echoed() {
    let (code, payload) = run_parse(&["parse-datetime", "2020-03-04 14:30", "--rebase", "false"]);
    assert_eq!(code, Some(0));
    assert_eq!(payload["rebase"], Value::Bool(false));
    assert_eq!(payload["datetime"], Value::from("2020-03-04 14:30"));
}

#[test]
fn time_only_input_succeeds_on_stdout() {
    assert_cmd::cargo::cargo_bin_cmd!("formq")
        .args(["parse-datetime", "14:30"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("\"hour\":14"))
        .stdout(predicate::str::contains("\"minute\":30"))
        .stdout(predicate::str::contains("\"second\":0"));
}

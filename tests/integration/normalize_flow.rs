use std::fs;
use std::io::Cursor;

use formq::cmd::normalize;
use formq::domain::error::NormalizeError;
use formq::io::Format;
use tempfile::tempdir;

const PROFILE: &str = r#"
fields:
  phone: {kind: us_phone}
  state: {kind: us_state}
  published: {kind: datetime}
required: [state]
"#;

fn write_profile(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let profile_path = dir.path().join("profile.yaml");
    fs::write(&profile_path, PROFILE).expect("write profile");
    profile_path
}

#[test]
fn csv_batch_normalizes_to_csv() {
    let dir = tempdir().expect("tempdir");
    let profile_path = write_profile(&dir);
    let input = "phone,state,published\n(555) 555-5555,ny,14:30 03/04/2020\n";

    let mut output = Vec::new();
    normalize::run(
        Cursor::new(input),
        &mut output,
        Format::Csv,
        Format::Csv,
        &profile_path,
    )
    .expect("normalize run");

    assert_eq!(
        String::from_utf8(output).expect("utf8"),
        "phone,published,state\n555-555-5555,2020-03-04 14:30,NY\n"
    );
}

#[test]
fn jsonl_batch_preserves_record_count() {
    let dir = tempdir().expect("tempdir");
    let profile_path = write_profile(&dir);
    let input = "{\"state\":\"ca\"}\n{\"state\":\"or\"}\n{\"state\":\"wa\"}\n";

    let mut output = Vec::new();
    normalize::run(
        Cursor::new(input),
        &mut output,
        Format::Jsonl,
        Format::Jsonl,
        &profile_path,
    )
    .expect("normalize run");

    let rendered = String::from_utf8(output).expect("utf8");
    assert_eq!(rendered.lines().count(), 3);
    assert_eq!(rendered.lines().next(), Some("{\"state\":\"CA\"}"));
}

#[test]
fn missing_required_field_aborts_the_batch() {
    let dir = tempdir().expect("tempdir");
    let profile_path = write_profile(&dir);
    let input = r#"[{"state":"ca"},{"phone":"5555555555"}]"#;

    let mut output = Vec::new();
    let error = normalize::run(
        Cursor::new(input.as_bytes()),
        &mut output,
        Format::Json,
        Format::Json,
        &profile_path,
    )
    .expect_err("must fail");

    match error {
        NormalizeError::InvalidValue { path, reason, message } => {
            assert_eq!(path, "$[1].state");
            assert_eq!(reason, "missing_value");
            assert_eq!(message, "This field is required.");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(output.is_empty());
}

#[test]
fn profile_schema_errors_surface_as_profile_errors() {
    let dir = tempdir().expect("tempdir");
    let profile_path = dir.path().join("profile.yaml");
    fs::write(&profile_path, "fields:\n  zip: {kind: unknown_kind}\n").expect("write profile");

    let mut output = Vec::new();
    let error = normalize::run(
        Cursor::new(b"[]"),
        &mut output,
        Format::Json,
        Format::Json,
        &profile_path,
    )
    .expect_err("must fail");
    assert!(matches!(error, NormalizeError::Profile(_)));
}

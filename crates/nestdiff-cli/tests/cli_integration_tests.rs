//! CLI integration tests
//!
//! These tests run the built `nestdiff` binary against JSON fixtures written
//! to a temporary directory.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_nestdiff"))
        .current_dir(cwd)
        .args(args)
        .output()
        .expect("Failed to execute CLI")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_diff_prints_one_message_per_line() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "a.json", r#"{"a": 1, "b": {"c": "x"}}"#);
    write_fixture(&dir, "b.json", r#"{"b": {"c": "y"}, "d": true}"#);

    let output = run(&["diff", "a.json", "b.json"], dir.path());

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout(&output),
        ".a: key not found in 2nd\n.d: key not found in 1st\n.b.c: string mismatch: 'x' != 'y'\n"
    );
}

#[test]
fn test_diff_flags_map_to_match_modes() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "a.json", r#"{"tags": [1, 2, 3]}"#);
    write_fixture(&dir, "b.json", r#"{"tags": [3, 2, 1], "extra": 0}"#);

    let strict = run(&["diff", "a.json", "b.json"], dir.path());
    assert_eq!(stdout(&strict).lines().count(), 3);

    let relaxed = run(&["diff", "a.json", "b.json", "--loose", "--asymmetric"], dir.path());
    assert!(relaxed.status.success());
    assert_eq!(stdout(&relaxed), "");
}

#[test]
fn test_diff_json_format() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "a.json", r#"[1]"#);
    write_fixture(&dir, "b.json", r#"[1.5]"#);

    let output = run(&["diff", "a.json", "b.json", "--format", "json"], dir.path());

    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        records,
        serde_json::json!([{
            "path": "[0]",
            "kind": "type_mismatch",
            "first": "integer",
            "second": "float"
        }])
    );
}

#[test]
fn test_diff_markdown_format() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "a.json", r#"{"n": 1}"#);

    let output = run(&["diff", "a.json", "a.json", "--format", "markdown"], dir.path());

    assert!(stdout(&output).contains("_No differences detected._"));
}

#[test]
fn test_diff_check_fails_on_differences() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "a.json", r#"{"n": 1}"#);
    write_fixture(&dir, "b.json", r#"{"n": 2}"#);

    let output = run(&["diff", "a.json", "b.json", "--check"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), ".n: integer mismatch: 1 != 2\n");
    assert!(String::from_utf8_lossy(&output.stderr).contains("1 difference(s) found"));
}

#[test]
fn test_paths_general_and_nested() {
    let dir = TempDir::new().unwrap();
    write_fixture(
        &dir,
        "doc.json",
        r#"{"svc": {"ports": ["80"], "host": "h"}, "name": "n"}"#,
    );

    let general = run(&["paths", "doc.json"], dir.path());
    assert_eq!(
        stdout(&general),
        "[\"svc\",\"ports\",\"80\"]\n[\"svc\",\"host\",\"h\"]\n[\"name\",\"n\"]\n"
    );

    let nested = run(&["paths", "doc.json", "--nested"], dir.path());
    assert_eq!(
        stdout(&nested),
        "[\"svc\",\"ports\",\"80\"]\n[\"host\",\"h\"]\n[\"name\",\"n\"]\n"
    );
}

#[test]
fn test_paths_unsupported_value_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "doc.json", r#"{"a": 5}"#);

    let output = run(&["paths", "doc.json"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Error: "));
}

#[test]
fn test_paths_requires_object_root() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "doc.json", r#"["a"]"#);

    let output = run(&["paths", "doc.json"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Expected mapping, got sequence"));
}

#[test]
fn test_covers_reports_coverage_and_length_mismatch() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "a.json", r#"[{"a": 1}, {"b": 2}]"#);
    write_fixture(&dir, "b.json", r#"[{"b": 2}, {"a": 1}]"#);
    write_fixture(&dir, "c.json", r#"[{"a": 1}]"#);

    let covered = run(&["covers", "a.json", "b.json"], dir.path());
    assert_eq!(stdout(&covered), "true\n");

    let mismatch = run(&["covers", "a.json", "c.json"], dir.path());
    assert_eq!(mismatch.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&mismatch.stderr).contains("first has 2, second has 1"));
}

#[test]
fn test_missing_file_is_reported() {
    let dir = TempDir::new().unwrap();

    let output = run(&["paths", "absent.json"], dir.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("cannot read absent.json"));
}

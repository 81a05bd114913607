//! Integration tests driving classification from result files on disk.

use std::fs;
use std::path::PathBuf;

use gputriage_results::{Classification, ResultKind};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

/// Writes `content` as a result file and returns its path.
fn result_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write result file");
    path
}

#[test]
fn tree_report_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = result_file(
        &dir,
        "results.json",
        r#"{ "tests": { "a": { "expected": "PASS", "actual": "FAIL" } } }"#,
    );

    let c = Classification::from_file(Some(&path), ResultKind::from_name("gtest_angle"));
    assert_eq!(c.pass_fail, vec!["a"]);
    assert!(c.fail_pass.is_empty());
    assert!(c.fail_fail.is_empty());
    assert!(c.pass_pass.is_empty());
}

#[test]
fn dawn_report_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = result_file(
        &dir,
        "dawn.json",
        r#"{ "testsuites": [ { "name": "S", "testsuite": [ { "name": "T", "failures": [] } ] } ] }"#,
    );

    let c = Classification::from_file(Some(&path), ResultKind::from_name("dawn"));
    assert_eq!(c.pass_fail, vec!["S.T"]);
}

#[test]
fn malformed_json_degrades_to_all_failed() {
    let dir = TempDir::new().unwrap();
    let path = result_file(&dir, "broken.json", "not json at all {{{");

    for &name in ResultKind::NAMES {
        let c = Classification::from_file(Some(&path), ResultKind::from_name(name));
        assert_eq!(c.pass_fail, vec![format!("All in {}", path.display())]);
        assert!(c.fail_pass.is_empty());
        assert!(c.fail_fail.is_empty());
        assert!(c.pass_pass.is_empty());
    }
}

#[test]
fn wrong_shape_for_declared_kind_degrades_to_all_failed() {
    let dir = TempDir::new().unwrap();
    // Valid JSON, but a dawn-shaped document declared as a tree kind.
    let path = result_file(
        &dir,
        "mismatch.json",
        r#"{ "testsuites": [ { "name": "S", "testsuite": [] } ] }"#,
    );

    let c = Classification::from_file(Some(&path), ResultKind::from_name("gtest_angle"));
    assert_eq!(c.pass_fail, vec![format!("All in {}", path.display())]);
}

#[test]
fn missing_file_degrades_to_all_failed() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("never_written.json");

    let c = Classification::from_file(Some(&path), ResultKind::from_name("angle"));
    assert_eq!(c.pass_fail, vec![format!("All in {}", path.display())]);
}

#[test]
fn aggregate_arithmetic_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = result_file(
        &dir,
        "angle.json",
        r#"{ "errors": 1, "failures": 2, "tests": 10 }"#,
    );

    let c = Classification::from_file(Some(&path), ResultKind::from_name("angle"));
    assert_eq!(c.pass_pass.len(), 7);
    assert_eq!(c.pass_fail, vec![format!("3 in {}", path.display())]);
}

#[test]
fn classification_round_trips_through_json() {
    let dir = TempDir::new().unwrap();
    let path = result_file(
        &dir,
        "results.json",
        r#"{ "tests": { "a": { "expected": "PASS", "actual": "FAIL" },
                        "b": { "expected": "FAIL", "actual": "PASS" } } }"#,
    );

    let c = Classification::from_file(Some(&path), ResultKind::from_name("webgpu_blink_web_tests"));
    let encoded = serde_json::to_string(&c).unwrap();
    let decoded: Classification = serde_json::from_str(&encoded).unwrap();
    assert_eq!(c, decoded);
}

//! The four-bucket transition classification and its extraction strategies.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ResultError;
use crate::kind::{ResultKind, ResultShape};

/// Transition classification of one result report.
///
/// Each bucket holds test identifiers ordered as they appear in the document.
/// For the aggregate-counter kind there are no identifiers: `pass_pass`
/// holds count-many empty placeholder entries (use the bucket length) and
/// `pass_fail` holds a single `"<count> in <path>"` summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Expected to pass, failed.
    pub pass_fail: Vec<String>,
    /// Expected to fail, passed.
    pub fail_pass: Vec<String>,
    /// Expected to fail, still failing.
    pub fail_fail: Vec<String>,
    /// Expected to pass, still passing.
    pub pass_pass: Vec<String>,
}

impl Classification {
    /// Classifies the result file declared as `kind`.
    ///
    /// An absent path or kind is the valid "no result" state and yields four
    /// empty buckets without touching the filesystem. Any failure to read,
    /// parse, or walk the document is reported as a single synthetic
    /// `pass_fail` entry `"All in <path>"`; this constructor never fails.
    pub fn from_file(result_file: Option<&Path>, kind: Option<ResultKind>) -> Self {
        let (Some(path), Some(kind)) = (result_file, kind) else {
            return Self::default();
        };
        read_document(path)
            .and_then(|document| Self::from_json(&document, kind, path))
            .unwrap_or_else(|_| {
                let mut all_failed = Self::default();
                all_failed.pass_fail.push(format!("All in {}", path.display()));
                all_failed
            })
    }

    /// Extracts a classification from an already-parsed document.
    ///
    /// `source` only labels the synthetic entries of the aggregate-counter
    /// shape; nothing is read from it.
    pub fn from_json(
        document: &Value,
        kind: ResultKind,
        source: &Path,
    ) -> Result<Self, ResultError> {
        let mut out = Self::default();
        match kind.shape() {
            ResultShape::Tree => extract_tree(document, &mut out)?,
            ResultShape::FlatIteration => extract_flat_iteration(document, &mut out)?,
            ResultShape::AggregateCounter => extract_aggregate(document, source, &mut out)?,
            ResultShape::SuiteArray => extract_suite_array(document, &mut out)?,
        }
        Ok(out)
    }

    /// True if every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.pass_fail.is_empty()
            && self.fail_pass.is_empty()
            && self.fail_fail.is_empty()
            && self.pass_pass.is_empty()
    }

    /// Removes from `pass_fail` every entry contained in one of the curated
    /// suppression lines and returns the removed entries in order.
    ///
    /// Suppression lines carry extra context around the test identifier
    /// (platform tags, configs), so matching is by substring.
    pub fn apply_suppressions(&mut self, suppressions: &[&str]) -> Vec<String> {
        let (suppressed, kept): (Vec<String>, Vec<String>) = std::mem::take(&mut self.pass_fail)
            .into_iter()
            .partition(|name| suppressions.iter().any(|line| line.contains(name.as_str())));
        self.pass_fail = kept;
        suppressed
    }
}

fn read_document(path: &Path) -> Result<Value, ResultError> {
    let file = File::open(path)?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

/// A value counts as "pass" iff its string form ends with `PASS`; this keeps
/// harness spellings like `SLOW PASS` in the pass domain.
fn is_pass(value: &Value) -> bool {
    match value {
        Value::String(s) => s.ends_with("PASS"),
        other => other.to_string().ends_with("PASS"),
    }
}

/// Tree shape: a nested `tests` mapping. A node is a leaf iff it has both an
/// `expected` and an `actual` key; every other node recurses into its
/// children with a slash-joined key path.
fn extract_tree(document: &Value, out: &mut Classification) -> Result<(), ResultError> {
    let tests = document
        .get("tests")
        .ok_or(ResultError::MissingKey("tests"))?
        .as_object()
        .ok_or(ResultError::UnexpectedShape("tests"))?;
    for (key, node) in tests {
        walk_tree(node, key, out)?;
    }
    Ok(())
}

fn walk_tree(node: &Value, path: &str, out: &mut Classification) -> Result<(), ResultError> {
    let map = node
        .as_object()
        .ok_or(ResultError::UnexpectedShape("tests node"))?;
    match (map.get("expected"), map.get("actual")) {
        (Some(expected), Some(actual)) => {
            let bucket = match (is_pass(expected), is_pass(actual)) {
                (false, false) => &mut out.fail_fail,
                (false, true) => &mut out.fail_pass,
                (true, false) => &mut out.pass_fail,
                (true, true) => &mut out.pass_pass,
            };
            bucket.push(path.to_string());
        }
        _ => {
            for (key, child) in map {
                walk_tree(child, &format!("{path}/{key}"), out)?;
            }
        }
    }
    Ok(())
}

/// Flat-iteration shape: only the first iteration and each test's first
/// record matter. Statuses other than `SUCCESS`/`FAILURE` (skips, timeouts)
/// are not bucketed.
fn extract_flat_iteration(document: &Value, out: &mut Classification) -> Result<(), ResultError> {
    let iterations = document
        .get("per_iteration_data")
        .ok_or(ResultError::MissingKey("per_iteration_data"))?
        .as_array()
        .ok_or(ResultError::UnexpectedShape("per_iteration_data"))?;
    let cases = iterations
        .first()
        .ok_or(ResultError::UnexpectedShape("per_iteration_data"))?
        .as_object()
        .ok_or(ResultError::UnexpectedShape("per_iteration_data[0]"))?;

    for (name, records) in cases {
        let first = records
            .as_array()
            .and_then(|r| r.first())
            .ok_or(ResultError::UnexpectedShape("iteration records"))?;
        let status = first.get("status").ok_or(ResultError::MissingKey("status"))?;
        match status.as_str() {
            Some("SUCCESS") => out.pass_pass.push(name.clone()),
            Some("FAILURE") => out.pass_fail.push(name.clone()),
            _ => {}
        }
    }
    Ok(())
}

/// Aggregate-counter shape: no per-test identifiers are available, only
/// `errors`/`failures`/`tests` totals.
fn extract_aggregate(
    document: &Value,
    source: &Path,
    out: &mut Classification,
) -> Result<(), ResultError> {
    let errors = counter(document, "errors")?;
    let failures = counter(document, "failures")?;
    let total = counter(document, "tests")?;

    let pass_fail_count = errors + failures;
    let pass_pass_count = total.saturating_sub(pass_fail_count);
    out.pass_pass = vec![String::new(); pass_pass_count as usize];
    if pass_fail_count > 0 {
        out.pass_fail
            .push(format!("{} in {}", pass_fail_count, source.display()));
    }
    Ok(())
}

fn counter(document: &Value, key: &'static str) -> Result<u64, ResultError> {
    document
        .get(key)
        .ok_or(ResultError::MissingKey(key))?
        .as_u64()
        .ok_or(ResultError::UnexpectedShape(key))
}

/// Suite-array shape: `<suite>.<case>` identifiers; a case with a `failures`
/// key failed, every other case passed. This shape records no expectations,
/// so everything is attributed to the pass domain.
fn extract_suite_array(document: &Value, out: &mut Classification) -> Result<(), ResultError> {
    let suites = document
        .get("testsuites")
        .ok_or(ResultError::MissingKey("testsuites"))?
        .as_array()
        .ok_or(ResultError::UnexpectedShape("testsuites"))?;

    for suite in suites {
        let suite_name = suite
            .get("name")
            .and_then(Value::as_str)
            .ok_or(ResultError::MissingKey("name"))?;
        let cases = suite
            .get("testsuite")
            .ok_or(ResultError::MissingKey("testsuite"))?
            .as_array()
            .ok_or(ResultError::UnexpectedShape("testsuite"))?;
        for case in cases {
            let case_name = case
                .get("name")
                .and_then(Value::as_str)
                .ok_or(ResultError::MissingKey("name"))?;
            let test_name = format!("{suite_name}.{case_name}");
            if case.get("failures").is_some() {
                out.pass_fail.push(test_name);
            } else {
                out.pass_pass.push(test_name);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn classify(document: Value, kind: ResultKind) -> Classification {
        Classification::from_json(&document, kind, Path::new("results.json")).unwrap()
    }

    #[test]
    fn tree_leaf_buckets_by_expected_vs_actual() {
        let document = json!({
            "tests": {
                "a": { "expected": "PASS", "actual": "FAIL" },
                "b": { "expected": "PASS", "actual": "PASS" },
                "c": { "expected": "FAIL", "actual": "PASS" },
                "d": { "expected": "FAIL", "actual": "FAIL" },
            }
        });
        let c = classify(document, ResultKind::GtestAngle);
        assert_eq!(c.pass_fail, vec!["a"]);
        assert_eq!(c.pass_pass, vec!["b"]);
        assert_eq!(c.fail_pass, vec!["c"]);
        assert_eq!(c.fail_fail, vec!["d"]);
    }

    #[test]
    fn tree_nests_with_slash_joined_paths() {
        let document = json!({
            "tests": {
                "suite": {
                    "group": {
                        "case": { "expected": "PASS", "actual": "CRASH" }
                    }
                }
            }
        });
        let c = classify(document, ResultKind::TelemetryGpuIntegrationTest);
        assert_eq!(c.pass_fail, vec!["suite/group/case"]);
    }

    #[test]
    fn pass_suffix_matching_keeps_slow_pass_in_the_pass_domain() {
        let document = json!({
            "tests": {
                "a": { "expected": "PASS", "actual": "SLOW PASS" },
            }
        });
        let c = classify(document, ResultKind::WebgpuBlinkWebTests);
        assert_eq!(c.pass_pass, vec!["a"]);
    }

    #[test]
    fn flat_iteration_uses_only_the_first_record() {
        let document = json!({
            "per_iteration_data": [{
                "TestA": [{ "status": "SUCCESS" }, { "status": "FAILURE" }],
                "TestB": [{ "status": "FAILURE" }],
                "TestC": [{ "status": "SKIPPED" }],
            }]
        });
        let c = classify(document, ResultKind::GtestChrome);
        assert_eq!(c.pass_pass, vec!["TestA"]);
        assert_eq!(c.pass_fail, vec!["TestB"]);
        // SKIPPED is not bucketed anywhere.
        assert!(c.fail_pass.is_empty() && c.fail_fail.is_empty());
    }

    #[test]
    fn aggregate_counters_become_placeholders_and_a_summary() {
        let document = json!({ "errors": 1, "failures": 2, "tests": 10 });
        let c = classify(document, ResultKind::Angle);
        assert_eq!(c.pass_pass.len(), 7);
        assert!(c.pass_pass.iter().all(|entry| entry.is_empty()));
        assert_eq!(c.pass_fail, vec!["3 in results.json"]);
    }

    #[test]
    fn aggregate_with_no_failures_has_no_summary() {
        let document = json!({ "errors": 0, "failures": 0, "tests": 4 });
        let c = classify(document, ResultKind::Angle);
        assert_eq!(c.pass_pass.len(), 4);
        assert!(c.pass_fail.is_empty());
    }

    #[test]
    fn suite_array_joins_suite_and_case_names() {
        let document = json!({
            "testsuites": [{
                "name": "S",
                "testsuite": [
                    { "name": "T", "failures": [{ "failure": "boom" }] },
                    { "name": "U" },
                ]
            }]
        });
        let c = classify(document, ResultKind::Dawn);
        assert_eq!(c.pass_fail, vec!["S.T"]);
        assert_eq!(c.pass_pass, vec!["S.U"]);
    }

    #[test]
    fn tree_without_tests_key_is_an_error() {
        let document = json!({ "nothing": {} });
        let err = Classification::from_json(&document, ResultKind::GtestAngle, Path::new("r.json"))
            .unwrap_err();
        assert!(matches!(err, ResultError::MissingKey("tests")));
    }

    #[test]
    fn absent_path_or_kind_is_the_empty_state() {
        assert!(Classification::from_file(None, Some(ResultKind::Dawn)).is_empty());
        assert!(Classification::from_file(Some(Path::new("r.json")), None).is_empty());
        assert!(Classification::from_file(None, None).is_empty());
    }

    #[test]
    fn suppressions_match_by_substring_and_preserve_order() {
        let mut c = Classification {
            pass_fail: vec![
                "D3DTextureTest.Clear/ES2_D3D9".to_string(),
                "D3DTextureTest.DepthStencil/ES2_D3D11".to_string(),
            ],
            ..Default::default()
        };
        let suppressed = c.apply_suppressions(&["[ win32 ] D3DTextureTest.Clear/ES2_D3D9"]);
        assert_eq!(suppressed, vec!["D3DTextureTest.Clear/ES2_D3D9"]);
        assert_eq!(c.pass_fail, vec!["D3DTextureTest.DepthStencil/ES2_D3D11"]);
    }
}

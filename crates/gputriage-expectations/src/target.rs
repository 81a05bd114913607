//! The closed table of harness targets and their expectation files.

/// A named test target with expectation files checked into the harness repo.
///
/// Each variant carries its file list, comment prefix, and tag-header
/// convention as associated data, so adding a target is a compile-time
/// checked change rather than a string-table edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// `angle_end2end_tests`; the only target with `//`-style comments and a
    /// `<bug-id> <TAG ...> : <TestSuite.TestName>/<Config> = <RESULT>` line
    /// syntax.
    AngleEnd2end,
    /// `info_collection_tests`.
    InfoCollection,
    /// `trace_test`; files start with a tag header.
    TraceTest,
    /// `webgpu_cts_tests`; two files, both with a tag header.
    WebgpuCts,
}

impl Target {
    /// Parses a harness target name. Unknown names yield `None`; the updater
    /// treats that as a silent no-op, not an error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "angle_end2end_tests" => Some(Target::AngleEnd2end),
            "info_collection_tests" => Some(Target::InfoCollection),
            "trace_test" => Some(Target::TraceTest),
            "webgpu_cts_tests" => Some(Target::WebgpuCts),
            _ => None,
        }
    }

    /// The harness name this target was parsed from.
    pub fn name(&self) -> &'static str {
        match self {
            Target::AngleEnd2end => "angle_end2end_tests",
            Target::InfoCollection => "info_collection_tests",
            Target::TraceTest => "trace_test",
            Target::WebgpuCts => "webgpu_cts_tests",
        }
    }

    /// Repo-relative expectation files maintained for this target.
    pub fn expectation_files(&self) -> &'static [&'static str] {
        match self {
            Target::AngleEnd2end => &["src/tests/angle_end2end_tests_expectations.txt"],
            Target::InfoCollection => {
                &["content/test/gpu/gpu_tests/test_expectations/info_collection_expectations.txt"]
            }
            Target::TraceTest => {
                &["content/test/gpu/gpu_tests/test_expectations/trace_test_expectations.txt"]
            }
            Target::WebgpuCts => &[
                "third_party/dawn/webgpu-cts/expectations.txt",
                "third_party/dawn/webgpu-cts/slow_tests.txt",
            ],
        }
    }

    /// Line-comment prefix used by this target's expectation format.
    pub fn comment_prefix(&self) -> &'static str {
        match self {
            Target::AngleEnd2end => "//",
            _ => "#",
        }
    }

    /// True if this target's files start with a tag header. Only lines after
    /// the `END TAG HEADER` line are subject to tag canonicalization.
    pub fn has_tag_header(&self) -> bool {
        matches!(self, Target::TraceTest | Target::WebgpuCts)
    }

    /// Marker comment inserted as the first line of an updated file. Its
    /// presence short-circuits any later run.
    pub fn update_marker(&self) -> String {
        format!("{} LOCAL UPDATE FOR INTEL GPUS", self.comment_prefix())
    }
}

//! Result-document kinds and their extraction shapes.

/// Declared type of a result document.
///
/// The JSON is not self-describing; the harness supplies this tag alongside
/// the file and it alone decides how the document is walked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResultKind {
    /// `gtest_angle`.
    GtestAngle,
    /// `telemetry_gpu_integration_test`.
    TelemetryGpuIntegrationTest,
    /// `webgpu_blink_web_tests`.
    WebgpuBlinkWebTests,
    /// `gtest_chrome`.
    GtestChrome,
    /// `angle`; aggregate counters only, no per-test identifiers.
    Angle,
    /// `dawn`.
    Dawn,
}

/// Extraction strategy selected by a [`ResultKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultShape {
    /// Nested `tests` mapping with `expected`/`actual` leaves.
    Tree,
    /// `per_iteration_data`: a map from test name to per-iteration records.
    FlatIteration,
    /// Aggregate `errors`/`failures`/`tests` counters.
    AggregateCounter,
    /// `testsuites` array of named `testsuite` case arrays.
    SuiteArray,
}

impl ResultKind {
    /// All accepted kind names, in declaration order.
    pub const NAMES: &'static [&'static str] = &[
        "gtest_angle",
        "telemetry_gpu_integration_test",
        "webgpu_blink_web_tests",
        "gtest_chrome",
        "angle",
        "dawn",
    ];

    /// Parses a declared result-type tag. Unknown tags yield `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gtest_angle" => Some(ResultKind::GtestAngle),
            "telemetry_gpu_integration_test" => Some(ResultKind::TelemetryGpuIntegrationTest),
            "webgpu_blink_web_tests" => Some(ResultKind::WebgpuBlinkWebTests),
            "gtest_chrome" => Some(ResultKind::GtestChrome),
            "angle" => Some(ResultKind::Angle),
            "dawn" => Some(ResultKind::Dawn),
            _ => None,
        }
    }

    /// The extraction strategy for this kind.
    pub fn shape(&self) -> ResultShape {
        match self {
            ResultKind::GtestAngle
            | ResultKind::TelemetryGpuIntegrationTest
            | ResultKind::WebgpuBlinkWebTests => ResultShape::Tree,
            ResultKind::GtestChrome => ResultShape::FlatIteration,
            ResultKind::Angle => ResultShape::AggregateCounter,
            ResultKind::Dawn => ResultShape::SuiteArray,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_parses_to_a_kind() {
        for &name in ResultKind::NAMES {
            assert!(ResultKind::from_name(name).is_some(), "unparsed: {name}");
        }
        assert_eq!(ResultKind::from_name("gtest"), None);
    }

    #[test]
    fn tree_kinds_share_a_shape() {
        assert_eq!(ResultKind::GtestAngle.shape(), ResultShape::Tree);
        assert_eq!(
            ResultKind::TelemetryGpuIntegrationTest.shape(),
            ResultShape::Tree
        );
        assert_eq!(ResultKind::WebgpuBlinkWebTests.shape(), ResultShape::Tree);
        assert_eq!(ResultKind::GtestChrome.shape(), ResultShape::FlatIteration);
        assert_eq!(ResultKind::Angle.shape(), ResultShape::AggregateCounter);
        assert_eq!(ResultKind::Dawn.shape(), ResultShape::SuiteArray);
    }
}

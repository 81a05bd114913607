//! Locally curated expectation and suppression lines.
//!
//! These entries are not upstreamed into the expectation files; they are
//! maintained here and either appended to the files on update
//! ([`local_expectations`]) or matched against classified failures for
//! targets that have no expectation file at all ([`report_suppressions`]).

/// Appended to `src/tests/angle_end2end_tests_expectations.txt`.
const ANGLE_END2END: &[&str] = &[
    "hsdes/18019513118 WIN INTEL D3D11 : SimpleStateChangeTest.DrawWithTextureTexSubImageThenDrawAgain/ES2_D3D11 = SKIP",
    "hsdes/18019513118 WIN INTEL D3D11 : SimpleStateChangeTest.UpdateTextureInUse/ES2_D3D11 = SKIP",
    // Windows RDP failures because Microsoft basic render is got.
    "0000 WIN D3D11 : EGLDisplaySelectionTestDeviceId.DeviceId/* = SKIP",
    "0000 WIN D3D11 : EGLDisplaySelectionTestDeviceId.DeviceIdConcurrently/* = SKIP",
    // Windows failures related to lock screen.
    "0000 WIN : GPUTestConfigTest.GPUTestConfigConditions_D3D11/ES2_D3D9 = SKIP",
    "0000 WIN : ProgramBinariesAcrossPlatforms.CreateAndReloadBinary/ES2_D3D11_to_ES2_D3D9 = SKIP",
    "0000 WIN : ProgramBinariesAcrossPlatforms.CreateAndReloadBinary/ES2_D3D9_to_ES2_D3D11 = SKIP",
];

/// Appended to
/// `content/test/gpu/gpu_tests/test_expectations/info_collection_expectations.txt`.
const INFO_COLLECTION: &[&str] = &[
    // Windows failures related to RDP or lock screen.
    "[ win ] InfoCollection_direct_composition [ Failure ]",
];

/// Appended to
/// `content/test/gpu/gpu_tests/test_expectations/trace_test_expectations.txt`.
const TRACE_TEST: &[&str] = &[
    // https://github.com/webatintel/webconformance/issues/24
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_FourColors_Rot_180 [ Failure ]",
    // Windows failures related to RDP or lock screen.
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Underlay [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Underlay_Fullsize [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4 [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_BGRA [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_FourColors_Aspect_4x3 [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_FourColors_Rot_270 [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_FourColors_Rot_90 [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_Fullsize [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_NV12 [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_Rounded_Corner [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_VP_SCALING [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_MP4_YUY2 [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_SW_Decode [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_VP9 [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_VP9_BGRA [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_VP9_Fullsize [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_VP9_NV12 [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_VP9_VP_SCALING [ Failure ]",
    "[ win intel ] OverlayModeTraceTest_DirectComposition_Video_VP9_YUY2 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Underlay [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_MP4 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_MP4_FourColors_Aspect_4x3 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_MP4_FourColors_Rot_180 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_MP4_FourColors_Rot_270 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_MP4_FourColors_Rot_90 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_MP4_NV12 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_MP4_Rounded_Corner [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_MP4_VP_SCALING [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_MP4_YUY2 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_SW_Decode [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_VP9 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_VP9_NV12 [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_VP9_VP_SCALING [ Failure ]",
    "[ win intel ] VideoPathTraceTest_DirectComposition_Video_VP9_YUY2 [ Failure ]",
];

/// Appended to `third_party/dawn/webgpu-cts/expectations.txt`.
const WEBGPU_CTS: &[&str] = &[
    "crbug.com/1301808 [ intel ubuntu ] webgpu:web_platform,canvas,configure:viewFormats:canvasType=\"onscreen\";format=\"rgba16float\";* [ Failure ]",
    "crbug.com/1301808 [ intel ubuntu ] webgpu:web_platform,canvas,configure:viewFormats:canvasType=\"offscreen\";format=\"rgba16float\";* [ Failure ]",
];

/// Suppressions for `angle_white_box_tests`, which has no expectation file.
/// Matched against classified failures in the test report instead.
const ANGLE_WHITE_BOX: &[&str] = &[
    // Windows failures related to RDP or lock screen.
    "[ win32 ] D3DTextureClearTest.ClearBGRA8/ES2_D3D9",
    "[ win32 ] D3DTextureClearTest.ClearR16/ES2_D3D9",
    "[ win32 ] D3DTextureClearTest.ClearR8/ES2_D3D9",
    "[ win32 ] D3DTextureClearTest.ClearRG16/ES2_D3D9",
    "[ win32 ] D3DTextureClearTest.ClearRG8/ES2_D3D9",
    "[ win32 ] D3DTextureClearTest.ClearRGB10A2/ES2_D3D9",
    "[ win32 ] D3DTextureClearTest.ClearRGBA8/ES2_D3D9",
    "[ win32 ] D3DTextureClearTest.ClearRGBAF16/ES2_D3D9",
    "[ win32 ] D3DTextureTest.BindTexImage/ES2_D3D9",
    "[ win32 ] D3DTextureTest.CheckSampleMismatch/ES2_D3D9",
    "[ win32 ] D3DTextureTest.Clear/ES2_D3D9",
    "[ win32 ] D3DTextureTest.DepthStencil/ES2_D3D9",
    "[ win32 ] D3DTextureTest.GlColorspaceNotAllowedForTypedD3DTexture/ES2_D3D9",
    "[ win32 ] D3DTextureTest.NonReadablePBuffer/ES2_D3D9",
    "[ win32 ] D3DTextureTest.NonRenderableTextureImage/ES2_D3D9",
    "[ win32 ] D3DTextureTest.RGBEmulationTextureImage/ES2_D3D9",
    "[ win32 ] D3DTextureTest.TestD3D11SupportedFormatsSurface/ES2_D3D9",
    "[ win32 ] D3DTextureTest.TestD3D11SupportedFormatsTexture/ES2_D3D9",
    "[ win32 ] D3DTextureTest.TestD3D11TypelessTexture/ES2_D3D9",
    "[ win32 ] D3DTextureTest.TextureArray/ES2_D3D9",
    "[ win32 ] D3DTextureTest.TypelessD3DTextureNotSupported/ES2_D3D9",
    "[ win32 ] D3DTextureTest.UnnecessaryWidthHeightAttributes/ES2_D3D9",
    "[ win32 ] D3DTextureYUVTest.NV12TextureImageReadPixel/ES2_D3D9",
    "[ win32 ] D3DTextureYUVTest.NV12TextureImageRender/ES2_D3D9",
    "[ win32 ] D3DTextureYUVTest.NV12TextureImageSampler/ES2_D3D9",
    "[ win32 ] D3DTextureYUVTest.P010TextureImageReadPixel/ES2_D3D9",
    "[ win32 ] D3DTextureYUVTest.P010TextureImageRender/ES2_D3D9",
    "[ win32 ] D3DTextureYUVTest.P010TextureImageSampler/ES2_D3D9",
    "[ win32 ] D3DTextureYUVTest.P016TextureImageReadPixel/ES2_D3D9",
    "[ win32 ] D3DTextureYUVTest.P016TextureImageRender/ES2_D3D9",
    "[ win32 ] D3DTextureYUVTest.P016TextureImageSampler/ES2_D3D9",
    "[ win32 ] EGLDirectCompositionTest.RenderSolidColor/ES2_D3D11_NoFixture",
    "[ win32 ] ErrorMessagesTest.ErrorMessages/ES2_D3D9",
];

/// Locally maintained expectation lines appended to `file` on update.
///
/// Keyed by the repo-relative expectation file path; files with no curated
/// entries get an empty slice.
pub fn local_expectations(file: &str) -> &'static [&'static str] {
    match file {
        "src/tests/angle_end2end_tests_expectations.txt" => ANGLE_END2END,
        "content/test/gpu/gpu_tests/test_expectations/info_collection_expectations.txt" => {
            INFO_COLLECTION
        }
        "content/test/gpu/gpu_tests/test_expectations/trace_test_expectations.txt" => TRACE_TEST,
        "third_party/dawn/webgpu-cts/expectations.txt" => WEBGPU_CTS,
        _ => &[],
    }
}

/// Suppression lines for targets without an expectation file.
///
/// These are never written to disk; they suppress known failures when a
/// classified result report is post-processed.
pub fn report_suppressions(target: &str) -> &'static [&'static str] {
    match target {
        // Dawn e2e failures are suppressed host-by-host, e.g.
        // "[ <host os> ] ComputeStorageBufferBarrierTests.UniformToStorageAddPingPong/D3D11_Intel_R_Arc_TM_A770_Graphics".
        "dawn_end2end_tests" => &[],
        "angle_white_box_tests" => ANGLE_WHITE_BOX,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::Target;

    #[test]
    fn every_target_file_has_a_table_entry() {
        // Not every file has curated entries (slow_tests.txt has none), but
        // each single-file target must resolve to its list.
        for target in [
            Target::AngleEnd2end,
            Target::InfoCollection,
            Target::TraceTest,
        ] {
            let file = target.expectation_files()[0];
            assert!(!local_expectations(file).is_empty(), "no entries for {file}");
        }
        assert!(local_expectations("third_party/dawn/webgpu-cts/slow_tests.txt").is_empty());
        assert!(local_expectations("unknown.txt").is_empty());
    }

    #[test]
    fn report_suppressions_cover_report_only_targets() {
        assert!(!report_suppressions("angle_white_box_tests").is_empty());
        assert!(report_suppressions("dawn_end2end_tests").is_empty());
        assert!(report_suppressions("trace_test").is_empty());
    }
}

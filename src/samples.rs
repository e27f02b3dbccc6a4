//! Representative extractor outputs.
//!
//! The upstream prototypes served fixed extractor results while the real
//! models were under development; these are the library-shaped equivalents,
//! used by the demos and the integration tests.

use crate::features::{AudioFeatures, VideoFeatures};
use crate::fusion::FusionRequest;

/// Video features from an unremarkable screening session.
pub fn baseline_video() -> VideoFeatures {
    VideoFeatures::new(0.05, 0.92)
        .with_blink_rate(12.5)
        .with_expression_variability(0.72)
        .with_metric("eyeTrackingStability", 0.89)
        .with_metric("microExpressionCount", 7.0)
}

/// Audio features from an unremarkable screening session.
pub fn baseline_audio() -> AudioFeatures {
    AudioFeatures::new(0.03, 0.04)
        .with_pitch_variability(0.32)
        .with_articulation_rate(4.5)
        .with_metric("pauseCount", 12.0)
        .with_metric("speechRateConsistency", 0.78)
}

/// Video features showing pronounced motor symptoms.
pub fn elevated_video() -> VideoFeatures {
    VideoFeatures::new(0.8, 0.4)
        .with_blink_rate(22.0)
        .with_expression_variability(0.31)
}

/// Audio features showing pronounced voice instability.
pub fn elevated_audio() -> AudioFeatures {
    AudioFeatures::new(0.7, 0.65)
        .with_pitch_variability(0.55)
        .with_articulation_rate(2.8)
}

/// Complete request for the baseline session.
pub fn baseline_request() -> FusionRequest {
    FusionRequest::new(baseline_video(), baseline_audio())
}

/// Complete request for the elevated session.
pub fn elevated_request() -> FusionRequest {
    FusionRequest::new(elevated_video(), elevated_audio())
}

//! The risk fusion engine.
//!
//! Combines one video-derived and one audio-derived feature record into a
//! scored, classified assessment. Fusion is pure and synchronous; the engine
//! holds no mutable state and can serve concurrent evaluations.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::MODEL_VERSION;
use crate::assessment::{RiskAssessment, RiskFactors};
use crate::features::{AudioFeatures, VideoFeatures};
use crate::recommend::{RecommendationPolicy, StaticRecommendations};

use super::config::FusionConfig;

/// Request envelope pairing the two modality records.
///
/// Mirrors the upstream service boundary: each modality arrives
/// independently and is absent when its extractor failed or was skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FusionRequest {
    /// Video-derived features, if the video pipeline produced any
    #[serde(default)]
    pub video: Option<VideoFeatures>,
    /// Audio-derived features, if the audio pipeline produced any
    #[serde(default)]
    pub audio: Option<AudioFeatures>,
}

impl FusionRequest {
    /// Create a complete request from both records.
    pub fn new(video: VideoFeatures, audio: AudioFeatures) -> Self {
        Self {
            video: Some(video),
            audio: Some(audio),
        }
    }

    /// Whether both required records are present.
    pub fn is_complete(&self) -> bool {
        self.video.is_some() && self.audio.is_some()
    }
}

/// Errors returned by [`RiskFusionEngine::evaluate`].
///
/// Fusion requires the full modality pair; there is no single-modality
/// fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FusionError {
    /// The request carried no video features
    #[error("video features are required for fusion but were not provided")]
    MissingVideo,

    /// The request carried no audio features
    #[error("audio features are required for fusion but were not provided")]
    MissingAudio,
}

/// Fuses multimodal feature records into risk assessments.
///
/// The default engine reproduces the canonical fusion behavior: weights
/// 3 / 2 / 2.5 / 2.5, thresholds 0.3 / 0.6, confidence 0.85, and the static
/// recommendation strings.
pub struct RiskFusionEngine {
    config: FusionConfig,
    policy: Box<dyn RecommendationPolicy>,
}

impl RiskFusionEngine {
    /// Create an engine with the canonical configuration and the static
    /// recommendation policy.
    pub fn new() -> Self {
        Self::with_config(FusionConfig::default())
    }

    /// Create an engine with a custom configuration.
    pub fn with_config(config: FusionConfig) -> Self {
        Self {
            config,
            policy: Box::new(StaticRecommendations),
        }
    }

    /// Replace the recommendation policy.
    pub fn with_policy<P>(mut self, policy: P) -> Self
    where
        P: RecommendationPolicy + 'static,
    {
        self.policy = Box::new(policy);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &FusionConfig {
        &self.config
    }

    /// Evaluate a request, requiring both modality records.
    ///
    /// The video record is checked before the audio record, so a request
    /// missing both reports the video first.
    pub fn evaluate(&self, request: &FusionRequest) -> Result<RiskAssessment, FusionError> {
        let video = request.video.as_ref().ok_or(FusionError::MissingVideo)?;
        let audio = request.audio.as_ref().ok_or(FusionError::MissingAudio)?;
        Ok(self.fuse(video, audio))
    }

    /// Fuse one video record and one audio record into an assessment.
    ///
    /// Total function: out-of-range inputs are not rejected per-feature,
    /// only the final score is clamped into [0.0, 1.0].
    pub fn fuse(&self, video: &VideoFeatures, audio: &AudioFeatures) -> RiskAssessment {
        let weights = &self.config.weights;

        let raw = video.tremor * weights.tremor
            + (1.0 - video.face_symmetry) * weights.face_asymmetry
            + audio.jitter * weights.jitter
            + audio.shimmer * weights.shimmer;

        let total = weights.total();
        let normalized = if total > 0.0 { raw / total } else { 0.0 };

        // A NaN raw score (non-finite input) resolves to the conservative end.
        let risk_score = if normalized.is_nan() {
            1.0
        } else {
            normalized.clamp(0.0, 1.0)
        };

        let risk_class = self.config.thresholds.classify(risk_score);

        debug!("fused risk: raw={:.4}, score={:.4}, class={}", raw, risk_score, risk_class);

        RiskAssessment {
            risk_score,
            risk_class,
            confidence: self.config.confidence,
            risk_factors: RiskFactors::default(),
            recommendations: self.policy.recommend(risk_score, risk_class),
            model_version: MODEL_VERSION.to_string(),
        }
    }
}

impl Default for RiskFusionEngine {
    fn default() -> Self {
        Self::new()
    }
}

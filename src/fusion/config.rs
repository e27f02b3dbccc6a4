//! Fusion weights, class thresholds, and engine configuration.

use serde::{Deserialize, Serialize};

use crate::assessment::RiskClass;

/// Canonical weight applied to the tremor signal
pub const DEFAULT_TREMOR_WEIGHT: f64 = 3.0;
/// Canonical weight applied to facial asymmetry (1 - faceSymmetry)
pub const DEFAULT_FACE_ASYMMETRY_WEIGHT: f64 = 2.0;
/// Canonical weight applied to the jitter signal
pub const DEFAULT_JITTER_WEIGHT: f64 = 2.5;
/// Canonical weight applied to the shimmer signal
pub const DEFAULT_SHIMMER_WEIGHT: f64 = 2.5;
/// Canonical lower bound of the Moderate class
pub const DEFAULT_MODERATE_THRESHOLD: f64 = 0.3;
/// Canonical lower bound of the High class
pub const DEFAULT_HIGH_THRESHOLD: f64 = 0.6;
/// Canonical confidence attached to every assessment (a placeholder value,
/// not derived from the inputs)
pub const DEFAULT_CONFIDENCE: f64 = 0.85;

/// Weights of the linear fusion formula.
///
/// The asymmetry weight multiplies `1 - faceSymmetry`, so a perfectly
/// symmetric face contributes nothing to the raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionWeights {
    /// Multiplies the tremor signal
    pub tremor: f64,
    /// Multiplies facial asymmetry
    pub face_asymmetry: f64,
    /// Multiplies the jitter signal
    pub jitter: f64,
    /// Multiplies the shimmer signal
    pub shimmer: f64,
}

impl Default for FusionWeights {
    fn default() -> Self {
        Self {
            tremor: DEFAULT_TREMOR_WEIGHT,
            face_asymmetry: DEFAULT_FACE_ASYMMETRY_WEIGHT,
            jitter: DEFAULT_JITTER_WEIGHT,
            shimmer: DEFAULT_SHIMMER_WEIGHT,
        }
    }
}

impl FusionWeights {
    /// Sum of all weights; the normalization divisor (10.0 at defaults).
    pub fn total(&self) -> f64 {
        self.tremor + self.face_asymmetry + self.jitter + self.shimmer
    }
}

/// Class boundaries applied to the normalized score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskThresholds {
    /// Lower bound of the Moderate class
    pub moderate: f64,
    /// Lower bound of the High class
    pub high: f64,
}

impl Default for RiskThresholds {
    fn default() -> Self {
        Self {
            moderate: DEFAULT_MODERATE_THRESHOLD,
            high: DEFAULT_HIGH_THRESHOLD,
        }
    }
}

impl RiskThresholds {
    /// Create thresholds, each clamped into [0.0, 1.0].
    ///
    /// `moderate` is expected not to exceed `high`; with inverted bounds the
    /// High comparison wins and the Moderate band is empty.
    pub fn new(moderate: f64, high: f64) -> Self {
        Self {
            moderate: moderate.clamp(0.0, 1.0),
            high: high.clamp(0.0, 1.0),
        }
    }

    /// Classify a normalized score.
    ///
    /// Intervals are half-open: a score equal to a boundary takes the
    /// higher class.
    pub fn classify(&self, score: f64) -> RiskClass {
        if score >= self.high {
            RiskClass::High
        } else if score >= self.moderate {
            RiskClass::Moderate
        } else {
            RiskClass::Low
        }
    }
}

/// Complete engine configuration.
///
/// The defaults reproduce the canonical fusion behavior exactly. The types
/// serialize both ways so a host application can embed them in its own
/// configuration; this crate itself reads nothing from disk or environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FusionConfig {
    /// Formula weights
    pub weights: FusionWeights,
    /// Classification thresholds
    pub thresholds: RiskThresholds,
    /// Confidence attached to every assessment
    pub confidence: f64,
}

impl Default for FusionConfig {
    fn default() -> Self {
        Self {
            weights: FusionWeights::default(),
            thresholds: RiskThresholds::default(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }
}

impl FusionConfig {
    /// Create the canonical configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the formula weights
    pub fn with_weights(mut self, weights: FusionWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Replace the classification thresholds
    pub fn with_thresholds(mut self, thresholds: RiskThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    /// Override the attached confidence, clamped into [0.0, 1.0]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }
}

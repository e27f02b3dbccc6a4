//! Risk assessment results and classification.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::MODEL_VERSION;

/// Coarse three-level risk bucket derived from the fused score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskClass {
    /// Score below 0.3
    Low,
    /// Score in [0.3, 0.6)
    Moderate,
    /// Score of 0.6 and above
    High,
}

impl Default for RiskClass {
    fn default() -> Self {
        RiskClass::Low
    }
}

impl RiskClass {
    /// Classify a score using the canonical thresholds.
    ///
    /// Intervals are half-open: a score equal to a boundary takes the
    /// higher class.
    pub fn from_score(score: f64) -> Self {
        if score >= 0.6 {
            RiskClass::High
        } else if score >= 0.3 {
            RiskClass::Moderate
        } else {
            RiskClass::Low
        }
    }

    /// Class name as serialized in the canonical schema.
    pub fn name(&self) -> &'static str {
        match self {
            RiskClass::Low => "Low",
            RiskClass::Moderate => "Moderate",
            RiskClass::High => "High",
        }
    }

    /// Whether the class calls for clinical follow-up.
    pub fn is_elevated(&self) -> bool {
        !matches!(self, RiskClass::Low)
    }
}

impl fmt::Display for RiskClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Canonical importance of the tremor signal
pub const TREMOR_IMPORTANCE: f64 = 0.4;
/// Canonical importance of the facial-symmetry signal
pub const FACE_SYMMETRY_IMPORTANCE: f64 = 0.2;
/// Canonical importance of the jitter signal
pub const JITTER_IMPORTANCE: f64 = 0.25;
/// Canonical importance of the shimmer signal
pub const SHIMMER_IMPORTANCE: f64 = 0.15;

/// Relative importance attached to each fused signal.
///
/// Constant in the current model: the values are reported with every
/// assessment but are not derived from the inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RiskFactors {
    /// Weight of the tremor signal
    pub tremor: f64,
    /// Weight of the facial-symmetry signal
    pub face_symmetry: f64,
    /// Weight of the jitter signal
    pub jitter: f64,
    /// Weight of the shimmer signal
    pub shimmer: f64,
}

impl Default for RiskFactors {
    fn default() -> Self {
        Self {
            tremor: TREMOR_IMPORTANCE,
            face_symmetry: FACE_SYMMETRY_IMPORTANCE,
            jitter: JITTER_IMPORTANCE,
            shimmer: SHIMMER_IMPORTANCE,
        }
    }
}

impl RiskFactors {
    /// Factor name → weight mapping, keyed as in the canonical schema.
    pub fn to_map(&self) -> HashMap<String, f64> {
        HashMap::from([
            ("tremor".to_string(), self.tremor),
            ("faceSymmetry".to_string(), self.face_symmetry),
            ("jitter".to_string(), self.jitter),
            ("shimmer".to_string(), self.shimmer),
        ])
    }

    /// The factor carrying the largest weight.
    pub fn dominant(&self) -> &'static str {
        let mut name = "tremor";
        let mut weight = self.tremor;
        for (candidate, value) in [
            ("faceSymmetry", self.face_symmetry),
            ("jitter", self.jitter),
            ("shimmer", self.shimmer),
        ] {
            if value > weight {
                name = candidate;
                weight = value;
            }
        }
        name
    }
}

/// Complete result of one fusion evaluation.
///
/// Write-once: the engine creates it, the caller owns it. Serializes to the
/// canonical camelCase schema consumed by downstream stores and clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    /// Fused risk score, always within [0.0, 1.0]
    pub risk_score: f64,
    /// Risk bucket derived from the score
    pub risk_class: RiskClass,
    /// Confidence in the assessment (0.0 to 1.0)
    pub confidence: f64,
    /// Relative importance of each fused signal
    #[serde(default)]
    pub risk_factors: RiskFactors,
    /// Human-readable follow-up suggestions
    #[serde(default)]
    pub recommendations: Vec<String>,
    /// Version of the fusion model that produced this result
    #[serde(default = "default_model_version")]
    pub model_version: String,
}

fn default_model_version() -> String {
    MODEL_VERSION.to_string()
}

impl RiskAssessment {
    /// Create an assessment from a score and confidence, both clamped into
    /// [0.0, 1.0]. The class follows the canonical thresholds; factors and
    /// model version take their canonical values.
    pub fn new(risk_score: f64, confidence: f64) -> Self {
        let risk_score = risk_score.clamp(0.0, 1.0);
        Self {
            risk_score,
            risk_class: RiskClass::from_score(risk_score),
            confidence: confidence.clamp(0.0, 1.0),
            risk_factors: RiskFactors::default(),
            recommendations: Vec::new(),
            model_version: default_model_version(),
        }
    }

    /// Attach recommendations
    pub fn with_recommendations(mut self, recommendations: Vec<String>) -> Self {
        self.recommendations = recommendations;
        self
    }

    /// Score expressed as the percentage shown to patients.
    pub fn risk_percent(&self) -> f64 {
        self.risk_score * 100.0
    }
}

impl fmt::Display for RiskAssessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.1}% ({} Risk), confidence {:.0}%",
            self.risk_percent(),
            self.risk_class,
            self.confidence * 100.0
        )
    }
}

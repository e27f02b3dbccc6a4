//! Video-derived feature record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{FeatureError, check_finite, check_non_negative, check_unit_range};

/// Metrics extracted from one recorded video session.
///
/// Produced by the upstream video extractor and consumed once by the fusion
/// engine. A field the extractor did not report keeps its neutral value:
/// no tremor, a fully symmetric face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoFeatures {
    /// Hand and face tremor intensity (0.0 = none, 1.0 = severe)
    #[serde(default)]
    pub tremor: f64,
    /// Facial symmetry (1.0 = perfectly symmetric)
    #[serde(default = "default_face_symmetry")]
    pub face_symmetry: f64,
    /// Blinks per minute
    #[serde(default)]
    pub blink_rate: f64,
    /// Variability of facial expressions (0.0 to 1.0)
    #[serde(default)]
    pub expression_variability: f64,
    /// Extractor-specific metrics not read by the fusion formula
    #[serde(default)]
    pub additional_metrics: HashMap<String, f64>,
}

fn default_face_symmetry() -> f64 {
    1.0
}

impl Default for VideoFeatures {
    fn default() -> Self {
        Self {
            tremor: 0.0,
            face_symmetry: 1.0,
            blink_rate: 0.0,
            expression_variability: 0.0,
            additional_metrics: HashMap::new(),
        }
    }
}

impl VideoFeatures {
    /// Create a record from the two signals the fusion formula reads.
    pub fn new(tremor: f64, face_symmetry: f64) -> Self {
        Self {
            tremor,
            face_symmetry,
            ..Default::default()
        }
    }

    /// Set the blink rate
    pub fn with_blink_rate(mut self, blink_rate: f64) -> Self {
        self.blink_rate = blink_rate;
        self
    }

    /// Set the expression variability
    pub fn with_expression_variability(mut self, expression_variability: f64) -> Self {
        self.expression_variability = expression_variability;
        self
    }

    /// Attach an extractor-specific metric
    pub fn with_metric(mut self, name: &str, value: f64) -> Self {
        self.additional_metrics.insert(name.to_string(), value);
        self
    }

    /// Check every metric against its documented range.
    ///
    /// Fusion never rejects a record; callers wanting strict boundaries run
    /// this before handing the record over.
    pub fn validate(&self) -> Result<(), FeatureError> {
        check_unit_range("tremor", self.tremor)?;
        check_unit_range("faceSymmetry", self.face_symmetry)?;
        check_non_negative("blinkRate", self.blink_rate)?;
        check_unit_range("expressionVariability", self.expression_variability)?;
        for (name, value) in &self.additional_metrics {
            check_finite(name, *value)?;
        }
        Ok(())
    }
}

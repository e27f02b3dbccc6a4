//! Audio-derived feature record.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{FeatureError, check_finite, check_unit_range};

/// Metrics extracted from one recorded speech sample.
///
/// Produced by the upstream audio extractor and consumed once by the fusion
/// engine. Missing fields default to zero, the neutral value for every
/// audio metric.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioFeatures {
    /// Cycle-to-cycle frequency perturbation of the voice (0.0 to 1.0)
    #[serde(default)]
    pub jitter: f64,
    /// Cycle-to-cycle amplitude perturbation of the voice (0.0 to 1.0)
    #[serde(default)]
    pub shimmer: f64,
    /// Variability of the vocal pitch
    #[serde(default)]
    pub pitch_variability: f64,
    /// Speaking tempo in syllables per second
    #[serde(default)]
    pub articulation_rate: f64,
    /// Extractor-specific metrics not read by the fusion formula
    #[serde(default)]
    pub additional_metrics: HashMap<String, f64>,
}

impl AudioFeatures {
    /// Create a record from the two signals the fusion formula reads.
    pub fn new(jitter: f64, shimmer: f64) -> Self {
        Self {
            jitter,
            shimmer,
            ..Default::default()
        }
    }

    /// Set the pitch variability
    pub fn with_pitch_variability(mut self, pitch_variability: f64) -> Self {
        self.pitch_variability = pitch_variability;
        self
    }

    /// Set the articulation rate
    pub fn with_articulation_rate(mut self, articulation_rate: f64) -> Self {
        self.articulation_rate = articulation_rate;
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
        check_unit_range("jitter", self.jitter)?;
        check_unit_range("shimmer", self.shimmer)?;
        check_finite("pitchVariability", self.pitch_variability)?;
        check_finite("articulationRate", self.articulation_rate)?;
        for (name, value) in &self.additional_metrics {
            check_finite(name, *value)?;
        }
        Ok(())
    }
}

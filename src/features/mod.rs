//! Feature records produced by the upstream media extractors.
//!
//! Each modality arrives as an immutable record of named scalar metrics.
//! Fields the extractor could not measure keep neutral defaults, so partial
//! payloads deserialize cleanly. Validation is opt-in: the fusion engine
//! accepts any record, while boundary layers that want strict ranges call
//! [`VideoFeatures::validate`] / [`AudioFeatures::validate`] first.

pub mod audio;
pub mod video;

pub use audio::AudioFeatures;
pub use video::VideoFeatures;

use thiserror::Error;

/// Errors reported by the opt-in feature validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FeatureError {
    /// A metric carried NaN or an infinity
    #[error("{metric} must be finite, got {value}")]
    NotFinite { metric: String, value: f64 },

    /// A bounded metric fell outside its documented range
    #[error("{metric} must be within [{min}, {max}], got {value}")]
    OutOfRange {
        metric: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// A rate metric was below zero
    #[error("{metric} must be non-negative, got {value}")]
    Negative { metric: String, value: f64 },
}

fn check_finite(metric: &str, value: f64) -> Result<(), FeatureError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(FeatureError::NotFinite {
            metric: metric.to_string(),
            value,
        })
    }
}

fn check_unit_range(metric: &str, value: f64) -> Result<(), FeatureError> {
    check_finite(metric, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(FeatureError::OutOfRange {
            metric: metric.to_string(),
            value,
            min: 0.0,
            max: 1.0,
        })
    }
}

fn check_non_negative(metric: &str, value: f64) -> Result<(), FeatureError> {
    check_finite(metric, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(FeatureError::Negative {
            metric: metric.to_string(),
            value,
        })
    }
}

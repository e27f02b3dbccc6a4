//! Recommendation policies for completed assessments.
//!
//! The engine delegates follow-up text to a pluggable policy. The default
//! attaches the same fixed strings to every assessment; richer policies can
//! vary the text by risk class or drop it entirely.

use crate::assessment::RiskClass;

/// Referral string attached to elevated assessments
pub const FOLLOW_UP_NEUROLOGIST: &str = "Consider follow-up with neurologist";
/// Reassessment scheduling string
pub const REASSESS_30_DAYS: &str = "Schedule reassessment in 30 days";
/// Tremor monitoring string
pub const MONITOR_TREMOR: &str = "Monitor tremor progression";
/// Normal-result string for low-risk sessions
pub const NO_ABNORMALITIES: &str = "No significant abnormalities detected";
/// Routine-monitoring string for low-risk sessions
pub const ROUTINE_MONITORING: &str = "Continue routine monitoring";

/// Strategy producing follow-up recommendations for a scored assessment.
///
/// Implementations must be thread-safe: one engine may serve concurrent
/// evaluations.
pub trait RecommendationPolicy: Send + Sync {
    /// Produce zero or more recommendations for the given score and class.
    fn recommend(&self, score: f64, class: RiskClass) -> Vec<String>;
}

/// Fixed recommendation set, independent of score and class.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticRecommendations;

impl RecommendationPolicy for StaticRecommendations {
    fn recommend(&self, _score: f64, _class: RiskClass) -> Vec<String> {
        vec![
            FOLLOW_UP_NEUROLOGIST.to_string(),
            REASSESS_30_DAYS.to_string(),
            MONITOR_TREMOR.to_string(),
        ]
    }
}

/// Class-dependent recommendation sets.
///
/// Low-risk sessions get the normal-result phrasing; elevated classes reuse
/// the canonical follow-up strings, with the neurologist referral reserved
/// for High.
#[derive(Debug, Clone, Copy, Default)]
pub struct TieredRecommendations;

impl RecommendationPolicy for TieredRecommendations {
    fn recommend(&self, _score: f64, class: RiskClass) -> Vec<String> {
        match class {
            RiskClass::Low => vec![NO_ABNORMALITIES.to_string(), ROUTINE_MONITORING.to_string()],
            RiskClass::Moderate => vec![REASSESS_30_DAYS.to_string(), MONITOR_TREMOR.to_string()],
            RiskClass::High => vec![
                FOLLOW_UP_NEUROLOGIST.to_string(),
                REASSESS_30_DAYS.to_string(),
                MONITOR_TREMOR.to_string(),
            ],
        }
    }
}

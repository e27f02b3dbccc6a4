//! # Neuro Risk Fusion
//!
//! Multimodal risk fusion for telehealth neurological screening. The crate
//! combines video-derived and audio-derived feature records into a scored,
//! classified risk assessment with follow-up recommendations.
//!
//! ## Features
//!
//! - Linear weighted fusion of tremor, facial-symmetry, jitter, and shimmer
//!   signals, with the score always clamped into [0, 1]
//! - Deterministic Low / Moderate / High classification with configurable
//!   thresholds
//! - Pluggable recommendation policies
//! - Canonical camelCase JSON schema for requests and assessments
//! - Opt-in range validation for feature records
//!
//! ## Example
//!
//! ```rust
//! use neuro_risk_fusion::{
//!     AudioFeatures, FusionRequest, RiskClass, RiskFusionEngine, VideoFeatures,
//! };
//!
//! let engine = RiskFusionEngine::new();
//! let request = FusionRequest::new(
//!     VideoFeatures::new(0.05, 0.92),
//!     AudioFeatures::new(0.03, 0.04),
//! );
//!
//! let assessment = engine.evaluate(&request).unwrap();
//! assert_eq!(assessment.risk_class, RiskClass::Low);
//! assert!(assessment.risk_score < 0.3);
//! ```

pub mod assessment;
pub mod features;
pub mod fusion;
pub mod recommend;
pub mod samples;

pub use assessment::{RiskAssessment, RiskClass, RiskFactors};
pub use features::{AudioFeatures, FeatureError, VideoFeatures};
pub use fusion::{
    FusionConfig, FusionError, FusionRequest, FusionWeights, RiskFusionEngine, RiskThresholds,
};
pub use recommend::{RecommendationPolicy, StaticRecommendations, TieredRecommendations};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Version string attached to every assessment
pub const MODEL_VERSION: &str = "1.0.0";

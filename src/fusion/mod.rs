//! Risk fusion: configuration and the engine itself.

pub mod config;
pub mod engine;

pub use config::{FusionConfig, FusionWeights, RiskThresholds};
pub use engine::{FusionError, FusionRequest, RiskFusionEngine};

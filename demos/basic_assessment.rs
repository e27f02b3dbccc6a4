//! Basic risk assessment example
//!
//! This example demonstrates how to:
//! - Evaluate sample screening sessions
//! - Read the assessment fields
//! - Swap the recommendation policy
//!
//! Run with: cargo run --example basic_assessment

use neuro_risk_fusion::{
    AudioFeatures, FusionRequest, RiskFusionEngine, TieredRecommendations, VideoFeatures, samples,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Neuro Risk Fusion - Basic Assessment ===\n");

    let engine = RiskFusionEngine::new();

    // Baseline screening session (the canonical mock extractor output)
    let baseline = engine.evaluate(&samples::baseline_request())?;
    println!("--- Baseline session ---");
    println!("Result: {}", baseline);
    println!("Dominant factor: {}", baseline.risk_factors.dominant());
    println!("Recommendations:");
    for recommendation in &baseline.recommendations {
        println!("  - {}", recommendation);
    }
    println!();

    // Session with pronounced motor and voice symptoms
    let elevated = engine.evaluate(&samples::elevated_request())?;
    println!("--- Elevated session ---");
    println!("Result: {}", elevated);
    println!(
        "Needs follow-up: {}",
        if elevated.risk_class.is_elevated() {
            "yes"
        } else {
            "no"
        }
    );
    println!();

    // Hand-built records with a class-aware recommendation policy
    let tiered = RiskFusionEngine::new().with_policy(TieredRecommendations);
    let request = FusionRequest::new(
        VideoFeatures::new(0.45, 0.7).with_blink_rate(18.0),
        AudioFeatures::new(0.35, 0.3).with_articulation_rate(3.6),
    );
    let assessment = tiered.evaluate(&request)?;
    println!("--- Tiered policy, moderate session ---");
    println!("Result: {}", assessment);
    println!("Recommendations:");
    for recommendation in &assessment.recommendations {
        println!("  - {}", recommendation);
    }

    println!("\n=== Example Complete ===");

    Ok(())
}

//! Canonical JSON schema example
//!
//! This example demonstrates how to:
//! - Serialize a fusion request and its assessment
//! - Parse a partial extractor payload (missing fields take their defaults)
//!
//! Run with: cargo run --example json_report

use neuro_risk_fusion::{FusionRequest, RiskFusionEngine, samples};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("=== Neuro Risk Fusion - JSON Report ===\n");

    let engine = RiskFusionEngine::new();
    let request = samples::baseline_request();

    println!("--- Request ---");
    println!("{}\n", serde_json::to_string_pretty(&request)?);

    let assessment = engine.evaluate(&request)?;
    println!("--- Assessment ---");
    println!("{}\n", serde_json::to_string_pretty(&assessment)?);

    // Partial payloads parse with neutral defaults: the missing faceSymmetry
    // reads as 1.0 and the missing shimmer as 0.0
    let partial: FusionRequest =
        serde_json::from_str(r#"{"video": {"tremor": 0.45}, "audio": {"jitter": 0.2}}"#)?;
    let partial_assessment = engine.evaluate(&partial)?;
    println!("--- Partial payload ---");
    println!("Result: {}", partial_assessment);

    println!("\n=== Example Complete ===");

    Ok(())
}

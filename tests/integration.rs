//! Integration tests for the risk fusion pipeline.

use neuro_risk_fusion::{
    AudioFeatures, FusionConfig, FusionError, FusionRequest, MODEL_VERSION, RecommendationPolicy,
    RiskClass, RiskFusionEngine, RiskThresholds, StaticRecommendations, TieredRecommendations,
    VideoFeatures, samples,
};

mod fusion_pipeline {
    use super::*;

    #[test]
    fn test_baseline_session_end_to_end() {
        let engine = RiskFusionEngine::new();
        let assessment = engine.evaluate(&samples::baseline_request()).unwrap();

        assert!(
            (assessment.risk_score - 0.0485).abs() < 1e-9,
            "Mock extractor output should score 0.0485"
        );
        assert_eq!(assessment.risk_class, RiskClass::Low);
        assert_eq!(assessment.confidence, 0.85);
        assert_eq!(assessment.model_version, MODEL_VERSION);
        assert_eq!(assessment.recommendations.len(), 3);
    }

    #[test]
    fn test_elevated_session_end_to_end() {
        let engine = RiskFusionEngine::new();
        let assessment = engine.evaluate(&samples::elevated_request()).unwrap();

        assert_eq!(assessment.risk_class, RiskClass::High);
        assert!(assessment.risk_class.is_elevated(), "High class should call for follow-up");
    }

    #[test]
    fn test_wire_payload_to_assessment() {
        let payload = r#"{
            "video": {"tremor": 0.05, "faceSymmetry": 0.92, "blinkRate": 12.5},
            "audio": {"jitter": 0.03, "shimmer": 0.04, "articulationRate": 4.5}
        }"#;
        let request: FusionRequest = serde_json::from_str(payload).unwrap();
        let assessment = RiskFusionEngine::new().evaluate(&request).unwrap();

        assert!((assessment.risk_score - 0.0485).abs() < 1e-9);
        assert_eq!(assessment.risk_class, RiskClass::Low);
    }

    #[test]
    fn test_sample_records_validate_cleanly() {
        assert!(samples::baseline_video().validate().is_ok());
        assert!(samples::baseline_audio().validate().is_ok());
    }
}

mod risk_classification {
    use super::*;

    fn score_for(tremor: f64, face_symmetry: f64, jitter: f64, shimmer: f64) -> f64 {
        RiskFusionEngine::new()
            .fuse(
                &VideoFeatures::new(tremor, face_symmetry),
                &AudioFeatures::new(jitter, shimmer),
            )
            .risk_score
    }

    #[test]
    fn test_neutral_inputs_are_low() {
        assert_eq!(score_for(0.0, 1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_saturated_inputs_are_high() {
        assert_eq!(score_for(1.0, 0.0, 1.0, 1.0), 1.0);
    }

    #[test]
    fn test_score_is_clamped_for_wild_inputs() {
        let score = score_for(50.0, -3.0, 10.0, 10.0);
        assert_eq!(score, 1.0, "Runaway inputs should clamp, not overflow");

        let score = score_for(-50.0, 1.0, 0.0, 0.0);
        assert_eq!(score, 0.0, "Negative raw risk should clamp to zero");
    }

    #[test]
    fn test_boundary_scores_take_higher_class() {
        let engine = RiskFusionEngine::new();

        // raw 3.0 normalizes to the Moderate boundary
        let moderate = engine.fuse(
            &VideoFeatures::new(1.0, 1.0),
            &AudioFeatures::default(),
        );
        assert_eq!(moderate.risk_class, RiskClass::Moderate);

        // raw 6.0 normalizes to the High boundary
        let high = engine.fuse(
            &VideoFeatures::new(1.0, 1.0),
            &AudioFeatures::new(0.6, 0.6),
        );
        assert_eq!(high.risk_class, RiskClass::High);
    }

    #[test]
    fn test_custom_thresholds_reclassify() {
        let config = FusionConfig::default().with_thresholds(RiskThresholds::new(0.02, 0.04));
        let engine = RiskFusionEngine::with_config(config);
        let assessment = engine.evaluate(&samples::baseline_request()).unwrap();

        assert_eq!(
            assessment.risk_class,
            RiskClass::High,
            "Tightened thresholds should reclassify the baseline session"
        );
    }
}

mod missing_modalities {
    use super::*;

    #[test]
    fn test_missing_video_is_rejected() {
        let request = FusionRequest {
            video: None,
            audio: Some(samples::baseline_audio()),
        };
        let err = RiskFusionEngine::new().evaluate(&request).unwrap_err();

        assert_eq!(err, FusionError::MissingVideo);
        assert!(err.to_string().contains("video"));
    }

    #[test]
    fn test_missing_audio_is_rejected() {
        let request = FusionRequest {
            video: Some(samples::baseline_video()),
            audio: None,
        };
        let err = RiskFusionEngine::new().evaluate(&request).unwrap_err();

        assert_eq!(err, FusionError::MissingAudio);
    }

    #[test]
    fn test_null_modalities_parse_then_fail_evaluation() {
        let request: FusionRequest =
            serde_json::from_str(r#"{"video": null, "audio": null}"#).unwrap();
        assert!(!request.is_complete());

        let result = RiskFusionEngine::new().evaluate(&request);
        assert!(result.is_err());
    }
}

mod recommendation_policies {
    use super::*;

    struct NoFollowUp;

    impl RecommendationPolicy for NoFollowUp {
        fn recommend(&self, _score: f64, _class: RiskClass) -> Vec<String> {
            Vec::new()
        }
    }

    struct ScoreEcho;

    impl RecommendationPolicy for ScoreEcho {
        fn recommend(&self, score: f64, class: RiskClass) -> Vec<String> {
            vec![format!("score {:.4} classified {}", score, class)]
        }
    }

    #[test]
    fn test_default_engine_uses_static_policy() {
        let assessment = RiskFusionEngine::new().evaluate(&samples::baseline_request()).unwrap();
        let expected = StaticRecommendations.recommend(0.0, RiskClass::Low);

        assert_eq!(assessment.recommendations, expected);
    }

    #[test]
    fn test_empty_policy_is_allowed() {
        let engine = RiskFusionEngine::new().with_policy(NoFollowUp);
        let assessment = engine.evaluate(&samples::elevated_request()).unwrap();

        assert!(
            assessment.recommendations.is_empty(),
            "A recommendation policy is allowed to produce an empty set"
        );
    }

    #[test]
    fn test_policy_sees_score_and_class() {
        let engine = RiskFusionEngine::new().with_policy(ScoreEcho);
        let assessment = engine.evaluate(&samples::baseline_request()).unwrap();

        assert_eq!(assessment.recommendations.len(), 1);
        assert!(assessment.recommendations[0].contains("0.0485"));
        assert!(assessment.recommendations[0].contains("Low"));
    }

    #[test]
    fn test_tiered_policy_scales_with_class() {
        let engine = RiskFusionEngine::new().with_policy(TieredRecommendations);

        let low = engine.evaluate(&samples::baseline_request()).unwrap();
        let high = engine.evaluate(&samples::elevated_request()).unwrap();

        assert!(low.recommendations.len() < high.recommendations.len());
        assert!(high
            .recommendations
            .contains(&"Consider follow-up with neurologist".to_string()));
    }
}

mod canonical_schema {
    use super::*;

    #[test]
    fn test_assessment_key_set() {
        let assessment = RiskFusionEngine::new().evaluate(&samples::baseline_request()).unwrap();
        let value = serde_json::to_value(&assessment).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "confidence",
                "modelVersion",
                "recommendations",
                "riskClass",
                "riskFactors",
                "riskScore",
            ]
        );
    }

    #[test]
    fn test_class_and_factors_serialize_canonically() {
        let assessment = RiskFusionEngine::new().evaluate(&samples::baseline_request()).unwrap();
        let value = serde_json::to_value(&assessment).unwrap();

        assert_eq!(value["riskClass"], "Low");
        assert_eq!(value["modelVersion"], "1.0.0");

        let factors = value["riskFactors"].as_object().unwrap();
        assert_eq!(factors["tremor"], 0.4);
        assert_eq!(factors["faceSymmetry"], 0.2);
        assert_eq!(factors["jitter"], 0.25);
        assert_eq!(factors["shimmer"], 0.15);
    }

    #[test]
    fn test_feature_records_roundtrip() {
        let video = samples::baseline_video();
        let json = serde_json::to_string(&video).unwrap();
        let parsed: VideoFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, video);

        let audio = samples::baseline_audio();
        let json = serde_json::to_string(&audio).unwrap();
        let parsed: AudioFeatures = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, audio);
    }
}

mod concurrent_use {
    use super::*;

    #[test]
    fn test_engine_shared_across_threads() {
        let engine = RiskFusionEngine::new();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        let assessment = engine.evaluate(&samples::baseline_request()).unwrap();
                        assert_eq!(assessment.risk_class, RiskClass::Low);
                    }
                });
            }
        });
    }
}

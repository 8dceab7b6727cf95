//! Integration test: config load, survey parsing, risk mapping, response decoding, outcome lines.

mod common;

use heart_risk_form::{
    config::{ClientConfig, RiskBands},
    error::SubmitError,
    logging::{OutcomeLine, StructuredLogger},
    risk::{HealthStatus, PredictionResult, RiskEngine, RiskLevel},
    survey::{clamp_age_value, parse_age, SurveyInput, FIELD_IDS},
};
use std::io::Write;
use std::path::Path;

#[test]
fn config_load_default() {
    let c = ClientConfig::load(Path::new("nonexistent.json"));
    assert_eq!(c.api.predict_url(), "https://mskjdn.pythonanywhere.com/predict");
    assert_eq!(c.api.health_url(), "https://mskjdn.pythonanywhere.com/health");
    assert!(c.api.request_timeout_secs.is_none());
    assert_eq!(c.risk.high_threshold, 20.0);
}

#[test]
fn config_load_partial_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    let mut f = std::fs::File::create(&path).unwrap();
    writeln!(f, r#"{{"api":{{"base_url":"http://localhost:5000/"}},"log":{{"json":false}}}}"#).unwrap();

    let c = ClientConfig::load(&path);
    assert_eq!(c.api.predict_url(), "http://localhost:5000/predict");
    assert!(!c.log.json);
    assert_eq!(c.log.level, "info");
}

#[test]
fn config_invalid_file_falls_back_to_default() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").unwrap();
    let c = ClientConfig::load(&path);
    assert_eq!(c.api.base_url, ClientConfig::default().api.base_url);
}

#[test]
fn config_env_override() {
    std::env::set_var("HEARTRISK_API_URL", "http://127.0.0.1:9000");
    let c = ClientConfig::default().with_env_overrides();
    std::env::remove_var("HEARTRISK_API_URL");
    assert_eq!(c.api.health_url(), "http://127.0.0.1:9000/health");
}

#[test]
fn parse_age_is_lenient() {
    assert_eq!(parse_age("42"), Some(42));
    assert_eq!(parse_age(" 42 "), Some(42));
    assert_eq!(parse_age("42.9"), Some(42));
    assert_eq!(parse_age("42abc"), Some(42));
    assert_eq!(parse_age("-7"), Some(-7));
    assert_eq!(parse_age(""), None);
    assert_eq!(parse_age("abc"), None);
    assert_eq!(parse_age("-"), None);
}

#[test]
fn clamp_age_value_bounds() {
    assert_eq!(clamp_age_value("150").as_deref(), Some("120"));
    assert_eq!(clamp_age_value("-5").as_deref(), Some("0"));
    assert_eq!(clamp_age_value("120.5").as_deref(), Some("120"));
    assert_eq!(clamp_age_value("42"), None);
    assert_eq!(clamp_age_value("0"), None);
    assert_eq!(clamp_age_value(""), None);
    assert_eq!(clamp_age_value("abc"), None);
}

#[test]
fn survey_serializes_every_field() {
    let input = common::sample_survey();
    let json = serde_json::to_value(&input).unwrap();
    let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    let mut expected: Vec<&str> = FIELD_IDS.to_vec();
    expected.sort_unstable();
    assert_eq!(keys, expected);

    let back = SurveyInput::from_values(input.to_values());
    assert_eq!(back, input);
}

#[test]
fn risk_level_labels() {
    assert_eq!(RiskLevel::from_label("Risiko Rendah"), RiskLevel::Low);
    assert_eq!(RiskLevel::from_label("Risiko Sedang"), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_label("Risiko Tinggi"), RiskLevel::High);
    assert_eq!(
        RiskLevel::from_label("risiko tinggi"),
        RiskLevel::Unknown("risiko tinggi".into())
    );
    assert_eq!(RiskLevel::Low.bundle().recommendations.len(), 5);
    assert_eq!(RiskLevel::Medium.bundle().recommendations.len(), 6);
    assert_eq!(RiskLevel::High.bundle().recommendations.len(), 7);
    assert_eq!(RiskLevel::Unknown(String::new()).bundle(), RiskLevel::High.bundle());
}

#[test]
fn risk_engine_score_bands() {
    let engine = RiskEngine::new(RiskBands::default());
    let mut r = PredictionResult {
        success: true,
        risk_level: "Risiko Sedang".into(),
        risk_score: Some(12.0),
        ..Default::default()
    };
    let a = engine.assess(&r);
    assert_eq!(a.level, RiskLevel::Medium);
    assert_eq!(a.score_band, Some(RiskLevel::Medium));
    assert!(!a.band_mismatch());

    r.risk_score = Some(35.0);
    assert!(engine.assess(&r).band_mismatch());

    r.risk_score = None;
    assert!(!engine.assess(&r).band_mismatch());

    assert_eq!(RiskLevel::from_score(8.99, engine.bands()), RiskLevel::Low);
    assert_eq!(RiskLevel::from_score(9.0, engine.bands()), RiskLevel::Medium);
    assert_eq!(RiskLevel::from_score(20.0, engine.bands()), RiskLevel::High);
}

#[test]
fn prediction_result_decodes_service_bodies() {
    let ok: PredictionResult = serde_json::from_str(
        r#"{"success":true,"prediction":1,"risk_score":27.35,"risk_level":"Risiko Tinggi",
            "category":"Berbahaya","status":"Memerlukan Tindakan","priority":"Segera",
            "message":"Prediction successful"}"#,
    )
    .unwrap();
    assert!(ok.success);
    assert_eq!(ok.prediction, Some(1));
    assert_eq!(ok.level(), RiskLevel::High);

    let failed: PredictionResult = serde_json::from_str(
        r#"{"success":false,"error":"bad input","message":"Error during prediction"}"#,
    )
    .unwrap();
    assert!(!failed.success);
    assert_eq!(failed.message.as_deref(), Some("Error during prediction"));
    assert_eq!(failed.risk_score, None);
}

#[test]
fn health_status_decodes() {
    let h: HealthStatus = serde_json::from_str(r#"{"status":"healthy","model_loaded":false}"#).unwrap();
    assert_eq!(h.status, "healthy");
    assert!(!h.model_loaded);
}

#[test]
fn outcome_lines_are_single_json_objects() {
    let result = PredictionResult {
        success: true,
        risk_level: "Risiko Rendah".into(),
        status: "Sehat".into(),
        category: "Baik".into(),
        priority: "Rutin".into(),
        ..Default::default()
    };
    let mut buf = Vec::new();
    StructuredLogger::emit_json(&OutcomeLine::from_result(&result), &mut buf);
    let text = String::from_utf8(buf).unwrap();
    assert_eq!(text.lines().count(), 1);
    let v: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
    assert_eq!(v["risk_level"], "Risiko Rendah");
    assert_eq!(v["recommendations"].as_array().unwrap().len(), 5);

    let err = SubmitError::Rejected("X".into());
    let mut buf = Vec::new();
    StructuredLogger::emit_json(&OutcomeLine::from_error(&err), &mut buf);
    let v: serde_json::Value = serde_json::from_slice(&buf).unwrap();
    assert_eq!(v["success"], false);
    assert_eq!(v["alert"], "X");
}

//! Headless front end: loads a filled-in survey into an in-memory page, runs the form adapter
//! against the configured prediction service, and prints the rendered outcome as one JSON line.

use heart_risk_form::{
    adapter::FormAdapter,
    config::ClientConfig,
    logging::{OutcomeLine, StructuredLogger},
    page::MemoryPage,
    survey::FIELD_IDS,
    Element,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{info, warn};

/// Reads a JSON object of field id to raw value. Numbers are written as typed,
/// `null` leaves the field blank, unknown keys are ignored.
fn load_form_values(path: &Path) -> Result<Vec<(&'static str, String)>, Box<dyn std::error::Error + Send + Sync>> {
    let data = std::fs::read_to_string(path)?;
    let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(&data)?;
    let mut out = Vec::with_capacity(FIELD_IDS.len());
    for id in FIELD_IDS {
        let value = match raw.get(id) {
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(serde_json::Value::Null) | None => {
                warn!(field = id, "field missing from survey file; left blank");
                String::new()
            }
            Some(other) => other.to_string(),
        };
        out.push((id, value));
    }
    Ok(out)
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("HEARTRISK_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let config = ClientConfig::load(&config_path).with_env_overrides();

    StructuredLogger::init(&config.log);

    let survey_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .ok_or("usage: heart-risk-form <survey.json>")?;

    let page = Arc::new(MemoryPage::survey_layout());
    for (id, value) in load_form_values(&survey_path)? {
        if let Some(el) = page.element(id) {
            el.set_value(&value);
        }
    }

    let adapter = FormAdapter::with_reqwest(&config, page.clone())?;
    info!(base_url = %config.api.base_url, "submitting survey");

    // Typing into the age field fires the clamp before the form is submitted.
    adapter.clamp_age();

    let ((), outcome) = tokio::join!(adapter.check_connectivity(), adapter.submit());

    let mut stdout = std::io::stdout();
    match outcome {
        Ok(result) => {
            StructuredLogger::emit_json(&OutcomeLine::from_result(&result), &mut stdout);
            Ok(())
        }
        Err(e) => {
            StructuredLogger::emit_json(&OutcomeLine::from_error(&e), &mut stdout);
            Err(e.into())
        }
    }
}

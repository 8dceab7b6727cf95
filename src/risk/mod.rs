//! Prediction service response types and the risk presentation rules.

mod bundle;
mod engine;

pub use bundle::{PresentationBundle, HIGH_BUNDLE, LOW_BUNDLE, MEDIUM_BUNDLE};
pub use engine::{Assessment, RiskEngine, RiskLevel, LABEL_HIGH, LABEL_LOW, LABEL_MEDIUM};

use serde::{Deserialize, Serialize};

/// Body of `POST /predict`.
///
/// Any JSON object decodes. Missing, null or oddly typed fields fall back to
/// empty text or `None`, so a malformed label still renders (as high risk).
/// A failed prediction usually carries nothing but `success`, `message` and `error`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionResult {
    pub success: bool,
    /// Model probability of the positive class, in percent. Not rendered.
    #[serde(deserialize_with = "lenient::number")]
    pub risk_score: Option<f64>,
    #[serde(deserialize_with = "lenient::text")]
    pub risk_level: String,
    #[serde(deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(deserialize_with = "lenient::text")]
    pub priority: String,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
    /// Raw model class (0 or 1)
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::integer")]
    pub prediction: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient::opt_text")]
    pub error: Option<String>,
}

/// Field decoders that never reject a value, only drop what they cannot use.
mod lenient {
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    fn scalar_text(v: Value) -> Option<String> {
        match v {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(scalar_text(Value::deserialize(d)?).unwrap_or_default())
    }

    pub fn opt_text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(scalar_text(Value::deserialize(d)?))
    }

    pub fn number<'de, D: Deserializer<'de>>(d: D) -> Result<Option<f64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }

    pub fn integer<'de, D: Deserializer<'de>>(d: D) -> Result<Option<i64>, D::Error> {
        Ok(match Value::deserialize(d)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        })
    }
}

impl PredictionResult {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_label(&self.risk_level)
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    pub model_loaded: bool,
}

//! Subscriber setup and the per-submission outcome line (one JSON object per line).

use crate::config::LogConfig;
use crate::error::SubmitError;
use crate::risk::PredictionResult;
use chrono::Utc;
use serde::Serialize;
use std::io::Write;
use tracing_subscriber::fmt::{self, format::FmtSpan};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Summary of one submission, written as a single JSON line.
#[derive(Debug, Serialize)]
pub struct OutcomeLine<'a> {
    pub ts: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> OutcomeLine<'a> {
    pub fn from_result(result: &'a PredictionResult) -> Self {
        Self {
            ts: Utc::now().to_rfc3339(),
            success: true,
            risk_level: Some(&result.risk_level),
            risk_score: result.risk_score,
            status: Some(&result.status),
            category: Some(&result.category),
            priority: Some(&result.priority),
            recommendations: result.level().bundle().recommendations.to_vec(),
            alert: None,
            error: None,
        }
    }

    pub fn from_error(err: &'a SubmitError) -> Self {
        Self {
            ts: Utc::now().to_rfc3339(),
            success: false,
            risk_level: None,
            risk_score: None,
            status: None,
            category: None,
            priority: None,
            recommendations: Vec::new(),
            alert: Some(err.alert_message()),
            error: Some(err.to_string()),
        }
    }
}

/// Log setup for the form client. Diagnostics go to stderr; stdout carries
/// nothing but the outcome line of each submission.
pub struct StructuredLogger;

impl StructuredLogger {
    /// Install the global subscriber from `log` config. `RUST_LOG` wins over `log.level`.
    pub fn init(log: &LogConfig) {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
        let registry = tracing_subscriber::registry().with(filter);
        if log.json {
            registry
                .with(fmt::layer().json().with_span_events(FmtSpan::NONE).with_writer(std::io::stderr))
                .init();
        } else {
            registry.with(fmt::layer().with_writer(std::io::stderr)).init();
        }
    }

    /// Write `outcome` as one NDJSON line. Write failures are dropped: the
    /// submission already happened and the alert already fired.
    pub fn emit_json(outcome: &impl Serialize, w: &mut impl Write) {
        if let Ok(line) = serde_json::to_string(outcome) {
            let _ = writeln!(w, "{}", line);
        }
    }
}

//! Maps the service's risk label onto a presentation bundle and cross-checks it
//! against the score bands the service is configured with.

use super::bundle::{PresentationBundle, HIGH_BUNDLE, LOW_BUNDLE, MEDIUM_BUNDLE};
use super::PredictionResult;
use crate::config::RiskBands;
use serde::{Deserialize, Serialize};

pub const LABEL_LOW: &str = "Risiko Rendah";
pub const LABEL_MEDIUM: &str = "Risiko Sedang";
pub const LABEL_HIGH: &str = "Risiko Tinggi";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    /// Any label the service sends that is not one of the three above
    Unknown(String),
}

impl RiskLevel {
    /// Exact match on the service label. Total: everything else is `Unknown`.
    pub fn from_label(label: &str) -> Self {
        match label {
            LABEL_LOW => RiskLevel::Low,
            LABEL_MEDIUM => RiskLevel::Medium,
            LABEL_HIGH => RiskLevel::High,
            other => RiskLevel::Unknown(other.to_string()),
        }
    }

    /// Band the service would have picked for `score` (percent).
    pub fn from_score(score: f64, bands: &RiskBands) -> Self {
        if score >= bands.high_threshold {
            RiskLevel::High
        } else if score >= bands.medium_threshold {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Unknown labels render as high risk.
    pub fn bundle(&self) -> &'static PresentationBundle {
        match self {
            RiskLevel::Low => &LOW_BUNDLE,
            RiskLevel::Medium => &MEDIUM_BUNDLE,
            RiskLevel::High => &HIGH_BUNDLE,
            RiskLevel::Unknown(_) => &HIGH_BUNDLE,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, RiskLevel::Unknown(_))
    }
}

/// What the adapter renders for one prediction.
#[derive(Debug, Clone)]
pub struct Assessment {
    pub level: RiskLevel,
    pub bundle: &'static PresentationBundle,
    /// Band implied by `risk_score`, when a score was sent
    pub score_band: Option<RiskLevel>,
}

impl Assessment {
    /// True when the score band and the label disagree. Unknown labels never agree.
    pub fn band_mismatch(&self) -> bool {
        match &self.score_band {
            Some(band) => *band != self.level,
            None => false,
        }
    }
}

pub struct RiskEngine {
    bands: RiskBands,
}

impl RiskEngine {
    pub fn new(bands: RiskBands) -> Self {
        Self { bands }
    }

    pub fn assess(&self, result: &PredictionResult) -> Assessment {
        let level = result.level();
        let bundle = level.bundle();
        let score_band = result
            .risk_score
            .filter(|s| s.is_finite())
            .map(|s| RiskLevel::from_score(s, &self.bands));
        Assessment {
            level,
            bundle,
            score_band,
        }
    }

    pub fn bands(&self) -> &RiskBands {
        &self.bands
    }
}

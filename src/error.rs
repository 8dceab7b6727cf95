//! Error types for adapter setup and the prediction round trip.

use thiserror::Error;

/// Text shown to the user for every failure that carries no server message.
pub const CONNECTION_ALERT: &str = "Gagal terhubung ke server!";
/// Used when the service reports failure without a message.
pub const PREDICTION_FAILED: &str = "Prediction failed";

#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("required page element `{0}` not found")]
    MissingElement(String),
    #[error("submit button not found")]
    MissingSubmitButton,
    #[error("http client: {0}")]
    Client(#[from] TransportError),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },
    #[error("could not build http client: {0}")]
    Build(String),
}

/// Ways a submission can fail. Each one ends in a single alert.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("could not encode request body: {0}")]
    Encode(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("API request failed: {status}")]
    Status { status: u16 },
    #[error("{0}")]
    Rejected(String),
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SubmitError {
    /// Alert text for this failure.
    pub fn alert_message(&self) -> &str {
        match self {
            SubmitError::Rejected(message) => message,
            _ => CONNECTION_ALERT,
        }
    }
}

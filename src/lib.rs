//! Heart-disease risk form adapter.
//!
//! Modular structure:
//! - [`config`] — Service endpoints, score bands, logging
//! - [`error`] — Setup and submission errors
//! - [`survey`] — Survey record and age field helpers
//! - [`risk`] — Prediction response, risk levels, presentation bundles
//! - [`page`] — Page/element surface and an in-memory page
//! - [`transport`] — HTTP transport to the prediction service
//! - [`adapter`] — Form adapter: connectivity check, submit, render, age clamp
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod survey;
pub mod risk;
pub mod page;
pub mod transport;
pub mod adapter;
pub mod logging;

pub use config::ClientConfig;
pub use error::{AdapterError, SubmitError, TransportError};
pub use survey::SurveyInput;
pub use risk::{PredictionResult, RiskEngine, RiskLevel};
pub use page::{Element, MemoryPage, Page};
pub use transport::{HttpResponse, ReqwestTransport, Transport};
pub use adapter::FormAdapter;
pub use logging::StructuredLogger;

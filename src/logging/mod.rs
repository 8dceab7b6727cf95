//! Structured logging setup and NDJSON outcome lines.

mod format;

pub use format::{OutcomeLine, StructuredLogger};

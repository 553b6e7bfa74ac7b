// src/error.rs
use thiserror::Error;

/// Failure of one prediction round trip.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("http: {0}")]
    Http(#[from] reqwest::Error),

    /// The body is not JSON, or lacks `advice` / `risk`.
    #[error("invalid prediction body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid MINDCARE_SERVER url '{value}': {reason}")]
    InvalidServerUrl { value: String, reason: String },
}

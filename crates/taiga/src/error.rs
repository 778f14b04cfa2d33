//! Errors raised while constructing a [`crate::TaigaClient`].
//!
//! Per-call failures are reported as [`provisioning::TrackerError`] instead.

use thiserror::Error;

/// The client could not be constructed.
#[derive(Debug, Error)]
pub enum TaigaClientError {
    /// The configured base URL is unusable.
    #[error("Invalid Taiga API URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// The underlying HTTP client could not be built (e.g. TLS backend setup).
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),
}

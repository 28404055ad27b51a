//! Error types for the upstream model listing

use reqwest::StatusCode;
use thiserror::Error;

/// Upstream fetch errors.
///
/// Every variant renders to the human-readable message shown on the page;
/// callers are not expected to branch on the variant.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to reach model API: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Failed to fetch models: {}", status_reason(.0))]
    Status(StatusCode),

    #[error("Model API returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Unexpected model API response format")]
    UnexpectedShape,
}

fn status_reason(status: &StatusCode) -> &str {
    status.canonical_reason().unwrap_or(status.as_str())
}

/// Result type alias for upstream operations
pub type Result<T> = std::result::Result<T, FetchError>;

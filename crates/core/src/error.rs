//! Error types for newscan operations.
//!
//! This module defines [`ScrapeError`], the taxonomy every stage of the
//! scrape pipeline reports through. Each variant knows the HTTP status it
//! maps to at the service boundary.
//!
//! # Example
//!
//! ```rust
//! use newscan_core::{ScrapeError, Result};
//!
//! fn require_url(raw: &str) -> Result<&str> {
//!     if raw.trim().is_empty() {
//!         return Err(ScrapeError::Validation("URL is required".to_string()));
//!     }
//!     Ok(raw)
//! }
//! ```

use thiserror::Error;

/// Message used when a page yields no article blocks.
pub const NOT_FOUND_ERROR: &str = "No articles found";

/// Longer explanation attached to [`ScrapeError::NotFound`].
pub const NOT_FOUND_MESSAGE: &str =
    "The scraper could not find any articles. The website structure might be different than expected.";

/// Main error type for scrape operations.
///
/// Link resolution failures have no variant; [`crate::resolve`] recovers
/// them locally.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// Missing or malformed input. Never retried.
    #[error("{0}")]
    Validation(String),

    /// Network, transport or HTTP status failure while fetching the page.
    ///
    /// Carries the underlying message so callers can surface it verbatim.
    #[error("{0}")]
    Fetch(String),

    /// Request timeout.
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// The structural scan found no article blocks.
    #[error("{error}")]
    NotFound { error: String, message: String },

    /// HTML parsing errors, usually an invalid CSS selector.
    #[error("Failed to parse HTML: {0}")]
    HtmlParseError(String),

    /// Output serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ScrapeError {
    /// Builds the canonical "no articles" error.
    pub fn not_found() -> Self {
        ScrapeError::NotFound { error: NOT_FOUND_ERROR.to_string(), message: NOT_FOUND_MESSAGE.to_string() }
    }

    /// HTTP status code this error maps to at the service boundary.
    pub fn status_code(&self) -> u16 {
        match self {
            ScrapeError::Validation(_) => 400,
            ScrapeError::NotFound { .. } => 404,
            ScrapeError::Fetch(_)
            | ScrapeError::Timeout { .. }
            | ScrapeError::HtmlParseError(_)
            | ScrapeError::Serialization(_) => 500,
        }
    }

    /// Short taxonomy name, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            ScrapeError::Validation(_) => "ValidationError",
            ScrapeError::Fetch(_) | ScrapeError::Timeout { .. } => "FetchError",
            ScrapeError::NotFound { .. } => "NotFoundError",
            ScrapeError::HtmlParseError(_) | ScrapeError::Serialization(_) => "ProcessingError",
        }
    }
}

#[cfg(feature = "fetch")]
impl From<reqwest::Error> for ScrapeError {
    fn from(err: reqwest::Error) -> Self {
        ScrapeError::Fetch(err.to_string())
    }
}

/// Result type alias for ScrapeError.
pub type Result<T> = std::result::Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_display() {
        let err = ScrapeError::Validation("URL is required".to_string());
        assert_eq!(err.to_string(), "URL is required");
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_not_found_error() {
        let err = ScrapeError::not_found();
        assert_eq!(err.to_string(), "No articles found");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.kind(), "NotFoundError");
        match err {
            ScrapeError::NotFound { message, .. } => assert!(message.contains("website structure")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fetch_errors_map_to_500() {
        assert_eq!(ScrapeError::Fetch("connection refused".to_string()).status_code(), 500);
        assert_eq!(ScrapeError::Timeout { timeout: 30 }.status_code(), 500);
        assert_eq!(ScrapeError::Timeout { timeout: 30 }.kind(), "FetchError");
    }

    #[test]
    fn test_timeout_error() {
        let err = ScrapeError::Timeout { timeout: 30 };
        assert!(err.to_string().contains("30"));
    }
}

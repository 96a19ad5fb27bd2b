//! Error types for newswire operations.
//!
//! This module defines the main error type [`NewswireError`] which represents
//! all possible errors that can occur while building a request URL, fetching
//! a feed, and decoding the response.
//!
//! # Example
//!
//! ```rust
//! use newswire_core::{NewswireError, Result};
//!
//! fn require_body(body: &str) -> Result<&str> {
//!     if body.is_empty() {
//!         return Err(NewswireError::UnexpectedShape("empty body".to_string()));
//!     }
//!     Ok(body)
//! }
//! ```

use thiserror::Error;

/// Main error type for feed operations.
///
/// The fetch layer returns the transport variants; the decode layer returns
/// the JSON variants. Neither layer logs — the pipeline in [`crate::feed`]
/// decides what is logged and what degrades to an absent result.
#[derive(Error, Debug)]
pub enum NewswireError {
    /// HTTP request errors from reqwest.
    ///
    /// This variant wraps network errors, DNS failures, connection issues,
    /// and other HTTP-related problems.
    #[cfg(feature = "fetch")]
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Request timeout.
    ///
    /// Returned when connecting or reading exceeds the configured timeout.
    #[cfg(feature = "fetch")]
    #[error("Request timed out after {timeout} seconds")]
    Timeout { timeout: u64 },

    /// Invalid URL provided.
    ///
    /// Returned when a request URL cannot be parsed or uses an unsupported
    /// scheme.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a status other than 200.
    #[cfg(feature = "fetch")]
    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),

    /// The response body is not valid JSON.
    #[error("Malformed response JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The response decoded, but not into the expected envelope.
    ///
    /// Returned when the `response` object or the `results` array is
    /// missing or has the wrong type.
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// A result entry lacks one of the required string fields.
    ///
    /// `index` is the entry's position in the `results` array.
    #[error("Result {index} is missing required field `{field}`")]
    MissingField { field: &'static str, index: usize },
}

/// Result type alias for NewswireError.
///
/// This is a convenience alias for `std::result::Result<T, NewswireError>`.
pub type Result<T> = std::result::Result<T, NewswireError>;

//! Feed fetching over HTTP.
//!
//! This module performs the single GET against the news API and returns
//! the raw response body as text. Exactly one request is issued per call;
//! whether to re-invoke after a failure is the caller's decision.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use url::Url;

use crate::{NewswireError, Result};

/// HTTP client configuration for feed requests.
///
/// This struct controls timeout and user agent settings for HTTP requests.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// Connect timeout in seconds.
    pub connect_timeout: u64,
    /// Read timeout in seconds, applied between body chunks.
    pub read_timeout: u64,
    /// Custom User-Agent string.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout: 15,
            read_timeout: 10,
            user_agent: concat!("newswire/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Fetches the raw response body from a feed URL.
///
/// This function performs a single HTTP GET request and returns the body as
/// UTF-8 text, but only when the response status is exactly 200. Any other
/// status is reported as [`NewswireError::UnexpectedStatus`]. The connection
/// and the body stream are released on every exit path when the response and
/// client handles drop.
///
/// No headers are sent beyond the configured User-Agent, and no retries are
/// attempted.
pub async fn fetch_url(url: &str, config: &FetchConfig) -> Result<String> {
    let parsed_url = Url::parse(url).map_err(|e| NewswireError::InvalidUrl(e.to_string()))?;

    if !matches!(parsed_url.scheme(), "http" | "https") {
        return Err(NewswireError::InvalidUrl(format!(
            "unsupported scheme `{}`",
            parsed_url.scheme()
        )));
    }

    let client = Client::builder()
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .read_timeout(Duration::from_secs(config.read_timeout))
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(NewswireError::Http)?;

    let response = client
        .get(parsed_url)
        .send()
        .await
        .map_err(|e| wrap_request_error(e, config))?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(NewswireError::UnexpectedStatus(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|e| wrap_request_error(e, config))?;

    Ok(body)
}

/// Maps reqwest timeouts onto [`NewswireError::Timeout`], reporting whichever
/// of the two configured limits applies to the failed phase.
fn wrap_request_error(err: reqwest::Error, config: &FetchConfig) -> NewswireError {
    if err.is_timeout() {
        let timeout = if err.is_connect() { config.connect_timeout } else { config.read_timeout };
        NewswireError::Timeout { timeout }
    } else {
        NewswireError::Http(err)
    }
}

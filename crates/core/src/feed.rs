//! Fetch-then-parse pipeline.
//!
//! This module ties the fetcher and the decoder together the way the
//! original consumers used them: one shot per call, degrading to an absent
//! result instead of propagating errors. Each invocation is independent —
//! no shared state, no internal concurrency, and the timeouts in
//! [`FetchConfig`] are the only bounding mechanism.
//!
//! # Example
//!
//! ```no_run
//! use newswire_core::Newswire;
//!
//! #[tokio::main]
//! async fn main() {
//!     let wire = Newswire::new();
//!     match wire.fetch_latest().await {
//!         Some(articles) => println!("{} articles", articles.len()),
//!         None => println!("no result"),
//!     }
//! }
//! ```

use tracing::error;
use url::Url;

use crate::Result;
use crate::article::Article;
use crate::fetch::{FetchConfig, fetch_url};
use crate::parse::parse_articles;
use crate::query::FeedQuery;

/// News feed client combining query construction, fetching, and decoding.
pub struct Newswire {
    query: FeedQuery,
    fetch: FetchConfig,
}

impl Newswire {
    /// Creates a client with the default query and fetch settings.
    pub fn new() -> Self {
        Self { query: FeedQuery::default(), fetch: FetchConfig::default() }
    }

    /// Creates a client from explicit query and fetch settings.
    pub fn with_config(query: FeedQuery, fetch: FetchConfig) -> Self {
        Self { query, fetch }
    }

    /// The request URL this client would fetch.
    pub fn request_url(&self) -> Result<Url> {
        self.query.to_url()
    }

    /// Fetches the configured feed and decodes it into articles.
    ///
    /// A malformed endpoint is logged and yields `None`, like any other
    /// fetch failure.
    pub async fn fetch_latest(&self) -> Option<Vec<Article>> {
        let url = match self.request_url() {
            Ok(url) => url,
            Err(err) => {
                error!("problem building the request URL: {err}");
                return None;
            }
        };

        fetch_articles(url.as_str(), &self.fetch).await
    }
}

impl Default for Newswire {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches a feed URL and decodes the response into articles.
///
/// Any fetch failure — malformed URL, connection problem, timeout, or a
/// status other than 200 — is logged and treated as an empty body, so the
/// outcome collapses to `None`. Beyond the `None`/empty split the caller
/// cannot tell a failed fetch from a feed with nothing in it.
pub async fn fetch_articles(url: &str, config: &FetchConfig) -> Option<Vec<Article>> {
    let body = match fetch_url(url, config).await {
        Ok(body) => body,
        Err(err) => {
            error!("problem fetching the feed from {url}: {err}");
            String::new()
        }
    };

    parse_articles(&body)
}

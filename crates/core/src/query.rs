//! Request URL construction for the news search API.
//!
//! The endpoint, the API key, and the query parameters are explicit
//! configuration carried by [`FeedQuery`]; there is no process-wide
//! endpoint constant. [`FeedQuery::to_url`] renders the request line
//! the API expects:
//!
//! ```text
//! GET <endpoint>?order-by=<order>&show-tags=contributor&page-size=<n>&q=<topic>&api-key=<key>
//! ```
//!
//! # Example
//!
//! ```rust
//! use newswire_core::FeedQuery;
//!
//! let query = FeedQuery::builder().topic("rust").build();
//! let url = query.to_url().unwrap();
//! assert!(url.as_str().contains("q=rust"));
//! ```

use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::{NewswireError, Result};

/// Default search endpoint of the Guardian content API.
pub const DEFAULT_ENDPOINT: &str = "https://content.guardianapis.com/search";

/// API key used when none is configured (the public sandbox key).
pub const DEFAULT_API_KEY: &str = "test";

/// Sort order applied to the result list by the remote API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recently published first.
    #[default]
    Newest,
    /// Oldest publication date first.
    Oldest,
    /// Best match for the topic first.
    Relevance,
}

impl SortOrder {
    /// Wire value for the `order-by` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Relevance => "relevance",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "relevance" => Ok(Self::Relevance),
            _ => Err(format!(
                "Invalid sort order: {}. Valid options: newest, oldest, relevance",
                s
            )),
        }
    }
}

/// Parameters of one feed request.
#[derive(Debug, Clone)]
pub struct FeedQuery {
    /// Base URL of the search endpoint.
    pub endpoint: String,

    /// API key appended as the `api-key` parameter.
    pub api_key: String,

    /// Topic for the `q` parameter; omitted entirely when `None`.
    pub topic: Option<String>,

    /// Sort order for the `order-by` parameter.
    pub order_by: SortOrder,

    /// Tag class requested via `show-tags`; `contributor` carries the
    /// author name the decoder reads.
    pub show_tags: String,

    /// Result count requested via `page-size`.
    pub page_size: u32,
}

impl Default for FeedQuery {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: DEFAULT_API_KEY.to_string(),
            topic: None,
            order_by: SortOrder::Newest,
            show_tags: "contributor".to_string(),
            page_size: 20,
        }
    }
}

impl FeedQuery {
    /// Creates a new builder for FeedQuery.
    pub fn builder() -> FeedQueryBuilder {
        FeedQueryBuilder::new()
    }

    /// Renders the request URL.
    ///
    /// Query pairs are appended in the fixed order `order-by`, `show-tags`,
    /// `page-size`, `q` (when a topic is set), `api-key`.
    ///
    /// # Errors
    ///
    /// Returns [`NewswireError::InvalidUrl`] when the endpoint does not
    /// parse as a URL.
    pub fn to_url(&self) -> Result<Url> {
        let mut url = Url::parse(&self.endpoint).map_err(|e| NewswireError::InvalidUrl(e.to_string()))?;

        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("order-by", self.order_by.as_str());
            pairs.append_pair("show-tags", &self.show_tags);
            pairs.append_pair("page-size", &self.page_size.to_string());
            if let Some(topic) = &self.topic {
                pairs.append_pair("q", topic);
            }
            pairs.append_pair("api-key", &self.api_key);
        }

        Ok(url)
    }
}

/// Builder for FeedQuery.
///
/// Provides a fluent API for assembling a request.
///
/// # Example
///
/// ```rust
/// use newswire_core::{FeedQuery, SortOrder};
///
/// let query = FeedQuery::builder()
///     .topic("climate")
///     .order_by(SortOrder::Oldest)
///     .page_size(50)
///     .build();
/// assert_eq!(query.page_size, 50);
/// ```
pub struct FeedQueryBuilder {
    query: FeedQuery,
}

impl FeedQueryBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { query: FeedQuery::default() }
    }

    /// Sets the search endpoint.
    pub fn endpoint(mut self, value: impl Into<String>) -> Self {
        self.query.endpoint = value.into();
        self
    }

    /// Sets the API key.
    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.query.api_key = value.into();
        self
    }

    /// Sets the search topic.
    pub fn topic(mut self, value: impl Into<String>) -> Self {
        self.query.topic = Some(value.into());
        self
    }

    /// Sets the sort order.
    pub fn order_by(mut self, value: SortOrder) -> Self {
        self.query.order_by = value;
        self
    }

    /// Sets the requested tag class.
    pub fn show_tags(mut self, value: impl Into<String>) -> Self {
        self.query.show_tags = value.into();
        self
    }

    /// Sets the requested page size.
    pub fn page_size(mut self, value: u32) -> Self {
        self.query.page_size = value;
        self
    }

    /// Builds the query.
    pub fn build(self) -> FeedQuery {
        self.query
    }
}

impl Default for FeedQueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//! Article domain record.
//!
//! This module defines the [`Article`] struct, the sole output of the
//! decode pipeline: one record per entry of the feed's result array.

use serde::Serialize;

/// One news item decoded from a feed response.
///
/// All five attributes are kept exactly as the strings the API provided.
/// The publication date in particular stays opaque and is never parsed
/// into a date type. Articles carry no identifier and uniqueness is not
/// enforced; a list of them is replaced wholesale on the next fetch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    /// Headline of the article.
    pub title: String,

    /// Section/category name the article was published under.
    pub section: String,

    /// Contributor display name, or the `"N/A"` default.
    pub author: String,

    /// Publication date as provided by the source.
    pub date: String,

    /// URL of the article's detail page.
    pub url: String,
}

impl Article {
    /// Creates a new Article from its five attributes, unchanged.
    pub fn new(title: String, section: String, author: String, date: String, url: String) -> Self {
        Self { title, section, author, date, url }
    }
}

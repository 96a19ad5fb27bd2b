pub mod article;
pub mod error;
#[cfg(feature = "fetch")]
pub mod feed;
#[cfg(feature = "fetch")]
pub mod fetch;
pub mod parse;
pub mod query;

pub use article::Article;
pub use error::{NewswireError, Result};
#[cfg(feature = "fetch")]
pub use feed::{Newswire, fetch_articles};
#[cfg(feature = "fetch")]
pub use fetch::{FetchConfig, fetch_url};
pub use parse::{UNKNOWN_AUTHOR, parse_articles};
pub use query::{DEFAULT_API_KEY, DEFAULT_ENDPOINT, FeedQuery, FeedQueryBuilder, SortOrder};

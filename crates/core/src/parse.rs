//! Feed response decoding.
//!
//! This module converts the raw JSON text of a search response into an
//! ordered list of [`Article`]s. The expected envelope is
//! `{"response": {"results": [...]}}`, with four required string fields per
//! entry and an optional contributor tag carrying the author name.
//!
//! # Example
//!
//! ```rust
//! use newswire_core::parse_articles;
//!
//! let body = r#"{"response": {"results": [{
//!     "webTitle": "A headline",
//!     "sectionName": "World",
//!     "webPublicationDate": "2025-11-03T09:30:00Z",
//!     "webUrl": "https://example.com/a-headline"
//! }]}}"#;
//!
//! let articles = parse_articles(body).unwrap();
//! assert_eq!(articles.len(), 1);
//! assert_eq!(articles[0].author, "N/A");
//! ```

use serde_json::Value;
use tracing::warn;

use crate::article::Article;
use crate::{NewswireError, Result};

/// Author value used when a result entry carries no contributor tag.
pub const UNKNOWN_AUTHOR: &str = "N/A";

/// Decodes a raw response body into articles.
///
/// Returns `None` for an empty body, which callers can distinguish from a
/// response that decoded to zero articles.
///
/// A decode fault anywhere in the response — malformed JSON, a missing
/// envelope field, or a result entry without one of its required fields —
/// aborts extraction of the remaining entries but keeps the ones built
/// before it. The fault is logged and the partial (possibly empty) list is
/// returned, so nothing propagates to the caller.
pub fn parse_articles(body: &str) -> Option<Vec<Article>> {
    if body.is_empty() {
        return None;
    }

    let mut articles = Vec::new();
    if let Err(err) = extract_articles(body, &mut articles) {
        warn!("problem decoding the feed response: {err}");
    }

    Some(articles)
}

/// Fallible extraction over the whole response.
///
/// The first fault ends the loop; `out` keeps whatever was built before it.
fn extract_articles(body: &str, out: &mut Vec<Article>) -> Result<()> {
    let root: Value = serde_json::from_str(body)?;

    let results = root
        .get("response")
        .and_then(Value::as_object)
        .ok_or_else(|| NewswireError::UnexpectedShape("missing `response` object".to_string()))?
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| NewswireError::UnexpectedShape("missing `results` array".to_string()))?;

    for (index, entry) in results.iter().enumerate() {
        let title = required_str(entry, "webTitle", index)?;
        let section = required_str(entry, "sectionName", index)?;
        let date = required_str(entry, "webPublicationDate", index)?;
        let url = required_str(entry, "webUrl", index)?;
        let author = contributor(entry).unwrap_or(UNKNOWN_AUTHOR);

        out.push(Article::new(
            title.to_string(),
            section.to_string(),
            author.to_string(),
            date.to_string(),
            url.to_string(),
        ));
    }

    Ok(())
}

/// Looks up the contributor name in the first `tags` entry, if any.
///
/// Entries past index 0 are never consulted.
fn contributor(entry: &Value) -> Option<&str> {
    entry.get("tags")?.as_array()?.first()?.get("webTitle")?.as_str()
}

/// Reads a required string field from a result entry.
fn required_str<'a>(entry: &'a Value, field: &'static str, index: usize) -> Result<&'a str> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .ok_or(NewswireError::MissingField { field, index })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(title: &str, url: &str) -> Value {
        json!({
            "webTitle": title,
            "sectionName": "World",
            "webPublicationDate": "2025-11-03T09:30:00Z",
            "webUrl": url,
        })
    }

    fn response(results: Vec<Value>) -> String {
        json!({"response": {"results": results}}).to_string()
    }

    #[test]
    fn test_empty_body_is_no_result() {
        assert_eq!(parse_articles(""), None);
    }

    #[test]
    fn test_two_entries_without_tags() {
        let body = response(vec![entry("First", "https://example.com/1"), entry("Second", "https://example.com/2")]);

        let articles = parse_articles(&body).unwrap();
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "First");
        assert_eq!(articles[1].title, "Second");
        assert_eq!(articles[0].author, UNKNOWN_AUTHOR);
        assert_eq!(articles[1].author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_author_comes_from_first_tag_only() {
        let mut item = entry("Tagged", "https://example.com/tagged");
        item["tags"] = json!([{"webTitle": "Jane Doe"}, {"webTitle": "Second Author"}]);
        let body = response(vec![item]);

        let articles = parse_articles(&body).unwrap();
        assert_eq!(articles[0].author, "Jane Doe");
    }

    #[test]
    fn test_empty_tags_keeps_default_author() {
        let mut item = entry("Untagged", "https://example.com/untagged");
        item["tags"] = json!([]);
        let body = response(vec![item]);

        let articles = parse_articles(&body).unwrap();
        assert_eq!(articles[0].author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_first_tag_without_web_title_keeps_default_author() {
        let mut item = entry("Tagged", "https://example.com/tagged");
        item["tags"] = json!([{"id": "profile/someone"}]);
        let body = response(vec![item]);

        let articles = parse_articles(&body).unwrap();
        assert_eq!(articles[0].author, UNKNOWN_AUTHOR);
    }

    #[test]
    fn test_malformed_json_yields_empty_list() {
        let articles = parse_articles("{not json").unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_missing_results_yields_empty_list() {
        let body = json!({"response": {"status": "ok"}}).to_string();
        let articles = parse_articles(&body).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_results_with_wrong_type_yields_empty_list() {
        let body = json!({"response": {"results": "nope"}}).to_string();
        let articles = parse_articles(&body).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_fault_keeps_entries_built_before_it() {
        let mut broken = entry("Broken", "unused");
        broken.as_object_mut().unwrap().remove("webUrl");
        let body = response(vec![
            entry("First", "https://example.com/1"),
            broken,
            entry("Third", "https://example.com/3"),
        ]);

        let articles = parse_articles(&body).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "First");
    }

    #[test]
    fn test_non_string_required_field_counts_as_missing() {
        let mut item = entry("Numeric", "https://example.com/n");
        item["webPublicationDate"] = json!(20251103);
        let body = response(vec![item]);

        let articles = parse_articles(&body).unwrap();
        assert!(articles.is_empty());
    }

    #[test]
    fn test_order_matches_result_array() {
        let body = response(vec![
            entry("a", "https://example.com/a"),
            entry("b", "https://example.com/b"),
            entry("c", "https://example.com/c"),
        ]);

        let titles: Vec<String> = parse_articles(&body)
            .unwrap()
            .into_iter()
            .map(|a| a.title)
            .collect();
        assert_eq!(titles, vec!["a", "b", "c"]);
    }
}

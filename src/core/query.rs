//! Query entry points: decode, parse, evaluate and format in one call
//!
//! The `get_*` functions take document text; the `select_*` functions take an
//! already-decoded value. The `*_items` variants return every rendered
//! string, while the `*_item` variants require exactly one.

use crate::core::{evaluate, format_value, QueryPath};
use crate::error::{JaxonError, Result};
use crate::io::DocumentFormat;
use log::debug;
use serde_json::Value;

/// Extract every item selected by `path` from a JSON document
///
/// ```
/// let items = jaxon::get_items(r#"[{"name": "John Doe", "age": 30}]"#, "[*].name")?;
/// assert_eq!(items, vec!["John Doe"]);
/// # Ok::<(), jaxon::JaxonError>(())
/// ```
///
/// A query that matches nothing returns an empty list, not an error.
pub fn get_items(text: &str, path: &str) -> Result<Vec<String>> {
    get_items_as(text, path, DocumentFormat::Json)
}

/// Extract exactly one item selected by `path` from a JSON document
///
/// ```
/// let name = jaxon::get_item(r#"{"name": "John Doe", "age": 30}"#, "name")?;
/// assert_eq!(name, "John Doe");
/// # Ok::<(), jaxon::JaxonError>(())
/// ```
///
/// Returns [`JaxonError::NotFound`] when nothing matches and
/// [`JaxonError::Ambiguous`] when more than one item does.
pub fn get_item(text: &str, path: &str) -> Result<String> {
    get_item_as(text, path, DocumentFormat::Json)
}

/// Like [`get_items`], decoding the document as `format`
pub fn get_items_as(text: &str, path: &str, format: DocumentFormat) -> Result<Vec<String>> {
    let document = format.decode(text)?;
    select_items(&document, path)
}

/// Like [`get_item`], decoding the document as `format`
pub fn get_item_as(text: &str, path: &str, format: DocumentFormat) -> Result<String> {
    expect_single(path, get_items_as(text, path, format)?)
}

/// Extract every item selected by `path` from a decoded document
pub fn select_items(document: &Value, path: &str) -> Result<Vec<String>> {
    let query = QueryPath::parse(path)?;
    let matches = evaluate(document, &query)?;

    let mut items = Vec::with_capacity(matches.len());
    for value in matches.iter() {
        items.extend(format_value(value)?);
    }

    debug!(
        "query '{}' matched {} value(s), {} item(s)",
        query,
        matches.len(),
        items.len()
    );
    Ok(items)
}

/// Extract exactly one item selected by `path` from a decoded document
pub fn select_item(document: &Value, path: &str) -> Result<String> {
    expect_single(path, select_items(document, path)?)
}

fn expect_single(path: &str, mut items: Vec<String>) -> Result<String> {
    match items.len() {
        0 => Err(JaxonError::not_found(path)),
        1 => Ok(items.remove(0)),
        count => Err(JaxonError::ambiguous(path, count)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_get_items_wildcard() {
        let items = get_items(r#"[{"name":"John Doe"}]"#, "[*].name").unwrap();
        assert_eq!(items, vec!["John Doe"]);
    }

    #[test]
    fn test_get_items_no_match_is_empty() {
        let items = get_items(r#"{"a": 1}"#, "b").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_get_item_single() {
        let doc = r#"{"name": "John Doe", "age": 30}"#;
        assert_eq!(get_item(doc, "name").unwrap(), "John Doe");
        assert_eq!(get_item(doc, "age").unwrap(), "30");
    }

    #[test]
    fn test_get_item_not_found() {
        match get_item(r#"{"a": 1}"#, "b").unwrap_err() {
            JaxonError::NotFound { query } => assert_eq!(query, "b"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_get_item_ambiguous_counts_rendered_items() {
        match get_item(r#"{"tags": ["a", "b"]}"#, "tags").unwrap_err() {
            JaxonError::Ambiguous { query, count } => {
                assert_eq!(query, "tags");
                assert_eq!(count, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
        assert_eq!(get_item(r#"{"tags": ["a"]}"#, "tags").unwrap(), "a");
    }

    #[test]
    fn test_get_item_agrees_with_get_items() {
        let doc = r#"{"a": [], "b": [1], "c": [1, 2], "d": {"x": 1}}"#;
        for path in ["a", "b", "c", "d", "e"] {
            let items = get_items(doc, path).unwrap();
            let item = get_item(doc, path);
            match items.len() {
                0 => assert!(matches!(item, Err(JaxonError::NotFound { .. }))),
                1 => assert_eq!(item.unwrap(), items[0]),
                _ => assert!(matches!(item, Err(JaxonError::Ambiguous { .. }))),
            }
        }
    }

    #[test]
    fn test_errors_propagate() {
        assert!(matches!(
            get_items("{not json", "a").unwrap_err(),
            JaxonError::Decode(_)
        ));
        assert!(matches!(
            get_items(r#"{"a": [1, 2]}"#, "a[5]").unwrap_err(),
            JaxonError::OutOfRange { .. }
        ));
        assert!(matches!(
            get_items(r#"{"a": 1}"#, "a.b").unwrap_err(),
            JaxonError::TypeMismatch { .. }
        ));
        assert!(matches!(
            get_items(r#"{"a": 1}"#, "a..b").unwrap_err(),
            JaxonError::QuerySyntax { .. }
        ));
    }

    #[test]
    fn test_select_on_decoded_value() {
        let doc = json!({"people": [{"name": "Ann"}, {"name": "Bob"}]});
        assert_eq!(select_items(&doc, "people[*].name").unwrap(), vec!["Ann", "Bob"]);
        assert_eq!(select_item(&doc, "people[1].name").unwrap(), "Bob");
    }

    #[test]
    fn test_get_items_from_yaml() {
        let doc = "people:\n  - name: Ann\n  - name: Bob\n";
        assert_eq!(
            get_items_as(doc, "people[*].name", DocumentFormat::Yaml).unwrap(),
            vec!["Ann", "Bob"]
        );
        assert_eq!(
            get_item_as(doc, "people[0].name", DocumentFormat::Yaml).unwrap(),
            "Ann"
        );
    }
}

//! jaxon: extract values from JSON documents with dot-notation paths
//!
//! A path such as `people[*].name` is parsed into typed segments, walked over
//! a decoded document, and every matched value is rendered as display text.
//!
//! # Path syntax
//!
//! - `name` selects the value at key `name` of an object
//! - `name[2]` selects element 2 of the array at key `name`
//! - `name[*]` selects every element of the array at key `name`
//! - `[0]` and `[*]` without a key apply to the current value itself
//! - segments are joined with `.`, e.g. `groups[*].members[0].id`
//!
//! # Rendering
//!
//! - `null`, booleans and strings render as bare text
//! - integral numbers render without a fractional part (`42.0` is `42`)
//! - arrays expand into one item per element
//! - objects render as a single JSON text with sorted keys and a three-space
//!   indent
//!
//! # Quick Start
//!
//! ```rust
//! use jaxon::{get_item, get_items, Result};
//!
//! fn main() -> Result<()> {
//!     let doc = r#"{"people": [{"name": "Ann", "age": 30.0}, {"name": "Bob"}]}"#;
//!
//!     assert_eq!(get_items(doc, "people[*].name")?, vec!["Ann", "Bob"]);
//!     assert_eq!(get_item(doc, "people[0].age")?, "30");
//!     assert!(get_items(doc, "people[*].email")?.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! # Working with parsed paths
//!
//! ```rust
//! use jaxon::{evaluate, format_value, QueryPath, Result};
//! use serde_json::json;
//!
//! fn main() -> Result<()> {
//!     let doc = json!({"a": {"b": [1, 2]}});
//!     let path = QueryPath::parse("a.b")?;
//!     let matches = evaluate(&doc, &path)?;
//!     assert_eq!(matches.len(), 1);
//!     assert_eq!(format_value(matches.values()[0])?, vec!["1", "2"]);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`core`]: path parsing, evaluation, formatting and the query entry points
//! - [`io`]: decoding documents from strings, files and stdin (JSON or YAML)
//! - [`error`]: the error type shared by every operation

// Public API exports
pub use error::{JaxonError, Result};

// Core types
pub use crate::core::{
    evaluate, format_canonical, format_number, format_value, get_item, get_item_as, get_items,
    get_items_as, select_item, select_items, MatchSet, QueryPath, Segment, ValueKind,
};

// IO types
pub use io::{
    DocumentFormat, DocumentReader, FileResolver, ReaderConfig, ResolvedFile, ResolverConfig,
    YamlJsonConverter,
};

// Internal modules
pub mod core;
pub mod error;
pub mod io;

/// Convenience functions for common operations
pub mod convenience {
    //! Convenience functions that query documents on disk
    //!
    //! These use a default [`DocumentReader`](crate::DocumentReader), picking
    //! the decoder from the file extension.

    use crate::{select_item, select_items, DocumentReader, Result};
    use std::path::Path;

    /// Read a document from a file
    pub fn read_document<P: AsRef<Path>>(path: P) -> Result<serde_json::Value> {
        DocumentReader::new().read_file(path)
    }

    /// Every item selected by `query` in the document at `path`
    pub fn get_items_from_file<P: AsRef<Path>>(path: P, query: &str) -> Result<Vec<String>> {
        let document = read_document(path)?;
        select_items(&document, query)
    }

    /// The single item selected by `query` in the document at `path`
    pub fn get_item_from_file<P: AsRef<Path>>(path: P, query: &str) -> Result<String> {
        let document = read_document(path)?;
        select_item(&document, query)
    }
}

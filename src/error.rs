//! Error types for the jaxon library
//!
//! Every failure of a query is a deterministic function of the document and
//! the path expression, so errors are plain values carrying enough context
//! (the offending fragment, segment, index or query) to be reported as-is.

use crate::core::ValueKind;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for all library operations
#[derive(Error, Debug)]
pub enum JaxonError {
    /// I/O related errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON document, reported verbatim from the decoder
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Malformed YAML document, reported verbatim from the decoder
    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File not found or invalid path
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Malformed path expression
    #[error("Invalid query syntax at '{fragment}': {reason}")]
    QuerySyntax { fragment: String, reason: String },

    /// A segment expected an object or array but found another kind of value
    #[error("Type mismatch at '{segment}': expected {expected}, found {found}")]
    TypeMismatch {
        segment: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// Explicit index beyond the bounds of an array
    #[error("Index {index} out of range at '{segment}' (length {len})")]
    OutOfRange {
        segment: String,
        index: i64,
        len: usize,
    },

    /// Single-result query matched nothing
    #[error("Not found: {query}")]
    NotFound { query: String },

    /// Single-result query matched more than one value
    #[error("Ambiguous: {query} matched {count} items")]
    Ambiguous { query: String, count: usize },

    /// Rendering a matched value failed
    #[error("Format error: {reason}")]
    Format { reason: String },

    /// Value type conversion errors
    #[error("Type conversion error: cannot convert {from} to {to}")]
    TypeConversion { from: String, to: String },

    /// Path resolution errors
    #[error("Path resolution error: {reason}")]
    PathResolution { reason: String },

    /// Generic validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, JaxonError>;

impl JaxonError {
    /// Create a new file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a new query syntax error
    pub fn query_syntax(fragment: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::QuerySyntax {
            fragment: fragment.into(),
            reason: reason.into(),
        }
    }

    /// Create a new type mismatch error
    pub fn type_mismatch(segment: impl Into<String>, expected: ValueKind, found: ValueKind) -> Self {
        Self::TypeMismatch {
            segment: segment.into(),
            expected,
            found,
        }
    }

    /// Create a new out of range error
    pub fn out_of_range(segment: impl Into<String>, index: i64, len: usize) -> Self {
        Self::OutOfRange {
            segment: segment.into(),
            index,
            len,
        }
    }

    /// Create a new not found error
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::NotFound {
            query: query.into(),
        }
    }

    /// Create a new ambiguous result error
    pub fn ambiguous(query: impl Into<String>, count: usize) -> Self {
        Self::Ambiguous {
            query: query.into(),
            count,
        }
    }

    /// Create a new format error
    pub fn format(reason: impl Into<String>) -> Self {
        Self::Format {
            reason: reason.into(),
        }
    }

    /// Create a new type conversion error
    pub fn type_conversion(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self::TypeConversion {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Create a new path resolution error
    pub fn path_resolution(reason: impl Into<String>) -> Self {
        Self::PathResolution {
            reason: reason.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Process exit code used by the command-line tool
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } | Self::Ambiguous { .. } => 1,
            Self::QuerySyntax { .. } | Self::Validation { .. } => 2,
            Self::TypeMismatch { .. } | Self::OutOfRange { .. } => 3,
            Self::Decode(_) | Self::Yaml(_) | Self::TypeConversion { .. } => 4,
            Self::Io(_) | Self::FileNotFound { .. } | Self::PathResolution { .. } => 5,
            Self::Format { .. } => 6,
        }
    }
}

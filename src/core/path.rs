//! Path expression parsing
//!
//! A path is a dot-separated list of segments. Each segment is a key, an
//! optional key followed by a bracketed index, or an optional key followed by
//! the `[*]` wildcard:
//!
//! ```text
//! path        := segment ("." segment)*
//! segment     := identifier bracket? | bracket
//! identifier  := one or more characters except '.' and '['
//! bracket     := "[" ("*" | integer) "]"
//! ```

use crate::error::{JaxonError, Result};
use std::fmt;
use std::str::FromStr;

/// One step of a parsed path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Select the value at this key of an object
    Key(String),
    /// Select one element of an array, after descending into `key` if present
    Index { index: i64, key: Option<String> },
    /// Select every element of an array, after descending into `key` if present
    Wildcard { key: Option<String> },
}

impl Segment {
    /// The object key this segment descends into first, if any
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Key(key) => Some(key),
            Self::Index { key, .. } | Self::Wildcard { key } => key.as_deref(),
        }
    }

    /// Whether this segment can fan out into several matches
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Self::Wildcard { .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key(key) => write!(f, "{}", key),
            Self::Index { index, key } => {
                write!(f, "{}[{}]", key.as_deref().unwrap_or_default(), index)
            }
            Self::Wildcard { key } => write!(f, "{}[*]", key.as_deref().unwrap_or_default()),
        }
    }
}

/// A parsed path expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryPath {
    segments: Vec<Segment>,
    original: String,
}

impl QueryPath {
    /// Parse a path expression
    ///
    /// Empty segments (an empty path, `a..b`, a leading or trailing dot),
    /// unterminated brackets, bracket bodies that are neither `*` nor an
    /// integer, and text following a closing bracket are all rejected with
    /// [`JaxonError::QuerySyntax`] naming the offending fragment.
    pub fn parse(input: &str) -> Result<Self> {
        if input.is_empty() {
            return Err(JaxonError::query_syntax(input, "empty path"));
        }

        let segments = input
            .split('.')
            .enumerate()
            .map(|(position, fragment)| parse_segment(input, position, fragment))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            segments,
            original: input.to_string(),
        })
    }

    /// The segments of this path, root to leaf
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The expression this path was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Always false for a successfully parsed path
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Whether any segment is a wildcard
    pub fn has_wildcard(&self) -> bool {
        self.segments.iter().any(Segment::is_wildcard)
    }
}

impl fmt::Display for QueryPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl FromStr for QueryPath {
    type Err = JaxonError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn parse_segment(input: &str, position: usize, fragment: &str) -> Result<Segment> {
    if fragment.is_empty() {
        return Err(JaxonError::query_syntax(
            input,
            format!("empty segment at position {}", position + 1),
        ));
    }

    let Some(open) = fragment.find('[') else {
        return Ok(Segment::Key(fragment.to_string()));
    };

    let key = match &fragment[..open] {
        "" => None,
        name => Some(name.to_string()),
    };

    let bracket = &fragment[open + 1..];
    let close = bracket
        .find(']')
        .ok_or_else(|| JaxonError::query_syntax(fragment, "unterminated bracket"))?;

    if close + 1 != bracket.len() {
        return Err(JaxonError::query_syntax(
            fragment,
            format!("unexpected '{}' after ']'", &bracket[close + 1..]),
        ));
    }

    match &bracket[..close] {
        "*" => Ok(Segment::Wildcard { key }),
        body => parse_index(body)
            .map(|index| Segment::Index { index, key })
            .ok_or_else(|| {
                JaxonError::query_syntax(
                    fragment,
                    format!("expected '*' or an integer index, found '{}'", body),
                )
            }),
    }
}

/// Integer literal: optional minus sign followed by ASCII digits
fn parse_index(body: &str) -> Option<i64> {
    let digits = body.strip_prefix('-').unwrap_or(body);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    body.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(name: &str) -> Option<String> {
        Some(name.to_string())
    }

    #[test]
    fn test_simple_dot_notation() {
        let path = QueryPath::parse("parent.child.key").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Key("parent".to_string()),
                Segment::Key("child".to_string()),
                Segment::Key("key".to_string()),
            ]
        );
        assert_eq!(path.original(), "parent.child.key");
    }

    #[test]
    fn test_keyed_index_and_wildcard() {
        let path = QueryPath::parse("posts[1].tags[*]").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Index {
                    index: 1,
                    key: key("posts")
                },
                Segment::Wildcard { key: key("tags") },
            ]
        );
        assert!(path.has_wildcard());
    }

    #[test]
    fn test_leading_bracket_operates_on_root() {
        let path = QueryPath::parse("[*].name").unwrap();
        assert_eq!(
            path.segments(),
            &[
                Segment::Wildcard { key: None },
                Segment::Key("name".to_string()),
            ]
        );

        let path = QueryPath::parse("[0]").unwrap();
        assert_eq!(path.segments(), &[Segment::Index { index: 0, key: None }]);
    }

    #[test]
    fn test_bracket_only_segment_after_dot() {
        let path = QueryPath::parse("matrix[0].[2]").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.segments()[1], Segment::Index { index: 2, key: None });
    }

    #[test]
    fn test_negative_index_parses() {
        let path = QueryPath::parse("a[-1]").unwrap();
        assert_eq!(
            path.segments(),
            &[Segment::Index {
                index: -1,
                key: key("a")
            }]
        );
    }

    #[test]
    fn test_identifiers_keep_their_characters() {
        let path = QueryPath::parse("first name.$ref.a]b").unwrap();
        assert_eq!(path.segments()[0], Segment::Key("first name".to_string()));
        assert_eq!(path.segments()[1], Segment::Key("$ref".to_string()));
        assert_eq!(path.segments()[2], Segment::Key("a]b".to_string()));
    }

    #[test]
    fn test_invalid_paths() {
        let inputs = [
            "", "a..b", "a.", ".a", "a[", "a[x]", "a[]", "a[1.5", "a[0]b", "a[0][1]", "[-]", "a[+1]",
        ];
        for input in inputs {
            let err = QueryPath::parse(input).unwrap_err();
            assert!(
                matches!(err, JaxonError::QuerySyntax { .. }),
                "expected syntax error for {:?}, got {:?}",
                input,
                err
            );
        }
    }

    #[test]
    fn test_syntax_error_names_fragment() {
        match QueryPath::parse("items.list[x]").unwrap_err() {
            JaxonError::QuerySyntax { fragment, reason } => {
                assert_eq!(fragment, "list[x]");
                assert!(reason.contains("'x'"));
            }
            other => panic!("unexpected error: {:?}", other),
        }

        match QueryPath::parse("a[").unwrap_err() {
            JaxonError::QuerySyntax { fragment, reason } => {
                assert_eq!(fragment, "a[");
                assert_eq!(reason, "unterminated bracket");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_index_overflow_is_rejected() {
        assert!(QueryPath::parse("a[99999999999999999999]").is_err());
    }

    #[test]
    fn test_display_reparses_to_same_segments() {
        for input in ["a.b.c", "[*].name", "a[3].b[*]", "x.[0].[*]"] {
            let path: QueryPath = input.parse().unwrap();
            let rendered = path.to_string();
            assert_eq!(rendered, input);
            assert_eq!(QueryPath::parse(&rendered).unwrap().segments(), path.segments());
        }
    }

    #[test]
    fn test_segment_key() {
        assert_eq!(Segment::Key("a".to_string()).key(), Some("a"));
        assert_eq!(Segment::Wildcard { key: None }.key(), None);
        assert_eq!(
            Segment::Index {
                index: 0,
                key: key("b")
            }
            .key(),
            Some("b")
        );
    }
}

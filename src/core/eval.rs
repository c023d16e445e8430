//! Path evaluation against a decoded document
//!
//! Evaluation keeps a working set of borrowed values, starting with the root,
//! and rewrites it once per segment. A missing key drops that branch. A
//! segment applied to the wrong kind of value, or an explicit index past the
//! end of an array, aborts the whole evaluation.

use crate::core::path::{QueryPath, Segment};
use crate::core::ValueKind;
use crate::error::{JaxonError, Result};
use log::trace;
use serde_json::Value;

/// Ordered values matched by a path, in document order
#[derive(Debug, Clone, PartialEq)]
pub struct MatchSet<'a> {
    values: Vec<&'a Value>,
}

impl<'a> MatchSet<'a> {
    /// Number of matched values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing matched
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Matched values in order
    pub fn values(&self) -> &[&'a Value] {
        &self.values
    }

    /// Iterate over matched values in order
    pub fn iter(&self) -> impl Iterator<Item = &'a Value> + '_ {
        self.values.iter().copied()
    }

    /// Take the matched values
    pub fn into_values(self) -> Vec<&'a Value> {
        self.values
    }
}

impl<'a> IntoIterator for MatchSet<'a> {
    type Item = &'a Value;
    type IntoIter = std::vec::IntoIter<&'a Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// Evaluate a parsed path against a document
pub fn evaluate<'a>(root: &'a Value, path: &QueryPath) -> Result<MatchSet<'a>> {
    let mut current = vec![root];

    for segment in path.segments() {
        let mut next = Vec::with_capacity(current.len());
        for value in current {
            apply_segment(value, segment, &mut next)?;
        }
        trace!("segment '{}' left {} value(s)", segment, next.len());
        current = next;
    }

    Ok(MatchSet { values: current })
}

fn apply_segment<'a>(value: &'a Value, segment: &Segment, out: &mut Vec<&'a Value>) -> Result<()> {
    match segment {
        Segment::Key(key) => {
            if let Some(child) = descend(value, key, segment)? {
                out.push(child);
            }
        }
        Segment::Index { index, key } => {
            let Some(target) = resolve_key(value, key.as_deref(), segment)? else {
                return Ok(());
            };
            let items = expect_array(target, segment)?;
            let element = usize::try_from(*index)
                .ok()
                .and_then(|i| items.get(i))
                .ok_or_else(|| JaxonError::out_of_range(segment.to_string(), *index, items.len()))?;
            out.push(element);
        }
        Segment::Wildcard { key } => {
            let Some(target) = resolve_key(value, key.as_deref(), segment)? else {
                return Ok(());
            };
            out.extend(expect_array(target, segment)?);
        }
    }
    Ok(())
}

/// Descend into an optional key, leaving the value untouched without one
fn resolve_key<'a>(value: &'a Value, key: Option<&str>, segment: &Segment) -> Result<Option<&'a Value>> {
    match key {
        Some(key) => descend(value, key, segment),
        None => Ok(Some(value)),
    }
}

/// Look up `key` in an object; a missing key is not an error
fn descend<'a>(value: &'a Value, key: &str, segment: &Segment) -> Result<Option<&'a Value>> {
    match value {
        Value::Object(map) => Ok(map.get(key)),
        other => Err(JaxonError::type_mismatch(
            segment.to_string(),
            ValueKind::Object,
            ValueKind::of(other),
        )),
    }
}

fn expect_array<'a>(value: &'a Value, segment: &Segment) -> Result<&'a Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(JaxonError::type_mismatch(
            segment.to_string(),
            ValueKind::Array,
            ValueKind::of(other),
        )),
    }
}

//! Core query engine
//!
//! This module contains the pieces a query runs through, in order:
//! - path: parsing a path expression into typed segments
//! - eval: walking a decoded document along those segments
//! - format: rendering matched values as display strings
//! - query: one-call entry points tying the three together

pub mod eval;
pub mod format;
pub mod path;
pub mod query;
pub mod value;

pub use eval::{evaluate, MatchSet};
pub use format::{format_canonical, format_number, format_value};
pub use path::{QueryPath, Segment};
pub use query::{get_item, get_item_as, get_items, get_items_as, select_item, select_items};
pub use value::ValueKind;

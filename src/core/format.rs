//! Display rendering of matched values
//!
//! Scalars render as bare text, arrays fan out into one string per element
//! (recursively), and objects render as a single canonical JSON text with
//! sorted keys and a three-space indent.

use crate::error::{JaxonError, Result};
use serde_json::{Number, Value};

/// Indentation step of canonical object rendering
pub const INDENT: &str = "   ";

/// Render a value as one or more display strings
pub fn format_value(value: &Value) -> Result<Vec<String>> {
    let mut out = Vec::new();
    format_into(value, &mut out)?;
    Ok(out)
}

fn format_into(value: &Value, out: &mut Vec<String>) -> Result<()> {
    match value {
        Value::Null => out.push("null".to_string()),
        Value::Bool(b) => out.push(b.to_string()),
        Value::Number(n) => out.push(format_number(n)),
        Value::String(s) => out.push(s.clone()),
        Value::Array(items) => {
            for item in items {
                format_into(item, out)?;
            }
        }
        Value::Object(_) => out.push(format_canonical(value)?),
    }
    Ok(())
}

/// Render a number without a fractional part when it is integral
///
/// Non-integral floats use the shortest decimal that parses back to the same
/// `f64`, never in exponent form.
pub fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        match n.as_f64() {
            Some(f) => format_float(f),
            None => n.to_string(),
        }
    }
}

fn format_float(f: f64) -> String {
    // `-0.0` is integral too
    if f == 0.0 {
        return "0".to_string();
    }
    f.to_string()
}

/// Render any value as canonical JSON text
///
/// Object keys are sorted ascending, nesting is indented by [`INDENT`] per
/// level, and numbers follow [`format_number`].
pub fn format_canonical(value: &Value) -> Result<String> {
    let mut out = String::new();
    write_canonical(value, 0, &mut out)?;
    Ok(out)
}

fn write_canonical(value: &Value, depth: usize, out: &mut String) -> Result<()> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&format_number(n)),
        Value::String(s) => write_quoted(s, out)?,
        Value::Array(items) => {
            if items.is_empty() {
                out.push_str("[]");
                return Ok(());
            }
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                open_line(i, depth + 1, out);
                write_canonical(item, depth + 1, out)?;
            }
            close_line(depth, out);
            out.push(']');
        }
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str("{}");
                return Ok(());
            }
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                open_line(i, depth + 1, out);
                write_quoted(key, out)?;
                out.push_str(": ");
                write_canonical(item, depth + 1, out)?;
            }
            close_line(depth, out);
            out.push('}');
        }
    }
    Ok(())
}

fn open_line(position: usize, depth: usize, out: &mut String) {
    if position > 0 {
        out.push(',');
    }
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
}

fn close_line(depth: usize, out: &mut String) {
    out.push('\n');
    out.push_str(&INDENT.repeat(depth));
}

fn write_quoted(s: &str, out: &mut String) -> Result<()> {
    let quoted = serde_json::to_string(s)
        .map_err(|e| JaxonError::format(format!("cannot encode string: {}", e)))?;
    out.push_str(&quoted);
    Ok(())
}

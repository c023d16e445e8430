//! YAML to JSON value conversion
//!
//! YAML documents are queried through the same value model as JSON, so a
//! decoded `serde_yaml::Value` is converted before evaluation.

use crate::error::{JaxonError, Result};
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

/// Utilities for converting YAML values into the JSON value model
pub struct YamlJsonConverter;

impl YamlJsonConverter {
    /// Convert YAML Value to JSON Value
    ///
    /// Scalar mapping keys are stringified, tags are dropped in favour of the
    /// tagged value, and non-finite floats are rejected.
    pub fn yaml_to_json(yaml: &YamlValue) -> Result<JsonValue> {
        match yaml {
            YamlValue::Null => Ok(JsonValue::Null),
            YamlValue::Bool(b) => Ok(JsonValue::Bool(*b)),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(JsonValue::Number(i.into()))
                } else if let Some(u) = n.as_u64() {
                    Ok(JsonValue::Number(u.into()))
                } else if let Some(f) = n.as_f64() {
                    serde_json::Number::from_f64(f)
                        .map(JsonValue::Number)
                        .ok_or_else(|| {
                            JaxonError::type_conversion(format!("YAML number {}", f), "JSON number")
                        })
                } else {
                    Err(JaxonError::type_conversion(
                        format!("YAML number {:?}", n),
                        "JSON number",
                    ))
                }
            }
            YamlValue::String(s) => Ok(JsonValue::String(s.clone())),
            YamlValue::Sequence(seq) => {
                let items: Result<Vec<JsonValue>> = seq.iter().map(Self::yaml_to_json).collect();
                Ok(JsonValue::Array(items?))
            }
            YamlValue::Mapping(map) => {
                let mut json_map = serde_json::Map::new();
                for (k, v) in map {
                    json_map.insert(Self::mapping_key(k)?, Self::yaml_to_json(v)?);
                }
                Ok(JsonValue::Object(json_map))
            }
            YamlValue::Tagged(tagged) => Self::yaml_to_json(&tagged.value),
        }
    }

    fn mapping_key(key: &YamlValue) -> Result<String> {
        match key {
            YamlValue::String(s) => Ok(s.clone()),
            YamlValue::Number(n) => Ok(n.to_string()),
            YamlValue::Bool(b) => Ok(b.to_string()),
            YamlValue::Null => Ok("null".to_string()),
            YamlValue::Tagged(tagged) => Self::mapping_key(&tagged.value),
            other => Err(JaxonError::type_conversion(
                format!("YAML key {:?}", other),
                "JSON string key",
            )),
        }
    }
}

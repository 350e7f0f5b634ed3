//! YAML to JSON shape translation for schema validation

use serde_json::{Map, Number, Value as JsonValue};
use serde_yaml::Value as YamlValue;

/// Key used in place of a boolean `true` mapping key.
///
/// YAML 1.1 parsers read a bare `on:` key as the boolean `true`. Configs
/// written against those parsers expect the key to be validated as "on".
const TRUE_KEY: &str = "on";

/// Convert a parsed YAML document into the equivalent JSON value.
///
/// Mapping keys are turned into strings, tags are dropped and numbers
/// that JSON cannot represent (NaN, infinities) are kept as strings.
pub fn yaml_to_json(value: &YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(b) => JsonValue::Bool(*b),
        YamlValue::Number(n) => number_to_json(n),
        YamlValue::String(s) => JsonValue::String(s.clone()),
        YamlValue::Sequence(items) => JsonValue::Array(items.iter().map(yaml_to_json).collect()),
        YamlValue::Mapping(mapping) => {
            let mut object = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                object.insert(key_to_string(key), yaml_to_json(value));
            }
            JsonValue::Object(object)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(&tagged.value),
    }
}

fn number_to_json(n: &serde_yaml::Number) -> JsonValue {
    if let Some(i) = n.as_i64() {
        JsonValue::Number(i.into())
    } else if let Some(u) = n.as_u64() {
        JsonValue::Number(u.into())
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(n.to_string()))
    }
}

fn key_to_string(key: &YamlValue) -> String {
    match key {
        YamlValue::Bool(true) => TRUE_KEY.to_string(),
        YamlValue::Bool(false) => "false".to_string(),
        YamlValue::Null => "null".to_string(),
        YamlValue::Number(n) => n.to_string(),
        YamlValue::String(s) => s.clone(),
        YamlValue::Tagged(tagged) => key_to_string(&tagged.value),
        // Complex keys have no JSON counterpart; use their JSON text
        other => yaml_to_json(other).to_string(),
    }
}

//! JSON translation documents.

use serde_json::Value as JsonValue;

use crate::{error::DecodeError, formats::root_not_a_map, value::Value};

/// Decodes a JSON document. A `null` document is an empty map.
pub fn decode(bytes: &[u8]) -> Result<Value, DecodeError> {
    let document: JsonValue = serde_json::from_slice(bytes)?;
    match document {
        JsonValue::Null => Ok(Value::empty_map()),
        JsonValue::Object(_) => Ok(convert(document)),
        JsonValue::Array(_) => Err(root_not_a_map("an array")),
        _ => Err(root_not_a_map("a scalar")),
    }
}

fn convert(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Text(String::new()),
        JsonValue::Bool(flag) => Value::Text(flag.to_string()),
        JsonValue::Number(number) => Value::Text(number.to_string()),
        JsonValue::String(text) => Value::Text(text),
        JsonValue::Array(items) => Value::from_sequence(items.into_iter().map(convert)),
        JsonValue::Object(map) => Value::Map(
            map.into_iter()
                .map(|(key, child)| (key, convert(child)))
                .collect(),
        ),
    }
}

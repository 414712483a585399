//! YAML translation documents.
//!
//! Mapping keys may be any scalar; they are stringified with the same rules as
//! leaves. Tagged values decode as their inner value and merge keys (`<<`) are
//! expanded. Only the first document of a multi-document stream is read.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_yaml::{Deserializer, Value as YamlValue};

use crate::{error::DecodeError, formats::root_not_a_map, value::Value};

/// Decodes a YAML document. An empty or `~` document is an empty map.
pub fn decode(bytes: &[u8]) -> Result<Value, DecodeError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::empty_map());
    }
    let mut document = match Deserializer::from_slice(bytes).next() {
        Some(first) => YamlValue::deserialize(first)?,
        None => YamlValue::Null,
    };
    document.apply_merge()?;
    match untag(document) {
        YamlValue::Null => Ok(Value::empty_map()),
        document @ YamlValue::Mapping(_) => convert(document),
        YamlValue::Sequence(_) => Err(root_not_a_map("a sequence")),
        _ => Err(root_not_a_map("a scalar")),
    }
}

fn untag(value: YamlValue) -> YamlValue {
    match value {
        YamlValue::Tagged(tagged) => untag(tagged.value),
        other => other,
    }
}

fn convert(value: YamlValue) -> Result<Value, DecodeError> {
    match untag(value) {
        YamlValue::Sequence(items) => Ok(Value::from_sequence(
            items
                .into_iter()
                .map(convert)
                .collect::<Result<Vec<_>, _>>()?,
        )),
        YamlValue::Mapping(mapping) => {
            let mut map = BTreeMap::new();
            for (key, child) in mapping {
                map.insert(scalar_text(key)?, convert(child)?);
            }
            Ok(Value::Map(map))
        }
        scalar => Ok(Value::Text(scalar_text(scalar)?)),
    }
}

fn scalar_text(value: YamlValue) -> Result<String, DecodeError> {
    match untag(value) {
        YamlValue::Null => Ok(String::new()),
        YamlValue::Bool(flag) => Ok(flag.to_string()),
        YamlValue::Number(number) => Ok(number.to_string()),
        YamlValue::String(text) => Ok(text),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) | YamlValue::Tagged(_) => {
            Err("mapping keys must be scalars".into())
        }
    }
}

//! TOML translation documents.

use ::toml::{Table, Value as TomlValue};

use crate::{error::DecodeError, value::Value};

/// Decodes a TOML document. The root of a TOML document is always a table.
pub fn decode(bytes: &[u8]) -> Result<Value, DecodeError> {
    let text = std::str::from_utf8(bytes)?;
    let table: Table = ::toml::from_str(text)?;
    Ok(convert_table(table))
}

fn convert_table(table: Table) -> Value {
    Value::Map(
        table
            .into_iter()
            .map(|(key, child)| (key, convert(child)))
            .collect(),
    )
}

fn convert(value: TomlValue) -> Value {
    match value {
        TomlValue::String(text) => Value::Text(text),
        TomlValue::Integer(number) => Value::Text(number.to_string()),
        // `Debug` keeps the fractional part (`1.0`), matching JSON and YAML.
        TomlValue::Float(number) => Value::Text(format!("{number:?}")),
        TomlValue::Boolean(flag) => Value::Text(flag.to_string()),
        TomlValue::Datetime(datetime) => Value::Text(datetime.to_string()),
        TomlValue::Array(items) => Value::from_sequence(items.into_iter().map(convert)),
        TomlValue::Table(table) => convert_table(table),
    }
}

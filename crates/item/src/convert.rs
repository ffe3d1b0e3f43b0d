//! Bridge between [`DataItem`] and `serde_json::Value`.

use serde_json::{Map, Number, Value};

use crate::constants::{SIMPLE_FALSE, SIMPLE_NULL, SIMPLE_TRUE, SIMPLE_UNDEFINED};
use crate::error::CborError;
use crate::item::{map_insert, DataItem};

/// Converts a JSON value into the data-item model. Total: JSON is a
/// strict subset of what the model can hold.
pub fn json_to_item(value: &Value) -> DataItem {
    match value {
        Value::Null => DataItem::null(),
        Value::Bool(b) => DataItem::from(*b),
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                DataItem::Unsigned(u)
            } else if let Some(i) = n.as_i64() {
                DataItem::from(i)
            } else {
                DataItem::Float(n.as_f64().unwrap_or(0.0))
            }
        }
        Value::String(s) => DataItem::Text(s.clone()),
        Value::Array(items) => DataItem::Array(items.iter().map(json_to_item).collect()),
        Value::Object(fields) => {
            let mut entries = Vec::new();
            for (key, val) in fields {
                map_insert(&mut entries, DataItem::from(key.as_str()), json_to_item(val));
            }
            DataItem::Map(entries)
        }
    }
}

/// Converts a data item into JSON.
///
/// Fails with [`CborError::Unsupported`] for shapes JSON cannot carry:
/// tags, non-text map keys, non-finite floats, and simple values other
/// than the booleans, null, and undefined (undefined maps to null).
/// Binary becomes an array of byte numbers.
pub fn item_to_json(item: &DataItem) -> Result<Value, CborError> {
    Ok(match item {
        DataItem::Unsigned(value) => Value::Number(Number::from(*value)),
        DataItem::Negative(value) => {
            if *value > i64::MAX as u64 {
                return Err(CborError::Unsupported);
            }
            Value::Number(Number::from(-1 - *value as i64))
        }
        DataItem::Text(text) => Value::String(text.clone()),
        DataItem::Binary(bytes) => Value::Array(
            bytes
                .iter()
                .map(|b| Value::Number(Number::from(*b)))
                .collect(),
        ),
        DataItem::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for child in items {
                out.push(item_to_json(child)?);
            }
            Value::Array(out)
        }
        DataItem::Map(entries) => {
            let mut out = Map::new();
            for (key, value) in entries {
                let key = match key {
                    DataItem::Text(text) => text.clone(),
                    _ => return Err(CborError::Unsupported),
                };
                out.insert(key, item_to_json(value)?);
            }
            Value::Object(out)
        }
        DataItem::Tagged(..) => return Err(CborError::Unsupported),
        DataItem::Simple(code) => match *code {
            SIMPLE_FALSE => Value::Bool(false),
            SIMPLE_TRUE => Value::Bool(true),
            SIMPLE_NULL | SIMPLE_UNDEFINED => Value::Null,
            _ => return Err(CborError::Unsupported),
        },
        DataItem::Float(value) => Number::from_f64(*value)
            .map(Value::Number)
            .ok_or(CborError::Unsupported)?,
    })
}

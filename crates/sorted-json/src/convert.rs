//! Conversions between [`Value`] and `serde_json::Value`.

use serde_json::Value as JsonValue;

use crate::error::EncodeError;
use crate::value::Value;

impl From<JsonValue> for Value {
    fn from(v: JsonValue) -> Self {
        match v {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(b),
            JsonValue::Number(n) => {
                if let Some(int) = n.as_i64() {
                    Value::Integer(int)
                } else if let Some(uint) = n.as_u64() {
                    Value::UInteger(uint)
                } else {
                    // A serde_json number is i64, u64, or f64-representable.
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Value::Str(s),
            JsonValue::Array(arr) => Value::Array(arr.into_iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, val)| (key, Value::from(val)))
                    .collect(),
            ),
        }
    }
}

/// Convert a [`Value`] to `serde_json::Value`.
///
/// Fails on the same inputs the encoder rejects: `Undefined`, `Bytes`, and
/// non-finite floats.
pub fn to_json(value: &Value) -> Result<JsonValue, EncodeError> {
    Ok(match value {
        Value::Null => JsonValue::Null,
        Value::Bool(b) => JsonValue::Bool(*b),
        Value::Integer(int) => JsonValue::from(*int),
        Value::UInteger(uint) => JsonValue::from(*uint),
        Value::Float(float) => match serde_json::Number::from_f64(*float) {
            Some(n) => JsonValue::Number(n),
            None => return Err(EncodeError::UnsupportedType("non-finite float")),
        },
        Value::Str(s) => JsonValue::String(s.clone()),
        Value::Array(arr) => JsonValue::Array(arr.iter().map(to_json).collect::<Result<_, _>>()?),
        Value::Object(obj) => {
            let mut map = serde_json::Map::with_capacity(obj.len());
            for (key, val) in obj {
                map.insert(key.clone(), to_json(val)?);
            }
            JsonValue::Object(map)
        }
        Value::Undefined | Value::Bytes(_) => {
            return Err(EncodeError::UnsupportedType(value.type_name()))
        }
    })
}

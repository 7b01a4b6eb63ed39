//! `SortedJsonEncoder` — compact JSON text encoder that sorts object keys.
//!
//! Same output as a plain compact JSON encoder except that object keys are
//! emitted in ascending ordinal order at every nesting level, so mappings
//! that are equal as key/value sets produce byte-identical text regardless
//! of insertion order.

use std::cmp::Ordering;

use crate::error::EncodeError;
use crate::value::Value;

/// Sorted JSON text encoder.
///
/// Reusable: the output buffer is reset on every [`encode`](Self::encode)
/// call. Encoding is a pure function of the input value; the input is never
/// mutated and nothing is shared between encoder instances.
pub struct SortedJsonEncoder {
    out: String,
}

impl Default for SortedJsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl SortedJsonEncoder {
    pub fn new() -> Self {
        Self { out: String::new() }
    }

    /// Encode `value` as compact JSON text with sorted object keys.
    ///
    /// All-or-nothing: on [`EncodeError`] no partial output is surfaced.
    pub fn encode(&mut self, value: &Value) -> Result<String, EncodeError> {
        self.out.clear();
        self.write_any(value)?;
        Ok(std::mem::take(&mut self.out))
    }

    /// Encode a `serde_json::Value` through the same sorted emission.
    pub fn encode_json(&mut self, value: &serde_json::Value) -> Result<String, EncodeError> {
        self.encode(&Value::from(value.clone()))
    }

    pub fn write_any(&mut self, value: &Value) -> Result<(), EncodeError> {
        match value {
            Value::Null => {
                self.write_null();
                Ok(())
            }
            Value::Bool(b) => {
                self.write_boolean(*b);
                Ok(())
            }
            Value::Integer(int) => {
                self.write_integer(*int);
                Ok(())
            }
            Value::UInteger(uint) => {
                self.write_u_integer(*uint);
                Ok(())
            }
            Value::Float(float) => self.write_float(*float),
            Value::Str(s) => {
                self.write_str(s);
                Ok(())
            }
            Value::Array(arr) => self.write_arr(arr),
            Value::Object(obj) => self.write_obj(obj),
            Value::Undefined | Value::Bytes(_) => {
                Err(EncodeError::UnsupportedType(value.type_name()))
            }
        }
    }

    pub fn write_null(&mut self) {
        self.out.push_str("null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.out.push_str(if b { "true" } else { "false" });
    }

    pub fn write_integer(&mut self, int: i64) {
        self.out.push_str(&int.to_string());
    }

    pub fn write_u_integer(&mut self, uint: u64) {
        self.out.push_str(&uint.to_string());
    }

    /// Floats go through `serde_json::Number` so the numeric text matches
    /// `serde_json` output byte for byte (shortest round-trip form).
    pub fn write_float(&mut self, float: f64) -> Result<(), EncodeError> {
        match serde_json::Number::from_f64(float) {
            Some(n) => {
                self.out.push_str(&n.to_string());
                Ok(())
            }
            // NaN and infinities have no JSON literal.
            None => Err(EncodeError::UnsupportedType("non-finite float")),
        }
    }

    pub fn write_str(&mut self, s: &str) {
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.out.push_str("\\\""),
                '\\' => self.out.push_str("\\\\"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\u{0008}' => self.out.push_str("\\b"),
                '\u{000c}' => self.out.push_str("\\f"),
                c if (c as u32) < 0x20 => {
                    self.out.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => self.out.push(c),
            }
        }
        self.out.push('"');
    }

    pub fn write_arr(&mut self, arr: &[Value]) -> Result<(), EncodeError> {
        self.out.push('[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_any(item)?;
        }
        self.out.push(']');
        Ok(())
    }

    pub fn write_obj(&mut self, obj: &[(String, Value)]) -> Result<(), EncodeError> {
        // Sort keys before encoding
        let mut sorted: Vec<&(String, Value)> = obj.iter().collect();
        sorted.sort_by(|a, b| cmp_obj_key(&a.0, &b.0));
        self.out.push('{');
        for (i, (key, val)) in sorted.iter().map(|entry| (&entry.0, &entry.1)).enumerate() {
            if i > 0 {
                self.out.push(',');
            }
            self.write_str(key);
            self.out.push(':');
            self.write_any(val)?;
        }
        self.out.push('}');
        Ok(())
    }
}

/// Compare object keys by raw byte order: ordinal, not locale-aware and not
/// numeric-aware (`"10"` sorts before `"2"`, `"aa"` before `"b"`).
fn cmp_obj_key(a: &str, b: &str) -> Ordering {
    a.as_bytes().cmp(b.as_bytes())
}

//! sorted-json - deterministic compact JSON emission with sorted mapping keys.
//!
//! Encodes a dynamically-typed [`Value`] tree as compact JSON text in which
//! object keys appear in ascending ordinal order at every nesting level, so
//! mappings that are equal as key/value sets always produce byte-identical
//! output regardless of insertion order. Built for templating hosts that
//! embed generated JSON into configuration files and need output that is
//! stable across runs.
//!
//! ```
//! use sorted_json::{to_sorted_json, Value};
//!
//! let value = Value::Object(vec![
//!     ("b".into(), Value::Integer(2)),
//!     ("a".into(), Value::Integer(1)),
//! ]);
//! assert_eq!(to_sorted_json(&value).unwrap(), r#"{"a":1,"b":2}"#);
//! ```

mod convert;
mod encoder;
mod error;
mod value;

pub use convert::to_json;
pub use encoder::SortedJsonEncoder;
pub use error::EncodeError;
pub use value::Value;

/// Encode `value` as compact JSON text with object keys sorted at every
/// nesting level.
///
/// Fails with [`EncodeError::UnsupportedType`] if `value`, or any value
/// nested within it, has no JSON text form; no output is produced in that
/// case.
pub fn to_sorted_json(value: &Value) -> Result<String, EncodeError> {
    let mut encoder = SortedJsonEncoder::new();
    encoder.encode(value)
}

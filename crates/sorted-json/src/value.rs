//! Dynamic value model consumed by the encoder.

/// A dynamically-typed value handed over by the templating host.
///
/// The model is deliberately wider than JSON: `Undefined` and `Bytes` can
/// show up in host data but have no JSON text form, and encoding them fails
/// with [`EncodeError::UnsupportedType`](crate::EncodeError::UnsupportedType).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    /// Host sentinel for an absent value. Not encodable.
    Undefined,
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`.
    UInteger(u64),
    Float(f64),
    Str(String),
    /// Raw binary from the host. Not encodable.
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    /// Mapping entries in the host's insertion order. The encoder sorts
    /// keys at emission time; the stored order carries no meaning.
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Stable lowercase name of the variant, used in error reporting.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Undefined => "undefined",
            Value::Bool(_) => "boolean",
            Value::Integer(_) | Value::UInteger(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(int: i64) -> Self {
        Value::Integer(int)
    }
}

impl From<u64> for Value {
    fn from(uint: u64) -> Self {
        Value::UInteger(uint)
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Value::Float(float)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

//! Encoder error type.

use thiserror::Error;

/// Error type for sorted JSON encoding.
///
/// Raised at the first value in the input graph that has no JSON text
/// form; the whole encode aborts and no output is surfaced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncodeError {
    #[error("unable to encode value of type `{0}`")]
    UnsupportedType(&'static str),
}

use serde_json::Value;
use thiserror::Error;

/// Failure raised by one conversion call.
///
/// Conversion is all-or-nothing per call but not atomic: a failure midway
/// through a keyed or positional decode leaves the destination partially
/// overwritten.
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing key `{0}` in object")]
    MissingKey(String),
    #[error("index {index} out of bounds for array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("expected {expected}, found {found}")]
    UnexpectedShape {
        expected: &'static str,
        found: &'static str,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn missing_key(key: impl Into<String>) -> Self {
        Error::MissingKey(key.into())
    }

    pub fn index_out_of_bounds(index: usize, len: usize) -> Self {
        Error::IndexOutOfBounds { index, len }
    }

    pub fn unexpected_shape(expected: &'static str, found: &Value) -> Self {
        Error::UnexpectedShape {
            expected,
            found: shape_name(found),
        }
    }
}

fn shape_name(tree: &Value) -> &'static str {
    match tree {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

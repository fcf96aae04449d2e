//! Per-field validation results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A field value as reported back to the client.
///
/// Coordinates that parsed are reported as integers; tokens that did not
/// parse are echoed back as text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(u64),
    Text(String),
}

impl FieldValue {
    /// The integer value, if this is one.
    pub fn as_integer(&self) -> Option<u64> {
        match self {
            FieldValue::Integer(v) => Some(*v),
            FieldValue::Text(_) => None,
        }
    }
}

impl From<u64> for FieldValue {
    fn from(v: u64) -> Self {
        FieldValue::Integer(v)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{}", v),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Result of validating one field of a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldResult {
    /// The field passed validation.
    Valid { value: FieldValue },
    /// The field failed validation.
    Invalid {
        raw_value: FieldValue,
        error_message: String,
    },
    /// The field was never checked because an earlier stage failed or no
    /// genome was given.
    Unattempted,
}

impl FieldResult {
    pub fn valid(value: impl Into<FieldValue>) -> Self {
        FieldResult::Valid {
            value: value.into(),
        }
    }

    pub fn invalid(raw_value: impl Into<FieldValue>, error_message: impl Into<String>) -> Self {
        FieldResult::Invalid {
            raw_value: raw_value.into(),
            error_message: error_message.into(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, FieldResult::Valid { .. })
    }

    pub fn is_attempted(&self) -> bool {
        !matches!(self, FieldResult::Unattempted)
    }

    /// The value carried by the result, valid or not.
    pub fn value(&self) -> Option<&FieldValue> {
        match self {
            FieldResult::Valid { value } => Some(value),
            FieldResult::Invalid { raw_value, .. } => Some(raw_value),
            FieldResult::Unattempted => None,
        }
    }

    /// The integer value of a valid coordinate.
    pub fn valid_integer(&self) -> Option<u64> {
        match self {
            FieldResult::Valid { value } => value.as_integer(),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FieldResult::Invalid { error_message, .. } => Some(error_message),
            _ => None,
        }
    }
}

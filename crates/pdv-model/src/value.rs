//! Raw field values as read from the source file.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// A single field value, kept in the shape it had in the source file.
///
/// Typed accessors return `None` whenever the value cannot be read as the
/// requested type, so callers treat malformed input as a failed check rather
/// than an error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Value", into = "Value")]
pub enum FieldValue {
    /// Key absent or `null`.
    #[default]
    Missing,
    Text(String),
    Integer(i64),
    Float(f64),
    /// Booleans, arrays and objects.
    Unsupported(Value),
}

impl FieldValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// The value as text. Only string values qualify.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The value as a whole number.
    ///
    /// Accepts integers, strings holding an integer, and floats without a
    /// fractional part.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(text) => text.trim().parse().ok(),
            Self::Float(value) => float_to_i64(*value),
            Self::Missing | Self::Unsupported(_) => None,
        }
    }

    /// The value as a string of digits for identifier fields that may be
    /// stored either as text or as a number.
    pub fn as_digit_string(&self) -> Option<Cow<'_, str>> {
        match self {
            Self::Text(text) => Some(Cow::Borrowed(text)),
            Self::Integer(value) if *value >= 0 => Some(Cow::Owned(value.to_string())),
            _ => None,
        }
    }

    /// Short name of the stored kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Text(_) => "text",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Unsupported(_) => "unsupported",
        }
    }
}

fn float_to_i64(value: f64) -> Option<i64> {
    // i64::MAX is not representable as f64; the bound is exclusive.
    if value.fract() == 0.0 && value >= i64::MIN as f64 && value < i64::MAX as f64 {
        Some(value as i64)
    } else {
        None
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Missing,
            Value::String(text) => Self::Text(text),
            Value::Number(number) => match number.as_i64() {
                Some(integer) => Self::Integer(integer),
                None => number
                    .as_f64()
                    .map_or(Self::Unsupported(Value::Number(number)), Self::Float),
            },
            other => Self::Unsupported(other),
        }
    }
}

impl From<FieldValue> for Value {
    fn from(value: FieldValue) -> Self {
        match value {
            FieldValue::Missing => Value::Null,
            FieldValue::Text(text) => Value::String(text),
            FieldValue::Integer(integer) => Value::Number(integer.into()),
            FieldValue::Float(float) => Number::from_f64(float).map_or(Value::Null, Value::Number),
            FieldValue::Unsupported(other) => other,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => Ok(()),
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Unsupported(value) => write!(f, "{value}"),
        }
    }
}

//! Named, typed log properties

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value of a log property
///
/// The variant is fixed when the property is built, so encoders decide how
/// to render a value with a plain `match`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    /// Any `Display` value, rendered to text at construction
    Rendered(String),
}

impl PropValue {
    /// Numbers and booleans render without quotes in key-value output
    #[must_use]
    pub fn is_bare(&self) -> bool {
        matches!(
            self,
            PropValue::Int(_) | PropValue::UInt(_) | PropValue::Float(_) | PropValue::Bool(_)
        )
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropValue::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            PropValue::Str(s) | PropValue::Rendered(s) => serde_json::Value::String(s.clone()),
            PropValue::Int(i) => serde_json::Value::Number((*i).into()),
            PropValue::UInt(u) => serde_json::Value::Number((*u).into()),
            PropValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            PropValue::Bool(b) => serde_json::Value::Bool(*b),
        }
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Str(s) | PropValue::Rendered(s) => f.write_str(s),
            PropValue::Int(i) => write!(f, "{}", i),
            PropValue::UInt(u) => write!(f, "{}", u),
            PropValue::Float(fl) => write!(f, "{}", fl),
            PropValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Str(s)
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Str(s.to_string())
    }
}

impl From<i64> for PropValue {
    fn from(i: i64) -> Self {
        PropValue::Int(i)
    }
}

impl From<i32> for PropValue {
    fn from(i: i32) -> Self {
        PropValue::Int(i64::from(i))
    }
}

impl From<u64> for PropValue {
    fn from(u: u64) -> Self {
        PropValue::UInt(u)
    }
}

impl From<u32> for PropValue {
    fn from(u: u32) -> Self {
        PropValue::UInt(u64::from(u))
    }
}

impl From<f64> for PropValue {
    fn from(f: f64) -> Self {
        PropValue::Float(f)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

/// A named log property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prop {
    pub name: String,
    pub value: PropValue,
}

impl Prop {
    pub fn new(name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    pub fn string(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(name, PropValue::Str(value.into()))
    }

    pub fn int(name: impl Into<String>, value: i64) -> Self {
        Self::new(name, PropValue::Int(value))
    }

    pub fn uint(name: impl Into<String>, value: u64) -> Self {
        Self::new(name, PropValue::UInt(value))
    }

    pub fn float(name: impl Into<String>, value: f64) -> Self {
        Self::new(name, PropValue::Float(value))
    }

    pub fn bool(name: impl Into<String>, value: bool) -> Self {
        Self::new(name, PropValue::Bool(value))
    }

    /// Property holding the `Display` rendering of `value`
    pub fn display(name: impl Into<String>, value: &dyn fmt::Display) -> Self {
        Self::new(name, PropValue::Rendered(value.to_string()))
    }
}

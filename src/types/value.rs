//! Declared value types and typed values.

use serde::{Deserialize, Serialize};

/// The value type a catalog key declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Boolean,
}

impl ValueKind {
    /// Interpret a raw dictionary value as this kind.
    ///
    /// A value of any other type reads as `None`; no coercion is attempted
    /// (`"YES"` is not a boolean, `1` is not a string).
    pub fn cast(self, raw: &serde_json::Value) -> Option<BundleValue> {
        match (self, raw) {
            (Self::String, serde_json::Value::String(s)) => Some(BundleValue::String(s.clone())),
            (Self::Boolean, serde_json::Value::Bool(b)) => Some(BundleValue::Boolean(*b)),
            _ => None,
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String => write!(f, "string"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

/// A value read through a catalog key, already cast to the key's declared type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BundleValue {
    String(String),
    Boolean(bool),
}

impl BundleValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::String(_) => ValueKind::String,
            Self::Boolean(_) => ValueKind::Boolean,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            Self::Boolean(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::String(_) => None,
        }
    }

    pub fn into_string(self) -> Option<String> {
        match self {
            Self::String(s) => Some(s),
            Self::Boolean(_) => None,
        }
    }
}

impl std::fmt::Display for BundleValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Boolean(b) => write!(f, "{b}"),
        }
    }
}

impl From<String> for BundleValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for BundleValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for BundleValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

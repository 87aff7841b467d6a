//! The typed scalar value a preference key maps to

use serde::{Deserialize, Serialize};

/// A value stored under a preference key.
///
/// A key holds at most one `PrefValue` at a time; writing a key overwrites
/// any prior value regardless of its previous variant. There is deliberately
/// no `Double` variant: doubles travel through the string path as their
/// decimal representation (see [`PreferenceStore::put_double`]).
///
/// [`PreferenceStore::put_double`]: crate::store::PreferenceStore::put_double
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum PrefValue {
    /// UTF-8 string value
    String(String),
    /// 32-bit signed integer
    Int(i32),
    /// Single-precision float
    Float(f32),
    /// 64-bit signed integer
    Long(i64),
    /// Boolean value
    Bool(bool),
}

impl PrefValue {
    /// Borrow the string value, if this is a `String`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            PrefValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer value, if this is an `Int`
    pub fn as_int(&self) -> Option<i32> {
        match self {
            PrefValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// The float value, if this is a `Float`
    pub fn as_float(&self) -> Option<f32> {
        match self {
            PrefValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// The long value, if this is a `Long`
    pub fn as_long(&self) -> Option<i64> {
        match self {
            PrefValue::Long(l) => Some(*l),
            _ => None,
        }
    }

    /// The boolean value, if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PrefValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Name of the stored variant, for logging
    pub fn type_name(&self) -> &'static str {
        match self {
            PrefValue::String(_) => "string",
            PrefValue::Int(_) => "int",
            PrefValue::Float(_) => "float",
            PrefValue::Long(_) => "long",
            PrefValue::Bool(_) => "bool",
        }
    }
}

impl From<String> for PrefValue {
    fn from(v: String) -> Self {
        PrefValue::String(v)
    }
}

impl From<&str> for PrefValue {
    fn from(v: &str) -> Self {
        PrefValue::String(v.to_string())
    }
}

impl From<i32> for PrefValue {
    fn from(v: i32) -> Self {
        PrefValue::Int(v)
    }
}

impl From<f32> for PrefValue {
    fn from(v: f32) -> Self {
        PrefValue::Float(v)
    }
}

impl From<i64> for PrefValue {
    fn from(v: i64) -> Self {
        PrefValue::Long(v)
    }
}

impl From<bool> for PrefValue {
    fn from(v: bool) -> Self {
        PrefValue::Bool(v)
    }
}

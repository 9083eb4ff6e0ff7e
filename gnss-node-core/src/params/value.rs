//! Parameter value types
//!
//! The store holds a small closed set of native kinds. Integers are always a
//! single signed 64-bit type; narrower widths are produced by the accessors
//! after a range check.

use alloc::{string::String, vec::Vec};
use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Native kinds a parameter store can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamKind {
    /// `true` / `false`
    Bool,
    /// Signed 64-bit integer
    Int,
    /// Double precision float
    Double,
    /// UTF-8 string
    Str,
    /// Ordered list of integers
    IntList,
}

impl ParamKind {
    /// Lowercase name used in error messages
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Double => "double",
            Self::Str => "string",
            Self::IntList => "int list",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parameter value (union of supported kinds)
///
/// With `serde` enabled the value (de)serializes untagged, so a parameter file
/// reads naturally: `true`, `5`, `0.25`, `"ttyACM0"`, `[1, 2, 3]`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ParamValue {
    /// Boolean value
    Bool(bool),
    /// Integer value
    Int(i64),
    /// Floating point value
    Double(f64),
    /// Integer sequence
    IntList(Vec<i64>),
    /// String value
    Str(String),
}

impl ParamValue {
    /// Get parameter kind
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Bool(_) => ParamKind::Bool,
            ParamValue::Int(_) => ParamKind::Int,
            ParamValue::Double(_) => ParamKind::Double,
            ParamValue::IntList(_) => ParamKind::IntList,
            ParamValue::Str(_) => ParamKind::Str,
        }
    }

    /// Boolean view, `None` for any other kind
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ParamValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Integer view, `None` for any other kind
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ParamValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Integer sequence view, `None` for any other kind
    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            ParamValue::IntList(list) => Some(list),
            _ => None,
        }
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Double(value)
    }
}

impl From<Vec<i64>> for ParamValue {
    fn from(value: Vec<i64>) -> Self {
        ParamValue::IntList(value)
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(String::from(value))
    }
}

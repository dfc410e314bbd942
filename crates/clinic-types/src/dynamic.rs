//! Loosely typed values.
//!
//! Some fields accept records with no fixed shape. [`AnyValue`] holds any
//! JSON-like value so those fields can be carried and re-serialized without
//! a schema.

use std::collections::BTreeMap;

/// A key/value record with arbitrary keys and values.
pub type AnyRecord = BTreeMap<String, AnyValue>;

/// Any JSON-like value.
///
/// Integers that fit in `i64` are kept as [`AnyValue::Integer`], larger
/// unsigned integers as [`AnyValue::Unsigned`]; other numbers become
/// [`AnyValue::Float`].
///
/// # Examples
///
/// ```
/// use clinic_types::{AnyRecord, AnyValue};
///
/// let mut record = AnyRecord::new();
/// record.insert("severity".to_string(), AnyValue::from("mild"));
/// record.insert("onset_age".to_string(), AnyValue::from(12i64));
///
/// assert_eq!(record["severity"].as_str(), Some("mild"));
/// assert!(!record["onset_age"].is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum AnyValue {
    /// Null.
    #[default]
    Null,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Integer(i64),
    /// Integer above `i64::MAX`.
    Unsigned(u64),
    /// Floating point number.
    Float(f64),
    /// Text.
    Text(String),
    /// Ordered list.
    List(Vec<AnyValue>),
    /// Nested record.
    Map(AnyRecord),
}

impl AnyValue {
    /// Returns true for [`AnyValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the text content, if this is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for AnyValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AnyValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for AnyValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<u64> for AnyValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => Self::Integer(v),
            Err(_) => Self::Unsigned(value),
        }
    }
}

impl From<bool> for AnyValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

use crate::field_value::FieldValue;
use serde::ser::{Serialize, Serializer};
use smol_str::SmolStr;
use std::fmt;

/// Slot key of a record set, and key of a projected map.
///
/// Integer and string keys live side by side in the same set. `Int(1)` and
/// `Str("1")` are distinct keys; only [`SetKey::from_field_value`] folds
/// canonical integer strings into `Int`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SetKey {
    Int(i64),
    Str(SmolStr),
}

impl SetKey {
    /// Coerce a field value into a map key.
    ///
    /// Integers (including integral floats inside the `i64` range), booleans
    /// and canonical decimal strings such as `"8"` or `"-3"` become `Int`.
    /// Null becomes the empty string key. Anything else is keyed by its
    /// display form.
    pub fn from_field_value(value: &FieldValue) -> Self {
        if let Some(i) = value.as_i64() {
            return SetKey::Int(i);
        }
        match value {
            FieldValue::Null => SetKey::Str(SmolStr::default()),
            FieldValue::Bool(b) => SetKey::Int(i64::from(*b)),
            FieldValue::Str(s) => canonical_int(s).map_or_else(|| SetKey::Str(s.clone()), SetKey::Int),
            other => SetKey::Str(SmolStr::from(other.to_string())),
        }
    }
}

/// Parse `s` only if it is the exact decimal rendering of an i64:
/// no sign on zero, no leading zeros, no `+`, no whitespace.
fn canonical_int(s: &str) -> Option<i64> {
    let digits = s.strip_prefix('-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if (digits.len() > 1 && digits.starts_with('0')) || s == "-0" {
        return None;
    }
    s.parse().ok()
}

impl fmt::Display for SetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetKey::Int(i) => write!(f, "{i}"),
            SetKey::Str(s) => write!(f, "{s:?}"),
        }
    }
}

impl Serialize for SetKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SetKey::Int(i) => serializer.serialize_i64(*i),
            SetKey::Str(s) => serializer.serialize_str(s),
        }
    }
}

impl From<i64> for SetKey {
    fn from(i: i64) -> Self {
        SetKey::Int(i)
    }
}

impl From<&str> for SetKey {
    fn from(s: &str) -> Self {
        SetKey::Str(SmolStr::from(s))
    }
}

impl From<String> for SetKey {
    fn from(s: String) -> Self {
        SetKey::Str(SmolStr::from(s))
    }
}

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::collections::BTreeMap;
use std::fmt;

pub type FastMap<K, V> = BTreeMap<K, V>;

/// A dynamically typed record field, shaped like a JSON value.
///
/// Serializes and deserializes untagged, so `{"ID": 3, "Tags": ["a"]}`
/// round-trips through serde_json as-is. Integers that fit `i64` land in
/// `Int`; only larger unsigned values fall through to `UInt`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(SmolStr),
    List(Vec<FieldValue>),
    Map(FastMap<SmolStr, FieldValue>),
}

impl FieldValue {
    /// Short type name, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) | FieldValue::UInt(_) | FieldValue::Float(_) => "number",
            FieldValue::Str(_) => "string",
            FieldValue::List(_) => "array",
            FieldValue::Map(_) => "object",
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            FieldValue::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// Exact `i64` view of a number. Floats qualify only when integral and
    /// strictly inside the `i64` range: `2^63` does not fit.
    pub fn as_i64(&self) -> Option<i64> {
        // i64::MIN as f64 is exactly -2^63; i64::MAX as f64 rounds up to 2^63.
        const LOW: f64 = i64::MIN as f64;
        const HIGH: f64 = i64::MAX as f64;
        match *self {
            FieldValue::Int(i) => Some(i),
            FieldValue::UInt(u) => i64::try_from(u).ok(),
            FieldValue::Float(f) if f.fract() == 0.0 && (LOW..HIGH).contains(&f) => Some(f as i64),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            FieldValue::UInt(u) => Some(u),
            FieldValue::Int(i) => u64::try_from(i).ok(),
            _ => None,
        }
    }
}

/// Label form: strings render bare, booleans as `1`/`0`, compound values as JSON.
impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Bool(b) => write!(f, "{}", u8::from(*b)),
            FieldValue::Int(i) => write!(f, "{i}"),
            FieldValue::UInt(u) => write!(f, "{u}"),
            FieldValue::Float(x) => write!(f, "{x}"),
            FieldValue::Str(s) => f.write_str(s),
            FieldValue::List(_) | FieldValue::Map(_) => {
                let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
                f.write_str(&json)
            }
        }
    }
}

// ─── From impls (what `record!` accepts) ────────────────────────────────────

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<i64> for FieldValue {
    fn from(i: i64) -> Self {
        FieldValue::Int(i)
    }
}

impl From<usize> for FieldValue {
    fn from(n: usize) -> Self {
        i64::try_from(n).map_or(FieldValue::UInt(n as u64), FieldValue::Int)
    }
}

impl From<f64> for FieldValue {
    fn from(x: f64) -> Self {
        FieldValue::Float(x)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(SmolStr::from(s))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Str(SmolStr::from(s))
    }
}

/// Build a [`Record`](crate::record::Record) from `name => value` pairs.
///
/// ```
/// use record_set::record;
///
/// let r = record!{ "ID" => 1i64, "Title" => "Joe" };
/// assert_eq!(r.get_str("Title"), Some("Joe"));
/// ```
#[macro_export]
macro_rules! record {
    ($($key:expr => $val:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut record = $crate::record::Record::new();
        $(
            record.set_field($key, $crate::field_value::FieldValue::from($val));
        )*
        record
    }};
}

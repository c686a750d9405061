use crate::error::RecordError;
use crate::field_value::{FastMap, FieldValue};
use crate::position::Position;
use serde::ser::{Serialize, Serializer};
use smol_str::SmolStr;
use std::borrow::Cow;

// ─── Capabilities ───────────────────────────────────────────────────────────

/// Named field access. The only view a projection needs of a record.
///
/// Stored fields come back borrowed; computed ones (such as positional
/// decoration) come back owned.
pub trait Fielded {
    fn field(&self, name: &str) -> Result<Cow<'_, FieldValue>, RecordError>;

    #[inline]
    fn has_field(&self, name: &str) -> bool {
        self.field(name).is_ok()
    }
}

/// Receives the positional facts of a decorating traversal.
pub trait Decoratable {
    fn decorate(&mut self, position: Position);

    /// Position from the most recent decorating traversal, if any.
    fn position(&self) -> Option<Position>;
}

// ─── Record ─────────────────────────────────────────────────────────────────

/// A row: persistent named fields plus the position of its last traversal.
///
/// Once decorated, `Pos`, `First`, `Last`, `Middle`, `Even`, `Odd` and
/// `TotalItems` read through [`Fielded::field`] like stored fields, shadowing
/// a stored field of the same name. The position is excluded from equality
/// and serialization.
#[derive(Debug, Clone, Default)]
pub struct Record {
    fields: FastMap<SmolStr, FieldValue>,
    position: Option<Position>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a JSON object; any other JSON shape is rejected.
    pub fn from_json(value: serde_json::Value) -> Result<Self, RecordError> {
        match serde_json::from_value(value) {
            Ok(FieldValue::Map(fields)) => Ok(Self {
                fields,
                position: None,
            }),
            Ok(other) => Err(RecordError::NotAnObject {
                actual: other.kind(),
            }),
            Err(e) => Err(RecordError::Json(e.to_string())),
        }
    }

    /// Set a persistent field, returning the previous value.
    pub fn set_field(&mut self, name: &str, value: impl Into<FieldValue>) -> Option<FieldValue> {
        self.fields.insert(SmolStr::new(name), value.into())
    }

    fn lookup(&self, name: &str) -> Option<Cow<'_, FieldValue>> {
        if let Some(value) = self.position.and_then(|p| p.field(name)) {
            return Some(Cow::Owned(value));
        }
        self.fields.get(name).map(Cow::Borrowed)
    }

    // ════════════════════════════════════════════════════════════════════════
    // Typed reads
    // ════════════════════════════════════════════════════════════════════════

    /// Stored string field. Decoration is never a string.
    #[inline]
    pub fn get_str(&self, name: &str) -> Option<&str> {
        match self.lookup(name)? {
            Cow::Borrowed(value) => value.as_str(),
            Cow::Owned(_) => None,
        }
    }

    #[inline]
    pub fn get_i64(&self, name: &str) -> Option<i64> {
        self.lookup(name)?.as_i64()
    }

    #[inline]
    pub fn get_u64(&self, name: &str) -> Option<u64> {
        self.lookup(name)?.as_u64()
    }

    #[inline]
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.lookup(name)?.as_bool()
    }

    /// Like [`Record::get_str`], but distinguishes absent from mistyped.
    pub fn require_str(&self, name: &str) -> Result<&str, RecordError> {
        let value = self.lookup(name).ok_or_else(|| RecordError::MissingField {
            field: SmolStr::new(name),
        })?;
        let actual = value.kind();
        let found = match value {
            Cow::Borrowed(v) => v.as_str(),
            Cow::Owned(_) => None,
        };
        found.ok_or_else(|| RecordError::TypeMismatch {
            field: SmolStr::new(name),
            expected: "string",
            actual,
        })
    }

    // ════════════════════════════════════════════════════════════════════════
    // Decoration reads
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub fn pos(&self) -> Option<usize> {
        self.position.map(|p| p.pos())
    }

    #[inline]
    pub fn is_first(&self) -> bool {
        self.position.is_some_and(|p| p.is_first())
    }

    #[inline]
    pub fn is_last(&self) -> bool {
        self.position.is_some_and(|p| p.is_last())
    }

    #[inline]
    pub fn is_middle(&self) -> bool {
        self.position.is_some_and(|p| p.is_middle())
    }

    #[inline]
    pub fn is_even(&self) -> bool {
        self.position.is_some_and(|p| p.is_even())
    }

    #[inline]
    pub fn is_odd(&self) -> bool {
        self.position.is_some_and(|p| p.is_odd())
    }

    #[inline]
    pub fn multiple_of(&self, factor: usize) -> bool {
        self.position.is_some_and(|p| p.multiple_of(factor))
    }
}

impl Fielded for Record {
    fn field(&self, name: &str) -> Result<Cow<'_, FieldValue>, RecordError> {
        self.lookup(name).ok_or_else(|| RecordError::MissingField {
            field: SmolStr::new(name),
        })
    }
}

impl Decoratable for Record {
    #[inline]
    fn decorate(&mut self, position: Position) {
        self.position = Some(position);
    }

    #[inline]
    fn position(&self) -> Option<Position> {
        self.position
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        self.fields == other.fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

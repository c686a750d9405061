use crate::field_value::FieldValue;
use crate::key::SetKey;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use serde::ser::{Serialize, Serializer};

/// Ordered key → label mapping produced by
/// [`PositionalRecordSet::map`](crate::record_set::PositionalRecordSet::map),
/// typically rendered as the options of a selection widget.
#[derive(Debug, Clone, Default)]
pub struct DropdownMap {
    entries: IndexMap<SetKey, FieldValue, FxBuildHasher>,
}

impl DropdownMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Last write wins; a repeated key keeps its first position.
    pub fn insert(&mut self, key: SetKey, label: FieldValue) -> Option<FieldValue> {
        self.entries.insert(key, label)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: impl Into<SetKey>) -> Option<&FieldValue> {
        self.entries.get(&key.into())
    }

    pub fn contains_key(&self, key: impl Into<SetKey>) -> bool {
        self.entries.contains_key(&key.into())
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&SetKey, &FieldValue)> + '_ {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl ExactSizeIterator<Item = &SetKey> + '_ {
        self.entries.keys()
    }

    pub fn labels(&self) -> impl ExactSizeIterator<Item = &FieldValue> + '_ {
        self.entries.values()
    }
}

impl PartialEq for DropdownMap {
    /// Entry order counts: the same pairs in another order are a different map.
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl FromIterator<(SetKey, FieldValue)> for DropdownMap {
    fn from_iter<I: IntoIterator<Item = (SetKey, FieldValue)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

/// Serializes as a JSON object in entry order. Integer keys become their
/// decimal strings.
impl Serialize for DropdownMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter())
    }
}

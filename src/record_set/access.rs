use super::PositionalRecordSet;
use crate::config::RecordSetConfig;
use crate::error::SetError;
use crate::key::SetKey;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use std::ops::Index;
use tracing::{debug, trace};

impl<R> PositionalRecordSet<R> {
    // ════════════════════════════════════════════════════════════════════════
    // Construction
    // ════════════════════════════════════════════════════════════════════════

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: RecordSetConfig) -> Self {
        Self {
            slots: IndexMap::with_capacity_and_hasher(config.initial_capacity, FxBuildHasher),
            next_index: Some(0),
            empty_key: config.empty_key,
        }
    }

    /// Keys `0, 1, 2, ...` in iteration order of `records`.
    pub fn from_records(records: impl IntoIterator<Item = R>) -> Self {
        let mut set = Self::new();
        set.extend(records);
        debug!(count = set.count(), "record set built");
        set
    }

    // ════════════════════════════════════════════════════════════════════════
    // Keyed reads
    // ════════════════════════════════════════════════════════════════════════

    /// Record at `key`, or [`SetError::NotFound`].
    pub fn get(&self, key: impl Into<SetKey>) -> Result<&R, SetError> {
        let key = key.into();
        match self.slots.get(&key) {
            Some(record) => Ok(record),
            None => Err(SetError::NotFound { key }),
        }
    }

    pub fn get_mut(&mut self, key: impl Into<SetKey>) -> Result<&mut R, SetError> {
        let key = key.into();
        match self.slots.get_mut(&key) {
            Some(record) => Ok(record),
            None => Err(SetError::NotFound { key }),
        }
    }

    /// Record at `key`, or `None`. Same lookup as [`get`](Self::get).
    #[inline]
    pub fn try_get(&self, key: impl Into<SetKey>) -> Option<&R> {
        self.slots.get(&key.into())
    }

    #[inline]
    pub fn has(&self, key: impl Into<SetKey>) -> bool {
        self.slots.contains_key(&key.into())
    }

    // ════════════════════════════════════════════════════════════════════════
    // Keyed writes
    // ════════════════════════════════════════════════════════════════════════

    /// Store `record` at `key`.
    ///
    /// An existing key keeps its position and the previous record is
    /// returned. A new key is appended at the end.
    pub fn set(&mut self, key: impl Into<SetKey>, record: R) -> Option<R> {
        let key = key.into();
        if let (SetKey::Int(i), Some(next)) = (&key, self.next_index) {
            if *i >= next {
                self.next_index = i.checked_add(1);
            }
        }
        trace!(key = %key, "set slot");
        self.slots.insert(key, record)
    }

    /// Append under the next integer key and return that key.
    ///
    /// Fails with [`SetError::KeysExhausted`] once `i64::MAX` is in use,
    /// leaving the set untouched.
    pub fn push(&mut self, record: R) -> Result<SetKey, SetError> {
        let next = self.next_index.ok_or(SetError::KeysExhausted)?;
        let key = SetKey::Int(next);
        self.set(key.clone(), record);
        Ok(key)
    }

    /// Remove the slot at `key`. Absent keys are a no-op.
    ///
    /// Other keys are left as they are; only positions shift.
    pub fn remove(&mut self, key: impl Into<SetKey>) -> Option<R> {
        let key = key.into();
        let removed = self.slots.shift_remove(&key);
        trace!(key = %key, removed = removed.is_some(), "remove slot");
        removed
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.next_index = Some(0);
    }

    // ════════════════════════════════════════════════════════════════════════
    // Size & keys
    // ════════════════════════════════════════════════════════════════════════

    #[inline]
    pub fn count(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Keys in sequence order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &SetKey> + '_ {
        self.slots.keys()
    }

    /// Records in sequence order, dropping keys.
    pub fn into_records(self) -> Vec<R> {
        self.slots.into_values().collect()
    }
}

// ─── Trait impls ────────────────────────────────────────────────────────────

impl<R> FromIterator<R> for PositionalRecordSet<R> {
    fn from_iter<I: IntoIterator<Item = R>>(iter: I) -> Self {
        Self::from_records(iter)
    }
}

/// Appends through [`PositionalRecordSet::push`].
///
/// # Panics
///
/// Panics if the integer keys run out; call `push` directly to handle that.
impl<R> Extend<R> for PositionalRecordSet<R> {
    fn extend<I: IntoIterator<Item = R>>(&mut self, iter: I) {
        for record in iter {
            if let Err(e) = self.push(record) {
                panic!("cannot extend record set: {e}");
            }
        }
    }
}

/// Panics when `key` is absent; use [`PositionalRecordSet::get`] to handle that.
impl<R, K: Into<SetKey>> Index<K> for PositionalRecordSet<R> {
    type Output = R;

    fn index(&self, key: K) -> &R {
        let key = key.into();
        match self.slots.get(&key) {
            Some(record) => record,
            None => panic!("no record stored at key {key}"),
        }
    }
}

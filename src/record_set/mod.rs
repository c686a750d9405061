mod access;
mod project;
mod traverse;

pub use traverse::{DecoratingIter, Iter, Positions};

use crate::config::RecordSetConfig;
use crate::key::SetKey;
use crate::record::Record;
use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;
use smol_str::SmolStr;

// ─── PositionalRecordSet ────────────────────────────────────────────────────

/// An ordered set of records addressed by integer or string keys.
///
/// Iteration follows insertion order, never key order. Positional facts
/// (`Pos`, `First`, `Last`, ...) are computed per traversal: [`positions`]
/// yields them alongside each record without touching it, while
/// [`iter_mut`] (and `for r in &mut set`) writes them onto each record as
/// it is visited.
///
/// The set owns its records, so two traversals can never race on one
/// record's decoration.
///
/// [`positions`]: PositionalRecordSet::positions
/// [`iter_mut`]: PositionalRecordSet::iter_mut
#[derive(Debug, Clone)]
pub struct PositionalRecordSet<R = Record> {
    slots: IndexMap<SetKey, R, FxBuildHasher>,
    /// Key the next `push` receives: one past the largest integer key seen.
    /// `None` once `i64::MAX` has been used.
    next_index: Option<i64>,
    empty_key: SmolStr,
}

impl<R> Default for PositionalRecordSet<R> {
    fn default() -> Self {
        Self::with_config(RecordSetConfig::default())
    }
}

impl<R: PartialEq> PartialEq for PositionalRecordSet<R> {
    /// Same keys holding equal records in the same order.
    fn eq(&self, other: &Self) -> bool {
        self.slots.iter().eq(other.slots.iter())
    }
}

use serde::Deserialize;
use smol_str::SmolStr;

/// Construction options for [`PositionalRecordSet::with_config`].
///
/// [`PositionalRecordSet::with_config`]: crate::record_set::PositionalRecordSet::with_config
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecordSetConfig {
    /// Slots reserved up front.
    ///
    /// Default: 16.
    pub initial_capacity: usize,
    /// Key of the "no selection" entry that `map` prepends when given an
    /// empty label.
    ///
    /// Default: the empty string.
    pub empty_key: SmolStr,
}

impl Default for RecordSetConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 16,
            empty_key: SmolStr::default(),
        }
    }
}

impl RecordSetConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ─── Error ──────────────────────────────────────────────────────────────────
use crate::key::SetKey;
use smol_str::SmolStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RecordError {
    #[error("record has no field named {field:?}")]
    MissingField { field: SmolStr },
    #[error("field {field:?}: expected {expected}, got {actual}")]
    TypeMismatch {
        field: SmolStr,
        expected: &'static str,
        actual: &'static str,
    },
    #[error("records are built from objects, got {actual}")]
    NotAnObject { actual: &'static str },
    #[error("malformed record: {0}")]
    Json(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetError {
    #[error("no record stored at key {key}")]
    NotFound { key: SetKey },
    /// A projection named a field some record does not carry.
    #[error("record has no field named {field:?}")]
    MissingField { field: SmolStr },
    /// `push` after the integer key `i64::MAX` is taken.
    #[error("no integer key left to append under")]
    KeysExhausted,
    #[error("record error: {0}")]
    Record(RecordError),
}

impl From<RecordError> for SetError {
    fn from(e: RecordError) -> Self {
        match e {
            RecordError::MissingField { field } => SetError::MissingField { field },
            other => SetError::Record(other),
        }
    }
}

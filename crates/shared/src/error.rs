use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadFailureKind {
    Io,
    Decode,
    Transport,
    UnsupportedSource,
}

/// Why the record collection could not be loaded. Kept serializable so it can
/// travel inside view snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind:?}: {message}")]
pub struct LoadFailure {
    pub kind: LoadFailureKind,
    pub message: String,
}

impl LoadFailure {
    pub fn new(kind: LoadFailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseNameError {
    #[error("unknown filter attribute '{0}' (expected make or transmission)")]
    UnknownAttribute(String),
    #[error("unknown sort key '{0}'")]
    UnknownSortKey(String),
    #[error("unknown option source '{0}' (expected catalog or working_set)")]
    UnknownOptionSource(String),
    #[error("unknown table style '{0}' (expected zebra or plain)")]
    UnknownStyle(String),
}

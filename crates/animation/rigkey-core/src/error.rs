//! Error types for keyed-rotation edits.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error classification for hosts (serialized as SCREAMING_SNAKE_CASE).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    NoSelection,
    UnknownBonePair,
    NoAnimationData,
    InvalidRange,
    SpringUnavailable,
}

/// Call-level failures. Every variant is raised before any mutation happens.
/// Resolver misses (unknown bone, missing channel or key) are not errors: the
/// passes skip them and log at trace level.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EditError {
    #[error("no selection: {reason}")]
    NoSelection { reason: String },

    #[error("unknown bone pair '{id}'")]
    UnknownBonePair { id: String },

    #[error("no animation data found on clip '{clip}'")]
    NoAnimationData { clip: String },

    #[error("invalid frame range [{start}, {end}]")]
    InvalidRange { start: i32, end: i32 },

    #[error("spring bone physics not available on this host")]
    SpringUnavailable,
}

impl EditError {
    pub fn no_selection(reason: impl Into<String>) -> Self {
        EditError::NoSelection {
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            EditError::NoSelection { .. } => ErrorKind::NoSelection,
            EditError::UnknownBonePair { .. } => ErrorKind::UnknownBonePair,
            EditError::NoAnimationData { .. } => ErrorKind::NoAnimationData,
            EditError::InvalidRange { .. } => ErrorKind::InvalidRange,
            EditError::SpringUnavailable => ErrorKind::SpringUnavailable,
        }
    }

    /// Structured (kind + message) form for JSON hosts.
    pub fn report(&self) -> ErrorReport {
        ErrorReport {
            kind: self.kind(),
            message: self.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub kind: ErrorKind,
    pub message: String,
}

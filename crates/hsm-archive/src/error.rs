//! Codec error types.

use std::num::ParseIntError;

/// A command-line archive token could not be decoded.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error("Unable to parse {token}: expected 6 ':'-separated fields, found {found}")]
    FieldCount { token: String, found: usize },

    #[error("Unable to parse {token}: invalid archive number {value:?}: {source}")]
    ArchiveId {
        token: String,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Unable to parse {token}: invalid snapshots flag {value:?}")]
    Snapshots { token: String, value: String },
}

impl DecodeError {
    /// The token that failed to decode.
    pub fn token(&self) -> &str {
        match self {
            DecodeError::FieldCount { token, .. }
            | DecodeError::ArchiveId { token, .. }
            | DecodeError::Snapshots { token, .. } => token,
        }
    }
}

/// A descriptor cannot be written as a token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EncodeError {
    #[error("archive field {field} contains the ':' delimiter and cannot be encoded")]
    Unrepresentable { field: &'static str },
}

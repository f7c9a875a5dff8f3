//! Backend archive definitions for the HSM mover.
//!
//! An archive is a named storage target with a protocol-level numeric ID.
//! Definitions arrive either from the JSON config file (via serde) or from
//! a compact `name:type:number:s3url:posixdir:snapshots` command-line token.

mod codec;
mod error;

pub use codec::{decode, encode, parse_bool, FIELD_COUNT, FIELD_DELIMITER, TOKEN_FORMAT};
pub use error::{DecodeError, EncodeError};

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One backend archive definition.
///
/// `kind` is an open tag; unsupported kinds are rejected by the backend
/// that consumes the descriptor, not here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveDescriptor {
    /// Human identifier, normally equal to the map key.
    pub name: String,

    /// Backend type (e.g. "s3", "posix", "mirror").
    #[serde(rename = "type")]
    pub kind: String,

    /// Protocol-level archive number.
    pub archive_id: u32,

    /// Object-store endpoint.
    #[serde(rename = "s3_url")]
    pub backend_url: String,

    /// Local directory for filesystem backends.
    #[serde(rename = "posix_dir")]
    pub backend_path: String,

    /// Whether point-in-time snapshots are requested.
    pub snapshots_enabled: bool,
}

impl ArchiveDescriptor {
    /// Create a descriptor with just a name, kind and ID.
    pub fn new(name: impl Into<String>, kind: impl Into<String>, archive_id: u32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            archive_id,
            ..Self::default()
        }
    }

    /// Whether [`encode`] can express this descriptor as a token.
    pub fn is_representable(&self) -> bool {
        codec::unrepresentable_field(self).is_none()
    }
}

impl FromStr for ArchiveDescriptor {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

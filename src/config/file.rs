//! Config file source (layer 2)
//!
//! Reads an optional JSON document and overlays it onto the configuration
//! built so far.

use sha2::{Digest, Sha256};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::defaults::HsmConfig;
use super::error::ConfigError;
use super::merge::overlay;

/// A config file that was found and applied.
#[derive(Debug, Clone)]
pub struct FileLayer {
    /// The configuration after the file was applied
    pub config: HsmConfig,

    /// Path the file was read from
    pub path: PathBuf,

    /// SHA-256 digest of the raw file bytes
    pub digest: String,
}

/// Load `path` and apply it on top of `base`.
///
/// A file that cannot be read is treated as absent and yields `Ok(None)`.
/// A file that is read but is not a valid configuration document is an error.
pub fn load_file_layer(path: &Path, base: &HsmConfig) -> Result<Option<FileLayer>, ConfigError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(config_path = %path.display(), "config file not found, skipping");
            return Ok(None);
        }
        Err(e) => {
            warn!(config_path = %path.display(), error = %e, "config file unreadable, skipping");
            return Ok(None);
        }
    };

    let digest = hex::encode(Sha256::digest(&bytes));

    let document: serde_json::Value =
        serde_json::from_slice(&bytes).map_err(|source| ConfigError::FileFormat {
            path: path.to_path_buf(),
            source,
        })?;

    let merged = overlay(base.to_value(), document);
    let config: HsmConfig =
        serde_json::from_value(merged).map_err(|source| ConfigError::FileFormat {
            path: path.to_path_buf(),
            source,
        })?;

    debug!(config_path = %path.display(), %digest, "applied config file");

    Ok(Some(FileLayer {
        config,
        path: path.to_path_buf(),
        digest,
    }))
}

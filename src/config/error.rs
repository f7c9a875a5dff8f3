//! Configuration errors.

use std::path::PathBuf;

/// Why a configuration could not be resolved.
///
/// Every variant is fatal to startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{}: {source}", .path.display())]
    FileFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

/// The merged configuration is unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The --mnt <mountpoint> option was not specified and not in config")]
    MissingMountPoint,

    #[error("processes must be at least 1")]
    InvalidWorkerCount,
}

//! Configuration resolution
//!
//! Implements the layered mover configuration:
//! 1. Built-in defaults
//! 2. JSON config file (/etc/lustre_hsm.conf unless overridden)
//! 3. Forced mirror archive
//! 4. CLI flags

mod defaults;
mod effective;
mod error;
mod file;
mod merge;
mod resolve;

pub use defaults::{
    HsmConfig, DEFAULT_CONFIG_PATH, DEFAULT_CONTROL_SERVER, DEFAULT_WORKER_COUNT,
    MIRROR_ARCHIVE_ID, MIRROR_ARCHIVE_KIND, MIRROR_ARCHIVE_NAME,
};
pub use effective::{ConfigOrigin, ConfigSource, EffectiveConfig};
pub use error::{ConfigError, ValidationError};
pub use file::{load_file_layer, FileLayer};
pub use merge::overlay;
pub use resolve::{resolve, ResolveOptions};

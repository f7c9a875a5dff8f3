//! HSM Mover - configuration for the Lustre HSM data mover
//!
//! Resolves the mover's runtime configuration from built-in defaults, an
//! optional JSON config file and command-line flags, including repeated
//! `--archive` definitions.

pub mod cli;
pub mod config;
pub mod logging;

pub use cli::MoverArgs;
pub use config::{resolve, ConfigError, EffectiveConfig, HsmConfig, ResolveOptions};
pub use hsm_archive::{ArchiveDescriptor, DecodeError};

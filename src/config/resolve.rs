//! Layered configuration resolution
//!
//! Layers are applied in a fixed order, each one overwriting what came
//! before (last writer wins, per archive name and per scalar):
//! 1. Built-in defaults
//! 2. Config file (unless disabled)
//! 3. Forced mirror archive (unless disabled)
//! 4. `--archive` definitions, in the order given
//! 5. Scalar CLI overrides (mount point, control server, worker count)
//!
//! The result is then validated.

use hsm_archive::ArchiveDescriptor;
use std::path::PathBuf;
use tracing::debug;

use super::defaults::{HsmConfig, DEFAULT_CONFIG_PATH, MIRROR_ARCHIVE_NAME};
use super::effective::{ConfigOrigin, ConfigSource, EffectiveConfig};
use super::error::{ConfigError, ValidationError};
use super::file::load_file_layer;

/// The command-line layer, as plain values.
///
/// Empty strings and non-positive worker counts mean "not given".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolveOptions {
    pub config_path: PathBuf,
    pub disable_config: bool,
    pub disable_mirror: bool,
    pub mount_point: String,
    pub control_server: String,
    pub worker_count: i64,
    pub archives: Vec<ArchiveDescriptor>,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            disable_config: false,
            disable_mirror: false,
            mount_point: String::new(),
            control_server: String::new(),
            worker_count: 0,
            archives: Vec::new(),
        }
    }
}

/// Resolve the effective configuration.
pub fn resolve(options: &ResolveOptions) -> Result<EffectiveConfig, ConfigError> {
    let mut config = HsmConfig::default();
    let mut sources = vec![ConfigSource::new(ConfigOrigin::Builtin)];

    if options.disable_config {
        debug!("config file disabled");
    } else if let Some(layer) = load_file_layer(&options.config_path, &config)? {
        config = layer.config;
        sources.push(ConfigSource {
            origin: ConfigOrigin::File,
            path: Some(layer.path.to_string_lossy().to_string()),
            digest: Some(layer.digest),
        });
    }

    if !options.disable_mirror {
        config
            .archives
            .insert(MIRROR_ARCHIVE_NAME.to_string(), HsmConfig::mirror_archive());
        sources.push(ConfigSource::new(ConfigOrigin::Mirror));
    }

    let cli_given = !options.archives.is_empty()
        || !options.mount_point.is_empty()
        || !options.control_server.is_empty()
        || options.worker_count > 0;

    for archive in &options.archives {
        if config
            .archives
            .insert(archive.name.clone(), archive.clone())
            .is_some()
        {
            debug!(archive = %archive.name, "archive definition replaced from command line");
        }
    }

    if !options.mount_point.is_empty() {
        config.mount_point = options.mount_point.clone();
    }

    if !options.control_server.is_empty() {
        config.control_server = options.control_server.clone();
    }

    if options.worker_count > 0 {
        // Counts beyond u32 are clamped rather than wrapped
        config.worker_count = u32::try_from(options.worker_count).unwrap_or(u32::MAX);
    }

    if cli_given {
        sources.push(ConfigSource::new(ConfigOrigin::Cli));
    }

    validate(&config)?;

    debug!(
        mount_point = %config.mount_point,
        control_server = %config.control_server,
        worker_count = config.worker_count,
        archives = config.archives.len(),
        "configuration resolved"
    );
    debug!(config = %config, "effective configuration");

    Ok(EffectiveConfig::new(config, sources))
}

fn validate(config: &HsmConfig) -> Result<(), ValidationError> {
    if config.mount_point.is_empty() {
        return Err(ValidationError::MissingMountPoint);
    }
    if config.worker_count == 0 {
        return Err(ValidationError::InvalidWorkerCount);
    }
    Ok(())
}

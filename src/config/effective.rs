//! Effective configuration with provenance
//!
//! The resolved configuration plus a record of which layers contributed
//! to it. Consumers get read-only access.

use chrono::{DateTime, Utc};
use hsm_archive::ArchiveDescriptor;
use serde::{Deserialize, Serialize};
use std::ops::Deref;

use super::defaults::HsmConfig;

/// Origin of a configuration layer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigOrigin {
    Builtin,
    File,
    Mirror,
    Cli,
}

/// A contributing layer with provenance
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConfigSource {
    /// Origin of this layer
    pub origin: ConfigOrigin,

    /// File path (file layer only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// SHA-256 digest of raw file bytes (file layer only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,
}

impl ConfigSource {
    pub(crate) fn new(origin: ConfigOrigin) -> Self {
        Self {
            origin,
            path: None,
            digest: None,
        }
    }
}

/// The resolved mover configuration.
#[derive(Debug, Clone, Serialize)]
pub struct EffectiveConfig {
    /// When resolution finished
    resolved_at: DateTime<Utc>,

    /// The merged configuration
    config: HsmConfig,

    /// Contributing layers in the order they were applied
    sources: Vec<ConfigSource>,
}

impl EffectiveConfig {
    pub(crate) fn new(config: HsmConfig, sources: Vec<ConfigSource>) -> Self {
        Self {
            resolved_at: Utc::now(),
            config,
            sources,
        }
    }

    pub fn config(&self) -> &HsmConfig {
        &self.config
    }

    pub fn sources(&self) -> &[ConfigSource] {
        &self.sources
    }

    pub fn resolved_at(&self) -> DateTime<Utc> {
        self.resolved_at
    }

    /// Look up an archive by name.
    pub fn archive(&self, name: &str) -> Option<&ArchiveDescriptor> {
        self.config.archives.get(name)
    }

    /// Whether a layer of the given origin contributed.
    pub fn has_source(&self, origin: ConfigOrigin) -> bool {
        self.sources.iter().any(|s| s.origin == origin)
    }

    /// Serialize to JSON, provenance included.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl Deref for EffectiveConfig {
    type Target = HsmConfig;

    fn deref(&self) -> &HsmConfig {
        &self.config
    }
}

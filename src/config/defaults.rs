//! Built-in defaults (layer 1)
//!
//! The compiled-in configuration every resolution starts from.

use hsm_archive::ArchiveDescriptor;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/lustre_hsm.conf";

/// Control server address when neither file nor CLI sets one.
pub const DEFAULT_CONTROL_SERVER: &str = ":6379";

/// Number of mover processes when neither file nor CLI sets one.
pub const DEFAULT_WORKER_COUNT: u32 = 4;

/// Name and kind of the built-in mirror archive.
pub const MIRROR_ARCHIVE_NAME: &str = "mirror";
pub const MIRROR_ARCHIVE_KIND: &str = "mirror";

/// Reserved archive number of the mirror archive.
pub const MIRROR_ARCHIVE_ID: u32 = 100;

/// Mover configuration.
///
/// Keys absent from a config file keep the value they had before the file
/// was applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HsmConfig {
    /// Lustre mount point. Must be non-empty once resolved.
    #[serde(rename = "lustre")]
    pub mount_point: String,

    /// Control server address (host:port)
    #[serde(rename = "redis_server")]
    pub control_server: String,

    /// Number of concurrent mover processes
    #[serde(rename = "processes")]
    pub worker_count: u32,

    /// Archives by name. Later definitions of a name replace earlier ones.
    pub archives: BTreeMap<String, ArchiveDescriptor>,
}

impl Default for HsmConfig {
    fn default() -> Self {
        Self {
            mount_point: String::new(),
            control_server: DEFAULT_CONTROL_SERVER.to_string(),
            worker_count: DEFAULT_WORKER_COUNT,
            archives: BTreeMap::new(),
        }
    }
}

impl HsmConfig {
    /// The always-present mirror archive.
    pub fn mirror_archive() -> ArchiveDescriptor {
        ArchiveDescriptor::new(MIRROR_ARCHIVE_NAME, MIRROR_ARCHIVE_KIND, MIRROR_ARCHIVE_ID)
    }

    /// Convert to JSON Value for merging
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "lustre": self.mount_point,
            "redis_server": self.control_server,
            "processes": self.worker_count,
            "archives": self.archives,
        })
    }
}

/// Tab-indented JSON, as printed for operators.
impl fmt::Display for HsmConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"\t");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser).map_err(|_| fmt::Error)?;
        f.write_str(&String::from_utf8_lossy(&buf))
    }
}

//! Shared helpers for configuration resolution tests.

#![allow(dead_code)]

use clap::Parser;
use hsm_mover::{MoverArgs, ResolveOptions};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Path to a checked-in sample config file
pub fn sample_config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/lustre_hsm.json")
}

/// A scratch directory holding one config file.
pub struct ConfigDir {
    dir: TempDir,
}

impl ConfigDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    /// Write `contents` as the config file and return its path.
    pub fn write(&self, contents: &str) -> PathBuf {
        let path = self.path();
        std::fs::write(&path, contents).expect("write config file");
        path
    }

    /// Where the config file lives (it may not exist yet).
    pub fn path(&self) -> PathBuf {
        self.dir.path().join("lustre_hsm.conf")
    }
}

/// Parse mover flags the way the binary does.
pub fn options_from_args(args: &[&str]) -> ResolveOptions {
    MoverArgs::try_parse_from(std::iter::once("hsm-mover").chain(args.iter().copied()))
        .expect("valid arguments")
        .resolve_options()
}

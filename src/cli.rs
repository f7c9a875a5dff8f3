//! Command-line surface of the mover.

use clap::{CommandFactory, Parser};
use hsm_archive::{ArchiveDescriptor, TOKEN_FORMAT};
use std::path::PathBuf;
use std::process;

use crate::config::{ResolveOptions, DEFAULT_CONFIG_PATH};
use crate::logging::LogFormat;

#[derive(Debug, Clone, Parser)]
#[command(name = "hsm-mover")]
#[command(about = "Lustre HSM data mover", version)]
pub struct MoverArgs {
    /// Lustre HSM config file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Disable config file
    #[arg(long)]
    pub disable_config: bool,

    /// Disable mirror archive type
    #[arg(long)]
    pub disable_mirror: bool,

    /// Lustre mount point
    #[arg(long, value_name = "MOUNTPOINT")]
    pub mnt: Option<String>,

    /// Redis server address
    #[arg(long, value_name = "ADDR")]
    pub redis: Option<String>,

    /// Number of processes (values below 1 are ignored)
    #[arg(long, value_name = "N", default_value_t = 0, allow_negative_numbers = true)]
    pub np: i64,

    #[arg(
        long = "archive",
        value_name = "ARCHIVE",
        value_parser = hsm_archive::decode,
        help = format!("Archive definition(s) ({})", TOKEN_FORMAT)
    )]
    pub archives: Vec<ArchiveDescriptor>,

    /// Log filter directive (overridden by HSM_MOVER_LOG)
    #[arg(long, value_name = "FILTER", default_value = "warn")]
    pub log_level: String,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    pub dump_config: bool,
}

impl MoverArgs {
    /// The command-line layer for the resolver.
    pub fn resolve_options(&self) -> ResolveOptions {
        ResolveOptions {
            config_path: self.config.clone(),
            disable_config: self.disable_config,
            disable_mirror: self.disable_mirror,
            mount_point: self.mnt.clone().unwrap_or_default(),
            control_server: self.redis.clone().unwrap_or_default(),
            worker_count: self.np,
            archives: self.archives.clone(),
        }
    }
}

/// Print `msg` and the usage summary to stderr, then exit with status 1.
pub fn usage_error(msg: &str) -> ! {
    eprintln!("{}", msg);
    eprintln!("{}", MoverArgs::command().render_help());
    process::exit(1);
}

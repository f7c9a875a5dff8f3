//! HSM Mover CLI
//!
//! Entry point for the `hsm-mover` command-line tool.

use clap::Parser;
use hsm_mover::cli::usage_error;
use hsm_mover::logging::init_logging;
use hsm_mover::{resolve, MoverArgs};
use std::process;
use tracing::info;

fn main() {
    let args = MoverArgs::parse();

    if let Err(e) = init_logging(&args.log_level, args.log_format) {
        usage_error(&e.to_string());
    }

    let config = match resolve(&args.resolve_options()) {
        Ok(c) => c,
        Err(e) => usage_error(&format!("! {}", e)),
    };

    if args.dump_config {
        match config.to_json() {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error serializing config: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    info!(
        mount_point = %config.mount_point,
        archives = config.archives.len(),
        "mover configuration ready"
    );
}

//! Logging bootstrap
//!
//! Structured logging with `tracing`. Events go to stderr so that stdout
//! stays free for `--dump-config` output.

use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Environment variable holding a filter directive; overrides `--log-level`.
pub const LOG_ENV_VAR: &str = "HSM_MOVER_LOG";

/// Environment variable selecting the output format; overrides `--log-format`.
pub const LOG_FORMAT_ENV_VAR: &str = "HSM_MOVER_LOG_FORMAT";

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "text" => Some(LogFormat::Text),
            "json" => Some(LogFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("Invalid log filter {directive:?}: {reason}")]
    InvalidFilter { directive: String, reason: String },

    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Initialize the global subscriber.
///
/// `level` is a filter directive such as `warn` or `hsm_mover=debug`.
pub fn init_logging(level: &str, format: LogFormat) -> Result<(), LoggingError> {
    let filter = build_env_filter(std::env::var(LOG_ENV_VAR).ok().as_deref(), level)?;
    let format = std::env::var(LOG_FORMAT_ENV_VAR)
        .ok()
        .and_then(|v| LogFormat::parse(&v))
        .unwrap_or(format);

    let base = Registry::default().with(filter);
    let result = match format {
        LogFormat::Json => base
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
        LogFormat::Text => base
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    result.map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))
}

/// Build the filter, preferring a non-empty environment directive.
fn build_env_filter(env_directive: Option<&str>, level: &str) -> Result<EnvFilter, LoggingError> {
    let directive = match env_directive {
        Some(d) if !d.trim().is_empty() => d,
        _ => level,
    };

    EnvFilter::try_new(directive).map_err(|e| LoggingError::InvalidFilter {
        directive: directive.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_directive_wins() {
        let filter = build_env_filter(Some("debug"), "warn").unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_blank_env_directive_ignored() {
        let filter = build_env_filter(Some("  "), "warn").unwrap();
        assert_eq!(filter.to_string(), "warn");

        let filter = build_env_filter(None, "hsm_mover=trace").unwrap();
        assert_eq!(filter.to_string(), "hsm_mover=trace");
    }

    #[test]
    fn test_invalid_directive() {
        let err = build_env_filter(None, "hsm_mover=loud").unwrap_err();
        assert!(matches!(err, LoggingError::InvalidFilter { .. }));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(LogFormat::parse("json"), Some(LogFormat::Json));
        assert_eq!(LogFormat::parse("text"), Some(LogFormat::Text));
        assert_eq!(LogFormat::parse("yaml"), None);
    }
}

//! Tracing setup.
//!
//! A TUI owns stdout, so logs only ever go to a file. Logging stays off
//! unless `MARQUEE_LOG` names a log file path; `RUST_LOG` picks the filter
//! (default `info`).

use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the log file path.
pub const LOG_ENV: &str = "MARQUEE_LOG";

/// Log file path from the environment, if logging is enabled.
pub fn log_path() -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

/// Install the global subscriber. Returns the log file path when logging
/// was enabled.
pub fn init_tracing() -> Option<PathBuf> {
    let path = log_path()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: failed to open log file {}: {}", path.display(), err);
            return None;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init();
    if installed.is_err() {
        return None;
    }

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "logging started");
    Some(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_logging_off_without_env() {
        std::env::remove_var(LOG_ENV);
        assert!(log_path().is_none());
        assert!(init_tracing().is_none());
    }

    #[test]
    #[serial]
    fn test_empty_env_keeps_logging_off() {
        std::env::set_var(LOG_ENV, "");
        assert!(log_path().is_none());
        std::env::remove_var(LOG_ENV);
    }

    #[test]
    #[serial]
    fn test_log_path_from_env() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("marquee.log");
        std::env::set_var(LOG_ENV, &path);
        assert_eq!(log_path(), Some(path));
        std::env::remove_var(LOG_ENV);
    }
}

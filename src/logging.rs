//! File-based tracing setup.
//!
//! The terminal belongs to the viewer while a session runs, so diagnostics go
//! to a log file instead. Follow them with `tail -f` from another terminal.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info";

const LOG_FILE_NAME: &str = "critique.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to create log directory {path:?}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The path has no usable file name or no parent directory.
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    #[error("A global tracing subscriber is already installed")]
    AlreadyInitialized,
}

/// Where logs go when `--log-file` is not given.
///
/// Falls back to the system temp directory when no cache directory can be
/// determined for the current user.
pub fn default_log_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "critique")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("critique"))
        .join(LOG_FILE_NAME)
}

/// Install the global subscriber, appending to `log_path`.
///
/// The parent directory is created first, so it exists even when a subscriber
/// was already installed and this returns [`LoggingError::AlreadyInitialized`].
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(directory).map_err(|source| LoggingError::CreateDir {
        path: directory.to_path_buf(),
        source,
    })?;

    let appender = tracing_appender::rolling::never(directory, file_name);
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)
}

fn split_log_path(log_path: &Path) -> Result<(&Path, &str), LoggingError> {
    let invalid = || LoggingError::InvalidPath(log_path.to_path_buf());
    let file_name = log_path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(invalid)?;
    let directory = log_path.parent().ok_or_else(invalid)?;
    // "app.log" has an empty parent; log next to the working directory then
    let directory = if directory.as_os_str().is_empty() {
        Path::new(".")
    } else {
        directory
    };
    Ok((directory, file_name))
}

//! Domain error types

use std::io;
use std::process::ExitStatus;

use thiserror::Error;

/// Error when a notification could not be delivered
#[derive(Debug, Error)]
pub enum NotificationError {
    /// The host OS has no notification mechanism we know how to drive
    #[error("unsupported operating system: {0}")]
    UnsupportedPlatform(String),

    /// The notification tool could not be launched
    #[error(transparent)]
    Spawn(#[from] io::Error),

    /// The notification tool ran but exited unsuccessfully
    #[error("{0}")]
    Exited(ExitStatus),

    /// The in-process notification backend reported a failure
    #[error("Failed to show notification: {0}")]
    Native(String),
}

/// Error when notifier configuration is invalid
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to parse notifier config: {0}")]
    Parse(String),

    #[error("Invalid config value for '{key}': {message}")]
    Invalid { key: String, message: String },
}

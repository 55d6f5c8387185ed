//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::domain::config::{NotifierBackend, NotifierConfig};

/// WebShot desktop helpers - notifications and path utilities
#[derive(Parser, Debug)]
#[command(name = "webshot-desktop")]
#[command(version)]
#[command(about = "Desktop notifications and filesystem helpers for WebShot")]
#[command(long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a desktop notification
    Notify(NotifyArgs),
    /// Create a directory and any missing parents
    Mkdir {
        /// Directory to create
        path: PathBuf,
    },
    /// Print the home directory
    Home,
    /// Expand a leading ~ to the home directory
    Expand {
        /// Path to expand
        path: String,
    },
    /// Format a byte count for humans
    Size {
        /// Number of bytes
        #[arg(allow_negative_numbers = true)]
        bytes: i64,
    },
    /// Replace characters that are invalid in filenames
    Sanitize {
        /// Filename to clean up
        name: String,
    },
    /// Check that a string is an http(s) URL
    CheckUrl {
        /// URL to check
        url: String,
    },
}

/// Arguments for `notify`
#[derive(Args, Debug)]
pub struct NotifyArgs {
    /// Notification title
    pub title: String,

    /// Notification body
    pub message: String,

    /// Play the default notification sound
    #[arg(short = 's', long)]
    pub sound: bool,

    /// Delivery backend
    #[arg(long, value_name = "BACKEND", env = "WEBSHOT_NOTIFY_BACKEND")]
    pub backend: Option<BackendArg>,

    /// Application id shown with the notification
    #[arg(long, value_name = "NAME", env = "WEBSHOT_APP_NAME")]
    pub app_name: Option<String>,

    /// Expiry passed to notify-send, in milliseconds (Linux)
    #[arg(long, value_name = "MS", env = "WEBSHOT_NOTIFY_TIMEOUT_MS")]
    pub timeout_ms: Option<u32>,
}

impl NotifyArgs {
    /// Config overrides from flags and environment
    pub fn config(&self) -> NotifierConfig {
        NotifierConfig {
            backend: self.backend.map(|b| NotifierBackend::from(b).to_string()),
            app_name: self.app_name.clone(),
            timeout_ms: self.timeout_ms,
        }
    }
}

/// Backend argument for clap ValueEnum
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Command,
    Native,
}

impl From<BackendArg> for NotifierBackend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Command => NotifierBackend::Command,
            BackendArg::Native => NotifierBackend::Native,
        }
    }
}

//! webshot-desktop - Desktop notifications and filesystem helpers
//!
//! Two independent pieces used by the WebShot host application:
//!
//! - **Notifications**: show a native desktop notification by spawning the
//!   platform's own tool (`osascript`, `notify-send`, `powershell`) or
//!   in-process via notify-rust.
//! - **Paths**: directory creation, home-directory lookup, `~` expansion,
//!   byte-size formatting, filename sanitization and URL prefix checks.
//!
//! # Architecture
//!
//! - **Domain**: Value objects, configuration, errors and pure helpers
//! - **Application**: Port interfaces (traits)
//! - **Infrastructure**: Notifier adapters and OS-facing helpers
//! - **CLI**: Thin command-line front end over the library

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;

pub use application::ports::Notifier;
pub use domain::{
    format_file_size, is_valid_url, sanitize_filename, ConfigError, Notification,
    NotificationError, NotifierConfig, Platform,
};
pub use infrastructure::{create_notifier, ensure_directory, expand_path, get_home_dir};

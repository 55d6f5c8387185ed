//! Infrastructure layer - Adapter implementations
//!
//! Contains the notifier adapters and the helpers that touch the
//! filesystem or process environment.

pub mod fs;
pub mod notification;

// Re-export adapters
pub use fs::{ensure_directory, expand_path, get_home_dir};
pub use notification::{create_notifier, CommandNotifier, NotifyRustNotifier};

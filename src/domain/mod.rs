//! Domain layer - Core types and pure helpers
//!
//! Contains value objects, configuration, errors, and the pure
//! path/string functions. This layer has no dependencies on external
//! systems.

pub mod config;
pub mod error;
pub mod notification;
pub mod paths;
pub mod platform;

// Re-export common types
pub use config::{NotifierBackend, NotifierConfig};
pub use error::*;
pub use notification::Notification;
pub use paths::{format_file_size, is_valid_url, sanitize_filename};
pub use platform::Platform;

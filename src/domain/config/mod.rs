//! Configuration value objects

mod notifier_config;

pub use notifier_config::{NotifierBackend, NotifierConfig, DEFAULT_APP_NAME, DEFAULT_TIMEOUT_MS};

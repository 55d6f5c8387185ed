//! Notification infrastructure module
//!
//! Provides desktop notifications by spawning the platform's own tool
//! (default) or in-process through notify-rust.

mod command;
mod notify_rust;
pub mod script;

pub use command::CommandNotifier;
pub use notify_rust::NotifyRustNotifier;
pub use script::NotificationCommand;

use crate::application::ports::Notifier;
use crate::domain::config::{NotifierBackend, NotifierConfig};
use crate::domain::error::ConfigError;

/// Create the notifier selected by `config` for the current platform
pub fn create_notifier(config: &NotifierConfig) -> Result<Box<dyn Notifier>, ConfigError> {
    let notifier: Box<dyn Notifier> = match config.backend()? {
        NotifierBackend::Command => Box::new(CommandNotifier::new(config.clone())),
        NotifierBackend::Native => {
            Box::new(NotifyRustNotifier::with_app_name(config.app_name_or_default()))
        }
    };
    Ok(notifier)
}

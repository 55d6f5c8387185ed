//! Cross-platform notification adapter using notify-rust
//!
//! Works on Windows, macOS, and Linux without spawning a helper process.

use async_trait::async_trait;
use tracing::debug;

use crate::application::ports::Notifier;
use crate::domain::config::DEFAULT_APP_NAME;
use crate::domain::error::NotificationError;
use crate::domain::notification::Notification;
use crate::domain::platform::Platform;

/// Cross-platform notifier using notify-rust
pub struct NotifyRustNotifier {
    platform: Platform,
    /// Application name for notifications
    app_name: String,
}

impl NotifyRustNotifier {
    /// Create a new notify-rust notifier
    pub fn new() -> Self {
        Self::with_app_name(DEFAULT_APP_NAME)
    }

    /// Create with custom app name
    pub fn with_app_name(app_name: impl Into<String>) -> Self {
        Self {
            platform: Platform::current(),
            app_name: app_name.into(),
        }
    }

    /// Override the detected platform
    pub fn on_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }
}

impl Default for NotifyRustNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for NotifyRustNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        if !self.platform.is_supported() {
            return Err(NotificationError::UnsupportedPlatform(
                self.platform.to_string(),
            ));
        }

        let title = notification.title.clone();
        let message = notification.message.clone();
        let sound = notification.sound;
        let app_name = self.app_name.clone();

        debug!(app_name = %app_name, "showing native notification");

        // notify-rust operations can block, so run in spawn_blocking
        tokio::task::spawn_blocking(move || {
            let mut native = notify_rust::Notification::new();
            native.appname(&app_name).summary(&title).body(&message);
            if sound {
                native.sound_name("default");
            }
            native
                .show()
                .map_err(|e| NotificationError::Native(e.to_string()))?;

            Ok(())
        })
        .await
        .map_err(|e| NotificationError::Native(format!("Task join error: {}", e)))?
    }
}

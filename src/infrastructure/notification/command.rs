//! Command-based notification adapter
//!
//! Spawns the platform notification tool (osascript, notify-send or
//! powershell) and waits for it to exit.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::{debug, warn};

use crate::application::ports::Notifier;
use crate::domain::config::NotifierConfig;
use crate::domain::error::NotificationError;
use crate::domain::notification::Notification;
use crate::domain::platform::Platform;

use super::script::{build_command, NotificationCommand};

/// Notifier that shells out to the platform's notification tool
pub struct CommandNotifier {
    platform: Platform,
    config: NotifierConfig,
}

impl CommandNotifier {
    /// Create a notifier for the current platform
    pub fn new(config: NotifierConfig) -> Self {
        Self::for_platform(Platform::current(), config)
    }

    /// Create a notifier that targets a specific platform
    pub fn for_platform(platform: Platform, config: NotifierConfig) -> Self {
        Self { platform, config }
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }
}

impl Default for CommandNotifier {
    fn default() -> Self {
        Self::new(NotifierConfig::defaults())
    }
}

#[async_trait]
impl Notifier for CommandNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        let command = build_command(&self.platform, notification, &self.config)?;
        run(&command).await
    }
}

/// Run a notification command to completion, discarding its output
async fn run(command: &NotificationCommand) -> Result<(), NotificationError> {
    debug!(program = command.program, "spawning notification command");

    let status = Command::new(command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map_err(|e| {
            warn!(program = command.program, error = %e, "failed to launch notification command");
            NotificationError::Spawn(e)
        })?;

    if !status.success() {
        warn!(program = command.program, %status, "notification command failed");
        return Err(NotificationError::Exited(status));
    }

    Ok(())
}

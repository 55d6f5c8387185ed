//! Notification port interface

use async_trait::async_trait;

use crate::domain::error::NotificationError;
use crate::domain::notification::Notification;

/// Port for desktop notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Show a desktop notification.
    ///
    /// Resolves once the notification has been handed to the OS (for
    /// command-based notifiers: once the spawned tool has exited).
    ///
    /// # Arguments
    /// * `notification` - Title, message and sound flag
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// Blanket implementation for boxed notifier types
#[async_trait]
impl Notifier for Box<dyn Notifier> {
    async fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        self.as_ref().send(notification).await
    }
}

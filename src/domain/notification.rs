//! Notification value object

/// A single desktop notification request.
///
/// Built by the caller and handed to a notifier by reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub sound: bool,
}

impl Notification {
    /// Create a silent notification
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            sound: false,
        }
    }

    /// Request the default notification sound
    pub fn with_sound(mut self, sound: bool) -> Self {
        self.sound = sound;
        self
    }
}

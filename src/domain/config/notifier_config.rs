//! Notifier configuration value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

/// Default application id used for Windows toasts and the native backend
pub const DEFAULT_APP_NAME: &str = "WebShot";

/// Default expiry passed to `notify-send -t`
pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

/// How notifications are delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotifierBackend {
    /// Spawn the platform's notification tool (osascript, notify-send, powershell)
    #[default]
    Command,
    /// Show the notification in-process via notify-rust
    Native,
}

impl fmt::Display for NotifierBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotifierBackend::Command => write!(f, "command"),
            NotifierBackend::Native => write!(f, "native"),
        }
    }
}

impl FromStr for NotifierBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "command" => Ok(NotifierBackend::Command),
            "native" => Ok(NotifierBackend::Native),
            _ => Err(ConfigError::Invalid {
                key: "backend".to_string(),
                message: format!("unknown backend '{}'. Valid options: command, native", s),
            }),
        }
    }
}

/// Notifier configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotifierConfig {
    pub backend: Option<String>,
    pub app_name: Option<String>,
    pub timeout_ms: Option<u32>,
}

impl NotifierConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            backend: Some(NotifierBackend::default().to_string()),
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            timeout_ms: Some(DEFAULT_TIMEOUT_MS),
        }
    }

    /// Parse a `[notifications]`-style TOML table.
    ///
    /// Hosts embed this in their own config file and hand us the text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: NotifierConfig =
            toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.backend()?;
        Ok(config)
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            backend: other.backend.or(self.backend),
            app_name: other.app_name.or(self.app_name),
            timeout_ms: other.timeout_ms.or(self.timeout_ms),
        }
    }

    /// Parsed backend; `Command` when unset
    pub fn backend(&self) -> Result<NotifierBackend, ConfigError> {
        match self.backend.as_deref() {
            Some(s) => s.parse(),
            None => Ok(NotifierBackend::default()),
        }
    }

    /// Get app name, or "WebShot" if not set
    pub fn app_name_or_default(&self) -> &str {
        self.app_name.as_deref().unwrap_or(DEFAULT_APP_NAME)
    }

    /// Get notify-send timeout, or 5000ms if not set
    pub fn timeout_ms_or_default(&self) -> u32 {
        self.timeout_ms.unwrap_or(DEFAULT_TIMEOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = NotifierConfig::defaults();
        assert_eq!(config.backend, Some("command".to_string()));
        assert_eq!(config.app_name, Some("WebShot".to_string()));
        assert_eq!(config.timeout_ms, Some(5000));
    }

    #[test]
    fn unset_fields_fall_back_to_defaults() {
        let config = NotifierConfig::default();
        assert_eq!(config.backend().unwrap(), NotifierBackend::Command);
        assert_eq!(config.app_name_or_default(), "WebShot");
        assert_eq!(config.timeout_ms_or_default(), 5000);
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = NotifierConfig::defaults();
        let other = NotifierConfig {
            app_name: Some("Capture".to_string()),
            timeout_ms: None,
            ..Default::default()
        };

        let merged = base.merge(other);

        assert_eq!(merged.app_name_or_default(), "Capture");
        assert_eq!(merged.timeout_ms_or_default(), 5000);
        assert_eq!(merged.backend, Some("command".to_string()));
    }

    #[test]
    fn parse_toml() {
        let content = r#"
backend = "native"
app_name = "Capture"
timeout_ms = 2500
"#;
        let config = NotifierConfig::from_toml_str(content).unwrap();
        assert_eq!(config.backend().unwrap(), NotifierBackend::Native);
        assert_eq!(config.app_name_or_default(), "Capture");
        assert_eq!(config.timeout_ms_or_default(), 2500);
    }

    #[test]
    fn parse_toml_partial() {
        let config = NotifierConfig::from_toml_str("timeout_ms = 100").unwrap();
        assert!(config.backend.is_none());
        assert_eq!(config.timeout_ms, Some(100));
    }

    #[test]
    fn parse_toml_rejects_unknown_backend() {
        let err = NotifierConfig::from_toml_str(r#"backend = "dbus""#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { ref key, .. } if key == "backend"));
    }

    #[test]
    fn parse_toml_rejects_malformed() {
        let err = NotifierConfig::from_toml_str("timeout_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn backend_from_str() {
        assert_eq!(
            "COMMAND".parse::<NotifierBackend>().unwrap(),
            NotifierBackend::Command
        );
        assert_eq!(
            "native".parse::<NotifierBackend>().unwrap(),
            NotifierBackend::Native
        );
        assert!("growl".parse::<NotifierBackend>().is_err());
    }

    #[test]
    fn backend_display() {
        assert_eq!(NotifierBackend::Command.to_string(), "command");
        assert_eq!(NotifierBackend::Native.to_string(), "native");
    }
}

//! Host platform value object

use std::env;
use std::fmt;

/// Operating systems with a known notification mechanism.
///
/// Anything else is carried as `Unsupported` with the raw OS name so it can
/// be reported back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    /// macOS: `osascript`
    MacOs,
    /// Linux: `notify-send`
    Linux,
    /// Windows: `powershell` toast
    Windows,
    /// Any other OS
    Unsupported(String),
}

impl Platform {
    /// Detect the platform this binary was built for
    pub fn current() -> Self {
        Self::from_os_name(env::consts::OS)
    }

    /// Map an OS name (as reported by `std::env::consts::OS`) to a platform
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "macos" | "darwin" => Self::MacOs,
            "linux" => Self::Linux,
            "windows" => Self::Windows,
            other => Self::Unsupported(other.to_string()),
        }
    }

    /// Whether notifications can be dispatched on this platform
    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => write!(f, "macos"),
            Platform::Linux => write!(f, "linux"),
            Platform::Windows => write!(f, "windows"),
            Platform::Unsupported(name) => write!(f, "{}", name),
        }
    }
}

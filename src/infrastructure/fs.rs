//! Filesystem and environment helpers

use std::env;
use std::fs::DirBuilder;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::paths::{expand_tilde, resolve_home_dir};
use crate::domain::platform::Platform;

/// Permission bits for directories we create (rwxr-xr-x)
#[cfg(unix)]
pub const DIRECTORY_MODE: u32 = 0o755;

/// Create `path` and any missing parents.
///
/// Succeeds when the directory already exists, including when another
/// process creates it concurrently. On Unix new directories get mode 0755
/// (subject to the process umask).
pub fn ensure_directory(path: impl AsRef<Path>) -> io::Result<()> {
    let path = path.as_ref();
    let mut builder = DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIRECTORY_MODE);
    }

    debug!(path = %path.display(), "ensuring directory");
    builder.create(path)
}

/// The current user's home directory, read from the environment.
///
/// Returns an empty string when the relevant variables are unset.
pub fn get_home_dir() -> String {
    resolve_home_dir(&Platform::current(), |name| {
        env::var_os(name).map(|v| v.to_string_lossy().into_owned())
    })
}

/// Expand a leading `~` to [`get_home_dir`]; other paths are returned unchanged
pub fn expand_path(path: &str) -> PathBuf {
    if !path.starts_with('~') {
        return PathBuf::from(path);
    }
    expand_tilde(path, &get_home_dir())
}

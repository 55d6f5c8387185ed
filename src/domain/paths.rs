//! Pure path and string helpers
//!
//! Nothing here touches the filesystem or the process environment; the
//! OS-facing wrappers live in `infrastructure::fs`.

use std::path::{is_separator, Component, Path, PathBuf};

use super::platform::Platform;

const SIZE_UNIT: i64 = 1024;
const SIZE_PREFIXES: [char; 6] = ['K', 'M', 'G', 'T', 'P', 'E'];

/// Characters that are rejected in filenames on at least one major platform
pub const INVALID_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Check whether a string looks like an http(s) URL.
///
/// Only the scheme prefix is checked.
pub fn is_valid_url(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://")
}

/// Format a byte count using base-1024 units, e.g. `1536` -> `"1.5 KB"`.
///
/// Values below 1024 (including negative ones) are printed as whole bytes.
pub fn format_file_size(bytes: i64) -> String {
    if bytes < SIZE_UNIT {
        return format!("{} B", bytes);
    }

    let mut divisor = SIZE_UNIT;
    let mut exponent = 0;
    let mut scaled = bytes / SIZE_UNIT;
    while scaled >= SIZE_UNIT {
        divisor *= SIZE_UNIT;
        exponent += 1;
        scaled /= SIZE_UNIT;
    }

    format!(
        "{:.1} {}B",
        bytes as f64 / divisor as f64,
        SIZE_PREFIXES[exponent]
    )
}

/// Replace every character in [`INVALID_FILENAME_CHARS`] with `_`
pub fn sanitize_filename(filename: &str) -> String {
    filename
        .chars()
        .map(|c| {
            if INVALID_FILENAME_CHARS.contains(&c) {
                '_'
            } else {
                c
            }
        })
        .collect()
}

/// Resolve the home directory for `platform` from an environment lookup.
///
/// Windows: `HOMEDRIVE` + `HOMEPATH`, or `USERPROFILE` when both are empty.
/// Everywhere else: `HOME`. Unset variables read as empty strings.
pub fn resolve_home_dir<F>(platform: &Platform, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let var = |name: &str| lookup(name).unwrap_or_default();

    if platform.is_windows() {
        let home = format!("{}{}", var("HOMEDRIVE"), var("HOMEPATH"));
        if home.is_empty() {
            return var("USERPROFILE");
        }
        return home;
    }

    var("HOME")
}

/// Expand a leading `~` in `path` to `home`.
///
/// The remainder is joined onto `home` with its leading separators dropped,
/// and the result is cleaned lexically (see [`clean_path`]). Paths without a
/// leading `~` are returned as-is.
pub fn expand_tilde(path: &str, home: &str) -> PathBuf {
    let Some(rest) = path.strip_prefix('~') else {
        return PathBuf::from(path);
    };

    if home.is_empty() {
        if rest.is_empty() {
            return PathBuf::new();
        }
        return clean_path(Path::new(rest));
    }

    clean_path(&Path::new(home).join(rest.trim_start_matches(is_separator)))
}

/// Lexically normalise a path.
///
/// Drops `.` segments and repeated separators, and resolves `..` against
/// the preceding segment. `..` directly under the root is dropped; leading
/// `..` on a relative path is kept. An empty result becomes `.`.
pub fn clean_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last().copied() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

//! Path normalization utilities
//!
//! Report paths always use '/' as separator. Arguments may start with `~`,
//! which expands to the user's home directory.

use std::path::{Path, PathBuf};

/// Normalize a path to use '/' as separator (for cross-platform consistency)
///
/// Only Windows separators are rewritten; elsewhere `\\` is an ordinary
/// file name character and is kept.
pub fn normalize_path(path: &Path) -> String {
    let shown = path.to_string_lossy();
    if cfg!(windows) {
        shown.replace('\\', "/")
    } else {
        shown.into_owned()
    }
}

/// Expand a leading `~` to `$HOME`
pub fn expand_home(path: &Path) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_home_with(path, home.as_deref())
}

fn expand_home_with(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };

    match path.strip_prefix("~") {
        Ok(rest) if rest.as_os_str().is_empty() => home.to_path_buf(),
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Resolve `path` against `base` unless it is already absolute
///
/// A base of `.` (or empty) leaves relative paths untouched so the report
/// shows `A/a.txt` rather than `./A/a.txt`.
pub fn resolve(base: &Path, path: &Path) -> PathBuf {
    let path = expand_home(path);
    if path.is_absolute() || base.as_os_str().is_empty() || base == Path::new(".") {
        path
    } else {
        base.join(path)
    }
}

/// Last component of a path, falling back to the whole path (e.g. for `.` or `/`)
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| normalize_path(path))
}

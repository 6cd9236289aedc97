//! Filesystem locations used by the crate.
//!
//! The only file Artistly writes is the trace export, so the only location resolved
//! here is the data directory it lives in.

use std::path::{Path, PathBuf};

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "ARTISTLY_DATA_DIR";

/// Returns the data directory for Artistly files.
///
/// Resolution order:
/// 1. `$ARTISTLY_DATA_DIR`
/// 2. `$XDG_DATA_HOME/artistly`
/// 3. `$HOME/.local/share/artistly`
/// 4. `<system temp dir>/artistly`
#[must_use]
pub fn get_data_dir() -> PathBuf {
    resolve_data_dir(|key| std::env::var_os(key).filter(|v| !v.is_empty()).map(PathBuf::from))
}

fn resolve_data_dir(var: impl Fn(&str) -> Option<PathBuf>) -> PathBuf {
    if let Some(dir) = var(DATA_DIR_ENV) {
        return dir;
    }
    if let Some(xdg) = var("XDG_DATA_HOME") {
        return xdg.join("artistly");
    }
    if let Some(home) = var("HOME") {
        return home.join(".local").join("share").join("artistly");
    }
    std::env::temp_dir().join("artistly")
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a tilde, and tilde paths when `$HOME` is unset, are returned as
/// given.
///
/// # Examples
///
/// ```
/// use artistly::infrastructure::expand_tilde;
/// use std::path::Path;
///
/// assert_eq!(expand_tilde(Path::new("/srv/artistly")), Path::new("/srv/artistly"));
/// ```
#[must_use]
pub fn expand_tilde(path: &Path) -> PathBuf {
    let home = std::env::var_os("HOME").map(PathBuf::from);
    expand_with_home(path, home.as_deref())
}

fn expand_with_home(path: &Path, home: Option<&Path>) -> PathBuf {
    let Some(home) = home else {
        return path.to_path_buf();
    };
    if path == Path::new("~") {
        return home.to_path_buf();
    }
    path.strip_prefix("~")
        .map_or_else(|_| path.to_path_buf(), |rest| home.join(rest))
}

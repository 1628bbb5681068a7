//! Path utilities: expand `~` in user-supplied paths, check absoluteness.

use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// `true` when `path` is absolute once `~` is expanded.
pub fn is_absolute(path: &str) -> bool {
    expand_tilde(path).is_absolute()
}

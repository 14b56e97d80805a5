//! Home-directory expansion for registry paths.
//!
//! Registry entries store paths with a literal `~` prefix so the registry
//! stays a fixed data table. Expansion happens at the point of use.

use std::path::PathBuf;

/// Expand a leading `~` or `~/` to the user's home directory.
///
/// Paths without the placeholder are returned unchanged. If the home
/// directory cannot be determined, the placeholder is left as-is; the
/// resulting path simply won't exist, which callers already treat as the
/// benign "not found" state.
pub fn expand_home(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    } else if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

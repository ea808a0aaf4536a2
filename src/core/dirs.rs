use crate::core::error::SwitcherError;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "git-file-switcher";

pub fn get_config_directory() -> Result<PathBuf, SwitcherError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join(APP_DIR))
}

pub fn get_cache_directory() -> Result<PathBuf, SwitcherError> {
    // XDG_CACHE_HOME wins everywhere so tests can redirect the cache
    let base = std::env::var("XDG_CACHE_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs::cache_dir().unwrap_or_else(|| PathBuf::from("/tmp")));

    Ok(base.join(APP_DIR))
}

/// md5 of the canonical form of `path`, so symlinked paths to the same
/// repository hash alike. Falls back to the raw path when it cannot be resolved.
pub fn canonical_path_hash(path: &Path) -> String {
    let canonical = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    format!("{:x}", md5::compute(canonical.to_string_lossy().as_bytes()))
}

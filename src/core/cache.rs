//! On-disk store for the last good snapshot of each repository.
//!
//! Every online run writes the snapshot it read; `--offline` runs read it back instead
//! of asking git. Files live at `<cache dir>/<md5 of canonical repo path>/snapshot.json`.

use crate::core::{
    dirs::{canonical_path_hash, get_cache_directory},
    error::{Result, SwitcherError},
    git_status::GitStatusSnapshot,
    state::CachedSnapshot,
};
use std::fs;
use std::path::{Path, PathBuf};

const SNAPSHOT_FILE: &str = "snapshot.json";

pub fn get_cache_dir(repo_path: &Path) -> Result<PathBuf> {
    let cache_home = get_cache_directory()?;
    let repo_hash = canonical_path_hash(repo_path);

    log::debug!("get_cache_dir: repo_path = {repo_path:?}, repo_hash = {repo_hash}");

    Ok(cache_home.join(repo_hash))
}

pub fn save_snapshot(snapshot: &GitStatusSnapshot, repo_path: &Path) -> Result<()> {
    let cache_dir = get_cache_dir(repo_path)?;

    if let Err(e) = fs::create_dir_all(&cache_dir) {
        log::error!(
            "Failed to create cache directory '{}': {}",
            cache_dir.display(),
            e
        );
        return Err(SwitcherError::cache_directory_creation_failed(
            &cache_dir, e,
        ));
    }

    let cache_file = cache_dir.join(SNAPSHOT_FILE);
    let cached = CachedSnapshot::new(snapshot.clone(), repo_path.to_path_buf());

    let json = serde_json::to_string_pretty(&cached).map_err(|e| {
        log::error!("Failed to serialize snapshot: {e}");
        SwitcherError::cache_serialization_failed(e)
    })?;

    if let Err(e) = fs::write(&cache_file, json) {
        log::error!(
            "Failed to write cache file '{}': {}",
            cache_file.display(),
            e
        );
        return Err(SwitcherError::cache_write_failed(&cache_file, e));
    }

    log::debug!(
        "Cached snapshot with {} entries at {}",
        snapshot.file_stage_statuses.len(),
        cache_file.display()
    );
    Ok(())
}

pub fn load_snapshot(repo_path: &Path) -> Result<GitStatusSnapshot> {
    let cache_file = get_cache_dir(repo_path)?.join(SNAPSHOT_FILE);

    if !cache_file.exists() {
        log::debug!("Cache file does not exist: {}", cache_file.display());
        return Err(SwitcherError::cache_file_not_found(&cache_file));
    }

    let content = fs::read_to_string(&cache_file).map_err(|e| {
        log::error!(
            "Failed to read cache file '{}': {}",
            cache_file.display(),
            e
        );
        SwitcherError::cache_read_failed(&cache_file, e)
    })?;

    let cached: CachedSnapshot = serde_json::from_str(&content).map_err(|e| {
        log::error!(
            "Failed to parse cache file '{}': {}",
            cache_file.display(),
            e
        );
        SwitcherError::cache_parse_failed(&cache_file, e)
    })?;

    Ok(cached.snapshot)
}

//! Last-known-good snapshot caching.
//!
//! Resolution functions never cache; callers that refresh snapshots in the background
//! keep the previous value here so the status they show does not flicker to `Unknown`
//! while a newer read is in flight.
//!
//! # Public API
//! - [`SnapshotSlot`]: One-slot cache for a single workspace
//! - [`SnapshotCache`]: One slot per workspace id
//! - [`CachedSnapshot`]: On-disk form written by the snapshot store

use crate::core::git_status::GitStatusSnapshot;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::SystemTime;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SnapshotSlot {
    last_good: Option<GitStatusSnapshot>,
    fresh: bool,
}

impl SnapshotSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A refresh started; keep serving the previous value.
    pub fn begin_refresh(&mut self) {
        self.fresh = false;
    }

    /// Overwrite with the newest completed snapshot.
    pub fn store(&mut self, snapshot: GitStatusSnapshot) {
        self.last_good = Some(snapshot);
        self.fresh = true;
    }

    /// Seed with a value from an earlier run; it counts as stale.
    pub fn restore(&mut self, snapshot: GitStatusSnapshot) {
        self.last_good = Some(snapshot);
        self.fresh = false;
    }

    pub fn latest(&self) -> Option<&GitStatusSnapshot> {
        self.last_good.as_ref()
    }

    pub fn is_fresh(&self) -> bool {
        self.fresh
    }
}

#[derive(Debug, Default)]
pub struct SnapshotCache {
    slots: HashMap<String, SnapshotSlot>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_refresh(&mut self, workspace_id: &str) {
        self.slots
            .entry(workspace_id.to_string())
            .or_default()
            .begin_refresh();
    }

    pub fn store(&mut self, workspace_id: &str, snapshot: GitStatusSnapshot) {
        self.slots
            .entry(workspace_id.to_string())
            .or_default()
            .store(snapshot);
    }

    pub fn latest(&self, workspace_id: &str) -> Option<&GitStatusSnapshot> {
        self.slots.get(workspace_id).and_then(SnapshotSlot::latest)
    }

    pub fn slot(&self, workspace_id: &str) -> Option<&SnapshotSlot> {
        self.slots.get(workspace_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSnapshot {
    pub snapshot: GitStatusSnapshot,
    pub last_updated: SystemTime,
    pub repo_path: PathBuf,
}

impl CachedSnapshot {
    pub fn new(snapshot: GitStatusSnapshot, repo_path: PathBuf) -> Self {
        Self {
            snapshot,
            last_updated: SystemTime::now(),
            repo_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::git_status::{FileStageStatus, StageStatus};

    fn dirty() -> GitStatusSnapshot {
        GitStatusSnapshot {
            is_synced: false,
            has_local_changes: true,
            file_stage_statuses: vec![FileStageStatus::new("a.dmn", StageStatus::Modified)],
        }
    }

    #[test]
    fn test_empty_slot() {
        let slot = SnapshotSlot::new();
        assert!(slot.latest().is_none());
        assert!(!slot.is_fresh());
    }

    #[test]
    fn test_refresh_keeps_previous_value() {
        let mut slot = SnapshotSlot::new();
        slot.store(dirty());
        assert!(slot.is_fresh());

        slot.begin_refresh();
        assert!(!slot.is_fresh());
        assert_eq!(slot.latest(), Some(&dirty()));
    }

    #[test]
    fn test_store_overwrites_unconditionally() {
        let mut slot = SnapshotSlot::new();
        slot.store(dirty());
        slot.begin_refresh();
        slot.store(GitStatusSnapshot::default());

        assert!(slot.is_fresh());
        assert_eq!(slot.latest(), Some(&GitStatusSnapshot::default()));
    }

    #[test]
    fn test_restored_value_is_stale_until_stored() {
        let mut slot = SnapshotSlot::new();
        slot.restore(dirty());
        assert!(!slot.is_fresh());
        assert_eq!(slot.latest(), Some(&dirty()));

        slot.store(GitStatusSnapshot::default());
        assert!(slot.is_fresh());
    }

    #[test]
    fn test_cache_isolates_workspaces() {
        let mut cache = SnapshotCache::new();
        cache.store("ws-1", dirty());
        cache.begin_refresh("ws-2");

        assert_eq!(cache.latest("ws-1"), Some(&dirty()));
        assert!(cache.latest("ws-2").is_none());
        assert!(cache.slot("ws-2").is_some_and(|slot| !slot.is_fresh()));
        assert!(cache.slot("ws-3").is_none());
    }

    #[test]
    fn test_cached_snapshot_serialization() -> serde_json::Result<()> {
        let cached = CachedSnapshot::new(dirty(), PathBuf::from("/repo/.git"));
        let json = serde_json::to_string_pretty(&cached)?;
        let back: CachedSnapshot = serde_json::from_str(&json)?;
        assert_eq!(back, cached);
        Ok(())
    }
}

//! Git status snapshot types.
//!
//! A [`GitStatusSnapshot`] is a point-in-time read of a workspace's git state. It is
//! produced by [`crate::core::git::GitRepo::snapshot`] (or loaded from the snapshot
//! cache) and replaced wholesale on every refresh; nothing in this crate mutates one
//! after it has been built.
//!
//! # Public API
//! - [`StageStatus`]: Per-file classification relative to the last commit
//! - [`FileStageStatus`]: A path paired with its [`StageStatus`]
//! - [`GitStatusSnapshot`]: The whole-workspace snapshot

use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-file change classification relative to the last commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    /// New file, staged or untracked (A)
    Added,
    /// Changed content, rename or type change (M)
    Modified,
    /// Present in history, absent from the working tree (D)
    Deleted,
}

impl StageStatus {
    /// Convert git2 status flags. A file missing from the working tree is always
    /// `Deleted`, even when it is staged as new.
    ///
    /// Returns `None` for flags that carry no change (current, ignored).
    pub fn from_git2(flags: git2::Status) -> Option<StageStatus> {
        if flags.contains(git2::Status::CONFLICTED) {
            return Some(StageStatus::Modified);
        }

        if flags.contains(git2::Status::WT_DELETED) {
            return Some(StageStatus::Deleted);
        }
        if flags.intersects(git2::Status::INDEX_NEW | git2::Status::WT_NEW) {
            return Some(StageStatus::Added);
        }
        if flags.contains(git2::Status::INDEX_DELETED) {
            return Some(StageStatus::Deleted);
        }
        if flags.intersects(
            git2::Status::INDEX_MODIFIED
                | git2::Status::WT_MODIFIED
                | git2::Status::INDEX_RENAMED
                | git2::Status::WT_RENAMED
                | git2::Status::INDEX_TYPECHANGE
                | git2::Status::WT_TYPECHANGE,
        ) {
            return Some(StageStatus::Modified);
        }

        None
    }

    /// One-letter marker shown next to a file
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Added => "A",
            StageStatus::Modified => "M",
            StageStatus::Deleted => "D",
        }
    }

    /// Human-readable description for the marker
    pub fn description(&self) -> &'static str {
        match self {
            StageStatus::Added => "New file.",
            StageStatus::Modified => "Modified.",
            StageStatus::Deleted => "Deleted file.",
        }
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileStageStatus {
    pub path: String,
    pub status: StageStatus,
}

impl FileStageStatus {
    pub fn new(path: impl Into<String>, status: StageStatus) -> Self {
        Self {
            path: path.into(),
            status,
        }
    }
}

/// Point-in-time git state of one workspace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitStatusSnapshot {
    /// Local branch matches its remote
    pub is_synced: bool,
    /// Working tree or index differs from HEAD
    pub has_local_changes: bool,
    pub file_stage_statuses: Vec<FileStageStatus>,
}

impl GitStatusSnapshot {
    /// Find the stage entry for a path, if any
    pub fn stage_status_for(&self, relative_path: &str) -> Option<StageStatus> {
        self.file_stage_statuses
            .iter()
            .find(|entry| entry.path == relative_path)
            .map(|entry| entry.status)
    }
}

//! Sync status resolution from a git status snapshot.
//!
//! Every function here is pure: it reads the snapshot it is given and nothing else.
//! A missing snapshot means the first read is still in flight, which resolves to
//! `Unknown` rather than an error. Keeping the previous snapshot around while a new
//! one loads is up to the caller, see [`crate::core::state::SnapshotSlot`].

use crate::core::{
    git_status::{GitStatusSnapshot, StageStatus},
    workspace::{WorkspaceDescriptor, WorkspaceFile, WorkspaceKind},
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Local-changes classification of a file, or of a whole workspace when no file is given
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FileSyncStatus {
    Pending,
    Synced,
    Unknown,
}

/// Remote sync classification of a workspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkspaceSyncStatus {
    Synced,
    Pending,
    Unknown,
}

impl fmt::Display for FileSyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FileSyncStatus::Pending => "pending",
            FileSyncStatus::Synced => "synced",
            FileSyncStatus::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

impl fmt::Display for WorkspaceSyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            WorkspaceSyncStatus::Synced => "synced",
            WorkspaceSyncStatus::Pending => "pending",
            WorkspaceSyncStatus::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Resolve local-changes status for one file, or for the workspace when `file` is `None`.
pub fn resolve_file_status(
    snapshot: Option<&GitStatusSnapshot>,
    file: Option<&WorkspaceFile>,
) -> FileSyncStatus {
    let Some(snapshot) = snapshot else {
        return FileSyncStatus::Unknown;
    };

    let pending = match file {
        Some(file) => snapshot
            .file_stage_statuses
            .iter()
            .any(|entry| entry.path == file.relative_path),
        None => snapshot.has_local_changes,
    };

    if pending {
        FileSyncStatus::Pending
    } else {
        FileSyncStatus::Synced
    }
}

/// Resolve whether the workspace's branch matches its remote.
pub fn resolve_workspace_remote_sync_status(
    snapshot: Option<&GitStatusSnapshot>,
) -> WorkspaceSyncStatus {
    match snapshot {
        None => WorkspaceSyncStatus::Unknown,
        Some(snapshot) if snapshot.is_synced => WorkspaceSyncStatus::Synced,
        Some(_) => WorkspaceSyncStatus::Pending,
    }
}

/// Placeholders for files deleted in the working tree but not yet committed.
///
/// Order follows the snapshot's stage entries.
pub fn list_deleted_files(
    descriptor: &WorkspaceDescriptor,
    snapshot: Option<&GitStatusSnapshot>,
) -> Vec<WorkspaceFile> {
    let Some(snapshot) = snapshot else {
        return Vec::new();
    };

    snapshot
        .file_stage_statuses
        .iter()
        .filter(|entry| entry.status == StageStatus::Deleted)
        .map(|entry| WorkspaceFile::deleted(&descriptor.workspace_id, &entry.path))
        .collect()
}

/// Stage marker of a single file, `None` when unchanged or not loaded.
pub fn stage_status_of(
    snapshot: Option<&GitStatusSnapshot>,
    file: &WorkspaceFile,
) -> Option<StageStatus> {
    snapshot?.stage_status_for(&file.relative_path)
}

/// Workspace-level marker: any local change shows as modified.
pub fn workspace_stage_marker(snapshot: Option<&GitStatusSnapshot>) -> Option<StageStatus> {
    match snapshot {
        Some(snapshot) if snapshot.has_local_changes => Some(StageStatus::Modified),
        _ => None,
    }
}

/// The remote sync indicator only applies to whole workspaces.
pub fn shows_remote_sync_indicator(
    descriptor: &WorkspaceDescriptor,
    file: Option<&WorkspaceFile>,
) -> bool {
    if file.is_some() {
        return false;
    }
    match descriptor.origin.kind {
        WorkspaceKind::GitRemote | WorkspaceKind::Local => true,
    }
}

//! Git File Switcher - git sync status and file listings for workspace file switchers.
//!
//! This library resolves per-file and per-workspace sync status from a git status
//! snapshot and derives the sorted, filtered and categorized file listing a file
//! switcher shows. The resolution and listing code is pure; reading repositories,
//! caching snapshots and loading configuration live alongside it.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Sync status resolution and deleted-file placeholders
//! - File listing derivation (sort, partition, search, changed-only)
//! - Snapshot and workspace value types
//! - Git repository reading and snapshot caching
//! - Error handling and result types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    check_new_file_name,
    derive_listing,
    list_deleted_files,
    resolve_file_status,
    resolve_workspace_remote_sync_status,

    ExtensionRegistry,
    FileListing,
    FileStageStatus,
    // Sync status
    FileSyncStatus,
    FileTypeRegistry,
    // Git operations
    GitRepo,
    GitStatusSnapshot,
    ListingQuery,
    Result,
    SnapshotCache,
    SnapshotSlot,
    StageStatus,
    // Error handling
    SwitcherError,
    WorkspaceDescriptor,
    // Workspace types
    WorkspaceFile,
    WorkspaceSyncStatus,
};

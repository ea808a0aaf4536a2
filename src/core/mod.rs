//! Core functionality for git-file-switcher.
//!
//! This module provides the snapshot and workspace types, the pure sync status and
//! listing logic, and the git, cache and configuration plumbing around them.

pub mod cache;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod error;
pub mod file_name;
pub mod git;
pub mod git_status;
pub mod listing;
pub mod output;
pub mod state;
pub mod sync_status;
pub mod workspace;

// === Error handling ===
pub use error::{Result, SwitcherError};

// === Git operations ===
// Repository reader producing descriptors, file lists and snapshots
pub use git::GitRepo;

// === Snapshot types ===
pub use git_status::{FileStageStatus, GitStatusSnapshot, StageStatus};

// === Workspace types ===
pub use workspace::{
    FileContent, WorkspaceDescriptor, WorkspaceFile, WorkspaceKind, WorkspaceOrigin,
};

// === Sync status resolution ===
pub use sync_status::{
    list_deleted_files, resolve_file_status, resolve_workspace_remote_sync_status,
    shows_remote_sync_indicator, stage_status_of, workspace_stage_marker, FileSyncStatus,
    WorkspaceSyncStatus,
};

// === File listing ===
pub use listing::{
    derive_listing, display_mode, display_name, display_tooltip, is_current_file,
    recent_workspaces, truncate_for_carousel, ExtensionRegistry, FileDisplayMode, FileListing,
    FileTypeRegistry, ListingQuery,
};

// === File name validation ===
pub use file_name::{check_new_file_name, renamed_relative_path, FileNameCheck, FileNameIssue};

// === State management ===
// Caller-owned last-known-good snapshot slots
pub use state::{CachedSnapshot, SnapshotCache, SnapshotSlot};

// === Configuration ===
pub use config::SwitcherConfig;

// === Output ===
pub use output::{print_error, print_hint, print_info, print_section_header, print_success};

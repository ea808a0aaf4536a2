//! Workspace and workspace file value types.
//!
//! # Public API
//! - [`WorkspaceFile`]: A file identified by workspace id and relative path
//! - [`FileContent`]: Loaded bytes, or nothing for a deleted-file placeholder
//! - [`WorkspaceDescriptor`]: Identity and origin of a workspace
//! - [`WorkspaceKind`]: Whether the workspace is backed by a git remote
//!
//! All name accessors on [`WorkspaceFile`] are derived from `relative_path` on demand,
//! so a file can never disagree with its own path.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Content attached to a [`WorkspaceFile`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileContent {
    Available(Vec<u8>),
    /// The file only exists in history; its bytes cannot be recovered.
    #[default]
    Unavailable,
}

#[derive(Debug, Clone)]
pub struct WorkspaceFile {
    pub workspace_id: String,
    pub relative_path: String,
    pub content: FileContent,
}

impl WorkspaceFile {
    pub fn new(workspace_id: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            relative_path: relative_path.into(),
            content: FileContent::Available(Vec::new()),
        }
    }

    /// Placeholder for a file that was deleted in the working tree but not committed.
    pub fn deleted(workspace_id: impl Into<String>, relative_path: impl Into<String>) -> Self {
        Self {
            workspace_id: workspace_id.into(),
            relative_path: relative_path.into(),
            content: FileContent::Unavailable,
        }
    }

    pub fn with_content(mut self, bytes: Vec<u8>) -> Self {
        self.content = FileContent::Available(bytes);
        self
    }

    /// File bytes. Deleted placeholders always yield an empty slice.
    pub fn content(&self) -> &[u8] {
        match &self.content {
            FileContent::Available(bytes) => bytes,
            FileContent::Unavailable => &[],
        }
    }

    pub fn is_deleted_placeholder(&self) -> bool {
        matches!(self.content, FileContent::Unavailable)
    }

    /// Last path segment, e.g. `c.bpmn` for `sub/c.bpmn`
    pub fn name(&self) -> &str {
        match self.relative_path.rfind('/') {
            Some(idx) => &self.relative_path[idx + 1..],
            None => &self.relative_path,
        }
    }

    /// Directory part of the path without trailing slash, empty at the root
    pub fn relative_dir_path(&self) -> &str {
        match self.relative_path.rfind('/') {
            Some(idx) => &self.relative_path[..idx],
            None => "",
        }
    }

    pub fn extension(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[idx + 1..],
            _ => "",
        }
    }

    pub fn name_without_extension(&self) -> &str {
        let name = self.name();
        match name.rfind('.') {
            Some(idx) if idx > 0 => &name[..idx],
            _ => name,
        }
    }

    /// Directory segments joined with ` > ` for display
    pub fn display_dir_path(&self) -> String {
        self.relative_dir_path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join(" > ")
    }
}

// Files are unique by path within a workspace.
impl PartialEq for WorkspaceFile {
    fn eq(&self, other: &Self) -> bool {
        self.relative_path == other.relative_path
    }
}

impl Eq for WorkspaceFile {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkspaceKind {
    /// Plain local workspace, no remote configured
    Local,
    /// Cloned from or pushed to a git remote
    GitRemote,
}

impl WorkspaceKind {
    pub fn is_git_based(&self) -> bool {
        match self {
            WorkspaceKind::GitRemote => true,
            WorkspaceKind::Local => false,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkspaceKind::GitRemote => "git",
            WorkspaceKind::Local => "local",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkspaceOrigin {
    pub kind: WorkspaceKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceDescriptor {
    pub workspace_id: String,
    pub name: String,
    pub origin: WorkspaceOrigin,
    #[serde(rename = "lastUpdatedDateISO")]
    pub last_updated: DateTime<Utc>,
}

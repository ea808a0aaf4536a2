//! Filtered, sorted and categorized file listings.
//!
//! This module turns a workspace's files plus its latest [`GitStatusSnapshot`] into
//! the two sections a file switcher shows: editable models and everything else.
//!
//! # Public API
//! - [`FileTypeRegistry`]: Decides which paths are editable models
//! - [`ExtensionRegistry`]: Extension-based registry used by the CLI
//! - [`ListingQuery`]: Search string and the changed-only toggle
//! - [`FileListing`]: The derived `models` and `other_files` sections
//! - [`derive_listing`]: Main entry point
//!
//! # Listing Steps
//! 1. **Merge**: Working files followed by deleted placeholders
//! 2. **Sort**: Stable, lexicographic on `relative_path`
//! 3. **Partition**: Models vs. other files, order preserved
//! 4. **Search**: Case-insensitive substring match on the file name
//! 5. **Changed only**: Models whose status is `Pending` (other files are never
//!    narrowed by git status)

use crate::core::{
    git_status::GitStatusSnapshot,
    sync_status::{resolve_file_status, FileSyncStatus},
    workspace::{WorkspaceDescriptor, WorkspaceFile},
};

/// Decides whether a path belongs to a file type with a known editor.
pub trait FileTypeRegistry {
    fn has_mapping_for(&self, relative_path: &str) -> bool;
}

impl<F> FileTypeRegistry for F
where
    F: Fn(&str) -> bool,
{
    fn has_mapping_for(&self, relative_path: &str) -> bool {
        self(relative_path)
    }
}

/// Registry matching a fixed list of file extensions, case-insensitively.
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    extensions: Vec<String>,
}

impl ExtensionRegistry {
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|ext| ext.as_ref().trim_start_matches('.').to_lowercase())
                .collect(),
        }
    }
}

impl FileTypeRegistry for ExtensionRegistry {
    fn has_mapping_for(&self, relative_path: &str) -> bool {
        let name = relative_path.rsplit('/').next().unwrap_or(relative_path);
        match name.rfind('.') {
            Some(idx) if idx > 0 => {
                let ext = name[idx + 1..].to_lowercase();
                self.extensions.iter().any(|known| *known == ext)
            }
            _ => false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    /// Search applied to both sections
    pub search: String,
    /// Keep only models with uncommitted changes
    pub changed_only: bool,
}

/// How a file entry may be interacted with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDisplayMode {
    /// Model that can be opened
    Enabled,
    /// Listed for reference only
    ReadOnly,
    /// Deleted in the working tree, nothing to open
    Deleted,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileListing {
    pub models: Vec<WorkspaceFile>,
    pub other_files: Vec<WorkspaceFile>,
}

impl FileListing {
    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.other_files.is_empty()
    }
}

/// Merge, sort, partition and filter the files of one workspace.
pub fn derive_listing(
    workspace_files: &[WorkspaceFile],
    deleted_files: &[WorkspaceFile],
    snapshot: Option<&GitStatusSnapshot>,
    registry: &dyn FileTypeRegistry,
    query: &ListingQuery,
) -> FileListing {
    let all_files = sort_by_path(
        workspace_files
            .iter()
            .chain(deleted_files.iter())
            .cloned()
            .collect(),
    );

    let (models, other_files): (Vec<_>, Vec<_>) = all_files
        .into_iter()
        .partition(|file| registry.has_mapping_for(&file.relative_path));

    let models: Vec<WorkspaceFile> = filter_by_search(models, &query.search)
        .into_iter()
        .filter(|file| {
            !query.changed_only
                || resolve_file_status(snapshot, Some(file)) == FileSyncStatus::Pending
        })
        .collect();

    let other_files = filter_by_search(other_files, &query.search);

    log::debug!(
        "Derived listing: {} models, {} other files (search={:?}, changed_only={})",
        models.len(),
        other_files.len(),
        query.search,
        query.changed_only
    );

    FileListing {
        models,
        other_files,
    }
}

/// Stable lexicographic sort on `relative_path`.
pub fn sort_by_path(mut files: Vec<WorkspaceFile>) -> Vec<WorkspaceFile> {
    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    files
}

/// Case-insensitive substring match on the file name. An empty search keeps everything.
pub fn filter_by_search(files: Vec<WorkspaceFile>, search: &str) -> Vec<WorkspaceFile> {
    let needle = search.to_lowercase();
    files
        .into_iter()
        .filter(|file| file.name().to_lowercase().contains(&needle))
        .collect()
}

/// Display mode of a file within its section. Other files are always read-only.
pub fn display_mode(file: &WorkspaceFile, is_model: bool) -> FileDisplayMode {
    if !is_model {
        FileDisplayMode::ReadOnly
    } else if file.is_deleted_placeholder() {
        FileDisplayMode::Deleted
    } else {
        FileDisplayMode::Enabled
    }
}

/// Models drop their extension; read-only and deleted entries keep it.
pub fn display_name(file: &WorkspaceFile, mode: FileDisplayMode) -> &str {
    match mode {
        FileDisplayMode::Enabled => file.name_without_extension(),
        FileDisplayMode::ReadOnly | FileDisplayMode::Deleted => file.name(),
    }
}

pub fn display_tooltip(file: &WorkspaceFile, mode: FileDisplayMode) -> String {
    match mode {
        FileDisplayMode::Deleted => format!("{} (Deleted in workspace.)", display_name(file, mode)),
        FileDisplayMode::Enabled | FileDisplayMode::ReadOnly => {
            display_name(file, mode).to_string()
        }
    }
}

pub fn is_current_file(
    descriptor: &WorkspaceDescriptor,
    current: Option<&WorkspaceFile>,
    file: &WorkspaceFile,
) -> bool {
    descriptor.workspace_id == file.workspace_id
        && current.is_some_and(|current| current.relative_path == file.relative_path)
}

/// First `max` files, plus how many were left out.
pub fn truncate_for_carousel(files: &[WorkspaceFile], max: usize) -> (&[WorkspaceFile], usize) {
    if files.len() <= max {
        (files, 0)
    } else {
        (&files[..max], files.len() - max)
    }
}

/// Other workspaces, most recently updated first.
pub fn recent_workspaces<'a>(
    descriptors: &'a [WorkspaceDescriptor],
    current_workspace_id: &str,
) -> Vec<&'a WorkspaceDescriptor> {
    let mut others: Vec<_> = descriptors
        .iter()
        .filter(|descriptor| descriptor.workspace_id != current_workspace_id)
        .collect();
    others.sort_by(|a, b| b.last_updated.cmp(&a.last_updated));
    others
}

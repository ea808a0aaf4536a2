//! Git repository access and snapshot collection.
//!
//! This module provides [`GitRepo`], a thin wrapper over `git2` that reads everything the
//! pure resolution code needs from a working tree: the workspace descriptor, the list
//! of files, and a [`GitStatusSnapshot`].
//!
//! # Public API
//! - [`GitRepo`]: Main interface for reading a repository
//!
//! # Key Features
//! - **Snapshot reading**: Convert git2 status flags to typed [`StageStatus`] entries
//! - **File listing**: Index entries still on disk plus untracked files
//! - **Remote sync**: Ahead/behind against the upstream branch
//! - **Content reads**: Working tree bytes, empty for deleted placeholders

use crate::core::{
    dirs::canonical_path_hash,
    error::{Result, SwitcherError},
    git_status::{FileStageStatus, GitStatusSnapshot, StageStatus},
    workspace::{WorkspaceDescriptor, WorkspaceFile, WorkspaceKind, WorkspaceOrigin},
};
use chrono::{DateTime, Utc};
use git2::{Repository, StatusOptions};
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    repo: Repository,
}

impl GitRepo {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Repository::discover(path)?;
        Ok(GitRepo { repo })
    }

    pub fn get_repo_path(&self) -> PathBuf {
        self.repo.path().to_path_buf()
    }

    fn workdir(&self) -> Result<&Path> {
        self.repo.workdir().ok_or(SwitcherError::BareRepository)
    }

    /// Stable id derived from the canonical repository path
    pub fn workspace_id(&self) -> String {
        canonical_path_hash(&self.get_repo_path())
    }

    pub fn descriptor(&self) -> Result<WorkspaceDescriptor> {
        let workdir = self.workdir()?;
        let name = workdir
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| workdir.to_string_lossy().into_owned());

        let kind = if self.repo.remotes()?.is_empty() {
            WorkspaceKind::Local
        } else {
            WorkspaceKind::GitRemote
        };

        Ok(WorkspaceDescriptor {
            workspace_id: self.workspace_id(),
            name,
            origin: WorkspaceOrigin { kind },
            last_updated: self.last_commit_time().unwrap_or_else(Utc::now),
        })
    }

    fn last_commit_time(&self) -> Option<DateTime<Utc>> {
        let commit = self.repo.head().ok()?.peel_to_commit().ok()?;
        DateTime::from_timestamp(commit.time().seconds(), 0)
    }

    fn statuses(&self) -> Result<git2::Statuses<'_>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(true);
        opts.recurse_untracked_dirs(true);
        opts.include_ignored(false);

        Ok(self.repo.statuses(Some(&mut opts))?)
    }

    /// Read the current git state of the working tree.
    pub fn snapshot(&self) -> Result<GitStatusSnapshot> {
        let statuses = self.statuses()?;
        let mut file_stage_statuses = Vec::new();

        for entry in statuses.iter() {
            let path = entry.path().ok_or(SwitcherError::InvalidUtf8Path)?;

            if let Some(status) = StageStatus::from_git2(entry.status()) {
                file_stage_statuses.push(FileStageStatus::new(path, status));
            }
        }

        let is_synced = matches!(self.get_ahead_behind()?, Some((0, 0)));

        log::debug!(
            "Snapshot: {} changed files, synced with upstream: {}",
            file_stage_statuses.len(),
            is_synced
        );

        Ok(GitStatusSnapshot {
            is_synced,
            has_local_changes: !file_stage_statuses.is_empty(),
            file_stage_statuses,
        })
    }

    /// Files present in the working tree, tracked or untracked.
    pub fn workspace_files(&self) -> Result<Vec<WorkspaceFile>> {
        let workdir = self.workdir()?;
        let workspace_id = self.workspace_id();
        let mut paths = BTreeSet::new();

        let index = self.repo.index()?;
        for entry in index.iter() {
            let path = std::str::from_utf8(&entry.path)
                .map_err(|_| SwitcherError::InvalidUtf8Path)?
                .to_string();
            if workdir.join(&path).is_file() {
                paths.insert(path);
            }
        }

        for entry in self.statuses()?.iter() {
            if entry.status().contains(git2::Status::WT_NEW) {
                let path = entry.path().ok_or(SwitcherError::InvalidUtf8Path)?;
                paths.insert(path.to_string());
            }
        }

        Ok(paths
            .into_iter()
            .map(|path| WorkspaceFile::new(workspace_id.as_str(), path))
            .collect())
    }

    /// Whether a path relative to the working tree exists on disk
    pub fn exists(&self, relative_path: &str) -> bool {
        self.workdir()
            .map(|workdir| workdir.join(relative_path).exists())
            .unwrap_or(false)
    }

    /// Bytes of a file in the working tree. Deleted placeholders read as empty.
    pub fn read_content(&self, file: &WorkspaceFile) -> Result<Vec<u8>> {
        if file.is_deleted_placeholder() {
            return Ok(Vec::new());
        }

        let full_path = self.workdir()?.join(&file.relative_path);
        std::fs::read(&full_path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => SwitcherError::file_not_found(&file.relative_path),
            _ => SwitcherError::Io(e),
        })
    }

    /// Get ahead/behind information for the current branch relative to its upstream
    /// Returns (ahead, behind) counts, or None if no upstream is set
    pub fn get_ahead_behind(&self) -> Result<Option<(usize, usize)>> {
        let head = match self.repo.head() {
            Ok(head) => head,
            Err(_) => return Ok(None),
        };

        let local_oid = match head.target() {
            Some(oid) => oid,
            None => return Ok(None),
        };

        let branch_name = match head.shorthand() {
            Some(name) => name,
            None => return Ok(None),
        };

        let local_branch = match self.repo.find_branch(branch_name, git2::BranchType::Local) {
            Ok(branch) => branch,
            Err(_) => return Ok(None),
        };

        let upstream_branch = match local_branch.upstream() {
            Ok(upstream) => upstream,
            Err(_) => return Ok(None), // No upstream configured
        };

        let upstream_oid = match upstream_branch.get().target() {
            Some(oid) => oid,
            None => return Ok(None),
        };

        match self.repo.graph_ahead_behind(local_oid, upstream_oid) {
            Ok((ahead, behind)) => Ok(Some((ahead, behind))),
            Err(_) => Ok(None),
        }
    }
}

//! Shared setup for commands that read the current workspace.
//!
//! # Initialization Steps
//! 1. **Git repository validation**: Ensure we're in a valid git repository
//! 2. **Configuration**: Load the user config, or defaults
//! 3. **Snapshot**: Read a fresh snapshot from git, falling back to the last cached one
//! 4. **Files**: List the working tree

use crate::core::{
    cache::{load_snapshot, save_snapshot},
    config::SwitcherConfig,
    error::{Result, SwitcherError},
    git::GitRepo,
    git_status::GitStatusSnapshot,
    state::SnapshotSlot,
    workspace::{WorkspaceDescriptor, WorkspaceFile},
};
use std::env;

pub struct WorkspaceContext {
    pub git_repo: GitRepo,
    pub config: SwitcherConfig,
    pub descriptor: WorkspaceDescriptor,
    pub files: Vec<WorkspaceFile>,
    pub snapshot: SnapshotSlot,
}

impl WorkspaceContext {
    /// Open the workspace containing the current directory.
    ///
    /// With `offline`, git status is not queried and the cached snapshot is used.
    pub fn initialize(offline: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let git_repo = GitRepo::open(&current_dir).map_err(|_| SwitcherError::NotInGitRepo)?;

        let config = SwitcherConfig::load_or_default()?;
        let descriptor = git_repo.descriptor()?;
        let files = git_repo.workspace_files()?;

        let mut snapshot = SnapshotSlot::new();
        let repo_path = git_repo.get_repo_path();

        let cached = load_snapshot(&repo_path);
        if offline {
            snapshot.restore(cached?);
        } else {
            // Seed with the last good value so a failed refresh still has something to show
            match cached {
                Ok(previous) => snapshot.restore(previous),
                Err(e) => log::debug!("No usable cached snapshot: {e}"),
            }
            refresh_snapshot(&git_repo, &mut snapshot);
        }

        log::debug!(
            "Initialized workspace '{}' with {} files (fresh snapshot: {})",
            descriptor.name,
            files.len(),
            snapshot.is_fresh()
        );

        Ok(Self {
            git_repo,
            config,
            descriptor,
            files,
            snapshot,
        })
    }

    pub fn latest_snapshot(&self) -> Option<&GitStatusSnapshot> {
        self.snapshot.latest()
    }
}

fn refresh_snapshot(git_repo: &GitRepo, slot: &mut SnapshotSlot) {
    match git_repo.snapshot() {
        Ok(fresh) => {
            if let Err(e) = save_snapshot(&fresh, &git_repo.get_repo_path()) {
                // Cache errors never fail the command
                log::warn!("Snapshot cache save failed (command will continue): {e}");
            }
            slot.store(fresh);
        }
        Err(e) => {
            log::warn!("Failed to read git status, keeping previous snapshot: {e}");
        }
    }
}

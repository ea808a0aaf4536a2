use crate::core::{
    colors::{get_sync_color_style, sync_symbol},
    error::{Result, SwitcherError},
    git::GitRepo,
    listing::recent_workspaces,
    output::{print_hint, print_info, print_section_header},
    state::SnapshotCache,
    sync_status::resolve_file_status,
};
use colored::*;
use std::env;
use std::path::PathBuf;

/// List other workspaces, most recently updated first, with their local-changes status.
pub fn execute_workspaces(paths: Vec<PathBuf>) -> Result<()> {
    let current_dir = env::current_dir()?;
    let current_id = GitRepo::open(&current_dir)
        .map(|repo| repo.workspace_id())
        .unwrap_or_default();

    let mut descriptors = Vec::new();
    let mut snapshots = SnapshotCache::new();

    for path in &paths {
        let repo = match GitRepo::open(path) {
            Ok(repo) => repo,
            Err(e) => {
                log::warn!("Skipping '{}': {}", path.display(), e);
                continue;
            }
        };

        let descriptor = match repo.descriptor() {
            Ok(descriptor) => descriptor,
            Err(e) => {
                log::warn!("Skipping '{}': {}", path.display(), e);
                continue;
            }
        };
        snapshots.begin_refresh(&descriptor.workspace_id);
        match repo.snapshot() {
            Ok(snapshot) => snapshots.store(&descriptor.workspace_id, snapshot),
            Err(e) => log::warn!("No git status for '{}': {}", descriptor.name, e),
        }
        descriptors.push(descriptor);
    }

    if descriptors.is_empty() && !paths.is_empty() {
        return Err(SwitcherError::NotInGitRepo);
    }

    let recent = recent_workspaces(&descriptors, &current_id);

    print_section_header("Recent workspaces");
    if recent.is_empty() {
        print_info("No other workspaces.");
        return Ok(());
    }

    for descriptor in recent {
        let status = resolve_file_status(snapshots.latest(&descriptor.workspace_id), None);
        let color_fn = get_sync_color_style(status);
        println!(
            "   {} {} {}",
            color_fn(sync_symbol(status)),
            descriptor.name.white(),
            format!("({})", descriptor.origin.kind.label()).bright_black()
        );
        print_hint(&format!(
            "     updated {}",
            descriptor.last_updated.format("%Y-%m-%d %H:%M")
        ));
    }
    println!();

    Ok(())
}

//! Unified color system for sync status visualization.
//!
//! Each status enum maps to its style through an exhaustive `match`, so adding a
//! variant fails to compile until it is given a color here.
//!
//! # Color Scheme
//! - **Pending / Modified**: Yellow
//! - **Added**: Green
//! - **Deleted**: Red
//! - **Synced**: Bright black (muted)
//! - **Unknown**: Dimmed

use crate::core::{
    git_status::StageStatus,
    listing::FileDisplayMode,
    sync_status::{FileSyncStatus, WorkspaceSyncStatus},
};
use colored::*;

/// Returns a closure that applies the color of a stage status to any text
pub fn get_stage_color_style(status: StageStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        StageStatus::Modified => Box::new(|text: &str| text.yellow()),
        StageStatus::Added => Box::new(|text: &str| text.green()),
        StageStatus::Deleted => Box::new(|text: &str| text.red()),
    }
}

pub fn get_sync_color_style(status: FileSyncStatus) -> Box<dyn Fn(&str) -> ColoredString> {
    match status {
        FileSyncStatus::Pending => Box::new(|text: &str| text.yellow()),
        FileSyncStatus::Synced => Box::new(|text: &str| text.bright_black()),
        FileSyncStatus::Unknown => Box::new(|text: &str| text.dimmed()),
    }
}

/// Symbol shown for a local-changes status
pub fn sync_symbol(status: FileSyncStatus) -> &'static str {
    match status {
        FileSyncStatus::Pending => "●",
        FileSyncStatus::Synced => "✓",
        FileSyncStatus::Unknown => "…",
    }
}

/// Text and color for the remote sync indicator
pub fn remote_sync_label(status: WorkspaceSyncStatus) -> ColoredString {
    match status {
        WorkspaceSyncStatus::Synced => "synced with remote".green(),
        WorkspaceSyncStatus::Pending => "new changes since your last sync".yellow(),
        WorkspaceSyncStatus::Unknown => "checking remote...".dimmed(),
    }
}

/// Colored one-letter stage marker padded to a fixed width
pub fn get_stage_marker(status: Option<StageStatus>) -> ColoredString {
    match status {
        Some(status) => get_stage_color_style(status)(status.as_str()),
        None => " ".normal(),
    }
}

/// File name colored by display mode and sync status
pub fn get_colored_name(mode: FileDisplayMode, status: FileSyncStatus, name: &str) -> ColoredString {
    match mode {
        FileDisplayMode::Enabled => get_sync_color_style(status)(name),
        FileDisplayMode::ReadOnly => name.normal(),
        FileDisplayMode::Deleted => name.red().strikethrough(),
    }
}

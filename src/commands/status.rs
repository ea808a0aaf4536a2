use crate::commands::context::WorkspaceContext;
use crate::core::{
    colors::{get_stage_marker, get_sync_color_style, remote_sync_label, sync_symbol},
    error::Result,
    output::{print_hint, print_section_header},
    sync_status::{
        resolve_file_status, resolve_workspace_remote_sync_status, shows_remote_sync_indicator,
        workspace_stage_marker,
    },
};
use colored::*;

pub fn execute_status(offline: bool) -> Result<()> {
    let context = WorkspaceContext::initialize(offline)?;
    let snapshot = context.latest_snapshot();
    let descriptor = &context.descriptor;

    println!();
    println!(
        "Workspace: {} {}",
        descriptor.name.white().bold(),
        format!("({})", descriptor.origin.kind.label()).bright_black()
    );

    let local_status = resolve_file_status(snapshot, None);
    let color_fn = get_sync_color_style(local_status);
    println!(
        "Local changes: {} {} {}",
        get_stage_marker(workspace_stage_marker(snapshot)),
        color_fn(sync_symbol(local_status)),
        color_fn(&local_status.to_string())
    );

    if shows_remote_sync_indicator(descriptor, None) {
        println!(
            "Remote: {}",
            remote_sync_label(resolve_workspace_remote_sync_status(snapshot))
        );
    }

    if !context.snapshot.is_fresh() {
        print_hint("(showing last cached git status)");
    }

    let Some(snapshot) = snapshot else {
        return Ok(());
    };

    if snapshot.file_stage_statuses.is_empty() {
        return Ok(());
    }

    print_section_header("Changes");
    for entry in &snapshot.file_stage_statuses {
        println!(
            "   {}  {}  {}",
            get_stage_marker(Some(entry.status)),
            entry.path,
            entry.status.description().bright_black()
        );
    }
    println!();

    Ok(())
}

use crate::commands::context::WorkspaceContext;
use crate::core::{
    colors::{get_colored_name, get_stage_marker, get_sync_color_style, sync_symbol},
    error::Result,
    git_status::GitStatusSnapshot,
    listing::{
        derive_listing, display_mode, display_name, truncate_for_carousel, FileDisplayMode,
        ListingQuery,
    },
    output::{print_hint, print_info, print_section_header},
    sync_status::{list_deleted_files, resolve_file_status, stage_status_of},
    workspace::WorkspaceFile,
};
use colored::*;

pub struct FilesOptions {
    pub search: String,
    /// `None` falls back to the config's `changed_only_by_default`
    pub changed_only: Option<bool>,
    pub offline: bool,
    pub all: bool,
}

pub fn execute_files(options: FilesOptions) -> Result<()> {
    let context = WorkspaceContext::initialize(options.offline)?;
    let snapshot = context.latest_snapshot();

    let deleted_files = list_deleted_files(&context.descriptor, snapshot);
    let registry = context.config.registry();
    let query = ListingQuery {
        search: options.search,
        changed_only: options
            .changed_only
            .unwrap_or(context.config.changed_only_by_default),
    };

    let listing = derive_listing(&context.files, &deleted_files, snapshot, &registry, &query);
    let max = if options.all {
        usize::MAX
    } else {
        context.config.max_listed_files
    };

    print_section_header(&format!("Models in '{}'", context.descriptor.name));
    if listing.models.is_empty() {
        print_info("No files found.");
    } else {
        print_files(&listing.models, true, snapshot, max);
    }

    print_section_header("Other files");
    if listing.other_files.is_empty() {
        print_info("No files found.");
    } else {
        print_files(&listing.other_files, false, snapshot, max);
    }
    println!();

    Ok(())
}

fn print_files(
    files: &[WorkspaceFile],
    is_model: bool,
    snapshot: Option<&GitStatusSnapshot>,
    max: usize,
) {
    let (shown, hidden) = truncate_for_carousel(files, max);
    for file in shown {
        print_file_line(file, is_model, snapshot);
    }
    if hidden > 0 {
        print_hint(&format!("   ...and {hidden} more."));
    }
}

fn print_file_line(file: &WorkspaceFile, is_model: bool, snapshot: Option<&GitStatusSnapshot>) {
    let mode = display_mode(file, is_model);
    let name = display_name(file, mode);

    // Other files are listed flat, without git decoration
    if mode == FileDisplayMode::ReadOnly {
        println!("      {}{}", name, dir_suffix(file));
        return;
    }

    let status = resolve_file_status(snapshot, Some(file));
    let color_fn = get_sync_color_style(status);
    let extension = match mode {
        FileDisplayMode::Enabled if !file.extension().is_empty() => {
            format!(" [{}]", file.extension()).bright_black().to_string()
        }
        _ => String::new(),
    };
    let deleted_note = match mode {
        FileDisplayMode::Deleted => " (deleted in workspace)".bright_black().to_string(),
        FileDisplayMode::Enabled | FileDisplayMode::ReadOnly => String::new(),
    };

    println!(
        "   {} {} {}{}{}{}",
        get_stage_marker(stage_status_of(snapshot, file)),
        color_fn(sync_symbol(status)),
        get_colored_name(mode, status, name),
        extension,
        deleted_note,
        dir_suffix(file)
    );
}

fn dir_suffix(file: &WorkspaceFile) -> String {
    match file.display_dir_path().as_str() {
        "" => String::new(),
        dir => format!("  {}", dir.bright_black()),
    }
}

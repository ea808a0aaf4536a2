use clap::{Parser, Subcommand};
use git_file_switcher::commands::*;
use git_file_switcher::core::{
    error::{Result, SwitcherError},
    print_error,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "git-file-switcher")]
#[command(about = "Git sync status and file listings for a workspace")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show local changes and remote sync status of the workspace
    Status {
        /// Use the last cached git status instead of reading the repository
        #[arg(long)]
        offline: bool,
    },
    /// List models and other files, sorted and filtered
    Files {
        /// Case-insensitive search on file names
        #[arg(short, long, default_value = "")]
        search: String,
        /// Only show models with uncommitted changes
        #[arg(short = 'c', long)]
        changed_only: bool,
        /// Show all models even when the config filters changed ones by default
        #[arg(long, conflicts_with = "changed_only")]
        no_changed_only: bool,
        /// Use the last cached git status instead of reading the repository
        #[arg(long)]
        offline: bool,
        /// Do not truncate long listings
        #[arg(short, long)]
        all: bool,
    },
    /// Check whether a file can be renamed to a new name (without extension)
    CheckName {
        /// Path of the file relative to the workspace root
        path: String,
        /// New name without extension
        new_name: String,
    },
    /// List other workspaces, most recently updated first
    Workspaces {
        /// Paths of the workspaces to compare
        paths: Vec<PathBuf>,
    },
}

fn report(result: Result<()>) {
    if let Err(e) = result {
        if let SwitcherError::NotInGitRepo = e {
            print_error("Not in a git repository");
        } else {
            print_error(&e.to_string());
        }
        std::process::exit(1);
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    let level = if cli.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Commands::Status { offline } => report(execute_status(offline)),
        Commands::Files {
            search,
            changed_only,
            no_changed_only,
            offline,
            all,
        } => report(execute_files(FilesOptions {
            search,
            changed_only: match (changed_only, no_changed_only) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            offline,
            all,
        })),
        Commands::CheckName { path, new_name } => report(execute_check_name(&path, &new_name)),
        Commands::Workspaces { paths } => report(execute_workspaces(paths)),
    }
}

use crate::core::{
    error::{Result, SwitcherError},
    file_name::{check_new_file_name, FileNameCheck},
    git::GitRepo,
    output::{print_info, print_success},
    workspace::WorkspaceFile,
};
use std::env;

/// Validate renaming `relative_path` to `new_name` (without extension).
pub fn execute_check_name(relative_path: &str, new_name: &str) -> Result<()> {
    let current_dir = env::current_dir()?;
    let git_repo = GitRepo::open(&current_dir).map_err(|_| SwitcherError::NotInGitRepo)?;

    if !git_repo.exists(relative_path) {
        return Err(SwitcherError::file_not_found(relative_path));
    }

    let file = WorkspaceFile::new(git_repo.workspace_id(), relative_path);
    let check = check_new_file_name(&file, new_name, |candidate| git_repo.exists(candidate))?;

    match check {
        FileNameCheck::Unchanged => {
            print_info(&format!("'{}' already has this name.", file.relative_path));
            Ok(())
        }
        FileNameCheck::Valid { new_relative_path } => {
            print_success(&format!("{} -> {}\n", file.relative_path, new_relative_path));
            Ok(())
        }
        FileNameCheck::Invalid(issue) => Err(SwitcherError::invalid_file_name(
            new_name.trim(),
            issue.message(),
        )),
    }
}

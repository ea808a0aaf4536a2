//! Validation for renaming a workspace file.
//!
//! A rename only touches the name without extension; the directory and the extension
//! of the original file are kept. The new name is rejected when it contains
//! characters outside [`ALLOWED_FILE_NAME_REGEX`] or when a file already exists at the
//! resulting path.

use crate::core::{error::Result, workspace::WorkspaceFile};

/// Word characters, digits, `_ . ' - ( )` and whitespace
pub const ALLOWED_FILE_NAME_REGEX: &str = r"^[\w\d_.'\-()\s]+$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileNameIssue {
    Empty,
    ForbiddenCharacters,
    AlreadyExists,
}

impl FileNameIssue {
    pub fn message(&self) -> &'static str {
        match self {
            FileNameIssue::Empty => "File name cannot be empty.",
            FileNameIssue::ForbiddenCharacters => "This name has invalid characters.",
            FileNameIssue::AlreadyExists => "A file already exists at this location.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileNameCheck {
    /// Same name as today, nothing to do
    Unchanged,
    Valid { new_relative_path: String },
    Invalid(FileNameIssue),
}

/// Path the file would have after renaming to `new_name_without_extension`.
pub fn renamed_relative_path(file: &WorkspaceFile, new_name_without_extension: &str) -> String {
    let new_name = if file.extension().is_empty() {
        new_name_without_extension.to_string()
    } else {
        format!("{}.{}", new_name_without_extension, file.extension())
    };

    match file.relative_dir_path() {
        "" => new_name,
        dir => format!("{dir}/{new_name}"),
    }
}

/// Check a proposed new name for `file`.
///
/// `exists` is asked whether a file is already present at the candidate relative path.
pub fn check_new_file_name<F>(
    file: &WorkspaceFile,
    new_name_without_extension: &str,
    exists: F,
) -> Result<FileNameCheck>
where
    F: Fn(&str) -> bool,
{
    let trimmed = new_name_without_extension.trim();
    if trimmed.is_empty() {
        return Ok(FileNameCheck::Invalid(FileNameIssue::Empty));
    }

    if trimmed == file.name_without_extension() {
        return Ok(FileNameCheck::Unchanged);
    }

    let re = regex::Regex::new(ALLOWED_FILE_NAME_REGEX)?;
    if !re.is_match(new_name_without_extension) {
        return Ok(FileNameCheck::Invalid(FileNameIssue::ForbiddenCharacters));
    }

    let new_relative_path = renamed_relative_path(file, trimmed);
    if exists(&new_relative_path) {
        log::debug!("Rename target already exists: {new_relative_path}");
        return Ok(FileNameCheck::Invalid(FileNameIssue::AlreadyExists));
    }

    Ok(FileNameCheck::Valid { new_relative_path })
}

//! Predefined repository scenarios

#![allow(dead_code)]

use super::repository::*;
use git_file_switcher::core::error::Result;

/// Scenario: committed models in two directories plus one non-model file
pub fn create_models_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(
        &repo.path,
        &["approval.dmn", "onboarding.bpmn", "flows/credit.bpmn", "README.md"],
    )?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    Ok(repo)
}

use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{fixtures::*, repository::*};

#[cfg(test)]
mod check_name_command_tests {
    use super::*;

    #[test]
    fn test_check_name_accepts_valid_name() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .args(["check-name", "flows/credit.bpmn", "credit check (v2)"])
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "flows/credit.bpmn -> flows/credit check (v2).bpmn",
            ));

        Ok(())
    }

    #[test]
    fn test_check_name_unchanged_name() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .args(["check-name", "approval.dmn", "approval"])
            .assert()
            .success()
            .stdout(predicate::str::contains("already has this name"));

        Ok(())
    }

    #[test]
    fn test_check_name_rejects_existing_file() -> anyhow::Result<()> {
        let repo = create_models_repo()?;
        create_file(&repo.path, "onboarding.dmn", "other\n")?;

        repo.command()?
            .args(["check-name", "approval.dmn", "onboarding"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("A file already exists"));

        Ok(())
    }

    #[test]
    fn test_check_name_rejects_forbidden_characters() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .args(["check-name", "approval.dmn", "bad/name"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("invalid characters"));

        Ok(())
    }

    #[test]
    fn test_check_name_rejects_empty_name() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .args(["check-name", "approval.dmn", "   "])
            .assert()
            .failure()
            .stdout(predicate::str::contains("cannot be empty"));

        Ok(())
    }

    #[test]
    fn test_check_name_missing_file_fails() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .args(["check-name", "missing.dmn", "other"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("File does not exist: missing.dmn"));

        Ok(())
    }
}

use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{assertions, fixtures::*, repository::*};

#[cfg(test)]
mod files_command_tests {
    use super::*;

    #[test]
    fn test_files_splits_models_and_other_files() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .arg("files")
            .assert()
            .success()
            .stdout(assertions::has_section("Models in"))
            .stdout(assertions::has_section("Other files"))
            .stdout(assertions::has_model("approval", "dmn"))
            .stdout(assertions::has_model("onboarding", "bpmn"))
            .stdout(assertions::has_model("credit", "bpmn"))
            .stdout(predicate::str::contains("README.md"))
            .stdout(assertions::has_model("README", "md").not());

        Ok(())
    }

    #[test]
    fn test_files_sorted_by_path() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        let output = repo.command()?.arg("files").output()?;
        let stdout = String::from_utf8(output.stdout)?;

        let approval = stdout.find("approval [dmn]").unwrap();
        let credit = stdout.find("credit [bpmn]").unwrap();
        let onboarding = stdout.find("onboarding [bpmn]").unwrap();
        assert!(approval < credit);
        assert!(credit < onboarding);

        Ok(())
    }

    #[test]
    fn test_files_search_filters_both_sections() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .args(["files", "--search", "APPR"])
            .assert()
            .success()
            .stdout(assertions::has_model("approval", "dmn"))
            .stdout(assertions::has_model("onboarding", "bpmn").not())
            .stdout(assertions::has_model("credit", "bpmn").not())
            .stdout(predicate::str::contains("README.md").not())
            .stdout(assertions::no_files_found());

        Ok(())
    }

    #[test]
    fn test_files_search_matching_only_other_files() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .args(["files", "--search", "readme"])
            .assert()
            .success()
            .stdout(predicate::str::contains("README.md"))
            .stdout(assertions::has_model("approval", "dmn").not())
            .stdout(assertions::no_files_found());

        Ok(())
    }

    #[test]
    fn test_files_search_without_matches() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .args(["files", "--search", "zzz"])
            .assert()
            .success()
            .stdout(assertions::no_files_found());

        Ok(())
    }

    #[test]
    fn test_files_changed_only_keeps_changed_models() -> anyhow::Result<()> {
        let repo = create_models_repo()?;
        create_file(&repo.path, "approval.dmn", "changed\n")?;

        repo.command()?
            .args(["files", "--changed-only"])
            .assert()
            .success()
            .stdout(assertions::has_model("approval", "dmn"))
            .stdout(assertions::has_model("onboarding", "bpmn").not())
            .stdout(predicate::str::contains("README.md"));

        Ok(())
    }

    #[test]
    fn test_files_shows_deleted_model() -> anyhow::Result<()> {
        let repo = create_models_repo()?;
        remove_file(&repo.path, "onboarding.bpmn")?;

        repo.command()?
            .arg("files")
            .assert()
            .success()
            .stdout(predicate::str::contains("onboarding.bpmn (deleted in workspace)"));

        Ok(())
    }

    #[test]
    fn test_files_shows_untracked_model() -> anyhow::Result<()> {
        let repo = create_models_repo()?;
        create_file(&repo.path, "flows/scoring.dmn", "new\n")?;

        repo.command()?
            .arg("files")
            .assert()
            .success()
            .stdout(assertions::has_model("scoring", "dmn"));

        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_files_truncates_to_configured_maximum() -> anyhow::Result<()> {
        let repo = create_models_repo()?;
        repo.write_config(r#"{ "max_listed_files": 2 }"#)?;

        repo.command()?
            .arg("files")
            .assert()
            .success()
            .stdout(predicate::str::contains("...and 1 more."));

        repo.command()?
            .args(["files", "--all"])
            .assert()
            .success()
            .stdout(predicate::str::contains("more.").not());

        Ok(())
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_files_no_changed_only_overrides_config_default() -> anyhow::Result<()> {
        let repo = create_models_repo()?;
        repo.write_config(r#"{ "changed_only_by_default": true }"#)?;
        create_file(&repo.path, "approval.dmn", "changed\n")?;

        repo.command()?
            .arg("files")
            .assert()
            .success()
            .stdout(assertions::has_model("approval", "dmn"))
            .stdout(assertions::has_model("onboarding", "bpmn").not());

        repo.command()?
            .args(["files", "--no-changed-only"])
            .assert()
            .success()
            .stdout(assertions::has_model("approval", "dmn"))
            .stdout(assertions::has_model("onboarding", "bpmn"));

        Ok(())
    }

    #[test]
    fn test_files_changed_flags_conflict() -> anyhow::Result<()> {
        let repo = create_models_repo()?;

        repo.command()?
            .args(["files", "--changed-only", "--no-changed-only"])
            .assert()
            .failure();

        Ok(())
    }

    #[test]
    fn test_files_outside_git_repo_fails() -> anyhow::Result<()> {
        let temp_dir = tempfile::TempDir::new()?;
        let home = tempfile::TempDir::new()?;

        let mut cmd = assert_cmd::Command::cargo_bin("git-file-switcher")?;
        cmd.arg("files")
            .current_dir(temp_dir.path())
            .env("XDG_CACHE_HOME", home.path())
            .assert()
            .failure()
            .stdout(assertions::not_in_git_repo());

        Ok(())
    }
}

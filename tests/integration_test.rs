// tests/integration_test.rs
use assert_cmd::Command;
use git2::Repository;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Scratch repository with HEAD on `branch` and an empty config file
struct Sandbox {
    dir: TempDir,
    repo: Repository,
}

impl Sandbox {
    fn on_branch(branch: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Repository::init(dir.path()).unwrap();
        repo.set_head(&format!("refs/heads/{}", branch)).unwrap();
        fs::write(dir.path().join("hook.toml"), "").unwrap();
        Sandbox { dir, repo }
    }

    fn detached() -> Self {
        let sandbox = Sandbox::on_branch("main");
        let sig = git2::Signature::now("Test", "test@example.com").unwrap();
        let oid = {
            // Tree borrows the repository and must be gone before `sandbox` moves out
            let tree_id = sandbox.repo.index().unwrap().write_tree().unwrap();
            let tree = sandbox.repo.find_tree(tree_id).unwrap();
            sandbox
                .repo
                .commit(Some("HEAD"), &sig, &sig, "initial", &tree, &[])
                .unwrap()
        };
        sandbox.repo.set_head_detached(oid).unwrap();
        sandbox
    }

    fn write_message(&self, content: &str) -> PathBuf {
        let path = self.dir.path().join("COMMIT_EDITMSG");
        fs::write(&path, content).unwrap();
        path
    }

    fn message(&self) -> String {
        fs::read_to_string(self.dir.path().join("COMMIT_EDITMSG")).unwrap()
    }

    fn hook(&self) -> Command {
        let mut cmd = Command::cargo_bin("issue-key-hook").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("GIT_DIR")
            .env_remove("GIT_WORK_TREE")
            .arg("--config")
            .arg(self.dir.path().join("hook.toml"));
        cmd
    }
}

#[test]
fn test_help() {
    Command::cargo_bin("issue-key-hook")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("issue key"))
        .stdout(predicate::str::contains("detached HEAD"));
}

#[test]
fn test_missing_message_file_argument() {
    Command::cargo_bin("issue-key-hook")
        .unwrap()
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_prefixes_message_from_branch() {
    let sandbox = Sandbox::on_branch("ABC-123-fix-bug");
    let path = sandbox.write_message("fix login bug\n");

    sandbox.hook().arg(&path).assert().success();

    assert_eq!(sandbox.message(), "ABC-123 fix login bug");
}

#[test]
fn test_ignored_branch_exits_zero() {
    let sandbox = Sandbox::on_branch("main");
    let path = sandbox.write_message("fix login bug\n");

    sandbox
        .hook()
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::is_empty());

    assert_eq!(sandbox.message(), "fix login bug\n");
}

#[test]
fn test_ignored_branch_verbose_explains() {
    let sandbox = Sandbox::on_branch("main");
    let path = sandbox.write_message("fix login bug\n");

    sandbox
        .hook()
        .arg(&path)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("ignore list"));
}

#[test]
fn test_ignored_branch_required_fails() {
    let sandbox = Sandbox::on_branch("main");
    let path = sandbox.write_message("fix login bug\n");

    sandbox
        .hook()
        .arg(&path)
        .arg("--required")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ignore list"));

    assert_eq!(sandbox.message(), "fix login bug\n");
}

#[test]
fn test_branch_without_key_required_fails() {
    let sandbox = Sandbox::on_branch("feature/xyz");
    let path = sandbox.write_message("fix\n");

    sandbox
        .hook()
        .arg(&path)
        .arg("-r")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("feature/xyz"));
}

#[test]
fn test_key_already_present_not_rewritten() {
    let sandbox = Sandbox::on_branch("ABC-123-fix");
    let path = sandbox.write_message("ABC-123 fix login bug");

    sandbox.hook().arg(&path).assert().success();

    assert_eq!(sandbox.message(), "ABC-123 fix login bug");
}

#[test]
fn test_editor_block_stripped() {
    let sandbox = Sandbox::on_branch("feature/ABC-123");
    let path = sandbox.write_message(
        "fix bug\n# Please enter the commit message for your changes.\ndiff info...",
    );

    sandbox.hook().arg(&path).assert().success();

    assert_eq!(sandbox.message(), "ABC-123 fix bug");
}

#[test]
fn test_ignore_branch_flag_uses_exact_names() {
    let sandbox = Sandbox::on_branch("trunk");
    let path = sandbox.write_message("fix\n");

    sandbox
        .hook()
        .arg(&path)
        .args(["--required", "--ignore-branch", "release"])
        .assert()
        .failure();

    sandbox
        .hook()
        .arg(&path)
        .args(["--ignore-branch", "trunk", "--verbose"])
        .assert()
        .success()
        .stderr(predicate::str::contains("'trunk'"));
}

#[test]
fn test_no_add_issue_key_only_validates() {
    let sandbox = Sandbox::on_branch("ABC-123-fix");
    let path = sandbox.write_message("fix\n");

    sandbox
        .hook()
        .arg(&path)
        .args(["--no-add-issue-key", "--required"])
        .assert()
        .success();

    assert_eq!(sandbox.message(), "fix\n");
}

#[test]
fn test_detached_head_fails() {
    let sandbox = Sandbox::detached();
    let path = sandbox.write_message("fix\n");

    sandbox
        .hook()
        .arg(&path)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("detached HEAD"));

    assert_eq!(sandbox.message(), "fix\n");
}

#[test]
fn test_invalid_pattern_fails() {
    let sandbox = Sandbox::on_branch("ABC-1");
    let path = sandbox.write_message("fix\n");

    sandbox
        .hook()
        .arg(&path)
        .args(["--pattern", "[A-Z"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid pattern"));
}

#[test]
fn test_missing_message_file_fails() {
    let sandbox = Sandbox::on_branch("ABC-1-x");

    sandbox
        .hook()
        .arg(sandbox.dir.path().join("does-not-exist"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn test_config_file_is_honoured() {
    let sandbox = Sandbox::on_branch("feature/xyz");
    fs::write(sandbox.dir.path().join("hook.toml"), "required = true\n").unwrap();
    let path = sandbox.write_message("fix\n");

    sandbox.hook().arg(&path).assert().failure().code(1);
}

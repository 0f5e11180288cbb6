//! Tests for error messages, suggestions and exit codes.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn setup(gitconfig: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("sprig.toml"), "").unwrap();
    fs::write(dir.path().join("gitconfig"), gitconfig).unwrap();
    dir
}

fn sprig(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("sprig").unwrap();
    cmd.current_dir(dir.path())
        .env("SPRIG_CONFIG", dir.path().join("sprig.toml"))
        .env("HOME", dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn new_cmd(dir: &TempDir) -> Command {
    let mut cmd = sprig(dir);
    cmd.arg("new")
        .arg("--gitconfig")
        .arg(dir.path().join("gitconfig"))
        .arg("--output")
        .arg(dir.path())
        .arg("--no-git");
    cmd
}

const FULL: &str = "[user]\n\tname = foo\n\temail = bar@example.com\n[github]\n\tuser = technicalpickles\n";

#[test]
fn test_error_missing_project_name() {
    let dir = setup(FULL);

    new_cmd(&dir)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("No GitHub repository name given"))
        .stderr(predicate::str::contains("sprig new the-perfect-gem"));
}

#[test]
fn test_error_missing_user_name() {
    let dir = setup("[user]\n\temail = bar@example.com\n[github]\n\tuser = technicalpickles\n");

    new_cmd(&dir)
        .arg("gem")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("user.name"))
        .stderr(predicate::str::contains("git config --global user.name"));

    assert!(!dir.path().join("gem").exists());
}

#[test]
fn test_error_missing_email() {
    let dir = setup("[user]\n\tname = foo\n[github]\n\tuser = technicalpickles\n");

    new_cmd(&dir)
        .arg("gem")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("user.email"));
}

#[test]
fn test_error_missing_github_user() {
    let dir = setup("[user]\n\tname = foo\n\temail = bar@example.com\n");

    new_cmd(&dir)
        .arg("gem")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("github.user"));
}

#[test]
fn test_error_missing_token_only_with_create_repo() {
    let dir = setup(FULL);

    new_cmd(&dir)
        .args(["gem", "--create-repo"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("github.token"));
    assert!(!dir.path().join("gem").exists());

    new_cmd(&dir).arg("gem").assert().success();
}

#[test]
fn test_error_missing_gitconfig_file_reports_identity() {
    let dir = setup(FULL);

    sprig(&dir)
        .arg("new")
        .arg("gem")
        .arg("--gitconfig")
        .arg(dir.path().join("does-not-exist"))
        .arg("--no-git")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("user.name"));
}

#[test]
fn test_error_malformed_gitconfig() {
    let dir = setup("[user\n\tname = foo\n");

    new_cmd(&dir)
        .arg("gem")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("line 1"));
}

#[test]
fn test_error_invalid_project_name() {
    let dir = setup(FULL);

    new_cmd(&dir)
        .arg(".hidden")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));
}

#[test]
fn test_error_parent_directory_name_with_force() {
    let dir = setup(FULL);

    new_cmd(&dir)
        .args(["..", "--force"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid project name"));

    assert!(dir.path().join("sprig.toml").is_file());
    assert!(dir.path().join("gitconfig").is_file());
}

#[test]
fn test_error_project_exists() {
    let dir = setup(FULL);
    fs::create_dir(dir.path().join("gem")).unwrap();

    new_cmd(&dir)
        .arg("gem")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"))
        .stderr(predicate::str::contains("--force"));

    new_cmd(&dir).args(["gem", "--force"]).assert().success();
    assert!(dir.path().join("gem/Cargo.toml").is_file());
}

#[test]
fn test_error_missing_skeleton_directory() {
    let dir = setup(FULL);

    new_cmd(&dir)
        .arg("gem")
        .arg("--skeleton")
        .arg(dir.path().join("nope"))
        .assert()
        .code(3);
}

#[test]
fn test_error_unknown_config_key() {
    let dir = setup(FULL);

    sprig(&dir)
        .args(["config", "get", "does.not.exist"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_error_missing_explicit_config_file() {
    let dir = setup(FULL);

    sprig(&dir)
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .args(["config", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_error_unknown_argument() {
    let dir = setup(FULL);

    sprig(&dir)
        .args(["new", "gem", "--bogus"])
        .assert()
        .code(2);
}

#[test]
fn test_verbose_hides_verbose_hint() {
    let dir = setup("[user]\n\tname = foo\n");

    new_cmd(&dir)
        .args(["gem", "-v"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Use -v / --verbose").not());
}

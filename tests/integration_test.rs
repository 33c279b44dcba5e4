// tests/integration_test.rs
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn pyrelease() -> Command {
    Command::new(env!("CARGO_BIN_EXE_pyrelease"))
}

#[test]
fn test_pyrelease_help() {
    let output = pyrelease()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("pyrelease"));
    assert!(stdout.contains("--new-version"));
    assert!(stdout.contains("--changelog-file"));
}

#[test]
fn test_pyrelease_version() {
    let output = pyrelease()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_outside_git_repository_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("_version.py"), "__version__ = \"0.1.0\"\n").unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), "# Changelog\n").unwrap();

    let output = pyrelease()
        .current_dir(dir.path())
        .env("GIT_CEILING_DIRECTORIES", dir.path())
        .args([
            "--version-file",
            "_version.py",
            "--changelog-file",
            "CHANGELOG.md",
            "--description",
            "x",
            "--dry-run",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Git repository error"));
}

#[test]
fn test_dry_run_in_repository_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let repo = git2::Repository::init(dir.path()).unwrap();
    fs::write(dir.path().join("_version.py"), "__version__ = \"0.1.0\"\n").unwrap();
    fs::write(dir.path().join("CHANGELOG.md"), "# Changelog\n").unwrap();
    fs::write(
        dir.path().join("pyrelease.toml"),
        "[release]\nversion-file = \"_version.py\"\nchangelog-file = \"CHANGELOG.md\"\n",
    )
    .unwrap();
    drop(repo);

    let output = pyrelease()
        .current_dir(dir.path())
        .arg("--dry-run")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Create tag v0.1.1"));
    assert_eq!(
        fs::read_to_string(dir.path().join("_version.py")).unwrap(),
        "__version__ = \"0.1.0\"\n"
    );
}

// tests/config_test.rs
use pyrelease::config::{load_config, load_config_from, Config};
use pyrelease::ReleaseError;
use serial_test::serial;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_from_explicit_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[release]
version-file = "mypkg/_version.py"
changelog-file = "CHANGELOG.md"
remote = "upstream"
tag-prefix = "release-"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.version_file, Some(PathBuf::from("mypkg/_version.py")));
    assert_eq!(config.changelog_file, Some(PathBuf::from("CHANGELOG.md")));
    assert_eq!(config.remote, "upstream");
    assert_eq!(config.tag_for("1.0.0"), "release-1.0.0");
    assert_eq!(config.upload_command, ["twine", "upload", "dist/*"]);
}

#[test]
fn test_explicit_file_must_exist() {
    let err = load_config(Some("/nonexistent/pyrelease.toml")).unwrap_err();
    assert!(matches!(err, ReleaseError::Config(_)));
}

#[test]
fn test_release_file_in_project_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pyrelease.toml"),
        "[release]\nversion-file = \"pkg/_version.py\"\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("pyproject.toml"),
        "[tool.pyrelease]\nversion-file = \"other/_version.py\"\n",
    )
    .unwrap();

    let config = load_config_from(dir.path(), None).unwrap();
    assert_eq!(config.version_file, Some(PathBuf::from("pkg/_version.py")));
}

#[test]
fn test_pyproject_table_in_project_dir() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pyproject.toml"),
        r#"
[project]
name = "mypkg"

[tool.pyrelease]
changelog-file = "HISTORY.md"
build-command = ["python", "-m", "build"]
"#,
    )
    .unwrap();

    let config = load_config_from(dir.path(), None).unwrap();
    assert_eq!(config.changelog_file, Some(PathBuf::from("HISTORY.md")));
    assert_eq!(config.build_command, ["python", "-m", "build"]);
}

#[test]
fn test_pyproject_without_table_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pyproject.toml"), "[project]\nname = \"x\"\n").unwrap();

    let config = load_config_from(dir.path(), None).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_invalid_release_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("pyrelease.toml"), "[release\n").unwrap();

    let err = load_config_from(dir.path(), None).unwrap_err();
    assert!(matches!(err, ReleaseError::Config(_)));
}

#[test]
#[serial]
fn test_load_config_uses_current_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("pyrelease.toml"),
        "[release]\nbranch = \"main\"\n",
    )
    .unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap().branch.as_deref(), Some("main"));
}

#[test]
#[serial]
fn test_load_config_defaults_without_files() {
    let dir = TempDir::new().unwrap();

    let original = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(original).unwrap();

    assert_eq!(config.unwrap(), Config::default());
}

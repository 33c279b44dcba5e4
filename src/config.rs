use crate::error::{ReleaseError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "pyrelease.toml";
pub const PYPROJECT_FILE: &str = "pyproject.toml";

/// Release settings, normally read from the `[release]` section of
/// `pyrelease.toml` or from `[tool.pyrelease]` in `pyproject.toml`.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Python file declaring `__version__ = "X.Y.Z"`
    #[serde(default)]
    pub version_file: Option<PathBuf>,

    /// Changelog receiving a new entry per release
    #[serde(default)]
    pub changelog_file: Option<PathBuf>,

    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch to push; the remote's default branch when unset
    #[serde(default)]
    pub branch: Option<String>,

    #[serde(default = "default_tag_prefix")]
    pub tag_prefix: String,

    /// Commit message template, `{version}` is substituted
    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default = "default_build_command")]
    pub build_command: Vec<String>,

    #[serde(default = "default_upload_command")]
    pub upload_command: Vec<String>,
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_prefix() -> String {
    "v".to_string()
}

fn default_commit_message() -> String {
    "Update version file and changelog for release {version}".to_string()
}

fn default_build_command() -> Vec<String> {
    vec![
        "python".to_string(),
        "setup.py".to_string(),
        "clean".to_string(),
        "bdist_wheel".to_string(),
    ]
}

fn default_upload_command() -> Vec<String> {
    vec![
        "twine".to_string(),
        "upload".to_string(),
        "dist/*".to_string(),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version_file: None,
            changelog_file: None,
            remote: default_remote(),
            branch: None,
            tag_prefix: default_tag_prefix(),
            commit_message: default_commit_message(),
            build_command: default_build_command(),
            upload_command: default_upload_command(),
        }
    }
}

impl Config {
    /// Tag name for a release, e.g. `v1.2.3`
    pub fn tag_for(&self, version: &str) -> String {
        format!("{}{}", self.tag_prefix, version)
    }

    pub fn commit_message_for(&self, version: &str) -> String {
        self.commit_message.replace("{version}", version)
    }
}

#[derive(Debug, Deserialize)]
struct ReleaseFile {
    #[serde(default)]
    release: Config,
}

#[derive(Debug, Deserialize)]
struct PyProjectFile {
    #[serde(default)]
    tool: Option<PyProjectTool>,
}

#[derive(Debug, Deserialize)]
struct PyProjectTool {
    #[serde(default)]
    pyrelease: Option<Config>,
}

/// Parses the contents of a `pyrelease.toml` file.
pub fn parse_release_file(contents: &str) -> Result<Config> {
    let file: ReleaseFile =
        toml::from_str(contents).map_err(|e| ReleaseError::config(e.to_string()))?;
    Ok(file.release)
}

/// Parses the `[tool.pyrelease]` table of a `pyproject.toml` file, if present.
pub fn parse_pyproject(contents: &str) -> Result<Option<Config>> {
    let file: PyProjectFile =
        toml::from_str(contents).map_err(|e| ReleaseError::config(e.to_string()))?;
    Ok(file.tool.and_then(|tool| tool.pyrelease))
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `pyrelease.toml` in the current directory
/// 3. `[tool.pyrelease]` in `pyproject.toml` in the current directory
/// 4. Default configuration if none of the above is found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    load_config_from(Path::new("."), config_path)
}

/// Same as [`load_config`] with an explicit project directory.
pub fn load_config_from(project_dir: &Path, config_path: Option<&str>) -> Result<Config> {
    if let Some(path) = config_path {
        let contents = fs::read_to_string(path)
            .map_err(|e| ReleaseError::config(format!("cannot read {}: {}", path, e)))?;
        tracing::debug!(path, "loaded configuration");
        return parse_release_file(&contents);
    }

    let release_file = project_dir.join(CONFIG_FILE);
    if release_file.exists() {
        let contents = fs::read_to_string(&release_file)?;
        tracing::debug!(path = %release_file.display(), "loaded configuration");
        return parse_release_file(&contents);
    }

    let pyproject = project_dir.join(PYPROJECT_FILE);
    if pyproject.exists() {
        let contents = fs::read_to_string(&pyproject)?;
        if let Some(config) = parse_pyproject(&contents)? {
            tracing::debug!(path = %pyproject.display(), "loaded configuration");
            return Ok(config);
        }
    }

    Ok(Config::default())
}

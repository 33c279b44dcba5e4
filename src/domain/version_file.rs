use crate::error::{ReleaseError, Result};
use regex::{NoExpand, Regex};
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

fn version_marker() -> &'static Regex {
    static VERSION_MARKER: OnceLock<Regex> = OnceLock::new();
    VERSION_MARKER.get_or_init(|| {
        Regex::new(r#"(?m)^__version__\s*=\s*"(.*?)"$"#).expect("version marker pattern is valid")
    })
}

/// Extracts the version string from the first `__version__ = "..."` line.
///
/// # Returns
/// * `Ok(String)` - The quoted version string, verbatim
/// * `Err(VersionMarkerNotFound)` - If no line declares `__version__`
pub fn read_current_version(file_contents: &str) -> Result<String> {
    version_marker()
        .captures(file_contents)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| ReleaseError::marker_not_found("no __version__ line in file contents"))
}

/// Replaces the first `__version__` line with `__version__ = "{new_version}"`.
///
/// All other bytes are left untouched. A file without a marker line is an
/// error rather than a silent no-op.
pub fn write_version(file_contents: &str, new_version: &str) -> Result<String> {
    let marker = version_marker();
    if !marker.is_match(file_contents) {
        return Err(ReleaseError::marker_not_found(
            "no __version__ line to update in file contents",
        ));
    }

    let replacement = format!("__version__ = \"{}\"", new_version);
    Ok(marker
        .replacen(file_contents, 1, NoExpand(&replacement))
        .into_owned())
}

/// Reads the current version from the version file at `path`.
pub fn read_version_file(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    read_current_version(&contents).map_err(|_| {
        ReleaseError::marker_not_found(format!(
            "unable to find __version__ variable defined in {}",
            path.display()
        ))
    })
}

/// Rewrites the version marker in the file at `path`.
///
/// # Returns
/// * `Ok(String)` - The version the file declared before the update
pub fn update_version_file(path: impl AsRef<Path>, new_version: &str) -> Result<String> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let previous = read_current_version(&contents).map_err(|_| {
        ReleaseError::marker_not_found(format!(
            "unable to find __version__ variable defined in {}",
            path.display()
        ))
    })?;
    let updated = write_version(&contents, new_version)?;
    fs::write(path, updated)?;

    tracing::debug!(
        path = %path.display(),
        from = %previous,
        to = new_version,
        "updated version file"
    );
    Ok(previous)
}

use std::fmt;

use crate::domain::Version;

/// Warnings raised before a release touches any file.
/// These are non-fatal issues that the operator must confirm.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Explicit version is not greater than the current one
    VersionNotIncreasing { current: String, requested: String },
    /// Explicit version cannot be compared with the current one
    UncomparableVersion { requested: String, reason: String },
    /// Changelog description is empty
    EmptyDescription { version: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::VersionNotIncreasing { current, requested } => {
                write!(
                    f,
                    "Requested version '{}' is not greater than current version '{}'",
                    requested, current
                )
            }
            BoundaryWarning::UncomparableVersion { requested, reason } => {
                write!(f, "Cannot compare version '{}': {}", requested, reason)
            }
            BoundaryWarning::EmptyDescription { version } => {
                write!(f, "Changelog entry for {} has an empty description", version)
            }
        }
    }
}

/// Checks an explicitly requested version against the current one.
///
/// Returns a warning when the requested version does not move forward, or when
/// either side is not a plain semantic version and cannot be ordered.
pub fn check_requested_version(current: &str, requested: &str) -> Option<BoundaryWarning> {
    let current_semver = match Version::parse(current) {
        Ok(v) => v.to_semver(),
        Err(e) => {
            return Some(BoundaryWarning::UncomparableVersion {
                requested: requested.to_string(),
                reason: format!("current version is not X.Y.Z ({})", e),
            })
        }
    };

    match semver::Version::parse(requested) {
        Ok(requested_semver) if requested_semver <= current_semver => {
            Some(BoundaryWarning::VersionNotIncreasing {
                current: current.to_string(),
                requested: requested.to_string(),
            })
        }
        Ok(_) => None,
        Err(e) => Some(BoundaryWarning::UncomparableVersion {
            requested: requested.to_string(),
            reason: e.to_string(),
        }),
    }
}

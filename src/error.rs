use thiserror::Error;

/// Unified error type for pyrelease operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Malformed version: {0}")]
    MalformedVersion(String),

    #[error("Version marker not found: {0}")]
    VersionMarkerNotFound(String),

    #[error("Version overflow: {0}")]
    Overflow(String),

    #[error("Git working tree is not clean. Commit or stash uncommitted changes before proceeding.")]
    DirtyWorkingTree,

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Remote operation failed: {0}")]
    Remote(String),

    #[error("Release tool failed: {0}")]
    Tool(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in pyrelease
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create a malformed version error with context
    pub fn malformed_version(msg: impl Into<String>) -> Self {
        ReleaseError::MalformedVersion(msg.into())
    }

    /// Create a missing version marker error with context
    pub fn marker_not_found(msg: impl Into<String>) -> Self {
        ReleaseError::VersionMarkerNotFound(msg.into())
    }

    pub fn overflow(msg: impl Into<String>) -> Self {
        ReleaseError::Overflow(msg.into())
    }

    /// Create a remote error with context
    pub fn remote(msg: impl Into<String>) -> Self {
        ReleaseError::Remote(msg.into())
    }

    /// Create a build/upload tool error with context
    pub fn tool(msg: impl Into<String>) -> Self {
        ReleaseError::Tool(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ReleaseError::config("missing version-file");
        assert_eq!(err.to_string(), "Configuration error: missing version-file");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ReleaseError::malformed_version("1.2"), "Malformed version"),
            (
                ReleaseError::marker_not_found("_version.py"),
                "Version marker not found",
            ),
            (ReleaseError::overflow("patch"), "Version overflow"),
            (ReleaseError::remote("x"), "Remote operation failed"),
            (ReleaseError::tool("x"), "Release tool failed"),
            (ReleaseError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_dirty_tree_message_tells_operator_what_to_do() {
        let msg = ReleaseError::DirtyWorkingTree.to_string();
        assert!(msg.contains("not clean"));
        assert!(msg.contains("stash"));
    }

    #[test]
    fn test_error_long_messages() {
        let long_msg = "a".repeat(1000);
        let err = ReleaseError::malformed_version(&long_msg);
        assert!(err.to_string().contains(&long_msg));
    }

    #[test]
    fn test_git_error_conversion() {
        let git_err = git2::Error::from_str("reference not found");
        let err: ReleaseError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }
}

use crate::error::{ReleaseError, Result};
use crate::git::VersionControl;
use std::sync::Mutex;

/// Mock repository for testing without actual git operations
///
/// Every successful call is recorded as a short string such as
/// `"tag v1.0.0"` or `"push-branch origin master"`.
pub struct MockRepository {
    clean: bool,
    default_branch: String,
    fail_on: Option<String>,
    calls: Mutex<Vec<String>>,
}

impl MockRepository {
    /// Create a clean mock repository whose default branch is `master`
    pub fn new() -> Self {
        MockRepository {
            clean: true,
            default_branch: "master".to_string(),
            fail_on: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Report uncommitted changes from `is_tree_clean`
    pub fn with_dirty_tree(mut self) -> Self {
        self.clean = false;
        self
    }

    pub fn with_default_branch(mut self, branch: impl Into<String>) -> Self {
        self.default_branch = branch.into();
        self
    }

    /// Make the operation whose recorded call starts with `operation` fail
    pub fn failing_on(mut self, operation: impl Into<String>) -> Self {
        self.fail_on = Some(operation.into());
        self
    }

    /// Calls recorded so far, in order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: String) -> Result<()> {
        if let Some(fail_on) = &self.fail_on {
            if call.starts_with(fail_on.as_str()) {
                return Err(ReleaseError::remote(format!("mock failure: {}", call)));
            }
        }

        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
        Ok(())
    }
}

impl Default for MockRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for MockRepository {
    fn is_tree_clean(&self) -> Result<bool> {
        Ok(self.clean)
    }

    fn commit_all(&self, message: &str) -> Result<String> {
        self.record(format!("commit {}", message))?;
        Ok("0000000000000000000000000000000000000001".to_string())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        self.record(format!("tag {}", name))
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push-branch {} {}", remote, branch))
    }

    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()> {
        self.record(format!("push-tags {} {}", remote, tag_names.join(" ")))
    }

    fn default_branch(&self, _remote: &str) -> Result<String> {
        Ok(self.default_branch.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_repository_records_calls() {
        let repo = MockRepository::new();

        repo.commit_all("release 1.0.0").unwrap();
        repo.create_tag("v1.0.0").unwrap();
        repo.push_tags("origin", &["v1.0.0"]).unwrap();

        assert_eq!(
            repo.calls(),
            vec!["commit release 1.0.0", "tag v1.0.0", "push-tags origin v1.0.0"]
        );
    }

    #[test]
    fn test_mock_repository_dirty_tree() {
        let repo = MockRepository::new().with_dirty_tree();
        assert!(!repo.is_tree_clean().unwrap());
    }

    #[test]
    fn test_mock_repository_failure() {
        let repo = MockRepository::new().failing_on("tag");

        assert!(repo.create_tag("v1.0.0").is_err());
        assert!(repo.calls().is_empty());
    }

    #[test]
    fn test_mock_repository_default() {
        let repo = MockRepository::default();
        assert!(repo.is_tree_clean().unwrap());
        assert_eq!(repo.default_branch("origin").unwrap(), "master");
    }
}

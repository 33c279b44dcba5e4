//! Version control abstraction layer
//!
//! The release workflow only needs a handful of git capabilities: check the
//! working tree, commit, tag, push and find out which branch to push. They are
//! collected in the [VersionControl] trait so the workflow can run against
//! a real repository or a mock.
//!
//! - [repository::Git2Repository]: real implementation using the `git2` crate
//! - [mock::MockRepository]: records calls, for tests
//!
//! ```rust
//! # use pyrelease::git::VersionControl;
//! # fn example<V: VersionControl>(vcs: &V) -> pyrelease::Result<()> {
//! if vcs.is_tree_clean()? {
//!     vcs.commit_all("Update version file and changelog for release 1.2.4")?;
//!     vcs.create_tag("v1.2.4")?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Git operations used by a release
///
/// All implementors must be `Send + Sync`. Failures are reported through
/// [crate::error::ReleaseError] and are never retried by the caller.
pub trait VersionControl: Send + Sync {
    /// Check that no tracked file has uncommitted changes
    ///
    /// Untracked and ignored files do not make the tree dirty.
    ///
    /// # Returns
    /// * `Ok(true)` - Worktree and index match HEAD for every tracked file
    /// * `Ok(false)` - At least one tracked file is modified, staged or deleted
    /// * `Err` - If the status cannot be read
    fn is_tree_clean(&self) -> Result<bool>;

    /// Stage all modified tracked files and commit them on HEAD
    ///
    /// # Returns
    /// * `Ok(String)` - Id of the new commit
    /// * `Err` - If staging or committing fails (e.g. no user identity)
    fn commit_all(&self, message: &str) -> Result<String>;

    /// Create a lightweight tag at HEAD
    ///
    /// # Returns
    /// * `Err` - If the tag already exists or HEAD cannot be resolved
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push the checked-out commit (HEAD) to `branch` on `remote`
    ///
    /// The release commit is made on HEAD, so HEAD is what gets pushed even
    /// when the local branch of the same name is somewhere else.
    fn push_branch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Push tags to `remote`
    fn push_tags(&self, remote: &str, tag_names: &[&str]) -> Result<()>;

    /// Branch a release should be pushed to
    ///
    /// Uses the remote's `HEAD` symbolic reference when it is known locally,
    /// otherwise the currently checked out branch.
    fn default_branch(&self, remote: &str) -> Result<String>;
}

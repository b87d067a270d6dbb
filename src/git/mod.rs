//! Branch name lookup
//!
//! The hook only needs one thing from git: the short name of the branch
//! `HEAD` points at. That query sits behind the [BranchProvider] trait so the
//! controller can be driven by a real repository or by a test double.
//!
//! - [repository::Git2Repository]: reads `HEAD` through the `git2` crate
//! - [mock::MockBranchProvider]: returns a fixed branch, or fails as if detached
//!
//! ```rust
//! # use issue_key_hook::git::{BranchProvider, MockBranchProvider};
//! let provider = MockBranchProvider::attached("ABC-123-fix-bug");
//! let branch = provider.current_branch().unwrap();
//! assert_eq!(branch.as_str(), "ABC-123-fix-bug");
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockBranchProvider;
pub use repository::Git2Repository;

use crate::domain::BranchName;
use crate::error::Result;

/// Source of the currently checked-out branch
pub trait BranchProvider {
    /// Short name of the branch `HEAD` points at
    ///
    /// # Returns
    /// * `Ok(BranchName)` - The branch name with `refs/heads/` stripped
    /// * `Err(IssueKeyError::DetachedHead)` - If `HEAD` does not point at a branch
    /// * `Err` - If the repository cannot be read
    fn current_branch(&self) -> Result<BranchName>;
}

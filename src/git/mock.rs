use crate::domain::BranchName;
use crate::error::{IssueKeyError, Result};
use crate::git::BranchProvider;

/// Mock branch provider for testing without a repository
pub struct MockBranchProvider {
    branch: Option<String>,
}

impl MockBranchProvider {
    /// A provider whose `HEAD` points at `branch`
    pub fn attached(branch: impl Into<String>) -> Self {
        MockBranchProvider {
            branch: Some(branch.into()),
        }
    }

    /// A provider whose `HEAD` is detached
    pub fn detached() -> Self {
        MockBranchProvider { branch: None }
    }
}

impl BranchProvider for MockBranchProvider {
    fn current_branch(&self) -> Result<BranchName> {
        self.branch
            .as_deref()
            .map(BranchName::new)
            .ok_or(IssueKeyError::DetachedHead)
    }
}

use crate::domain::BranchName;
use crate::error::{IssueKeyError, Result};
use git2::Repository as Git2Repo;
use std::path::Path;

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open the repository the way git hooks expect, honouring `GIT_DIR`
    /// and friends before falling back to discovery from the working directory
    pub fn open_from_env() -> Result<Self> {
        let repo = Git2Repo::open_from_env()?;

        Ok(Git2Repository { repo })
    }

    /// Open or discover a git repository from an explicit path
    ///
    /// For callers that inspect a checkout other than the one git runs the
    /// hook in, such as scratch repositories in tests.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    ///
    /// For callers that already opened or initialised the repository themselves.
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

impl super::BranchProvider for Git2Repository {
    fn current_branch(&self) -> Result<BranchName> {
        // HEAD is symbolic while a branch is checked out, even an unborn one
        let head = self.repo.find_reference("HEAD")?;

        match head.symbolic_target() {
            Some(target) => Ok(BranchName::from_ref(target)),
            None => Err(IssueKeyError::DetachedHead),
        }
    }
}

use std::fmt;

/// Prefix carried by every local branch reference
pub const LOCAL_BRANCH_PREFIX: &str = "refs/heads/";

/// Short name of the currently checked-out branch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchName {
    name: String,
}

impl BranchName {
    /// Create a branch name from its short form (e.g. "ABC-123-fix-bug")
    pub fn new(name: impl Into<String>) -> Self {
        BranchName { name: name.into() }
    }

    /// Build a branch name from a full reference name, stripping `refs/heads/`
    ///
    /// References outside `refs/heads/` are kept verbatim.
    pub fn from_ref(reference: &str) -> Self {
        let short = reference
            .strip_prefix(LOCAL_BRANCH_PREFIX)
            .unwrap_or(reference);
        BranchName::new(short)
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for BranchName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

use std::fmt;

use crate::error::IssueKeyError;

/// Reasons the hook stops before touching the commit message.
/// Non-fatal unless required mode is on, in which case they become errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Branch is exempt from the issue key requirement
    IgnoredBranch { branch: String },
    /// Branch name carries no issue key
    NoIssueKey { branch: String, pattern: String },
}

impl SkipReason {
    /// The error reported for this reason when an issue key is required
    pub fn into_error(self) -> IssueKeyError {
        match self {
            SkipReason::IgnoredBranch { branch } => IssueKeyError::IgnoredBranch { branch },
            SkipReason::NoIssueKey { branch, pattern } => {
                IssueKeyError::NoIssueKey { branch, pattern }
            }
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::IgnoredBranch { branch } => {
                write!(
                    f,
                    "Issue key check skipped: branch '{}' is on the ignore list",
                    branch
                )
            }
            SkipReason::NoIssueKey { branch, pattern } => {
                write!(
                    f,
                    "No issue key found in branch '{}' (pattern: {})",
                    branch, pattern
                )
            }
        }
    }
}

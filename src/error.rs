use thiserror::Error;

/// Unified error type for issue-key-hook operations
#[derive(Error, Debug)]
pub enum IssueKeyError {
    #[error("Unable to determine the current branch. Are you in detached HEAD state?")]
    DetachedHead,

    #[error(
        "Issue key is required, but branch '{branch}' is on the ignore list. \
         Use a branch name that includes an issue key."
    )]
    IgnoredBranch { branch: String },

    #[error(
        "Issue key is required, but none was found in branch '{branch}' \
         (pattern: {pattern}). Include a valid issue key in the branch name."
    )]
    NoIssueKey { branch: String, pattern: String },

    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in issue-key-hook
pub type Result<T> = std::result::Result<T, IssueKeyError>;

impl IssueKeyError {
    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        IssueKeyError::Config(msg.into())
    }

    /// Wrap a regex compilation failure together with the offending pattern
    pub fn invalid_pattern(pattern: impl Into<String>, source: regex::Error) -> Self {
        IssueKeyError::InvalidPattern {
            pattern: pattern.into(),
            source,
        }
    }
}

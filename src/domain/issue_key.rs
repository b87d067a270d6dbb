use std::fmt;

use regex::Regex;

use crate::error::{IssueKeyError, Result};

/// Two or more uppercase letters, a hyphen, one or more digits (e.g. "ABC-123")
pub const DEFAULT_ISSUE_KEY_PATTERN: &str = "[A-Z][A-Z]+-[0-9]+";

/// Issue tracker key extracted from a branch name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueKey(String);

impl IssueKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for IssueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compiled issue key pattern
///
/// The search is unanchored: the key may appear anywhere in the branch name,
/// and only the leftmost match is returned.
#[derive(Debug, Clone)]
pub struct IssueKeyPattern {
    regex: Regex,
}

impl IssueKeyPattern {
    /// Compile a pattern, reporting the offending text on failure
    pub fn new(pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|e| IssueKeyError::invalid_pattern(pattern, e))?;
        Ok(IssueKeyPattern { regex })
    }

    /// Return the first (leftmost) key in `branch`, if any
    pub fn extract(&self, branch: &str) -> Option<IssueKey> {
        self.regex
            .find(branch)
            .map(|m| IssueKey(m.as_str().to_string()))
    }

    /// The pattern source as configured
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl Default for IssueKeyPattern {
    fn default() -> Self {
        IssueKeyPattern {
            regex: Regex::new(DEFAULT_ISSUE_KEY_PATTERN).expect("default issue key pattern"),
        }
    }
}

use std::collections::BTreeSet;

use regex::Regex;

use crate::error::{IssueKeyError, Result};

/// Long-lived branches that never carry an issue key
pub const DEFAULT_IGNORED_BRANCHES: &[&str] =
    &["dev", "develop", "master", "main", "stage", "staging"];

/// Regex form of [`DEFAULT_IGNORED_BRANCHES`]: `^(dev|develop|...)$`
pub fn default_ignore_pattern() -> String {
    format!("^({})$", DEFAULT_IGNORED_BRANCHES.join("|"))
}

/// Which branches are exempt from the issue key requirement
#[derive(Debug, Clone)]
pub enum IgnoreSpec {
    /// Branch is ignored iff it equals one of these names
    ExactSet(BTreeSet<String>),
    /// Branch is ignored iff the pattern matches at the start of the name
    Pattern(Regex),
}

impl IgnoreSpec {
    /// Exact-set policy from a list of literal branch names
    pub fn exact<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IgnoreSpec::ExactSet(names.into_iter().map(Into::into).collect())
    }

    /// Pattern policy; the match is anchored at the start of the branch name
    pub fn pattern(pattern: &str) -> Result<Self> {
        let anchored = format!("^(?:{})", pattern);
        let regex =
            Regex::new(&anchored).map_err(|e| IssueKeyError::invalid_pattern(pattern, e))?;
        Ok(IgnoreSpec::Pattern(regex))
    }

    /// Whether `branch` is exempt from the issue key requirement
    pub fn matches(&self, branch: &str) -> bool {
        match self {
            IgnoreSpec::ExactSet(names) => names.contains(branch),
            IgnoreSpec::Pattern(regex) => regex.is_match(branch),
        }
    }
}

impl Default for IgnoreSpec {
    fn default() -> Self {
        IgnoreSpec::pattern(&default_ignore_pattern()).expect("default ignore pattern")
    }
}

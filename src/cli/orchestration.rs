//! Hook workflow orchestration
//!
//! Runs one commit-msg invocation: resolve the branch, apply the ignore and
//! issue key rules, then rewrite the message file when needed. Console output
//! and exit codes are left to the caller, so the workflow can be driven
//! without clap.

use crate::commit_file::CommitMessageFile;
use crate::config::Settings;
use crate::domain::{compose, IssueKey};
use crate::error::Result;
use crate::git::BranchProvider;
use crate::skip::SkipReason;

/// How a hook invocation ended
#[derive(Debug, Clone, PartialEq)]
pub enum HookOutcome {
    /// Branch was ignored or had no key, and no key is required
    Skipped(SkipReason),

    /// Key found but rewriting is disabled; the file was not read
    KeyFound { key: IssueKey },

    /// The message file now holds `message`
    Written { key: IssueKey, message: String },

    /// Message is empty or already mentions the key
    Unchanged { key: IssueKey },
}

/// Main hook workflow
///
/// 1. Resolve the current branch (a detached `HEAD` aborts)
/// 2. Stop if the branch is ignored
/// 3. Extract the issue key, stop if there is none
/// 4. Prefix the commit message with the key unless it is empty or already has it
///
/// In required mode the two stopping points are errors instead of
/// [HookOutcome::Skipped].
///
/// # Arguments
///
/// * `provider` - Source of the current branch name
/// * `file` - The commit message file passed by git
/// * `settings` - Resolved configuration
pub fn run_hook<P: BranchProvider>(
    provider: &P,
    file: &CommitMessageFile,
    settings: &Settings,
) -> Result<HookOutcome> {
    let branch = provider.current_branch()?;

    let stop = |reason: SkipReason| {
        if settings.required {
            Err(reason.into_error())
        } else {
            Ok(HookOutcome::Skipped(reason))
        }
    };

    if settings.ignore.matches(branch.as_str()) {
        return stop(SkipReason::IgnoredBranch {
            branch: branch.to_string(),
        });
    }

    let key = match settings.issue_pattern.extract(branch.as_str()) {
        Some(key) => key,
        None => {
            return stop(SkipReason::NoIssueKey {
                branch: branch.to_string(),
                pattern: settings.issue_pattern.as_str().to_string(),
            })
        }
    };

    if !settings.add_issue_key {
        return Ok(HookOutcome::KeyFound { key });
    }

    let raw = file.read()?;
    match compose(&raw, &key) {
        Some(message) => {
            file.write(&message)?;
            Ok(HookOutcome::Written { key, message })
        }
        None => Ok(HookOutcome::Unchanged { key }),
    }
}

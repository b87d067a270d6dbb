//! Command line surface of the hook

pub mod orchestration;

pub use orchestration::{run_hook, HookOutcome};

use clap::Parser;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(
    name = "issue-key-hook",
    version,
    about = "commit-msg hook that prefixes the commit message with the issue key from the branch name",
    after_help = "A detached HEAD (e.g. rewording a commit during a rebase) always fails the hook, even without --required."
)]
pub struct Args {
    #[arg(help = "Path to the commit message file")]
    pub commit_msg_file: String,

    #[arg(short, long, help = "Custom configuration file path")]
    pub config: Option<String>,

    #[arg(short, long, help = "Issue key pattern")]
    pub pattern: Option<String>,

    #[arg(
        short,
        long,
        help = "Fail if the branch is ignored or its name has no issue key"
    )]
    pub required: bool,

    #[arg(
        short,
        long,
        alias = "ignore_pattern",
        help = "Pattern matching the ignored branch names"
    )]
    pub ignore_pattern: Option<String>,

    #[arg(
        long = "ignore-branch",
        value_name = "NAME",
        conflicts_with = "ignore_pattern",
        help = "Ignore this exact branch name (repeatable)"
    )]
    pub ignore_branches: Vec<String>,

    #[arg(
        long,
        alias = "add_issue_key",
        help = "Prefix the commit message with the issue key"
    )]
    pub add_issue_key: bool,

    #[arg(
        long,
        conflicts_with = "add_issue_key",
        help = "Only check the branch name, never rewrite the message"
    )]
    pub no_add_issue_key: bool,

    #[arg(short, long, help = "Print every decision the hook makes")]
    pub verbose: bool,
}

impl Args {
    /// Layer the command line flags over a loaded configuration
    pub fn apply_to(&self, config: &mut Config) {
        if let Some(pattern) = &self.pattern {
            config.pattern = pattern.clone();
        }
        if self.required {
            config.required = true;
        }
        if let Some(pattern) = &self.ignore_pattern {
            config.ignore.pattern = Some(pattern.clone());
            config.ignore.branches = None;
        }
        if !self.ignore_branches.is_empty() {
            config.ignore.branches = Some(self.ignore_branches.clone());
            config.ignore.pattern = None;
        }
        if self.add_issue_key {
            config.add_issue_key = true;
        }
        if self.no_add_issue_key {
            config.add_issue_key = false;
        }
        if self.verbose {
            config.verbose = true;
        }
    }
}

//! Domain logic - pure rules over branch names and commit messages, independent of git

pub mod branch;
pub mod ignore;
pub mod issue_key;
pub mod message;

pub use branch::BranchName;
pub use ignore::IgnoreSpec;
pub use issue_key::{IssueKey, IssueKeyPattern};
pub use message::{compose, UserMessage};

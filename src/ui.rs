//! Console output for the hook.
//!
//! Git shows hook output inline with `git commit`, so everything here is a
//! single styled line. Errors and warnings go to stderr.

use console::style;

use crate::skip::SkipReason;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").for_stderr().red().bold(), message);
}

/// Format and print a warning message in yellow.
pub fn display_warning(message: &str) {
    eprintln!("{} {}", style("⚠ WARNING:").for_stderr().yellow(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Report why the hook left the commit message alone.
pub fn display_skip(reason: &SkipReason) {
    display_warning(&reason.to_string());
}

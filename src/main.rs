use anyhow::Result;
use clap::Parser;

use issue_key_hook::cli::{run_hook, Args, HookOutcome};
use issue_key_hook::commit_file::CommitMessageFile;
use issue_key_hook::config;
use issue_key_hook::git::Git2Repository;
use issue_key_hook::ui;

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration, then let flags win
    let mut config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };
    args.apply_to(&mut config);

    let settings = match config.settings() {
        Ok(settings) => settings,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let repo = match Git2Repository::open_from_env() {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let file = CommitMessageFile::new(&args.commit_msg_file);

    match run_hook(&repo, &file, &settings) {
        Ok(outcome) => {
            if config.verbose {
                report(&outcome);
            }
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}

fn report(outcome: &HookOutcome) {
    match outcome {
        HookOutcome::Skipped(reason) => ui::display_skip(reason),
        HookOutcome::KeyFound { key } => {
            ui::display_success(&format!("Found issue key {} in branch name", key));
        }
        HookOutcome::Written { key, .. } => {
            ui::display_success(&format!("Prefixed commit message with {}", key));
        }
        HookOutcome::Unchanged { key } => {
            ui::display_status(&format!(
                "Commit message is empty or already mentions {}; left unchanged",
                key
            ));
        }
    }
}

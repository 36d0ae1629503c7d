//! Hook command.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use smartchangelog_git::Repository;

/// Arguments for the hook command.
#[derive(Debug, Args)]
pub struct HookArgs {
    #[command(subcommand)]
    pub action: HookAction,
}

/// Hook actions.
#[derive(Debug, Subcommand)]
pub enum HookAction {
    /// Install the commit-msg hook checking every new commit message
    Install,

    /// Remove the commit-msg hook
    Uninstall,
}

/// Runs the hook command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: HookArgs) -> Result<()> {
    let repo = Repository::discover().context("failed to open git repository")?;

    match args.action {
        HookAction::Install => {
            let exe = std::env::current_exe().context("failed to locate smartchangelog binary")?;
            let path = repo
                .install_commit_msg_hook(&exe)
                .context("failed to install commit-msg hook")?;
            println!("commit-msg hook installed in {}", path.display());
        }
        HookAction::Uninstall => {
            match repo
                .uninstall_commit_msg_hook()
                .context("failed to remove commit-msg hook")?
            {
                Some(path) => println!("commit-msg hook removed from {}", path.display()),
                None => println!("no commit-msg hook installed"),
            }
        }
    }

    Ok(())
}

//! CLI definition.

use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Check commit messages and generate changelogs from Git history.
#[derive(Debug, Parser)]
#[command(name = "smartchangelog")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a changelog report from the commit history
    Changelog(commands::changelog::ChangelogArgs),

    /// Check that a commit message follows the convention
    Check(commands::check::CheckArgs),

    /// Install or remove the commit-msg hook
    Hook(commands::hook::HookArgs),

    /// Write a default smartchangelog configuration
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<ExitCode> {
        match self.command {
            Commands::Changelog(args) => commands::changelog::run(args).map(|()| ExitCode::SUCCESS),
            Commands::Check(args) => commands::check::run(args),
            Commands::Hook(args) => commands::hook::run(args).map(|()| ExitCode::SUCCESS),
            Commands::Init(args) => commands::init::run(args).map(|()| ExitCode::SUCCESS),
        }
    }
}

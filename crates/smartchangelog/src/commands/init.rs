//! Initialize command.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::info;

use smartchangelog_config::{CONFIG_FILE_NAME, Config};

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

/// Writes the default configuration into `dir`.
fn write_default_config(dir: &Path, force: bool) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    let content = Config::default().to_toml()?;
    std::fs::write(&path, content)
        .with_context(|| format!("failed to write {}", path.display()))?;

    info!(path = %path.display(), "wrote configuration");
    println!("Created {}", path.display());
    Ok(())
}

/// Runs the init command.
#[allow(clippy::needless_pass_by_value)]
pub fn run(args: InitArgs) -> Result<()> {
    let current_dir = std::env::current_dir().context("failed to read current directory")?;
    write_default_config(&current_dir, args.force)
}

//! Changelog command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use smartchangelog_commit::MessageRules;
use smartchangelog_core::{Changelog, Criterion, render};
use smartchangelog_git::{LogSource, Repository};

/// Arguments for the changelog command.
#[derive(Debug, Args)]
pub struct ChangelogArgs {
    /// Revision range, as understood by `git log` (default: HEAD)
    #[arg(short, long)]
    pub range: Option<String>,

    /// Commit fields to group by, outermost first
    #[arg(short, long, num_args = 1.., value_name = "FIELD")]
    pub groupby: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Reads the log, groups its commits and renders the report.
fn generate(
    source: &dyn LogSource,
    range: Option<&str>,
    groupby: &[String],
    rules: &MessageRules,
) -> Result<String> {
    let criteria = Criterion::parse_all(groupby)?;
    let log = source.log(range).context("failed to read git log")?;
    let changelog = Changelog::parse_with(&log, rules).context("failed to parse git log")?;

    info!(commits = changelog.len(), ?criteria, "generating report");
    Ok(render(&changelog.group_by(&criteria)))
}

/// Runs the changelog command.
pub fn run(args: ChangelogArgs) -> Result<()> {
    let config = super::load_config()?;
    let repo = Repository::discover().context("failed to open git repository")?;

    let range = args.range.or(config.changelog.range.clone());
    let groupby = if args.groupby.is_empty() {
        &config.changelog.groupby
    } else {
        &args.groupby
    };

    let report = generate(
        &repo,
        range.as_deref(),
        groupby,
        &super::message_rules(&config),
    )?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &report)
                .with_context(|| format!("failed to write changelog to {}", path.display()))?;
            info!(path = %path.display(), "wrote changelog");
        }
        None => print!("{report}"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartchangelog_core::ChangelogError;
    use smartchangelog_git::{GitError, GitResult};
    use std::cell::RefCell;

    const LOG: &str = "commit a6f79b56acbb9e58327ecf91feed611bb614927f
Author: Jane <jane@example.com>
Date:   2017-03-23 17:30:56 +0100

    feat(ui): add button

commit 597ec5676235e18f5a607726603df944da5be7fe
Author: Jane <jane@example.com>
Date:   2017-03-22 15:28:45 +0100

    fix(api): handle timeout
";

    /// Serves a fixed log and records the requested range.
    #[derive(Default)]
    struct FixedLog {
        requested: RefCell<Option<String>>,
    }

    impl LogSource for FixedLog {
        fn log(&self, range: Option<&str>) -> GitResult<String> {
            *self.requested.borrow_mut() = range.map(str::to_string);
            match range {
                Some("broken") => Err(GitError::InvalidRange("broken".to_string())),
                _ => Ok(LOG.to_string()),
            }
        }
    }

    #[test]
    fn test_generate_flat() {
        let source = FixedLog::default();
        let report = generate(&source, None, &[], &MessageRules::default()).unwrap();

        // Oldest first once grouped
        let fix = report.find("handle timeout").unwrap();
        let feat = report.find("add button").unwrap();
        assert!(fix < feat);
        assert!(!report.contains('#'));
    }

    #[test]
    fn test_generate_grouped() {
        let source = FixedLog::default();
        let groupby = vec!["type".to_string()];
        let report = generate(&source, None, &groupby, &MessageRules::default()).unwrap();

        assert!(report.starts_with("# type: feat\n\n* subject: add button\n"));
        assert!(report.contains("# type: fix\n\n* subject: handle timeout\n"));
    }

    #[test]
    fn test_generate_passes_range() {
        let source = FixedLog::default();
        generate(&source, Some("v1.0.0..HEAD"), &[], &MessageRules::default()).unwrap();
        assert_eq!(source.requested.borrow().as_deref(), Some("v1.0.0..HEAD"));
    }

    #[test]
    fn test_generate_rejects_unknown_field_before_reading_log() {
        let source = FixedLog::default();
        let groupby = vec!["color".to_string()];
        let err = generate(&source, Some("HEAD"), &groupby, &MessageRules::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ChangelogError>(),
            Some(ChangelogError::UnknownField(name)) if name == "color"
        ));
        assert!(source.requested.borrow().is_none());
    }

    #[test]
    fn test_generate_reports_invalid_range() {
        let source = FixedLog::default();
        let err = generate(&source, Some("broken"), &[], &MessageRules::default()).unwrap_err();
        assert!(err.to_string().contains("failed to read git log"));
    }
}

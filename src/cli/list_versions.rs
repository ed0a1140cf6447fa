//! List-versions CLI command

use crate::models::{ChangelogDocument, DatePolicy, ToolConfig, VersionEntry};
use crate::{Context, Result};
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ListVersionsArgs {
    /// Path to the changelog file
    pub changelog_path: PathBuf,

    /// Output as a JSON array
    #[arg(short, long)]
    pub json: bool,

    /// How to handle headings with an invalid date (overrides the config file)
    #[arg(long, value_enum)]
    pub invalid_dates: Option<DatePolicy>,
}

pub fn run(args: &ListVersionsArgs, config: &ToolConfig) -> Result<()> {
    let stdout = io::stdout();
    run_impl(args, config, &mut stdout.lock())
}

fn run_impl(args: &ListVersionsArgs, config: &ToolConfig, out: &mut impl Write) -> Result<()> {
    let policy = args.invalid_dates.unwrap_or(config.invalid_dates);
    let document = ChangelogDocument::read(&args.changelog_path)?;
    let entries = document
        .list_versions(policy)
        .with_context(|| format!("Failed to list versions in {}", args.changelog_path.display()))?;

    write_entries(&entries, args.json, out)
}

fn write_entries(entries: &[VersionEntry], json: bool, out: &mut impl Write) -> Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(entries)?)?;
    } else {
        for entry in entries {
            writeln!(out, "{}", entry)?;
        }
    }
    Ok(())
}

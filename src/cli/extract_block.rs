//! Extract-block CLI command

use crate::models::ChangelogDocument;
use crate::Result;
use clap::Args;
use std::io::{self, Write};
use std::path::PathBuf;

/// Exit status used by `--strict` when the version has no heading
pub const EXIT_VERSION_NOT_FOUND: i32 = 2;

#[derive(Args, Debug)]
pub struct ExtractBlockArgs {
    /// Path to the changelog file
    pub changelog_path: PathBuf,

    /// Version to extract (e.g. "1.2.3", "v1.2.3", "v1.0.0-alpha+123")
    pub version: String,

    /// Exit with status 2 when the version is not found
    #[arg(long)]
    pub strict: bool,
}

/// Run the command, returning the process exit status
pub fn run(args: &ExtractBlockArgs) -> Result<i32> {
    let stdout = io::stdout();
    run_impl(args, &mut stdout.lock())
}

fn run_impl(args: &ExtractBlockArgs, out: &mut impl Write) -> Result<i32> {
    let document = ChangelogDocument::read(&args.changelog_path)?;

    match document.extract_block(&args.version) {
        Some(block) => {
            writeln!(out, "{}", block.text)?;
            Ok(0)
        }
        None => {
            tracing::info!(version = %args.version, "version not found in changelog");
            writeln!(out)?;
            Ok(if args.strict { EXIT_VERSION_NOT_FOUND } else { 0 })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_changelog(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("CHANGELOG.md");
        std::fs::write(
            &path,
            "# Changelog\n\n## [v1.1.0] - 2024-07-01\n- b\n\n## [1.0.0] - 2024-06-01\n- a\n",
        )
        .unwrap();
        path
    }

    fn args(path: PathBuf, version: &str, strict: bool) -> ExtractBlockArgs {
        ExtractBlockArgs {
            changelog_path: path,
            version: version.to_string(),
            strict,
        }
    }

    #[test]
    fn test_run_prints_block() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_changelog(&temp_dir);

        let mut out = Vec::new();
        let code = run_impl(&args(path, "1.1.0", false), &mut out).unwrap();

        assert_eq!(code, 0);
        assert_eq!(String::from_utf8(out).unwrap(), "## [v1.1.0] - 2024-07-01\n- b\n");
    }

    #[test]
    fn test_run_missing_version_prints_empty_line() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_changelog(&temp_dir);

        let mut out = Vec::new();
        let code = run_impl(&args(path, "9.9.9", false), &mut out).unwrap();

        assert_eq!(code, 0);
        assert_eq!(out, b"\n");
    }

    #[test]
    fn test_run_missing_version_strict() {
        let temp_dir = TempDir::new().unwrap();
        let path = write_changelog(&temp_dir);

        let mut out = Vec::new();
        let code = run_impl(&args(path, "9.9.9", true), &mut out).unwrap();

        assert_eq!(code, EXIT_VERSION_NOT_FOUND);
    }

    #[test]
    fn test_run_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut out = Vec::new();
        let result = run_impl(&args(temp_dir.path().join("nope.md"), "1.0.0", false), &mut out);

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Changelog not found"));
        assert!(out.is_empty());
    }
}

//! Changelog data models
//!
//! A changelog is held as normalized text. Headings and blocks borrow from
//! that text; only [`VersionEntry`] owns its data so it can outlive the
//! document and be serialized.

use crate::error::ChangelogError;
use crate::models::config::DatePolicy;
use crate::parser;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::path::{Path, PathBuf};

/// Date format used by release headings
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A changelog loaded into memory
#[derive(Debug, Clone)]
pub struct ChangelogDocument {
    /// Where the document was read from, if it came from disk
    path: Option<PathBuf>,
    /// Normalized content (no BOM, LF line endings)
    text: String,
}

impl ChangelogDocument {
    /// Build a document from raw text
    pub fn new(content: &str) -> Self {
        Self {
            path: None,
            text: parser::normalize_content(content),
        }
    }

    /// Read a changelog from disk
    ///
    /// # Errors
    /// * `ResourceNotFound` if the path does not exist
    /// * `Read` for any other I/O failure, including invalid UTF-8
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ChangelogError> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| ChangelogError::from_io(path, e))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "read changelog");

        Ok(Self {
            path: Some(path.to_path_buf()),
            ..Self::new(&content)
        })
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// All release headings in document order
    pub fn headings(&self) -> Vec<VersionHeading<'_>> {
        parser::scan_headings(&self.text)
    }

    /// Find the block for `version`; `None` when no heading matches
    pub fn extract_block(&self, version: &str) -> Option<VersionBlock<'_>> {
        parser::extract_block(&self.text, version)
    }

    /// List every version with its release date, most recent first
    pub fn list_versions(&self, policy: DatePolicy) -> Result<Vec<VersionEntry>, ChangelogError> {
        parser::list_versions(&self.text, policy)
    }
}

/// One release heading line, e.g. `## [v1.2.3](https://...) - 2024-06-01`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionHeading<'a> {
    /// Version token as written, `v` prefix and suffix included
    pub raw_version: &'a str,
    /// Link target between parentheses, if any
    pub link: Option<&'a str>,
    /// Date text in `YYYY-MM-DD` shape (not yet validated as a calendar date)
    pub date: &'a str,
    /// The full heading line, without its line terminator
    pub line: &'a str,
    /// Byte offset of the start of the heading line
    pub start: usize,
}

impl<'a> VersionHeading<'a> {
    /// Version with a single leading `v`/`V` removed
    pub fn normalized_version(&self) -> &'a str {
        parser::strip_version_prefix(self.raw_version)
    }

    /// Compare against an already normalized version, ignoring case
    pub fn matches_version(&self, normalized: &str) -> bool {
        self.normalized_version().to_lowercase() == normalized.to_lowercase()
    }
}

/// A heading together with everything up to the next heading
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionBlock<'a> {
    pub heading: VersionHeading<'a>,
    /// Byte span in the document: heading start to next heading start (or EOF)
    pub span: Range<usize>,
    /// Block content with surrounding whitespace trimmed
    pub text: &'a str,
}

/// A released version and its date, as listed by the index builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    /// Version exactly as written in the heading
    pub version: String,
    pub date: NaiveDate,
}

impl VersionEntry {
    pub fn new(version: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            version: version.into(),
            date,
        }
    }

    /// Date rendered back as `YYYY-MM-DD`
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

impl fmt::Display for VersionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.version, self.date_string())
    }
}

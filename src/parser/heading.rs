//! Release heading grammar
//!
//! A release heading is a level-2 Markdown line of the form:
//!
//! ```text
//! ## [v1.0.0-rc+251112](https://example.com/releases/v1.0.0) - 2024-06-01
//! ```
//!
//! - `##` at column 0, exactly two of them, then at least one whitespace
//! - a bracketed version token: optional `v`/`V`, `MAJOR.MINOR.PATCH`,
//!   optional `-suffix` of word characters, dots and plus signs
//! - an optional `(link)`
//! - a `-` separator and a `YYYY-MM-DD` date
//!
//! Anything after the date is allowed and left alone. Lines are tokenized
//! one at a time so block boundaries can be derived from heading offsets.

use crate::models::VersionHeading;
use regex::Regex;
use std::sync::LazyLock;

static VERSION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^v?[0-9]+\.[0-9]+\.[0-9]+(?:-[\w.+]+)?$").unwrap()
});

/// Whether `token` is a version as it may appear inside heading brackets
pub fn is_version_token(token: &str) -> bool {
    VERSION_TOKEN.is_match(token)
}

/// Strip a single leading `v`/`V` from a version string
pub fn strip_version_prefix(version: &str) -> &str {
    version
        .strip_prefix(['v', 'V'])
        .unwrap_or(version)
}

/// Normalize a user-supplied version for comparison against headings
pub fn normalize_version_query(version: &str) -> &str {
    strip_version_prefix(version.trim())
}

/// Parse a single line (without its terminator) as a release heading
///
/// Returns `(raw_version, link, date)` when the line matches the grammar.
pub fn parse_heading_line(line: &str) -> Option<(&str, Option<&str>, &str)> {
    let rest = line.strip_prefix("##")?;
    if !rest.starts_with(char::is_whitespace) {
        // `###` and `##[` are not release headings
        return None;
    }

    let inner = rest.trim_start().strip_prefix('[')?;
    let close = inner.find(']')?;
    let version = inner[..close].trim();
    if !is_version_token(version) {
        return None;
    }

    let mut rest = inner[close + 1..].trim_start();
    let mut link = None;
    if let Some(after_paren) = rest.strip_prefix('(') {
        let end = after_paren.find(')')?;
        link = Some(&after_paren[..end]);
        rest = after_paren[end + 1..].trim_start();
    }

    let rest = rest.strip_prefix('-')?.trim_start();
    let date = rest.get(..10)?;
    if !is_date_shaped(date) {
        return None;
    }
    if rest[10..].starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }

    Some((version, link, date))
}

/// `DDDD-DD-DD` with ASCII digits; calendar validity is checked later
fn is_date_shaped(date: &str) -> bool {
    let bytes = date.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Tokenize every release heading in `document`, in document order
pub fn scan_headings(document: &str) -> Vec<VersionHeading<'_>> {
    let mut headings = Vec::new();
    let mut offset = 0;

    for raw_line in document.split_inclusive('\n') {
        let start = offset;
        offset += raw_line.len();

        let line = raw_line
            .strip_suffix('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .unwrap_or(raw_line);

        if let Some((raw_version, link, date)) = parse_heading_line(line) {
            headings.push(VersionHeading {
                raw_version,
                link,
                date,
                line,
                start,
            });
        }
    }

    tracing::debug!(count = headings.len(), "scanned release headings");
    headings
}

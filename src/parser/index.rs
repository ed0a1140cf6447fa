//! Version index: every release heading with its date, newest first

use super::heading::scan_headings;
use crate::error::ChangelogError;
use crate::models::{DatePolicy, VersionEntry, DATE_FORMAT};
use chrono::NaiveDate;

/// List all versions with their release dates
///
/// Entries are sorted by date, most recent first. Entries sharing a date keep
/// their document order. Versions are returned as written (`v` prefix kept).
///
/// # Errors
/// With [`DatePolicy::Abort`], the first heading whose date is not a real
/// calendar date fails the whole call with `MalformedDate`. With
/// [`DatePolicy::Skip`] such headings are logged and left out.
pub fn list_versions(
    document: &str,
    policy: DatePolicy,
) -> Result<Vec<VersionEntry>, ChangelogError> {
    let mut entries = Vec::new();

    for heading in scan_headings(document) {
        match NaiveDate::parse_from_str(heading.date, DATE_FORMAT) {
            Ok(date) => entries.push(VersionEntry::new(heading.raw_version, date)),
            Err(source) => match policy {
                DatePolicy::Abort => {
                    return Err(ChangelogError::MalformedDate {
                        version: heading.raw_version.to_string(),
                        date: heading.date.to_string(),
                        source,
                    });
                }
                DatePolicy::Skip => {
                    tracing::warn!(
                        version = heading.raw_version,
                        date = heading.date,
                        "skipping release with invalid date"
                    );
                }
            },
        }
    }

    // Vec::sort_by is stable, so same-day releases keep document order
    entries.sort_by(|a, b| b.date.cmp(&a.date));

    tracing::debug!(count = entries.len(), "indexed versions");
    Ok(entries)
}

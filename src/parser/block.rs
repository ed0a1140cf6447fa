//! Version block extraction
//!
//! Blocks are derived from heading offsets: each block runs from the start of
//! its heading line to the start of the next heading line, or to the end of
//! the document for the last one.

use super::heading::{normalize_version_query, scan_headings};
use crate::models::VersionBlock;

/// Split a document into one block per release heading
///
/// Text before the first heading (title, preamble, `## [Unreleased]`) belongs
/// to no block.
pub fn split_blocks(document: &str) -> Vec<VersionBlock<'_>> {
    let headings = scan_headings(document);
    let ends = headings
        .iter()
        .skip(1)
        .map(|next| next.start)
        .chain(std::iter::once(document.len()));

    headings
        .iter()
        .zip(ends)
        .map(|(heading, end)| VersionBlock {
            heading: *heading,
            span: heading.start..end,
            text: document[heading.start..end].trim(),
        })
        .collect()
}

/// Extract the block for `version`
///
/// The version may be given with or without a leading `v`; it must otherwise
/// match the heading's token exactly (ignoring case), suffix included. The
/// first matching heading wins. Returns `None` when no heading matches.
///
/// # Example
/// ```
/// use changelog_extract::parser::extract_block;
/// let doc = "## [v1.1.0] - 2024-07-01\n- new\n\n## [1.0.0] - 2024-06-01\n- old\n";
/// let block = extract_block(doc, "1.1.0").unwrap();
/// assert_eq!(block.text, "## [v1.1.0] - 2024-07-01\n- new");
/// ```
pub fn extract_block<'a>(document: &'a str, version: &str) -> Option<VersionBlock<'a>> {
    let query = normalize_version_query(version);
    let block = split_blocks(document)
        .into_iter()
        .find(|block| block.heading.matches_version(query));

    match &block {
        Some(block) => tracing::debug!(
            version = block.heading.raw_version,
            start = block.span.start,
            end = block.span.end,
            "found version block"
        ),
        None => tracing::debug!(version = query, "no heading for version"),
    }

    block
}

/// Extract the block text for `version`, or an empty string when not found
pub fn extract_block_text(document: &str, version: &str) -> String {
    extract_block(document, version)
        .map(|block| block.text.to_string())
        .unwrap_or_default()
}

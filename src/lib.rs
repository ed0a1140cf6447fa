// changelog-extract - Release notes from Keep a Changelog files
// Pulls a single version's block, or lists every version with its date

pub mod cli;
pub mod error;
pub mod models;
pub mod parser;

pub use anyhow::{Context, Result};

// Re-export commonly used types
pub use error::ChangelogError;
pub use models::{
    ChangelogDocument, DatePolicy, ToolConfig, VersionBlock, VersionEntry, VersionHeading,
};
pub use parser::{extract_block, list_versions};

pub mod changelog;
pub mod config;

pub use changelog::{ChangelogDocument, VersionBlock, VersionEntry, VersionHeading, DATE_FORMAT};
pub use config::{DatePolicy, ToolConfig, CONFIG_FILE_NAME};

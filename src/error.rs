//! Error types for changelog parsing and loading

use std::path::PathBuf;

/// Errors that can occur while loading or indexing a changelog
#[derive(Debug, thiserror::Error)]
pub enum ChangelogError {
    #[error("Changelog not found: {}", path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read changelog '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid release date '{date}' for version {version}: {source}")]
    MalformedDate {
        version: String,
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid config file '{}': {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ChangelogError {
    /// Map an I/O failure on `path` to the matching variant
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::ResourceNotFound { path, source },
            _ => Self::Read { path, source },
        }
    }

    /// Whether this error means the changelog file does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}

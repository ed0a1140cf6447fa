use crate::error::ChangelogError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file looked up in the project root
pub const CONFIG_FILE_NAME: &str = ".changelog-extract.toml";

/// What to do with a release heading whose date is not a valid calendar date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DatePolicy {
    /// Fail the whole listing
    #[default]
    Abort,
    /// Leave the entry out and log a warning
    Skip,
}

/// Tool configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Handling of invalid release dates when listing versions
    #[serde(default)]
    pub invalid_dates: DatePolicy,
}

impl ToolConfig {
    /// Load config from `.changelog-extract.toml` in `project_root`
    pub fn load(project_root: &Path) -> Result<Self, ChangelogError> {
        Self::load_from(&Self::default_path(project_root))
    }

    /// Load config from an explicit path; a missing file yields defaults
    pub fn load_from(config_path: &Path) -> Result<Self, ChangelogError> {
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .map_err(|e| ChangelogError::from_io(config_path, e))?;
        let config: ToolConfig =
            toml::from_str(&content).map_err(|source| ChangelogError::InvalidConfig {
                path: config_path.to_path_buf(),
                source,
            })?;

        tracing::debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn default_path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_FILE_NAME)
    }
}

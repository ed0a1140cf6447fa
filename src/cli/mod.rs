//! Command-line layer
//!
//! Each subcommand reads the changelog, runs one library operation and prints
//! the result. Nothing here holds state between calls.

pub mod extract_block;
pub mod list_versions;
pub mod logging;

use crate::models::ToolConfig;
use crate::Result;
use std::env;
use std::path::Path;

/// Load the tool config from `explicit`, or from the current directory
///
/// An explicitly named config file must exist; the implicit one is optional.
pub fn load_config(explicit: Option<&Path>) -> Result<ToolConfig> {
    let config = match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file not found: {}", path.display());
            }
            ToolConfig::load_from(path)?
        }
        None => ToolConfig::load(&env::current_dir()?)?,
    };
    Ok(config)
}

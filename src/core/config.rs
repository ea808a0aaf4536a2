//! User configuration.
//!
//! Read from `config.json` in the platform config directory (see
//! [`crate::core::dirs::get_config_directory`]). A missing file means defaults; a file
//! that exists but cannot be read or parsed is an error rather than silently ignored.

use crate::core::dirs::get_config_directory;
use crate::core::error::SwitcherError;
use crate::core::listing::ExtensionRegistry;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Files beyond this count are summarized as "...and N more."
pub const DEFAULT_MAX_LISTED_FILES: usize = 40;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct SwitcherConfig {
    /// Extensions treated as editable models
    pub model_extensions: Vec<String>,
    pub max_listed_files: usize,
    pub changed_only_by_default: bool,
}

impl Default for SwitcherConfig {
    fn default() -> Self {
        Self {
            model_extensions: ["bpmn", "bpmn2", "dmn", "pmml", "scesim"]
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            max_listed_files: DEFAULT_MAX_LISTED_FILES,
            changed_only_by_default: false,
        }
    }
}

impl SwitcherConfig {
    pub fn config_file() -> Result<PathBuf, SwitcherError> {
        Ok(get_config_directory()?.join("config.json"))
    }

    pub fn load_or_default() -> Result<Self, SwitcherError> {
        Self::load_from(&Self::config_file()?)
    }

    pub fn load_from(config_file: &Path) -> Result<Self, SwitcherError> {
        if !config_file.exists() {
            log::debug!(
                "No config at {}, using defaults",
                config_file.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .map_err(|e| SwitcherError::config_read_failed(config_file, e))?;
        let config: Self = serde_json::from_str(&content).map_err(|e| {
            log::error!("Failed to parse config '{}': {}", config_file.display(), e);
            SwitcherError::config_parse_failed(config_file, e)
        })?;

        log::debug!("Loaded config from {}", config_file.display());
        Ok(config)
    }

    pub fn registry(&self) -> ExtensionRegistry {
        ExtensionRegistry::new(&self.model_extensions)
    }
}

//! Configuration for the picker state layer.
//!
//! Conversion functions take no configuration; these settings only affect
//! [`ColorHistory`](crate::ColorHistory) and how [`ColorDetails`](crate::ColorDetails)
//! are formatted for display.
//!
//! # Configuration Loading
//!
//! ```no_run
//! use pick_colors::PickerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = PickerConfig::from_json_file(Path::new("picker.json"))?;
//!
//! // Or use defaults
//! let config = PickerConfig::default();
//! # Ok::<(), pick_colors::PickerError>(())
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::DEFAULT_STORAGE_KEY;
use crate::{PickerError, Result};

/// Picker settings, serializable to JSON.
///
/// Every field has a default, so partial files load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Key the host application stores the picked color list under.
    ///
    /// Passed through to the host unchanged; the history itself only
    /// produces and consumes the stored JSON value.
    pub storage_key: String,

    /// Maximum number of remembered colors; oldest are dropped first.
    /// `Some(0)` remembers nothing.
    pub history_limit: Option<usize>,

    /// Show hex codes in upper case in [`ColorDetails`](crate::ColorDetails)
    pub uppercase_hex: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            history_limit: None,
            uppercase_hex: false,
        }
    }
}

impl PickerConfig {
    /// Parse configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| PickerError::config("invalid configuration JSON", e))
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| PickerError::config(format!("cannot read {}", path.display()), e))?;
        let config = Self::from_json_str(&content)?;
        debug!(path = %path.display(), ?config, "loaded picker configuration");
        Ok(config)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| PickerError::config("cannot serialize configuration", e))?;
        std::fs::write(path, json)
            .map_err(|e| PickerError::config(format!("cannot write {}", path.display()), e))?;
        Ok(())
    }
}

//! Per-editor configuration.
//!
//! Configuration can be written in code or loaded from TOML, so applications
//! can keep column editor settings next to their other settings files:
//!
//! ```toml
//! numeric = false
//! text_alignment = "center"
//! blank_input = "clear"
//! ```

use std::path::Path;

use horizon_cell_editor_core::logging::targets;
use serde::Deserialize;

use crate::component::Alignment;
use crate::error::ConfigError;

/// How an editor treats a commit attempt whose text is empty or whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankPolicy {
    /// Hand blank text to the parser like any other text.
    ///
    /// Numeric editors reject it; a text editor commits the empty string.
    #[default]
    Parse,
    /// Always reject blank text.
    Reject,
    /// Accept blank text as "no value": the cell is cleared without running
    /// the parser or the rule.
    Clear,
}

/// Settings for one editor instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EditorConfig {
    /// Right-align text, as is usual for numbers.
    pub numeric: bool,
    /// Alignment used when `numeric` is off.
    pub text_alignment: Alignment,
    /// Blank input handling.
    pub blank_input: BlankPolicy,
}

impl EditorConfig {
    /// Settings for numeric columns.
    pub fn numeric() -> Self {
        Self {
            numeric: true,
            ..Default::default()
        }
    }

    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(source)?)
    }

    /// Read and parse a TOML settings file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|err| ConfigError::io(path, err))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded editor configuration");
        Ok(config)
    }

    /// The alignment these settings produce.
    pub fn alignment(&self) -> Alignment {
        if self.numeric {
            Alignment::Right
        } else {
            self.text_alignment
        }
    }
}

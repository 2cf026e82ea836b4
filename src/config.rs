//! Engine configuration
//!
//! Loaded from an optional JSON file; every field has a default so a partial
//! file (or none at all) is valid. Command line flags are applied on top.

use crate::error::{MenuError, Result};
use crate::theme::Palette;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use strum::{Display, EnumString};

/// Upper bound accepted for `max_depth`
pub const MAX_DEPTH_LIMIT: usize = 256;

/// When to emit ANSI colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ColorChoice {
    /// Color when stdout is a terminal and `NO_COLOR` is unset
    #[default]
    Auto,
    Always,
    Never,
}

/// Settings for the navigator and its output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub color: ColorChoice,
    /// Clear the terminal before each menu render
    pub clear_screen: bool,
    /// Deepest allowed chain of nested menus
    pub max_depth: usize,
    /// Line printed when the user quits
    pub farewell: String,
    /// Prompt label for menus without their own
    pub default_prompt: String,
    /// Write diagnostics here instead of stderr
    pub log_file: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            color: ColorChoice::Auto,
            clear_screen: false,
            max_depth: 32,
            farewell: "###### Happy printing!".to_string(),
            default_prompt: "Perform action".to_string(),
            log_file: None,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).map_err(|e| {
            MenuError::config(format!(
                "Failed to read configuration from {:?}: {}",
                path.as_ref(),
                e
            ))
        })?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(MenuError::config("max_depth must be at least 1"));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(MenuError::config(format!(
                "max_depth must not exceed {MAX_DEPTH_LIMIT}"
            )));
        }
        if self.farewell.contains('\n') {
            return Err(MenuError::config("farewell must be a single line"));
        }
        if self.default_prompt.trim().is_empty() {
            return Err(MenuError::config("default_prompt must not be empty"));
        }
        Ok(())
    }

    /// Resolve the color choice against the environment.
    pub fn palette(&self, stdout_is_terminal: bool, no_color_set: bool) -> Palette {
        let enabled = match self.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => stdout_is_terminal && !no_color_set,
        };
        if enabled {
            Palette::colored()
        } else {
            Palette::plain()
        }
    }
}

//! Configuration for canvases and interactive sessions.
//!
//! Supports YAML configuration with precedence: CLI > file > defaults.
//!
//! ```yaml
//! version: 1
//! canvas:
//!   width: 80
//!   height: 24
//!   background: " "
//! session:
//!   prompt: "canvas> "
//!   banner: false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::canvas::{Canvas, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::error::{Error, Result};
use crate::grid::BACKGROUND;

/// Canvas dimensions and background.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Width in columns.
    #[serde(default = "default_width")]
    pub width: usize,

    /// Height in rows.
    #[serde(default = "default_height")]
    pub height: usize,

    /// Character of a blank cell.
    #[serde(default = "default_background")]
    pub background: char,
}

fn default_width() -> usize {
    DEFAULT_WIDTH
}
fn default_height() -> usize {
    DEFAULT_HEIGHT
}
fn default_background() -> char {
    BACKGROUND
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            background: default_background(),
        }
    }
}

impl CanvasConfig {
    /// Build an empty canvas from these settings.
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are zero or the background is not
    /// printable ASCII.
    pub fn build(&self) -> Result<Canvas> {
        Canvas::with_background(self.width, self.height, self.background)
    }
}

/// Interactive session settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Prompt written before each command.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Print the command summary on start.
    #[serde(default = "default_banner")]
    pub banner: bool,
}

fn default_prompt() -> String {
    "> ".to_string()
}
fn default_banner() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            banner: default_banner(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Configuration version.
    #[serde(default = "default_version")]
    pub version: u32,

    /// Canvas settings.
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Session settings.
    #[serde(default)]
    pub session: SessionConfig,
}

fn default_version() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            canvas: CanvasConfig::default(),
            session: SessionConfig::default(),
        }
    }
}

impl Config {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .map_err(|_| Error::ConfigNotFound(path.display().to_string()))?;

        Self::parse(&content)
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns an error with line number if parsing fails.
    pub fn parse(yaml: &str) -> Result<Self> {
        serde_yaml_ng::from_str(yaml).map_err(|e| {
            let line = e.location().map_or(0, |l| l.line());
            Error::ConfigParse {
                line,
                message: e.to_string(),
            }
        })
    }

    /// Loads configuration with fallback to defaults.
    #[must_use]
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Per-user configuration file, e.g. `~/.config/trueno-canvas/config.yaml`.
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("trueno-canvas").join("config.yaml"))
    }
}

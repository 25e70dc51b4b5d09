//! Configuration management for the scribe.
//!
//! Handles loading configuration from a TOML file, with defaults for every
//! field so a missing file yields a working setup in the current directory.

use crate::error::{Result, ScribeError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Token that addresses the scribe, e.g. `!q`.
    #[serde(default = "default_trigger")]
    pub trigger: String,

    /// Quotebook storage settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Card rendering settings.
    #[serde(default)]
    pub render: RenderConfig,

    /// Console transport settings.
    #[serde(default)]
    pub console: ConsoleConfig,
}

fn default_trigger() -> String {
    "!q".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            trigger: default_trigger(),
            storage: StorageConfig::default(),
            render: RenderConfig::default(),
            console: ConsoleConfig::default(),
        }
    }
}

/// Quotebook storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path to the JSON quotebook.
    #[serde(default = "default_quotebook")]
    pub quotebook: PathBuf,
}

fn default_quotebook() -> PathBuf {
    PathBuf::from("quotebook.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            quotebook: default_quotebook(),
        }
    }
}

/// Card rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Directory of background images.
    #[serde(default = "default_backgrounds")]
    pub backgrounds: PathBuf,

    /// Font file. When unset, a few common monospace fonts are tried.
    pub font: Option<PathBuf>,

    /// Starting font size for the quote caption.
    #[serde(default = "default_quote_font_size")]
    pub quote_font_size: f32,

    /// Starting font size for the attribution line.
    #[serde(default = "default_attribution_font_size")]
    pub attribution_font_size: f32,

    /// Smallest font size the layout may shrink to.
    #[serde(default = "default_min_font_size")]
    pub min_font_size: f32,

    /// Space kept free on the right of every card.
    #[serde(default = "default_right_margin")]
    pub right_margin: f32,

    /// The caption starts at `width / anchor_x_divisor`.
    #[serde(default = "default_anchor_x_divisor")]
    pub anchor_x_divisor: f32,

    /// The caption baseline sits at `height / anchor_y_divisor`.
    #[serde(default = "default_anchor_y_divisor")]
    pub anchor_y_divisor: f32,

    /// Attribution offset from the caption anchor, in pixels.
    #[serde(default = "default_attribution_offset")]
    pub attribution_offset: [f32; 2],
}

fn default_backgrounds() -> PathBuf {
    PathBuf::from("backgrounds")
}

fn default_quote_font_size() -> f32 {
    70.0
}

fn default_attribution_font_size() -> f32 {
    50.0
}

fn default_min_font_size() -> f32 {
    10.0
}

fn default_right_margin() -> f32 {
    100.0
}

fn default_anchor_x_divisor() -> f32 {
    6.0
}

fn default_anchor_y_divisor() -> f32 {
    2.2
}

fn default_attribution_offset() -> [f32; 2] {
    [150.0, 200.0]
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            backgrounds: default_backgrounds(),
            font: None,
            quote_font_size: default_quote_font_size(),
            attribution_font_size: default_attribution_font_size(),
            min_font_size: default_min_font_size(),
            right_margin: default_right_margin(),
            anchor_x_divisor: default_anchor_x_divisor(),
            anchor_y_divisor: default_anchor_y_divisor(),
            attribution_offset: default_attribution_offset(),
        }
    }
}

impl RenderConfig {
    /// Checks that font sizes and anchors are usable.
    pub fn validate(&self) -> Result<()> {
        let sizes = [
            ("quote_font_size", self.quote_font_size),
            ("attribution_font_size", self.attribution_font_size),
            ("min_font_size", self.min_font_size),
        ];
        for (name, value) in sizes {
            if !value.is_finite() || value <= 0.0 {
                return Err(ScribeError::config(format!(
                    "render.{name} must be a positive number, got {value}"
                )));
            }
        }
        if self.min_font_size > self.quote_font_size
            || self.min_font_size > self.attribution_font_size
        {
            return Err(ScribeError::config(
                "render.min_font_size must not exceed the starting font sizes",
            ));
        }
        if !(self.anchor_x_divisor > 0.0 && self.anchor_y_divisor > 0.0) {
            return Err(ScribeError::config(
                "render anchor divisors must be positive",
            ));
        }
        if !self.right_margin.is_finite() {
            return Err(ScribeError::config("render.right_margin must be finite"));
        }
        Ok(())
    }
}

/// Console transport settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Sender identity used for lines without a `name:` prefix.
    #[serde(default = "default_sender")]
    pub sender: String,

    /// Where rendered cards are written.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_sender() -> String {
    "console".to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("cards")
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            sender: default_sender(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("quote-scribe")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ScribeError::config(format!("Failed to read config file: {e}")))?;

        Self::parse_toml(&content, path)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| {
            ScribeError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the whole configuration.
    pub fn validate(&self) -> Result<()> {
        if self.trigger.trim().is_empty() || self.trigger.contains(char::is_whitespace) {
            return Err(ScribeError::config(
                "trigger must be a single non-empty word",
            ));
        }
        self.render.validate()
    }
}

//! Configuration loading from murmur.toml

use serde::Deserialize;
use std::path::Path;

/// Root configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub reveal: RevealConfig,
    #[serde(default)]
    pub font: FontConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            reveal: RevealConfig::default(),
            font: FontConfig::default(),
        }
    }
}

/// Default window geometry and placement
#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    /// Width in pixels used when a command does not specify one
    #[serde(default = "default_width")]
    pub width: u32,
    /// Height in pixels used when a command does not specify one
    #[serde(default = "default_height")]
    pub height: u32,
    /// Placement: "top", "center", "bottom"
    #[serde(default = "default_position")]
    pub position: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            position: default_position(),
        }
    }
}

fn default_width() -> u32 {
    600
}

fn default_height() -> u32 {
    200
}

fn default_position() -> String {
    "center".to_string()
}

/// Reveal pacing and dismissal timing
#[derive(Debug, Clone, Deserialize)]
pub struct RevealConfig {
    /// Milliseconds between revealed glyphs
    #[serde(default = "default_velocity_ms")]
    pub velocity_ms: u64,
    /// Seconds the fully revealed window stays visible
    #[serde(default = "default_hold_secs")]
    pub hold_secs: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            velocity_ms: default_velocity_ms(),
            hold_secs: default_hold_secs(),
        }
    }
}

fn default_velocity_ms() -> u64 {
    100
}

fn default_hold_secs() -> f32 {
    20.0
}

/// Font configuration for glyph measurement
#[derive(Debug, Clone, Deserialize)]
pub struct FontConfig {
    /// Font size in pixels
    #[serde(default = "default_font_size")]
    pub size: f32,
    /// Line height as a factor of the font size
    #[serde(default = "default_line_height")]
    pub line_height: f32,
    /// Optional font file to load for deterministic metrics
    pub path: Option<String>,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: default_font_size(),
            line_height: default_line_height(),
            path: None,
        }
    }
}

fn default_font_size() -> f32 {
    18.0
}

fn default_line_height() -> f32 {
    1.2
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from default path (murmur.toml in current directory)
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load("murmur.toml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.window.width, 600);
        assert_eq!(config.window.height, 200);
        assert_eq!(config.window.position, "center");
        assert_eq!(config.reveal.velocity_ms, 100);
        assert_eq!(config.reveal.hold_secs, 20.0);
    }

    #[test]
    fn test_partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [window]
            width = 480
            position = "bottom"

            [reveal]
            velocity_ms = 40
            "#,
        )
        .unwrap();
        assert_eq!(config.window.width, 480);
        assert_eq!(config.window.height, 200);
        assert_eq!(config.window.position, "bottom");
        assert_eq!(config.reveal.velocity_ms, 40);
        assert_eq!(config.reveal.hold_secs, 20.0);
        assert!(config.font.path.is_none());
    }
}

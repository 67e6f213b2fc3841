//! Configuration file support for labelwrap.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/labelwrap/config.toml`. Settings include the canvas size and
//! background, label text styling, border colors, the label slots, and the startup
//! selection.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{BorderConfig, CanvasConfig, LabelConfig, SelectionConfig, TextConfig};

use crate::draw::{Color, FontDescriptor, TextStyle};
use crate::label::{Label, Theme};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest accepted canvas edge in pixels.
const MAX_CANVAS_EDGE: u32 = 8192;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [canvas]
/// width = 600
/// height = 400
/// background = [240, 240, 240]
///
/// [borders]
/// thick = "red"
/// glow = [0, 0, 255, 150]
///
/// [[labels]]
/// text = "Label 1"
/// x = 150.0
/// y = 150.0
/// ```
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct Config {
    /// Canvas size and background
    #[serde(default)]
    pub canvas: CanvasConfig,

    /// Label text styling
    #[serde(default)]
    pub text: TextConfig,

    /// Border colors
    #[serde(default)]
    pub borders: BorderConfig,

    /// Startup selection
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Label slots in display order
    #[serde(default = "types::default_labels")]
    pub labels: Vec<LabelConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas: CanvasConfig::default(),
            text: TextConfig::default(),
            borders: BorderConfig::default(),
            selection: SelectionConfig::default(),
            labels: types::default_labels(),
        }
    }
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value (or replaced by the
    /// default) and a warning is logged.
    ///
    /// Validated ranges:
    /// - `canvas.width`, `canvas.height`: 1 - 8192
    /// - `text.size`: 8.0 - 72.0
    /// - `labels`: at least one slot
    /// - `selection.initial`: an existing slot
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.width) {
            warn!(
                "Invalid canvas width {}, clamping to 1-{} range",
                self.canvas.width, MAX_CANVAS_EDGE
            );
            self.canvas.width = self.canvas.width.clamp(1, MAX_CANVAS_EDGE);
        }

        if !(1..=MAX_CANVAS_EDGE).contains(&self.canvas.height) {
            warn!(
                "Invalid canvas height {}, clamping to 1-{} range",
                self.canvas.height, MAX_CANVAS_EDGE
            );
            self.canvas.height = self.canvas.height.clamp(1, MAX_CANVAS_EDGE);
        }

        // Font size: 8.0 - 72.0
        if !(8.0..=72.0).contains(&self.text.size) {
            warn!(
                "Invalid text size {:.1}, clamping to 8.0-72.0 range",
                self.text.size
            );
            self.text.size = if self.text.size.is_nan() {
                16.0
            } else {
                self.text.size.clamp(8.0, 72.0)
            };
        }

        // Validate font weight is reasonable
        let valid_weight = matches!(
            self.text.font_weight.to_lowercase().as_str(),
            "normal" | "bold" | "light" | "ultralight" | "heavy" | "ultrabold"
        ) || self
            .text
            .font_weight
            .parse::<u32>()
            .is_ok_and(|w| (100..=900).contains(&w));

        if !valid_weight {
            warn!(
                "Invalid font_weight '{}', falling back to 'normal'",
                self.text.font_weight
            );
            self.text.font_weight = "normal".to_string();
        }

        // Validate font style
        if !matches!(
            self.text.font_style.to_lowercase().as_str(),
            "normal" | "italic" | "oblique"
        ) {
            warn!(
                "Invalid font_style '{}', falling back to 'normal'",
                self.text.font_style
            );
            self.text.font_style = "normal".to_string();
        }

        if self.labels.is_empty() {
            warn!("No labels configured, falling back to the default five");
            self.labels = types::default_labels();
        }

        for label in &self.labels {
            let inside = (0.0..=self.canvas.width as f64).contains(&label.x)
                && (0.0..=self.canvas.height as f64).contains(&label.y);
            if !inside {
                warn!(
                    "Label '{}' at ({:.1}, {:.1}) lies outside the {}x{} canvas",
                    label.text, label.x, label.y, self.canvas.width, self.canvas.height
                );
            }
        }

        if self.selection.initial >= self.labels.len() {
            warn!(
                "Invalid initial selection {}, only {} labels configured; selecting slot 0",
                self.selection.initial,
                self.labels.len()
            );
            self.selection.initial = 0;
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/labelwrap/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("labelwrap");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from `path`, or from the default location.
    ///
    /// A missing file at the default location yields the defaults. A missing
    /// file that was named explicitly is an error. All loaded values are
    /// validated and clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file cannot be read, or an explicitly named file does not exist
    /// - The file contains invalid TOML syntax
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let default_path = Self::get_config_path()?;
                if !default_path.exists() {
                    info!("Config file not found, using defaults");
                    debug!("Expected config at: {}", default_path.display());
                    return Ok(Self::default());
                }
                default_path
            }
        };

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let config = Self::from_toml_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml_str(config_str: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(config_str)?;
        config.validate_and_clamp();
        Ok(config)
    }

    /// Writes the documented example config to `path`, or to the default location.
    ///
    /// Returns the path that was written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file(path: Option<&Path>) -> Result<PathBuf> {
        let config_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::get_config_path()?,
        };

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let default_config = include_str!("../../config.example.toml");
        fs::write(&config_path, default_config)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// Returns the JSON schema describing the configuration file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Canvas background color.
    pub fn background(&self) -> Color {
        self.canvas.background.to_color()
    }

    /// Text style and border colors resolved from this configuration.
    pub fn theme(&self) -> Theme {
        Theme {
            text: TextStyle {
                color: self.text.color.to_color(),
                size: self.text.size,
                font: FontDescriptor::new(
                    self.text.font_family.clone(),
                    self.text.font_weight.clone(),
                    self.text.font_style.clone(),
                ),
            },
            thin: self.borders.thin.to_color(),
            thick: self.borders.thick.to_color(),
            dots: self.borders.dots.to_color(),
            glow: self.borders.glow.to_color(),
        }
    }

    /// Labels in display order.
    pub fn labels(&self) -> Vec<Label> {
        self.labels.iter().map(Label::from).collect()
    }

    /// Slot to select on start, if any.
    pub fn initial_selection(&self) -> Option<usize> {
        self.selection
            .select_on_start
            .then_some(self.selection.initial)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_classic_sketch() {
        let config = Config::default();
        assert_eq!((config.canvas.width, config.canvas.height), (600, 400));
        assert_eq!(config.labels.len(), 5);
        assert_eq!(config.labels[0].text, "Label 1");
        assert_eq!((config.labels[4].x, config.labels[4].y), (350.0, 250.0));
        assert_eq!(config.initial_selection(), Some(0));
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config.labels, types::default_labels());
        assert_eq!(config.background(), Color::from_rgba8(240, 240, 240, 255));
    }

    #[test]
    fn example_file_parses() {
        let config = Config::from_toml_str(include_str!("../../config.example.toml")).unwrap();
        assert_eq!(config.labels, types::default_labels());
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn custom_labels_and_colors() {
        let config = Config::from_toml_str(
            r#"
            [borders]
            thick = [255, 128, 0]

            [selection]
            select_on_start = false

            [[labels]]
            text = "Only"
            x = 10.0
            y = 20.0
            "#,
        )
        .unwrap();

        assert_eq!(config.labels(), vec![Label::new("Only", 10.0, 20.0)]);
        assert_eq!(config.theme().thick, Color::from_rgba8(255, 128, 0, 255));
        assert_eq!(config.initial_selection(), None);
    }

    #[test]
    fn invalid_values_are_clamped() {
        let config = Config::from_toml_str(
            r#"
            labels = []

            [canvas]
            width = 0
            height = 100000

            [text]
            size = 200.0
            font_weight = "feathery"
            font_style = "wobbly"

            [selection]
            initial = 9
            "#,
        )
        .unwrap();

        assert_eq!(config.canvas.width, 1);
        assert_eq!(config.canvas.height, MAX_CANVAS_EDGE);
        assert_eq!(config.text.size, 72.0);
        assert_eq!(config.text.font_weight, "normal");
        assert_eq!(config.text.font_style, "normal");
        assert_eq!(config.labels.len(), 5);
        assert_eq!(config.selection.initial, 0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        assert!(Config::from_toml_str("[canvas\nwidth = 3").is_err());
    }

    #[test]
    fn create_default_file_refuses_to_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let written = Config::create_default_file(Some(path.as_path())).unwrap();
        assert_eq!(written, path);
        assert!(Config::load(Some(path.as_path())).is_ok());
        assert!(Config::create_default_file(Some(path.as_path())).is_err());
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(Config::load(Some(missing.as_path())).is_err());
    }

    #[test]
    fn schema_lists_sections() {
        let schema = serde_json::to_value(Config::json_schema()).unwrap();
        let properties = &schema["properties"];
        for key in ["canvas", "text", "borders", "selection", "labels"] {
            assert!(properties.get(key).is_some(), "missing {key}");
        }
    }
}

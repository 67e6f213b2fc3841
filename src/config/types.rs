//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::label::Label;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canvas settings.
///
/// Controls the size of the drawing surface and the color it is cleared to
/// at the start of every frame.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Surface width in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_width")]
    pub width: u32,

    /// Surface height in pixels (valid range: 1 - 8192)
    #[serde(default = "default_canvas_height")]
    pub height: u32,

    /// Background color - a named color or an RGB array like `[240, 240, 240]`
    #[serde(default = "default_background")]
    pub background: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
            background: default_background(),
        }
    }
}

/// Label text settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct TextConfig {
    /// Text color
    #[serde(default = "default_text_color")]
    pub color: ColorSpec,

    /// Font size (valid range: 8.0 - 72.0)
    #[serde(default = "default_text_size")]
    pub size: f64,

    /// Font family name for label text (e.g., "Sans", "Monospace", "JetBrains Mono")
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: default_text_color(),
            size: default_text_size(),
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
        }
    }
}

/// Border colors.
///
/// Geometry of every border is fixed; only its color can be changed.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct BorderConfig {
    /// Stroke of the thin border
    #[serde(default = "default_thin_color")]
    pub thin: ColorSpec,

    /// Stroke of the thick border
    #[serde(default = "default_thick_color")]
    pub thick: ColorSpec,

    /// Fill of the dots
    #[serde(default = "default_dots_color")]
    pub dots: ColorSpec,

    /// Stroke of the glow rings; use an RGBA array to control translucency
    #[serde(default = "default_glow_color")]
    pub glow: ColorSpec,
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self {
            thin: default_thin_color(),
            thick: default_thick_color(),
            dots: default_dots_color(),
            glow: default_glow_color(),
        }
    }
}

/// One label slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LabelConfig {
    /// Text shown in the slot
    pub text: String,
    /// Center X coordinate
    pub x: f64,
    /// Center Y coordinate
    pub y: f64,
}

impl From<&LabelConfig> for Label {
    fn from(config: &LabelConfig) -> Self {
        Label::new(config.text.clone(), config.x, config.y)
    }
}

/// Startup selection.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SelectionConfig {
    /// Select a slot as soon as the sketch starts
    #[serde(default = "default_select_on_start")]
    pub select_on_start: bool,

    /// Slot selected on start (0-based)
    #[serde(default)]
    pub initial: usize,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            select_on_start: default_select_on_start(),
            initial: 0,
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_canvas_width() -> u32 {
    600
}

fn default_canvas_height() -> u32 {
    400
}

fn default_background() -> ColorSpec {
    ColorSpec::Rgb([240, 240, 240])
}

fn default_text_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_text_size() -> f64 {
    16.0
}

fn default_font_family() -> String {
    "Sans".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_thin_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

fn default_thick_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_dots_color() -> ColorSpec {
    ColorSpec::Name("green".to_string())
}

fn default_glow_color() -> ColorSpec {
    ColorSpec::Rgba([0, 0, 255, 150])
}

fn default_select_on_start() -> bool {
    true
}

pub(super) fn default_labels() -> Vec<LabelConfig> {
    [
        ("Label 1", 150.0, 150.0),
        ("Label 2", 300.0, 150.0),
        ("Label 3", 450.0, 150.0),
        ("Label 4", 200.0, 250.0),
        ("Label 5", 350.0, 250.0),
    ]
    .into_iter()
    .map(|(text, x, y)| LabelConfig {
        text: text.to_string(),
        x,
        y,
    })
    .collect()
}

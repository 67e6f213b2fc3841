//! The drawing capability every host provides.

use super::color::{BLACK, Color};
use super::font::FontDescriptor;
use serde::Serialize;

/// Style attached to a single rectangle or ellipse.
///
/// Primitives never inherit style from earlier calls: whatever a border
/// needs is spelled out here.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Paint {
    /// Interior color, `None` leaves the shape unfilled
    pub fill: Option<Color>,
    /// Outline color, `None` skips the outline
    pub stroke: Option<Color>,
    /// Outline width in pixels
    pub stroke_width: f64,
}

impl Paint {
    /// Unfilled outline.
    pub fn stroke(color: Color, width: f64) -> Self {
        Self {
            fill: None,
            stroke: Some(color),
            stroke_width: width,
        }
    }

    /// Filled shape without an outline, so it covers exactly its own size.
    pub fn fill(color: Color) -> Self {
        Self {
            fill: Some(color),
            stroke: None,
            stroke_width: 0.0,
        }
    }
}

/// Style for centered label text.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextStyle {
    /// Fill color of the glyphs
    pub color: Color,
    /// Font size
    pub size: f64,
    /// Font family, weight and slant
    pub font: FontDescriptor,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: BLACK,
            size: 16.0,
            font: FontDescriptor::default(),
        }
    }
}

/// A 2D drawing surface.
///
/// Implemented by [`Frame`](super::Frame), which records primitives, and by
/// [`CairoCanvas`](super::CairoCanvas), which rasterizes them.
pub trait Canvas {
    /// Fills the whole surface.
    fn background(&mut self, color: Color);

    /// Rectangle with its top-left corner at (`x`, `y`).
    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint);

    /// Ellipse centered at (`cx`, `cy`) with the given diameters.
    fn ellipse(&mut self, cx: f64, cy: f64, w: f64, h: f64, paint: &Paint);

    /// Text centered both horizontally and vertically on (`x`, `y`).
    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle);
}

//! The undecorated text element at the root of every chain.

use crate::draw::{Canvas, TextStyle};

/// A piece of text pinned to a canvas position.
///
/// Labels are created once when the sketch starts and never change
/// afterwards; borders are positioned around `x`/`y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Text content
    pub text: String,
    /// Center X coordinate
    pub x: f64,
    /// Center Y coordinate
    pub y: f64,
}

impl Label {
    /// Creates a label centered on (`x`, `y`).
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }

    /// Draws the text centered on the label position.
    pub fn draw(&self, canvas: &mut dyn Canvas, style: &TextStyle) {
        canvas.text(&self.text, self.x, self.y, style);
    }
}

//! Frame container recording the primitives drawn during one refresh.

use super::canvas::{Canvas, Paint, TextStyle};
use super::color::Color;
use super::shape::Primitive;
use crate::util::Rect;
use serde::Serialize;

/// Every primitive issued during a single frame, in draw order.
///
/// A `Frame` is itself a [`Canvas`]: drawing into it records the call instead
/// of rasterizing it. The recording can be replayed onto a real canvas,
/// serialized as JSON, or inspected by tests.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Frame {
    /// Primitives in draw order (first = bottom layer, last = top layer)
    pub primitives: Vec<Primitive>,
}

impl Frame {
    /// Creates a new empty frame.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays every recorded primitive onto `canvas` in order.
    pub fn replay(&self, canvas: &mut dyn Canvas) {
        for primitive in &self.primitives {
            primitive.issue(canvas);
        }
    }

    /// Iterates over the recorded text primitives as `(text, x, y)`.
    pub fn texts(&self) -> impl Iterator<Item = (&str, f64, f64)> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text { text, x, y, .. } => Some((text.as_str(), *x, *y)),
            _ => None,
        })
    }

    /// Union of the bounding boxes of all measurable primitives.
    pub fn bounds(&self) -> Option<Rect> {
        self.primitives
            .iter()
            .filter_map(Primitive::bounding_box)
            .reduce(Rect::union)
    }
}

impl Canvas for Frame {
    fn background(&mut self, color: Color) {
        self.primitives.push(Primitive::Background { color });
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint) {
        self.primitives.push(Primitive::Rect {
            x,
            y,
            w,
            h,
            paint: *paint,
        });
    }

    fn ellipse(&mut self, cx: f64, cy: f64, w: f64, h: f64, paint: &Paint) {
        self.primitives.push(Primitive::Ellipse {
            cx,
            cy,
            w,
            h,
            paint: *paint,
        });
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        self.primitives.push(Primitive::Text {
            x,
            y,
            text: text.to_string(),
            style: style.clone(),
        });
    }
}

//! Recorded drawing primitives.

use super::canvas::{Canvas, Paint, TextStyle};
use super::color::Color;
use crate::util::Rect;
use serde::Serialize;

/// One drawing call issued to a [`Canvas`].
///
/// Each variant carries its own style so a recorded frame can be replayed
/// onto any other canvas or serialized for inspection.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// Full-surface fill
    Background {
        /// Fill color
        color: Color,
    },
    /// Rectangle from its top-left corner
    Rect {
        /// Left edge
        x: f64,
        /// Top edge
        y: f64,
        /// Width in pixels
        w: f64,
        /// Height in pixels
        h: f64,
        /// Fill and outline
        paint: Paint,
    },
    /// Ellipse around a center point
    Ellipse {
        /// Center X coordinate
        cx: f64,
        /// Center Y coordinate
        cy: f64,
        /// Horizontal diameter
        w: f64,
        /// Vertical diameter
        h: f64,
        /// Fill and outline
        paint: Paint,
    },
    /// Centered text
    Text {
        /// Center X coordinate
        x: f64,
        /// Center Y coordinate
        y: f64,
        /// Text content
        text: String,
        /// Color, size and font
        style: TextStyle,
    },
}

impl Primitive {
    /// Issues this primitive to `canvas`.
    pub fn issue(&self, canvas: &mut dyn Canvas) {
        match self {
            Primitive::Background { color } => canvas.background(*color),
            Primitive::Rect { x, y, w, h, paint } => canvas.rect(*x, *y, *w, *h, paint),
            Primitive::Ellipse {
                cx,
                cy,
                w,
                h,
                paint,
            } => canvas.ellipse(*cx, *cy, *w, *h, paint),
            Primitive::Text { x, y, text, style } => canvas.text(text, *x, *y, style),
        }
    }

    /// Returns the axis-aligned bounding box, expanded to cover the stroke width.
    ///
    /// Backgrounds cover the whole surface and text extents depend on the font
    /// backend, so both return `None`.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Primitive::Rect { x, y, w, h, paint } => {
                bounding_box_for_rect(*x, *y, *w, *h, paint_padding(paint))
            }
            Primitive::Ellipse {
                cx,
                cy,
                w,
                h,
                paint,
            } => bounding_box_for_rect(cx - w / 2.0, cy - h / 2.0, *w, *h, paint_padding(paint)),
            Primitive::Background { .. } | Primitive::Text { .. } => None,
        }
    }
}

fn paint_padding(paint: &Paint) -> f64 {
    if paint.stroke.is_some() {
        paint.stroke_width / 2.0
    } else {
        0.0
    }
}

fn bounding_box_for_rect(x: f64, y: f64, w: f64, h: f64, padding: f64) -> Option<Rect> {
    let (min_x, max_x) = (x.min(x + w), x.max(x + w));
    let (min_y, max_y) = (y.min(y + h), y.max(y + h));

    Rect::from_min_max(
        (min_x - padding).floor() as i32,
        (min_y - padding).floor() as i32,
        (max_x + padding).ceil() as i32,
        (max_y + padding).ceil() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, GREEN};

    #[test]
    fn rect_bounding_box_covers_stroke() {
        let shape = Primitive::Rect {
            x: 115.0,
            y: 135.0,
            w: 70.0,
            h: 30.0,
            paint: Paint::stroke(BLACK, 2.0),
        };

        let rect = shape.bounding_box().expect("rect should have bounds");
        assert_eq!(rect.x, 114);
        assert_eq!(rect.y, 134);
        assert_eq!(rect.width, 72);
        assert_eq!(rect.height, 32);
    }

    #[test]
    fn ellipse_bounding_box_is_centered() {
        let shape = Primitive::Ellipse {
            cx: 100.0,
            cy: 50.0,
            w: 6.0,
            h: 6.0,
            paint: Paint {
                fill: Some(GREEN),
                stroke: None,
                stroke_width: 1.0,
            },
        };

        let rect = shape.bounding_box().expect("ellipse should have bounds");
        assert_eq!((rect.x, rect.y, rect.width, rect.height), (97, 47, 6, 6));
    }

    #[test]
    fn background_has_no_bounds() {
        assert!(Primitive::Background { color: BLACK }.bounding_box().is_none());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(Primitive::Background { color: BLACK }).unwrap();
        assert_eq!(json["kind"], "background");
    }
}

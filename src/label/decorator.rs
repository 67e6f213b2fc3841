//! Border effects that can be layered around a label.

use crate::draw::color::{BLACK, BLUE, GREEN, RED};
use crate::draw::{Canvas, Color, Paint, TextStyle};
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Border Geometry (not configurable)
// ============================================================================

/// Thin border size
const THIN_WIDTH: f64 = 70.0;
const THIN_HEIGHT: f64 = 30.0;
const THIN_STROKE: f64 = 2.0;

/// Thick border size
const THICK_WIDTH: f64 = 80.0;
const THICK_HEIGHT: f64 = 40.0;
const THICK_STROKE: f64 = 5.0;

/// Dots run from -DOTS_REACH to +DOTS_REACH around the label center
const DOTS_REACH: i32 = 45;
const DOTS_SPACING: usize = 10;
/// Vertical distance from the label center to each row of dots
const DOTS_OFFSET_Y: f64 = 25.0;
const DOT_DIAMETER: f64 = 5.0;

/// Innermost glow rectangle before expansion
const GLOW_BASE_WIDTH: f64 = 100.0;
const GLOW_BASE_HEIGHT: f64 = 60.0;
/// Outward expansion of each glow ring, innermost first
const GLOW_STEPS: [f64; 3] = [10.0, 15.0, 20.0];
const GLOW_STROKE: f64 = 8.0;
/// Alpha of the glow stroke (150 of 255)
const GLOW_ALPHA: f64 = 150.0 / 255.0;

/// One kind of border effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecoratorKind {
    /// Thin unfilled rectangle hugging the text
    Thin,
    /// Thicker, larger rectangle in a distinct color
    Thick,
    /// Rows of small filled circles above and below the text
    Dots,
    /// Concentric translucent rectangles expanding outward
    Glow,
}

impl DecoratorKind {
    /// All kinds, in the order they are offered to the user.
    pub const ALL: [DecoratorKind; 4] = [
        DecoratorKind::Thin,
        DecoratorKind::Thick,
        DecoratorKind::Dots,
        DecoratorKind::Glow,
    ];

    /// Short name used in commands and configuration.
    pub fn name(self) -> &'static str {
        match self {
            DecoratorKind::Thin => "thin",
            DecoratorKind::Thick => "thick",
            DecoratorKind::Dots => "dots",
            DecoratorKind::Glow => "glow",
        }
    }

    /// Human-readable description used in log messages.
    pub fn describe(self) -> &'static str {
        match self {
            DecoratorKind::Thin => "Thin border",
            DecoratorKind::Thick => "Thick border",
            DecoratorKind::Dots => "Dots border",
            DecoratorKind::Glow => "Glow border",
        }
    }

    /// Draws this border's own geometry centered on (`x`, `y`).
    ///
    /// Only the effect itself is drawn; whatever it wraps is drawn by the
    /// caller beforehand.
    pub fn draw_around(self, canvas: &mut dyn Canvas, x: f64, y: f64, theme: &Theme) {
        match self {
            DecoratorKind::Thin => {
                let paint = Paint::stroke(theme.thin, THIN_STROKE);
                canvas.rect(
                    x - THIN_WIDTH / 2.0,
                    y - THIN_HEIGHT / 2.0,
                    THIN_WIDTH,
                    THIN_HEIGHT,
                    &paint,
                );
            }
            DecoratorKind::Thick => {
                let paint = Paint::stroke(theme.thick, THICK_STROKE);
                canvas.rect(
                    x - THICK_WIDTH / 2.0,
                    y - THICK_HEIGHT / 2.0,
                    THICK_WIDTH,
                    THICK_HEIGHT,
                    &paint,
                );
            }
            DecoratorKind::Dots => {
                let paint = Paint::fill(theme.dots);
                for dx in (-DOTS_REACH..=DOTS_REACH).step_by(DOTS_SPACING) {
                    let cx = x + dx as f64;
                    canvas.ellipse(cx, y - DOTS_OFFSET_Y, DOT_DIAMETER, DOT_DIAMETER, &paint);
                    canvas.ellipse(cx, y + DOTS_OFFSET_Y, DOT_DIAMETER, DOT_DIAMETER, &paint);
                }
            }
            DecoratorKind::Glow => {
                let paint = Paint::stroke(theme.glow, GLOW_STROKE);
                for step in GLOW_STEPS {
                    canvas.rect(
                        x - GLOW_BASE_WIDTH / 2.0 - step,
                        y - GLOW_BASE_HEIGHT / 2.0 - step,
                        GLOW_BASE_WIDTH + step * 2.0,
                        GLOW_BASE_HEIGHT + step * 2.0,
                        &paint,
                    );
                }
            }
        }
    }
}

impl fmt::Display for DecoratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a border name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown border kind '{0}' (expected thin, thick, dots or glow)")]
pub struct UnknownKind(pub String);

impl FromStr for DecoratorKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DecoratorKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownKind(s.trim().to_string()))
    }
}

/// Colors and text style used when drawing labels and their borders.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Style of the label text
    pub text: TextStyle,
    /// Thin border stroke
    pub thin: Color,
    /// Thick border stroke
    pub thick: Color,
    /// Dot fill
    pub dots: Color,
    /// Glow stroke, usually translucent
    pub glow: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text: TextStyle::default(),
            thin: BLACK,
            thick: RED,
            dots: GREEN,
            glow: BLUE.with_alpha(GLOW_ALPHA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{Frame, Primitive};

    fn draw(kind: DecoratorKind) -> Frame {
        let mut frame = Frame::new();
        kind.draw_around(&mut frame, 150.0, 150.0, &Theme::default());
        frame
    }

    #[test]
    fn thin_border_is_70_by_30_centered() {
        let frame = draw(DecoratorKind::Thin);
        assert_eq!(
            frame.primitives,
            vec![Primitive::Rect {
                x: 115.0,
                y: 135.0,
                w: 70.0,
                h: 30.0,
                paint: Paint::stroke(BLACK, 2.0),
            }]
        );
    }

    #[test]
    fn thick_border_is_larger_and_red() {
        let frame = draw(DecoratorKind::Thick);
        match frame.primitives.as_slice() {
            [Primitive::Rect { x, y, w, h, paint }] => {
                assert_eq!((*x, *y, *w, *h), (110.0, 130.0, 80.0, 40.0));
                assert_eq!(paint.stroke, Some(RED));
                assert_eq!(paint.stroke_width, 5.0);
                assert!(paint.fill.is_none());
            }
            other => panic!("unexpected primitives {other:?}"),
        }
    }

    #[test]
    fn dots_run_along_top_and_bottom_edges() {
        let frame = draw(DecoratorKind::Dots);
        assert_eq!(frame.primitives.len(), 20);

        let mut top = 0;
        let mut bottom = 0;
        for primitive in &frame.primitives {
            let Primitive::Ellipse {
                cx, cy, w, h, paint, ..
            } = primitive
            else {
                panic!("dots should only draw ellipses");
            };
            assert!((105.0..=195.0).contains(cx));
            assert_eq!((*w, *h), (5.0, 5.0));
            assert_eq!(paint.fill, Some(GREEN));
            assert!(paint.stroke.is_none());
            if *cy == 125.0 {
                top += 1;
            } else if *cy == 175.0 {
                bottom += 1;
            } else {
                panic!("dot off the edges at y={cy}");
            }
        }
        assert_eq!((top, bottom), (10, 10));
    }

    #[test]
    fn glow_rings_expand_outward() {
        let frame = draw(DecoratorKind::Glow);
        let sizes: Vec<(f64, f64, f64, f64)> = frame
            .primitives
            .iter()
            .map(|p| match p {
                Primitive::Rect { x, y, w, h, paint } => {
                    assert!(paint.stroke.is_some_and(|c| c.a < 1.0));
                    (*x, *y, *w, *h)
                }
                other => panic!("unexpected primitive {other:?}"),
            })
            .collect();

        assert_eq!(
            sizes,
            vec![
                (90.0, 110.0, 120.0, 80.0),
                (85.0, 105.0, 130.0, 90.0),
                (80.0, 100.0, 140.0, 100.0),
            ]
        );
    }

    #[test]
    fn glow_encloses_every_other_border() {
        let glow = draw(DecoratorKind::Glow).bounds().unwrap();
        for kind in [DecoratorKind::Thin, DecoratorKind::Thick, DecoratorKind::Dots] {
            let bounds = draw(kind).bounds().unwrap();
            assert!(glow.contains(&bounds), "{kind} escapes the glow");
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Thin".parse::<DecoratorKind>(), Ok(DecoratorKind::Thin));
        assert_eq!(" glow ".parse::<DecoratorKind>(), Ok(DecoratorKind::Glow));
        assert_eq!(
            "sparkle".parse::<DecoratorKind>(),
            Err(UnknownKind("sparkle".to_string()))
        );
    }
}

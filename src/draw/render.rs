//! Cairo-based canvas.

use super::canvas::{Canvas, Paint, TextStyle};
use super::color::Color;

/// [`Canvas`] that rasterizes onto a Cairo context.
///
/// Drawing errors reported by Cairo are ignored: a failed primitive leaves
/// the surface as it was and the rest of the frame still renders.
pub struct CairoCanvas<'a> {
    ctx: &'a cairo::Context,
}

impl<'a> CairoCanvas<'a> {
    /// Wraps an existing Cairo context.
    pub fn new(ctx: &'a cairo::Context) -> Self {
        Self { ctx }
    }
}

impl Canvas for CairoCanvas<'_> {
    fn background(&mut self, color: Color) {
        render_background(self.ctx, color);
    }

    fn rect(&mut self, x: f64, y: f64, w: f64, h: f64, paint: &Paint) {
        self.ctx.rectangle(x, y, w, h);
        apply_paint(self.ctx, paint);
    }

    fn ellipse(&mut self, cx: f64, cy: f64, w: f64, h: f64, paint: &Paint) {
        render_ellipse(self.ctx, cx, cy, w, h, paint);
    }

    fn text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) {
        render_text(self.ctx, x, y, text, style);
    }
}

/// Fills the entire surface with a solid color.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    let _ = ctx.paint();
}

/// Fills and/or strokes the current path, then clears it.
fn apply_paint(ctx: &cairo::Context, paint: &Paint) {
    if let Some(fill) = paint.fill {
        ctx.set_source_rgba(fill.r, fill.g, fill.b, fill.a);
        let _ = ctx.fill_preserve();
    }

    if let Some(stroke) = paint.stroke {
        if paint.stroke_width > 0.0 {
            ctx.set_source_rgba(stroke.r, stroke.g, stroke.b, stroke.a);
            ctx.set_line_width(paint.stroke_width);
            ctx.set_line_join(cairo::LineJoin::Miter);
            let _ = ctx.stroke_preserve();
        }
    }

    ctx.new_path();
}

/// Render an ellipse using Cairo's arc with scaling
fn render_ellipse(ctx: &cairo::Context, cx: f64, cy: f64, w: f64, h: f64, paint: &Paint) {
    if w <= 0.0 || h <= 0.0 {
        return;
    }

    ctx.new_path();
    ctx.save().ok();
    ctx.translate(cx, cy);
    ctx.scale(w / 2.0, h / 2.0);
    ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
    ctx.restore().ok();

    apply_paint(ctx, paint);
}

/// Renders text centered on (`x`, `y`) using Pango.
///
/// The logical extents of the layout are used for centering so that labels
/// with and without descenders sit on the same line.
pub fn render_text(ctx: &cairo::Context, x: f64, y: f64, text: &str, style: &TextStyle) {
    if text.is_empty() {
        return;
    }

    // Save context state to prevent settings from leaking to other drawing operations
    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&style.font.to_pango_string(style.size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let (_ink_rect, logical_rect) = layout.pixel_extents();
    let width = logical_rect.width() as f64;
    let height = logical_rect.height() as f64;

    let color = style.color;
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.move_to(x - width / 2.0, y - height / 2.0);
    pangocairo::functions::show_layout(ctx, &layout);
    // The path is not part of the saved state; drop the current point so the
    // next arc does not connect to it.
    ctx.new_path();

    ctx.restore().ok();
}

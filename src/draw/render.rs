//! Cairo-based rendering functions for shapes.

use super::color::Color;
use super::shape::Shape;

/// Renders a single shape to a Cairo context.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    match *shape {
        Shape::Segment {
            x1,
            y1,
            x2,
            y2,
            color,
            thick,
        } => render_segment(ctx, x1, y1, x2, y2, color, thick),
        Shape::Marker {
            cx,
            cy,
            radius,
            color,
        } => render_marker(ctx, cx, cy, radius, color),
    }
}

/// Render a straight line with a round cap
fn render_segment(
    ctx: &cairo::Context,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    color: Color,
    thick: f64,
) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(thick);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(x1, y1);
    ctx.line_to(x2, y2);
    let _ = ctx.stroke();
}

/// Render a filled circle
fn render_marker(ctx: &cairo::Context, cx: f64, cy: f64, radius: f64, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.new_sub_path();
    ctx.arc(cx, cy, radius, 0.0, std::f64::consts::PI * 2.0);
    let _ = ctx.fill();
}

/// Wipes every pixel of the surface back to full transparency.
pub fn clear_surface(ctx: &cairo::Context) {
    let _ = ctx.save();
    ctx.set_operator(cairo::Operator::Clear);
    let _ = ctx.paint();
    let _ = ctx.restore();
}

//! Cairo replay rendering for drawing actions.

use super::action::{DrawingAction, Point, Tool};
use super::color::Color;
use super::theme::Theme;
use crate::config::Config;
use crate::util;

/// Opacity applied to highlighter strokes.
const HIGHLIGHTER_ALPHA: f64 = 0.3;

/// Fills the whole surface with the theme background color.
///
/// Must run before any action so the replay always starts from a known
/// canvas state.
pub fn render_background(ctx: &cairo::Context, theme: Theme, config: &Config) {
    let bg = theme.background_color(&config.board);
    ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
    let _ = ctx.paint();
}

/// Renders actions in paint order onto an already-cleared context.
///
/// Every action establishes its own color, width, and opacity before
/// drawing, so nothing leaks between actions.
pub fn render_actions<'a>(
    ctx: &cairo::Context,
    actions: impl Iterator<Item = &'a DrawingAction>,
    theme: Theme,
    config: &Config,
) {
    for action in actions {
        render_action(ctx, action, theme, config);
    }
}

/// Renders a single action, dispatching on its tool.
///
/// Actions whose point lists do not satisfy their tool's shape are skipped;
/// a malformed record in a loaded board degrades to nothing rather than a
/// panic.
pub fn render_action(ctx: &cairo::Context, action: &DrawingAction, theme: Theme, config: &Config) {
    let color = Color::from_hex_or_black(&action.color);

    match action.tool {
        Tool::Cursor => {}
        Tool::Pen => render_polyline(ctx, &action.points, color, action.size),
        Tool::Highlighter => render_polyline(
            ctx,
            &action.points,
            color.with_alpha(HIGHLIGHTER_ALPHA),
            action.size,
        ),
        Tool::Eraser => {
            // Replayed in the background color: additive recolor, not true
            // erasure. A later theme switch exposes the difference.
            let bg = theme.background_color(&config.board);
            render_polyline(ctx, &action.points, bg, action.size);
        }
        Tool::Rectangle => {
            if let [start, end] = action.points[..] {
                render_rectangle(ctx, start, end, color, action.size);
            }
        }
        Tool::Circle => {
            if let [center, edge] = action.points[..] {
                render_circle(ctx, center, edge, color, action.size);
            }
        }
        Tool::Arrow => {
            if let [start, end] = action.points[..] {
                render_arrow(ctx, start, end, color, action.size);
            }
        }
        Tool::Text => {
            if let (Some(text), [anchor]) = (action.text.as_deref(), &action.points[..]) {
                if !text.is_empty() {
                    render_text(ctx, *anchor, text, color, action.size, &config.drawing.font_family);
                }
            }
        }
    }
}

fn apply_stroke(ctx: &cairo::Context, color: Color, size: f64) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.set_line_width(size);
    ctx.set_line_cap(cairo::LineCap::Round);
    ctx.set_line_join(cairo::LineJoin::Round);
}

/// Freehand stroke: polyline visiting the sampled points in order.
fn render_polyline(ctx: &cairo::Context, points: &[Point], color: Color, size: f64) {
    let Some(first) = points.first() else {
        return;
    };

    apply_stroke(ctx, color, size);

    ctx.move_to(first.x, first.y);
    for p in &points[1..] {
        ctx.line_to(p.x, p.y);
    }
    let _ = ctx.stroke();
}

/// Stroked axis-aligned box between two drag corners.
///
/// Width/height are signed; cairo walks the path in the dragged direction so
/// inverted rectangles need no normalization.
fn render_rectangle(ctx: &cairo::Context, start: Point, end: Point, color: Color, size: f64) {
    apply_stroke(ctx, color, size);
    ctx.rectangle(start.x, start.y, end.x - start.x, end.y - start.y);
    let _ = ctx.stroke();
}

/// Stroked circle centered on the drag start, through the drag end.
fn render_circle(ctx: &cairo::Context, center: Point, edge: Point, color: Color, size: f64) {
    let radius = util::distance(center, edge);
    if radius <= 0.0 {
        return;
    }

    apply_stroke(ctx, color, size);
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * std::f64::consts::PI);
    let _ = ctx.stroke();
}

/// Shaft plus a V-shaped head at the end point.
fn render_arrow(ctx: &cairo::Context, start: Point, end: Point, color: Color, size: f64) {
    apply_stroke(ctx, color, size);

    ctx.move_to(start.x, start.y);
    ctx.line_to(end.x, end.y);
    let _ = ctx.stroke();

    let [left, right] = util::arrowhead_points(start, end, size);
    ctx.move_to(end.x, end.y);
    ctx.line_to(left.x, left.y);
    let _ = ctx.stroke();
    ctx.move_to(end.x, end.y);
    ctx.line_to(right.x, right.y);
    let _ = ctx.stroke();
}

/// Filled text at a baseline anchor, font size `size * 3`.
fn render_text(
    ctx: &cairo::Context,
    anchor: Point,
    text: &str,
    color: Color,
    size: f64,
    font_family: &str,
) {
    ctx.save().ok();

    // Gray antialiasing keeps output identical across replays regardless of
    // the surface's subpixel order.
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_size = (size * 3.0).round().max(1.0) as i32;
    let font_desc = pango::FontDescription::from_string(&format!("{font_family} {font_size}"));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    // Pango positions from the top-left corner; the anchor is a baseline.
    let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
    ctx.move_to(anchor.x, anchor.y - baseline);

    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

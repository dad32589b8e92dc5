//! Element rendering engine.
//!
//! Converts elements into draw commands against a [`Surface`]. Every
//! element renders independently: surface state is saved and restored
//! around each one. The same paths draw committed elements, in-progress
//! previews, and exports.

use crate::surface::{FontSpec, Surface};
use inkboard_core::element::{Element, Shape, ShapeKind, Stroke, StrokePoint, Text};
use inkboard_core::geometry;
use inkboard_core::interaction::InteractionState;
use inkboard_core::page::Page;
use inkboard_core::tools::ToolSettings;
use inkboard_core::trail::PointerTrail;
use kurbo::{BezPath, Point, Rect, Size};
use peniko::Color;
use std::time::Instant;

/// Length of each arrowhead chevron segment.
pub const ARROW_HEAD_LENGTH: f64 = 15.0;

/// Half-angle of the arrowhead chevron, measured from the shaft direction.
pub const ARROW_HEAD_ANGLE: f64 = std::f64::consts::FRAC_PI_6;

/// Core dot radius of the pointer trail.
const TRAIL_RADIUS: f64 = 6.0;
const TRAIL_LINE_WIDTH: f64 = 3.0;

fn trail_color() -> Color {
    Color::from_rgba8(255, 0, 0, 255)
}

/// Draw every element in z-order.
pub fn render(elements: &[Element], surface: &mut dyn Surface) {
    for element in elements {
        match element {
            Element::Stroke(stroke) => render_stroke(stroke, surface),
            Element::Shape(shape) => render_shape(shape, surface),
            Element::Text(text) => render_text(text, surface),
        }
    }
}

/// Fill the page background over `size`, then draw its elements.
pub fn render_page(page: &Page, size: Size, surface: &mut dyn Surface) {
    surface.save();
    surface.fill_rect(
        Rect::from_origin_size(Point::ZERO, size),
        page.background_color.into(),
    );
    surface.restore();
    render(&page.elements, surface);
}

/// Draw a stroke as a smoothed curve.
///
/// Fewer than two points produce no draw commands at all: a tap leaves no
/// mark. Two points draw a straight segment; more are interpolated with a
/// Catmull-Rom spline. Highlighter strokes simply carry reduced opacity
/// and composite normally.
pub fn render_stroke(stroke: &Stroke, surface: &mut dyn Surface) {
    if stroke.points.len() < 2 {
        return;
    }
    surface.save();
    surface.set_alpha(stroke.opacity);
    surface.stroke_path(
        &smoothed_path(&stroke.points),
        stroke.color.into(),
        stroke.line_width,
    );
    surface.restore();
}

/// Build the smoothed path through a point sequence.
///
/// Each segment between `points[i-1]` and `points[i]` takes its tangents
/// from the neighboring points `points[i-2]` and `points[i+1]`, clamped at
/// the sequence ends, converted to cubic Bezier control points with a 1/6
/// tangent offset. Raw pointer samples drawn as a polyline look jagged;
/// this keeps the curve through every sample smooth.
fn smoothed_path(points: &[StrokePoint]) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(points[0].point());

    if points.len() == 2 {
        path.line_to(points[1].point());
        return path;
    }

    for i in 1..points.len() {
        let p0 = points[i.saturating_sub(2)].point();
        let p1 = points[i - 1].point();
        let p2 = points[i].point();
        let p3 = points[(i + 1).min(points.len() - 1)].point();

        let cp1 = Point::new(p1.x + (p2.x - p0.x) / 6.0, p1.y + (p2.y - p0.y) / 6.0);
        let cp2 = Point::new(p2.x - (p3.x - p1.x) / 6.0, p2.y - (p3.y - p1.y) / 6.0);
        path.curve_to(cp1, cp2, p2);
    }

    path
}

/// Draw a geometric shape.
pub fn render_shape(shape: &Shape, surface: &mut dyn Surface) {
    surface.save();
    let color: Color = shape.color.into();
    let rect = shape.rect();

    match shape.kind {
        ShapeKind::Rectangle => {
            if shape.is_filled {
                surface.fill_rect(rect, color);
            } else {
                surface.stroke_rect(rect, color, shape.line_width);
            }
        }
        ShapeKind::Ellipse => {
            if shape.is_filled {
                surface.fill_ellipse(rect, color);
            } else {
                surface.stroke_ellipse(rect, color, shape.line_width);
            }
        }
        ShapeKind::Line => {
            let mut path = BezPath::new();
            path.move_to(shape.origin);
            path.line_to(shape.end_point());
            surface.stroke_path(&path, color, shape.line_width);
        }
        ShapeKind::Arrow => {
            surface.stroke_path(
                &arrow_path(shape.origin, shape.end_point()),
                color,
                shape.line_width,
            );
        }
    }

    surface.restore();
}

/// Shaft plus a two-segment chevron head at the end point.
fn arrow_path(start: Point, end: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(start);
    path.line_to(end);

    let angle = (end.y - start.y).atan2(end.x - start.x);
    let left = Point::new(
        end.x - ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).cos(),
        end.y - ARROW_HEAD_LENGTH * (angle - ARROW_HEAD_ANGLE).sin(),
    );
    let right = Point::new(
        end.x - ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).cos(),
        end.y - ARROW_HEAD_LENGTH * (angle + ARROW_HEAD_ANGLE).sin(),
    );

    path.move_to(end);
    path.line_to(left);
    path.move_to(end);
    path.line_to(right);

    path
}

/// Draw a text element. Empty strings are skipped entirely.
pub fn render_text(text: &Text, surface: &mut dyn Surface) {
    if text.text.is_empty() {
        return;
    }
    surface.save();
    let font = FontSpec {
        family: &text.font_name,
        size: text.font_size,
        bold: text.is_bold,
        italic: text.is_italic,
    };
    surface.draw_text(&text.text, text.position, &font, text.color.into());
    surface.restore();
}

/// Draw the uncommitted stroke or shape of an in-progress gesture through
/// the same paths as committed elements.
pub fn render_preview(
    interaction: &InteractionState,
    settings: &ToolSettings,
    surface: &mut dyn Surface,
) {
    if let Some(stroke) = interaction.preview_stroke(settings) {
        render_stroke(&stroke, surface);
    }
    if let Some(shape) = interaction.preview_shape() {
        render_shape(shape, surface);
    }
}

/// Draw the pointer trail: a fading glow and core dot per live point, with
/// a connecting segment to the next point at the same decayed alpha.
pub fn render_trail(trail: &PointerTrail, now: Instant, surface: &mut dyn Surface) {
    if trail.is_empty() {
        return;
    }

    surface.save();
    let color = trail_color();
    let points = trail.points();

    for (i, trail_point) in points.iter().enumerate() {
        let alpha = trail_point.alpha(now);
        if alpha <= 0.0 {
            continue;
        }

        let glow = geometry::region_around(trail_point.position, TRAIL_RADIUS * 2.0);
        surface.fill_ellipse(glow, with_alpha(color, alpha * 0.3));

        let core = geometry::region_around(trail_point.position, TRAIL_RADIUS);
        surface.fill_ellipse(core, with_alpha(color, alpha));

        if let Some(next) = points.get(i + 1) {
            let mut segment = BezPath::new();
            segment.move_to(trail_point.position);
            segment.line_to(next.position);
            surface.stroke_path(&segment, with_alpha(color, alpha * 0.5), TRAIL_LINE_WIDTH);
        }
    }

    surface.restore();
}

/// Color with its alpha channel scaled by `alpha`.
fn with_alpha(color: Color, alpha: f64) -> Color {
    let rgba = color.to_rgba8();
    Color::from_rgba8(
        rgba.r,
        rgba.g,
        rgba.b,
        (rgba.a as f64 * alpha.clamp(0.0, 1.0)).round() as u8,
    )
}

//! SVG surface: draw commands rendered into an SVG document.
//!
//! Used for vector export. SVG shares the engine's y-down coordinate
//! space, but addresses text by baseline rather than by the top-left
//! corner of the layout box; `draw_text` does that conversion here.

use crate::surface::{FontSpec, RenderError, RenderResult, Surface};
use inkboard_core::page::Page;
use kurbo::{BezPath, PathEl, Point, Rect, Size};
use peniko::Color;
use std::fmt::Write as _;
use std::path::Path as FsPath;

/// Fraction of the font size from the top of a line to its baseline.
const BASELINE_FACTOR: f64 = 0.8;
/// Line height as a multiple of the font size, matching text measurement.
const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// A [`Surface`] that accumulates SVG markup.
#[derive(Debug)]
pub struct SvgSurface {
    size: Size,
    body: String,
    alpha: f64,
    alpha_stack: Vec<f64>,
}

impl SvgSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            body: String::new(),
            alpha: 1.0,
            alpha_stack: Vec::new(),
        }
    }

    /// Produce the complete SVG document.
    pub fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w:.0}\" height=\"{h:.0}\" viewBox=\"0 0 {w:.2} {h:.2}\">\n{body}</svg>\n",
            w = self.size.width,
            h = self.size.height,
            body = self.body,
        )
    }

    /// Hex color plus the effective opacity under the current alpha state.
    fn color_attrs(&self, color: Color) -> (String, f64) {
        let rgba = color.to_rgba8();
        let hex = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
        let opacity = (rgba.a as f64 / 255.0) * self.alpha;
        (hex, opacity)
    }
}

/// Encode a path as an SVG `d` attribute.
fn path_data(path: &BezPath) -> String {
    let mut d = String::new();
    for el in path.elements() {
        if !d.is_empty() {
            d.push(' ');
        }
        match el {
            PathEl::MoveTo(p) => {
                let _ = write!(d, "M{:.2},{:.2}", p.x, p.y);
            }
            PathEl::LineTo(p) => {
                let _ = write!(d, "L{:.2},{:.2}", p.x, p.y);
            }
            PathEl::QuadTo(p1, p2) => {
                let _ = write!(d, "Q{:.2},{:.2} {:.2},{:.2}", p1.x, p1.y, p2.x, p2.y);
            }
            PathEl::CurveTo(p1, p2, p3) => {
                let _ = write!(
                    d,
                    "C{:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                    p1.x, p1.y, p2.x, p2.y, p3.x, p3.y
                );
            }
            PathEl::ClosePath => d.push('Z'),
        }
    }
    d
}

/// Escape text content for XML.
fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

impl Surface for SvgSurface {
    fn save(&mut self) {
        self.alpha_stack.push(self.alpha);
    }

    fn restore(&mut self) {
        if let Some(alpha) = self.alpha_stack.pop() {
            self.alpha = alpha;
        }
    }

    fn set_alpha(&mut self, alpha: f64) {
        self.alpha = alpha.clamp(0.0, 1.0);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let (hex, opacity) = self.color_attrs(color);
        let _ = writeln!(
            self.body,
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"{}\" fill-opacity=\"{:.3}\"/>",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex,
            opacity,
        );
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64) {
        let (hex, opacity) = self.color_attrs(color);
        let _ = writeln!(
            self.body,
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{:.3}\" stroke-width=\"{:.2}\" stroke-linejoin=\"round\"/>",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            hex,
            opacity,
            width,
        );
    }

    fn fill_ellipse(&mut self, rect: Rect, color: Color) {
        let (hex, opacity) = self.color_attrs(color);
        let center = rect.center();
        let _ = writeln!(
            self.body,
            "  <ellipse cx=\"{:.2}\" cy=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\" fill=\"{}\" fill-opacity=\"{:.3}\"/>",
            center.x,
            center.y,
            rect.width() / 2.0,
            rect.height() / 2.0,
            hex,
            opacity,
        );
    }

    fn stroke_ellipse(&mut self, rect: Rect, color: Color, width: f64) {
        let (hex, opacity) = self.color_attrs(color);
        let center = rect.center();
        let _ = writeln!(
            self.body,
            "  <ellipse cx=\"{:.2}\" cy=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{:.3}\" stroke-width=\"{:.2}\"/>",
            center.x,
            center.y,
            rect.width() / 2.0,
            rect.height() / 2.0,
            hex,
            opacity,
            width,
        );
    }

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64) {
        let (hex, opacity) = self.color_attrs(color);
        let _ = writeln!(
            self.body,
            "  <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-opacity=\"{:.3}\" stroke-width=\"{:.2}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
            path_data(path),
            hex,
            opacity,
            width,
        );
    }

    fn draw_text(&mut self, text: &str, origin: Point, font: &FontSpec<'_>, color: Color) {
        let (hex, opacity) = self.color_attrs(color);
        let weight = if font.bold { "bold" } else { "normal" };
        let style = if font.italic { "italic" } else { "normal" };

        let _ = writeln!(
            self.body,
            "  <text font-family=\"{}\" font-size=\"{:.2}\" font-weight=\"{}\" font-style=\"{}\" fill=\"{}\" fill-opacity=\"{:.3}\">",
            escape_xml(font.family),
            font.size,
            weight,
            style,
            hex,
            opacity,
        );
        // One tspan per line; y addresses the baseline of each line.
        for (i, line) in text.lines().enumerate() {
            let baseline =
                origin.y + i as f64 * font.size * LINE_HEIGHT_FACTOR + font.size * BASELINE_FACTOR;
            let _ = writeln!(
                self.body,
                "    <tspan x=\"{:.2}\" y=\"{:.2}\">{}</tspan>",
                origin.x,
                baseline,
                escape_xml(line),
            );
        }
        let _ = writeln!(self.body, "  </text>");
    }
}

/// Render a page to a standalone SVG document string.
pub fn page_to_svg(page: &Page, size: Size) -> String {
    let mut surface = SvgSurface::new(size);
    crate::engine::render_page(page, size, &mut surface);
    surface.finish()
}

/// Render a page to an SVG file. IO failures are reported without leaving
/// partial output behind.
pub fn write_page_svg(page: &Page, size: Size, path: &FsPath) -> RenderResult<()> {
    let svg = page_to_svg(page, size);
    std::fs::write(path, svg).map_err(RenderError::from)?;
    log::debug!("exported page {} to {}", page.label, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkboard_core::element::{Element, Shape, ShapeKind, Stroke, StrokePoint, Text};
    use inkboard_core::Rgba;

    fn page_with(elements: Vec<Element>) -> Page {
        let mut page = Page::new("Page 1");
        page.background_color = Rgba::BLACK;
        page.elements = elements;
        page
    }

    #[test]
    fn test_document_structure() {
        let svg = page_to_svg(&page_with(vec![]), Size::new(640.0, 480.0));
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("viewBox=\"0 0 640.00 480.00\""));
        // Background fill.
        assert!(svg.contains("<rect"));
        assert!(svg.contains("fill=\"#000000\""));
    }

    #[test]
    fn test_smoothed_stroke_becomes_curves() {
        let stroke = Stroke::from_points(vec![
            StrokePoint::plain(Point::new(0.0, 0.0)),
            StrokePoint::plain(Point::new(10.0, 10.0)),
            StrokePoint::plain(Point::new(20.0, 5.0)),
        ]);
        let svg = page_to_svg(
            &page_with(vec![Element::Stroke(stroke)]),
            Size::new(100.0, 100.0),
        );
        assert!(svg.contains("<path d=\"M0.00,0.00 C"));
        assert!(svg.contains("stroke-linecap=\"round\""));
    }

    #[test]
    fn test_single_point_stroke_emits_no_path() {
        let stroke = Stroke::from_points(vec![StrokePoint::plain(Point::new(5.0, 5.0))]);
        let svg = page_to_svg(
            &page_with(vec![Element::Stroke(stroke)]),
            Size::new(100.0, 100.0),
        );
        assert!(!svg.contains("<path"));
    }

    #[test]
    fn test_highlighter_opacity_in_output() {
        let mut stroke = Stroke::from_points(vec![
            StrokePoint::plain(Point::new(0.0, 0.0)),
            StrokePoint::plain(Point::new(10.0, 0.0)),
        ]);
        stroke.opacity = 0.35;
        let svg = page_to_svg(
            &page_with(vec![Element::Stroke(stroke)]),
            Size::new(100.0, 100.0),
        );
        assert!(svg.contains("stroke-opacity=\"0.350\""));
    }

    #[test]
    fn test_ellipse_element() {
        let mut shape = Shape::new(ShapeKind::Ellipse, Point::new(10.0, 10.0));
        shape.size = Size::new(40.0, 20.0);
        let svg = page_to_svg(
            &page_with(vec![Element::Shape(shape)]),
            Size::new(100.0, 100.0),
        );
        assert!(svg.contains("<ellipse cx=\"30.00\" cy=\"20.00\" rx=\"20.00\" ry=\"10.00\""));
    }

    #[test]
    fn test_empty_text_omitted() {
        let svg = page_to_svg(
            &page_with(vec![Element::Text(Text::new(Point::ZERO, ""))]),
            Size::new(100.0, 100.0),
        );
        assert!(!svg.contains("<text"));
    }

    #[test]
    fn test_text_content_is_escaped() {
        let text = Text::new(Point::new(10.0, 10.0), "a < b & c");
        let svg = page_to_svg(
            &page_with(vec![Element::Text(text)]),
            Size::new(100.0, 100.0),
        );
        assert!(svg.contains("a &lt; b &amp; c"));
        assert!(!svg.contains("a < b & c"));
    }

    #[test]
    fn test_multiline_text_uses_tspans() {
        let text = Text::new(Point::new(0.0, 0.0), "first\nsecond");
        let svg = page_to_svg(
            &page_with(vec![Element::Text(text)]),
            Size::new(100.0, 100.0),
        );
        assert_eq!(svg.matches("<tspan").count(), 2);
        // Baseline of the first line sits below the top-left anchor.
        assert!(svg.contains("y=\"19.20\""));
    }

    #[test]
    fn test_write_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.svg");
        let page = page_with(vec![]);
        write_page_svg(&page, Size::new(320.0, 240.0), &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("</svg>"));
    }

    #[test]
    fn test_write_to_bad_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("export.svg");
        let page = page_with(vec![]);
        assert!(matches!(
            write_page_svg(&page, Size::new(320.0, 240.0), &path),
            Err(RenderError::Io(_))
        ));
    }
}

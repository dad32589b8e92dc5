//! Drawing-surface abstraction.

use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Surface error: {0}")]
    Surface(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Font attributes for a text draw command.
#[derive(Debug, Clone, Copy)]
pub struct FontSpec<'a> {
    pub family: &'a str,
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

/// The drawing-command contract consumed by the rendering engine.
///
/// The coordinate space is y-down with the origin at the top-left, and
/// text is anchored at the top-left corner of its layout box. A backend
/// whose native conventions differ (y-up raster targets,
/// baseline-addressed text) performs the conversion inside its
/// implementation so that output is upright everywhere.
///
/// Strokes are drawn with round caps and round joins. `save`/`restore`
/// bracket any state mutation (currently the alpha multiplier) so that no
/// state leaks between elements.
pub trait Surface {
    /// Push the current graphics state.
    fn save(&mut self);

    /// Pop back to the most recently saved graphics state.
    fn restore(&mut self);

    /// Set the alpha multiplier applied to subsequent commands.
    fn set_alpha(&mut self, alpha: f64);

    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f64);

    /// Fill the ellipse inscribed in `rect`.
    fn fill_ellipse(&mut self, rect: Rect, color: Color);

    /// Stroke the ellipse inscribed in `rect`.
    fn stroke_ellipse(&mut self, rect: Rect, color: Color, width: f64);

    fn stroke_path(&mut self, path: &BezPath, color: Color, width: f64);

    /// Lay out and draw `text` with its top-left corner at `origin`.
    fn draw_text(&mut self, text: &str, origin: Point, font: &FontSpec<'_>, color: Color);
}

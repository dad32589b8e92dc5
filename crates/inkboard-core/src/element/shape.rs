//! Geometric shape element.

use super::ElementId;
use crate::color::Rgba;
use crate::geometry;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The geometric shapes a drag can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    #[default]
    Rectangle,
    Ellipse,
    Arrow,
}

/// A shape anchored at `origin` with a signed `size`.
///
/// Width and height may be negative, encoding the drag direction; geometry
/// queries work on the standardized (normalized) rectangle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shape {
    pub(crate) id: ElementId,
    pub kind: ShapeKind,
    pub origin: Point,
    pub size: Size,
    pub color: Rgba,
    pub line_width: f64,
    pub is_filled: bool,
}

impl Shape {
    pub fn new(kind: ShapeKind, origin: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            origin,
            size: Size::ZERO,
            color: Rgba::WHITE,
            line_width: 3.0,
            is_filled: false,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// The far corner of the drag, `origin + size`.
    pub fn end_point(&self) -> Point {
        self.origin + self.size.to_vec2()
    }

    /// The standardized rectangle spanned by origin and size.
    pub fn rect(&self) -> Rect {
        geometry::standardized_rect(self.origin, self.size)
    }

    /// Standardized rectangle outset by the line width on all sides.
    pub fn bounding_rect(&self) -> Rect {
        self.rect().inflate(self.line_width, self.line_width)
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(ShapeKind::default(), Point::ZERO)
    }
}

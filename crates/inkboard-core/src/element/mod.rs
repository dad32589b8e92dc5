//! Drawable elements placed on a page.

mod shape;
mod stroke;
mod text;

pub use shape::{Shape, ShapeKind};
pub use stroke::{Stroke, StrokePoint};
pub use text::Text;

use kurbo::Rect;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for elements.
pub type ElementId = Uuid;

/// A single drawable unit on the canvas.
///
/// The variant set is closed; the renderer, hit-tester, and bounding-rect
/// computation all match on it exhaustively. Serialized form uses the
/// variant name as the discriminating key (`stroke` / `shape` / `text`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Stroke(Stroke),
    Shape(Shape),
    Text(Text),
}

impl Element {
    /// Identity, fixed at construction.
    pub fn id(&self) -> ElementId {
        match self {
            Element::Stroke(s) => s.id(),
            Element::Shape(s) => s.id(),
            Element::Text(t) => t.id(),
        }
    }

    /// Minimal axis-aligned rectangle enclosing the element's visible
    /// extent, including stroke-width padding. Always recomputed from the
    /// current state, never cached.
    pub fn bounding_rect(&self) -> Rect {
        match self {
            Element::Stroke(s) => s.bounding_rect(),
            Element::Shape(s) => s.bounding_rect(),
            Element::Text(t) => t.bounding_rect(),
        }
    }
}

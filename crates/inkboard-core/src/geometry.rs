//! Geometry helpers shared across the model.
//!
//! Points, sizes, and rectangles come from kurbo; this module adds the two
//! domain-specific constructions the model needs.

use kurbo::{Point, Rect, Size};

/// Normalize an origin plus signed size into a canonical rectangle.
///
/// Drag interactions produce negative widths/heights when the pointer moves
/// up or left of the anchor; the resulting rectangle always has its origin
/// at the top-left.
pub fn standardized_rect(origin: Point, size: Size) -> Rect {
    Rect::from_points(origin, origin + size.to_vec2())
}

/// Square region of side `2 * radius` centered on `center`.
pub fn region_around(center: Point, radius: f64) -> Rect {
    Rect::new(
        center.x - radius,
        center.y - radius,
        center.x + radius,
        center.y + radius,
    )
}

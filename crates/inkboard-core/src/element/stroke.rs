//! Freehand stroke element.

use super::ElementId;
use crate::color::Rgba;
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single point in a stroke with pressure data.
///
/// Pressure is in `[0, 1]` and defaults to 1.0 when the input device
/// provides none.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokePoint {
    pub x: f64,
    pub y: f64,
    #[serde(default = "default_pressure")]
    pub pressure: f64,
}

fn default_pressure() -> f64 {
    1.0
}

impl StrokePoint {
    pub fn new(point: Point, pressure: f64) -> Self {
        Self {
            x: point.x,
            y: point.y,
            pressure: pressure.clamp(0.0, 1.0),
        }
    }

    /// Point without pressure information.
    pub fn plain(point: Point) -> Self {
        Self::new(point, default_pressure())
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// A freehand path defined by an ordered sequence of pressure-tagged
/// points. Insertion order is temporal draw order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stroke {
    pub(crate) id: ElementId,
    pub points: Vec<StrokePoint>,
    pub color: Rgba,
    pub line_width: f64,
    pub opacity: f64,
    pub is_highlighter: bool,
}

impl Stroke {
    pub const DEFAULT_LINE_WIDTH: f64 = 3.0;

    /// Create an empty stroke with default styling.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            points: Vec::new(),
            color: Rgba::WHITE,
            line_width: Self::DEFAULT_LINE_WIDTH,
            opacity: 1.0,
            is_highlighter: false,
        }
    }

    /// Create a stroke from existing points.
    pub fn from_points(points: Vec<StrokePoint>) -> Self {
        Self {
            points,
            ..Self::new()
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Append a point. The bounding rectangle can only grow or stay
    /// unchanged under appends.
    pub fn add_point(&mut self, point: StrokePoint) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Min/max extent of all points, padded by half the line width on every
    /// side. Empty strokes report a zero rectangle.
    pub fn bounding_rect(&self) -> Rect {
        if self.points.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f64::MAX;
        let mut min_y = f64::MAX;
        let mut max_x = f64::MIN;
        let mut max_y = f64::MIN;

        for point in &self.points {
            min_x = min_x.min(point.x);
            min_y = min_y.min(point.y);
            max_x = max_x.max(point.x);
            max_y = max_y.max(point.y);
        }

        let pad = self.line_width / 2.0;
        Rect::new(min_x - pad, min_y - pad, max_x + pad, max_y + pad)
    }
}

impl Default for Stroke {
    fn default() -> Self {
        Self::new()
    }
}

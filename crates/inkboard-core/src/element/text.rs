//! Text element.

use super::ElementId;
use crate::color::Rgba;
use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Line height as a multiple of the font size.
const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// A piece of text anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Text {
    pub(crate) id: ElementId,
    pub text: String,
    pub position: Point,
    pub font_size: f64,
    pub color: Rgba,
    pub font_name: String,
    pub is_bold: bool,
    pub is_italic: bool,
}

impl Text {
    pub const DEFAULT_FONT_SIZE: f64 = 24.0;
    pub const DEFAULT_FONT_NAME: &'static str = "Helvetica Neue";

    pub fn new(position: Point, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            position,
            font_size: Self::DEFAULT_FONT_SIZE,
            color: Rgba::WHITE,
            font_name: Self::DEFAULT_FONT_NAME.to_string(),
            is_bold: false,
            is_italic: false,
        }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Average character advance as a fraction of the font size. Bold and
    /// italic faces run slightly wider.
    fn advance_factor(&self) -> f64 {
        let mut factor = 0.52;
        if self.is_bold {
            factor += 0.04;
        }
        if self.is_italic {
            factor += 0.02;
        }
        factor
    }

    /// Layout extent of the content under the current font attributes.
    ///
    /// Width follows the widest line; height is one line-height per line.
    pub fn measured_size(&self) -> Size {
        let widest = self
            .text
            .lines()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0);

        let mut line_count = self.text.lines().count().max(1);
        if self.text.ends_with('\n') {
            line_count += 1;
        }

        Size::new(
            widest as f64 * self.font_size * self.advance_factor(),
            line_count as f64 * self.font_size * LINE_HEIGHT_FACTOR,
        )
    }

    /// Anchor position plus measured layout extent.
    pub fn bounding_rect(&self) -> Rect {
        Rect::from_origin_size(self.position, self.measured_size())
    }
}

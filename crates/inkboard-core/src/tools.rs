//! Tool selection state consumed by the interaction layer.

use crate::color::Rgba;
use crate::element::{ShapeKind, Text};
use serde::{Deserialize, Serialize};

/// Opacity applied while the highlighter is selected.
const HIGHLIGHTER_OPACITY: f64 = 0.35;

/// All available drawing tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    #[default]
    Pen,
    Highlighter,
    Eraser,
    Line,
    Rectangle,
    Ellipse,
    Arrow,
    Text,
    Select,
    Laser,
}

impl Tool {
    pub fn label(&self) -> &'static str {
        match self {
            Tool::Pen => "Pen",
            Tool::Highlighter => "Highlighter",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rectangle",
            Tool::Ellipse => "Ellipse",
            Tool::Arrow => "Arrow",
            Tool::Text => "Text",
            Tool::Select => "Select",
            Tool::Laser => "Laser",
        }
    }

    /// Whether this tool draws freehand strokes.
    pub fn is_stroke_tool(&self) -> bool {
        matches!(self, Tool::Pen | Tool::Highlighter)
    }

    /// Whether this tool creates shapes.
    pub fn is_shape_tool(&self) -> bool {
        matches!(
            self,
            Tool::Line | Tool::Rectangle | Tool::Ellipse | Tool::Arrow
        )
    }

    /// The shape kind produced by a shape tool.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Rectangle => Some(ShapeKind::Rectangle),
            Tool::Ellipse => Some(ShapeKind::Ellipse),
            Tool::Arrow => Some(ShapeKind::Arrow),
            _ => None,
        }
    }

    /// Default opacity for this tool.
    pub fn default_opacity(&self) -> f64 {
        if *self == Tool::Highlighter {
            HIGHLIGHTER_OPACITY
        } else {
            1.0
        }
    }

    pub fn all() -> &'static [Tool] {
        &[
            Tool::Pen,
            Tool::Highlighter,
            Tool::Eraser,
            Tool::Line,
            Tool::Rectangle,
            Tool::Ellipse,
            Tool::Arrow,
            Tool::Text,
            Tool::Select,
            Tool::Laser,
        ]
    }
}

/// Live tool selection state: the current tool plus the styling applied to
/// new elements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolSettings {
    pub tool: Tool,
    pub color: Rgba,
    pub stroke_width: f64,
    pub opacity: f64,
    pub font_size: f64,
    pub font_name: String,
    pub is_bold: bool,
    pub is_italic: bool,
}

impl ToolSettings {
    /// Switch tools, applying the highlighter opacity rule: selecting the
    /// highlighter drops opacity, selecting any other non-text tool
    /// restores it.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        if tool == Tool::Highlighter {
            self.opacity = HIGHLIGHTER_OPACITY;
        } else if tool != Tool::Text {
            self.opacity = 1.0;
        }
    }
}

impl Default for ToolSettings {
    fn default() -> Self {
        Self {
            tool: Tool::Pen,
            color: Rgba::WHITE,
            stroke_width: 3.0,
            opacity: 1.0,
            font_size: Text::DEFAULT_FONT_SIZE,
            font_name: Text::DEFAULT_FONT_NAME.to_string(),
            is_bold: false,
            is_italic: false,
        }
    }
}

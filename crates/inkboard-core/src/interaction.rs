//! In-progress interaction state.
//!
//! Accumulates the uncommitted stroke or shape while the pointer is down
//! and commits it to the whiteboard on release. The renderer draws the
//! uncommitted element through the same paths as committed ones, via the
//! preview accessors.

use crate::board::{Whiteboard, DEFAULT_ERASER_RADIUS};
use crate::element::{Element, Shape, Stroke, StrokePoint};
use crate::tools::{Tool, ToolSettings};
use crate::trail::PointerTrail;
use kurbo::{Point, Size};

/// Minimum drag extent (per axis) for a shape to be committed. Smaller
/// drags are treated as accidental taps.
pub const MIN_SHAPE_EXTENT: f64 = 2.0;

/// Tracks the element being produced by the current pointer gesture.
#[derive(Debug, Default)]
pub struct InteractionState {
    stroke_points: Vec<StrokePoint>,
    shape_preview: Option<Shape>,
    trail: PointerTrail,
    dragging: bool,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Begin a gesture at `position`. Pressure is taken as 1.0 when the
    /// device reports none. Text and select tools are handled by the UI
    /// layer and start no gesture here.
    pub fn pointer_down(
        &mut self,
        position: Point,
        pressure: Option<f64>,
        settings: &ToolSettings,
        board: &mut Whiteboard,
    ) {
        self.dragging = true;
        match settings.tool {
            Tool::Pen | Tool::Highlighter => {
                self.stroke_points = vec![StrokePoint::new(position, pressure.unwrap_or(1.0))];
            }
            Tool::Eraser => {
                board.erase_at(position, DEFAULT_ERASER_RADIUS);
            }
            tool if tool.is_shape_tool() => {
                let kind = tool.shape_kind().unwrap_or_default();
                let mut shape = Shape::new(kind, position);
                shape.color = settings.color;
                shape.line_width = settings.stroke_width;
                self.shape_preview = Some(shape);
            }
            Tool::Laser => {
                self.trail.clear();
                self.trail.push(position);
            }
            Tool::Text | Tool::Select => {}
            _ => {}
        }
    }

    /// Continue the gesture. No-op when no gesture is active.
    pub fn pointer_drag(
        &mut self,
        position: Point,
        pressure: Option<f64>,
        settings: &ToolSettings,
        board: &mut Whiteboard,
    ) {
        if !self.dragging {
            return;
        }
        match settings.tool {
            Tool::Pen | Tool::Highlighter => {
                self.stroke_points
                    .push(StrokePoint::new(position, pressure.unwrap_or(1.0)));
            }
            Tool::Eraser => {
                board.erase_at(position, DEFAULT_ERASER_RADIUS);
            }
            tool if tool.is_shape_tool() => {
                if let Some(shape) = &mut self.shape_preview {
                    shape.size =
                        Size::new(position.x - shape.origin.x, position.y - shape.origin.y);
                }
            }
            Tool::Laser => {
                self.trail.push(position);
            }
            _ => {}
        }
    }

    /// End the gesture, committing the accumulated element if it qualifies:
    /// a stroke needs at least two points, a shape more than
    /// [`MIN_SHAPE_EXTENT`] on either axis. The trail fades on its own.
    pub fn pointer_up(&mut self, settings: &ToolSettings, board: &mut Whiteboard) {
        if !self.dragging {
            return;
        }
        self.dragging = false;

        match settings.tool {
            Tool::Pen | Tool::Highlighter => {
                let points = std::mem::take(&mut self.stroke_points);
                if points.len() >= 2 {
                    board.add_element(Element::Stroke(self.build_stroke(points, settings)));
                }
            }
            tool if tool.is_shape_tool() => {
                if let Some(shape) = self.shape_preview.take() {
                    if shape.size.width.abs() > MIN_SHAPE_EXTENT
                        || shape.size.height.abs() > MIN_SHAPE_EXTENT
                    {
                        board.add_element(Element::Shape(shape));
                    }
                }
            }
            _ => {}
        }
    }

    /// The uncommitted stroke styled with the current settings, if a stroke
    /// gesture is in progress.
    pub fn preview_stroke(&self, settings: &ToolSettings) -> Option<Stroke> {
        if self.stroke_points.is_empty() {
            return None;
        }
        Some(self.build_stroke(self.stroke_points.clone(), settings))
    }

    /// The uncommitted shape, if a shape gesture is in progress.
    pub fn preview_shape(&self) -> Option<&Shape> {
        self.shape_preview.as_ref()
    }

    pub fn trail(&self) -> &PointerTrail {
        &self.trail
    }

    pub fn trail_mut(&mut self) -> &mut PointerTrail {
        &mut self.trail
    }

    fn build_stroke(&self, points: Vec<StrokePoint>, settings: &ToolSettings) -> Stroke {
        let mut stroke = Stroke::from_points(points);
        stroke.color = settings.color;
        stroke.line_width = settings.stroke_width;
        stroke.opacity = settings.opacity;
        stroke.is_highlighter = settings.tool == Tool::Highlighter;
        stroke
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings_for(tool: Tool) -> ToolSettings {
        let mut settings = ToolSettings::default();
        settings.select_tool(tool);
        settings
    }

    #[test]
    fn test_stroke_gesture_commits_on_release() {
        let mut board = Whiteboard::new();
        let mut interaction = InteractionState::new();
        let settings = settings_for(Tool::Pen);

        interaction.pointer_down(Point::new(0.0, 0.0), Some(0.8), &settings, &mut board);
        interaction.pointer_drag(Point::new(10.0, 10.0), Some(0.9), &settings, &mut board);
        interaction.pointer_drag(Point::new(20.0, 5.0), None, &settings, &mut board);

        let preview = interaction.preview_stroke(&settings).unwrap();
        assert_eq!(preview.len(), 3);

        interaction.pointer_up(&settings, &mut board);
        assert_eq!(board.elements().len(), 1);
        assert!(interaction.preview_stroke(&settings).is_none());

        match &board.elements()[0] {
            Element::Stroke(stroke) => {
                assert_eq!(stroke.points, preview.points);
                assert!(!stroke.is_highlighter);
            }
            other => panic!("expected a stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_tap_commits_nothing() {
        let mut board = Whiteboard::new();
        let mut interaction = InteractionState::new();
        let settings = settings_for(Tool::Pen);

        interaction.pointer_down(Point::new(5.0, 5.0), None, &settings, &mut board);
        interaction.pointer_up(&settings, &mut board);
        assert!(board.elements().is_empty());
        assert!(!board.can_undo());
    }

    #[test]
    fn test_highlighter_flag_and_opacity() {
        let mut board = Whiteboard::new();
        let mut interaction = InteractionState::new();
        let settings = settings_for(Tool::Highlighter);

        interaction.pointer_down(Point::new(0.0, 0.0), None, &settings, &mut board);
        interaction.pointer_drag(Point::new(10.0, 0.0), None, &settings, &mut board);
        interaction.pointer_up(&settings, &mut board);

        match &board.elements()[0] {
            Element::Stroke(stroke) => {
                assert!(stroke.is_highlighter);
                assert!((stroke.opacity - 0.35).abs() < f64::EPSILON);
            }
            other => panic!("expected a stroke, got {other:?}"),
        }
    }

    #[test]
    fn test_shape_gesture_tracks_drag_direction() {
        let mut board = Whiteboard::new();
        let mut interaction = InteractionState::new();
        let settings = settings_for(Tool::Rectangle);

        interaction.pointer_down(Point::new(100.0, 100.0), None, &settings, &mut board);
        interaction.pointer_drag(Point::new(60.0, 70.0), None, &settings, &mut board);

        let preview = interaction.preview_shape().unwrap();
        assert!((preview.size.width + 40.0).abs() < f64::EPSILON);
        assert!((preview.size.height + 30.0).abs() < f64::EPSILON);

        interaction.pointer_up(&settings, &mut board);
        assert_eq!(board.elements().len(), 1);
        assert!(interaction.preview_shape().is_none());
    }

    #[test]
    fn test_tiny_shape_discarded() {
        let mut board = Whiteboard::new();
        let mut interaction = InteractionState::new();
        let settings = settings_for(Tool::Ellipse);

        interaction.pointer_down(Point::new(0.0, 0.0), None, &settings, &mut board);
        interaction.pointer_drag(Point::new(1.5, 1.5), None, &settings, &mut board);
        interaction.pointer_up(&settings, &mut board);
        assert!(board.elements().is_empty());
    }

    #[test]
    fn test_eraser_drag_erases_continuously() {
        let mut board = Whiteboard::new();
        let mut stroke = Stroke::from_points(vec![
            StrokePoint::plain(Point::new(0.0, 0.0)),
            StrokePoint::plain(Point::new(5.0, 5.0)),
        ]);
        stroke.line_width = 2.0;
        board.add_element(Element::Stroke(stroke));

        let mut interaction = InteractionState::new();
        let settings = settings_for(Tool::Eraser);
        interaction.pointer_down(Point::new(2.0, 2.0), None, &settings, &mut board);
        interaction.pointer_up(&settings, &mut board);
        assert!(board.elements().is_empty());
    }

    #[test]
    fn test_laser_accumulates_trail_only() {
        let mut board = Whiteboard::new();
        let mut interaction = InteractionState::new();
        let settings = settings_for(Tool::Laser);

        interaction.pointer_down(Point::new(0.0, 0.0), None, &settings, &mut board);
        interaction.pointer_drag(Point::new(10.0, 0.0), None, &settings, &mut board);
        interaction.pointer_up(&settings, &mut board);

        assert_eq!(interaction.trail().len(), 2);
        assert!(board.elements().is_empty());
        assert!(!board.can_undo());
    }
}

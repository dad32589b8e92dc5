//! Inkboard Core Library
//!
//! Platform-agnostic data structures and logic for the Inkboard whiteboard:
//! the element model, pages and documents, undo/redo history, hit-testing,
//! tool state, in-progress interaction state, and persistence.

pub mod board;
pub mod color;
pub mod element;
pub mod geometry;
pub mod interaction;
pub mod page;
pub mod storage;
pub mod tools;
pub mod trail;

pub use board::{Whiteboard, DEFAULT_ERASER_RADIUS};
pub use color::Rgba;
pub use element::{Element, ElementId, Shape, ShapeKind, Stroke, StrokePoint, Text};
pub use hit_test::{hit_test, DEFAULT_HIT_TOLERANCE};
pub use interaction::InteractionState;
pub use page::{Document, Page};
pub use tools::{Tool, ToolSettings};
pub use trail::{PointerTrail, TrailPoint, REPAINT_INTERVAL, TRAIL_LIFETIME};

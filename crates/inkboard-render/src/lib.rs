//! Inkboard renderer
//!
//! The drawing-surface abstraction, the element rendering engine, and the
//! SVG export backend. Screen display and export share the same rendering
//! logic: anything implementing [`Surface`] gets identical output.

pub mod engine;
pub mod surface;
pub mod svg;

pub use surface::{FontSpec, RenderError, RenderResult, Surface};
pub use svg::{page_to_svg, write_page_svg, SvgSurface};

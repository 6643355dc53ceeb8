//! matkit Core
//!
//! Foundational types shared by every matkit control:
//!
//! - **Geometry**: points, sizes, rectangles and 2D affine transforms
//! - **Color**: RGBA colors with hex parsing and interpolation
//! - **Paths**: vector path construction (lines, quadratic and cubic curves)
//! - **Draw Context**: the rendering sink controls paint through, plus a
//!   recording implementation for replay and tests

pub mod draw;
pub mod error;
pub mod geometry;

pub use draw::{
    DrawCommand, DrawContext, LineCap, Path, PathCommand, RecordingContext, Stroke,
    TextAlign, TextStyle,
};
pub use error::{ColorParseError, Result};
pub use geometry::{Affine2D, Color, Point, Rect, Size};

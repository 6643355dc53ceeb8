//! Draw Context - the rendering sink
//!
//! Controls never talk to a GPU or a platform layer directly. They describe
//! what they want painted through the [`DrawContext`] trait, and the host
//! decides how to rasterize it. [`RecordingContext`] is the reference sink: it
//! records every call as a [`DrawCommand`] so hosts can replay the commands
//! and tests can inspect them.
//!
//! # Example
//!
//! ```
//! use matkit_core::{Color, DrawContext, Path, RecordingContext, Stroke};
//!
//! let mut ctx = RecordingContext::new();
//! let outline = Path::new().move_to(10.0, 0.0).line_to(190.0, 0.0);
//! ctx.stroke_path(&outline, &Stroke::new(2.0), Color::ORANGE);
//!
//! assert_eq!(ctx.commands().len(), 1);
//! ```

use crate::geometry::{Affine2D, Color, Point, Rect};

// ─────────────────────────────────────────────────────────────────────────────
// Stroke Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Line cap style
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    /// Flat cap at the endpoint
    #[default]
    Butt,
    /// Rounded cap extending past the endpoint
    Round,
    /// Square cap extending past the endpoint
    Square,
}

/// Stroke style configuration
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    /// Line width
    pub width: f32,
    /// Line cap style
    pub cap: LineCap,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            cap: LineCap::Butt,
        }
    }
}

impl Stroke {
    /// Create a new stroke with the given width
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Set line cap style
    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Horizontal text alignment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text style for drawing
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Font family (None = platform default)
    pub family: Option<String>,
    /// Font size in points
    pub size: f32,
    /// Text color
    pub color: Color,
    /// Horizontal alignment relative to the origin
    pub align: TextAlign,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: None,
            size: 14.0,
            color: Color::BLACK,
            align: TextAlign::Left,
        }
    }
}

impl TextStyle {
    pub fn new(size: f32) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_family(mut self, family: Option<String>) -> Self {
        self.family = family;
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Path Types
// ─────────────────────────────────────────────────────────────────────────────

/// Path command for building vector paths
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    /// Move to a point
    MoveTo(Point),
    /// Line to a point
    LineTo(Point),
    /// Quadratic Bézier curve
    QuadTo { control: Point, end: Point },
    /// Cubic Bézier curve
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    /// Close the current subpath
    Close,
}

impl PathCommand {
    /// The point the pen rests on after this command
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(*p),
            PathCommand::QuadTo { end, .. } | PathCommand::CubicTo { end, .. } => Some(*end),
            PathCommand::Close => None,
        }
    }

    /// Same command shifted by a delta
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        match *self {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(p.offset(dx, dy)),
            PathCommand::LineTo(p) => PathCommand::LineTo(p.offset(dx, dy)),
            PathCommand::QuadTo { control, end } => PathCommand::QuadTo {
                control: control.offset(dx, dy),
                end: end.offset(dx, dy),
            },
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => PathCommand::CubicTo {
                control1: control1.offset(dx, dy),
                control2: control2.offset(dx, dy),
                end: end.offset(dx, dy),
            },
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// A vector path
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

impl Path {
    /// Create a new empty path
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Move to a point
    pub fn move_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
        self
    }

    /// Line to a point
    pub fn line_to(mut self, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
        self
    }

    /// Quadratic Bézier curve
    pub fn quad_to(mut self, cx: f32, cy: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::QuadTo {
            control: Point::new(cx, cy),
            end: Point::new(x, y),
        });
        self
    }

    /// Cubic Bézier curve
    pub fn cubic_to(mut self, cx1: f32, cy1: f32, cx2: f32, cy2: f32, x: f32, y: f32) -> Self {
        self.commands.push(PathCommand::CubicTo {
            control1: Point::new(cx1, cy1),
            control2: Point::new(cx2, cy2),
            end: Point::new(x, y),
        });
        self
    }

    /// Close the path
    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    /// Create a straight line path
    pub fn line(from: Point, to: Point) -> Self {
        Self::new().move_to(from.x, from.y).line_to(to.x, to.y)
    }

    /// Get the path commands
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Check if the path is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// First point of the path (the initial move)
    pub fn start_point(&self) -> Option<Point> {
        self.commands.first().and_then(PathCommand::end_point)
    }

    /// Point where the pen finishes
    pub fn end_point(&self) -> Option<Point> {
        self.commands.iter().rev().find_map(PathCommand::end_point)
    }

    /// Straight-line length between the first and last point.
    ///
    /// Only meaningful for single-segment paths such as a line.
    pub fn chord_length(&self) -> f32 {
        match (self.start_point(), self.end_point()) {
            (Some(a), Some(b)) => ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt(),
            _ => 0.0,
        }
    }

    /// Same path shifted by a delta
    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self {
            commands: self
                .commands
                .iter()
                .map(|cmd| cmd.translated(dx, dy))
                .collect(),
        }
    }

    /// Calculate the bounding rectangle of this path (control points included)
    pub fn bounds(&self) -> Rect {
        if self.commands.is_empty() {
            return Rect::ZERO;
        }

        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;

        let mut include = |p: &Point| {
            min_x = min_x.min(p.x);
            min_y = min_y.min(p.y);
            max_x = max_x.max(p.x);
            max_y = max_y.max(p.y);
        };

        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => include(p),
                PathCommand::QuadTo { control, end } => {
                    include(control);
                    include(end);
                }
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => {
                    include(control1);
                    include(control2);
                    include(end);
                }
                PathCommand::Close => {}
            }
        }

        if min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite() {
            Rect::new(min_x, min_y, max_x - min_x, max_y - min_y)
        } else {
            Rect::ZERO
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// The surface a control paints onto
///
/// Transforms and opacity are stacks: every push must be matched by a pop.
/// Popping past the root is ignored.
pub trait DrawContext {
    /// Push a transform (concatenated with the current one)
    fn push_transform(&mut self, transform: Affine2D);

    /// Pop the top transform from the stack
    fn pop_transform(&mut self);

    /// Get the current combined transform
    fn current_transform(&self) -> Affine2D;

    /// Push a rectangular clip
    fn push_clip(&mut self, rect: Rect);

    /// Pop the top clip
    fn pop_clip(&mut self);

    /// Push an opacity value (multiplied with parent)
    fn push_opacity(&mut self, opacity: f32);

    /// Pop the top opacity from the stack
    fn pop_opacity(&mut self);

    /// Get the current combined opacity
    fn current_opacity(&self) -> f32;

    /// Fill a path
    fn fill_path(&mut self, path: &Path, color: Color);

    /// Stroke a path
    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color);

    /// Fill a rectangle with uniform corner radius
    fn fill_rect(&mut self, rect: Rect, corner_radius: f32, color: Color);

    /// Stroke a rectangle with uniform corner radius
    fn stroke_rect(&mut self, rect: Rect, corner_radius: f32, stroke: &Stroke, color: Color);

    /// Fill a circle
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw text at a position (origin is the top-left of the line box)
    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle);
}

/// A draw command that can be recorded and replayed
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushTransform(Affine2D),
    PopTransform,
    PushClip(Rect),
    PopClip,
    PushOpacity(f32),
    PopOpacity,
    FillPath {
        path: Path,
        color: Color,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        color: Color,
    },
    FillRect {
        rect: Rect,
        corner_radius: f32,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        corner_radius: f32,
        stroke: Stroke,
        color: Color,
    },
    FillCircle {
        center: Point,
        radius: f32,
        color: Color,
    },
    DrawText {
        text: String,
        origin: Point,
        style: TextStyle,
    },
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Affine2D>,
    opacity_stack: Vec<f32>,
}

impl RecordingContext {
    /// Create a new recording context
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
            transform_stack: vec![Affine2D::IDENTITY],
            opacity_stack: vec![1.0],
        }
    }

    /// Get the recorded commands
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Clear all recorded commands
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack = vec![Affine2D::IDENTITY];
        self.opacity_stack = vec![1.0];
    }

    /// All recorded path strokes, in order
    pub fn stroked_paths(&self) -> impl Iterator<Item = (&Path, &Stroke, Color)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::StrokePath {
                path,
                stroke,
                color,
            } => Some((path, stroke, *color)),
            _ => None,
        })
    }

    /// All recorded text runs, in order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, &TextStyle)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::DrawText {
                text,
                origin,
                style,
            } => Some((text.as_str(), *origin, style)),
            _ => None,
        })
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Affine2D) {
        self.commands.push(DrawCommand::PushTransform(transform));
        let combined = self.current_transform().then(&transform);
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
        if self.transform_stack.len() > 1 {
            self.transform_stack.pop();
        } else {
            tracing::trace!("RecordingContext: pop_transform past root ignored");
        }
    }

    fn current_transform(&self) -> Affine2D {
        self.transform_stack.last().copied().unwrap_or_default()
    }

    fn push_clip(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::PushClip(rect));
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }

    fn push_opacity(&mut self, opacity: f32) {
        self.commands.push(DrawCommand::PushOpacity(opacity));
        let current = self.current_opacity();
        self.opacity_stack.push(current * opacity);
    }

    fn pop_opacity(&mut self) {
        self.commands.push(DrawCommand::PopOpacity);
        if self.opacity_stack.len() > 1 {
            self.opacity_stack.pop();
        }
    }

    fn current_opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    fn fill_path(&mut self, path: &Path, color: Color) {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            color,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            color,
        });
    }

    fn fill_rect(&mut self, rect: Rect, corner_radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect {
            rect,
            corner_radius,
            color,
        });
    }

    fn stroke_rect(&mut self, rect: Rect, corner_radius: f32, stroke: &Stroke, color: Color) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            corner_radius,
            stroke: stroke.clone(),
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn draw_text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        self.commands.push(DrawCommand::DrawText {
            text: text.to_string(),
            origin,
            style: style.clone(),
        });
    }
}

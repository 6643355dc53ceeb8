//! Border path geometry
//!
//! Outlined material controls draw their border as two strokes:
//!
//! - the **main outline**: a rounded rectangle traced clockwise that starts at
//!   the right end of the gap on the top edge and finishes at the left end,
//!   so the gap between them stays undrawn and the floating label can sit in
//!   it;
//! - the **hidden fill segment**: a straight stroke along the top edge from
//!   the top-left corner to the right end of the gap, drawn only when the
//!   label is not floating so the border looks unbroken.
//!
//! ```text
//!   r   start      end              w-r
//!   ╭───╴ Email  ╶──────────────────╮
//!   │                               │
//!   ╰───────────────────────────────╯
//! ```
//!
//! Offsets are measured along the top edge from the geometry origin.

use matkit_core::{Path, Point, Rect};

/// How the four corners are traced
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CornerStyle {
    /// One quadratic curve per corner with the rectangle corner as control
    /// point (the outlined text field look)
    #[default]
    Quadratic,
    /// One cubic circle-arc approximation per corner (matches a layer corner
    /// radius, the text view look)
    Circular,
}

/// Container geometry for one layout pass
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    /// Top-left corner of the container
    pub origin: Point,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
}

impl Geometry {
    /// Geometry anchored at the origin
    pub fn new(width: f32, height: f32, corner_radius: f32) -> Self {
        Self {
            origin: Point::ZERO,
            width,
            height,
            corner_radius,
        }
    }

    /// Move the container to a different origin
    pub fn with_origin(mut self, origin: Point) -> Self {
        self.origin = origin;
        self
    }

    /// Corner radius clamped to `0..=min(width, height) / 2`; zero when any
    /// of the three is not finite
    pub fn effective_radius(&self) -> f32 {
        if !(self.corner_radius.is_finite() && self.width.is_finite() && self.height.is_finite()) {
            return 0.0;
        }
        let max_r = (self.width.min(self.height) / 2.0).max(0.0);
        self.corner_radius.clamp(0.0, max_r)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.origin.x, self.origin.y, self.width, self.height)
    }

    /// Whether the geometry has any area to draw into
    pub fn is_drawable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Undrawn interval of the top edge, as offsets from the left edge
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GapInterval {
    pub start: f32,
    pub end: f32,
}

impl GapInterval {
    /// An interval from `start` to `end`; a reversed interval collapses to
    /// zero width at `start`
    pub fn new(start: f32, end: f32) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// A zero-width gap at `offset`
    pub fn closed_at(offset: f32) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// A gap of `width` starting at `start`
    pub fn with_width(start: f32, width: f32) -> Self {
        Self::new(start, start + width.max(0.0))
    }

    pub fn width(&self) -> f32 {
        (self.end - self.start).max(0.0)
    }

    pub fn is_closed(&self) -> bool {
        self.width() <= 0.0
    }

    /// Clamp into the straight part of the top edge, `r..=width - r`.
    ///
    /// A closed gap always normalizes to the top-left corner, where the main
    /// outline naturally begins and ends.
    pub fn clamped_to(&self, geometry: &Geometry) -> Self {
        let r = geometry.effective_radius();
        if !(geometry.is_drawable() && self.start.is_finite() && self.end.is_finite()) {
            return Self::closed_at(r);
        }
        let max = (geometry.width - r).max(r);

        let start = self.start.clamp(r, max);
        let end = self.end.clamp(start, max);
        if end - start <= 0.0 {
            Self::closed_at(r)
        } else {
            Self { start, end }
        }
    }
}

/// The two strokes making up a gapped border
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BorderPaths {
    /// Always drawn
    pub main_outline: Path,
    /// Drawn only while the gap should look closed
    pub hidden_fill_segment: Path,
}

/// Builds gapped rounded-rectangle border paths
///
/// Pure and deterministic: the same geometry and gap always produce the same
/// paths, and every output has the same number of commands regardless of
/// where the gap sits.
#[derive(Clone, Copy, Debug, Default)]
pub struct BorderPathBuilder {
    corner_style: CornerStyle,
}

/// Cubic Bézier circle approximation constant
const KAPPA: f32 = 0.552_284_75;

impl BorderPathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_corner_style(mut self, style: CornerStyle) -> Self {
        self.corner_style = style;
        self
    }

    pub fn corner_style(&self) -> CornerStyle {
        self.corner_style
    }

    /// Build the main outline and hidden fill segment for `gap`
    ///
    /// Out-of-range input is clamped: the corner radius to half the smaller
    /// side, the gap to the straight part of the top edge.
    pub fn build(&self, geometry: &Geometry, gap: GapInterval) -> BorderPaths {
        let gap = gap.clamped_to(geometry);
        let r = geometry.effective_radius();
        let x = geometry.origin.x;
        let y = geometry.origin.y;
        let w = geometry.width.max(0.0);
        let h = geometry.height.max(0.0);

        let mut path = Path::new().move_to(x + gap.end, y).line_to(x + w - r, y);

        // Top-right corner
        path = self.corner(path, (x + w, y), (x + w, y + r), (x + w - r, y));
        path = path.line_to(x + w, y + h - r);

        // Bottom-right corner
        path = self.corner(path, (x + w, y + h), (x + w - r, y + h), (x + w, y + h - r));
        path = path.line_to(x + r, y + h);

        // Bottom-left corner
        path = self.corner(path, (x, y + h), (x, y + h - r), (x + r, y + h));
        path = path.line_to(x, y + r);

        // Top-left corner, then along the top edge to the gap
        path = self.corner(path, (x, y), (x + r, y), (x, y + r));
        let main_outline = path.line_to(x + gap.start, y);

        let hidden_fill_segment = Path::line(Point::new(x + r, y), Point::new(x + gap.end, y));

        BorderPaths {
            main_outline,
            hidden_fill_segment,
        }
    }

    /// Trace one corner from `from` (where the pen is) to `to` around `corner`
    fn corner(&self, path: Path, corner: (f32, f32), to: (f32, f32), from: (f32, f32)) -> Path {
        match self.corner_style {
            CornerStyle::Quadratic => path.quad_to(corner.0, corner.1, to.0, to.1),
            CornerStyle::Circular => {
                // Pull each control point from its endpoint towards the corner
                let c1 = (
                    from.0 + (corner.0 - from.0) * KAPPA,
                    from.1 + (corner.1 - from.1) * KAPPA,
                );
                let c2 = (
                    to.0 + (corner.0 - to.0) * KAPPA,
                    to.1 + (corner.1 - to.1) * KAPPA,
                );
                path.cubic_to(c1.0, c1.1, c2.0, c2.1, to.0, to.1)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matkit_core::PathCommand;

    const EPS: f32 = 1e-4;

    fn field() -> Geometry {
        Geometry::new(200.0, 44.0, 10.0)
    }

    #[test]
    fn test_open_gap_leaves_top_edge_undrawn() {
        let paths = BorderPathBuilder::new().build(&field(), GapInterval::new(10.0, 55.0));

        let start = paths.main_outline.start_point().unwrap();
        let end = paths.main_outline.end_point().unwrap();
        assert!(start.approx_eq(&Point::new(55.0, 0.0), EPS));
        assert!(end.approx_eq(&Point::new(10.0, 0.0), EPS));

        let hidden = &paths.hidden_fill_segment;
        assert!(hidden.start_point().unwrap().approx_eq(&Point::new(10.0, 0.0), EPS));
        assert!(hidden.end_point().unwrap().approx_eq(&Point::new(55.0, 0.0), EPS));
        assert!((hidden.chord_length() - 45.0).abs() < EPS);
    }

    #[test]
    fn test_closed_gap_draws_full_outline() {
        let paths = BorderPathBuilder::new().build(&field(), GapInterval::closed_at(10.0));

        let start = paths.main_outline.start_point().unwrap();
        let end = paths.main_outline.end_point().unwrap();
        assert!(start.approx_eq(&end, EPS));
        assert!(start.approx_eq(&Point::new(10.0, 0.0), EPS));
        assert_eq!(paths.hidden_fill_segment.chord_length(), 0.0);
    }

    #[test]
    fn test_closed_gap_anywhere_normalizes_to_corner() {
        let paths = BorderPathBuilder::new().build(&field(), GapInterval::closed_at(80.0));
        let hidden = &paths.hidden_fill_segment;
        assert!(hidden.start_point().unwrap().approx_eq(&Point::new(10.0, 0.0), EPS));
        assert_eq!(hidden.chord_length(), 0.0);
    }

    #[test]
    fn test_clockwise_corner_order() {
        let paths = BorderPathBuilder::new().build(&field(), GapInterval::new(10.0, 55.0));
        let corners: Vec<Point> = paths
            .main_outline
            .commands()
            .iter()
            .filter_map(|cmd| match cmd {
                PathCommand::QuadTo { control, .. } => Some(*control),
                _ => None,
            })
            .collect();

        assert_eq!(
            corners,
            vec![
                Point::new(200.0, 0.0),
                Point::new(200.0, 44.0),
                Point::new(0.0, 44.0),
                Point::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_translation_equivariance() {
        let builder = BorderPathBuilder::new();
        let gap = GapInterval::new(12.0, 70.0);
        let base = builder.build(&field(), gap);
        let moved = builder.build(&field().with_origin(Point::new(30.0, -7.5)), gap);

        assert_eq!(
            base.main_outline.commands().len(),
            moved.main_outline.commands().len()
        );
        assert_eq!(base.main_outline.translated(30.0, -7.5), moved.main_outline);
        assert_eq!(
            base.hidden_fill_segment.translated(30.0, -7.5),
            moved.hidden_fill_segment
        );
    }

    #[test]
    fn test_command_count_is_stable() {
        let builder = BorderPathBuilder::new();
        let open = builder.build(&field(), GapInterval::new(10.0, 55.0));
        let closed = builder.build(&field(), GapInterval::closed_at(10.0));
        let circular = builder
            .with_corner_style(CornerStyle::Circular)
            .build(&field(), GapInterval::new(10.0, 55.0));

        let n = open.main_outline.commands().len();
        assert_eq!(n, 10);
        assert_eq!(closed.main_outline.commands().len(), n);
        assert_eq!(circular.main_outline.commands().len(), n);
    }

    #[test]
    fn test_corner_radius_is_clamped() {
        let geometry = Geometry::new(100.0, 20.0, 50.0);
        assert_eq!(geometry.effective_radius(), 10.0);

        let paths = BorderPathBuilder::new().build(&geometry, GapInterval::closed_at(0.0));
        let bounds = paths.main_outline.bounds();
        assert!((bounds.width() - 100.0).abs() < EPS);
        assert!((bounds.height() - 20.0).abs() < EPS);
        assert!(paths
            .hidden_fill_segment
            .start_point()
            .unwrap()
            .approx_eq(&Point::new(10.0, 0.0), EPS));
    }

    #[test]
    fn test_non_finite_radius_builds_square_corners() {
        let geometry = Geometry::new(200.0, 44.0, f32::NAN);
        assert_eq!(geometry.effective_radius(), 0.0);
        assert_eq!(Geometry::new(200.0, 44.0, f32::INFINITY).effective_radius(), 0.0);

        let paths = BorderPathBuilder::new().build(&geometry, GapInterval::new(10.0, 55.0));
        assert_eq!(paths.main_outline.commands().len(), 10);
        let bounds = paths.main_outline.bounds();
        assert!((bounds.width() - 200.0).abs() < EPS);
        assert!((bounds.height() - 44.0).abs() < EPS);
    }

    #[test]
    fn test_non_finite_size_is_undrawable() {
        let geometry = Geometry::new(f32::NAN, 44.0, 10.0);
        assert!(!geometry.is_drawable());
        assert!(!Geometry::new(200.0, f32::INFINITY, 10.0).is_drawable());
        assert_eq!(geometry.effective_radius(), 0.0);

        let gap = GapInterval::new(10.0, 55.0).clamped_to(&geometry);
        assert_eq!(gap, GapInterval::closed_at(0.0));

        let paths = BorderPathBuilder::new().build(&geometry, GapInterval::new(10.0, 55.0));
        assert_eq!(paths.main_outline.commands().len(), 10);
    }

    #[test]
    fn test_non_finite_gap_closes() {
        let gap = GapInterval { start: f32::NAN, end: 55.0 }.clamped_to(&field());
        assert_eq!(gap, GapInterval::closed_at(10.0));
    }

    #[test]
    fn test_gap_clamped_to_top_edge() {
        let gap = GapInterval::new(-5.0, 400.0).clamped_to(&field());
        assert_eq!(gap, GapInterval::new(10.0, 190.0));

        let reversed = GapInterval::new(60.0, 20.0);
        assert!(reversed.is_closed());
    }

    #[test]
    fn test_circular_corners_stay_inside_bounds() {
        let paths = BorderPathBuilder::new()
            .with_corner_style(CornerStyle::Circular)
            .build(&Geometry::new(120.0, 60.0, 8.0), GapInterval::closed_at(8.0));
        let bounds = paths.main_outline.bounds();
        assert!(bounds.x() >= -EPS && bounds.y() >= -EPS);
        assert!(bounds.max_x() <= 120.0 + EPS && bounds.max_y() <= 60.0 + EPS);
    }

    #[test]
    fn test_build_is_deterministic() {
        let builder = BorderPathBuilder::new();
        let gap = GapInterval::with_width(10.0, 45.0);
        assert_eq!(builder.build(&field(), gap), builder.build(&field(), gap));
    }
}

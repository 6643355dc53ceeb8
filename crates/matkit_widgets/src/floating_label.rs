//! Floating label state machine
//!
//! [`FloatingLabelFieldController`] owns the active/inactive status of an
//! outlined field and the width of the border gap its label floats into.
//! Hosts forward focus changes and layout passes to it and get back a
//! [`RenderInstruction`] describing exactly what to stroke and where the
//! label goes. The controller never draws.
//!
//! | state    | text      | gap                   | hidden fill | label   | stroke   |
//! |----------|-----------|-----------------------|-------------|---------|----------|
//! | Active   | any       | label width + padding | suppressed  | floated | active   |
//! | Inactive | empty     | closed                | drawn       | inline  | inactive |
//! | Inactive | non-empty | label width + padding | suppressed  | floated | inactive |

use std::sync::Arc;

use matkit_core::{Color, Rect};

use crate::border::{BorderPathBuilder, BorderPaths, CornerStyle, GapInterval, Geometry};
use crate::text_measure::{FontMetrics, TextMeasurer};

/// Focus status of the field
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Inactive,
    Active,
}

impl FieldState {
    pub fn from_focus(is_active: bool) -> Self {
        if is_active {
            FieldState::Active
        } else {
            FieldState::Inactive
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self, FieldState::Active)
    }
}

/// Visual configuration of an outlined field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldStyle {
    pub corner_radius: f32,
    pub corner_style: CornerStyle,
    pub active_border_color: Color,
    pub inactive_border_color: Color,
    pub active_line_width: f32,
    pub inactive_line_width: f32,
    /// Horizontal room around the floated label, split evenly on both sides
    pub label_padding: f32,
    pub floating_label_height: f32,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            corner_radius: 10.0,
            corner_style: CornerStyle::Quadratic,
            active_border_color: Color::ORANGE,
            inactive_border_color: Color::DARK_GRAY,
            active_line_width: 2.0,
            inactive_line_width: 1.0,
            label_padding: 10.0,
            floating_label_height: 30.0,
        }
    }
}

/// Where the placeholder label sits
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelPlacement {
    /// Shown as the inline placeholder inside the text area
    Inline,
    /// Floated into the border gap
    Floated { frame: Rect },
}

impl LabelPlacement {
    pub fn is_floated(&self) -> bool {
        matches!(self, LabelPlacement::Floated { .. })
    }

    /// Animation target for the float progress (0 = inline, 1 = floated)
    pub fn progress_target(&self) -> f32 {
        if self.is_floated() {
            1.0
        } else {
            0.0
        }
    }
}

/// Everything a host needs to paint the border and label for one frame
#[derive(Clone, Debug, PartialEq)]
pub struct RenderInstruction {
    pub state: FieldState,
    pub gap: GapInterval,
    pub paths: BorderPaths,
    pub stroke_color: Color,
    pub line_width: f32,
    /// Whether `paths.hidden_fill_segment` should be stroked
    pub draw_hidden_fill: bool,
    pub hidden_fill_color: Color,
    pub label: LabelPlacement,
    pub label_color: Color,
}

/// Drives the floating label and the border gap of an outlined field
pub struct FloatingLabelFieldController {
    style: FieldStyle,
    measurer: Arc<dyn TextMeasurer>,
    builder: BorderPathBuilder,
    geometry: Geometry,
    state: FieldState,
    has_text: bool,
    placeholder: String,
    font: FontMetrics,
    label_width: f32,
    dirty: bool,
    last: Option<RenderInstruction>,
}

impl FloatingLabelFieldController {
    pub fn new(style: FieldStyle, measurer: Arc<dyn TextMeasurer>) -> Self {
        let builder = BorderPathBuilder::new().with_corner_style(style.corner_style);
        Self {
            style,
            measurer,
            builder,
            geometry: Geometry::default(),
            state: FieldState::Inactive,
            has_text: false,
            placeholder: String::new(),
            font: FontMetrics::default(),
            label_width: 0.0,
            dirty: true,
            last: None,
        }
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Measured width of the current placeholder
    pub fn label_width(&self) -> f32 {
        self.label_width
    }

    /// Whether a property changed since the last instruction was produced
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Handle a focus change from the host
    ///
    /// Calling again with the same focus, text emptiness, placeholder and
    /// font returns the previous instruction unchanged.
    pub fn on_focus_changed(
        &mut self,
        is_active: bool,
        current_text: &str,
        placeholder: &str,
        font: &FontMetrics,
    ) -> RenderInstruction {
        let state = FieldState::from_focus(is_active);
        let has_text = !current_text.is_empty();

        if let Some(last) = &self.last {
            if !self.dirty
                && state == self.state
                && has_text == self.has_text
                && placeholder == self.placeholder
                && *font == self.font
            {
                tracing::trace!(?state, "FloatingLabel: redundant focus event ignored");
                return last.clone();
            }
        }

        if state != self.state {
            tracing::debug!(from = ?self.state, to = ?state, has_text, "FloatingLabel: focus changed");
        }

        self.state = state;
        self.has_text = has_text;
        if placeholder != self.placeholder || *font != self.font || self.last.is_none() {
            self.placeholder = placeholder.to_string();
            self.font = font.clone();
            self.label_width = self.measurer.measure(placeholder, font);
        }

        self.recompute()
    }

    /// Gap the border should leave open right now
    pub fn current_gap_interval(&self) -> GapInterval {
        let r = self.geometry.effective_radius();
        let open = self.state.is_active() || self.has_text;

        let gap = if open && self.label_width > 0.0 {
            GapInterval::with_width(r, self.label_width + self.style.label_padding)
        } else {
            GapInterval::closed_at(r)
        };

        // Undrawable geometry clamps to a closed gap at the corner
        gap.clamped_to(&self.geometry)
    }

    /// Record the geometry of a new layout pass
    pub fn set_geometry(&mut self, geometry: Geometry) {
        if geometry != self.geometry {
            self.geometry = geometry;
            self.dirty = true;
        }
    }

    /// Replace the visual style
    pub fn set_style(&mut self, style: FieldStyle) {
        if style != self.style {
            self.builder = self.builder.with_corner_style(style.corner_style);
            self.style = style;
            self.dirty = true;
        }
    }

    /// Record a text change that happened without a focus change
    /// (programmatic assignment, paste while inactive)
    pub fn set_text(&mut self, text: &str) {
        let has_text = !text.is_empty();
        if has_text != self.has_text {
            self.has_text = has_text;
            self.dirty = true;
        }
    }

    /// Replace the placeholder and font without a focus change
    pub fn set_placeholder(&mut self, placeholder: &str, font: &FontMetrics) {
        if placeholder != self.placeholder || *font != self.font {
            self.placeholder = placeholder.to_string();
            self.font = font.clone();
            self.label_width = self.measurer.measure(placeholder, font);
            self.dirty = true;
        }
    }

    /// Mark the cached instruction stale
    pub fn invalidate(&mut self) {
        self.dirty = true;
    }

    /// Produce the instruction for the current properties, recomputing only
    /// if something changed since the last call
    pub fn rebuild(&mut self) -> RenderInstruction {
        match &self.last {
            Some(last) if !self.dirty => {
                tracing::trace!("FloatingLabel: rebuild served from cache");
                last.clone()
            }
            _ => self.recompute(),
        }
    }

    fn recompute(&mut self) -> RenderInstruction {
        let gap = self.current_gap_interval();
        let paths = self.builder.build(&self.geometry, gap);
        let style = &self.style;

        let floated = self.state.is_active() || self.has_text;
        let label = if floated {
            LabelPlacement::Floated {
                frame: Rect::new(
                    self.geometry.origin.x + gap.start + style.label_padding / 2.0,
                    self.geometry.origin.y - style.floating_label_height / 2.0,
                    self.label_width,
                    style.floating_label_height,
                ),
            }
        } else {
            LabelPlacement::Inline
        };

        let (stroke_color, line_width) = if self.state.is_active() {
            (style.active_border_color, style.active_line_width)
        } else {
            (style.inactive_border_color, style.inactive_line_width)
        };

        let instruction = RenderInstruction {
            state: self.state,
            gap,
            paths,
            stroke_color,
            line_width,
            draw_hidden_fill: !floated,
            hidden_fill_color: style.inactive_border_color,
            label,
            label_color: stroke_color,
        };

        self.dirty = false;
        self.last = Some(instruction.clone());
        instruction
    }
}

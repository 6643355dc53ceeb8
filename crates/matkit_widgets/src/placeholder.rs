//! Placeholder overlay for multi-line text views
//!
//! The overlay is the greyed-out hint drawn behind an empty text view. It
//! tracks its own visibility across editing events, positions itself
//! vertically, and optionally grows the owning view's height so that a
//! long placeholder is never cut off.

use matkit_core::Color;

/// Vertical placement of the placeholder inside the view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    /// Follow the text container's own inset
    #[default]
    Top,
    Center,
    Bottom,
}

/// A height constraint the overlay may adjust
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeightConstraint {
    pub constant: f32,
    /// Height the host asked for, before any growth
    pub original: f32,
}

impl HeightConstraint {
    pub fn new(constant: f32) -> Self {
        Self {
            constant,
            original: constant,
        }
    }
}

#[derive(Clone, Debug)]
pub struct PlaceholderOverlay {
    text: String,
    color: Color,
    hide_on_editing: bool,
    alignment: VerticalAlignment,
    hidden: bool,
    editing: bool,
    zoom: f32,
    view_height: f32,
    content_height: f32,
    inset_top: f32,
    height_constraint: Option<HeightConstraint>,
}

impl PlaceholderOverlay {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: Color::GRAY,
            hide_on_editing: false,
            alignment: VerticalAlignment::Top,
            hidden: false,
            editing: false,
            zoom: 1.0,
            view_height: 0.0,
            content_height: 0.0,
            inset_top: 0.0,
            height_constraint: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn hide_on_editing(&self) -> bool {
        self.hide_on_editing
    }

    pub fn set_hide_on_editing(&mut self, hide: bool) {
        self.hide_on_editing = hide;
    }

    pub fn alignment(&self) -> VerticalAlignment {
        self.alignment
    }

    /// Change the vertical alignment. Center and bottom placement always
    /// hide the placeholder while editing.
    pub fn set_alignment(&mut self, alignment: VerticalAlignment) {
        self.alignment = alignment;
        self.recalculate_inset();
    }

    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom.max(0.0);
        self.recalculate_inset();
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_visible(&self) -> bool {
        !self.hidden && !self.text.is_empty()
    }

    /// Extra top inset applied by the current alignment
    pub fn inset_top(&self) -> f32 {
        self.inset_top
    }

    pub fn height_constraint(&self) -> Option<HeightConstraint> {
        self.height_constraint
    }

    /// Let the overlay adjust a height constraint of the owning view.
    ///
    /// Giving the same host height again keeps any growth already applied;
    /// a different height replaces the constraint and takes effect on the
    /// next layout pass.
    pub fn attach_height_constraint(&mut self, constant: f32) {
        match self.height_constraint {
            Some(c) if c.original == constant => {}
            _ => self.height_constraint = Some(HeightConstraint::new(constant)),
        }
    }

    /// Height the owning view should have right now
    pub fn resolved_height(&self) -> f32 {
        self.height_constraint
            .map(|c| c.constant)
            .unwrap_or(self.view_height)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Events
    // ─────────────────────────────────────────────────────────────────────────

    /// Layout pass with the view height and the placeholder's content height
    pub fn layout(&mut self, view_height: f32, content_height: f32, text: &str) {
        self.view_height = view_height;
        self.content_height = content_height;
        self.update_content_size(text);
        self.recalculate_inset();
    }

    /// The view's text was replaced programmatically
    pub fn text_assigned(&mut self, text: &str) {
        self.hidden = !text.is_empty();
    }

    pub fn begin_editing(&mut self, text: &str) {
        self.editing = true;
        if text.is_empty() && self.hide_on_editing {
            self.hidden = true;
        }
        self.update_content_size(text);
    }

    pub fn text_changed(&mut self, text: &str) {
        if self.hide_on_editing {
            if text.is_empty() {
                self.hidden = true;
            }
        } else {
            self.hidden = !text.is_empty();
        }
    }

    pub fn end_editing(&mut self, text: &str) {
        self.editing = false;
        if text.is_empty() && self.hide_on_editing {
            self.hidden = false;
        }
        self.update_content_size(text);
    }

    fn update_content_size(&mut self, text: &str) {
        if !text.is_empty() {
            return;
        }
        let content_height = self.content_height;
        let shrink = self.hide_on_editing && self.editing;

        if let Some(constraint) = self.height_constraint.as_mut() {
            if shrink {
                if constraint.original < content_height {
                    constraint.constant = constraint.original;
                }
            } else if constraint.constant < content_height {
                tracing::trace!(
                    from = constraint.constant,
                    to = content_height,
                    "PlaceholderOverlay: growing height constraint"
                );
                constraint.constant = content_height;
            }
        }
    }

    fn recalculate_inset(&mut self) {
        let scaled = self.content_height * self.zoom;
        self.inset_top = match self.alignment {
            VerticalAlignment::Top => 0.0,
            VerticalAlignment::Center => ((self.view_height - scaled) / 2.0).max(0.0),
            VerticalAlignment::Bottom => (self.view_height - scaled).max(0.0),
        };
        if self.alignment != VerticalAlignment::Top {
            self.hide_on_editing = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_follows_text() {
        let mut overlay = PlaceholderOverlay::new("Tell us more");
        assert!(overlay.is_visible());

        overlay.begin_editing("");
        assert!(overlay.is_visible());

        overlay.text_changed("a");
        assert!(overlay.is_hidden());

        overlay.text_changed("");
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_hide_on_editing() {
        let mut overlay = PlaceholderOverlay::new("Tell us more");
        overlay.set_hide_on_editing(true);

        overlay.begin_editing("");
        assert!(overlay.is_hidden());

        overlay.text_changed("");
        assert!(overlay.is_hidden());

        overlay.end_editing("");
        assert!(overlay.is_visible());
    }

    #[test]
    fn test_text_assigned_hides_overlay() {
        let mut overlay = PlaceholderOverlay::new("Tell us more");
        overlay.text_assigned("hello");
        assert!(overlay.is_hidden());
        overlay.text_assigned("");
        assert!(!overlay.is_hidden());
    }

    #[test]
    fn test_center_alignment_inset() {
        let mut overlay = PlaceholderOverlay::new("Tell us more");
        overlay.layout(100.0, 20.0, "");
        overlay.set_alignment(VerticalAlignment::Center);

        assert_eq!(overlay.inset_top(), 40.0);
        assert!(overlay.hide_on_editing());

        overlay.set_zoom(2.0);
        assert_eq!(overlay.inset_top(), 30.0);
    }

    #[test]
    fn test_bottom_alignment_inset_never_negative() {
        let mut overlay = PlaceholderOverlay::new("Tell us more");
        overlay.set_alignment(VerticalAlignment::Bottom);
        overlay.layout(100.0, 20.0, "");
        assert_eq!(overlay.inset_top(), 80.0);

        overlay.layout(10.0, 20.0, "");
        assert_eq!(overlay.inset_top(), 0.0);
        assert!(overlay.hide_on_editing());
    }

    #[test]
    fn test_height_grows_to_placeholder() {
        let mut overlay = PlaceholderOverlay::new("A long placeholder over several lines");
        overlay.attach_height_constraint(40.0);
        overlay.layout(40.0, 68.0, "");

        assert_eq!(overlay.resolved_height(), 68.0);
        assert_eq!(overlay.height_constraint().unwrap().original, 40.0);
    }

    #[test]
    fn test_height_shrinks_back_while_editing_with_hidden_placeholder() {
        let mut overlay = PlaceholderOverlay::new("A long placeholder over several lines");
        overlay.set_hide_on_editing(true);
        overlay.attach_height_constraint(40.0);
        overlay.layout(40.0, 68.0, "");
        assert_eq!(overlay.resolved_height(), 68.0);

        overlay.begin_editing("");
        assert_eq!(overlay.resolved_height(), 40.0);

        overlay.end_editing("");
        assert_eq!(overlay.resolved_height(), 68.0);
    }

    #[test]
    fn test_new_host_height_replaces_constraint() {
        let mut overlay = PlaceholderOverlay::new("A long placeholder over several lines");
        overlay.attach_height_constraint(40.0);
        overlay.layout(40.0, 68.0, "");
        assert_eq!(overlay.resolved_height(), 68.0);

        // Same host height: growth survives
        overlay.attach_height_constraint(40.0);
        overlay.layout(40.0, 68.0, "");
        assert_eq!(overlay.resolved_height(), 68.0);

        overlay.attach_height_constraint(120.0);
        overlay.layout(120.0, 68.0, "");
        assert_eq!(overlay.resolved_height(), 120.0);
        assert_eq!(overlay.height_constraint().unwrap().original, 120.0);

        overlay.attach_height_constraint(30.0);
        overlay.layout(30.0, 68.0, "");
        assert_eq!(overlay.resolved_height(), 68.0);
        assert_eq!(overlay.height_constraint().unwrap().original, 30.0);
    }

    #[test]
    fn test_non_empty_text_leaves_height_alone() {
        let mut overlay = PlaceholderOverlay::new("Tell us more");
        overlay.attach_height_constraint(40.0);
        overlay.layout(40.0, 68.0, "typed");
        assert_eq!(overlay.resolved_height(), 40.0);
    }
}

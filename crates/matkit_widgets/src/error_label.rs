//! Validation message shown under a control
//!
//! Every call to [`ErrorLabel::show`] replays a short push transition: the
//! text slides in from above its frame and is clipped to it while moving.

use matkit_animation::{Easing, Tween};
use matkit_core::{Color, DrawContext, Point, Rect, TextStyle};

/// Duration of the push transition, in seconds
pub const ERROR_TRANSITION_DURATION: f32 = 0.2;

/// A single-line error message with a slide-in transition
#[derive(Clone, Debug)]
pub struct ErrorLabel {
    text: String,
    visible: bool,
    frame: Rect,
    style: TextStyle,
    offset: Tween,
}

impl Default for ErrorLabel {
    fn default() -> Self {
        Self::new()
    }
}

impl ErrorLabel {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            visible: false,
            frame: Rect::ZERO,
            style: TextStyle::new(12.0).with_color(Color::rgb(0.9, 0.2, 0.2)),
            offset: Tween::new(0.0),
        }
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.style.color = color;
        self
    }

    pub fn set_color(&mut self, color: Color) {
        self.style.color = color;
    }

    /// Where the label sits, relative to its owning control
    pub fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show `msg`, or hide the label when `show` is false
    ///
    /// The transition restarts either way; a hidden label keeps its last
    /// message.
    pub fn show(&mut self, msg: &str, show: bool) {
        self.offset.set(-self.frame.height());
        self.offset
            .animate_to(0.0, ERROR_TRANSITION_DURATION, Easing::EASE_IN_OUT_CURVE);

        self.visible = show;
        if show {
            self.text = msg.to_string();
            tracing::debug!(message = %msg, "ErrorLabel: shown");
        } else {
            tracing::debug!("ErrorLabel: hidden");
        }
    }

    /// Vertical offset of the text from its resting position
    pub fn current_offset(&self) -> f32 {
        self.offset.value()
    }

    pub fn is_animating(&self) -> bool {
        !self.offset.is_finished()
    }

    pub fn update(&mut self, dt: f32) {
        self.offset.tick(dt);
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        if !self.visible || self.text.is_empty() {
            return;
        }

        ctx.push_clip(self.frame);
        ctx.draw_text(
            &self.text,
            Point::new(self.frame.x(), self.frame.y() + self.offset.value()),
            &self.style,
        );
        ctx.pop_clip();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matkit_core::{DrawCommand, RecordingContext};

    fn label() -> ErrorLabel {
        let mut label = ErrorLabel::new();
        label.set_frame(Rect::new(0.0, 50.0, 200.0, 16.0));
        label
    }

    #[test]
    fn test_show_slides_in_from_top() {
        let mut label = label();
        label.show("Required", true);

        assert!(label.is_visible());
        assert_eq!(label.text(), "Required");
        assert_eq!(label.current_offset(), -16.0);

        label.update(0.1);
        let mid = label.current_offset();
        assert!(mid > -16.0 && mid < 0.0);

        label.update(0.1);
        assert_eq!(label.current_offset(), 0.0);
        assert!(!label.is_animating());
    }

    #[test]
    fn test_transition_follows_ease_in_out_curve() {
        let mut label = label();
        label.show("Required", true);
        label.update(0.05);

        let expected = -16.0 + 16.0 * Easing::EASE_IN_OUT_CURVE.apply(0.25);
        assert!((label.current_offset() - expected).abs() < 1e-3);
    }

    #[test]
    fn test_hide_keeps_message() {
        let mut label = label();
        label.show("Required", true);
        label.show("ignored", false);

        assert!(!label.is_visible());
        assert_eq!(label.text(), "Required");
    }

    #[test]
    fn test_paint_clips_to_frame() {
        let mut label = label();
        label.show("Required", true);
        label.update(1.0);

        let mut ctx = RecordingContext::new();
        label.paint(&mut ctx);

        let cmds = ctx.commands();
        assert_eq!(cmds.len(), 3);
        assert!(matches!(cmds[0], DrawCommand::PushClip(_)));
        assert!(matches!(cmds[2], DrawCommand::PopClip));

        let (text, origin, _) = ctx.texts().next().unwrap();
        assert_eq!(text, "Required");
        assert_eq!(origin, Point::new(0.0, 50.0));
    }

    #[test]
    fn test_hidden_label_paints_nothing() {
        let label = label();
        let mut ctx = RecordingContext::new();
        label.paint(&mut ctx);
        assert!(ctx.commands().is_empty());
    }
}

//! Multi-line outlined text view
//!
//! Unlike the text field, the text view never opens a gap in its border:
//! its caption sits above the box and the placeholder lives inside it as a
//! [`PlaceholderOverlay`]. Focus only switches the border between its
//! active and inactive stroke.

use std::sync::Arc;

use matkit_core::{Color, DrawContext, LineCap, Point, Rect, Size, Stroke, TextStyle};

use crate::border::{BorderPathBuilder, BorderPaths, CornerStyle, GapInterval, Geometry};
use crate::error_label::ErrorLabel;
use crate::focus::{focus_channel, FocusEvent, FocusReceiver, FocusSignal};
use crate::placeholder::{PlaceholderOverlay, VerticalAlignment};
use crate::text_measure::{FontMetrics, TextMeasurer};

/// Inset between the border and the text container
const TEXT_INSET: f32 = 8.0;
/// Space between the caption baseline box and the border
const CAPTION_SPACING: f32 = 4.0;

/// Visual configuration of a text view
#[derive(Clone, Debug, PartialEq)]
pub struct TextViewStyle {
    pub corner_radius: f32,
    pub active_border_color: Color,
    pub inactive_border_color: Color,
    pub active_border_width: f32,
    pub inactive_border_width: f32,
    pub text_color: Color,
    pub placeholder_color: Color,
    pub caption_color: Color,
}

impl Default for TextViewStyle {
    fn default() -> Self {
        Self {
            corner_radius: 8.0,
            active_border_color: Color::LIGHT_GRAY,
            inactive_border_color: Color::LIGHT_GRAY,
            active_border_width: 2.0,
            inactive_border_width: 1.0,
            text_color: Color::BLACK,
            placeholder_color: Color::GRAY,
            caption_color: Color::DARK_GRAY,
        }
    }
}

pub struct MaterialTextView {
    style: TextViewStyle,
    measurer: Arc<dyn TextMeasurer>,
    builder: BorderPathBuilder,
    focus_rx: FocusReceiver,
    focused: bool,
    text: String,
    caption: Option<String>,
    font: FontMetrics,
    caption_font: FontMetrics,
    overlay: PlaceholderOverlay,
    size: Size,
    paths: BorderPaths,
    error: ErrorLabel,
}

impl MaterialTextView {
    pub fn new(
        style: TextViewStyle,
        placeholder: impl Into<String>,
        measurer: Arc<dyn TextMeasurer>,
    ) -> (Self, FocusSignal) {
        let (signal, focus_rx) = focus_channel();
        let mut overlay = PlaceholderOverlay::new(placeholder);
        overlay.set_color(style.placeholder_color);

        let view = Self {
            style,
            measurer,
            builder: BorderPathBuilder::new().with_corner_style(CornerStyle::Circular),
            focus_rx,
            focused: false,
            text: String::new(),
            caption: None,
            font: FontMetrics::default(),
            caption_font: FontMetrics::default(),
            overlay,
            size: Size::ZERO,
            paths: BorderPaths::default(),
            error: ErrorLabel::new(),
        };
        (view, signal)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn overlay(&self) -> &PlaceholderOverlay {
        &self.overlay
    }

    pub fn error_label(&self) -> &ErrorLabel {
        &self.error
    }

    pub fn border_paths(&self) -> &BorderPaths {
        &self.paths
    }

    /// Current height of the bordered box, after any placeholder growth
    pub fn height(&self) -> f32 {
        self.overlay.resolved_height()
    }

    pub fn border_color(&self) -> Color {
        if self.focused {
            self.style.active_border_color
        } else {
            self.style.inactive_border_color
        }
    }

    pub fn border_width(&self) -> f32 {
        if self.focused {
            self.style.active_border_width
        } else {
            self.style.inactive_border_width
        }
    }

    /// Caption shown above the box
    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = Some(caption.into());
    }

    pub fn set_caption_font(&mut self, font: FontMetrics) {
        self.caption_font = font;
    }

    pub fn set_font(&mut self, font: FontMetrics) {
        self.font = font;
        self.layout();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.overlay.set_text(placeholder);
        self.layout();
    }

    pub fn set_placeholder_alignment(&mut self, alignment: VerticalAlignment) {
        self.overlay.set_alignment(alignment);
        self.layout();
    }

    pub fn set_hide_placeholder_on_editing(&mut self, hide: bool) {
        self.overlay.set_hide_on_editing(hide);
    }

    pub fn set_style(&mut self, style: TextViewStyle) {
        self.overlay.set_color(style.placeholder_color);
        self.style = style;
        self.rebuild_border();
    }

    /// Size of the bordered box. The height given is the one the box
    /// shrinks back to after placeholder growth.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        self.overlay.attach_height_constraint(size.height);
        self.layout();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the text programmatically
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.overlay.text_assigned(&self.text);
        self.layout();
    }

    pub fn insert_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.overlay.text_changed(&self.text);
    }

    pub fn delete_backward(&mut self) {
        if self.text.pop().is_some() {
            self.overlay.text_changed(&self.text);
        }
    }

    pub fn show_error_message(&mut self, msg: &str, show: bool) {
        self.error.show(msg, show);
    }

    /// Apply all pending focus events in order, returning how many were
    /// handled
    pub fn process_focus_events(&mut self) -> usize {
        let events = self.focus_rx.drain();
        for event in &events {
            self.apply_focus(*event);
        }
        events.len()
    }

    fn apply_focus(&mut self, event: FocusEvent) {
        self.focused = event.is_active();
        tracing::debug!(focused = self.focused, "MaterialTextView: focus event");
        match event {
            FocusEvent::Gained => self.overlay.begin_editing(&self.text),
            FocusEvent::Lost => self.overlay.end_editing(&self.text),
        }
        self.rebuild_border();
    }

    pub fn update(&mut self, dt: f32) {
        self.error.update(dt);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Layout
    // ─────────────────────────────────────────────────────────────────────────

    /// Height the placeholder needs, wrapped to the text container width
    fn placeholder_content_height(&self) -> f32 {
        let available = (self.size.width - 2.0 * TEXT_INSET).max(1.0);
        let width = self.measurer.measure(self.overlay.text(), &self.font);
        let lines = (width / available).ceil().max(1.0);
        lines * self.font.line_height() + 2.0 * TEXT_INSET
    }

    fn layout(&mut self) {
        let content_height = self.placeholder_content_height();
        self.overlay
            .layout(self.size.height, content_height, &self.text);
        self.rebuild_border();
    }

    fn rebuild_border(&mut self) {
        let height = self.height();
        let geometry = Geometry::new(self.size.width, height, self.style.corner_radius);
        let gap = GapInterval::closed_at(geometry.effective_radius());
        self.paths = self.builder.build(&geometry, gap);
        self.error
            .set_frame(Rect::new(0.0, height + 4.0, self.size.width, 16.0));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────────

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let stroke = Stroke::new(self.border_width()).with_cap(LineCap::Round);
        ctx.stroke_path(&self.paths.main_outline, &stroke, self.border_color());

        if let Some(caption) = &self.caption {
            let y = -(self.caption_font.line_height() + CAPTION_SPACING);
            let style = TextStyle::new(self.caption_font.size)
                .with_family(self.caption_font.family.clone())
                .with_color(self.style.caption_color);
            ctx.draw_text(caption, Point::new(0.0, y), &style);
        }

        let text_style = TextStyle::new(self.font.size).with_family(self.font.family.clone());

        if self.text.is_empty() && self.overlay.is_visible() {
            let origin = Point::new(TEXT_INSET, TEXT_INSET + self.overlay.inset_top());
            ctx.draw_text(
                self.overlay.text(),
                origin,
                &text_style.clone().with_color(self.overlay.color()),
            );
        }

        let line_style = text_style.with_color(self.style.text_color);
        for (i, line) in self.text.lines().enumerate() {
            let y = TEXT_INSET + i as f32 * self.font.line_height();
            ctx.draw_text(line, Point::new(TEXT_INSET, y), &line_style);
        }

        self.error.paint(ctx);
    }
}

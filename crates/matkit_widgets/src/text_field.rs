//! Outlined text field with a floating label
//!
//! `MaterialTextField` is a host for [`FloatingLabelFieldController`]: it
//! owns the edited text, receives focus through its [`FocusSignal`]
//! channel, animates the label between its inline and floated positions,
//! and paints the result.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use matkit_core::{RecordingContext, Size};
//! use matkit_widgets::{EstimatedTextMeasurer, FieldStyle, MaterialTextField};
//!
//! let (mut field, focus) =
//!     MaterialTextField::new(FieldStyle::default(), "Email", Arc::new(EstimatedTextMeasurer));
//! field.set_size(Size::new(280.0, 44.0));
//!
//! focus.focus_gained().unwrap();
//! field.process_focus_events();
//! field.update(1.0 / 60.0);
//!
//! let mut ctx = RecordingContext::new();
//! field.paint(&mut ctx);
//! ```

use std::sync::Arc;

use matkit_animation::{Spring, SpringConfig};
use matkit_core::{
    Affine2D, Color, DrawContext, LineCap, Path, Point, Rect, Size, Stroke, TextStyle,
};

use crate::border::Geometry;
use crate::error_label::ErrorLabel;
use crate::floating_label::{
    FieldStyle, FloatingLabelFieldController, LabelPlacement, RenderInstruction,
};
use crate::focus::{focus_channel, FocusEvent, FocusReceiver, FocusSignal};
use crate::text_measure::{FontMetrics, TextMeasurer};

/// Width of the empty leading area when no accessory is set
const SPACER_WIDTH: f32 = 20.0;
/// Box width reserved for an icon accessory
const ICON_BOX_WIDTH: f32 = 40.0;
/// Drawn size of the icon glyph
const ICON_SIZE: f32 = 20.0;
/// Inset of the accessory from the field's leading edge
const ACCESSORY_INSET: f32 = 8.0;
/// Spacing after a text accessory
const TEXT_ACCESSORY_GAP: f32 = 10.0;
/// Seconds per cursor blink phase
const CURSOR_BLINK_INTERVAL: f32 = 0.53;

// ─────────────────────────────────────────────────────────────────────────────
// Text State
// ─────────────────────────────────────────────────────────────────────────────

/// Edited value and cursor of a single-line field
#[derive(Clone, Debug, Default)]
pub struct TextFieldState {
    value: String,
    /// Cursor position (character index)
    cursor_pos: usize,
    cursor_blink: f32,
    cursor_visible: bool,
    changed: bool,
}

impl TextFieldState {
    pub fn new(initial_value: impl Into<String>) -> Self {
        let value = initial_value.into();
        Self {
            cursor_pos: value.chars().count(),
            value,
            cursor_blink: 0.0,
            cursor_visible: true,
            changed: false,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn cursor_visible(&self) -> bool {
        self.cursor_visible
    }

    /// Replace the whole value and move the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor_pos = self.value.chars().count();
        self.changed = true;
    }

    /// Insert at the cursor. `max_length` of 0 means unlimited.
    pub fn insert(&mut self, text: &str, max_length: usize) {
        let filtered: String = text.chars().filter(|c| !c.is_control()).collect();
        if filtered.is_empty() {
            return;
        }

        let char_count = self.value.chars().count();
        let to_insert: String = if max_length > 0 {
            let allowed = max_length.saturating_sub(char_count);
            if allowed == 0 {
                return;
            }
            filtered.chars().take(allowed).collect()
        } else {
            filtered
        };

        let byte_pos = self.char_to_byte_pos(self.cursor_pos);
        self.value.insert_str(byte_pos, &to_insert);
        self.cursor_pos += to_insert.chars().count();
        self.reset_blink();
        self.changed = true;
    }

    /// Backspace
    pub fn delete_backward(&mut self) {
        if self.cursor_pos > 0 {
            let start = self.char_to_byte_pos(self.cursor_pos - 1);
            let end = self.char_to_byte_pos(self.cursor_pos);
            self.value.replace_range(start..end, "");
            self.cursor_pos -= 1;
            self.changed = true;
        }
        self.reset_blink();
    }

    /// Forward delete
    pub fn delete_forward(&mut self) {
        if self.cursor_pos < self.value.chars().count() {
            let start = self.char_to_byte_pos(self.cursor_pos);
            let end = self.char_to_byte_pos(self.cursor_pos + 1);
            self.value.replace_range(start..end, "");
            self.changed = true;
        }
        self.reset_blink();
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
        self.reset_blink();
    }

    pub fn move_right(&mut self) {
        self.cursor_pos = (self.cursor_pos + 1).min(self.value.chars().count());
        self.reset_blink();
    }

    pub fn move_to_start(&mut self) {
        self.cursor_pos = 0;
        self.reset_blink();
    }

    pub fn move_to_end(&mut self) {
        self.cursor_pos = self.value.chars().count();
        self.reset_blink();
    }

    /// Check if the value changed and clear the flag
    pub fn take_changed(&mut self) -> bool {
        std::mem::take(&mut self.changed)
    }

    /// Advance the cursor blink
    pub fn update(&mut self, dt: f32, is_focused: bool) {
        if is_focused {
            self.cursor_blink += dt;
            if self.cursor_blink >= CURSOR_BLINK_INTERVAL {
                self.cursor_blink = 0.0;
                self.cursor_visible = !self.cursor_visible;
            }
        } else {
            self.reset_blink();
        }
    }

    fn reset_blink(&mut self) {
        self.cursor_blink = 0.0;
        self.cursor_visible = true;
    }

    /// Text as it should be displayed; secure entry masks every character
    pub fn display_text(&self, secure: bool) -> String {
        if secure {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }

    fn char_to_byte_pos(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Accessory
// ─────────────────────────────────────────────────────────────────────────────

/// Content shown before the text
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LeftAccessory {
    /// Empty leading space
    #[default]
    Spacer,
    /// A short text prefix such as a currency symbol or country code
    Text { text: String, color: Color },
    /// A template glyph in a 20×20 box, tinted with the border color
    Icon(Path),
}

// ─────────────────────────────────────────────────────────────────────────────
// Text Field
// ─────────────────────────────────────────────────────────────────────────────

/// Single-line outlined text field
pub struct MaterialTextField {
    controller: FloatingLabelFieldController,
    measurer: Arc<dyn TextMeasurer>,
    focus_rx: FocusReceiver,
    focused: bool,
    state: TextFieldState,
    placeholder: String,
    font: FontMetrics,
    size: Size,
    accessory: LeftAccessory,
    secure: bool,
    max_length: usize,
    text_color: Color,
    placeholder_color: Color,
    label_spring: Spring,
    instruction: RenderInstruction,
    error: ErrorLabel,
}

impl MaterialTextField {
    /// Create a field and the signal its owner uses to deliver focus
    pub fn new(
        style: FieldStyle,
        placeholder: impl Into<String>,
        measurer: Arc<dyn TextMeasurer>,
    ) -> (Self, FocusSignal) {
        let (signal, focus_rx) = focus_channel();
        let placeholder = placeholder.into();
        let font = FontMetrics::default();

        let mut controller = FloatingLabelFieldController::new(style, Arc::clone(&measurer));
        controller.set_placeholder(&placeholder, &font);
        let instruction = controller.rebuild();

        let field = Self {
            controller,
            measurer,
            focus_rx,
            focused: false,
            state: TextFieldState::default(),
            placeholder,
            font,
            size: Size::ZERO,
            accessory: LeftAccessory::Spacer,
            secure: false,
            max_length: 0,
            text_color: Color::BLACK,
            placeholder_color: Color::GRAY,
            label_spring: Spring::new(SpringConfig::label_float(), 0.0),
            instruction,
            error: ErrorLabel::new(),
        };
        (field, signal)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Properties
    // ─────────────────────────────────────────────────────────────────────────

    pub fn text(&self) -> &str {
        self.state.value()
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn instruction(&self) -> &RenderInstruction {
        &self.instruction
    }

    pub fn controller(&self) -> &FloatingLabelFieldController {
        &self.controller
    }

    pub fn error_label(&self) -> &ErrorLabel {
        &self.error
    }

    /// Float progress of the label (0 = inline, 1 = floated)
    pub fn label_progress(&self) -> f32 {
        self.label_spring.value()
    }

    pub fn is_secure(&self) -> bool {
        self.secure
    }

    pub fn display_text(&self) -> String {
        self.state.display_text(self.secure)
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
        let radius = self.controller.style().corner_radius;
        self.controller
            .set_geometry(Geometry::new(size.width, size.height, radius));
        self.error
            .set_frame(Rect::new(0.0, size.height + 4.0, size.width, 16.0));
        self.refresh();
    }

    pub fn set_style(&mut self, style: FieldStyle) {
        let radius = style.corner_radius;
        self.controller.set_style(style);
        self.controller
            .set_geometry(Geometry::new(self.size.width, self.size.height, radius));
        self.refresh();
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
        self.controller.set_placeholder(&self.placeholder, &self.font);
        self.refresh();
    }

    pub fn set_font(&mut self, font: FontMetrics) {
        self.font = font;
        self.controller.set_placeholder(&self.placeholder, &self.font);
        self.refresh();
    }

    pub fn set_left_accessory(&mut self, accessory: LeftAccessory) {
        self.accessory = accessory;
    }

    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    /// Limit the number of characters; 0 disables the limit
    pub fn set_max_length(&mut self, max_length: usize) {
        self.max_length = max_length;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.text_color = color;
    }

    pub fn set_placeholder_color(&mut self, color: Color) {
        self.placeholder_color = color;
    }

    pub fn set_error_color(&mut self, color: Color) {
        self.error.set_color(color);
    }

    /// Width taken by the left accessory
    pub fn accessory_width(&self) -> f32 {
        match &self.accessory {
            LeftAccessory::Spacer => SPACER_WIDTH,
            LeftAccessory::Text { text, .. } => {
                self.measurer.measure(text, &self.font) + TEXT_ACCESSORY_GAP
            }
            LeftAccessory::Icon(_) => ICON_BOX_WIDTH,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the text programmatically
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set_value(text);
        self.sync_text();
    }

    pub fn insert_text(&mut self, text: &str) {
        self.state.insert(text, self.max_length);
        self.sync_text();
    }

    pub fn delete_backward(&mut self) {
        self.state.delete_backward();
        self.sync_text();
    }

    pub fn delete_forward(&mut self) {
        self.state.delete_forward();
        self.sync_text();
    }

    pub fn state_mut(&mut self) -> &mut TextFieldState {
        &mut self.state
    }

    fn sync_text(&mut self) {
        if self.state.take_changed() {
            self.controller.set_text(self.state.value());
            self.refresh();
        }
    }

    /// Show or hide the validation message under the field
    pub fn show_error_message(&mut self, msg: &str, show: bool) {
        self.error.show(msg, show);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Focus & Frame Updates
    // ─────────────────────────────────────────────────────────────────────────

    /// Apply all pending focus events in the order they were sent
    ///
    /// Returns the number of events handled.
    pub fn process_focus_events(&mut self) -> usize {
        let events = self.focus_rx.drain();
        for event in &events {
            self.apply_focus(*event);
        }
        events.len()
    }

    fn apply_focus(&mut self, event: FocusEvent) {
        self.focused = event.is_active();
        tracing::debug!(
            placeholder = %self.placeholder,
            focused = self.focused,
            "MaterialTextField: focus event"
        );
        self.instruction = self.controller.on_focus_changed(
            self.focused,
            self.state.value(),
            &self.placeholder,
            &self.font,
        );
        self.label_spring
            .set_target(self.instruction.label.progress_target());
    }

    fn refresh(&mut self) {
        self.instruction = self.controller.rebuild();
        self.label_spring
            .set_target(self.instruction.label.progress_target());
    }

    /// Advance animations by `dt` seconds
    pub fn update(&mut self, dt: f32) {
        self.label_spring.step(dt);
        self.state.update(dt, self.focused);
        self.error.update(dt);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Painting
    // ─────────────────────────────────────────────────────────────────────────

    fn text_origin(&self) -> Point {
        let y = (self.size.height - self.font.line_height()) / 2.0;
        Point::new(self.accessory_width(), y)
    }

    fn floated_origin(&self) -> Point {
        let style = self.controller.style();
        let gap_start = self.instruction.gap.start;
        let floated = match self.instruction.label {
            LabelPlacement::Floated { frame } => frame,
            LabelPlacement::Inline => Rect::new(
                gap_start + style.label_padding / 2.0,
                -style.floating_label_height / 2.0,
                self.controller.label_width(),
                style.floating_label_height,
            ),
        };
        Point::new(
            floated.x(),
            floated.y() + (floated.height() - self.font.line_height()) / 2.0,
        )
    }

    fn text_style(&self, color: Color) -> TextStyle {
        TextStyle::new(self.font.size)
            .with_family(self.font.family.clone())
            .with_color(color)
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let ins = &self.instruction;

        // Border
        let stroke = Stroke::new(ins.line_width).with_cap(LineCap::Round);
        ctx.stroke_path(&ins.paths.main_outline, &stroke, ins.stroke_color);
        if ins.draw_hidden_fill {
            ctx.stroke_path(&ins.paths.hidden_fill_segment, &stroke, ins.hidden_fill_color);
        }

        // Label / placeholder
        let progress = self.label_spring.value().clamp(0.0, 1.0);
        if !self.placeholder.is_empty() {
            let inline = self.text_origin();
            if ins.label.is_floated() || progress > 0.001 {
                let floated = self.floated_origin();
                let origin = Point::new(
                    inline.x + (floated.x - inline.x) * progress,
                    inline.y + (floated.y - inline.y) * progress,
                );
                ctx.draw_text(&self.placeholder, origin, &self.text_style(ins.label_color));
            } else if self.state.is_empty() {
                ctx.draw_text(
                    &self.placeholder,
                    inline,
                    &self.text_style(self.placeholder_color),
                );
            }
        }

        // Text
        let display = self.display_text();
        let text_origin = self.text_origin();
        if !display.is_empty() {
            ctx.draw_text(&display, text_origin, &self.text_style(self.text_color));
        }

        if self.focused && self.state.cursor_visible() {
            let before: String = display.chars().take(self.state.cursor_pos()).collect();
            let x = text_origin.x + self.measurer.measure(&before, &self.font);
            ctx.fill_rect(
                Rect::new(x, text_origin.y, 1.5, self.font.line_height()),
                0.0,
                ins.stroke_color,
            );
        }

        self.paint_accessory(ctx);
        self.error.paint(ctx);
    }

    fn paint_accessory(&self, ctx: &mut dyn DrawContext) {
        match &self.accessory {
            LeftAccessory::Spacer => {}
            LeftAccessory::Text { text, color } => {
                let origin = Point::new(ACCESSORY_INSET, self.text_origin().y);
                ctx.draw_text(text, origin, &self.text_style(*color));
            }
            LeftAccessory::Icon(glyph) => {
                // Icons are tinted with the current border color
                let y = (self.size.height - ICON_SIZE) / 2.0;
                ctx.push_transform(Affine2D::translation(ACCESSORY_INSET, y));
                ctx.fill_path(glyph, self.instruction.stroke_color);
                ctx.pop_transform();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text_measure::FixedAdvanceMeasurer;
    use matkit_core::{DrawCommand, RecordingContext};

    fn field() -> (MaterialTextField, FocusSignal) {
        let style = FieldStyle {
            label_padding: 5.0,
            ..FieldStyle::default()
        };
        let (mut field, focus) = MaterialTextField::new(
            style,
            "Email",
            Arc::new(FixedAdvanceMeasurer { advance: 8.0 }),
        );
        field.set_size(Size::new(200.0, 44.0));
        (field, focus)
    }

    fn settle(field: &mut MaterialTextField) {
        for _ in 0..240 {
            field.update(1.0 / 60.0);
        }
    }

    #[test]
    fn test_text_state_editing() {
        let mut state = TextFieldState::new("hllo");
        state.move_to_start();
        state.move_right();
        state.insert("e", 0);
        assert_eq!(state.value(), "hello");
        assert_eq!(state.cursor_pos(), 2);

        state.delete_backward();
        state.delete_forward();
        assert_eq!(state.value(), "hlo");
        assert!(state.take_changed());
        assert!(!state.take_changed());
    }

    #[test]
    fn test_text_state_max_length_and_unicode() {
        let mut state = TextFieldState::new("");
        state.insert("héllo wörld", 5);
        assert_eq!(state.value(), "héllo");

        state.insert("x", 5);
        assert_eq!(state.value(), "héllo");

        state.delete_backward();
        assert_eq!(state.value(), "héll");
        assert_eq!(state.display_text(true), "••••");
    }

    #[test]
    fn test_focus_gained_floats_label() {
        let (mut field, focus) = field();
        assert!(!field.instruction().label.is_floated());

        focus.focus_gained().unwrap();
        assert_eq!(field.process_focus_events(), 1);
        assert!(field.is_focused());
        assert_eq!(field.instruction().gap.width(), 45.0);

        settle(&mut field);
        assert!((field.label_progress() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_nan_corner_radius_lays_out_square() {
        let style = FieldStyle {
            corner_radius: f32::NAN,
            ..FieldStyle::default()
        };
        let (mut field, focus) = MaterialTextField::new(
            style,
            "Email",
            Arc::new(FixedAdvanceMeasurer { advance: 8.0 }),
        );
        field.set_size(Size::new(200.0, 44.0));
        focus.focus_gained().unwrap();
        field.process_focus_events();

        assert_eq!(field.instruction().gap.start, 0.0);
        let mut ctx = RecordingContext::new();
        field.paint(&mut ctx);
        assert!(ctx.stroked_paths().count() >= 1);
    }

    #[test]
    fn test_focus_lost_empty_returns_label_inline() {
        let (mut field, focus) = field();
        focus.focus_gained().unwrap();
        focus.focus_lost().unwrap();
        assert_eq!(field.process_focus_events(), 2);

        assert!(!field.is_focused());
        assert!(field.instruction().gap.is_closed());
        settle(&mut field);
        assert!(field.label_progress().abs() < 0.01);
    }

    #[test]
    fn test_typing_keeps_label_floated_after_blur() {
        let (mut field, focus) = field();
        focus.focus_gained().unwrap();
        field.process_focus_events();
        field.insert_text("me@example.com");
        focus.focus_lost().unwrap();
        field.process_focus_events();

        assert!(field.instruction().label.is_floated());
        assert!(!field.instruction().draw_hidden_fill);
        assert_eq!(field.instruction().stroke_color, Color::DARK_GRAY);
    }

    #[test]
    fn test_signal_fails_after_field_dropped() {
        let (field, focus) = field();
        drop(field);
        assert!(focus.focus_gained().is_err());
    }

    #[test]
    fn test_paint_strokes_hidden_fill_only_when_inactive_and_empty() {
        let (mut field, focus) = field();
        let mut ctx = RecordingContext::new();

        field.paint(&mut ctx);
        assert_eq!(ctx.stroked_paths().count(), 2);

        focus.focus_gained().unwrap();
        field.process_focus_events();
        ctx.clear();
        field.paint(&mut ctx);

        let strokes: Vec<_> = ctx.stroked_paths().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].1.width, 2.0);
        assert_eq!(strokes[0].2, Color::ORANGE);
    }

    #[test]
    fn test_secure_entry_masks_painted_text() {
        let (mut field, _focus) = field();
        field.set_secure(true);
        field.set_text("hunter2");

        let mut ctx = RecordingContext::new();
        field.paint(&mut ctx);
        assert!(ctx.texts().any(|(t, _, _)| t == "•••••••"));
        assert!(!ctx.texts().any(|(t, _, _)| t == "hunter2"));
    }

    #[test]
    fn test_accessory_widths() {
        let (mut field, _focus) = field();
        assert_eq!(field.accessory_width(), 20.0);

        field.set_left_accessory(LeftAccessory::Text {
            text: "+62".into(),
            color: Color::DARK_GRAY,
        });
        assert_eq!(field.accessory_width(), 34.0);

        field.set_left_accessory(LeftAccessory::Icon(
            Path::new().move_to(0.0, 0.0).line_to(20.0, 20.0),
        ));
        assert_eq!(field.accessory_width(), 40.0);
    }

    #[test]
    fn test_icon_tint_follows_focus() {
        let (mut field, focus) = field();
        field.set_left_accessory(LeftAccessory::Icon(
            Path::new().move_to(0.0, 0.0).line_to(20.0, 20.0),
        ));

        let icon_color = |field: &MaterialTextField| {
            let mut ctx = RecordingContext::new();
            field.paint(&mut ctx);
            ctx.commands().iter().find_map(|c| match c {
                DrawCommand::FillPath { color, .. } => Some(*color),
                _ => None,
            })
        };

        assert_eq!(icon_color(&field), Some(Color::DARK_GRAY));
        focus.focus_gained().unwrap();
        field.process_focus_events();
        assert_eq!(icon_color(&field), Some(Color::ORANGE));
    }

    #[test]
    fn test_error_message() {
        let (mut field, _focus) = field();
        field.show_error_message("Invalid email", true);
        assert!(field.error_label().is_visible());
        assert_eq!(field.error_label().text(), "Invalid email");
    }
}

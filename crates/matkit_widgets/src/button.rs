//! Material button
//!
//! A filled button with:
//! - press feedback that scales the whole button down while highlighted
//! - a selection pulse
//! - optional touch ripples spreading from the tap point
//! - an inline loading spinner that replaces the title
//!
//! Like the other controls it is driven by `update(dt)` and draws through
//! a [`DrawContext`].

use std::f32::consts::TAU;

use matkit_animation::{DelayedAction, Easing, FloatAnimation, Tween};
use matkit_core::{Affine2D, Color, DrawContext, Point, Rect, Size, Stroke, TextAlign, TextStyle};

/// Diameter of a freshly spawned ripple
const RIPPLE_INITIAL_SIZE: f32 = 20.0;
/// Ripple growth factor relative to the button's longest side
const RIPPLE_SPREAD: f32 = 10.5;
/// How long a ripple stays on screen
const RIPPLE_LIFETIME: f32 = 0.5;
/// Ripple opacity stops, evenly spread over the lifetime
const RIPPLE_FADE: [f32; 5] = [1.0, 1.0, 0.5, 0.5, 0.0];
/// Side of the square the loading spinner occupies
const SPINNER_SIZE: f32 = 20.0;
const SPINNER_DOTS: usize = 8;
/// Spinner revolutions per second
const SPINNER_SPEED: f32 = 1.0;

/// Visual configuration of a button
#[derive(Clone, Debug, PartialEq)]
pub struct ButtonStyle {
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub corner_radius: f32,
    pub title_color: Color,
    pub font_size: f32,
    /// Scale while highlighted; 1.0 disables the effect
    pub highlight_scale: f32,
    pub highlight_duration: f32,
    /// Scale at the peak of the selection pulse; 1.0 disables the pulse
    pub selected_scale: f32,
    pub selected_duration: f32,
    pub ripple_enabled: bool,
    pub ripple_color: Color,
    /// Seconds for a ripple to reach its full size
    pub ripple_speed: f32,
    /// Title fade duration when the loader is shown or hidden
    pub loader_fade_duration: f32,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            background_color: Color::from_hex(0x3380E6),
            border_color: Color::TRANSPARENT,
            border_width: 0.0,
            corner_radius: 0.0,
            title_color: Color::WHITE,
            font_size: 16.0,
            highlight_scale: 0.97,
            highlight_duration: 0.2,
            selected_scale: 0.97,
            selected_duration: 0.2,
            ripple_enabled: false,
            ripple_color: Color::WHITE.with_alpha(77.0 / 255.0),
            ripple_speed: 1.0,
            loader_fade_duration: 0.5,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Ripple
// ─────────────────────────────────────────────────────────────────────────────

/// One expanding touch ripple
#[derive(Clone, Debug)]
pub struct Ripple {
    center: Point,
    scale: Tween,
    fade: FloatAnimation,
    age: f32,
}

impl Ripple {
    fn new(center: Point, target_scale: f32, speed: f32) -> Self {
        let mut scale = Tween::new(1.0);
        scale.animate_to(target_scale, speed, Easing::Linear);

        let mut fade = FloatAnimation::evenly_spaced(RIPPLE_LIFETIME, &RIPPLE_FADE);
        fade.start();

        Self {
            center,
            scale,
            fade,
            age: 0.0,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        RIPPLE_INITIAL_SIZE / 2.0 * self.scale.value()
    }

    pub fn opacity(&self) -> f32 {
        self.fade.value().unwrap_or(0.0)
    }

    pub fn is_finished(&self) -> bool {
        self.age >= RIPPLE_LIFETIME
    }

    fn tick(&mut self, dt: f32) {
        self.age += dt;
        self.scale.tick(dt);
        self.fade.tick(dt);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Spinner
// ─────────────────────────────────────────────────────────────────────────────

/// Indeterminate activity indicator
#[derive(Clone, Copy, Debug, Default)]
pub struct Spinner {
    angle: f32,
    animating: bool,
}

impl Spinner {
    pub fn start(&mut self) {
        self.angle = 0.0;
        self.animating = true;
    }

    pub fn stop(&mut self) {
        self.animating = false;
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    fn tick(&mut self, dt: f32) {
        if self.animating {
            self.angle = (self.angle + dt * SPINNER_SPEED * TAU) % TAU;
        }
    }

    fn paint(&self, ctx: &mut dyn DrawContext, center: Point, color: Color) {
        let ring = SPINNER_SIZE / 2.0 - 2.0;
        for i in 0..SPINNER_DOTS {
            let t = i as f32 / SPINNER_DOTS as f32;
            let angle = self.angle + t * TAU;
            let dot = Point::new(center.x + ring * angle.cos(), center.y + ring * angle.sin());
            ctx.fill_circle(dot, 1.75, color.with_alpha(color.a * (0.25 + 0.75 * t)));
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Button
// ─────────────────────────────────────────────────────────────────────────────

type TapAction = Box<dyn FnMut() + Send>;

pub struct MaterialButton {
    title: String,
    style: ButtonStyle,
    size: Size,
    highlighted: bool,
    selected: bool,
    scale: Tween,
    /// Selection pulse is on its way back to 1.0 once the current tween ends
    pulse_return: bool,
    ripples: Vec<Ripple>,
    action: Option<TapAction>,
    interaction_enabled: bool,
    loading: bool,
    title_alpha: Tween,
    spinner_pending: bool,
    spinner: Spinner,
    auto_hide: DelayedAction,
}

impl MaterialButton {
    pub fn new(title: impl Into<String>, style: ButtonStyle) -> Self {
        Self {
            title: title.into(),
            style,
            size: Size::ZERO,
            highlighted: false,
            selected: false,
            scale: Tween::new(1.0),
            pulse_return: false,
            ripples: Vec::new(),
            action: None,
            interaction_enabled: true,
            loading: false,
            title_alpha: Tween::new(1.0),
            spinner_pending: false,
            spinner: Spinner::default(),
            auto_hide: DelayedAction::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn style(&self) -> &ButtonStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn bounds(&self) -> Rect {
        self.size.to_rect()
    }

    pub fn scale(&self) -> f32 {
        self.scale.value()
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_interaction_enabled(&self) -> bool {
        self.interaction_enabled
    }

    pub fn title_alpha(&self) -> f32 {
        self.title_alpha.value()
    }

    pub fn spinner(&self) -> &Spinner {
        &self.spinner
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Press & Selection
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
        if self.style.highlight_scale == 1.0 {
            return;
        }
        let target = if highlighted {
            self.style.highlight_scale
        } else {
            1.0
        };
        self.pulse_return = false;
        self.scale
            .animate_to(target, self.style.highlight_duration, Easing::EASE_IN_OUT_CURVE);
    }

    /// Change the selection; either direction plays the pulse
    pub fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
        if self.style.selected_scale == 1.0 {
            return;
        }
        self.scale.animate_to(
            self.style.selected_scale,
            self.style.selected_duration,
            Easing::EASE_IN_OUT_CURVE,
        );
        self.pulse_return = true;
    }

    pub fn toggle_selected(&mut self) {
        self.set_selected(!self.selected);
    }

    /// Register the closure run on a completed tap
    pub fn on_tap<F>(&mut self, action: F)
    where
        F: FnMut() + Send + 'static,
    {
        self.action = Some(Box::new(action));
    }

    /// A touch went down at `point` (button-local coordinates)
    ///
    /// Returns false when the button is not accepting interaction.
    pub fn begin_tracking(&mut self, point: Point) -> bool {
        if !self.interaction_enabled {
            return false;
        }
        self.set_highlighted(true);

        if self.style.ripple_enabled {
            let target = RIPPLE_SPREAD * self.size.max_side() / RIPPLE_INITIAL_SIZE;
            tracing::debug!(x = point.x, y = point.y, target, "MaterialButton: ripple spawned");
            self.ripples
                .push(Ripple::new(point, target, self.style.ripple_speed));
        }
        true
    }

    /// The touch ended; `inside` tells whether it was released over the button
    pub fn end_tracking(&mut self, inside: bool) {
        self.set_highlighted(false);
        if inside {
            self.touch_up_inside();
        }
    }

    /// Run the tap action
    pub fn touch_up_inside(&mut self) {
        if !self.interaction_enabled {
            tracing::trace!("MaterialButton: tap ignored, interaction disabled");
            return;
        }
        if let Some(action) = self.action.as_mut() {
            action();
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Loader
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the title with a spinner. `user_interaction` controls whether
    /// the button keeps accepting taps while loading.
    pub fn show_loader(&mut self, user_interaction: bool) {
        if self.loading {
            tracing::trace!("MaterialButton: loader already shown");
            return;
        }
        tracing::debug!(title = %self.title, user_interaction, "MaterialButton: loader shown");

        self.loading = true;
        self.interaction_enabled = user_interaction;
        self.title_alpha
            .animate_to(0.0, self.style.loader_fade_duration, Easing::EASE_OUT_CURVE);
        self.spinner_pending = true;
    }

    pub fn hide_loader(&mut self) {
        self.auto_hide.cancel();
        if !self.loading {
            tracing::trace!("MaterialButton: loader not shown");
            return;
        }
        tracing::debug!(title = %self.title, "MaterialButton: loader hidden");

        self.loading = false;
        self.interaction_enabled = true;
        self.spinner_pending = false;
        self.spinner.stop();
        self.title_alpha
            .animate_to(1.0, self.style.loader_fade_duration, Easing::EASE_IN_CURVE);
    }

    /// Show the loader and hide it again after `duration` seconds
    ///
    /// Triggering again before the delay elapses restarts the delay instead
    /// of queueing a second hide.
    pub fn show_loader_for(&mut self, duration: f32, user_interaction: bool) {
        self.auto_hide.cancel();
        self.show_loader(user_interaction);
        self.auto_hide.schedule(duration);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Frame Updates
    // ─────────────────────────────────────────────────────────────────────────

    pub fn update(&mut self, dt: f32) {
        self.scale.tick(dt);
        if self.pulse_return && self.scale.is_finished() {
            self.pulse_return = false;
            self.scale
                .animate_to(1.0, self.style.selected_duration, Easing::EASE_IN_OUT_CURVE);
        }

        for ripple in &mut self.ripples {
            ripple.tick(dt);
        }
        self.ripples.retain(|r| !r.is_finished());

        self.title_alpha.tick(dt);
        if self.spinner_pending && self.title_alpha.is_finished() {
            self.spinner_pending = false;
            self.spinner.start();
        }
        self.spinner.tick(dt);

        if self.auto_hide.tick(dt) {
            self.hide_loader();
        }
    }

    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        let bounds = self.bounds();
        let center = bounds.center();
        let scale = self.scale.value();

        ctx.push_transform(Affine2D::scale_about(scale, scale, center));

        ctx.fill_rect(bounds, self.style.corner_radius, self.style.background_color);
        if self.style.border_width > 0.0 {
            ctx.stroke_rect(
                bounds,
                self.style.corner_radius,
                &Stroke::new(self.style.border_width),
                self.style.border_color,
            );
        }

        if !self.ripples.is_empty() {
            ctx.push_clip(bounds);
            for ripple in &self.ripples {
                let color = self.style.ripple_color;
                ctx.fill_circle(
                    ripple.center(),
                    ripple.radius(),
                    color.with_alpha(color.a * ripple.opacity()),
                );
            }
            ctx.pop_clip();
        }

        // The title color is cleared for as long as the loader is shown
        if !self.loading && !self.title.is_empty() {
            let style = TextStyle::new(self.style.font_size)
                .with_color(self.style.title_color)
                .with_align(TextAlign::Center);
            let origin = Point::new(center.x, center.y - self.style.font_size * 0.6);
            ctx.push_opacity(self.title_alpha.value());
            ctx.draw_text(&self.title, origin, &style);
            ctx.pop_opacity();
        }

        if self.spinner.is_animating() {
            self.spinner.paint(ctx, center, self.style.title_color);
        }

        ctx.pop_transform();
    }
}

//! Fixed-duration eased transitions

use crate::easing::Easing;

/// Eased transition of a single f32 over a fixed duration (seconds)
///
/// A tween at rest reports its last target. Retargeting while running starts
/// the new transition from the current interpolated value, so interrupted
/// animations never jump.
#[derive(Clone, Copy, Debug)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Tween {
    /// A tween resting at `value`
    pub fn new(value: f32) -> Self {
        Self {
            from: value,
            to: value,
            duration: 0.0,
            elapsed: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Start a transition from the current value towards `target`
    pub fn animate_to(&mut self, target: f32, duration: f32, easing: Easing) {
        self.from = self.value();
        self.to = target;
        self.duration = duration.max(0.0);
        self.elapsed = 0.0;
        self.easing = easing;
    }

    /// Jump to a value without animating
    pub fn set(&mut self, value: f32) {
        *self = Self::new(value);
    }

    /// Advance by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        if self.is_finished() {
            return;
        }
        self.elapsed = (self.elapsed + dt).min(self.duration);
    }

    /// Normalized progress of the current transition
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> f32 {
        let t = self.easing.apply(self.progress());
        self.from + (self.to - self.from) * t
    }

    /// Where the current transition ends
    pub fn target(&self) -> f32 {
        self.to
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::new(1.0);
        tween.animate_to(0.97, 0.2, Easing::Linear);

        tween.tick(0.1);
        assert!((tween.value() - 0.985).abs() < 1e-5);
        assert!(!tween.is_finished());

        tween.tick(0.5);
        assert!(tween.is_finished());
        assert!((tween.value() - 0.97).abs() < 1e-6);
    }

    #[test]
    fn test_retarget_starts_from_current_value() {
        let mut tween = Tween::new(0.0);
        tween.animate_to(1.0, 1.0, Easing::Linear);
        tween.tick(0.25);

        tween.animate_to(0.0, 1.0, Easing::Linear);
        assert!((tween.value() - 0.25).abs() < 1e-6);

        tween.tick(0.5);
        assert!((tween.value() - 0.125).abs() < 1e-6);
    }

    #[test]
    fn test_zero_duration_is_immediate() {
        let mut tween = Tween::new(0.0);
        tween.animate_to(5.0, 0.0, Easing::EaseIn);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 5.0);
    }
}

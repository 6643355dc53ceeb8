//! Keyframe animations
//!
//! A keyframe animation samples a sequence of `(time, value)` stops, where
//! time is normalized to the animation's duration. Values between stops are
//! interpolated with the easing of the stop being approached.

use crate::easing::Easing;

/// Trait for values that can be linearly interpolated
pub trait Interpolate: Clone {
    /// Linearly interpolate between self and other by factor t (0.0 to 1.0)
    fn lerp(&self, other: &Self, t: f32) -> Self;
}

impl Interpolate for f32 {
    fn lerp(&self, other: &Self, t: f32) -> Self {
        self + (other - self) * t
    }
}

/// A keyframe holding a value of type T
#[derive(Clone, Debug)]
pub struct Keyframe<T: Interpolate> {
    /// Time position (0.0 to 1.0)
    pub time: f32,
    /// Value at this keyframe
    pub value: T,
    /// Easing function when transitioning TO this keyframe
    pub easing: Easing,
}

/// A keyframe animation for any interpolatable type
#[derive(Clone, Debug)]
pub struct KeyframeAnimation<T: Interpolate> {
    /// Duration in seconds
    duration: f32,
    /// Keyframes sorted by time
    keyframes: Vec<Keyframe<T>>,
    /// Current time in seconds
    current_time: f32,
    playing: bool,
}

impl<T: Interpolate> KeyframeAnimation<T> {
    /// Create a new animation with given duration (seconds)
    pub fn new(duration: f32) -> Self {
        Self {
            duration: duration.max(0.0),
            keyframes: Vec::new(),
            current_time: 0.0,
            playing: false,
        }
    }

    /// Add a keyframe (builder pattern)
    pub fn keyframe(mut self, time: f32, value: T, easing: Easing) -> Self {
        self.keyframes.push(Keyframe {
            time: time.clamp(0.0, 1.0),
            value,
            easing,
        });
        self.keyframes.sort_by(|a, b| a.time.total_cmp(&b.time));
        self
    }

    /// Add a keyframe with linear easing
    pub fn at(self, time: f32, value: T) -> Self {
        self.keyframe(time, value, Easing::Linear)
    }

    /// Spread `values` evenly over the duration, first at 0.0 and last at 1.0
    pub fn evenly_spaced(duration: f32, values: &[T]) -> Self {
        let mut anim = Self::new(duration);
        let last = values.len().saturating_sub(1).max(1) as f32;
        for (i, value) in values.iter().enumerate() {
            anim = anim.at(i as f32 / last, value.clone());
        }
        anim
    }

    /// Start (or restart) the animation
    pub fn start(&mut self) {
        self.current_time = 0.0;
        self.playing = true;
    }

    pub fn stop(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Get progress (0.0 to 1.0)
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.current_time / self.duration).clamp(0.0, 1.0)
    }

    /// Current interpolated value
    pub fn value(&self) -> Option<T> {
        self.sample_at(self.progress())
    }

    /// Advance animation by delta time (seconds)
    pub fn tick(&mut self, dt: f32) {
        if !self.playing {
            return;
        }

        self.current_time += dt;
        if self.current_time >= self.duration {
            self.current_time = self.duration;
            self.playing = false;
        }
    }

    /// Sample at a specific progress (0.0 to 1.0)
    pub fn sample_at(&self, progress: f32) -> Option<T> {
        let first = self.keyframes.first()?;
        let progress = progress.clamp(0.0, 1.0);

        let mut prev_kf = first;
        let mut next_kf = first;

        for kf in &self.keyframes {
            if kf.time <= progress {
                prev_kf = kf;
            }
            if kf.time >= progress {
                next_kf = kf;
                break;
            }
        }

        if (prev_kf.time - next_kf.time).abs() < f32::EPSILON {
            return Some(prev_kf.value.clone());
        }

        let local_progress = (progress - prev_kf.time) / (next_kf.time - prev_kf.time);
        let eased = next_kf.easing.apply(local_progress);

        Some(prev_kf.value.lerp(&next_kf.value, eased))
    }
}

/// Keyframe animation for f32 values
pub type FloatAnimation = KeyframeAnimation<f32>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_interpolation() {
        assert!((0.0_f32.lerp(&1.0, 0.5) - 0.5).abs() < 1e-6);
        assert!((10.0_f32.lerp(&20.0, 0.25) - 12.5).abs() < 1e-6);
    }

    #[test]
    fn test_evenly_spaced_opacity_fade() {
        let mut fade = FloatAnimation::evenly_spaced(0.5, &[1.0, 1.0, 0.5, 0.5, 0.0]);
        fade.start();

        assert_eq!(fade.value(), Some(1.0));

        fade.tick(0.125); // progress 0.25, second stop
        assert!((fade.value().unwrap() - 1.0).abs() < 1e-5);

        fade.tick(0.0625); // progress 0.375, halfway between 1.0 and 0.5
        assert!((fade.value().unwrap() - 0.75).abs() < 1e-4);

        fade.tick(1.0);
        assert!(!fade.is_playing());
        assert_eq!(fade.value(), Some(0.0));
    }

    #[test]
    fn test_empty_animation_has_no_value() {
        let anim = FloatAnimation::new(1.0);
        assert_eq!(anim.value(), None);
    }
}

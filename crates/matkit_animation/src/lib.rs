//! matkit Animation System
//!
//! Frame-driven animation primitives. Nothing here owns a clock or a thread:
//! the host calls `step`/`tick` with the elapsed time of each frame, on the
//! same thread that delivers layout and input events.
//!
//! - **Easing**: standard timing curves plus custom cubic Béziers
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Tweens**: fixed-duration eased transitions that can start from the
//!   current value of an interrupted transition
//! - **Keyframes**: timed value sequences (e.g. opacity fades)
//! - **Delayed Actions**: cancellable one-shot timers

pub mod delay;
pub mod easing;
pub mod keyframe;
pub mod spring;
pub mod tween;

pub use delay::DelayedAction;
pub use easing::Easing;
pub use keyframe::{FloatAnimation, Interpolate, Keyframe, KeyframeAnimation};
pub use spring::{Spring, SpringConfig};
pub use tween::Tween;

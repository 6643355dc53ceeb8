//! Spring physics animation
//!
//! RK4-integrated spring physics. Controls use springs for motion that may be
//! interrupted mid-flight (the floating label reversing direction when focus
//! is lost before it finished floating), because a spring keeps its velocity
//! when the target changes.

use std::f32::consts::TAU;

/// Configuration for a spring animation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    /// Create a new spring configuration
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    /// Build a unit-mass spring from a damping ratio and a response time.
    ///
    /// `response` is the period (seconds) of the undamped oscillation and
    /// `damping_ratio` is 1.0 for critical damping, above 1.0 for overdamped.
    pub fn from_damping_ratio(damping_ratio: f32, response: f32) -> Self {
        let response = response.max(f32::EPSILON);
        let stiffness = (TAU / response).powi(2);
        let damping = damping_ratio * 2.0 * stiffness.sqrt();
        Self::new(stiffness, damping, 1.0)
    }

    /// A stiff, snappy spring (good for buttons)
    pub fn stiff() -> Self {
        Self {
            stiffness: 400.0,
            damping: 30.0,
            mass: 1.0,
        }
    }

    /// A very stiff spring with minimal oscillation (good for quick responses)
    pub fn snappy() -> Self {
        Self {
            stiffness: 600.0,
            damping: 40.0,
            mass: 1.0,
        }
    }

    /// Overdamped float used by the floating label: damping ratio 1.3 over 0.3s
    pub fn label_float() -> Self {
        Self::from_damping_ratio(1.3, 0.3)
    }

    /// Calculate critical damping for this spring's stiffness and mass
    pub fn critical_damping(&self) -> f32 {
        2.0 * (self.stiffness * self.mass).sqrt()
    }

    /// Check if the spring is underdamped (will oscillate)
    pub fn is_underdamped(&self) -> bool {
        self.damping < self.critical_damping()
    }

    /// Check if the spring is overdamped (slow settling, no oscillation)
    pub fn is_overdamped(&self) -> bool {
        self.damping > self.critical_damping()
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::stiff()
    }
}

/// A spring-based animator over a single f32
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
    epsilon: f32,
}

impl Spring {
    /// Default settling tolerance, suited to normalized 0..1 progress values
    const DEFAULT_EPSILON: f32 = 0.001;

    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
            epsilon: Self::DEFAULT_EPSILON,
        }
    }

    /// Override the settling tolerance (use ~0.5 for pixel-valued springs)
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump straight to a value and stop
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Check if the spring has settled (within epsilon of target with minimal velocity)
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.epsilon
            && self.velocity.abs() < self.epsilon * 10.0
    }

    /// Step the spring simulation using RK4 integration
    pub fn step(&mut self, dt: f32) {
        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
            return;
        }

        let k1_v = self.acceleration(self.value, self.velocity);
        let k1_x = self.velocity;

        let k2_v = self.acceleration(
            self.value + k1_x * dt * 0.5,
            self.velocity + k1_v * dt * 0.5,
        );
        let k2_x = self.velocity + k1_v * dt * 0.5;

        let k3_v = self.acceleration(
            self.value + k2_x * dt * 0.5,
            self.velocity + k2_v * dt * 0.5,
        );
        let k3_x = self.velocity + k2_v * dt * 0.5;

        let k4_v = self.acceleration(self.value + k3_x * dt, self.velocity + k3_v * dt);
        let k4_x = self.velocity + k3_v * dt;

        self.velocity += (k1_v + 2.0 * k2_v + 2.0 * k3_v + k4_v) * dt / 6.0;
        self.value += (k1_x + 2.0 * k2_x + 2.0 * k3_x + k4_x) * dt / 6.0;
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let spring_force = -self.config.stiffness * (x - self.target);
        let damping_force = -self.config.damping * v;
        (spring_force + damping_force) / self.config.mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spring_settles_to_target() {
        let mut spring = Spring::new(SpringConfig::label_float(), 0.0);
        spring.set_target(1.0);

        // Simulate for 2 seconds at 60fps
        for _ in 0..120 {
            spring.step(1.0 / 60.0);
        }

        assert!(spring.is_settled());
        assert!((spring.value() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_label_float_is_overdamped() {
        let config = SpringConfig::label_float();
        assert!(config.is_overdamped());
        assert!(!config.is_underdamped());
    }

    #[test]
    fn test_overdamped_spring_never_overshoots() {
        let mut spring = Spring::new(SpringConfig::label_float(), 0.0);
        spring.set_target(1.0);

        for _ in 0..120 {
            spring.step(1.0 / 60.0);
            assert!(spring.value() <= 1.0 + 1e-4);
        }
    }

    #[test]
    fn test_spring_keeps_velocity_on_retarget() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(100.0);

        for _ in 0..5 {
            spring.step(1.0 / 60.0);
        }

        let velocity = spring.velocity();
        assert!(velocity > 0.0);

        // Change target mid-flight - velocity should continue
        spring.set_target(0.0);
        assert_eq!(spring.velocity(), velocity);
    }

    #[test]
    fn test_snap_to_stops_motion() {
        let mut spring = Spring::new(SpringConfig::snappy(), 0.0);
        spring.set_target(1.0);
        spring.step(1.0 / 60.0);

        spring.snap_to(0.5);
        assert_eq!(spring.value(), 0.5);
        assert_eq!(spring.velocity(), 0.0);
        assert!(spring.is_settled());
    }

    #[test]
    fn test_spring_rk4_stability() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0).with_epsilon(0.5);
        spring.set_target(1000.0);

        // Large time step that might cause instability with Euler integration
        for _ in 0..100 {
            spring.step(0.1);
            assert!(spring.value() < 2000.0);
            assert!(spring.value() > -500.0);
        }
    }
}

//! Easing curves

/// Animation easing function.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Easing {
    /// Constant speed.
    #[default]
    Linear,
    /// Slow start, fast end.
    EaseIn,
    /// Fast start, slow end.
    EaseOut,
    /// Slow start, fast middle, slow end.
    EaseInOut,
    /// Custom cubic Bézier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
    CubicBezier(f32, f32, f32, f32),
}

impl Easing {
    /// The platform "ease-in" timing curve
    pub const EASE_IN_CURVE: Easing = Easing::CubicBezier(0.42, 0.0, 1.0, 1.0);
    /// The platform "ease-out" timing curve
    pub const EASE_OUT_CURVE: Easing = Easing::CubicBezier(0.0, 0.0, 0.58, 1.0);
    /// The platform "ease-in-ease-out" timing curve
    pub const EASE_IN_OUT_CURVE: Easing = Easing::CubicBezier(0.42, 0.0, 0.58, 1.0);

    /// Apply easing function to normalized time (0.0 to 1.0).
    pub fn apply(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match *self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            Easing::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, x1, y1, x2, y2),
        }
    }
}

/// Solve the bezier for the parameter whose x equals `t`, then return its y.
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    if t <= 0.0 || t >= 1.0 {
        return t;
    }

    let sample = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let slope = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    // Newton-Raphson first, bisection if the slope flattens out
    let mut s = t;
    for _ in 0..8 {
        let err = sample(x1, x2, s) - t;
        if err.abs() < 1e-5 {
            return sample(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0f32, 1.0f32);
    s = t;
    for _ in 0..32 {
        let x = sample(x1, x2, s);
        if (x - t).abs() < 1e-5 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample(y1, y2, s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_fixed() {
        for easing in [
            Easing::Linear,
            Easing::EaseIn,
            Easing::EaseOut,
            Easing::EaseInOut,
            Easing::EASE_IN_OUT_CURVE,
        ] {
            assert!(easing.apply(0.0).abs() < 1e-5, "{easing:?}");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-5, "{easing:?}");
        }
    }

    #[test]
    fn test_input_is_clamped() {
        assert_eq!(Easing::Linear.apply(-1.0), 0.0);
        assert_eq!(Easing::Linear.apply(3.0), 1.0);
    }

    #[test]
    fn test_linear_bezier_is_identity() {
        let linear = Easing::CubicBezier(0.25, 0.25, 0.75, 0.75);
        for i in 0..=10 {
            let t = i as f32 / 10.0;
            assert!((linear.apply(t) - t).abs() < 1e-3);
        }
    }

    #[test]
    fn test_ease_in_out_curve_is_symmetric() {
        let e = Easing::EASE_IN_OUT_CURVE;
        assert!((e.apply(0.5) - 0.5).abs() < 1e-3);
        assert!((e.apply(0.25) + e.apply(0.75) - 1.0).abs() < 1e-3);
        assert!(e.apply(0.25) < 0.25);
    }

    #[test]
    fn test_ease_out_curve_leads_linear() {
        assert!(Easing::EASE_OUT_CURVE.apply(0.3) > 0.3);
        assert!(Easing::EASE_IN_CURVE.apply(0.3) < 0.3);
    }
}

//! Timing functions (easing curves) for dot transitions.
//!
//! Timing functions control the rate of change while a channel travels from its
//! start value to its target, allowing for natural-feeling motion rather than
//! linear interpolation.
//!
//! ## Built-in Easing Functions
//!
//! - [`TimingFunction::Linear`] - Constant speed (no easing)
//! - [`TimingFunction::Ease`] - Gentle acceleration, the default curve
//! - [`TimingFunction::EaseIn`] - Starts slow, ends fast (acceleration)
//! - [`TimingFunction::EaseOut`] - Starts fast, ends slow (deceleration)
//! - [`TimingFunction::EaseInOut`] - Slow start and end, fast middle
//!
//! ## Advanced Options
//!
//! - [`TimingFunction::CubicBezier`] - CSS-style cubic bezier curve
//! - [`TimingFunction::Custom`] - User-defined function
//!
//! ## Configuration
//!
//! Timing functions deserialize from a kebab-case name (`"ease-out"`) or from
//! `{ "cubic-bezier": [x1, y1, x2, y2] }`. Custom closures can only be set in code.

use serde::{Deserialize, Deserializer};
use std::sync::Arc;

/// Timing function that controls the animation curve
#[derive(Clone, Default)]
pub enum TimingFunction {
    /// Linear interpolation (constant speed)
    Linear,
    /// Standard ease: cubic-bezier(0.42, 0, 1, 1)
    #[default]
    Ease,
    /// Starts slow, ends fast
    EaseIn,
    /// Starts fast, ends slow
    EaseOut,
    /// Starts slow, speeds up, then slows down
    EaseInOut,
    /// CSS cubic-bezier curve (x1, y1, x2, y2)
    CubicBezier(f32, f32, f32, f32),
    /// Custom timing function
    Custom(Arc<dyn Fn(f32) -> f32 + Send + Sync>),
}

impl TimingFunction {
    /// Evaluate the timing function at time t (0.0 to 1.0)
    ///
    /// Custom curves may return values outside [0, 1]; channels clamp the
    /// interpolated result so progress never leaves its range.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            TimingFunction::Linear => t,
            TimingFunction::Ease => cubic_bezier(t, 0.42, 0.0, 1.0, 1.0),
            TimingFunction::EaseIn => ease_in(t),
            TimingFunction::EaseOut => ease_out(t),
            TimingFunction::EaseInOut => ease_in_out(t),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => cubic_bezier(t, *x1, *y1, *x2, *y2),
            TimingFunction::Custom(f) => f(t),
        }
    }

    /// Create a custom timing function from a closure
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(f32) -> f32 + Send + Sync + 'static,
    {
        TimingFunction::Custom(Arc::new(f))
    }

    /// Whether two timing functions describe the same curve.
    ///
    /// Custom curves compare by closure identity.
    pub fn same_curve(&self, other: &TimingFunction) -> bool {
        match (self, other) {
            (TimingFunction::Linear, TimingFunction::Linear)
            | (TimingFunction::Ease, TimingFunction::Ease)
            | (TimingFunction::EaseIn, TimingFunction::EaseIn)
            | (TimingFunction::EaseOut, TimingFunction::EaseOut)
            | (TimingFunction::EaseInOut, TimingFunction::EaseInOut) => true,
            (
                TimingFunction::CubicBezier(a1, b1, c1, d1),
                TimingFunction::CubicBezier(a2, b2, c2, d2),
            ) => a1 == a2 && b1 == b2 && c1 == c2 && d1 == d2,
            (TimingFunction::Custom(a), TimingFunction::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Debug for TimingFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimingFunction::Linear => write!(f, "Linear"),
            TimingFunction::Ease => write!(f, "Ease"),
            TimingFunction::EaseIn => write!(f, "EaseIn"),
            TimingFunction::EaseOut => write!(f, "EaseOut"),
            TimingFunction::EaseInOut => write!(f, "EaseInOut"),
            TimingFunction::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "CubicBezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
            TimingFunction::Custom(_) => write!(f, "Custom"),
        }
    }
}

/// Serialized form of a timing function.
#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
enum TimingRepr {
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    CubicBezier([f32; 4]),
}

impl From<TimingRepr> for TimingFunction {
    fn from(repr: TimingRepr) -> Self {
        match repr {
            TimingRepr::Linear => TimingFunction::Linear,
            TimingRepr::Ease => TimingFunction::Ease,
            TimingRepr::EaseIn => TimingFunction::EaseIn,
            TimingRepr::EaseOut => TimingFunction::EaseOut,
            TimingRepr::EaseInOut => TimingFunction::EaseInOut,
            TimingRepr::CubicBezier([x1, y1, x2, y2]) => {
                TimingFunction::CubicBezier(x1, y1, x2, y2)
            }
        }
    }
}

impl<'de> Deserialize<'de> for TimingFunction {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        TimingRepr::deserialize(deserializer).map(TimingFunction::from)
    }
}

// Easing functions

fn ease_in(t: f32) -> f32 {
    t * t
}

fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic bezier curve evaluation
/// Simplified implementation assuming x1, x2 are in [0, 1]
fn cubic_bezier(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    // Newton-Raphson to solve for the curve parameter whose x equals t
    let mut current_t = t;
    for _ in 0..8 {
        let current_x = cubic_bezier_x(current_t, x1, x2);
        let current_slope = cubic_bezier_slope(current_t, x1, x2);
        if current_slope.abs() < 1e-6 {
            break;
        }
        current_t = (current_t - (current_x - t) / current_slope).clamp(0.0, 1.0);
    }
    cubic_bezier_y(current_t, y1, y2)
}

fn cubic_bezier_x(t: f32, x1: f32, x2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * x1 + 3.0 * mt * t2 * x2 + t3
}

fn cubic_bezier_y(t: f32, y1: f32, y2: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let mt = 1.0 - t;
    let mt2 = mt * mt;
    3.0 * mt2 * t * y1 + 3.0 * mt * t2 * y2 + t3
}

fn cubic_bezier_slope(t: f32, x1: f32, x2: f32) -> f32 {
    let mt = 1.0 - t;
    3.0 * mt * mt * x1 + 6.0 * mt * t * (x2 - x1) + 3.0 * t * t * (1.0 - x2)
}

use crate::style::Color;

/// Trait for types that can be animated by interpolating between values
pub trait Animatable: Clone + PartialEq + Send + Sync + 'static {
    /// Linear interpolation between two values
    /// t = 0.0 returns `from`, t = 1.0 returns `to`
    fn lerp(from: &Self, to: &Self, t: f32) -> Self;
}

impl Animatable for f32 {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        from + (to - from) * t
    }
}

impl Animatable for Color {
    fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Color {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }
}

/// Shorthand for [`Animatable::lerp`] on plain values.
#[inline]
pub fn lerp<T: Animatable>(from: T, to: T, t: f32) -> T {
    T::lerp(&from, &to, t)
}

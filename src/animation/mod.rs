mod animatable;
mod timing;

pub use animatable::{lerp, Animatable};
pub use timing::TimingFunction;

/// Configuration for how progress channels travel when the active dot changes
#[derive(Clone, Debug)]
pub struct Transition {
    /// Duration of the animation in milliseconds
    pub duration_ms: f32,
    /// Timing function controlling the animation curve
    pub timing: TimingFunction,
    /// Hint that the transition may run on a hardware-accelerated path
    pub accelerated: bool,
}

impl Transition {
    /// Create a new transition with the given duration and timing function
    pub fn new(duration_ms: f32, timing: TimingFunction) -> Self {
        Self {
            duration_ms: duration_ms.max(0.0),
            timing,
            accelerated: false,
        }
    }

    /// A zero-length transition: channels jump straight to their targets
    pub fn instant() -> Self {
        Self::new(0.0, TimingFunction::Linear)
    }

    /// Set the duration of the animation
    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.duration_ms = duration_ms.max(0.0);
        self
    }

    /// Set the timing function
    pub fn timing(mut self, timing: TimingFunction) -> Self {
        self.timing = timing;
        self
    }

    /// Request the hardware-accelerated path
    pub fn accelerated(mut self, accelerated: bool) -> Self {
        self.accelerated = accelerated;
        self
    }

    /// Whether starting this transition is equivalent to starting `other`
    pub fn same_as(&self, other: &Transition) -> bool {
        self.duration_ms == other.duration_ms
            && self.accelerated == other.accelerated
            && self.timing.same_curve(&other.timing)
    }
}

impl Default for Transition {
    /// 300ms with the standard ease curve
    fn default() -> Self {
        Self::new(300.0, TimingFunction::Ease)
    }
}

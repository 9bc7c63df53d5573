use crate::animation::lerp;

/// Result of advancing a channel, indicating whether the value changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AdvanceResult<T> {
    /// Value did not change (channel at rest or same value)
    NoChange,
    /// Value changed to a new value
    Changed(T),
}

impl<T> AdvanceResult<T> {
    /// Returns true if the value changed
    pub fn is_changed(&self) -> bool {
        matches!(self, AdvanceResult::Changed(_))
    }
}

/// Emphasis of a single dot, 0.0 (inactive) to 1.0 (active)
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressChannel {
    /// Position in the dot sequence
    index: usize,
    /// Current interpolated value
    value: f32,
    /// Value when the current trajectory started
    start: f32,
    /// Where the current trajectory ends
    target: f32,
}

impl ProgressChannel {
    /// A channel at rest: 1.0 for the active dot, 0.0 otherwise
    pub(crate) fn resting(index: usize, is_active: bool) -> Self {
        let value = resting_value(is_active);
        Self {
            index,
            value,
            start: value,
            target: value,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Whether the channel has reached its target
    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    /// Start a new trajectory from wherever the channel is now
    pub(crate) fn aim(&mut self, target: f32) {
        self.start = self.value;
        self.target = target;
    }

    /// Move along the current trajectory to the eased fraction `eased`.
    ///
    /// A non-finite fraction leaves the value where it is.
    pub(crate) fn sample(&mut self, eased: f32) -> AdvanceResult<f32> {
        if !eased.is_finite() {
            return AdvanceResult::NoChange;
        }
        let next = lerp(self.start, self.target, eased).clamp(0.0, 1.0);
        self.set(next)
    }

    /// Pin the channel to its target, ending the trajectory
    pub(crate) fn settle(&mut self) -> AdvanceResult<f32> {
        self.start = self.target;
        self.set(self.target)
    }

    fn set(&mut self, next: f32) -> AdvanceResult<f32> {
        if next == self.value {
            return AdvanceResult::NoChange;
        }
        self.value = next;
        AdvanceResult::Changed(next)
    }
}

pub(crate) fn resting_value(is_active: bool) -> f32 {
    if is_active { 1.0 } else { 0.0 }
}

use serde::Deserialize;

use crate::animation::{TimingFunction, Transition};
use crate::style::{AnimationStrategy, Color, ColorOptions, DotStyle};

/// Everything the host can configure about the dot row.
///
/// Deserializes from any serde format; missing fields take the defaults below
/// and colors are hex strings.
///
/// | field                  | default            |
/// |------------------------|--------------------|
/// | `dot_height`           | 8                  |
/// | `inactive_dot_width`   | 8                  |
/// | `active_dot_width`     | 24                 |
/// | `dot_border_radius`    | half of the height |
/// | `dot_spacing`          | 6                  |
/// | `animation_duration_ms`| 300                |
/// | `animation_easing`     | `ease`             |
/// | `use_accelerated_path` | false              |
/// | `animation_type`       | `width`            |
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    #[serde(flatten)]
    pub colors: ColorOptions,
    pub dot_height: f32,
    pub inactive_dot_width: f32,
    pub active_dot_width: f32,
    pub dot_border_radius: Option<f32>,
    pub dot_spacing: f32,
    pub animation_duration_ms: f32,
    pub animation_easing: TimingFunction,
    pub use_accelerated_path: bool,
    pub animation_type: AnimationStrategy,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            colors: ColorOptions::default(),
            dot_height: 8.0,
            inactive_dot_width: 8.0,
            active_dot_width: 24.0,
            dot_border_radius: None,
            dot_spacing: 6.0,
            animation_duration_ms: 300.0,
            animation_easing: TimingFunction::Ease,
            use_accelerated_path: false,
            animation_type: AnimationStrategy::Width,
        }
    }
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn animation_type(mut self, strategy: AnimationStrategy) -> Self {
        self.animation_type = strategy;
        self
    }

    pub fn duration(mut self, duration_ms: f32) -> Self {
        self.animation_duration_ms = duration_ms;
        self
    }

    pub fn easing(mut self, easing: TimingFunction) -> Self {
        self.animation_easing = easing;
        self
    }

    pub fn accelerated(mut self, accelerated: bool) -> Self {
        self.use_accelerated_path = accelerated;
        self
    }

    pub fn dot_height(mut self, height: f32) -> Self {
        self.dot_height = height;
        self
    }

    pub fn dot_widths(mut self, inactive: f32, active: f32) -> Self {
        self.inactive_dot_width = inactive;
        self.active_dot_width = active;
        self
    }

    pub fn border_radius(mut self, radius: f32) -> Self {
        self.dot_border_radius = Some(radius);
        self
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.dot_spacing = spacing;
        self
    }

    pub fn active_color(mut self, color: Color) -> Self {
        self.colors.active_dot_color = Some(color);
        self
    }

    pub fn inactive_color(mut self, color: Color) -> Self {
        self.colors.inactive_dot_color = Some(color);
        self
    }

    /// Deprecated single color; prefer [`active_color`](Self::active_color)
    pub fn dot_color(mut self, color: Color) -> Self {
        self.colors.dot_color = Some(color);
        self
    }

    /// Transition used for the next retarget
    pub fn transition(&self) -> Transition {
        Transition::new(self.animation_duration_ms, self.animation_easing.clone())
            .accelerated(self.use_accelerated_path)
    }

    /// Static inputs of every projection, with colors and radius resolved
    pub fn style(&self) -> DotStyle {
        DotStyle {
            strategy: self.animation_type,
            inactive_width: self.inactive_dot_width,
            active_width: self.active_dot_width,
            height: self.dot_height,
            corner_radius: self.dot_border_radius.unwrap_or(self.dot_height / 2.0),
            spacing: self.dot_spacing,
            palette: self.colors.resolve(),
        }
    }
}

//! Pure mapping from a channel's progress value to the attributes of one dot.
//!
//! Every strategy interpolates the fill color; the remaining attributes follow
//! the table below (`v` is the progress value, `w0`/`w1` the inactive and
//! active widths):
//!
//! | strategy | width              | opacity         | scale           | translate-y    |
//! |----------|--------------------|-----------------|-----------------|----------------|
//! | width    | lerp(w0, w1, v)    | 1               | 1               | 0              |
//! | fade     | active ? w1 : w0   | lerp(0.5, 1, v) | 1               | 0              |
//! | scale    | active ? w1 : w0   | 1               | lerp(1, 1.3, v) | 0              |
//! | slide    | active ? w1 : w0   | 1               | 1               | lerp(0, -5, v) |
//! | combo    | lerp(w0, w1, v)    | lerp(0.7, 1, v) | lerp(1, 1.2, v) | lerp(0, -3, v) |

use crate::animation::lerp;

use super::{AnimatedProps, AnimationStrategy, Color, DotPalette};

const FADE_MIN_OPACITY: f32 = 0.5;
const SCALE_MAX: f32 = 1.3;
const SLIDE_OFFSET: f32 = -5.0;
const COMBO_MIN_OPACITY: f32 = 0.7;
const COMBO_SCALE_MAX: f32 = 1.2;
const COMBO_OFFSET: f32 = -3.0;

/// Static per-render inputs of a projection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotStyle {
    pub strategy: AnimationStrategy,
    pub inactive_width: f32,
    pub active_width: f32,
    pub height: f32,
    pub corner_radius: f32,
    pub spacing: f32,
    pub palette: DotPalette,
}

/// Visual attributes of a single dot at one rendering moment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualAttributes {
    pub width: f32,
    pub opacity: f32,
    pub scale: f32,
    /// Vertical offset; negative values move the dot up
    pub translate_y: f32,
    pub color: Color,
    /// Which of the fields above depend on the progress value
    pub animated: AnimatedProps,
}

impl VisualAttributes {
    fn resting(width: f32, color: Color, animated: AnimatedProps) -> Self {
        Self {
            width,
            opacity: 1.0,
            scale: 1.0,
            translate_y: 0.0,
            color,
            animated,
        }
    }
}

/// Project a progress value into visual attributes
pub fn project(
    strategy: AnimationStrategy,
    value: f32,
    is_active: bool,
    style: &DotStyle,
) -> VisualAttributes {
    // NaN rests at the inactive end
    let value = if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    };
    let color = lerp(style.palette.inactive, style.palette.active, value);
    let stretched = lerp(style.inactive_width, style.active_width, value);
    let fixed = if is_active {
        style.active_width
    } else {
        style.inactive_width
    };
    let animated = strategy.animated_props();

    match strategy {
        AnimationStrategy::Width => VisualAttributes::resting(stretched, color, animated),
        AnimationStrategy::Fade => VisualAttributes {
            opacity: lerp(FADE_MIN_OPACITY, 1.0, value),
            ..VisualAttributes::resting(fixed, color, animated)
        },
        AnimationStrategy::Scale => VisualAttributes {
            scale: lerp(1.0, SCALE_MAX, value),
            ..VisualAttributes::resting(fixed, color, animated)
        },
        AnimationStrategy::Slide => VisualAttributes {
            translate_y: lerp(0.0, SLIDE_OFFSET, value),
            ..VisualAttributes::resting(fixed, color, animated)
        },
        AnimationStrategy::Combo => VisualAttributes {
            width: stretched,
            opacity: lerp(COMBO_MIN_OPACITY, 1.0, value),
            scale: lerp(1.0, COMBO_SCALE_MAX, value),
            translate_y: lerp(0.0, COMBO_OFFSET, value),
            color,
            animated,
        },
    }
}

impl DotStyle {
    /// Project with this style's own strategy
    pub fn project(&self, value: f32, is_active: bool) -> VisualAttributes {
        project(self.strategy, value, is_active, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ColorOptions;

    fn style(strategy: AnimationStrategy) -> DotStyle {
        DotStyle {
            strategy,
            inactive_width: 8.0,
            active_width: 24.0,
            height: 8.0,
            corner_radius: 4.0,
            spacing: 6.0,
            palette: DotPalette {
                active: Color::WHITE,
                inactive: Color::BLACK,
            },
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_width_strategy() {
        let s = style(AnimationStrategy::Width);
        let attrs = s.project(0.5, false);
        assert_eq!(attrs.width, 16.0);
        assert_eq!(attrs.opacity, 1.0);
        assert_eq!(attrs.scale, 1.0);
        assert_eq!(attrs.translate_y, 0.0);
        assert_eq!(attrs.color, Color::rgba(0.5, 0.5, 0.5, 1.0));
    }

    #[test]
    fn test_fade_strategy() {
        let s = style(AnimationStrategy::Fade);
        assert_eq!(s.project(0.0, false).opacity, 0.5);
        assert_eq!(s.project(1.0, true).opacity, 1.0);
        // width snaps with the active flag instead of following progress
        assert_eq!(s.project(0.3, true).width, 24.0);
        assert_eq!(s.project(0.7, false).width, 8.0);
    }

    #[test]
    fn test_scale_strategy() {
        let s = style(AnimationStrategy::Scale);
        assert_eq!(s.project(0.0, false).scale, 1.0);
        assert!(approx(s.project(1.0, true).scale, 1.3));
        assert_eq!(s.project(1.0, true).opacity, 1.0);
    }

    #[test]
    fn test_slide_strategy() {
        let s = style(AnimationStrategy::Slide);
        assert_eq!(s.project(0.0, false).translate_y, 0.0);
        assert_eq!(s.project(1.0, true).translate_y, -5.0);
        assert_eq!(s.project(0.5, true).translate_y, -2.5);
    }

    #[test]
    fn test_combo_strategy() {
        let s = style(AnimationStrategy::Combo);
        let rest = s.project(0.0, false);
        assert_eq!(rest.width, 8.0);
        assert!(approx(rest.opacity, 0.7));
        assert_eq!(rest.scale, 1.0);
        assert_eq!(rest.translate_y, 0.0);

        let full = s.project(1.0, true);
        assert_eq!(full.width, 24.0);
        assert_eq!(full.opacity, 1.0);
        assert!(approx(full.scale, 1.2));
        assert_eq!(full.translate_y, -3.0);
        assert_eq!(full.color, Color::WHITE);
    }

    #[test]
    fn test_unknown_tag_projects_like_width() {
        let s = style(AnimationStrategy::Width);
        let bogus = AnimationStrategy::from("bogus");
        for value in [0.0, 0.25, 0.5, 1.0] {
            assert_eq!(project(bogus, value, false, &s), s.project(value, false));
        }
    }

    #[test]
    fn test_value_out_of_range_is_clamped() {
        let s = style(AnimationStrategy::Width);
        assert_eq!(s.project(1.5, true).width, 24.0);
        assert_eq!(s.project(-1.0, false).width, 8.0);
        assert_eq!(s.project(f32::INFINITY, true).width, 24.0);
    }

    #[test]
    fn test_nan_value_projects_inactive() {
        let s = style(AnimationStrategy::Combo);
        let attrs = s.project(f32::NAN, false);
        assert_eq!(attrs, s.project(0.0, false));
        assert!(attrs.width.is_finite());
        assert!(attrs.color.r.is_finite());
    }

    #[test]
    fn test_color_interpolates_from_resolved_palette() {
        let mut s = style(AnimationStrategy::Fade);
        s.palette = ColorOptions::default().active(Color::WHITE).resolve();
        let rest = s.project(0.0, false);
        assert!(approx(rest.color.a, 128.0 / 255.0));
        assert_eq!(s.project(1.0, true).color, Color::WHITE);
    }
}

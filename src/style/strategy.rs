use bitflags::bitflags;
use serde::Deserialize;

/// How a dot's progress value shows up on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "String")]
pub enum AnimationStrategy {
    /// Active dot stretches from the inactive width to the active width
    #[default]
    Width,
    /// Inactive dots are dimmed
    Fade,
    /// Active dot grows
    Scale,
    /// Active dot lifts upward
    Slide,
    /// Width, fade, scale and lift together
    Combo,
}

bitflags! {
    /// Visual attributes that a strategy derives from the progress value.
    ///
    /// Attributes outside this set are constant for a given `is_active` flag,
    /// so a renderer only needs to refresh the flagged ones between frames.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AnimatedProps: u8 {
        const WIDTH = 1 << 0;
        const OPACITY = 1 << 1;
        const SCALE = 1 << 2;
        const TRANSLATE_Y = 1 << 3;
        const COLOR = 1 << 4;
    }
}

impl AnimationStrategy {
    pub const ALL: [AnimationStrategy; 5] = [
        AnimationStrategy::Width,
        AnimationStrategy::Fade,
        AnimationStrategy::Scale,
        AnimationStrategy::Slide,
        AnimationStrategy::Combo,
    ];

    /// Resolve a strategy tag. Unrecognized tags fall back to [`AnimationStrategy::Width`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "width" => AnimationStrategy::Width,
            "fade" => AnimationStrategy::Fade,
            "scale" => AnimationStrategy::Scale,
            "slide" => AnimationStrategy::Slide,
            "combo" => AnimationStrategy::Combo,
            other => {
                log::debug!("unknown animation strategy {other:?}, using width");
                AnimationStrategy::Width
            }
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            AnimationStrategy::Width => "width",
            AnimationStrategy::Fade => "fade",
            AnimationStrategy::Scale => "scale",
            AnimationStrategy::Slide => "slide",
            AnimationStrategy::Combo => "combo",
        }
    }

    /// Attributes this strategy interpolates from the progress value
    pub fn animated_props(self) -> AnimatedProps {
        match self {
            AnimationStrategy::Width => AnimatedProps::WIDTH | AnimatedProps::COLOR,
            AnimationStrategy::Fade => AnimatedProps::OPACITY | AnimatedProps::COLOR,
            AnimationStrategy::Scale => AnimatedProps::SCALE | AnimatedProps::COLOR,
            AnimationStrategy::Slide => AnimatedProps::TRANSLATE_Y | AnimatedProps::COLOR,
            AnimationStrategy::Combo => AnimatedProps::all(),
        }
    }
}

impl From<&str> for AnimationStrategy {
    fn from(tag: &str) -> Self {
        AnimationStrategy::from_tag(tag)
    }
}

impl From<String> for AnimationStrategy {
    fn from(tag: String) -> Self {
        AnimationStrategy::from_tag(&tag)
    }
}

impl std::fmt::Display for AnimationStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}

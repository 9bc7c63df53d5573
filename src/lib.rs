pub mod animation;
pub mod config;
pub mod engine;
pub mod render;
pub mod style;

pub use config::PaginationConfig;
pub use engine::DotsEngine;

pub mod prelude {
    pub use crate::animation::{Animatable, TimingFunction, Transition};
    pub use crate::config::PaginationConfig;
    pub use crate::engine::{
        ChannelRegistry, DotInputs, DotsEngine, ProgressChannel, Reconciled, TransitionHandle,
        TransitionScheduler,
    };
    pub use crate::render::{
        accessibility_label, render_fn, DotContext, DotNode, DotRenderer, ShapeRenderer,
    };
    pub use crate::style::{
        project, AnimatedProps, AnimationStrategy, Color, ColorOptions, DotPalette, DotStyle,
        VisualAttributes,
    };
}

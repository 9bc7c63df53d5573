mod color;
mod palette;
mod projector;
mod strategy;

pub use color::{Color, ColorParseError};
pub use palette::{ColorOptions, DEFAULT_ACCENT, DotPalette, INACTIVE_ALPHA};
pub use projector::{project, DotStyle, VisualAttributes};
pub use strategy::{AnimatedProps, AnimationStrategy};

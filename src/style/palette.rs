use serde::Deserialize;

use super::Color;

/// Accent used when no color is configured (#0E7AFE)
pub const DEFAULT_ACCENT: Color = Color::from_hex(0x0E7AFE);

/// Alpha given to a derived inactive color (0x80 / 0xFF)
pub const INACTIVE_ALPHA: f32 = 128.0 / 255.0;

/// Color settings as supplied by the host; any subset may be missing
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ColorOptions {
    /// Legacy single color, superseded by `active_dot_color`
    pub dot_color: Option<Color>,
    pub active_dot_color: Option<Color>,
    pub inactive_dot_color: Option<Color>,
}

/// The pair of endpoint colors every projection interpolates between
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotPalette {
    pub active: Color,
    pub inactive: Color,
}

impl ColorOptions {
    pub fn active(mut self, color: Color) -> Self {
        self.active_dot_color = Some(color);
        self
    }

    pub fn inactive(mut self, color: Color) -> Self {
        self.inactive_dot_color = Some(color);
        self
    }

    pub fn legacy(mut self, color: Color) -> Self {
        self.dot_color = Some(color);
        self
    }

    /// Apply the defaulting chain.
    ///
    /// The active color is `active_dot_color`, else the legacy `dot_color`, else
    /// [`DEFAULT_ACCENT`]. An explicit inactive color always wins; otherwise it is
    /// the active color at [`INACTIVE_ALPHA`].
    pub fn resolve(&self) -> DotPalette {
        let active = self
            .active_dot_color
            .or(self.dot_color)
            .unwrap_or(DEFAULT_ACCENT);
        let inactive = self
            .inactive_dot_color
            .unwrap_or_else(|| active.with_alpha(INACTIVE_ALPHA));
        DotPalette { active, inactive }
    }
}

impl Default for DotPalette {
    fn default() -> Self {
        ColorOptions::default().resolve()
    }
}

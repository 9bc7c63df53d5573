//! Turning projected attributes into renderable nodes.
//!
//! The engine calls a [`DotRenderer`] exactly once per dot per pass, in index
//! order. [`ShapeRenderer`] produces the built-in rounded dot; hosts with their
//! own visuals plug in a closure through [`render_fn`].

use std::convert::Infallible;
use std::marker::PhantomData;

use crate::style::{Color, DotStyle, VisualAttributes};

/// Everything a renderer gets to know about one dot
#[derive(Debug, Clone, Copy)]
pub struct DotContext<'a> {
    pub index: usize,
    /// Channel value in [0, 1]
    pub progress: f32,
    pub is_active: bool,
    pub attributes: VisualAttributes,
    pub style: &'a DotStyle,
    /// Whether the current transition runs on the accelerated path
    pub accelerated: bool,
}

impl DotContext<'_> {
    pub fn accessibility_label(&self) -> String {
        accessibility_label(self.index, self.is_active)
    }
}

/// Renders one dot into a host node
pub trait DotRenderer {
    type Node;
    type Error;

    fn render_dot(&mut self, dot: &DotContext<'_>) -> Result<Self::Node, Self::Error>;
}

/// "Page N" (1-based), with ", current page" appended for the active dot
pub fn accessibility_label(index: usize, is_active: bool) -> String {
    if is_active {
        format!("Page {}, current page", index + 1)
    } else {
        format!("Page {}", index + 1)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessibilityRole {
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Accessibility {
    pub role: AccessibilityRole,
    pub label: String,
}

/// Built-in dot: a rounded rectangle
#[derive(Debug, Clone, PartialEq)]
pub struct DotNode {
    pub index: usize,
    pub width: f32,
    pub height: f32,
    pub corner_radius: f32,
    /// Applied on both the left and the right side
    pub margin_horizontal: f32,
    pub color: Color,
    pub opacity: f32,
    pub scale: f32,
    pub translate_y: f32,
    pub accelerated: bool,
    pub accessibility: Accessibility,
}

/// The default renderer producing [`DotNode`]s
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeRenderer;

impl DotRenderer for ShapeRenderer {
    type Node = DotNode;
    type Error = Infallible;

    fn render_dot(&mut self, dot: &DotContext<'_>) -> Result<DotNode, Infallible> {
        let attrs = &dot.attributes;
        Ok(DotNode {
            index: dot.index,
            width: attrs.width,
            height: dot.style.height,
            corner_radius: dot.style.corner_radius,
            margin_horizontal: dot.style.spacing / 2.0,
            color: attrs.color,
            opacity: attrs.opacity,
            scale: attrs.scale,
            translate_y: attrs.translate_y,
            accelerated: dot.accelerated,
            accessibility: Accessibility {
                role: AccessibilityRole::Image,
                label: dot.accessibility_label(),
            },
        })
    }
}

/// Renderer backed by a closure
pub struct FnRenderer<F, N, E> {
    f: F,
    _marker: PhantomData<fn() -> Result<N, E>>,
}

/// Wrap a closure as a [`DotRenderer`]
pub fn render_fn<F, N, E>(f: F) -> FnRenderer<F, N, E>
where
    F: FnMut(&DotContext<'_>) -> Result<N, E>,
{
    FnRenderer {
        f,
        _marker: PhantomData,
    }
}

impl<F, N, E> DotRenderer for FnRenderer<F, N, E>
where
    F: FnMut(&DotContext<'_>) -> Result<N, E>,
{
    type Node = N;
    type Error = E;

    fn render_dot(&mut self, dot: &DotContext<'_>) -> Result<N, E> {
        (self.f)(dot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PaginationConfig;

    #[test]
    fn test_labels() {
        assert_eq!(accessibility_label(0, false), "Page 1");
        assert_eq!(accessibility_label(2, true), "Page 3, current page");
    }

    #[test]
    fn test_shape_renderer_uses_static_style() {
        let style = PaginationConfig::new().spacing(10.0).style();
        let dot = DotContext {
            index: 1,
            progress: 1.0,
            is_active: true,
            attributes: style.project(1.0, true),
            style: &style,
            accelerated: false,
        };

        let node = ShapeRenderer.render_dot(&dot).unwrap();
        assert_eq!(node.width, 24.0);
        assert_eq!(node.height, 8.0);
        assert_eq!(node.corner_radius, 4.0);
        assert_eq!(node.margin_horizontal, 5.0);
        assert_eq!(node.accessibility.role, AccessibilityRole::Image);
        assert_eq!(node.accessibility.label, "Page 2, current page");
    }

    #[test]
    fn test_fn_renderer_propagates_errors() {
        let style = PaginationConfig::new().style();
        let dot = DotContext {
            index: 0,
            progress: 0.0,
            is_active: false,
            attributes: style.project(0.0, false),
            style: &style,
            accelerated: false,
        };

        let mut renderer = render_fn(|dot: &DotContext<'_>| {
            if dot.index == 0 {
                Err("first dot refused")
            } else {
                Ok(dot.index)
            }
        });
        assert_eq!(renderer.render_dot(&dot), Err("first dot refused"));
    }
}

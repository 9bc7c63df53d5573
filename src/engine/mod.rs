//! The animation-state engine behind a row of page dots.
//!
//! [`DotsEngine`] owns one [`ProgressChannel`] per dot, keeps that set in sync
//! with the host's dot count and active index, and drives it through timed
//! transitions. The host calls [`DotsEngine::update`] whenever its inputs
//! change, [`DotsEngine::advance`] once per frame, and [`DotsEngine::render`]
//! to get one node per dot.
//!
//! ```
//! use std::time::Duration;
//! use pagedots::prelude::*;
//!
//! let mut engine = DotsEngine::new(PaginationConfig::new().easing(TimingFunction::Linear));
//! engine.update(5, 2);
//! engine.update(5, 4);
//! engine.advance(Duration::from_millis(150));
//!
//! let nodes = engine.render_default();
//! assert_eq!(nodes.len(), 5);
//! assert_eq!(nodes[4].accessibility.label, "Page 5, current page");
//! ```

mod channel;
mod registry;
mod scheduler;

pub use channel::{AdvanceResult, ProgressChannel};
pub use registry::{ChannelRegistry, Reconciled};
pub use scheduler::{BatchState, TransitionHandle, TransitionScheduler};

use std::time::Duration;

use crate::animation::Transition;
use crate::config::PaginationConfig;
use crate::render::{DotContext, DotNode, DotRenderer, ShapeRenderer};
use crate::style::DotStyle;

/// Dot count and active index after normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DotInputs {
    pub total_dots: usize,
    /// `None` when the host's index does not name an existing dot
    pub active_index: Option<usize>,
}

impl DotInputs {
    /// Normalize raw host values: negative counts become zero dots and an
    /// out-of-range index marks no dot active.
    pub fn from_host(total_dots: i64, active_dot_index: i64) -> Self {
        if total_dots < 0 {
            log::debug!("negative dot count {total_dots} treated as 0");
        }
        let total = usize::try_from(total_dots).unwrap_or(0);
        let active_index = usize::try_from(active_dot_index)
            .ok()
            .filter(|&index| index < total);
        if active_index.is_none() && total > 0 {
            log::debug!("active index {active_dot_index} outside 0..{total}, no dot active");
        }
        Self {
            total_dots: total,
            active_index,
        }
    }
}

/// Owns the channels, the running batch and the configuration of one dot row
pub struct DotsEngine {
    config: PaginationConfig,
    style: DotStyle,
    registry: ChannelRegistry,
    scheduler: TransitionScheduler,
    inputs: DotInputs,
    /// Transition and target of the last retarget, to skip redundant restarts
    last_retarget: Option<(Transition, Option<usize>)>,
    handle: Option<TransitionHandle>,
}

impl DotsEngine {
    pub fn new(config: PaginationConfig) -> Self {
        let style = config.style();
        Self {
            config,
            style,
            registry: ChannelRegistry::new(),
            scheduler: TransitionScheduler::new(),
            inputs: DotInputs::default(),
            last_retarget: None,
            handle: None,
        }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Replace the configuration.
    ///
    /// Style changes apply from the next render; a changed transition applies
    /// to the next retarget and never alters a batch that is already running.
    pub fn set_config(&mut self, config: PaginationConfig) {
        self.style = config.style();
        self.config = config;
    }

    pub fn style(&self) -> &DotStyle {
        &self.style
    }

    pub fn inputs(&self) -> DotInputs {
        self.inputs
    }

    pub fn registry(&self) -> &ChannelRegistry {
        &self.registry
    }

    /// Current value of every channel, in index order
    pub fn values(&self) -> Vec<f32> {
        self.registry.values()
    }

    /// Feed the host's latest inputs: reconcile, then retarget when the active
    /// index or the transition settings changed since the last retarget.
    ///
    /// Returns the handle of a newly started batch, if one was started.
    pub fn update(&mut self, total_dots: i64, active_dot_index: i64) -> Option<TransitionHandle> {
        let inputs = DotInputs::from_host(total_dots, active_dot_index);
        self.reconcile(inputs);

        let transition = self.config.transition();
        let unchanged = self
            .last_retarget
            .as_ref()
            .is_some_and(|(last, active)| {
                *active == inputs.active_index && last.same_as(&transition)
            });
        if unchanged {
            return None;
        }
        Some(self.retarget())
    }

    /// Match the channel set to `inputs`; a rebuild cancels the running batch
    pub fn reconcile(&mut self, inputs: DotInputs) -> Reconciled {
        self.inputs = inputs;
        let outcome = self
            .registry
            .reconcile(inputs.total_dots, inputs.active_index);
        if outcome == Reconciled::Rebuilt {
            self.scheduler.cancel();
        }
        outcome
    }

    /// Start a batch toward the current active index with the configured transition
    pub fn retarget(&mut self) -> TransitionHandle {
        let transition = self.config.transition();
        let handle =
            self.scheduler
                .retarget(&mut self.registry, self.inputs.active_index, &transition);
        self.last_retarget = Some((transition, self.inputs.active_index));
        self.handle = Some(handle.clone());
        handle
    }

    /// Advance the running batch by one frame; returns true while animating
    pub fn advance(&mut self, dt: Duration) -> bool {
        self.scheduler.advance(&mut self.registry, dt)
    }

    pub fn is_animating(&self) -> bool {
        self.scheduler.is_animating()
    }

    /// Project and render every dot in index order.
    ///
    /// The first renderer error aborts the pass and is returned unchanged.
    pub fn render<R: DotRenderer>(&self, renderer: &mut R) -> Result<Vec<R::Node>, R::Error> {
        let accelerated = self
            .handle
            .as_ref()
            .is_some_and(TransitionHandle::accelerated);

        self.registry
            .iter()
            .map(|channel| {
                let is_active = self.inputs.active_index == Some(channel.index());
                let dot = DotContext {
                    index: channel.index(),
                    progress: channel.value(),
                    is_active,
                    attributes: self.style.project(channel.value(), is_active),
                    style: &self.style,
                    accelerated,
                };
                renderer.render_dot(&dot)
            })
            .collect()
    }

    /// Render with the built-in [`ShapeRenderer`]
    pub fn render_default(&self) -> Vec<DotNode> {
        match self.render(&mut ShapeRenderer) {
            Ok(nodes) => nodes,
            Err(never) => match never {},
        }
    }

    /// Cancel the running batch and release every channel
    pub fn teardown(&mut self) {
        self.scheduler.cancel();
        self.registry.clear();
        self.inputs = DotInputs::default();
        self.last_retarget = None;
        self.handle = None;
        log::debug!("dots engine torn down");
    }
}

impl Default for DotsEngine {
    fn default() -> Self {
        Self::new(PaginationConfig::default())
    }
}

impl Drop for DotsEngine {
    fn drop(&mut self) {
        self.scheduler.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::TimingFunction;
    use crate::render::render_fn;
    use crate::style::AnimationStrategy;

    fn linear_engine() -> DotsEngine {
        DotsEngine::new(PaginationConfig::new().easing(TimingFunction::Linear))
    }

    #[test]
    fn test_inputs_normalization() {
        assert_eq!(
            DotInputs::from_host(-3, 0),
            DotInputs {
                total_dots: 0,
                active_index: None
            }
        );
        assert_eq!(DotInputs::from_host(4, 4).active_index, None);
        assert_eq!(DotInputs::from_host(4, -1).active_index, None);
        assert_eq!(DotInputs::from_host(4, 3).active_index, Some(3));
    }

    #[test]
    fn test_first_update_rests_at_active() {
        let mut engine = linear_engine();
        let handle = engine.update(3, 1).unwrap();
        assert!(handle.is_finished());
        assert_eq!(engine.values(), vec![0.0, 1.0, 0.0]);
        assert!(!engine.is_animating());
    }

    #[test]
    fn test_repeated_update_does_not_restart() {
        let mut engine = linear_engine();
        engine.update(3, 0);
        let handle = engine.update(3, 2).unwrap();
        engine.advance(Duration::from_millis(100));

        assert!(engine.update(3, 2).is_none());
        assert!(handle.is_running());
    }

    #[test]
    fn test_transition_change_restarts_from_current_values() {
        let mut engine = linear_engine();
        engine.update(2, 0);
        let first = engine.update(2, 1).unwrap();
        engine.advance(Duration::from_millis(150));
        let before = engine.values();

        engine.set_config(engine.config().clone().duration(600.0));
        let second = engine.update(2, 1).unwrap();
        assert!(first.is_cancelled());
        assert!(second.is_running());
        assert_eq!(engine.values(), before);
    }

    #[test]
    fn test_count_change_reseeds_and_cancels() {
        let mut engine = linear_engine();
        engine.update(3, 0);
        let handle = engine.update(3, 2).unwrap();
        engine.advance(Duration::from_millis(100));

        engine.update(4, 2);
        assert!(handle.is_cancelled());
        assert_eq!(engine.values(), vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_render_in_index_order_with_labels() {
        let mut engine = DotsEngine::new(
            PaginationConfig::new().animation_type(AnimationStrategy::Fade),
        );
        engine.update(3, 1);
        let nodes = engine.render_default();
        let labels: Vec<_> = nodes.iter().map(|n| n.accessibility.label.as_str()).collect();
        assert_eq!(labels, ["Page 1", "Page 2, current page", "Page 3"]);
        assert_eq!(nodes[0].opacity, 0.5);
        assert_eq!(nodes[1].opacity, 1.0);
    }

    #[test]
    fn test_custom_renderer_called_once_per_dot() {
        let mut engine = linear_engine();
        engine.update(4, 0);

        let mut seen = Vec::new();
        let nodes = engine
            .render(&mut render_fn(|dot: &DotContext<'_>| {
                seen.push(dot.index);
                Ok::<_, ()>((dot.index, dot.progress, dot.attributes.width))
            }))
            .unwrap();
        assert_eq!(seen, vec![0, 1, 2, 3]);
        assert_eq!(nodes[0], (0, 1.0, 24.0));
        assert_eq!(nodes[3], (3, 0.0, 8.0));
    }

    #[test]
    fn test_custom_renderer_error_propagates() {
        let mut engine = linear_engine();
        engine.update(3, 0);
        let result = engine.render(&mut render_fn(|dot: &DotContext<'_>| {
            if dot.index == 1 {
                Err(format!("cannot draw dot {}", dot.index))
            } else {
                Ok(())
            }
        }));
        assert_eq!(result, Err("cannot draw dot 1".to_string()));
    }

    #[test]
    fn test_teardown_cancels_and_releases() {
        let mut engine = linear_engine();
        engine.update(3, 0);
        let handle = engine.update(3, 1).unwrap();
        engine.advance(Duration::from_millis(10));

        engine.teardown();
        assert!(handle.is_cancelled());
        assert!(engine.registry().is_empty());
        assert!(!engine.advance(Duration::from_millis(10)));
        assert!(engine.render_default().is_empty());
    }

    #[test]
    fn test_collapse_to_zero_cancels() {
        let mut engine = linear_engine();
        engine.update(3, 0);
        let handle = engine.update(3, 1).unwrap();
        engine.update(0, 0);
        assert!(handle.is_cancelled());
        assert!(engine.values().is_empty());
    }

    #[test]
    fn test_drop_cancels_running_batch() {
        let mut engine = linear_engine();
        engine.update(2, 0);
        let handle = engine.update(2, 1).unwrap();
        drop(engine);
        assert!(handle.is_cancelled());
    }
}

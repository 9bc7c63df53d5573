//! Drives every channel toward the values implied by a new active index.
//!
//! A retarget starts one batch covering the whole registry. The host frame loop
//! calls [`TransitionScheduler::advance`] once per frame; all channels of the
//! batch share its elapsed time and easing curve. Starting a new batch cancels
//! the previous one, and each channel continues from its current value.

use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use crate::animation::Transition;

use super::channel::{resting_value, AdvanceResult};
use super::registry::ChannelRegistry;

/// Lifecycle of a transition batch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatchState {
    Running,
    Finished,
    Cancelled,
}

impl BatchState {
    fn from_u8(raw: u8) -> Self {
        match raw {
            0 => BatchState::Running,
            1 => BatchState::Finished,
            _ => BatchState::Cancelled,
        }
    }
}

/// Handle to a started batch
///
/// Cancelling stops further mutation of the channels but leaves them at their
/// last computed values.
#[derive(Debug, Clone)]
pub struct TransitionHandle {
    state: Arc<AtomicU8>,
    accelerated: bool,
}

impl TransitionHandle {
    fn new(state: BatchState, accelerated: bool) -> Self {
        Self {
            state: Arc::new(AtomicU8::new(state as u8)),
            accelerated,
        }
    }

    /// Cancel the batch if it is still running
    pub fn cancel(&self) {
        self.leave_running(BatchState::Cancelled);
    }

    pub fn state(&self) -> BatchState {
        BatchState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub fn is_running(&self) -> bool {
        self.state() == BatchState::Running
    }

    pub fn is_finished(&self) -> bool {
        self.state() == BatchState::Finished
    }

    pub fn is_cancelled(&self) -> bool {
        self.state() == BatchState::Cancelled
    }

    /// Whether the batch was started with the accelerated-path hint
    pub fn accelerated(&self) -> bool {
        self.accelerated
    }

    fn leave_running(&self, next: BatchState) {
        let _ = self.state.compare_exchange(
            BatchState::Running as u8,
            next as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }
}

struct Batch {
    transition: Transition,
    elapsed_ms: f64,
    /// Registry generation the batch was started against
    generation: u64,
    handle: TransitionHandle,
}

/// Owner of the in-flight batch, if any
#[derive(Default)]
pub struct TransitionScheduler {
    batch: Option<Batch>,
}

impl TransitionScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start driving every channel toward 1.0 (the `active` dot) or 0.0.
    ///
    /// Any running batch is cancelled first. A zero duration, or a registry
    /// already at its targets, completes immediately.
    pub fn retarget(
        &mut self,
        registry: &mut ChannelRegistry,
        active: Option<usize>,
        transition: &Transition,
    ) -> TransitionHandle {
        self.cancel();

        for channel in registry.channels_mut() {
            let target = resting_value(active == Some(channel.index()));
            channel.aim(target);
        }

        let duration_ms = transition.duration_ms.max(0.0);
        let settled = registry.iter().all(|ch| ch.is_settled());
        if duration_ms == 0.0 || settled {
            for channel in registry.channels_mut() {
                channel.settle();
            }
            log::debug!(
                "retarget to {:?} completed immediately ({} dots)",
                active,
                registry.len()
            );
            return TransitionHandle::new(BatchState::Finished, transition.accelerated);
        }

        log::debug!(
            "retarget to {:?}: {} dots over {}ms ({:?})",
            active,
            registry.len(),
            duration_ms,
            transition.timing
        );
        let handle = TransitionHandle::new(BatchState::Running, transition.accelerated);
        self.batch = Some(Batch {
            transition: transition.clone(),
            elapsed_ms: 0.0,
            generation: registry.generation(),
            handle: handle.clone(),
        });
        handle
    }

    /// Advance the running batch by one frame of `dt`.
    ///
    /// Returns true while the batch is still running afterwards.
    pub fn advance(&mut self, registry: &mut ChannelRegistry, dt: Duration) -> bool {
        let Some(batch) = self.batch.as_mut() else {
            return false;
        };

        if !batch.handle.is_running() {
            log::trace!("dropping batch cancelled through its handle");
            self.batch = None;
            return false;
        }
        if batch.generation != registry.generation() {
            log::debug!("registry rebuilt under a running batch, cancelling it");
            self.cancel();
            return false;
        }

        batch.elapsed_ms += dt.as_secs_f64() * 1000.0;
        let t = (batch.elapsed_ms / f64::from(batch.transition.duration_ms)) as f32;

        let mut changed = 0usize;
        if t >= 1.0 {
            for channel in registry.channels_mut() {
                if channel.settle().is_changed() {
                    changed += 1;
                }
            }
            batch.handle.leave_running(BatchState::Finished);
            log::trace!(
                "batch finished after {:.1}ms, {} channels pinned",
                batch.elapsed_ms,
                changed
            );
            self.batch = None;
            return false;
        }

        let eased = batch.transition.timing.evaluate(t);
        for channel in registry.channels_mut() {
            if let AdvanceResult::Changed(_) = channel.sample(eased) {
                changed += 1;
            }
        }
        log::trace!("batch at t={:.3} (eased {:.3}), {} channels moved", t, eased, changed);
        true
    }

    /// Cancel the running batch, leaving channels where they are
    pub fn cancel(&mut self) {
        if let Some(batch) = self.batch.take() {
            batch.handle.cancel();
        }
    }

    pub fn is_animating(&self) -> bool {
        self.batch
            .as_ref()
            .is_some_and(|batch| batch.handle.is_running())
    }
}

use super::channel::ProgressChannel;

/// Outcome of a [`ChannelRegistry::reconcile`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciled {
    /// Count matched; channels and their in-flight values were kept
    Unchanged,
    /// Channel set was rebuilt and reseeded at rest
    Rebuilt,
}

/// One progress channel per dot, in index order
#[derive(Debug, Default)]
pub struct ChannelRegistry {
    channels: Vec<ProgressChannel>,
    /// Bumped on every rebuild so stale batches can tell their channels are gone
    generation: u64,
}

impl ChannelRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match the channel set to `total_dots`.
    ///
    /// When the count differs, every channel is recreated at its resting value
    /// for `active`, dropping any in-flight progress. When it matches, nothing
    /// is touched. An `active` index outside the range marks no dot active.
    pub fn reconcile(&mut self, total_dots: usize, active: Option<usize>) -> Reconciled {
        if self.channels.len() == total_dots {
            return Reconciled::Unchanged;
        }

        log::debug!(
            "rebuilding channels: {} -> {} dots, active {:?}",
            self.channels.len(),
            total_dots,
            active
        );
        self.channels = (0..total_dots)
            .map(|index| ProgressChannel::resting(index, active == Some(index)))
            .collect();
        self.generation += 1;
        Reconciled::Rebuilt
    }

    /// Drop every channel
    pub fn clear(&mut self) {
        if !self.channels.is_empty() {
            self.channels.clear();
            self.generation += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ProgressChannel> {
        self.channels.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProgressChannel> {
        self.channels.iter()
    }

    /// Snapshot of every channel's current value
    pub fn values(&self) -> Vec<f32> {
        self.channels.iter().map(ProgressChannel::value).collect()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub(crate) fn channels_mut(&mut self) -> &mut [ProgressChannel] {
        &mut self.channels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconcile_seeds_resting_values() {
        let mut registry = ChannelRegistry::new();
        assert_eq!(registry.reconcile(4, Some(1)), Reconciled::Rebuilt);
        assert_eq!(registry.len(), 4);
        assert_eq!(registry.values(), vec![0.0, 1.0, 0.0, 0.0]);
        for (i, ch) in registry.iter().enumerate() {
            assert_eq!(ch.index(), i);
        }
    }

    #[test]
    fn test_reconcile_same_count_keeps_channels() {
        let mut registry = ChannelRegistry::new();
        registry.reconcile(3, Some(0));
        registry.channels_mut()[0].aim(0.0);
        registry.channels_mut()[0].sample(0.5);
        let generation = registry.generation();

        // a different active index alone does not reseed
        assert_eq!(registry.reconcile(3, Some(2)), Reconciled::Unchanged);
        assert_eq!(registry.values(), vec![0.5, 0.0, 0.0]);
        assert_eq!(registry.generation(), generation);
    }

    #[test]
    fn test_count_change_drops_in_flight_progress() {
        let mut registry = ChannelRegistry::new();
        registry.reconcile(3, Some(0));
        registry.channels_mut()[0].aim(0.0);
        registry.channels_mut()[0].sample(0.5);

        assert_eq!(registry.reconcile(4, Some(2)), Reconciled::Rebuilt);
        assert_eq!(registry.values(), vec![0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn test_active_out_of_range_marks_nothing() {
        let mut registry = ChannelRegistry::new();
        registry.reconcile(3, Some(7));
        assert_eq!(registry.values(), vec![0.0, 0.0, 0.0]);
        registry.reconcile(2, None);
        assert_eq!(registry.values(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_zero_dots() {
        let mut registry = ChannelRegistry::new();
        assert_eq!(registry.reconcile(0, Some(0)), Reconciled::Unchanged);
        assert!(registry.is_empty());

        registry.reconcile(2, Some(0));
        let generation = registry.generation();
        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.generation() > generation);
    }
}

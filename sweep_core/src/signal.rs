// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Value-change signalling from segments to their container.
//!
//! A segment does not know about its container. When its value is written it reports its own id
//! to a [`ChangeSink`]; the container owns a [`ChangeQueue`] and drains it synchronously to run a
//! single layout pass for any number of queued changes.

use smallvec::SmallVec;

use crate::SegmentId;

/// Receives "value changed" signals.
pub trait ChangeSink {
    /// Called after the segment identified by `id` has had its value written.
    fn value_changed(&mut self, id: SegmentId);
}

impl<F: FnMut(SegmentId)> ChangeSink for F {
    fn value_changed(&mut self, id: SegmentId) {
        self(id);
    }
}

/// A pending set of changed segment ids, in first-signalled order.
///
/// Repeated signals from the same segment are coalesced.
#[derive(Clone, Debug, Default)]
pub struct ChangeQueue {
    pending: SmallVec<[SegmentId; 4]>,
}

impl ChangeQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no change is pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Number of distinct segments with a pending change.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Pending ids in first-signalled order.
    pub fn pending(&self) -> &[SegmentId] {
        &self.pending
    }

    /// Removes and returns all pending ids.
    pub fn take(&mut self) -> SmallVec<[SegmentId; 4]> {
        core::mem::take(&mut self.pending)
    }

    /// Drops all pending ids.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

impl ChangeSink for ChangeQueue {
    fn value_changed(&mut self, id: SegmentId) {
        if !self.pending.contains(&id) {
            self.pending.push(id);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn queue_coalesces_repeated_signals() {
        let mut q = ChangeQueue::new();
        q.value_changed(SegmentId(2));
        q.value_changed(SegmentId(1));
        q.value_changed(SegmentId(2));
        assert_eq!(q.pending(), &[SegmentId(2), SegmentId(1)]);

        let taken = q.take();
        assert_eq!(taken.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn closures_are_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = |id: SegmentId| seen.push(id);
            sink.value_changed(SegmentId(7));
        }
        assert_eq!(seen, [SegmentId(7)]);
    }
}

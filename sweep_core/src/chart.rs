// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pie chart container.
//!
//! A [`PieChart`] owns an ordered list of segments. Order fixes each segment's angular position:
//! segment `i` starts at the sum of the values before it. A layout pass is a single linear walk
//! that computes the total and hands every segment its running offset.
//!
//! Passes are triggered by membership changes and by value-change signals. Segments report
//! changes to the chart's [`ChangeQueue`]; the chart drains the queue synchronously and lays out
//! once no matter how many signals were queued.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;

use crate::config::ChartConfig;
use crate::reveal::RevealSchedule;
use crate::segment::{Segment, SegmentId};
use crate::signal::ChangeQueue;
use crate::trace::{LayoutEvent, MembershipEvent, Tracer, ValueChangedEvent};

/// Errors returned by [`PieChart`] operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartError {
    /// No segment with this id belongs to the chart.
    UnknownSegment(SegmentId),
    /// A segment with this id already belongs to the chart.
    DuplicateSegment(SegmentId),
}

impl core::fmt::Display for ChartError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::UnknownSegment(id) => write!(f, "unknown segment {}", id.0),
            Self::DuplicateSegment(id) => write!(f, "duplicate segment {}", id.0),
        }
    }
}

impl core::error::Error for ChartError {}

/// A write handle to one segment of a chart.
///
/// Writes are signalled to the chart's queue but not laid out until
/// [`PieChart::process_signals`] runs, so several writes can share one pass.
#[derive(Debug)]
pub struct SegmentMut<'a> {
    segment: &'a mut Segment,
    queue: &'a mut ChangeQueue,
}

impl SegmentMut<'_> {
    /// The segment being written.
    pub fn segment(&self) -> &Segment {
        self.segment
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.segment.value()
    }

    /// Writes the value and queues a change signal.
    pub fn set_value(&mut self, value: f64) {
        self.segment.set_value(value, &mut *self.queue);
    }
}

/// An ordered collection of segments laid out around one circle.
#[derive(Debug)]
pub struct PieChart {
    config: ChartConfig,
    segments: Vec<Segment>,
    index: HashMap<SegmentId, usize>,
    queue: ChangeQueue,
    total: f64,
}

impl PieChart {
    /// Creates an empty chart.
    pub fn new(config: ChartConfig) -> Self {
        Self {
            config,
            segments: Vec::new(),
            index: HashMap::new(),
            queue: ChangeQueue::new(),
            total: 0.0,
        }
    }

    /// Chart configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Replaces the chart configuration.
    ///
    /// Layout is expressed in turns and does not depend on the config, so no pass is run.
    pub fn set_config(&mut self, config: ChartConfig) {
        self.config = config;
    }

    /// Sum of all values at the last layout pass.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Segments in angular order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if the chart has no segments.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Looks up a segment by id.
    pub fn segment(&self, id: SegmentId) -> Option<&Segment> {
        self.index.get(&id).map(|&i| &self.segments[i])
    }

    /// Returns a write handle to a segment.
    pub fn segment_mut(&mut self, id: SegmentId) -> Option<SegmentMut<'_>> {
        let &i = self.index.get(&id)?;
        Some(SegmentMut {
            segment: &mut self.segments[i],
            queue: &mut self.queue,
        })
    }

    /// Returns `true` if value changes are waiting for a layout pass.
    pub fn has_pending_signals(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Replaces the segment list and lays it out.
    ///
    /// On a duplicate id the chart is left unchanged.
    pub fn set_segments(
        &mut self,
        segments: impl IntoIterator<Item = Segment>,
    ) -> Result<(), ChartError> {
        self.set_segments_traced(segments, &mut Tracer::none())
    }

    /// Like [`PieChart::set_segments`], reporting events to `tracer`.
    pub fn set_segments_traced(
        &mut self,
        segments: impl IntoIterator<Item = Segment>,
        tracer: &mut Tracer<'_>,
    ) -> Result<(), ChartError> {
        let segments: Vec<Segment> = segments.into_iter().collect();
        let index = build_index(&segments)?;
        self.segments = segments;
        self.index = index;
        // Signals refer to the previous membership and are covered by the pass below.
        self.queue.clear();
        tracer.membership(&MembershipEvent {
            segments: self.segments.len(),
        });
        self.layout_traced(tracer);
        Ok(())
    }

    /// Appends a segment and lays the chart out.
    pub fn push_segment(&mut self, segment: Segment) -> Result<(), ChartError> {
        let id = segment.id();
        if self.index.contains_key(&id) {
            return Err(ChartError::DuplicateSegment(id));
        }
        self.index.insert(id, self.segments.len());
        self.segments.push(segment);
        self.layout();
        Ok(())
    }

    /// Removes a segment and lays the remaining ones out.
    pub fn remove_segment(&mut self, id: SegmentId) -> Result<Segment, ChartError> {
        let Some(i) = self.index.remove(&id) else {
            return Err(ChartError::UnknownSegment(id));
        };
        let removed = self.segments.remove(i);
        for slot in self.index.values_mut() {
            if *slot > i {
                *slot -= 1;
            }
        }
        self.layout();
        Ok(removed)
    }

    /// Writes a segment's value and lays the chart out in response.
    pub fn set_value(&mut self, id: SegmentId, value: f64) -> Result<(), ChartError> {
        self.set_value_traced(id, value, &mut Tracer::none())
    }

    /// Like [`PieChart::set_value`], reporting events to `tracer`.
    pub fn set_value_traced(
        &mut self,
        id: SegmentId,
        value: f64,
        tracer: &mut Tracer<'_>,
    ) -> Result<(), ChartError> {
        let Some(mut segment) = self.segment_mut(id) else {
            return Err(ChartError::UnknownSegment(id));
        };
        let old = segment.value();
        segment.set_value(value);
        tracer.value_changed(&ValueChangedEvent {
            id,
            old,
            new: value,
        });
        self.process_signals_traced(tracer);
        Ok(())
    }

    /// Drains queued value-change signals, running at most one layout pass.
    ///
    /// Returns `true` if a pass ran.
    pub fn process_signals(&mut self) -> bool {
        self.process_signals_traced(&mut Tracer::none())
    }

    /// Like [`PieChart::process_signals`], reporting events to `tracer`.
    pub fn process_signals_traced(&mut self, tracer: &mut Tracer<'_>) -> bool {
        if self.queue.is_empty() {
            return false;
        }
        self.queue.clear();
        self.layout_traced(tracer);
        true
    }

    /// Recomputes the total and every segment's offset.
    pub fn layout(&mut self) {
        self.layout_traced(&mut Tracer::none());
    }

    /// Like [`PieChart::layout`], reporting events to `tracer`.
    pub fn layout_traced(&mut self, tracer: &mut Tracer<'_>) {
        let total: f64 = self.segments.iter().map(Segment::value).sum();
        let mut position = 0.0;
        for segment in &mut self.segments {
            segment.layout(position, total);
            position += segment.value();
        }
        self.total = total;
        tracer.layout(&LayoutEvent {
            segments: self.segments.len(),
            total,
        });
    }

    /// Reveal schedules for every segment, in angular order, using the chart's animation config.
    pub fn reveals(&self) -> impl Iterator<Item = (SegmentId, RevealSchedule)> {
        let animation = self.config.animation;
        self.segments
            .iter()
            .map(move |s| (s.id(), s.reveal(&animation)))
    }
}

impl Default for PieChart {
    fn default() -> Self {
        Self::new(ChartConfig::default())
    }
}

fn build_index(segments: &[Segment]) -> Result<HashMap<SegmentId, usize>, ChartError> {
    let mut index = HashMap::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        if index.insert(segment.id(), i).is_some() {
            return Err(ChartError::DuplicateSegment(segment.id()));
        }
    }
    Ok(index)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;
    use alloc::vec::Vec;

    use super::*;

    fn chart(values: &[f64]) -> PieChart {
        let mut chart = PieChart::default();
        chart
            .set_segments(
                values
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| Segment::new(SegmentId(i as u64), v)),
            )
            .unwrap();
        chart
    }

    #[test]
    fn duplicate_ids_leave_the_chart_unchanged() {
        let mut c = chart(&[1.0, 2.0]);
        let err = c
            .set_segments(vec![
                Segment::new(SegmentId(5), 1.0),
                Segment::new(SegmentId(5), 2.0),
            ])
            .unwrap_err();
        assert_eq!(err, ChartError::DuplicateSegment(SegmentId(5)));
        assert_eq!(c.len(), 2);
        assert_eq!(c.total(), 3.0);
        assert!(c.segment(SegmentId(5)).is_none());
    }

    #[test]
    fn unknown_segment_is_reported() {
        let mut c = chart(&[1.0]);
        assert_eq!(
            c.set_value(SegmentId(9), 3.0),
            Err(ChartError::UnknownSegment(SegmentId(9)))
        );
        assert_eq!(c.total(), 1.0);
        assert_eq!(
            ChartError::UnknownSegment(SegmentId(9)).to_string(),
            "unknown segment 9"
        );
    }

    #[test]
    fn set_value_relays_out_every_sibling() {
        let mut c = chart(&[1.0, 1.0, 2.0]);
        c.set_value(SegmentId(0), 4.0).unwrap();
        assert_eq!(c.total(), 7.0);
        let rotations: Vec<f64> = c.segments().iter().map(Segment::rotation).collect();
        assert_eq!(rotations, [0.0, 4.0 / 7.0, 5.0 / 7.0]);
        assert!(!c.has_pending_signals());
    }

    #[test]
    fn batched_writes_share_one_pass() {
        let mut c = chart(&[1.0, 1.0]);
        let before = c.segment(SegmentId(1)).unwrap().revision();

        c.segment_mut(SegmentId(0)).unwrap().set_value(2.0);
        c.segment_mut(SegmentId(1)).unwrap().set_value(2.0);
        assert!(c.has_pending_signals());
        // Local recompute uses the stale total of 2.
        assert_eq!(c.segment(SegmentId(1)).unwrap().fraction(), 1.0);

        assert!(c.process_signals());
        assert!(!c.process_signals());
        assert_eq!(c.total(), 4.0);
        assert_eq!(c.segment(SegmentId(1)).unwrap().fraction(), 0.5);
        // One local recompute plus one pass.
        assert_eq!(c.segment(SegmentId(1)).unwrap().revision(), before + 2);
    }

    #[test]
    fn push_and_remove_are_membership_changes() {
        let mut c = chart(&[1.0, 1.0]);
        c.push_segment(Segment::new(SegmentId(7), 2.0)).unwrap();
        assert_eq!(c.total(), 4.0);
        assert_eq!(c.segment(SegmentId(7)).unwrap().rotation(), 0.5);
        assert_eq!(
            c.push_segment(Segment::new(SegmentId(7), 1.0)),
            Err(ChartError::DuplicateSegment(SegmentId(7)))
        );

        let removed = c.remove_segment(SegmentId(0)).unwrap();
        assert_eq!(removed.id(), SegmentId(0));
        assert_eq!(c.total(), 3.0);
        assert_eq!(c.segment(SegmentId(1)).unwrap().rotation(), 0.0);
        assert_eq!(c.segment(SegmentId(7)).unwrap().position_offset(), 1.0);
        assert_eq!(
            c.remove_segment(SegmentId(0)).unwrap_err(),
            ChartError::UnknownSegment(SegmentId(0))
        );
    }

    #[test]
    fn reveals_follow_segment_order() {
        let mut c = chart(&[1.0, 3.0]);
        c.set_config(ChartConfig::default().with_animation(crate::AnimationConfig::new(1.0)));
        let ids: Vec<SegmentId> = c.reveals().map(|(id, _)| id).collect();
        assert_eq!(ids, [SegmentId(0), SegmentId(1)]);
        let (_, second) = c.reveals().nth(1).unwrap();
        assert_eq!(second.slice.rotation, 0.25);
        assert_eq!(second.masks.len(), 6);
    }
}

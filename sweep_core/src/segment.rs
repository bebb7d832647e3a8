// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A single pie segment: value, layout inputs and derived geometry.
//!
//! A segment is laid out from `{ value, position_offset, total }`:
//! - `fraction = value / total` is the angular span in turns,
//! - `rotation = position_offset / total` is the angular start in turns.
//!
//! Besides the primary wedge ("slice"), a segment derives the mask sub-wedges used to reveal it.
//! A single growing arc cannot be animated past half a turn because the large-arc flag flips at
//! `0.5`, so reflex slices are split into several equal sub-wedges, each at most half a turn.

use kurbo::BezPath;
use smallvec::SmallVec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::arc::WedgePath;
use crate::config::{AnimationConfig, ChartConfig};
use crate::reveal::RevealSchedule;
use crate::signal::ChangeSink;

/// Upper bound on the number of mask sub-wedges for a single segment.
///
/// The subdivision count `ceil(2f / (1 - f))` grows without bound as `f` approaches a full turn.
/// Any count of at least two keeps every sub-wedge within half a turn, so the count is capped
/// here. The cap only engages for `f > 32/33`.
pub const MAX_MASK_WEDGES: usize = 64;

/// Stable identity for a segment within a chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SegmentId(pub u64);

/// One piece of a segment's reveal mask.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaskWedge {
    /// Outline of the sub-wedge, starting at the seam.
    pub path: WedgePath,
    /// Offset in turns from the segment's own start.
    pub start: f64,
    /// Reveal delay in turns, relative to the chart's layout.
    pub delay: f64,
}

impl MaskWedge {
    /// Returns the sub-wedge outline in scene coordinates, for a segment rotated by
    /// `segment_rotation` turns.
    pub fn placed_path(&self, segment_rotation: f64, config: &ChartConfig) -> BezPath {
        config.placement(segment_rotation + self.start)
            * self.path.to_bez_path(config.unit_tolerance())
    }
}

/// Returns the number of mask sub-wedges used to reveal a slice spanning `span` turns.
///
/// Spans up to half a turn use a single wedge. Larger spans use `ceil(2·span / (1 − span))`,
/// capped at [`MAX_MASK_WEDGES`].
pub fn mask_wedge_count(span: f64) -> usize {
    if span.is_nan() || span <= 0.5 {
        return 1;
    }
    let raw = (2.0 * span / (1.0 - span)).ceil();
    if (1.0..=MAX_MASK_WEDGES as f64).contains(&raw) {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "guarded by finite/range checks and capped at MAX_MASK_WEDGES"
        )]
        {
            raw as usize
        }
    } else {
        MAX_MASK_WEDGES
    }
}

fn subdivide(slice: &WedgePath, rotation: f64) -> SmallVec<[MaskWedge; 1]> {
    let span = slice.span();
    let count = mask_wedge_count(span);
    if count == 1 {
        return smallvec::smallvec![MaskWedge {
            path: *slice,
            start: 0.0,
            delay: rotation,
        }];
    }

    let step = span / count as f64;
    let path = WedgePath::new(step);
    (0..count)
        .map(|k| {
            let start = k as f64 * step;
            MaskWedge {
                path,
                start,
                delay: rotation + start,
            }
        })
        .collect()
}

fn finite_or_zero(x: f64) -> f64 {
    if x.is_finite() { x } else { 0.0 }
}

/// A pie segment owning one value.
///
/// Layout inputs are assigned by the container; the derived fields are recomputed whenever either
/// the inputs or the value change. Every recomputation bumps [`Segment::revision`] so hosts can
/// tell when to redraw.
#[derive(Clone, Debug)]
pub struct Segment {
    id: SegmentId,
    value: f64,
    position_offset: f64,
    total: f64,
    fraction: f64,
    rotation: f64,
    slice: WedgePath,
    masks: SmallVec<[MaskWedge; 1]>,
    revision: u64,
}

impl Segment {
    /// Creates a segment that has not been laid out yet.
    pub fn new(id: SegmentId, value: f64) -> Self {
        let mut segment = Self {
            id,
            value,
            position_offset: 0.0,
            total: 0.0,
            fraction: 0.0,
            rotation: 0.0,
            slice: WedgePath::EMPTY,
            masks: SmallVec::new(),
            revision: 0,
        };
        segment.recompute();
        segment
    }

    /// Stable id.
    pub fn id(&self) -> SegmentId {
        self.id
    }

    /// Current value.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Writes the value and reports the change to `sink`.
    ///
    /// The derived geometry is recomputed immediately from the previous layout inputs; those are
    /// stale until the container responds to the signal with a new layout pass.
    pub fn set_value(&mut self, value: f64, sink: &mut dyn ChangeSink) {
        self.value = value;
        self.recompute();
        sink.value_changed(self.id);
    }

    /// Lays the segment out at `position_offset` within a chart summing to `total`.
    pub fn layout(&mut self, position_offset: f64, total: f64) {
        self.position_offset = position_offset;
        self.total = total;
        self.recompute();
    }

    /// Sum of the preceding siblings' values at the last layout.
    pub fn position_offset(&self) -> f64 {
        self.position_offset
    }

    /// Sum of all sibling values at the last layout.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Angular span in turns. `0` when the total is zero.
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Angular start in turns. `0` when the total is zero.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// The full wedge outline for this segment's fraction.
    pub fn slice(&self) -> &WedgePath {
        &self.slice
    }

    /// Mask sub-wedges in reveal order.
    pub fn masks(&self) -> &[MaskWedge] {
        &self.masks
    }

    /// Incremented every time the derived geometry is recomputed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the slice outline in scene coordinates.
    pub fn placed_path(&self, config: &ChartConfig) -> BezPath {
        config.placement(self.rotation) * self.slice.to_bez_path(config.unit_tolerance())
    }

    /// Returns the reveal schedule for this segment.
    pub fn reveal(&self, animation: &AnimationConfig) -> RevealSchedule {
        RevealSchedule::new(self, animation)
    }

    fn recompute(&mut self) {
        let (fraction, rotation) = if self.total.is_finite() && self.total > 0.0 {
            (
                finite_or_zero(self.value / self.total),
                finite_or_zero(self.position_offset / self.total),
            )
        } else {
            (0.0, 0.0)
        };
        self.fraction = fraction;
        self.rotation = rotation;
        self.slice = WedgePath::new(fraction);
        self.masks = subdivide(&self.slice, rotation);
        self.revision = self.revision.wrapping_add(1);
    }
}

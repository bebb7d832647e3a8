// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing hooks for chart updates.
//!
//! [`TraceSink`] has one method per event, all defaulting to no-ops. [`Tracer`] wraps an
//! optional `&mut dyn TraceSink`. When the `trace` feature is **off**, every `Tracer` method
//! compiles to nothing. When **on**, each method performs a single `Option` branch before
//! dispatching.

use crate::segment::SegmentId;

/// Emitted after every layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEvent {
    /// Number of segments laid out.
    pub segments: usize,
    /// Sum of all values.
    pub total: f64,
}

/// Emitted when a segment's value is written through the chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueChangedEvent {
    /// Segment that changed.
    pub id: SegmentId,
    /// Value before the write.
    pub old: f64,
    /// Value after the write.
    pub new: f64,
}

/// Emitted when the chart's segment membership is replaced or edited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MembershipEvent {
    /// Number of segments after the change.
    pub segments: usize,
}

/// Receives trace events from chart updates.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called after a layout pass.
    fn on_layout(&mut self, e: &LayoutEvent) {
        _ = e;
    }

    /// Called after a value write, before the resulting layout pass.
    fn on_value_changed(&mut self, e: &ValueChangedEvent) {
        _ = e;
    }

    /// Called after a membership change, before the resulting layout pass.
    fn on_membership(&mut self, e: &MembershipEvent) {
        _ = e;
    }
}

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

/// Thin wrapper around an optional [`TraceSink`].
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: Some(sink) }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink: None }
        }
        #[cfg(not(feature = "trace"))]
        {
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits a [`LayoutEvent`].
    #[inline]
    pub fn layout(&mut self, e: &LayoutEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_layout(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`ValueChangedEvent`].
    #[inline]
    pub fn value_changed(&mut self, e: &ValueChangedEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_value_changed(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`MembershipEvent`].
    #[inline]
    pub fn membership(&mut self, e: &MembershipEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_membership(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

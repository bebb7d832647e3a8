// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie/donut segment layout with staggered reveal schedules.
//!
//! `sweep_core` keeps a set of pie segments in sync with each other:
//! - **Arc geometry** describes wedges on the unit circle, measured in turns.
//! - **Segments** own a value and derive their slice and mask sub-wedges from
//!   `{ value, position_offset, total }`.
//! - **[`PieChart`]** owns the ordered segments, lays them out in one linear pass, and re-runs
//!   that pass whenever membership changes or a segment signals a value change.
//!
//! The crate emits renderer-agnostic drawing instructions: wedge descriptions (SVG path data or
//! `kurbo::BezPath`) and typed [`RevealSchedule`]s. Rasterization, styling and event plumbing
//! belong to the host.
//!
//! ```
//! use sweep_core::{AnimationConfig, ChartConfig, PieChart, Segment, SegmentId};
//!
//! let config = ChartConfig::default().with_animation(AnimationConfig::new(1.0));
//! let mut chart = PieChart::new(config);
//! chart
//!     .set_segments([
//!         Segment::new(SegmentId(1), 1.0),
//!         Segment::new(SegmentId(2), 3.0),
//!     ])
//!     .unwrap();
//! assert_eq!(chart.segment(SegmentId(2)).unwrap().rotation(), 0.25);
//!
//! chart.set_value(SegmentId(1), 3.0).unwrap();
//! assert_eq!(chart.total(), 6.0);
//! ```
//!
//! # Crate features
//!
//! - `libm` (enabled by default): float math via `libm` in `no_std` builds.
//! - `std`: use `std` float math and enable `std` in dependencies.
//! - `trace`: enables the [`trace::Tracer`] method bodies.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod arc;
mod chart;
#[cfg(test)]
mod chart_tests;
mod config;
#[cfg(not(feature = "std"))]
mod float;
mod reveal;
mod segment;
mod signal;
pub mod trace;

pub use arc::{SEAM, WedgePath, large_arc_flag, point_on_circle};
pub use chart::{ChartError, PieChart, SegmentMut};
pub use config::{AnimationConfig, ChartConfig};
pub use reveal::{RevealHost, RevealSchedule, RevealStep, RevealTarget, Transition};
pub use segment::{MAX_MASK_WEDGES, MaskWedge, Segment, SegmentId, mask_wedge_count};
pub use signal::{ChangeQueue, ChangeSink};

// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart-level configuration.
//!
//! Layout itself is independent of these settings: segments are laid out on the unit circle in
//! turn fractions. The config only affects how that layout is scaled into time (animation) and
//! into scene coordinates (placement).

use core::f64::consts::TAU;

use kurbo::{Affine, Point};

/// Global animation timing.
///
/// Reveal delays and durations are expressed in turns by the layout engine. They are converted
/// to seconds by multiplying with [`AnimationConfig::duration`], the time it takes the reveal to
/// sweep one full turn.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationConfig {
    /// Seconds per full turn. `0` disables animation.
    pub duration: f64,
}

impl AnimationConfig {
    /// No animation: every transition is instant.
    pub const INSTANT: Self = Self { duration: 0.0 };

    /// Creates an animation config sweeping a full turn in `duration` seconds.
    pub fn new(duration: f64) -> Self {
        Self { duration }
    }

    /// Returns the instant (non-animated) config.
    pub fn instant() -> Self {
        Self::INSTANT
    }

    /// Returns `true` if transitions should be applied without animation.
    ///
    /// Zero, negative and non-finite durations all count as instant.
    pub fn is_instant(&self) -> bool {
        !(self.duration.is_finite() && self.duration > 0.0)
    }

    /// Converts an amount of turns into seconds.
    pub fn seconds(&self, turns: f64) -> f64 {
        if self.is_instant() {
            0.0
        } else {
            turns * self.duration
        }
    }
}

/// Placement and rendering options for a pie chart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartConfig {
    /// Reveal timing.
    pub animation: AnimationConfig,
    /// Center in scene coordinates.
    pub center: Point,
    /// Outer radius in scene coordinates.
    pub radius: f64,
    /// Donut hole radius as a fraction of `radius` (`0` for a pie).
    pub hole_ratio: f64,
    /// Chart-level rotation in turns applied before each segment's own rotation.
    ///
    /// Default: `-0.25`, which puts the seam at twelve o'clock in a y-down coordinate system.
    pub start_turn: f64,
    /// Curve flattening tolerance in scene coordinates.
    pub tolerance: f64,
}

impl ChartConfig {
    /// Creates a chart config for a circle at `center` with the given `radius`.
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            animation: AnimationConfig::INSTANT,
            center,
            radius,
            hole_ratio: 0.0,
            start_turn: -0.25,
            tolerance: 0.1,
        }
    }

    /// Sets the reveal timing.
    pub fn with_animation(mut self, animation: AnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Sets the donut hole ratio.
    pub fn with_hole_ratio(mut self, hole_ratio: f64) -> Self {
        self.hole_ratio = hole_ratio;
        self
    }

    /// Sets the chart-level rotation, in turns.
    pub fn with_start_turn(mut self, start_turn: f64) -> Self {
        self.start_turn = start_turn;
        self
    }

    /// Sets the curve flattening tolerance used for `BezPath` conversion.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the donut hole radius in scene coordinates.
    pub fn hole_radius(&self) -> f64 {
        self.radius * self.hole_ratio.clamp(0.0, 1.0)
    }

    /// Returns the flattening tolerance in unit-circle space.
    pub fn unit_tolerance(&self) -> f64 {
        if self.radius > 0.0 {
            self.tolerance / self.radius
        } else {
            self.tolerance
        }
    }

    /// Maps unit-circle wedge coordinates into scene coordinates for a wedge rotated by
    /// `rotation` turns.
    pub fn placement(&self, rotation: f64) -> Affine {
        Affine::translate(self.center.to_vec2())
            * Affine::rotate(TAU * (self.start_turn + rotation))
            * Affine::scale(self.radius)
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self::new(Point::ORIGIN, 100.0)
    }
}

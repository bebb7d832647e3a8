// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Unit-circle arc geometry.
//!
//! Every wedge is described on the unit circle, starting at the shared seam point `(1, 0)` and
//! sweeping in the positive angle direction. Placement (rotation, scale, translation) is applied
//! afterwards by the host or by [`ChartConfig::placement`](crate::ChartConfig::placement).
//!
//! Fractions are measured in turns: `0.25` is a quarter of the circle.

extern crate alloc;

use alloc::string::String;
use core::f64::consts::TAU;
use core::fmt::Write;

use kurbo::{Arc, BezPath, Circle, Point, Shape, SvgArc, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// The point every wedge starts from (turn-fraction `0`).
pub const SEAM: Point = Point::new(1.0, 0.0);

/// Returns the point on the unit circle at `fraction` of a full turn from angle `0`.
///
/// Fractions outside `[0, 1]` wrap naturally.
pub fn point_on_circle(fraction: f64) -> Point {
    let angle = TAU * fraction;
    Point::new(angle.cos(), angle.sin())
}

/// Returns the SVG large-arc flag for an arc spanning `fraction` of a turn.
///
/// A two-point, one-radius arc is ambiguous between the short and the long way around; the flag
/// selects the long way for reflex spans.
pub fn large_arc_flag(fraction: f64) -> bool {
    fraction > 0.5
}

/// A wedge outline on the unit circle: seam point, arc to the end point, line back to the center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WedgePath {
    span: f64,
    end: Point,
    large_arc: bool,
}

impl WedgePath {
    /// A wedge with zero span.
    pub const EMPTY: Self = Self {
        span: 0.0,
        end: SEAM,
        large_arc: false,
    };

    /// Creates a wedge spanning `span` turns.
    ///
    /// Non-finite and negative spans produce [`WedgePath::EMPTY`]; spans above one turn are
    /// clamped to a full turn.
    pub fn new(span: f64) -> Self {
        if !span.is_finite() || span <= 0.0 {
            return Self::EMPTY;
        }
        let span = span.min(1.0);
        Self {
            span,
            end: point_on_circle(span),
            large_arc: large_arc_flag(span),
        }
    }

    /// Angular span in turns, in `[0, 1]`.
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Start point of the arc (always [`SEAM`]).
    pub fn start(&self) -> Point {
        SEAM
    }

    /// End point of the arc.
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether the arc takes the long way around.
    pub fn large_arc(&self) -> bool {
        self.large_arc
    }

    /// Returns `true` if the wedge covers nothing.
    pub fn is_empty(&self) -> bool {
        self.span == 0.0
    }

    /// Returns `true` if the wedge covers the whole disc.
    ///
    /// The start and end points coincide in that case, so a single arc command cannot describe
    /// it.
    pub fn is_full_turn(&self) -> bool {
        self.span >= 1.0
    }

    /// Returns SVG path data for this wedge in unit-circle coordinates.
    ///
    /// Empty wedges yield an empty string. A full turn is written as two half-turn arcs.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        if self.is_empty() {
            return out;
        }
        if self.is_full_turn() {
            out.push_str("M 1 0 A 1 1 0 0 1 -1 0 A 1 1 0 0 1 1 0 Z");
            return out;
        }
        let flag = u8::from(self.large_arc);
        // Writing into a `String` cannot fail.
        let _ = write!(
            out,
            "M {} {} A 1 1 0 {flag} 1 {} {} L 0 0 Z",
            SEAM.x, SEAM.y, self.end.x, self.end.y
        );
        out
    }

    /// Returns this wedge as a `BezPath` in unit-circle coordinates.
    ///
    /// `tolerance` is the curve flattening tolerance in unit-circle space.
    pub fn to_bez_path(&self, tolerance: f64) -> BezPath {
        if self.is_empty() {
            return BezPath::new();
        }
        if self.is_full_turn() {
            return Circle::new(Point::ORIGIN, 1.0)
                .path_elements(tolerance)
                .collect();
        }

        let svg_arc = SvgArc {
            from: SEAM,
            to: self.end,
            radii: Vec2::new(1.0, 1.0),
            x_rotation: 0.0,
            large_arc: self.large_arc,
            sweep: true,
        };

        let mut path = BezPath::new();
        path.move_to(SEAM);
        match Arc::from_svg_arc(&svg_arc) {
            Some(arc) => path.extend(arc.append_iter(tolerance)),
            // Spans too small to resolve into an arc degrade to a chord.
            None => path.line_to(self.end),
        }
        path.line_to(Point::ORIGIN);
        path.close_path();
        path
    }
}

impl Default for WedgePath {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    fn assert_point_close(a: Point, b: Point) {
        let eps = 1e-12;
        assert!((a.x - b.x).abs() <= eps, "x {a:?} != {b:?}");
        assert!((a.y - b.y).abs() <= eps, "y {a:?} != {b:?}");
    }

    #[test]
    fn point_on_circle_hits_the_quadrants() {
        assert_point_close(point_on_circle(0.0), Point::new(1.0, 0.0));
        assert_point_close(point_on_circle(0.25), Point::new(0.0, 1.0));
        assert_point_close(point_on_circle(0.5), Point::new(-1.0, 0.0));
        assert_point_close(point_on_circle(0.75), Point::new(0.0, -1.0));
    }

    #[test]
    fn point_on_circle_wraps_past_one_turn() {
        assert_point_close(point_on_circle(1.25), point_on_circle(0.25));
        assert_point_close(point_on_circle(-0.25), point_on_circle(0.75));
    }

    #[test]
    fn large_arc_flag_flips_strictly_after_half_a_turn() {
        for f in [0.01, 0.25, 0.49, 0.5] {
            assert!(!large_arc_flag(f), "flag set for {f}");
        }
        for f in [0.500_001, 0.75, 0.99] {
            assert!(large_arc_flag(f), "flag unset for {f}");
        }
    }

    #[test]
    fn degenerate_spans_are_empty() {
        for span in [0.0, -0.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let w = WedgePath::new(span);
            assert!(w.is_empty(), "span {span} should be empty");
            assert_eq!(w.end(), SEAM);
            assert!(w.to_svg().is_empty(), "span {span} should have no svg");
            assert!(w.to_bez_path(0.01).elements().is_empty());
        }
    }

    #[test]
    fn spans_above_one_turn_clamp_to_full_turn() {
        let w = WedgePath::new(3.0);
        assert_eq!(w.span(), 1.0);
        assert!(w.is_full_turn());
        assert!(w.large_arc());
    }

    #[test]
    fn quarter_wedge_svg_uses_short_arc() {
        let w = WedgePath::new(0.25);
        let svg = w.to_svg();
        assert!(svg.starts_with("M 1 0 A 1 1 0 0 1 "), "unexpected svg {svg}");
        assert!(svg.ends_with(" L 0 0 Z"), "unexpected svg {svg}");
    }

    #[test]
    fn reflex_wedge_svg_uses_long_arc() {
        let svg = WedgePath::new(0.75).to_svg();
        assert!(svg.starts_with("M 1 0 A 1 1 0 1 1 "), "unexpected svg {svg}");
    }

    #[test]
    fn full_turn_svg_is_two_half_arcs() {
        let svg = WedgePath::new(1.0).to_svg();
        assert_eq!(svg, "M 1 0 A 1 1 0 0 1 -1 0 A 1 1 0 0 1 1 0 Z");
    }

    #[test]
    fn bez_path_bounds_follow_the_span() {
        let quarter = WedgePath::new(0.25).to_bez_path(1e-6).bounding_box();
        assert!(quarter.x0 >= -1e-9 && quarter.y0 >= -1e-9, "{quarter:?}");
        assert!((quarter.x1 - 1.0).abs() < 1e-4, "{quarter:?}");
        assert!((quarter.y1 - 1.0).abs() < 1e-4, "{quarter:?}");

        let reflex = WedgePath::new(0.75).to_bez_path(1e-6).bounding_box();
        assert!((reflex.x0 + 1.0).abs() < 1e-4, "{reflex:?}");
        assert!((reflex.y0 + 1.0).abs() < 1e-4, "{reflex:?}");

        let full = WedgePath::new(1.0).to_bez_path(1e-6).bounding_box();
        assert!((full.width() - 2.0).abs() < 1e-4, "{full:?}");
        assert!((full.height() - 2.0).abs() < 1e-4, "{full:?}");
    }
}

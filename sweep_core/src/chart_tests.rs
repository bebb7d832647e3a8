// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use alloc::vec::Vec;

use crate::{
    AnimationConfig, ChartConfig, MAX_MASK_WEDGES, PieChart, RevealSchedule, Segment, SegmentId,
    Transition, large_arc_flag, mask_wedge_count,
};

const VALUE_SETS: &[&[f64]] = &[
    &[1.0],
    &[1.0, 1.0, 2.0],
    &[3.0, 1.0],
    &[0.5, 0.25, 7.0, 0.0, 1.5],
    &[0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7],
    &[1e-9, 1e9],
    &[0.0, 5.0, 0.0],
];

fn chart(values: &[f64]) -> PieChart {
    let config = ChartConfig::default().with_animation(AnimationConfig::new(1.5));
    let mut chart = PieChart::new(config);
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

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() <= 1e-9, "{a} != {b}");
}

fn assert_finite_schedule(s: &RevealSchedule) {
    for step in s.steps() {
        assert!(step.rotation.is_finite(), "{step:?}");
        if let Transition::Animated { delay, duration } = step.transition {
            assert!(delay.is_finite() && duration.is_finite(), "{step:?}");
        }
    }
}

#[test]
fn fractions_sum_to_one_and_rotations_are_prefix_sums() {
    for values in VALUE_SETS {
        let c = chart(values);
        let total: f64 = values.iter().sum();
        assert_eq!(c.total(), total);

        let fractions: f64 = c.segments().iter().map(Segment::fraction).sum();
        assert_close(fractions, 1.0);

        let mut prefix = 0.0;
        let mut last_rotation = 0.0;
        for (segment, &value) in c.segments().iter().zip(values.iter()) {
            assert_eq!(segment.position_offset(), prefix);
            assert_close(segment.rotation(), prefix / total);
            assert!(segment.rotation() >= last_rotation, "{values:?}");
            assert!((0.0..=1.0).contains(&segment.fraction()), "{values:?}");
            last_rotation = segment.rotation();
            prefix += value;
        }
    }
}

#[test]
fn large_arc_flag_matches_fraction() {
    for values in VALUE_SETS {
        let c = chart(values);
        for segment in c.segments() {
            assert_eq!(
                segment.slice().large_arc(),
                segment.fraction() > 0.5,
                "{values:?}"
            );
        }
    }
    let mut f = 0.01;
    while f < 1.0 {
        assert_eq!(large_arc_flag(f), f > 0.5);
        f += 0.01;
    }
}

#[test]
fn reflex_subdivision_respects_half_turn_limit() {
    let mut f = 0.51;
    while f < 1.0 {
        let n = mask_wedge_count(f);
        assert!(n >= 2, "count {n} for {f}");
        assert!(n <= MAX_MASK_WEDGES, "count {n} for {f}");
        if f <= 32.0 / 33.0 {
            let raw = 2.0 * f / (1.0 - f);
            assert_eq!(n as f64, raw.ceil(), "count {n} for {f}");
        }

        let mut s = Segment::new(SegmentId(0), f);
        s.layout(0.0, 1.0);
        assert_eq!(s.masks().len(), n);
        let spans: f64 = s.masks().iter().map(|m| m.path.span()).sum();
        assert_close(spans, f);
        for m in s.masks() {
            assert!(m.path.span() <= 0.5, "span {m:?}");
            assert!(!m.path.large_arc(), "span {m:?}");
        }
        f += 0.01;
    }
}

#[test]
fn small_fractions_have_a_single_mask_equal_to_the_slice() {
    let c = chart(&[1.0, 1.0, 2.0]);
    for segment in c.segments() {
        assert_eq!(segment.masks().len(), 1);
        assert_eq!(segment.masks()[0].path, *segment.slice());
        assert_eq!(segment.masks()[0].delay, segment.rotation());
    }
}

#[test]
fn layout_is_idempotent() {
    for values in VALUE_SETS {
        let mut c = chart(values);
        let snapshot = |c: &PieChart| {
            c.segments()
                .iter()
                .map(|s| {
                    (
                        s.position_offset(),
                        s.total(),
                        *s.slice(),
                        s.masks().to_vec(),
                        s.slice().to_svg(),
                    )
                })
                .collect::<Vec<_>>()
        };
        let first = snapshot(&c);
        c.layout();
        c.layout();
        assert_eq!(snapshot(&c), first, "{values:?}");
        let reveals: Vec<_> = c.reveals().collect();
        c.layout();
        assert_eq!(c.reveals().collect::<Vec<_>>(), reveals);
    }
}

#[test]
fn all_zero_values_produce_empty_arcs_without_nan() {
    for values in [&[][..], &[0.0][..], &[0.0, 0.0, 0.0][..]] {
        let c = chart(values);
        assert_eq!(c.total(), 0.0);
        for segment in c.segments() {
            assert_eq!(segment.fraction(), 0.0);
            assert_eq!(segment.rotation(), 0.0);
            assert!(segment.slice().is_empty());
            assert!(segment.slice().to_svg().is_empty());
            for m in segment.masks() {
                assert!(m.path.is_empty());
                assert!(m.delay.is_finite() && m.start.is_finite());
            }
        }
        for (_, schedule) in c.reveals() {
            assert_finite_schedule(&schedule);
        }
    }
}

#[test]
fn quarter_quarter_half_example() {
    let c = chart(&[1.0, 1.0, 2.0]);
    assert_eq!(c.total(), 4.0);
    let fractions: Vec<f64> = c.segments().iter().map(Segment::fraction).collect();
    let rotations: Vec<f64> = c.segments().iter().map(Segment::rotation).collect();
    assert_eq!(fractions, [0.25, 0.25, 0.5]);
    assert_eq!(rotations, [0.0, 0.25, 0.5]);
    for segment in c.segments() {
        assert!(!segment.slice().large_arc());
        assert_eq!(segment.masks().len(), 1);
    }
}

#[test]
fn single_full_turn_segment_is_clamped() {
    let c = chart(&[10.0]);
    let segment = &c.segments()[0];
    assert_eq!(c.total(), 10.0);
    assert_eq!(segment.fraction(), 1.0);
    assert!(segment.slice().large_arc());
    assert!(segment.slice().is_full_turn());
    assert_eq!(segment.masks().len(), MAX_MASK_WEDGES);
    for (_, schedule) in c.reveals() {
        assert_finite_schedule(&schedule);
        assert_close(schedule.end(), 1.5);
    }
}

#[test]
fn negative_values_do_not_panic() {
    let c = chart(&[3.0, -1.0, 2.0]);
    assert_eq!(c.total(), 4.0);
    for segment in c.segments() {
        let _ = segment.slice().to_svg();
        let _ = segment.placed_path(c.config());
    }
    for (_, schedule) in c.reveals() {
        assert_finite_schedule(&schedule);
    }
}

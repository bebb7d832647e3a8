// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pie/donut demos for `sweep_core`.
//!
//! Writes `sweep_demo.html`, a report of animated charts (inline SVG + CSS).
mod html;
mod svg;

use kurbo::Point;
use peniko::Brush;
use peniko::color::palette::css;
use sweep_core::trace::{LayoutEvent, MembershipEvent, TraceSink, Tracer, ValueChangedEvent};
use sweep_core::{AnimationConfig, ChartConfig, PieChart, Segment, SegmentId};

fn main() {
    let sections = vec![
        basic_demo(),
        reflex_demo(),
        donut_demo(),
        full_turn_demo(),
        update_demo(),
        batched_demo(),
    ];

    let html = html::render_report("Sweep demo", &sections);
    std::fs::write("sweep_demo.html", html).expect("write sweep_demo.html");
    println!("wrote sweep_demo.html");
}

/// Categorical fills; repeats if there are more segments than colors.
fn series_fills(count: usize) -> Vec<Brush> {
    const PALETTE: [peniko::Color; 8] = [
        css::CORNFLOWER_BLUE,
        css::ORANGE,
        css::MEDIUM_SEA_GREEN,
        css::CRIMSON,
        css::GOLDENROD,
        css::SLATE_BLUE,
        css::DARK_CYAN,
        css::HOT_PINK,
    ];

    (0..count)
        .map(|i| Brush::Solid(PALETTE[i % PALETTE.len()]))
        .collect()
}

fn demo_config() -> ChartConfig {
    ChartConfig::new(Point::new(80.0, 80.0), 70.0).with_animation(AnimationConfig::new(1.2))
}

fn segments(values: &[f64]) -> Vec<Segment> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Segment::new(SegmentId(i as u64), v))
        .collect()
}

fn build_chart(config: ChartConfig, values: &[f64]) -> PieChart {
    let mut chart = PieChart::new(config);
    chart
        .set_segments(segments(values))
        .expect("demo segment ids are unique");
    chart
}

fn single_chart_section(
    title: &'static str,
    description: &'static str,
    key: &str,
    config: ChartConfig,
    values: &[f64],
) -> html::HtmlSection {
    let chart = build_chart(config, values);
    let svg = svg::chart_svg(&chart, &series_fills(values.len()), key);
    html::HtmlSection {
        title,
        description,
        svgs: vec![svg],
        log: describe(&chart),
    }
}

fn describe(chart: &PieChart) -> Vec<String> {
    chart
        .segments()
        .iter()
        .map(|s| {
            format!(
                "segment {}: value={} fraction={:.4} rotation={:.4} large_arc={} masks={}",
                s.id().0,
                s.value(),
                s.fraction(),
                s.rotation(),
                s.slice().large_arc(),
                s.masks().len()
            )
        })
        .collect()
}

fn basic_demo() -> html::HtmlSection {
    single_chart_section(
        "Basic",
        "Values [1, 1, 2]: quarter, quarter, half. Every slice fits in half a turn and is \
         revealed through a single mask.",
        "basic",
        demo_config(),
        &[1.0, 1.0, 2.0],
    )
}

fn reflex_demo() -> html::HtmlSection {
    single_chart_section(
        "Reflex slice",
        "The first slice spans 0.7 turns, so its reveal mask is split into equal sub-wedges, \
         each shown after its own delay.",
        "reflex",
        demo_config(),
        &[7.0, 2.0, 1.0],
    )
}

fn donut_demo() -> html::HtmlSection {
    single_chart_section(
        "Donut",
        "The same engine with a hole cut out of every mask.",
        "donut",
        demo_config().with_hole_ratio(0.55),
        &[3.0, 5.0, 2.0, 4.0],
    )
}

fn full_turn_demo() -> html::HtmlSection {
    single_chart_section(
        "Full turn",
        "A single segment covering the whole circle; the sub-wedge count is capped.",
        "full",
        demo_config(),
        &[10.0],
    )
}

/// Collects trace events as report lines and echoes them to stdout.
#[derive(Debug, Default)]
struct LogSink {
    lines: Vec<String>,
}

impl LogSink {
    fn push(&mut self, line: String) {
        println!("{line}");
        self.lines.push(line);
    }
}

impl TraceSink for LogSink {
    fn on_layout(&mut self, e: &LayoutEvent) {
        self.push(format!("layout: {} segments, total={}", e.segments, e.total));
    }

    fn on_value_changed(&mut self, e: &ValueChangedEvent) {
        self.push(format!("value: segment {} {} -> {}", e.id.0, e.old, e.new));
    }

    fn on_membership(&mut self, e: &MembershipEvent) {
        self.push(format!("membership: {} segments", e.segments));
    }
}

fn update_demo() -> html::HtmlSection {
    let values = [2.0, 1.0, 3.0];
    let fills = series_fills(values.len());
    let mut sink = LogSink::default();
    let mut chart = PieChart::new(demo_config());
    let mut svgs = Vec::new();

    {
        let mut tracer = Tracer::new(&mut sink);
        chart
            .set_segments_traced(segments(&values), &mut tracer)
            .expect("demo segment ids are unique");
        svgs.push(svg::chart_svg(&chart, &fills, "update-0"));

        chart
            .set_value_traced(SegmentId(1), 6.0, &mut tracer)
            .expect("segment 1 exists");
        svgs.push(svg::chart_svg(&chart, &fills, "update-1"));

        chart
            .set_value_traced(SegmentId(2), 0.0, &mut tracer)
            .expect("segment 2 exists");
        svgs.push(svg::chart_svg(&chart, &fills, "update-2"));
    }

    html::HtmlSection {
        title: "Value updates",
        description: "Writing one value re-lays out every sibling. Snapshots after each write.",
        svgs,
        log: sink.lines,
    }
}

fn batched_demo() -> html::HtmlSection {
    let values = [1.0, 1.0, 1.0, 1.0];
    let fills = series_fills(values.len());
    let mut chart = build_chart(demo_config(), &values);
    let mut log = Vec::new();

    for (id, value) in [(0, 4.0), (2, 2.0)] {
        if let Some(mut segment) = chart.segment_mut(SegmentId(id)) {
            segment.set_value(value);
        }
    }
    log.push(format!(
        "pending before processing: {}",
        chart.has_pending_signals()
    ));
    let ran = chart.process_signals();
    log.push(format!("one pass for both writes: {ran}"));
    log.extend(describe(&chart));

    html::HtmlSection {
        title: "Batched writes",
        description: "Two writes through segment handles, coalesced into a single layout pass.",
        svgs: vec![svg::chart_svg(&chart, &fills, "batched")],
        log,
    }
}

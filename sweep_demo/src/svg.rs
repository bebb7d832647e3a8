// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `sweep_demo`.
//!
//! Each segment is written as a filled slice seen through an SVG `<mask>` made of its mask
//! sub-wedges. Reveal schedules are played into [`CssReveal`], which turns the hidden/revealed
//! phases into CSS animation styles.

use std::collections::HashMap;

use kurbo::Rect;
use peniko::Brush;
use sweep_core::{PieChart, RevealHost, RevealStep, RevealTarget, Transition};

/// A [`RevealHost`] that records one inline CSS style per target.
///
/// A static SVG has no update cycle to coalesce, so the commit barrier only needs to be counted;
/// `animation-fill-mode: both` keeps the hidden state visible until each delay elapses.
#[derive(Debug, Default)]
pub(crate) struct CssReveal {
    styles: HashMap<RevealTarget, String>,
    barriers: usize,
}

impl CssReveal {
    pub(crate) fn style(&self, target: RevealTarget) -> &str {
        self.styles.get(&target).map_or("", String::as_str)
    }

    pub(crate) fn barriers(&self) -> usize {
        self.barriers
    }
}

impl RevealHost for CssReveal {
    fn apply_hidden(&mut self, step: &RevealStep) {
        self.styles.insert(step.target, "opacity:0".to_string());
    }

    fn commit_barrier(&mut self) {
        self.barriers += 1;
    }

    fn apply_revealed(&mut self, step: &RevealStep) {
        let style = match step.transition {
            Transition::Instant => "opacity:1".to_string(),
            Transition::Animated { delay, duration } => {
                let keyframes = match step.target {
                    RevealTarget::Slice => "sweep-show",
                    RevealTarget::Mask(_) => "sweep-fade",
                };
                format!("animation:{keyframes} {duration:.4}s linear {delay:.4}s both")
            }
        };
        self.styles.insert(step.target, style);
    }
}

/// Renders a laid-out chart as a standalone `<svg>` element.
///
/// `key` must be unique within the page; it prefixes the mask ids.
pub(crate) fn chart_svg(chart: &PieChart, fills: &[Brush], key: &str) -> String {
    let config = chart.config();
    let pad = 10.0;
    let view_box = Rect::from_center_size(
        config.center,
        (2.0 * config.radius + pad, 2.0 * config.radius + pad),
    );

    let mut out = String::new();
    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        view_box.x0,
        view_box.y0,
        view_box.width(),
        view_box.height(),
        view_box.width(),
        view_box.height()
    ));
    out.push('\n');

    let hole = config.hole_radius();
    for (i, segment) in chart.segments().iter().enumerate() {
        if segment.slice().is_empty() {
            continue;
        }
        let fill = fills
            .get(i % fills.len().max(1))
            .cloned()
            .unwrap_or_default();

        let mut reveal = CssReveal::default();
        segment.reveal(&config.animation).play(&mut reveal);
        debug_assert_eq!(reveal.barriers(), 1, "one commit barrier per schedule");

        let mask_id = format!("{key}-{}", segment.id().0);
        out.push_str(&format!(
            r#"<mask id="{mask_id}" maskUnits="userSpaceOnUse">"#
        ));
        out.push('\n');
        for (k, mask) in segment.masks().iter().enumerate() {
            let d = mask.placed_path(segment.rotation(), config).to_svg();
            out.push_str(&format!(
                r#"  <path d="{d}" fill="white" style="{}"/>"#,
                reveal.style(RevealTarget::Mask(k))
            ));
            out.push('\n');
        }
        if hole > 0.0 {
            out.push_str(&format!(
                r#"  <circle cx="{}" cy="{}" r="{hole}" fill="black"/>"#,
                config.center.x, config.center.y
            ));
            out.push('\n');
        }
        out.push_str("</mask>\n");

        let d = segment.placed_path(config).to_svg();
        out.push_str(&format!(r#"<path d="{d}""#));
        write_paint_attr(&mut out, "fill", &fill);
        out.push_str(&format!(
            r#" mask="url(#{mask_id})" style="{}"/>"#,
            reveal.style(RevealTarget::Slice)
        ));
        out.push('\n');
    }

    out.push_str("</svg>\n");
    out
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => {
            let rgba = color.to_rgba8();
            let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
            let fill_opacity = if rgba.a == 255 {
                None
            } else {
                Some(f64::from(rgba.a) / 255.0)
            };
            (fill, fill_opacity)
        }
        _ => ("none".to_string(), None),
    }
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}

pub(crate) fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

// Copyright 2025 the Sweep Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Self-contained HTML report for `sweep_demo`.

use crate::svg::escape_xml;

/// One demo: a heading, a short description, one or more SVG snapshots and an optional log.
#[derive(Debug)]
pub(crate) struct HtmlSection {
    pub(crate) title: &'static str,
    pub(crate) description: &'static str,
    pub(crate) svgs: Vec<String>,
    pub(crate) log: Vec<String>,
}

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 24px; color: #222; }
section { margin-bottom: 32px; }
.row { display: flex; gap: 16px; flex-wrap: wrap; align-items: flex-start; }
pre { background: #f4f4f4; padding: 8px; font-size: 12px; }
@keyframes sweep-fade { from { opacity: 0; } to { opacity: 1; } }
@keyframes sweep-show { from { opacity: 0; } to { opacity: 1; } }
[style*="sweep-show"] { animation-timing-function: step-start !important; }
"#;

pub(crate) fn render_report(title: &str, sections: &[HtmlSection]) -> String {
    let mut out = String::new();
    out.push_str("<!doctype html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", escape_xml(title)));
    out.push_str("<style>");
    out.push_str(STYLE);
    out.push_str("</style>\n</head>\n<body>\n");
    out.push_str(&format!("<h1>{}</h1>\n", escape_xml(title)));

    for section in sections {
        out.push_str("<section>\n");
        out.push_str(&format!("<h2>{}</h2>\n", escape_xml(section.title)));
        out.push_str(&format!("<p>{}</p>\n", escape_xml(section.description)));
        out.push_str("<div class=\"row\">\n");
        for svg in &section.svgs {
            out.push_str(svg);
        }
        out.push_str("</div>\n");
        if !section.log.is_empty() {
            out.push_str("<pre>");
            for line in &section.log {
                out.push_str(&escape_xml(line));
                out.push('\n');
            }
            out.push_str("</pre>\n");
        }
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

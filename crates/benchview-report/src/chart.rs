// Dweve Benchview - Benchmark Analysis & Reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! SVG line charts for the analysis reports.
//!
//! Two-panel charts: mean execution time by depth (log scale) on the left,
//! mean memory usage by depth (linear) on the right. Output is plain SVG
//! markup built as a string, fully determined by the aggregation data.

use crate::error::{RenderError, Result};
use crate::naming;
use benchview_core::{EnvironmentReport, ReportSet};
use std::fs;
use std::path::{Path, PathBuf};

const CHART_WIDTH: f64 = 1200.0;
const CHART_HEIGHT: f64 = 600.0;
const PANEL_WIDTH: f64 = 600.0;
const MARGIN_LEFT: f64 = 78.0;
const MARGIN_RIGHT: f64 = 26.0;
const MARGIN_TOP: f64 = 48.0;
const MARGIN_BOTTOM: f64 = 58.0;

const PALETTE: [&str; 6] = [
    "#1f77b4", "#d62728", "#2ca02c", "#9467bd", "#ff7f0e", "#8c564b",
];

struct Series {
    label: String,
    color: &'static str,
    points: Vec<(f64, f64)>,
}

struct Panel {
    title: String,
    y_label: &'static str,
    log_y: bool,
    dashed: bool,
    series: Vec<Series>,
}

/// Renders the two-panel chart for one environment.
pub fn render_environment_chart(
    environment: &str,
    report: &EnvironmentReport,
) -> Result<String> {
    let (times, memories) = mean_series(environment, report)?;
    let panels = [
        Panel {
            title: format!("Execution Time by Depth - {}", environment),
            y_label: "Average Execution Time (ms)",
            log_y: true,
            dashed: true,
            series: vec![Series {
                label: environment.to_string(),
                color: PALETTE[0],
                points: times,
            }],
        },
        Panel {
            title: format!("Memory Usage by Depth - {}", environment),
            y_label: "Average Memory Usage (MB)",
            log_y: false,
            dashed: false,
            series: vec![Series {
                label: environment.to_string(),
                color: PALETTE[1],
                points: memories,
            }],
        },
    ];
    Ok(render_svg(&panels))
}

/// Renders the comparison chart with one line per environment.
pub fn render_comparison_chart(set: &ReportSet) -> Result<String> {
    let mut time_series = Vec::new();
    let mut memory_series = Vec::new();
    for (index, (environment, report)) in set.environments().enumerate() {
        let color = PALETTE[index % PALETTE.len()];
        let (times, memories) = mean_series(environment, report)?;
        time_series.push(Series {
            label: environment.to_string(),
            color,
            points: times,
        });
        memory_series.push(Series {
            label: environment.to_string(),
            color,
            points: memories,
        });
    }

    let panels = [
        Panel {
            title: "Execution Time Comparison by Depth".to_string(),
            y_label: "Average Execution Time (ms)",
            log_y: true,
            dashed: true,
            series: time_series,
        },
        Panel {
            title: "Memory Usage Comparison by Depth".to_string(),
            y_label: "Average Memory Usage (MB)",
            log_y: false,
            dashed: false,
            series: memory_series,
        },
    ];
    Ok(render_svg(&panels))
}

/// Writes one chart per environment plus the comparison chart into
/// `output_dir`, overwriting existing artifacts. Returns the written paths.
pub fn write_charts(set: &ReportSet, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for (environment, report) in set.environments() {
        let path = output_dir.join(naming::environment_chart_filename(environment));
        let svg = render_environment_chart(environment, report)?;
        fs::write(&path, svg).map_err(|e| RenderError::io(&path, e))?;
        written.push(path);
    }

    let path = output_dir.join(naming::COMPARISON_CHART_FILENAME);
    let svg = render_comparison_chart(set)?;
    fs::write(&path, svg).map_err(|e| RenderError::io(&path, e))?;
    written.push(path);

    Ok(written)
}

// Mean execution time and memory usage per depth, as (depth, mean) points.
fn mean_series(
    environment: &str,
    report: &EnvironmentReport,
) -> Result<(Vec<(f64, f64)>, Vec<(f64, f64)>)> {
    let mut times = Vec::with_capacity(report.len());
    let mut memories = Vec::with_capacity(report.len());
    for (depth, metrics) in report.iter() {
        let summary = metrics.summary(environment, depth)?;
        times.push((f64::from(depth), summary.execution_time.mean));
        memories.push((f64::from(depth), summary.memory_usage.mean));
    }
    Ok((times, memories))
}

fn render_svg(panels: &[Panel]) -> String {
    let mut svg = String::with_capacity(8 * 1024);
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        CHART_WIDTH as u32, CHART_HEIGHT as u32, CHART_WIDTH as u32, CHART_HEIGHT as u32
    ));
    svg.push_str("<rect width=\"100%\" height=\"100%\" fill=\"white\"/>\n");
    for (index, panel) in panels.iter().enumerate() {
        push_panel(&mut svg, panel, index as f64 * PANEL_WIDTH);
    }
    svg.push_str("</svg>\n");
    svg
}

fn push_panel(svg: &mut String, panel: &Panel, origin: f64) {
    let left = origin + MARGIN_LEFT;
    let right = origin + PANEL_WIDTH - MARGIN_RIGHT;
    let top = MARGIN_TOP;
    let bottom = CHART_HEIGHT - MARGIN_BOTTOM;

    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"26\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"16\">{}</text>\n",
        origin + PANEL_WIDTH / 2.0,
        escape_text(&panel.title)
    ));

    let points: Vec<(f64, f64)> = panel
        .series
        .iter()
        .flat_map(|series| series.points.iter().copied())
        .collect();
    if points.is_empty() {
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"14\" fill=\"#666\">no data</text>\n",
            origin + PANEL_WIDTH / 2.0,
            (top + bottom) / 2.0
        ));
        return;
    }

    // Log scale only holds for strictly positive values; fall back to
    // linear when any mean is zero.
    let log_y = panel.log_y && points.iter().all(|&(_, y)| y > 0.0);
    let ty = move |v: f64| if log_y { v.log10() } else { v };

    let (mut x0, mut x1) = domain(points.iter().map(|p| p.0));
    if (x1 - x0).abs() < f64::EPSILON {
        x0 -= 0.5;
        x1 += 0.5;
    }
    let (mut y0, mut y1) = domain(points.iter().map(|p| ty(p.1)));
    let y_pad = (y1 - y0) * 0.05;
    if y_pad <= 0.0 {
        y0 -= 0.5;
        y1 += 0.5;
    } else {
        y0 -= y_pad;
        y1 += y_pad;
    }

    let sx = move |v: f64| left + (v - x0) / (x1 - x0) * (right - left);
    let sy = move |t: f64| bottom - (t - y0) / (y1 - y0) * (bottom - top);

    // Axis frame
    svg.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#333\"/>\n",
        left, bottom, right, bottom
    ));
    svg.push_str(&format!(
        "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#333\"/>\n",
        left, top, left, bottom
    ));

    // X ticks at distinct depth positions, thinned to at most 12 labels.
    let mut xs: Vec<f64> = points.iter().map(|p| p.0).collect();
    xs.sort_by(f64::total_cmp);
    xs.dedup();
    let step = (xs.len() + 11) / 12;
    for x in xs.iter().step_by(step.max(1)) {
        let px = sx(*x);
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#333\"/>\n",
            px,
            bottom,
            px,
            bottom + 5.0
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"11\">{:.0}</text>\n",
            px,
            bottom + 20.0,
            x
        ));
    }

    // Five y ticks, evenly spaced in (possibly log-transformed) scale space.
    for k in 0..5 {
        let t = y0 + (y1 - y0) * f64::from(k) / 4.0;
        let value = if log_y { 10f64.powf(t) } else { t };
        let py = sy(t);
        svg.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"#333\"/>\n",
            left - 5.0,
            py,
            left,
            py
        ));
        svg.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-family=\"sans-serif\" font-size=\"11\">{}</text>\n",
            left - 9.0,
            py + 4.0,
            format_tick(value)
        ));
    }

    // Axis labels
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"13\">Depth</text>\n",
        (left + right) / 2.0,
        CHART_HEIGHT - 14.0
    ));
    let y_label_x = origin + 22.0;
    let y_label_y = (top + bottom) / 2.0;
    svg.push_str(&format!(
        "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-family=\"sans-serif\" font-size=\"13\" transform=\"rotate(-90 {:.1} {:.1})\">{}</text>\n",
        y_label_x,
        y_label_y,
        y_label_x,
        y_label_y,
        escape_text(panel.y_label)
    ));

    // Series lines and markers
    for series in &panel.series {
        let mut pts = series.points.clone();
        pts.sort_by(|a, b| a.0.total_cmp(&b.0));
        let path: Vec<String> = pts
            .iter()
            .map(|&(x, y)| format!("{:.1},{:.1}", sx(x), sy(ty(y))))
            .collect();
        let dash = if panel.dashed {
            " stroke-dasharray=\"6 4\""
        } else {
            ""
        };
        svg.push_str(&format!(
            "<polyline fill=\"none\" stroke=\"{}\" stroke-width=\"2\"{} points=\"{}\"/>\n",
            series.color,
            dash,
            path.join(" ")
        ));
        for &(x, y) in &pts {
            svg.push_str(&format!(
                "<circle cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"/>\n",
                sx(x),
                sy(ty(y)),
                series.color
            ));
        }
    }

    // Legend for multi-series panels
    if panel.series.len() > 1 {
        for (index, series) in panel.series.iter().enumerate() {
            let y = top + 14.0 + index as f64 * 18.0;
            let x = right - 150.0;
            svg.push_str(&format!(
                "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"2\"/>\n",
                x,
                y,
                x + 28.0,
                y,
                series.color
            ));
            svg.push_str(&format!(
                "<text x=\"{:.1}\" y=\"{:.1}\" font-family=\"sans-serif\" font-size=\"12\">{}</text>\n",
                x + 34.0,
                y + 4.0,
                escape_text(&series.label)
            ));
        }
    }
}

fn domain<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for value in values {
        min = min.min(value);
        max = max.max(value);
    }
    (min, max)
}

fn format_tick(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude >= 1000.0 {
        format!("{:.0}", value)
    } else if magnitude >= 10.0 {
        format!("{:.1}", value)
    } else if magnitude >= 0.01 || magnitude == 0.0 {
        format!("{:.2}", value)
    } else {
        format!("{:.1e}", value)
    }
}

fn escape_text(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

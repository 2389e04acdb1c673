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

//! Markdown export for benchmark analysis reports.
//!
//! Rendering is a pure function of the aggregation data: no timestamps, no
//! environment-dependent content. Two runs over the same inputs produce
//! byte-identical documents. Depths iterate in ascending order in every
//! section of every report.

use crate::error::{RenderError, Result};
use crate::naming;
use benchview_core::{EnvironmentReport, ReportSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Renders the analysis report for one environment.
///
/// The document contains a heading, the embedded chart reference, a summary
/// table with one row per depth, and per depth a detail section with
/// mean/max/min of both quantities plus a collapsible listing of every
/// contributing sample in encounter order.
///
/// # Errors
///
/// [`benchview_core::ReportError::EmptyBucket`] (wrapped) if the report
/// contains a bucket with no samples, which the aggregator prevents.
pub fn render_environment_report(
    environment: &str,
    report: &EnvironmentReport,
) -> Result<String> {
    let mut md = String::new();

    md.push_str(&format!("# Test Analysis Report for {}\n\n", environment));
    md.push_str(&format!(
        "![Graphs for {}]({})\n\n",
        environment,
        naming::environment_chart_filename(environment)
    ));

    md.push_str("## Test Results Summary\n\n");
    md.push_str("| Depth | Mean Execution Time (ms) | Mean Memory Usage (MB) |\n");
    md.push_str("| --- | --- | --- |\n");
    for (depth, metrics) in report.iter() {
        let summary = metrics.summary(environment, depth)?;
        md.push_str(&format!(
            "| {} | {:.4} | {:.4} |\n",
            depth, summary.execution_time.mean, summary.memory_usage.mean
        ));
    }
    md.push('\n');

    md.push_str("## Results by Depth\n\n");
    for (depth, metrics) in report.iter() {
        let summary = metrics.summary(environment, depth)?;
        md.push_str(&format!("### Depth {}\n\n", depth));
        md.push_str("- Execution Time:\n");
        md.push_str(&format!("    - Mean: {:.4} ms\n", summary.execution_time.mean));
        md.push_str(&format!("    - Max: {:.4} ms\n", summary.execution_time.max));
        md.push_str(&format!("    - Min: {:.4} ms\n", summary.execution_time.min));
        md.push_str("- Memory Usage:\n");
        md.push_str(&format!("    - Mean: {:.4} MB\n", summary.memory_usage.mean));
        md.push_str(&format!("    - Max: {:.4} MB\n", summary.memory_usage.max));
        md.push_str(&format!("    - Min: {:.4} MB\n", summary.memory_usage.min));
        md.push('\n');

        md.push_str("<details>\n<summary>Detailed Test Results</summary>\n\n");
        md.push_str("| Test | Execution Time (ms) | Memory Usage (MB) |\n");
        md.push_str("| --- | --- | --- |\n");
        for (time, memory) in metrics.samples() {
            md.push_str(&format!(
                "| Test at Depth {} | {:.4} | {:.4} |\n",
                depth, time, memory
            ));
        }
        md.push_str("\n</details>\n\n");
    }

    Ok(md)
}

/// Renders the master report comparing every environment.
///
/// Iterates the sorted union of depth keys across environments; for each
/// depth, environments without samples at that depth are omitted rather
/// than zero-filled.
pub fn render_master_report(set: &ReportSet) -> Result<String> {
    let mut md = String::new();

    md.push_str("# Master Test Analysis Report\n\n");
    md.push_str("## Comparison of Environments\n\n");
    md.push_str(&format!(
        "![Comparison Graphs]({})\n\n",
        naming::COMPARISON_CHART_FILENAME
    ));

    for depth in set.depth_union() {
        md.push_str(&format!("### Depth {}\n\n", depth));
        for (environment, report) in set.environments() {
            let Some(metrics) = report.get(depth) else {
                continue;
            };
            let summary = metrics.summary(environment, depth)?;
            md.push_str(&format!("- Environment: {}\n", environment));
            md.push_str(&format!(
                "  - Execution Time: Mean: {:.4} ms, Max: {:.4} ms, Min: {:.4} ms\n",
                summary.execution_time.mean,
                summary.execution_time.max,
                summary.execution_time.min
            ));
            md.push_str(&format!(
                "  - Memory Usage: Mean: {:.4} MB, Max: {:.4} MB, Min: {:.4} MB\n\n",
                summary.memory_usage.mean,
                summary.memory_usage.max,
                summary.memory_usage.min
            ));
        }
    }

    Ok(md)
}

/// Writes one report per environment plus the master report into
/// `output_dir`, overwriting existing artifacts. Returns the written paths.
pub fn write_reports(set: &ReportSet, output_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    for (environment, report) in set.environments() {
        let path = output_dir.join(naming::environment_report_filename(environment));
        let md = render_environment_report(environment, report)?;
        fs::write(&path, md).map_err(|e| RenderError::io(&path, e))?;
        written.push(path);
    }

    let path = output_dir.join(naming::MASTER_REPORT_FILENAME);
    let md = render_master_report(set)?;
    fs::write(&path, md).map_err(|e| RenderError::io(&path, e))?;
    written.push(path);

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use benchview_core::{aggregate_all, RawResults, TestRecord};

    fn record(depth: u32, time: f64, memory: f64) -> TestRecord {
        TestRecord {
            depth,
            execution_time_ms: time,
            memory_usage_mb: memory,
        }
    }

    fn example_set() -> ReportSet {
        let mut raw = RawResults::new();
        raw.insert(
            "node.js".to_string(),
            vec![vec![
                record(1, 10.0, 5.0),
                record(1, 20.0, 7.0),
                record(2, 30.0, 9.0),
            ]],
        );
        aggregate_all(&raw)
    }

    #[test]
    fn test_environment_report_contents() {
        let set = example_set();
        let md = render_environment_report("node.js", set.get("node.js").unwrap()).unwrap();

        assert!(md.starts_with("# Test Analysis Report for node.js\n"));
        assert!(md.contains("![Graphs for node.js](test_analysis_graphs_node.js.svg)"));
        assert!(md.contains("| 1 | 15.0000 | 6.0000 |"));
        assert!(md.contains("| 2 | 30.0000 | 9.0000 |"));
        assert!(md.contains("### Depth 1"));
        assert!(md.contains("    - Mean: 15.0000 ms"));
        assert!(md.contains("    - Max: 20.0000 ms"));
        assert!(md.contains("    - Min: 10.0000 ms"));
        assert!(md.contains("    - Mean: 6.0000 MB"));
        assert!(md.contains("| Test at Depth 1 | 10.0000 | 5.0000 |"));
        assert!(md.contains("| Test at Depth 1 | 20.0000 | 7.0000 |"));
        assert!(md.contains("<details>"));
    }

    #[test]
    fn test_summary_depths_match_aggregated_depths() {
        let set = example_set();
        let report = set.get("node.js").unwrap();
        let md = render_environment_report("node.js", report).unwrap();

        for depth in report.depths() {
            assert!(md.contains(&format!("### Depth {}\n", depth)));
        }
        // No section for a depth that never contributed.
        assert!(!md.contains("### Depth 3"));
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let set = example_set();
        let report = set.get("node.js").unwrap();
        let first = render_environment_report("node.js", report).unwrap();
        let second = render_environment_report("node.js", report).unwrap();
        assert_eq!(first, second);

        assert_eq!(
            render_master_report(&set).unwrap(),
            render_master_report(&set).unwrap()
        );
    }

    #[test]
    fn test_master_report_omits_absent_environments() {
        let mut raw = RawResults::new();
        raw.insert(
            "a".to_string(),
            vec![vec![record(1, 1.0, 1.0), record(2, 2.0, 2.0)]],
        );
        raw.insert(
            "b".to_string(),
            vec![vec![record(2, 3.0, 3.0), record(3, 4.0, 4.0)]],
        );
        let set = aggregate_all(&raw);
        let md = render_master_report(&set).unwrap();

        let depth1 = section(&md, "### Depth 1");
        assert!(depth1.contains("- Environment: a"));
        assert!(!depth1.contains("- Environment: b"));

        let depth2 = section(&md, "### Depth 2");
        assert!(depth2.contains("- Environment: a"));
        assert!(depth2.contains("- Environment: b"));

        let depth3 = section(&md, "### Depth 3");
        assert!(!depth3.contains("- Environment: a"));
        assert!(depth3.contains("- Environment: b"));
    }

    #[test]
    fn test_master_report_depths_are_sorted() {
        let mut raw = RawResults::new();
        raw.insert(
            "a".to_string(),
            vec![vec![record(9, 1.0, 1.0), record(2, 1.0, 1.0), record(5, 1.0, 1.0)]],
        );
        let set = aggregate_all(&raw);
        let md = render_master_report(&set).unwrap();

        let p2 = md.find("### Depth 2").unwrap();
        let p5 = md.find("### Depth 5").unwrap();
        let p9 = md.find("### Depth 9").unwrap();
        assert!(p2 < p5 && p5 < p9);
    }

    // Slice of the document from `heading` to the next depth heading.
    fn section<'a>(md: &'a str, heading: &str) -> &'a str {
        let start = md.find(heading).unwrap();
        let rest = &md[start + heading.len()..];
        match rest.find("### Depth") {
            Some(end) => &rest[..end],
            None => rest,
        }
    }
}

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

//! Artifact-writing tests: file layout and rerun idempotence.

use benchview_core::{aggregate_all, RawResults, TestRecord};
use benchview_report::{write_charts, write_reports};
use std::fs;
use tempfile::TempDir;

fn record(depth: u32, time: f64, memory: f64) -> TestRecord {
    TestRecord {
        depth,
        execution_time_ms: time,
        memory_usage_mb: memory,
    }
}

fn two_environment_set() -> benchview_core::ReportSet {
    let mut raw = RawResults::new();
    raw.insert(
        "node.js".to_string(),
        vec![vec![record(1, 10.0, 5.0), record(2, 30.0, 9.0)]],
    );
    raw.insert(
        "bun.sh".to_string(),
        vec![vec![record(1, 5.0, 4.0)]],
    );
    aggregate_all(&raw)
}

#[test]
fn test_write_reports_layout() {
    let dir = TempDir::new().unwrap();
    let set = two_environment_set();

    let written = write_reports(&set, dir.path()).unwrap();
    assert_eq!(written.len(), 3);

    assert!(dir.path().join("test_analysis_report_node.js.md").is_file());
    assert!(dir.path().join("test_analysis_report_bun.sh.md").is_file());
    assert!(dir.path().join("test_analysis_master_report.md").is_file());

    let master = fs::read_to_string(dir.path().join("test_analysis_master_report.md")).unwrap();
    assert!(master.contains("- Environment: node.js"));
    assert!(master.contains("- Environment: bun.sh"));
}

#[test]
fn test_write_charts_layout() {
    let dir = TempDir::new().unwrap();
    let set = two_environment_set();

    let written = write_charts(&set, dir.path()).unwrap();
    assert_eq!(written.len(), 3);

    assert!(dir.path().join("test_analysis_graphs_node.js.svg").is_file());
    assert!(dir.path().join("test_analysis_graphs_bun.sh.svg").is_file());
    assert!(dir.path().join("test_analysis_comparison_graphs.svg").is_file());
}

#[test]
fn test_reruns_are_byte_identical() {
    let dir = TempDir::new().unwrap();
    let set = two_environment_set();

    write_reports(&set, dir.path()).unwrap();
    let first = fs::read_to_string(dir.path().join("test_analysis_master_report.md")).unwrap();
    let first_env =
        fs::read_to_string(dir.path().join("test_analysis_report_node.js.md")).unwrap();

    write_reports(&set, dir.path()).unwrap();
    let second = fs::read_to_string(dir.path().join("test_analysis_master_report.md")).unwrap();
    let second_env =
        fs::read_to_string(dir.path().join("test_analysis_report_node.js.md")).unwrap();

    assert_eq!(first, second);
    assert_eq!(first_env, second_env);
}

#[test]
fn test_empty_set_still_writes_master_report() {
    let dir = TempDir::new().unwrap();
    let set = aggregate_all(&RawResults::new());

    let written = write_reports(&set, dir.path()).unwrap();
    assert_eq!(written.len(), 1);
    assert!(dir.path().join("test_analysis_master_report.md").is_file());
}

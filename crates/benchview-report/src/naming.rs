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

//! Deterministic artifact names derived from environment labels.

/// File name of the cross-environment master report.
pub const MASTER_REPORT_FILENAME: &str = "test_analysis_master_report.md";

/// File name of the cross-environment comparison chart.
pub const COMPARISON_CHART_FILENAME: &str = "test_analysis_comparison_graphs.svg";

/// Maps an environment label to a file-name-safe form.
///
/// Characters outside `[A-Za-z0-9._-]` become `_` so a label cannot smuggle
/// path separators into artifact names. Distinct labels can collide after
/// sanitization; the last one written wins.
pub fn sanitize_label(label: &str) -> String {
    let sanitized: String = label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if sanitized.is_empty() {
        "unnamed".to_string()
    } else {
        sanitized
    }
}

/// Report file name for one environment.
pub fn environment_report_filename(label: &str) -> String {
    format!("test_analysis_report_{}.md", sanitize_label(label))
}

/// Chart file name for one environment.
pub fn environment_chart_filename(label: &str) -> String {
    format!("test_analysis_graphs_{}.svg", sanitize_label(label))
}

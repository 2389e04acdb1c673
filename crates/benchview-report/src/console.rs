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

//! Console output for the run: skip diagnostics and the final summary.
//!
//! Diagnostics go to stderr, the summary to stdout. This is the only place
//! wall-clock time appears; the written artifacts stay timestamp-free so
//! reruns over unchanged inputs are byte-identical.

use benchview_core::{LoadOutcome, SkippedFile};
use chrono::Utc;
use colored::Colorize;
use std::path::PathBuf;

/// Prints one diagnostic line per skipped file to stderr.
pub fn print_skip_diagnostics(skipped: &[SkippedFile]) {
    for skip in skipped {
        eprintln!(
            "{} {}: {}",
            "skipped".yellow().bold(),
            skip.path.display(),
            skip.error
        );
    }
}

/// Prints the run summary: load counts, completion time, written artifacts.
pub fn print_run_summary(outcome: &LoadOutcome, artifacts: &[PathBuf]) {
    println!("\n{}", "=".repeat(72));
    println!("BENCHMARK ANALYSIS SUMMARY");
    println!("{}", "=".repeat(72));
    println!("Completed: {}", Utc::now().to_rfc3339());

    let loaded = format!("{} file(s) loaded", outcome.loaded).green();
    if outcome.skipped.is_empty() {
        println!("{}", loaded);
    } else {
        println!(
            "{}, {}",
            loaded,
            format!("{} skipped", outcome.skipped.len()).red()
        );
    }

    if !artifacts.is_empty() {
        println!("\nArtifacts:");
        for path in artifacts {
            println!("  {}", path.display());
        }
    }
}

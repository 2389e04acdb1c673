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

//! The run pipeline: load, aggregate, render, summarize.

use crate::error::CliError;
use benchview_core::{aggregate_all, load_results, DEFAULT_PATTERN};
use benchview_report::{console, write_charts, write_reports};
use std::path::PathBuf;

/// Options for one `benchview` run. Every field has a default that matches
/// the bare, no-argument invocation.
#[derive(Debug, Clone)]
pub struct RunOptions {
    /// Directory scanned for result files.
    pub input_dir: PathBuf,
    /// Glob pattern matched against result file names.
    pub pattern: String,
    /// Directory receiving reports and charts.
    pub output_dir: PathBuf,
    /// Suppress skip diagnostics and the run summary.
    pub quiet: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            pattern: DEFAULT_PATTERN.to_string(),
            output_dir: PathBuf::from("."),
            quiet: false,
        }
    }
}

/// What a completed run did, for the caller and for tests.
#[derive(Debug)]
pub struct RunSummary {
    /// Files that contributed records.
    pub loaded: usize,
    /// Files skipped with a diagnostic.
    pub skipped: usize,
    /// Artifact paths written, reports then charts.
    pub artifacts: Vec<PathBuf>,
}

/// Executes the full pipeline.
///
/// Per-file failures are reported and skipped; the run only fails when no
/// file matched the pattern at all, the input directory is unusable, or an
/// output artifact cannot be written.
pub fn run(options: &RunOptions) -> Result<RunSummary, CliError> {
    let outcome = load_results(&options.input_dir, &options.pattern)?;

    if outcome.loaded == 0 && outcome.skipped.is_empty() {
        return Err(CliError::NoInputFiles {
            dir: options.input_dir.clone(),
            pattern: options.pattern.clone(),
        });
    }

    if !options.quiet {
        console::print_skip_diagnostics(&outcome.skipped);
    }

    let set = aggregate_all(&outcome.results);

    let mut artifacts = write_reports(&set, &options.output_dir)?;
    artifacts.extend(write_charts(&set, &options.output_dir)?);

    if !options.quiet {
        console::print_run_summary(&outcome, &artifacts);
    }

    Ok(RunSummary {
        loaded: outcome.loaded,
        skipped: outcome.skipped.len(),
        artifacts,
    })
}

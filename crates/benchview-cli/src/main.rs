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

//! Benchview command line interface.
//!
//! Reads benchmark result files, aggregates them by environment and depth,
//! and writes Markdown reports plus SVG charts. Every option is defaulted,
//! so a bare `benchview` run analyzes the current directory.

use benchview_cli::{run, RunOptions};
use benchview_core::DEFAULT_PATTERN;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

/// Benchmark result analysis and reporting
#[derive(Parser)]
#[command(name = "benchview")]
#[command(author, version, about = "Benchmark result analysis and reporting", long_about = None)]
struct Cli {
    /// Directory to scan for benchmark result files
    #[arg(long, value_name = "DIR", default_value = ".")]
    input_dir: PathBuf,

    /// Glob pattern matched against result file names
    #[arg(long, value_name = "GLOB", default_value = DEFAULT_PATTERN)]
    pattern: String,

    /// Directory that receives the reports and charts
    #[arg(long, value_name = "DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Suppress per-file diagnostics and the run summary
    #[arg(long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let options = RunOptions {
        input_dir: cli.input_dir,
        pattern: cli.pattern,
        output_dir: cli.output_dir,
        quiet: cli.quiet,
    };

    match run(&options) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

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

//! Error type for CLI runs.
//!
//! Individual file failures never reach this type; the loader contains
//! them and the run continues. A `CliError` means the run as a whole could
//! not produce its artifacts.

use benchview_core::ReportError;
use benchview_report::RenderError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that abort a `benchview` run.
#[derive(Error, Debug)]
pub enum CliError {
    /// Nothing to analyze: no file in the input directory matched the
    /// pattern. Individual file failures are not fatal, but an empty match
    /// set means the invocation itself is wrong.
    #[error("no result files matching '{pattern}' found in '{dir}'")]
    NoInputFiles {
        /// The directory that was scanned
        dir: PathBuf,
        /// The pattern that matched nothing
        pattern: String,
    },

    /// The load stage failed before per-file processing (bad pattern,
    /// unenumerable input directory).
    #[error(transparent)]
    Load(#[from] ReportError),

    /// An output artifact could not be rendered or written.
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_input_files_display() {
        let err = CliError::NoInputFiles {
            dir: PathBuf::from("results"),
            pattern: "test_results_*.json".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("results"));
        assert!(msg.contains("test_results_*.json"));
    }
}

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

//! Benchview core: benchmark result loading and aggregation.
//!
//! This crate is the data half of the reporting pipeline:
//!
//! - **Loader**: discovers `test_results_*.json` files, parses and
//!   validates them, and tolerates per-file failures without aborting
//!   the run.
//! - **Aggregator**: groups records by depth within each environment and
//!   derives mean/max/min statistics per bucket.
//!
//! Rendering lives in `benchview-report`; this crate has no output side
//! effects beyond reading input files.
//!
//! ## Usage
//!
//! ```no_run
//! use std::path::Path;
//!
//! # fn main() -> benchview_core::Result<()> {
//! let outcome = benchview_core::load_results(Path::new("."), benchview_core::DEFAULT_PATTERN)?;
//! let set = benchview_core::aggregate_all(&outcome.results);
//! for (environment, report) in set.environments() {
//!     println!("{}: {} depth buckets", environment, report.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod error;
pub mod loader;
pub mod model;

pub use aggregate::{aggregate, aggregate_all};
pub use error::{ReportError, Result};
pub use loader::{
    discover_result_files, load_results, parse_document, LoadOutcome, ParsedDocument,
    SkippedFile, DEFAULT_ENVIRONMENT, DEFAULT_PATTERN,
};
pub use model::{
    DepthMetrics, DepthSummary, EnvironmentReport, RawResults, ReportSet, ResultBatch,
    SampleStats, TestRecord,
};

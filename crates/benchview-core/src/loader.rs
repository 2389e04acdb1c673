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

//! Result-file discovery and tolerant JSON loading.
//!
//! The loader enumerates files in one directory whose names match a glob
//! pattern, parses each as a result document, and groups the validated
//! batches by environment label. Per-file failures of any kind (unreadable,
//! truncated, structurally invalid, or containing a malformed record) are
//! recorded as skip diagnostics and never abort the run. A malformed record
//! drops its whole file's contribution, so a file either contributes all of
//! its records or none of them.
//!
//! # Input format
//!
//! Each file is a JSON document:
//!
//! ```json
//! {
//!   "environment": "node.js",
//!   "test_results": {
//!     "iteration_1": [
//!       { "depth": 1, "executionTime": 10.0, "memoryUsage": 5.0 }
//!     ]
//!   }
//! }
//! ```
//!
//! `environment` is optional and defaults to `"default"`. `test_results`
//! may be an object mapping group names to record arrays, or an array of
//! record arrays. Fields beyond the required three are ignored; the
//! benchmark runner emits `result`, `test_count`, and `depth_count`
//! alongside them.

use crate::error::{ReportError, Result};
use crate::model::{RawResults, ResultBatch, TestRecord};
use glob::Pattern;
use serde::Deserialize;
use serde_json::Number;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Environment label assigned to documents that carry none.
pub const DEFAULT_ENVIRONMENT: &str = "default";

/// File-name pattern the benchmark runner uses for its output.
pub const DEFAULT_PATTERN: &str = "test_results_*.json";

/// A result document after parsing and record validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDocument {
    /// Environment label, defaulted when absent from the source file.
    pub environment: String,
    /// One batch per `test_results` group, in group order.
    pub batches: Vec<ResultBatch>,
}

/// One skipped input file and the reason it was dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedFile {
    /// The offending file.
    pub path: PathBuf,
    /// Why its contribution was dropped.
    pub error: ReportError,
}

/// The loader's output: raw grouped batches plus skip diagnostics.
///
/// Skips are surfaced as data rather than only printed, so the caller can
/// fold them into the run summary and exit-code decision.
#[derive(Debug, Clone, Default)]
pub struct LoadOutcome {
    /// Environment label → batches, in observation order within each label.
    pub results: RawResults,
    /// Files whose contribution was dropped, in discovery order.
    pub skipped: Vec<SkippedFile>,
    /// Number of files that contributed successfully.
    pub loaded: usize,
}

// Wire shape of a result document. Required fields are Options so a missing
// one surfaces as a typed MissingField error with record context instead of
// a bare serde message; unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawDocument {
    environment: Option<String>,
    test_results: Option<RawGroups>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawGroups {
    Grouped(BTreeMap<String, Vec<RawRecord>>),
    Flat(Vec<Vec<RawRecord>>),
}

#[derive(Debug, Deserialize)]
struct RawRecord {
    depth: Option<Number>,
    #[serde(rename = "executionTime")]
    execution_time: Option<f64>,
    #[serde(rename = "memoryUsage")]
    memory_usage: Option<f64>,
}

/// Enumerates regular files directly under `dir` whose file name matches
/// the glob `pattern`, sorted by path for a reproducible load order.
///
/// # Errors
///
/// [`ReportError::Pattern`] if the pattern does not parse, and
/// [`ReportError::FileAccess`] if `dir` itself cannot be enumerated.
pub fn discover_result_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let matcher = Pattern::new(pattern).map_err(|e| ReportError::Pattern {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).max_depth(1) {
        let entry = entry.map_err(|e| ReportError::FileAccess {
            path: dir.to_path_buf(),
            message: e.to_string(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| matcher.matches(name));
        if matches {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

/// Parses one result document and validates every record.
///
/// Pure with respect to the filesystem; `path` is only used for error
/// context. A single malformed record fails the whole document.
///
/// # Errors
///
/// [`ReportError::Parse`] for invalid JSON or a document that is not
/// result-shaped, [`ReportError::MissingField`] / [`ReportError::InvalidField`]
/// for malformed records.
pub fn parse_document(path: &Path, content: &str) -> Result<ParsedDocument> {
    let raw: RawDocument =
        serde_json::from_str(content).map_err(|e| ReportError::parse(path, e.to_string()))?;

    let environment = raw
        .environment
        .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

    let mut batches = Vec::new();
    match &raw.test_results {
        // A document without test_results contributes nothing but is not
        // an error; the runner can emit metadata-only files.
        None => {}
        Some(RawGroups::Grouped(groups)) => {
            for (name, records) in groups {
                batches.push(validate_group(path, name, records)?);
            }
        }
        Some(RawGroups::Flat(groups)) => {
            for (index, records) in groups.iter().enumerate() {
                batches.push(validate_group(path, &index.to_string(), records)?);
            }
        }
    }

    Ok(ParsedDocument {
        environment,
        batches,
    })
}

fn validate_group(path: &Path, group: &str, records: &[RawRecord]) -> Result<ResultBatch> {
    records
        .iter()
        .enumerate()
        .map(|(index, record)| validate_record(path, group, index, record))
        .collect()
}

fn validate_record(
    path: &Path,
    group: &str,
    index: usize,
    raw: &RawRecord,
) -> Result<TestRecord> {
    let depth_value = raw
        .depth
        .as_ref()
        .ok_or_else(|| ReportError::missing_field(path, group, index, "depth"))?;
    let depth = depth_value
        .as_u64()
        .and_then(|d| u32::try_from(d).ok())
        .ok_or_else(|| {
            ReportError::invalid_field(path, group, index, "depth", depth_value.to_string())
        })?;

    let execution_time_ms = raw
        .execution_time
        .ok_or_else(|| ReportError::missing_field(path, group, index, "executionTime"))?;
    if !execution_time_ms.is_finite() {
        return Err(ReportError::invalid_field(
            path,
            group,
            index,
            "executionTime",
            execution_time_ms.to_string(),
        ));
    }

    let memory_usage_mb = raw
        .memory_usage
        .ok_or_else(|| ReportError::missing_field(path, group, index, "memoryUsage"))?;
    if !memory_usage_mb.is_finite() {
        return Err(ReportError::invalid_field(
            path,
            group,
            index,
            "memoryUsage",
            memory_usage_mb.to_string(),
        ));
    }

    Ok(TestRecord {
        depth,
        execution_time_ms,
        memory_usage_mb,
    })
}

fn load_file(path: &Path) -> Result<ParsedDocument> {
    let content = fs::read_to_string(path).map_err(|e| ReportError::file_access(path, e))?;
    parse_document(path, &content)
}

/// Loads every matching file under `dir`, skipping and recording the ones
/// that fail.
///
/// # Errors
///
/// Only for conditions that precede per-file processing: an invalid
/// `pattern` or an unenumerable `dir`. Per-file failures land in
/// [`LoadOutcome::skipped`].
pub fn load_results(dir: &Path, pattern: &str) -> Result<LoadOutcome> {
    let files = discover_result_files(dir, pattern)?;
    let mut outcome = LoadOutcome::default();

    for path in files {
        match load_file(&path) {
            Ok(document) => {
                outcome.loaded += 1;
                outcome
                    .results
                    .entry(document.environment)
                    .or_default()
                    .extend(document.batches);
            }
            Err(error) => outcome.skipped.push(SkippedFile { path, error }),
        }
    }

    Ok(outcome)
}

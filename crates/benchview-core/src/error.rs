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

//! Structured error types for result loading and aggregation.
//!
//! This module provides type-safe error handling using `thiserror`. The
//! loader contains every file-scoped variant (`FileAccess`, `Parse`,
//! `MissingField`, `InvalidField`) at its boundary: such an error drops the
//! offending file's contribution and the run continues. `EmptyBucket` is the
//! exception; it signals a broken internal invariant and is never recovered.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for loading and aggregation operations.
pub type Result<T> = std::result::Result<T, ReportError>;

/// The error type for the reporting pipeline's load and aggregate stages.
///
/// Each variant carries enough context (file path, group name, record index)
/// for a diagnostic that identifies exactly what was dropped and why.
///
/// # Cloning
///
/// Implements `Clone` so skip diagnostics can be retained alongside the
/// load outcome and reported again in the run summary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReportError {
    /// A file matched the result pattern but could not be opened or read.
    ///
    /// Recovered at the loader boundary: the file is skipped.
    #[error("cannot read '{path}': {message}")]
    FileAccess {
        /// The file path that caused the error
        path: PathBuf,
        /// The underlying I/O error message
        message: String,
    },

    /// File content is not valid JSON, or not shaped like a result document.
    ///
    /// Recovered at the loader boundary: the file is skipped.
    #[error("cannot parse '{path}': {message}")]
    Parse {
        /// The file path that caused the error
        path: PathBuf,
        /// The parser's error message
        message: String,
    },

    /// A test record lacks one of its required fields.
    ///
    /// Raised during record validation and not caught there; it propagates
    /// to the loader boundary where the containing file's contribution is
    /// dropped, the same as any other malformed-file condition.
    #[error("record {index} in group '{group}' of '{path}' is missing required field '{field}'")]
    MissingField {
        /// The file containing the record
        path: PathBuf,
        /// The `test_results` group the record belongs to
        group: String,
        /// Zero-based position of the record within its group
        index: usize,
        /// Name of the absent field
        field: &'static str,
    },

    /// A test record field is present but its value is unusable
    /// (negative or fractional depth, non-finite number).
    ///
    /// Same recovery as [`ReportError::MissingField`].
    #[error("record {index} in group '{group}' of '{path}' has invalid {field} value {value}")]
    InvalidField {
        /// The file containing the record
        path: PathBuf,
        /// The `test_results` group the record belongs to
        group: String,
        /// Zero-based position of the record within its group
        index: usize,
        /// Name of the offending field
        field: &'static str,
        /// The rejected value, rendered for the diagnostic
        value: String,
    },

    /// Statistics were requested for a depth bucket with zero samples.
    ///
    /// Buckets are created together with their first sample, so this can
    /// only mean an internal invariant was violated. Fatal, never recovered.
    #[error("depth {depth} bucket for environment '{environment}' has no samples")]
    EmptyBucket {
        /// The environment the bucket belongs to
        environment: String,
        /// The bucket's depth key
        depth: u32,
    },

    /// The result-file glob pattern itself does not parse.
    #[error("invalid file pattern '{pattern}': {message}")]
    Pattern {
        /// The offending pattern
        pattern: String,
        /// The pattern parser's error message
        message: String,
    },
}

impl ReportError {
    /// Create a file access error with path context.
    pub fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a parse error with path context.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a missing-field error with record context.
    pub fn missing_field(
        path: impl Into<PathBuf>,
        group: impl Into<String>,
        index: usize,
        field: &'static str,
    ) -> Self {
        Self::MissingField {
            path: path.into(),
            group: group.into(),
            index,
            field,
        }
    }

    /// Create an invalid-field error with record context.
    pub fn invalid_field(
        path: impl Into<PathBuf>,
        group: impl Into<String>,
        index: usize,
        field: &'static str,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidField {
            path: path.into(),
            group: group.into(),
            index,
            field,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_access_display() {
        let err = ReportError::file_access(
            "results/a.json",
            io::Error::new(io::ErrorKind::NotFound, "file not found"),
        );
        let msg = err.to_string();
        assert!(msg.contains("results/a.json"));
        assert!(msg.contains("file not found"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = ReportError::missing_field("r.json", "iteration_1", 3, "depth");
        let msg = err.to_string();
        assert!(msg.contains("r.json"));
        assert!(msg.contains("iteration_1"));
        assert!(msg.contains("record 3"));
        assert!(msg.contains("'depth'"));
    }

    #[test]
    fn test_invalid_field_display() {
        let err = ReportError::invalid_field("r.json", "0", 0, "depth", "-4");
        let msg = err.to_string();
        assert!(msg.contains("invalid depth value -4"));
    }

    #[test]
    fn test_empty_bucket_display() {
        let err = ReportError::EmptyBucket {
            environment: "node.js".to_string(),
            depth: 7,
        };
        let msg = err.to_string();
        assert!(msg.contains("depth 7"));
        assert!(msg.contains("node.js"));
    }

    #[test]
    fn test_error_equality() {
        let a = ReportError::missing_field("r.json", "g", 1, "memoryUsage");
        let b = ReportError::missing_field("r.json", "g", 1, "memoryUsage");
        let c = ReportError::missing_field("r.json", "g", 2, "memoryUsage");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}

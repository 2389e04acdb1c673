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

//! Error types for report and chart rendering.

use benchview_core::ReportError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for rendering operations.
pub type Result<T> = std::result::Result<T, RenderError>;

/// Errors raised while rendering or writing output artifacts.
#[derive(Error, Debug)]
pub enum RenderError {
    /// An output artifact could not be written.
    #[error("cannot write '{path}': {message}")]
    Io {
        /// The artifact path
        path: PathBuf,
        /// The underlying I/O error message
        message: String,
    },

    /// Aggregation-layer contract failure surfaced during rendering.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl RenderError {
    /// Create an artifact write error with path context.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_display() {
        let err = RenderError::io(
            "out/report.md",
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("out/report.md"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn test_report_error_passes_through() {
        let inner = ReportError::EmptyBucket {
            environment: "default".to_string(),
            depth: 1,
        };
        let err: RenderError = inner.clone().into();
        assert_eq!(err.to_string(), inner.to_string());
    }
}

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

//! Benchview report: rendering aggregated benchmark data.
//!
//! Consumes the aggregation product of `benchview-core` and emits:
//!
//! - one Markdown report per environment plus a cross-environment master
//!   report ([`markdown`]),
//! - one SVG line chart per environment plus a comparison chart
//!   ([`chart`]),
//! - a colored console run summary ([`console`]).
//!
//! Rendering never mutates the aggregation data, and the written documents
//! are a pure function of it.

pub mod chart;
pub mod console;
pub mod error;
pub mod markdown;
pub mod naming;

pub use chart::{render_comparison_chart, render_environment_chart, write_charts};
pub use error::{RenderError, Result};
pub use markdown::{render_environment_report, render_master_report, write_reports};

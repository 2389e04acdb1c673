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

//! Result aggregation: folding loaded batches into depth buckets.

use crate::model::{EnvironmentReport, RawResults, ReportSet, ResultBatch};

/// Aggregates one environment's batches into depth buckets.
///
/// Iterates every record across every batch in order; a depth's bucket is
/// created together with its first sample. Sample order inside a bucket
/// follows encounter order: batch order, then record order within a batch.
pub fn aggregate(batches: &[ResultBatch]) -> EnvironmentReport {
    let mut report = EnvironmentReport::default();
    for batch in batches {
        for record in batch {
            report.record(record);
        }
    }
    report
}

/// Aggregates every environment of a raw load result.
///
/// Environments whose batches contain zero records do not materialize in
/// the returned set.
pub fn aggregate_all(raw: &RawResults) -> ReportSet {
    let mut set = ReportSet::default();
    for (label, batches) in raw {
        let report = aggregate(batches);
        if !report.is_empty() {
            set.insert(label.clone(), report);
        }
    }
    set
}

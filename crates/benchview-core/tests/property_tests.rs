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

//! Property tests for the aggregation invariants.

use benchview_core::{aggregate, TestRecord};
use proptest::prelude::*;

fn arbitrary_records() -> impl Strategy<Value = Vec<TestRecord>> {
    prop::collection::vec(
        (0u32..16, 0.0f64..1e6, 0.0f64..1e4).prop_map(|(depth, time, memory)| TestRecord {
            depth,
            execution_time_ms: time,
            memory_usage_mb: memory,
        }),
        1..200,
    )
}

proptest! {
    #[test]
    fn bucket_sequences_have_equal_length(records in arbitrary_records()) {
        let report = aggregate(&[records]);
        for (_, metrics) in report.iter() {
            prop_assert_eq!(metrics.times().len(), metrics.memories().len());
            prop_assert_eq!(metrics.times().len(), metrics.len());
        }
    }

    #[test]
    fn aggregation_preserves_record_count(records in arbitrary_records()) {
        let total = records.len();
        let report = aggregate(&[records]);
        prop_assert_eq!(report.record_count(), total);
    }

    #[test]
    fn stats_are_bounded_by_their_samples(records in arbitrary_records()) {
        let report = aggregate(&[records]);
        for (depth, metrics) in report.iter() {
            let summary = metrics.summary("prop", depth).unwrap();
            prop_assert!(summary.execution_time.min <= summary.execution_time.mean);
            prop_assert!(summary.execution_time.mean <= summary.execution_time.max);
            prop_assert!(summary.memory_usage.min <= summary.memory_usage.mean);
            prop_assert!(summary.memory_usage.mean <= summary.memory_usage.max);
            prop_assert_eq!(summary.execution_time.count, metrics.len());
        }
    }

    #[test]
    fn no_bucket_is_ever_empty(records in arbitrary_records()) {
        let report = aggregate(&[records]);
        for (_, metrics) in report.iter() {
            prop_assert!(!metrics.is_empty());
        }
    }
}

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

//! Data model for benchmark observations and their aggregation buckets.
//!
//! All collections are `BTreeMap`-backed so iteration order (depths
//! ascending, environment labels lexicographic) is structural rather than
//! a sort applied at render time. Reports generated from the same inputs
//! are therefore byte-identical across runs.

use crate::error::{ReportError, Result};
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

/// One benchmark observation. Immutable once validated by the loader.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestRecord {
    /// Grouping key: recursion or data-structure depth of the run.
    pub depth: u32,
    /// Execution time in milliseconds.
    pub execution_time_ms: f64,
    /// Memory usage in megabytes.
    pub memory_usage_mb: f64,
}

/// An ordered sequence of records produced by one benchmark group.
pub type ResultBatch = Vec<TestRecord>;

/// Loader output: environment label → batches, not yet aggregated.
///
/// Starts empty and gains a key only when a batch with that label is
/// observed; no environment names are pre-seeded.
pub type RawResults = BTreeMap<String, Vec<ResultBatch>>;

/// Derived statistics over one sample sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleStats {
    /// Arithmetic mean of the samples.
    pub mean: f64,
    /// Largest sample.
    pub max: f64,
    /// Smallest sample.
    pub min: f64,
    /// Number of samples.
    pub count: usize,
}

impl SampleStats {
    /// Computes statistics over `samples`, or `None` for an empty slice.
    fn compute(samples: &[f64]) -> Option<Self> {
        let first = *samples.first()?;
        let mut min = first;
        let mut max = first;
        let mut sum = 0.0;
        for &sample in samples {
            sum += sample;
            min = min.min(sample);
            max = max.max(sample);
        }
        Some(Self {
            mean: sum / samples.len() as f64,
            max,
            min,
            count: samples.len(),
        })
    }
}

/// Statistics for both measured quantities of one depth bucket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthSummary {
    /// Execution time statistics, milliseconds.
    pub execution_time: SampleStats,
    /// Memory usage statistics, megabytes.
    pub memory_usage: SampleStats,
}

/// Aggregation bucket for one depth value within one environment.
///
/// Holds the execution-time and memory-usage samples of every record that
/// shares the depth, in encounter order. The two sequences always have the
/// same length: each record contributes exactly one sample to each.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DepthMetrics {
    times: Vec<f64>,
    memories: Vec<f64>,
}

impl DepthMetrics {
    /// Creates a bucket holding its first sample. Buckets are never
    /// materialized empty; this is the only constructor the aggregator uses.
    pub(crate) fn with_first_sample(record: &TestRecord) -> Self {
        Self {
            times: vec![record.execution_time_ms],
            memories: vec![record.memory_usage_mb],
        }
    }

    /// Appends one record's samples.
    pub(crate) fn push(&mut self, record: &TestRecord) {
        self.times.push(record.execution_time_ms);
        self.memories.push(record.memory_usage_mb);
    }

    /// Number of contributing records.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether the bucket holds no samples.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Execution-time samples in encounter order.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Memory-usage samples in encounter order.
    pub fn memories(&self) -> &[f64] {
        &self.memories
    }

    /// Paired `(execution_time_ms, memory_usage_mb)` samples in encounter
    /// order, for detailed result listings.
    pub fn samples(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .copied()
            .zip(self.memories.iter().copied())
    }

    /// Computes mean/max/min statistics for both sample sequences.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::EmptyBucket`] if the bucket holds no samples.
    /// The aggregator never creates such a bucket, so hitting this error
    /// means a contract violation, not a user-facing input condition.
    pub fn summary(&self, environment: &str, depth: u32) -> Result<DepthSummary> {
        match (
            SampleStats::compute(&self.times),
            SampleStats::compute(&self.memories),
        ) {
            (Some(execution_time), Some(memory_usage)) => Ok(DepthSummary {
                execution_time,
                memory_usage,
            }),
            _ => Err(ReportError::EmptyBucket {
                environment: environment.to_string(),
                depth,
            }),
        }
    }
}

/// Aggregated buckets for one environment, keyed by depth.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnvironmentReport {
    buckets: BTreeMap<u32, DepthMetrics>,
}

impl EnvironmentReport {
    /// Folds one record into its depth bucket, creating the bucket together
    /// with the first sample.
    pub(crate) fn record(&mut self, record: &TestRecord) {
        match self.buckets.entry(record.depth) {
            btree_map::Entry::Occupied(bucket) => bucket.into_mut().push(record),
            btree_map::Entry::Vacant(slot) => {
                slot.insert(DepthMetrics::with_first_sample(record));
            }
        }
    }

    /// Depth keys in ascending order.
    pub fn depths(&self) -> impl Iterator<Item = u32> + '_ {
        self.buckets.keys().copied()
    }

    /// The bucket for `depth`, if any record contributed to it.
    pub fn get(&self, depth: u32) -> Option<&DepthMetrics> {
        self.buckets.get(&depth)
    }

    /// `(depth, bucket)` pairs in ascending depth order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &DepthMetrics)> + '_ {
        self.buckets.iter().map(|(depth, metrics)| (*depth, metrics))
    }

    /// Number of depth buckets.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether no record contributed to this environment.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Total number of contributing records across all buckets.
    pub fn record_count(&self) -> usize {
        self.buckets.values().map(DepthMetrics::len).sum()
    }
}

/// Top-level aggregation product: environment label → per-depth buckets.
///
/// An environment with zero contributing records is never present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportSet {
    environments: BTreeMap<String, EnvironmentReport>,
}

impl ReportSet {
    /// Inserts a non-empty environment report under `label`.
    pub(crate) fn insert(&mut self, label: String, report: EnvironmentReport) {
        debug_assert!(!report.is_empty(), "empty environments must not materialize");
        self.environments.insert(label, report);
    }

    /// `(label, report)` pairs in lexicographic label order.
    pub fn environments(&self) -> impl Iterator<Item = (&str, &EnvironmentReport)> {
        self.environments
            .iter()
            .map(|(label, report)| (label.as_str(), report))
    }

    /// The report for `label`, if that environment contributed records.
    pub fn get(&self, label: &str) -> Option<&EnvironmentReport> {
        self.environments.get(label)
    }

    /// Number of environments.
    pub fn len(&self) -> usize {
        self.environments.len()
    }

    /// Whether no environment contributed any record.
    pub fn is_empty(&self) -> bool {
        self.environments.is_empty()
    }

    /// Sorted union of depth keys present in any environment. The master
    /// report iterates this; environments lacking samples at a given depth
    /// are omitted from that depth's comparison, not zero-filled.
    pub fn depth_union(&self) -> BTreeSet<u32> {
        self.environments
            .values()
            .flat_map(|report| report.depths())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(depth: u32, time: f64, memory: f64) -> TestRecord {
        TestRecord {
            depth,
            execution_time_ms: time,
            memory_usage_mb: memory,
        }
    }

    #[test]
    fn test_sample_stats() {
        let stats = SampleStats::compute(&[10.0, 20.0, 30.0]).unwrap();
        assert_eq!(stats.mean, 20.0);
        assert_eq!(stats.max, 30.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_sample_stats_single() {
        let stats = SampleStats::compute(&[4.5]).unwrap();
        assert_eq!(stats.mean, 4.5);
        assert_eq!(stats.max, 4.5);
        assert_eq!(stats.min, 4.5);
    }

    #[test]
    fn test_sample_stats_empty() {
        assert!(SampleStats::compute(&[]).is_none());
    }

    #[test]
    fn test_bucket_sequences_stay_paired() {
        let mut metrics = DepthMetrics::with_first_sample(&record(1, 10.0, 5.0));
        metrics.push(&record(1, 20.0, 7.0));
        metrics.push(&record(1, 15.0, 6.0));

        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics.times().len(), metrics.memories().len());
        assert_eq!(
            metrics.samples().collect::<Vec<_>>(),
            vec![(10.0, 5.0), (20.0, 7.0), (15.0, 6.0)]
        );
    }

    #[test]
    fn test_empty_bucket_summary_is_an_error() {
        let metrics = DepthMetrics::default();
        let err = metrics.summary("node.js", 3).unwrap_err();
        assert_eq!(
            err,
            ReportError::EmptyBucket {
                environment: "node.js".to_string(),
                depth: 3,
            }
        );
    }

    #[test]
    fn test_environment_report_orders_depths() {
        let mut report = EnvironmentReport::default();
        report.record(&record(5, 1.0, 1.0));
        report.record(&record(1, 1.0, 1.0));
        report.record(&record(3, 1.0, 1.0));
        report.record(&record(1, 2.0, 2.0));

        assert_eq!(report.depths().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(report.get(1).unwrap().len(), 2);
        assert_eq!(report.record_count(), 4);
    }

    #[test]
    fn test_depth_union() {
        let mut a = EnvironmentReport::default();
        a.record(&record(1, 1.0, 1.0));
        a.record(&record(2, 1.0, 1.0));
        let mut b = EnvironmentReport::default();
        b.record(&record(2, 1.0, 1.0));
        b.record(&record(3, 1.0, 1.0));

        let mut set = ReportSet::default();
        set.insert("a".to_string(), a);
        set.insert("b".to_string(), b);

        assert_eq!(set.depth_union().into_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}

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

//! Aggregation throughput over synthetic record sets.

use benchview_core::{aggregate, ResultBatch, TestRecord};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn synthetic_batches(batch_count: usize, records_per_batch: usize) -> Vec<ResultBatch> {
    (0..batch_count)
        .map(|b| {
            (0..records_per_batch)
                .map(|r| TestRecord {
                    depth: (r % 10) as u32 + 1,
                    execution_time_ms: (b * records_per_batch + r) as f64 * 0.37,
                    memory_usage_mb: (r as f64).mul_add(0.11, 4.0),
                })
                .collect()
        })
        .collect()
}

fn bench_aggregate(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for &records in &[100usize, 1_000, 10_000] {
        let batches = synthetic_batches(10, records / 10);
        group.bench_with_input(BenchmarkId::from_parameter(records), &batches, |b, batches| {
            b.iter(|| aggregate(black_box(batches)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mazebench-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mazebench and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use mazebench::stats::{group_by_maze, summarize, CellStats};

mod fixtures;
mod profiler;

use fixtures::executions::Params;
use fixtures::maze::Case;

// Benchmark identity (keep stable):
// - Group names in this file: `stats.aggregate`, `stats.report`
// - Case IDs (the string after the `/`) must remain stable so results stay comparable.
fn benches_stats(c: &mut Criterion) {
    let cases = [
        ("small", Case::Small, Params { models: 2, trials_per_model: 5 }),
        ("medium", Case::MediumPillars, Params { models: 4, trials_per_model: 10 }),
        ("large", Case::LargeOpen, Params { models: 4, trials_per_model: 20 }),
    ];

    {
        let mut group = c.benchmark_group("stats.aggregate");
        for (case_id, case, params) in cases {
            let maze = fixtures::maze::fixture(case);
            let executions = fixtures::executions::build(&maze, "bench.txt", params);
            let results: u64 = executions.iter().map(|e| e.cell_results.len() as u64).sum();
            group.throughput(Throughput::Elements(results));

            let sequential = executions.clone();
            group.bench_function(format!("{case_id}_sequential"), move |b| {
                b.iter(|| {
                    let stats = black_box(&sequential).iter().collect::<CellStats>();
                    black_box(stats.overall().total)
                })
            });
            group.bench_function(format!("{case_id}_parallel"), move |b| {
                b.iter(|| {
                    let stats = CellStats::from_executions_par(black_box(&executions));
                    black_box(stats.overall().total)
                })
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("stats.report");
        for (case_id, case, params) in cases {
            let maze = fixtures::maze::fixture(case);
            let executions = fixtures::executions::build(&maze, "bench.txt", params);
            group.bench_function(case_id, move |b| {
                b.iter(|| {
                    let groups = group_by_maze(black_box(&executions));
                    let summaries = summarize(black_box(&executions));
                    let acc = groups.iter().map(|g| g.groups.len()).sum::<usize>()
                        + summaries.iter().map(|s| s.total as usize).sum::<usize>();
                    black_box(acc)
                })
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_stats
}
criterion_main!(benches);

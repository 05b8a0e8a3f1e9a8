// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dryad::model::fixtures::{balanced_tree, chain, sample_tree};
use dryad::{Layout, LayoutConfig, LayoutSession};

mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `layout.scan.<layout>`
// - Case IDs: `sample`, `balanced_4x4`, `chain_200`, `balanced_4x4_depth2`
fn benches_layout(c: &mut Criterion) {
    let sample = sample_tree();
    let balanced = balanced_tree(4, 4);
    let long_chain = chain(200);

    for (name, layout) in [
        ("td", Layout::TopDown),
        ("lr", Layout::LeftToRight),
        ("index", Layout::Index { connectors: true }),
    ] {
        let mut group = c.benchmark_group(format!("layout.scan.{name}"));
        for (case, tree, max_depth) in [
            ("sample", &sample, None),
            ("balanced_4x4", &balanced, None),
            ("chain_200", &long_chain, None),
            ("balanced_4x4_depth2", &balanced, Some(2)),
        ] {
            group.bench_function(case, |b| {
                b.iter(|| {
                    let session = LayoutSession::scan(
                        black_box(layout),
                        LayoutConfig::default(),
                        black_box(tree),
                        max_depth,
                    )
                    .expect("scan");
                    black_box(session.size())
                })
            });
        }
        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_layout
}
criterion_main!(benches);

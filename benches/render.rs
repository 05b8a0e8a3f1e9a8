// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dryad::model::fixtures::{balanced_tree, sample_tree};
use dryad::{BoundsMode, BoxStyle, FrameConfig, Layout, LayoutConfig, LayoutSession, TreePrinter};

mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `render.draw`, `render.print`
// - Case IDs: `<layout>/<tree>` such as `td/sample` or `index/balanced_4x4`.
fn benches_render(c: &mut Criterion) {
    let sample = sample_tree();
    let balanced = balanced_tree(4, 4);
    let layouts = [
        ("td", Layout::TopDown),
        ("bu", Layout::BottomUp),
        ("lr", Layout::LeftToRight),
        ("rl", Layout::RightToLeft),
        ("index", Layout::Index { connectors: true }),
    ];

    // Scan once, measure the draw pass alone.
    let mut group = c.benchmark_group("render.draw");
    for (name, layout) in layouts {
        for (case, tree) in [("sample", &sample), ("balanced_4x4", &balanced)] {
            let session =
                LayoutSession::scan(layout, LayoutConfig::default(), tree, None).expect("scan");
            let frame = FrameConfig::default();
            group.bench_function(format!("{name}/{case}"), |b| {
                b.iter(|| {
                    let canvas =
                        session.render(black_box(&frame), BoundsMode::Strict).expect("render");
                    black_box(canvas.width())
                })
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("render.print");
    for (name, layout) in layouts {
        let printer = TreePrinter::new(
            layout,
            LayoutConfig::default(),
            FrameConfig::bordered(BoxStyle::Ascii).with_padding(1, 1, 1, 1),
        );
        group.bench_function(format!("{name}/balanced_4x4"), |b| {
            b.iter(|| {
                let text = printer.print(black_box(&balanced), None).expect("print");
                black_box(text.len())
            })
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_render
}
criterion_main!(benches);

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Sample trees shared by tests, benches and the CLI demo.

use super::tree::TextTree;

fn leaf(label: &str) -> TextTree {
    TextTree::leaf(label)
}

/// The reference tree: two inner levels, multi-line leaves and a missing slot under `innerF`.
pub fn sample_tree() -> TextTree {
    let inner_g = TextTree::new("innerG", [leaf("L3"), leaf("L4\nline1\nline2"), leaf("L5\nsub1")]);
    let inner_h = TextTree::new("innerH", [leaf("L"), leaf("L2")]);
    let i = TextTree::new("I", [inner_g, inner_h]);
    let inner_f = TextTree::with_slots("innerF", [Some(leaf("F1")), None, Some(leaf("F2"))]);

    TextTree::new("root", [i, inner_f])
}

/// A complete tree with `fanout` children per node, `depth` levels below the root.
pub fn balanced_tree(depth: usize, fanout: usize) -> TextTree {
    fn build(prefix: &str, depth: usize, fanout: usize) -> TextTree {
        if depth == 0 {
            return TextTree::leaf(prefix);
        }
        let children = (0..fanout).map(|idx| build(&format!("{prefix}.{idx}"), depth - 1, fanout));
        TextTree::new(prefix, children)
    }

    build("n", depth, fanout)
}

/// A single chain of `length` nodes below the root.
pub fn chain(length: usize) -> TextTree {
    let mut node = TextTree::leaf(format!("c{length}"));
    for idx in (0..length).rev() {
        node = TextTree::new(format!("c{idx}"), [node]);
    }
    node
}

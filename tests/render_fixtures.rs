// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use dryad::{
    BoxStyle, Child, FrameConfig, JsonNode, Layout, LayoutConfig, PrintConfig, TreeNode,
    TreePrinter,
};
use rstest::rstest;
use serde_json::Value;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn load_json(name: &str) -> Value {
    let raw = std::fs::read_to_string(fixture_path(name)).expect("read fixture");
    serde_json::from_str(&raw).expect("parse fixture")
}

/// Labels of every node within the first `max_depth` levels (all nodes when `None`).
fn labels(node: JsonNode<'_>, depth: usize, max_depth: Option<usize>, out: &mut Vec<String>) {
    out.push(node.label().into_owned());
    if max_depth == Some(depth + 1) {
        return;
    }
    for idx in 0..node.child_count() {
        if let Child::Present(child) = node.child(idx) {
            labels(child, depth + 1, max_depth, out);
        }
    }
}

fn printer(layout: Layout) -> TreePrinter {
    TreePrinter::new(layout, LayoutConfig::default(), FrameConfig::default())
}

const LAYOUTS: [Layout; 6] = [
    Layout::TopDown,
    Layout::BottomUp,
    Layout::LeftToRight,
    Layout::RightToLeft,
    Layout::Index { connectors: true },
    Layout::Index { connectors: false },
];

#[rstest]
#[case("package.json")]
#[case("sparse.json")]
#[case("scalar.json")]
fn every_layout_prints_every_label(#[case] name: &str) {
    let value = load_json(name);
    let mut expected = Vec::new();
    labels(JsonNode::new(&value), 0, None, &mut expected);

    for layout in LAYOUTS {
        let text = printer(layout).print(JsonNode::new(&value), None).expect("print");
        for label in &expected {
            assert!(text.contains(label.as_str()), "{layout:?}: {label} missing from\n{text}");
        }
    }
}

#[rstest]
#[case("package.json")]
#[case("sparse.json")]
fn output_fits_the_rendered_canvas(#[case] name: &str) {
    let value = load_json(name);
    for layout in LAYOUTS {
        let canvas = printer(layout).render(JsonNode::new(&value), None).expect("render");
        let text = printer(layout).print(JsonNode::new(&value), None).expect("print");
        assert!(text.lines().count() <= canvas.height());
        for line in text.lines() {
            assert!(line.chars().count() <= canvas.width(), "{layout:?}: {line:?}");
        }
    }
}

#[rstest]
#[case("package.json")]
#[case("sparse.json")]
fn bottom_up_mirrors_top_down(#[case] name: &str) {
    let value = load_json(name);
    let top_down = printer(Layout::TopDown).print(JsonNode::new(&value), None).expect("print");
    let bottom_up = printer(Layout::BottomUp).print(JsonNode::new(&value), None).expect("print");

    let mirrored: Vec<&str> = top_down.lines().rev().collect();
    let actual: Vec<&str> = bottom_up.lines().collect();
    assert_eq!(actual, mirrored);
}

#[rstest]
#[case(Layout::TopDown)]
#[case(Layout::LeftToRight)]
#[case(Layout::Index { connectors: true })]
fn depth_limit_hides_deeper_levels(#[case] layout: Layout) {
    let value = load_json("package.json");
    let text = printer(layout).print(JsonNode::new(&value), Some(2)).expect("print");

    let mut visible = Vec::new();
    labels(JsonNode::new(&value), 0, Some(2), &mut visible);
    assert!(visible.contains(&"deps".to_owned()));
    for label in &visible {
        assert!(text.contains(label.as_str()), "{label} missing from\n{text}");
    }
    assert!(text.contains("..."), "no truncation marker in\n{text}");
    assert!(!text.contains("serde"), "grandchild leaked into\n{text}");
    assert!(!text.contains("dryad: src/main.rs"), "grandchild leaked into\n{text}");
}

#[test]
fn zero_depth_prints_only_the_marker() {
    let value = load_json("package.json");
    let text = printer(Layout::TopDown).print(JsonNode::new(&value), Some(0)).expect("print");
    assert_eq!(text, "...");
}

#[rstest]
#[case("sparse.json", None)]
#[case("package.json", None)]
#[case("package.json", Some(2))]
fn one_printer_prints_the_same_text_twice(#[case] name: &str, #[case] max_depth: Option<usize>) {
    let value = load_json(name);
    for layout in LAYOUTS {
        let reused = printer(layout);
        let first = reused.print(JsonNode::new(&value), max_depth).expect("first print");
        let second = reused.print(JsonNode::new(&value), max_depth).expect("second print");
        assert_eq!(first, second, "{layout:?}");
        let fresh = printer(layout).print(JsonNode::new(&value), max_depth).expect("print");
        assert_eq!(first, fresh, "{layout:?}");
    }
}

#[test]
fn config_file_drives_layout_and_frame() {
    let config = PrintConfig::load(fixture_path("framed_lr.json")).expect("load config");
    assert_eq!(config.layout, Layout::LeftToRight);
    assert_eq!(config.spacing.horizontal_spacing, 3);
    assert_eq!(config.frame.border, BoxStyle::Ascii);

    let value = load_json("package.json");
    let canvas =
        TreePrinter::from_config(&config).render(JsonNode::new(&value), None).expect("render");
    let text = TreePrinter::from_config(&config).print(JsonNode::new(&value), None).expect("print");

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), canvas.height());
    for line in &lines {
        assert_eq!(line.chars().count(), canvas.width(), "{line:?}");
    }
    let border = format!("+{}+", "-".repeat(canvas.width() - 2));
    assert_eq!(lines.first().copied(), Some(border.as_str()));
    assert_eq!(lines.last().copied(), Some(border.as_str()));
    let padding_row = format!("|{}|", " ".repeat(canvas.width() - 2));
    assert_eq!(lines[1], padding_row);
    assert_eq!(lines[lines.len() - 2], padding_row);
    assert!(lines.iter().all(|line| line.starts_with("| ") || line.starts_with('+')));
}

#[test]
fn missing_config_file_reports_the_path() {
    let err = PrintConfig::load(fixture_path("does-not-exist.json")).unwrap_err();
    assert!(err.to_string().contains("does-not-exist.json"), "{err}");
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! One-call tree printing: scan, size the canvas, draw the frame and the tree, export.

use std::fmt;

use crate::config::{FrameConfig, Layout, LayoutConfig, PrintConfig};
use crate::layout::{LayoutError, LayoutSession};
use crate::model::{Root, TreeNode};
use crate::render::{canvas_to_string_trimmed, BoundsMode, Canvas};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintError {
    /// A required configuration object was not supplied to the builder.
    MissingConfig { name: &'static str },
    Layout(LayoutError),
}

impl fmt::Display for PrintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingConfig { name } => write!(f, "missing {name} configuration"),
            Self::Layout(err) => write!(f, "layout error: {err}"),
        }
    }
}

impl std::error::Error for PrintError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::MissingConfig { .. } => None,
            Self::Layout(err) => Some(err),
        }
    }
}

impl From<LayoutError> for PrintError {
    fn from(value: LayoutError) -> Self {
        Self::Layout(value)
    }
}

/// Prints trees with a fixed layout, spacing and frame.
///
/// The printer itself holds no per-tree state; every call runs its own [`LayoutSession`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreePrinter {
    layout: Layout,
    config: LayoutConfig,
    frame: FrameConfig,
    bounds: BoundsMode,
}

impl TreePrinter {
    pub fn new(layout: Layout, config: LayoutConfig, frame: FrameConfig) -> Self {
        Self { layout, config, frame, bounds: BoundsMode::Strict }
    }

    pub fn builder() -> TreePrinterBuilder {
        TreePrinterBuilder::default()
    }

    pub fn from_config(config: &PrintConfig) -> Self {
        Self::new(config.layout, config.spacing, config.frame).with_bounds(config.bounds)
    }

    pub fn with_bounds(mut self, bounds: BoundsMode) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn frame(&self) -> &FrameConfig {
        &self.frame
    }

    /// Runs only the scan pass.
    pub fn scan<N: TreeNode>(
        &self,
        root: impl Into<Root<N>>,
        max_depth: Option<usize>,
    ) -> Result<LayoutSession<N>, PrintError> {
        Ok(LayoutSession::scan(self.layout, self.config, root, max_depth)?)
    }

    /// Scans and draws into a canvas sized exactly for the tree and the frame.
    pub fn render<N: TreeNode>(
        &self,
        root: impl Into<Root<N>>,
        max_depth: Option<usize>,
    ) -> Result<Canvas, PrintError> {
        let session = self.scan(root, max_depth)?;
        Ok(session.render(&self.frame, self.bounds)?)
    }

    /// Like [`render`](Self::render), exported as text without trailing whitespace.
    pub fn print<N: TreeNode>(
        &self,
        root: impl Into<Root<N>>,
        max_depth: Option<usize>,
    ) -> Result<String, PrintError> {
        let canvas = self.render(root, max_depth)?;
        Ok(canvas_to_string_trimmed(&canvas))
    }
}

/// Collects the three required configuration objects; [`build`](Self::build) fails if any is
/// missing instead of falling back to defaults.
#[derive(Debug, Clone, Default)]
pub struct TreePrinterBuilder {
    layout: Option<Layout>,
    config: Option<LayoutConfig>,
    frame: Option<FrameConfig>,
    bounds: BoundsMode,
}

impl TreePrinterBuilder {
    pub fn layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    pub fn config(mut self, config: LayoutConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn frame(mut self, frame: FrameConfig) -> Self {
        self.frame = Some(frame);
        self
    }

    pub fn bounds(mut self, bounds: BoundsMode) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn build(self) -> Result<TreePrinter, PrintError> {
        let layout = self.layout.ok_or(PrintError::MissingConfig { name: "layout" })?;
        let config = self.config.ok_or(PrintError::MissingConfig { name: "spacing" })?;
        let frame = self.frame.ok_or(PrintError::MissingConfig { name: "frame" })?;
        Ok(TreePrinter::new(layout, config, frame).with_bounds(self.bounds))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{PrintError, TreePrinter};
    use crate::config::{FrameConfig, Layout, LayoutConfig, PrintConfig};
    use crate::model::fixtures::sample_tree;
    use crate::model::{Root, TextTree};
    use crate::render::{BoundsMode, BoxStyle};

    #[test]
    fn builder_requires_every_config() {
        let err = TreePrinter::builder().build().unwrap_err();
        assert_eq!(err, PrintError::MissingConfig { name: "layout" });

        let err = TreePrinter::builder().layout(Layout::TopDown).build().unwrap_err();
        assert_eq!(err, PrintError::MissingConfig { name: "spacing" });

        let err = TreePrinter::builder()
            .layout(Layout::TopDown)
            .config(LayoutConfig::default())
            .build()
            .unwrap_err();
        assert_eq!(err.to_string(), "missing frame configuration");

        let printer = TreePrinter::builder()
            .layout(Layout::LeftToRight)
            .config(LayoutConfig::default())
            .frame(FrameConfig::default())
            .bounds(BoundsMode::Clip)
            .build()
            .expect("printer");
        assert_eq!(printer.layout(), Layout::LeftToRight);
    }

    #[test]
    fn prints_a_leaf_inside_a_frame() {
        let printer = TreePrinter::new(
            Layout::TopDown,
            LayoutConfig::default(),
            FrameConfig::bordered(BoxStyle::Ascii),
        );
        let tree = TextTree::leaf("hi");
        let text = printer.print(&tree, None).expect("print");
        assert_eq!(text, "+----+\n|+--+|\n||hi||\n|+--+|\n+----+");
    }

    #[rstest]
    #[case(Layout::TopDown)]
    #[case(Layout::BottomUp)]
    #[case(Layout::LeftToRight)]
    #[case(Layout::RightToLeft)]
    #[case(Layout::Index { connectors: true })]
    fn every_label_of_the_sample_tree_is_printed(#[case] layout: Layout) {
        let printer = TreePrinter::new(layout, LayoutConfig::default(), FrameConfig::default());
        let tree = sample_tree();
        let text = printer.print(&tree, None).expect("print");
        let labels = [
            "root", "I", "innerG", "innerH", "innerF", "L3", "L4", "line1", "line2", "L5", "sub1",
            "F1", "F2", "L2",
        ];
        for label in labels {
            assert!(text.contains(label), "{label} missing from\n{text}");
        }
    }

    #[test]
    fn null_root_prints_placeholder() {
        let printer = TreePrinter::from_config(&PrintConfig::default());
        let text = printer.print::<&TextTree>(Root::Null, None).expect("print");
        assert_eq!(text, "<null>");
    }

    #[test]
    fn render_returns_the_full_canvas() {
        let printer = TreePrinter::new(
            Layout::Index { connectors: true },
            LayoutConfig::default(),
            FrameConfig::default().with_padding(0, 3, 0, 1),
        );
        let tree = TextTree::leaf("x");
        let canvas = printer.render(&tree, None).expect("render");
        assert_eq!((canvas.width(), canvas.height()), (6, 4));
    }
}

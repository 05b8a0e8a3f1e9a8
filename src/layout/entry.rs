// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use crate::model::StructuralKey;
use crate::render::{BoxStyle, Canvas, Point, Size};

pub(crate) type Cache<N> = HashMap<StructuralKey, LayoutEntry<N>>;

pub(crate) const NULL_TEXT: &str = "<null>";
pub(crate) const TRUNCATION_TEXT: &str = "...";

/// The exact characters of a rendered node box, border included.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextBlock {
    lines: Vec<String>,
    size: Size,
}

impl TextBlock {
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let lines = (0..canvas.height()).filter_map(|y| canvas.row(y).ok()).collect();
        Self { lines, size: canvas.size() }
    }

    /// A single line of text.
    pub fn text(text: &str) -> Self {
        Self { lines: vec![text.to_owned()], size: Size::new(text.chars().count(), 1) }
    }

    /// A blank block of `size`.
    pub fn blank(size: Size) -> Self {
        let row = " ".repeat(size.width);
        Self { lines: vec![row; size.height], size }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> usize {
        self.size.width
    }

    pub fn height(&self) -> usize {
        self.size.height
    }
}

/// What a cache entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// A real node.
    Node,
    /// Blank space for a declared-but-missing child.
    Gap,
    /// The tree itself is absent.
    Null,
    /// The root is the explicit "no sibling" marker.
    MissingRoot,
    /// Depth limit of zero: the root is replaced by a truncation marker.
    TruncatedRoot,
}

/// Geometry and rendered text of one node, addressed by its [`StructuralKey`].
///
/// Positions are relative: `offset` places this subtree's bounding box inside its parent's
/// bounding box, `inset` places the node's own box inside its subtree's bounding box.
#[derive(Debug, Clone)]
pub struct LayoutEntry<N> {
    pub(crate) node: Option<N>,
    pub(crate) kind: EntryKind,
    pub(crate) style: BoxStyle,
    pub(crate) block: TextBlock,
    pub(crate) children: Vec<StructuralKey>,
    pub(crate) total: Size,
    pub(crate) offset: Point,
    pub(crate) inset: Point,
    pub(crate) depth: usize,
    /// Deepest level this subtree occupies, truncation marker included.
    pub(crate) reach: usize,
    pub(crate) truncated: bool,
}

impl<N> LayoutEntry<N> {
    fn sentinel(kind: EntryKind, block: TextBlock) -> Self {
        Self {
            node: None,
            kind,
            style: BoxStyle::None,
            total: block.size(),
            block,
            children: Vec::new(),
            offset: Point::default(),
            inset: Point::default(),
            depth: 0,
            reach: 0,
            truncated: false,
        }
    }

    pub(crate) fn null() -> Self {
        Self::sentinel(EntryKind::Null, TextBlock::text(NULL_TEXT))
    }

    pub(crate) fn missing_root() -> Self {
        Self::sentinel(EntryKind::MissingRoot, TextBlock::blank(Size::new(1, 1)))
    }

    pub(crate) fn truncated_root() -> Self {
        Self::sentinel(EntryKind::TruncatedRoot, TextBlock::text(TRUNCATION_TEXT))
    }

    pub(crate) fn gap(depth: usize, size: Size) -> Self {
        let mut entry = Self::sentinel(EntryKind::Gap, TextBlock::default());
        entry.total = size;
        entry.depth = depth;
        entry.reach = depth;
        entry
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_gap(&self) -> bool {
        self.kind == EntryKind::Gap
    }

    pub fn node(&self) -> Option<&N> {
        self.node.as_ref()
    }

    pub fn style(&self) -> BoxStyle {
        self.style
    }

    pub fn block(&self) -> &TextBlock {
        &self.block
    }

    /// Own box size (excluding the subtree).
    pub fn own_size(&self) -> Size {
        self.block.size()
    }

    /// Bounding box of the node and its visible subtree.
    pub fn total_size(&self) -> Size {
        self.total
    }

    pub fn children(&self) -> &[StructuralKey] {
        &self.children
    }

    pub fn offset(&self) -> Point {
        self.offset
    }

    pub fn inset(&self) -> Point {
        self.inset
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Whether a truncation marker is drawn in place of the children.
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }
}

#[cfg(test)]
mod tests {
    use super::{EntryKind, LayoutEntry, TextBlock};
    use crate::render::{Canvas, Size};

    #[test]
    fn sentinels_have_fixed_blocks() {
        let null = LayoutEntry::<()>::null();
        assert_eq!(null.kind(), EntryKind::Null);
        assert_eq!(null.block().lines(), ["<null>"]);
        assert_eq!(null.total_size(), Size::new(6, 1));

        let missing = LayoutEntry::<()>::missing_root();
        assert_eq!(missing.own_size(), Size::new(1, 1));

        let truncated = LayoutEntry::<()>::truncated_root();
        assert_eq!(truncated.block().lines(), ["..."]);

        let gap = LayoutEntry::<()>::gap(2, Size::new(3, 0));
        assert!(gap.is_gap());
        assert_eq!(gap.own_size(), Size::new(0, 0));
        assert_eq!(gap.total_size(), Size::new(3, 0));
    }

    #[test]
    fn text_block_reads_canvas_rows() {
        let mut canvas = Canvas::new(3, 2).unwrap();
        canvas.write_str(0, 0, "ab").unwrap();
        let block = TextBlock::from_canvas(&canvas);
        assert_eq!(block.lines(), ["ab ", "   "]);
        assert_eq!(block.size(), Size::new(3, 2));
    }
}

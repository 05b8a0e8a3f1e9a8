// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

use crate::render::text::label_extent;
use crate::render::{Align, BoxStyle, Canvas, CanvasError, Point, Size};

/// Result of asking a node for one of its declared children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child<N> {
    Present(N),
    /// The slot is declared but empty; layouts leave a blank gap for it.
    Missing,
}

impl<N> Child<N> {
    pub fn into_option(self) -> Option<N> {
        match self {
            Self::Present(node) => Some(node),
            Self::Missing => None,
        }
    }
}

impl<N> From<Option<N>> for Child<N> {
    fn from(value: Option<N>) -> Self {
        match value {
            Some(node) => Self::Present(node),
            None => Self::Missing,
        }
    }
}

/// What is handed to a printer as the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root<N> {
    Node(N),
    /// The explicit "no sibling" marker used as a root; renders as an empty frame.
    Missing,
    /// No tree at all; renders as `<null>`.
    Null,
}

impl<N: TreeNode> From<N> for Root<N> {
    fn from(value: N) -> Self {
        Self::Node(value)
    }
}

impl<N> From<Option<N>> for Root<N> {
    fn from(value: Option<N>) -> Self {
        match value {
            Some(node) => Self::Node(node),
            None => Self::Null,
        }
    }
}

impl<N> From<Child<N>> for Root<N> {
    fn from(value: Child<N>) -> Self {
        match value {
            Child::Present(node) => Self::Node(node),
            Child::Missing => Self::Missing,
        }
    }
}

/// Position of a node relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    Root,
    Child {
        index: usize,
        /// Number of children the parent declares.
        count: usize,
    },
}

impl Relation {
    /// Number of children the parent declares (`0` for the root).
    pub fn sibling_count(self) -> usize {
        match self {
            Self::Root => 0,
            Self::Child { count, .. } => count,
        }
    }
}

/// Edge of a box a connector attaches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Top,
    Bottom,
    Left,
    Right,
}

/// Where a node's box ended up on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxPlacement {
    pub top_left: Point,
    pub size: Size,
}

impl BoxPlacement {
    pub fn bottom_right(&self) -> Point {
        Point::new(
            self.top_left.x + self.size.width.saturating_sub(1),
            self.top_left.y + self.size.height.saturating_sub(1),
        )
    }
}

/// Endpoints of the connector between a node and its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectorPlacement {
    /// Point on the parent's box.
    pub from: Point,
    pub from_side: Side,
    /// Last cell of the line on the child's side.
    pub to: Point,
    pub to_side: Side,
}

/// A node of the tree being printed.
///
/// Implement this for a cheap handle type (usually `&MyNode`): layouts keep one handle per
/// visited node for the decoration callbacks. Only `label`, `child_count` and `child` are
/// required.
///
/// During one scan a node's `label`, `box_style` and `print_size` are called at most once.
pub trait TreeNode: Sized {
    /// Label text; lines are separated by `'\n'`.
    fn label(&self) -> Cow<'_, str>;

    /// Declared number of children. Any of them may turn out to be [`Child::Missing`].
    fn child_count(&self) -> usize;

    fn child(&self, index: usize) -> Child<Self>;

    fn box_style(&self, _relation: Relation) -> BoxStyle {
        BoxStyle::Ascii
    }

    fn label_align(&self) -> Align {
        Align::Left
    }

    /// Size the node wants for its box, border included.
    ///
    /// The result is clamped to `max` by the layout.
    fn print_size(&self, _relation: Relation, label: &str, style: BoxStyle, max: Size) -> Size {
        default_print_size(label, style, max)
    }

    /// Called once per draw after the node's box is on the canvas.
    fn decorate_box(
        &self,
        _canvas: &mut Canvas,
        _placement: &BoxPlacement,
    ) -> Result<(), CanvasError> {
        Ok(())
    }

    /// Called once per draw after the connector to the parent is on the canvas.
    fn decorate_connector(
        &self,
        _canvas: &mut Canvas,
        _connector: &ConnectorPlacement,
    ) -> Result<(), CanvasError> {
        Ok(())
    }
}

/// Label extent plus border on every side, clamped to `max`.
pub fn default_print_size(label: &str, style: BoxStyle, max: Size) -> Size {
    let (width, height) = label_extent(label);
    let border = style.border() * 2;
    Size::new(width + border, height + border).clamp_to(max)
}

#[cfg(test)]
mod tests {
    use super::{default_print_size, Child, Relation, Root};
    use crate::render::{BoxStyle, Size};

    #[test]
    fn default_print_size_adds_border_and_clamps() {
        let max = Size::new(40, 10);
        assert_eq!(default_print_size("root", BoxStyle::Ascii, max), Size::new(6, 3));
        assert_eq!(default_print_size("L4\nline1\nline2", BoxStyle::Ascii, max), Size::new(7, 5));
        assert_eq!(default_print_size("root", BoxStyle::None, max), Size::new(4, 1));
        assert_eq!(default_print_size("a long label", BoxStyle::Ascii, Size::new(6, 2)), Size::new(6, 2));
    }

    #[test]
    fn root_conversions() {
        assert_eq!(Root::<u8>::from(Some(1)), Root::Node(1));
        assert_eq!(Root::<u8>::from(None), Root::Null);
        assert_eq!(Root::<u8>::from(Child::Present(2)), Root::Node(2));
        assert_eq!(Root::<u8>::from(Child::Missing), Root::Missing);
        assert_eq!(Child::from(Some(3)).into_option(), Some(3));
    }

    #[test]
    fn relation_sibling_count() {
        assert_eq!(Relation::Root.sibling_count(), 0);
        assert_eq!(Relation::Child { index: 1, count: 3 }.sibling_count(), 3);
    }
}

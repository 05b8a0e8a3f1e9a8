// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tree layout: a scan pass that measures every node once, then a draw pass over the cache.
//!
//! [`LayoutSession::scan`] walks the source tree depth-first, renders each node's box into a
//! [`TextBlock`] and records subtree sizes and relative offsets under the node's
//! [`StructuralKey`](crate::model::StructuralKey). [`LayoutSession::draw`] never touches the
//! source tree again except for the decoration callbacks.
//!
//! Three policies share that protocol:
//! - banded (`vertical`, `horizontal`): every depth gets its own band, so nodes on the same
//!   level line up across the whole tree;
//! - `index`: each child list sits indented below its parent, like a directory listing.

use std::fmt;

use crate::config::{Layout, LayoutConfig};
use crate::model::{Relation, StructuralKey};
use crate::render::{BoxStyle, CanvasError, Point, Size};

pub mod entry;
mod horizontal;
mod index;
pub mod session;
mod vertical;

pub use entry::{EntryKind, LayoutEntry, TextBlock};
pub use session::LayoutSession;

use entry::Cache;

/// Width of the `...` truncation marker.
pub(crate) const MARKER_WIDTH: usize = 3;
/// Sibling-axis size of a missing child unless its parent declares exactly two children.
pub(crate) const GAP_EXTENT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    Canvas(CanvasError),
    /// Draw reached a key that scan never populated.
    MissingEntry { key: StructuralKey },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
            Self::MissingEntry { key } => write!(f, "no layout entry for key {key}"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
            Self::MissingEntry { .. } => None,
        }
    }
}

impl From<CanvasError> for LayoutError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    X,
    Y,
}

impl Axis {
    pub(crate) fn of_size(self, size: Size) -> usize {
        match self {
            Self::X => size.width,
            Self::Y => size.height,
        }
    }

    pub(crate) fn size_mut(self, size: &mut Size) -> &mut usize {
        match self {
            Self::X => &mut size.width,
            Self::Y => &mut size.height,
        }
    }

    pub(crate) fn point_mut(self, point: &mut Point) -> &mut usize {
        match self {
            Self::X => &mut point.x,
            Self::Y => &mut point.y,
        }
    }

    pub(crate) fn size(self, along: usize, across: usize) -> Size {
        match self {
            Self::X => Size::new(along, across),
            Self::Y => Size::new(across, along),
        }
    }
}

/// Which concrete layout a session runs, with its axes resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Policy {
    Vertical { inverted: bool },
    Horizontal { inverted: bool },
    Index { connectors: bool },
}

impl From<Layout> for Policy {
    fn from(value: Layout) -> Self {
        match value {
            Layout::TopDown => Self::Vertical { inverted: false },
            Layout::BottomUp => Self::Vertical { inverted: true },
            Layout::LeftToRight => Self::Horizontal { inverted: false },
            Layout::RightToLeft => Self::Horizontal { inverted: true },
            Layout::Index { connectors } => Self::Index { connectors },
        }
    }
}

/// Band geometry of the level-aligned policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Bands {
    /// Axis siblings are spread along.
    pub(crate) siblings: Axis,
    /// Axis the levels advance along.
    pub(crate) levels: Axis,
    pub(crate) sibling_spacing: usize,
    pub(crate) level_spacing: usize,
    /// Size the truncation marker takes, on the sibling and level axes.
    pub(crate) marker_span: usize,
    pub(crate) marker_depth: usize,
}

impl Policy {
    pub(crate) fn bands(self, config: &LayoutConfig) -> Option<Bands> {
        match self {
            Self::Vertical { .. } => Some(Bands {
                siblings: Axis::X,
                levels: Axis::Y,
                sibling_spacing: config.horizontal_spacing,
                level_spacing: config.vertical_spacing,
                marker_span: MARKER_WIDTH,
                marker_depth: 1,
            }),
            Self::Horizontal { .. } => Some(Bands {
                siblings: Axis::Y,
                levels: Axis::X,
                sibling_spacing: config.vertical_spacing,
                level_spacing: config.horizontal_spacing,
                marker_span: 1,
                marker_depth: MARKER_WIDTH,
            }),
            Self::Index { .. } => None,
        }
    }

    /// Blank space reserved for a declared child that turned out missing.
    pub(crate) fn gap_size(self, config: &LayoutConfig, parent_own: Size, count: usize) -> Size {
        match self.bands(config) {
            Some(bands) => {
                let parent = bands.siblings.of_size(parent_own);
                let extent = if count == 2 { parent * 2 } else { GAP_EXTENT };
                bands.siblings.size(extent, 0)
            }
            None => Size::new(0, 1),
        }
    }

    /// Computes `entry`'s sibling-axis size and places its children; children are already in
    /// `cache`.
    pub(crate) fn arrange<N>(
        self,
        config: &LayoutConfig,
        cache: &mut Cache<N>,
        entry: &mut LayoutEntry<N>,
        relation: Relation,
        key: &StructuralKey,
    ) {
        match self.bands(config) {
            Some(bands) => arrange_banded(bands, cache, entry, relation, key),
            None => index::arrange(config, cache, entry),
        }
    }
}

/// A sibling-axis spacing unit in front of every subtree that has siblings, except along the
/// leftmost path.
pub(crate) fn leading_pad(relation: Relation, key: &StructuralKey, spacing: usize) -> usize {
    if relation.sibling_count() > 1 && !key.is_leftmost_path() {
        spacing
    } else {
        0
    }
}

pub(crate) fn trailing_pad(children: usize, spacing: usize) -> usize {
    match children {
        0 => 0,
        1 => (spacing + 3) / 4,
        _ => spacing / 2,
    }
}

/// Sibling draw order: the first half ascending, the second half descending, the middle last.
pub(crate) fn sibling_draw_order(count: usize) -> impl Iterator<Item = usize> {
    let mid = count / 2;
    let last = (count > 0).then_some(mid);
    (0..mid).chain((mid + 1..count).rev()).chain(last)
}

/// Coordinate of the bend between `from` and `to`, halfway across the free cells between them
/// (rounded toward `from`). Without free cells the bend stays on `from`.
pub(crate) fn elbow(from: usize, to: usize) -> usize {
    if to > from + 1 {
        from + 1 + (to - from - 2) / 2
    } else {
        from
    }
}

fn arrange_banded<N>(
    bands: Bands,
    cache: &mut Cache<N>,
    entry: &mut LayoutEntry<N>,
    relation: Relation,
    key: &StructuralKey,
) {
    let axis = bands.siblings;
    let own = axis.of_size(entry.own_size());
    let lead = leading_pad(relation, key, bands.sibling_spacing);
    let trail = trailing_pad(entry.children.len(), bands.sibling_spacing);

    let span = if entry.truncated {
        bands.marker_span
    } else if entry.children.is_empty() {
        0
    } else {
        let sizes: usize = entry
            .children
            .iter()
            .filter_map(|child| cache.get(child))
            .map(|child| axis.of_size(child.total))
            .sum();
        sizes + entry.children.len() - 1
    };

    let content = own.max(span);
    *axis.size_mut(&mut entry.total) = lead + content + trail;
    *axis.point_mut(&mut entry.inset) = lead + (content - own) / 2;

    let mut cursor = lead + (content - span) / 2;
    let mut reach = entry.depth;
    for child_key in &entry.children {
        let Some(child) = cache.get_mut(child_key) else {
            continue;
        };
        *axis.point_mut(&mut child.offset) = cursor;
        cursor += axis.of_size(child.total) + 1;
        if !child.is_gap() {
            reach = reach.max(child.reach);
        }
    }
    entry.reach = if entry.truncated { entry.depth + 1 } else { reach };
}

/// Cells between a box edge and the connector endpoint: connectors end on the border, or on
/// the cell just outside a borderless box.
pub(crate) fn clearance(style: BoxStyle) -> usize {
    usize::from(style.border() == 0)
}

/// Prefix sums of the level bands: `tops[d]` is where band `d` starts on the level axis.
pub(crate) fn band_tops(levels: &[usize], spacing: usize) -> Vec<usize> {
    let mut tops = Vec::with_capacity(levels.len() + 1);
    let mut top = 0;
    tops.push(top);
    for level in levels {
        top += level + spacing;
        tops.push(top);
    }
    tops
}

/// Fills in level-axis sizes and offsets once every level's extent is known.
pub(crate) fn settle_banded<N>(bands: Bands, levels: &[usize], cache: &mut Cache<N>) {
    let tops = band_tops(levels, bands.level_spacing);
    let level = |depth: usize| levels.get(depth).copied().unwrap_or(0);
    let top = |depth: usize| tops.get(depth).copied().unwrap_or(0);

    for entry in cache.values_mut() {
        if entry.depth > 0 {
            *bands.levels.point_mut(&mut entry.offset) =
                level(entry.depth - 1) + bands.level_spacing;
        }
        if entry.is_gap() {
            continue;
        }
        let extent = top(entry.reach) + level(entry.reach) - top(entry.depth);
        *bands.levels.size_mut(&mut entry.total) = extent;
    }
}

/// Maps content coordinates onto the canvas, mirroring one axis for the inverted layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Projection {
    origin: Point,
    flip_x: Option<usize>,
    flip_y: Option<usize>,
}

impl Projection {
    pub(crate) fn new(origin: Point) -> Self {
        Self { origin, flip_x: None, flip_y: None }
    }

    /// Mirrors x inside a content area `width` cells wide.
    pub(crate) fn flip_x(mut self, width: usize) -> Self {
        self.flip_x = Some(width);
        self
    }

    /// Mirrors y inside a content area `height` lines tall.
    pub(crate) fn flip_y(mut self, height: usize) -> Self {
        self.flip_y = Some(height);
        self
    }

    /// A single cell.
    pub(crate) fn point(&self, point: Point) -> Point {
        self.rect(point, Size::new(1, 1))
    }

    /// Top-left corner of a `size` rectangle whose unmirrored top-left is `top_left`.
    pub(crate) fn rect(&self, top_left: Point, size: Size) -> Point {
        let x = match self.flip_x {
            Some(width) => width.saturating_sub(top_left.x + size.width),
            None => top_left.x,
        };
        let y = match self.flip_y {
            Some(height) => height.saturating_sub(top_left.y + size.height),
            None => top_left.y,
        };
        Point::new(self.origin.x + x, self.origin.y + y)
    }

    pub(crate) fn points(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|point| self.point(*point)).collect()
    }
}

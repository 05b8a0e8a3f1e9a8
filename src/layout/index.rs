// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Directory-listing layout: children stacked under their parent, indented by two spacing
//! units (never less than two cells), with no alignment across the tree.

use crate::config::LayoutConfig;
use crate::model::{ConnectorPlacement, Side, StructuralKey, TreeNode};
use crate::render::{Canvas, LineEnd, LineEnds, Point, Size};

use super::entry::{Cache, LayoutEntry, TRUNCATION_TEXT};
use super::session::{place_box, LayoutSession};
use super::{clearance, LayoutError, MARKER_WIDTH};

/// Keeps the stem column and a connector cell left of every child.
fn indent(config: &LayoutConfig) -> usize {
    (config.horizontal_spacing * 2).max(2)
}

/// Column of the vertical stem below a box of `width`, relative to the box.
fn stem(config: &LayoutConfig, width: usize) -> usize {
    (width / 2).min(config.horizontal_spacing)
}

pub(crate) fn arrange<N>(config: &LayoutConfig, cache: &mut Cache<N>, entry: &mut LayoutEntry<N>) {
    let own = entry.own_size();
    let indent = indent(config);

    if entry.truncated {
        entry.total = Size::new(own.width.max(indent + MARKER_WIDTH), own.height + 1);
        return;
    }
    if entry.children.is_empty() {
        entry.total = own;
        return;
    }

    let mut width = own.width;
    let mut y = own.height + 1;
    for child_key in &entry.children {
        let Some(child) = cache.get_mut(child_key) else {
            continue;
        };
        child.offset = Point::new(indent, y);
        width = width.max(indent + child.total.width);
        y += child.total.height + 1;
    }
    entry.total = Size::new(width, y - 1 + config.vertical_spacing);
}

struct Pass<'a, N> {
    session: &'a LayoutSession<N>,
    connectors: bool,
    ends: LineEnds,
}

pub(crate) fn draw<N: TreeNode>(
    session: &LayoutSession<N>,
    canvas: &mut Canvas,
    origin: Point,
    connectors: bool,
) -> Result<(), LayoutError> {
    let root = session.lookup(&StructuralKey::root())?;
    let ends =
        if session.config().connector_arrows { LineEnds::arrow_at_end() } else { LineEnds::PLAIN };
    let pass = Pass { session, connectors, ends };

    let placement = place_box(canvas, root, origin)?;
    if let Some(node) = root.node() {
        node.decorate_box(canvas, &placement)?;
    }
    pass.draw_children(canvas, root, origin)
}

impl<N: TreeNode> Pass<'_, N> {
    /// `at` is the canvas position of `parent`'s box.
    fn draw_children(
        &self,
        canvas: &mut Canvas,
        parent: &LayoutEntry<N>,
        at: Point,
    ) -> Result<(), LayoutError> {
        let config = self.session.config();
        let own = parent.own_size();
        let indent = indent(config);
        let stem_x = at.x + stem(config, own.width);
        let bottom = at.y + own.height - 1 + clearance(parent.style);

        if parent.truncated {
            let row = at.y + own.height;
            let marker_x = at.x + indent;
            if self.connectors && marker_x > stem_x {
                let stub = [
                    Point::new(stem_x, bottom),
                    Point::new(stem_x, row),
                    Point::new(marker_x - 1, row),
                ];
                canvas.draw_polyline(&stub, LineEnds::PLAIN)?;
            }
            canvas.write_str(marker_x, row, TRUNCATION_TEXT)?;
            return Ok(());
        }

        for child_key in &parent.children {
            let child = self.session.lookup(child_key)?;
            if child.is_gap() {
                continue;
            }

            let child_at = at.offset(child.offset.x, child.offset.y);
            let placement = place_box(canvas, child, child_at)?;

            let mid_y = child_at.y + child.own_size().height / 2;
            let left = child_at.x - clearance(child.style).min(child_at.x);
            let end_x = if self.ends.end == LineEnd::Arrow && left > stem_x + 1 {
                left - 1
            } else {
                left
            };
            let points =
                [Point::new(stem_x, bottom), Point::new(stem_x, mid_y), Point::new(end_x, mid_y)];
            if self.connectors {
                canvas.draw_polyline(&points, self.ends)?;
            }

            if let Some(node) = child.node() {
                node.decorate_box(canvas, &placement)?;
                if self.connectors {
                    let connector = ConnectorPlacement {
                        from: points[0],
                        from_side: Side::Bottom,
                        to: points[2],
                        to_side: Side::Left,
                    };
                    node.decorate_connector(canvas, &connector)?;
                }
            }

            self.draw_children(canvas, child, child_at)?;
        }

        Ok(())
    }
}

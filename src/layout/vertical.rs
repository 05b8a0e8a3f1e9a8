// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Top-down and bottom-up drawing.
//!
//! Coordinates are computed top-down inside the content area; the bottom-up layout mirrors
//! every row through [`Projection::flip_y`] at the very end, so labels stay readable.

use crate::model::{ConnectorPlacement, Side, StructuralKey, TreeNode};
use crate::render::{Canvas, LineEnd, LineEnds, Point, Size, STROKE_VERTICAL};

use super::entry::{LayoutEntry, TRUNCATION_TEXT};
use super::session::{place_box, LayoutSession};
use super::{clearance, elbow, sibling_draw_order, LayoutError, Projection, MARKER_WIDTH};

struct Pass<'a, N> {
    session: &'a LayoutSession<N>,
    projection: Projection,
    inverted: bool,
    ends: LineEnds,
}

pub(crate) fn draw<N: TreeNode>(
    session: &LayoutSession<N>,
    canvas: &mut Canvas,
    origin: Point,
    inverted: bool,
) -> Result<(), LayoutError> {
    let root = session.lookup(&StructuralKey::root())?;
    let mut projection = Projection::new(origin);
    if inverted {
        projection = projection.flip_y(root.total.height);
    }
    let ends =
        if session.config().connector_arrows { LineEnds::arrow_at_end() } else { LineEnds::PLAIN };
    let pass = Pass { session, projection, inverted, ends };

    let at = Point::default();
    let placement = place_box(canvas, root, pass.box_at(root, at))?;
    if let Some(node) = root.node() {
        node.decorate_box(canvas, &placement)?;
    }
    pass.draw_children(canvas, root, at)
}

impl<N: TreeNode> Pass<'_, N> {
    fn box_at(&self, entry: &LayoutEntry<N>, at: Point) -> Point {
        let top_left = at.offset(entry.inset.x, entry.inset.y);
        self.projection.rect(top_left, entry.own_size())
    }

    /// `at` is the unmirrored top-left of `parent`'s subtree.
    fn draw_children(
        &self,
        canvas: &mut Canvas,
        parent: &LayoutEntry<N>,
        at: Point,
    ) -> Result<(), LayoutError> {
        let own = parent.own_size();
        let bottom = at.y + parent.inset.y + own.height - 1;
        let from =
            Point::new(at.x + parent.inset.x + own.width / 2, bottom + clearance(parent.style));

        if parent.truncated {
            return self.draw_truncation(canvas, parent, at, from);
        }

        let single = parent.children.len() == 1;
        for idx in sibling_draw_order(parent.children.len()) {
            let child = self.session.lookup(&parent.children[idx])?;
            if child.is_gap() {
                continue;
            }

            let child_at = at.offset(child.offset.x, child.offset.y);
            let placement = place_box(canvas, child, self.box_at(child, child_at))?;

            let child_box = child_at.offset(child.inset.x, child.inset.y);
            let child_width = child.own_size().width;
            let straight = single && (child_box.x..child_box.x + child_width).contains(&from.x);
            let to_x = if straight { from.x } else { child_box.x + child_width / 2 };
            let to_y = if child_box.y > from.y {
                child_box.y - clearance(child.style)
            } else {
                child_box.y
            };
            let points = self.connector(from, Point::new(to_x, to_y));
            canvas.draw_polyline(&self.projection.points(&points), self.ends)?;

            if let Some(node) = child.node() {
                node.decorate_box(canvas, &placement)?;
                let connector = self.placement(&points);
                node.decorate_connector(canvas, &connector)?;
            }

            self.draw_children(canvas, child, child_at)?;
        }

        Ok(())
    }

    /// Route from the parent's bottom border to the child's top border, bending halfway through
    /// the gap between them.
    fn connector(&self, from: Point, to: Point) -> Vec<Point> {
        let bend = elbow(from.y, to.y);
        let end_y =
            if self.ends.end == LineEnd::Arrow && to.y > bend + 1 { to.y - 1 } else { to.y };

        if from.x == to.x {
            return vec![from, Point::new(to.x, end_y)];
        }
        vec![from, Point::new(from.x, bend), Point::new(to.x, bend), Point::new(to.x, end_y)]
    }

    fn placement(&self, points: &[Point]) -> ConnectorPlacement {
        let first = points.first().copied().unwrap_or_default();
        let last = points.last().copied().unwrap_or_default();
        let (from_side, to_side) =
            if self.inverted { (Side::Top, Side::Bottom) } else { (Side::Bottom, Side::Top) };
        ConnectorPlacement {
            from: self.projection.point(first),
            from_side,
            to: self.projection.point(last),
            to_side,
        }
    }

    /// A stub down into the next band, then `...` centered under the node.
    fn draw_truncation(
        &self,
        canvas: &mut Canvas,
        parent: &LayoutEntry<N>,
        at: Point,
        from: Point,
    ) -> Result<(), LayoutError> {
        let spacing = self.session.level_gap();
        let marker_y = at.y + self.session.level(parent.depth) + spacing;

        for y in from.y..marker_y {
            let cell = self.projection.point(Point::new(from.x, y));
            canvas.stroke(cell.x, cell.y, STROKE_VERTICAL)?;
        }

        let marker = Point::new(from.x.saturating_sub(1), marker_y);
        let marker = self.projection.rect(marker, Size::new(MARKER_WIDTH, 1));
        canvas.write_str(marker.x, marker.y, TRUNCATION_TEXT)?;
        Ok(())
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Left-to-right and right-to-left drawing, the transpose of [`super::vertical`].

use crate::model::{ConnectorPlacement, Side, StructuralKey, TreeNode};
use crate::render::{Canvas, LineEnd, LineEnds, Point, Size, STROKE_HORIZONTAL};

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
        projection = projection.flip_x(root.total.width);
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

    fn draw_children(
        &self,
        canvas: &mut Canvas,
        parent: &LayoutEntry<N>,
        at: Point,
    ) -> Result<(), LayoutError> {
        let own = parent.own_size();
        let right = at.x + parent.inset.x + own.width - 1;
        let from =
            Point::new(right + clearance(parent.style), at.y + parent.inset.y + own.height / 2);

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
            let child_height = child.own_size().height;
            let straight = single && (child_box.y..child_box.y + child_height).contains(&from.y);
            let to_y = if straight { from.y } else { child_box.y + child_height / 2 };
            let to_x = if child_box.x > from.x {
                child_box.x - clearance(child.style)
            } else {
                child_box.x
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

    fn connector(&self, from: Point, to: Point) -> Vec<Point> {
        let bend = elbow(from.x, to.x);
        let end_x =
            if self.ends.end == LineEnd::Arrow && to.x > bend + 1 { to.x - 1 } else { to.x };

        if from.y == to.y {
            return vec![from, Point::new(end_x, to.y)];
        }
        vec![from, Point::new(bend, from.y), Point::new(bend, to.y), Point::new(end_x, to.y)]
    }

    fn placement(&self, points: &[Point]) -> ConnectorPlacement {
        let first = points.first().copied().unwrap_or_default();
        let last = points.last().copied().unwrap_or_default();
        let (from_side, to_side) =
            if self.inverted { (Side::Left, Side::Right) } else { (Side::Right, Side::Left) };
        ConnectorPlacement {
            from: self.projection.point(first),
            from_side,
            to: self.projection.point(last),
            to_side,
        }
    }

    /// A dash stub across the level gap, then `...` in the next column.
    fn draw_truncation(
        &self,
        canvas: &mut Canvas,
        parent: &LayoutEntry<N>,
        at: Point,
        from: Point,
    ) -> Result<(), LayoutError> {
        let spacing = self.session.level_gap();
        let marker_x = at.x + self.session.level(parent.depth) + spacing;

        for x in from.x..marker_x {
            let cell = self.projection.point(Point::new(x, from.y));
            canvas.stroke(cell.x, cell.y, STROKE_HORIZONTAL)?;
        }

        let marker = self.projection.rect(Point::new(marker_x, from.y), Size::new(MARKER_WIDTH, 1));
        canvas.write_str(marker.x, marker.y, TRUNCATION_TEXT)?;
        Ok(())
    }
}

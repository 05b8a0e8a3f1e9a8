// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Canvas, CanvasError, Point, STROKE_HORIZONTAL, STROKE_VERTICAL};

/// Terminator drawn on one end of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineEnd {
    #[default]
    Plain,
    /// `>`, `<`, `v` or `^`, pointing away from the line.
    Arrow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineEnds {
    pub start: LineEnd,
    pub end: LineEnd,
}

impl LineEnds {
    pub const PLAIN: Self = Self { start: LineEnd::Plain, end: LineEnd::Plain };

    pub fn arrow_at_end() -> Self {
        Self { start: LineEnd::Plain, end: LineEnd::Arrow }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Heading {
    Left,
    Right,
    Up,
    Down,
}

impl Heading {
    fn between(from: Point, to: Point) -> Option<Self> {
        if from.y == to.y {
            if to.x > from.x {
                return Some(Self::Right);
            }
            if to.x < from.x {
                return Some(Self::Left);
            }
            return None;
        }
        if to.y > from.y {
            Some(Self::Down)
        } else {
            Some(Self::Up)
        }
    }

    fn reversed(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    fn arrow(self) -> char {
        match self {
            Self::Left => '<',
            Self::Right => '>',
            Self::Up => '^',
            Self::Down => 'v',
        }
    }
}

impl Canvas {
    /// Draws a straight line between two points.
    ///
    /// Points that share neither row nor column are joined with a horizontal run followed by a
    /// vertical one.
    pub fn draw_line(&mut self, from: Point, to: Point, ends: LineEnds) -> Result<(), CanvasError> {
        self.draw_polyline(&[from, to], ends)
    }

    /// Draws an orthogonal polyline through `points`.
    ///
    /// Every segment includes both of its end cells, so joints are stroked twice and turn into
    /// crossings through the conflict resolver. Arrow terminators overwrite the first/last cell.
    /// In strict mode all points are checked before anything is written.
    pub fn draw_polyline(&mut self, points: &[Point], ends: LineEnds) -> Result<(), CanvasError> {
        let points = orthogonalize(points);
        for point in &points {
            self.check_writable(point.x, point.y)?;
        }

        for pair in points.windows(2) {
            self.stroke_segment(pair[0], pair[1])?;
        }

        if ends.start == LineEnd::Arrow {
            let first = points.windows(2).find_map(|pair| Heading::between(pair[0], pair[1]));
            if let (Some(heading), Some(start)) = (first, points.first()) {
                self.set(start.x, start.y, heading.reversed().arrow())?;
            }
        }

        if ends.end == LineEnd::Arrow {
            let last = points.windows(2).rev().find_map(|pair| Heading::between(pair[0], pair[1]));
            if let (Some(heading), Some(end)) = (last, points.last()) {
                self.set(end.x, end.y, heading.arrow())?;
            }
        }

        Ok(())
    }

    fn stroke_segment(&mut self, from: Point, to: Point) -> Result<(), CanvasError> {
        if from == to {
            return Ok(());
        }

        if from.y == to.y {
            let (min_x, max_x) = if from.x <= to.x { (from.x, to.x) } else { (to.x, from.x) };
            for x in min_x..=max_x {
                self.stroke(x, from.y, STROKE_HORIZONTAL)?;
            }
        } else {
            let (min_y, max_y) = if from.y <= to.y { (from.y, to.y) } else { (to.y, from.y) };
            for y in min_y..=max_y {
                self.stroke(from.x, y, STROKE_VERTICAL)?;
            }
        }

        Ok(())
    }
}

fn orthogonalize(points: &[Point]) -> Vec<Point> {
    let mut out: Vec<Point> = Vec::with_capacity(points.len() * 2);
    for &point in points {
        if let Some(&prev) = out.last() {
            if prev.x != point.x && prev.y != point.y {
                out.push(Point::new(point.x, prev.y));
            }
        }
        out.push(point);
    }
    out
}

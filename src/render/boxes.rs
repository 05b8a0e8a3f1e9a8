// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::text::{align_line, label_lines};
use super::{Canvas, CanvasError, Point, Size};

/// Border style of a node box or of the outer frame.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum BoxStyle {
    /// No border; the label fills the whole box.
    None,
    /// `+--+` corners with `-` and `|` edges.
    #[default]
    Ascii,
    /// `.--.` on top, `'--'` at the bottom.
    Rounded,
    /// `#==#` corners and `#` sides.
    Heavy,
}

#[derive(Debug, Clone, Copy)]
struct BoxGlyphs {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
}

impl BoxStyle {
    /// Cells taken by the border on each side.
    pub fn border(self) -> usize {
        match self {
            Self::None => 0,
            Self::Ascii | Self::Rounded | Self::Heavy => 1,
        }
    }

    fn glyphs(self) -> Option<BoxGlyphs> {
        match self {
            Self::None => None,
            Self::Ascii => Some(BoxGlyphs {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
            }),
            Self::Rounded => Some(BoxGlyphs {
                top_left: '.',
                top_right: '.',
                bottom_left: '\'',
                bottom_right: '\'',
                horizontal: '-',
                vertical: '|',
            }),
            Self::Heavy => Some(BoxGlyphs {
                top_left: '#',
                top_right: '#',
                bottom_left: '#',
                bottom_right: '#',
                horizontal: '=',
                vertical: '#',
            }),
        }
    }
}

/// Horizontal alignment of label lines inside a box.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Canvas {
    /// Draws a box border of `size` with its top-left corner at `at`.
    ///
    /// Boxes narrower or shorter than two cells have no room for a border and draw nothing.
    /// In strict mode an out-of-range box is rejected before any cell is written.
    pub fn draw_box(&mut self, at: Point, size: Size, style: BoxStyle) -> Result<(), CanvasError> {
        let Some(glyphs) = style.glyphs() else {
            return Ok(());
        };
        if size.width < 2 || size.height < 2 {
            return Ok(());
        }

        let x1 = at.x + size.width - 1;
        let y1 = at.y + size.height - 1;
        self.check_writable(x1, y1)?;

        for x in (at.x + 1)..x1 {
            self.set(x, at.y, glyphs.horizontal)?;
            self.set(x, y1, glyphs.horizontal)?;
        }

        for y in (at.y + 1)..y1 {
            self.set(at.x, y, glyphs.vertical)?;
            self.set(x1, y, glyphs.vertical)?;
        }

        self.set(at.x, at.y, glyphs.top_left)?;
        self.set(x1, at.y, glyphs.top_right)?;
        self.set(at.x, y1, glyphs.bottom_left)?;
        self.set(x1, y1, glyphs.bottom_right)?;

        Ok(())
    }

    /// Draws a box and writes `label` inside it, wrapped and clipped to the interior.
    ///
    /// The interior is cleared first, so the box is opaque.
    pub fn draw_labeled_box(
        &mut self,
        at: Point,
        size: Size,
        style: BoxStyle,
        label: &str,
        align: Align,
    ) -> Result<(), CanvasError> {
        let border = if size.width < 2 || size.height < 2 { 0 } else { style.border() };
        self.draw_box(at, size, style)?;

        let inner = Size::new(
            size.width.saturating_sub(border * 2),
            size.height.saturating_sub(border * 2),
        );
        if inner.width == 0 || inner.height == 0 {
            return Ok(());
        }

        let lines = label_lines(label, inner.width, inner.height);
        let origin = at.offset(border, border);
        for dy in 0..inner.height {
            let line = lines.get(dy).map(String::as_str).unwrap_or("");
            let aligned = align_line(line, inner.width, align);
            self.write_str(origin.x, origin.y + dy, &aligned)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{Align, BoxStyle};
    use crate::render::{Canvas, CanvasError, Point, Size};

    #[rstest]
    #[case(BoxStyle::Ascii, "......\n.+--+.\n.|..|.\n.+--+.\n......")]
    #[case(BoxStyle::Rounded, "......\n..--..\n.|..|.\n.'--'.\n......")]
    #[case(BoxStyle::Heavy, "......\n.#==#.\n.#..#.\n.#==#.\n......")]
    #[case(BoxStyle::None, "......\n......\n......\n......\n......")]
    fn draw_box_uses_style_glyphs(#[case] style: BoxStyle, #[case] expected: &str) {
        let mut c = Canvas::new_filled(6, 5, '.').expect("canvas");
        c.draw_box(Point::new(1, 1), Size::new(4, 3), style).unwrap();
        assert_eq!(c.to_string(), expected);
    }

    #[test]
    fn draw_box_out_of_bounds_is_not_partial() {
        let mut c = Canvas::new_filled(4, 3, '.').expect("canvas");
        let err = c.draw_box(Point::new(0, 0), Size::new(5, 3), BoxStyle::Ascii).unwrap_err();
        assert_eq!(
            err,
            CanvasError::OutOfBounds {
                x: 4,
                y: 2,
                width: 4,
                height: 3
            }
        );
        assert_eq!(c.to_string(), "....\n....\n....");
    }

    #[test]
    fn labeled_box_wraps_and_aligns() {
        let mut c = Canvas::new(7, 4).expect("canvas");
        c.draw_labeled_box(Point::new(0, 0), Size::new(7, 4), BoxStyle::Ascii, "ab\ncd", Align::Right)
            .unwrap();
        assert_eq!(c.to_string(), "+-----+\n|   ab|\n|   cd|\n+-----+");
    }

    #[test]
    fn labeled_box_without_border_fills_area() {
        let mut c = Canvas::new(3, 1).expect("canvas");
        c.draw_labeled_box(Point::new(0, 0), Size::new(3, 1), BoxStyle::None, "abc", Align::Left)
            .unwrap();
        assert_eq!(c.to_string(), "abc");

        c.draw_labeled_box(Point::new(0, 0), Size::new(3, 1), BoxStyle::None, "abcdef", Align::Left)
            .unwrap();
        assert_eq!(c.to_string(), "...");
    }

    #[test]
    fn labeled_box_truncates_extra_lines() {
        let mut c = Canvas::new(7, 3).expect("canvas");
        c.draw_labeled_box(Point::new(0, 0), Size::new(7, 3), BoxStyle::Ascii, "a\nb", Align::Left)
            .unwrap();
        assert_eq!(c.to_string(), "+-----+\n|a... |\n+-----+");
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Character-grid drawing primitives.
//!
//! The tree layouts only talk to the grid through [`Canvas`]: text writes, bordered boxes
//! ([`boxes`]) and orthogonal connector strokes ([`line`]). Strokes that land on an existing
//! stroke go through a [`ConflictResolver`], so crossings become `+` instead of whichever line
//! happened to be drawn last.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub mod boxes;
pub mod line;
pub(crate) mod text;

pub use boxes::{Align, BoxStyle};
pub use line::{LineEnd, LineEnds};
pub use text::canvas_to_string_trimmed;

pub const STROKE_HORIZONTAL: char = '-';
pub const STROKE_VERTICAL: char = '|';
pub const STROKE_CROSS: char = '+';

/// Decides which character survives when a stroke hits an already drawn stroke cell.
///
/// Called as `resolver(existing, incoming)`.
pub type ConflictResolver = fn(char, char) -> char;

/// Default crossing rule: `+` stays `+`, a `|` meeting a `-` (either way round) becomes `+`,
/// anything else is overwritten by the incoming stroke.
pub fn resolve_crossing(existing: char, incoming: char) -> char {
    match (existing, incoming) {
        (STROKE_CROSS, _) => STROKE_CROSS,
        (STROKE_VERTICAL, STROKE_HORIZONTAL) | (STROKE_HORIZONTAL, STROKE_VERTICAL) => STROKE_CROSS,
        _ => incoming,
    }
}

/// What happens when a write falls outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum BoundsMode {
    /// Out-of-range writes return [`CanvasError::OutOfBounds`].
    #[default]
    Strict,
    /// Out-of-range writes are dropped.
    Clip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: usize, dy: usize) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    pub width: usize,
    pub height: usize,
}

impl Size {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Component-wise minimum.
    pub fn clamp_to(self, max: Size) -> Self {
        Self { width: self.width.min(max.width), height: self.height.min(max.height) }
    }
}

/// A fixed-size character grid.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
    bounds: BoundsMode,
    resolver: ConflictResolver,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    /// Creates a new canvas filled with `fill`.
    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self {
            width,
            height,
            cells: vec![fill; len],
            bounds: BoundsMode::Strict,
            resolver: resolve_crossing,
        })
    }

    pub fn with_bounds(mut self, bounds: BoundsMode) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_resolver(mut self, resolver: ConflictResolver) -> Self {
        self.resolver = resolver;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the character at `(x, y)`.
    ///
    /// Reads are always bounds-checked, regardless of [`BoundsMode`].
    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(self.cells[(y * self.width) + x])
    }

    /// Sets the character at `(x, y)`, overwriting whatever is there.
    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        if let Some(idx) = self.index_of(x, y)? {
            self.cells[idx] = ch;
        }
        Ok(())
    }

    /// Writes a line stroke character at `(x, y)`.
    ///
    /// Blank cells and identical characters are simply written; anything else is passed to the
    /// conflict resolver together with the incoming character.
    pub fn stroke(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let Some(idx) = self.index_of(x, y)? else {
            return Ok(());
        };

        let existing = self.cells[idx];
        self.cells[idx] = if existing == ' ' || existing == ch {
            ch
        } else {
            (self.resolver)(existing, ch)
        };
        Ok(())
    }

    /// Fills the entire canvas with `ch`.
    pub fn fill(&mut self, ch: char) {
        self.cells.fill(ch);
    }

    /// Resets every cell to a space.
    pub fn clear(&mut self) {
        self.fill(' ');
    }

    /// Writes `text` left-to-right starting at `(x, y)`.
    ///
    /// Behavior:
    /// - If `y` is out of bounds: error in strict mode, no-op when clipping.
    /// - If `text` exceeds the row: clips at the right edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) -> Result<(), CanvasError> {
        if y >= self.height {
            return match self.bounds {
                BoundsMode::Strict => Err(self.out_of_bounds(x, y)),
                BoundsMode::Clip => Ok(()),
            };
        }

        let mut x = x;
        for ch in text.chars() {
            if x >= self.width {
                break;
            }
            self.set(x, y, ch)?;
            x += 1;
        }

        Ok(())
    }

    /// Writes a rectangular block of rows with its top-left corner at `at`.
    pub fn write_block<S: AsRef<str>>(&mut self, at: Point, rows: &[S]) -> Result<(), CanvasError> {
        for (dy, row) in rows.iter().enumerate() {
            self.write_str(at.x, at.y + dy, row.as_ref())?;
        }
        Ok(())
    }

    /// Returns row `y` as a string, untrimmed.
    pub fn row(&self, y: usize) -> Result<String, CanvasError> {
        if y >= self.height {
            return Err(self.out_of_bounds(0, y));
        }
        let start = y * self.width;
        Ok(self.cells[start..start + self.width].iter().collect())
    }

    /// Checks that `(x, y)` may be written.
    ///
    /// Returns `Ok(None)` for an out-of-range cell in clip mode.
    fn index_of(&self, x: usize, y: usize) -> Result<Option<usize>, CanvasError> {
        if self.in_bounds(x, y) {
            return Ok(Some((y * self.width) + x));
        }

        match self.bounds {
            BoundsMode::Strict => Err(self.out_of_bounds(x, y)),
            BoundsMode::Clip => Ok(None),
        }
    }

    pub(crate) fn check_writable(&self, x: usize, y: usize) -> Result<(), CanvasError> {
        self.index_of(x, y).map(|_| ())
    }

    fn out_of_bounds(&self, x: usize, y: usize) -> CanvasError {
        CanvasError::OutOfBounds { x, y, width: self.width, height: self.height }
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for y in 0..self.height {
            for x in 0..self.width {
                f.write_char(self.cells[(y * self.width) + x])?;
            }

            if y + 1 < self.height {
                f.write_char('\n')?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow {
        width: usize,
        height: usize,
    },
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds {
                x,
                y,
                width,
                height,
            } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::config::{FrameConfig, Layout, LayoutConfig};
use crate::model::{BoxPlacement, Child, Relation, Root, StructuralKey, TreeNode};
use crate::render::{Align, BoundsMode, BoxStyle, Canvas, CanvasError, Point, Size};

use super::entry::{Cache, EntryKind, LayoutEntry, TextBlock, NULL_TEXT, TRUNCATION_TEXT};
use super::{horizontal, index, settle_banded, vertical, Bands, LayoutError, Policy};

/// The result of one scan: every visible node's geometry, ready to be drawn any number of times.
///
/// A session is built fresh for each tree; nothing carries over between scans.
#[derive(Debug, Clone)]
pub struct LayoutSession<N> {
    layout: Layout,
    config: LayoutConfig,
    max_depth: Option<usize>,
    cache: Cache<N>,
    /// Largest own extent per depth on the level axis (banded layouts only).
    levels: Vec<usize>,
    /// Whether any visible node was drawn without a border.
    borderless: bool,
}

impl<N: TreeNode> LayoutSession<N> {
    /// Walks the tree once and measures it.
    ///
    /// `max_depth` limits how many levels are drawn: `Some(0)` replaces the whole tree with a
    /// truncation marker, `Some(1)` draws only the root, `None` draws everything.
    pub fn scan(
        layout: Layout,
        config: LayoutConfig,
        root: impl Into<Root<N>>,
        max_depth: Option<usize>,
    ) -> Result<Self, LayoutError> {
        let mut session =
            Self {
            layout,
            config,
            max_depth,
            cache: Cache::new(),
            levels: Vec::new(),
            borderless: false,
        };
        let key = StructuralKey::root();

        match root.into() {
            Root::Null => {
                session.cache.insert(key, LayoutEntry::null());
            }
            Root::Missing => {
                session.cache.insert(key, LayoutEntry::missing_root());
            }
            Root::Node(_) if max_depth == Some(0) => {
                session.cache.insert(key, LayoutEntry::truncated_root());
            }
            Root::Node(node) => {
                session.get_or_create(key, node, Relation::Root)?;
                if let Some(bands) = session.bands() {
                    settle_banded(bands, &session.levels, &mut session.cache);
                }
            }
        }

        Ok(session)
    }

    fn get_or_create(
        &mut self,
        key: StructuralKey,
        node: N,
        relation: Relation,
    ) -> Result<Size, LayoutError> {
        if let Some(entry) = self.cache.get(&key) {
            return Ok(entry.total);
        }

        let policy = self.policy();
        let style = node.box_style(relation);
        self.borderless |= style.border() == 0;
        let block = {
            let label = node.label();
            let max = Size::new(self.config.max_node_width, self.config.max_node_height);
            let size = node.print_size(relation, &label, style, max).clamp_to(max);
            let size = Size::new(size.width.max(1), size.height.max(1));
            render_block(&label, style, node.label_align(), size)?
        };

        let own = block.size();
        let depth = key.depth();
        let count = node.child_count();
        let truncated = count > 0 && self.max_depth == Some(key.len());
        self.record_level(policy, depth, own, truncated);

        let mut children = Vec::new();
        if !truncated {
            children.reserve(count);
            for index in 0..count {
                let child_key = key.child(index);
                match node.child(index) {
                    Child::Present(child) => {
                        self.get_or_create(
                            child_key.clone(),
                            child,
                            Relation::Child { index, count },
                        )?;
                    }
                    Child::Missing => {
                        let size = policy.gap_size(&self.config, own, count);
                        self.cache.insert(child_key.clone(), LayoutEntry::gap(depth + 1, size));
                    }
                }
                children.push(child_key);
            }
        }

        let mut entry = LayoutEntry {
            node: Some(node),
            kind: EntryKind::Node,
            style,
            total: own,
            block,
            children,
            offset: Point::default(),
            inset: Point::default(),
            depth,
            reach: depth,
            truncated,
        };
        policy.arrange(&self.config, &mut self.cache, &mut entry, relation, &key);

        let total = entry.total;
        self.cache.insert(key, entry);
        Ok(total)
    }

    fn record_level(&mut self, policy: Policy, depth: usize, own: Size, truncated: bool) {
        let Some(bands) = policy.bands(&self.config) else {
            return;
        };
        let mut bump = |depth: usize, extent: usize| {
            if self.levels.len() <= depth {
                self.levels.resize(depth + 1, 0);
            }
            self.levels[depth] = self.levels[depth].max(extent);
        };
        bump(depth, bands.levels.of_size(own));
        if truncated {
            bump(depth + 1, bands.marker_depth);
        }
    }

    /// Draws the frame and the tree into `canvas`, which should be at least
    /// [`canvas_size`](Self::canvas_size) large.
    ///
    /// Every node's decoration callbacks run once per call.
    pub fn draw(&self, canvas: &mut Canvas, frame: &FrameConfig) -> Result<(), LayoutError> {
        canvas.draw_box(Point::default(), self.canvas_size(frame), frame.border)?;

        let border = frame.border.border();
        let origin = Point::new(border + frame.left, border + frame.top);
        let root = self.lookup(&StructuralKey::root())?;

        match root.kind {
            EntryKind::Null => canvas.write_str(origin.x, origin.y, NULL_TEXT)?,
            EntryKind::TruncatedRoot => canvas.write_str(origin.x, origin.y, TRUNCATION_TEXT)?,
            EntryKind::MissingRoot | EntryKind::Gap => {}
            EntryKind::Node => match self.policy() {
                Policy::Vertical { inverted } => vertical::draw(self, canvas, origin, inverted)?,
                Policy::Horizontal { inverted } => {
                    horizontal::draw(self, canvas, origin, inverted)?
                }
                Policy::Index { connectors } => index::draw(self, canvas, origin, connectors)?,
            },
        }

        Ok(())
    }

    /// Allocates a canvas of [`canvas_size`](Self::canvas_size) and draws into it.
    pub fn render(&self, frame: &FrameConfig, bounds: BoundsMode) -> Result<Canvas, LayoutError> {
        let size = self.canvas_size(frame);
        let mut canvas = Canvas::new(size.width, size.height)?.with_bounds(bounds);
        self.draw(&mut canvas, frame)?;
        Ok(canvas)
    }
}

impl<N> LayoutSession<N> {
    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Size of the drawn tree, frame excluded.
    pub fn size(&self) -> Size {
        self.cache
            .get(&StructuralKey::root())
            .map(|root| root.total)
            .unwrap_or_default()
    }

    /// Size of the drawn tree plus frame padding and border.
    pub fn canvas_size(&self, frame: &FrameConfig) -> Size {
        let size = self.size();
        Size::new(
            size.width + frame.horizontal_overhead(),
            size.height + frame.vertical_overhead(),
        )
    }

    pub fn entry(&self, key: &StructuralKey) -> Option<&LayoutEntry<N>> {
        self.cache.get(key)
    }

    pub fn root(&self) -> Option<&LayoutEntry<N>> {
        self.entry(&StructuralKey::root())
    }

    /// All cached entries, in no particular order.
    pub fn entries(&self) -> impl Iterator<Item = (&StructuralKey, &LayoutEntry<N>)> {
        self.cache.iter()
    }

    /// Per-depth band extents of the banded layouts; empty for the index layout.
    pub fn levels(&self) -> &[usize] {
        &self.levels
    }

    pub(crate) fn policy(&self) -> Policy {
        Policy::from(self.layout)
    }

    pub(crate) fn lookup(&self, key: &StructuralKey) -> Result<&LayoutEntry<N>, LayoutError> {
        self.cache.get(key).ok_or_else(|| LayoutError::MissingEntry { key: key.clone() })
    }

    /// Band geometry as drawn. Once any box is borderless the level gap is at least one cell.
    pub(crate) fn bands(&self) -> Option<Bands> {
        let mut bands = self.policy().bands(&self.config)?;
        if self.borderless {
            bands.level_spacing = bands.level_spacing.max(1);
        }
        Some(bands)
    }

    /// Free cells between two level bands.
    pub(crate) fn level_gap(&self) -> usize {
        self.bands().map(|bands| bands.level_spacing).unwrap_or(0)
    }

    pub(crate) fn level(&self, depth: usize) -> usize {
        self.levels.get(depth).copied().unwrap_or(0)
    }
}

/// Renders a node's box once into a scratch canvas and keeps the exact characters.
fn render_block(
    label: &str,
    style: BoxStyle,
    align: Align,
    size: Size,
) -> Result<TextBlock, CanvasError> {
    let mut scratch = Canvas::new(size.width, size.height)?.with_bounds(BoundsMode::Clip);
    scratch.draw_labeled_box(Point::default(), size, style, label, align)?;
    Ok(TextBlock::from_canvas(&scratch))
}

/// Copies a node's block onto the canvas.
pub(crate) fn place_box<N>(
    canvas: &mut Canvas,
    entry: &LayoutEntry<N>,
    top_left: Point,
) -> Result<BoxPlacement, LayoutError> {
    canvas.write_block(top_left, entry.block.lines())?;
    Ok(BoxPlacement { top_left, size: entry.own_size() })
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Cow;

use super::node::{Child, TreeNode};

/// A plain owned tree: a label and an ordered list of child slots.
///
/// `None` slots are declared-but-missing children.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextTree {
    label: String,
    children: Vec<Option<TextTree>>,
}

impl TextTree {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self { label: label.into(), children: Vec::new() }
    }

    pub fn new(label: impl Into<String>, children: impl IntoIterator<Item = TextTree>) -> Self {
        Self { label: label.into(), children: children.into_iter().map(Some).collect() }
    }

    /// Builds a node whose child slots may be empty.
    pub fn with_slots(
        label: impl Into<String>,
        children: impl IntoIterator<Item = Option<TextTree>>,
    ) -> Self {
        Self { label: label.into(), children: children.into_iter().collect() }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn children(&self) -> &[Option<TextTree>] {
        &self.children
    }
}

impl<'a> TreeNode for &'a TextTree {
    fn label(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.label)
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child(&self, index: usize) -> Child<Self> {
        let tree: &'a TextTree = *self;
        tree.children.get(index).and_then(Option::as_ref).into()
    }
}

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use smallvec::SmallVec;

/// Selector used as the single path element of the root key.
const ROOT_SELECTOR: usize = 0;

/// Path address of a node: the sequence of child selectors taken from the root.
///
/// Equality and hashing only look at the selector sequence, so two distinct node
/// values reached by the same path share a key, and one node reached by two paths
/// gets two keys. The root key holds a single selector; the "none" key is empty
/// and stands for "no parent".
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructuralKey {
    selectors: SmallVec<[usize; 8]>,
}

impl StructuralKey {
    pub fn root() -> Self {
        let mut selectors = SmallVec::new();
        selectors.push(ROOT_SELECTOR);
        Self { selectors }
    }

    pub fn none() -> Self {
        Self { selectors: SmallVec::new() }
    }

    /// Returns the key of this node's `selector`-th child.
    pub fn child(&self, selector: usize) -> Self {
        let mut selectors = SmallVec::with_capacity(self.selectors.len() + 1);
        selectors.extend_from_slice(&self.selectors);
        selectors.push(selector);
        Self { selectors }
    }

    /// Returns the parent key.
    ///
    /// The root and the "none" key have no parent.
    pub fn parent(&self) -> Result<Self, KeyError> {
        if self.selectors.len() < 2 {
            return Err(KeyError::NoParent { key: self.clone() });
        }

        let mut selectors = self.selectors.clone();
        selectors.pop();
        Ok(Self { selectors })
    }

    pub fn len(&self) -> usize {
        self.selectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selectors.is_empty()
    }

    pub fn is_valid(&self) -> bool {
        !self.selectors.is_empty()
    }

    /// Depth below the root (`0` for the root itself).
    pub fn depth(&self) -> usize {
        self.selectors.len().saturating_sub(1)
    }

    /// Whether every selector along the path is `0`.
    pub fn is_leftmost_path(&self) -> bool {
        self.selectors.iter().all(|&selector| selector == 0)
    }
}

impl fmt::Display for StructuralKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.selectors.is_empty() {
            return f.write_str("<none>");
        }

        let mut buf = itoa::Buffer::new();
        for (idx, selector) in self.selectors.iter().enumerate() {
            if idx > 0 {
                f.write_str("/")?;
            }
            f.write_str(buf.format(*selector))?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    NoParent { key: StructuralKey },
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParent { key } => write!(f, "key {key} has no parent"),
        }
    }
}

impl std::error::Error for KeyError {}

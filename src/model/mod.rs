// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tree-side types: the node trait layouts consume, structural keys, and ready-made adapters.

pub mod fixtures;
pub mod json;
pub mod key;
pub mod node;
pub mod tree;

pub use json::JsonNode;
pub use key::{KeyError, StructuralKey};
pub use node::{
    default_print_size, BoxPlacement, Child, ConnectorPlacement, Relation, Root, Side, TreeNode,
};
pub use tree::TextTree;

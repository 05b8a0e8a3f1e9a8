// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Dryad: boxed ASCII tree diagrams on a character grid.
//!
//! Any tree that implements [`TreeNode`] can be printed top-down, bottom-up, left-to-right,
//! right-to-left or as an indented index, with an optional depth limit.
//!
//! ```
//! use dryad::{FrameConfig, Layout, LayoutConfig, TextTree, TreePrinter};
//!
//! let tree = TextTree::new("root", [TextTree::leaf("a"), TextTree::leaf("b")]);
//! let printer = TreePrinter::new(Layout::TopDown, LayoutConfig::default(), FrameConfig::default());
//! let text = printer.print(&tree, None).unwrap();
//! assert!(text.contains("|root|"));
//! ```

pub mod config;
pub mod layout;
pub mod model;
pub mod printer;
pub mod render;

pub use config::{ConfigError, FrameConfig, Layout, LayoutConfig, PrintConfig};
pub use layout::{LayoutError, LayoutSession};
pub use model::{Child, JsonNode, Relation, Root, StructuralKey, TextTree, TreeNode};
pub use printer::{PrintError, TreePrinter, TreePrinterBuilder};
pub use render::{BoundsMode, BoxStyle, Canvas, CanvasError};

// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout and frame configuration.
//!
//! All values are plain non-negative integers; nothing is validated beyond the type.

use std::fmt;
use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::render::{BoundsMode, BoxStyle};

/// Which layout family draws the tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Root at the top, children below.
    #[default]
    TopDown,
    /// Root at the bottom, children above.
    BottomUp,
    /// Root on the left, children to the right.
    LeftToRight,
    /// Root on the right, children to the left.
    RightToLeft,
    /// Directory-listing style: children indented below their parent.
    Index {
        #[serde(default = "default_true")]
        connectors: bool,
    },
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LayoutConfig {
    /// Characters between sibling subtrees (and between levels of horizontal layouts).
    pub horizontal_spacing: usize,
    /// Lines between levels (and between sibling subtrees of horizontal layouts).
    pub vertical_spacing: usize,
    /// Widest box, border included.
    pub max_node_width: usize,
    /// Tallest box, border included.
    pub max_node_height: usize,
    /// End every connector with an arrowhead pointing at the child.
    pub connector_arrows: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_spacing: 2,
            vertical_spacing: 2,
            max_node_width: 32,
            max_node_height: 8,
            connector_arrows: false,
        }
    }
}

/// Padding and border around the whole diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct FrameConfig {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
    /// Unlike node boxes, the frame has no border unless asked for.
    pub border: BoxStyle,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self { left: 0, right: 0, top: 0, bottom: 0, border: BoxStyle::None }
    }
}

impl FrameConfig {
    pub fn bordered(style: BoxStyle) -> Self {
        Self { border: style, ..Self::default() }
    }

    pub fn with_padding(mut self, left: usize, right: usize, top: usize, bottom: usize) -> Self {
        self.left = left;
        self.right = right;
        self.top = top;
        self.bottom = bottom;
        self
    }

    /// Cells the frame adds horizontally (border plus padding).
    pub fn horizontal_overhead(&self) -> usize {
        self.border.border() * 2 + self.left + self.right
    }

    /// Lines the frame adds vertically (border plus padding).
    pub fn vertical_overhead(&self) -> usize {
        self.border.border() * 2 + self.top + self.bottom
    }
}

/// Everything a printer needs, as loaded from a JSON config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PrintConfig {
    pub layout: Layout,
    #[serde(flatten)]
    pub spacing: LayoutConfig,
    pub frame: FrameConfig,
    pub max_depth: Option<usize>,
    pub bounds: BoundsMode,
}

impl PrintConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw)
            .map_err(|err| ConfigError::Parse { path: None, message: err.to_string() })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Self::from_json_str(&raw).map_err(|err| match err {
            ConfigError::Parse { message, .. } => {
                ConfigError::Parse { path: Some(path.to_path_buf()), message }
            }
            other => other,
        })
    }

    /// JSON schema of the config file, pretty-printed.
    pub fn json_schema() -> String {
        let schema = schemars::schema_for!(PrintConfig);
        serde_json::to_string_pretty(&schema).unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Read { path: PathBuf, message: String },
    Parse { path: Option<PathBuf>, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, message } => {
                write!(f, "failed to read config {}: {message}", path.display())
            }
            Self::Parse { path: Some(path), message } => {
                write!(f, "invalid config {}: {message}", path.display())
            }
            Self::Parse { path: None, message } => write!(f, "invalid config: {message}"),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::{FrameConfig, Layout, LayoutConfig, PrintConfig};
    use crate::render::{BoundsMode, BoxStyle};

    #[test]
    fn empty_object_uses_defaults() {
        let config = PrintConfig::from_json_str("{}").unwrap();
        assert_eq!(config, PrintConfig::default());
        assert_eq!(config.spacing, LayoutConfig::default());
        assert_eq!(config.layout, Layout::TopDown);
        assert_eq!(config.bounds, BoundsMode::Strict);
    }

    #[test]
    fn parses_layout_spacing_and_frame() {
        let config = PrintConfig::from_json_str(
            r#"{
                "layout": { "index": { "connectors": false } },
                "horizontal_spacing": 4,
                "connector_arrows": true,
                "frame": { "left": 1, "border": "rounded" },
                "max_depth": 3,
                "bounds": "clip"
            }"#,
        )
        .unwrap();

        assert_eq!(config.layout, Layout::Index { connectors: false });
        assert_eq!(config.spacing.horizontal_spacing, 4);
        assert_eq!(config.spacing.vertical_spacing, 2);
        assert!(config.spacing.connector_arrows);
        assert_eq!(config.frame.left, 1);
        assert_eq!(config.frame.border, BoxStyle::Rounded);
        assert_eq!(config.max_depth, Some(3));
        assert_eq!(config.bounds, BoundsMode::Clip);
    }

    #[test]
    fn rejects_unknown_layout() {
        let err = PrintConfig::from_json_str(r#"{ "layout": "diagonal" }"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid config:"));
    }

    #[test]
    fn frame_overhead_counts_border_and_padding() {
        let frame = FrameConfig::bordered(BoxStyle::Ascii).with_padding(1, 2, 0, 3);
        assert_eq!(frame.horizontal_overhead(), 5);
        assert_eq!(frame.vertical_overhead(), 5);
        assert_eq!(FrameConfig::default().horizontal_overhead(), 0);
    }

    #[test]
    fn schema_mentions_layout_variants() {
        let schema = PrintConfig::json_schema();
        assert!(schema.contains("top_down"));
        assert!(schema.contains("horizontal_spacing"));
    }
}

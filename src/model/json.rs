// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tree view over a `serde_json::Value`.
//!
//! - objects become nodes labelled by their key, one child per member
//! - arrays are labelled `key[len]`; their elements are addressed as `[i]`, and `null`
//!   elements become missing children (blank gaps)
//! - scalars are leaves labelled `key: value` (just `value` inside arrays)

use std::borrow::Cow;

use serde_json::Value;
use smol_str::SmolStr;

use super::node::{Child, TreeNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Name<'a> {
    Root,
    Key(&'a str),
    Index(usize),
}

/// Object members are collected once, so `child(i)` is a plain index.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonNode<'a> {
    name: Name<'a>,
    value: &'a Value,
    members: Vec<(&'a str, &'a Value)>,
}

impl<'a> JsonNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self::named(Name::Root, value)
    }

    fn named(name: Name<'a>, value: &'a Value) -> Self {
        let members = match value {
            Value::Object(map) => map.iter().map(|(key, value)| (key.as_str(), value)).collect(),
            _ => Vec::new(),
        };
        Self { name, value, members }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    fn display_name(&self) -> Option<SmolStr> {
        match self.name {
            Name::Root => None,
            Name::Key(key) => Some(SmolStr::new(key)),
            Name::Index(index) => {
                let mut buf = itoa::Buffer::new();
                let mut out = String::with_capacity(8);
                out.push('[');
                out.push_str(buf.format(index));
                out.push(']');
                Some(SmolStr::new(out))
            }
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_owned(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => match number.as_i64() {
            Some(int) => itoa::Buffer::new().format(int).to_owned(),
            None => number.to_string(),
        },
        Value::String(text) => text.clone(),
        Value::Array(_) | Value::Object(_) => String::new(),
    }
}

impl<'a> TreeNode for JsonNode<'a> {
    fn label(&self) -> Cow<'_, str> {
        let name = self.display_name();
        match self.value {
            Value::Object(_) => match name {
                Some(name) => Cow::Owned(name.to_string()),
                None => Cow::Borrowed("{}"),
            },
            Value::Array(items) => {
                let mut buf = itoa::Buffer::new();
                let len = buf.format(items.len());
                Cow::Owned(format!("{}[{len}]", name.as_deref().unwrap_or("")))
            }
            scalar => match self.name {
                Name::Key(key) => Cow::Owned(format!("{key}: {}", scalar_text(scalar))),
                Name::Root | Name::Index(_) => Cow::Owned(scalar_text(scalar)),
            },
        }
    }

    fn child_count(&self) -> usize {
        match self.value {
            Value::Object(_) => self.members.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    fn child(&self, index: usize) -> Child<Self> {
        match self.value {
            Value::Object(_) => match self.members.get(index) {
                Some(&(key, value)) => Child::Present(Self::named(Name::Key(key), value)),
                None => Child::Missing,
            },
            Value::Array(items) => match items.get(index) {
                Some(Value::Null) | None => Child::Missing,
                Some(value) => Child::Present(Self::named(Name::Index(index), value)),
            },
            _ => Child::Missing,
        }
    }
}

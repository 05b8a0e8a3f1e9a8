// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Dryad-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Dryad and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{Align, Canvas};

/// Separator between label lines.
pub const LABEL_LINE_DELIMITER: u8 = b'\n';

const ELLIPSIS: &str = "...";

pub(crate) fn truncate_with_ellipsis(text: &str, max_len: usize) -> String {
    let len = text_len(text);
    if len <= max_len {
        return text.to_owned();
    }

    if max_len <= ELLIPSIS.len() {
        return ".".repeat(max_len);
    }

    let mut out: String = text.chars().take(max_len - ELLIPSIS.len()).collect();
    out.push_str(ELLIPSIS);
    out
}

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Splits a label into its lines.
///
/// An empty label still yields one (empty) line.
pub(crate) fn split_lines(label: &str) -> Vec<&str> {
    let bytes = label.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    for idx in memchr::memchr_iter(LABEL_LINE_DELIMITER, bytes) {
        lines.push(label[start..idx].trim_end_matches('\r'));
        start = idx + 1;
    }
    lines.push(label[start..].trim_end_matches('\r'));
    lines
}

/// Width and height of a label before any wrapping.
pub(crate) fn label_extent(label: &str) -> (usize, usize) {
    let lines = split_lines(label);
    let width = lines.iter().map(|line| text_len(line)).max().unwrap_or(0);
    (width, lines.len())
}

/// Greedy word wrap of a single line; words longer than `width` are split hard.
pub(crate) fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    if text_len(line) <= width {
        return vec![line.to_owned()];
    }

    let mut out = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in line.split(' ') {
        let mut word: Vec<char> = word.chars().collect();

        let needed = if current_len == 0 { word.len() } else { current_len + 1 + word.len() };
        if needed <= width {
            if current_len > 0 {
                current.push(' ');
            }
            current.extend(word.iter());
            current_len = needed;
            continue;
        }

        if current_len > 0 {
            out.push(std::mem::take(&mut current));
        }

        while word.len() > width {
            let rest = word.split_off(width);
            out.push(word.into_iter().collect());
            word = rest;
        }
        current.extend(word.iter());
        current_len = word.len();
    }

    if current_len > 0 || out.is_empty() {
        out.push(current);
    }

    out
}

/// Lays a label out into at most `max_height` lines of at most `width` characters.
///
/// When lines are dropped the last kept line ends in an ellipsis.
pub(crate) fn label_lines(label: &str, width: usize, max_height: usize) -> Vec<String> {
    if width == 0 || max_height == 0 {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for line in split_lines(label) {
        lines.extend(wrap_line(line, width));
    }

    if lines.len() > max_height {
        lines.truncate(max_height);
        if let Some(last) = lines.last_mut() {
            let keep = width.saturating_sub(ELLIPSIS.len());
            let mut marked: String = last.chars().take(keep).collect();
            marked.push_str(&ELLIPSIS[..ELLIPSIS.len().min(width)]);
            *last = marked;
        }
    }

    lines
}

/// Pads (or truncates) `line` to exactly `width` characters.
pub(crate) fn align_line(line: &str, width: usize, align: Align) -> String {
    let line = truncate_with_ellipsis(line, width);
    let free = width - text_len(&line);
    let left = match align {
        Align::Left => 0,
        Align::Center => free / 2,
        Align::Right => free,
    };

    let mut out = String::with_capacity(width);
    out.extend(std::iter::repeat(' ').take(left));
    out.push_str(&line);
    out.extend(std::iter::repeat(' ').take(free - left));
    out
}

/// Exports the canvas with trailing spaces and trailing blank lines removed.
pub fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let mut lines = Vec::<String>::with_capacity(canvas.height());
    for y in 0..canvas.height() {
        let line = canvas.row(y).unwrap_or_default();
        lines.push(line.trim_end_matches(' ').to_owned());
    }

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}

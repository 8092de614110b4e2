// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlight range merging and ANSI rendering.
//!
//! Phrase resolution hands over an unsorted pile of byte ranges with
//! duplicates and overlaps (one range per matched occurrence per term).
//! A single sort-and-sweep collapses them into a disjoint ascending list,
//! which then drives a left-to-right render wrapping each matched span in
//! the yellow-background ANSI pair.

use crate::types::HighlightRange;

/// Yellow background on.
pub const HIGHLIGHT_ON: &str = "\x1b[103m";
/// Back to the default background.
pub const HIGHLIGHT_OFF: &str = "\x1b[49m";

/// Collapse ranges into a sorted, disjoint list.
///
/// Ranges that overlap or abut (`start <= current_end`) fuse into one run.
/// Idempotent: merging an already merged list is the identity.
pub fn merge_ranges(mut ranges: Vec<HighlightRange>) -> Vec<HighlightRange> {
    ranges.sort_unstable();
    let mut merged: Vec<HighlightRange> = Vec::with_capacity(ranges.len());
    for (start, end) in ranges {
        match merged.last_mut() {
            Some((_, run_end)) if start <= *run_end => *run_end = (*run_end).max(end),
            _ => merged.push((start, end)),
        }
    }
    merged
}

/// Wrap each merged range of `record` in the highlight pair, copying
/// everything else verbatim.
///
/// Expects `ranges` sorted and disjoint (the output of [`merge_ranges`]).
/// Range ends are clamped to the record and snapped back onto char
/// boundaries, so a span can never split a code point.
pub fn render(record: &str, ranges: &[HighlightRange]) -> String {
    let mut out = String::with_capacity(record.len() + ranges.len() * 10);
    let mut copied = 0;
    for &(start, end) in ranges {
        let start = snap(record, start).max(copied);
        let end = snap(record, end);
        if end <= start {
            continue;
        }
        out.push_str(&record[copied..start]);
        out.push_str(HIGHLIGHT_ON);
        out.push_str(&record[start..end]);
        out.push_str(HIGHLIGHT_OFF);
        copied = end;
    }
    out.push_str(&record[copied..]);
    out
}

fn snap(record: &str, offset: usize) -> usize {
    let mut i = offset.min(record.len());
    while i > 0 && !record.is_char_boundary(i) {
        i -= 1;
    }
    i
}

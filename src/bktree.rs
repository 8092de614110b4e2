// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Burkhard-Keller tree: approximate string lookup in metric space.
//!
//! A BK-tree stores words so that "everything within edit distance k of a
//! query" can be answered without scanning the whole vocabulary. Each edge
//! carries the exact metric distance between parent and child; the triangle
//! inequality then bounds which subtrees can contain a match, so the walk
//! only descends into children whose edge key lies in `[d - k, d + k]`.
//!
//! Words are additionally bucketed by their first character into per-initial
//! roots. Gross mismatches get pruned before any distance is computed.
//!
//! The walk is an explicit stack rather than recursion; tree depth is
//! bounded by vocabulary diversity in practice but not in principle.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Distance function keying a tree. Must be a true metric.
pub type Metric = fn(&str, &str) -> usize;

#[derive(Debug)]
struct BkNode {
    word: String,
    /// Edge invariant: `metric(self.word, child.word) == key`, key > 0.
    children: HashMap<usize, BkNode>,
}

impl BkNode {
    fn new(word: &str) -> Self {
        BkNode {
            word: word.to_string(),
            children: HashMap::new(),
        }
    }
}

/// Static metric-space index over a vocabulary of terms.
#[derive(Debug)]
pub struct BkTree {
    metric: Metric,
    roots: HashMap<char, BkNode>,
}

impl BkTree {
    pub fn new(metric: Metric) -> Self {
        BkTree {
            metric,
            roots: HashMap::new(),
        }
    }

    /// Insert `word`, walking distance keys until a free slot is found.
    ///
    /// Duplicates (distance 0 to an existing node) are rejected, so inserting
    /// the same word twice leaves the tree unchanged. Empty words are ignored.
    pub fn insert(&mut self, word: &str) {
        let Some(initial) = word.chars().next() else {
            return;
        };
        let metric = self.metric;

        match self.roots.entry(initial) {
            Entry::Vacant(slot) => {
                slot.insert(BkNode::new(word));
            }
            Entry::Occupied(root) => {
                let mut cur = root.into_mut();
                loop {
                    let d = metric(&cur.word, word);
                    if d == 0 {
                        return;
                    }
                    match cur.children.entry(d) {
                        Entry::Occupied(child) => cur = child.into_mut(),
                        Entry::Vacant(slot) => {
                            slot.insert(BkNode::new(word));
                            return;
                        }
                    }
                }
            }
        }
    }

    /// Every stored word within `limit` of `query`, with its distance.
    ///
    /// Each qualifying word appears exactly once; order is unspecified
    /// (callers re-rank before anything becomes observable).
    pub fn find<'t>(&'t self, query: &str, limit: usize) -> Vec<(usize, &'t str)> {
        let mut found = Vec::new();
        let Some(initial) = query.chars().next() else {
            return found;
        };
        let Some(root) = self.roots.get(&initial) else {
            return found;
        };

        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            let d = (self.metric)(&node.word, query);
            if d <= limit {
                found.push((d, node.word.as_str()));
            }
            let lo = d.saturating_sub(limit);
            for (key, child) in &node.children {
                if (lo..=d + limit).contains(key) {
                    stack.push(child);
                }
            }
        }
        found
    }
}

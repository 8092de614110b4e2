// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character trie over the indexed vocabulary.
//!
//! Two jobs: deduplicate prefix insertions into the Levenshtein BK-tree
//! during index construction (`is_prefix`), and complete a matched prefix
//! back to the full terms it stands for (`descendants_or_self`).
//!
//! Every node on a path exists because some stored word put it there, so
//! reaching a node is proof that at least one stored word passes through
//! it - `is_prefix(p)` is true exactly when `descendants_or_self(p)` is
//! non-empty. The empty prefix is a prefix of nothing by convention.

use std::collections::HashMap;

#[derive(Debug, Default)]
struct TrieNode {
    children: HashMap<char, TrieNode>,
    /// The stored word terminating here, if any.
    word: Option<String>,
}

/// Prefix tree over stored terms.
#[derive(Debug, Default)]
pub struct Trie {
    root: TrieNode,
}

impl Trie {
    pub fn new() -> Self {
        Trie::default()
    }

    /// Store `word`, marking its final node terminal. Idempotent; the empty
    /// word is ignored.
    pub fn insert(&mut self, word: &str) {
        if word.is_empty() {
            return;
        }
        let mut cur = &mut self.root;
        for c in word.chars() {
            cur = cur.children.entry(c).or_default();
        }
        cur.word = Some(word.to_string());
    }

    /// Is `prefix` a prefix of some stored word (including that word itself)?
    pub fn is_prefix(&self, prefix: &str) -> bool {
        self.node_at(prefix).is_some()
    }

    /// Every stored word equal to `prefix` or having it as a proper prefix.
    ///
    /// Order is unspecified; callers re-rank before results are observable.
    pub fn descendants_or_self<'t>(&'t self, prefix: &str) -> Vec<&'t str> {
        let mut words = Vec::new();
        let Some(start) = self.node_at(prefix) else {
            return words;
        };
        let mut stack = vec![start];
        while let Some(node) = stack.pop() {
            if let Some(word) = &node.word {
                words.push(word.as_str());
            }
            stack.extend(node.children.values());
        }
        words
    }

    fn node_at(&self, prefix: &str) -> Option<&TrieNode> {
        if prefix.is_empty() {
            return None;
        }
        let mut cur = &self.root;
        for c in prefix.chars() {
            cur = cur.children.get(&c)?;
        }
        Some(cur)
    }
}

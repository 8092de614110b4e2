// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional inverted index construction.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: every posting list is strictly ascending by
//!    `doc_id`. Records are indexed in doc-id order and each term gets at
//!    most one posting per record, so this holds with no explicit sort.
//! 2. **POSITIONS_SORTED**: within a posting, `word_position` is strictly
//!    ascending and `char_position` rises with it (tokenizer walk order).
//! 3. **PREFIX_SEEDING**: after construction the Levenshtein BK-tree holds
//!    exactly the distinct prefixes (length >= 2) of all indexed terms, and
//!    the Hamming BK-tree exactly the distinct 3-char prefixes. The trie
//!    check runs before the term enters the trie, which is what makes the
//!    seeding idempotent across repeated terms.
//!
//! The prefix trees are what interactive completion searches; the trie
//! completes a matched prefix back to real terms at query time.

use std::collections::HashMap;

use crate::bktree::BkTree;
use crate::metrics::{hamming, levenshtein};
use crate::tokenize::{token_occurrences, Tokenizer, WordTokenizer};
use crate::trie::Trie;
use crate::types::{Candidate, Posting, PostingList, RecordPosition};

/// In-memory phrase index over an immutable corpus of records.
///
/// Built once from the corpus; read-only afterwards. Queries go through
/// [`Index::search`] and [`Index::search_ranked`] in the `search` module.
pub struct Index {
    pub(crate) records: Vec<String>,
    pub(crate) terms: HashMap<String, PostingList>,
    pub(crate) vocabulary: Trie,
    pub(crate) lev_tree: BkTree,
    pub(crate) ham_tree: BkTree,
    pub(crate) tokenizer: Box<dyn Tokenizer>,
}

impl Index {
    /// Index `records` with the default word tokenizer.
    pub fn new(records: Vec<String>) -> Self {
        Self::with_tokenizer(records, Box::new(WordTokenizer))
    }

    /// Index `records` with an injected tokenization strategy.
    ///
    /// Queries against this index are tokenized with the same strategy.
    pub fn with_tokenizer(records: Vec<String>, tokenizer: Box<dyn Tokenizer>) -> Self {
        let mut terms: HashMap<String, PostingList> = HashMap::new();
        let mut vocabulary = Trie::new();
        let mut lev_tree = BkTree::new(levenshtein);
        let mut ham_tree = BkTree::new(hamming);

        for (doc_id, record) in records.iter().enumerate() {
            for (term, positions) in group_occurrences(record, tokenizer.as_ref()) {
                seed_prefix_trees(&term, &vocabulary, &mut lev_tree, &mut ham_tree);
                vocabulary.insert(&term);
                terms
                    .entry(term)
                    .or_default()
                    .push(Posting { doc_id, positions });
            }
        }

        Index {
            records,
            terms,
            vocabulary,
            lev_tree,
            ham_tree,
            tokenizer,
        }
    }

    /// The corpus, in doc-id order.
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Distance-0 candidates for an exact term, one per containing record.
    ///
    /// An unknown term yields no candidates, which empties the phrase
    /// intersection downstream - deliberately not an error.
    pub(crate) fn find_one(&self, term: &str) -> Vec<Candidate> {
        let Some(postings) = self.terms.get(term) else {
            return Vec::new();
        };
        postings
            .iter()
            .map(|posting| {
                let highlights = posting
                    .positions
                    .iter()
                    .map(|rp| (rp.char_position, rp.char_position + term.len()))
                    .collect();
                Candidate::new(posting.doc_id, 0, posting.positions.clone(), highlights)
            })
            .collect()
    }

    /// Check index well-formedness (test support).
    #[cfg(any(debug_assertions, test))]
    #[allow(dead_code)]
    pub fn check_well_formed(&self) -> bool {
        for postings in self.terms.values() {
            if postings.is_empty() {
                return false;
            }
            for pair in postings.windows(2) {
                if pair[0].doc_id >= pair[1].doc_id {
                    return false;
                }
            }
            for posting in postings {
                if posting.doc_id >= self.records.len() || posting.positions.is_empty() {
                    return false;
                }
                for pair in posting.positions.windows(2) {
                    if pair[0].word_position >= pair[1].word_position
                        || pair[0].char_position > pair[1].char_position
                    {
                        return false;
                    }
                }
            }
        }
        true
    }
}

/// Group one record's occurrences per term, preserving position order and
/// first-appearance term order.
fn group_occurrences(
    record: &str,
    tokenizer: &dyn Tokenizer,
) -> Vec<(String, Vec<RecordPosition>)> {
    let mut grouped: Vec<(String, Vec<RecordPosition>)> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();
    for (term, position) in token_occurrences(record, tokenizer) {
        match slots.get(&term) {
            Some(&slot) => grouped[slot].1.push(position),
            None => {
                slots.insert(term.clone(), grouped.len());
                grouped.push((term, vec![position]));
            }
        }
    }
    grouped
}

/// Seed the BK-trees with the not-yet-seen prefixes of `term`.
///
/// Must run against the trie state from before `term` is inserted: a prefix
/// goes into the Levenshtein tree exactly once, the first time any term
/// carrying it arrives. 3-char prefixes additionally seed the Hamming tree.
fn seed_prefix_trees(term: &str, vocabulary: &Trie, lev_tree: &mut BkTree, ham_tree: &mut BkTree) {
    let chars: Vec<(usize, char)> = term.char_indices().collect();
    for prefix_chars in 2..=chars.len() {
        let end = match chars.get(prefix_chars) {
            Some(&(byte, _)) => byte,
            None => term.len(),
        };
        let prefix = &term[..end];
        if !vocabulary.is_prefix(prefix) {
            lev_tree.insert(prefix);
            if prefix_chars == 3 {
                ham_tree.insert(prefix);
            }
        }
    }
}

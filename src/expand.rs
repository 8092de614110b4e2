// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy expansion of a single query token.
//!
//! A token is either the live prefix (the last thing being typed, no
//! trailing separator yet) or a complete token. Complete tokens go straight
//! through the Levenshtein BK-tree. Live prefixes route by length:
//!
//! | token length | route                                               |
//! |--------------|-----------------------------------------------------|
//! | 1-2          | trie descendants, distance 0                        |
//! | 3            | Hamming BK-tree (k = 1), then trie completion       |
//! | 4+           | Levenshtein BK-tree (length-scaled k), then trie    |
//!
//! The completion step maps matched prefixes back to the full terms they
//! stand for; a term reachable through several prefixes keeps the smallest
//! contributing distance. The Hamming tree only ever holds 3-char entries,
//! so the k = 1 probe never sees unequal lengths.
//!
//! Variant postings are grouped per document: minimum variant distance,
//! concatenated occurrences (re-sorted by word position, duplicates kept)
//! and concatenated highlights.

use std::collections::{BTreeMap, HashMap};

use crate::index::Index;
use crate::types::Candidate;

/// Edit-distance budget by token length: 1 up to four chars, 2 up to
/// seven, 3 beyond.
fn scaled_limit(len: usize) -> usize {
    match len {
        0..=4 => 1,
        5..=7 => 2,
        _ => 3,
    }
}

/// Expand `term` into `(distance, variant)` pairs against the index
/// vocabulary.
pub(crate) fn expand_term(index: &Index, term: &str, is_prefix: bool) -> Vec<(usize, String)> {
    let len = term.chars().count();
    if is_prefix {
        match len {
            0 => Vec::new(),
            1 | 2 => index
                .vocabulary
                .descendants_or_self(term)
                .into_iter()
                .map(|t| (0, t.to_string()))
                .collect(),
            3 => complete_prefixes(index, index.ham_tree.find(term, 1)),
            _ => complete_prefixes(index, index.lev_tree.find(term, scaled_limit(len))),
        }
    } else {
        index
            .lev_tree
            .find(term, scaled_limit(len))
            .into_iter()
            .map(|(d, w)| (d, w.to_string()))
            .collect()
    }
}

/// Complete matched prefixes to full vocabulary terms, keeping the minimum
/// contributing distance per term.
fn complete_prefixes(index: &Index, prefix_hits: Vec<(usize, &str)>) -> Vec<(usize, String)> {
    let mut best: HashMap<&str, usize> = HashMap::new();
    for (distance, prefix) in prefix_hits {
        for term in index.vocabulary.descendants_or_self(prefix) {
            best.entry(term)
                .and_modify(|d| *d = (*d).min(distance))
                .or_insert(distance);
        }
    }
    best.into_iter().map(|(t, d)| (d, t.to_string())).collect()
}

/// Candidates for one fuzzy query token, one per document containing any
/// variant, ascending by doc id.
pub(crate) fn find_fuzzy(index: &Index, term: &str, is_prefix: bool) -> Vec<Candidate> {
    let variants = expand_term(index, term, is_prefix);

    let mut per_doc: BTreeMap<usize, Candidate> = BTreeMap::new();
    for (distance, variant) in &variants {
        let Some(postings) = index.terms.get(variant) else {
            // Pure prefixes from the Levenshtein tree have no postings.
            continue;
        };
        for posting in postings {
            let highlights: Vec<(usize, usize)> = posting
                .positions
                .iter()
                .map(|rp| (rp.char_position, rp.char_position + variant.len()))
                .collect();
            per_doc
                .entry(posting.doc_id)
                .and_modify(|c| {
                    c.edit_distance = c.edit_distance.min(*distance);
                    c.last_occurrences.extend_from_slice(&posting.positions);
                    c.highlights.extend_from_slice(&highlights);
                })
                .or_insert_with(|| {
                    Candidate::new(
                        posting.doc_id,
                        *distance,
                        posting.positions.clone(),
                        highlights.clone(),
                    )
                });
        }
    }

    let mut candidates: Vec<Candidate> = per_doc.into_values().collect();
    for candidate in &mut candidates {
        // The merge walks occurrences in ascending word order; variants
        // arrive interleaved, so restore the order (duplicates are fine).
        candidate
            .last_occurrences
            .sort_unstable_by_key(|p| p.word_position);
    }
    candidates
}

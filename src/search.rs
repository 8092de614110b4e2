// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The phrase engine and the public search API.
//!
//! A query is tokenized with the index's own strategy, each token resolves
//! to doc-id-ordered candidates (exact lookup in strict mode, BK-tree/trie
//! expansion in fuzzy mode), and the per-token candidate lists fold left to
//! right through the proximity merge. What survives the fold matched every
//! query term.
//!
//! Ranking sorts hits by `(edit_distance, min_dist, rendered)` ascending.
//! The rendered-string component settles ties the way the interactive
//! front-end has always displayed them: among equally scored hits, one
//! whose highlight opens at the very start of the record leads with an
//! escape byte and sorts first.
//!
//! In fuzzy mode the last query token is treated as a live prefix when the
//! query does not end in a separator - completion-as-you-type falls out of
//! the expander's prefix branches.

use crate::expand::find_fuzzy;
use crate::highlight::{merge_ranges, render};
use crate::index::Index;
use crate::proximity::merge;
use crate::types::{Candidate, SearchHit};

/// Default result budget for one-shot queries.
pub const DEFAULT_TOP_N: usize = 10;

impl Index {
    /// Strict phrase search with the default budget: every query term must
    /// match exactly.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        self.search_ranked(query, DEFAULT_TOP_N, false)
    }

    /// Phrase search with explicit budget and matching mode.
    ///
    /// Hits come back ranked best-first and truncated to `top_n`. The index
    /// is never mutated; searching is idempotent.
    pub fn search_ranked(&self, query: &str, top_n: usize, fuzzy: bool) -> Vec<SearchHit> {
        let mut hits: Vec<SearchHit> = self
            .find_phrase(query, fuzzy)
            .iter()
            .map(|candidate| self.render_candidate(candidate))
            .collect();
        hits.sort_unstable();
        hits.truncate(top_n);
        hits
    }

    /// Resolve a phrase to its candidate set: one candidate per document
    /// containing (a variant of) every query term.
    fn find_phrase(&self, query: &str, fuzzy: bool) -> Vec<Candidate> {
        let surfaces = self.tokenizer.split(query);
        if surfaces.is_empty() {
            return Vec::new();
        }
        // No trailing separator means the final token is still being typed.
        let is_last_prefix = surfaces.last().is_some_and(|last| query.ends_with(last));
        let last = surfaces.len() - 1;

        let mut candidates: Option<Vec<Candidate>> = None;
        for (i, surface) in surfaces.iter().enumerate() {
            let term = surface.to_lowercase();
            let found = if fuzzy {
                find_fuzzy(self, &term, is_last_prefix && i == last)
            } else {
                self.find_one(&term)
            };
            candidates = Some(match candidates {
                None => found,
                Some(folded) => merge(&folded, &found),
            });
        }
        candidates.unwrap_or_default()
    }

    fn render_candidate(&self, candidate: &Candidate) -> SearchHit {
        let record = &self.records[candidate.doc_id];
        let ranges = merge_ranges(candidate.highlights.clone());
        SearchHit {
            edit_distance: candidate.edit_distance,
            min_dist: candidate.min_dist,
            rendered: render(record, &ranges),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{demo_records, demo_records_small, plain_text};

    #[test]
    fn test_empty_query_yields_nothing() {
        let index = Index::new(demo_records_small());
        assert!(index.search("").is_empty());
        assert!(index.search("   ").is_empty());
        assert!(index.search_ranked(",.!", 10, true).is_empty());
    }

    #[test]
    fn test_unknown_term_empties_the_phrase() {
        let index = Index::new(demo_records_small());
        assert!(index.search("auto neznamo").is_empty());
    }

    #[test]
    fn test_single_term_strict_hits_have_zero_scores() {
        let index = Index::new(demo_records_small());
        let hits = index.search("auto");
        assert!(!hits.is_empty());
        for hit in &hits {
            assert_eq!(hit.edit_distance, 0);
        }
    }

    #[test]
    fn test_strict_phrase_requires_all_terms() {
        let index = Index::new(demo_records_small());
        let hits = index.search_ranked("na po", usize::MAX, false);
        for hit in &hits {
            let text = plain_text(&hit.rendered);
            assert!(text.contains("na"));
            assert!(text.contains("po"));
        }
    }

    #[test]
    fn test_query_case_folds_like_the_corpus() {
        let index = Index::new(demo_records_small());
        let upper = index.search("AUTO");
        let lower = index.search("auto");
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_top_n_truncates_after_ranking() {
        let index = Index::new(demo_records());
        let all = index.search_ranked("se", usize::MAX, false);
        let capped = index.search_ranked("se", 3, false);
        assert!(all.len() > 3);
        assert_eq!(capped.len(), 3);
        assert_eq!(capped, all[..3].to_vec());
    }

    #[test]
    fn test_ranking_is_ascending_by_key() {
        let index = Index::new(demo_records());
        let hits = index.search_ranked("seste hodine", usize::MAX, true);
        for pair in hits.windows(2) {
            assert!(
                (pair[0].edit_distance, pair[0].min_dist) <= (pair[1].edit_distance, pair[1].min_dist)
            );
        }
    }

    #[test]
    fn test_search_is_idempotent() {
        let index = Index::new(demo_records());
        let first = index.search_ranked("taky mi", 10, true);
        let second = index.search_ranked("taky mi", 10, true);
        assert_eq!(first, second);
    }

    #[test]
    fn test_trailing_separator_disables_prefix_completion() {
        let index = Index::new(demo_records_small());
        // "aut" completes to auto as a live prefix, but "aut " is a complete
        // token and only fuzzy-matches whole words near it.
        let live = index.search_ranked("aut", 10, true);
        assert!(!live.is_empty());
        let complete = index.search_ranked("aut ", 10, true);
        for hit in &complete {
            assert!(hit.edit_distance > 0, "complete token cannot match at 0");
        }
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the phrase index.
//!
//! | Type             | Purpose                                          |
//! |------------------|--------------------------------------------------|
//! | `RecordPosition` | One token occurrence: byte offset + word ordinal |
//! | `Posting`        | All occurrences of one term in one record        |
//! | `PostingList`    | Per-term postings, doc-id ascending              |
//! | `Candidate`      | Per-query accumulator built during the merge     |
//! | `SearchHit`      | What callers get back: scores + rendered record  |
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Posting**: `positions` is ascending by `word_position`, and
//!   `char_position` is monotone with it. Both fall out of the tokenizer
//!   walking the record left to right.
//! - **PostingList**: `doc_id` strictly ascending. Records are indexed in
//!   doc-id order, so this holds by construction and is never re-sorted.
//!   The two-pointer merge in `proximity` is the consumer of this ordering.
//! - **Candidate**: `last_occurrences` always holds the positions of the
//!   most recently merged query term (the right edge of the phrase).

/// One occurrence of a token within a record.
///
/// `char_position` is the byte offset of the token's first character in the
/// original (un-folded) record; `word_position` is the token's 0-based
/// ordinal among the record's tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecordPosition {
    pub char_position: usize,
    pub word_position: usize,
}

impl RecordPosition {
    pub fn new(char_position: usize, word_position: usize) -> Self {
        RecordPosition {
            char_position,
            word_position,
        }
    }
}

/// All occurrences of a single normalized term in one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: usize,
    /// Ascending by `word_position`.
    pub positions: Vec<RecordPosition>,
}

/// Per-term posting sequence, strictly ascending by `doc_id`.
pub type PostingList = Vec<Posting>;

/// A half-open `[start, end)` byte range of a record marked for emphasis.
pub type HighlightRange = (usize, usize);

/// Accumulator produced while resolving a phrase query.
///
/// Built per matching document and folded left to right across the query
/// terms; discarded after rendering.
#[derive(Debug, Clone)]
pub struct Candidate {
    pub doc_id: usize,
    /// Running sum over query terms of the minimum edit distance at which
    /// each term matched in this document. Zero in strict mode.
    pub edit_distance: usize,
    /// Positions of the most recently merged query term.
    pub last_occurrences: Vec<RecordPosition>,
    /// Running proximity penalty, summed across adjacent term pairs.
    pub min_dist: usize,
    /// Unmerged highlight ranges, possibly overlapping.
    pub highlights: Vec<HighlightRange>,
}

impl Candidate {
    /// A fresh candidate for a single matched term (no merges yet).
    pub fn new(
        doc_id: usize,
        edit_distance: usize,
        occurrences: Vec<RecordPosition>,
        highlights: Vec<HighlightRange>,
    ) -> Self {
        Candidate {
            doc_id,
            edit_distance,
            last_occurrences: occurrences,
            min_dist: 0,
            highlights,
        }
    }
}

/// One ranked search result.
///
/// `rendered` is the record text with matched ranges wrapped in the yellow
/// background ANSI pair; see `highlight`. The derived ordering is the
/// ranking key: `(edit_distance, min_dist, rendered)` ascending.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchHit {
    pub edit_distance: usize,
    pub min_dist: usize,
    pub rendered: String,
}

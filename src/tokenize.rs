// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization strategies and token offset assignment.
//!
//! A `Tokenizer` only decides where tokens begin and end; everything
//! downstream (offset assignment, case folding, posting construction) is
//! shared. The strategy is injected at index construction, and queries are
//! tokenized with the same strategy as the corpus - a query term that the
//! corpus tokenizer would have split differently can never match otherwise.
//!
//! `token_occurrences` re-walks the original record to pin each token to
//! the byte offset of its first occurrence at or after the cursor, then
//! case-folds the token for indexing. Offsets always refer to the original,
//! un-folded record.

use crate::types::RecordPosition;

/// Splits a record into surface tokens, in record order.
///
/// Returned slices must be substrings of `record`, non-empty, and
/// non-overlapping left to right; the offset re-walk depends on that.
pub trait Tokenizer {
    fn split<'r>(&self, record: &'r str) -> Vec<&'r str>;
}

/// Default profile: tokens are maximal runs of word characters
/// (alphanumeric or `_`).
#[derive(Debug, Clone, Copy, Default)]
pub struct WordTokenizer;

impl Tokenizer for WordTokenizer {
    fn split<'r>(&self, record: &'r str) -> Vec<&'r str> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;
        for (i, c) in record.char_indices() {
            if c.is_alphanumeric() || c == '_' {
                start.get_or_insert(i);
            } else if let Some(s) = start.take() {
                tokens.push(&record[s..i]);
            }
        }
        if let Some(s) = start {
            tokens.push(&record[s..]);
        }
        tokens
    }
}

/// URL profile: `- _ / . ? + & :` and every other non-alphanumeric
/// character separate tokens, and maximal digit runs are emitted as
/// standalone tokens ("foo2bar" yields "foo", "2", "bar").
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlTokenizer;

impl Tokenizer for UrlTokenizer {
    fn split<'r>(&self, record: &'r str) -> Vec<&'r str> {
        let mut tokens = Vec::new();
        let mut start: Option<usize> = None;
        let mut digit_run = false;
        for (i, c) in record.char_indices() {
            if c.is_alphanumeric() {
                let digit = c.is_numeric();
                match start {
                    None => {
                        start = Some(i);
                        digit_run = digit;
                    }
                    Some(s) if digit != digit_run => {
                        tokens.push(&record[s..i]);
                        start = Some(i);
                        digit_run = digit;
                    }
                    Some(_) => {}
                }
            } else if let Some(s) = start.take() {
                tokens.push(&record[s..i]);
            }
        }
        if let Some(s) = start {
            tokens.push(&record[s..]);
        }
        tokens
    }
}

/// Split `record` and assign each token its byte offset and word ordinal,
/// case-folding the token afterwards.
pub fn token_occurrences(
    record: &str,
    tokenizer: &dyn Tokenizer,
) -> Vec<(String, RecordPosition)> {
    let tokens = tokenizer.split(record);
    let mut occurrences = Vec::with_capacity(tokens.len());
    let mut cursor = 0;
    for (ordinal, token) in tokens.into_iter().enumerate() {
        if let Some(found) = record[cursor..].find(token) {
            let at = cursor + found;
            occurrences.push((token.to_lowercase(), RecordPosition::new(at, ordinal)));
            cursor = at + token.len();
        }
    }
    occurrences
}

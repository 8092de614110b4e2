//! Phrase search over a pre-loaded corpus, with word-proximity ranking and
//! live fuzzy completion.
//!
//! Records are short, line-oriented strings indexed once at construction.
//! Queries are phrases: every term must match (exactly, or within a small
//! edit distance in fuzzy mode), and hits rank by how tightly the terms sit
//! together in the record. The last token of a fuzzy query completes as a
//! prefix while it is being typed.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────┐    ┌────────────┐    ┌─────────────┐
//! │ tokenize.rs│───▶│  index.rs  │───▶│  search.rs  │
//! │ (Tokenizer,│    │ (postings, │    │ (phrase,    │
//! │  offsets)  │    │  prefixes) │    │  ranking)   │
//! └────────────┘    └────────────┘    └─────────────┘
//!                        │  │               │
//!              ┌─────────┘  └───────┐       ▼
//!              ▼                    ▼  ┌─────────────┐
//!        ┌──────────┐        ┌─────────┤ highlight.rs│
//!        │ trie.rs  │        │bktree.rs│ (ranges,    │
//!        │ (complete│        │(metrics.│  ANSI)      │
//!        │  prefix) │        │  rs)    │             │
//!        └──────────┘        └─────────┴─────────────┘
//! ```
//!
//! Expansion (`expand.rs`) turns one fuzzy token into `(distance, term)`
//! variants using the BK-trees and the trie; the proximity merge
//! (`proximity.rs`) intersects per-token candidates by doc id and
//! accumulates the positional score.
//!
//! # Usage
//!
//! ```
//! use priblix::Index;
//!
//! let index = Index::new(vec![
//!     "po seste hodine se podivame".to_string(),
//!     "seste hodine se vysralo tezce".to_string(),
//! ]);
//!
//! let hits = index.search("seste hodine");
//! assert_eq!(hits.len(), 2);
//! assert_eq!(hits[0].min_dist, 0);
//! ```

// Module declarations
mod bktree;
mod expand;
mod highlight;
mod index;
mod metrics;
mod proximity;
mod search;
pub mod testing;
mod tokenize;
mod trie;
mod types;

// Re-exports for public API
pub use bktree::{BkTree, Metric};
pub use highlight::{merge_ranges, render, HIGHLIGHT_OFF, HIGHLIGHT_ON};
pub use index::Index;
pub use metrics::{hamming, levenshtein};
pub use proximity::{merge, pair_dist};
pub use search::DEFAULT_TOP_N;
pub use tokenize::{token_occurrences, Tokenizer, UrlTokenizer, WordTokenizer};
pub use trie::Trie;
pub use types::{Candidate, HighlightRange, Posting, PostingList, RecordPosition, SearchHit};

//! Shared fixtures for the integration suites.

#![allow(dead_code)]

use priblix::testing::{demo_records, demo_records_small};
use priblix::Index;

pub use priblix::testing::{highlighted_ranges, plain_text};

/// Index over the 15-record demo corpus.
pub fn demo_index_small() -> Index {
    Index::new(demo_records_small())
}

/// Index over the full 43-record demo corpus.
pub fn demo_index() -> Index {
    Index::new(demo_records())
}

/// The demo records themselves, for computing expectations.
pub fn records() -> Vec<String> {
    demo_records()
}

pub fn records_small() -> Vec<String> {
    demo_records_small()
}

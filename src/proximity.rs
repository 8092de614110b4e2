// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Positional proximity scoring and the doc-id merge-intersect.
//!
//! `pair_dist` is deliberately a lower bound on the true minimum gap
//! between two occurrence sets, computed in one linear scan instead of the
//! quadratic all-pairs minimum. Reversed phrase order pays a one-unit
//! penalty; in-order adjacency costs nothing. Both behaviors are load
//! bearing for ranking - keep them exactly as they are, the tests pin them.

use crate::types::{Candidate, RecordPosition};

/// Returned when the scan examined no pair at all (an input was empty).
const NO_PAIR: usize = 1337;

/// Minimum word gap between two ascending occurrence sequences, walked with
/// one pointer per side.
///
/// When the left term's occurrence precedes the right term's, the gap is
/// the number of words strictly between them; when the right term comes
/// first, one penalty unit is added for the reversed order. Returns 0 as
/// soon as any examined pair is adjacent in order (or co-located).
pub fn pair_dist(xs: &[RecordPosition], ys: &[RecordPosition]) -> usize {
    let mut d = NO_PAIR;
    let (mut ix, mut iy) = (0, 0);
    while ix < xs.len() && iy < ys.len() {
        let x = xs[ix].word_position;
        let y = ys[iy].word_position;
        let diff = if x < y {
            ix += 1;
            y - x - 1
        } else {
            // Right term precedes left: one penalty unit for reversed order.
            iy += 1;
            x - y
        };

        if diff == 0 {
            return 0;
        }
        if diff < d {
            d = diff;
        }
    }
    d
}

/// Intersect two doc-id-ascending candidate sequences.
///
/// One output candidate per doc id present in both inputs: edit distances
/// sum, the right side's occurrences become the new right edge, highlights
/// concatenate, and the accumulated proximity grows by the pair distance
/// between the two sides' occurrence sets.
pub fn merge(xs: &[Candidate], ys: &[Candidate]) -> Vec<Candidate> {
    let mut merged = Vec::new();
    let (mut ix, mut iy) = (0, 0);
    while ix < xs.len() && iy < ys.len() {
        let (cx, cy) = (&xs[ix], &ys[iy]);
        match cx.doc_id.cmp(&cy.doc_id) {
            std::cmp::Ordering::Less => ix += 1,
            std::cmp::Ordering::Greater => iy += 1,
            std::cmp::Ordering::Equal => {
                let mut highlights = cx.highlights.clone();
                highlights.extend_from_slice(&cy.highlights);
                let mut next = Candidate::new(
                    cx.doc_id,
                    cx.edit_distance + cy.edit_distance,
                    cy.last_occurrences.clone(),
                    highlights,
                );
                next.min_dist = cx.min_dist + pair_dist(&cx.last_occurrences, &cy.last_occurrences);
                merged.push(next);
                ix += 1;
                iy += 1;
            }
        }
    }
    merged
}

//! End-to-end phrase and fuzzy search scenarios over the demo corpora.

mod common;

use common::{demo_index, demo_index_small, plain_text, records};
use priblix::{SearchHit, WordTokenizer, Tokenizer};

fn plain(hit: &SearchHit) -> String {
    plain_text(&hit.rendered)
}

// ============================================================================
// STRICT PHRASE SEARCH
// ============================================================================

#[test]
fn exact_phrase_ranks_tight_matches_first() {
    let index = demo_index_small();
    let hits = index.search("seste hodine");
    assert_eq!(hits.len(), 3);

    assert_eq!(plain(&hits[0]), "seste hodine se vysralo tezce");
    assert_eq!(hits[0].min_dist, 0);

    let texts: Vec<String> = hits.iter().map(plain).collect();
    assert!(texts.contains(&"po seste hodine se podivame".to_string()));
    assert!(texts.contains(&"tak to v seste hodine taky".to_string()));
    for hit in &hits {
        assert_eq!(hit.edit_distance, 0);
        assert_eq!(hit.min_dist, 0);
    }
}

#[test]
fn reversed_phrase_pays_the_order_penalty() {
    let index = demo_index_small();
    let hits = index.search("hodine seste");
    assert_eq!(hits.len(), 3);
    for hit in &hits {
        assert!(
            hit.min_dist > 0,
            "reversed order must score worse: {:?}",
            hit
        );
    }

    // Same three records as the in-order phrase, just penalized.
    let mut texts: Vec<String> = hits.iter().map(plain).collect();
    texts.sort();
    let mut expected = vec![
        "po seste hodine se podivame".to_string(),
        "seste hodine se vysralo tezce".to_string(),
        "tak to v seste hodine taky".to_string(),
    ];
    expected.sort();
    assert_eq!(texts, expected);
}

#[test]
fn non_adjacent_terms_rank_after_closer_pairs() {
    let index = demo_index();
    let hits = index.search_ranked("na po", usize::MAX, false);

    let kravate = hits
        .iter()
        .find(|h| plain(h) == "na kravate jelo auto po mesici")
        .expect("kravate record must match");
    assert_eq!(kravate.min_dist, 3);

    let kravate_rank = hits
        .iter()
        .position(|h| plain(h) == "na kravate jelo auto po mesici")
        .unwrap();
    for (rank, hit) in hits.iter().enumerate() {
        if hit.min_dist < kravate.min_dist {
            assert!(rank < kravate_rank, "tighter match ranked below looser one");
        }
    }
}

#[test]
fn ranking_is_ascending_by_score_pair() {
    let index = demo_index();
    let hits = index.search_ranked("na po", usize::MAX, false);
    for pair in hits.windows(2) {
        assert!(
            (pair[0].edit_distance, pair[0].min_dist)
                <= (pair[1].edit_distance, pair[1].min_dist)
        );
    }
}

// ============================================================================
// FUZZY SEARCH
// ============================================================================

#[test]
fn fuzzy_query_tolerates_typos_in_every_term() {
    let index = demo_index();
    let hits = index.search_ranked("taky i vysralis si", usize::MAX, true);
    assert!(!hits.is_empty());

    // Whatever matched a misspelled "vysralis" must carry its stem.
    assert!(hits.iter().any(|h| plain(h).contains("vysral")));

    // An exact-distance hit would have to contain the literal "taky".
    for hit in &hits {
        if hit.edit_distance == 0 {
            assert!(plain(hit).contains("taky"));
        }
    }
}

#[test]
fn fuzzy_typo_matches_keep_small_edit_distance() {
    let index = demo_index();
    let hits = index.search_ranked("taky i vysralis si", usize::MAX, true);
    for hit in &hits {
        assert!(hit.edit_distance <= 6, "implausible distance: {:?}", hit);
    }
}

#[test]
fn live_prefix_completes_at_distance_zero() {
    let index = demo_index();
    let hits = index.search_ranked("aut", usize::MAX, true);

    // Every record holding a word that begins with "aut" must surface, all
    // through the distance-0 trie completion.
    let expected: Vec<String> = records()
        .into_iter()
        .filter(|r| {
            WordTokenizer
                .split(r)
                .iter()
                .any(|w| w.to_lowercase().starts_with("aut"))
        })
        .collect();

    let mut found: Vec<String> = hits.iter().map(plain).collect();
    found.sort();
    let mut expected_sorted = expected.clone();
    expected_sorted.sort();
    assert_eq!(found, expected_sorted);

    for hit in &hits {
        assert_eq!(hit.edit_distance, 0);
    }
}

#[test]
fn trailing_separator_turns_prefix_into_complete_token() {
    let index = demo_index();
    let live: Vec<String> = index
        .search_ranked("aut", usize::MAX, true)
        .iter()
        .map(plain)
        .collect();
    let complete = index.search_ranked("aut ", usize::MAX, true);
    // "aut" is no word of the corpus, so the complete token can only match
    // at a positive distance.
    for hit in &complete {
        assert!(hit.edit_distance > 0);
    }
    assert!(!live.is_empty());
}

#[test]
fn short_prefix_lists_every_completion() {
    let index = demo_index();
    let hits = index.search_ranked("vy", usize::MAX, true);
    for hit in &hits {
        assert_eq!(hit.edit_distance, 0);
        let text = plain(hit);
        assert!(
            WordTokenizer
                .split(&text)
                .iter()
                .any(|w| w.starts_with("vy")),
            "no vy* word in {:?}",
            text
        );
    }
}

// ============================================================================
// HIGHLIGHT INTEGRITY
// ============================================================================

#[test]
fn highlights_are_sorted_disjoint_and_in_bounds() {
    let index = demo_index();
    let queries = [
        ("seste hodine", false),
        ("na po", false),
        ("taky mi", true),
        ("aut", true),
        ("vysral", true),
    ];
    for (query, fuzzy) in queries {
        for hit in index.search_ranked(query, usize::MAX, fuzzy) {
            let text = plain(&hit);
            let ranges = common::highlighted_ranges(&hit.rendered);
            assert!(!ranges.is_empty(), "unhighlighted hit for {:?}", query);
            let mut prev_end = 0;
            for (start, end) in &ranges {
                assert!(start < end);
                assert!(*end <= text.len());
                assert!(*start >= prev_end, "overlap in {:?}", hit.rendered);
                prev_end = *end;
            }
        }
    }
}

#[test]
fn highlights_mark_query_derived_terms() {
    let index = demo_index();
    for (query, fuzzy) in [("seste hodine", false), ("taky mi", true)] {
        for hit in index.search_ranked(query, usize::MAX, fuzzy) {
            let text = plain(&hit);
            let tokens: Vec<String> = WordTokenizer
                .split(&text)
                .iter()
                .map(|t| t.to_lowercase())
                .collect();
            for (start, end) in common::highlighted_ranges(&hit.rendered) {
                let span = text[start..end].to_lowercase();
                assert!(
                    tokens.iter().any(|t| t == &span),
                    "span {:?} is no token of {:?}",
                    span,
                    text
                );
            }
        }
    }
}

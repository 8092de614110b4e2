//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical demo corpora and small helpers so every suite
//! exercises the same records.

#![doc(hidden)]

use crate::highlight::{HIGHLIGHT_OFF, HIGHLIGHT_ON};

/// The 15-record demo corpus (a prefix of [`demo_records`]).
pub fn demo_records_small() -> Vec<String> {
    demo_records().into_iter().take(15).collect()
}

/// The full 43-record demo corpus.
pub fn demo_records() -> Vec<String> {
    [
        "auto jede po silnici",
        "auto se vysralo na silnici",
        "po seste hodine se podivame",
        "podivame se na podivanou",
        "v seste se vysralo",
        "neserte se na sestou",
        "na silnici se sere velmi tezce",
        "auto se tezce neslo",
        "ono se vysralo po seste",
        "na kravate jelo auto po mesici",
        "no to jsem se mohl vysrat a podivanou taky",
        "taky auto jelo srat",
        "neslo se vysrat mimo silnici",
        "tak to v seste hodine taky",
        "seste hodine se vysralo tezce",
        "po mesici tezce vysralo sestou",
        "na sestou se podivame na auto, to bude podivana",
        "ono je to taky ono auto",
        "neslo se mi tezce ze se mi sralo na mesici v seste",
        "to je mesici se pozde jede a jelo taky",
        "vysrat se na to",
        "jelo se mi v seste auto opravit na mesici po nem",
        "kravate se vysralo taky auto",
        "tezce se mi sere po silnici",
        "ono na mesici je auto seste",
        "podivana na mesici je mimo provoz srani",
        "taky jsem tezce vstaval kdyz mi sralo auto",
        "vstavat tezce po ranu a auto u toho",
        "sestou ranu u hospody na kravate po mesici me nasralo",
        "jede na mesici auto",
        "na to bych musel mit taky auto",
        "musel bych tezce nest hodiny mimo seste",
        "hodiny a auto me nasralo kdyz jsem sel po mesici na podivanou",
        "po silnici se spatne sere i jede autem",
        "ono se i podivame v auto mechanikove silnici",
        "taky bych musel vstavat a to by se mi neslo po silnici taky tak lehce",
        "na kravate jsem nasel flek a to me nasralo tak moc, ze z toho byla podivana, ale pozde",
        "jsem byl srat",
        "a ty taky",
        "taky mi to neslo se vysrat, vsichni ze me meli podivanou",
        "auto autem neni sralo srackou",
        "tezce bys sral a ja bych auto tezce nesl k silnici",
        "pak se mi taky vysralo silnici i auto",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Strip the highlight escape pair, leaving the plain record text.
pub fn plain_text(rendered: &str) -> String {
    rendered.replace(HIGHLIGHT_ON, "").replace(HIGHLIGHT_OFF, "")
}

/// Byte ranges wrapped by the highlight pair, measured against the plain
/// record text.
pub fn highlighted_ranges(rendered: &str) -> Vec<(usize, usize)> {
    let mut ranges = Vec::new();
    let mut plain_offset = 0;
    let mut rest = rendered;
    while let Some(open) = rest.find(HIGHLIGHT_ON) {
        plain_offset += open;
        let after_open = &rest[open + HIGHLIGHT_ON.len()..];
        let Some(close) = after_open.find(HIGHLIGHT_OFF) else {
            break;
        };
        ranges.push((plain_offset, plain_offset + close));
        plain_offset += close;
        rest = &after_open[close + HIGHLIGHT_OFF.len()..];
    }
    ranges
}

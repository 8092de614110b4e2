// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! url_index: one-shot strict phrase search over URLs from standard input.
//!
//! ```bash
//! cat access.log | url_index "images 2024"
//! ```
//!
//! Records come in line by line, get indexed with the URL tokenizer (path
//! separators split, digit runs stand alone), and the query runs in strict
//! mode. Output is `score record` per hit; highlights are emitted only when
//! stdout is a terminal.

use std::io::{self, BufRead};

use clap::Parser;

use priblix::{Index, UrlTokenizer, HIGHLIGHT_OFF, HIGHLIGHT_ON};

#[derive(Parser)]
#[command(
    name = "url_index",
    about = "Strict phrase search over URL records from stdin",
    version
)]
struct Cli {
    /// Phrase to search for
    query: String,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };
    if let Err(e) = run(&cli) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let mut records = Vec::new();
    for line in io::stdin().lock().lines() {
        records.push(line.map_err(|e| format!("cannot read stdin: {}", e))?);
    }

    let index = Index::with_tokenizer(records, Box::new(UrlTokenizer));
    let colored = atty::is(atty::Stream::Stdout);

    for hit in index.search(&cli.query) {
        let record = if colored {
            hit.rendered
        } else {
            hit.rendered
                .replace(HIGHLIGHT_ON, "")
                .replace(HIGHLIGHT_OFF, "")
        };
        println!("{} {}", hit.min_dist, record);
    }
    Ok(())
}

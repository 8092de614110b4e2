// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! priblix TUI: re-rank the whole corpus on every keystroke.
//!
//! ```bash
//! priblix corpus.txt
//! ```
//!
//! Keys: `q` quits, backspace edits, anything else extends the query. The
//! empty query lists the head of the corpus; a non-empty query runs a fuzzy
//! phrase search with the last token treated as a live prefix, and results
//! print in reverse rank order so the best hit sits right above the prompt.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use clap::Parser;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use priblix::Index;

mod cli;
use cli::display::{draw_frame, format_hit, CLEAR, PROMPT};
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        let _ = disable_raw_mode();
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let records = read_corpus(&cli.corpus)?;
    let index = Index::new(records);

    let (_cols, term_rows) =
        crossterm::terminal::size().map_err(|e| format!("terminal unavailable: {}", e))?;
    // --limit caps content rows; one extra row is always the prompt.
    let rows = cli
        .limit
        .map_or(term_rows as usize, |limit| limit + 1)
        .max(2);

    print_initial_frame(&index, rows);

    enable_raw_mode().map_err(|e| format!("terminal unavailable: {}", e))?;
    let outcome = event_loop(&index, rows);
    disable_raw_mode().map_err(|e| format!("terminal unavailable: {}", e))?;
    println!();
    outcome
}

/// Read the corpus file, one record per line, trailing newline stripped.
fn read_corpus(path: &str) -> Result<Vec<String>, String> {
    let file = File::open(path).map_err(|e| format!("cannot open {}: {}", path, e))?;
    let mut records = Vec::new();
    for line in BufReader::new(file).lines() {
        records.push(line.map_err(|e| format!("cannot read {}: {}", path, e))?);
    }
    Ok(records)
}

/// The pre-keystroke screen: corpus head, prompt, and the indexing note.
fn print_initial_frame(index: &Index, rows: usize) {
    print!("{}", CLEAR);
    println!("indexed {} records!", index.records().len());
    let visible = rows.saturating_sub(2);
    for record in index.records().iter().take(visible) {
        println!("{}", record);
    }
    print!("{} ", PROMPT);
    let _ = io::stdout().flush();
}

fn event_loop(index: &Index, rows: usize) -> Result<(), String> {
    let mut out = io::stdout();
    let mut rows = rows;
    let mut query = String::new();

    loop {
        match event::read().map_err(|e| format!("terminal unavailable: {}", e))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Backspace => {
                    query.pop();
                }
                KeyCode::Char(c) => query.push(c),
                _ => continue,
            },
            Event::Resize(_, new_rows) => rows = new_rows as usize,
            _ => continue,
        }

        redraw(index, &query, rows, &mut out).map_err(|e| format!("cannot draw: {}", e))?;
    }
}

fn redraw(index: &Index, query: &str, rows: usize, out: &mut impl Write) -> io::Result<()> {
    let visible = rows.saturating_sub(1);
    let lines: Vec<String> = if query.is_empty() {
        index.records().iter().take(visible).cloned().collect()
    } else {
        let hits = index.search_ranked(query, visible.saturating_sub(1), true);
        // Best hit last, adjacent to the prompt.
        hits.iter().rev().map(format_hit).collect()
    };
    draw_frame(out, &lines, rows, query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn test_read_corpus_strips_newlines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "auto jede po silnici").unwrap();
        writeln!(file, "po seste hodine se podivame").unwrap();
        write!(file, "seste hodine se vysralo tezce").unwrap();
        file.flush().unwrap();

        let records = read_corpus(file.path().to_str().unwrap()).unwrap();
        assert_eq!(
            records,
            vec![
                "auto jede po silnici",
                "po seste hodine se podivame",
                "seste hodine se vysralo tezce",
            ]
        );
    }

    #[test]
    fn test_read_corpus_missing_file_is_an_error() {
        let err = read_corpus("/nonexistent/corpus.txt").unwrap_err();
        assert!(err.contains("cannot open"));
    }

    #[test]
    fn test_redraw_reverses_ranked_hits() {
        let index = Index::new(vec![
            "po seste hodine se podivame".to_string(),
            "seste hodine se vysralo tezce".to_string(),
        ]);
        let mut out = Vec::new();
        redraw(&index, "seste hodine", 10, &mut out).unwrap();
        let frame = String::from_utf8(out).unwrap();
        // Both hits score (0, 0); the record highlighted from byte 0 ranks
        // first and therefore prints last, right above the prompt.
        let vysralo = frame.find("vysralo").unwrap();
        let podivame = frame.find("podivame").unwrap();
        assert!(podivame < vysralo);
        assert!(frame.trim_end().ends_with(">> seste hodine"));
    }
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal frame rendering for the priblix TUI.
//!
//! The display is one full-screen frame per keystroke: clear, pad with
//! blank lines so content sits bottom-aligned, print the content rows top
//! to bottom, and finish with the prompt on the last line. Callers decide
//! what the content rows are (corpus listing or reversed search results);
//! this module only knows how to put rows on a raw-mode screen.

use std::io::{self, Write};

use priblix::SearchHit;

/// Clear the screen and home the cursor.
pub const CLEAR: &str = "\x1b[2J\x1b[H";

/// The prompt prefix shown on the bottom line.
pub const PROMPT: &str = ">>";

/// One result row: `edit_distance  min_dist  highlighted_record`.
pub fn format_hit(hit: &SearchHit) -> String {
    format!("{} {} {}", hit.edit_distance, hit.min_dist, hit.rendered)
}

/// Draw one frame: clear, pad, rows, prompt. Raw-mode line endings.
///
/// `rows` is the terminal height; the bottom line is reserved for the
/// prompt and at most `rows - 1` content lines are shown.
pub fn draw_frame(out: &mut impl Write, lines: &[String], rows: usize, query: &str) -> io::Result<()> {
    write!(out, "{}", CLEAR)?;
    let visible = rows.saturating_sub(1);
    let shown = &lines[..lines.len().min(visible)];
    for _ in shown.len()..visible {
        write!(out, "\r\n")?;
    }
    for line in shown {
        write!(out, "{}\r\n", line)?;
    }
    write!(out, "{} {}", PROMPT, query)?;
    out.flush()
}

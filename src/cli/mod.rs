// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the priblix terminal UI.
//!
//! One positional argument: the corpus file, one record per line. The whole
//! corpus is indexed up front and re-ranked on every keystroke, so there is
//! no search subcommand - the query lives on the prompt line.

pub mod display;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "priblix",
    about = "Live fuzzy phrase search over a line-oriented corpus",
    version
)]
pub struct Cli {
    /// Path to the corpus file, one record per line
    pub corpus: String,

    /// Cap displayed rows instead of filling the terminal height
    #[arg(short, long)]
    pub limit: Option<usize>,
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definition for the `dawglev` command-line interface.
//!
//! A single flat command: give it a tolerance, a query, and a dictionary
//! (either as trailing positional words or via `--dict-file`), and it
//! prints every dictionary word within that edit distance of the query.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "dawglev",
    about = "Approximate dictionary lookup via a DAWG and a universal Levenshtein automaton",
    version
)]
pub struct Cli {
    /// Maximum edit distance to tolerate.
    #[arg(short, long, value_name = "N")]
    pub tolerance: u8,

    /// The word to look up.
    pub query: String,

    /// Dictionary words, given directly on the command line.
    pub dict_words: Vec<String>,

    /// Read the dictionary from a whitespace-separated file instead of (or
    /// in addition to) `dict_words`.
    #[arg(long, value_name = "PATH")]
    pub dict_file: Option<PathBuf>,
}

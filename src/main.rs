// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! `dawglev` CLI: approximate dictionary lookup.
//!
//! ```bash
//! # Dictionary given directly on the command line
//! dawglev --tolerance 1 helo hello help world
//!
//! # Dictionary read from a file
//! dawglev -t 2 kitten --dict-file wordlist.txt
//! ```

use std::collections::BTreeSet;
use std::process::ExitCode;

use clap::Parser;

mod cli;
use cli::Cli;

use dawglev::{ingest_file, search, Dawg};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut words: BTreeSet<String> = cli.dict_words.into_iter().collect();
    if let Some(path) = &cli.dict_file {
        match ingest_file(path) {
            Ok(from_file) => words.extend(from_file),
            Err(e) => {
                eprintln!("❌ failed to read {}: {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        }
    }

    let dawg = match Dawg::build(words) {
        Ok(dawg) => dawg,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    let matches = match search(&cli.query, cli.tolerance, &dawg) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("❌ {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut found_any = false;
    for word in matches {
        found_any = true;
        println!("{word}");
    }

    if !found_any {
        eprintln!("no matches within {} edits of {:?}", cli.tolerance, cli.query);
    }

    ExitCode::SUCCESS
}
